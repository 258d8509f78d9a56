use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{
        Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
    },
};

use crate::app::{App, Form, FormRow, InputMode, Screen, POSITIONS, SHIFTS};
use crate::chat::Role;
use crate::content::{
    ADDRESS, APP_NAME, EMAIL, GIFT_CARD_URL, HOURS, MENU, PHONE_PRIMARY, PHONE_SECONDARY,
    REVIEWS, SUB_TAGLINE, TAGLINE, Tag,
};
use crate::reservations::MAX_ONLINE_PARTY;

pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();

    // Main layout: header, body, footer
    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(app, frame, header_area);

    match app.screen {
        Screen::Home => render_home(app, frame, body_area),
        Screen::Menu => render_menu(app, frame, body_area),
        Screen::Reservations => render_reservations(app, frame, body_area),
        Screen::Join => render_join(app, frame, body_area),
        Screen::About => render_about(app, frame, body_area),
        Screen::GiftCards => render_gift_cards(frame, body_area),
        Screen::BetaTasting => render_beta_tasting(app, frame, body_area),
        Screen::Therapist => render_therapist(app, frame, body_area),
    }

    render_footer(app, frame, footer_area);

    if app.notice.is_some() {
        render_notice(app, frame, area);
    }
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", APP_NAME),
            Style::default().fg(Color::Cyan).bold(),
        ),
        Span::raw(" "),
    ];

    for (i, screen) in Screen::ALL.iter().enumerate() {
        let style = if *screen == app.screen {
            Style::default().bg(Color::Cyan).fg(Color::Black).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {}:{} ", i + 1, screen.title()), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let mode_style = match app.input_mode {
        InputMode::Normal => Style::default().bg(Color::Blue).fg(Color::White),
        InputMode::Editing => Style::default().bg(Color::Yellow).fg(Color::Black),
    };
    let mode_text = match app.input_mode {
        InputMode::Normal => " NORMAL ",
        InputMode::Editing => " EDITING ",
    };

    let key_style = Style::default().bg(Color::DarkGray).fg(Color::White);
    let label_style = Style::default().bg(Color::Black).fg(Color::White);

    let hints: Vec<Span> = match (app.screen, app.input_mode) {
        (Screen::Therapist, InputMode::Normal) => vec![
            Span::styled(" i ", key_style),
            Span::styled(" type ", label_style),
            Span::styled(" j/k ", key_style),
            Span::styled(" scroll ", label_style),
            Span::styled(" 1-8 ", key_style),
            Span::styled(" screens ", label_style),
            Span::styled(" q ", key_style),
            Span::styled(" quit ", label_style),
        ],
        (Screen::Therapist, InputMode::Editing) => vec![
            Span::styled(" Enter ", key_style),
            Span::styled(" send ", label_style),
            Span::styled(" Esc ", key_style),
            Span::styled(" done ", label_style),
        ],
        (Screen::Menu, _) => vec![
            Span::styled(" j/k ", key_style),
            Span::styled(" scroll ", label_style),
            Span::styled(" [/] ", key_style),
            Span::styled(" category ", label_style),
            Span::styled(" g/G ", key_style),
            Span::styled(" top/bottom ", label_style),
            Span::styled(" q ", key_style),
            Span::styled(" quit ", label_style),
        ],
        (Screen::Reservations | Screen::Join | Screen::BetaTasting, InputMode::Normal) => vec![
            Span::styled(" j/k ", key_style),
            Span::styled(" field ", label_style),
            Span::styled(" Enter/Space ", key_style),
            Span::styled(" edit/toggle ", label_style),
            Span::styled(" h/l ", key_style),
            Span::styled(" choose ", label_style),
        ],
        (_, InputMode::Editing) => vec![
            Span::styled(" Enter/Esc ", key_style),
            Span::styled(" done ", label_style),
        ],
        (Screen::GiftCards, _) => vec![
            Span::styled(" Enter ", key_style),
            Span::styled(" open store ", label_style),
            Span::styled(" 1-8 ", key_style),
            Span::styled(" screens ", label_style),
        ],
        _ => vec![
            Span::styled(" j/k ", key_style),
            Span::styled(" scroll ", label_style),
            Span::styled(" Tab ", key_style),
            Span::styled(" next screen ", label_style),
            Span::styled(" q ", key_style),
            Span::styled(" quit ", label_style),
        ],
    };

    let mut spans = vec![Span::styled(mode_text, mode_style), Span::raw(" ")];
    spans.extend(hints);
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_home(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Welcome ");

    let mut lines: Vec<Line> = vec![
        Line::default(),
        Line::from(Span::styled(
            TAGLINE,
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            SUB_TAGLINE,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
        )),
        Line::default(),
        Line::from(ADDRESS),
        Line::from(format!("{} | {}", PHONE_PRIMARY, PHONE_SECONDARY)),
        Line::from(HOURS),
        Line::default(),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("r", Style::default().fg(Color::Green).bold()),
            Span::raw(" to book a table, "),
            Span::styled("m", Style::default().fg(Color::Green).bold()),
            Span::raw(" for the menu, or "),
            Span::styled("8", Style::default().fg(Color::Green).bold()),
            Span::raw(" to talk to the Digital Social Therapist."),
        ]),
        Line::default(),
        Line::from(Span::styled(
            "WHAT OUR GUESTS SAY",
            Style::default().fg(Color::Magenta).bold(),
        )),
        Line::default(),
    ];

    for review in REVIEWS {
        lines.push(Line::from(vec![
            Span::styled(
                "*".repeat(review.rating as usize),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(" "),
            Span::styled(review.author, Style::default().bold()),
            Span::styled(
                format!(" ({}, {})", review.source, review.relative_time),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(review.text));
        lines.push(Line::default());
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true })
        .scroll((app.home_scroll, 0));
    frame.render_widget(paragraph, area);
}

fn tag_span(tag: &Tag) -> Span<'static> {
    match tag {
        Tag::Spicy => Span::styled(" [spicy]", Style::default().fg(Color::Red)),
        Tag::Vegetarian => Span::styled(" [veg]", Style::default().fg(Color::Green)),
    }
}

fn render_menu(app: &mut App, frame: &mut Frame, area: Rect) {
    let current_title = MENU
        .get(app.menu_category)
        .map(|c| c.title)
        .unwrap_or_default();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" Eats & Drinks - {} ", current_title));

    let mut lines: Vec<Line> = Vec::new();
    let mut offsets: Vec<u16> = Vec::new();

    for category in MENU {
        offsets.push(lines.len() as u16);
        lines.push(Line::from(Span::styled(
            category.title,
            Style::default().fg(Color::Cyan).bold(),
        )));
        if let Some(note) = category.note {
            lines.push(Line::from(Span::styled(
                note,
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )));
        }
        lines.push(Line::default());

        for item in category.items {
            let mut spans = vec![
                Span::styled(item.name, Style::default().bold()),
                Span::raw("  "),
                Span::styled(item.price, Style::default().fg(Color::Yellow)),
            ];
            spans.extend(item.tags.iter().map(tag_span));
            lines.push(Line::from(spans));
            if !item.description.is_empty() {
                lines.push(Line::from(Span::raw(item.description)));
            }
            lines.push(Line::default());
        }
    }

    app.menu_offsets = offsets;
    app.menu_total_lines = lines.len() as u16;
    app.menu_height = area.height.saturating_sub(2);

    // Track which category the viewport is in for the block title
    app.menu_category = app
        .menu_offsets
        .iter()
        .rposition(|&offset| offset <= app.menu_scroll)
        .unwrap_or(0);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true })
        .scroll((app.menu_scroll, 0));
    frame.render_widget(paragraph, area);

    if app.menu_total_lines > app.menu_height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight);
        let mut state = ScrollbarState::new(
            app.menu_total_lines.saturating_sub(app.menu_height) as usize,
        )
        .position(app.menu_scroll as usize);
        frame.render_stateful_widget(scrollbar, area, &mut state);
    }
}

fn form_lines<'a>(form: &'a Form, editing: bool) -> Vec<Line<'a>> {
    let mut lines: Vec<Line> = Vec::new();

    for (i, row) in form.rows.iter().enumerate() {
        let selected = i == form.selected;

        // Section breaks in the application form
        if let FormRow::Check(c) = row {
            if c.label == POSITIONS[0] {
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(
                    "Position(s) applying for:",
                    Style::default().fg(Color::Magenta).bold(),
                )));
            } else if c.label == SHIFTS[0] {
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(
                    "Shift availability:",
                    Style::default().fg(Color::Magenta).bold(),
                )));
            }
        }

        let row_style = if selected {
            Style::default().bg(Color::Blue).fg(Color::White).bold()
        } else {
            Style::default()
        };
        let marker = if selected { "> " } else { "  " };

        let line = match row {
            FormRow::Text(field) => {
                let required = if field.required { "*" } else { "" };
                let mut value = field.value.clone();
                if selected && editing {
                    value.push('_');
                }
                Line::from(vec![
                    Span::styled(format!("{marker}{}{required}: ", field.label), row_style),
                    Span::styled(value, Style::default().fg(Color::Cyan)),
                ])
            }
            FormRow::Check(checkbox) => {
                let mark = if checkbox.checked { "[x]" } else { "[ ]" };
                Line::from(Span::styled(
                    format!("{marker}{mark} {}", checkbox.label),
                    row_style,
                ))
            }
            FormRow::Choice(choice) => Line::from(vec![
                Span::styled(format!("{marker}{}: ", choice.label), row_style),
                Span::styled(
                    format!("< {} >", choice.value()),
                    Style::default().fg(Color::Yellow),
                ),
            ]),
            FormRow::Submit(label) => Line::from(Span::styled(
                format!("{marker}[ {label} ]"),
                if selected {
                    Style::default().bg(Color::Green).fg(Color::Black).bold()
                } else {
                    Style::default().fg(Color::Green)
                },
            )),
        };
        lines.push(line);
    }

    lines
}

fn render_reservations(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Book Your Small Group Appointment ");

    let mut lines = vec![
        Line::from("Reserve a table through our booking partner; your browser does the rest."),
        Line::from(Span::styled(
            format!(
                "Parties larger than {} - call us at {} and we'll set you up.",
                MAX_ONLINE_PARTY, PHONE_PRIMARY
            ),
            Style::default().fg(Color::DarkGray),
        )),
        Line::default(),
    ];
    lines.extend(form_lines(
        &app.reservation,
        app.input_mode == InputMode::Editing,
    ));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_join(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Join Our Team ");

    let mut lines = vec![
        Line::from("We're always looking for fresh faces. Fields marked * are required."),
        Line::default(),
    ];
    lines.extend(form_lines(&app.join, app.input_mode == InputMode::Editing));

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn render_about(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" About CSH ");

    let lines: Vec<Line> = vec![
        Line::default(),
        Line::from(Span::styled(
            "OUR STORY",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::default(),
        Line::from(
            "Colton's Social House is Clovis' answer to the age of eating alone with your \
             phone. We built a place where the food is made from scratch, the cocktails are \
             crafted with intent, and the staff double as your social therapists.",
        ),
        Line::default(),
        Line::from(
            "Every plate is an excuse to put the screen down and talk to the person across \
             the table. Eat fresh. Drink craft. Be social.",
        ),
        Line::default(),
        Line::from(Span::styled(
            "FIND US",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::default(),
        Line::from(ADDRESS),
        Line::from(format!("{} | {}", PHONE_PRIMARY, PHONE_SECONDARY)),
        Line::from(EMAIL),
        Line::from(HOURS),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true })
        .scroll((app.about_scroll, 0));
    frame.render_widget(paragraph, area);
}

fn render_gift_cards(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Gift Cards ");

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "GIVE THE GIFT OF SOCIAL THERAPY",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::default(),
        Line::from("Gift cards are sold through our online store:"),
        Line::from(Span::styled(
            GIFT_CARD_URL,
            Style::default().fg(Color::Yellow),
        )),
        Line::default(),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("Enter", Style::default().fg(Color::Green).bold()),
            Span::raw(" to open the store in your browser."),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn render_beta_tasting(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Beta-Tasting Feedback ");

    let mut lines = vec![
        Line::from("Tried something new off the test menu? Tell us how it landed."),
        Line::default(),
    ];
    lines.extend(form_lines(
        &app.feedback,
        app.input_mode == InputMode::Editing,
    ));

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn render_therapist(app: &mut App, frame: &mut Frame, area: Rect) {
    let [chat_area, input_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).areas(area);

    // Store chat area dimensions for scroll calculations (inner size minus borders)
    app.chat_height = chat_area.height.saturating_sub(2);
    app.chat_width = chat_area.width.saturating_sub(2);

    let chat_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Digital Social Therapist ");

    let mut lines: Vec<Line> = Vec::new();
    for msg in app.conversation.messages() {
        match msg.role {
            Role::Guest => {
                lines.push(Line::from(Span::styled(
                    "You:",
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )));
            }
            Role::Therapist => {
                lines.push(Line::from(Span::styled(
                    "Therapist:",
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                )));
            }
        }
        for line in msg.text.lines() {
            lines.push(Line::from(line));
        }
        lines.push(Line::default());
    }

    if app.conversation.is_pending() {
        lines.push(Line::from(Span::styled(
            "Therapist:",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
        // Animated ellipsis: cycles through ".", "..", "..."
        let dots = ".".repeat((app.animation_frame as usize) + 1);
        lines.push(Line::from(Span::styled(
            format!("Thinking{}", dots),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )));
    }

    let chat = Paragraph::new(Text::from(lines))
        .block(chat_block)
        .wrap(Wrap { trim: true })
        .scroll((app.chat_scroll, 0));
    frame.render_widget(chat, chat_area);

    let input_border_color = if app.input_mode == InputMode::Editing {
        Color::Yellow
    } else {
        Color::DarkGray
    };
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(input_border_color))
        .title(" Talk to me (i to type, Enter to send) ");

    // Horizontal scrolling keeps the cursor visible in a narrow input
    let inner_width = input_area.width.saturating_sub(2) as usize;
    let cursor_pos = app.chat_cursor;
    let scroll_offset = if inner_width == 0 {
        0
    } else if cursor_pos >= inner_width {
        cursor_pos - inner_width + 1
    } else {
        0
    };
    let visible_text: String = app
        .chat_input
        .chars()
        .skip(scroll_offset)
        .take(inner_width)
        .collect();

    let input = Paragraph::new(visible_text)
        .style(Style::default().fg(Color::Cyan))
        .block(input_block);
    frame.render_widget(input, input_area);

    if app.input_mode == InputMode::Editing {
        let cursor_x = (cursor_pos - scroll_offset) as u16;
        frame.set_cursor_position((input_area.x + cursor_x + 1, input_area.y + 1));
    }
}

fn render_notice(app: &App, frame: &mut Frame, area: Rect) {
    let Some(notice) = app.notice.as_deref() else { return };

    let popup_width = 60.min(area.width.saturating_sub(4));
    let inner_width = popup_width.saturating_sub(2).max(1) as usize;
    // Rough wrapped-line count so long URLs don't get clipped
    let text_lines: u16 = notice
        .lines()
        .map(|l| ((l.chars().count().max(1) - 1) / inner_width + 1) as u16)
        .sum();
    let popup_height = (text_lines + 2).min(area.height.saturating_sub(4));

    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Notice (any key to dismiss) ");

    frame.render_widget(
        Paragraph::new(notice).block(block).wrap(Wrap { trim: true }),
        popup_area,
    );
}
