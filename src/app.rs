use tokio::task::JoinHandle;
use tracing::error;

use crate::assistant::{Assistant, TROUBLE_REPLY};
use crate::chat::Conversation;
use crate::reservations::TIME_SLOTS;
use crate::submission::{MailtoNotifier, Notifier};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Menu,
    Reservations,
    Join,
    About,
    GiftCards,
    BetaTasting,
    Therapist,
}

impl Screen {
    pub const ALL: [Screen; 8] = [
        Screen::Home,
        Screen::Menu,
        Screen::Reservations,
        Screen::Join,
        Screen::About,
        Screen::GiftCards,
        Screen::BetaTasting,
        Screen::Therapist,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Menu => "Eats & Drinks",
            Screen::Reservations => "Reservations",
            Screen::Join => "Join Our Team",
            Screen::About => "About CSH",
            Screen::GiftCards => "Gift Cards",
            Screen::BetaTasting => "Beta-Tasting",
            Screen::Therapist => "Social Therapist",
        }
    }

    pub fn index(&self) -> usize {
        Screen::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn next(&self) -> Screen {
        Screen::ALL[(self.index() + 1) % Screen::ALL.len()]
    }

    pub fn prev(&self) -> Screen {
        Screen::ALL[(self.index() + Screen::ALL.len() - 1) % Screen::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

#[derive(Debug, Clone)]
pub struct TextField {
    pub label: &'static str,
    pub value: String,
    pub required: bool,
}

#[derive(Debug, Clone)]
pub struct Checkbox {
    pub label: &'static str,
    pub checked: bool,
}

#[derive(Debug, Clone)]
pub struct ChoiceField {
    pub label: &'static str,
    pub options: &'static [&'static str],
    pub selected: usize,
}

impl ChoiceField {
    pub fn value(&self) -> &'static str {
        self.options[self.selected]
    }
}

/// One selectable row of a form screen. All three form screens (bookings,
/// employment application, beta-tasting feedback) share this shape.
#[derive(Debug, Clone)]
pub enum FormRow {
    Text(TextField),
    Check(Checkbox),
    Choice(ChoiceField),
    Submit(&'static str),
}

#[derive(Debug, Clone)]
pub struct Form {
    pub rows: Vec<FormRow>,
    pub selected: usize,
}

impl Form {
    fn new(rows: Vec<FormRow>) -> Self {
        Self { rows, selected: 0 }
    }

    pub fn select_next(&mut self) {
        if !self.rows.is_empty() {
            self.selected = (self.selected + 1).min(self.rows.len() - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_row_mut(&mut self) -> Option<&mut FormRow> {
        self.rows.get_mut(self.selected)
    }

    pub fn text(&self, label: &str) -> String {
        self.rows
            .iter()
            .find_map(|row| match row {
                FormRow::Text(f) if f.label == label => Some(f.value.clone()),
                _ => None,
            })
            .unwrap_or_default()
    }

    pub fn choice(&self, label: &str) -> String {
        self.rows
            .iter()
            .find_map(|row| match row {
                FormRow::Choice(f) if f.label == label => Some(f.value().to_string()),
                _ => None,
            })
            .unwrap_or_default()
    }

    /// Labels of checked boxes among the given group.
    pub fn checked(&self, group: &[&str]) -> Vec<String> {
        self.rows
            .iter()
            .filter_map(|row| match row {
                FormRow::Check(c) if c.checked && group.contains(&c.label) => {
                    Some(c.label.to_string())
                }
                _ => None,
            })
            .collect()
    }

    pub fn missing_required(&self) -> Option<&'static str> {
        self.rows.iter().find_map(|row| match row {
            FormRow::Text(f) if f.required && f.value.trim().is_empty() => Some(f.label),
            _ => None,
        })
    }
}

pub const POSITIONS: &[&str] = &[
    "Server", "Bartender", "Host", "Barback/Busser",
    "Dishwasher", "Line Cook", "Prep Cook", "Expo",
];

pub const SHIFTS: &[&str] = &["Weekday AM", "Weekday PM", "Weekend AM", "Weekend PM"];

pub const RATINGS: &[&str] = &["Excellent", "Good", "Average", "Poor"];

const PARTY_SIZES: &[&str] = &["1", "2", "3", "4", "5", "6"];

fn reservation_form() -> Form {
    Form::new(vec![
        FormRow::Choice(ChoiceField { label: "Party Size", options: PARTY_SIZES, selected: 1 }),
        FormRow::Text(TextField { label: "Date (YYYY-MM-DD)", value: String::new(), required: true }),
        FormRow::Choice(ChoiceField { label: "Time", options: TIME_SLOTS, selected: 0 }),
        FormRow::Submit("Book Your Small Group Appointment"),
    ])
}

fn join_form() -> Form {
    let mut rows = vec![
        FormRow::Text(TextField { label: "First Name", value: String::new(), required: true }),
        FormRow::Text(TextField { label: "Last Name", value: String::new(), required: true }),
        FormRow::Text(TextField { label: "Phone #", value: String::new(), required: true }),
        FormRow::Text(TextField { label: "Email", value: String::new(), required: true }),
        FormRow::Text(TextField { label: "Work Start Date", value: String::new(), required: true }),
    ];
    rows.extend(POSITIONS.iter().map(|label| {
        FormRow::Check(Checkbox { label, checked: false })
    }));
    rows.extend(SHIFTS.iter().map(|label| {
        FormRow::Check(Checkbox { label, checked: false })
    }));
    rows.push(FormRow::Text(TextField {
        label: "Work Experience",
        value: String::new(),
        required: true,
    }));
    rows.push(FormRow::Text(TextField {
        label: "Social Therapy",
        value: String::new(),
        required: true,
    }));
    rows.push(FormRow::Submit("Apply Now"));
    Form::new(rows)
}

fn feedback_form() -> Form {
    Form::new(vec![
        FormRow::Text(TextField { label: "Name", value: String::new(), required: false }),
        FormRow::Text(TextField { label: "Email Address", value: String::new(), required: false }),
        FormRow::Text(TextField { label: "Date Visited", value: String::new(), required: false }),
        FormRow::Text(TextField { label: "Server Name", value: String::new(), required: false }),
        FormRow::Text(TextField { label: "Items Ordered", value: String::new(), required: true }),
        FormRow::Choice(ChoiceField { label: "How was your meal?", options: RATINGS, selected: 0 }),
        FormRow::Choice(ChoiceField { label: "How was your service?", options: RATINGS, selected: 0 }),
        FormRow::Choice(ChoiceField { label: "Overall Experience?", options: RATINGS, selected: 0 }),
        FormRow::Text(TextField { label: "Ideas for new items", value: String::new(), required: false }),
        FormRow::Submit("Submit Feedback"),
    ])
}

pub struct App {
    // Core state
    pub should_quit: bool,
    pub screen: Screen,
    pub input_mode: InputMode,

    // Social Therapist (chat) state
    pub conversation: Conversation,
    pub chat_input: String,
    pub chat_cursor: usize, // cursor position in chat_input, in chars
    pub chat_scroll: u16,
    pub chat_height: u16,
    pub chat_width: u16,
    pub animation_frame: u8, // 0-2 for ellipsis animation
    pub reply_task: Option<JoinHandle<String>>,
    pub assistant: Assistant,

    // Scrollable content screens
    pub home_scroll: u16,
    pub about_scroll: u16,
    pub menu_scroll: u16,
    pub menu_height: u16,
    pub menu_total_lines: u16,
    pub menu_category: usize,
    pub menu_offsets: Vec<u16>, // first line of each category, updated on render

    // Form screens
    pub reservation: Form,
    pub join: Form,
    pub feedback: Form,

    // Modal confirmation / validation message
    pub notice: Option<String>,

    pub notifier: Box<dyn Notifier>,
}

impl App {
    pub fn new(assistant: Assistant) -> Self {
        Self {
            should_quit: false,
            screen: Screen::Home,
            input_mode: InputMode::Normal,

            conversation: Conversation::new(),
            chat_input: String::new(),
            chat_cursor: 0,
            chat_scroll: 0,
            chat_height: 0,
            chat_width: 0,
            animation_frame: 0,
            reply_task: None,
            assistant,

            home_scroll: 0,
            about_scroll: 0,
            menu_scroll: 0,
            menu_height: 0,
            menu_total_lines: 0,
            menu_category: 0,
            menu_offsets: Vec::new(),

            reservation: reservation_form(),
            join: join_form(),
            feedback: feedback_form(),

            notice: None,

            notifier: Box::new(MailtoNotifier),
        }
    }

    pub fn navigate(&mut self, screen: Screen) {
        self.screen = screen;
        self.input_mode = InputMode::Normal;
        self.notice = None;
    }

    pub fn form_mut(&mut self) -> Option<&mut Form> {
        match self.screen {
            Screen::Reservations => Some(&mut self.reservation),
            Screen::Join => Some(&mut self.join),
            Screen::BetaTasting => Some(&mut self.feedback),
            _ => None,
        }
    }

    /// Advance the thinking-dots frame; a no-op unless a reply is in flight.
    pub fn advance_animation(&mut self) {
        if self.conversation.is_pending() {
            self.animation_frame = (self.animation_frame + 1) % 3;
        }
    }

    /// Routes the input box through the conversation's pending guard and, if
    /// accepted, spawns the gateway request in the background.
    pub fn send_chat_message(&mut self) {
        let user_text = self.chat_input.clone();
        if !self.conversation.accept(&user_text) {
            return;
        }
        self.chat_input.clear();
        self.chat_cursor = 0;
        self.scroll_chat_to_bottom();

        let assistant = self.assistant.clone();
        self.reply_task = Some(tokio::spawn(async move {
            assistant.converse(&user_text).await
        }));
    }

    /// Drains a finished reply task into the transcript. A panicked task
    /// still resolves with the trouble fallback so pending always clears.
    pub async fn poll_reply(&mut self) {
        let finished = self
            .reply_task
            .as_ref()
            .map(|task| task.is_finished())
            .unwrap_or(false);
        if !finished {
            return;
        }
        if let Some(task) = self.reply_task.take() {
            let reply = match task.await {
                Ok(reply) => reply,
                Err(err) => {
                    error!("reply task aborted: {err}");
                    TROUBLE_REPLY.to_string()
                }
            };
            self.conversation.resolve(reply);
            self.scroll_chat_to_bottom();
        }
    }

    /// Scroll the transcript so the newest message (or the thinking
    /// indicator) is visible. Mirrors the render-side wrap estimate.
    pub fn scroll_chat_to_bottom(&mut self) {
        let wrap_width = if self.chat_width > 0 {
            self.chat_width as usize
        } else {
            50
        };

        let mut total_lines: u16 = 0;
        for msg in self.conversation.messages() {
            total_lines += 1; // role line
            for line in msg.text.lines() {
                let char_count = line.chars().count();
                if char_count == 0 {
                    total_lines += 1;
                } else {
                    total_lines += ((char_count / wrap_width) + 1) as u16;
                }
            }
            total_lines += 1; // blank line after message
        }
        if self.conversation.is_pending() {
            total_lines += 2; // role line + "Thinking..."
        }

        let visible_height = if self.chat_height > 0 { self.chat_height } else { 20 };
        self.chat_scroll = total_lines.saturating_sub(visible_height);
    }

    // Menu navigation
    pub fn menu_scroll_down(&mut self, amount: u16) {
        let max = self.menu_total_lines.saturating_sub(self.menu_height);
        self.menu_scroll = self.menu_scroll.saturating_add(amount).min(max);
    }

    pub fn menu_scroll_up(&mut self, amount: u16) {
        self.menu_scroll = self.menu_scroll.saturating_sub(amount);
    }

    pub fn menu_next_category(&mut self) {
        if self.menu_category + 1 < crate::content::MENU.len() {
            self.menu_category += 1;
            self.jump_to_category();
        }
    }

    pub fn menu_prev_category(&mut self) {
        self.menu_category = self.menu_category.saturating_sub(1);
        self.jump_to_category();
    }

    fn jump_to_category(&mut self) {
        if let Some(&offset) = self.menu_offsets.get(self.menu_category) {
            self.menu_scroll = offset;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        App::new(Assistant::new(None, None))
    }

    #[test]
    fn test_screen_cycle_covers_all() {
        let mut screen = Screen::Home;
        for _ in 0..Screen::ALL.len() {
            screen = screen.next();
        }
        assert_eq!(screen, Screen::Home);
        assert_eq!(Screen::Home.prev(), Screen::Therapist);
    }

    #[test]
    fn test_send_chat_message_blank_input_spawns_nothing() {
        let mut app = test_app();
        app.chat_input = "   ".to_string();
        app.send_chat_message();
        assert!(app.reply_task.is_none());
        assert_eq!(app.conversation.messages().len(), 1);
    }

    #[tokio::test]
    async fn test_send_chat_message_guards_second_send() {
        std::env::remove_var(crate::assistant::API_KEY_ENV);
        let mut app = test_app();
        app.chat_input = "What cocktail do you recommend?".to_string();
        app.send_chat_message();
        assert!(app.reply_task.is_some());
        assert!(app.chat_input.is_empty());
        assert_eq!(app.conversation.messages().len(), 2);

        // Second send while pending: transcript unchanged, no new task.
        app.chat_input = "hello?".to_string();
        app.send_chat_message();
        assert_eq!(app.conversation.messages().len(), 2);

        // Without a credential the gateway resolves quickly; drain it.
        while app.reply_task.is_some() {
            app.poll_reply().await;
            tokio::task::yield_now().await;
        }
        assert_eq!(app.conversation.messages().len(), 3);
        assert!(!app.conversation.is_pending());
    }

    #[test]
    fn test_reservation_form_defaults() {
        let app = test_app();
        assert_eq!(app.reservation.choice("Party Size"), "2");
        assert_eq!(app.reservation.choice("Time"), "11:00 AM");
        assert!(app.reservation.missing_required().is_some());
    }

    #[test]
    fn test_join_form_collects_checked_positions() {
        let mut app = test_app();
        for row in &mut app.join.rows {
            if let FormRow::Check(c) = row {
                if c.label == "Server" || c.label == "Weekend PM" {
                    c.checked = true;
                }
            }
        }
        assert_eq!(app.join.checked(POSITIONS), vec!["Server".to_string()]);
        assert_eq!(app.join.checked(SHIFTS), vec!["Weekend PM".to_string()]);
    }

    #[test]
    fn test_form_selection_clamps() {
        let mut form = reservation_form();
        form.select_prev();
        assert_eq!(form.selected, 0);
        for _ in 0..20 {
            form.select_next();
        }
        assert_eq!(form.selected, form.rows.len() - 1);
        assert!(matches!(form.rows[form.selected], FormRow::Submit(_)));
    }
}
