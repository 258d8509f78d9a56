use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::app::{App, FormRow, InputMode, Screen, POSITIONS, SHIFTS};
use crate::reservations;
use crate::submission::{ApplicationSubmission, FeedbackSubmission};
use crate::tui::AppEvent;

pub fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Mouse(mouse) => handle_mouse(app, mouse),
        AppEvent::Resize => {}
        AppEvent::Pulse => app.advance_animation(),
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Ctrl-C quits from anywhere, even mid-edit.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // A notice popup swallows the next keypress to dismiss itself.
    if app.notice.is_some() {
        app.notice = None;
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Editing => handle_editing_key(app, key),
    }
}

fn handle_normal_key(app: &mut App, key: KeyEvent) {
    // Global navigation first
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char(c @ '1'..='8') => {
            let index = c as usize - '1' as usize;
            app.navigate(Screen::ALL[index]);
            return;
        }
        KeyCode::Tab => {
            app.navigate(app.screen.next());
            return;
        }
        KeyCode::BackTab => {
            app.navigate(app.screen.prev());
            return;
        }
        _ => {}
    }

    match app.screen {
        Screen::Home => match key.code {
            KeyCode::Char('j') | KeyCode::Down => app.home_scroll = app.home_scroll.saturating_add(1),
            KeyCode::Char('k') | KeyCode::Up => app.home_scroll = app.home_scroll.saturating_sub(1),
            KeyCode::Char('r') => app.navigate(Screen::Reservations),
            KeyCode::Char('m') => app.navigate(Screen::Menu),
            _ => {}
        },
        Screen::About => match key.code {
            KeyCode::Char('j') | KeyCode::Down => app.about_scroll = app.about_scroll.saturating_add(1),
            KeyCode::Char('k') | KeyCode::Up => app.about_scroll = app.about_scroll.saturating_sub(1),
            _ => {}
        },
        Screen::Menu => match key.code {
            KeyCode::Char('j') | KeyCode::Down => app.menu_scroll_down(1),
            KeyCode::Char('k') | KeyCode::Up => app.menu_scroll_up(1),
            KeyCode::PageDown => app.menu_scroll_down(app.menu_height.max(1)),
            KeyCode::PageUp => app.menu_scroll_up(app.menu_height.max(1)),
            KeyCode::Char(']') => app.menu_next_category(),
            KeyCode::Char('[') => app.menu_prev_category(),
            KeyCode::Char('g') => app.menu_scroll = 0,
            KeyCode::Char('G') => app.menu_scroll_down(u16::MAX),
            _ => {}
        },
        Screen::GiftCards => {
            if key.code == KeyCode::Enter {
                reservations::open_external(crate::content::GIFT_CARD_URL);
                app.notice = Some(format!(
                    "Opening the gift card store in your browser:\n{}",
                    crate::content::GIFT_CARD_URL
                ));
            }
        }
        Screen::Therapist => match key.code {
            KeyCode::Char('i') | KeyCode::Char('a') | KeyCode::Enter => {
                app.input_mode = InputMode::Editing;
            }
            KeyCode::Char('j') | KeyCode::Down => app.chat_scroll = app.chat_scroll.saturating_add(1),
            KeyCode::Char('k') | KeyCode::Up => app.chat_scroll = app.chat_scroll.saturating_sub(1),
            KeyCode::Char('G') => app.scroll_chat_to_bottom(),
            _ => {}
        },
        Screen::Reservations | Screen::Join | Screen::BetaTasting => {
            handle_form_normal_key(app, key)
        }
    }
}

fn handle_form_normal_key(app: &mut App, key: KeyEvent) {
    let Some(form) = app.form_mut() else { return };

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => form.select_next(),
        KeyCode::Char('k') | KeyCode::Up => form.select_prev(),
        KeyCode::Left | KeyCode::Char('h') => {
            if let Some(FormRow::Choice(choice)) = form.selected_row_mut() {
                choice.selected = choice.selected.saturating_sub(1);
            }
        }
        KeyCode::Right | KeyCode::Char('l') => {
            if let Some(FormRow::Choice(choice)) = form.selected_row_mut() {
                if choice.selected + 1 < choice.options.len() {
                    choice.selected += 1;
                }
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            // Row mutations happen in place; edit/submit need the whole app
            // again, so the form borrow must end first.
            enum Activate {
                Edit,
                Submit,
            }
            let activate = match form.selected_row_mut() {
                Some(FormRow::Text(_)) => Some(Activate::Edit),
                Some(FormRow::Check(checkbox)) => {
                    checkbox.checked = !checkbox.checked;
                    None
                }
                Some(FormRow::Choice(choice)) => {
                    choice.selected = (choice.selected + 1) % choice.options.len();
                    None
                }
                Some(FormRow::Submit(_)) => Some(Activate::Submit),
                None => None,
            };
            match activate {
                Some(Activate::Edit) => app.input_mode = InputMode::Editing,
                Some(Activate::Submit) => submit_form(app),
                None => {}
            }
        }
        _ => {}
    }
}

fn handle_editing_key(app: &mut App, key: KeyEvent) {
    if app.screen == Screen::Therapist {
        handle_chat_editing_key(app, key);
        return;
    }

    if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
        app.input_mode = InputMode::Normal;
        return;
    }

    // Form text fields: append/pop editing, no mid-string cursor.
    let Some(form) = app.form_mut() else { return };
    if let Some(FormRow::Text(field)) = form.selected_row_mut() {
        match key.code {
            KeyCode::Char(c) => field.value.push(c),
            KeyCode::Backspace => {
                field.value.pop();
            }
            _ => {}
        }
    }
}

fn handle_chat_editing_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.send_chat_message(),
        KeyCode::Esc => app.input_mode = InputMode::Normal,
        KeyCode::Char(c) => {
            let byte_index = char_to_byte_index(&app.chat_input, app.chat_cursor);
            app.chat_input.insert(byte_index, c);
            app.chat_cursor += 1;
        }
        KeyCode::Backspace => {
            if app.chat_cursor > 0 {
                app.chat_cursor -= 1;
                let byte_index = char_to_byte_index(&app.chat_input, app.chat_cursor);
                app.chat_input.remove(byte_index);
            }
        }
        KeyCode::Delete => {
            if app.chat_cursor < app.chat_input.chars().count() {
                let byte_index = char_to_byte_index(&app.chat_input, app.chat_cursor);
                app.chat_input.remove(byte_index);
            }
        }
        KeyCode::Left => app.chat_cursor = app.chat_cursor.saturating_sub(1),
        KeyCode::Right => {
            if app.chat_cursor < app.chat_input.chars().count() {
                app.chat_cursor += 1;
            }
        }
        KeyCode::Home => app.chat_cursor = 0,
        KeyCode::End => app.chat_cursor = app.chat_input.chars().count(),
        _ => {}
    }
}

/// Convert a char index into a byte index for string mutation.
fn char_to_byte_index(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

fn submit_form(app: &mut App) {
    match app.screen {
        Screen::Reservations => submit_reservation(app),
        Screen::Join => submit_application(app),
        Screen::BetaTasting => submit_feedback(app),
        _ => {}
    }
}

fn submit_reservation(app: &mut App) {
    let party_size: u8 = app.reservation.choice("Party Size").parse().unwrap_or(2);
    let date = app.reservation.text("Date (YYYY-MM-DD)");
    let time = app.reservation.choice("Time");

    match reservations::booking_url(party_size, date.trim(), &time) {
        Ok(url) => {
            reservations::open_external(url.as_str());
            app.notice = Some(format!(
                "Opening your booking in the browser. If nothing happens, visit:\n{url}"
            ));
        }
        Err(err) => {
            app.notice = Some(format!("Could not build your booking: {err}"));
        }
    }
}

fn submit_application(app: &mut App) {
    if let Some(label) = app.join.missing_required() {
        app.notice = Some(format!("Please fill in \"{label}\" before applying."));
        return;
    }

    let submission = ApplicationSubmission {
        first_name: app.join.text("First Name").trim().to_string(),
        last_name: app.join.text("Last Name").trim().to_string(),
        phone: app.join.text("Phone #").trim().to_string(),
        email: app.join.text("Email").trim().to_string(),
        start_date: app.join.text("Work Start Date").trim().to_string(),
        positions: app.join.checked(POSITIONS),
        shifts: app.join.checked(SHIFTS),
        experience: app.join.text("Work Experience"),
        therapy_answer: app.join.text("Social Therapy"),
    };
    app.notice = Some(app.notifier.deliver_application(&submission));
}

fn submit_feedback(app: &mut App) {
    if let Some(label) = app.feedback.missing_required() {
        app.notice = Some(format!("Please fill in \"{label}\" first."));
        return;
    }

    let submission = FeedbackSubmission {
        name: app.feedback.text("Name"),
        email: app.feedback.text("Email Address"),
        date_visited: app.feedback.text("Date Visited"),
        server_name: app.feedback.text("Server Name"),
        items_ordered: app.feedback.text("Items Ordered"),
        meal_rating: app.feedback.choice("How was your meal?"),
        service_rating: app.feedback.choice("How was your service?"),
        overall_rating: app.feedback.choice("Overall Experience?"),
        ideas: app.feedback.text("Ideas for new items"),
    };
    app.notice = Some(app.notifier.deliver_feedback(&submission));
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollDown => match app.screen {
            Screen::Menu => app.menu_scroll_down(3),
            Screen::Therapist => app.chat_scroll = app.chat_scroll.saturating_add(3),
            Screen::Home => app.home_scroll = app.home_scroll.saturating_add(3),
            Screen::About => app.about_scroll = app.about_scroll.saturating_add(3),
            _ => {
                if let Some(form) = app.form_mut() {
                    form.select_next();
                }
            }
        },
        MouseEventKind::ScrollUp => match app.screen {
            Screen::Menu => app.menu_scroll_up(3),
            Screen::Therapist => app.chat_scroll = app.chat_scroll.saturating_sub(3),
            Screen::Home => app.home_scroll = app.home_scroll.saturating_sub(3),
            Screen::About => app.about_scroll = app.about_scroll.saturating_sub(3),
            _ => {
                if let Some(form) = app.form_mut() {
                    form.select_prev();
                }
            }
        },
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::Assistant;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_app() -> App {
        App::new(Assistant::new(None, None))
    }

    #[test]
    fn test_char_to_byte_index() {
        assert_eq!(char_to_byte_index("hello", 0), 0);
        assert_eq!(char_to_byte_index("hello", 3), 3);
        assert_eq!(char_to_byte_index("hello", 10), 5);
        // Multi-byte chars
        assert_eq!(char_to_byte_index("héllo", 2), 3);
    }

    #[test]
    fn test_number_keys_switch_screens() {
        let mut app = test_app();
        handle_key(&mut app, key(KeyCode::Char('8')));
        assert_eq!(app.screen, Screen::Therapist);
        handle_key(&mut app, key(KeyCode::Char('2')));
        assert_eq!(app.screen, Screen::Menu);
        handle_key(&mut app, key(KeyCode::Tab));
        assert_eq!(app.screen, Screen::Reservations);
    }

    #[test]
    fn test_ctrl_c_quits_while_editing() {
        let mut app = test_app();
        app.navigate(Screen::Therapist);
        app.input_mode = InputMode::Editing;
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_chat_editing_inserts_at_cursor() {
        let mut app = test_app();
        app.navigate(Screen::Therapist);
        app.input_mode = InputMode::Editing;

        for c in "wings".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)));
        }
        assert_eq!(app.chat_input, "wings");
        assert_eq!(app.chat_cursor, 5);

        handle_key(&mut app, key(KeyCode::Home));
        handle_key(&mut app, key(KeyCode::Char('?')));
        assert_eq!(app.chat_input, "?wings");

        handle_key(&mut app, key(KeyCode::End));
        handle_key(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.chat_input, "?wing");
    }

    #[test]
    fn test_notice_dismissed_by_any_key() {
        let mut app = test_app();
        app.notice = Some("done".to_string());
        handle_key(&mut app, key(KeyCode::Char('x')));
        assert!(app.notice.is_none());
        // The dismissing key is swallowed
        assert_eq!(app.screen, Screen::Home);
    }

    #[test]
    fn test_form_checkbox_toggles_with_space() {
        let mut app = test_app();
        app.navigate(Screen::Join);
        // Move selection to the first checkbox (after five text fields)
        for _ in 0..5 {
            handle_key(&mut app, key(KeyCode::Char('j')));
        }
        handle_key(&mut app, key(KeyCode::Char(' ')));
        assert_eq!(app.join.checked(POSITIONS), vec!["Server".to_string()]);
        handle_key(&mut app, key(KeyCode::Char(' ')));
        assert!(app.join.checked(POSITIONS).is_empty());
    }

    #[test]
    fn test_reservation_submit_without_date_shows_error() {
        let mut app = test_app();
        app.navigate(Screen::Reservations);
        // Jump to the submit row
        for _ in 0..app.reservation.rows.len() {
            handle_key(&mut app, key(KeyCode::Char('j')));
        }
        handle_key(&mut app, key(KeyCode::Enter));
        let notice = app.notice.expect("expected a validation notice");
        assert!(notice.contains("Could not build your booking"));
    }

    #[test]
    fn test_application_submit_requires_fields() {
        let mut app = test_app();
        app.navigate(Screen::Join);
        submit_form(&mut app);
        let notice = app.notice.expect("expected a validation notice");
        assert!(notice.contains("First Name"));
    }

    #[test]
    fn test_feedback_submit_confirms() {
        let mut app = test_app();
        app.navigate(Screen::BetaTasting);
        for row in &mut app.feedback.rows {
            if let FormRow::Text(f) = row {
                if f.label == "Items Ordered" {
                    f.value = "Atomic Poppers".to_string();
                }
            }
        }
        submit_form(&mut app);
        assert_eq!(
            app.notice.as_deref(),
            Some("Thank you for your feedback, Beta-Taster!")
        );
    }

    #[test]
    fn test_choice_cycles_with_enter() {
        let mut app = test_app();
        app.navigate(Screen::Reservations);
        // First row is the party size choice
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.reservation.choice("Party Size"), "3");
        handle_key(&mut app, key(KeyCode::Left));
        assert_eq!(app.reservation.choice("Party Size"), "2");
    }
}
