use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::contact::FormField;
use crate::sections::SectionKind;
use crate::ui::app::{App, PopupKind, SubmitRequest};

/// Action to take after processing a key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// No further action needed (handled internally).
    None,
    /// Send the contact form.
    Submit(SubmitRequest),
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind == KeyEventKind::Release {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return InputAction::None;
    }

    if is_ctrl_char(key, 's') {
        app.toggle_popup(PopupKind::Status);
        return InputAction::None;
    }

    if app.show_popup() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
            app.close_popup();
        }
        return InputAction::None;
    }

    if let Some(field) = app.editing_field() {
        return handle_form_key(app, field, key);
    }

    handle_page_key(app, key);
    InputAction::None
}

fn handle_form_key(app: &mut App, field: FormField, key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Esc => app.stop_editing(),
        KeyCode::Tab | KeyCode::Down => app.focus_field(field.next()),
        KeyCode::BackTab | KeyCode::Up => app.focus_field(field.previous()),
        KeyCode::Backspace => app.on_form_backspace(field),
        KeyCode::Enter => {
            if let Some(request) = app.submit_contact() {
                return InputAction::Submit(request);
            }
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.on_form_input(field, ch);
        }
        _ => {}
    }
    InputAction::None
}

fn handle_page_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Tab | KeyCode::Right => app.next_section(),
        KeyCode::BackTab | KeyCode::Left => app.previous_section(),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_down(1),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_up(1),
        KeyCode::PageDown => app.scroll_down(10),
        KeyCode::PageUp => app.scroll_up(10),
        KeyCode::Char(']') if app.active_section() == SectionKind::Projects => app.next_tag(),
        KeyCode::Char('[') if app.active_section() == SectionKind::Projects => {
            app.previous_tag()
        }
        KeyCode::Enter | KeyCode::Char('i') if app.active_section() == SectionKind::Contact => {
            app.start_editing();
        }
        KeyCode::Char(ch) => {
            if let Some(kind) = ch
                .to_digit(10)
                .and_then(|d| (d as usize).checked_sub(1))
                .and_then(|i| SectionKind::NAV.get(i))
            {
                app.select_section(*kind);
            }
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::diagnostics::DiagnosticLog;
    use crate::sections::{LoadState, SectionUpdate};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    fn app() -> App {
        App::new(&Config::default(), DiagnosticLog::new())
    }

    #[test]
    fn digits_jump_to_sections() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('4')));
        assert_eq!(app.active_section(), SectionKind::Projects);
        handle_key(&mut app, press(KeyCode::Char('9')));
        assert_eq!(app.active_section(), SectionKind::Projects);
    }

    #[test]
    fn q_types_into_form_instead_of_quitting() {
        let mut app = app();
        app.select_section(SectionKind::Contact);
        app.apply_section_update(SectionUpdate::Contact(LoadState::Failed("offline".into())));
        handle_key(&mut app, press(KeyCode::Enter));
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.should_quit());
        assert_eq!(app.contact().form().name, "q");
        handle_key(&mut app, ctrl('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn enter_in_form_submits_when_valid() {
        let mut app = app();
        app.select_section(SectionKind::Contact);
        app.apply_section_update(SectionUpdate::Contact(LoadState::Failed("offline".into())));
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(handle_key(&mut app, press(KeyCode::Enter)), InputAction::None);
        assert_eq!(app.contact().errors().name, "Name is required");

        for ch in "Ada".chars() {
            handle_key(&mut app, press(KeyCode::Char(ch)));
        }
        handle_key(&mut app, press(KeyCode::Tab));
        for ch in "ada@example.com".chars() {
            handle_key(&mut app, press(KeyCode::Char(ch)));
        }
        handle_key(&mut app, press(KeyCode::Tab));
        handle_key(&mut app, press(KeyCode::Char('x')));

        match handle_key(&mut app, press(KeyCode::Enter)) {
            InputAction::Submit(request) => {
                assert_eq!(request.endpoint, "https://formspree.io/f/mwpolkno");
                assert_eq!(request.form.email, "ada@example.com");
            }
            other => panic!("expected submit, got {other:?}"),
        }
        assert!(app.contact().status().is_submitting());
    }

    #[test]
    fn status_popup_swallows_keys() {
        let mut app = app();
        handle_key(&mut app, ctrl('s'));
        assert!(app.show_popup());
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.active_section(), SectionKind::Hero);
        handle_key(&mut app, press(KeyCode::Esc));
        assert!(!app.show_popup());
    }
}
