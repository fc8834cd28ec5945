//! Key bindings for the editor.
//!
//! Editing mode:
//! - characters type into the input, `Space` / `Enter` / `Backspace` commit or edit
//! - `Up` / `Down` move the dropdown highlight, `Tab` picks it
//! - `Left` starts re-selecting tags, `Esc` hides the dropdown
//! - `Ctrl-L` clears the formula, `Ctrl-C` quits
//!
//! Re-selection mode: `Left` / `Right` move between tags, `Up` / `Down`
//! cycle candidates, `Enter` applies, `Esc` goes back to editing.

use crate::app::{AppEvent, AppMode, Key};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn key_to_event(key: KeyEvent, mode: AppMode) -> Option<AppEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(AppEvent::Quit),
            KeyCode::Char('l') => Some(AppEvent::Clear),
            _ => None,
        };
    }

    match mode {
        AppMode::Editing => editing_key(key.code),
        AppMode::Reselecting => reselecting_key(key.code),
        AppMode::Quit => None,
    }
}

fn editing_key(code: KeyCode) -> Option<AppEvent> {
    match code {
        KeyCode::Enter => Some(AppEvent::Key(Key::Enter)),
        KeyCode::Backspace => Some(AppEvent::Key(Key::Backspace)),
        KeyCode::Char(' ') => Some(AppEvent::Key(Key::Space)),
        KeyCode::Char(c) => Some(AppEvent::TypeChar(c)),
        KeyCode::Down => Some(AppEvent::HighlightNext),
        KeyCode::Up => Some(AppEvent::HighlightPrevious),
        KeyCode::Tab => Some(AppEvent::PickHighlighted),
        KeyCode::Left => Some(AppEvent::BeginReselect),
        KeyCode::Esc => Some(AppEvent::Cancel),
        _ => None,
    }
}

fn reselecting_key(code: KeyCode) -> Option<AppEvent> {
    match code {
        KeyCode::Left => Some(AppEvent::FocusPreviousTag),
        KeyCode::Right => Some(AppEvent::FocusNextTag),
        KeyCode::Down => Some(AppEvent::CandidateNext),
        KeyCode::Up => Some(AppEvent::CandidatePrevious),
        KeyCode::Enter => Some(AppEvent::ApplyCandidate),
        KeyCode::Esc => Some(AppEvent::Cancel),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_commit_keys() {
        assert_eq!(
            key_to_event(press(KeyCode::Enter), AppMode::Editing),
            Some(AppEvent::Key(Key::Enter))
        );
        assert_eq!(
            key_to_event(press(KeyCode::Char(' ')), AppMode::Editing),
            Some(AppEvent::Key(Key::Space))
        );
        assert_eq!(
            key_to_event(press(KeyCode::Backspace), AppMode::Editing),
            Some(AppEvent::Key(Key::Backspace))
        );
    }

    #[test]
    fn test_typing() {
        assert_eq!(
            key_to_event(press(KeyCode::Char('+')), AppMode::Editing),
            Some(AppEvent::TypeChar('+'))
        );
    }

    #[test]
    fn test_control_keys() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let ctrl_l = KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL);
        assert_eq!(key_to_event(ctrl_c, AppMode::Reselecting), Some(AppEvent::Quit));
        assert_eq!(key_to_event(ctrl_l, AppMode::Editing), Some(AppEvent::Clear));
    }

    #[test]
    fn test_same_key_differs_by_mode() {
        assert_eq!(
            key_to_event(press(KeyCode::Enter), AppMode::Reselecting),
            Some(AppEvent::ApplyCandidate)
        );
        assert_eq!(
            key_to_event(press(KeyCode::Down), AppMode::Reselecting),
            Some(AppEvent::CandidateNext)
        );
        assert_eq!(
            key_to_event(press(KeyCode::Left), AppMode::Editing),
            Some(AppEvent::BeginReselect)
        );
    }

    #[test]
    fn test_release_events_ignored() {
        let mut key = press(KeyCode::Enter);
        key.kind = KeyEventKind::Release;
        assert_eq!(key_to_event(key, AppMode::Editing), None);
    }

    #[test]
    fn test_quit_mode_ignores_keys() {
        assert_eq!(key_to_event(press(KeyCode::Char('a')), AppMode::Quit), None);
    }
}
