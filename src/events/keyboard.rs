//! Keyboard event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::Action;

/// Rows moved by PageUp/PageDown
const PAGE_ROWS: isize = 5;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Enter => Action::Confirm,

        KeyCode::Char('s') => Action::ToggleSound,
        KeyCode::Char('h') => Action::ToggleHaptic,

        KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => Action::SwitchFocus,

        KeyCode::Up | KeyCode::Char('k') => Action::Step(-1),
        KeyCode::Down | KeyCode::Char('j') => Action::Step(1),
        KeyCode::PageUp => Action::Step(-PAGE_ROWS),
        KeyCode::PageDown => Action::Step(PAGE_ROWS),
        KeyCode::Home | KeyCode::Char('g') => Action::First,
        KeyCode::End | KeyCode::Char('G') => Action::Last,

        _ => Action::None,
    }
}
