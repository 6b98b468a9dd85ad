//! Event handling module for keyboard and mouse events.
//!
//! Handlers translate crossterm events into Actions; the App applies them.

mod action;
mod keyboard;
mod mouse;

pub use action::{Action, PickerId};
use keyboard::handle_key_event;
use mouse::handle_mouse_event;

use crossterm::event::{Event, KeyEventKind};

use crate::app::App;

/// Translate a crossterm event into an action.
pub fn handle_event(app: &App, event: &Event) -> Action {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(*key),
        Event::Mouse(mouse) => handle_mouse_event(app, *mouse),
        _ => Action::None,
    }
}
