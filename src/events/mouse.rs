//! Mouse event handling.
//!
//! Wheel and press events are routed through the interaction registry, which
//! the UI fills with each picker's area during render. Drag and release
//! events go to whichever picker the drag started on.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::app::App;

use super::Action;

/// Handle mouse events and return the appropriate action.
pub fn handle_mouse_event(app: &App, mouse: MouseEvent) -> Action {
    let x = mouse.column;
    let y = mouse.row;

    match mouse.kind {
        MouseEventKind::ScrollUp => app
            .interactions
            .hit(x, y)
            .map(|picker| Action::Wheel { picker, delta: -1 })
            .unwrap_or(Action::None),
        MouseEventKind::ScrollDown => app
            .interactions
            .hit(x, y)
            .map(|picker| Action::Wheel { picker, delta: 1 })
            .unwrap_or(Action::None),
        MouseEventKind::Down(MouseButton::Left) => app
            .interactions
            .hit(x, y)
            .map(|picker| Action::BeginDrag { picker, row: y })
            .unwrap_or(Action::None),
        MouseEventKind::Drag(MouseButton::Left) if app.is_dragging() => Action::DragTo { row: y },
        MouseEventKind::Up(MouseButton::Left) if app.is_dragging() => Action::EndDrag,
        _ => Action::None,
    }
}
