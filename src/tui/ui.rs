use ratatui::{
    layout::{Constraint, Layout},
    Frame,
};

use crate::app::App;
use crate::events::PickerId;
use super::components::*;

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    app.interactions.clear();

    // Main vertical layout: logo, pickers, status
    let main_layout = Layout::vertical([
        Constraint::Length(2), // Logo + spacing
        Constraint::Min(0),    // Pickers
        Constraint::Length(2), // Selection + hotkeys
    ])
    .split(area);

    render_logo(frame, main_layout[0]);

    // Horizontal split: items | separator | hours
    let columns = Layout::horizontal([
        Constraint::Percentage(50),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .split(main_layout[1]);

    let items_area = render_picker_panel(
        frame,
        columns[0],
        "Item",
        &app.items,
        app.focus == PickerId::Items,
    );
    app.interactions.register(PickerId::Items, items_area);

    render_separator(frame, columns[1]);

    let hours_area = render_picker_panel(
        frame,
        columns[2],
        "Hour",
        &app.hours,
        app.focus == PickerId::Hours,
    );
    app.interactions.register(PickerId::Hours, hours_area);

    render_status_bar(frame, main_layout[2], app);
}
