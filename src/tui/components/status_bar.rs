//! Status bar component - host-owned selection and hotkeys.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::tui::theme::*;

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

/// Render the current selection line and the hotkey line.
pub fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let selection = Line::from(vec![
        Span::styled("Selected: ", Style::new().fg(TEXT_DIM)),
        Span::styled(app.selected_item.as_str(), Style::new().fg(ACCENT_GOLD).bold()),
        Span::styled(" at ", Style::new().fg(TEXT_DIM)),
        Span::styled(
            format!("{:02}:00", app.selected_hour),
            Style::new().fg(ACCENT_MINT).bold(),
        ),
    ])
    .centered();

    let key = |k: &'static str| Span::styled(k, Style::new().fg(ACCENT_LIGHT_BLUE));
    let label = |l: String| Span::styled(l, Style::new().fg(TEXT_DIM));
    let hotkeys = Line::from(vec![
        key("↑↓"),
        label(" scroll  ".to_string()),
        key("tab"),
        label(" switch  ".to_string()),
        key("s"),
        label(format!(" sound:{}  ", on_off(app.sound_enabled))),
        key("h"),
        label(format!(" haptic:{}  ", on_off(app.haptic_enabled))),
        key("enter"),
        label(" confirm  ".to_string()),
        key("q"),
        label(" quit".to_string()),
    ])
    .centered();

    frame.render_widget(Paragraph::new(vec![selection, hotkeys]), area);
}
