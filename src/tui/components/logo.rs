//! Logo component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::theme::*;

/// Render the colorful "wheelpick" logo centered in the area.
pub fn render_logo(frame: &mut Frame, area: Rect) {
    const NAME: &str = "wheelpick";
    const COLORS: [ratatui::style::Color; 4] =
        [ACCENT_CORAL, ACCENT_GOLD, ACCENT_LIGHT_BLUE, ACCENT_MINT];

    let padding = area.width.saturating_sub(NAME.len() as u16) / 2;
    let mut spans = vec![Span::raw(" ".repeat(padding as usize))];
    spans.extend(NAME.chars().enumerate().map(|(i, c)| {
        Span::styled(c.to_string(), Style::new().fg(COLORS[i % COLORS.len()]).bold())
    }));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
