//! Picker panel component - a titled column holding one wheel.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    text::Line,
    widgets::Paragraph,
};

use wheelpick::picker::WheelPicker;

use crate::tui::theme::*;

/// Widest a wheel is drawn, in cells
const MAX_WHEEL_WIDTH: u16 = 24;

/// Area a wheel of `wheel_height` occupies inside a panel body.
pub fn wheel_area(body: Rect, wheel_height: u16) -> Rect {
    let width = body.width.min(MAX_WHEEL_WIDTH);
    let height = body.height.min(wheel_height);
    Rect {
        x: body.x + (body.width - width) / 2,
        y: body.y + (body.height - height) / 2,
        width,
        height,
    }
}

/// Render a picker under a title and return the area the wheel was drawn in.
pub fn render_picker_panel<T: 'static>(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    picker: &WheelPicker<T>,
    focused: bool,
) -> Rect {
    let title_style = if focused {
        Style::new().fg(ACCENT_LIGHT_BLUE).bold()
    } else {
        Style::new().fg(TEXT_DIM)
    };
    let header = Rect { height: area.height.min(1), ..area };
    frame.render_widget(Paragraph::new(Line::styled(title, title_style).centered()), header);

    let body = Rect {
        y: area.y + header.height,
        height: area.height - header.height,
        ..area
    };
    let wheel = wheel_area(body, picker.height());
    frame.render_widget(picker, wheel);
    wheel
}
