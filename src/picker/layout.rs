//! Row layout for the wheel.
//!
//! The wheel scrolls over an extended row space of `pad + N + pad` rows: `pad`
//! blank rows, the `N` items, then `pad` blank rows again. The blank rows let
//! the first and last items reach the center of the window without the
//! content having to wrap.

use ratatui::style::{Color, Modifier, Style};

/// Line height used when the text style does not carry one.
pub const DEFAULT_LINE_HEIGHT: u16 = 1;

/// Alpha below which a faded row is not drawn at all.
const FADE_CUTOFF: f32 = 0.1;

/// Fraction of the window height covered by each fade ramp.
const FADE_RAMP: f32 = 0.25;

/// Clamp the requested number of context rows to `[0, len / 2]`.
pub fn coerce_out_of_bounds(requested: usize, len: usize) -> usize {
    requested.min(len / 2)
}

/// Boundaries of the three row bands: `[0, pad, pad + len, pad + len + pad]`.
///
/// Rows in `[b0, b1)` and `[b2, b3)` are blank, rows in `[b1, b2)` are items.
pub fn calculate_intervals(pad: usize, len: usize) -> [usize; 4] {
    [0, pad, pad + len, pad + len + pad]
}

/// What a single row of the extended space shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowContent {
    /// Placeholder row outside the item band
    Blank,
    /// Index into the item list
    Item(usize),
}

/// Index arithmetic for one list size and pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelLayout {
    pad: usize,
    len: usize,
    intervals: [usize; 4],
}

impl WheelLayout {
    /// Build the layout, clamping `requested_pad` to what `len` allows.
    pub fn new(requested_pad: usize, len: usize) -> Self {
        let pad = coerce_out_of_bounds(requested_pad, len);
        Self {
            pad,
            len,
            intervals: calculate_intervals(pad, len),
        }
    }

    pub fn pad(&self) -> usize {
        self.pad
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn intervals(&self) -> [usize; 4] {
        self.intervals
    }

    /// Rows shown at once, always `1 + 2 * pad`.
    pub fn visible_count(&self) -> usize {
        1 + 2 * self.pad
    }

    /// Rows in the extended space.
    pub fn total_rows(&self) -> usize {
        self.intervals[3]
    }

    /// Largest first-visible index; the centered row is then the last item.
    pub fn max_index(&self) -> usize {
        self.len.saturating_sub(1)
    }

    /// Content of row `index` of the extended space.
    pub fn row_content(&self, index: usize) -> RowContent {
        let [_, items_start, items_end, _] = self.intervals;
        if self.len == 0 || index < items_start || index >= items_end {
            RowContent::Blank
        } else {
            RowContent::Item((index - self.pad) % self.len)
        }
    }

    /// The `1 + 2 * pad` rows visible when `first` is the top row.
    pub fn window(&self, first: usize) -> Vec<RowContent> {
        (first..first + self.visible_count())
            .map(|index| self.row_content(index))
            .collect()
    }

    /// Item index selected when `first` is the top row (the row at window
    /// position `pad`).
    pub fn item_at(&self, first: usize) -> Option<usize> {
        if self.len == 0 {
            None
        } else {
            Some(first % self.len)
        }
    }
}

/// Text styling for item rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemTextStyle {
    pub style: Style,
    /// Explicit line height in cells
    pub line_height: Option<u16>,
}

impl ItemTextStyle {
    pub fn new(style: Style) -> Self {
        Self {
            style,
            line_height: None,
        }
    }

    pub fn with_line_height(mut self, line_height: u16) -> Self {
        self.line_height = Some(line_height);
        self
    }

    pub fn effective_line_height(&self) -> u16 {
        self.line_height.unwrap_or(DEFAULT_LINE_HEIGHT)
    }
}

/// Height of one row in cells.
pub fn row_height(text_style: &ItemTextStyle, vertical_padding: u16) -> u16 {
    text_style
        .effective_line_height()
        .saturating_add(vertical_padding.saturating_mul(2))
}

/// Height of the whole wheel in cells.
pub fn container_height(row_height: u16, layout: &WheelLayout) -> u16 {
    let rows = u16::try_from(layout.visible_count()).unwrap_or(u16::MAX);
    row_height.saturating_mul(rows)
}

/// Vertical placement of the two dividers bracketing the centered row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DividerGeometry {
    pub row_height: u16,
    pub pad: usize,
    pub thickness: u16,
}

impl DividerGeometry {
    pub fn new(row_height: u16, pad: usize, thickness: u16) -> Self {
        Self {
            row_height,
            pad,
            thickness,
        }
    }

    /// `(start, end)` of the top divider in fractional cells.
    pub fn top_span(&self) -> (f32, f32) {
        self.span(self.pad)
    }

    /// `(start, end)` of the bottom divider in fractional cells.
    pub fn bottom_span(&self) -> (f32, f32) {
        self.span(self.pad + 1)
    }

    fn span(&self, rows: usize) -> (f32, f32) {
        let center = self.row_height as f32 * rows as f32;
        let half = self.thickness as f32 / 2.0;
        (center - half, center + half)
    }

    /// Cell line for the top divider: first line of the centered row.
    pub fn top_line(&self) -> u16 {
        self.row_height.saturating_mul(self.pad_cells())
    }

    /// Cell line for the bottom divider: last line of the centered row.
    pub fn bottom_line(&self) -> u16 {
        self.row_height
            .saturating_mul(self.pad_cells().saturating_add(1))
            .saturating_sub(1)
    }

    fn pad_cells(&self) -> u16 {
        u16::try_from(self.pad).unwrap_or(u16::MAX)
    }

    /// Glyph drawn for this thickness, `None` when zero.
    pub fn glyph(&self) -> Option<&'static str> {
        match self.thickness {
            0 => None,
            1 => Some("─"),
            _ => Some("━"),
        }
    }
}

/// Pure white dividers disappear on light themes; draw them transparent.
pub fn effective_divider_color(color: Color) -> Option<Color> {
    match color {
        Color::White | Color::Rgb(255, 255, 255) => None,
        other => Some(other),
    }
}

/// Fade mask at relative height `t` (0 = top edge, 1 = bottom edge).
///
/// Transparent at both edges, opaque across the middle half.
pub fn fade_alpha(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let alpha = if t < FADE_RAMP {
        t / FADE_RAMP
    } else if t > 1.0 - FADE_RAMP {
        (1.0 - t) / FADE_RAMP
    } else {
        1.0
    };
    alpha.clamp(0.0, 1.0)
}

/// Apply the fade mask to a text style.
///
/// RGB foregrounds are blended toward `background`; named colours fall back to
/// `DIM`. Returns `None` when the row is faded out completely.
pub fn fade_style(style: Style, background: Color, alpha: f32) -> Option<Style> {
    if alpha <= FADE_CUTOFF {
        return None;
    }
    if alpha >= 1.0 {
        return Some(style);
    }
    match (style.fg, background) {
        (Some(Color::Rgb(fr, fg, fb)), Color::Rgb(br, bg, bb)) => {
            let mix = |f: u8, b: u8| (b as f32 + (f as f32 - b as f32) * alpha).round() as u8;
            Some(style.fg(Color::Rgb(mix(fr, br), mix(fg, bg), mix(fb, bb))))
        }
        _ => Some(style.add_modifier(Modifier::DIM)),
    }
}
