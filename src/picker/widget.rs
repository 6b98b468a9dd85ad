//! The wheel picker widget.
//!
//! `WheelPicker` owns everything a mounted wheel needs: the shared item list,
//! the scroll animation, the last observed centered row, the listeners and the
//! feedback services. Dropping it unmounts it and releases the tick sound.

use std::fmt::Display;
use std::sync::Arc;
use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use super::feedback::{default_sound_factory, DividerPulse, Haptics, LazySound, SoundFactory};
use super::layout::{
    container_height, effective_divider_color, fade_alpha, fade_style, row_height, DividerGeometry,
    ItemTextStyle, RowContent, WheelLayout,
};
use super::scroll::WheelScroll;
use super::settle::{ListenerId, Listeners, ObservedIndex};
use crate::log;

/// Appearance and feedback settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerOptions {
    /// Context rows above and below the centered row (clamped to half the list)
    pub out_of_bounds_count: usize,
    pub text_style: ItemTextStyle,
    /// Blank lines above and below each label
    pub vertical_padding: u16,
    pub divider_color: Color,
    pub divider_thickness: u16,
    pub enable_sound: bool,
    pub enable_haptic: bool,
    /// Colour the fading edges blend RGB text toward
    pub fade_background: Color,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            out_of_bounds_count: 1,
            text_style: ItemTextStyle::default(),
            vertical_padding: 1,
            divider_color: Color::Gray,
            divider_thickness: 1,
            enable_sound: true,
            enable_haptic: true,
            fade_background: Color::Reset,
        }
    }
}

/// Index of `selected` in `items`, or 0 when absent.
pub fn initial_index<T: PartialEq>(items: &[T], selected: &T) -> usize {
    items
        .iter()
        .position(|item| item == selected)
        .unwrap_or(0)
        .min(items.len().saturating_sub(1))
}

pub struct WheelPicker<T> {
    items: Arc<[T]>,
    layout: WheelLayout,
    options: PickerOptions,
    formatter: Box<dyn Fn(&T) -> String>,
    listeners: Listeners<T>,
    scroll: WheelScroll,
    observed: ObservedIndex,
    sound: LazySound,
    haptics: Box<dyn Haptics>,
}

impl<T: PartialEq + Display + 'static> WheelPicker<T> {
    /// Mount a picker labelling items with their `Display` form.
    pub fn new(items: Arc<[T]>, selected: &T, options: PickerOptions) -> Self {
        Self::with_formatter(items, selected, options, |item: &T| item.to_string())
    }
}

impl<T: 'static> WheelPicker<T> {
    /// Mount a picker with a custom label function.
    pub fn with_formatter(
        items: Arc<[T]>,
        selected: &T,
        options: PickerOptions,
        formatter: impl Fn(&T) -> String + 'static,
    ) -> Self
    where
        T: PartialEq,
    {
        let layout = WheelLayout::new(options.out_of_bounds_count, items.len());
        let index = initial_index(&items, selected);
        Self {
            items,
            layout,
            options,
            formatter: Box::new(formatter),
            listeners: Listeners::default(),
            scroll: WheelScroll::new(layout.max_index(), index),
            observed: ObservedIndex::new(index),
            sound: LazySound::new(default_sound_factory()),
            haptics: Box::new(DividerPulse::default()),
        }
    }

    /// Register the selection callback.
    pub fn on_change(mut self, listener: impl FnMut(&T) + 'static) -> Self {
        self.listeners.subscribe(listener);
        self
    }

    /// Replace how the tick sound is opened.
    pub fn with_sound(mut self, factory: SoundFactory) -> Self {
        self.sound = LazySound::new(factory);
        self
    }

    pub fn with_haptics(mut self, haptics: Box<dyn Haptics>) -> Self {
        self.haptics = haptics;
        self
    }

    pub fn add_listener(&mut self, listener: impl FnMut(&T) + 'static) -> ListenerId {
        self.listeners.subscribe(listener)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Swap the item list. State is rebuilt only when `items` is a different
    /// list, not merely an equal one. Returns whether it was rebuilt.
    pub fn set_items(&mut self, items: Arc<[T]>, selected: &T) -> bool
    where
        T: PartialEq,
    {
        if Arc::ptr_eq(&self.items, &items) {
            return false;
        }
        let index = initial_index(&items, selected);
        self.layout = WheelLayout::new(self.options.out_of_bounds_count, items.len());
        self.scroll = WheelScroll::new(self.layout.max_index(), index);
        self.observed.reset(index);
        self.items = items;
        log::log_event(&format!("picker list replaced ({} items)", self.items.len()));
        true
    }

    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.options.enable_sound = enabled;
    }

    pub fn set_haptic_enabled(&mut self, enabled: bool) {
        self.options.enable_haptic = enabled;
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn layout(&self) -> &WheelLayout {
        &self.layout
    }

    pub fn options(&self) -> &PickerOptions {
        &self.options
    }

    pub fn offset(&self) -> f32 {
        self.scroll.offset()
    }

    pub fn is_settled(&self) -> bool {
        self.scroll.is_settled()
    }

    /// Index of the item under the center line right now.
    pub fn centered_index(&self) -> usize {
        self.scroll.centered_index()
    }

    pub fn selected_item(&self) -> Option<&T> {
        self.layout
            .item_at(self.scroll.centered_index())
            .and_then(|index| self.items.get(index))
    }

    /// Text shown on row `row` of the extended space.
    pub fn label_for_row(&self, row: usize) -> String {
        match self.layout.row_content(row) {
            RowContent::Blank => String::new(),
            RowContent::Item(index) => (self.formatter)(&self.items[index]),
        }
    }

    pub fn row_height(&self) -> u16 {
        row_height(&self.options.text_style, self.options.vertical_padding)
    }

    /// Height the widget wants, in cells.
    pub fn height(&self) -> u16 {
        container_height(self.row_height(), &self.layout)
    }

    pub fn drag_by(&mut self, rows: f32) {
        if !self.layout.is_empty() {
            self.scroll.drag_by(rows);
        }
    }

    pub fn release(&mut self, velocity: f32) {
        if !self.layout.is_empty() {
            self.scroll.release(velocity);
        }
    }

    pub fn fling(&mut self, velocity: f32) {
        if !self.layout.is_empty() {
            self.scroll.fling(velocity);
        }
    }

    /// Animate by `delta` rows.
    pub fn step(&mut self, delta: isize) {
        if !self.layout.is_empty() {
            self.scroll.step(delta);
        }
    }

    /// Put `index` in the center immediately.
    pub fn scroll_to(&mut self, index: usize) {
        if !self.layout.is_empty() {
            self.scroll.jump_to(index);
        }
    }

    /// Advance one frame and report a changed centered row.
    ///
    /// Returns `true` while the wheel is still moving.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.layout.is_empty() {
            return false;
        }
        let moving = self.scroll.tick(dt);
        self.observe_index(self.scroll.centered_index());
        moving
    }

    /// Feed one sample of the centered index. Fires feedback and listeners
    /// when it differs from the previous sample.
    pub fn observe_index(&mut self, index: usize) {
        if self.layout.is_empty() {
            return;
        }
        let Some(changed) = self.observed.observe(index) else {
            return;
        };

        if self.options.enable_sound {
            self.sound.play();
        }
        if self.options.enable_haptic {
            self.haptics.pulse();
        }

        let item = &self.items[changed % self.items.len()];
        log::log_event(&format!("picker centered row -> {}", changed));
        self.listeners.notify(item);
    }
}

impl<T: 'static> Widget for &WheelPicker<T> {
    /// Draws the wheel at the top of `area`. When `area` is shorter than the
    /// wheel, the window is cropped evenly top and bottom so the centered row
    /// stays in the middle.
    fn render(self, area: Rect, buf: &mut Buffer) {
        let full_height = self.height();
        let height = full_height.min(area.height);
        if self.layout.is_empty() || area.width == 0 || height == 0 {
            return;
        }
        let area = Rect { height, ..area };
        let crop = ((full_height - height) / 2) as i64;

        let options = &self.options;
        let row_height = self.row_height() as i64;
        let pad = self.layout.pad();
        let text_line = options
            .vertical_padding
            .saturating_add(options.text_style.effective_line_height().saturating_sub(1) / 2)
            as i64;
        let scroll_cells = (self.scroll.offset() * row_height as f32).round() as i64;
        let centered_row = self.scroll.centered_index() + pad;
        let divider_color = effective_divider_color(options.divider_color);

        let first_row = (scroll_cells / row_height).max(0) as usize;
        let last_row = (first_row + self.layout.visible_count() + 1).min(self.layout.total_rows());

        for row in first_row..last_row {
            // Line within the uncropped window
            let window_y = row as i64 * row_height - scroll_cells + text_line;
            let y = window_y - crop;
            if y < 0 || y >= height as i64 {
                continue;
            }
            let label = self.label_for_row(row);
            if label.is_empty() {
                continue;
            }

            let alpha = fade_alpha((window_y as f32 + 0.5) / full_height as f32);
            let Some(mut style) = fade_style(options.text_style.style, options.fade_background, alpha)
            else {
                continue;
            };
            if row == centered_row && options.vertical_padding == 0 && divider_color.is_some() {
                style = style.add_modifier(Modifier::UNDERLINED);
            }

            let text = fit_label(&label, area.width as usize);
            let x = area.x + (area.width - text.chars().count() as u16) / 2;
            buf.set_string(x, area.y + y as u16, &text, style);
        }

        let geometry = DividerGeometry::new(self.row_height(), pad, options.divider_thickness);
        if options.vertical_padding == 0 {
            return;
        }
        if let (Some(color), Some(glyph)) = (divider_color, geometry.glyph()) {
            let mut style = Style::new().fg(color);
            if self.haptics.is_active() {
                style = style.add_modifier(Modifier::BOLD);
            }
            let line = glyph.repeat(area.width as usize);
            for window_y in [geometry.top_line(), geometry.bottom_line()] {
                let y = window_y as i64 - crop;
                if (0..height as i64).contains(&y) {
                    buf.set_string(area.x, area.y + y as u16, &line, style);
                }
            }
        }
    }
}

/// Truncate to `width` columns with an ellipsis.
fn fit_label(label: &str, width: usize) -> String {
    if label.chars().count() <= width {
        return label.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut text: String = label.chars().take(width - 1).collect();
    text.push('…');
    text
}

impl<T> std::fmt::Debug for WheelPicker<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WheelPicker")
            .field("len", &self.items.len())
            .field("layout", &self.layout)
            .field("options", &self.options)
            .field("scroll", &self.scroll)
            .field("observed", &self.observed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::super::feedback::testing::*;
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    const FRAME: Duration = Duration::from_millis(16);

    fn items() -> Arc<[String]> {
        ["Item 1", "Item 2", "Item 3", "Item 4", "Item 1", "Item 2", "Item 3", "Item 4"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    fn quiet_options() -> PickerOptions {
        PickerOptions {
            enable_sound: false,
            enable_haptic: false,
            ..PickerOptions::default()
        }
    }

    fn recorded(picker: WheelPicker<String>) -> (WheelPicker<String>, Rc<RefCell<Vec<String>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let picker = picker.on_change(move |item: &String| sink.borrow_mut().push(item.clone()));
        (picker, seen)
    }

    #[test]
    fn test_initial_index_uses_first_occurrence() {
        let picker = WheelPicker::new(items(), &"Item 2".to_string(), quiet_options());
        assert_eq!(picker.centered_index(), 1);
        assert_eq!(picker.selected_item().map(String::as_str), Some("Item 2"));
    }

    #[test]
    fn test_absent_selection_starts_at_zero() {
        let picker = WheelPicker::new(items(), &"missing".to_string(), quiet_options());
        assert_eq!(picker.centered_index(), 0);
    }

    #[test]
    fn test_repeated_index_does_not_notify() {
        let picker = WheelPicker::new(items(), &"Item 3".to_string(), quiet_options());
        let (mut picker, seen) = recorded(picker);
        picker.observe_index(2);
        picker.observe_index(2);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_distinct_transitions_notify_once_each() {
        let counters = Rc::new(SoundCounters::default());
        let haptics = RecordingHaptics::default();
        let pulses = Rc::clone(&haptics.pulses);
        let picker = WheelPicker::new(items(), &"Item 3".to_string(), PickerOptions::default())
            .with_sound(recording_factory(&counters))
            .with_haptics(Box::new(haptics));
        let (mut picker, seen) = recorded(picker);

        for index in [3, 3, 5] {
            picker.observe_index(index);
        }

        assert_eq!(*seen.borrow(), vec!["Item 4".to_string(), "Item 2".to_string()]);
        assert_eq!(counters.plays.get(), 2);
        assert_eq!(*pulses.borrow(), 2);
    }

    #[test]
    fn test_disabled_feedback_is_not_acquired() {
        let counters = Rc::new(SoundCounters::default());
        let haptics = RecordingHaptics::default();
        let pulses = Rc::clone(&haptics.pulses);
        let mut picker = WheelPicker::new(items(), &"Item 1".to_string(), quiet_options())
            .with_sound(recording_factory(&counters))
            .with_haptics(Box::new(haptics));

        picker.observe_index(4);

        assert_eq!(counters.acquired.get(), 0);
        assert_eq!(*pulses.borrow(), 0);
    }

    #[test]
    fn test_sound_failure_keeps_picker_working() {
        let picker = WheelPicker::new(items(), &"Item 1".to_string(), PickerOptions::default())
            .with_sound(failing_factory());
        let (mut picker, seen) = recorded(picker);

        picker.observe_index(1);
        picker.observe_index(2);

        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_drop_releases_tick_sound() {
        let counters = Rc::new(SoundCounters::default());
        {
            let mut picker = WheelPicker::new(items(), &"Item 1".to_string(), PickerOptions::default())
                .with_sound(recording_factory(&counters));
            picker.observe_index(1);
            assert!(!counters.released.get());
        }
        assert!(counters.released.get());
    }

    #[test]
    fn test_step_reports_every_row_crossed() {
        let picker = WheelPicker::new(items(), &"Item 1".to_string(), quiet_options());
        let (mut picker, seen) = recorded(picker);

        picker.step(2);
        while picker.tick(FRAME) {}

        assert_eq!(*seen.borrow(), vec!["Item 2".to_string(), "Item 3".to_string()]);
        assert!(picker.is_settled());
        assert_eq!(picker.offset(), 2.0);
    }

    #[test]
    fn test_fling_settles_and_matches_last_notification() {
        let picker = WheelPicker::new(items(), &"Item 1".to_string(), quiet_options());
        let (mut picker, seen) = recorded(picker);

        picker.drag_by(0.3);
        picker.release(18.0);
        while picker.tick(FRAME) {}

        assert_eq!(picker.offset().fract(), 0.0);
        assert_eq!(seen.borrow().last(), picker.selected_item());
    }

    #[test]
    fn test_set_items_only_rebuilds_on_new_list() {
        let list = items();
        let mut picker = WheelPicker::new(Arc::clone(&list), &"Item 3".to_string(), quiet_options());
        picker.scroll_to(5);

        assert!(!picker.set_items(Arc::clone(&list), &"Item 1".to_string()));
        assert_eq!(picker.centered_index(), 5);

        let shorter: Arc<[String]> = vec!["x".to_string(), "y".to_string()].into();
        assert!(picker.set_items(shorter, &"y".to_string()));
        assert_eq!(picker.centered_index(), 1);
        assert_eq!(picker.layout().pad(), 1);
    }

    #[test]
    fn test_empty_list_is_inert() {
        let empty: Arc<[String]> = Vec::new().into();
        let picker = WheelPicker::new(empty, &"x".to_string(), quiet_options());
        let (mut picker, seen) = recorded(picker);

        picker.step(1);
        picker.observe_index(3);
        assert!(!picker.tick(FRAME));
        assert!(picker.selected_item().is_none());
        assert!(seen.borrow().is_empty());
        assert_eq!(picker.layout().visible_count(), 1);

        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(area);
        (&picker).render(area, &mut buf);
        assert_eq!(buf, Buffer::empty(area));
    }

    #[test]
    fn test_custom_formatter_labels_rows() {
        let hours: Arc<[u32]> = (0..24).collect();
        let picker = WheelPicker::with_formatter(hours, &7, quiet_options(), |h: &u32| {
            format!("{:02}:00", h)
        });
        assert_eq!(picker.label_for_row(0), "");
        assert_eq!(picker.label_for_row(8), "07:00");
        assert_eq!(picker.label_for_row(25), "");
    }

    #[test]
    fn test_render_rows_and_dividers() {
        let list: Arc<[String]> = ["a", "b", "c", "d", "e"].into_iter().map(String::from).collect();
        let picker = WheelPicker::new(list, &"a".to_string(), quiet_options());
        assert_eq!(picker.height(), 9);

        let area = Rect::new(0, 0, 5, 9);
        let mut buf = Buffer::empty(area);
        (&picker).render(area, &mut buf);

        assert_eq!(buf[(2, 4)].symbol(), "a");
        assert_eq!(buf[(2, 7)].symbol(), "b");
        assert_eq!(buf[(2, 1)].symbol(), " ");
        assert_eq!(buf[(0, 3)].symbol(), "─");
        assert_eq!(buf[(4, 5)].symbol(), "─");
        assert_eq!(buf[(0, 3)].fg, Color::Gray);
    }

    #[test]
    fn test_white_dividers_are_not_drawn() {
        let list: Arc<[String]> = ["a", "b", "c"].into_iter().map(String::from).collect();
        let options = PickerOptions {
            divider_color: Color::White,
            ..quiet_options()
        };
        let picker = WheelPicker::new(list, &"b".to_string(), options);

        let area = Rect::new(0, 0, 5, 9);
        let mut buf = Buffer::empty(area);
        (&picker).render(area, &mut buf);

        assert_eq!(buf[(0, 3)].symbol(), " ");
        assert_eq!(buf[(0, 5)].symbol(), " ");
        assert_eq!(buf[(2, 4)].symbol(), "b");
    }

    #[test]
    fn test_short_area_keeps_center_row_in_middle() {
        let list: Arc<[String]> = ["a", "b", "c", "d", "e"].into_iter().map(String::from).collect();
        let picker = WheelPicker::new(list, &"a".to_string(), quiet_options());

        let area = Rect::new(0, 0, 5, 5);
        let mut buf = Buffer::empty(area);
        (&picker).render(area, &mut buf);

        assert_eq!(buf[(2, 2)].symbol(), "a");
        assert_eq!(buf[(0, 1)].symbol(), "─");
        assert_eq!(buf[(0, 3)].symbol(), "─");
        assert_eq!(buf[(2, 0)].symbol(), " ");
        assert_eq!(buf[(2, 4)].symbol(), " ");
    }

    #[test]
    fn test_huge_padding_renders_without_overflow() {
        let list: Arc<[String]> = ["a", "b", "c"].into_iter().map(String::from).collect();
        let options = PickerOptions {
            vertical_padding: u16::MAX,
            text_style: ItemTextStyle::default().with_line_height(3),
            ..quiet_options()
        };
        let picker = WheelPicker::new(list, &"b".to_string(), options);
        assert_eq!(picker.height(), u16::MAX);

        let area = Rect::new(0, 0, 10, 20);
        let mut buf = Buffer::empty(area);
        (&picker).render(area, &mut buf);
    }

    #[test]
    fn test_context_rows_are_dimmed() {
        let list: Arc<[String]> = ["a", "b", "c", "d", "e"].into_iter().map(String::from).collect();
        let picker = WheelPicker::new(list, &"a".to_string(), quiet_options());

        let area = Rect::new(0, 0, 5, 9);
        let mut buf = Buffer::empty(area);
        (&picker).render(area, &mut buf);

        assert!(!buf[(2, 4)].modifier.contains(Modifier::DIM));
        assert!(buf[(2, 7)].modifier.contains(Modifier::DIM));
    }

    #[test]
    fn test_rgb_context_rows_blend_toward_background() {
        let list: Arc<[String]> = ["a", "b", "c", "d", "e"].into_iter().map(String::from).collect();
        let options = PickerOptions {
            text_style: ItemTextStyle::new(Style::new().fg(Color::Rgb(200, 100, 0))),
            fade_background: Color::Rgb(0, 0, 0),
            ..quiet_options()
        };
        let picker = WheelPicker::new(list, &"a".to_string(), options);

        let area = Rect::new(0, 0, 5, 9);
        let mut buf = Buffer::empty(area);
        (&picker).render(area, &mut buf);

        assert_eq!(buf[(2, 4)].fg, Color::Rgb(200, 100, 0));
        assert_eq!(buf[(2, 7)].fg, Color::Rgb(133, 67, 0));
    }

    #[test]
    fn test_dividers_bold_while_pulsing() {
        let list: Arc<[String]> = ["a", "b", "c", "d", "e"].into_iter().map(String::from).collect();
        let options = PickerOptions {
            enable_sound: false,
            ..PickerOptions::default()
        };
        let mut picker = WheelPicker::new(list, &"a".to_string(), options)
            .with_haptics(Box::new(DividerPulse::new(Duration::from_secs(60))));
        let area = Rect::new(0, 0, 5, 9);

        let mut buf = Buffer::empty(area);
        (&picker).render(area, &mut buf);
        assert!(!buf[(0, 3)].modifier.contains(Modifier::BOLD));

        picker.observe_index(1);
        let mut buf = Buffer::empty(area);
        (&picker).render(area, &mut buf);
        assert!(buf[(0, 3)].modifier.contains(Modifier::BOLD));
        assert!(buf[(4, 5)].modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_long_labels_are_truncated() {
        assert_eq!(fit_label("abcdef", 4), "abc…");
        assert_eq!(fit_label("abc", 4), "abc");
        assert_eq!(fit_label("abc", 0), "");
    }
}
