//! Type-erased control over a wheel.
//!
//! Hosts usually hold several pickers over different item types. `WheelControl`
//! lets them drive any of them through `&mut dyn WheelControl`.

use std::time::Duration;

use super::widget::WheelPicker;

/// Motion and inspection common to every wheel, whatever its item type.
///
/// # Example
///
/// ```ignore
/// fn nudge(wheel: &mut dyn WheelControl) {
///     wheel.select_next();
/// }
///
/// nudge(&mut fruit_picker);
/// nudge(&mut hour_picker);
/// ```
pub trait WheelControl {
    /// Number of items
    fn len(&self) -> usize;

    /// Index of the item under the center line
    fn centered_index(&self) -> usize;

    /// Height of one row in cells
    fn row_height(&self) -> u16;

    /// Animate by `delta` rows
    fn step(&mut self, delta: isize);

    /// Center `index` immediately
    fn scroll_to(&mut self, index: usize);

    fn drag_by(&mut self, rows: f32);

    fn release(&mut self, velocity: f32);

    fn fling(&mut self, velocity: f32);

    /// Advance one frame; `true` while moving
    fn tick(&mut self, dt: Duration) -> bool;

    fn set_sound_enabled(&mut self, enabled: bool);

    fn set_haptic_enabled(&mut self, enabled: bool);

    /// Check if the wheel is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Animate to the next item (stops at the last one)
    fn select_next(&mut self) {
        self.step(1);
    }

    /// Animate to the previous item (stops at the first one)
    fn select_prev(&mut self) {
        self.step(-1);
    }

    /// Animate back to the first item
    fn select_first(&mut self) {
        let back = self.centered_index() as isize;
        self.step(-back);
    }

    /// Animate to the last item
    fn select_last(&mut self) {
        if !self.is_empty() {
            let ahead = (self.len() - 1 - self.centered_index()) as isize;
            self.step(ahead);
        }
    }
}

impl<T: 'static> WheelControl for WheelPicker<T> {
    fn len(&self) -> usize {
        self.items().len()
    }

    fn centered_index(&self) -> usize {
        WheelPicker::centered_index(self)
    }

    fn row_height(&self) -> u16 {
        WheelPicker::row_height(self)
    }

    fn step(&mut self, delta: isize) {
        WheelPicker::step(self, delta)
    }

    fn scroll_to(&mut self, index: usize) {
        WheelPicker::scroll_to(self, index)
    }

    fn drag_by(&mut self, rows: f32) {
        WheelPicker::drag_by(self, rows)
    }

    fn release(&mut self, velocity: f32) {
        WheelPicker::release(self, velocity)
    }

    fn fling(&mut self, velocity: f32) {
        WheelPicker::fling(self, velocity)
    }

    fn tick(&mut self, dt: Duration) -> bool {
        WheelPicker::tick(self, dt)
    }

    fn set_sound_enabled(&mut self, enabled: bool) {
        WheelPicker::set_sound_enabled(self, enabled)
    }

    fn set_haptic_enabled(&mut self, enabled: bool) {
        WheelPicker::set_haptic_enabled(self, enabled)
    }
}
