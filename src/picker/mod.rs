//! Wheel picker module
//!
//! A vertically scrolling list that snaps the selected item to the center of
//! a fixed window, with blank context rows above and below, fading edges, two
//! dividers around the centered row, and a tick sound / haptic pulse each time
//! the centered row changes.

pub mod feedback;
pub mod layout;
pub mod scroll;
pub mod settle;
mod traits;
mod widget;

pub use feedback::{Haptics, SoundFactory, TickSound};
pub use layout::{calculate_intervals, coerce_out_of_bounds, ItemTextStyle, RowContent, WheelLayout};
pub use settle::ListenerId;
pub use traits::WheelControl;
pub use widget::{initial_index, PickerOptions, WheelPicker};
