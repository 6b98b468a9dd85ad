//! Snap-to-center wheel list picker for terminal UIs.

pub mod config;
pub mod error;
pub mod log;
pub mod picker;
pub mod scroll;

pub use picker::{PickerOptions, WheelPicker};
