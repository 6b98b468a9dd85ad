//! UI components for the demo screen.
//!
//! # Component Organization
//!
//! - `logo` - Colored title
//! - `picker_panel` - A titled column holding one wheel
//! - `separators` - Vertical line between the pickers
//! - `status_bar` - Host-owned selection and hotkeys

mod logo;
mod picker_panel;
mod separators;
mod status_bar;

pub use logo::render_logo;
pub use picker_panel::render_picker_panel;
pub use separators::render_separator;
pub use status_bar::render_status_bar;
