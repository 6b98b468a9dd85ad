//! Action enum for decoupling input handling from state changes.
//!
//! Actions represent user intents and are applied to the App in one place.

/// Which of the demo pickers an action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerId {
    Items,
    Hours,
}

impl PickerId {
    pub fn other(self) -> Self {
        match self {
            PickerId::Items => PickerId::Hours,
            PickerId::Hours => PickerId::Items,
        }
    }
}

/// Actions that can be dispatched from event handlers.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Nothing to do
    None,

    // === Application ===
    /// Quit without confirming
    Quit,
    /// Quit and report the selections
    Confirm,
    /// Toggle the tick sound on both pickers
    ToggleSound,
    /// Toggle the haptic pulse on both pickers
    ToggleHaptic,

    // === Focus ===
    /// Move keyboard focus to the other picker
    SwitchFocus,

    // === Wheel motion ===
    /// Animate the focused picker by n rows
    Step(isize),
    /// Jump the focused picker to its first item
    First,
    /// Jump the focused picker to its last item
    Last,
    /// Mouse wheel notch over a picker
    Wheel { picker: PickerId, delta: i32 },
    /// Pointer pressed on a picker at a terminal row
    BeginDrag { picker: PickerId, row: u16 },
    /// Pointer moved while pressed
    DragTo { row: u16 },
    /// Pointer released
    EndDrag,
}
