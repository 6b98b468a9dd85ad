//! Mouse hit regions for the pickers.
//!
//! The UI registers each picker's area while rendering; the mouse handler
//! asks the registry which picker, if any, lies under the pointer. Regions
//! cover the full unfaded area, so faded rows stay grabbable.

use ratatui::layout::{Position, Rect};

use crate::events::PickerId;

/// An area of the screen owned by a picker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractiveRegion {
    pub picker: PickerId,
    pub bounds: Rect,
}

impl InteractiveRegion {
    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.bounds.contains(Position::new(x, y))
    }
}

/// Registry of interactive regions, rebuilt each frame during render.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    regions: Vec<InteractiveRegion>,
}

impl InteractionRegistry {
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// Clear all registered regions (call at start of each render)
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn register(&mut self, picker: PickerId, bounds: Rect) {
        self.regions.push(InteractiveRegion { picker, bounds });
    }

    /// Picker under (x, y). Later registrations win on overlap.
    pub fn hit(&self, x: u16, y: u16) -> Option<PickerId> {
        self.regions
            .iter()
            .rev()
            .find(|region| region.contains(x, y))
            .map(|region| region.picker)
    }

    /// Area registered for `picker` this frame.
    pub fn bounds(&self, picker: PickerId) -> Option<Rect> {
        self.regions
            .iter()
            .find(|region| region.picker == picker)
            .map(|region| region.bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_contains() {
        let region = InteractiveRegion {
            picker: PickerId::Items,
            bounds: Rect::new(10, 10, 20, 10),
        };

        assert!(region.contains(10, 10)); // top-left corner
        assert!(region.contains(15, 15)); // center
        assert!(region.contains(29, 19)); // just inside bottom-right
        assert!(!region.contains(30, 20)); // just outside
        assert!(!region.contains(9, 10)); // just left
    }

    #[test]
    fn test_hit_picks_region_under_pointer() {
        let mut registry = InteractionRegistry::new();
        registry.register(PickerId::Items, Rect::new(0, 0, 10, 9));
        registry.register(PickerId::Hours, Rect::new(12, 0, 10, 9));

        assert_eq!(registry.hit(3, 4), Some(PickerId::Items));
        assert_eq!(registry.hit(15, 8), Some(PickerId::Hours));
        assert_eq!(registry.hit(11, 4), None);
        assert_eq!(registry.bounds(PickerId::Hours), Some(Rect::new(12, 0, 10, 9)));

        registry.clear();
        assert_eq!(registry.hit(3, 4), None);
    }
}
