//! Drag, fling and snap-to-row motion for the wheel.
//!
//! The offset is measured in rows: offset `3.0` means extended row 3 is the
//! top visible row, so item 3 is centered. Any gesture ends in a snap
//! animation that lands exactly on a whole row.

use std::time::Duration;

/// Exponential velocity decay per second while flinging
const FRICTION: f32 = 4.0;
/// Below this speed (rows/s) a fling hands over to the snap animation
const MIN_FLING_SPEED: f32 = 2.0;
/// Fraction of the remaining distance covered per second while snapping
const SNAP_RATE: f32 = 14.0;
/// Minimum snap speed (rows/s) so the animation never crawls asymptotically
const MIN_SNAP_SPEED: f32 = 1.5;
/// Distance at which the snap lands on its target
const SNAP_EPSILON: f32 = 0.01;

/// Current motion of the wheel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollPhase {
    /// At rest on a whole row
    Idle,
    /// Following a pointer; no animation runs
    Dragging,
    /// Coasting after release
    Flinging,
    /// Settling onto a row
    Snapping { target: usize },
}

#[derive(Debug, Clone)]
pub struct WheelScroll {
    offset: f32,
    velocity: f32,
    max_index: usize,
    phase: ScrollPhase,
}

impl WheelScroll {
    pub fn new(max_index: usize, initial: usize) -> Self {
        Self {
            offset: initial.min(max_index) as f32,
            velocity: 0.0,
            max_index,
            phase: ScrollPhase::Idle,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn phase(&self) -> ScrollPhase {
        self.phase
    }

    pub fn max_index(&self) -> usize {
        self.max_index
    }

    pub fn is_settled(&self) -> bool {
        self.phase == ScrollPhase::Idle
    }

    /// Row whose center is closest to the window center.
    pub fn centered_index(&self) -> usize {
        (self.offset.round().max(0.0) as usize).min(self.max_index)
    }

    /// Jump to `index` without animating.
    pub fn jump_to(&mut self, index: usize) {
        self.offset = index.min(self.max_index) as f32;
        self.velocity = 0.0;
        self.phase = ScrollPhase::Idle;
    }

    /// Move by `rows` under the pointer.
    pub fn drag_by(&mut self, rows: f32) {
        if self.phase != ScrollPhase::Dragging {
            self.phase = ScrollPhase::Dragging;
            self.velocity = 0.0;
        }
        self.offset = self.clamp(self.offset + rows);
    }

    /// End a drag, coasting with `velocity` rows/s if it is fast enough.
    pub fn release(&mut self, velocity: f32) {
        if velocity.abs() >= MIN_FLING_SPEED {
            self.fling(velocity);
        } else {
            self.animate_to(self.centered_index());
        }
    }

    pub fn fling(&mut self, velocity: f32) {
        self.velocity = velocity;
        self.phase = ScrollPhase::Flinging;
    }

    /// Animate to `index`.
    pub fn animate_to(&mut self, index: usize) {
        self.velocity = 0.0;
        self.phase = ScrollPhase::Snapping {
            target: index.min(self.max_index),
        };
    }

    /// Animate by `delta` whole rows from the row currently being targeted.
    pub fn step(&mut self, delta: isize) {
        let from = match self.phase {
            ScrollPhase::Snapping { target } => target,
            _ => self.centered_index(),
        };
        let target = from.saturating_add_signed(delta).min(self.max_index);
        self.animate_to(target);
    }

    /// Advance the animation by one frame. Returns `true` while moving.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let dt = dt.as_secs_f32();
        match self.phase {
            ScrollPhase::Idle | ScrollPhase::Dragging => false,
            ScrollPhase::Flinging => {
                let next = self.offset + self.velocity * dt;
                self.velocity *= (-FRICTION * dt).exp();

                if next <= 0.0 || next >= self.max_index as f32 {
                    self.offset = self.clamp(next);
                    self.animate_to(self.centered_index());
                } else {
                    self.offset = next;
                    if self.velocity.abs() < MIN_FLING_SPEED {
                        let target = if self.velocity > 0.0 {
                            self.offset.ceil()
                        } else {
                            self.offset.floor()
                        };
                        self.animate_to(target.max(0.0) as usize);
                    }
                }
                true
            }
            ScrollPhase::Snapping { target } => {
                let goal = target as f32;
                let remaining = goal - self.offset;
                let eased = remaining * (1.0 - (-SNAP_RATE * dt).exp());
                let step = eased.abs().max(MIN_SNAP_SPEED * dt);

                if remaining.abs() <= SNAP_EPSILON || step >= remaining.abs() {
                    self.offset = goal;
                    self.phase = ScrollPhase::Idle;
                    false
                } else {
                    self.offset += step.copysign(remaining);
                    true
                }
            }
        }
    }

    fn clamp(&self, offset: f32) -> f32 {
        offset.clamp(0.0, self.max_index as f32)
    }
}
