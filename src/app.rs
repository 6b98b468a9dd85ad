use std::sync::Arc;
use std::time::{Duration, Instant};

use ratatui::style::Style;
use tokio::sync::mpsc::UnboundedSender;

use wheelpick::config::Config;
use wheelpick::log;
use wheelpick::picker::{PickerOptions, WheelControl, WheelPicker};
use wheelpick::scroll::{WheelAccumulator, WheelMotion};

use crate::events::{Action, PickerId};
use crate::tui::interaction::InteractionRegistry;
use crate::tui::theme::{BACKGROUND, TEXT_WHITE};

/// Items shown when the config does not name any. Duplicates are intentional.
pub const DEFAULT_ITEMS: [&str; 8] = [
    "Item 1", "Item 2", "Item 3", "Item 4", "Item 1", "Item 2", "Item 3", "Item 4",
];

/// Hour shown initially in the second picker
const DEFAULT_HOUR: u32 = 9;

/// A drag older than this is treated as having stopped before release
const DRAG_IDLE: Duration = Duration::from_millis(100);

/// Selection reported by a picker listener.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionChange {
    Item(String),
    Hour(u32),
}

/// Pointer drag in progress
#[derive(Debug, Clone)]
struct DragState {
    picker: PickerId,
    last_row: u16,
    last_at: Instant,
    /// Smoothed rows per second
    velocity: f32,
}

pub struct App {
    pub items: WheelPicker<String>,
    pub hours: WheelPicker<u32>,
    pub focus: PickerId,
    /// Host-owned selections, updated from picker listeners
    pub selected_item: String,
    pub selected_hour: u32,
    pub sound_enabled: bool,
    pub haptic_enabled: bool,
    pub interactions: InteractionRegistry,
    pub should_quit: bool,
    pub confirmed: bool,
    wheel: WheelAccumulator,
    drag: Option<DragState>,
}

impl App {
    pub fn new(config: &Config, changes: UnboundedSender<SelectionChange>) -> Self {
        let mut options = config.to_options(Style::new().fg(TEXT_WHITE));
        options.fade_background = BACKGROUND;
        Self::with_options(config, options, changes)
    }

    pub fn with_options(
        config: &Config,
        options: PickerOptions,
        changes: UnboundedSender<SelectionChange>,
    ) -> Self {
        let list: Arc<[String]> = if config.items.is_empty() {
            DEFAULT_ITEMS.iter().map(|s| s.to_string()).collect()
        } else {
            config.items.iter().cloned().collect()
        };
        let selected_item = config
            .selected
            .clone()
            .or_else(|| list.first().cloned())
            .unwrap_or_default();

        let items = {
            let tx = changes.clone();
            WheelPicker::new(list, &selected_item, options).on_change(move |item: &String| {
                let _ = tx.send(SelectionChange::Item(item.clone()));
            })
        };

        let hours = {
            let tx = changes;
            WheelPicker::with_formatter((0..24).collect(), &DEFAULT_HOUR, options, |hour: &u32| {
                format!("{:02}:00", hour)
            })
            .on_change(move |hour: &u32| {
                let _ = tx.send(SelectionChange::Hour(*hour));
            })
        };

        // The host owns the selection; mirror what the wheel actually centered.
        let selected_item = items.selected_item().cloned().unwrap_or(selected_item);
        let selected_hour = hours.selected_item().copied().unwrap_or(DEFAULT_HOUR);

        Self {
            items,
            hours,
            focus: PickerId::Items,
            selected_item,
            selected_hour,
            sound_enabled: options.enable_sound,
            haptic_enabled: options.enable_haptic,
            interactions: InteractionRegistry::new(),
            should_quit: false,
            confirmed: false,
            wheel: WheelAccumulator::default(),
            drag: None,
        }
    }

    pub fn picker_mut(&mut self, id: PickerId) -> &mut dyn WheelControl {
        match id {
            PickerId::Items => &mut self.items,
            PickerId::Hours => &mut self.hours,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Advance every picker by one frame. Returns `true` while any is moving.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let items_moving = self.items.tick(dt);
        let hours_moving = self.hours.tick(dt);
        items_moving || hours_moving
    }

    /// Record a selection reported by a picker.
    pub fn apply_change(&mut self, change: SelectionChange) {
        log::log_event(&format!("selection {:?}", change));
        match change {
            SelectionChange::Item(item) => self.selected_item = item,
            SelectionChange::Hour(hour) => self.selected_hour = hour,
        }
    }

    pub fn apply(&mut self, action: Action) {
        self.apply_at(action, Instant::now());
    }

    pub fn apply_at(&mut self, action: Action, now: Instant) {
        match action {
            Action::None => {}
            Action::Quit => self.should_quit = true,
            Action::Confirm => {
                self.confirmed = true;
                self.should_quit = true;
            }
            Action::ToggleSound => {
                self.sound_enabled = !self.sound_enabled;
                let enabled = self.sound_enabled;
                self.items.set_sound_enabled(enabled);
                self.hours.set_sound_enabled(enabled);
            }
            Action::ToggleHaptic => {
                self.haptic_enabled = !self.haptic_enabled;
                let enabled = self.haptic_enabled;
                self.items.set_haptic_enabled(enabled);
                self.hours.set_haptic_enabled(enabled);
            }
            Action::SwitchFocus => self.focus = self.focus.other(),
            Action::Step(delta) => self.picker_mut(self.focus).step(delta),
            Action::First => self.picker_mut(self.focus).select_first(),
            Action::Last => self.picker_mut(self.focus).select_last(),
            Action::Wheel { picker, delta } => {
                self.focus = picker;
                match self.wheel.accumulate_at(delta, now) {
                    WheelMotion::Step(rows) => self.picker_mut(picker).step(rows),
                    WheelMotion::Fling(velocity) => self.picker_mut(picker).fling(velocity),
                }
            }
            Action::BeginDrag { picker, row } => {
                self.focus = picker;
                self.drag = Some(DragState {
                    picker,
                    last_row: row,
                    last_at: now,
                    velocity: 0.0,
                });
            }
            Action::DragTo { row } => self.drag_to(row, now),
            Action::EndDrag => {
                if let Some(drag) = self.drag.take() {
                    let velocity = if now.saturating_duration_since(drag.last_at) > DRAG_IDLE {
                        0.0
                    } else {
                        drag.velocity
                    };
                    self.picker_mut(drag.picker).release(velocity);
                }
            }
        }
    }

    fn drag_to(&mut self, row: u16, now: Instant) {
        let Some(mut drag) = self.drag.take() else {
            return;
        };
        let row_height = self.picker_mut(drag.picker).row_height().max(1) as f32;
        // Pulling the pointer down brings earlier rows into the center.
        let rows = (drag.last_row as f32 - row as f32) / row_height;
        let elapsed = now.saturating_duration_since(drag.last_at).as_secs_f32();
        if elapsed > 0.0 {
            drag.velocity = 0.7 * (rows / elapsed) + 0.3 * drag.velocity;
        }
        drag.last_row = row;
        drag.last_at = now;

        self.picker_mut(drag.picker).drag_by(rows);
        self.drag = Some(drag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    const FRAME: Duration = Duration::from_millis(16);

    fn quiet_app(config: &Config) -> (App, mpsc::UnboundedReceiver<SelectionChange>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let options = PickerOptions {
            enable_sound: false,
            enable_haptic: false,
            ..PickerOptions::default()
        };
        (App::with_options(config, options, tx), rx)
    }

    fn run_frames(app: &mut App, rx: &mut mpsc::UnboundedReceiver<SelectionChange>) {
        while app.tick(FRAME) {}
        while let Ok(change) = rx.try_recv() {
            app.apply_change(change);
        }
    }

    #[test]
    fn test_defaults_select_first_item_and_hour() {
        let (app, _rx) = quiet_app(&Config::default());
        assert_eq!(app.selected_item, "Item 1");
        assert_eq!(app.selected_hour, DEFAULT_HOUR);
        assert_eq!(app.items.items().len(), 8);
    }

    #[test]
    fn test_step_updates_host_selection() {
        let (mut app, mut rx) = quiet_app(&Config::default());

        app.apply(Action::Step(2));
        run_frames(&mut app, &mut rx);
        assert_eq!(app.selected_item, "Item 3");

        app.apply(Action::SwitchFocus);
        app.apply(Action::Step(-1));
        run_frames(&mut app, &mut rx);
        assert_eq!(app.selected_hour, DEFAULT_HOUR - 1);
    }

    #[test]
    fn test_absent_configured_selection_falls_back() {
        let config = Config {
            items: vec!["a".to_string(), "b".to_string()],
            selected: Some("zzz".to_string()),
            ..Config::default()
        };
        let (app, _rx) = quiet_app(&config);
        assert_eq!(app.selected_item, "a");
    }

    #[test]
    fn test_drag_and_release_snaps() {
        let (mut app, mut rx) = quiet_app(&Config::default());
        let start = Instant::now();
        let row_height = app.items.row_height();

        app.apply_at(Action::BeginDrag { picker: PickerId::Items, row: 20 }, start);
        app.apply_at(
            Action::DragTo { row: 20 - row_height },
            start + Duration::from_millis(300),
        );
        assert!(app.is_dragging());
        app.apply_at(Action::EndDrag, start + Duration::from_millis(600));
        assert!(!app.is_dragging());

        run_frames(&mut app, &mut rx);
        assert_eq!(app.items.offset(), 1.0);
        assert_eq!(app.selected_item, "Item 2");
    }

    #[test]
    fn test_toggles_and_confirm() {
        let (mut app, _rx) = quiet_app(&Config::default());
        app.apply(Action::ToggleSound);
        assert!(app.sound_enabled);
        assert!(app.items.options().enable_sound);
        app.apply(Action::ToggleHaptic);
        assert!(app.hours.options().enable_haptic);

        app.apply(Action::Confirm);
        assert!(app.should_quit && app.confirmed);
    }
}
