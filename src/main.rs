mod app;
mod events;
mod tui;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io::stdout;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

use app::{App, SelectionChange};
use wheelpick::config::{Config, Overrides};
use wheelpick::log;

/// Frame interval while a wheel is moving (~60 fps)
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

const USAGE: &str = "\
Usage: wheelpick [OPTIONS]

Options:
  --pad <N>            Context rows above and below the centered row
  --items <A,B,...>    Comma separated items for the first wheel
  --selected <ITEM>    Initially selected item
  --no-sound           Disable the tick sound
  --no-haptic          Disable the divider pulse
  -h, --help           Print this help";

/// Parse CLI arguments into config overrides.
///
/// Returns `None` when help was requested.
fn parse_args(args: &[String]) -> Option<Overrides> {
    let mut overrides = Overrides::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--pad" | "-p" => {
                match args.get(i + 1).map(|v| v.parse::<usize>()) {
                    Some(Ok(pad)) => overrides.out_of_bounds_count = Some(pad),
                    _ => eprintln!("Warning: --pad requires a number"),
                }
                i += 2;
                continue;
            }
            "--items" => {
                if let Some(list) = args.get(i + 1) {
                    let items: Vec<String> = list
                        .split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(String::from)
                        .collect();
                    overrides.items = Some(items);
                } else {
                    eprintln!("Warning: --items requires a comma separated list");
                }
                i += 2;
                continue;
            }
            "--selected" => {
                if let Some(item) = args.get(i + 1) {
                    overrides.selected = Some(item.clone());
                } else {
                    eprintln!("Warning: --selected requires an item");
                }
                i += 2;
                continue;
            }
            "--no-sound" => overrides.enable_sound = Some(false),
            "--no-haptic" => overrides.enable_haptic = Some(false),
            "--help" | "-h" => return None,
            other => eprintln!("Warning: ignoring unknown argument '{}'", other),
        }
        i += 1;
    }

    Some(overrides)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let Some(overrides) = parse_args(&args) else {
        println!("{}", USAGE);
        return Ok(());
    };

    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }

    // Load config with precedence: CLI > env var > file > default
    let config = Config::load().with_overrides(overrides);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (change_tx, change_rx) = mpsc::unbounded_channel();

    // Scope the app so the pickers (and their tick sounds) are dropped before
    // the terminal is restored.
    let result = {
        let mut app = App::new(&config, change_tx);
        run_app(&mut terminal, &mut app, change_rx)
            .await
            .map(|_| app.confirmed.then(|| (app.selected_item.clone(), app.selected_hour)))
    };

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Some((item, hour)) = result? {
        log::log(&format!("Confirmed {} at {:02}:00", item, hour));
        println!("{} at {:02}:00", item, hour);
    }

    Ok(())
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    mut changes: mpsc::UnboundedReceiver<SelectionChange>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut frames = tokio::time::interval(FRAME_INTERVAL);
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    let mut last_frame = Instant::now();

    loop {
        // Render
        terminal.draw(|frame| tui::ui::render(frame, app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => {
                        let action = events::handle_event(app, &event);
                        app.apply(action);
                    }
                    Some(Err(e)) => {
                        log::log(&format!("Terminal event error: {}", e));
                    }
                    None => break,
                }
            }
            _ = frames.tick() => {
                let now = Instant::now();
                app.tick(now - last_frame);
                last_frame = now;
            }
        }

        // Drain selection changes reported during this frame, in order
        while let Ok(change) = changes.try_recv() {
            app.apply_change(change);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("wheelpick")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_args() {
        let overrides = parse_args(&args(&[
            "--pad", "2", "--no-sound", "--items", "a, b,,c", "--selected", "b",
        ]))
        .unwrap();

        assert_eq!(overrides.out_of_bounds_count, Some(2));
        assert_eq!(overrides.enable_sound, Some(false));
        assert_eq!(overrides.enable_haptic, None);
        assert_eq!(
            overrides.items,
            Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
        );
        assert_eq!(overrides.selected.as_deref(), Some("b"));
    }

    #[test]
    fn test_help_and_bad_pad() {
        assert!(parse_args(&args(&["--help"])).is_none());
        let overrides = parse_args(&args(&["--pad", "lots"])).unwrap();
        assert_eq!(overrides.out_of_bounds_count, None);
    }
}
