//! Tick sound and haptic pulse fired when the centered row changes.
//!
//! Both are fire-and-forget: the picker never waits on them and a failing
//! sound device only turns sound off.

use std::io::{self, IsTerminal, Stdout, Write};
use std::time::{Duration, Instant};

use crate::error::{SoundError, SoundResult};
use crate::log;

/// How long the divider pulse stays visible
pub const PULSE_DURATION: Duration = Duration::from_millis(120);

/// A short tick clip. Each `play` restarts it from the beginning.
pub trait TickSound {
    fn play(&mut self) -> SoundResult<()>;
}

/// A short feedback pulse.
pub trait Haptics {
    fn pulse(&mut self);

    /// Whether the pulse is still visible. Only meaningful for visual pulses.
    fn is_active(&self) -> bool {
        false
    }
}

/// Opens the tick sound on first use.
pub type SoundFactory = Box<dyn FnMut() -> SoundResult<Box<dyn TickSound>>>;

/// Rings the terminal bell.
pub struct TerminalBell<W: Write> {
    out: W,
}

impl TerminalBell<Stdout> {
    pub fn stdout() -> SoundResult<Self> {
        let out = io::stdout();
        if !out.is_terminal() {
            return Err(SoundError::NotATerminal);
        }
        Ok(Self { out })
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> TickSound for TerminalBell<W> {
    fn play(&mut self) -> SoundResult<()> {
        self.out
            .write_all(b"\x07")
            .and_then(|_| self.out.flush())
            .map_err(|e| SoundError::PlaybackFailed(e.to_string()))
    }
}

/// Synthesized tick played through the default audio output.
#[cfg(feature = "clip")]
pub struct ClipTick {
    stream: rodio::OutputStream,
}

#[cfg(feature = "clip")]
impl ClipTick {
    pub fn open() -> SoundResult<Self> {
        let stream = rodio::OutputStreamBuilder::open_default_stream()
            .map_err(|e| SoundError::OutputUnavailable(e.to_string()))?;
        Ok(Self { stream })
    }
}

#[cfg(feature = "clip")]
impl TickSound for ClipTick {
    fn play(&mut self) -> SoundResult<()> {
        use rodio::Source;

        let tick = rodio::source::SineWave::new(1760.0)
            .take_duration(Duration::from_millis(25))
            .amplify(0.5);
        self.stream.mixer().add(tick);
        Ok(())
    }
}

/// The tick sound used when none is injected.
pub fn default_sound_factory() -> SoundFactory {
    Box::new(|| {
        #[cfg(feature = "clip")]
        {
            if let Ok(clip) = ClipTick::open() {
                return Ok(Box::new(clip) as Box<dyn TickSound>);
            }
        }
        TerminalBell::stdout().map(|bell| Box::new(bell) as Box<dyn TickSound>)
    })
}

/// Tick sound acquired lazily and owned until drop.
pub struct LazySound {
    state: SoundState,
}

enum SoundState {
    Pending(SoundFactory),
    Ready(Box<dyn TickSound>),
    Disabled,
}

impl LazySound {
    pub fn new(factory: SoundFactory) -> Self {
        Self {
            state: SoundState::Pending(factory),
        }
    }

    /// Sound that is off for good.
    pub fn disabled() -> Self {
        Self {
            state: SoundState::Disabled,
        }
    }

    pub fn is_acquired(&self) -> bool {
        matches!(self.state, SoundState::Ready(_))
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self.state, SoundState::Disabled)
    }

    /// Restart and play the tick, opening it first if needed.
    ///
    /// Errors are logged and switch the sound off; they never escape.
    pub fn play(&mut self) {
        if let SoundState::Pending(factory) = &mut self.state {
            self.state = match factory() {
                Ok(sound) => {
                    log::log("Tick sound acquired");
                    SoundState::Ready(sound)
                }
                Err(e) => {
                    log::log(&format!("Tick sound unavailable, disabling: {}", e));
                    SoundState::Disabled
                }
            };
        }

        if let SoundState::Ready(sound) = &mut self.state {
            if let Err(e) = sound.play() {
                log::log(&format!("Tick sound failed, disabling: {}", e));
                self.release();
            }
        }
    }

    /// Drop the sound resource now. Later `play` calls do nothing.
    pub fn release(&mut self) {
        if let SoundState::Ready(_) = std::mem::replace(&mut self.state, SoundState::Disabled) {
            log::log("Tick sound released");
        }
    }
}

impl Drop for LazySound {
    fn drop(&mut self) {
        self.release();
    }
}

/// Visual stand-in for a vibration motor: emphasises the dividers briefly.
#[derive(Debug, Clone)]
pub struct DividerPulse {
    duration: Duration,
    until: Option<Instant>,
}

impl Default for DividerPulse {
    fn default() -> Self {
        Self::new(PULSE_DURATION)
    }
}

impl DividerPulse {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            until: None,
        }
    }
}

impl Haptics for DividerPulse {
    fn pulse(&mut self) {
        self.until = Some(Instant::now() + self.duration);
    }

    fn is_active(&self) -> bool {
        self.until.is_some_and(|until| Instant::now() < until)
    }
}
