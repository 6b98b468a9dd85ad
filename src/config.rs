//! Configuration file support for wheelpick.
//!
//! Configuration is loaded from `~/.config/wheelpick/config.toml` with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/wheelpick/config.toml
//! out_of_bounds_count = 2
//! vertical_padding = 1
//! divider_color = "#7CAFC2"
//! enable_sound = false
//!
//! items = ["Item 1", "Item 2", "Item 3", "Item 4"]
//! selected = "Item 3"
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;

use ratatui::style::{Color, Style};
use serde::Deserialize;

use crate::error::{PickerError, Result};
use crate::log;
use crate::picker::{ItemTextStyle, PickerOptions};

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Context rows above and below the centered row
    pub out_of_bounds_count: Option<usize>,

    /// Blank lines above and below each label
    pub vertical_padding: Option<u16>,

    /// Divider thickness (0 hides the dividers)
    pub divider_thickness: Option<u16>,

    /// Divider colour, any ratatui colour name or `#rrggbb`
    pub divider_color: Option<String>,

    /// Label line height in cells
    pub line_height: Option<u16>,

    pub enable_sound: Option<bool>,

    pub enable_haptic: Option<bool>,

    /// Items shown by the demo picker
    #[serde(default)]
    pub items: Vec<String>,

    /// Initially selected demo item
    pub selected: Option<String>,
}

/// Values given on the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub out_of_bounds_count: Option<usize>,
    pub enable_sound: Option<bool>,
    pub enable_haptic: Option<bool>,
    pub items: Option<Vec<String>>,
    pub selected: Option<String>,
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Self::default();
        }

        match Self::load_from(&config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: {}", e);
                log::log(&format!("Config ignored: {}", e));
                Self::default()
            }
        }
    }

    /// Read and parse a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| PickerError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wheelpick")
    }

    /// Apply environment variables, then CLI arguments.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if env_flag("WHEELPICK_NO_SOUND") {
            self.enable_sound = Some(false);
        }
        if env_flag("WHEELPICK_NO_HAPTIC") {
            self.enable_haptic = Some(false);
        }

        if overrides.out_of_bounds_count.is_some() {
            self.out_of_bounds_count = overrides.out_of_bounds_count;
        }
        if overrides.enable_sound.is_some() {
            self.enable_sound = overrides.enable_sound;
        }
        if overrides.enable_haptic.is_some() {
            self.enable_haptic = overrides.enable_haptic;
        }
        if let Some(items) = overrides.items {
            self.items = items;
        }
        if overrides.selected.is_some() {
            self.selected = overrides.selected;
        }
        self
    }

    /// Parsed divider colour. Unknown names fall back to the default.
    pub fn divider_color(&self) -> Color {
        let default = PickerOptions::default().divider_color;
        self.divider_color
            .as_deref()
            .map(|name| Color::from_str(name).unwrap_or(default))
            .unwrap_or(default)
    }

    /// Picker options with `text` as the label style.
    pub fn to_options(&self, text: Style) -> PickerOptions {
        let defaults = PickerOptions::default();
        let mut text_style = ItemTextStyle::new(text);
        text_style.line_height = self.line_height;

        PickerOptions {
            out_of_bounds_count: self.out_of_bounds_count.unwrap_or(defaults.out_of_bounds_count),
            text_style,
            vertical_padding: self.vertical_padding.unwrap_or(defaults.vertical_padding),
            divider_color: self.divider_color(),
            divider_thickness: self.divider_thickness.unwrap_or(defaults.divider_thickness),
            enable_sound: self.enable_sound.unwrap_or(defaults.enable_sound),
            enable_haptic: self.enable_haptic.unwrap_or(defaults.enable_haptic),
            fade_background: defaults.fade_background,
        }
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|value| !value.is_empty() && value != "0")
        .unwrap_or(false)
}
