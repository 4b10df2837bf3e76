//! Editor configuration.

use crate::canvas::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
use crate::history::DEFAULT_HISTORY_CAPACITY;
use crate::input::DEFAULT_DEBOUNCE_MS;
use crate::shapes::{SerializableColor, ShapeStyle, Text};
use crate::snap::GRID_SIZE;
use crate::tools::DEFAULT_TEXT;
use crate::viewport::{DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, DEFAULT_ZOOM_STEP};
use kurbo::Vec2;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Could not determine configuration directory")]
    NoConfigDir,
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Editor settings. Missing fields take their default values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Logical canvas width.
    pub canvas_width: f64,
    /// Logical canvas height.
    pub canvas_height: f64,
    /// Canvas background.
    pub background: SerializableColor,
    /// Style for new shapes and for imported shapes missing style.
    pub default_style: ShapeStyle,
    /// Content for new text.
    pub default_text: String,
    /// Font size for new text.
    pub font_size: f64,
    /// Offset applied to duplicated shapes.
    pub duplicate_offset: Vec2,
    /// Maximum number of undo snapshots.
    pub history_capacity: usize,
    /// Debounce window for button commands, in milliseconds.
    pub debounce_ms: u64,
    /// Zoom multiplier per step.
    pub zoom_step: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Grid spacing.
    pub grid_size: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            background: SerializableColor::white(),
            default_style: ShapeStyle::default(),
            default_text: DEFAULT_TEXT.to_string(),
            font_size: Text::DEFAULT_FONT_SIZE,
            duplicate_offset: Vec2::new(20.0, 20.0),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            zoom_step: DEFAULT_ZOOM_STEP,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            grid_size: GRID_SIZE,
        }
    }
}

impl EditorConfig {
    /// Default configuration file location.
    ///
    /// On Linux: `~/.config/wireframe/config.json`
    pub fn default_path() -> ConfigResult<PathBuf> {
        let base = dirs::config_dir()
            .or_else(dirs::home_dir)
            .ok_or(ConfigError::NoConfigDir)?;
        Ok(base.join("wireframe").join("config.json"))
    }

    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let json = fs::read_to_string(path)?;
        let config = serde_json::from_str(&json)?;
        log::info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration, falling back to defaults on any error.
    ///
    /// A missing file is expected and only logged at debug level.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no configuration at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!(
                    "failed to load configuration from {}: {e}; using defaults",
                    path.display()
                );
                Self::default()
            }
        }
    }

    /// Replace settings the editor cannot work with.
    ///
    /// Zoom limits that are not finite and positive fall back to their
    /// defaults, and inverted limits are swapped. A zoom step that is not
    /// finite and positive falls back to the default step.
    pub fn validated(mut self) -> Self {
        if !(self.zoom_step.is_finite() && self.zoom_step > 0.0) {
            log::warn!(
                "invalid zoom_step {}, using {DEFAULT_ZOOM_STEP}",
                self.zoom_step
            );
            self.zoom_step = DEFAULT_ZOOM_STEP;
        }
        if !(self.min_zoom.is_finite() && self.min_zoom > 0.0) {
            log::warn!("invalid min_zoom {}, using {DEFAULT_MIN_ZOOM}", self.min_zoom);
            self.min_zoom = DEFAULT_MIN_ZOOM;
        }
        if !(self.max_zoom.is_finite() && self.max_zoom > 0.0) {
            log::warn!("invalid max_zoom {}, using {DEFAULT_MAX_ZOOM}", self.max_zoom);
            self.max_zoom = DEFAULT_MAX_ZOOM;
        }
        if self.min_zoom > self.max_zoom {
            log::warn!(
                "min_zoom {} exceeds max_zoom {}, swapping",
                self.min_zoom,
                self.max_zoom
            );
            std::mem::swap(&mut self.min_zoom, &mut self.max_zoom);
        }
        self
    }

    /// Save configuration as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
