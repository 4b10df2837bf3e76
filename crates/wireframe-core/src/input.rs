//! Pointer and keyboard event types, plus click debouncing.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Default debounce window for button commands.
pub const DEFAULT_DEBOUNCE_MS: u64 = 100;

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub meta: bool,
}

impl Modifiers {
    /// Only Ctrl held.
    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::default()
        }
    }

    /// Ctrl or the platform command key.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Pointer event in client (screen) coordinates.
///
/// Each event carries the on-screen rectangle of the canvas so the editor can
/// map it to logical coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointerEvent {
    Down { position: Point, bounds: Rect },
    Move { position: Point, bounds: Rect },
    Up { position: Point, bounds: Rect },
    /// The pointer left the canvas.
    Leave,
}

/// A key press.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// Key name: a single character (`"z"`, `"+"`) or a named key (`"Delete"`).
    pub key: String,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// A key press without modifiers.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::default(),
        }
    }

    /// A key press with Ctrl held.
    pub fn ctrl(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::ctrl(),
        }
    }
}

/// Drops button commands that arrive too quickly after the previous one.
#[derive(Debug, Clone)]
pub struct ClickDebounce {
    window: Duration,
    last_accepted: Option<Instant>,
}

impl Default for ClickDebounce {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DEBOUNCE_MS))
    }
}

impl ClickDebounce {
    /// Create a debounce with the given window.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_accepted: None,
        }
    }

    /// The debounce window.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Check a click happening now.
    pub fn accept(&mut self) -> bool {
        self.accept_at(Instant::now())
    }

    /// Check a click happening at `now`. Accepted clicks restart the window.
    pub fn accept_at(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_accepted {
            if now.saturating_duration_since(last) < self.window {
                log::debug!("click dropped by debounce");
                return false;
            }
        }
        self.last_accepted = Some(now);
        true
    }

    /// Forget the last accepted click.
    pub fn reset(&mut self) {
        self.last_accepted = None;
    }
}
