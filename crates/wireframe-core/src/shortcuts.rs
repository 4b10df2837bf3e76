//! Keyboard shortcut registry.

use crate::editor::EditorCommand;
use crate::input::KeyEvent;
use crate::tools::ToolKind;

/// A keyboard shortcut definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Shortcut {
    pub key: &'static str,
    pub ctrl: bool,
    pub description: &'static str,
    pub command: EditorCommand,
}

impl Shortcut {
    pub const fn new(
        key: &'static str,
        ctrl: bool,
        description: &'static str,
        command: EditorCommand,
    ) -> Self {
        Self {
            key,
            ctrl,
            description,
            command,
        }
    }

    /// Format the shortcut for display (e.g., "Ctrl+S").
    pub fn format(&self) -> String {
        if self.ctrl {
            format!("Ctrl+{}", self.key)
        } else {
            self.key.to_string()
        }
    }

    /// Check whether `event` triggers this shortcut.
    ///
    /// Keys compare case-insensitively. Bare shortcuts do not fire while Ctrl
    /// (or the command key) is held.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.ctrl == event.modifiers.command() && self.key.eq_ignore_ascii_case(&event.key)
    }
}

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts.
    pub fn all() -> Vec<Shortcut> {
        use EditorCommand::*;
        vec![
            Shortcut::new("N", true, "New canvas", NewCanvas),
            Shortcut::new("S", true, "Export SVG", Export),
            Shortcut::new("Z", true, "Undo", Undo),
            Shortcut::new("Y", true, "Redo", Redo),
            Shortcut::new("D", true, "Duplicate selection", Duplicate),
            Shortcut::new("V", false, "Select tool", SetTool(ToolKind::Select)),
            Shortcut::new("R", false, "Rectangle tool", SetTool(ToolKind::Rectangle)),
            Shortcut::new("C", false, "Circle tool", SetTool(ToolKind::Circle)),
            Shortcut::new("L", false, "Line tool", SetTool(ToolKind::Line)),
            Shortcut::new("T", false, "Text tool", SetTool(ToolKind::Text)),
            Shortcut::new("Delete", false, "Delete selection", Delete),
            Shortcut::new("Backspace", false, "Delete selection", Delete),
            Shortcut::new("+", false, "Zoom in", ZoomIn),
            Shortcut::new("=", false, "Zoom in", ZoomIn),
            Shortcut::new("-", false, "Zoom out", ZoomOut),
            Shortcut::new("0", false, "Reset zoom", ResetZoom),
            Shortcut::new("G", false, "Toggle grid", ToggleGrid),
            Shortcut::new("S", false, "Toggle snap to grid", ToggleSnap),
        ]
    }

    /// Find the command bound to a key press.
    pub fn lookup(event: &KeyEvent) -> Option<EditorCommand> {
        Self::all()
            .into_iter()
            .find(|shortcut| shortcut.matches(event))
            .map(|shortcut| shortcut.command)
    }

    /// Shortcut table as aligned text lines.
    pub fn describe() -> Vec<String> {
        Self::all()
            .iter()
            .map(|shortcut| format!("  {:12} {}", shortcut.format(), shortcut.description))
            .collect()
    }
}
