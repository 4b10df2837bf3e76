//! Input scripts: recorded editor input replayed from JSON.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;
use wireframe_core::{
    Editor, EditorCommand, EditorHost, KeyEvent, PointerEvent, StyleEdit, ToolKind,
};

/// A replayable sequence of input steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub steps: Vec<ScriptStep>,
}

/// One step of a script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScriptStep {
    /// A pointer event in screen coordinates.
    Pointer(PointerEvent),
    /// A key press, dispatched through the shortcut table.
    Key(KeyEvent),
    /// Pick a tool from the toolbar.
    Tool { tool: ToolKind },
    /// An edit from the style inspector.
    Style(StyleEdit),
    /// Import an SVG file, replacing the canvas.
    Import { path: PathBuf },
    /// Run a command directly.
    Command(EditorCommand),
    /// Press a toolbar button (subject to click debouncing).
    Click(EditorCommand),
    /// Pause between steps.
    Wait { ms: u64 },
}

/// Counts of what a replay did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub steps: usize,
    /// Steps that had no effect, such as a rejected import or a debounced click.
    pub ignored: usize,
}

impl Script {
    /// Parse a script from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Feed every step to `editor`. Relative import paths resolve against `base_dir`.
    pub fn replay(
        &self,
        editor: &mut Editor,
        host: &mut dyn EditorHost,
        base_dir: &std::path::Path,
    ) -> ReplaySummary {
        let mut summary = ReplaySummary::default();
        for (index, step) in self.steps.iter().enumerate() {
            summary.steps += 1;
            if !apply_step(step, editor, host, base_dir) {
                log::debug!("step {index} had no effect: {step:?}");
                summary.ignored += 1;
            }
        }
        summary
    }
}

fn apply_step(
    step: &ScriptStep,
    editor: &mut Editor,
    host: &mut dyn EditorHost,
    base_dir: &std::path::Path,
) -> bool {
    match step {
        ScriptStep::Pointer(event) => {
            editor.handle_pointer(*event);
            true
        }
        ScriptStep::Key(event) => editor.handle_key(event, host).is_some(),
        ScriptStep::Tool { tool } => {
            editor.set_tool(*tool);
            true
        }
        ScriptStep::Style(edit) => {
            editor.apply_style(*edit);
            true
        }
        ScriptStep::Import { path } => {
            let path = base_dir.join(path);
            match std::fs::read_to_string(&path) {
                Ok(text) => editor.import_svg(&text).is_ok(),
                Err(e) => {
                    log::error!("Failed to read {}: {}", path.display(), e);
                    false
                }
            }
        }
        ScriptStep::Command(command) => editor.execute(*command, host),
        ScriptStep::Click(command) => editor.click(*command, host),
        ScriptStep::Wait { ms } => {
            thread::sleep(Duration::from_millis(*ms));
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::CliHost;
    use tempfile::tempdir;
    use wireframe_core::EditorConfig;

    const DRAW_TWO: &str = r#"{
        "steps": [
            {"action": "tool", "tool": "rectangle"},
            {"action": "pointer", "type": "down",
             "position": {"x": 100.0, "y": 100.0},
             "bounds": {"x0": 0.0, "y0": 0.0, "x1": 1200.0, "y1": 800.0}},
            {"action": "pointer", "type": "up",
             "position": {"x": 300.0, "y": 250.0},
             "bounds": {"x0": 0.0, "y0": 0.0, "x1": 1200.0, "y1": 800.0}},
            {"action": "key", "key": "c"},
            {"action": "pointer", "type": "down",
             "position": {"x": 0.0, "y": 0.0},
             "bounds": {"x0": 0.0, "y0": 0.0, "x1": 1200.0, "y1": 800.0}},
            {"action": "pointer", "type": "up",
             "position": {"x": 40.0, "y": 0.0},
             "bounds": {"x0": 0.0, "y0": 0.0, "x1": 1200.0, "y1": 800.0}}
        ]
    }"#;

    #[test]
    fn test_parse_steps() {
        let script = Script::from_json(DRAW_TWO).unwrap();
        assert_eq!(script.steps.len(), 6);
        assert_eq!(script.steps[0], ScriptStep::Tool { tool: ToolKind::Rectangle });
        assert_eq!(script.steps[3], ScriptStep::Key(KeyEvent::new("c")));
    }

    #[test]
    fn test_parse_commands_and_style() {
        let json = r#"{"steps": [
            {"action": "command", "command": "undo"},
            {"action": "click", "command": "set_tool", "tool": "line"},
            {"action": "style", "property": "stroke_width", "value": 4.0},
            {"action": "wait", "ms": 5}
        ]}"#;
        let script = Script::from_json(json).unwrap();
        assert_eq!(script.steps[0], ScriptStep::Command(EditorCommand::Undo));
        assert_eq!(
            script.steps[1],
            ScriptStep::Click(EditorCommand::SetTool(ToolKind::Line))
        );
        assert_eq!(script.steps[2], ScriptStep::Style(StyleEdit::StrokeWidth(4.0)));
        assert_eq!(script.steps[3], ScriptStep::Wait { ms: 5 });
    }

    #[test]
    fn test_replay_draws_shapes() {
        let dir = tempdir().unwrap();
        let mut editor = Editor::new(EditorConfig::default());
        let mut host = CliHost::new(false, dir.path().to_path_buf());

        let summary = Script::from_json(DRAW_TWO)
            .unwrap()
            .replay(&mut editor, &mut host, dir.path());

        assert_eq!(summary.steps, 6);
        assert_eq!(summary.ignored, 0);
        let bounds: Vec<_> = editor.document().shapes().iter().map(|s| s.bounds()).collect();
        assert_eq!(bounds.len(), 2);
        assert_eq!(bounds[0], kurbo::Rect::new(100.0, 100.0, 300.0, 250.0));
        // Circle radius is half the drag distance
        assert!((bounds[1].width() - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_replay_counts_failed_import() {
        let dir = tempdir().unwrap();
        let mut editor = Editor::new(EditorConfig::default());
        let mut host = CliHost::new(false, dir.path().to_path_buf());
        let script = Script {
            steps: vec![ScriptStep::Import {
                path: PathBuf::from("missing.svg"),
            }],
        };

        let summary = script.replay(&mut editor, &mut host, dir.path());
        assert_eq!(summary.ignored, 1);
        assert!(editor.document().is_empty());
    }

    #[test]
    fn test_replay_import_relative_to_base() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("in.svg"),
            r#"<svg xmlns="http://www.w3.org/2000/svg"><line x1="0" y1="0" x2="10" y2="10" stroke="black"/></svg>"#,
        )
        .unwrap();
        let mut editor = Editor::new(EditorConfig::default());
        let mut host = CliHost::new(false, dir.path().to_path_buf());
        let script = Script {
            steps: vec![ScriptStep::Import {
                path: PathBuf::from("in.svg"),
            }],
        };

        let summary = script.replay(&mut editor, &mut host, dir.path());
        assert_eq!(summary.ignored, 0);
        assert_eq!(editor.document().len(), 1);
    }

    #[test]
    fn test_declined_clear_keeps_shapes() {
        let dir = tempdir().unwrap();
        let mut editor = Editor::new(EditorConfig::default());
        let mut host = CliHost::new(false, dir.path().to_path_buf());
        let mut script = Script::from_json(DRAW_TWO).unwrap();
        script.steps.push(ScriptStep::Command(EditorCommand::NewCanvas));

        let summary = script.replay(&mut editor, &mut host, dir.path());
        assert_eq!(summary.ignored, 1);
        assert_eq!(editor.document().len(), 2);
    }
}
