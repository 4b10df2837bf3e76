//! Editor session: owns the canvas and routes every mutation.

use crate::canvas::CanvasDocument;
use crate::config::EditorConfig;
use crate::history::History;
use crate::input::{ClickDebounce, KeyEvent, PointerEvent};
use crate::selection::{SelectionManager, StyleEdit};
use crate::shapes::{Shape, ShapeId};
use crate::shortcuts::ShortcutRegistry;
use crate::snap::GridSettings;
use crate::svg::{self, ARTIFACT_NAME, ImportOptions, SvgResult};
use crate::tools::{ToolKind, ToolManager};
use crate::viewport::Viewport;
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Hit tolerance for click-to-select, in canvas units.
pub const HIT_TOLERANCE: f64 = 4.0;

/// Prompt shown before clearing the canvas.
pub const CLEAR_CANVAS_PROMPT: &str = "Start a new canvas? All shapes will be removed.";

/// Services the embedding application provides to the editor.
pub trait EditorHost {
    /// Ask the user to confirm a destructive action.
    fn confirm(&mut self, message: &str) -> bool;

    /// Hand a generated file to the user.
    fn deliver_artifact(&mut self, name: &str, contents: &str);
}

/// Commands reachable from the toolbar and keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", content = "tool", rename_all = "snake_case")]
pub enum EditorCommand {
    NewCanvas,
    Export,
    Undo,
    Redo,
    Duplicate,
    Delete,
    SetTool(ToolKind),
    ZoomIn,
    ZoomOut,
    ResetZoom,
    ToggleGrid,
    ToggleSnap,
}

impl EditorCommand {
    /// Whether the command comes from a push button and is debounced.
    pub fn is_button(self) -> bool {
        matches!(
            self,
            EditorCommand::NewCanvas
                | EditorCommand::Export
                | EditorCommand::Undo
                | EditorCommand::Redo
                | EditorCommand::Duplicate
                | EditorCommand::Delete
        )
    }
}

/// One editing session over one canvas.
#[derive(Debug, Clone)]
pub struct Editor {
    config: EditorConfig,
    document: CanvasDocument,
    viewport: Viewport,
    tools: ToolManager,
    selection: SelectionManager,
    history: History,
    grid: GridSettings,
    debounce: ClickDebounce,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Editor {
    /// Create an editor with an empty canvas and a baseline history entry.
    pub fn new(config: EditorConfig) -> Self {
        let config = config.validated();
        let size = Size::new(config.canvas_width, config.canvas_height);
        let document = CanvasDocument::with_background(size, config.background);

        let mut viewport = Viewport::new(size);
        viewport.zoom_step = config.zoom_step;
        viewport.min_zoom = config.min_zoom;
        viewport.max_zoom = config.max_zoom;

        let mut tools = ToolManager::new();
        tools.current_style = config.default_style.clone();
        tools.text_content = config.default_text.clone();
        tools.font_size = config.font_size;

        let mut selection = SelectionManager::new();
        selection.show_style(&tools.current_style);

        let mut history = History::new(config.history_capacity);
        history.record(document.shapes());

        Self {
            grid: GridSettings::with_size(config.grid_size),
            debounce: ClickDebounce::new(Duration::from_millis(config.debounce_ms)),
            config,
            document,
            viewport,
            tools,
            selection,
            history,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn document(&self) -> &CanvasDocument {
        &self.document
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn tools(&self) -> &ToolManager {
        &self.tools
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn grid(&self) -> &GridSettings {
        &self.grid
    }

    /// The active tool.
    pub fn current_tool(&self) -> ToolKind {
        self.tools.current_tool
    }

    /// The selected shape, if any.
    pub fn selected(&self) -> Option<ShapeId> {
        self.selection.selected()
    }

    /// Shape currently being drawn, not yet on the canvas.
    pub fn preview_shape(&self) -> Option<&Shape> {
        self.tools.preview_shape()
    }

    /// Stroke width to draw `shape` with, including the selection affordance.
    pub fn effective_stroke_width(&self, shape: &Shape) -> f64 {
        self.selection.effective_stroke_width(shape)
    }

    /// Switch tools, cancelling any drag in progress.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.tools.set_tool(tool);
    }

    /// Map a client position to a (possibly snapped) canvas position.
    pub fn canvas_point(&self, client: Point, bounds: Rect) -> Point {
        self.grid.apply(self.viewport.map_pointer(client, bounds))
    }

    /// Process a pointer event.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { position, bounds } => {
                let point = self.canvas_point(position, bounds);
                if self.tools.current_tool == ToolKind::Select {
                    self.select_at(point);
                } else if self.tools.begin(point) {
                    log::debug!("drag started at ({:.1}, {:.1})", point.x, point.y);
                }
            }
            PointerEvent::Move { position, bounds } => {
                if self.tools.is_active() {
                    let point = self.canvas_point(position, bounds);
                    self.tools.update(point);
                }
            }
            PointerEvent::Up { position, bounds } => {
                if self.tools.is_active() {
                    let point = self.canvas_point(position, bounds);
                    if let Some(shape) = self.tools.end(point) {
                        self.finalize(shape);
                    }
                }
            }
            PointerEvent::Leave => {
                self.tools.cancel();
            }
        }
    }

    /// Select the topmost shape under `point`, or clear the selection.
    fn select_at(&mut self, point: Point) {
        let hit = self
            .document
            .shapes_at_point(point, HIT_TOLERANCE)
            .first()
            .copied();
        if !self.selection.select(&self.document, hit) {
            self.selection.show_style(&self.tools.current_style);
        }
    }

    fn finalize(&mut self, shape: Shape) {
        let id = shape.id();
        log::debug!("finalized {:?} {}", shape.kind(), id);
        self.document.add_shape(shape);
        self.selection.select(&self.document, Some(id));
        self.record();
    }

    fn record(&mut self) {
        self.history.record(self.document.shapes());
    }

    /// Process a key press. Returns the command it triggered, or `None` when
    /// no shortcut matches or the press was dropped by the debounce.
    ///
    /// Shortcuts for button commands share the debounce window with clicks.
    pub fn handle_key(&mut self, event: &KeyEvent, host: &mut dyn EditorHost) -> Option<EditorCommand> {
        let command = ShortcutRegistry::lookup(event)?;
        if command.is_button() && !self.debounce.accept() {
            return None;
        }
        self.execute(command, host);
        Some(command)
    }

    /// Run a command triggered by a button click, subject to debouncing.
    ///
    /// Returns false if the click was dropped or the command did nothing.
    pub fn click(&mut self, command: EditorCommand, host: &mut dyn EditorHost) -> bool {
        if command.is_button() && !self.debounce.accept() {
            return false;
        }
        self.execute(command, host)
    }

    /// Run a command. Returns false when it was a no-op.
    pub fn execute(&mut self, command: EditorCommand, host: &mut dyn EditorHost) -> bool {
        match command {
            EditorCommand::NewCanvas => self.new_canvas(host),
            EditorCommand::Export => {
                self.export(host);
                true
            }
            EditorCommand::Undo => self.undo(),
            EditorCommand::Redo => self.redo(),
            EditorCommand::Duplicate => self.duplicate().is_some(),
            EditorCommand::Delete => self.delete_selected().is_some(),
            EditorCommand::SetTool(tool) => {
                self.set_tool(tool);
                true
            }
            EditorCommand::ZoomIn => {
                self.viewport.zoom_in();
                true
            }
            EditorCommand::ZoomOut => {
                self.viewport.zoom_out();
                true
            }
            EditorCommand::ResetZoom => {
                self.viewport.reset_zoom();
                true
            }
            EditorCommand::ToggleGrid => {
                self.grid.toggle_visible();
                true
            }
            EditorCommand::ToggleSnap => {
                self.grid.toggle_snap();
                true
            }
        }
    }

    /// Clear the canvas after confirmation. Declining changes nothing.
    pub fn new_canvas(&mut self, host: &mut dyn EditorHost) -> bool {
        if !host.confirm(CLEAR_CANVAS_PROMPT) {
            log::debug!("new canvas declined");
            return false;
        }
        self.tools.cancel();
        self.document.clear();
        self.selection.clear();
        self.record();
        log::info!("canvas cleared");
        true
    }

    /// Step back one snapshot.
    pub fn undo(&mut self) -> bool {
        self.tools.cancel();
        let Some(snapshot) = self.history.undo() else {
            return false;
        };
        self.document.replace_shapes(snapshot.to_vec());
        self.selection.retain_valid(&self.document);
        true
    }

    /// Step forward one snapshot.
    pub fn redo(&mut self) -> bool {
        self.tools.cancel();
        let Some(snapshot) = self.history.redo() else {
            return false;
        };
        self.document.replace_shapes(snapshot.to_vec());
        self.selection.retain_valid(&self.document);
        true
    }

    /// Duplicate the selected shape and select the copy.
    pub fn duplicate(&mut self) -> Option<ShapeId> {
        let id = self
            .selection
            .duplicate(&mut self.document, self.config.duplicate_offset)?;
        self.record();
        Some(id)
    }

    /// Remove the selected shape.
    pub fn delete_selected(&mut self) -> Option<Shape> {
        let removed = self.selection.delete(&mut self.document)?;
        self.record();
        Some(removed)
    }

    /// Apply a style inspector edit.
    ///
    /// The edit always becomes the style for new shapes. It also changes the
    /// selected shape when there is one; only then does this return true.
    pub fn apply_style(&mut self, edit: StyleEdit) -> bool {
        edit.apply(&mut self.tools.current_style);
        if self.selection.apply_style(&mut self.document, edit) {
            self.record();
            true
        } else {
            self.selection.show_style(&self.tools.current_style);
            false
        }
    }

    /// Serialize the canvas to SVG.
    pub fn export_svg(&self) -> String {
        svg::export_document(&self.document)
    }

    /// Export the canvas and deliver it to the host.
    pub fn export(&self, host: &mut dyn EditorHost) {
        let contents = self.export_svg();
        host.deliver_artifact(ARTIFACT_NAME, &contents);
    }

    /// Replace the canvas with shapes parsed from SVG text.
    ///
    /// On error the canvas is left untouched. Returns the number of shapes
    /// imported.
    pub fn import_svg(&mut self, text: &str) -> SvgResult<usize> {
        let options = ImportOptions {
            style: self.config.default_style.clone(),
            font_size: self.config.font_size,
        };
        let shapes = svg::import_document(text, &options).inspect_err(|e| {
            log::error!("SVG import failed: {e}");
        })?;
        let count = shapes.len();

        self.tools.cancel();
        self.document.replace_shapes(shapes);
        self.selection.clear();
        self.record();
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::SerializableColor;
    use crate::tools::DEFAULT_TEXT;

    #[derive(Default)]
    struct TestHost {
        answer: bool,
        prompts: Vec<String>,
        artifacts: Vec<(String, String)>,
    }

    impl TestHost {
        fn agreeing() -> Self {
            Self {
                answer: true,
                ..Self::default()
            }
        }
    }

    impl EditorHost for TestHost {
        fn confirm(&mut self, message: &str) -> bool {
            self.prompts.push(message.to_string());
            self.answer
        }

        fn deliver_artifact(&mut self, name: &str, contents: &str) {
            self.artifacts.push((name.to_string(), contents.to_string()));
        }
    }

    fn bounds() -> Rect {
        Rect::new(0.0, 0.0, 1200.0, 800.0)
    }

    fn down(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Down {
            position: Point::new(x, y),
            bounds: bounds(),
        }
    }

    fn moved(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Move {
            position: Point::new(x, y),
            bounds: bounds(),
        }
    }

    fn up(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Up {
            position: Point::new(x, y),
            bounds: bounds(),
        }
    }

    fn drag(editor: &mut Editor, from: (f64, f64), to: (f64, f64)) {
        editor.handle_pointer(down(from.0, from.1));
        editor.handle_pointer(moved((from.0 + to.0) / 2.0, (from.1 + to.1) / 2.0));
        editor.handle_pointer(up(to.0, to.1));
    }

    #[test]
    fn test_baseline_snapshot() {
        let editor = Editor::default();
        assert_eq!(editor.history().len(), 1);
        assert_eq!(editor.history().cursor(), Some(0));
        assert!(editor.document().is_empty());
    }

    #[test]
    fn test_draw_rectangle_any_direction() {
        let mut editor = Editor::default();
        editor.set_tool(ToolKind::Rectangle);
        drag(&mut editor, (300.0, 300.0), (100.0, 150.0));

        assert_eq!(editor.document().len(), 1);
        let Shape::Rectangle(r) = &editor.document().shapes()[0] else {
            panic!("expected rectangle");
        };
        assert_eq!(r.position, Point::new(100.0, 150.0));
        assert_eq!(r.width, 200.0);
        assert_eq!(r.height, 150.0);
        assert_eq!(editor.selected(), Some(r.id));
        assert_eq!(editor.history().len(), 2);
    }

    #[test]
    fn test_draw_circle_and_scaled_pointer() {
        let mut editor = Editor::default();
        editor.set_tool(ToolKind::Circle);
        // Canvas displayed at half size
        let half = Rect::new(0.0, 0.0, 600.0, 400.0);
        editor.handle_pointer(PointerEvent::Down {
            position: Point::new(0.0, 0.0),
            bounds: half,
        });
        editor.handle_pointer(PointerEvent::Up {
            position: Point::new(20.0, 0.0),
            bounds: half,
        });
        let Shape::Circle(c) = &editor.document().shapes()[0] else {
            panic!("expected circle");
        };
        assert_eq!(c.radius, 20.0);
    }

    #[test]
    fn test_text_tool_places_default_text() {
        let mut editor = Editor::default();
        editor.set_tool(ToolKind::Text);
        drag(&mut editor, (50.0, 60.0), (400.0, 400.0));
        let Shape::Text(t) = &editor.document().shapes()[0] else {
            panic!("expected text");
        };
        assert_eq!(t.content, DEFAULT_TEXT);
        assert_eq!(t.position, Point::new(50.0, 60.0));
    }

    #[test]
    fn test_pointer_leave_discards_drag() {
        let mut editor = Editor::default();
        editor.set_tool(ToolKind::Line);
        editor.handle_pointer(down(10.0, 10.0));
        editor.handle_pointer(moved(50.0, 50.0));
        assert!(editor.preview_shape().is_some());
        editor.handle_pointer(PointerEvent::Leave);

        assert!(editor.document().is_empty());
        assert!(editor.preview_shape().is_none());
        assert_eq!(editor.history().len(), 1);

        // Up after leave is a no-op
        editor.handle_pointer(up(60.0, 60.0));
        assert!(editor.document().is_empty());
    }

    #[test]
    fn test_move_never_records() {
        let mut editor = Editor::default();
        editor.set_tool(ToolKind::Rectangle);
        editor.handle_pointer(down(0.0, 0.0));
        for i in 0..10 {
            editor.handle_pointer(moved(i as f64 * 10.0, 5.0));
        }
        assert_eq!(editor.history().len(), 1);
        assert!(editor.document().is_empty());
    }

    #[test]
    fn test_select_tool_hit_testing() {
        let mut editor = Editor::default();
        editor.set_tool(ToolKind::Rectangle);
        drag(&mut editor, (100.0, 100.0), (200.0, 200.0));
        let id = editor.document().shapes()[0].id();

        editor.set_tool(ToolKind::Select);
        editor.handle_pointer(down(500.0, 500.0));
        assert_eq!(editor.selected(), None);

        editor.handle_pointer(down(150.0, 150.0));
        assert_eq!(editor.selected(), Some(id));
        editor.handle_pointer(up(150.0, 150.0));
        assert_eq!(editor.document().len(), 1);
    }

    #[test]
    fn test_selection_affordance_restores() {
        let mut editor = Editor::default();
        editor.set_tool(ToolKind::Rectangle);
        drag(&mut editor, (0.0, 0.0), (50.0, 50.0));
        let shape = editor.document().shapes()[0].clone();
        assert_eq!(editor.effective_stroke_width(&shape), 3.0);

        editor.set_tool(ToolKind::Select);
        editor.handle_pointer(down(900.0, 700.0));
        assert_eq!(editor.effective_stroke_width(&shape), 2.0);
        assert_eq!(editor.document().shapes()[0].style().stroke_width, 2.0);
    }

    #[test]
    fn test_undo_redo_sequence() {
        let mut editor = Editor::default();
        editor.set_tool(ToolKind::Rectangle);
        for i in 0..3 {
            let x = i as f64 * 100.0;
            drag(&mut editor, (x, 0.0), (x + 50.0, 50.0));
        }
        let full = editor.document().clone();

        assert!(editor.undo());
        assert!(editor.undo());
        assert!(editor.undo());
        assert!(editor.document().is_empty());
        assert_eq!(editor.selected(), None);
        assert!(!editor.undo());

        assert!(editor.redo());
        assert!(editor.redo());
        assert!(editor.redo());
        assert_eq!(editor.document(), &full);
        assert!(!editor.redo());
    }

    #[test]
    fn test_new_action_discards_redo() {
        let mut editor = Editor::default();
        editor.set_tool(ToolKind::Line);
        drag(&mut editor, (0.0, 0.0), (10.0, 10.0));
        drag(&mut editor, (20.0, 0.0), (30.0, 10.0));
        editor.undo();
        assert!(editor.history().can_redo());

        drag(&mut editor, (40.0, 0.0), (50.0, 10.0));
        assert!(!editor.history().can_redo());
        assert!(!editor.redo());
        assert_eq!(editor.document().len(), 2);
    }

    #[test]
    fn test_delete_then_style_edit_is_noop() {
        let mut editor = Editor::default();
        editor.set_tool(ToolKind::Circle);
        drag(&mut editor, (100.0, 100.0), (140.0, 100.0));
        assert!(editor.delete_selected().is_some());
        assert_eq!(editor.selected(), None);
        assert!(editor.document().is_empty());

        let snapshot_count = editor.history().len();
        assert!(!editor.apply_style(StyleEdit::StrokeWidth(8.0)));
        assert_eq!(editor.history().len(), snapshot_count);
        // New shapes pick up the edit
        assert_eq!(editor.tools().current_style.stroke_width, 8.0);
    }

    #[test]
    fn test_style_edit_on_selection_is_undoable() {
        let mut editor = Editor::default();
        editor.set_tool(ToolKind::Rectangle);
        drag(&mut editor, (0.0, 0.0), (50.0, 50.0));
        let red = SerializableColor::new(255, 0, 0, 255);
        assert!(editor.apply_style(StyleEdit::Stroke(red)));
        assert_eq!(editor.document().shapes()[0].style().stroke_color, red);
        assert_eq!(editor.selection().inspector().stroke, red);

        editor.undo();
        assert_eq!(
            editor.document().shapes()[0].style().stroke_color,
            SerializableColor::black()
        );
    }

    #[test]
    fn test_duplicate() {
        let mut editor = Editor::default();
        assert!(editor.duplicate().is_none());

        editor.set_tool(ToolKind::Rectangle);
        drag(&mut editor, (10.0, 10.0), (60.0, 60.0));
        let copy = editor.duplicate().unwrap();
        assert_eq!(editor.selected(), Some(copy));
        let Some(Shape::Rectangle(r)) = editor.document().get_shape(copy) else {
            panic!("expected rectangle");
        };
        assert_eq!(r.position, Point::new(30.0, 30.0));
        assert_eq!(editor.document().len(), 2);
    }

    #[test]
    fn test_new_canvas_requires_confirmation() {
        let mut editor = Editor::default();
        editor.set_tool(ToolKind::Rectangle);
        drag(&mut editor, (0.0, 0.0), (50.0, 50.0));

        let mut declining = TestHost::default();
        assert!(!editor.new_canvas(&mut declining));
        assert_eq!(declining.prompts.len(), 1);
        assert_eq!(editor.document().len(), 1);

        let mut agreeing = TestHost::agreeing();
        assert!(editor.new_canvas(&mut agreeing));
        assert!(editor.document().is_empty());
        assert_eq!(editor.selected(), None);

        // Clearing is undoable
        assert!(editor.undo());
        assert_eq!(editor.document().len(), 1);
    }

    #[test]
    fn test_export_delivers_artifact() {
        let mut editor = Editor::default();
        let mut host = TestHost::default();
        assert!(editor.execute(EditorCommand::Export, &mut host));
        assert_eq!(host.artifacts.len(), 1);
        assert_eq!(host.artifacts[0].0, "drawing.svg");
        assert!(host.artifacts[0].1.starts_with("<svg"));
    }

    #[test]
    fn test_import_replaces_canvas() {
        let mut editor = Editor::default();
        editor.set_tool(ToolKind::Rectangle);
        drag(&mut editor, (0.0, 0.0), (50.0, 50.0));

        let count = editor
            .import_svg(r#"<svg><circle cx="1" cy="2" r="3"/><line x2="5"/></svg>"#)
            .unwrap();
        assert_eq!(count, 2);
        assert_eq!(editor.document().len(), 2);
        assert_eq!(editor.selected(), None);

        assert!(editor.undo());
        assert_eq!(editor.document().len(), 1);
    }

    #[test]
    fn test_failed_import_leaves_canvas() {
        let mut editor = Editor::default();
        editor.set_tool(ToolKind::Rectangle);
        drag(&mut editor, (0.0, 0.0), (50.0, 50.0));
        let before = editor.document().clone();
        let history_len = editor.history().len();

        assert!(editor.import_svg("not svg at all").is_err());
        assert_eq!(editor.document(), &before);
        assert_eq!(editor.history().len(), history_len);
    }

    #[test]
    fn test_keyboard_shortcuts() {
        let mut editor = Editor::new(EditorConfig {
            debounce_ms: 0,
            ..EditorConfig::default()
        });
        let mut host = TestHost::default();

        assert_eq!(
            editor.handle_key(&KeyEvent::new("r"), &mut host),
            Some(EditorCommand::SetTool(ToolKind::Rectangle))
        );
        assert_eq!(editor.current_tool(), ToolKind::Rectangle);

        drag(&mut editor, (0.0, 0.0), (50.0, 50.0));
        editor.handle_key(&KeyEvent::ctrl("z"), &mut host);
        assert!(editor.document().is_empty());
        editor.handle_key(&KeyEvent::ctrl("y"), &mut host);
        assert_eq!(editor.document().len(), 1);

        // Ctrl+R is not the rectangle tool
        editor.set_tool(ToolKind::Line);
        assert_eq!(editor.handle_key(&KeyEvent::ctrl("r"), &mut host), None);
        assert_eq!(editor.current_tool(), ToolKind::Line);
    }

    #[test]
    fn test_tool_change_cancels_drag() {
        let mut editor = Editor::default();
        editor.set_tool(ToolKind::Rectangle);
        editor.handle_pointer(down(0.0, 0.0));
        editor.set_tool(ToolKind::Circle);
        editor.handle_pointer(up(50.0, 50.0));
        assert!(editor.document().is_empty());
    }

    #[test]
    fn test_snap_to_grid() {
        let mut editor = Editor::default();
        let mut host = TestHost::default();
        editor.execute(EditorCommand::ToggleSnap, &mut host);
        editor.set_tool(ToolKind::Line);
        drag(&mut editor, (11.0, 9.0), (49.0, 52.0));
        let Shape::Line(l) = &editor.document().shapes()[0] else {
            panic!("expected line");
        };
        assert_eq!(l.start, Point::new(20.0, 0.0));
        assert_eq!(l.end, Point::new(40.0, 60.0));
    }

    #[test]
    fn test_click_debounce() {
        let mut editor = Editor::default();
        let mut host = TestHost::default();
        editor.set_tool(ToolKind::Rectangle);
        drag(&mut editor, (0.0, 0.0), (50.0, 50.0));

        assert!(editor.click(EditorCommand::Duplicate, &mut host));
        // Second click lands inside the debounce window
        assert!(!editor.click(EditorCommand::Duplicate, &mut host));
        assert_eq!(editor.document().len(), 2);

        // Tool changes are not debounced
        assert!(editor.click(EditorCommand::SetTool(ToolKind::Circle), &mut host));
    }

    #[test]
    fn test_key_repeat_is_debounced() {
        let mut editor = Editor::default();
        let mut host = TestHost::default();
        editor.set_tool(ToolKind::Rectangle);
        drag(&mut editor, (0.0, 0.0), (50.0, 50.0));

        let duplicate = KeyEvent::ctrl("d");
        assert_eq!(
            editor.handle_key(&duplicate, &mut host),
            Some(EditorCommand::Duplicate)
        );
        assert_eq!(editor.handle_key(&duplicate, &mut host), None);
        assert_eq!(editor.document().len(), 2);

        // A click inside the same window is dropped too
        assert!(!editor.click(EditorCommand::Duplicate, &mut host));
        assert_eq!(editor.document().len(), 2);

        // Tool shortcuts are not debounced
        assert!(editor.handle_key(&KeyEvent::new("c"), &mut host).is_some());
        assert!(editor.handle_key(&KeyEvent::new("l"), &mut host).is_some());
    }

    #[test]
    fn test_inverted_zoom_limits_from_config() {
        let config: EditorConfig =
            serde_json::from_str(r#"{"min_zoom": 3.0, "max_zoom": 2.0}"#).unwrap();
        let mut editor = Editor::new(config);
        let mut host = TestHost::default();
        editor.execute(EditorCommand::ZoomIn, &mut host);
        assert!((2.0..=3.0).contains(&editor.viewport().zoom));
        editor.execute(EditorCommand::ZoomOut, &mut host);
        assert!((2.0..=3.0).contains(&editor.viewport().zoom));
        assert_eq!(editor.config().min_zoom, 2.0);
    }

    #[test]
    fn test_zoom_commands() {
        let mut editor = Editor::default();
        let mut host = TestHost::default();
        editor.execute(EditorCommand::ZoomIn, &mut host);
        assert!((editor.viewport().zoom - 1.2).abs() < 1e-12);
        editor.execute(EditorCommand::ResetZoom, &mut host);
        assert!((editor.viewport().zoom - 1.0).abs() < 1e-12);
        assert_eq!(editor.document().size(), Size::new(1200.0, 800.0));
    }
}
