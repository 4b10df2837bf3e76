//! Wireframe Core Library
//!
//! Platform-agnostic data structures and logic for the Wireframe vector
//! editor: shapes, the canvas, tools, selection, undo history, SVG
//! import/export and the documentation collaborators.

pub mod canvas;
pub mod config;
pub mod docs;
pub mod editor;
pub mod history;
pub mod input;
pub mod selection;
pub mod shapes;
pub mod shortcuts;
pub mod snap;
pub mod svg;
pub mod tools;
pub mod viewport;

pub use canvas::CanvasDocument;
pub use config::{ConfigError, EditorConfig};
pub use editor::{Editor, EditorCommand, EditorHost};
pub use history::History;
pub use input::{ClickDebounce, KeyEvent, Modifiers, PointerEvent};
pub use selection::{SELECTION_STROKE_INCREMENT, SelectionManager, StyleEdit, StyleInspector};
pub use shapes::{SerializableColor, Shape, ShapeId, ShapeKind, ShapeStyle};
pub use shortcuts::{Shortcut, ShortcutRegistry};
pub use snap::{GRID_SIZE, GridSettings, SnapResult, snap_to_grid};
pub use svg::SvgError;
pub use tools::{ToolKind, ToolManager, ToolState};
pub use viewport::Viewport;
