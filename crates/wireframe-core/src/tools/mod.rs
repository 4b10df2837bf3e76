//! Tool system: turns drag gestures into shapes.

use crate::shapes::{Circle, Line, Rectangle, Shape, ShapeStyle, Text};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Content given to newly placed text.
pub const DEFAULT_TEXT: &str = "Text";

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    #[default]
    Select,
    Rectangle,
    Circle,
    Line,
    Text,
}

impl ToolKind {
    /// All tools, in toolbar order.
    pub const ALL: [ToolKind; 5] = [
        ToolKind::Select,
        ToolKind::Rectangle,
        ToolKind::Circle,
        ToolKind::Line,
        ToolKind::Text,
    ];

    /// Whether this tool creates shapes.
    pub fn is_drawing(self) -> bool {
        !matches!(self, ToolKind::Select)
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Select => "Select",
            ToolKind::Rectangle => "Rectangle",
            ToolKind::Circle => "Circle",
            ToolKind::Line => "Line",
            ToolKind::Text => "Text",
        }
    }
}

/// State of a tool interaction.
#[derive(Debug, Clone, Default)]
pub enum ToolState {
    /// Tool is idle, waiting for interaction.
    #[default]
    Idle,
    /// A shape is being drawn.
    Dragging {
        /// Tool that started the drag.
        tool: ToolKind,
        /// Starting point of the drag.
        start: Point,
        /// Shape being drawn. Not part of the canvas until the drag ends.
        provisional: Shape,
    },
}

/// Manages the current tool and its state.
#[derive(Debug, Clone)]
pub struct ToolManager {
    /// Currently selected tool.
    pub current_tool: ToolKind,
    /// Current state of the tool.
    pub state: ToolState,
    /// Current style to apply to new shapes.
    pub current_style: ShapeStyle,
    /// Content for new text shapes.
    pub text_content: String,
    /// Font size for new text shapes.
    pub font_size: f64,
}

impl Default for ToolManager {
    fn default() -> Self {
        Self {
            current_tool: ToolKind::default(),
            state: ToolState::default(),
            current_style: ShapeStyle::default(),
            text_content: DEFAULT_TEXT.to_string(),
            font_size: Text::DEFAULT_FONT_SIZE,
        }
    }
}

impl ToolManager {
    /// Create a new tool manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the current tool. Any drag in progress is cancelled.
    ///
    /// Returns true if a drag was cancelled.
    pub fn set_tool(&mut self, tool: ToolKind) -> bool {
        let cancelled = self.cancel().is_some();
        self.current_tool = tool;
        log::debug!("tool set to {}", tool.name());
        cancelled
    }

    /// Begin a drag at `point`.
    ///
    /// Returns true if a provisional shape was created. Does nothing for the
    /// select tool or while a drag is already in progress.
    pub fn begin(&mut self, point: Point) -> bool {
        if self.is_active() {
            return false;
        }
        let Some(provisional) = self.create_shape(point) else {
            return false;
        };
        self.state = ToolState::Dragging {
            tool: self.current_tool,
            start: point,
            provisional,
        };
        true
    }

    /// Reshape the provisional shape towards `point`.
    pub fn update(&mut self, point: Point) {
        if let ToolState::Dragging {
            start, provisional, ..
        } = &mut self.state
        {
            apply_drag(provisional, *start, point);
        }
    }

    /// End the drag at `point` and return the finished shape.
    pub fn end(&mut self, point: Point) -> Option<Shape> {
        self.update(point);
        match std::mem::take(&mut self.state) {
            ToolState::Dragging { provisional, .. } => Some(provisional),
            ToolState::Idle => None,
        }
    }

    /// Cancel the current drag, returning the discarded shape.
    pub fn cancel(&mut self) -> Option<Shape> {
        match std::mem::take(&mut self.state) {
            ToolState::Dragging { provisional, .. } => {
                log::debug!("drag cancelled");
                Some(provisional)
            }
            ToolState::Idle => None,
        }
    }

    /// Check if a drag is in progress.
    pub fn is_active(&self) -> bool {
        matches!(self.state, ToolState::Dragging { .. })
    }

    /// Get the shape being drawn, if any.
    pub fn preview_shape(&self) -> Option<&Shape> {
        match &self.state {
            ToolState::Dragging { provisional, .. } => Some(provisional),
            ToolState::Idle => None,
        }
    }

    /// Create a degenerate shape for the current tool at `start`.
    fn create_shape(&self, start: Point) -> Option<Shape> {
        let mut shape = match self.current_tool {
            ToolKind::Rectangle => Shape::Rectangle(Rectangle::new(start, 0.0, 0.0)),
            ToolKind::Circle => Shape::Circle(Circle::new(start, 0.0)),
            ToolKind::Line => Shape::Line(Line::new(start, start)),
            ToolKind::Text => {
                let mut text = Text::new(start, self.text_content.clone());
                text.set_font_size(self.font_size);
                Shape::Text(text)
            }
            ToolKind::Select => return None,
        };
        *shape.style_mut() = self.current_style.clone();
        Some(shape)
    }
}

/// Apply one drag step to a provisional shape.
fn apply_drag(shape: &mut Shape, start: Point, current: Point) {
    match shape {
        Shape::Rectangle(rect) => rect.set_corners(start, current),
        Shape::Circle(circle) => circle.set_drag(start, current),
        Shape::Line(line) => {
            line.start = start;
            line.end = current;
        }
        // Text keeps its anchor; dragging does not resize it
        Shape::Text(_) => {}
    }
}
