//! Single-shape selection and the style inspector it drives.

use crate::canvas::CanvasDocument;
use crate::shapes::{SerializableColor, Shape, ShapeId, ShapeStyle, sanitize_extent};
use kurbo::Vec2;
use serde::{Deserialize, Serialize};

/// Extra stroke width drawn on the selected shape.
pub const SELECTION_STROKE_INCREMENT: f64 = 1.0;

/// A single edit coming from the style inspector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "property", content = "value", rename_all = "snake_case")]
pub enum StyleEdit {
    /// Set or remove the fill.
    Fill(Option<SerializableColor>),
    /// Set the stroke color.
    Stroke(SerializableColor),
    /// Set the stroke width. Negative values clamp to zero.
    StrokeWidth(f64),
}

impl StyleEdit {
    /// Apply this edit to a style.
    pub fn apply(&self, style: &mut ShapeStyle) {
        match *self {
            StyleEdit::Fill(fill) => style.fill_color = fill,
            StyleEdit::Stroke(stroke) => style.stroke_color = stroke,
            StyleEdit::StrokeWidth(width) => style.set_stroke_width(width),
        }
    }
}

/// Values shown in the style panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleInspector {
    pub fill: Option<SerializableColor>,
    pub stroke: SerializableColor,
    pub stroke_width: f64,
}

impl Default for StyleInspector {
    fn default() -> Self {
        Self::from_style(&ShapeStyle::default())
    }
}

impl StyleInspector {
    /// Inspector values for a style.
    pub fn from_style(style: &ShapeStyle) -> Self {
        Self {
            fill: style.fill_color,
            stroke: style.stroke_color,
            stroke_width: style.stroke_width,
        }
    }

    /// Show the values of `style`.
    pub fn show(&mut self, style: &ShapeStyle) {
        *self = Self::from_style(style);
    }

    /// Stroke width with its unit, e.g. `"3px"`.
    pub fn stroke_width_label(&self) -> String {
        format!("{}px", self.stroke_width)
    }
}

/// Tracks at most one selected shape.
///
/// The selection is a reference by id; the shape itself lives in the canvas.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    selected: Option<ShapeId>,
    inspector: StyleInspector,
}

impl SelectionManager {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected shape, if any.
    pub fn selected(&self) -> Option<ShapeId> {
        self.selected
    }

    /// Check whether `id` is the selected shape.
    pub fn is_selected(&self, id: ShapeId) -> bool {
        self.selected == Some(id)
    }

    /// Current inspector values.
    pub fn inspector(&self) -> &StyleInspector {
        &self.inspector
    }

    /// Show `style` in the inspector without touching the selection.
    pub fn show_style(&mut self, style: &ShapeStyle) {
        self.inspector.show(style);
    }

    /// Replace the selection.
    ///
    /// Selecting an id that is not on the canvas clears the selection.
    /// Returns true if a shape is selected afterwards.
    pub fn select(&mut self, doc: &CanvasDocument, id: Option<ShapeId>) -> bool {
        self.selected = None;
        let Some(shape) = id.and_then(|id| doc.get_shape(id)) else {
            return false;
        };
        self.selected = Some(shape.id());
        self.inspector.show(shape.style());
        log::debug!("selected {}", shape.id());
        true
    }

    /// Clear the selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Clear the selection if its shape left the canvas.
    pub fn retain_valid(&mut self, doc: &CanvasDocument) {
        if let Some(id) = self.selected {
            match doc.get_shape(id) {
                Some(shape) => self.inspector.show(shape.style()),
                None => self.selected = None,
            }
        }
    }

    /// Apply a style edit to the selected shape.
    ///
    /// Returns false, leaving everything untouched, when nothing is selected.
    pub fn apply_style(&mut self, doc: &mut CanvasDocument, edit: StyleEdit) -> bool {
        let Some(shape) = self.selected.and_then(|id| doc.get_shape_mut(id)) else {
            return false;
        };
        edit.apply(shape.style_mut());
        self.inspector.show(shape.style());
        true
    }

    /// Copy the selected shape, offset it, and select the copy.
    pub fn duplicate(&mut self, doc: &mut CanvasDocument, offset: Vec2) -> Option<ShapeId> {
        let mut copy = self.selected.and_then(|id| doc.get_shape(id)).cloned()?;
        copy.regenerate_id();
        copy.translate(offset);
        let id = copy.id();
        doc.add_shape(copy);
        self.select(doc, Some(id));
        Some(id)
    }

    /// Remove the selected shape from the canvas and clear the selection.
    pub fn delete(&mut self, doc: &mut CanvasDocument) -> Option<Shape> {
        let id = self.selected.take()?;
        doc.remove_shape(id)
    }

    /// Stroke width to draw `shape` with, including the selection affordance.
    pub fn effective_stroke_width(&self, shape: &Shape) -> f64 {
        let width = shape.style().stroke_width;
        if self.is_selected(shape.id()) {
            width + SELECTION_STROKE_INCREMENT
        } else {
            width
        }
    }
}

/// Parse a stroke width typed into the inspector, such as `"3px"`.
pub fn parse_stroke_width(value: &str) -> Option<f64> {
    let trimmed = value.trim().trim_end_matches("px").trim();
    trimmed.parse::<f64>().ok().map(sanitize_extent)
}
