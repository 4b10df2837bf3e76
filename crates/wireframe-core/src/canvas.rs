//! Canvas document: the ordered shape store.

use crate::shapes::{SerializableColor, Shape, ShapeId};
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Default logical canvas width.
pub const DEFAULT_CANVAS_WIDTH: f64 = 1200.0;
/// Default logical canvas height.
pub const DEFAULT_CANVAS_HEIGHT: f64 = 800.0;

/// A canvas document containing all shapes.
///
/// Shapes are stored back to front: the last shape is drawn on top.
/// The logical size is fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasDocument {
    shapes: Vec<Shape>,
    size: Size,
    /// Background color.
    pub background: SerializableColor,
}

impl Default for CanvasDocument {
    fn default() -> Self {
        Self::new(Size::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT))
    }
}

impl CanvasDocument {
    /// Create an empty document with a white background.
    pub fn new(size: Size) -> Self {
        Self::with_background(size, SerializableColor::white())
    }

    /// Create an empty document with the given background.
    pub fn with_background(size: Size, background: SerializableColor) -> Self {
        Self {
            shapes: Vec::new(),
            size,
            background,
        }
    }

    /// Logical size of the canvas.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Logical canvas rectangle, anchored at the origin.
    pub fn rect(&self) -> Rect {
        self.size.to_rect()
    }

    /// Add a shape on top of all others.
    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Remove a shape from the document.
    pub fn remove_shape(&mut self, id: ShapeId) -> Option<Shape> {
        let index = self.index_of(id)?;
        Some(self.shapes.remove(index))
    }

    /// Clear all shapes from the document.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Replace the whole shape list.
    pub fn replace_shapes(&mut self, shapes: Vec<Shape>) {
        self.shapes = shapes;
    }

    /// Get a shape by ID.
    pub fn get_shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    /// Get a mutable reference to a shape by ID.
    pub fn get_shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id() == id)
    }

    /// Check whether a shape is on the canvas.
    pub fn contains(&self, id: ShapeId) -> bool {
        self.index_of(id).is_some()
    }

    fn index_of(&self, id: ShapeId) -> Option<usize> {
        self.shapes.iter().position(|s| s.id() == id)
    }

    /// Shapes in z-order (back to front).
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Find shapes at a point, front to back.
    pub fn shapes_at_point(&self, point: Point, tolerance: f64) -> Vec<ShapeId> {
        self.shapes
            .iter()
            .rev()
            .filter(|s| s.hit_test(point, tolerance))
            .map(|s| s.id())
            .collect()
    }

    /// Get the bounding box of all shapes.
    pub fn bounds(&self) -> Option<Rect> {
        self.shapes
            .iter()
            .map(|s| s.bounds())
            .reduce(|acc, b| acc.union(b))
    }

    /// Check if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Get the number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Serialize the document to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a document from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
