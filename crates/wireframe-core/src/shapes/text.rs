//! Text shape.

use super::{ShapeId, ShapeStyle, ShapeTrait, sanitize_extent};
use kurbo::{BezPath, Point, Rect, Shape as KurboShape, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Approximate advance of one character, as a fraction of the font size.
const CHAR_WIDTH_FACTOR: f64 = 0.6;
/// Share of the font size drawn above the baseline.
const ASCENT_FACTOR: f64 = 0.8;
/// Share of the font size drawn below the baseline.
const DESCENT_FACTOR: f64 = 0.2;

/// A single-line text label.
///
/// `position` is the text anchor: left edge on the baseline, the same
/// convention as the `x`/`y` attributes of an SVG `<text>` element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub(crate) id: ShapeId,
    /// Anchor position (left, baseline).
    pub position: Point,
    /// Text content.
    pub content: String,
    /// Font size in canvas units.
    pub font_size: f64,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Text {
    /// Default font size for new text.
    pub const DEFAULT_FONT_SIZE: f64 = 16.0;

    /// Create a new text shape.
    pub fn new(position: Point, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            content,
            font_size: Self::DEFAULT_FONT_SIZE,
            style: ShapeStyle::default(),
        }
    }

    /// Set the font size, clamping to a valid size.
    pub fn set_font_size(&mut self, size: f64) {
        self.font_size = sanitize_extent(size);
    }

    /// Estimated width of the rendered text.
    ///
    /// The renderer owns real layout; this estimate is only used for bounds
    /// and hit testing.
    pub fn approx_width(&self) -> f64 {
        self.content.chars().count() as f64 * self.font_size * CHAR_WIDTH_FACTOR
    }
}

impl ShapeTrait for Text {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y - self.font_size * ASCENT_FACTOR,
            self.position.x + self.approx_width(),
            self.position.y + self.font_size * DESCENT_FACTOR,
        )
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        self.bounds().inflate(tolerance, tolerance).contains(point)
    }

    fn to_path(&self) -> BezPath {
        self.bounds().to_path(0.1)
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }

    fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }
}
