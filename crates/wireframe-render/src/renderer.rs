//! Renderer trait abstraction.

use kurbo::{Affine, Point, Rect, Size};
use peniko::Color;
use thiserror::Error;
use wireframe_core::Editor;
use wireframe_core::shapes::Shape;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Initialization failed: {0}")]
    InitFailed(String),
    #[error("Render failed: {0}")]
    RenderFailed(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// A shape scheduled for drawing in the current frame.
#[derive(Debug, Clone, Copy)]
pub struct DrawItem<'a> {
    pub shape: &'a Shape,
    /// Stroke width including the selection affordance.
    pub stroke_width: f64,
    pub selected: bool,
    /// True for the provisional shape of an active drag.
    pub preview: bool,
}

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The editor to render.
    pub editor: &'a Editor,
    /// Output surface size in physical pixels.
    pub viewport_size: Size,
    /// Device pixel ratio (for HiDPI).
    pub scale_factor: f64,
    /// Color painted behind the canvas.
    pub background_color: Color,
    /// Grid line color.
    pub grid_color: Color,
    /// Color of the provisional shape outline.
    pub preview_color: Option<Color>,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context. The background defaults to the
    /// document's background color.
    pub fn new(editor: &'a Editor, viewport_size: Size) -> Self {
        Self {
            editor,
            viewport_size,
            scale_factor: 1.0,
            background_color: editor.document().background.into(),
            grid_color: Color::from_rgba8(200, 200, 200, 160),
            preview_color: None,
        }
    }

    /// Set the scale factor for HiDPI.
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the grid line color.
    pub fn with_grid_color(mut self, color: Color) -> Self {
        self.grid_color = color;
        self
    }

    /// Override the stroke color of the provisional shape.
    pub fn with_preview_color(mut self, color: Option<Color>) -> Self {
        self.preview_color = color;
        self
    }

    /// Transform from canvas coordinates to output pixels.
    pub fn transform(&self) -> Affine {
        let logical = Size::new(
            self.viewport_size.width / self.scale_factor,
            self.viewport_size.height / self.scale_factor,
        );
        Affine::scale(self.scale_factor) * self.editor.viewport().transform(logical)
    }

    /// Shapes to draw in paint order, followed by the provisional shape.
    pub fn items(&self) -> Vec<DrawItem<'a>> {
        let editor = self.editor;
        let mut items: Vec<DrawItem<'a>> = editor
            .document()
            .shapes()
            .iter()
            .map(|shape| DrawItem {
                shape,
                stroke_width: editor.effective_stroke_width(shape),
                selected: editor.selection().is_selected(shape.id()),
                preview: false,
            })
            .collect();

        if let Some(shape) = editor.preview_shape() {
            items.push(DrawItem {
                shape,
                stroke_width: shape.style().stroke_width,
                selected: false,
                preview: true,
            });
        }
        items
    }

    /// Grid line segments in canvas coordinates, empty when the grid is hidden.
    pub fn grid_segments(&self) -> Vec<(Point, Point)> {
        let grid = self.editor.grid();
        if !grid.visible {
            return Vec::new();
        }
        let area: Rect = self.editor.document().rect();
        let (xs, ys) = grid.lines(area);
        let verticals = xs
            .into_iter()
            .map(|x| (Point::new(x, area.y0), Point::new(x, area.y1)));
        let horizontals = ys
            .into_iter()
            .map(|y| (Point::new(area.x0, y), Point::new(area.x1, y)));
        verticals.chain(horizontals).collect()
    }
}

/// Trait for rendering backends.
pub trait Renderer: Send + Sync {
    /// Build the scene for a frame.
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()>;

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.background_color
    }
}

/// Helper trait for shape rendering (used internally by renderers).
pub trait ShapeRenderer {
    /// Render one scheduled shape.
    fn render_item(&mut self, item: &DrawItem, transform: Affine);

    /// Render grid segments.
    fn render_grid(&mut self, segments: &[(Point, Point)], color: Color, transform: Affine);
}
