//! Vello-based renderer implementation.

use crate::renderer::{DrawItem, RenderContext, RenderResult, Renderer, ShapeRenderer};
use kurbo::{Affine, BezPath, Point, Rect, Stroke};
use parley::layout::PositionedLayoutItem;
use parley::{FontContext, LayoutContext, StyleProperty};
use peniko::{Brush, Color, Fill};
use wireframe_core::shapes::{Shape, ShapeStyle, ShapeTrait, Text};
use vello::Scene;

/// Font family requested for text shapes.
const TEXT_FONT_STACK: &str = "system-ui, sans-serif";

/// Vello-based renderer.
pub struct VelloRenderer {
    /// The Vello scene being built.
    scene: Scene,
    /// Font context for text rendering (cached to avoid re-scanning fonts).
    font_cx: FontContext,
    /// Layout context for text rendering.
    layout_cx: LayoutContext<Brush>,
    /// Stroke color override for the provisional shape.
    preview_color: Option<Color>,
}

impl Default for VelloRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloRenderer {
    /// Create a new Vello renderer.
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            font_cx: FontContext::new(),
            layout_cx: LayoutContext::new(),
            preview_color: None,
        }
    }

    /// Get the built scene for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take ownership of the scene (resets internal scene).
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }

    /// Render a shape path with the given style and stroke width.
    fn render_path(&mut self, path: &BezPath, style: &ShapeStyle, stroke_width: f64, transform: Affine) {
        if let Some(fill_color) = style.fill() {
            self.scene.fill(Fill::NonZero, transform, fill_color, None, path);
        }

        if stroke_width > 0.0 {
            let stroke = Stroke::new(stroke_width);
            let color = self.preview_color.unwrap_or_else(|| style.stroke());
            self.scene.stroke(&stroke, transform, color, None, path);
        }
    }

    /// Render a text shape using Parley. The anchor is the left end of
    /// the first line's baseline.
    fn render_text(&mut self, text: &Text, transform: Affine) {
        if text.content.is_empty() {
            return;
        }

        let color = text.style.fill().unwrap_or_else(|| text.style.stroke());
        let brush = Brush::Solid(color);

        let mut builder = self
            .layout_cx
            .ranged_builder(&mut self.font_cx, &text.content, 1.0, false);
        builder.push_default(StyleProperty::FontSize(text.font_size as f32));
        builder.push_default(StyleProperty::Brush(brush.clone()));
        builder.push_default(StyleProperty::FontStack(parley::FontStack::Source(
            TEXT_FONT_STACK.into(),
        )));
        let mut layout = builder.build(&text.content);
        layout.break_all_lines(None);
        layout.align(None, parley::Alignment::Start, parley::AlignmentOptions::default());

        let baseline = layout
            .lines()
            .next()
            .map(|line| line.metrics().baseline as f64)
            .unwrap_or(0.0);
        let text_transform =
            transform * Affine::translate((text.position.x, text.position.y - baseline));

        let mut glyph_count = 0;
        for line in layout.lines() {
            for item in line.items() {
                let PositionedLayoutItem::GlyphRun(glyph_run) = item else {
                    continue;
                };
                let mut x = glyph_run.offset();
                let y = glyph_run.baseline();
                let run = glyph_run.run();
                let font = run.font();
                let font_size = run.font_size();
                let glyph_xform = run
                    .synthesis()
                    .skew()
                    .map(|angle| Affine::skew(angle.to_radians().tan() as f64, 0.0));

                let glyphs: Vec<vello::Glyph> = glyph_run
                    .glyphs()
                    .map(|glyph| {
                        let gx = x + glyph.x;
                        let gy = y - glyph.y;
                        x += glyph.advance;
                        vello::Glyph {
                            id: glyph.id,
                            x: gx,
                            y: gy,
                        }
                    })
                    .collect();
                glyph_count += glyphs.len();

                if !glyphs.is_empty() {
                    self.scene
                        .draw_glyphs(font)
                        .brush(&brush)
                        .hint(true)
                        .transform(text_transform)
                        .glyph_transform(glyph_xform)
                        .font_size(font_size)
                        .normalized_coords(run.normalized_coords())
                        .draw(Fill::NonZero, glyphs.into_iter());
                }
            }
        }

        // No usable font: draw the text's approximate box instead
        if glyph_count == 0 {
            log::debug!("no glyphs for text {}; drawing placeholder", text.id());
            let bounds: Rect = text.bounds();
            self.scene
                .fill(Fill::NonZero, transform, color.multiply_alpha(0.3), None, &bounds);
        }
    }
}

impl Renderer for VelloRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()> {
        self.scene.reset();
        self.preview_color = None;

        let transform = ctx.transform();
        let canvas = ctx.editor.document().rect();
        self.scene
            .fill(Fill::NonZero, transform, ctx.background_color, None, &canvas);

        let segments = ctx.grid_segments();
        if !segments.is_empty() {
            self.render_grid(&segments, ctx.grid_color, transform);
        }

        let items = ctx.items();
        for item in &items {
            self.preview_color = if item.preview { ctx.preview_color } else { None };
            self.render_item(item, transform);
        }
        self.preview_color = None;

        log::trace!("built scene with {} shapes", items.len());
        Ok(())
    }
}

impl ShapeRenderer for VelloRenderer {
    fn render_item(&mut self, item: &DrawItem, transform: Affine) {
        match item.shape {
            Shape::Text(text) => self.render_text(text, transform),
            shape => {
                let path = shape.to_path();
                self.render_path(&path, shape.style(), item.stroke_width, transform);
            }
        }
    }

    fn render_grid(&mut self, segments: &[(Point, Point)], color: Color, transform: Affine) {
        // Batch all lines into a single path
        let mut path = BezPath::new();
        for (from, to) in segments {
            path.move_to(*from);
            path.line_to(*to);
        }
        self.scene.stroke(&Stroke::new(1.0), transform, color, None, &path);
    }
}
