//! Viewport: maps pointer coordinates onto the logical canvas and holds zoom.

use kurbo::{Affine, Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Zoom multiplier applied by one zoom-in or zoom-out step.
pub const DEFAULT_ZOOM_STEP: f64 = 1.2;
/// Minimum allowed zoom level.
pub const DEFAULT_MIN_ZOOM: f64 = 0.2;
/// Maximum allowed zoom level.
pub const DEFAULT_MAX_ZOOM: f64 = 5.0;

/// Viewport over a fixed-size logical canvas.
///
/// The logical size never changes. Zooming shrinks or grows the view box,
/// which stays centered on the canvas center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    logical: Size,
    /// Current zoom level (1.0 shows the whole canvas).
    pub zoom: f64,
    /// Multiplier for a single zoom step.
    pub zoom_step: f64,
    /// Minimum allowed zoom level.
    pub min_zoom: f64,
    /// Maximum allowed zoom level.
    pub max_zoom: f64,
}

impl Viewport {
    /// Create a viewport over a canvas of the given logical size.
    pub fn new(logical: Size) -> Self {
        Self {
            logical,
            zoom: 1.0,
            zoom_step: DEFAULT_ZOOM_STEP,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
        }
    }

    /// Logical canvas size.
    pub fn logical_size(&self) -> Size {
        self.logical
    }

    /// The currently visible part of the canvas, in logical units.
    pub fn view_box(&self) -> Rect {
        let size = Size::new(self.logical.width / self.zoom, self.logical.height / self.zoom);
        let center = self.logical.to_rect().center();
        Rect::from_center_size(center, size)
    }

    /// Map a pointer position in client coordinates to logical coordinates.
    ///
    /// `bounds` is the on-screen rectangle the canvas occupies. A bounding
    /// rectangle with zero or non-finite size yields the unscaled offset
    /// from its origin.
    pub fn map_pointer(&self, client: Point, bounds: Rect) -> Point {
        let offset = client - bounds.origin();
        let (w, h) = (bounds.width(), bounds.height());
        if !(w.is_finite() && h.is_finite()) || w <= 0.0 || h <= 0.0 {
            return offset.to_point();
        }
        let view = self.view_box();
        Point::new(
            view.x0 + offset.x * view.width() / w,
            view.y0 + offset.y * view.height() / h,
        )
    }

    /// Transform from logical coordinates into an output surface of
    /// `output` size, showing the current view box.
    pub fn transform(&self, output: Size) -> Affine {
        let view = self.view_box();
        if view.width() <= 0.0 || view.height() <= 0.0 {
            return Affine::IDENTITY;
        }
        Affine::scale_non_uniform(output.width / view.width(), output.height / view.height())
            * Affine::translate(Vec2::new(-view.x0, -view.y0))
    }

    /// Zoom in by one step.
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * self.zoom_step);
    }

    /// Zoom out by one step.
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom / self.zoom_step);
    }

    /// Reset zoom to show the whole canvas.
    pub fn reset_zoom(&mut self) {
        self.zoom = 1.0;
    }

    /// Set the zoom level, clamped to the configured limits.
    pub fn set_zoom(&mut self, zoom: f64) {
        if !zoom.is_finite() {
            return;
        }
        let lo = self.min_zoom.min(self.max_zoom);
        let hi = self.min_zoom.max(self.max_zoom);
        if lo.is_nan() || hi.is_nan() {
            log::warn!("zoom limits are not numbers, keeping zoom {:.3}", self.zoom);
            return;
        }
        self.zoom = zoom.clamp(lo, hi);
        log::debug!("zoom set to {:.3}", self.zoom);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(Size::new(1200.0, 800.0))
    }

    #[test]
    fn test_identity_mapping_at_native_size() {
        let vp = viewport();
        let bounds = Rect::new(0.0, 0.0, 1200.0, 800.0);
        let p = vp.map_pointer(Point::new(100.0, 200.0), bounds);
        assert!((p.x - 100.0).abs() < f64::EPSILON);
        assert!((p.y - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_scaled_mapping() {
        let vp = viewport();
        // Canvas shown at half size, offset on the page
        let bounds = Rect::new(10.0, 20.0, 610.0, 420.0);
        let p = vp.map_pointer(Point::new(310.0, 220.0), bounds);
        assert!((p.x - 600.0).abs() < 1e-9);
        assert!((p.y - 400.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_size_bounds_returns_offset() {
        let vp = viewport();
        let bounds = Rect::new(10.0, 10.0, 10.0, 10.0);
        let p = vp.map_pointer(Point::new(15.0, 30.0), bounds);
        assert_eq!(p, Point::new(5.0, 20.0));
    }

    #[test]
    fn test_zoomed_mapping_is_centered() {
        let mut vp = viewport();
        vp.set_zoom(2.0);
        assert_eq!(vp.view_box(), Rect::new(300.0, 200.0, 900.0, 600.0));
        let bounds = Rect::new(0.0, 0.0, 1200.0, 800.0);
        let p = vp.map_pointer(Point::new(0.0, 0.0), bounds);
        assert_eq!(p, Point::new(300.0, 200.0));
        // Logical size is unchanged
        assert_eq!(vp.logical_size(), Size::new(1200.0, 800.0));
    }

    #[test]
    fn test_zoom_clamp() {
        let mut vp = viewport();
        for _ in 0..50 {
            vp.zoom_out();
        }
        assert!((vp.zoom - DEFAULT_MIN_ZOOM).abs() < f64::EPSILON);
        for _ in 0..50 {
            vp.zoom_in();
        }
        assert!((vp.zoom - DEFAULT_MAX_ZOOM).abs() < f64::EPSILON);
        vp.reset_zoom();
        assert!((vp.zoom - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_inverted_limits_do_not_panic() {
        let mut vp = viewport();
        vp.min_zoom = 3.0;
        vp.max_zoom = 2.0;
        vp.zoom_in();
        assert!((2.0..=3.0).contains(&vp.zoom));
        vp.min_zoom = f64::NAN;
        vp.max_zoom = f64::NAN;
        let before = vp.zoom;
        vp.zoom_out();
        assert_eq!(vp.zoom, before);
    }

    #[test]
    fn test_zoom_step() {
        let mut vp = viewport();
        vp.zoom_in();
        assert!((vp.zoom - 1.2).abs() < 1e-12);
        vp.zoom_out();
        assert!((vp.zoom - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_transform_maps_view_box_to_output() {
        let mut vp = viewport();
        vp.set_zoom(2.0);
        let t = vp.transform(Size::new(1200.0, 800.0));
        let p = t * Point::new(300.0, 200.0);
        assert!(p.x.abs() < 1e-9 && p.y.abs() < 1e-9);
        let q = t * Point::new(900.0, 600.0);
        assert!((q.x - 1200.0).abs() < 1e-9 && (q.y - 800.0).abs() < 1e-9);
    }
}
