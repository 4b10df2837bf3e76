//! Grid display and snap-to-grid.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Grid size for snapping (matches the visual grid).
pub const GRID_SIZE: f64 = 20.0;

/// Result of a snap operation.
#[derive(Debug, Clone, Copy)]
pub struct SnapResult {
    /// The snapped point.
    pub point: Point,
    /// Whether the X coordinate was snapped.
    pub snapped_x: bool,
    /// Whether the Y coordinate was snapped.
    pub snapped_y: bool,
}

impl SnapResult {
    /// Create a result with no snapping.
    pub fn none(point: Point) -> Self {
        Self {
            point,
            snapped_x: false,
            snapped_y: false,
        }
    }

    /// Check if any snapping occurred.
    pub fn is_snapped(&self) -> bool {
        self.snapped_x || self.snapped_y
    }
}

/// Snap a point to the nearest grid intersection.
pub fn snap_to_grid(point: Point, grid_size: f64) -> SnapResult {
    if !(grid_size.is_finite() && grid_size > 0.0) {
        return SnapResult::none(point);
    }
    let snapped_x = (point.x / grid_size).round() * grid_size;
    let snapped_y = (point.y / grid_size).round() * grid_size;

    SnapResult {
        point: Point::new(snapped_x, snapped_y),
        snapped_x: true,
        snapped_y: true,
    }
}

/// Grid visibility and snapping switches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSettings {
    /// Whether the grid is drawn.
    pub visible: bool,
    /// Whether pointer positions snap to the grid.
    pub snap: bool,
    /// Grid spacing in canvas units.
    pub size: f64,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            visible: false,
            snap: false,
            size: GRID_SIZE,
        }
    }
}

impl GridSettings {
    /// Create settings with the given spacing, grid hidden and snapping off.
    pub fn with_size(size: f64) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Toggle grid visibility. Returns the new state.
    pub fn toggle_visible(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    /// Toggle snapping. Returns the new state.
    pub fn toggle_snap(&mut self) -> bool {
        self.snap = !self.snap;
        self.snap
    }

    /// Snap `point` if snapping is enabled.
    pub fn apply(&self, point: Point) -> Point {
        if self.snap {
            snap_to_grid(point, self.size).point
        } else {
            point
        }
    }

    /// Grid line positions covering `area`, as (vertical xs, horizontal ys).
    pub fn lines(&self, area: Rect) -> (Vec<f64>, Vec<f64>) {
        if !(self.size.is_finite() && self.size > 0.0) {
            return (Vec::new(), Vec::new());
        }
        let steps = |from: f64, to: f64| {
            let first = (from / self.size).ceil() as i64;
            let last = (to / self.size).floor() as i64;
            (first..=last).map(|i| i as f64 * self.size).collect::<Vec<_>>()
        };
        (steps(area.x0, area.x1), steps(area.y0, area.y1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_to_grid() {
        let result = snap_to_grid(Point::new(23.0, 47.0), 20.0);
        assert_eq!(result.point, Point::new(20.0, 40.0));
        assert!(result.snapped_x);
        assert!(result.snapped_y);
    }

    #[test]
    fn test_snap_to_grid_exact() {
        let result = snap_to_grid(Point::new(40.0, 60.0), 20.0);
        assert_eq!(result.point, Point::new(40.0, 60.0));
    }

    #[test]
    fn test_snap_to_grid_round_up() {
        let result = snap_to_grid(Point::new(31.0, 51.0), 20.0);
        assert_eq!(result.point, Point::new(40.0, 60.0));
    }

    #[test]
    fn test_zero_grid_does_not_snap() {
        let result = snap_to_grid(Point::new(3.0, 4.0), 0.0);
        assert!(!result.is_snapped());
        assert_eq!(result.point, Point::new(3.0, 4.0));
    }

    #[test]
    fn test_settings_toggle_and_apply() {
        let mut grid = GridSettings::default();
        assert_eq!(grid.apply(Point::new(11.0, 9.0)), Point::new(11.0, 9.0));
        assert!(grid.toggle_snap());
        assert_eq!(grid.apply(Point::new(11.0, 9.0)), Point::new(20.0, 0.0));
        assert!(grid.toggle_visible());
        assert!(!grid.toggle_visible());
    }

    #[test]
    fn test_grid_lines() {
        let grid = GridSettings::with_size(20.0);
        let (xs, ys) = grid.lines(Rect::new(0.0, 0.0, 60.0, 30.0));
        assert_eq!(xs, vec![0.0, 20.0, 40.0, 60.0]);
        assert_eq!(ys, vec![0.0, 20.0]);
    }
}
