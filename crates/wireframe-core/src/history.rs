//! Linear undo/redo over whole-canvas snapshots.

use crate::shapes::Shape;

/// Default number of snapshots to keep.
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// Snapshot history with a cursor.
///
/// The cursor is `None` exactly when the history is empty; otherwise it
/// indexes the snapshot that matches the current canvas.
///
/// Only the newest `capacity` snapshots are kept, including the one at the
/// cursor, so at most `capacity - 1` undo steps are available.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<Vec<Shape>>,
    cursor: Option<usize>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl History {
    /// Create an empty history holding at most `capacity` snapshots.
    pub fn new(capacity: usize) -> Self {
        Self {
            snapshots: Vec::new(),
            cursor: None,
            capacity: capacity.max(1),
        }
    }

    /// Record a snapshot of `shapes`, discarding any redo states.
    pub fn record(&mut self, shapes: &[Shape]) {
        match self.cursor {
            Some(cursor) => self.snapshots.truncate(cursor + 1),
            None => self.snapshots.clear(),
        }
        self.snapshots.push(shapes.to_vec());

        // Limit history size
        if self.snapshots.len() > self.capacity {
            self.snapshots.remove(0);
        }
        self.cursor = Some(self.snapshots.len() - 1);
        log::debug!(
            "history: recorded snapshot {} of {}",
            self.snapshots.len(),
            self.capacity
        );
    }

    /// Step back one snapshot and return it.
    pub fn undo(&mut self) -> Option<&[Shape]> {
        let cursor = self.cursor.filter(|&c| c > 0)? - 1;
        self.cursor = Some(cursor);
        self.snapshots.get(cursor).map(Vec::as_slice)
    }

    /// Step forward one snapshot and return it.
    pub fn redo(&mut self) -> Option<&[Shape]> {
        let cursor = self.cursor.filter(|&c| c + 1 < self.snapshots.len())? + 1;
        self.cursor = Some(cursor);
        self.snapshots.get(cursor).map(Vec::as_slice)
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        self.cursor.is_some_and(|c| c + 1 < self.snapshots.len())
    }

    /// Snapshot at the cursor.
    pub fn current(&self) -> Option<&[Shape]> {
        self.cursor
            .and_then(|c| self.snapshots.get(c))
            .map(Vec::as_slice)
    }

    /// Number of stored snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Check if no snapshot is stored.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Cursor position.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Maximum number of snapshots kept.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop all snapshots.
    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.cursor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Rectangle;
    use kurbo::Point;

    fn rect(x: f64) -> Shape {
        Shape::Rectangle(Rectangle::new(Point::new(x, 0.0), 10.0, 10.0))
    }

    #[test]
    fn test_empty_history() {
        let mut history = History::default();
        assert_eq!(history.cursor(), None);
        assert!(history.undo().is_none());
        assert!(history.redo().is_none());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_at_start_is_noop() {
        let mut history = History::default();
        history.record(&[]);
        assert!(history.undo().is_none());
        assert_eq!(history.cursor(), Some(0));
    }

    #[test]
    fn test_n_actions_n_undos_restore_baseline() {
        let mut history = History::default();
        let mut canvas: Vec<Shape> = Vec::new();
        history.record(&canvas);

        for i in 0..5 {
            canvas.push(rect(i as f64 * 20.0));
            history.record(&canvas);
        }

        let mut restored = canvas.clone();
        for _ in 0..5 {
            restored = history.undo().unwrap().to_vec();
        }
        assert!(restored.is_empty());
        assert!(history.undo().is_none());
    }

    #[test]
    fn test_redo_restores_pre_undo_state() {
        let mut history = History::default();
        history.record(&[]);
        let state = vec![rect(0.0), rect(50.0)];
        history.record(&state);

        history.undo();
        let redone = history.redo().unwrap().to_vec();
        assert_eq!(redone, state);
        assert!(history.redo().is_none());
    }

    #[test]
    fn test_record_discards_redo() {
        let mut history = History::default();
        history.record(&[]);
        history.record(&[rect(0.0)]);
        history.record(&[rect(0.0), rect(1.0)]);

        history.undo();
        history.undo();
        assert!(history.can_redo());

        history.record(&[rect(99.0)]);
        assert!(!history.can_redo());
        assert_eq!(history.len(), 2);
        assert_eq!(history.cursor(), Some(1));
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut history = History::new(3);
        for i in 0..5 {
            history.record(&[rect(i as f64)]);
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history.cursor(), Some(2));
        assert!(history.current().unwrap()[0].same_content(&rect(4.0)));

        history.undo();
        let oldest = history.undo().unwrap().to_vec();
        assert!(oldest[0].same_content(&rect(2.0)));
        assert!(history.undo().is_none());
    }

    #[test]
    fn test_clear() {
        let mut history = History::default();
        history.record(&[rect(0.0)]);
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.cursor(), None);
    }
}
