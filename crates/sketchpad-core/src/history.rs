//! Committed/undone drawable stacks.
//!
//! Unlike snapshot-based undo, items move between the two stacks by value:
//! undo pops the newest committed drawable onto the undone stack and redo
//! moves it back. A drawable therefore lives in exactly one place.

use crate::shapes::{Drawable, DrawableId};
use serde::{Deserialize, Serialize};

/// Undo/redo history of drawables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    /// Drawables in the order they were committed.
    committed: Vec<Drawable>,
    /// Undone drawables, most recently undone last.
    undone: Vec<Drawable>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a drawable. The undone stack is left alone.
    pub fn commit(&mut self, item: Drawable) {
        self.committed.push(item);
    }

    /// Move the newest committed drawable to the undone stack.
    /// Returns `None` if there was nothing to undo.
    pub fn undo(&mut self) -> Option<&Drawable> {
        let item = self.committed.pop()?;
        self.undone.push(item);
        self.undone.last()
    }

    /// Move the most recently undone drawable back to the committed stack.
    /// Returns `None` if there was nothing to redo.
    pub fn redo(&mut self) -> Option<&Drawable> {
        let item = self.undone.pop()?;
        self.committed.push(item);
        self.committed.last()
    }

    /// Drop every committed drawable. The undone stack survives, so redo
    /// can bring back drawables undone before the clear.
    pub fn clear(&mut self) {
        self.committed.clear();
    }

    /// Committed drawables, oldest first.
    pub fn committed(&self) -> &[Drawable] {
        &self.committed
    }

    /// Undone drawables, most recently undone last.
    pub fn undone(&self) -> &[Drawable] {
        &self.undone
    }

    /// Find a committed drawable by id.
    pub fn get(&self, id: DrawableId) -> Option<&Drawable> {
        self.committed.iter().rev().find(|d| d.id() == id)
    }

    /// Find a drawable by id for mutation, in either stack.
    ///
    /// A drawable undone while it is still being dragged keeps receiving
    /// points, so a later redo restores it whole.
    pub fn get_mut(&mut self, id: DrawableId) -> Option<&mut Drawable> {
        self.committed
            .iter_mut()
            .rev()
            .chain(self.undone.iter_mut().rev())
            .find(|d| d.id() == id)
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    /// Number of committed drawables.
    pub fn len(&self) -> usize {
        self.committed.len()
    }

    /// Check if nothing is committed.
    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Stroke;
    use kurbo::Point;

    fn stroke_at(x: f64) -> Drawable {
        Stroke::new(Point::new(x, 0.0), 2.0).into()
    }

    fn ids(items: &[Drawable]) -> Vec<DrawableId> {
        items.iter().map(Drawable::id).collect()
    }

    #[test]
    fn test_commit_leaves_undone_alone() {
        let mut history = History::new();
        history.commit(stroke_at(0.0));
        history.undo();
        history.commit(stroke_at(1.0));

        assert_eq!(history.len(), 1);
        assert_eq!(history.undone().len(), 1);
        assert!(history.can_redo());
    }

    #[test]
    fn test_undo_all_then_redo_all() {
        let mut history = History::new();
        let items: Vec<Drawable> = (0..5).map(|i| stroke_at(i as f64)).collect();
        let original = ids(&items);
        for item in items {
            history.commit(item);
        }

        for _ in 0..5 {
            assert!(history.undo().is_some());
        }
        assert!(history.is_empty());
        let mut reversed = original.clone();
        reversed.reverse();
        assert_eq!(ids(history.undone()), reversed);

        for _ in 0..5 {
            assert!(history.redo().is_some());
        }
        assert_eq!(ids(history.committed()), original);
        assert!(history.undone().is_empty());
    }

    #[test]
    fn test_undo_returns_moved_item() {
        let mut history = History::new();
        let item = stroke_at(3.0);
        let id = item.id();
        history.commit(item);

        assert_eq!(history.undo().map(Drawable::id), Some(id));
        assert!(history.get(id).is_none());
        assert_eq!(history.redo().map(Drawable::id), Some(id));
        assert!(history.get(id).is_some());
    }

    #[test]
    fn test_undo_redo_empty() {
        let mut history = History::new();
        assert!(!history.can_undo());
        assert!(history.undo().is_none());
        assert!(!history.can_redo());
        assert!(history.redo().is_none());
        assert_eq!(history, History::new());
    }

    #[test]
    fn test_clear_keeps_undone() {
        let mut history = History::new();
        history.commit(stroke_at(0.0));
        history.commit(stroke_at(1.0));
        history.undo();
        history.clear();

        assert!(history.is_empty());
        assert_eq!(history.undone().len(), 1);
        assert!(history.redo().is_some());
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_get_mut_extends_in_place() {
        let mut history = History::new();
        let item = stroke_at(0.0);
        let id = item.id();
        history.commit(item);

        history.get_mut(id).unwrap().drag(Point::new(5.0, 5.0));
        assert_eq!(history.get(id).and_then(Drawable::as_stroke).map(Stroke::len), Some(2));
    }

    #[test]
    fn test_get_mut_finds_undone() {
        let mut history = History::new();
        let item = stroke_at(0.0);
        let id = item.id();
        history.commit(item);
        history.undo();

        history.get_mut(id).unwrap().drag(Point::new(5.0, 5.0));
        assert!(history.get(id).is_none());
        assert_eq!(history.undone()[0].as_stroke().map(Stroke::len), Some(2));
    }

    #[test]
    fn test_get_mut_after_clear() {
        let mut history = History::new();
        let item = stroke_at(0.0);
        let id = item.id();
        history.commit(item);
        history.clear();

        assert!(history.get_mut(id).is_none());
    }
}
