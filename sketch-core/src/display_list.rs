//! The display list: committed drawables plus a linear redo stack.

use serde::{Deserialize, Serialize};

use crate::{Drawable, SketchError, SketchResult};

/// Ordered collection of committed drawables, replayed on every repaint.
///
/// Undo pops the last committed drawable onto the redo stack; redo pops it
/// back. History is linear: beginning a new drawable discards the redo stack.
/// No user action other than undo/redo (and [`clear`](Self::clear)) mutates
/// both stacks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayList {
    /// Committed drawables in insertion order.
    committed: Vec<Drawable>,
    /// Drawables popped by undo, restored by redo.
    redo_stack: Vec<Drawable>,
}

impl DisplayList {
    /// Create a new empty display list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finished drawable to the committed list.
    ///
    /// Does not touch the redo stack; the redo stack is cleared when the
    /// drawable *begins* (see [`begin_history_entry`](Self::begin_history_entry)),
    /// not when it commits.
    pub fn commit(&mut self, drawable: Drawable) {
        tracing::debug!("Commit drawable {}", drawable.id());
        self.committed.push(drawable);
    }

    /// Discard the redo stack because a new drawable has started.
    pub fn begin_history_entry(&mut self) {
        if !self.redo_stack.is_empty() {
            tracing::debug!(
                "New drawable begins, dropping {} redoable",
                self.redo_stack.len()
            );
            self.redo_stack.clear();
        }
    }

    /// Undo the most recently committed drawable.
    ///
    /// Returns `false` if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.committed.pop() {
            Some(drawable) => {
                self.redo_stack.push(drawable);
                true
            }
            None => false,
        }
    }

    /// Redo the most recently undone drawable.
    ///
    /// Returns `false` if the redo stack was empty.
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(drawable) => {
                self.committed.push(drawable);
                true
            }
            None => false,
        }
    }

    /// Empty both the committed list and the redo stack.
    pub fn clear(&mut self) {
        self.committed.clear();
        self.redo_stack.clear();
    }

    /// Iterate over committed drawables in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Drawable> {
        self.committed.iter()
    }

    /// Number of committed drawables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.committed.len()
    }

    /// Check if the committed list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }

    /// Number of drawables available for redo.
    #[must_use]
    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Check whether undo would do anything.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    /// Check whether redo would do anything.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Serialize the display list to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> SketchResult<String> {
        serde_json::to_string(self).map_err(SketchError::Serialization)
    }

    /// Deserialize a display list from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails.
    pub fn from_json(json: &str) -> SketchResult<Self> {
        serde_json::from_str(json).map_err(SketchError::Serialization)
    }
}

impl<'a> IntoIterator for &'a DisplayList {
    type Item = &'a Drawable;
    type IntoIter = std::slice::Iter<'a, Drawable>;

    fn into_iter(self) -> Self::IntoIter {
        self.committed.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Point, StrokeStyle};

    fn stroke(x: f32, y: f32) -> Drawable {
        Drawable::stroke_at(Point::new(x, y), StrokeStyle::thin())
    }

    #[test]
    fn test_undo_redo_are_exact_inverses() {
        let mut list = DisplayList::new();
        list.commit(stroke(1.0, 1.0));
        list.commit(stroke(2.0, 2.0));
        let before = list.to_json().expect("json");

        assert!(list.undo());
        assert_eq!(list.len(), 1);
        assert!(list.redo());

        assert_eq!(list.to_json().expect("json"), before);
    }

    #[test]
    fn test_undo_redo_empty_are_noops() {
        let mut list = DisplayList::new();
        assert!(!list.undo());
        assert!(!list.redo());
        assert!(list.is_empty());
        assert_eq!(list.redo_len(), 0);
    }

    #[test]
    fn test_clear_empties_both_stacks() {
        let mut list = DisplayList::new();
        list.commit(stroke(1.0, 1.0));
        list.commit(stroke(2.0, 2.0));
        list.undo();

        list.clear();
        assert!(list.is_empty());
        assert!(!list.can_undo());
        assert!(!list.can_redo());
    }

    #[test]
    fn test_new_entry_discards_redo() {
        let mut list = DisplayList::new();
        list.commit(stroke(1.0, 1.0));
        list.undo();
        assert!(list.can_redo());

        list.begin_history_entry();
        assert!(!list.can_redo());

        list.commit(stroke(2.0, 2.0));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_commit_preserves_insertion_order() {
        let mut list = DisplayList::new();
        let a = stroke(1.0, 1.0);
        let b = stroke(2.0, 2.0);
        let (id_a, id_b) = (a.id(), b.id());
        list.commit(a);
        list.commit(b);

        let ids: Vec<_> = list.iter().map(Drawable::id).collect();
        assert_eq!(ids, vec![id_a, id_b]);
    }
}
