//! Document container holding the drawing and its undo/redo history.

use super::shape::Shape;

/// All shapes in the current drawing plus the shapes available to redo.
///
/// The shape list doubles as the undo history: undo always removes the tail,
/// so there is no second stack to keep in sync. Shapes taken off by undo wait
/// in `redo` until they are restored or a new shape is appended.
///
/// Every mutating method returns `true` when the visible drawing changed, so
/// callers know when to request a redraw.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Shapes in draw order (first = bottom layer, last = top layer)
    shapes: Vec<Shape>,
    /// Shapes removed by undo; the last entry is restored first
    redo: Vec<Shape>,
}

impl Document {
    /// Creates a new empty document with no history.
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            redo: Vec::new(),
        }
    }

    /// Shapes in paint order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        !self.shapes.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Adds a shape on top of the drawing and discards the redo history.
    pub fn append(&mut self, shape: Shape) -> bool {
        self.shapes.push(shape);
        self.redo.clear();
        true
    }

    /// Moves the most recently added shape to the redo stack.
    ///
    /// Does nothing on an empty document.
    pub fn undo(&mut self) -> bool {
        match self.shapes.pop() {
            Some(shape) => {
                self.redo.push(shape);
                true
            }
            None => false,
        }
    }

    /// Restores the most recently undone shape to the top of the drawing.
    ///
    /// Older redo entries stay available. Does nothing when there is nothing
    /// to redo.
    pub fn redo(&mut self) -> bool {
        match self.redo.pop() {
            Some(shape) => {
                self.shapes.push(shape);
                true
            }
            None => false,
        }
    }

    /// Removes every shape and forgets the redo history.
    pub fn clear(&mut self) -> bool {
        let changed = !self.shapes.is_empty();
        self.shapes.clear();
        self.redo.clear();
        changed
    }

    /// Replaces the whole drawing with one shape, as done when loading an image.
    pub fn replace_with_single(&mut self, shape: Shape) -> bool {
        self.shapes.clear();
        self.redo.clear();
        self.shapes.push(shape);
        true
    }
}
