use crate::draw::Shape;
use crate::input::tool::Tool;

use super::{DrawingState, InputState};

impl InputState {
    /// Returns the shape currently being dragged out, for live preview.
    ///
    /// # Returns
    /// - `Some(Shape)` while dragging with a two-point tool
    /// - `None` when idle, or for Sketch (segments are committed as the mouse
    ///   moves) and Text (nothing is shown until the label is entered)
    ///
    /// The preview is never part of the document; the backend draws it on top.
    pub fn provisional_shape(&self) -> Option<Shape> {
        let DrawingState::Drawing {
            tool,
            start,
            cursor,
        } = &self.state
        else {
            return None;
        };

        match tool {
            Tool::Sketch | Tool::Text => None,
            other => Some(Shape::new(
                other.shape_kind(),
                *start,
                *cursor,
                self.context.color(),
                self.context.brush_size(),
            )),
        }
    }
}
