//! Drawing state machine and interaction controller state.

use crate::input::{context::PaintContext, tool::Tool};
use crate::util::Point;

/// Current drawing mode state machine.
///
/// Tracks whether the user is idle or actively dragging out a shape.
/// State transitions occur based on mouse events.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawingState {
    /// Not actively drawing - waiting for user input
    Idle,
    /// Mouse button held down
    Drawing {
        /// Tool captured when the button went down
        tool: Tool,
        /// Where the mouse was pressed
        start: Point,
        /// Latest pointer position; for sketching, the end of the last segment
        cursor: Point,
    },
}

/// Interaction controller translating pointer events into commands.
///
/// Holds the paint context and the in-progress gesture. It never touches the
/// document directly: finished shapes come back as
/// [`Command::Append`](crate::session::Command::Append) values for the session
/// to dispatch.
#[derive(Debug, Clone)]
pub struct InputState {
    /// Tool, color and brush size applied to new shapes
    pub context: PaintContext,
    /// Current drawing mode state machine
    pub state: DrawingState,
    /// Whether the live preview changed since the last render
    pub needs_redraw: bool,
}

impl InputState {
    /// Creates an idle controller with the given paint context.
    pub fn new(context: PaintContext) -> Self {
        Self {
            context,
            state: DrawingState::Idle,
            needs_redraw: true,
        }
    }

    /// Returns `true` while a mouse button is held for a gesture.
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawingState::Drawing { .. })
    }

    /// Abandons the in-progress gesture without creating a shape.
    pub fn cancel(&mut self) {
        if self.is_drawing() {
            self.state = DrawingState::Idle;
            self.needs_redraw = true;
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(PaintContext::default())
    }
}
