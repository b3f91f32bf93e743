//! Input handling and tool state machine.
//!
//! This module translates pointer events into drawing commands. It maintains
//! the paint context (tool, color, brush size) and the state machine for the
//! gesture in progress.

pub mod context;
pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use context::{MAX_BRUSH_SIZE, MIN_BRUSH_SIZE, PaintContext};
pub use events::{MouseButton, TextPrompt};
pub use state::{DrawingState, InputState};
pub use tool::Tool;
