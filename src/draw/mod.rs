//! Rendering primitives and shape definitions (Cairo-based).
//!
//! This module defines the core drawing types of the canvas:
//! - [`Color`]: RGB color representation with predefined color constants
//! - [`Shape`]: One immutable primitive (line, rectangle, text, image, ...)
//! - [`Document`]: The ordered shape list together with its undo/redo history
//! - Rendering functions for Cairo-based output

pub mod bitmap;
pub mod color;
pub mod document;
pub mod font;
pub mod render;
pub mod shape;

// Re-export commonly used types at module level
pub use bitmap::Bitmap;
pub use color::Color;
pub use document::Document;
pub use font::FontDescriptor;
pub use render::{render_background, render_shape, render_shapes, render_text};
pub use shape::{Shape, ShapeKind};

pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
