//! Loading and saving drawings as raster images.
//!
//! Decoding and encoding are delegated to the `image` crate; flattening a
//! document reuses the Cairo renderer on an offscreen surface.

pub mod codec;
pub mod file;
pub mod flatten;
pub mod types;

pub use codec::{load_bitmap, write_image};
pub use file::{SaveTarget, expand_tilde};
pub use flatten::flatten;
pub use types::{ImageFormat, RasterError};
