//! Data types for loading and saving raster images.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Output format offered when saving a drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// Lossless PNG
    Png,
    /// JPEG (`jpg`), no alpha channel
    #[serde(rename = "jpg", alias = "jpeg")]
    Jpeg,
}

impl ImageFormat {
    /// File extension written for this format.
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
        }
    }

    /// Maps a file extension (case-insensitive) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(ImageFormat::Png),
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            _ => None,
        }
    }

    /// Infers the format from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    pub(crate) fn codec(self) -> image::ImageFormat {
        match self {
            ImageFormat::Png => image::ImageFormat::Png,
            ImageFormat::Jpeg => image::ImageFormat::Jpeg,
        }
    }
}

/// Errors that can occur while loading or saving a drawing.
///
/// None of these leave the document modified: loads only replace the drawing
/// after decoding succeeded, and saves only read it.
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("Unsupported image format for {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Failed to decode image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode image {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to prepare save location: {0}")]
    Io(#[from] std::io::Error),

    #[error("Drawing surface error: {0}")]
    Surface(#[from] cairo::Error),

    #[error("Canvas size {width}x{height} is not drawable")]
    InvalidCanvas { width: u32, height: u32 },
}
