//! Commands produced by user actions.

use crate::draw::Shape;
use crate::raster::ImageFormat;
use std::path::PathBuf;

/// One user action against the document.
///
/// Pointer gestures produce `Append`; menu and toolbar actions produce the rest.
/// Commands are dispatched one at a time by [`Session::dispatch`](super::Session::dispatch).
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Add a finished shape on top of the drawing
    Append(Shape),
    /// Take back the most recent shape
    Undo,
    /// Restore the most recently undone shape
    Redo,
    /// Start over with an empty canvas
    New,
    /// Replace the drawing with a PNG/JPEG file
    Open(PathBuf),
    /// Flatten the drawing to a file; `None` fields fall back to the save config
    Save {
        path: Option<PathBuf>,
        format: Option<ImageFormat>,
    },
}

impl Command {
    /// Short name used in log messages.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Append(_) => "append",
            Command::Undo => "undo",
            Command::Redo => "redo",
            Command::New => "new",
            Command::Open(_) => "open",
            Command::Save { .. } => "save",
        }
    }
}

/// What a successfully dispatched command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The visible drawing changed; a redraw has been requested
    Changed,
    /// Nothing to do (e.g. undo on an empty canvas)
    Unchanged,
    /// The drawing was written to this file
    Saved(PathBuf),
}
