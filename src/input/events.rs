//! Generic input event types shared by every front end.

use serde::Deserialize;

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MouseButton {
    /// Left mouse button (primary drawing button)
    #[default]
    Left,
    /// Right mouse button (cancel action)
    Right,
    /// Middle mouse button (currently unused)
    Middle,
}

/// Text-entry capability used by the text tool.
///
/// A front end typically shows a dialog here. `None` means the user cancelled.
pub trait TextPrompt {
    fn prompt(&mut self, message: &str) -> Option<String>;
}

impl<F> TextPrompt for F
where
    F: FnMut(&str) -> Option<String>,
{
    fn prompt(&mut self, message: &str) -> Option<String> {
        self(message)
    }
}
