//! Drawing tool selection.

use crate::draw::ShapeKind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing tool selection.
///
/// The active tool determines what shape is created when the user drags the mouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Tool {
    /// Straight line from press to release
    Line,
    /// Rectangle outline from corner to corner
    Rectangle,
    /// Circle outline inscribed in the drag box
    Circle,
    /// Ellipse outline inscribed in the drag box
    Ellipse,
    /// Triangle with a mirrored third vertex
    Triangle,
    /// Freehand drawing - one segment per mouse motion event
    Sketch,
    /// Text label prompted for on release
    Text,
}

impl Tool {
    /// Every tool in toolbar order.
    pub const ALL: [Tool; 7] = [
        Tool::Line,
        Tool::Rectangle,
        Tool::Circle,
        Tool::Ellipse,
        Tool::Triangle,
        Tool::Sketch,
        Tool::Text,
    ];

    /// Shape kind this tool appends.
    pub fn shape_kind(self) -> ShapeKind {
        match self {
            Tool::Line => ShapeKind::Line,
            Tool::Rectangle => ShapeKind::Rectangle,
            Tool::Circle => ShapeKind::Circle,
            Tool::Ellipse => ShapeKind::Ellipse,
            Tool::Triangle => ShapeKind::Triangle,
            Tool::Sketch => ShapeKind::Sketch,
            Tool::Text => ShapeKind::Text,
        }
    }

    /// Human-readable name shown in tool pickers.
    pub fn label(self) -> &'static str {
        match self {
            Tool::Line => "Line",
            Tool::Rectangle => "Rectangle",
            Tool::Circle => "Circle",
            Tool::Ellipse => "Ellipse",
            Tool::Triangle => "Triangle",
            Tool::Sketch => "Sketch",
            Tool::Text => "Text",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tool_maps_to_a_distinct_kind() {
        let kinds: std::collections::HashSet<_> =
            Tool::ALL.iter().map(|tool| tool.shape_kind()).collect();
        assert_eq!(kinds.len(), Tool::ALL.len());
        assert!(!kinds.contains(&ShapeKind::Image));
    }

    #[test]
    fn tools_deserialize_from_kebab_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            tool: Tool,
        }
        let parsed: Wrapper = toml::from_str("tool = \"rectangle\"").unwrap();
        assert_eq!(parsed.tool, Tool::Rectangle);
    }
}
