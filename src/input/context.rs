//! The paint context: active tool, color and brush size.

use super::tool::Tool;
use crate::draw::Color;
use crate::util;
use log::debug;

/// Smallest selectable brush size in pixels.
pub const MIN_BRUSH_SIZE: u32 = 1;
/// Largest selectable brush size in pixels.
pub const MAX_BRUSH_SIZE: u32 = 20;

/// Drawing parameters applied to every new shape.
///
/// Owned by the interaction controller and changed only through its setters,
/// so every shape is stamped with the values current at creation time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintContext {
    tool: Tool,
    color: Color,
    brush_size: u32,
}

impl PaintContext {
    /// Creates a paint context, clamping the brush size into range.
    pub fn new(tool: Tool, color: Color, brush_size: u32) -> Self {
        Self {
            tool,
            color,
            brush_size: brush_size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE),
        }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn brush_size(&self) -> u32 {
        self.brush_size
    }

    pub fn set_tool(&mut self, tool: Tool) {
        debug!("Tool set to {}", tool.label());
        self.tool = tool;
    }

    pub fn set_color(&mut self, color: Color) {
        debug!("Color set to {}", util::color_to_name(&color));
        self.color = color;
    }

    /// Sets the brush size, clamped to 1-20 pixels.
    pub fn set_brush_size(&mut self, size: u32) {
        self.brush_size = size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE);
        debug!("Brush size set to {}", self.brush_size);
    }
}

impl Default for PaintContext {
    /// Black line tool with a 5 pixel brush.
    fn default() -> Self {
        Self::new(Tool::Line, crate::draw::BLACK, 5)
    }
}
