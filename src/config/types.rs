//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::input::Tool;
use crate::raster::ImageFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the paint context and text font when a session starts.
/// Users can change tool, color and brush size at runtime.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default pen color - either a named color (red, green, blue, yellow, orange, pink, white, black)
    /// or an RGB array like `[255, 0, 0]` for red
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default brush size in pixels (valid range: 1 - 20)
    #[serde(default = "default_brush_size")]
    pub default_brush_size: u32,

    /// Tool selected at startup (line, rectangle, circle, ellipse, triangle, sketch, text)
    #[serde(default = "default_tool")]
    pub default_tool: Tool,

    /// Font family name for text labels (e.g., "Sans", "Monospace", "DejaVu Serif")
    /// Falls back to the system default if the family is not installed
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font weight (e.g., "normal", "bold", "light", 400, 700)
    /// Can be a named weight or a numeric value (100-900)
    #[serde(default = "default_font_weight")]
    pub font_weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    #[serde(default = "default_font_style")]
    pub font_style: String,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_brush_size: default_brush_size(),
            default_tool: default_tool(),
            font_family: default_font_family(),
            font_weight: default_font_weight(),
            font_style: default_font_style(),
        }
    }
}

/// Canvas dimensions.
///
/// Saved images are always exactly this size.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 1 - 16384)
    #[serde(default = "default_canvas_width")]
    pub width: u32,

    /// Canvas height in pixels (valid range: 1 - 16384)
    #[serde(default = "default_canvas_height")]
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
        }
    }
}

/// Settings for saves that do not name a destination file.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SaveConfig {
    /// Directory for saved drawings (`~/` is expanded)
    #[serde(default = "default_save_directory")]
    pub directory: String,

    /// Filename template using chrono format specifiers, without extension
    #[serde(default = "default_filename_template")]
    pub filename_template: String,

    /// Default output format (png or jpg)
    #[serde(default = "default_save_format")]
    pub format: ImageFormat,
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self {
            directory: default_save_directory(),
            filename_template: default_filename_template(),
            format: default_save_format(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_brush_size() -> u32 {
    5
}

fn default_tool() -> Tool {
    Tool::Line
}

fn default_font_family() -> String {
    "Sans".to_string()
}

fn default_font_weight() -> String {
    "normal".to_string()
}

fn default_font_style() -> String {
    "normal".to_string()
}

fn default_canvas_width() -> u32 {
    800
}

fn default_canvas_height() -> u32 {
    600
}

fn default_save_directory() -> String {
    "~/Pictures/Paintbox".to_string()
}

fn default_filename_template() -> String {
    "drawing_%Y-%m-%d_%H%M%S".to_string()
}

fn default_save_format() -> ImageFormat {
    ImageFormat::Png
}
