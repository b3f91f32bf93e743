//! Configuration file support for paintbox.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/paintbox/config.toml`. Settings include the startup paint
//! context, text font, canvas size and where unnamed saves go.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, DrawingConfig, SaveConfig};

use crate::draw::FontDescriptor;
use crate::input::{MAX_BRUSH_SIZE, MIN_BRUSH_SIZE, PaintContext};
use crate::raster::{SaveTarget, expand_tilde};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Largest accepted canvas edge in pixels.
pub const MAX_CANVAS_EDGE: u32 = 16384;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "blue"
/// default_brush_size = 3
/// default_tool = "sketch"
///
/// [canvas]
/// width = 1024
/// height = 768
///
/// [save]
/// directory = "~/Pictures/Paintbox"
/// format = "jpg"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Paint context and font defaults
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Canvas dimensions
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Default destination for saves without a file name
    #[serde(default)]
    pub save: SaveConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or replaced by the
    /// default) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_brush_size`: 1 - 20
    /// - `canvas.width`, `canvas.height`: 1 - 16384
    fn validate_and_clamp(&mut self) {
        if !(MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE).contains(&self.drawing.default_brush_size) {
            warn!(
                "Invalid default_brush_size {}, clamping to {}-{} range",
                self.drawing.default_brush_size, MIN_BRUSH_SIZE, MAX_BRUSH_SIZE
            );
            self.drawing.default_brush_size = self
                .drawing
                .default_brush_size
                .clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE);
        }

        if !(1..=MAX_CANVAS_EDGE).contains(&self.canvas.width) {
            warn!(
                "Invalid canvas width {}, clamping to 1-{} range",
                self.canvas.width, MAX_CANVAS_EDGE
            );
            self.canvas.width = self.canvas.width.clamp(1, MAX_CANVAS_EDGE);
        }

        if !(1..=MAX_CANVAS_EDGE).contains(&self.canvas.height) {
            warn!(
                "Invalid canvas height {}, clamping to 1-{} range",
                self.canvas.height, MAX_CANVAS_EDGE
            );
            self.canvas.height = self.canvas.height.clamp(1, MAX_CANVAS_EDGE);
        }

        if self.drawing.default_color.is_unknown_name() {
            warn!(
                "Invalid default_color {:?}, falling back to 'black'",
                self.drawing.default_color
            );
            self.drawing.default_color = ColorSpec::Name("black".to_string());
        }

        let valid_weight = matches!(
            self.drawing.font_weight.to_lowercase().as_str(),
            "normal" | "bold" | "light" | "ultralight" | "heavy" | "ultrabold"
        ) || self
            .drawing
            .font_weight
            .parse::<u32>()
            .is_ok_and(|w| (100..=900).contains(&w));

        if !valid_weight {
            warn!(
                "Invalid font_weight '{}', falling back to 'normal'",
                self.drawing.font_weight
            );
            self.drawing.font_weight = "normal".to_string();
        }

        if !matches!(
            self.drawing.font_style.to_lowercase().as_str(),
            "normal" | "italic" | "oblique"
        ) {
            warn!(
                "Invalid font_style '{}', falling back to 'normal'",
                self.drawing.font_style
            );
            self.drawing.font_style = "normal".to_string();
        }

        if self.save.filename_template.trim().is_empty() {
            warn!("Empty save filename_template, using default");
            self.save.filename_template = SaveConfig::default().filename_template;
        }
    }

    /// Paint context a new session starts with.
    pub fn paint_context(&self) -> PaintContext {
        PaintContext::new(
            self.drawing.default_tool,
            self.drawing.default_color.to_color(),
            self.drawing.default_brush_size,
        )
    }

    /// Font used for text labels.
    pub fn font_descriptor(&self) -> FontDescriptor {
        FontDescriptor::new(
            self.drawing.font_family.clone(),
            self.drawing.font_weight.clone(),
            self.drawing.font_style.clone(),
        )
    }

    /// Destination used for saves without a file name.
    pub fn save_target(&self) -> SaveTarget {
        SaveTarget {
            directory: expand_tilde(&self.save.directory),
            filename_template: self.save.filename_template.clone(),
            format: self.save.format,
        }
    }

    /// Returns the JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/paintbox/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("paintbox");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit file.
    ///
    /// Unlike [`Config::load`], a missing file is an error.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to the default location.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to the user's config directory.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&config_path, EXAMPLE_CONFIG)?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }
}

/// Documented example configuration shipped with the binary.
pub const EXAMPLE_CONFIG: &str = include_str!("../../config.example.toml");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::BLUE;
    use crate::input::Tool;
    use crate::raster::ImageFormat;
    use tempfile::TempDir;

    fn write_config(contents: &str) -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, contents).unwrap();
        (temp, path)
    }

    #[test]
    fn empty_file_yields_defaults() {
        let (_temp, path) = write_config("");
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.drawing.default_brush_size, 5);
        assert_eq!(config.drawing.default_tool, Tool::Line);
        assert_eq!((config.canvas.width, config.canvas.height), (800, 600));
        assert_eq!(config.save.format, ImageFormat::Png);
    }

    #[test]
    fn values_are_read_from_toml() {
        let (_temp, path) = write_config(
            r#"
            [drawing]
            default_color = "blue"
            default_brush_size = 3
            default_tool = "sketch"

            [canvas]
            width = 320
            height = 240

            [save]
            format = "jpg"
            "#,
        );
        let config = Config::load_from(&path).unwrap();
        let ctx = config.paint_context();
        assert_eq!(ctx.color(), BLUE);
        assert_eq!(ctx.brush_size(), 3);
        assert_eq!(ctx.tool(), Tool::Sketch);
        assert_eq!((config.canvas.width, config.canvas.height), (320, 240));
        assert_eq!(config.save_target().format, ImageFormat::Jpeg);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let (_temp, path) = write_config(
            r#"
            [drawing]
            default_brush_size = 99
            default_color = "mauve"
            font_weight = "extra-wobbly"
            font_style = "sideways"

            [canvas]
            width = 0
            height = 100000
            "#,
        );
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.drawing.default_brush_size, MAX_BRUSH_SIZE);
        assert_eq!(config.drawing.default_color, ColorSpec::Name("black".into()));
        assert_eq!(config.drawing.font_weight, "normal");
        assert_eq!(config.drawing.font_style, "normal");
        assert_eq!(config.canvas.width, 1);
        assert_eq!(config.canvas.height, MAX_CANVAS_EDGE);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let (_temp, path) = write_config("[drawing\ndefault_tool = 3");
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn example_config_parses_to_defaults() {
        let config: Config = toml::from_str(EXAMPLE_CONFIG).unwrap();
        assert_eq!(config.drawing.default_brush_size, 5);
        assert_eq!(config.drawing.font_family, "Sans");
        assert_eq!(config.canvas.width, 800);
    }

    #[test]
    fn schema_lists_top_level_sections() {
        let schema = serde_json::to_value(Config::json_schema()).unwrap();
        let properties = schema["properties"].as_object().unwrap();
        assert!(properties.contains_key("drawing"));
        assert!(properties.contains_key("canvas"));
        assert!(properties.contains_key("save"));
    }
}
