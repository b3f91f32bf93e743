//! Save location and filename handling.

use super::types::{ImageFormat, RasterError};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Where drawings go when a save does not name a file.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveTarget {
    /// Directory to save drawings to.
    pub directory: PathBuf,
    /// Filename template (supports chrono format specifiers).
    pub filename_template: String,
    /// Format used when neither the request nor the path picks one.
    pub format: ImageFormat,
}

impl Default for SaveTarget {
    fn default() -> Self {
        Self {
            directory: dirs::picture_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("Paintbox"),
            filename_template: "drawing_%Y-%m-%d_%H%M%S".to_string(),
            format: ImageFormat::Png,
        }
    }
}

impl SaveTarget {
    /// Works out the destination file and format for a save request.
    ///
    /// - An explicit `format` always wins; otherwise it is inferred from the
    ///   path's extension, then falls back to the configured default.
    /// - A path without an extension gets the format's extension appended.
    /// - With no path, a timestamped file in `directory` is used and the
    ///   directory is created if needed.
    pub fn resolve(
        &self,
        path: Option<&Path>,
        format: Option<ImageFormat>,
    ) -> Result<(PathBuf, ImageFormat), RasterError> {
        match path {
            Some(path) => {
                let format = format
                    .or_else(|| ImageFormat::from_path(path))
                    .unwrap_or(self.format);
                let path = if path.extension().is_none() {
                    path.with_extension(format.extension())
                } else {
                    path.to_path_buf()
                };
                Ok((path, format))
            }
            None => {
                let format = format.unwrap_or(self.format);
                let directory = ensure_directory_exists(&self.directory)?;
                let filename = generate_filename(&self.filename_template, format.extension());
                Ok((directory.join(filename), format))
            }
        }
    }
}

/// Generate a filename based on the template and current time.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
/// * `extension` - File extension (e.g., "png")
pub fn generate_filename(template: &str, extension: &str) -> String {
    let now = Local::now();
    let filename = now.format(template).to_string();
    format!("{}.{}", filename, extension)
}

/// Ensure the save directory exists, creating it if necessary.
///
/// # Returns
/// The canonicalized path to the directory
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, RasterError> {
    if !directory.exists() {
        log::info!("Creating save directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
