//! PNG/JPEG decoding and encoding through the `image` crate.

use super::types::{ImageFormat, RasterError};
use crate::draw::Bitmap;
use image::{ImageReader, RgbImage};
use log::{debug, info};
use std::path::Path;

/// Decodes a PNG or JPEG file into a bitmap.
///
/// The format is sniffed from the file contents; the extension only has to
/// name one of the supported formats.
pub fn load_bitmap(path: &Path) -> Result<Bitmap, RasterError> {
    if ImageFormat::from_path(path).is_none() {
        return Err(RasterError::UnsupportedFormat(path.to_path_buf()));
    }

    let decode_err = |source| RasterError::Decode {
        path: path.to_path_buf(),
        source,
    };

    let image = ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
        .map_err(decode_err)?;

    info!(
        "Loaded image {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );

    Ok(Bitmap::new(image.to_rgba8()))
}

/// Encodes a flattened drawing to `path` in the given format.
pub fn write_image(image: &RgbImage, path: &Path, format: ImageFormat) -> Result<(), RasterError> {
    image
        .save_with_format(path, format.codec())
        .map_err(|source| RasterError::Encode {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(
        "Encoded {}x{} {} to {}",
        image.width(),
        image.height(),
        format.extension(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use tempfile::TempDir;

    #[test]
    fn png_round_trip_preserves_pixels() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("square.png");
        let image = RgbImage::from_pixel(3, 2, Rgb([12, 200, 7]));

        write_image(&image, &path, ImageFormat::Png).unwrap();
        let bitmap = load_bitmap(&path).unwrap();

        assert_eq!((bitmap.width(), bitmap.height()), (3, 2));
        assert_eq!(bitmap.pixels().get_pixel(2, 1).0, [12, 200, 7, 255]);
    }

    #[test]
    fn jpeg_is_written_with_jpeg_signature() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("photo.jpg");
        write_image(&RgbImage::new(8, 8), &path, ImageFormat::Jpeg).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let err = load_bitmap(Path::new("/tmp/notes.txt")).unwrap_err();
        assert!(matches!(err, RasterError::UnsupportedFormat(_)));
    }

    #[test]
    fn missing_file_reports_io_error() {
        let temp = TempDir::new().unwrap();
        let err = load_bitmap(&temp.path().join("missing.png")).unwrap_err();
        assert!(matches!(err, RasterError::Io(_)));
    }

    #[test]
    fn garbage_content_reports_decode_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let err = load_bitmap(&path).unwrap_err();
        assert!(matches!(err, RasterError::Decode { .. }));
    }
}
