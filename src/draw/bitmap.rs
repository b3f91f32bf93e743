//! Decoded raster images placed on the canvas.

use image::RgbaImage;
use once_cell::unsync::OnceCell;
use std::fmt;

/// A decoded RGBA image held by an Image-kind shape.
///
/// Bitmaps are shared through `Rc` between the shape that displays them and the
/// redo stack, so they are never copied once decoded. The Cairo copy of the
/// pixels is built on first paint and reused afterwards.
#[derive(Clone)]
pub struct Bitmap {
    pixels: RgbaImage,
    surface: OnceCell<cairo::ImageSurface>,
}

impl Bitmap {
    pub fn new(pixels: RgbaImage) -> Self {
        Self {
            pixels,
            surface: OnceCell::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Cairo surface holding these pixels, converted once and then cached.
    pub fn surface(&self) -> Result<&cairo::ImageSurface, cairo::Error> {
        self.surface.get_or_try_init(|| self.build_surface())
    }

    /// Copies the pixels into a new Cairo image surface.
    ///
    /// Cairo's ARGB32 format stores premultiplied alpha in native-endian 32-bit
    /// words, so each pixel is premultiplied and packed on the way in.
    fn build_surface(&self) -> Result<cairo::ImageSurface, cairo::Error> {
        let width = i32::try_from(self.width()).map_err(|_| cairo::Error::InvalidSize)?;
        let height = i32::try_from(self.height()).map_err(|_| cairo::Error::InvalidSize)?;
        let mut surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        let stride = surface.stride() as usize;

        {
            let mut data = surface
                .data()
                .map_err(|_| cairo::Error::SurfaceFinished)?;
            for (x, y, pixel) in self.pixels.enumerate_pixels() {
                let [r, g, b, a] = pixel.0;
                let premultiply = |c: u8| (c as u32 * a as u32 + 127) / 255;
                let word = (a as u32) << 24
                    | premultiply(r) << 16
                    | premultiply(g) << 8
                    | premultiply(b);
                let offset = y as usize * stride + x as usize * 4;
                data[offset..offset + 4].copy_from_slice(&word.to_ne_bytes());
            }
        }

        surface.mark_dirty();
        Ok(surface)
    }
}

impl PartialEq for Bitmap {
    fn eq(&self, other: &Self) -> bool {
        self.pixels == other.pixels
    }
}

impl fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}
