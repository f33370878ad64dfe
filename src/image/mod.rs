use std::{str::FromStr, sync::Arc};

use crate::{
    error::ImagenError,
    pixel::{PixelFormat, Rgba},
};

pub mod sampler;

pub use sampler::{center, tile, Centered, Tiled};

/// A decoded image with random access to its pixels.
#[derive(Debug, Clone)]
pub struct SourceImage {
    rows: usize,
    cols: usize,
    resolution: f64,
    format: PixelFormat,
    pixels: Arc<[u8]>,
}

impl SourceImage {
    /// `pixels` is row-major with `format.channels()` bytes per pixel.
    pub fn new(
        rows: usize,
        cols: usize,
        resolution: f64,
        format: PixelFormat,
        pixels: Vec<u8>,
    ) -> Result<Self, ImagenError> {
        if rows == 0 || cols == 0 {
            return Err(ImagenError::InvalidImage(format!(
                "empty image {}x{}",
                cols, rows
            )));
        }
        if !(resolution.is_finite() && resolution > 0.0) {
            return Err(ImagenError::InvalidImage(format!(
                "resolution must be positive, got {}",
                resolution
            )));
        }
        let expected = rows * cols * format.channels();
        if pixels.len() != expected {
            return Err(ImagenError::InvalidImage(format!(
                "expected {} bytes for {}x{} {}, got {}",
                expected,
                cols,
                rows,
                format,
                pixels.len()
            )));
        }
        Ok(Self {
            rows,
            cols,
            resolution,
            format,
            pixels: pixels.into(),
        })
    }

    /// Returns the image scaled up by `s`, by scaling its resolution down.
    /// The pixel buffer is shared, not copied.
    pub fn scale(&self, s: f64) -> Result<Self, ImagenError> {
        if !(s.is_finite() && s > 0.0) {
            return Err(ImagenError::InvalidScale(s));
        }
        Ok(Self {
            resolution: self.resolution / s,
            pixels: Arc::clone(&self.pixels),
            ..*self
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Physical width in meters.
    pub fn width(&self) -> f64 {
        self.cols as f64 / self.resolution
    }

    /// Physical height in meters.
    pub fn height(&self) -> f64 {
        self.rows as f64 / self.resolution
    }

    pub(crate) fn pixel_at(&self, row: usize, col: usize) -> &[u8] {
        let size = self.format.channels();
        let offset = (self.cols * row + col) * size;
        &self.pixels[offset..offset + size]
    }
}

/// Background for a centered image. Both mattes are clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialize", serde(rename_all = "lowercase"))]
pub enum Matte {
    #[default]
    White,
    Black,
}

impl Matte {
    pub fn rgba(&self) -> Rgba {
        match self {
            Self::White => [0xff, 0xff, 0xff, 0x00],
            Self::Black => [0x00, 0x00, 0x00, 0x00],
        }
    }
}

impl FromStr for Matte {
    type Err = ImagenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "white" => Ok(Self::White),
            "black" => Ok(Self::Black),
            _ => Err(ImagenError::UnknownMatte(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_checks_buffer() {
        assert!(SourceImage::new(2, 3, 100.0, PixelFormat::Rgb, vec![0; 18]).is_ok());
        assert!(matches!(
            SourceImage::new(2, 3, 100.0, PixelFormat::Rgb, vec![0; 17]),
            Err(ImagenError::InvalidImage(_))
        ));
        assert!(matches!(
            SourceImage::new(0, 3, 100.0, PixelFormat::Gs, vec![]),
            Err(ImagenError::InvalidImage(_))
        ));
        assert!(matches!(
            SourceImage::new(1, 1, 0.0, PixelFormat::Gs, vec![0]),
            Err(ImagenError::InvalidImage(_))
        ));
    }

    #[test]
    fn test_scale_shares_pixels() {
        let image = SourceImage::new(2, 4, 100.0, PixelFormat::Gs, (0..8).collect()).unwrap();
        let scaled = image.scale(4.0).unwrap();
        assert_eq!(scaled.resolution(), 25.0);
        assert_eq!(scaled.rows(), 2);
        assert_eq!(scaled.cols(), 4);
        assert!((scaled.width() - 4.0 * image.width()).abs() < 1e-12);
        assert!(std::ptr::eq(scaled.pixels(), image.pixels()));
        assert!(matches!(image.scale(0.0), Err(ImagenError::InvalidScale(_))));
    }

    #[test]
    fn test_pixel_at() {
        let image = SourceImage::new(2, 2, 1.0, PixelFormat::Gsa, (0..8).collect()).unwrap();
        assert_eq!(image.pixel_at(0, 0), &[0, 1]);
        assert_eq!(image.pixel_at(0, 1), &[2, 3]);
        assert_eq!(image.pixel_at(1, 0), &[4, 5]);
    }

    #[test]
    fn test_mattes() {
        assert_eq!("white".parse::<Matte>().unwrap().rgba(), [0xff, 0xff, 0xff, 0x00]);
        assert_eq!("black".parse::<Matte>().unwrap().rgba(), [0x00, 0x00, 0x00, 0x00]);
        assert_eq!(Matte::default(), Matte::White);
        assert!(matches!("gray".parse::<Matte>(), Err(ImagenError::UnknownMatte(_))));
    }
}
