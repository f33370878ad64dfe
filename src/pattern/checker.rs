use crate::{
    error::ImagenError,
    pixel::{convert_palette, Pixel, PixelFormat, Rgba},
    scene::PixelFunction,
};

use super::validate_size;

/// Whether a point is in the "low" half of its checker period along both
/// axes or neither.
pub(crate) fn checker_phase(x: f64, y: f64, size: f64) -> bool {
    let period = 2.0 * size;
    (x.rem_euclid(period) <= size) ^ (y.rem_euclid(period) <= size)
}

/// A checkerboard of two colors with squares of side `size`.
#[derive(Debug, Clone)]
pub struct Checker {
    size: f64,
    format: PixelFormat,
    palette: [Pixel; 2],
}

impl Checker {
    /// The palette is converted to `format` up front.
    pub fn new(size: f64, format: PixelFormat, palette: &[Rgba]) -> Result<Self, ImagenError> {
        validate_size(size)?;
        let palette: [Pixel; 2] = convert_palette(format, palette)
            .try_into()
            .map_err(|palette: Vec<Pixel>| ImagenError::PaletteSize {
                expected: "exactly 2",
                found: palette.len(),
            })?;
        Ok(Self {
            size,
            format,
            palette,
        })
    }
}

impl PixelFunction for Checker {
    fn format(&self) -> PixelFormat {
        self.format
    }

    fn pixel(&mut self, x: f64, y: f64) -> &[u8] {
        &self.palette[checker_phase(x, y, self.size) as usize]
    }
}
