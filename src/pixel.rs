//! Palettes and mattes are defined as RGBA and down-channeled to the pixel
//! format being rendered. All channels are 8-bit.

use std::{fmt, str::FromStr};

use crate::error::ImagenError;

/// An 8-bit RGBA color, the source format for palettes and mattes.
pub type Rgba = [u8; 4];

/// A pixel whose length is the channel count of its format.
pub type Pixel = Vec<u8>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialize", serde(rename_all = "lowercase"))]
pub enum PixelFormat {
    Gs,
    Gsa,
    #[default]
    Rgb,
    Rgba,
}

impl PixelFormat {
    pub const ALL: [PixelFormat; 4] = [Self::Gs, Self::Gsa, Self::Rgb, Self::Rgba];

    pub fn channels(&self) -> usize {
        match self {
            Self::Gs => 1,
            Self::Gsa => 2,
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Gs => "gs",
            Self::Gsa => "gsa",
            Self::Rgb => "rgb",
            Self::Rgba => "rgba",
        }
    }

    /// Converts an RGBA color to this format.
    pub fn convert(&self, rgba: Rgba) -> Pixel {
        convert(*self, rgba)
    }
}

impl FromStr for PixelFormat {
    type Err = ImagenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| ImagenError::UnknownPixelFormat(s.to_string()))
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Mean of the color channels, rounded half away from zero.
///
/// A mean of three integers never lands on `.5`, so the tie rule only matters
/// for the 1/3 and 2/3 fractions, which round down and up respectively.
fn gray(rgba: Rgba) -> u8 {
    let sum = rgba[0] as f64 + rgba[1] as f64 + rgba[2] as f64;
    (sum / 3.0).round() as u8
}

/// Converts an RGBA color to the given pixel format.
pub fn convert(format: PixelFormat, rgba: Rgba) -> Pixel {
    match format {
        PixelFormat::Gs => vec![gray(rgba)],
        PixelFormat::Gsa => vec![gray(rgba), rgba[3]],
        PixelFormat::Rgb => rgba[..3].to_vec(),
        PixelFormat::Rgba => rgba.to_vec(),
    }
}

pub fn convert_palette(format: PixelFormat, palette: &[Rgba]) -> Vec<Pixel> {
    palette.iter().map(|&rgba| convert(format, rgba)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [Rgba; 4] = [
        [0x00, 0x00, 0x00, 0xff],
        [0x29, 0x29, 0xa3, 0xff],
        [0xff, 0xff, 0xff, 0x00],
        [0x12, 0x34, 0x56, 0x78],
    ];

    #[test]
    fn test_rgb_and_rgba() {
        for p in SAMPLES {
            assert_eq!(convert(PixelFormat::Rgb, p), p[0..3].to_vec());
            assert_eq!(convert(PixelFormat::Rgba, p), p.to_vec());
        }
    }

    #[test]
    fn test_gray_is_rounded_mean() {
        for p in SAMPLES {
            let mean = (p[0] as f64 + p[1] as f64 + p[2] as f64) / 3.0;
            assert_eq!(convert(PixelFormat::Gs, p), vec![mean.round() as u8]);
            assert_eq!(convert(PixelFormat::Gsa, p), vec![mean.round() as u8, p[3]]);
        }
        assert_eq!(convert(PixelFormat::Gs, [0x29, 0x29, 0xa3, 0xff]), vec![0x52]);
    }

    #[test]
    fn test_gray_thirds() {
        // 4/3 rounds down, 5/3 rounds up
        assert_eq!(convert(PixelFormat::Gs, [1, 1, 2, 0]), vec![1]);
        assert_eq!(convert(PixelFormat::Gs, [1, 2, 2, 0]), vec![2]);
        assert_eq!(convert(PixelFormat::Gs, [255, 255, 254, 0]), vec![255]);
        assert_eq!(convert(PixelFormat::Gs, [0, 0, 1, 0]), vec![0]);
    }

    #[test]
    fn test_format_names() {
        for format in PixelFormat::ALL {
            assert_eq!(format.name().parse::<PixelFormat>().unwrap(), format);
            assert_eq!(format.convert([1, 2, 3, 4]).len(), format.channels());
        }
        assert!(matches!(
            "cmyk".parse::<PixelFormat>(),
            Err(ImagenError::UnknownPixelFormat(name)) if name == "cmyk"
        ));
    }
}
