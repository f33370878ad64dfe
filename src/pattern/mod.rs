//! Procedural patterns. A pattern pairs a pattern function with a palette and
//! renders at the given size (half the pattern period) in the given pixel
//! format.

use crate::{error::ImagenError, pixel::PixelFormat, pixel::Rgba, scene::PixelFunction};

pub mod block;
pub mod checker;

pub use block::{RandomBlock, RandomChecker};
pub use checker::Checker;

pub const PATTERN_NAMES: [&str; 3] = ["checker", "block", "randcheck"];

// palette values are rgba so they can be down-channeled to any format
pub const BLACKWHITE: [Rgba; 2] = [[0x00, 0x00, 0x00, 0xff], [0xff, 0xff, 0xff, 0xff]];

pub const BGBWG: [Rgba; 5] = [
    [0x00, 0x00, 0x00, 0xff],
    [0x00, 0x80, 0x00, 0xff],
    [0x29, 0x29, 0xa3, 0xff],
    [0xff, 0xff, 0xff, 0xff],
    [0x50, 0x50, 0x50, 0xff],
];

pub const WGBBG: [Rgba; 5] = [
    [0xff, 0xff, 0xff, 0xff],
    [0x00, 0x80, 0x00, 0xff],
    [0x29, 0x29, 0xa3, 0xff],
    [0x00, 0x00, 0x00, 0xff],
    [0x50, 0x50, 0x50, 0xff],
];

pub fn palette_named(name: &str) -> Option<&'static [Rgba]> {
    match name {
        "blackwhite" => Some(&BLACKWHITE),
        "bgbwg" => Some(&BGBWG),
        "wgbbg" => Some(&WGBBG),
        _ => None,
    }
}

pub(crate) fn validate_size(size: f64) -> Result<(), ImagenError> {
    if size.is_finite() && size > 0.0 {
        Ok(())
    } else {
        Err(ImagenError::InvalidSize(size))
    }
}

/// Fetches a named pattern at the given size, with its palette converted to
/// `format`. Random patterns are seeded from entropy.
pub fn fetch_pattern(
    name: &str,
    format: PixelFormat,
    size: f64,
) -> Result<Box<dyn PixelFunction>, ImagenError> {
    fetch(name, format, size, None)
}

/// Like [`fetch_pattern`], with reproducible random blocks.
pub fn fetch_pattern_seeded(
    name: &str,
    format: PixelFormat,
    size: f64,
    seed: u64,
) -> Result<Box<dyn PixelFunction>, ImagenError> {
    fetch(name, format, size, Some(seed))
}

fn fetch(
    name: &str,
    format: PixelFormat,
    size: f64,
    seed: Option<u64>,
) -> Result<Box<dyn PixelFunction>, ImagenError> {
    let scene: Box<dyn PixelFunction> = match (name, seed) {
        ("checker", _) => Box::new(Checker::new(size, format, &BLACKWHITE)?),
        ("block", None) => Box::new(RandomBlock::new(size, format, &BGBWG)?),
        ("block", Some(seed)) => Box::new(RandomBlock::with_seed(size, format, &BGBWG, seed)?),
        ("randcheck", None) => Box::new(RandomChecker::new(size, format, &WGBBG)?),
        ("randcheck", Some(seed)) => {
            Box::new(RandomChecker::with_seed(size, format, &WGBBG, seed)?)
        }
        _ => return Err(ImagenError::UnknownPattern(name.to_string())),
    };
    Ok(scene)
}
