use std::collections::HashMap;

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    error::ImagenError,
    pixel::{convert_palette, Pixel, PixelFormat, Rgba},
    scene::PixelFunction,
};

use super::{checker::checker_phase, validate_size};

/// Block index along one axis. The sign offset keeps the blocks on either
/// side of zero apart.
fn ordinate(v: f64, size: f64) -> i64 {
    (v / size).floor() as i64 + v.signum() as i64
}

/// Memoized random palette indices, one per block.
#[derive(Debug, Clone)]
struct BlockCache {
    size: f64,
    choices: usize,
    rng: StdRng,
    blocks: HashMap<(i64, i64), usize>,
}

impl BlockCache {
    fn new(size: f64, choices: usize, rng: StdRng) -> Self {
        Self {
            size,
            choices,
            rng,
            blocks: HashMap::new(),
        }
    }

    fn index(&mut self, x: f64, y: f64) -> usize {
        let key = (ordinate(x, self.size), ordinate(y, self.size));
        let (rng, choices) = (&mut self.rng, self.choices);
        *self
            .blocks
            .entry(key)
            .or_insert_with(|| rng.gen_range(0..choices))
    }
}

/// Squares of side `size`, each a random palette color.
#[derive(Debug, Clone)]
pub struct RandomBlock {
    format: PixelFormat,
    palette: Vec<Pixel>,
    cache: BlockCache,
}

impl RandomBlock {
    pub fn new(size: f64, format: PixelFormat, palette: &[Rgba]) -> Result<Self, ImagenError> {
        Self::with_rng(size, format, palette, StdRng::from_entropy())
    }

    pub fn with_seed(
        size: f64,
        format: PixelFormat,
        palette: &[Rgba],
        seed: u64,
    ) -> Result<Self, ImagenError> {
        Self::with_rng(size, format, palette, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        size: f64,
        format: PixelFormat,
        palette: &[Rgba],
        rng: StdRng,
    ) -> Result<Self, ImagenError> {
        validate_size(size)?;
        if palette.is_empty() {
            return Err(ImagenError::PaletteSize {
                expected: "at least 1",
                found: 0,
            });
        }
        Ok(Self {
            format,
            palette: convert_palette(format, palette),
            cache: BlockCache::new(size, palette.len(), rng),
        })
    }

    /// Number of blocks colored so far.
    pub fn cached_blocks(&self) -> usize {
        self.cache.blocks.len()
    }
}

impl PixelFunction for RandomBlock {
    fn format(&self) -> PixelFormat {
        self.format
    }

    fn pixel(&mut self, x: f64, y: f64) -> &[u8] {
        let index = self.cache.index(x, y);
        &self.palette[index]
    }
}

/// A checkerboard whose foreground is the first palette color and whose
/// background blocks are random picks from the rest of the palette.
#[derive(Debug, Clone)]
pub struct RandomChecker {
    size: f64,
    format: PixelFormat,
    foreground: Pixel,
    background: Vec<Pixel>,
    cache: BlockCache,
}

impl RandomChecker {
    pub fn new(size: f64, format: PixelFormat, palette: &[Rgba]) -> Result<Self, ImagenError> {
        Self::with_rng(size, format, palette, StdRng::from_entropy())
    }

    pub fn with_seed(
        size: f64,
        format: PixelFormat,
        palette: &[Rgba],
        seed: u64,
    ) -> Result<Self, ImagenError> {
        Self::with_rng(size, format, palette, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        size: f64,
        format: PixelFormat,
        palette: &[Rgba],
        rng: StdRng,
    ) -> Result<Self, ImagenError> {
        validate_size(size)?;
        if palette.len() < 2 {
            return Err(ImagenError::PaletteSize {
                expected: "at least 2",
                found: palette.len(),
            });
        }
        let mut background = convert_palette(format, palette);
        let foreground = background.remove(0);
        Ok(Self {
            size,
            format,
            foreground,
            cache: BlockCache::new(size, background.len(), rng),
            background,
        })
    }

    pub fn cached_blocks(&self) -> usize {
        self.cache.blocks.len()
    }
}

impl PixelFunction for RandomChecker {
    fn format(&self) -> PixelFormat {
        self.format
    }

    fn pixel(&mut self, x: f64, y: f64) -> &[u8] {
        if checker_phase(x, y, self.size) {
            &self.foreground
        } else {
            let index = self.cache.index(x, y);
            &self.background[index]
        }
    }
}
