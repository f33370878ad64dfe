//! Everything needed to describe one render: the page, the resolution, a
//! scale, and what to draw.

use std::{path::Path, path::PathBuf, time::Instant};

use log::info;

use crate::{
    codec,
    error::ImagenError,
    image::{center, tile, Matte},
    page::{resolution_named, Page, DEFAULT_PAGE, DEFAULT_RESOLUTION},
    pattern::{fetch_pattern, fetch_pattern_seeded},
    pixel::PixelFormat,
    render::{render, RenderedImage},
    scene::PixelFunction,
    units::parse_distance,
};

pub type Scene = Box<dyn PixelFunction>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialize", serde(rename_all = "lowercase"))]
pub enum Placement {
    Tile,
    Center(Matte),
}

impl Default for Placement {
    fn default() -> Self {
        Self::Center(Matte::default())
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialize", serde(rename_all = "lowercase"))]
pub enum SceneSource {
    /// A PNG picture, tiled or centered on a matte.
    Picture { path: PathBuf, placement: Placement },
    /// A named pattern. `size` is a distance literal such as `15mm`.
    Pattern {
        name: String,
        size: String,
        format: PixelFormat,
        seed: Option<u64>,
    },
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct SceneConfig {
    pub page: String,
    pub resolution: String,
    pub scale: f64,
    pub source: SceneSource,
}

impl SceneConfig {
    pub fn new(source: SceneSource) -> Self {
        Self {
            page: DEFAULT_PAGE.to_string(),
            resolution: DEFAULT_RESOLUTION.to_string(),
            scale: 1.0,
            source,
        }
    }

    pub fn with_page(mut self, page: &str) -> Self {
        self.page = page.to_string();
        self
    }

    pub fn with_resolution(mut self, resolution: &str) -> Self {
        self.resolution = resolution.to_string();
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    fn validated_scale(&self) -> Result<f64, ImagenError> {
        if self.scale.is_finite() && self.scale > 0.0 {
            Ok(self.scale)
        } else {
            Err(ImagenError::InvalidScale(self.scale))
        }
    }

    /// Builds the pixel function this configuration describes.
    pub fn generate_scene(&self) -> Result<Scene, ImagenError> {
        let scale = self.validated_scale()?;
        match &self.source {
            SceneSource::Picture { path, placement } => {
                let image = codec::read(path)?.scale(scale)?;
                let scene: Scene = match placement {
                    Placement::Tile => Box::new(tile(image)),
                    Placement::Center(matte) => Box::new(center(image, matte.rgba())),
                };
                Ok(scene)
            }
            SceneSource::Pattern {
                name,
                size,
                format,
                seed,
            } => {
                let size = parse_distance(size)? * scale;
                match seed {
                    Some(seed) => fetch_pattern_seeded(name, *format, size, *seed),
                    None => fetch_pattern(name, *format, size),
                }
            }
        }
    }

    /// The page and resolution, in pixels per meter, to render at.
    pub fn render_settings(&self) -> Result<(Page, f64), ImagenError> {
        Ok((Page::named(&self.page)?, resolution_named(&self.resolution)?))
    }

    pub fn render(&self) -> Result<RenderedImage<Scene>, ImagenError> {
        let (page, resolution) = self.render_settings()?;
        let scene = self.generate_scene()?;
        Ok(render(scene, &page, resolution))
    }

    /// Renders straight to a PNG file.
    pub fn render_to_file(&self, path: impl AsRef<Path>) -> Result<(), ImagenError> {
        let path = path.as_ref();
        let started = Instant::now();
        let image = self.render()?;
        let (cols, rows) = (image.cols(), image.rows());
        codec::write(path, image)?;
        info!(
            "{} {}x{} {}",
            path.display(),
            cols,
            rows,
            timestr(started.elapsed().as_secs_f64())
        );
        Ok(())
    }
}

fn timestr(seconds: f64) -> String {
    let total = seconds.round() as u64;
    format!("{:02}:{:02}:{:02}", total / 3600, total % 3600 / 60, total % 60)
}
