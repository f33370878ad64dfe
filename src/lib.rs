//! Renders PNG images from pixel functions.
//!
//! A scene is any [`PixelFunction`]: a map from a point in meters, origin at
//! the image center and `y` up, to a pixel. Scenes come from pictures
//! ([`image::center`], [`image::tile`]) or patterns
//! ([`pattern::fetch_pattern`]). [`render::render`] evaluates a scene over a
//! page at a resolution and hands back the rows one at a time, and
//! [`codec::write`] streams them into a PNG file.
//!
//! ```no_run
//! use imagen::{codec, page::{resolution_named, Page}, pattern::fetch_pattern, pixel::PixelFormat, render::render, units::MM};
//!
//! let scene = fetch_pattern("checker", PixelFormat::Rgb, 15.0 * MM)?;
//! let image = render(scene, &Page::named("letter")?, resolution_named("printer")?);
//! codec::write("checker.png", image)?;
//! # Ok::<(), imagen::ImagenError>(())
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod image;
pub mod page;
pub mod pattern;
pub mod pixel;
pub mod render;
pub mod scene;
pub mod units;

pub use config::{Placement, Scene, SceneConfig, SceneSource};
pub use error::ImagenError;
pub use page::{ImageArea, Page};
pub use pixel::{PixelFormat, Rgba};
pub use render::{render, RenderedImage};
pub use scene::{view, PixelFunction, View};
