use crate::{
    pixel::{Pixel, PixelFormat, Rgba},
    scene::PixelFunction,
};

use super::SourceImage;

/// An image centered on the origin, surrounded by a matte.
#[derive(Debug, Clone)]
pub struct Centered {
    image: SourceImage,
    width: f64,
    height: f64,
    matte: Pixel,
}

/// Centers `image` on the origin. Points off the image get `matte`,
/// converted to the image's pixel format.
pub fn center(image: SourceImage, matte: Rgba) -> Centered {
    Centered {
        width: image.width(),
        height: image.height(),
        matte: image.format().convert(matte),
        image,
    }
}

impl Centered {
    /// Nearest pixel, with ties rounded away from zero.
    fn locate(&self, x: f64, y: f64) -> Option<(usize, usize)> {
        let res = self.image.resolution();
        let (h, v) = (x + self.width / 2.0, self.height / 2.0 - y);
        let (r, c) = ((v * res).round(), (h * res).round());
        if r >= 0.0 && c >= 0.0 && r < self.image.rows() as f64 && c < self.image.cols() as f64 {
            Some((r as usize, c as usize))
        } else {
            None
        }
    }
}

impl PixelFunction for Centered {
    fn format(&self) -> PixelFormat {
        self.image.format()
    }

    fn pixel(&mut self, x: f64, y: f64) -> &[u8] {
        match self.locate(x, y) {
            Some((r, c)) => self.image.pixel_at(r, c),
            None => &self.matte,
        }
    }
}

/// An image repeated over the whole plane.
#[derive(Debug, Clone)]
pub struct Tiled {
    image: SourceImage,
    width: f64,
    height: f64,
}

/// Tiles `image` so that a copy is centered on the origin.
pub fn tile(image: SourceImage) -> Tiled {
    Tiled {
        width: image.width(),
        height: image.height(),
        image,
    }
}

impl Tiled {
    fn locate(&self, x: f64, y: f64) -> (usize, usize) {
        let res = self.image.resolution();
        let h = (x + self.width / 2.0).rem_euclid(self.width);
        let v = (self.height / 2.0 - y).rem_euclid(self.height);
        // rem_euclid can land exactly on the far edge for tiny negative inputs
        let r = ((v * res).floor() as usize).min(self.image.rows() - 1);
        let c = ((h * res).floor() as usize).min(self.image.cols() - 1);
        (r, c)
    }
}

impl PixelFunction for Tiled {
    fn format(&self) -> PixelFormat {
        self.image.format()
    }

    fn pixel(&mut self, x: f64, y: f64) -> &[u8] {
        let (r, c) = self.locate(x, y);
        self.image.pixel_at(r, c)
    }
}
