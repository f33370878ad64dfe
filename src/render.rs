use log::debug;

use crate::{page::ImageArea, pixel::PixelFormat, scene::PixelFunction};

/// A rendered image whose rows are produced on demand.
///
/// Rows come out top to bottom, once each. Every row is written into the same
/// buffer, so a row returned by [`RenderedImage::next_row`] is only valid
/// until the next call.
pub struct RenderedImage<S: PixelFunction> {
    rows: usize,
    cols: usize,
    resolution: f64,
    format: PixelFormat,
    scene: S,
    half_width: f64,
    half_height: f64,
    row: Vec<u8>,
    next: usize,
}

/// Renders `scene` over the image area of `area` at `resolution` pixels per
/// meter.
pub fn render<S: PixelFunction>(
    scene: S,
    area: &impl ImageArea,
    resolution: f64,
) -> RenderedImage<S> {
    let (width, height) = (area.image_width(), area.image_height());
    let rows = (resolution * height).round() as usize;
    let cols = (resolution * width).round() as usize;
    let format = scene.format();
    debug!("rendering {}x{} {} at {:.2} pixels/m", cols, rows, format, resolution);

    RenderedImage {
        rows,
        cols,
        resolution,
        format,
        scene,
        half_width: width / 2.0,
        half_height: height / 2.0,
        row: vec![0; cols * format.channels()],
        next: 0,
    }
}

impl<S: PixelFunction> RenderedImage<S> {
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

    /// Bytes in one row.
    pub fn row_len(&self) -> usize {
        self.row.len()
    }

    /// Renders and returns the next row, or `None` once every row is out.
    pub fn next_row(&mut self) -> Option<&[u8]> {
        if self.next >= self.rows {
            return None;
        }

        let r = self.next;
        let size = self.format.channels();
        let v = r as f64 / self.resolution;
        let y = self.half_height - v;
        for c in 0..self.cols {
            let h = c as f64 / self.resolution;
            let x = h - self.half_width;
            let offset = c * size;
            self.row[offset..offset + size].copy_from_slice(self.scene.pixel(x, y));
        }

        self.next += 1;
        Some(&self.row)
    }

    /// Renders the remaining rows into one buffer.
    pub fn into_raster(mut self) -> Vec<u8> {
        let mut raster = Vec::with_capacity((self.rows - self.next) * self.row.len());
        while let Some(row) = self.next_row() {
            raster.extend_from_slice(row);
        }
        raster
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        image::{center, tile, Matte, SourceImage},
        page::{resolution_named, Page},
        pattern::{fetch_pattern, Checker, BLACKWHITE},
        units::MM,
    };

    /// Encodes the sampled coordinate's quadrant.
    struct Quadrants;

    impl PixelFunction for Quadrants {
        fn format(&self) -> PixelFormat {
            PixelFormat::Gs
        }

        fn pixel(&mut self, x: f64, y: f64) -> &[u8] {
            match (x >= 0.0, y > 0.0) {
                (false, true) => &[1],
                (true, true) => &[2],
                (false, false) => &[3],
                (true, false) => &[4],
            }
        }
    }

    #[test]
    fn test_dimensions() {
        let page = Page::named("a4").unwrap();
        let resolution = resolution_named("screen").unwrap();
        let mut image = render(Quadrants, &page, resolution);
        let rows = (resolution * page.image_height()).round() as usize;
        let cols = (resolution * page.image_width()).round() as usize;
        assert_eq!(image.rows(), rows);
        assert_eq!(image.cols(), cols);

        let mut count = 0;
        while let Some(row) = image.next_row() {
            assert_eq!(row.len(), cols);
            count += 1;
        }
        assert_eq!(count, rows);
        assert!(image.next_row().is_none());
    }

    #[test]
    fn test_orientation() {
        // 4x4 pixels, one per meter
        let raster = render(Quadrants, &(4.0, 4.0), 1.0).into_raster();
        #[rustfmt::skip]
        let expected: Vec<u8> = vec![
            1, 1, 2, 2,
            1, 1, 2, 2,
            3, 3, 4, 4,
            3, 3, 4, 4,
        ];
        assert_eq!(raster, expected);
    }

    #[test]
    fn test_row_width_follows_format() {
        for format in PixelFormat::ALL {
            let scene = fetch_pattern("checker", format, 0.01).unwrap();
            let mut image = render(scene, &(0.05, 0.02), 1000.0);
            assert_eq!(image.row_len(), 50 * format.channels());
            assert_eq!(image.next_row().unwrap().len(), 50 * format.channels());
        }
    }

    #[test]
    fn test_render_center_round_trip() {
        let pixels: Vec<u8> = (0..48).collect();
        let image = SourceImage::new(4, 4, 100.0, PixelFormat::Rgb, pixels.clone()).unwrap();
        let centered = center(image, Matte::White.rgba());
        let raster = render(centered, &(0.04, 0.04), 100.0).into_raster();
        assert_eq!(raster, pixels);
    }

    #[test]
    fn test_render_tile_wraps() {
        let pixels: Vec<u8> = (0..4).collect();
        let image = SourceImage::new(2, 2, 1.0, PixelFormat::Gs, pixels).unwrap();
        // the tile is centered, so the left page edge falls mid-tile
        let raster = render(tile(image), &(4.0, 2.0), 1.0).into_raster();
        assert_eq!(raster, vec![1, 0, 1, 0, 3, 2, 3, 2]);
    }

    #[test]
    fn test_default_checker_top_left() {
        let page = Page::named("screen").unwrap();
        let resolution = resolution_named("screen").unwrap();
        let size = 15.0 * MM;
        let scene = Checker::new(size, PixelFormat::Rgb, &BLACKWHITE).unwrap();
        let mut image = render(scene, &page, resolution);

        let (x, y) = (-page.image_width() / 2.0, page.image_height() / 2.0);
        let period = 2.0 * size;
        let phase = (x.rem_euclid(period) <= size) ^ (y.rem_euclid(period) <= size);
        // x wraps to 10mm and y to 20mm
        assert!(phase);

        let row = image.next_row().unwrap();
        assert_eq!(&row[0..3], &[0xff, 0xff, 0xff]);
        assert_eq!(&row[0..3], PixelFormat::Rgb.convert(BLACKWHITE[phase as usize]).as_slice());
    }
}
