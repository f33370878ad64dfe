//! The PNG boundary: decoding source images and streaming rendered rows out
//! to an encoder. Resolution travels in the `pHYs` chunk as pixels per meter,
//! the same unit the rest of the crate uses.

use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use log::{debug, warn};
use png::{BitDepth, ColorType, Decoder, Encoder, PixelDimensions, Transformations, Unit};

use crate::{
    error::ImagenError, image::SourceImage, page::default_resolution, pixel::PixelFormat,
    render::RenderedImage, scene::PixelFunction,
};

fn color_type(format: PixelFormat) -> ColorType {
    match format {
        PixelFormat::Gs => ColorType::Grayscale,
        PixelFormat::Gsa => ColorType::GrayscaleAlpha,
        PixelFormat::Rgb => ColorType::Rgb,
        PixelFormat::Rgba => ColorType::Rgba,
    }
}

fn pixel_format(color: ColorType) -> Result<PixelFormat, ImagenError> {
    match color {
        ColorType::Grayscale => Ok(PixelFormat::Gs),
        ColorType::GrayscaleAlpha => Ok(PixelFormat::Gsa),
        ColorType::Rgb => Ok(PixelFormat::Rgb),
        ColorType::Rgba => Ok(PixelFormat::Rgba),
        other => Err(ImagenError::UnsupportedColor(other)),
    }
}

/// Decodes a PNG stream into 8-bit pixels. Palettes and low bit depths are
/// expanded, 16-bit channels are stripped to 8.
pub fn decode<R: Read>(reader: R) -> Result<SourceImage, ImagenError> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;

    let resolution = match reader.info().pixel_dims {
        Some(PixelDimensions {
            xppu,
            unit: Unit::Meter,
            ..
        }) if xppu > 0 => xppu as f64,
        _ => default_resolution(),
    };

    let mut pixels = vec![0; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut pixels)?;
    pixels.truncate(frame.buffer_size());
    if frame.bit_depth != BitDepth::Eight {
        return Err(ImagenError::InvalidImage(format!(
            "expected 8-bit output, got {:?}",
            frame.bit_depth
        )));
    }
    let format = pixel_format(frame.color_type)?;
    debug!(
        "decoded {}x{} {} at {:.2} pixels/m",
        frame.width, frame.height, format, resolution
    );

    SourceImage::new(
        frame.height as usize,
        frame.width as usize,
        resolution,
        format,
        pixels,
    )
}

/// Reads a PNG file.
pub fn read(path: impl AsRef<Path>) -> Result<SourceImage, ImagenError> {
    let file = File::open(path.as_ref())?;
    decode(BufReader::new(file))
}

/// Streams the remaining rows of `image` through a PNG encoder, one row at a
/// time.
pub fn encode<W: Write, S: PixelFunction>(
    writer: W,
    image: &mut RenderedImage<S>,
) -> Result<(), ImagenError> {
    let mut encoder = Encoder::new(writer, image.cols() as u32, image.rows() as u32);
    encoder.set_color(color_type(image.format()));
    encoder.set_depth(BitDepth::Eight);
    let pixels_per_meter = image.resolution().round() as u32;
    encoder.set_pixel_dims(Some(PixelDimensions {
        xppu: pixels_per_meter,
        yppu: pixels_per_meter,
        unit: Unit::Meter,
    }));

    let mut header = encoder.write_header()?;
    let mut stream = header.stream_writer()?;
    while let Some(row) = image.next_row() {
        stream.write_all(row)?;
    }
    stream.finish()?;
    Ok(())
}

/// Writes a rendered image to a PNG file. A file left half written by a
/// failed encode is removed.
pub fn write<S: PixelFunction>(
    path: impl AsRef<Path>,
    mut image: RenderedImage<S>,
) -> Result<(), ImagenError> {
    let path = path.as_ref();
    let file = File::create(path)?;

    let mut out = BufWriter::new(file);
    let result =
        encode(&mut out, &mut image).and_then(|()| out.flush().map_err(ImagenError::from));
    if let Err(err) = &result {
        warn!("writing {} failed: {}", path.display(), err);
        drop(out);
        if let Err(remove_err) = fs::remove_file(path) {
            warn!("could not remove {}: {}", path.display(), remove_err);
        }
    }
    result
}
