use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImagenError {
    #[error("unrecognized distance literal {0}")]
    MalformedLiteral(String),
    #[error("invalid distance value {0}")]
    InvalidNumber(String),
    #[error("unrecognized distance unit {0}")]
    UnknownUnit(String),
    #[error("unknown pixel format {0}")]
    UnknownPixelFormat(String),
    #[error("unknown page {0}")]
    UnknownPage(String),
    #[error("unknown resolution {0}")]
    UnknownResolution(String),
    #[error("unknown pattern {0}")]
    UnknownPattern(String),
    #[error("unknown matte {0}")]
    UnknownMatte(String),
    #[error("size must be positive and finite, got {0}")]
    InvalidSize(f64),
    #[error("scale must be positive and finite, got {0}")]
    InvalidScale(f64),
    #[error("invalid page: {0}")]
    InvalidPage(String),
    #[error("palette needs {expected} entries, got {found}")]
    PaletteSize { expected: &'static str, found: usize },
    #[error("invalid image: {0}")]
    InvalidImage(String),
    #[error("unsupported png color type {0:?}")]
    UnsupportedColor(png::ColorType),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("png decoding failed: {0}")]
    Decode(#[from] png::DecodingError),
    #[error("png encoding failed: {0}")]
    Encode(#[from] png::EncodingError),
}
