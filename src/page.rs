use crate::{
    error::ImagenError,
    units::{INCH, MM},
};

pub const DEFAULT_PAGE: &str = "screen";
pub const DEFAULT_RESOLUTION: &str = "screen";

pub const PAGE_NAMES: [&str; 4] = ["screen", "letter", "a0", "a4"];
pub const RESOLUTION_NAMES: [&str; 2] = ["screen", "printer"];

const SCREEN_PAGE: Page = Page {
    width: 280.0 * MM,
    height: 280.0 * MM,
    hmargin: 0.0,
    vmargin: 0.0,
};
const SCREEN_RESOLUTION: f64 = 81.59 / INCH;

/// Anything with a renderable image area, in meters.
pub trait ImageArea {
    fn image_width(&self) -> f64;
    fn image_height(&self) -> f64;
}

/// Physical page dimensions and margins, in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Page {
    pub width: f64,
    pub height: f64,
    pub hmargin: f64,
    pub vmargin: f64,
}

impl Page {
    pub fn new(width: f64, height: f64, hmargin: f64, vmargin: f64) -> Result<Self, ImagenError> {
        if [width, height, hmargin, vmargin]
            .iter()
            .any(|v| !v.is_finite() || *v < 0.0)
        {
            return Err(ImagenError::InvalidPage(
                "dimensions must be finite and non-negative".to_string(),
            ));
        }

        let page = Self {
            width,
            height,
            hmargin,
            vmargin,
        };
        if page.image_width() <= 0.0 || page.image_height() <= 0.0 {
            return Err(ImagenError::InvalidPage(
                "margins leave no image area".to_string(),
            ));
        }
        Ok(page)
    }

    /// Get a configured page by name.
    pub fn named(name: &str) -> Result<Self, ImagenError> {
        let (width, height, hmargin, vmargin) = match name {
            "screen" => return Ok(SCREEN_PAGE),
            "letter" => (8.5 * INCH, 11.0 * INCH, 1.0 * INCH, 1.0 * INCH),
            "a0" => (841.0 * MM, 1189.0 * MM, 0.0, 0.0),
            "a4" => (210.0 * MM, 297.0 * MM, 25.0 * MM, 25.0 * MM),
            _ => return Err(ImagenError::UnknownPage(name.to_string())),
        };
        Ok(Self {
            width,
            height,
            hmargin,
            vmargin,
        })
    }

    /// Portrait to landscape and back.
    pub fn turn(&self) -> Self {
        Self {
            width: self.height,
            height: self.width,
            hmargin: self.vmargin,
            vmargin: self.hmargin,
        }
    }

    pub fn image_width(&self) -> f64 {
        self.width - 2.0 * self.hmargin
    }

    pub fn image_height(&self) -> f64 {
        self.height - 2.0 * self.vmargin
    }
}

impl Default for Page {
    fn default() -> Self {
        SCREEN_PAGE
    }
}

impl ImageArea for Page {
    fn image_width(&self) -> f64 {
        Page::image_width(self)
    }

    fn image_height(&self) -> f64 {
        Page::image_height(self)
    }
}

/// Image width and height without a page around them.
impl ImageArea for (f64, f64) {
    fn image_width(&self) -> f64 {
        self.0
    }

    fn image_height(&self) -> f64 {
        self.1
    }
}

/// Get a configured resolution, in pixels per meter, by name.
pub fn resolution_named(name: &str) -> Result<f64, ImagenError> {
    match name {
        "screen" => Ok(SCREEN_RESOLUTION),
        "printer" => Ok(300.0 / INCH),
        _ => Err(ImagenError::UnknownResolution(name.to_string())),
    }
}

pub fn default_resolution() -> f64 {
    SCREEN_RESOLUTION
}
