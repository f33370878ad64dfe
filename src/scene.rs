use crate::pixel::PixelFormat;

/// A pixel function over scene coordinates in meters, with the origin at the
/// image center and `y` pointing up.
///
/// Every returned slice must be `format().channels()` bytes long. The
/// `&mut self` receiver lets a scene keep private state between queries,
/// such as the block cache of a random pattern.
pub trait PixelFunction {
    fn format(&self) -> PixelFormat;
    fn pixel(&mut self, x: f64, y: f64) -> &[u8];
}

impl<P: PixelFunction + ?Sized> PixelFunction for Box<P> {
    fn format(&self) -> PixelFormat {
        (**self).format()
    }

    fn pixel(&mut self, x: f64, y: f64) -> &[u8] {
        (**self).pixel(x, y)
    }
}

impl<P: PixelFunction + ?Sized> PixelFunction for &mut P {
    fn format(&self) -> PixelFormat {
        (**self).format()
    }

    fn pixel(&mut self, x: f64, y: f64) -> &[u8] {
        (**self).pixel(x, y)
    }
}

/// A scene seen through a coordinate transformation.
pub struct View<S, T> {
    scene: S,
    transform: T,
}

impl<S, T> PixelFunction for View<S, T>
where
    S: PixelFunction,
    T: Fn(f64, f64) -> (f64, f64),
{
    fn format(&self) -> PixelFormat {
        self.scene.format()
    }

    fn pixel(&mut self, x: f64, y: f64) -> &[u8] {
        let (x, y) = (self.transform)(x, y);
        self.scene.pixel(x, y)
    }
}

pub fn view<S, T>(scene: S, transform: T) -> View<S, T>
where
    S: PixelFunction,
    T: Fn(f64, f64) -> (f64, f64),
{
    View { scene, transform }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Quadrants;

    impl PixelFunction for Quadrants {
        fn format(&self) -> PixelFormat {
            PixelFormat::Gs
        }

        fn pixel(&mut self, x: f64, y: f64) -> &[u8] {
            match (x >= 0.0, y >= 0.0) {
                (true, true) => &[0],
                (false, true) => &[1],
                (false, false) => &[2],
                (true, false) => &[3],
            }
        }
    }

    #[test]
    fn test_identity_view() {
        let mut scene = view(Quadrants, |x, y| (x, y));
        assert_eq!(scene.format(), PixelFormat::Gs);
        assert_eq!(scene.pixel(1.0, 1.0), &[0]);
        assert_eq!(scene.pixel(-1.0, -1.0), &[2]);
    }

    #[test]
    fn test_mirror_view() {
        let mut scene: Box<dyn PixelFunction> = Box::new(view(Quadrants, |x, y| (-x, y)));
        assert_eq!(scene.pixel(1.0, 1.0), &[1]);
        assert_eq!(scene.pixel(-1.0, -1.0), &[3]);
    }
}
