//! `image::RgbaImage` exposed as a [`PixelGrid`].

use geomedian_core::{GridBounds, MedianError, PixelGrid, Point, Rgba};

/// Borrowed RGBA image placed at `origin` in grid coordinates.
///
/// Fully transparent pixels all read back as [`Rgba::TRANSPARENT`], whatever
/// their color channels hold, so an alpha-masked background is one color.
#[derive(Clone, Copy, Debug)]
pub struct ImageGrid<'a> {
    image: &'a ::image::RgbaImage,
    origin: Point,
}

impl<'a> ImageGrid<'a> {
    /// Wrap `image` with its top-left pixel at `(0, 0)`.
    pub fn new(image: &'a ::image::RgbaImage) -> Result<Self, MedianError> {
        Self::with_origin(image, Point::default())
    }

    /// Wrap `image` with its top-left pixel at `origin`.
    ///
    /// Fails if the image is empty or its far edge does not fit in `i32`.
    pub fn with_origin(image: &'a ::image::RgbaImage, origin: Point) -> Result<Self, MedianError> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(MedianError::EmptyGrid { width, height });
        }
        GridBounds::checked_from_origin(origin, width, height).ok_or(
            MedianError::OriginOverflow {
                x: origin.x,
                y: origin.y,
                width,
                height,
            },
        )?;
        Ok(Self { image, origin })
    }

    pub fn image(&self) -> &'a ::image::RgbaImage {
        self.image
    }

    /// Image-local pixel coordinates for a grid point, if it lies inside.
    pub fn to_local(&self, p: Point) -> Option<(u32, u32)> {
        self.bounds()
            .contains(p)
            .then(|| ((p.x - self.origin.x) as u32, (p.y - self.origin.y) as u32))
    }
}

impl PixelGrid for ImageGrid<'_> {
    fn bounds(&self) -> GridBounds {
        GridBounds::from_origin(self.origin, self.image.width(), self.image.height())
    }

    #[inline]
    fn color_at(&self, x: i32, y: i32) -> Rgba {
        let lx = (x - self.origin.x) as u32;
        let ly = (y - self.origin.y) as u32;
        match self.image.get_pixel(lx, ly).0 {
            [_, _, _, 0] => Rgba::TRANSPARENT,
            px => Rgba(px),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::image::RgbaImage;
    use geomedian_core::{median_point, Projections};

    #[test]
    fn reads_pixels_through_origin() {
        let mut img = RgbaImage::from_pixel(3, 2, ::image::Rgba([255, 255, 255, 255]));
        img.put_pixel(2, 1, ::image::Rgba([1, 2, 3, 4]));

        let grid = ImageGrid::with_origin(&img, Point::new(-5, 10)).expect("grid");
        assert_eq!(grid.bounds().origin(), Point::new(-5, 10));
        assert_eq!(grid.color_at(-3, 11), Rgba::new(1, 2, 3, 4));
        assert_eq!(grid.color_at(-5, 10), Rgba::WHITE);
        assert_eq!(grid.to_local(Point::new(-3, 11)), Some((2, 1)));
        assert_eq!(grid.to_local(Point::new(-2, 11)), None);
    }

    #[test]
    fn empty_image_is_rejected() {
        let img = RgbaImage::new(0, 0);
        assert!(matches!(
            ImageGrid::new(&img),
            Err(MedianError::EmptyGrid {
                width: 0,
                height: 0
            })
        ));
    }

    #[test]
    fn origin_past_i32_range_is_rejected() {
        let img = RgbaImage::new(4, 4);
        assert!(matches!(
            ImageGrid::with_origin(&img, Point::new(i32::MAX - 1, 0)),
            Err(MedianError::OriginOverflow {
                x,
                width: 4,
                ..
            }) if x == i32::MAX - 1
        ));
        assert!(ImageGrid::with_origin(&img, Point::new(i32::MAX - 4, i32::MIN)).is_ok());
    }

    #[test]
    fn transparent_background_ignores_color_channels() {
        // Alpha-masked export: RGB noise under alpha 0, opaque block at x 20..24, y 8..12.
        let mut img = RgbaImage::from_fn(32, 32, |x, y| {
            ::image::Rgba([(x * 7) as u8, (y * 3) as u8, 0, 0])
        });
        for y in 8..12 {
            for x in 20..24 {
                img.put_pixel(x, y, ::image::Rgba([0, 0, 0, 255]));
            }
        }

        let grid = ImageGrid::new(&img).expect("grid");
        assert_eq!(grid.color_at(5, 5), grid.color_at(31, 31));

        let proj = Projections::compute(&grid, Rgba::TRANSPARENT);
        assert_eq!(proj.foreground_pixels(), 16);
        assert_eq!(median_point(&grid).expect("median"), Point::new(21, 9));
    }
}
