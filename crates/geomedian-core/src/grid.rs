use serde::{Deserialize, Serialize};

use crate::Rgba;

/// Integer point in a grid's coordinate space.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by `(dx, dy)`.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Axis-aligned bounding rectangle. `min` is inclusive, `max` is exclusive.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GridBounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl GridBounds {
    /// Bounds of a `width x height` grid whose top-left sample sits at `origin`,
    /// or `None` if the far edge does not fit in `i32`.
    pub fn checked_from_origin(origin: Point, width: u32, height: u32) -> Option<Self> {
        let max_x = origin.x.checked_add(i32::try_from(width).ok()?)?;
        let max_y = origin.y.checked_add(i32::try_from(height).ok()?)?;
        Some(Self {
            min_x: origin.x,
            min_y: origin.y,
            max_x,
            max_y,
        })
    }

    /// Like [`GridBounds::checked_from_origin`], but an edge past `i32::MAX`
    /// is clamped there, dropping the samples that cannot be addressed.
    pub fn from_origin(origin: Point, width: u32, height: u32) -> Self {
        let clamp = |v: u32| i32::try_from(v).unwrap_or(i32::MAX);
        Self {
            min_x: origin.x,
            min_y: origin.y,
            max_x: origin.x.saturating_add(clamp(width)),
            max_y: origin.y.saturating_add(clamp(height)),
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    pub fn width(&self) -> u32 {
        (i64::from(self.max_x) - i64::from(self.min_x)).max(0) as u32
    }

    pub fn height(&self) -> u32 {
        (i64::from(self.max_y) - i64::from(self.min_y)).max(0) as u32
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x < self.max_x && p.y >= self.min_y && p.y < self.max_y
    }
}

/// Read-only, randomly addressable 2D color samples.
///
/// Callers only ask for coordinates inside [`PixelGrid::bounds`].
pub trait PixelGrid {
    fn bounds(&self) -> GridBounds;

    fn color_at(&self, x: i32, y: i32) -> Rgba;
}

impl<G: PixelGrid + ?Sized> PixelGrid for &G {
    fn bounds(&self) -> GridBounds {
        (**self).bounds()
    }

    fn color_at(&self, x: i32, y: i32) -> Rgba {
        (**self).color_at(x, y)
    }
}

/// Owned row-major RGBA grid with an arbitrary origin.
#[derive(Clone, Debug)]
pub struct RgbaGrid {
    pub origin: Point,
    pub width: u32,
    pub height: u32,
    pub data: Vec<Rgba>, // row-major, len = w*h
}

impl RgbaGrid {
    /// A `width x height` grid at the origin filled with `fill`.
    pub fn filled(width: u32, height: u32, fill: Rgba) -> Self {
        Self {
            origin: Point::default(),
            width,
            height,
            data: vec![fill; width as usize * height as usize],
        }
    }

    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Overwrite the sample at grid coordinates `(x, y)`. Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: i32, y: i32, color: Rgba) {
        if let Some(idx) = self.index_of(x, y) {
            self.data[idx] = color;
        }
    }

    #[inline]
    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if !self.bounds().contains(Point::new(x, y)) {
            return None;
        }
        let lx = (x - self.origin.x) as usize;
        let ly = (y - self.origin.y) as usize;
        Some(ly * self.width as usize + lx)
    }
}

impl PixelGrid for RgbaGrid {
    fn bounds(&self) -> GridBounds {
        GridBounds::from_origin(self.origin, self.width, self.height)
    }

    fn color_at(&self, x: i32, y: i32) -> Rgba {
        self.index_of(x, y)
            .map(|idx| self.data[idx])
            .unwrap_or(Rgba::TRANSPARENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_track_origin_and_extent() {
        let b = GridBounds::from_origin(Point::new(-3, 7), 5, 2);
        assert_eq!(b.width(), 5);
        assert_eq!(b.height(), 2);
        assert_eq!(b.origin(), Point::new(-3, 7));
        assert!(b.contains(Point::new(-3, 7)));
        assert!(b.contains(Point::new(1, 8)));
        assert!(!b.contains(Point::new(2, 8)));
        assert!(!b.contains(Point::new(1, 9)));
    }

    #[test]
    fn far_edge_past_i32_max_is_clamped_or_rejected() {
        let origin = Point::new(i32::MAX - 2, -5);
        assert_eq!(GridBounds::checked_from_origin(origin, 8, 4), None);
        assert_eq!(GridBounds::checked_from_origin(Point::default(), u32::MAX, 1), None);

        let b = GridBounds::from_origin(origin, 8, 4);
        assert_eq!(b.max_x, i32::MAX);
        assert_eq!(b.width(), 2);
        assert_eq!(b.height(), 4);
        assert_eq!(
            GridBounds::checked_from_origin(origin, 2, 4),
            Some(GridBounds::from_origin(origin, 2, 4))
        );
    }

    #[test]
    fn zero_extent_is_empty() {
        assert!(GridBounds::from_origin(Point::default(), 0, 4).is_empty());
        assert!(GridBounds::from_origin(Point::default(), 4, 0).is_empty());
        assert!(!GridBounds::from_origin(Point::default(), 1, 1).is_empty());
    }

    #[test]
    fn grid_addresses_samples_in_its_own_coordinates() {
        let mut grid = RgbaGrid::filled(4, 3, Rgba::WHITE).with_origin(Point::new(10, 20));
        grid.set(12, 21, Rgba::BLACK);
        grid.set(0, 0, Rgba::BLACK);

        assert_eq!(grid.color_at(12, 21), Rgba::BLACK);
        assert_eq!(grid.color_at(10, 20), Rgba::WHITE);
        assert_eq!(grid.data.iter().filter(|&&c| c == Rgba::BLACK).count(), 1);
    }
}
