//! Cross marker geometry.

use serde::{Deserialize, Serialize};

use crate::{GridBounds, Point, Rgba};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkerError {
    #[error("marker size divisor must be at least 1")]
    ZeroDivisor,
}

/// Cross marker appearance.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerParams {
    /// Arm length is the grid extent divided by this value, per axis.
    pub size_divisor: u32,
    pub color: Rgba,
}

impl Default for MarkerParams {
    fn default() -> Self {
        Self {
            size_divisor: 16,
            color: Rgba::BLACK,
        }
    }
}

impl MarkerParams {
    pub fn validate(&self) -> Result<(), MarkerError> {
        if self.size_divisor == 0 {
            return Err(MarkerError::ZeroDivisor);
        }
        Ok(())
    }
}

/// A `+` shaped marker clipped to a grid.
///
/// The horizontal stroke covers `[center.x - half_width, center.x + half_width)`
/// on row `center.y`; the vertical stroke covers
/// `[center.y - half_height, center.y + half_height)` on column `center.x`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CrossMarker {
    pub center: Point,
    pub half_width: i32,
    pub half_height: i32,
    pub clip: GridBounds,
}

impl CrossMarker {
    /// Marker sized as a fraction of `bounds` and centered on `center`.
    pub fn for_grid(
        bounds: GridBounds,
        center: Point,
        params: &MarkerParams,
    ) -> Result<Self, MarkerError> {
        params.validate()?;
        let div = params.size_divisor;
        Ok(Self {
            center,
            half_width: (bounds.width() / div) as i32,
            half_height: (bounds.height() / div) as i32,
            clip: bounds,
        })
    }

    /// Every covered coordinate inside the clip rectangle, horizontal stroke first.
    ///
    /// The center appears in both strokes when both are non-empty.
    pub fn pixels(&self) -> impl Iterator<Item = Point> {
        let c = self.center;
        let clip = self.clip;
        let (hw, hh) = (self.half_width, self.half_height);
        let horizontal = (c.x.saturating_sub(hw)..c.x.saturating_add(hw))
            .map(move |x| Point::new(x, c.y));
        let vertical = (c.y.saturating_sub(hh)..c.y.saturating_add(hh))
            .map(move |y| Point::new(c.x, y));
        horizontal
            .chain(vertical)
            .filter(move |&p| clip.contains(p))
    }
}
