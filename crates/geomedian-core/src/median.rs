//! Median index selection and the per-axis median point.

use serde::{Deserialize, Serialize};

use crate::{GridBounds, PixelGrid, Point, Projections, Rgba};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Errors returned by the median estimator.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MedianError {
    #[error("grid has no samples (width={width}, height={height})")]
    EmptyGrid { width: u32, height: u32 },
    #[error("grid of {width}x{height} at origin ({x}, {y}) does not fit in i32 coordinates")]
    OriginOverflow {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
}

/// How the background (reference) color is chosen.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "rule")]
pub enum BackgroundRule {
    /// Sample at the grid's minimum corner `(min_x, min_y)`.
    #[default]
    Corner,
    /// A fixed color.
    Fixed { rgba: [u8; 4] },
}

impl BackgroundRule {
    /// Resolve the reference color for `grid`. The grid must be non-empty.
    pub fn reference<G: PixelGrid + ?Sized>(&self, grid: &G) -> Rgba {
        match *self {
            BackgroundRule::Corner => {
                let b = grid.bounds();
                grid.color_at(b.min_x, b.min_y)
            }
            BackgroundRule::Fixed { rgba } => Rgba(rgba),
        }
    }
}

/// Parameters for the median estimator.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MedianParams {
    pub background: BackgroundRule,
}

/// Full output of [`estimate_median`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MedianEstimate {
    /// Median point in the grid's coordinate space.
    pub point: Point,
    pub reference: Rgba,
    pub bounds: GridBounds,
    pub projections: Projections,
}

impl MedianEstimate {
    pub fn foreground_pixels(&self) -> u64 {
        self.projections.foreground_pixels()
    }
}

/// Index at which the running sum of `values` first reaches half the total.
///
/// Half is `total / 2` rounded down and the threshold is inclusive, so an
/// even split resolves toward the lower index and an all-zero sequence
/// yields `0`. Returns `None` only for an empty slice; the scan never walks
/// past the last element.
pub fn median_index(values: &[u64]) -> Option<usize> {
    let last = values.len().checked_sub(1)?;
    let half = values.iter().sum::<u64>() / 2;

    let mut acc = 0u64;
    for (idx, &v) in values.iter().enumerate() {
        acc += v;
        if acc >= half {
            return Some(idx);
        }
    }
    Some(last)
}

/// Run the full estimator: pick the reference, project both axes, select
/// both median indices and translate them into grid coordinates.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(grid, params), fields(bounds = ?grid.bounds()))
)]
pub fn estimate_median<G: PixelGrid + ?Sized>(
    grid: &G,
    params: &MedianParams,
) -> Result<MedianEstimate, MedianError> {
    let bounds = grid.bounds();
    if bounds.is_empty() {
        return Err(MedianError::EmptyGrid {
            width: bounds.width(),
            height: bounds.height(),
        });
    }

    let reference = params.background.reference(grid);
    let projections = Projections::compute(grid, reference);

    let empty = || MedianError::EmptyGrid {
        width: bounds.width(),
        height: bounds.height(),
    };
    let ix = median_index(&projections.horizontal).ok_or_else(empty)?;
    let iy = median_index(&projections.vertical).ok_or_else(empty)?;

    log::debug!(
        "median: reference={:?} foreground={} index=({}, {})",
        reference.channels(),
        projections.foreground_pixels(),
        ix,
        iy
    );

    Ok(MedianEstimate {
        point: bounds.origin().offset(ix as i32, iy as i32),
        reference,
        bounds,
        projections,
    })
}

/// Median point with explicit parameters.
pub fn median_point_with<G: PixelGrid + ?Sized>(
    grid: &G,
    params: &MedianParams,
) -> Result<Point, MedianError> {
    estimate_median(grid, params).map(|est| est.point)
}

/// Median point using the minimum-corner sample as background.
pub fn median_point<G: PixelGrid + ?Sized>(grid: &G) -> Result<Point, MedianError> {
    median_point_with(grid, &MedianParams::default())
}
