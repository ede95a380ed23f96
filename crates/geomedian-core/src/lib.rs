//! Core types and the geographic-median algorithm.
//!
//! The geographic median of a mask image is the point whose x coordinate
//! splits the foreground mass into equal left/right halves and whose y
//! coordinate splits it into equal top/bottom halves. The two axes are
//! solved independently from per-column and per-row pixel counts.
//!
//! This crate is intentionally small. It does *not* depend on any concrete
//! image type: anything implementing [`PixelGrid`] can be measured.

mod color;
mod grid;
mod logger;
mod marker;
mod median;
mod projection;

pub use color::Rgba;
pub use grid::{GridBounds, PixelGrid, Point, RgbaGrid};
pub use marker::{CrossMarker, MarkerError, MarkerParams};
pub use median::{
    estimate_median, median_index, median_point, median_point_with, BackgroundRule,
    MedianError, MedianEstimate, MedianParams,
};
pub use projection::{projection, Axis, Projections};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::{init_with_level, verbosity_level};
