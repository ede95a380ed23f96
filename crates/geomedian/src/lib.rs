//! Geographic median of a mask image.
//!
//! The geographic median splits the foreground of an image into equal
//! left/right halves and, independently, equal top/bottom halves. The
//! background is the color of the top-left pixel unless configured
//! otherwise. This crate provides:
//! - re-exports of the algorithm in `geomedian-core`
//! - (feature `image`) an adapter for `image::RgbaImage`, cross rendering,
//!   and a load -> measure -> mark -> save pipeline
//! - (feature `cli`) the `geomedian` binary
//!
//! ## Quickstart
//!
//! ```no_run
//! use geomedian::pipeline::{annotate, load_rgba, GeomedianParams};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let img = load_rgba("map.png")?;
//! let annotated = annotate(&img, &GeomedianParams::default())?;
//! println!("median at {:?}", annotated.report.point);
//! annotated.image.save("map_marked.png")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `geomedian::core`: grid trait, projections, median selection, marker geometry.
//! - `geomedian::image_grid` (feature `image`): `image::RgbaImage` as a pixel grid.
//! - `geomedian::render` (feature `image`): draw a cross marker onto a copy of an image.
//! - `geomedian::pipeline` (feature `image`): end-to-end helpers and the JSON report.

pub use geomedian_core as core;

pub use geomedian_core::{
    median_index, median_point, median_point_with, BackgroundRule, CrossMarker, MarkerParams,
    MedianParams, PixelGrid, Point, Rgba,
};

#[cfg(feature = "image")]
pub mod image_grid;
#[cfg(feature = "image")]
pub mod pipeline;
#[cfg(feature = "image")]
pub mod render;
