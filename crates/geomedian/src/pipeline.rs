//! End-to-end helpers: load an image, find its geographic median, mark it
//! with a cross and save the result.

use std::fs;
use std::path::Path;

use geomedian_core::{
    estimate_median, CrossMarker, MarkerError, MarkerParams, MedianError, MedianParams, Point,
    Rgba,
};
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::image_grid::ImageGrid;
use crate::render::render_cross;

/// Errors produced by the pipeline helpers.
#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Image(#[from] ::image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid parameters JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Median(#[from] MedianError),

    #[error(transparent)]
    InvalidParams(#[from] MarkerError),
}

/// All tunables of the pipeline. Every field has a default, so an empty JSON
/// object is a valid configuration.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeomedianParams {
    pub median: MedianParams,
    pub marker: MarkerParams,
}

impl GeomedianParams {
    /// Parse parameters from a JSON document.
    pub fn from_json(raw: &str) -> Result<Self, PipelineError> {
        let params: Self = serde_json::from_str(raw)?;
        params.marker.validate()?;
        Ok(params)
    }

    /// Read parameters from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PipelineError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}

/// Summary of one run, suitable for JSON output.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MedianReport {
    pub point: Point,
    pub image_width: u32,
    pub image_height: u32,
    /// Background color the foreground was measured against.
    pub reference: Rgba,
    pub foreground_pixels: u64,
    /// Cross arm half-lengths `[horizontal, vertical]` in pixels.
    pub marker_arms: [i32; 2],
}

/// A marked image together with its report.
#[derive(Clone, Debug)]
pub struct Annotated {
    pub image: ::image::RgbaImage,
    pub report: MedianReport,
}

/// Decode any format supported by `image` into RGBA8.
///
/// The format is sniffed from the file contents, so the extension of `path`
/// may be missing or wrong.
#[cfg_attr(feature = "tracing", instrument(level = "info", skip(path)))]
pub fn load_rgba(path: impl AsRef<Path>) -> Result<::image::RgbaImage, PipelineError> {
    let path = path.as_ref();
    let img = ::image::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()?
        .to_rgba8();
    log::info!(
        "loaded {} ({}x{})",
        path.display(),
        img.width(),
        img.height()
    );
    Ok(img)
}

/// Find the geographic median of `img` and draw a cross on a copy of it.
#[cfg_attr(
    feature = "tracing",
    instrument(
        level = "info",
        skip(img, params),
        fields(width = img.width(), height = img.height())
    )
)]
pub fn annotate(
    img: &::image::RgbaImage,
    params: &GeomedianParams,
) -> Result<Annotated, PipelineError> {
    let grid = ImageGrid::new(img)?;
    let estimate = estimate_median(&grid, &params.median)?;
    let marker = CrossMarker::for_grid(estimate.bounds, estimate.point, &params.marker)?;
    let image = render_cross(&grid, &marker, params.marker.color);

    let report = MedianReport {
        point: estimate.point,
        image_width: img.width(),
        image_height: img.height(),
        reference: estimate.reference,
        foreground_pixels: estimate.foreground_pixels(),
        marker_arms: [marker.half_width, marker.half_height],
    };
    log::info!(
        "geographic median at ({}, {}) over {} foreground px",
        report.point.x,
        report.point.y,
        report.foreground_pixels
    );
    if report.foreground_pixels == 0 {
        log::warn!("image has no foreground; median defaults to the top-left corner");
    }

    Ok(Annotated { image, report })
}

/// Load `input`, annotate it and write the marked image to `output`.
///
/// The output format is chosen from the extension of `output`; PNG is written
/// when the extension is missing or not recognized.
pub fn run(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    params: &GeomedianParams,
) -> Result<MedianReport, PipelineError> {
    let img = load_rgba(input)?;
    let Annotated { image, report } = annotate(&img, params)?;
    let output = output.as_ref();
    let format = ::image::ImageFormat::from_path(output).unwrap_or(::image::ImageFormat::Png);
    image.save_with_format(output, format)?;
    log::info!("wrote {}", output.display());
    Ok(report)
}

/// Write `report` as pretty JSON.
pub fn write_report(report: &MedianReport, path: impl AsRef<Path>) -> Result<(), PipelineError> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    Ok(())
}
