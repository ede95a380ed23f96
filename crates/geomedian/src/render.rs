//! Marker rendering.

use geomedian_core::{CrossMarker, Rgba};

use crate::image_grid::ImageGrid;

/// Copy the grid's image and paint `marker` onto the copy in `color`.
///
/// Marker points outside the image are skipped.
pub fn render_cross(
    grid: &ImageGrid<'_>,
    marker: &CrossMarker,
    color: Rgba,
) -> ::image::RgbaImage {
    let mut out = grid.image().clone();
    let paint = ::image::Rgba(color.channels());
    let mut painted = 0usize;
    for p in marker.pixels() {
        if let Some((x, y)) = grid.to_local(p) {
            out.put_pixel(x, y, paint);
            painted += 1;
        }
    }
    log::debug!(
        "cross at ({}, {}) arms=({}, {}) painted {} px",
        marker.center.x,
        marker.center.y,
        marker.half_width,
        marker.half_height,
        painted
    );
    out
}
