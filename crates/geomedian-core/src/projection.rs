//! Per-column and per-row foreground counts.

use serde::{Deserialize, Serialize};

use crate::{PixelGrid, Rgba};

/// Which way a grid is collapsed into a projection.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// One count per column, summed over rows (left to right).
    Horizontal,
    /// One count per row, summed over columns (top to bottom).
    Vertical,
}

/// Count, for every column (or row), the samples that differ from `reference`.
///
/// A sample differs if any of its four channels differs. The result has one
/// entry per column for [`Axis::Horizontal`] and one per row for
/// [`Axis::Vertical`], in increasing coordinate order.
pub fn projection<G: PixelGrid + ?Sized>(grid: &G, axis: Axis, reference: Rgba) -> Vec<u64> {
    let b = grid.bounds();
    match axis {
        Axis::Horizontal => (b.min_x..b.max_x)
            .map(|x| {
                (b.min_y..b.max_y)
                    .filter(|&y| grid.color_at(x, y) != reference)
                    .count() as u64
            })
            .collect(),
        Axis::Vertical => (b.min_y..b.max_y)
            .map(|y| {
                (b.min_x..b.max_x)
                    .filter(|&x| grid.color_at(x, y) != reference)
                    .count() as u64
            })
            .collect(),
    }
}

/// Both projections of one grid against one reference color.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Projections {
    pub horizontal: Vec<u64>,
    pub vertical: Vec<u64>,
}

impl Projections {
    pub fn compute<G: PixelGrid + ?Sized>(grid: &G, reference: Rgba) -> Self {
        Self {
            horizontal: projection(grid, Axis::Horizontal, reference),
            vertical: projection(grid, Axis::Vertical, reference),
        }
    }

    /// Total number of foreground samples.
    pub fn foreground_pixels(&self) -> u64 {
        self.horizontal.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Point, RgbaGrid};

    const BG: Rgba = Rgba::WHITE;
    const FG: Rgba = Rgba::BLACK;

    fn l_shape() -> RgbaGrid {
        // x . . .
        // x . . .
        // x x x .
        let mut g = RgbaGrid::filled(4, 3, BG);
        for y in 0..3 {
            g.set(0, y, FG);
        }
        g.set(1, 2, FG);
        g.set(2, 2, FG);
        g
    }

    #[test]
    fn counts_columns_and_rows_in_order() {
        let g = l_shape();
        assert_eq!(projection(&g, Axis::Horizontal, BG), vec![3, 1, 1, 0]);
        assert_eq!(projection(&g, Axis::Vertical, BG), vec![1, 1, 3]);
    }

    #[test]
    fn lengths_match_extent() {
        let g = RgbaGrid::filled(7, 2, BG);
        let p = Projections::compute(&g, BG);
        assert_eq!(p.horizontal.len(), 7);
        assert_eq!(p.vertical.len(), 2);
    }

    #[test]
    fn uniform_grid_projects_to_zeros() {
        let g = RgbaGrid::filled(5, 4, Rgba::new(12, 34, 56, 78));
        let p = Projections::compute(&g, Rgba::new(12, 34, 56, 78));
        assert!(p.horizontal.iter().all(|&c| c == 0));
        assert!(p.vertical.iter().all(|&c| c == 0));
        assert_eq!(p.foreground_pixels(), 0);
    }

    #[test]
    fn alpha_only_difference_counts_as_foreground() {
        let mut g = RgbaGrid::filled(2, 2, BG);
        g.set(1, 1, Rgba::new(255, 255, 255, 254));
        let p = Projections::compute(&g, BG);
        assert_eq!(p.horizontal, vec![0, 1]);
        assert_eq!(p.vertical, vec![0, 1]);
    }

    #[test]
    fn offset_origin_does_not_change_counts() {
        let base = l_shape();
        let moved = l_shape().with_origin(Point::new(-40, 17));
        assert_eq!(
            Projections::compute(&base, BG),
            Projections::compute(&moved, BG)
        );
    }

    #[test]
    fn recomputation_is_stable() {
        let g = l_shape();
        let first = Projections::compute(&g, BG);
        let second = Projections::compute(&g, BG);
        assert_eq!(first, second);
        assert_eq!(first.vertical, vec![1, 1, 3]);
        assert_eq!(first.foreground_pixels(), 5);
    }
}
