//! Colour statistics over whole grids

use crate::algorithm::components::entities_by_color;
use crate::io::configuration::{BACKGROUND, PALETTE_SIZE};
use crate::spatial::cell::Color;
use crate::spatial::grid::Grid;

/// Number of cells of each palette colour, indexed by colour
pub fn color_counts(grid: &Grid) -> [usize; PALETTE_SIZE] {
    let mut counts = [0; PALETTE_SIZE];
    for &color in grid.array() {
        if let Some(count) = counts.get_mut(usize::from(color)) {
            *count += 1;
        }
    }
    counts
}

/// Colour with the most 4-connected components
///
/// With `exclude_background` the background colour is not a candidate. Ties
/// go to the lowest colour.
pub fn most_common_color(grid: &Grid, exclude_background: bool) -> Color {
    let first = if exclude_background {
        BACKGROUND + 1
    } else {
        BACKGROUND
    };

    let mut best = (first, 0);
    for color in first..PALETTE_SIZE as Color {
        let components = entities_by_color(grid, color).len();
        if components > best.1 {
            best = (color, components);
        }
    }
    best.0
}

/// Blank grid with the same dimensions
pub fn silhouette(grid: &Grid) -> Grid {
    Grid::new(grid.rows(), grid.cols())
}
