//! Pure grid-to-grid transforms: rotations, reflections, transpose and layering

use ndarray::Array2;

use crate::io::configuration::BACKGROUND;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::cell::Color;
use crate::spatial::grid::Grid;

// Builds a grid of `dims` where each target cell reads `source_index(row, col)`
fn remap(grid: &Grid, dims: (usize, usize), source_index: impl Fn(usize, usize) -> (usize, usize)) -> Grid {
    let source = grid.array();
    Grid::from_array(Array2::from_shape_fn(dims, |(row, col)| {
        source
            .get(source_index(row, col))
            .copied()
            .unwrap_or(BACKGROUND)
    }))
}

/// Rotate 90 degrees clockwise; dimensions swap
pub fn rotate_clockwise(grid: &Grid) -> Grid {
    let (rows, cols) = grid.dimensions();
    remap(grid, (cols, rows), |row, col| (rows - 1 - col, row))
}

/// Rotate 90 degrees counterclockwise; dimensions swap
pub fn rotate_counterclockwise(grid: &Grid) -> Grid {
    let (rows, cols) = grid.dimensions();
    remap(grid, (cols, rows), |row, col| (col, cols - 1 - row))
}

/// Mirror top to bottom
pub fn flip_vertical(grid: &Grid) -> Grid {
    let (rows, cols) = grid.dimensions();
    remap(grid, (rows, cols), |row, col| (rows - 1 - row, col))
}

/// Mirror left to right
pub fn flip_horizontal(grid: &Grid) -> Grid {
    let (rows, cols) = grid.dimensions();
    remap(grid, (rows, cols), |row, col| (row, cols - 1 - col))
}

/// Swap rows and columns
pub fn transpose(grid: &Grid) -> Grid {
    let (rows, cols) = grid.dimensions();
    remap(grid, (cols, rows), |row, col| (col, row))
}

/// Layer `top` over `base`: top colours win unless they are background
///
/// # Errors
///
/// Returns `InvalidArgument` if the grids differ in dimensions
pub fn layer(base: &Grid, top: &Grid) -> Result<Grid> {
    if base.dimensions() != top.dimensions() {
        return Err(invalid_parameter(
            "top",
            &format!("{}x{}", top.rows(), top.cols()),
            &format!(
                "grids must have the same dimensions to layer them (base is {}x{})",
                base.rows(),
                base.cols()
            ),
        ));
    }

    let merged = ndarray::Zip::from(base.array())
        .and(top.array())
        .map_collect(|&under: &Color, &over: &Color| if over == BACKGROUND { under } else { over });
    Ok(Grid::from_array(merged))
}
