//! Splitting grids into halves at dividers or midpoints

use ndarray::{Axis, Slice};

use crate::io::error::{GridError, Result};
use crate::spatial::entity::Side;
use crate::spatial::grid::{Grid, Split};

/// Split at the first full non-background divider, dropping the divider
///
/// Returns top/bottom for a divider row and left/right for a divider column.
/// Either half may have zero rows or columns when the divider is on an edge.
///
/// # Errors
///
/// Returns `StructureNotFound` if no full non-background row or column exists
pub fn get_halves(grid: &Grid) -> Result<(Grid, Grid)> {
    let colors = grid.array();
    let halves = match grid.is_split() {
        Split::Horizontal(row) => (
            colors.slice_axis(Axis(0), Slice::from(..row)).to_owned(),
            colors.slice_axis(Axis(0), Slice::from(row + 1..)).to_owned(),
        ),
        Split::Vertical(col) => (
            colors.slice_axis(Axis(1), Slice::from(..col)).to_owned(),
            colors.slice_axis(Axis(1), Slice::from(col + 1..)).to_owned(),
        ),
        Split::None => {
            return Err(GridError::StructureNotFound {
                structure: "full non-background divider",
            });
        }
    };
    Ok((Grid::from_array(halves.0), Grid::from_array(halves.1)))
}

/// The half opposite the first empty half, checked top, bottom, left, right
///
/// Uses the midpoint convention of [`Grid::empty_half`]: an empty top half
/// yields the rows from `rows / 2` on, an empty bottom half the rows before it,
/// and likewise for columns.
///
/// # Errors
///
/// Returns `StructureNotFound` if no half is entirely background
pub fn get_non_empty_half(grid: &Grid) -> Result<Grid> {
    let colors = grid.array();
    let mid_row = grid.rows() / 2;
    let mid_col = grid.cols() / 2;

    let half = match grid.empty_half() {
        Some(Side::Top) => colors.slice_axis(Axis(0), Slice::from(mid_row..)),
        Some(Side::Bottom) => colors.slice_axis(Axis(0), Slice::from(..mid_row)),
        Some(Side::Left) => colors.slice_axis(Axis(1), Slice::from(mid_col..)),
        Some(Side::Right) => colors.slice_axis(Axis(1), Slice::from(..mid_col)),
        None => {
            return Err(GridError::StructureNotFound {
                structure: "empty half",
            });
        }
    };
    Ok(Grid::from_array(half.to_owned()))
}
