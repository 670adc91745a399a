//! Separator-line subdivision: detection, collapse to a subgrid, and expansion back
//!
//! A subdivided grid is tiled by full-length separator rows and columns of one
//! non-background colour. Collapsing maps each block between separators to a
//! single cell; expanding paints each subgrid cell as a block and restores the
//! separators between blocks.

use std::collections::BTreeSet;

use ndarray::Array2;

use crate::io::configuration::BACKGROUND;
use crate::io::error::{GridError, Result, invalid_parameter};
use crate::spatial::cell::{Color, validate_color};
use crate::spatial::grid::Grid;

/// Separator layout of a validly subdivided grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subdivision {
    /// Colour shared by all separator lines
    pub line_color: Color,
    /// Indices of full-width separator rows, ascending
    pub horizontal_lines: Vec<usize>,
    /// Indices of full-height separator columns, ascending
    pub vertical_lines: Vec<usize>,
}

// Single non-background colour filling the whole line
fn uniform_line_color(line: ndarray::ArrayView1<'_, Color>) -> Option<Color> {
    let first = *line.iter().next()?;
    (first != BACKGROUND && line.iter().all(|&c| c == first)).then_some(first)
}

// Indices of lines consisting entirely of `color`
fn lines_of_color<'a>(
    lines: impl IntoIterator<Item = ndarray::ArrayView1<'a, Color>>,
    color: Color,
) -> Vec<usize> {
    lines
        .into_iter()
        .enumerate()
        .filter(|(_, line)| line.iter().all(|&c| c == color))
        .map(|(index, _)| index)
        .collect()
}

// Half-open index ranges strictly between consecutive separators, treating the
// space before the first and after the last index as separators when absent.
// Adjacent separators leave no band between them.
fn bands(lines: &[usize], len: usize) -> Vec<std::ops::Range<usize>> {
    let mut bands = Vec::new();
    let mut start = 0;
    for &line in lines {
        if line > start {
            bands.push(start..line);
        }
        start = line + 1;
    }
    if len > start {
        bands.push(start..len);
    }
    bands
}

impl Grid {
    /// Detect separator lines subdividing the grid
    ///
    /// The grid is validly subdivided when at least two full-width rows and at
    /// least two full-height columns are each uniformly one non-background
    /// colour, and the row colour equals the column colour. The colour of the
    /// last qualifying line on each axis is the one compared.
    ///
    /// # Errors
    ///
    /// Returns `InconsistentGridlines` when both axes have enough lines but
    /// their colours differ
    pub fn detect_subdivision(&self) -> Result<Option<Subdivision>> {
        let mut horizontal_lines = Vec::new();
        let mut horizontal_color = None;
        for (row, line) in self.array().rows().into_iter().enumerate() {
            if let Some(color) = uniform_line_color(line) {
                horizontal_lines.push(row);
                horizontal_color = Some(color);
            }
        }

        let mut vertical_lines = Vec::new();
        let mut vertical_color = None;
        for (col, line) in self.array().columns().into_iter().enumerate() {
            if let Some(color) = uniform_line_color(line) {
                vertical_lines.push(col);
                vertical_color = Some(color);
            }
        }

        if horizontal_lines.len() < 2 || vertical_lines.len() < 2 {
            return Ok(None);
        }

        match (horizontal_color, vertical_color) {
            (Some(horizontal), Some(vertical)) if horizontal == vertical => Ok(Some(Subdivision {
                line_color: horizontal,
                horizontal_lines,
                vertical_lines,
            })),
            (Some(horizontal), Some(vertical)) => Err(GridError::InconsistentGridlines {
                horizontal,
                vertical,
            }),
            _ => Ok(None),
        }
    }

    /// Collapse a subdivided grid to one cell per block
    ///
    /// Separators are the full lines of the detected line colour; the outer
    /// borders count as separators when they are not lines themselves. Each
    /// block strictly between consecutive separators must hold one colour.
    ///
    /// # Errors
    ///
    /// Returns `StructureNotFound` if the grid is not validly subdivided,
    /// `InconsistentGridlines` from detection, or `MultiColorBlock` naming the
    /// first block holding more than one colour
    pub fn collapse_subdivision(&self) -> Result<Self> {
        let subdivision = self
            .detect_subdivision()?
            .ok_or(GridError::StructureNotFound {
                structure: "valid subdivision",
            })?;
        let line_color = subdivision.line_color;

        let row_bands = bands(
            &lines_of_color(self.array().rows(), line_color),
            self.rows(),
        );
        let col_bands = bands(
            &lines_of_color(self.array().columns(), line_color),
            self.cols(),
        );

        let mut collapsed = Array2::from_elem((row_bands.len(), col_bands.len()), BACKGROUND);
        for (block_row, rows) in row_bands.iter().enumerate() {
            for (block_col, cols) in col_bands.iter().enumerate() {
                let colors: BTreeSet<Color> = rows
                    .clone()
                    .flat_map(|row| {
                        cols.clone()
                            .filter_map(move |col| self.array().get((row, col)).copied())
                    })
                    .collect();

                let mut distinct = colors.iter().copied();
                match (distinct.next(), distinct.next()) {
                    (Some(color), None) => {
                        if let Some(slot) = collapsed.get_mut((block_row, block_col)) {
                            *slot = color;
                        }
                    }
                    _ => {
                        return Err(GridError::MultiColorBlock {
                            block_row,
                            block_col,
                            colors: colors.into_iter().collect(),
                        });
                    }
                }
            }
        }

        tracing::debug!(
            rows = row_bands.len(),
            cols = col_bands.len(),
            line_color,
            "collapsed subdivided grid"
        );
        Ok(Self::from_array(collapsed))
    }

    /// Expand a subgrid into an `original_rows` x `original_cols` subdivided grid
    ///
    /// Scale factors are `(original + 1) / subgrid` per axis. Each subgrid cell
    /// becomes a block of `scale - 1` rows and columns, separated by single
    /// lines of `line_color` (no line after the last block), with every line
    /// intersection painted in `line_color`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an empty subgrid or a line colour outside
    /// the palette, or `DimensionMismatch` when the scale factors do not
    /// reproduce the requested dimensions or would leave blocks empty
    pub fn expand_subdivision(
        &self,
        original_rows: usize,
        original_cols: usize,
        line_color: Color,
    ) -> Result<Self> {
        let line_color = validate_color(line_color)?;
        let (subgrid_rows, subgrid_cols) = self.dimensions();
        if subgrid_rows == 0 || subgrid_cols == 0 {
            return Err(invalid_parameter(
                "subgrid",
                &format!("{subgrid_rows}x{subgrid_cols}"),
                &"cannot expand an empty subgrid",
            ));
        }

        let row_scale = (original_rows + 1) / subgrid_rows;
        let col_scale = (original_cols + 1) / subgrid_cols;
        if row_scale < 2
            || col_scale < 2
            || subgrid_rows * row_scale - 1 != original_rows
            || subgrid_cols * col_scale - 1 != original_cols
        {
            return Err(GridError::DimensionMismatch {
                requested_rows: original_rows,
                requested_cols: original_cols,
                subgrid_rows,
                subgrid_cols,
            });
        }

        let source = self.array();
        let expanded = Array2::from_shape_fn((original_rows, original_cols), |(row, col)| {
            let on_row_line = row % row_scale == row_scale - 1;
            let on_col_line = col % col_scale == col_scale - 1;
            if on_row_line || on_col_line {
                line_color
            } else {
                source
                    .get((row / row_scale, col / col_scale))
                    .copied()
                    .unwrap_or(BACKGROUND)
            }
        });

        Ok(Self::from_array(expanded))
    }
}
