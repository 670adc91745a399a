//! Capability boundary for running grid programs on list-format input
//!
//! A caller hands over a nested list, a program turns the constructed grid
//! into an output grid, and the output goes back as a nested list. The only
//! in-tree program is a [`Pipeline`] of built-in operations; no caller code is
//! evaluated.

use std::fmt;
use std::str::FromStr;

use crate::analysis::halves::get_non_empty_half;
use crate::io::error::{GridError, Result, invalid_parameter};
use crate::spatial::cell::Color;
use crate::spatial::grid::Grid;
use crate::spatial::transform::{
    flip_horizontal, flip_vertical, layer, rotate_clockwise, rotate_counterclockwise, transpose,
};

/// Anything that maps an input grid to an output grid
pub trait GridProgram {
    /// Produce the output grid for `input`
    ///
    /// # Errors
    ///
    /// Returns whatever error the program's operations raise
    fn run(&self, input: Grid) -> Result<Grid>;
}

impl<F> GridProgram for F
where
    F: Fn(Grid) -> Result<Grid>,
{
    fn run(&self, input: Grid) -> Result<Grid> {
        self(input)
    }
}

/// Construct a grid from `data`, run `program`, and return the output as a list
///
/// # Errors
///
/// Returns `InvalidSourceData` for a malformed list, or the program's error
pub fn execute<P: GridProgram + ?Sized>(program: &P, data: &[Vec<Color>]) -> Result<Vec<Vec<Color>>> {
    let input = Grid::from_list(data)?;
    let output = program.run(input)?;
    Ok(output.to_list())
}

/// Built-in grid-to-grid step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Rotate 90 degrees clockwise
    RotateClockwise,
    /// Rotate 90 degrees counterclockwise
    RotateCounterclockwise,
    /// Mirror top to bottom
    FlipVertical,
    /// Mirror left to right
    FlipHorizontal,
    /// Swap rows and columns
    Transpose,
    /// Crop to the bounding box of non-background cells
    Crop,
    /// Collapse separator-line subdivision to one cell per block
    Collapse,
    /// Keep the half opposite an empty half
    NonEmptyHalf,
    /// Replace each cell by a square block of the given side
    Subdivide(usize),
    /// Layer the current grid over the pipeline's input
    LayerOverInput,
}

impl Operation {
    /// Apply the step; `input` is the grid the pipeline started from
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying grid operation
    pub fn apply(self, current: Grid, input: &Grid) -> Result<Grid> {
        match self {
            Self::RotateClockwise => Ok(rotate_clockwise(&current)),
            Self::RotateCounterclockwise => Ok(rotate_counterclockwise(&current)),
            Self::FlipVertical => Ok(flip_vertical(&current)),
            Self::FlipHorizontal => Ok(flip_horizontal(&current)),
            Self::Transpose => Ok(transpose(&current)),
            Self::Crop => Ok(current.crop_to_occupied()),
            Self::Collapse => current.collapse_subdivision(),
            Self::NonEmptyHalf => get_non_empty_half(&current),
            Self::Subdivide(factor) => {
                let mut grid = current;
                grid.subdivide(factor)?;
                Ok(grid)
            }
            Self::LayerOverInput => layer(input, &current),
        }
    }
}

impl FromStr for Operation {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        if let Some(factor) = s.strip_prefix("subdivide:") {
            let factor = factor.parse().map_err(|_malformed| {
                invalid_parameter("operation", &s, &"subdivide takes a positive factor, e.g. subdivide:2")
            })?;
            return Ok(Self::Subdivide(factor));
        }
        match s {
            "rotate-cw" => Ok(Self::RotateClockwise),
            "rotate-ccw" => Ok(Self::RotateCounterclockwise),
            "flip-vertical" => Ok(Self::FlipVertical),
            "flip-horizontal" => Ok(Self::FlipHorizontal),
            "transpose" => Ok(Self::Transpose),
            "crop" => Ok(Self::Crop),
            "collapse" => Ok(Self::Collapse),
            "non-empty-half" => Ok(Self::NonEmptyHalf),
            "layer" => Ok(Self::LayerOverInput),
            _ => Err(invalid_parameter(
                "operation",
                &s,
                &"expected rotate-cw, rotate-ccw, flip-vertical, flip-horizontal, transpose, \
                  crop, collapse, non-empty-half, layer or subdivide:N",
            )),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RotateClockwise => write!(f, "rotate-cw"),
            Self::RotateCounterclockwise => write!(f, "rotate-ccw"),
            Self::FlipVertical => write!(f, "flip-vertical"),
            Self::FlipHorizontal => write!(f, "flip-horizontal"),
            Self::Transpose => write!(f, "transpose"),
            Self::Crop => write!(f, "crop"),
            Self::Collapse => write!(f, "collapse"),
            Self::NonEmptyHalf => write!(f, "non-empty-half"),
            Self::Subdivide(factor) => write!(f, "subdivide:{factor}"),
            Self::LayerOverInput => write!(f, "layer"),
        }
    }
}

/// Ordered list of operations run as one program
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pipeline {
    operations: Vec<Operation>,
}

impl Pipeline {
    /// Create a pipeline from operations in application order
    pub const fn new(operations: Vec<Operation>) -> Self {
        Self { operations }
    }

    /// Operations in application order
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }
}

impl GridProgram for Pipeline {
    fn run(&self, input: Grid) -> Result<Grid> {
        let mut current = input.clone();
        for &operation in &self.operations {
            current = operation.apply(current, &input)?;
            tracing::debug!(
                %operation,
                rows = current.rows(),
                cols = current.cols(),
                "applied operation"
            );
        }
        Ok(current)
    }
}
