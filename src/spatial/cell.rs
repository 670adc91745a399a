//! Single coloured points and the colour/position vocabulary shared by every module

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::io::configuration::{BACKGROUND, MAX_COLOR};
use crate::io::error::{Result, invalid_parameter};

/// Cell colour tag (0-9, 0 = background)
pub type Color = u8;

/// Cell position as `[row, col]`
///
/// Signed so that entities may be translated beyond the grid they came from.
pub type Position = [i32; 2];

/// A single coloured point with a grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Colour of the cell
    pub color: Color,
    /// Position as `[row, col]`
    pub position: Position,
}

impl Cell {
    /// Create a cell at `[row, col]`
    pub const fn new(color: Color, row: i32, col: i32) -> Self {
        Self {
            color,
            position: [row, col],
        }
    }

    /// Row coordinate
    pub const fn row(&self) -> i32 {
        self.position[0]
    }

    /// Column coordinate
    pub const fn col(&self) -> i32 {
        self.position[1]
    }

    /// Whether the cell carries the background colour
    pub const fn is_background(&self) -> bool {
        self.color == BACKGROUND
    }

    /// Manhattan distance between two cells
    pub const fn manhattan(&self, other: &Self) -> u32 {
        self.position[0].abs_diff(other.position[0]) + self.position[1].abs_diff(other.position[1])
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cell(color={}, position=({}, {}))",
            self.color, self.position[0], self.position[1]
        )
    }
}

/// Validate that a colour lies in the 0-9 palette
///
/// # Errors
///
/// Returns `InvalidArgument` if the colour exceeds the palette maximum
pub fn validate_color(color: Color) -> Result<Color> {
    if color > MAX_COLOR {
        return Err(invalid_parameter(
            "color",
            &color,
            &format!("colours must lie in 0..={MAX_COLOR}"),
        ));
    }
    Ok(color)
}
