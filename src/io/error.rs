//! Error taxonomy for grid access, structural edits and subdivision analysis

use std::path::PathBuf;

use thiserror::Error;

use crate::spatial::cell::Color;

/// Main error type for all grid operations
#[derive(Debug, Error)]
pub enum GridError {
    /// Coordinate access outside the current grid dimensions
    #[error("Position ({row}, {col}) is out of bounds for a {rows}x{cols} grid")]
    OutOfBounds {
        /// Requested row
        row: i64,
        /// Requested column
        col: i64,
        /// Grid rows at the time of the access
        rows: usize,
        /// Grid columns at the time of the access
        cols: usize,
    },

    /// Argument validation failed
    ///
    /// Covers malformed direction vectors, unsupported line geometry,
    /// mismatched dimensions and subdivision factors below one.
    #[error("Invalid argument '{parameter}' = '{value}': {reason}")]
    InvalidArgument {
        /// Name of the invalid argument
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Horizontal and vertical separator lines use different colours
    #[error(
        "Inconsistent gridline colours: horizontal lines are {horizontal}, vertical lines are {vertical}"
    )]
    InconsistentGridlines {
        /// Colour of the last qualifying horizontal line
        horizontal: Color,
        /// Colour of the last qualifying vertical line
        vertical: Color,
    },

    /// A block between separators holds more than one colour
    #[error("Block at ({block_row}, {block_col}) contains multiple colours: {colors:?}")]
    MultiColorBlock {
        /// Block row in the collapsed grid
        block_row: usize,
        /// Block column in the collapsed grid
        block_col: usize,
        /// Distinct colours found inside the block, ascending
        colors: Vec<Color>,
    },

    /// Requested dimensions cannot be reproduced by integer block scaling
    #[error(
        "Original dimensions {requested_rows}x{requested_cols} do not match a {subgrid_rows}x{subgrid_cols} subgrid scaling"
    )]
    DimensionMismatch {
        /// Requested rows of the expanded grid
        requested_rows: usize,
        /// Requested columns of the expanded grid
        requested_cols: usize,
        /// Rows of the subgrid being expanded
        subgrid_rows: usize,
        /// Columns of the subgrid being expanded
        subgrid_cols: usize,
    },

    /// Bounds were requested for an entity without cells
    #[error("Entity has no cells (during {operation})")]
    EmptyEntity {
        /// Operation that needed at least one cell
        operation: &'static str,
    },

    /// A structural feature required by the operation is absent
    #[error("Grid has no {structure}")]
    StructureNotFound {
        /// Description of the missing structure
        structure: &'static str,
    },

    /// Source data doesn't describe a valid grid
    #[error("Invalid source data: {reason}")]
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// General file system operation failure
    #[error("File system error during {operation} on '{}': {source}", path.display())]
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// JSON document could not be parsed or produced
    #[error("Serialization error on '{}': {source}", path.display())]
    Serialization {
        /// Path of the document
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for grid results
pub type Result<T> = std::result::Result<T, GridError>;

/// Create an invalid argument error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GridError {
    GridError::InvalidArgument {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an out-of-bounds error for a signed position
pub const fn out_of_bounds(position: [i64; 2], dimensions: (usize, usize)) -> GridError {
    GridError::OutOfBounds {
        row: position[0],
        col: position[1],
        rows: dimensions.0,
        cols: dimensions.1,
    }
}
