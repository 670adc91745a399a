//! JSON documents holding grids and input/output task pairs
//!
//! A grid is persisted as its nested list of colours. A task document groups
//! training and test pairs in the same list format.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::io::error::{GridError, Result};
use crate::spatial::grid::Grid;

/// One input grid with its expected output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPair {
    /// Grid given to a program
    pub input: Grid,
    /// Expected result, absent for unsolved test pairs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Grid>,
}

impl GridPair {
    /// Test whether input and output share dimensions
    ///
    /// Pairs without an output report `true`.
    pub fn same_dimensions(&self) -> bool {
        self.output
            .as_ref()
            .is_none_or(|output| output.dimensions() == self.input.dimensions())
    }
}

/// Training and test pairs of one puzzle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Worked examples
    #[serde(default)]
    pub train: Vec<GridPair>,
    /// Pairs to solve
    #[serde(default)]
    pub test: Vec<GridPair>,
}

impl Task {
    /// Training pairs followed by test pairs
    pub fn pairs(&self) -> impl Iterator<Item = &GridPair> {
        self.train.iter().chain(&self.test)
    }
}

fn read_document<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).map_err(|source| GridError::FileSystem {
        path: path.to_path_buf(),
        operation: "read",
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| GridError::Serialization {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a grid from a JSON nested list
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be read, or `Serialization` if it
/// is not a rectangular list of palette colours
pub fn read_grid_file(path: &Path) -> Result<Grid> {
    read_document(path)
}

/// Load a task document
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be read, or `Serialization` if the
/// document is malformed
pub fn read_task_file(path: &Path) -> Result<Task> {
    read_document(path)
}

/// Write any serializable document as JSON
///
/// # Errors
///
/// Returns `Serialization` if encoding fails, or `FileSystem` if the file
/// cannot be written
pub fn write_document<T: Serialize + ?Sized>(path: &Path, document: &T) -> Result<()> {
    let text = serde_json::to_string(document).map_err(|source| GridError::Serialization {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, text).map_err(|source| GridError::FileSystem {
        path: path.to_path_buf(),
        operation: "write",
        source,
    })
}

/// Write a grid as a JSON nested list
///
/// # Errors
///
/// Returns `Serialization` if encoding fails, or `FileSystem` if the file
/// cannot be written
pub fn write_grid_file(path: &Path, grid: &Grid) -> Result<()> {
    write_document(path, grid)
}
