//! Grid and entity toolkit for small colour-grid puzzles
//!
//! Grids hold colours 0 to 9 (0 is background). On top of the data model the
//! crate offers connected-component and shape analysis, separator-line
//! subdivision round trips, geometric transforms, line drawing and a small
//! pipeline interface for running built-in programs over list-format grids.

#![forbid(unsafe_code)]

/// Flood-fill extraction, shape grouping and rectangle search
pub mod algorithm;
/// Distance, halves and colour statistics
pub mod analysis;
/// Errors, constants, documents and command-line processing
pub mod io;
/// Cells, entities, grids and direct grid operations
pub mod spatial;

pub use io::error::{GridError, Result};
