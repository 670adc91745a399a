//! Grid and entity data model
//!
//! This module contains the spatial model and its direct operations:
//! - Cells, entities and the dense colour grid
//! - Drawing, line and stitching operations
//! - Subdivision detection and reconstruction
//! - Pure grid transforms and fixed-shape primitives

/// Cell, colour and position vocabulary
pub mod cell;
/// Compositing entities and lines onto grids
pub mod drawing;
/// Entities, bounding boxes and hole analysis
pub mod entity;
/// Dense colour grid with structural edits
pub mod grid;
/// Fixed-shape entity builders
pub mod primitives;
/// Separator-line subdivision detection and round trip
pub mod subdivision;
/// Rotations, reflections, transpose and layering
pub mod transform;

pub use cell::{Cell, Color, Position};
pub use entity::{BoundingBox, Entity, Side};
pub use grid::{Grid, Selection, Split};
