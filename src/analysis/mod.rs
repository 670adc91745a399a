//! Queries over grids and entities that build on the spatial model

/// Distance, alignment and midpoint between entities
pub mod geometry;
/// Divider and empty-half splitting
pub mod halves;
/// Colour histograms and component counts
pub mod statistics;
