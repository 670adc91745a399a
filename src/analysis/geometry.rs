//! Distance, alignment and midpoint queries between entities

use crate::io::error::Result;
use crate::spatial::cell::{Cell, Position};
use crate::spatial::entity::Entity;

/// Closest cross pair of cells by Manhattan distance
///
/// Scans `e1` in order against `e2` in order; the first minimal pair wins.
/// Returns `None` if either entity is empty.
pub fn closest_pair(e1: &Entity, e2: &Entity) -> Option<(Cell, Cell)> {
    let mut best: Option<(u32, Cell, Cell)> = None;
    for &a in e1.cells() {
        for &b in e2.cells() {
            let distance = a.manhattan(&b);
            if best.is_none_or(|(shortest, _, _)| distance < shortest) {
                best = Some((distance, a, b));
            }
        }
    }
    best.map(|(_, a, b)| (a, b))
}

/// Minimum Manhattan distance over all cross pairs of cells
///
/// Returns `None` if either entity is empty.
pub fn entity_distance(e1: &Entity, e2: &Entity) -> Option<u32> {
    e1.cells()
        .iter()
        .flat_map(|a| e2.cells().iter().map(move |b| a.manhattan(b)))
        .min()
}

/// Test whether the bounding boxes overlap on the column axis or the row axis
///
/// This is a coarse "a straight segment could connect them" test, not an
/// adjacency test.
///
/// # Errors
///
/// Returns `EmptyEntity` if either entity has no cells
pub fn is_aligned(e1: &Entity, e2: &Entity) -> Result<bool> {
    let a = e1.bounds()?;
    let b = e2.bounds()?;
    let overlaps = |axis: usize| a.max[axis] >= b.min[axis] && a.min[axis] <= b.max[axis];
    Ok(overlaps(1) || overlaps(0))
}

/// Midpoint of the two bounding-box centres, truncated toward zero
///
/// # Errors
///
/// Returns `EmptyEntity` if either entity has no cells
pub fn entity_midpoint(e1: &Entity, e2: &Entity) -> Result<Position> {
    let a = e1.bounds()?.center();
    let b = e2.bounds()?.center();
    Ok([
        ((a[0] + b[0]) / 2.0) as i32,
        ((a[1] + b[1]) / 2.0) as i32,
    ])
}
