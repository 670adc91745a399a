//! Translation-invariant shape keys and congruence grouping

use std::collections::{BTreeSet, HashMap};

use crate::algorithm::components::{Connectivity, same_color_groups};
use crate::spatial::cell::Position;
use crate::spatial::entity::Entity;
use crate::spatial::grid::Grid;

/// Cell layout of an entity translated so its minimum row and column are zero
///
/// Two entities share a key exactly when one is a pure translation of the
/// other; rotations and reflections produce different keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeKey(BTreeSet<Position>);

impl ShapeKey {
    /// Normalised key of an entity; an empty entity has an empty key
    pub fn of(entity: &Entity) -> Self {
        let Ok(bounds) = entity.bounds() else {
            return Self(BTreeSet::new());
        };
        Self(
            entity
                .positions()
                .map(|[row, col]| [row - bounds.min[0], col - bounds.min[1]])
                .collect(),
        )
    }

    /// Normalised positions in sorted order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.0.iter().copied()
    }

    /// Number of distinct positions
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Test if the key holds no positions
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Entities sharing one shape key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeGroup {
    /// Shared normalised layout
    pub key: ShapeKey,
    /// Members in extraction order
    pub entities: Vec<Entity>,
}

/// Group multi-cell 8-connected same-colour entities by shape
///
/// Groups are ordered by the first appearance of their key in the row-major
/// extraction; single-cell entities are left out.
pub fn shape_groups(grid: &Grid) -> Vec<ShapeGroup> {
    let mut groups: Vec<ShapeGroup> = Vec::new();
    let mut slots: HashMap<ShapeKey, usize> = HashMap::new();

    for entity in same_color_groups(grid, Connectivity::Eight) {
        if entity.len() <= 1 {
            continue;
        }
        let key = ShapeKey::of(&entity);
        match slots.get(&key) {
            Some(&slot) => {
                if let Some(group) = groups.get_mut(slot) {
                    group.entities.push(entity);
                }
            }
            None => {
                slots.insert(key.clone(), groups.len());
                groups.push(ShapeGroup {
                    key,
                    entities: vec![entity],
                });
            }
        }
    }

    tracing::debug!(groups = groups.len(), "grouped entities by shape");
    groups
}

/// Entities congruent by translation to `target`
///
/// Uses the same 8-connected same-colour extraction as [`shape_groups`].
/// Single-cell entities are kept so that a one-cell target can match.
/// An empty target matches nothing.
pub fn entities_by_shape(grid: &Grid, target: &Entity) -> Vec<Entity> {
    if target.is_empty() {
        return Vec::new();
    }
    let key = ShapeKey::of(target);
    same_color_groups(grid, Connectivity::Eight)
        .into_iter()
        .filter(|entity| ShapeKey::of(entity) == key)
        .collect()
}
