//! Connected-component extraction over a grid
//!
//! Every extraction is one row-major scan sharing a single visited set. Each
//! unvisited cell accepted by the seed predicate starts an iterative
//! depth-first flood fill; the fill only enters neighbours accepted by the
//! join predicate, so each accepted cell is claimed by exactly one entity.

use crate::algorithm::bitset::VisitedSet;
use crate::io::configuration::{BACKGROUND, PALETTE_SIZE};
use crate::spatial::cell::{Cell, Color};
use crate::spatial::entity::Entity;
use crate::spatial::grid::Grid;

/// Neighbour relation used by a flood fill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    /// Orthogonal neighbours only
    Four,
    /// Orthogonal and diagonal neighbours
    Eight,
}

const ORTHOGONAL: [[i32; 2]; 4] = [[-1, 0], [1, 0], [0, -1], [0, 1]];
const SURROUNDING: [[i32; 2]; 8] = [
    [-1, 0],
    [1, 0],
    [0, -1],
    [0, 1],
    [-1, -1],
    [-1, 1],
    [1, -1],
    [1, 1],
];

impl Connectivity {
    /// Neighbour offsets as `[d_row, d_col]`
    pub const fn offsets(self) -> &'static [[i32; 2]] {
        match self {
            Self::Four => &ORTHOGONAL,
            Self::Eight => &SURROUNDING,
        }
    }
}

fn neighbours(
    grid: &Grid,
    cell: Cell,
    connectivity: Connectivity,
) -> impl Iterator<Item = Cell> + '_ {
    connectivity.offsets().iter().filter_map(move |offset| {
        let pos = [cell.row() + offset[0], cell.col() + offset[1]];
        grid.color_at(pos).map(|color| Cell {
            color,
            position: pos,
        })
    })
}

fn index(cell: Cell) -> [usize; 2] {
    [cell.row() as usize, cell.col() as usize]
}

/// Partition the cells accepted by `seed`/`joins` into connected entities
///
/// `seed` decides which unvisited cells start a component; `joins` decides,
/// given the seed cell, which cells the fill may enter (the seed itself must
/// satisfy it). Entities appear in row-major order of their seeds, cells in
/// depth-first visiting order.
pub fn extract_components(
    grid: &Grid,
    connectivity: Connectivity,
    seed: impl Fn(Cell) -> bool,
    joins: impl Fn(Cell, Cell) -> bool,
) -> Vec<Entity> {
    let mut visited = VisitedSet::new(grid.rows(), grid.cols());
    let mut entities = Vec::new();

    for start in grid.cells() {
        if visited.contains(index(start)) || !seed(start) {
            continue;
        }

        let mut component = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !joins(start, current) || !visited.insert(index(current)) {
                continue;
            }
            component.push(current);
            stack.extend(
                neighbours(grid, current, connectivity)
                    .filter(|&next| !visited.contains(index(next)) && joins(start, next)),
            );
        }

        if !component.is_empty() {
            entities.push(Entity::new(component));
        }
    }

    tracing::debug!(
        entities = entities.len(),
        visited = visited.count(),
        "extracted connected components"
    );
    entities
}

/// 4-connected components of exactly `color`
pub fn entities_by_color(grid: &Grid, color: Color) -> Vec<Entity> {
    extract_components(
        grid,
        Connectivity::Four,
        |cell| cell.color == color,
        |_, cell| cell.color == color,
    )
}

/// 4-connected components for every palette colour, indexed by colour
pub fn all_entities_by_color(grid: &Grid) -> Vec<Vec<Entity>> {
    (0..PALETTE_SIZE as Color)
        .map(|color| entities_by_color(grid, color))
        .collect()
}

/// 8-connected groups of non-background cells, colours mixed
pub fn isolated_groups(grid: &Grid) -> Vec<Entity> {
    extract_components(
        grid,
        Connectivity::Eight,
        |cell| !cell.is_background(),
        |_, cell| !cell.is_background(),
    )
}

/// Connected same-colour groups of non-background cells
pub fn same_color_groups(grid: &Grid, connectivity: Connectivity) -> Vec<Entity> {
    extract_components(
        grid,
        connectivity,
        |cell| !cell.is_background(),
        |seed, cell| cell.color == seed.color,
    )
}

/// Test whether all four orthogonal neighbours exist and have `color`
///
/// Cells on the grid edge are never surrounded.
pub fn is_surrounded(grid: &Grid, cell: Cell, color: Color) -> bool {
    ORTHOGONAL.iter().all(|offset| {
        grid.color_at([cell.row() + offset[0], cell.col() + offset[1]]) == Some(color)
    })
}

/// 4-connected regions of non-`color` cells that are each surrounded by `color`
///
/// The fill only grows through cells that are themselves surrounded, so a
/// region never touches the grid border.
pub fn surrounded_regions(grid: &Grid, color: Color) -> Vec<Entity> {
    let qualifies = |cell: Cell| cell.color != color && is_surrounded(grid, cell, color);
    extract_components(grid, Connectivity::Four, qualifies, |_, cell| qualifies(cell))
}

/// Non-background cells with no non-background cell among their 8 neighbours
///
/// Each isolated cell is returned as its own single-cell entity.
pub fn isolated_cells(grid: &Grid) -> Vec<Entity> {
    grid.cells()
        .filter(|&cell| {
            cell.color != BACKGROUND
                && neighbours(grid, cell, Connectivity::Eight).all(|n| n.is_background())
        })
        .map(|cell| Entity::new(vec![cell]))
        .collect()
}
