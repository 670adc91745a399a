//! Rectangle-corner and solid-square search

use std::collections::{BTreeMap, BTreeSet};

use crate::algorithm::bitset::VisitedSet;
use crate::spatial::cell::{Cell, Color, Position};
use crate::spatial::entity::Entity;
use crate::spatial::grid::Grid;

/// Test whether four positions are the corners of an axis-aligned rectangle
///
/// Requires four distinct positions spanning exactly two rows and two
/// columns.
pub fn forms_rectangle(positions: &[Position]) -> bool {
    let distinct: BTreeSet<Position> = positions.iter().copied().collect();
    if distinct.len() != 4 {
        return false;
    }
    let rows: BTreeSet<i32> = distinct.iter().map(|pos| pos[0]).collect();
    let cols: BTreeSet<i32> = distinct.iter().map(|pos| pos[1]).collect();
    rows.len() == 2 && cols.len() == 2
}

/// Every set of four same-colour non-background cells forming rectangle corners
///
/// Colours are visited in order of first appearance in a row-major scan. The
/// rectangles of one colour come out in the order a 4-combination enumeration
/// over its row-major cell list would produce them, and each rectangle lists
/// its corners row-major. Instead of enumerating combinations, columns are
/// grouped per row and every pair of rows intersects its column sets.
pub fn find_corner_rectangles(grid: &Grid) -> Vec<Entity> {
    let mut color_order: Vec<Color> = Vec::new();
    let mut rows_by_color: BTreeMap<Color, BTreeMap<i32, BTreeSet<i32>>> = BTreeMap::new();

    for cell in grid.cells().filter(|cell| !cell.is_background()) {
        let rows = rows_by_color.entry(cell.color).or_insert_with(|| {
            color_order.push(cell.color);
            BTreeMap::new()
        });
        rows.entry(cell.row()).or_default().insert(cell.col());
    }

    let mut rectangles = Vec::new();
    for color in color_order {
        let Some(rows) = rows_by_color.get(&color) else {
            continue;
        };

        // (top, left, right, bottom) sorts like the combination order
        let mut found: Vec<[i32; 4]> = Vec::new();
        let row_list: Vec<(&i32, &BTreeSet<i32>)> = rows.iter().collect();
        for (i, &(&top, top_cols)) in row_list.iter().enumerate() {
            for &(&bottom, bottom_cols) in row_list.iter().skip(i + 1) {
                let shared: Vec<i32> = top_cols.intersection(bottom_cols).copied().collect();
                for (j, &left) in shared.iter().enumerate() {
                    for &right in shared.iter().skip(j + 1) {
                        found.push([top, left, right, bottom]);
                    }
                }
            }
        }
        found.sort_unstable();

        rectangles.extend(found.into_iter().map(|[top, left, right, bottom]| {
            Entity::new(vec![
                Cell::new(color, top, left),
                Cell::new(color, top, right),
                Cell::new(color, bottom, left),
                Cell::new(color, bottom, right),
            ])
        }));
    }

    tracing::debug!(rectangles = rectangles.len(), "found corner rectangles");
    rectangles
}

/// Solid single-colour squares with side at least 2
///
/// From each non-background start cell (of `color`, when given) in row-major
/// order, squares grow from side 2 while they stay solid. A square is kept
/// only if none of its cells already belongs to a kept square.
pub fn find_squares(grid: &Grid, color: Option<Color>) -> Vec<Entity> {
    let (rows, cols) = grid.dimensions();
    let mut claimed = VisitedSet::new(rows, cols);
    let mut squares = Vec::new();

    for start in grid.cells() {
        if start.is_background() || color.is_some_and(|wanted| start.color != wanted) {
            continue;
        }
        let [row, col] = [start.row() as usize, start.col() as usize];

        let mut side = 2;
        while is_solid_square(grid, [row, col], side, start.color) {
            let indices: Vec<[usize; 2]> = (row..row + side)
                .flat_map(|r| (col..col + side).map(move |c| [r, c]))
                .collect();
            if indices.iter().all(|&index| !claimed.contains(index)) {
                for &index in &indices {
                    claimed.insert(index);
                }
                squares.push(Entity::new(
                    indices
                        .iter()
                        .map(|&[r, c]| Cell::new(start.color, r as i32, c as i32))
                        .collect(),
                ));
            }
            side += 1;
        }
    }

    squares
}

fn is_solid_square(grid: &Grid, origin: [usize; 2], side: usize, color: Color) -> bool {
    (origin[0]..origin[0] + side).all(|row| {
        (origin[1]..origin[1] + side).all(|col| grid.color(row, col).ok() == Some(color))
    })
}
