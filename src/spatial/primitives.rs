//! Fixed-shape 3x3 entity builders anchored at a top-left offset

use crate::io::configuration::PRIMITIVE_SIZE;
use crate::spatial::cell::{Color, Position};
use crate::spatial::entity::Entity;

/// Direction of a diagonal primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiagonalDirection {
    /// Top-left to bottom-right
    #[default]
    Descending,
    /// Bottom-left to top-right
    Ascending,
}

fn offset_cells(color: Color, origin: Position, local: impl IntoIterator<Item = Position>) -> Entity {
    Entity::from_positions(
        color,
        local
            .into_iter()
            .map(|[row, col]| [origin[0] + row, origin[1] + col]),
    )
}

/// Plus sign: centre row and centre column of a 3x3 box (5 cells)
pub fn plus_sign(color: Color, origin: Position) -> Entity {
    let mid = PRIMITIVE_SIZE / 2;
    let row_arm = (0..PRIMITIVE_SIZE).map(|col| [mid, col]);
    let col_arm = (0..PRIMITIVE_SIZE)
        .filter(|&row| row != mid)
        .map(|row| [row, mid]);
    offset_cells(color, origin, row_arm.chain(col_arm))
}

/// The four corners of a 3x3 box
pub fn corners(color: Color, origin: Position) -> Entity {
    let far = PRIMITIVE_SIZE - 1;
    offset_cells(color, origin, [[0, 0], [0, far], [far, 0], [far, far]])
}

/// Three-cell diagonal across a 3x3 box
pub fn diagonal(color: Color, direction: DiagonalDirection, origin: Position) -> Entity {
    let far = PRIMITIVE_SIZE - 1;
    offset_cells(
        color,
        origin,
        (0..PRIMITIVE_SIZE).map(|i| match direction {
            DiagonalDirection::Descending => [i, i],
            DiagonalDirection::Ascending => [far - i, i],
        }),
    )
}

/// Hollow 3x3 square: the border ring without its centre (8 cells)
pub fn hollow_square(color: Color, origin: Position) -> Entity {
    let mid = PRIMITIVE_SIZE / 2;
    offset_cells(
        color,
        origin,
        box_positions().filter(|&pos| pos != [mid, mid]),
    )
}

/// Solid 3x3 box (9 cells)
pub fn solid_box(color: Color, origin: Position) -> Entity {
    offset_cells(color, origin, box_positions())
}

fn box_positions() -> impl Iterator<Item = Position> {
    (0..PRIMITIVE_SIZE).flat_map(|row| (0..PRIMITIVE_SIZE).map(move |col| [row, col]))
}
