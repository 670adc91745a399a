//! Entities: owned collections of cells treated as one logical shape
//!
//! An entity is a snapshot. It never aliases grid storage; write it back with
//! `Grid::draw_entity`, or use a `Selection` when the grid itself must be
//! recoloured in place.

use std::collections::HashSet;
use std::str::FromStr;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::io::configuration::BACKGROUND;
use crate::io::error::{GridError, Result, invalid_parameter};
use crate::spatial::cell::{Cell, Color, Position, validate_color};

/// Axis-aligned inclusive bounding box in `[row, col]` coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Minimum coordinates (inclusive)
    pub min: Position,
    /// Maximum coordinates (inclusive)
    pub max: Position,
}

impl BoundingBox {
    /// Check if a position is within the bounds
    pub const fn contains(&self, pos: Position) -> bool {
        pos[0] >= self.min[0]
            && pos[0] <= self.max[0]
            && pos[1] >= self.min[1]
            && pos[1] <= self.max[1]
    }

    /// Number of rows covered
    pub const fn height(&self) -> usize {
        (self.max[0] - self.min[0] + 1) as usize
    }

    /// Number of columns covered
    pub const fn width(&self) -> usize {
        (self.max[1] - self.min[1] + 1) as usize
    }

    /// Centre of the box, possibly on a half coordinate
    pub fn center(&self) -> [f64; 2] {
        [
            f64::from(self.min[0] + self.max[0]) / 2.0,
            f64::from(self.min[1] + self.max[1]) / 2.0,
        ]
    }

    /// Local offset of a position inside the box
    const fn local(&self, pos: Position) -> [usize; 2] {
        [(pos[0] - self.min[0]) as usize, (pos[1] - self.min[1]) as usize]
    }
}

/// One side of a bounding box or grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Minimum row
    Top,
    /// Maximum row
    Bottom,
    /// Minimum column
    Left,
    /// Maximum column
    Right,
}

impl Side {
    /// All sides in priority order
    pub const ALL: [Self; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];

    /// Decode the numeric side convention (0 top, 1 bottom, 2 left, 3 right)
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for any other value
    pub fn from_index(index: i64) -> Result<Self> {
        match index {
            0 => Ok(Self::Top),
            1 => Ok(Self::Bottom),
            2 => Ok(Self::Left),
            3 => Ok(Self::Right),
            _ => Err(invalid_parameter(
                "side",
                &index,
                &"use 0 for top, 1 for bottom, 2 for left or 3 for right",
            )),
        }
    }

    /// Numeric side convention (0 top, 1 bottom, 2 left, 3 right)
    pub const fn index(self) -> u8 {
        match self {
            Self::Top => 0,
            Self::Bottom => 1,
            Self::Left => 2,
            Self::Right => 3,
        }
    }
}

impl FromStr for Side {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "top" | "up" => Ok(Self::Top),
            "bottom" | "down" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(invalid_parameter(
                "side",
                &s,
                &"expected top, bottom, left or right",
            )),
        }
    }
}

/// Qualities whose orientation can be queried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quality {
    /// Empty positions inside the bounding box
    Hole,
}

impl FromStr for Quality {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "hole" => Ok(Self::Hole),
            _ => Err(invalid_parameter(
                "quality",
                &s,
                &"only the 'hole' quality has an orientation",
            )),
        }
    }
}

/// Collection of cells treated as one logical shape
///
/// Cell order is creation order and carries no meaning beyond stable iteration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Entity {
    cells: Vec<Cell>,
    #[serde(skip)]
    hole: Option<Box<Entity>>,
}

impl Entity {
    /// Create an entity from cells
    pub const fn new(cells: Vec<Cell>) -> Self {
        Self { cells, hole: None }
    }

    /// Create a single-colour entity from positions
    pub fn from_positions(color: Color, positions: impl IntoIterator<Item = Position>) -> Self {
        Self::new(
            positions
                .into_iter()
                .map(|[row, col]| Cell::new(color, row, col))
                .collect(),
        )
    }

    /// Cells in creation order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Consume the entity and return its cells
    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }

    /// Append a cell, dropping any cached hole
    pub fn push(&mut self, cell: Cell) {
        self.hole = None;
        self.cells.push(cell);
    }

    /// Number of cells
    pub const fn len(&self) -> usize {
        self.cells.len()
    }

    /// Test if the entity holds no cells
    pub const fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over cell positions
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().map(|cell| cell.position)
    }

    /// Test whether any cell sits at `pos`
    pub fn contains_position(&self, pos: Position) -> bool {
        self.cells.iter().any(|cell| cell.position == pos)
    }

    /// Bounding box over all cells
    ///
    /// # Errors
    ///
    /// Returns `EmptyEntity` if there are no cells
    pub fn bounds(&self) -> Result<BoundingBox> {
        let mut cells = self.cells.iter();
        let first = cells.next().ok_or(GridError::EmptyEntity {
            operation: "bounds",
        })?;

        let mut bounds = BoundingBox {
            min: first.position,
            max: first.position,
        };
        for cell in cells {
            let [row, col] = cell.position;
            bounds.min = [bounds.min[0].min(row), bounds.min[1].min(col)];
            bounds.max = [bounds.max[0].max(row), bounds.max[1].max(col)];
        }
        Ok(bounds)
    }

    /// Extent as `(max_row - min_row, max_col - min_col)`
    ///
    /// # Errors
    ///
    /// Returns `EmptyEntity` if there are no cells
    pub fn dimensions(&self) -> Result<(i32, i32)> {
        let bounds = self.bounds()?;
        Ok((bounds.max[0] - bounds.min[0], bounds.max[1] - bounds.min[1]))
    }

    /// Resample the entity's bounding region onto a `new_size` lattice
    ///
    /// `old_size` and `new_size` are `(rows, cols)` extents. Each target cell
    /// covers the source rectangle obtained from the per-axis float scale
    /// factor `old / new`, truncated to integers. A target cell takes the
    /// shared colour of the source cells in its rectangle, or background when
    /// the rectangle is empty or mixed. The result owns fresh cells positioned
    /// from `[0, 0]`.
    ///
    /// # Errors
    ///
    /// Returns `EmptyEntity` if there are no cells, or `InvalidArgument` if a
    /// target dimension is zero
    pub fn scale(&self, old_size: (usize, usize), new_size: (usize, usize)) -> Result<Self> {
        let bounds = self.bounds()?;
        let (new_rows, new_cols) = new_size;
        if new_rows == 0 || new_cols == 0 {
            return Err(invalid_parameter(
                "new_size",
                &format!("{new_rows}x{new_cols}"),
                &"target dimensions must be positive",
            ));
        }

        let scale_row = old_size.0 as f64 / new_rows as f64;
        let scale_col = old_size.1 as f64 / new_cols as f64;
        let origin = [f64::from(bounds.min[0]), f64::from(bounds.min[1])];

        let mut scaled = Vec::with_capacity(new_rows * new_cols);
        for new_row in 0..new_rows {
            let start_row = (origin[0] + new_row as f64 * scale_row) as i32;
            let end_row = (origin[0] + (new_row + 1) as f64 * scale_row) as i32;
            for new_col in 0..new_cols {
                let start_col = (origin[1] + new_col as f64 * scale_col) as i32;
                let end_col = (origin[1] + (new_col + 1) as f64 * scale_col) as i32;

                let mut block = self.cells.iter().filter(|cell| {
                    (start_row..end_row).contains(&cell.row())
                        && (start_col..end_col).contains(&cell.col())
                });
                let color = block
                    .next()
                    .filter(|first| block.all(|cell| cell.color == first.color))
                    .map_or(BACKGROUND, |first| first.color);

                scaled.push(Cell::new(color, new_row as i32, new_col as i32));
            }
        }

        Ok(Self::new(scaled))
    }

    /// Cells lying on the extreme row or column of `side`
    ///
    /// # Errors
    ///
    /// Returns `EmptyEntity` if there are no cells
    pub fn edge_slice(&self, side: Side) -> Result<Self> {
        let bounds = self.bounds()?;
        let on_edge = |cell: &&Cell| match side {
            Side::Top => cell.row() == bounds.min[0],
            Side::Bottom => cell.row() == bounds.max[0],
            Side::Left => cell.col() == bounds.min[1],
            Side::Right => cell.col() == bounds.max[1],
        };
        Ok(Self::new(self.cells.iter().filter(on_edge).copied().collect()))
    }

    /// Move every cell by `(d_row, d_col)`
    pub fn translate(&mut self, d_row: i32, d_col: i32) {
        self.hole = None;
        for cell in &mut self.cells {
            cell.position = [cell.position[0] + d_row, cell.position[1] + d_col];
        }
    }

    /// Recolour cells of `old_color` with `new_color`
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `new_color` is outside the palette
    pub fn fill_color(&mut self, new_color: Color, old_color: Color) -> Result<&mut Self> {
        let new_color = validate_color(new_color)?;
        for cell in &mut self.cells {
            if cell.color == old_color {
                cell.color = new_color;
            }
        }
        Ok(self)
    }

    /// Recolour every cell
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `new_color` is outside the palette
    pub fn set_color(&mut self, new_color: Color) -> Result<&mut Self> {
        let new_color = validate_color(new_color)?;
        for cell in &mut self.cells {
            cell.color = new_color;
        }
        Ok(self)
    }

    /// Shared colour of all non-background cells, if there is exactly one
    pub fn uniform_color(&self) -> Option<Color> {
        let colors: HashSet<Color> = self
            .cells
            .iter()
            .filter(|cell| !cell.is_background())
            .map(|cell| cell.color)
            .collect();

        if colors.len() == 1 {
            colors.into_iter().next()
        } else {
            None
        }
    }

    /// Occupancy raster over the bounding box, indexed by local `[row, col]`
    fn occupancy(&self, operation: &'static str) -> Result<(BoundingBox, Array2<bool>)> {
        let bounds = self
            .bounds()
            .map_err(|_empty| GridError::EmptyEntity { operation })?;
        let mut filled = Array2::from_elem((bounds.height(), bounds.width()), false);
        for cell in &self.cells {
            if let Some(slot) = filled.get_mut(bounds.local(cell.position)) {
                *slot = true;
            }
        }
        Ok((bounds, filled))
    }

    /// Test whether some border line of the bounding box is partly filled
    ///
    /// A side qualifies when its full-length border line holds at least one
    /// unoccupied position and at least one occupied position.
    ///
    /// # Errors
    ///
    /// Returns `EmptyEntity` if there are no cells
    pub fn has_hole_on_one_side(&self) -> Result<bool> {
        let (_, filled) = self.occupancy("hole detection")?;
        Ok(Side::ALL.iter().any(|&side| {
            let line = border_line(&filled, side);
            line.contains(&false) && line.contains(&true)
        }))
    }

    /// Unoccupied positions inside the bounding box as background cells
    ///
    /// The hole is also cached on `self`, see [`Entity::cached_hole`].
    ///
    /// # Errors
    ///
    /// Returns `EmptyEntity` if there are no cells
    pub fn extract_hole(&mut self) -> Result<Self> {
        let (bounds, filled) = self.occupancy("hole extraction")?;
        let hole_cells = filled
            .indexed_iter()
            .filter(|&(_, &occupied)| !occupied)
            .map(|((row, col), _)| {
                Cell::new(
                    BACKGROUND,
                    bounds.min[0] + row as i32,
                    bounds.min[1] + col as i32,
                )
            })
            .collect();

        let hole = Self::new(hole_cells);
        self.hole = Some(Box::new(hole.clone()));
        Ok(hole)
    }

    /// Hole computed by the last [`Entity::extract_hole`] call
    pub fn cached_hole(&self) -> Option<&Self> {
        self.hole.as_deref()
    }

    /// First border line (top, bottom, left, right) holding an empty position
    ///
    /// # Errors
    ///
    /// Returns `EmptyEntity` if there are no cells
    pub fn orientation(&self, quality: Quality) -> Result<Option<Side>> {
        match quality {
            Quality::Hole => {
                let (_, filled) = self.occupancy("hole orientation")?;
                Ok(Side::ALL
                    .into_iter()
                    .find(|&side| border_line(&filled, side).contains(&false)))
            }
        }
    }

    /// Orientation lookup by quality name
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for any quality other than `"hole"`, or
    /// `EmptyEntity` if there are no cells
    pub fn orientation_by_name(&self, quality: &str) -> Result<Option<Side>> {
        self.orientation(quality.parse()?)
    }
}

// Equality ignores the cached hole
impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Eq for Entity {}

fn border_line(filled: &Array2<bool>, side: Side) -> Vec<bool> {
    let (rows, cols) = filled.dim();
    let line = match side {
        Side::Top => filled.row(0),
        Side::Bottom => filled.row(rows - 1),
        Side::Left => filled.column(0),
        Side::Right => filled.column(cols - 1),
    };
    line.to_vec()
}

/// Union of several entities, de-duplicated by position
///
/// The first occurrence of a position wins and creation order is preserved.
pub fn combine_entities(entities: &[Entity]) -> Entity {
    let mut seen = HashSet::new();
    let cells = entities
        .iter()
        .flat_map(Entity::cells)
        .filter(|cell| seen.insert(cell.position))
        .copied()
        .collect();
    Entity::new(cells)
}
