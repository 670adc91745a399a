//! Dense colour grid with bounds-checked access and structural edits
//!
//! Colours live in an `Array2` indexed by `[row, col]`. Cells are produced on
//! demand with their position taken from the storage index, so a cell's
//! position always matches its slot, including after row/column insertion and
//! deletion.

use std::fmt;

use ndarray::{Array2, Axis};
use serde::{Deserialize, Serialize};

use crate::io::configuration::BACKGROUND;
use crate::io::error::{GridError, Result, invalid_parameter, out_of_bounds};
use crate::spatial::cell::{Cell, Color, Position, validate_color};
use crate::spatial::entity::{BoundingBox, Entity, Side};

/// Dense rows x cols matrix of colours
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Color>>", into = "Vec<Vec<Color>>")]
pub struct Grid {
    colors: Array2<Color>,
}

/// Full-length non-background divider found by [`Grid::is_split`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Split {
    /// A complete row is non-background (first such row)
    Horizontal(usize),
    /// A complete column is non-background (first such column)
    Vertical(usize),
    /// No complete row or column is non-background
    None,
}

impl Split {
    /// Numeric convention: -1 horizontal, 1 vertical, 0 none
    pub const fn code(self) -> i8 {
        match self {
            Self::Horizontal(_) => -1,
            Self::Vertical(_) => 1,
            Self::None => 0,
        }
    }
}

impl Grid {
    /// Create a grid filled with background
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            colors: Array2::from_elem((rows, cols), BACKGROUND),
        }
    }

    /// Create a grid filled with a uniform colour
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the colour is outside the palette
    pub fn with_color(rows: usize, cols: usize, color: Color) -> Result<Self> {
        Ok(Self {
            colors: Array2::from_elem((rows, cols), validate_color(color)?),
        })
    }

    pub(crate) const fn from_array(colors: Array2<Color>) -> Self {
        Self { colors }
    }

    pub(crate) const fn array(&self) -> &Array2<Color> {
        &self.colors
    }

    /// Get the number of rows in the grid
    pub fn rows(&self) -> usize {
        self.colors.nrows()
    }

    /// Get the number of columns in the grid
    pub fn cols(&self) -> usize {
        self.colors.ncols()
    }

    /// Current dimensions as `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        self.colors.dim()
    }

    /// Build a grid from a rectangular nested list of colours
    ///
    /// An empty list produces a 0x0 grid.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSourceData` if rows differ in length or a colour is
    /// outside the palette
    pub fn from_list<R: AsRef<[Color]>>(data: &[R]) -> Result<Self> {
        let rows = data.len();
        let cols = data.first().map_or(0, |row| row.as_ref().len());

        let mut flat = Vec::with_capacity(rows * cols);
        for (index, row) in data.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(GridError::InvalidSourceData {
                    reason: format!(
                        "row {index} has {} columns, expected {cols}",
                        row.len()
                    ),
                });
            }
            for &color in row {
                validate_color(color).map_err(|_invalid| GridError::InvalidSourceData {
                    reason: format!("colour {color} in row {index} is outside the palette"),
                })?;
            }
            flat.extend_from_slice(row);
        }

        let colors =
            Array2::from_shape_vec((rows, cols), flat).map_err(|e| GridError::InvalidSourceData {
                reason: e.to_string(),
            })?;
        Ok(Self { colors })
    }

    /// Serialize to a nested list of colours, row by row
    pub fn to_list(&self) -> Vec<Vec<Color>> {
        self.colors.rows().into_iter().map(|row| row.to_vec()).collect()
    }

    /// Grid sized to an entity's bounding box with the entity drawn into it
    ///
    /// Gaps inside the box are background.
    ///
    /// # Errors
    ///
    /// Returns `EmptyEntity` if the entity has no cells, or `InvalidArgument`
    /// if a cell colour is outside the palette
    pub fn from_entity(entity: &Entity) -> Result<Self> {
        let bounds = entity.bounds()?;
        let mut grid = Self::new(bounds.height(), bounds.width());
        for cell in entity.cells() {
            let color = validate_color(cell.color)?;
            let local = [cell.row() - bounds.min[0], cell.col() - bounds.min[1]];
            grid.put(local, color);
        }
        Ok(grid)
    }

    /// Storage index of a signed position, if inside the grid
    pub fn index_of(&self, pos: Position) -> Option<[usize; 2]> {
        let row = usize::try_from(pos[0]).ok()?;
        let col = usize::try_from(pos[1]).ok()?;
        (row < self.rows() && col < self.cols()).then_some([row, col])
    }

    /// Test whether a signed position lies inside the grid
    pub fn contains(&self, pos: Position) -> bool {
        self.index_of(pos).is_some()
    }

    /// Colour at a signed position, if inside the grid
    pub fn color_at(&self, pos: Position) -> Option<Color> {
        self.index_of(pos)
            .and_then(|index| self.colors.get(index).copied())
    }

    // Writes inside the grid and reports whether the position was inside
    pub(crate) fn put(&mut self, pos: Position, color: Color) -> bool {
        match self.index_of(pos).and_then(|index| self.colors.get_mut(index)) {
            Some(slot) => {
                *slot = color;
                true
            }
            None => false,
        }
    }

    /// Cell at `(row, col)`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` outside `[0, rows) x [0, cols)`
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell> {
        let color = self.color(row, col)?;
        Ok(Cell::new(color, row as i32, col as i32))
    }

    /// Colour at `(row, col)`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` outside `[0, rows) x [0, cols)`
    pub fn color(&self, row: usize, col: usize) -> Result<Color> {
        self.colors
            .get((row, col))
            .copied()
            .ok_or_else(|| self.out_of_bounds_at(row, col))
    }

    /// Set the colour at `(row, col)`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` outside the grid or `InvalidArgument` for a colour
    /// outside the palette
    pub fn set_cell(&mut self, row: usize, col: usize, color: Color) -> Result<()> {
        let color = validate_color(color)?;
        let error = self.out_of_bounds_at(row, col);
        let slot = self.colors.get_mut((row, col)).ok_or(error)?;
        *slot = color;
        Ok(())
    }

    fn out_of_bounds_at(&self, row: usize, col: usize) -> GridError {
        out_of_bounds([row as i64, col as i64], self.dimensions())
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.colors
            .indexed_iter()
            .map(|((row, col), &color)| Cell::new(color, row as i32, col as i32))
    }

    /// Colours of one row
    pub fn row_colors(&self, row: usize) -> Option<Vec<Color>> {
        (row < self.rows()).then(|| self.colors.row(row).to_vec())
    }

    /// Colours of one column
    pub fn col_colors(&self, col: usize) -> Option<Vec<Color>> {
        (col < self.cols()).then(|| self.colors.column(col).to_vec())
    }

    /// Insert a row of `color` before `index` (`index == rows` appends)
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `index > rows`, or `InvalidArgument` for a
    /// colour outside the palette
    pub fn insert_row(&mut self, index: usize, color: Color) -> Result<()> {
        let color = validate_color(color)?;
        if index > self.rows() {
            return Err(out_of_bounds([index as i64, 0], self.dimensions()));
        }
        let old = &self.colors;
        let colors = Array2::from_shape_fn((self.rows() + 1, self.cols()), |(row, col)| {
            match row.cmp(&index) {
                std::cmp::Ordering::Less => old.get((row, col)).copied(),
                std::cmp::Ordering::Equal => Some(color),
                std::cmp::Ordering::Greater => old.get((row - 1, col)).copied(),
            }
            .unwrap_or(BACKGROUND)
        });
        self.colors = colors;
        Ok(())
    }

    /// Insert a column of `color` before `index` (`index == cols` appends)
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `index > cols`, or `InvalidArgument` for a
    /// colour outside the palette
    pub fn insert_col(&mut self, index: usize, color: Color) -> Result<()> {
        let color = validate_color(color)?;
        if index > self.cols() {
            return Err(out_of_bounds([0, index as i64], self.dimensions()));
        }
        let old = &self.colors;
        let colors = Array2::from_shape_fn((self.rows(), self.cols() + 1), |(row, col)| {
            match col.cmp(&index) {
                std::cmp::Ordering::Less => old.get((row, col)).copied(),
                std::cmp::Ordering::Equal => Some(color),
                std::cmp::Ordering::Greater => old.get((row, col - 1)).copied(),
            }
            .unwrap_or(BACKGROUND)
        });
        self.colors = colors;
        Ok(())
    }

    /// Delete the row at `index`; later rows move up by one
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `index >= rows`
    pub fn delete_row(&mut self, index: usize) -> Result<()> {
        if index >= self.rows() {
            return Err(out_of_bounds([index as i64, 0], self.dimensions()));
        }
        self.colors = self.without_index(Axis(0), index);
        Ok(())
    }

    /// Delete the column at `index`; later columns move left by one
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `index >= cols`
    pub fn delete_col(&mut self, index: usize) -> Result<()> {
        if index >= self.cols() {
            return Err(out_of_bounds([0, index as i64], self.dimensions()));
        }
        self.colors = self.without_index(Axis(1), index);
        Ok(())
    }

    fn without_index(&self, axis: Axis, index: usize) -> Array2<Color> {
        let kept: Vec<usize> = (0..self.colors.len_of(axis))
            .filter(|&i| i != index)
            .collect();
        self.colors.select(axis, &kept)
    }

    /// Reset every cell to background
    pub fn reset(&mut self) {
        self.colors.fill(BACKGROUND);
    }

    /// Select every cell of `color` in row-major order
    pub fn select_by_color(&self, color: Color) -> Selection {
        Selection::new(
            self.colors
                .indexed_iter()
                .filter(|&(_, &c)| c == color)
                .map(|((row, col), _)| [row, col])
                .collect(),
        )
    }

    /// Select the cells inside an inclusive rectangle
    ///
    /// Positions outside the grid are skipped with a warning.
    pub fn region(&self, bounds: BoundingBox) -> Selection {
        let mut indices = Vec::new();
        for row in bounds.min[0]..=bounds.max[0] {
            for col in bounds.min[1]..=bounds.max[1] {
                match self.index_of([row, col]) {
                    Some(index) => indices.push(index),
                    None => tracing::warn!(
                        row,
                        col,
                        "position is out of grid bounds and will be skipped"
                    ),
                }
            }
        }
        Selection::new(indices)
    }

    /// Snapshot of the cells inside an inclusive rectangle
    pub fn region_entity(&self, bounds: BoundingBox) -> Entity {
        self.region(bounds).entity(self)
    }

    /// Bounding box of all non-background cells
    pub fn occupied_bounds(&self) -> Option<BoundingBox> {
        let mut occupied = self
            .colors
            .indexed_iter()
            .filter(|&(_, &color)| color != BACKGROUND)
            .map(|((row, col), _)| [row as i32, col as i32]);

        let first = occupied.next()?;
        Some(occupied.fold(
            BoundingBox {
                min: first,
                max: first,
            },
            |bounds, [row, col]| BoundingBox {
                min: [bounds.min[0].min(row), bounds.min[1].min(col)],
                max: [bounds.max[0].max(row), bounds.max[1].max(col)],
            },
        ))
    }

    /// New grid holding just the bounding box of non-background cells
    ///
    /// Returns a 0x0 grid when nothing is occupied.
    pub fn crop_to_occupied(&self) -> Self {
        self.occupied_bounds()
            .map_or_else(|| Self::new(0, 0), |bounds| self.crop(bounds))
    }

    // Copies an in-range inclusive rectangle into a new grid
    pub(crate) fn crop(&self, bounds: BoundingBox) -> Self {
        let colors = Array2::from_shape_fn((bounds.height(), bounds.width()), |(row, col)| {
            self.color_at([bounds.min[0] + row as i32, bounds.min[1] + col as i32])
                .unwrap_or(BACKGROUND)
        });
        Self { colors }
    }

    /// Replace each cell by a `factor` x `factor` block of its colour
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `factor < 1` or the subdivided grid would
    /// be too large to address
    pub fn subdivide(&mut self, factor: usize) -> Result<()> {
        if factor < 1 {
            return Err(invalid_parameter(
                "factor",
                &factor,
                &"subdivision factor must be at least 1",
            ));
        }
        let too_large = || {
            invalid_parameter(
                "factor",
                &factor,
                &"subdivided grid size overflows the addressable range",
            )
        };
        let rows = self.rows().checked_mul(factor).ok_or_else(too_large)?;
        let cols = self.cols().checked_mul(factor).ok_or_else(too_large)?;
        rows.checked_mul(cols)
            .filter(|&cells| isize::try_from(cells).is_ok())
            .ok_or_else(too_large)?;

        let old = &self.colors;
        let colors = Array2::from_shape_fn(
            (rows, cols),
            |(row, col)| {
                old.get((row / factor, col / factor))
                    .copied()
                    .unwrap_or(BACKGROUND)
            },
        );
        self.colors = colors;
        Ok(())
    }

    /// Concatenate `other` onto `side` of this grid
    ///
    /// The non-concatenated dimension is the larger of the two inputs; gaps are
    /// background.
    pub fn stitch(&self, other: &Self, side: Side) -> Self {
        let (rows, cols) = self.dimensions();
        let (other_rows, other_cols) = other.dimensions();

        let (new_dims, self_offset, other_offset) = match side {
            Side::Top => (
                (rows + other_rows, cols.max(other_cols)),
                [other_rows, 0],
                [0, 0],
            ),
            Side::Bottom => (
                (rows + other_rows, cols.max(other_cols)),
                [0, 0],
                [rows, 0],
            ),
            Side::Left => (
                (rows.max(other_rows), cols + other_cols),
                [0, other_cols],
                [0, 0],
            ),
            Side::Right => (
                (rows.max(other_rows), cols + other_cols),
                [0, 0],
                [0, cols],
            ),
        };

        let mut stitched = Self::new(new_dims.0, new_dims.1);
        stitched.blit(self, self_offset);
        stitched.blit(other, other_offset);
        stitched
    }

    // Copies `source` with its origin at `offset`, clipping to this grid
    fn blit(&mut self, source: &Self, offset: [usize; 2]) {
        for ((row, col), &color) in source.colors.indexed_iter() {
            if let Some(slot) = self.colors.get_mut((row + offset[0], col + offset[1])) {
                *slot = color;
            }
        }
    }

    /// First full-length non-background divider, rows checked before columns
    pub fn is_split(&self) -> Split {
        let full = |line: ndarray::ArrayView1<'_, Color>| line.iter().all(|&c| c != BACKGROUND);

        if let Some(row) = self.colors.rows().into_iter().position(full) {
            return Split::Horizontal(row);
        }
        if let Some(col) = self.colors.columns().into_iter().position(full) {
            return Split::Vertical(col);
        }
        Split::None
    }

    /// First entirely-background half, checked top, bottom, left, right
    ///
    /// Halves split at the integer-divided midpoint; the second half takes the
    /// middle row/column of odd dimensions.
    pub fn empty_half(&self) -> Option<Side> {
        let mid_row = self.rows() / 2;
        let mid_col = self.cols() / 2;
        let is_empty = |row_range: std::ops::Range<usize>, col_range: std::ops::Range<usize>| {
            row_range.into_iter().all(|row| {
                col_range
                    .clone()
                    .all(|col| self.colors.get((row, col)).copied() == Some(BACKGROUND))
            })
        };

        let (rows, cols) = self.dimensions();
        Side::ALL.into_iter().find(|side| match side {
            Side::Top => is_empty(0..mid_row, 0..cols),
            Side::Bottom => is_empty(mid_row..rows, 0..cols),
            Side::Left => is_empty(0..rows, 0..mid_col),
            Side::Right => is_empty(0..rows, mid_col..cols),
        })
    }

    /// Test whether the top, bottom, left or right half is entirely background
    pub fn is_half_empty(&self) -> bool {
        self.empty_half().is_some()
    }
}

impl TryFrom<Vec<Vec<Color>>> for Grid {
    type Error = GridError;

    fn try_from(data: Vec<Vec<Color>>) -> Result<Self> {
        Self::from_list(&data)
    }
}

impl From<Grid> for Vec<Vec<Color>> {
    fn from(grid: Grid) -> Self {
        grid.to_list()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid({}x{}):", self.rows(), self.cols())?;
        for row in self.colors.rows() {
            let line: Vec<String> = row.iter().map(ToString::to_string).collect();
            write!(f, "\n{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Live view of grid cells by storage index
///
/// Unlike an [`Entity`], a selection recolours the grid it was taken from.
/// Indices refer to the grid's layout at selection time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    indices: Vec<[usize; 2]>,
}

impl Selection {
    /// Create a selection from storage indices
    pub const fn new(indices: Vec<[usize; 2]>) -> Self {
        Self { indices }
    }

    /// Selected storage indices in selection order
    pub fn indices(&self) -> &[[usize; 2]] {
        &self.indices
    }

    /// Number of selected cells
    pub const fn len(&self) -> usize {
        self.indices.len()
    }

    /// Test if nothing is selected
    pub const fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Snapshot the selected cells as an owned entity
    ///
    /// Indices no longer inside the grid are left out.
    pub fn entity(&self, grid: &Grid) -> Entity {
        Entity::new(
            self.indices
                .iter()
                .filter_map(|&[row, col]| grid.cell(row, col).ok())
                .collect(),
        )
    }

    /// Recolour every selected cell in `grid`
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a colour outside the palette, or
    /// `OutOfBounds` if the grid shrank since selection (no cell is changed)
    pub fn set_color(&self, grid: &mut Grid, color: Color) -> Result<()> {
        self.recolor(grid, color, |_| true)
    }

    /// Recolour selected cells currently holding `old_color`
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a colour outside the palette, or
    /// `OutOfBounds` if the grid shrank since selection (no cell is changed)
    pub fn fill_color(&self, grid: &mut Grid, new_color: Color, old_color: Color) -> Result<()> {
        self.recolor(grid, new_color, |current| current == old_color)
    }

    fn recolor(
        &self,
        grid: &mut Grid,
        color: Color,
        matches: impl Fn(Color) -> bool,
    ) -> Result<()> {
        let color = validate_color(color)?;
        if let Some(&[row, col]) = self
            .indices
            .iter()
            .find(|&&[row, col]| row >= grid.rows() || col >= grid.cols())
        {
            return Err(grid.out_of_bounds_at(row, col));
        }
        for &[row, col] in &self.indices {
            if let Some(slot) = grid.colors.get_mut((row, col)) {
                if matches(*slot) {
                    *slot = color;
                }
            }
        }
        Ok(())
    }
}
