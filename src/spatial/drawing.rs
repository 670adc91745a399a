//! Compositing entities and lines onto a grid
//!
//! Cells that land outside the grid are skipped and logged rather than
//! aborting the draw. Every drawing call reports what was painted and what was
//! skipped.

use crate::analysis::geometry::closest_pair;
use crate::io::error::{GridError, Result, invalid_parameter};
use crate::spatial::cell::{Color, Position, validate_color};
use crate::spatial::entity::Entity;
use crate::spatial::grid::Grid;

/// Outcome of a drawing call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawReport {
    /// Number of cells painted
    pub drawn: usize,
    /// Positions that fell outside the grid, in drawing order
    pub skipped: Vec<Position>,
}

impl DrawReport {
    /// Test whether every requested cell was painted
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Unit step with components in {-1, 0, 1}, not both zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    d_row: i32,
    d_col: i32,
}

impl Direction {
    /// Validate a direction vector
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if a component is outside {-1, 0, 1} or both
    /// components are zero
    pub fn new(d_row: i32, d_col: i32) -> Result<Self> {
        let unit = -1..=1;
        if !unit.contains(&d_row) || !unit.contains(&d_col) {
            return Err(invalid_parameter(
                "direction",
                &format!("({d_row}, {d_col})"),
                &"direction values must be -1, 0, or 1",
            ));
        }
        if d_row == 0 && d_col == 0 {
            return Err(invalid_parameter(
                "direction",
                &"(0, 0)",
                &"direction must move at least one axis",
            ));
        }
        Ok(Self { d_row, d_col })
    }

    /// Row component
    pub const fn d_row(self) -> i32 {
        self.d_row
    }

    /// Column component
    pub const fn d_col(self) -> i32 {
        self.d_col
    }

    const fn step(self, pos: Position) -> Position {
        [pos[0] + self.d_row, pos[1] + self.d_col]
    }
}

/// Geometry of a single-colour line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    /// From `start`, stepping by `direction` until leaving the grid
    Ray {
        /// First painted position
        start: Position,
        /// Step between painted positions
        direction: Direction,
    },
    /// From `start` to `end` inclusive; horizontal, vertical or 45 degrees only
    Segment {
        /// First painted position
        start: Position,
        /// Last painted position
        end: Position,
    },
}

impl Grid {
    fn paint(&mut self, pos: Position, color: Color, report: &mut DrawReport) {
        if self.put(pos, color) {
            report.drawn += 1;
        } else {
            tracing::warn!(
                row = pos[0],
                col = pos[1],
                "cell is out of grid bounds and was skipped"
            );
            report.skipped.push(pos);
        }
    }

    /// Paste an entity's colours at its own coordinates
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if a cell colour is outside the palette
    pub fn draw_entity(&mut self, entity: &Entity) -> Result<DrawReport> {
        validate_entity_colors(entity)?;
        let mut report = DrawReport::default();
        for cell in entity.cells() {
            self.paint(cell.position, cell.color, &mut report);
        }
        Ok(report)
    }

    /// Paste an entity re-centred on `center`
    ///
    /// The top-left of the entity's bounding box lands at
    /// `center - extent / 2` on each axis. An empty entity draws nothing.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if a cell colour is outside the palette
    pub fn draw_entity_at(&mut self, entity: &Entity, center: Position) -> Result<DrawReport> {
        validate_entity_colors(entity)?;
        let mut report = DrawReport::default();
        let Ok(bounds) = entity.bounds() else {
            return Ok(report);
        };

        let start = [
            center[0] - bounds.height() as i32 / 2,
            center[1] - bounds.width() as i32 / 2,
        ];
        for cell in entity.cells() {
            let pos = [
                start[0] + cell.row() - bounds.min[0],
                start[1] + cell.col() - bounds.min[1],
            ];
            self.paint(pos, cell.color, &mut report);
        }
        Ok(report)
    }

    /// Draw a single-colour ray or segment
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a colour outside the palette or a segment
    /// that is neither horizontal, vertical nor exactly diagonal
    pub fn draw_line(&mut self, color: Color, line: Line) -> Result<DrawReport> {
        let color = validate_color(color)?;
        let mut report = DrawReport::default();

        match line {
            Line::Ray { start, direction } => {
                let mut pos = start;
                while self.contains(pos) {
                    self.paint(pos, color, &mut report);
                    pos = direction.step(pos);
                }
            }
            Line::Segment { start, end } => {
                let d_row = end[0] - start[0];
                let d_col = end[1] - start[1];
                if d_row != 0 && d_col != 0 && d_row.abs() != d_col.abs() {
                    return Err(invalid_parameter(
                        "line",
                        &format!("({}, {}) -> ({}, {})", start[0], start[1], end[0], end[1]),
                        &"only vertical, horizontal, or perfectly diagonal lines are supported",
                    ));
                }

                let step = [d_row.signum(), d_col.signum()];
                let length = d_row.abs().max(d_col.abs());
                let mut pos = start;
                for _ in 0..=length {
                    self.paint(pos, color, &mut report);
                    pos = [pos[0] + step[0], pos[1] + step[1]];
                }
            }
        }

        Ok(report)
    }

    /// Stamp an entity repeatedly, advancing it by `direction` after each stamp
    ///
    /// Stops as soon as any cell of the entity would leave the grid. The entity
    /// is translated in place and ends at the first position that did not fit.
    /// Returns the number of stamps drawn.
    ///
    /// # Errors
    ///
    /// Returns `EmptyEntity` for an entity without cells, or `InvalidArgument`
    /// if a cell colour is outside the palette
    pub fn stamp_entity_line(&mut self, entity: &mut Entity, direction: Direction) -> Result<usize> {
        if entity.is_empty() {
            return Err(GridError::EmptyEntity {
                operation: "entity line",
            });
        }
        validate_entity_colors(entity)?;

        let mut stamps = 0;
        while entity.positions().all(|pos| self.contains(pos)) {
            for cell in entity.cells() {
                self.put(cell.position, cell.color);
            }
            stamps += 1;
            entity.translate(direction.d_row, direction.d_col);
        }
        Ok(stamps)
    }

    /// Connect the closest pair of cells of two entities with a line
    ///
    /// The closest pair minimises Manhattan distance over the full cross
    /// product, first pair found winning ties. The path then steps each axis
    /// independently one unit toward the target per iteration, so unequal
    /// offsets produce a diagonal run followed by a straight run.
    ///
    /// # Errors
    ///
    /// Returns `EmptyEntity` if either entity has no cells, or
    /// `InvalidArgument` for a colour outside the palette
    pub fn connect_with_line(&mut self, color: Color, e1: &Entity, e2: &Entity) -> Result<DrawReport> {
        let color = validate_color(color)?;
        let (from, to) = closest_pair(e1, e2).ok_or(GridError::EmptyEntity {
            operation: "connect with line",
        })?;

        let step = [
            (to.position[0] - from.position[0]).signum(),
            (to.position[1] - from.position[1]).signum(),
        ];
        let mut report = DrawReport::default();
        let mut pos = from.position;
        while pos != to.position {
            self.paint(pos, color, &mut report);
            if pos[0] != to.position[0] {
                pos[0] += step[0];
            }
            if pos[1] != to.position[1] {
                pos[1] += step[1];
            }
        }
        self.paint(to.position, color, &mut report);
        Ok(report)
    }
}

fn validate_entity_colors(entity: &Entity) -> Result<()> {
    for cell in entity.cells() {
        validate_color(cell.color)?;
    }
    Ok(())
}
