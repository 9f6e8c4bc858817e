//! Grid representation and utilities for Game of Life

use crate::error::{Error, Result};
use std::fmt;

/// The state of a single grid cell.
///
/// Kept as a proper enum rather than a bool so the ascii and binary codecs
/// can spell out the character and bit mapping as an explicit case table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    Alive,
    #[default]
    Dead,
}

impl Cell {
    /// The character this cell renders as in ascii output: `#` or space.
    pub const fn as_char(self) -> char {
        match self {
            Cell::Alive => '#',
            Cell::Dead => ' ',
        }
    }

    /// Parse an ascii cell character. Only `#` and space are valid.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '#' => Some(Cell::Alive),
            ' ' => Some(Cell::Dead),
            _ => None,
        }
    }

    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }
}

/// A 2d grid of cells stored row-major in a flat vector.
///
/// All coordinate access is bounds checked; an out of range coordinate is an
/// error, never a clamp or a wrap. Crop, rotate, and merge copy cell values
/// into fresh storage and never alias their source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    pub(crate) cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with every cell dead.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Create a new square grid with every cell dead.
    pub fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Convert 2d coordinates to the 1d index of the flat storage.
    #[inline]
    pub(crate) fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<()> {
        if x < self.width && y < self.height {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Get the cell value at a coordinate.
    pub fn get(&self, x: usize, y: usize) -> Result<Cell> {
        self.cell(x, y).copied()
    }

    /// Overwrite the cell value at a coordinate.
    pub fn set(&mut self, x: usize, y: usize, value: Cell) -> Result<()> {
        *self.cell_mut(x, y)? = value;
        Ok(())
    }

    /// Get a read-only reference to the cell at a coordinate.
    pub fn cell(&self, x: usize, y: usize) -> Result<&Cell> {
        self.check_bounds(x, y)?;
        Ok(&self.cells[self.index(x, y)])
    }

    /// Get a mutable reference to the cell at a coordinate.
    ///
    /// The reference points into the grid's own storage, so repeated access
    /// through it does not re-derive the flat offset.
    pub fn cell_mut(&mut self, x: usize, y: usize) -> Result<&mut Cell> {
        self.check_bounds(x, y)?;
        let index = self.index(x, y);
        Ok(&mut self.cells[index])
    }

    /// Count how many cells in the grid are alive.
    pub fn alive_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Count how many cells in the grid are dead.
    pub fn dead_cells(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_alive()).count()
    }

    /// Total number of cells in the grid.
    pub fn total_cells(&self) -> usize {
        self.width * self.height
    }

    /// Resize the grid in place, preserving the overlapping top-left region.
    ///
    /// Rows are adjusted first, then columns. New cells are dead; trailing
    /// rows and columns are discarded when shrinking.
    pub fn resize(&mut self, new_width: usize, new_height: usize) {
        // Rows first: the row-major layout lets whole rows be truncated or
        // appended without touching the surviving content.
        if new_height < self.height {
            self.cells.truncate(new_height * self.width);
        } else {
            self.cells.resize(new_height * self.width, Cell::Dead);
        }
        self.height = new_height;

        // Then columns: every row is re-laid-out at the new width.
        if new_width != self.width {
            let mut cells = vec![Cell::Dead; new_width * self.height];
            let keep = self.width.min(new_width);
            for y in 0..self.height {
                for x in 0..keep {
                    cells[y * new_width + x] = self.cells[y * self.width + x];
                }
            }
            self.cells = cells;
            self.width = new_width;
        }
    }

    /// Resize the grid to a new square size.
    pub fn resize_square(&mut self, size: usize) {
        self.resize(size, size);
    }

    /// Extract a copy of the rectangle `[x0, x1) x [y0, y1)` as a new grid.
    pub fn crop(&self, x0: usize, y0: usize, x1: usize, y1: usize) -> Result<Grid> {
        if x1 > self.width || y1 > self.height {
            return Err(Error::OutOfBounds {
                x: x1,
                y: y1,
                width: self.width,
                height: self.height,
            });
        }
        if x0 > x1 || y0 > y1 {
            return Err(Error::InvalidRange { x0, y0, x1, y1 });
        }

        let mut cropped = Grid::new(x1 - x0, y1 - y0);
        for y in y0..y1 {
            for x in x0..x1 {
                let index = cropped.index(x - x0, y - y0);
                cropped.cells[index] = self.cells[self.index(x, y)];
            }
        }
        Ok(cropped)
    }

    /// Overlay `other` onto this grid with its top-left corner at `(x0, y0)`.
    ///
    /// With `alive_only` set, only alive cells of `other` are written and dead
    /// cells leave the destination untouched; otherwise every covered cell is
    /// overwritten with the exact value from `other`.
    pub fn merge(&mut self, other: &Grid, x0: usize, y0: usize, alive_only: bool) -> Result<()> {
        // The anchor must itself be a valid coordinate, even for a zero-sized
        // overlay.
        if x0 >= self.width || y0 >= self.height {
            return Err(Error::OutOfBounds {
                x: x0,
                y: y0,
                width: self.width,
                height: self.height,
            });
        }
        if x0 + other.width > self.width || y0 + other.height > self.height {
            return Err(Error::OutOfBounds {
                x: x0 + other.width.saturating_sub(1),
                y: y0 + other.height.saturating_sub(1),
                width: self.width,
                height: self.height,
            });
        }

        for y in 0..other.height {
            for x in 0..other.width {
                let value = other.cells[other.index(x, y)];
                if alive_only && !value.is_alive() {
                    continue;
                }
                let index = self.index(x0 + x, y0 + y);
                self.cells[index] = value;
            }
        }
        Ok(())
    }

    /// Return a copy of the grid rotated clockwise by `rotation` quarter
    /// turns.
    ///
    /// Any integer is accepted and normalized to 0..=3 turns first, so the
    /// cost is one pass over the cells regardless of the sign or magnitude of
    /// `rotation`. One and three turns swap the width and height.
    pub fn rotate(&self, rotation: i32) -> Grid {
        let turns = rotation.rem_euclid(4);
        let (width, height) = match turns {
            1 | 3 => (self.height, self.width),
            _ => (self.width, self.height),
        };

        let mut rotated = Grid::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let (src_x, src_y) = match turns {
                    1 => (y, self.height - 1 - x),
                    2 => (self.width - 1 - x, self.height - 1 - y),
                    3 => (self.width - 1 - y, x),
                    _ => (x, y),
                };
                let index = rotated.index(x, y);
                rotated.cells[index] = self.cells[self.index(src_x, src_y)];
            }
        }
        rotated
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = format!("+{}+", "-".repeat(self.width));
        writeln!(f, "{border}")?;
        for y in 0..self.height {
            write!(f, "|")?;
            for x in 0..self.width {
                write!(f, "{}", self.cells[self.index(x, y)].as_char())?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "{border}")
    }
}
