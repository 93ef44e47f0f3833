//! The toroidal grid state.

use std::fmt;

use crate::error::WorldError;

/// One Game of Life simulation instance: a `width * height` boolean grid
/// and the number of generations applied to it.
///
/// Cells are stored row-major (`y` outer, `x` inner) to match tabular
/// rendering. Strict accessors ([`set_cell`](World::set_cell),
/// [`cell`](World::cell)) reject coordinates outside the grid; only
/// [`wrapped`](World::wrapped) applies toroidal wraparound.
///
/// A `World` has exactly one owner. Once handed to a generation stream
/// it is moved into the producer and only comes back when the stream
/// stops.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct World {
    width: u32,
    height: u32,
    cells: Vec<bool>,
    generation: u64,
}

impl World {
    /// Largest accepted dimension: coordinates must fit in `i32`.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create an all-dead grid at generation 0.
    ///
    /// Returns `Err(WorldError::InvalidDimension)` if either dimension is
    /// zero, exceeds [`MAX_DIM`](Self::MAX_DIM), or the cell count does not
    /// fit in memory addressing.
    pub fn new(width: u32, height: u32) -> Result<Self, WorldError> {
        let invalid = WorldError::InvalidDimension {
            width: u64::from(width),
            height: u64::from(height),
        };
        if width == 0 || height == 0 || width > Self::MAX_DIM || height > Self::MAX_DIM {
            return Err(invalid);
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or(invalid)?;
        Ok(Self {
            width,
            height,
            cells: vec![false; len],
            generation: 0,
        })
    }

    /// Build a generation-0 grid from a row-major matrix (`rows[y][x]`).
    ///
    /// The first row fixes the width; every other row must match it.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, WorldError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let (w, h) = match (u32::try_from(width), u32::try_from(height)) {
            (Ok(w), Ok(h)) => (w, h),
            _ => {
                return Err(WorldError::InvalidDimension {
                    width: width as u64,
                    height: height as u64,
                })
            }
        };
        let mut world = Self::new(w, h)?;
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(WorldError::ShapeMismatch {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            world.cells[y * width..(y + 1) * width].copy_from_slice(&row);
        }
        Ok(world)
    }

    /// Grid width (number of columns).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height (number of rows).
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of steps applied since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Set the cell at strict coordinates `(x, y)`.
    pub fn set_cell(&mut self, x: i64, y: i64, alive: bool) -> Result<(), WorldError> {
        let idx = self.index(x, y)?;
        self.cells[idx] = alive;
        Ok(())
    }

    /// Flip the cell at strict coordinates `(x, y)` and return its new state.
    pub fn toggle_cell(&mut self, x: i64, y: i64) -> Result<bool, WorldError> {
        let idx = self.index(x, y)?;
        self.cells[idx] = !self.cells[idx];
        Ok(self.cells[idx])
    }

    /// Read the cell at strict coordinates `(x, y)`, `None` if out of range.
    pub fn cell(&self, x: i64, y: i64) -> Option<bool> {
        self.index(x, y).ok().map(|idx| self.cells[idx])
    }

    /// Read the cell at arbitrary coordinates with toroidal wraparound.
    ///
    /// Each axis is reduced modulo its length and negative remainders are
    /// shifted up by one length, so opposite edges are adjacent.
    pub fn wrapped(&self, x: i64, y: i64) -> bool {
        let x = wrap_axis(x, self.width);
        let y = wrap_axis(y, self.height);
        self.cells[y * self.width as usize + x]
    }

    /// Number of alive cells.
    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Kill every cell. The generation counter is left untouched.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Row-major view: one slice of `width` cells per row, top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[bool]> + '_ {
        self.cells.chunks_exact(self.width as usize)
    }

    /// Copy out the grid as a `rows[y][x]` matrix.
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.rows().map(<[bool]>::to_vec).collect()
    }

    /// Swap in a freshly computed cell buffer and advance the generation.
    ///
    /// The buffer must have been computed from this grid's dimensions.
    pub(crate) fn replace_cells(&mut self, cells: Vec<bool>) {
        debug_assert_eq!(cells.len(), self.cells.len());
        self.cells = cells;
        self.generation += 1;
    }

    /// A dead grid with the same dimensions and generation as `self`.
    pub(crate) fn blank_like(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            cells: vec![false; self.cells.len()],
            generation: self.generation,
        }
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    pub(crate) fn into_cells(self) -> Vec<bool> {
        self.cells
    }

    fn index(&self, x: i64, y: i64) -> Result<usize, WorldError> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return Err(WorldError::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y as usize * self.width as usize + x as usize)
    }
}

/// Reduce `val` onto `[0, len)` with periodic wraparound.
fn wrap_axis(val: i64, len: u32) -> usize {
    let n = i64::from(len);
    let mut r = val % n;
    if r < 0 {
        r += n;
    }
    r as usize
}

impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
