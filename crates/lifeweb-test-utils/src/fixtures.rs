//! Classic Game of Life patterns.
//!
//! Each pattern is a list of `(x, y)` offsets from its top-left corner.
//! Use [`place`] to stamp one onto a grid at an arbitrary origin; offsets
//! wrap across the torus so patterns may straddle edges.

use lifeweb_core::{World, WorldError};

/// A named set of alive-cell offsets.
#[derive(Clone, Copy, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i64, i64)],
    /// Generations until the pattern repeats its shape (1 for still lifes).
    pub period: u64,
}

/// 2x2 still life.
pub const BLOCK: Pattern = Pattern {
    name: "block",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
    period: 1,
};

/// Vertical period-2 oscillator; turns horizontal on odd generations.
pub const BLINKER: Pattern = Pattern {
    name: "blinker",
    cells: &[(1, 0), (1, 1), (1, 2)],
    period: 2,
};

/// South-east travelling spaceship, one cell diagonally per 4 generations.
pub const GLIDER: Pattern = Pattern {
    name: "glider",
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    period: 4,
};

/// Stamp `pattern` onto `world` with its top-left corner at `(x, y)`.
///
/// Coordinates are wrapped onto the grid before writing.
pub fn place(world: &mut World, pattern: &Pattern, x: i64, y: i64) -> Result<(), WorldError> {
    let w = i64::from(world.width());
    let h = i64::from(world.height());
    for &(dx, dy) in pattern.cells {
        world.set_cell((x + dx).rem_euclid(w), (y + dy).rem_euclid(h), true)?;
    }
    Ok(())
}

fn with_pattern(width: u32, height: u32, pattern: &Pattern, x: i64, y: i64) -> World {
    let mut world = World::new(width, height).expect("fixture dimensions must be valid");
    place(&mut world, pattern, x, y).expect("wrapped placement is always in range");
    world
}

/// A `width x height` grid holding a block at `(x, y)`.
pub fn block(width: u32, height: u32, x: i64, y: i64) -> World {
    with_pattern(width, height, &BLOCK, x, y)
}

/// A `width x height` grid holding a vertical blinker whose bounding box
/// starts at `(x, y)`.
pub fn blinker(width: u32, height: u32, x: i64, y: i64) -> World {
    with_pattern(width, height, &BLINKER, x, y)
}

/// A `width x height` grid holding a glider at `(x, y)`.
pub fn glider(width: u32, height: u32, x: i64, y: i64) -> World {
    with_pattern(width, height, &GLIDER, x, y)
}
