//! Test utilities and pattern fixtures for Lifeweb development.
//!
//! Provides seeded grids for unit, integration and benchmark code:
//! the classic small patterns in [`fixtures`] and deterministic random
//! soups via [`random_soup`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use lifeweb_core::World;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub use fixtures::{blinker, block, glider, place, Pattern};

/// Collect the alive cells of `world` as `(x, y)` pairs, row by row.
pub fn alive_cells(world: &World) -> Vec<(i64, i64)> {
    let mut out = Vec::with_capacity(world.count_alive());
    for (y, row) in world.rows().enumerate() {
        for (x, &alive) in row.iter().enumerate() {
            if alive {
                out.push((x as i64, y as i64));
            }
        }
    }
    out
}

/// Build a grid with exactly the listed cells alive.
///
/// Panics if the dimensions are invalid or a cell is out of range.
pub fn world_with(width: u32, height: u32, alive: &[(i64, i64)]) -> World {
    let mut world = World::new(width, height).expect("fixture dimensions must be valid");
    for &(x, y) in alive {
        world
            .set_cell(x, y, true)
            .expect("fixture cell must be in range");
    }
    world
}

/// A deterministic random grid where each cell is alive with
/// probability `density` (clamped to `[0, 1]`).
///
/// The same `(width, height, seed, density)` always yields the same grid.
pub fn random_soup(width: u32, height: u32, seed: u64, density: f64) -> World {
    let mut world = World::new(width, height).expect("soup dimensions must be valid");
    let density = if density.is_nan() {
        0.0
    } else {
        density.clamp(0.0, 1.0)
    };
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for y in 0..i64::from(height) {
        for x in 0..i64::from(width) {
            let alive = rng.random_bool(density);
            world
                .set_cell(x, y, alive)
                .expect("soup cell is in range by construction");
        }
    }
    world
}
