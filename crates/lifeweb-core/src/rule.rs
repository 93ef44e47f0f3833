//! Conway's B3/S23 rule over an 8-connected toroidal neighbourhood.
//!
//! [`next_generation`] is pure: it reads one grid and builds another.
//! [`step`] swaps the freshly built buffer into the grid wholesale, so a
//! cell is never evaluated against neighbours already advanced in the
//! same generation, and a reader never sees a half-updated grid.

use crate::world::World;

/// All 8 offsets as `(dx, dy)`: W, E, N, S, NW, NE, SW, SE.
const OFFSETS_8: [(i64, i64); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

/// Count the alive cells among the 8 toroidal neighbours of `(x, y)`.
///
/// `(x, y)` itself may lie anywhere; it is wrapped like its neighbours.
pub fn live_neighbours(world: &World, x: i64, y: i64) -> u8 {
    let x = x.rem_euclid(i64::from(world.width()));
    let y = y.rem_euclid(i64::from(world.height()));
    OFFSETS_8
        .iter()
        .filter(|&&(dx, dy)| world.wrapped(x + dx, y + dy))
        .count() as u8
}

/// The rule table: whether a cell is alive next generation.
pub fn next_cell_state(alive: bool, neighbours: u8) -> bool {
    match (alive, neighbours) {
        (true, 2) | (true, 3) => true, // survival
        (false, 3) => true,            // birth
        _ => false,                    // under/overpopulation, or stays dead
    }
}

/// Compute the next generation without touching `world`.
///
/// The result has the same dimensions and generation counter as the
/// input; only [`step`] advances the counter.
pub fn next_generation(world: &World) -> World {
    let mut next = world.blank_like();
    let width = world.width() as usize;
    for (i, cell) in next.cells_mut().iter_mut().enumerate() {
        let x = (i % width) as i64;
        let y = (i / width) as i64;
        *cell = next_cell_state(world.wrapped(x, y), live_neighbours(world, x, y));
    }
    next
}

/// Advance `world` by exactly one generation.
pub fn step(world: &mut World) {
    let next = next_generation(world);
    world.replace_cells(next.into_cells());
}

/// Advance `world` by `n` generations.
pub fn step_n(world: &mut World, n: u64) {
    for _ in 0..n {
        step(world);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn world_with(width: u32, height: u32, alive: &[(i64, i64)]) -> World {
        let mut w = World::new(width, height).unwrap();
        for &(x, y) in alive {
            w.set_cell(x, y, true).unwrap();
        }
        w
    }

    fn alive_cells(w: &World) -> Vec<(i64, i64)> {
        let mut out = Vec::new();
        for y in 0..i64::from(w.height()) {
            for x in 0..i64::from(w.width()) {
                if w.cell(x, y) == Some(true) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    // ── Rule table ──────────────────────────────────────────────

    #[test]
    fn rule_table_is_exhaustive() {
        for n in 0..=8u8 {
            assert_eq!(next_cell_state(true, n), n == 2 || n == 3, "alive, {n}");
            assert_eq!(next_cell_state(false, n), n == 3, "dead, {n}");
        }
    }

    // ── Neighbour counting ──────────────────────────────────────

    #[test]
    fn neighbours_wrap_around_corners() {
        let w = world_with(5, 5, &[(4, 4), (0, 4), (4, 0)]);
        assert_eq!(live_neighbours(&w, 0, 0), 3);
        assert_eq!(live_neighbours(&w, 2, 2), 0);
    }

    #[test]
    fn neighbours_exclude_self() {
        let w = world_with(3, 3, &[(1, 1)]);
        assert_eq!(live_neighbours(&w, 1, 1), 0);
        assert_eq!(live_neighbours(&w, 0, 0), 1);
    }

    #[test]
    fn single_cell_wrap_sees_itself_eight_times() {
        let w = world_with(1, 1, &[(0, 0)]);
        assert_eq!(live_neighbours(&w, 0, 0), 8);
    }

    // ── Stepping ────────────────────────────────────────────────

    #[test]
    fn lone_cell_dies() {
        let mut w = world_with(6, 6, &[(2, 3)]);
        step(&mut w);
        assert_eq!(w.count_alive(), 0);
        assert_eq!(w.generation(), 1);
    }

    #[test]
    fn block_is_still_life() {
        let start = world_with(6, 6, &[(2, 2), (3, 2), (2, 3), (3, 3)]);
        let mut w = start.clone();
        for g in 1..=10 {
            step(&mut w);
            assert_eq!(w.to_rows(), start.to_rows());
            assert_eq!(w.generation(), g);
        }
    }

    #[test]
    fn three_by_three_torus_fills_from_line() {
        // Every cell of a 3x3 torus neighbours all 8 others: the line
        // survives (2 neighbours each) and every dead cell sees 3.
        let mut w = world_with(3, 3, &[(1, 0), (1, 1), (1, 2)]);
        step(&mut w);
        assert_eq!(w.count_alive(), 9);
        step(&mut w);
        assert_eq!(w.count_alive(), 0);
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let vertical = world_with(5, 5, &[(1, 0), (1, 1), (1, 2)]);
        let mut w = vertical.clone();

        step(&mut w);
        assert_eq!(alive_cells(&w), vec![(0, 1), (1, 1), (2, 1)]);

        step(&mut w);
        assert_eq!(w.to_rows(), vertical.to_rows());
        assert_eq!(w.generation(), 2);
    }

    #[test]
    fn next_generation_leaves_input_untouched() {
        let w = world_with(4, 4, &[(1, 0), (1, 1), (1, 2)]);
        let before = w.clone();
        let next = next_generation(&w);
        assert_eq!(w, before);
        assert_eq!(next.generation(), w.generation());
        assert_ne!(next.to_rows(), w.to_rows());
    }

    #[test]
    fn glider_translates_diagonally_after_four_steps() {
        let mut w = world_with(8, 8, &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
        step_n(&mut w, 4);
        assert_eq!(
            alive_cells(&w),
            vec![(2, 1), (3, 2), (1, 3), (2, 3), (3, 3)]
        );
        assert_eq!(w.generation(), 4);
    }

    #[test]
    fn glider_returns_home_on_torus() {
        // A glider moves one cell diagonally per 4 generations, so on an
        // 8x8 torus it is back where it started after 32.
        let start = world_with(8, 8, &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
        let mut w = start.clone();
        step_n(&mut w, 32);
        assert_eq!(w.to_rows(), start.to_rows());
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn next_generation_is_deterministic(
            width in 1u32..10,
            height in 1u32..10,
            bits in proptest::collection::vec(any::<bool>(), 100),
        ) {
            let mut w = World::new(width, height).unwrap();
            for (i, cell) in w.cells_mut().iter_mut().enumerate() {
                *cell = bits[i % bits.len()];
            }
            let a = next_generation(&w);
            let b = next_generation(&w);
            prop_assert_eq!(&a, &b);
            prop_assert_eq!(a.width(), width);
            prop_assert_eq!(a.height(), height);
        }

        #[test]
        fn block_anywhere_is_still(
            width in 4u32..12,
            height in 4u32..12,
            x in 0i64..12,
            y in 0i64..12,
            steps in 1u64..6,
        ) {
            // Keep a one-cell dead margin on every side.
            let x = 1 + x % (i64::from(width) - 3);
            let y = 1 + y % (i64::from(height) - 3);
            let start = world_with(width, height, &[(x, y), (x + 1, y), (x, y + 1), (x + 1, y + 1)]);
            let mut w = start.clone();
            step_n(&mut w, steps);
            prop_assert_eq!(w.to_rows(), start.to_rows());
        }

        #[test]
        fn step_advances_generation_by_one(width in 1u32..8, height in 1u32..8, n in 0u64..8) {
            let mut w = World::new(width, height).unwrap();
            step_n(&mut w, n);
            prop_assert_eq!(w.generation(), n);
        }
    }
}
