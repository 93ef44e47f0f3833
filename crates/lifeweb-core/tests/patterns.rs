//! Integration test: classic patterns behave as documented on the torus.
//!
//! Covers the behaviours a client relies on when it seeds a grid: lone
//! cells die, still lifes stay put, oscillators return after their
//! period, and spaceships wrap around the edges.

use lifeweb_core::{next_generation, step, step_n, World, WorldError};
use lifeweb_test_utils::fixtures::{BLINKER, BLOCK, GLIDER};
use lifeweb_test_utils::{alive_cells, blinker, block, glider, place, random_soup, world_with};

#[test]
fn construction_rejects_every_zero_dimension() {
    for (w, h) in [(0, 0), (0, 1), (1, 0), (0, 50), (50, 0)] {
        assert!(
            matches!(World::new(w, h), Err(WorldError::InvalidDimension { .. })),
            "{w}x{h} should be rejected"
        );
    }
}

#[test]
fn lone_cell_dies_and_nothing_is_born() {
    let mut w = world_with(10, 10, &[(4, 7)]);
    step(&mut w);
    assert!(alive_cells(&w).is_empty());
}

#[test]
fn block_is_still_for_many_generations() {
    let start = block(10, 8, 3, 2);
    let mut w = start.clone();
    step_n(&mut w, 50);
    assert_eq!(alive_cells(&w), alive_cells(&start));
    assert_eq!(w.generation(), 50);
    assert_eq!(BLOCK.period, 1);
}

#[test]
fn blinker_straddling_an_edge_still_oscillates() {
    // Bounding box starts on the last row, so the blinker wraps to the top.
    let start = blinker(6, 6, 2, 5);
    let mut w = start.clone();
    step(&mut w);
    assert_ne!(alive_cells(&w), alive_cells(&start));
    assert_eq!(w.count_alive(), 3);
    step_n(&mut w, BLINKER.period - 1);
    assert_eq!(alive_cells(&w), alive_cells(&start));
}

#[test]
fn glider_crosses_the_seam() {
    let mut w = glider(6, 6, 4, 4);
    let mut expected = World::new(6, 6).unwrap();
    place(&mut expected, &GLIDER, 5, 5).unwrap();
    step_n(&mut w, GLIDER.period);
    assert_eq!(alive_cells(&w), alive_cells(&expected));
}

#[test]
fn soup_evolution_is_reproducible() {
    let mut a = random_soup(32, 24, 99, 0.4);
    let mut b = a.clone();
    for _ in 0..20 {
        assert_eq!(next_generation(&a), next_generation(&b));
        step(&mut a);
        step(&mut b);
    }
    assert_eq!(a, b);
    assert_eq!(a.generation(), 20);
}
