//! Benchmark profiles for the Lifeweb Game of Life server.
//!
//! Provides seeded grids shared by the benchmarks:
//!
//! - [`reference_profile`]: 50x50 grid, the size a default session streams
//! - [`stress_profile`]: 256x256 grid (~65K cells) for stress testing

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use lifeweb_core::World;
use lifeweb_test_utils::random_soup;

/// Fraction of cells alive in a profile soup.
pub const SOUP_DENSITY: f64 = 0.35;

/// Build the reference profile: a 50x50 random soup.
pub fn reference_profile(seed: u64) -> World {
    random_soup(50, 50, seed, SOUP_DENSITY)
}

/// Build the stress profile: a 256x256 random soup.
///
/// Same density as [`reference_profile`] at ~26x the cell count.
pub fn stress_profile(seed: u64) -> World {
    random_soup(256, 256, seed, SOUP_DENSITY)
}
