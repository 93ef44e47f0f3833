//! Core types for the Lifeweb Game of Life server.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the simulation state machine every other crate builds on:
//!
//! - [`World`]: a toroidal boolean grid plus its generation counter.
//! - [`rule`]: the Moore-neighbourhood rule evaluator and in-place
//!   [`step`](rule::step).
//! - [`WorldError`]: the synchronous error taxonomy for construction and
//!   direct cell addressing.
//!
//! With the `serde` feature enabled, [`World`] serializes to its
//! row-major boolean matrix and [`WorldState`] provides the wire shape
//! clients use to upload a seeded grid.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod rule;
pub mod world;

#[cfg(feature = "serde")]
pub mod wire;

pub use error::WorldError;
pub use rule::{live_neighbours, next_cell_state, next_generation, step, step_n};
pub use world::World;

#[cfg(feature = "serde")]
pub use wire::WorldState;
