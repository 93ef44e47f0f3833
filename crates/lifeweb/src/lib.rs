//! Lifeweb: Conway's Game of Life on a toroidal grid, streamed one
//! generation at a time.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Lifeweb sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use lifeweb::prelude::*;
//!
//! // A vertical blinker on a 5×5 torus.
//! let mut world = World::new(5, 5).unwrap();
//! for y in 1..=3 {
//!     world.set_cell(2, y, true).unwrap();
//! }
//!
//! let (stream, stop) = open_stream(world.clone()).unwrap();
//! let first = stream.recv().unwrap();
//! let second = stream.recv().unwrap();
//! let third = stream.recv().unwrap();
//! assert_eq!(first, world);
//! assert_eq!(second.cell(1, 2), Some(true));
//! assert_eq!(third.to_rows(), world.to_rows());
//!
//! // The producer has already stepped past the last delivered grid.
//! let last = stop.stop().unwrap();
//! assert_eq!(last.generation(), 3);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`core`] | `lifeweb-core` | `World`, the life rule, wire shapes |
//! | [`engine`] | `lifeweb-engine` | Cancellable generation streams |
//! | [`session`] | `lifeweb-session` | Envelope, sessions, registry, transports |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Grid state and the life rule (`lifeweb-core`).
///
/// [`core::World`] is the toroidal grid; [`core::step`] advances it one
/// generation in place.
pub use lifeweb_core as core;

/// Generation streams (`lifeweb-engine`).
///
/// [`engine::open_stream`] starts a producer thread and returns the
/// consumer and stop halves.
pub use lifeweb_engine as engine;

/// Session supervision (`lifeweb-session`).
///
/// [`session::serve`] runs one client connection over any
/// [`session::FrameSource`] and [`session::FrameSink`] pair.
pub use lifeweb_session as session;

/// Common imports for typical Lifeweb usage.
///
/// ```rust
/// use lifeweb::prelude::*;
/// ```
pub mod prelude {
    // Core
    pub use lifeweb_core::{step, step_n, World, WorldError, WorldState};

    // Engine
    pub use lifeweb_engine::{open_stream, GenerationStream, StopHandle, StreamError};

    // Session
    pub use lifeweb_session::{
        serve, Session, SessionConfig, SessionError, SessionRegistry, SessionReport,
    };
}
