//! Generation streaming for Lifeweb simulations.
//!
//! [`open_stream`] moves a [`World`](lifeweb_core::World) onto a
//! dedicated producer thread that offers successive generations to a
//! single consumer through a rendezvous channel. The consumer reads from
//! a [`GenerationStream`] and ends delivery with the one-shot
//! [`StopHandle`], which hands the grid back.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod stream;

pub use error::{RecvError, StreamError};
pub use stream::{open_stream, GenerationStream, StopHandle};
