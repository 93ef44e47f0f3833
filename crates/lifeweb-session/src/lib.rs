//! Session layer for the Lifeweb server.
//!
//! Sits between a message-oriented transport and the generation stream.
//! Each connected client gets a [`Session`] that decodes its commands,
//! owns at most one running stream, and forwards every generation back
//! as an `update` [envelope](envelope). The [`SessionRegistry`] tracks
//! connected sessions; [`serve`] ties the two together with guaranteed
//! cleanup.
//!
//! The transport itself (HTTP upgrade, WebSocket framing) is out of
//! scope: anything implementing [`FrameSource`] and [`FrameSink`] can
//! carry a session. [`memory::pair`] provides an in-process transport.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod envelope;
pub mod error;
pub mod memory;
pub mod registry;
pub mod session;
pub mod transport;

pub use config::{ConfigError, SessionConfig};
pub use envelope::{ClientMessage, DecodeError, ServerMessage};
pub use error::SessionError;
pub use registry::{RegistryError, SessionId, SessionInfo, SessionRegistry};
pub use session::{serve, CloseReason, Session, SessionReport};
pub use transport::{Frame, FrameSink, FrameSource, TransportError};
