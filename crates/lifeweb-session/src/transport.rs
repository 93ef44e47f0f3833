//! The seam between a session and whatever carries its messages.

use std::error::Error;
use std::fmt;

/// One inbound message from the remote party.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Frame {
    /// A UTF-8 text message; the only kind a session acts on.
    Text(String),
    /// A binary message; logged and ignored.
    Binary(Vec<u8>),
}

/// The receiving half of a connection.
pub trait FrameSource {
    /// Block until the next frame arrives.
    ///
    /// `Ok(None)` means the remote closed the connection cleanly.
    fn next_frame(&mut self) -> Result<Option<Frame>, TransportError>;
}

/// The sending half of a connection.
///
/// Sinks move onto a forwarder thread, hence `Send + 'static`. A sink
/// must fail (or drain) once its peer has gone away; a send that blocks
/// forever also blocks session teardown.
pub trait FrameSink: Send + 'static {
    /// Send one text message.
    fn send_text(&mut self, text: &str) -> Result<(), TransportError>;
}

/// Errors surfaced by a transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransportError {
    /// The peer has disconnected.
    Closed,
    /// Any other I/O failure.
    Io {
        /// Description of the failure.
        reason: String,
    },
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closed => write!(f, "connection closed"),
            Self::Io { reason } => write!(f, "transport i/o: {reason}"),
        }
    }
}

impl Error for TransportError {}
