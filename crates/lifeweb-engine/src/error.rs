//! Error types for the generation stream.

use std::error::Error;
use std::fmt;

/// Errors from opening or stopping a generation stream.
///
/// Delivery itself has no error channel: a closed stream simply yields
/// no more generations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StreamError {
    /// The producer thread could not be spawned.
    SpawnFailed {
        /// Description from the OS.
        reason: String,
    },
    /// The producer thread panicked, so its grid could not be recovered.
    ProducerPanicked,
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SpawnFailed { reason } => write!(f, "stream thread spawn failed: {reason}"),
            Self::ProducerPanicked => write!(f, "stream producer panicked"),
        }
    }
}

impl Error for StreamError {}

/// Why a timed receive on a generation stream returned no value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecvError {
    /// No generation was handed over before the timeout.
    Timeout,
    /// The stream has ended and will yield nothing more.
    Finished,
}

impl fmt::Display for RecvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => write!(f, "timed out waiting for a generation"),
            Self::Finished => write!(f, "generation stream has ended"),
        }
    }
}

impl Error for RecvError {}
