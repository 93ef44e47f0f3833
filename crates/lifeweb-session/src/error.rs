//! Session-level error type.

use std::error::Error;
use std::fmt;

use lifeweb_core::WorldError;
use lifeweb_engine::StreamError;

use crate::config::ConfigError;
use crate::registry::RegistryError;
use crate::transport::TransportError;

/// Errors that end a session.
///
/// Bad client input (undecodable messages, invalid grids) never ends a
/// session; it is logged and counted in the report instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// Sending to the client failed.
    Transport(TransportError),
    /// The session's default grid could not be built.
    World(WorldError),
    /// A generation stream could not be started or stopped.
    Stream(StreamError),
    /// The session configuration is invalid.
    Config(ConfigError),
    /// The session was not found in the registry at teardown.
    Registry(RegistryError),
    /// An update could not be encoded.
    Encode {
        /// Description of the failure.
        reason: String,
    },
    /// The forwarder thread panicked.
    ForwarderPanicked,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "transport: {e}"),
            Self::World(e) => write!(f, "world: {e}"),
            Self::Stream(e) => write!(f, "stream: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Registry(e) => write!(f, "registry: {e}"),
            Self::Encode { reason } => write!(f, "encode: {reason}"),
            Self::ForwarderPanicked => write!(f, "forwarder thread panicked"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(e) => Some(e),
            Self::World(e) => Some(e),
            Self::Stream(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Registry(e) => Some(e),
            Self::Encode { .. } | Self::ForwarderPanicked => None,
        }
    }
}

impl From<TransportError> for SessionError {
    fn from(e: TransportError) -> Self {
        Self::Transport(e)
    }
}

impl From<WorldError> for SessionError {
    fn from(e: WorldError) -> Self {
        Self::World(e)
    }
}

impl From<StreamError> for SessionError {
    fn from(e: StreamError) -> Self {
        Self::Stream(e)
    }
}

impl From<ConfigError> for SessionError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<RegistryError> for SessionError {
    fn from(e: RegistryError) -> Self {
        Self::Registry(e)
    }
}
