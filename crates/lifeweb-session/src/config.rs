//! Session configuration and validation.

use std::error::Error;
use std::fmt;
use std::time::Duration;

/// Per-session settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Pause after each update is sent. Zero disables pacing, leaving the
    /// transport's own back-pressure as the only throttle. Default: 75 ms.
    pub frame_interval: Duration,
    /// Width of the grid a session holds before the client sets one.
    /// Default: 50.
    pub default_width: u32,
    /// Height of the grid a session holds before the client sets one.
    /// Default: 50.
    pub default_height: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(75),
            default_width: 50,
            default_height: 50,
        }
    }
}

impl SessionConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_width == 0 || self.default_height == 0 {
            return Err(ConfigError::InvalidDimension {
                width: self.default_width,
                height: self.default_height,
            });
        }
        Ok(())
    }
}

/// Errors detected during [`SessionConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A default grid dimension is zero.
    InvalidDimension {
        /// Configured width.
        width: u32,
        /// Configured height.
        height: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { width, height } => {
                write!(f, "default grid {width}x{height} must have non-zero dimensions")
            }
        }
    }
}

impl Error for ConfigError {}
