//! Wire envelope: JSON messages tagged by their `Command` field.
//!
//! ```text
//! client -> server  {"Command":"set","World":{"Cells":[[..]],"Width":w,"Height":h}}
//! server -> client  {"Command":"update","World":[[..]],"SendCount":n}
//! ```
//!
//! Each direction has its own sum type so a decoder can match every
//! command it accepts exhaustively.

use std::error::Error;
use std::fmt;

use lifeweb_core::{World, WorldState};
use serde::{Deserialize, Serialize};

/// A message sent by a client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "Command")]
pub enum ClientMessage {
    /// Replace the session's grid and (re)start streaming from it.
    #[serde(rename = "set")]
    Set {
        /// The seeded grid.
        #[serde(rename = "World")]
        world: WorldState,
    },
}

impl ClientMessage {
    /// Every `Command` value a client may send.
    pub const COMMANDS: &'static [&'static str] = &["set"];
}

/// A message sent by the server, as seen by a client decoding it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "Command")]
pub enum ServerMessage {
    /// One generation of the session's grid.
    #[serde(rename = "update")]
    Update {
        /// Row-major cells, `world[y][x]`.
        #[serde(rename = "World")]
        world: Vec<Vec<bool>>,
        /// Per-session count of updates sent so far, starting at 1.
        #[serde(rename = "SendCount")]
        send_count: u64,
    },
}

/// Borrowed form of [`ServerMessage::Update`] so encoding does not copy
/// the grid into a nested `Vec`.
#[derive(Serialize)]
#[serde(tag = "Command", rename = "update")]
struct UpdateRef<'a> {
    #[serde(rename = "World")]
    world: &'a World,
    #[serde(rename = "SendCount")]
    send_count: u64,
}

/// Encode one generation as an `update` message.
pub fn encode_update(world: &World, send_count: u64) -> Result<String, serde_json::Error> {
    serde_json::to_string(&UpdateRef { world, send_count })
}

/// Decode a text frame sent by a client.
pub fn decode_client(text: &str) -> Result<ClientMessage, DecodeError> {
    serde_json::from_str(text).map_err(|err| classify(text, err))
}

/// Decode a text frame sent by the server.
pub fn decode_server(text: &str) -> Result<ServerMessage, DecodeError> {
    serde_json::from_str(text).map_err(|err| DecodeError::Malformed {
        reason: err.to_string(),
    })
}

#[derive(Deserialize)]
struct Header {
    #[serde(rename = "Command")]
    command: String,
}

/// Tell an unrecognised command apart from a broken message.
fn classify(text: &str, err: serde_json::Error) -> DecodeError {
    match serde_json::from_str::<Header>(text) {
        Ok(Header { command }) if !ClientMessage::COMMANDS.contains(&command.as_str()) => {
            DecodeError::UnknownCommand { command }
        }
        _ => DecodeError::Malformed {
            reason: err.to_string(),
        },
    }
}

/// Why a text frame could not be decoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// Not valid JSON, no `Command` field, or a known command with a bad body.
    Malformed {
        /// Parser message.
        reason: String,
    },
    /// Well-formed, but the command is not one this side accepts.
    UnknownCommand {
        /// The `Command` value received.
        command: String,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed { reason } => write!(f, "malformed message: {reason}"),
            Self::UnknownCommand { command } => write!(f, "unknown command '{command}'"),
        }
    }
}

impl Error for DecodeError {}
