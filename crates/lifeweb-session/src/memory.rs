//! In-process transport over crossbeam channels.
//!
//! [`pair`] returns the server half (a [`MemorySource`] and a
//! [`MemorySink`] to hand to a session) and a [`RemotePeer`] that plays
//! the client. Dropping the peer closes both directions, the way a
//! dropped socket would.

use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};

use crate::envelope::{decode_server, DecodeError, ServerMessage};
use crate::transport::{Frame, FrameSink, FrameSource, TransportError};

/// Default number of server-to-client messages buffered before
/// [`MemorySink::send_text`] blocks.
pub const DEFAULT_CAPACITY: usize = 16;

/// Create a connected transport with the default outbound capacity.
pub fn pair() -> (MemorySource, MemorySink, RemotePeer) {
    pair_with_capacity(DEFAULT_CAPACITY)
}

/// Create a connected transport buffering up to `capacity` outbound
/// messages. A capacity of zero makes every send a rendezvous with the
/// peer's receive.
pub fn pair_with_capacity(capacity: usize) -> (MemorySource, MemorySink, RemotePeer) {
    let (in_tx, in_rx) = crossbeam_channel::unbounded();
    let (out_tx, out_rx) = crossbeam_channel::bounded(capacity);
    (
        MemorySource { rx: in_rx },
        MemorySink { tx: out_tx },
        RemotePeer {
            to_server: Some(in_tx),
            from_server: out_rx,
        },
    )
}

/// Server-side receiving half.
#[derive(Debug)]
pub struct MemorySource {
    rx: Receiver<Frame>,
}

impl FrameSource for MemorySource {
    fn next_frame(&mut self) -> Result<Option<Frame>, TransportError> {
        Ok(self.rx.recv().ok())
    }
}

/// Server-side sending half.
#[derive(Debug, Clone)]
pub struct MemorySink {
    tx: Sender<String>,
}

impl FrameSink for MemorySink {
    fn send_text(&mut self, text: &str) -> Result<(), TransportError> {
        self.tx
            .send(text.to_owned())
            .map_err(|_| TransportError::Closed)
    }
}

/// The client end of an in-memory connection.
#[derive(Debug)]
pub struct RemotePeer {
    to_server: Option<Sender<Frame>>,
    from_server: Receiver<String>,
}

impl RemotePeer {
    /// Send a text frame to the server.
    pub fn send_text(&self, text: impl Into<String>) -> Result<(), TransportError> {
        self.send(Frame::Text(text.into()))
    }

    /// Send a binary frame to the server.
    pub fn send_binary(&self, bytes: Vec<u8>) -> Result<(), TransportError> {
        self.send(Frame::Binary(bytes))
    }

    fn send(&self, frame: Frame) -> Result<(), TransportError> {
        let tx = self.to_server.as_ref().ok_or(TransportError::Closed)?;
        tx.send(frame).map_err(|_| TransportError::Closed)
    }

    /// Close the client-to-server direction while still reading replies.
    pub fn hang_up(&mut self) {
        self.to_server = None;
    }

    /// Wait up to `timeout` for the next raw text message from the server.
    ///
    /// `None` on timeout or once the server side is gone.
    pub fn recv_text(&self, timeout: Duration) -> Option<String> {
        match self.from_server.recv_timeout(timeout) {
            Ok(text) => Some(text),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Wait up to `timeout` for the next message and decode it.
    pub fn recv_message(&self, timeout: Duration) -> Option<Result<ServerMessage, DecodeError>> {
        self.recv_text(timeout).map(|text| decode_server(&text))
    }

    /// Drain every message already queued by the server.
    pub fn drain(&self) -> Vec<String> {
        self.from_server.try_iter().collect()
    }
}
