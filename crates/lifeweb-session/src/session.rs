//! Per-connection supervisor.
//!
//! ```text
//! Supervisor (caller's thread)     Forwarder ("lifeweb-forward-N")    Producer ("lifeweb-stream")
//!     |                                 |                                 |
//!     | source.next_frame()             |                                 |
//!     | decode "set" -> World           |                                 |
//!     | halt(): stop + join old ------->|                                 |
//!     | open_stream(world) --------------------------------------------->|
//!     | spawn forwarder --------------->| for world in stream <-----------|
//!     |                                 |   sink.send_text(update)        |
//!     |                                 |   sleep(frame_interval)         |
//!     | source closes                   |                                 |
//!     | halt(): stop + join ----------->| exits, hands sink back          |
//!     | SessionReport                   |                                 |
//! ```
//!
//! The supervisor owns the only [`StopHandle`], so every exit path from
//! [`Session::run`] stops the stream and joins the forwarder before
//! returning. A forwarder that fails to send drops its stream, which
//! ends the producer immediately. A closed sink is the normal way a
//! client leaves; any other send failure is reported the next time the
//! supervisor halts the forwarder.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use lifeweb_core::World;
use lifeweb_engine::{open_stream, GenerationStream, StopHandle, StreamError};
use tracing::{debug, info, trace, warn};

use crate::config::SessionConfig;
use crate::envelope::{decode_client, encode_update, ClientMessage};
use crate::error::SessionError;
use crate::registry::{SessionId, SessionRegistry};
use crate::transport::{Frame, FrameSink, FrameSource, TransportError};

/// How a session's inbound side ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CloseReason {
    /// The client closed the connection.
    RemoteClosed,
    /// Receiving failed.
    Transport(TransportError),
}

/// Summary returned when a session ends cleanly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionReport {
    /// The session's identifier.
    pub id: SessionId,
    /// Updates successfully sent to the client.
    pub frames_sent: u64,
    /// `set` commands that replaced the grid.
    pub worlds_set: u64,
    /// Inbound frames that were logged and dropped.
    pub ignored_messages: u64,
    /// Generation of the session's grid when it stopped.
    pub final_generation: u64,
    /// Why the inbound side ended.
    pub close: CloseReason,
}

/// What the forwarder hands back when it exits.
struct ForwarderExit<S> {
    sink: S,
    send_count: u64,
    failure: Option<SessionError>,
}

enum Delivery<S> {
    Idle(S),
    Streaming {
        stop: StopHandle,
        forwarder: JoinHandle<ForwarderExit<S>>,
    },
}

/// One client's session: its grid, its stream, and its counters.
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    remote: String,
    config: SessionConfig,
    world: World,
    frames_sent: u64,
    worlds_set: u64,
    ignored: u64,
}

impl Session {
    /// Create a session holding an all-dead default grid.
    pub fn new(
        id: SessionId,
        remote: impl Into<String>,
        config: SessionConfig,
    ) -> Result<Self, SessionError> {
        config.validate()?;
        let world = World::new(config.default_width, config.default_height)?;
        Ok(Self {
            id,
            remote: remote.into(),
            config,
            world,
            frames_sent: 0,
            worlds_set: 0,
            ignored: 0,
        })
    }

    /// The session's identifier.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// The grid the session holds while no stream is running.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Serve the connection until its inbound side closes.
    ///
    /// Streaming starts on the first valid `set` and restarts on each
    /// later one. Returns an error only if sending to the client failed
    /// for a reason other than disconnection, or a thread could not be
    /// started or joined. In every case the stream and forwarder are
    /// stopped before this returns.
    pub fn run<Src, Snk>(mut self, mut source: Src, sink: Snk) -> Result<SessionReport, SessionError>
    where
        Src: FrameSource,
        Snk: FrameSink,
    {
        info!(session = %self.id, remote = %self.remote, "session started");
        let mut delivery = Delivery::Idle(sink);

        let close = loop {
            let frame = match source.next_frame() {
                Ok(Some(frame)) => frame,
                Ok(None) => break CloseReason::RemoteClosed,
                Err(e) => {
                    warn!(session = %self.id, error = %e, "receive failed, closing session");
                    break CloseReason::Transport(e);
                }
            };
            let Some(world) = self.accept(frame) else {
                continue;
            };
            let sink = self.halt(delivery)?;
            delivery = self.start(sink, world)?;
            self.worlds_set += 1;
        };

        self.halt(delivery)?;
        let report = SessionReport {
            id: self.id,
            frames_sent: self.frames_sent,
            worlds_set: self.worlds_set,
            ignored_messages: self.ignored,
            final_generation: self.world.generation(),
            close,
        };
        info!(
            session = %self.id,
            frames_sent = report.frames_sent,
            worlds_set = report.worlds_set,
            ignored = report.ignored_messages,
            "session ended"
        );
        Ok(report)
    }

    /// Decode one inbound frame into a grid to stream, or log and drop it.
    fn accept(&mut self, frame: Frame) -> Option<World> {
        let text = match frame {
            Frame::Text(text) => text,
            Frame::Binary(bytes) => {
                warn!(session = %self.id, len = bytes.len(), "ignoring binary frame");
                self.ignored += 1;
                return None;
            }
        };
        let ClientMessage::Set { world } = match decode_client(&text) {
            Ok(msg) => msg,
            Err(e) => {
                warn!(session = %self.id, error = %e, "ignoring message");
                self.ignored += 1;
                return None;
            }
        };
        match World::try_from(world) {
            Ok(world) => {
                info!(
                    session = %self.id,
                    width = world.width(),
                    height = world.height(),
                    alive = world.count_alive(),
                    "world set by client"
                );
                Some(world)
            }
            Err(e) => {
                warn!(session = %self.id, error = %e, "ignoring invalid world");
                self.ignored += 1;
                None
            }
        }
    }

    /// Open a stream on `world` and start forwarding it through `sink`.
    fn start<S: FrameSink>(&mut self, sink: S, world: World) -> Result<Delivery<S>, SessionError> {
        let (stream, stop) = open_stream(world)?;
        let id = self.id;
        let interval = self.config.frame_interval;
        let sent = self.frames_sent;
        let spawned = thread::Builder::new()
            .name(format!("lifeweb-forward-{id}"))
            .spawn(move || forward(id, stream, sink, sent, interval));
        match spawned {
            Ok(forwarder) => {
                debug!(session = %id, "stream started");
                Ok(Delivery::Streaming { stop, forwarder })
            }
            Err(e) => {
                // The closure, and with it the stream's consumer end, is gone.
                if let Ok(world) = stop.stop() {
                    self.world = world;
                }
                Err(StreamError::SpawnFailed {
                    reason: e.to_string(),
                }
                .into())
            }
        }
    }

    /// Stop any running stream, join its forwarder, and recover the sink.
    fn halt<S: FrameSink>(&mut self, delivery: Delivery<S>) -> Result<S, SessionError> {
        let (stop, forwarder) = match delivery {
            Delivery::Idle(sink) => return Ok(sink),
            Delivery::Streaming { stop, forwarder } => (stop, forwarder),
        };
        let stopped = stop.stop();
        let joined = forwarder.join();

        self.world = stopped?;
        let exit = joined.map_err(|_| SessionError::ForwarderPanicked)?;
        self.frames_sent = exit.send_count;
        debug!(
            session = %self.id,
            generation = self.world.generation(),
            frames_sent = self.frames_sent,
            "stream stopped"
        );
        match exit.failure {
            Some(e) => Err(e),
            None => Ok(exit.sink),
        }
    }
}

/// Forwarder thread body: encode and send each generation until the
/// stream ends or the sink fails.
fn forward<S: FrameSink>(
    session: SessionId,
    stream: GenerationStream,
    mut sink: S,
    mut send_count: u64,
    interval: Duration,
) -> ForwarderExit<S> {
    let mut failure = None;
    for world in stream {
        let text = match encode_update(&world, send_count + 1) {
            Ok(text) => text,
            Err(e) => {
                failure = Some(SessionError::Encode {
                    reason: e.to_string(),
                });
                break;
            }
        };
        match sink.send_text(&text) {
            Ok(()) => {}
            Err(TransportError::Closed) => {
                debug!(session = %session, "client gone, stopping stream");
                break;
            }
            Err(e) => {
                warn!(session = %session, error = %e, "send failed, stopping stream");
                failure = Some(SessionError::Transport(e));
                break;
            }
        }
        send_count += 1;
        trace!(
            session = %session,
            generation = world.generation(),
            send_count,
            "update sent"
        );
        if !interval.is_zero() {
            thread::sleep(interval);
        }
    }
    ForwarderExit {
        sink,
        send_count,
        failure,
    }
}

/// Register a session, run it to completion, and unregister it.
///
/// The session is removed from `registry` whatever the outcome.
pub fn serve<Src, Snk>(
    registry: &SessionRegistry,
    remote: impl Into<String>,
    source: Src,
    sink: Snk,
    config: &SessionConfig,
) -> Result<SessionReport, SessionError>
where
    Src: FrameSource,
    Snk: FrameSink,
{
    let remote = remote.into();
    let id = registry.register(remote.clone());
    let outcome = Session::new(id, remote, config.clone()).and_then(|s| s.run(source, sink));
    let unregistered = registry.unregister(id);
    let report = outcome?;
    unregistered?;
    Ok(report)
}
