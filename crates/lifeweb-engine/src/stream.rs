//! Producer thread and endpoints for a cancellable generation stream.
//!
//! ```text
//! Consumer                         Producer thread ("lifeweb-stream")
//!     |                                 | owns World exclusively
//!     |                                 | loop:
//!     |<--gen_rx.recv()-----------------|   select {
//!     |   [gen_tx: bounded(0)]          |     send(world.clone()) => step(world)
//!     |                                 |     recv(stop_rx)       => exit
//!     |--StopHandle::stop()------------>|   }
//!     |   [stop_tx: bounded(1)]         |
//!     |<--JoinHandle<World>-------------| returns World on exit
//! ```
//!
//! The generation channel has zero capacity, so every delivery is a
//! rendezvous: the producer computes the next generation only after the
//! consumer has taken the current one, and the consumer's pace is the
//! only throttle. Nothing is buffered and nothing is dropped.
//!
//! The producer also exits when either endpoint is dropped, so an
//! abandoned stream does not pin its thread forever.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{select, Receiver, RecvTimeoutError, Sender};
use lifeweb_core::{rule, World};
use tracing::debug;

use crate::error::{RecvError, StreamError};

/// Why the producer loop ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StopReason {
    /// `StopHandle::stop()` fired the signal.
    Cancelled,
    /// The `StopHandle` was dropped without firing.
    HandleDropped,
    /// The `GenerationStream` was dropped.
    ConsumerGone,
}

enum Outcome {
    Delivered,
    Stopped(StopReason),
}

/// State moved onto the producer thread.
struct Producer {
    world: World,
    gen_tx: Sender<World>,
    stop_rx: Receiver<()>,
}

impl Producer {
    /// Offer generations until cancelled, then hand the grid back.
    fn run(self) -> World {
        let Self {
            mut world,
            gen_tx,
            stop_rx,
        } = self;
        debug!(
            generation = world.generation(),
            width = world.width(),
            height = world.height(),
            "stream producer started"
        );

        let reason = loop {
            let outcome = select! {
                recv(stop_rx) -> msg => Outcome::Stopped(match msg {
                    Ok(()) => StopReason::Cancelled,
                    Err(_) => StopReason::HandleDropped,
                }),
                send(gen_tx, world.clone()) -> sent => match sent {
                    Ok(()) => Outcome::Delivered,
                    Err(_) => Outcome::Stopped(StopReason::ConsumerGone),
                },
            };
            match outcome {
                Outcome::Delivered => rule::step(&mut world),
                Outcome::Stopped(reason) => break reason,
            }
        };

        debug!(generation = world.generation(), ?reason, "stream producer stopped");
        // gen_tx and stop_rx drop here, closing both endpoints.
        world
    }
}

/// Open a generation stream over `world`.
///
/// The grid is moved onto a new producer thread, which holds exclusive
/// write access to it until the stream stops. The first generation
/// delivered is `world` exactly as passed in; each later one is the
/// previous after one [`step`](lifeweb_core::step).
pub fn open_stream(world: World) -> Result<(GenerationStream, StopHandle), StreamError> {
    let (gen_tx, gen_rx) = crossbeam_channel::bounded(0);
    // One slot so stop() never blocks, even if the producer is mid-step.
    let (stop_tx, stop_rx) = crossbeam_channel::bounded(1);

    let producer = Producer {
        world,
        gen_tx,
        stop_rx,
    };
    let thread = thread::Builder::new()
        .name("lifeweb-stream".into())
        .spawn(move || producer.run())
        .map_err(|e| StreamError::SpawnFailed {
            reason: e.to_string(),
        })?;

    Ok((
        GenerationStream { rx: gen_rx },
        StopHandle { stop_tx, thread },
    ))
}

/// The read-only end of a generation stream.
///
/// Yields successive [`World`] snapshots in strictly increasing
/// generation order. End of stream (after a stop, or if the producer
/// died) is reported as `None`; there is no error value.
#[derive(Debug)]
pub struct GenerationStream {
    rx: Receiver<World>,
}

impl GenerationStream {
    /// Block until the next generation is handed over, or the stream ends.
    pub fn recv(&self) -> Option<World> {
        self.rx.recv().ok()
    }

    /// Like [`recv`](Self::recv), giving up after `timeout`.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<World, RecvError> {
        self.rx.recv_timeout(timeout).map_err(|e| match e {
            RecvTimeoutError::Timeout => RecvError::Timeout,
            RecvTimeoutError::Disconnected => RecvError::Finished,
        })
    }
}

impl Iterator for GenerationStream {
    type Item = World;

    fn next(&mut self) -> Option<World> {
        self.recv()
    }
}

/// The one-shot cancel end of a generation stream.
///
/// [`stop`](Self::stop) consumes the handle, so the signal can only be
/// fired once. Dropping the handle without stopping also ends the
/// stream, but detaches the producer and discards its grid.
#[derive(Debug)]
pub struct StopHandle {
    stop_tx: Sender<()>,
    thread: JoinHandle<World>,
}

impl StopHandle {
    /// Cancel the stream, wait for the producer to exit, and return the
    /// grid at the generation that would have been offered next.
    ///
    /// Once this returns, the paired [`GenerationStream`] yields no more
    /// values.
    pub fn stop(self) -> Result<World, StreamError> {
        // Err only if the producer already exited on its own.
        let _ = self.stop_tx.send(());
        self.thread.join().map_err(|_| StreamError::ProducerPanicked)
    }

    /// Whether the producer thread has exited.
    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }
}
