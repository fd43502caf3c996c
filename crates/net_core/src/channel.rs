//! In-proc channels for replication messages (bytes).
//!
//! `std::sync::mpsc` under the hood with non-blocking drain helpers, plus a
//! `Hub` that fans one published message out to every subscribed replica.
//! Per-subscriber delivery order equals publish order; latency is whatever
//! the replica's own loop makes it (replicas drain whenever they tick).

use std::sync::mpsc::{self, Receiver, Sender};

#[derive(Clone)]
pub struct Tx(pub Sender<Vec<u8>>);
pub struct Rx(pub Receiver<Vec<u8>>);

/// Create a sender/receiver pair. The underlying channel is unbounded.
#[must_use]
pub fn channel() -> (Tx, Rx) {
    let (s, r) = mpsc::channel::<Vec<u8>>();
    (Tx(s), Rx(r))
}

impl Tx {
    /// Try to send; returns false if the receiver is dropped.
    #[must_use]
    pub fn try_send(&self, bytes: Vec<u8>) -> bool {
        self.0.send(bytes).is_ok()
    }
}

impl Rx {
    /// Non-blocking receive of a single message.
    #[must_use]
    pub fn try_recv(&self) -> Option<Vec<u8>> {
        self.0.try_recv().ok()
    }
    /// Drain all currently queued messages.
    #[must_use]
    pub fn drain(&self) -> Vec<Vec<u8>> {
        let mut out = Vec::new();
        while let Some(b) = self.try_recv() {
            out.push(b);
        }
        out
    }
}

/// Authority-side fan-out: one publish lands on every subscribed replica.
#[derive(Default)]
pub struct Hub {
    subs: Vec<Tx>,
}

impl Hub {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new replica endpoint and return its receive side.
    pub fn subscribe(&mut self) -> Rx {
        let (tx, rx) = channel();
        self.subs.push(tx);
        rx
    }

    /// Publish a message to all subscribers. Subscribers whose receiver has
    /// been dropped are pruned. Returns how many replicas were reached.
    pub fn publish(&mut self, bytes: &[u8]) -> usize {
        self.subs.retain(|tx| tx.try_send(bytes.to_vec()));
        self.subs.len()
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subs.len()
    }
}
