//! `net_core`: replicated-value messages + in-proc replication plumbing.
//!
//! Scope
//! - Defines the small set of values the authority publishes to replicas
//!   (behavior state id, selected skill index, skill busy flag, target id)
//! - Provides an ordered in-proc channel and a one-to-many publish hub
//! - Transport below the channel (relay, sockets) is out of scope
//!
#![deny(warnings, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod apply;
pub mod channel;
pub mod frame;
pub mod wire;

#[cfg(test)]
mod tests {
    use crate::wire::{RepMsg, WireDecode, WireEncode};

    #[test]
    fn publish_order_survives_the_channel() {
        let (tx, rx) = crate::channel::channel();
        for id in 0u8..4 {
            let mut buf = Vec::new();
            RepMsg::State { id }.encode(&mut buf);
            assert!(tx.try_send(buf));
        }
        let got: Vec<u8> = rx
            .drain()
            .iter()
            .map(|b| {
                let mut s: &[u8] = b;
                match RepMsg::decode(&mut s).expect("decode") {
                    RepMsg::State { id } => id,
                    other => panic!("unexpected msg: {other:?}"),
                }
            })
            .collect();
        assert_eq!(got, vec![0, 1, 2, 3]);
    }
}
