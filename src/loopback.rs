//! Authority + loopback replicas over the in-proc channel.
//!
//! A `ReplicaView` is what a client process would hold: the mirrored state
//! id, skill values, and target binding, reconciled from the channel whenever
//! its own loop drains. Draining is deliberately decoupled from the
//! authority's tick so tests can model arbitrary delivery delay.

use net_core::apply::ReplicationApply;
use net_core::channel::Rx;
use net_core::wire::RepMsg;
use server_core::fsm::replica::{ReplicaMachine, SkillMirror};
use server_core::presentation::PresentationSink;
use server_core::StateId;

pub struct ReplicaView {
    rx: Rx,
    pub machine: ReplicaMachine,
    pub skills: SkillMirror,
}

impl ReplicaView {
    pub fn new(rx: Rx) -> Self {
        Self {
            rx,
            machine: ReplicaMachine::default(),
            skills: SkillMirror::default(),
        }
    }

    pub fn with_presentation(rx: Rx, hook: Box<dyn PresentationSink>) -> Self {
        Self {
            rx,
            machine: ReplicaMachine::new(hook),
            skills: SkillMirror::default(),
        }
    }

    /// Drain and apply everything currently queued, in publish order.
    /// Returns how many messages were applied.
    pub fn reconcile(&mut self) -> usize {
        let mut applied = 0usize;
        for bytes in self.rx.drain() {
            match RepMsg::from_frame(&bytes) {
                Ok(msg) => {
                    self.machine.apply(&msg);
                    self.skills.apply(&msg);
                    applied += 1;
                }
                Err(e) => log::warn!("replica: dropping malformed frame: {e:#}"),
            }
        }
        applied
    }

    #[inline]
    pub fn state(&self) -> Option<StateId> {
        self.machine.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use net_core::channel::Hub;

    #[test]
    fn reconcile_applies_in_publish_order() {
        let mut hub = Hub::new();
        let mut view = ReplicaView::new(hub.subscribe());
        hub.publish(&RepMsg::State { id: 0 }.to_frame());
        hub.publish(&RepMsg::SkillActive { active: true }.to_frame());
        hub.publish(&RepMsg::State { id: 3 }.to_frame());
        assert_eq!(view.reconcile(), 3);
        assert_eq!(view.state(), Some(StateId::ATTACK));
        assert!(view.skills.active);
    }

    #[test]
    fn malformed_frames_are_dropped_not_fatal() {
        let mut hub = Hub::new();
        let mut view = ReplicaView::new(hub.subscribe());
        hub.publish(b"not a frame");
        hub.publish(&RepMsg::State { id: 1 }.to_frame());
        assert_eq!(view.reconcile(), 1);
        assert_eq!(view.state(), Some(StateId::IDLE));
    }
}
