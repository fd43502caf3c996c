//! Boss-to-player target binding.
//!
//! The assigned id is a replicated value; the actual player reference is
//! re-resolved against the registry on demand. A miss is not an error: the
//! caller skips its dependent action this tick and retries on next use.

use net_core::channel::Hub;
use net_core::wire::RepMsg;

use crate::actor::{Player, PlayerId, PlayerRegistry};

#[derive(Default, Debug)]
pub struct TargetBinding {
    assigned: Option<PlayerId>,
}

impl TargetBinding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign the opposing player and replicate the id.
    pub fn assign(&mut self, id: PlayerId, hub: &mut Hub) {
        self.assigned = Some(id);
        hub.publish(&RepMsg::Target { player: id.0 }.to_frame());
        log::info!("target binding assigned: player {}", id.0);
    }

    #[inline]
    pub fn assigned(&self) -> Option<PlayerId> {
        self.assigned
    }

    /// Resolve the bound player against the registry. Returns `None` (and
    /// logs) when unassigned or when the player is not currently spawned.
    pub fn resolve<'a>(&self, reg: &'a PlayerRegistry) -> Option<&'a Player> {
        let id = self.assigned?;
        let hit = reg.get(id);
        if hit.is_none() {
            log::warn!("target binding: player {} not resolvable yet", id.0);
        }
        hit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn resolves_lazily_after_spawn() {
        let mut hub = Hub::new();
        let rx = hub.subscribe();
        let mut reg = PlayerRegistry::new();
        let mut binding = TargetBinding::new();

        binding.assign(PlayerId(3), &mut hub);
        // Not spawned yet: miss, retried on next use.
        assert!(binding.resolve(&reg).is_none());

        reg.spawn(PlayerId(3), Vec3::ZERO, 100);
        assert!(binding.resolve(&reg).is_some());

        // The assignment was replicated.
        let frames = rx.drain();
        assert_eq!(frames.len(), 1);
        let msg = RepMsg::from_frame(&frames[0]).expect("decode");
        assert_eq!(msg, RepMsg::Target { player: 3 });
    }

    #[test]
    fn unassigned_resolves_to_none() {
        let reg = PlayerRegistry::new();
        let binding = TargetBinding::new();
        assert!(binding.resolve(&reg).is_none());
    }
}
