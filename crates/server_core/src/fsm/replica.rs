//! Replica-side mirrors.
//!
//! A replica holds the replicated values and a presentation hook, never a
//! behavior object. Applying a message updates bookkeeping and may fire a
//! presentation cue; it can never touch simulation state.

use net_core::apply::ReplicationApply;
use net_core::wire::RepMsg;

use super::StateId;
use crate::presentation::{NullPresentation, PresentationSink};

/// Mirrors the behavior state id for presentation.
pub struct ReplicaMachine {
    state: Option<StateId>,
    hook: Box<dyn PresentationSink>,
}

impl Default for ReplicaMachine {
    fn default() -> Self {
        Self::new(Box::new(NullPresentation))
    }
}

impl ReplicaMachine {
    pub fn new(hook: Box<dyn PresentationSink>) -> Self {
        Self { state: None, hook }
    }

    #[inline]
    pub fn state(&self) -> Option<StateId> {
        self.state
    }
}

impl ReplicationApply for ReplicaMachine {
    fn apply(&mut self, msg: &RepMsg) -> bool {
        let RepMsg::State { id } = *msg else {
            return false;
        };
        let id = StateId(id);
        // Same-id republish still re-fires the cue: the authority re-ran
        // Exit+Enter, and presentation mirrors that.
        self.state = Some(id);
        self.hook.trigger_cue(&format!("state/{}", id.name()));
        true
    }
}

/// Mirrors the skill-pipeline values and the target binding.
#[derive(Default, Debug)]
pub struct SkillMirror {
    pub selected: Option<u8>,
    pub active: bool,
    pub target: Option<u32>,
}

impl ReplicationApply for SkillMirror {
    fn apply(&mut self, msg: &RepMsg) -> bool {
        match *msg {
            RepMsg::SkillIndex { index } => {
                self.selected = Some(index);
                true
            }
            RepMsg::SkillActive { active } => {
                let changed = self.active != active;
                self.active = active;
                changed
            }
            RepMsg::Target { player } => {
                self.target = Some(player);
                true
            }
            RepMsg::State { .. } => false,
        }
    }
}
