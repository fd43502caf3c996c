//! State registry and the authority-side machine.

use net_core::wire::RepMsg;

use super::{BehaviorState, BossCtx, StateId};

/// Fixed id -> state mapping, built once at entity init and immutable after.
#[derive(Default)]
pub struct StateRegistry {
    entries: Vec<(StateId, Box<dyn BehaviorState>)>,
}

impl StateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry. Duplicate ids are rejected (first registration wins).
    pub fn register(&mut self, id: StateId, state: Box<dyn BehaviorState>) -> bool {
        if self.lookup(id).is_some() {
            log::warn!("state registry: duplicate id {} ignored", id.0);
            return false;
        }
        self.entries.push((id, state));
        true
    }

    #[inline]
    pub fn lookup(&self, id: StateId) -> Option<usize> {
        self.entries.iter().position(|(sid, _)| *sid == id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The authoritative machine: current id (replicated on change) plus the
/// local state pointer derived from it via the registry.
pub struct AuthorityMachine {
    registry: StateRegistry,
    current: Option<usize>,
    current_id: Option<StateId>,
}

impl AuthorityMachine {
    pub fn new(registry: StateRegistry) -> Self {
        Self {
            registry,
            current: None,
            current_id: None,
        }
    }

    #[inline]
    pub fn current_id(&self) -> Option<StateId> {
        self.current_id
    }

    /// Execute a transition. Unknown ids are ignored; re-requesting the
    /// current id re-runs Exit+Enter (not special-cased). Returns whether
    /// the transition ran.
    pub fn request_transition(&mut self, id: StateId, ctx: &mut BossCtx<'_>) -> bool {
        let Some(next) = self.registry.lookup(id) else {
            log::debug!("transition to unknown state id {} ignored", id.0);
            return false;
        };
        if let Some(cur) = self.current {
            self.registry.entries[cur].1.exit(ctx);
        }
        let from = self.current_id;
        self.current = Some(next);
        self.current_id = Some(id);
        // Publish after the swap so replicas can never observe the new id
        // while the authority still runs the old state.
        ctx.hub.publish(&RepMsg::State { id: id.0 }.to_frame());
        self.registry.entries[next].1.enter(ctx);
        log::info!(
            "boss state: {} -> {}",
            from.map_or("none", StateId::name),
            id.name()
        );
        metrics::counter!("fsm.transitions_total").increment(1);
        true
    }

    /// Tick the active state; execute at most one requested transition, after
    /// the state's own tick has fully returned.
    pub fn tick(&mut self, ctx: &mut BossCtx<'_>) {
        let Some(cur) = self.current else {
            return;
        };
        if let Some(next) = self.registry.entries[cur].1.tick(ctx) {
            self.request_transition(next, ctx);
        }
    }
}
