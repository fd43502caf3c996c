//! Replicated behavior state machine, authority side.
//!
//! The machine owns an arena of state objects keyed by `StateId` (built once
//! at init) and the currently active entry. Transitions run strictly as
//! Exit(old) -> swap -> publish id -> Enter(new); an unknown id is a silent
//! no-op. Replica machines live in [`replica`] and hold no behavior objects
//! at all, so simulation logic can only ever run here.

mod machine;
pub mod replica;
pub mod states;

pub use machine::{AuthorityMachine, StateRegistry};

use data_runtime::configs::boss::BossCfg;
use net_core::channel::Hub;

use crate::actor::{BossBody, PlayerRegistry};
use crate::binding::TargetBinding;
use crate::movement::MoveAgent;
use crate::presentation::PresentationSink;
use crate::skill::SkillController;

/// Registry key for a behavior variant. Replicated as a single byte.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct StateId(pub u8);

impl StateId {
    pub const WAKE: Self = Self(0);
    pub const IDLE: Self = Self(1);
    pub const CHASE: Self = Self(2);
    pub const ATTACK: Self = Self(3);
    pub const DEATH: Self = Self(4);
    pub const SLEEP: Self = Self(5);

    /// Presentation/logging name; unknown ids render as "unknown".
    pub fn name(self) -> &'static str {
        match self {
            Self::WAKE => "wake",
            Self::IDLE => "idle",
            Self::CHASE => "chase",
            Self::ATTACK => "attack",
            Self::DEATH => "death",
            Self::SLEEP => "sleep",
            _ => "unknown",
        }
    }
}

/// Everything a state may touch during Enter/Tick/Exit, borrowed for the
/// duration of one call. States own no references of their own.
pub struct BossCtx<'a> {
    pub dt: f32,
    /// Authoritative clock, seconds since encounter start.
    pub now: f32,
    pub cfg: &'a BossCfg,
    pub boss: &'a mut BossBody,
    pub players: &'a mut PlayerRegistry,
    pub binding: &'a mut TargetBinding,
    pub skills: &'a mut SkillController,
    pub movement: &'a mut dyn MoveAgent,
    pub fx: &'a mut dyn PresentationSink,
    pub hub: &'a mut Hub,
}

/// One behavior variant. `tick` may request at most one transition; the
/// machine executes it after the call returns (never reentrantly).
pub trait BehaviorState {
    fn enter(&mut self, ctx: &mut BossCtx<'_>);
    fn tick(&mut self, ctx: &mut BossCtx<'_>) -> Option<StateId>;
    fn exit(&mut self, ctx: &mut BossCtx<'_>);
}
