//! Authoritative boss combat core.
//!
//! One simulation owner (the authority) drives the boss's behavior state
//! machine and skill pipeline; replicas only mirror the replicated values for
//! presentation. Movement and animation are collaborator seams (`MoveAgent`,
//! `PresentationSink`); the replication channel comes from `net_core`.

pub mod actor;
pub mod binding;
pub mod combat;
pub mod fsm;
pub mod movement;
pub mod presentation;
pub mod skill;
pub mod systems;
pub mod tick;

pub use actor::{BossBody, Damageable, Health, Player, PlayerId, PlayerRegistry, Team, Transform};
pub use fsm::{AuthorityMachine, BehaviorState, BossCtx, StateId, StateRegistry};
pub use tick::ArenaServer;
