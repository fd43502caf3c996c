//! The six behavior states.
//!
//! All of this runs on the authority only; replicas never construct these
//! objects. Distances are horizontal (XZ), matching the arena's flat floor.

use super::{BehaviorState, BossCtx, StateId};
use crate::systems::boss as steer;

/// Initial state: hold for the wake animation, then settle into Idle.
#[derive(Default)]
pub struct Wake {
    started_at: f32,
}

impl BehaviorState for Wake {
    fn enter(&mut self, ctx: &mut BossCtx<'_>) {
        ctx.fx.trigger_cue("boss/wake");
        self.started_at = ctx.now;
    }

    fn tick(&mut self, ctx: &mut BossCtx<'_>) -> Option<StateId> {
        (ctx.now - self.started_at >= ctx.cfg.wake_duration_s).then_some(StateId::IDLE)
    }

    fn exit(&mut self, _ctx: &mut BossCtx<'_>) {}
}

/// Face the target; chase it if it leaves detection range, attack after the
/// dwell if it stays in range. First satisfied condition wins, in that order.
#[derive(Default)]
pub struct Idle {
    entered_at: f32,
}

impl BehaviorState for Idle {
    fn enter(&mut self, ctx: &mut BossCtx<'_>) {
        self.entered_at = ctx.now;
    }

    fn tick(&mut self, ctx: &mut BossCtx<'_>) -> Option<StateId> {
        let Some(target) = ctx.binding.resolve(ctx.players) else {
            // Unresolved target: skip this tick, retry next.
            return None;
        };
        let target_pos = target.tr.pos;
        ctx.boss.tr.yaw = steer::face_toward(
            ctx.boss.tr.yaw,
            ctx.boss.tr.pos,
            target_pos,
            ctx.cfg.yaw_damp_s,
            ctx.dt,
        );
        let dist = ctx.boss.tr.distance_xz(target_pos);
        if dist > ctx.cfg.detection_range_m {
            return Some(StateId::CHASE);
        }
        if ctx.now - self.entered_at >= ctx.cfg.idle_dwell_s {
            return Some(StateId::ATTACK);
        }
        None
    }

    fn exit(&mut self, _ctx: &mut BossCtx<'_>) {}
}

/// Run the target down until it is back inside detection range.
#[derive(Default)]
pub struct Chase;

impl BehaviorState for Chase {
    fn enter(&mut self, ctx: &mut BossCtx<'_>) {
        ctx.movement.set_speed(ctx.cfg.chase_speed_mps);
        ctx.fx.set_param("move-speed", ctx.cfg.chase_speed_mps, 0.1);
        if let Some(target) = ctx.binding.resolve(ctx.players) {
            let pos = target.tr.pos;
            ctx.movement.set_destination(pos);
        }
    }

    fn tick(&mut self, ctx: &mut BossCtx<'_>) -> Option<StateId> {
        let Some(target) = ctx.binding.resolve(ctx.players) else {
            return None;
        };
        let target_pos = target.tr.pos;
        if ctx.boss.tr.distance_xz(target_pos) <= ctx.cfg.detection_range_m {
            return Some(StateId::IDLE);
        }
        // Re-steer every tick; the target moves.
        ctx.movement.set_destination(target_pos);
        None
    }

    fn exit(&mut self, ctx: &mut BossCtx<'_>) {
        // Snap the pose at the handoff: the stop pins position where the
        // last step left it (no residual sliding) and facing snaps to the
        // target.
        ctx.movement.stop();
        ctx.fx.set_param("move-speed", 0.0, 0.0);
        if let Some(target) = ctx.binding.resolve(ctx.players) {
            let pos = target.tr.pos;
            ctx.boss.tr.yaw = steer::yaw_to(ctx.boss.tr.pos, pos);
        }
    }
}

/// Kick the skill pipeline, then wait for the busy flag to clear.
#[derive(Default)]
pub struct Attack;

impl BehaviorState for Attack {
    fn enter(&mut self, ctx: &mut BossCtx<'_>) {
        ctx.skills.activate(ctx.now, ctx.hub);
    }

    fn tick(&mut self, ctx: &mut BossCtx<'_>) -> Option<StateId> {
        (!ctx.skills.active()).then_some(StateId::IDLE)
    }

    fn exit(&mut self, _ctx: &mut BossCtx<'_>) {}
}

/// Terminal: one presentation cue, then nothing, forever.
#[derive(Default)]
pub struct Death;

impl BehaviorState for Death {
    fn enter(&mut self, ctx: &mut BossCtx<'_>) {
        ctx.movement.stop();
        ctx.fx.trigger_cue("boss/death");
        log::info!("boss died at t={:.2}s", ctx.now);
    }

    fn tick(&mut self, _ctx: &mut BossCtx<'_>) -> Option<StateId> {
        None
    }

    fn exit(&mut self, _ctx: &mut BossCtx<'_>) {}
}

/// Registered but fully inert; reachable only by external request.
#[derive(Default)]
pub struct Sleep;

impl BehaviorState for Sleep {
    fn enter(&mut self, _ctx: &mut BossCtx<'_>) {}
    fn tick(&mut self, _ctx: &mut BossCtx<'_>) -> Option<StateId> {
        None
    }
    fn exit(&mut self, _ctx: &mut BossCtx<'_>) {}
}

/// The standard behavior graph: all six states under their well-known ids.
pub fn standard_registry() -> super::StateRegistry {
    let mut reg = super::StateRegistry::new();
    reg.register(StateId::WAKE, Box::<Wake>::default());
    reg.register(StateId::IDLE, Box::<Idle>::default());
    reg.register(StateId::CHASE, Box::<Chase>::default());
    reg.register(StateId::ATTACK, Box::<Attack>::default());
    reg.register(StateId::DEATH, Box::<Death>::default());
    reg.register(StateId::SLEEP, Box::<Sleep>::default());
    reg
}
