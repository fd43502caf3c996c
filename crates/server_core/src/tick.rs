//! Fixed-order authoritative tick: requests -> machine -> skill phases ->
//! movement -> death check.
//!
//! One `ArenaServer` is the single authority for one encounter. Replicas
//! subscribe through [`ArenaServer::subscribe`] and drain on their own loop;
//! nothing here ever blocks on them.

use std::time::Instant;

use glam::Vec3;

use data_runtime::configs::boss::BossCfg;
use data_runtime::specs::skills::SkillSpec;
use net_core::channel::{Hub, Rx};

use crate::actor::{BossBody, Health, PlayerId, PlayerRegistry, Transform};
use crate::binding::TargetBinding;
use crate::fsm::states::standard_registry;
use crate::fsm::{AuthorityMachine, BossCtx, StateId};
use crate::movement::{DirectSteering, MoveAgent};
use crate::presentation::{NullPresentation, PresentationSink};
use crate::skill::SkillController;

pub struct ArenaServer {
    cfg: BossCfg,
    pub boss: BossBody,
    pub players: PlayerRegistry,
    binding: TargetBinding,
    machine: AuthorityMachine,
    skills: SkillController,
    movement: Box<dyn MoveAgent>,
    fx: Box<dyn PresentationSink>,
    hub: Hub,
    time_s: f32,
    pending: Vec<StateId>,
}

impl ArenaServer {
    pub fn new(cfg: BossCfg, skills: Vec<SkillSpec>, seed: u64) -> Self {
        let boss = BossBody {
            tr: Transform {
                pos: Vec3::ZERO,
                yaw: 0.0,
                radius: cfg.radius_m,
            },
            hp: Health::new(cfg.hp),
            attack_power: cfg.attack_power,
        };
        log::info!(
            "arena: boss '{}' ready (hp={}, detect={}m, {} skills)",
            cfg.name,
            cfg.hp,
            cfg.detection_range_m,
            skills.len()
        );
        Self {
            cfg,
            boss,
            players: PlayerRegistry::new(),
            binding: TargetBinding::new(),
            machine: AuthorityMachine::new(standard_registry()),
            skills: SkillController::with_specs(skills, seed),
            movement: Box::new(DirectSteering::new()),
            fx: Box::new(NullPresentation),
            hub: Hub::new(),
            time_s: 0.0,
            pending: Vec::new(),
        }
    }

    /// Swap the presentation sink (tests install a recorder).
    pub fn set_presentation(&mut self, fx: Box<dyn PresentationSink>) {
        self.fx = fx;
    }

    /// Register a replica endpoint.
    pub fn subscribe(&mut self) -> Rx {
        self.hub.subscribe()
    }

    pub fn spawn_player(&mut self, id: PlayerId, pos: Vec3, hp: i32) -> PlayerId {
        self.players.spawn(id, pos, hp)
    }

    pub fn despawn_player(&mut self, id: PlayerId) -> bool {
        self.players.despawn(id)
    }

    /// Bind the boss to its opposing player and replicate the assignment.
    pub fn assign_target(&mut self, id: PlayerId) {
        self.binding.assign(id, &mut self.hub);
    }

    /// External transition entry point. Executed at the start of the next
    /// authoritative tick; this server *is* the authority, so nothing is
    /// dropped here (replicas simply have no such entry point).
    pub fn request_state(&mut self, id: StateId) {
        self.pending.push(id);
    }

    /// Put the machine into its initial state. Call once after setup.
    pub fn begin(&mut self) {
        self.request_state(StateId::WAKE);
    }

    #[inline]
    pub fn time(&self) -> f32 {
        self.time_s
    }

    #[inline]
    pub fn state_id(&self) -> Option<StateId> {
        self.machine.current_id()
    }

    #[inline]
    pub fn skill_active(&self) -> bool {
        self.skills.active()
    }

    #[inline]
    pub fn selected_skill(&self) -> Option<usize> {
        self.skills.selected()
    }

    /// Damage the boss through its damageable capability.
    pub fn damage_boss(&mut self, amount: i32) {
        use crate::actor::Damageable;
        self.boss.apply_damage(amount);
    }

    /// One authoritative frame.
    pub fn tick(&mut self, dt: f32) {
        let t0 = Instant::now();
        self.time_s += dt;

        {
            let mut ctx = BossCtx {
                dt,
                now: self.time_s,
                cfg: &self.cfg,
                boss: &mut self.boss,
                players: &mut self.players,
                binding: &mut self.binding,
                skills: &mut self.skills,
                movement: &mut *self.movement,
                fx: &mut *self.fx,
                hub: &mut self.hub,
            };
            // Death preempts everything, including queued requests.
            if !ctx.boss.hp.alive() && self.machine.current_id() != Some(StateId::DEATH) {
                self.pending.clear();
                self.machine.request_transition(StateId::DEATH, &mut ctx);
            }
            for id in self.pending.drain(..) {
                self.machine.request_transition(id, &mut ctx);
            }
            self.machine.tick(&mut ctx);
        }

        // Phase sequencer runs even after Death: casts are not cancellable.
        self.skills.tick(
            self.time_s,
            &self.boss,
            &mut self.players,
            &mut *self.fx,
            &mut self.hub,
        );

        self.movement.step(&mut self.boss.tr, dt);

        let ms = t0.elapsed().as_secs_f64() * 1000.0;
        metrics::histogram!("tick.ms").record(ms);
    }
}
