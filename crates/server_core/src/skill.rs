//! Skill selection and the timed execution pipeline.
//!
//! Each cast arms its own phase sequencer: an ordered (deadline, action)
//! list derived from the descriptor: cast cue at 0, indicator at
//! `indicator_s`, effect + damage at `indicator_s + effect_delay_s`, and the
//! busy-flag clear at `busy_s`. One list per cast means a cast's phases can
//! never interleave out of deadline order, but `busy_s` stays an independent
//! field: data that sets it below the phase sum clears the flag before
//! damage lands.
//!
//! Activation is unconditional. Nothing checks whether an earlier execution
//! is still draining; a new cast started mid-drain runs alongside it, and
//! the shared busy flag is set by every activation and cleared by whichever
//! execution's clear deadline fires next.
//!
//! Selection is uniform-random over the descriptor set; no cooldowns, no
//! repeat avoidance. Sequencers are not cancellable: a cast outlives even
//! the caster's death, so phase actions tolerate a stale world.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use data_runtime::specs::skills::SkillSpec;
use net_core::channel::Hub;
use net_core::wire::RepMsg;

use crate::actor::{BossBody, PlayerRegistry};
use crate::combat::{self, Shape};
use crate::presentation::PresentationSink;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Phase {
    Cast,
    Indicator,
    Effect,
    ClearBusy,
}

struct Execution {
    index: usize,
    /// Absolute deadlines, sorted ascending (stable for ties).
    phases: Vec<(f32, Phase)>,
    next: usize,
}

pub struct SkillController {
    specs: Vec<SkillSpec>,
    rng: ChaCha8Rng,
    active: bool,
    selected: Option<usize>,
    execs: Vec<Execution>,
}

impl SkillController {
    pub fn new(specs: Vec<SkillSpec>) -> Self {
        Self::with_specs(specs, rand::thread_rng().gen())
    }

    pub fn with_specs(specs: Vec<SkillSpec>, seed: u64) -> Self {
        Self {
            specs,
            rng: ChaCha8Rng::seed_from_u64(seed),
            active: false,
            selected: None,
            execs: Vec::new(),
        }
    }

    /// Replicated busy flag: true while a cast is in flight.
    #[inline]
    pub fn active(&self) -> bool {
        self.active
    }

    /// Index of the descriptor the most recent cast selected.
    #[inline]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[inline]
    pub fn specs(&self) -> &[SkillSpec] {
        &self.specs
    }

    /// Begin one cast: pick a descriptor, replicate the selection and the
    /// busy flag, arm a sequencer. Unconditional; a cast begun while an
    /// earlier one is still draining runs alongside it. Authority-only by
    /// construction; only the authoritative arena owns a controller.
    pub fn activate(&mut self, now: f32, hub: &mut Hub) {
        if self.specs.is_empty() {
            log::warn!("skill activate with empty descriptor set ignored");
            return;
        }
        let index = self.rng.gen_range(0..self.specs.len());
        let spec = &self.specs[index];

        hub.publish(
            &RepMsg::SkillIndex {
                index: index as u8,
            }
            .to_frame(),
        );
        self.active = true;
        hub.publish(&RepMsg::SkillActive { active: true }.to_frame());

        let mut phases = vec![
            (now, Phase::Cast),
            (now + spec.indicator_s, Phase::Indicator),
            (now + spec.indicator_s + spec.effect_delay_s, Phase::Effect),
            (now + spec.busy_s, Phase::ClearBusy),
        ];
        phases.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        self.selected = Some(index);
        self.execs.push(Execution {
            index,
            phases,
            next: 0,
        });
        log::info!("skill cast started: {} (index {index})", spec.name);
        metrics::counter!("skill.casts_total").increment(1);
    }

    /// Fire every due phase of every in-flight execution, each execution in
    /// its own deadline order (oldest cast first). Called once per
    /// authoritative tick.
    pub fn tick(
        &mut self,
        now: f32,
        boss: &BossBody,
        players: &mut PlayerRegistry,
        fx: &mut dyn PresentationSink,
        hub: &mut Hub,
    ) {
        let Self {
            specs,
            active,
            execs,
            ..
        } = self;
        for exec in execs.iter_mut() {
            let spec = &specs[exec.index];
            while exec.next < exec.phases.len() && exec.phases[exec.next].0 <= now {
                let (_, phase) = exec.phases[exec.next];
                exec.next += 1;
                match phase {
                    Phase::Cast => fx.trigger_cue("skill/cast"),
                    Phase::Indicator => fx.trigger_cue("skill/indicator"),
                    Phase::Effect => {
                        fx.trigger_cue("skill/effect");
                        let origin = boss.tr.pos;
                        let forward = boss.tr.forward();
                        let shape = Shape::from_spec(spec);
                        let hits = combat::resolve(
                            origin,
                            forward,
                            shape,
                            spec.coeff,
                            boss.attack_power,
                            players,
                        );
                        log::debug!("skill {} effect hit {} target(s)", spec.name, hits.len());
                    }
                    Phase::ClearBusy => {
                        *active = false;
                        hub.publish(&RepMsg::SkillActive { active: false }.to_frame());
                    }
                }
            }
        }
        execs.retain(|e| e.next < e.phases.len());
    }
}
