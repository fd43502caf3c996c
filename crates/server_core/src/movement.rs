//! Movement collaborator seam.
//!
//! The core never steers; it sets a destination and speed, reads velocity,
//! and stops the agent. `DirectSteering` is the headless arena's basic
//! straight-line agent; a navmesh-backed agent would slot in behind the same
//! trait.

use glam::Vec3;

use crate::actor::Transform;

pub trait MoveAgent {
    fn set_speed(&mut self, mps: f32);
    fn set_destination(&mut self, pos: Vec3);
    fn velocity(&self) -> Vec3;
    /// Stop and reset velocity; clears any pending destination.
    fn stop(&mut self);
    /// Advance the owned entity's pose by one tick.
    fn step(&mut self, tr: &mut Transform, dt: f32);
}

/// Straight-line XZ steering toward the current destination.
#[derive(Default, Debug)]
pub struct DirectSteering {
    speed_mps: f32,
    dest: Option<Vec3>,
    vel: Vec3,
}

impl DirectSteering {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MoveAgent for DirectSteering {
    fn set_speed(&mut self, mps: f32) {
        self.speed_mps = mps.max(0.0);
    }

    fn set_destination(&mut self, pos: Vec3) {
        self.dest = Some(pos);
    }

    #[inline]
    fn velocity(&self) -> Vec3 {
        self.vel
    }

    fn stop(&mut self) {
        self.dest = None;
        self.vel = Vec3::ZERO;
    }

    fn step(&mut self, tr: &mut Transform, dt: f32) {
        let Some(dest) = self.dest else {
            self.vel = Vec3::ZERO;
            return;
        };
        let to = Vec3::new(dest.x - tr.pos.x, 0.0, dest.z - tr.pos.z);
        let dist = to.length();
        if dist <= 1e-4 {
            self.vel = Vec3::ZERO;
            return;
        }
        let step = (self.speed_mps * dt).min(dist);
        let dir = to / dist;
        tr.pos += dir * step;
        tr.yaw = dir.x.atan2(dir.z);
        self.vel = if dt > 0.0 { dir * (step / dt) } else { Vec3::ZERO };
    }
}
