//! Uniform XZ grid for broad-phase area queries over the player registry.

use std::collections::HashMap;

use glam::Vec2;

use crate::actor::{PlayerId, PlayerRegistry};

pub struct SpatialGrid {
    cell: f32,
    buckets: HashMap<(i32, i32), Vec<PlayerId>>,
}

impl Default for SpatialGrid {
    fn default() -> Self {
        Self {
            cell: 4.0, // meters per cell
            buckets: HashMap::new(),
        }
    }
}

impl SpatialGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rebuild(&mut self, players: &PlayerRegistry) {
        self.buckets.clear();
        for p in players.iter() {
            let key = self.key(p.tr.pos.x, p.tr.pos.z);
            self.buckets.entry(key).or_default().push(p.id);
        }
    }

    fn key(&self, x: f32, z: f32) -> (i32, i32) {
        let cx = (x / self.cell).floor() as i32;
        let cz = (z / self.cell).floor() as i32;
        (cx, cz)
    }

    /// Candidates within `r` of `center`, by bucket overlap. Over-approximate:
    /// callers apply the exact shape filter afterwards.
    pub fn query_circle(&self, center: Vec2, r: f32) -> Vec<PlayerId> {
        let cr = (r / self.cell).ceil() as i32;
        let (cx, cz) = (
            (center.x / self.cell).floor() as i32,
            (center.y / self.cell).floor() as i32,
        );
        let mut out = Vec::new();
        for dx in -cr..=cr {
            for dz in -cr..=cr {
                if let Some(v) = self.buckets.get(&(cx + dx, cz + dz)) {
                    out.extend_from_slice(v);
                }
            }
        }
        out
    }
}
