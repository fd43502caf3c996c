//! Authoritative actor types and the player registry.

use std::collections::HashMap;

use glam::Vec3;

/// Assigned player identifier; also the replicated target-binding value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PlayerId(pub u32);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Team {
    Players,
    Abyssal,
    Neutral,
}

#[derive(Copy, Clone, Debug)]
pub struct Health {
    pub hp: i32,
    pub max: i32,
}

impl Health {
    #[inline]
    pub fn new(max: i32) -> Self {
        Self { hp: max, max }
    }
    #[inline]
    pub fn alive(&self) -> bool {
        self.hp > 0
    }
}

#[derive(Copy, Clone, Debug)]
pub struct Transform {
    pub pos: Vec3,
    pub yaw: f32,
    pub radius: f32,
}

impl Transform {
    /// Horizontal (XZ) distance to another position; Y offset ignored.
    #[inline]
    pub fn distance_xz(&self, to: Vec3) -> f32 {
        let dx = to.x - self.pos.x;
        let dz = to.z - self.pos.z;
        (dx * dx + dz * dz).sqrt()
    }

    /// Unit forward vector derived from yaw (yaw 0 faces +Z).
    #[inline]
    pub fn forward(&self) -> Vec3 {
        Vec3::new(self.yaw.sin(), 0.0, self.yaw.cos())
    }
}

/// Capability exposed by anything that can take damage. The entity clamps its
/// own health at zero; callers never pass a negative amount.
pub trait Damageable {
    fn apply_damage(&mut self, amount: i32);
}

#[derive(Copy, Clone, Debug)]
pub struct Player {
    pub id: PlayerId,
    pub team: Team,
    pub tr: Transform,
    pub hp: Health,
}

impl Damageable for Player {
    fn apply_damage(&mut self, amount: i32) {
        self.hp.hp = (self.hp.hp - amount.max(0)).max(0);
    }
}

/// The boss's own body: pose, health, and the flat power fed through each
/// skill's damage coefficient.
#[derive(Copy, Clone, Debug)]
pub struct BossBody {
    pub tr: Transform,
    pub hp: Health,
    pub attack_power: i32,
}

impl Damageable for BossBody {
    fn apply_damage(&mut self, amount: i32) {
        self.hp.hp = (self.hp.hp - amount.max(0)).max(0);
    }
}

/// Players keyed by assigned id, populated at spawn/despawn time. O(1)
/// lookup replaces scanning every spawned entity by tag/role/owner.
#[derive(Default, Debug)]
pub struct PlayerRegistry {
    map: HashMap<PlayerId, Player>,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, id: PlayerId, pos: Vec3, hp: i32) -> PlayerId {
        let player = Player {
            id,
            team: Team::Players,
            tr: Transform {
                pos,
                yaw: 0.0,
                radius: 0.7,
            },
            hp: Health::new(hp),
        };
        if self.map.insert(id, player).is_some() {
            log::warn!("player {} respawned over an existing entry", id.0);
        }
        id
    }

    pub fn despawn(&mut self, id: PlayerId) -> bool {
        self.map.remove(&id).is_some()
    }

    #[inline]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.map.get(&id)
    }

    #[inline]
    pub fn get_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.map.get_mut(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.map.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.map.values_mut()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_clamps_at_zero() {
        let mut reg = PlayerRegistry::new();
        let id = reg.spawn(PlayerId(1), Vec3::ZERO, 30);
        let p = reg.get_mut(id).unwrap();
        p.apply_damage(50);
        assert_eq!(p.hp.hp, 0);
        assert!(!p.hp.alive());
        // negative amounts are treated as zero
        p.apply_damage(-10);
        assert_eq!(p.hp.hp, 0);
    }

    #[test]
    fn registry_spawn_lookup_despawn() {
        let mut reg = PlayerRegistry::new();
        reg.spawn(PlayerId(7), Vec3::new(1.0, 0.0, 2.0), 100);
        assert!(reg.get(PlayerId(7)).is_some());
        assert!(reg.get(PlayerId(8)).is_none());
        assert!(reg.despawn(PlayerId(7)));
        assert!(!reg.despawn(PlayerId(7)));
        assert!(reg.is_empty());
    }

    #[test]
    fn forward_matches_yaw() {
        let tr = Transform {
            pos: Vec3::ZERO,
            yaw: 0.0,
            radius: 1.0,
        };
        assert!((tr.forward() - Vec3::Z).length() < 1e-6);
        let tr = Transform {
            pos: Vec3::ZERO,
            yaw: std::f32::consts::FRAC_PI_2,
            radius: 1.0,
        };
        assert!((tr.forward() - Vec3::X).length() < 1e-6);
    }
}
