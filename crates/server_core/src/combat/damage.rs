//! Shape-filtered damage application.
//!
//! Pure query + capability dispatch: collect candidates inside the shape's
//! bounding radius, filter by the exact shape, then apply
//! `round(power * coeff)` to each survivor through `Damageable`. Casters are
//! never mutated, and repeated calls do not deduplicate: a target inside two
//! overlapping resolves takes damage twice.

use glam::{Vec2, Vec3};

use data_runtime::specs::skills::{ShapeKind, SkillSpec};

use crate::actor::{Damageable, PlayerId, PlayerRegistry};
use crate::combat::spatial::SpatialGrid;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Shape {
    /// Full ball; 3D center distance.
    Sphere { radius: f32 },
    /// Ring in the horizontal plane; vertical offset ignored.
    Annulus { inner: f32, outer: f32 },
    /// Forward cone; 3D angle measured against the caster's facing.
    Sector { radius: f32, half_angle_deg: f32 },
}

impl Shape {
    /// Everything a shape can touch lies within this radius of the origin.
    #[inline]
    pub fn bounding_radius(&self) -> f32 {
        match *self {
            Shape::Sphere { radius } | Shape::Sector { radius, .. } => radius,
            Shape::Annulus { outer, .. } => outer,
        }
    }

    pub fn from_spec(spec: &SkillSpec) -> Self {
        match spec.shape {
            ShapeKind::Sphere => Shape::Sphere {
                radius: spec.radius_m,
            },
            ShapeKind::Annulus => Shape::Annulus {
                inner: spec.inner_radius_m,
                outer: spec.radius_m,
            },
            ShapeKind::Sector => Shape::Sector {
                radius: spec.radius_m,
                half_angle_deg: spec.arc_deg * 0.5,
            },
        }
    }

    /// Exact filter. `forward` only matters for sectors.
    fn contains(&self, origin: Vec3, forward: Vec3, target: Vec3) -> bool {
        match *self {
            Shape::Sphere { radius } => (target - origin).length() <= radius,
            Shape::Annulus { inner, outer } => {
                let d = Vec2::new(target.x - origin.x, target.z - origin.z).length();
                d >= inner && d <= outer
            }
            Shape::Sector {
                radius,
                half_angle_deg,
            } => {
                let to = target - origin;
                let dist = to.length();
                if dist > radius {
                    return false;
                }
                if dist <= 1e-4 {
                    // target on top of the caster counts as in front
                    return true;
                }
                let fwd = forward.normalize_or_zero();
                let cos = fwd.dot(to / dist).clamp(-1.0, 1.0);
                cos.acos().to_degrees() <= half_angle_deg
            }
        }
    }
}

/// Resolve one area hit: returns the affected player ids after applying
/// damage to each. `power` is the caster's current attack value.
pub fn resolve(
    origin: Vec3,
    forward: Vec3,
    shape: Shape,
    coeff: f32,
    power: i32,
    players: &mut PlayerRegistry,
) -> Vec<PlayerId> {
    let mut grid = SpatialGrid::new();
    grid.rebuild(players);
    let candidates = grid.query_circle(Vec2::new(origin.x, origin.z), shape.bounding_radius());

    let amount = ((power as f32) * coeff).round().max(0.0) as i32;
    let mut hit = Vec::new();
    for id in candidates {
        let Some(p) = players.get_mut(id) else {
            continue;
        };
        if !p.hp.alive() {
            continue;
        }
        if !shape.contains(origin, forward, p.tr.pos) {
            continue;
        }
        p.apply_damage(amount);
        hit.push(id);
    }
    if !hit.is_empty() {
        metrics::counter!("combat.area_hits_total").increment(hit.len() as u64);
    }
    hit
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec3;

    fn reg_with(positions: &[(u32, Vec3)]) -> PlayerRegistry {
        let mut reg = PlayerRegistry::new();
        for &(id, pos) in positions {
            reg.spawn(PlayerId(id), pos, 100);
        }
        reg
    }

    #[test]
    fn annulus_excludes_too_close_and_too_far() {
        let mut reg = reg_with(&[
            (1, vec3(3.0, 0.0, 0.0)),  // in ring
            (2, vec3(0.5, 0.0, 0.0)),  // inside the hole
            (3, vec3(6.0, 0.0, 0.0)),  // beyond outer
        ]);
        let hits = resolve(
            Vec3::ZERO,
            Vec3::Z,
            Shape::Annulus { inner: 1.0, outer: 5.0 },
            1.0,
            10,
            &mut reg,
        );
        assert_eq!(hits, vec![PlayerId(1)]);
        assert_eq!(reg.get(PlayerId(1)).unwrap().hp.hp, 90);
        assert_eq!(reg.get(PlayerId(2)).unwrap().hp.hp, 100);
        assert_eq!(reg.get(PlayerId(3)).unwrap().hp.hp, 100);
    }

    #[test]
    fn annulus_ignores_vertical_offset() {
        let mut reg = reg_with(&[(1, vec3(3.0, 5.0, 0.0))]);
        let hits = resolve(
            Vec3::ZERO,
            Vec3::Z,
            Shape::Annulus { inner: 1.0, outer: 5.0 },
            1.0,
            10,
            &mut reg,
        );
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn sector_hits_front_not_back() {
        let mut reg = reg_with(&[
            (1, vec3(0.0, 0.0, 3.0)),  // directly ahead (forward = +Z)
            (2, vec3(0.0, 0.0, -3.0)), // directly behind
        ]);
        let hits = resolve(
            Vec3::ZERO,
            Vec3::Z,
            Shape::Sector { radius: 5.0, half_angle_deg: 90.0 },
            1.0,
            10,
            &mut reg,
        );
        assert_eq!(hits, vec![PlayerId(1)]);
    }

    #[test]
    fn sphere_uses_full_3d_distance() {
        let mut reg = reg_with(&[
            (1, vec3(0.0, 4.0, 0.0)),
            (2, vec3(0.0, 6.0, 0.0)),
        ]);
        let mut hits = resolve(
            Vec3::ZERO,
            Vec3::Z,
            Shape::Sphere { radius: 5.0 },
            2.0,
            10,
            &mut reg,
        );
        hits.sort_by_key(|id| id.0);
        assert_eq!(hits, vec![PlayerId(1)]);
        assert_eq!(reg.get(PlayerId(1)).unwrap().hp.hp, 80);
    }

    #[test]
    fn repeated_resolves_double_hit() {
        let mut reg = reg_with(&[(1, vec3(1.0, 0.0, 0.0))]);
        for _ in 0..2 {
            resolve(
                Vec3::ZERO,
                Vec3::Z,
                Shape::Sphere { radius: 2.0 },
                1.0,
                10,
                &mut reg,
            );
        }
        assert_eq!(reg.get(PlayerId(1)).unwrap().hp.hp, 80);
    }
}
