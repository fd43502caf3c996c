//! Damage resolver shape filters at their boundary values.

use glam::{vec3, Vec3};
use server_core::combat::{resolve, Shape};
use server_core::{PlayerId, PlayerRegistry};

fn players(at: &[(u32, Vec3)]) -> PlayerRegistry {
    let mut reg = PlayerRegistry::new();
    for &(id, pos) in at {
        reg.spawn(PlayerId(id), pos, 100);
    }
    reg
}

#[test]
fn annulus_outer5_inner1() {
    let mut reg = players(&[
        (1, vec3(0.0, 0.0, 3.0)), // in ring
        (2, vec3(0.5, 0.0, 0.0)), // inside hole
        (3, vec3(6.0, 0.0, 0.0)), // past outer
    ]);
    let hits = resolve(
        Vec3::ZERO,
        Vec3::Z,
        Shape::Annulus { inner: 1.0, outer: 5.0 },
        1.0,
        12,
        &mut reg,
    );
    assert_eq!(hits, vec![PlayerId(1)]);
    assert_eq!(reg.get(PlayerId(1)).unwrap().hp.hp, 88);
    assert_eq!(reg.get(PlayerId(2)).unwrap().hp.hp, 100);
    assert_eq!(reg.get(PlayerId(3)).unwrap().hp.hp, 100);
}

#[test]
fn sector_half_angle_90_front_vs_back() {
    let mut reg = players(&[
        (1, vec3(0.0, 0.0, 3.0)),  // angle 0, directly ahead
        (2, vec3(0.0, 0.0, -3.0)), // angle 180, directly behind
    ]);
    let hits = resolve(
        Vec3::ZERO,
        Vec3::Z,
        Shape::Sector { radius: 5.0, half_angle_deg: 90.0 },
        1.0,
        12,
        &mut reg,
    );
    assert_eq!(hits, vec![PlayerId(1)]);
}

#[test]
fn coefficient_scales_source_power() {
    let mut reg = players(&[(1, vec3(0.0, 0.0, 1.0))]);
    resolve(
        Vec3::ZERO,
        Vec3::Z,
        Shape::Sphere { radius: 2.0 },
        1.5,
        10,
        &mut reg,
    );
    assert_eq!(reg.get(PlayerId(1)).unwrap().hp.hp, 85);
}
