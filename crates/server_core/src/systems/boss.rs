//! Boss steering helpers: damped facing and target yaw math.

use glam::Vec3;

/// Yaw that would face `from` toward `to` in the XZ plane.
#[inline]
pub fn yaw_to(from: Vec3, to: Vec3) -> f32 {
    let dx = to.x - from.x;
    let dz = to.z - from.z;
    if dx * dx + dz * dz <= 1e-12 {
        return 0.0;
    }
    dx.atan2(dz)
}

/// Exponentially damp `current` yaw toward the yaw facing `to`.
/// `damp_s` is the time constant; small values snap, large values lag.
pub fn face_toward(current: f32, from: Vec3, to: Vec3, damp_s: f32, dt: f32) -> f32 {
    let target = yaw_to(from, to);
    if damp_s <= 1e-4 {
        return target;
    }
    let mut diff = target - current;
    // shortest arc
    while diff > std::f32::consts::PI {
        diff -= std::f32::consts::TAU;
    }
    while diff < -std::f32::consts::PI {
        diff += std::f32::consts::TAU;
    }
    let k = 1.0 - (-dt / damp_s).exp();
    current + diff * k
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec3;

    #[test]
    fn yaw_to_cardinal_directions() {
        assert!((yaw_to(Vec3::ZERO, vec3(0.0, 0.0, 5.0)) - 0.0).abs() < 1e-6);
        assert!((yaw_to(Vec3::ZERO, vec3(5.0, 0.0, 0.0)) - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn damped_facing_converges() {
        let mut yaw = std::f32::consts::PI; // facing -Z
        let target = vec3(0.0, 0.0, 10.0); // requires facing +Z (yaw 0)
        for _ in 0..200 {
            yaw = face_toward(yaw, Vec3::ZERO, target, 0.15, 0.016);
        }
        assert!(yaw.abs() < 1e-2);
    }

    #[test]
    fn zero_damp_snaps() {
        let yaw = face_toward(1.0, Vec3::ZERO, vec3(0.0, 0.0, 1.0), 0.0, 0.016);
        assert!(yaw.abs() < 1e-6);
    }
}
