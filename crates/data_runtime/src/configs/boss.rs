//! Boss tuning configuration loader.
//!
//! Parses `data/config/boss.toml` into the structured config that seeds the
//! boss entity and its behavior states on spawn. Keep this crate free of
//! simulation types; the server core converts as needed.

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct BossCfg {
    pub name: String,
    pub hp: i32,
    #[serde(default = "default_radius")]
    pub radius_m: f32,
    /// Flat power fed through each skill's damage coefficient.
    pub attack_power: i32,
    /// Players beyond this range pull the boss into Chase.
    pub detection_range_m: f32,
    /// Minimum time in Idle before an in-range target triggers Attack.
    #[serde(default = "default_dwell")]
    pub idle_dwell_s: f32,
    /// Wake animation length; Wake holds until this elapses.
    #[serde(default = "default_wake")]
    pub wake_duration_s: f32,
    pub chase_speed_mps: f32,
    /// Damp time for turning toward the target while idle.
    #[serde(default = "default_yaw_damp")]
    pub yaw_damp_s: f32,
}

fn default_radius() -> f32 {
    1.2
}
fn default_dwell() -> f32 {
    1.0
}
fn default_wake() -> f32 {
    2.2
}
fn default_yaw_damp() -> f32 {
    0.15
}

impl Default for BossCfg {
    fn default() -> Self {
        Self {
            name: "Varkun, Maw of the Abyss".to_string(),
            hp: 1800,
            radius_m: default_radius(),
            attack_power: 24,
            detection_range_m: 10.0,
            idle_dwell_s: default_dwell(),
            wake_duration_s: default_wake(),
            chase_speed_mps: 3.4,
            yaw_damp_s: default_yaw_damp(),
        }
    }
}

impl BossCfg {
    pub fn load_default() -> Result<Self> {
        let path = crate::data_root().join("config/boss.toml");
        if path.is_file() {
            let txt = std::fs::read_to_string(&path)
                .with_context(|| format!("read {}", path.display()))?;
            let cfg: Self = toml::from_str(&txt).context("parse boss TOML")?;
            Ok(cfg)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_with_sane_ranges() {
        let cfg = BossCfg::load_default().expect("load");
        assert!(cfg.hp > 0);
        assert!(cfg.detection_range_m > 0.0);
        assert!(cfg.idle_dwell_s > 0.0);
        assert!(cfg.chase_speed_mps > 0.0);
    }
}
