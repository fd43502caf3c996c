//! Skill descriptor database.
//!
//! Static per-ability data: phase timings, damage coefficient, and the area
//! shape parameters the damage resolver filters on. Loaded from
//! `data/config/skills.toml`; embedded defaults cover all three shapes.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Which area filter a skill's damage phase uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Full ball, 3D center distance.
    Sphere,
    /// Ring in the horizontal plane; vertical offset ignored.
    Annulus,
    /// Forward cone, 3D angle against the caster's facing.
    Sector,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillSpec {
    pub name: String,
    /// Delay from cast start until the ground indicator shows.
    pub indicator_s: f32,
    /// Further delay from indicator until the effect fires and damage lands.
    pub effect_delay_s: f32,
    /// How long the busy flag stays set. Independent of the phase sum; a
    /// descriptor may clear the flag before (or long after) damage resolves.
    pub busy_s: f32,
    /// Damage = round(caster attack power * coeff).
    pub coeff: f32,
    pub shape: ShapeKind,
    pub radius_m: f32,
    /// Annulus only: targets closer than this are excluded.
    #[serde(default)]
    pub inner_radius_m: f32,
    /// Sector only: full arc in degrees (half-angle is arc/2).
    #[serde(default)]
    pub arc_deg: f32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillSpecDb {
    pub skills: Vec<SkillSpec>,
}

impl SkillSpecDb {
    pub fn load_default() -> Result<Self> {
        let path = crate::data_root().join("config/skills.toml");
        if path.is_file() {
            let txt = std::fs::read_to_string(&path)
                .with_context(|| format!("read {}", path.display()))?;
            let db: Self = toml::from_str(&txt).context("parse skills TOML")?;
            Ok(db)
        } else {
            Ok(Self::builtin())
        }
    }

    /// Embedded default set: one descriptor per shape.
    pub fn builtin() -> Self {
        Self {
            skills: vec![
                SkillSpec {
                    name: "abyssal-cleave".to_string(),
                    indicator_s: 0.8,
                    effect_delay_s: 0.5,
                    busy_s: 2.0,
                    coeff: 1.5,
                    shape: ShapeKind::Sector,
                    radius_m: 6.0,
                    inner_radius_m: 0.0,
                    arc_deg: 120.0,
                },
                SkillSpec {
                    name: "tide-ring".to_string(),
                    indicator_s: 1.0,
                    effect_delay_s: 0.6,
                    busy_s: 2.4,
                    coeff: 1.2,
                    shape: ShapeKind::Annulus,
                    radius_m: 7.0,
                    inner_radius_m: 2.0,
                    arc_deg: 0.0,
                },
                SkillSpec {
                    name: "drowning-nova".to_string(),
                    indicator_s: 1.2,
                    effect_delay_s: 0.4,
                    busy_s: 2.2,
                    coeff: 1.0,
                    shape: ShapeKind::Sphere,
                    radius_m: 5.0,
                    inner_radius_m: 0.0,
                    arc_deg: 0.0,
                },
            ],
        }
    }
}
