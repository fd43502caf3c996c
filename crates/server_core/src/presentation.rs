//! Presentation/animation collaborator seam.
//!
//! Fire-and-forget: cues and damped parameters go out by identifier, nothing
//! comes back. The core never depends on a cue having played.

pub trait PresentationSink {
    /// Trigger a one-shot cue (animation trigger, vfx, bark) by identifier.
    fn trigger_cue(&mut self, cue: &str);
    /// Drive a continuous parameter toward `target` over `damp_s`.
    fn set_param(&mut self, param: &str, target: f32, damp_s: f32);
}

/// Drops everything; the default for headless runs.
#[derive(Default, Debug)]
pub struct NullPresentation;

impl PresentationSink for NullPresentation {
    fn trigger_cue(&mut self, _cue: &str) {}
    fn set_param(&mut self, _param: &str, _target: f32, _damp_s: f32) {}
}

/// Records cues in order; used by tests to assert pipeline phases fired.
#[derive(Default, Debug)]
pub struct RecordingSink {
    pub cues: Vec<String>,
    pub params: Vec<(String, f32, f32)>,
}

impl PresentationSink for RecordingSink {
    fn trigger_cue(&mut self, cue: &str) {
        self.cues.push(cue.to_string());
    }
    fn set_param(&mut self, param: &str, target: f32, damp_s: f32) {
        self.params.push((param.to_string(), target, damp_s));
    }
}
