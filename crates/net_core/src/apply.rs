//! Apply-side trait for replica consumers.
//!
//! Replicas mirror authoritative values for presentation only; applying a
//! message must never run simulation-affecting logic.

use crate::wire::RepMsg;

/// Types that reconcile local presentation state from replicated values.
pub trait ReplicationApply {
    /// Apply one decoded message. Returns whether anything changed.
    fn apply(&mut self, msg: &RepMsg) -> bool;
}
