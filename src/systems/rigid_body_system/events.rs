use serde::{Deserialize, Serialize};

use crate::rigid_body::{BodyId, Vec3};

/// World-level log entries, one per mutation or step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum WorldEvent {
    BodyAdded { id: BodyId },
    BodyRemoved { id: BodyId },
    GlobalForceApplied { force: Vec3 },
    /// One full `step(dt)` call (not per substep).
    Stepped { dt: f64, time: f64, contacts: u32 },
    /// `step` was called with a non-positive or non-finite dt.
    StepRejected { dt: f64 },
    Reset,
}

/// Warnings about bodies in unusual states.
pub const SUGGEST_ENERGY: f64 = 50_000.0;
pub const SUGGEST_MASS: f64 = 1000.0;
pub const SUGGEST_VERTICAL_SPEED: f64 = 50.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Suggestion {
    HighEnergy { id: BodyId, energy: f64 },
    Heavy { id: BodyId, mass: f64 },
    HighVerticalSpeed { id: BodyId, vy: f64 },
}
