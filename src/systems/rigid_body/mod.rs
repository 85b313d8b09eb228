//! Body - a sphere-approximated particle that moves as a unit
//!
//! Holds kinematic state, force/torque accumulators and the derived
//! quantities (momentum, energy, density, pressure) refreshed on update.
//! A body knows nothing about other bodies; pairing happens in the world.

mod vec3;
mod body;
mod config;
mod events;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use vec3::Vec3;
pub use body::{Body, BodyStatus};
pub use config::BodyConfig;
pub use events::{BodyEvent, EXTREME_ENERGY, HEAVY_MASS, HIGH_VERTICAL_SPEED};

/// Opaque body handle. Handles are ids, never references.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BodyId(String);

impl BodyId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BodyId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for BodyId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
