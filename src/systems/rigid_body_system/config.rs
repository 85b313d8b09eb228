use serde::{Deserialize, Serialize};

use crate::core::{Result, SandboxError};
use crate::rigid_body::Vec3;

/// Environment constants for a `World`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorldConfig {
    pub gravity: Vec3,
    /// Ambient medium drag, applied after collisions every substep
    pub air_resistance: f64,
    pub friction_global: f64,
    pub max_sub_steps: u32,
    pub dt_default: f64,
    pub event_log_capacity: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: Vec3::new(0.0, 9.81, 0.0),
            air_resistance: 0.01,
            friction_global: 0.98,
            max_sub_steps: 10,
            dt_default: 1.0 / 60.0,
            event_log_capacity: 1024,
        }
    }
}

impl WorldConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// No gravity and no global damping; handy for isolated experiments.
    pub fn frictionless() -> Self {
        Self {
            gravity: Vec3::ZERO,
            air_resistance: 0.0,
            friction_global: 1.0,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_sub_steps == 0 {
            return Err(SandboxError::invalid_config("maxSubSteps must be >= 1"));
        }
        if !(self.dt_default.is_finite() && self.dt_default > 0.0) {
            return Err(SandboxError::invalid_config(format!(
                "dtDefault must be finite and > 0 (got {})",
                self.dt_default
            )));
        }
        if !self.gravity.is_finite() {
            return Err(SandboxError::invalid_config("gravity must be finite"));
        }
        if !(0.0..=1.0).contains(&self.air_resistance) || !(0.0..=1.0).contains(&self.friction_global) {
            return Err(SandboxError::invalid_config(
                "airResistance and frictionGlobal must be in [0, 1]",
            ));
        }
        if self.event_log_capacity == 0 {
            return Err(SandboxError::invalid_config("eventLogCapacity must be >= 1"));
        }
        Ok(())
    }
}
