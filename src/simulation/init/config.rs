use serde::{Deserialize, Serialize};

use crate::core::{Result, SandboxError};
use crate::rigid_body_system::WorldConfig;

/// Sandbox-level configuration: the world environment plus frame pacing
/// and log bounds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimulatorConfig {
    pub world: WorldConfig,
    /// dt handed to the world on every `step()`
    pub time_step: f64,
    pub collision_log_capacity: usize,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            time_step: 1.0 / 120.0,
            collision_log_capacity: 4096,
        }
    }
}

impl SimulatorConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.world.validate()?;
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(SandboxError::invalid_config(format!(
                "timeStep must be finite and > 0 (got {})",
                self.time_step
            )));
        }
        if self.collision_log_capacity == 0 {
            return Err(SandboxError::invalid_config("collisionLogCapacity must be >= 1"));
        }
        Ok(())
    }
}
