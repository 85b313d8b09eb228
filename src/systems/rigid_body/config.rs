use serde::{Deserialize, Serialize};

use super::vec3::Vec3;
use super::BodyId;
use crate::core::{Result, SandboxError};

/// Construction parameters for one body.
///
/// Every field is optional in JSON; missing fields take the sandbox defaults
/// (mass 1, radius 10, friction 0.98, air resistance 0.01, elasticity 0.8,
/// temperature 25 °C, volume 1).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BodyConfig {
    pub id: Option<BodyId>,
    pub mass: f64,
    pub position: Vec3,
    pub velocity: Vec3,
    pub radius: f64,
    pub friction: f64,
    pub air_resistance: f64,
    pub angular_velocity: Vec3,
    pub elasticity: f64,
    pub temperature: f64,
    pub volume: f64,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            id: None,
            mass: 1.0,
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            radius: 10.0,
            friction: 0.98,
            air_resistance: 0.01,
            angular_velocity: Vec3::ZERO,
            elasticity: 0.8,
            temperature: 25.0,
            volume: 1.0,
        }
    }
}

impl BodyConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_id(mut self, id: impl Into<BodyId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn at(mut self, x: f64, y: f64, z: f64) -> Self {
        self.position = Vec3::new(x, y, z);
        self
    }

    pub fn moving(mut self, vx: f64, vy: f64, vz: f64) -> Self {
        self.velocity = Vec3::new(vx, vy, vz);
        self
    }

    pub fn mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn elasticity(mut self, elasticity: f64) -> Self {
        self.elasticity = elasticity;
        self
    }

    /// Disable per-body damping (friction 1, no air resistance).
    pub fn undamped(mut self) -> Self {
        self.friction = 1.0;
        self.air_resistance = 0.0;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(SandboxError::invalid_body(format!(
                "mass must be finite and > 0 (got {})",
                self.mass
            )));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(SandboxError::invalid_body(format!(
                "radius must be finite and > 0 (got {})",
                self.radius
            )));
        }
        if !(self.volume.is_finite() && self.volume > 0.0) {
            return Err(SandboxError::invalid_body(format!(
                "volume must be finite and > 0 (got {})",
                self.volume
            )));
        }
        for (name, value) in [
            ("friction", self.friction),
            ("airResistance", self.air_resistance),
            ("elasticity", self.elasticity),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SandboxError::invalid_body(format!(
                    "{name} must be in [0, 1] (got {value})"
                )));
            }
        }
        if !self.temperature.is_finite() {
            return Err(SandboxError::invalid_body("temperature must be finite"));
        }
        if !(self.position.is_finite() && self.velocity.is_finite() && self.angular_velocity.is_finite()) {
            return Err(SandboxError::invalid_body("position, velocity and angular velocity must be finite"));
        }
        Ok(())
    }
}
