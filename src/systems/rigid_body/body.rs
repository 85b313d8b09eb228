use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::config::BodyConfig;
use super::events::{BodyEvent, EXTREME_ENERGY, HEAVY_MASS, HIGH_VERTICAL_SPEED};
use super::vec3::Vec3;
use super::BodyId;
use crate::core::Result;

/// Body - one sphere in the sandbox
pub struct Body {
    // === Identity / invariants (no setters) ===
    id: BodyId,
    mass: f64,
    radius: f64,

    // === Kinematic state ===
    pub position: Vec3,
    pub velocity: Vec3,
    /// Acceleration used by the last update
    pub acceleration: Vec3,
    /// Only decayed, never integrated into an orientation
    pub angular_velocity: Vec3,

    // === Accumulators ===
    force: Vec3,
    torque: Vec3,

    // === Material ===
    /// Per-body velocity damping (1.0 = none)
    pub friction: f64,
    pub air_resistance: f64,
    /// Restitution (0.0 = plastic, 1.0 = elastic)
    pub elasticity: f64,
    /// Informational, not simulated
    pub temperature: f64,
    pub volume: f64,

    // === Derived ===
    pub(crate) momentum: Vec3,
    pub(crate) energy: f64,
    pub(crate) density: f64,
    pub(crate) pressure: f64,

    events: Vec<BodyEvent>,
}

impl Body {
    /// Build a body from a validated config.
    ///
    /// Fails with `InvalidBody` on non-positive mass or radius, or damping
    /// coefficients outside [0, 1]. `fallback_id` is used when the config
    /// carries no id.
    pub fn new(config: BodyConfig, fallback_id: impl FnOnce() -> BodyId) -> Result<Self> {
        config.validate()?;

        let BodyConfig {
            id,
            mass,
            position,
            velocity,
            radius,
            friction,
            air_resistance,
            angular_velocity,
            elasticity,
            temperature,
            volume,
        } = config;

        let mut body = Self {
            id: id.unwrap_or_else(fallback_id),
            mass,
            radius,
            position,
            velocity,
            acceleration: Vec3::ZERO,
            angular_velocity,
            force: Vec3::ZERO,
            torque: Vec3::ZERO,
            friction,
            air_resistance,
            elasticity,
            temperature,
            volume,
            momentum: Vec3::ZERO,
            energy: 0.0,
            density: mass / volume,
            pressure: 0.0,
            events: Vec::new(),
        };
        body.refresh_derived(Vec3::ZERO);
        Ok(body)
    }

    pub fn id(&self) -> &BodyId {
        &self.id
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn force(&self) -> Vec3 {
        self.force
    }

    pub fn torque(&self) -> Vec3 {
        self.torque
    }

    pub fn momentum(&self) -> Vec3 {
        self.momentum
    }

    pub fn energy(&self) -> f64 {
        self.energy
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn pressure(&self) -> f64 {
        self.pressure
    }

    pub fn events(&self) -> &[BodyEvent] {
        &self.events
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    /// Add to the force accumulator. Takes effect on the next update.
    pub fn apply_force(&mut self, fx: f64, fy: f64, fz: f64) {
        self.force += Vec3::new(fx, fy, fz);
    }

    /// Add to the torque accumulator. Reported only; see `update`.
    pub fn apply_torque(&mut self, tx: f64, ty: f64, tz: f64) {
        self.torque += Vec3::new(tx, ty, tz);
    }

    /// Zero both accumulators. The world calls this once per substep.
    pub fn reset_forces(&mut self) {
        self.force = Vec3::ZERO;
        self.torque = Vec3::ZERO;
    }

    pub(crate) fn clear_force(&mut self) {
        self.force = Vec3::ZERO;
    }

    /// Semi-implicit Euler step.
    ///
    /// Velocity is advanced first and damped multiplicatively
    /// (`friction * (1 - air_resistance)`), then position moves with the new
    /// velocity. Angular velocity only decays by `friction`; torque is not
    /// coupled into it.
    pub fn update(&mut self, dt: f64, gravity: Vec3) {
        self.acceleration = self.force / self.mass + gravity;

        let damping = self.friction * (1.0 - self.air_resistance);
        self.velocity = (self.velocity + self.acceleration * dt) * damping;
        self.position += self.velocity * dt;

        self.angular_velocity *= self.friction;

        self.refresh_derived(gravity);
    }

    /// Recompute momentum, energy, density, pressure and the advisories.
    ///
    /// Pressure is the vertical load over the cross-section: the accumulated
    /// `force.y` (which carries the weight when the world applies gravity as
    /// a force) plus `mass * gravity.y` for a directly supplied gravity.
    pub(crate) fn refresh_derived(&mut self, gravity: Vec3) {
        self.momentum = self.velocity * self.mass;
        self.energy = self.kinetic_energy() + self.angular_energy();
        self.density = self.mass / self.volume;

        let area = PI * self.radius * self.radius;
        let load = self.force.y + self.mass * gravity.y;
        self.pressure = if area > 0.0 { load / area } else { 0.0 };

        self.events.retain(|e| !e.is_advisory());
        if self.mass > HEAVY_MASS {
            self.events.push(BodyEvent::Heavy { mass: self.mass });
        }
        if self.velocity.y.abs() > HIGH_VERTICAL_SPEED {
            self.events.push(BodyEvent::HighVerticalSpeed { vy: self.velocity.y });
        }
        if self.energy > EXTREME_ENERGY {
            self.events.push(BodyEvent::ExtremeEnergy { energy: self.energy });
        }
    }

    /// Heuristic rotational term: ½·m·|ω|². There is no inertia tensor.
    pub fn angular_energy(&self) -> f64 {
        0.5 * self.mass * self.angular_velocity.length_squared()
    }

    pub(crate) fn push_event(&mut self, event: BodyEvent) {
        self.events.push(event);
    }

    pub(crate) fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Resolve a contact against `other` using `Vec3::X` as the fallback
    /// normal for coincident centers.
    pub fn collide_with(&mut self, other: &mut Body) -> bool {
        crate::rigid_body_system::collide_pair(self, other, Vec3::X).resolved()
    }

    pub fn status(&self) -> BodyStatus {
        BodyStatus {
            id: self.id.clone(),
            mass: self.mass,
            radius: self.radius,
            position: self.position,
            velocity: self.velocity,
            acceleration: self.acceleration,
            angular_velocity: self.angular_velocity,
            torque: self.torque,
            momentum: self.momentum,
            energy: self.energy,
            friction: self.friction,
            air_resistance: self.air_resistance,
            elasticity: self.elasticity,
            temperature: self.temperature,
            volume: self.volume,
            density: self.density,
            pressure: self.pressure,
            events: self.events.clone(),
        }
    }
}

/// Read-only snapshot of one body, safe to hand to renderers and exporters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyStatus {
    pub id: BodyId,
    pub mass: f64,
    pub radius: f64,
    pub position: Vec3,
    pub velocity: Vec3,
    pub acceleration: Vec3,
    pub angular_velocity: Vec3,
    pub torque: Vec3,
    pub momentum: Vec3,
    pub energy: f64,
    pub friction: f64,
    pub air_resistance: f64,
    pub elasticity: f64,
    pub temperature: f64,
    pub volume: f64,
    pub density: f64,
    pub pressure: f64,
    pub events: Vec<BodyEvent>,
}

impl BodyStatus {
    /// Constructor record that rebuilds this body's state.
    pub fn to_config(&self) -> BodyConfig {
        BodyConfig {
            id: Some(self.id.clone()),
            mass: self.mass,
            position: self.position,
            velocity: self.velocity,
            radius: self.radius,
            friction: self.friction,
            air_resistance: self.air_resistance,
            angular_velocity: self.angular_velocity,
            elasticity: self.elasticity,
            temperature: self.temperature,
            volume: self.volume,
        }
    }
}
