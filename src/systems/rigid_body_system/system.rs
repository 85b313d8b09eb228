#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::core::{EventLog, Result, SandboxError};
use crate::rigid_body::{Body, BodyConfig, BodyId, BodyStatus, Vec3};

use super::collision::{collide_pair, fallback_axis, Contact};
use super::config::WorldConfig;
use super::enrichment::{self, Enrichment};
use super::events::{Suggestion, WorldEvent, SUGGEST_ENERGY, SUGGEST_MASS, SUGGEST_VERTICAL_SPEED};
use super::integrator::integrate;

/// Owns every body and the environment, and runs the substepped solver.
pub struct World {
    bodies: Vec<Body>,
    next_id: u64,

    // Environment
    gravity: Vec3,
    air_resistance: f64,
    friction_global: f64,
    max_sub_steps: u32,
    dt_default: f64,

    // State
    time: f64,
    /// External force queued by `apply_global_force`, consumed by the next step
    pending_force: Vec3,
    events: EventLog<WorldEvent>,

    enrichment: Option<Box<dyn Enrichment>>,
}

/// Counters for one `step` call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    pub substeps: u32,
    pub pairs_checked: u32,
    /// Overlapping pairs, whether or not they needed an impulse
    pub contacts: u32,
    pub impulses: u32,
    pub degenerate_contacts: u32,
}

/// Read-only world snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldStatus {
    pub time: f64,
    pub body_count: usize,
    pub bodies: Vec<BodyStatus>,
    pub events: Vec<WorldEvent>,
}

impl World {
    pub fn new(config: WorldConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: WorldConfig) -> Self {
        Self {
            bodies: Vec::new(),
            next_id: 1,
            gravity: config.gravity,
            air_resistance: config.air_resistance,
            friction_global: config.friction_global,
            max_sub_steps: config.max_sub_steps,
            dt_default: config.dt_default,
            time: 0.0,
            pending_force: Vec3::ZERO,
            events: EventLog::with_capacity(config.event_log_capacity),
            enrichment: None,
        }
    }

    /// Install a post-step enrichment hook (replaces any previous one).
    pub fn with_enrichment(mut self, enrichment: Box<dyn Enrichment>) -> Self {
        self.enrichment = Some(enrichment);
        self
    }

    pub fn set_enrichment(&mut self, enrichment: Option<Box<dyn Enrichment>>) {
        self.enrichment = enrichment;
    }

    // === Settings ===

    pub fn gravity(&self) -> Vec3 {
        self.gravity
    }

    /// Non-finite components are rejected and the old gravity is kept.
    pub fn set_gravity(&mut self, gravity: Vec3) -> Result<()> {
        if !gravity.is_finite() {
            warn!(?gravity, "gravity rejected: must be finite");
            return Err(SandboxError::invalid_config("gravity must be finite"));
        }
        self.gravity = gravity;
        Ok(())
    }

    pub fn air_resistance(&self) -> f64 {
        self.air_resistance
    }

    /// Finite values are clamped to [0, 1]; NaN and infinities are rejected.
    pub fn set_air_resistance(&mut self, air_resistance: f64) -> Result<()> {
        self.air_resistance = unit_coefficient("airResistance", air_resistance)?;
        Ok(())
    }

    pub fn friction_global(&self) -> f64 {
        self.friction_global
    }

    pub fn set_friction_global(&mut self, friction: f64) -> Result<()> {
        self.friction_global = unit_coefficient("frictionGlobal", friction)?;
        Ok(())
    }

    pub fn max_sub_steps(&self) -> u32 {
        self.max_sub_steps
    }

    pub fn dt_default(&self) -> f64 {
        self.dt_default
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub(crate) fn set_time(&mut self, time: f64) {
        self.time = time;
    }

    // === Bodies ===

    /// Insert a body. Nothing is mutated if construction fails.
    pub fn add_body(&mut self, config: BodyConfig) -> Result<BodyId> {
        if let Some(id) = &config.id {
            if self.contains(id) {
                return Err(SandboxError::DuplicateBody { id: id.clone() });
            }
        }

        let explicit = config.id.is_some();
        let (auto_id, next_id) = self.peek_auto_id();
        let mut body = Body::new(config, move || auto_id)?;
        body.refresh_derived(self.gravity);
        if !explicit {
            self.next_id = next_id;
        }

        let id = body.id().clone();
        debug!(%id, mass = body.mass(), radius = body.radius(), "body added");
        self.bodies.push(body);
        self.events.push(WorldEvent::BodyAdded { id: id.clone() });
        Ok(id)
    }

    fn peek_auto_id(&self) -> (BodyId, u64) {
        let mut n = self.next_id;
        loop {
            let id = BodyId::from(format!("obj_{n}"));
            n += 1;
            if !self.contains(&id) {
                return (id, n);
            }
        }
    }

    /// Remove a body. Unknown ids are a no-op and leave the event log alone.
    pub fn remove_body(&mut self, id: &BodyId) -> bool {
        let Some(idx) = self.index_of(id) else {
            return false;
        };
        // `remove`, not `swap_remove`: body order decides collision pair order.
        self.bodies.remove(idx);
        debug!(%id, "body removed");
        self.events.push(WorldEvent::BodyRemoved { id: id.clone() });
        true
    }

    /// Like `remove_body`, but an unknown id is an error.
    pub fn remove_body_strict(&mut self, id: &BodyId) -> Result<()> {
        if self.remove_body(id) {
            Ok(())
        } else {
            Err(SandboxError::UnknownBody { id: id.clone() })
        }
    }

    pub fn contains(&self, id: &BodyId) -> bool {
        self.index_of(id).is_some()
    }

    fn index_of(&self, id: &BodyId) -> Option<usize> {
        self.bodies.iter().position(|b| b.id() == id)
    }

    pub fn body(&self, id: &BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id() == id)
    }

    pub fn body_mut(&mut self, id: &BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id() == id)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Queue a one-shot force, applied on the first substep of the next step.
    ///
    /// The force goes to every body present when that step runs, including
    /// bodies added after this call.
    pub fn apply_global_force(&mut self, fx: f64, fy: f64, fz: f64) {
        let force = Vec3::new(fx, fy, fz);
        self.pending_force += force;
        self.events.push(WorldEvent::GlobalForceApplied { force });
    }

    pub fn step_default(&mut self) -> StepReport {
        self.step(self.dt_default)
    }

    /// Advance the world by `dt`, split into `max_sub_steps` substeps.
    ///
    /// Per substep: reset forces, accumulate gravity (and the queued global
    /// force on the first substep), integrate, resolve pairwise contacts,
    /// apply global damping, advance the clock. Global damping compounds
    /// with the per-body damping applied during integration.
    #[instrument(level = "debug", skip(self))]
    pub fn step(&mut self, dt: f64) -> StepReport {
        let mut report = StepReport::default();
        if !(dt.is_finite() && dt > 0.0) {
            warn!(dt, "step rejected: dt must be finite and > 0");
            self.events.push(WorldEvent::StepRejected { dt });
            return report;
        }

        for body in self.bodies.iter_mut() {
            body.clear_events();
        }

        let sub_dt = dt / self.max_sub_steps as f64;
        let damping = self.friction_global * (1.0 - self.air_resistance);
        let mut external = std::mem::take(&mut self.pending_force);

        for _ in 0..self.max_sub_steps {
            self.accumulate_forces(external);
            external = Vec3::ZERO;

            self.integrate_all(sub_dt);
            self.resolve_contacts(&mut report);

            for body in self.bodies.iter_mut() {
                body.velocity *= damping;
            }

            self.time += sub_dt;
            report.substeps += 1;
        }

        self.settle();

        self.events.push(WorldEvent::Stepped {
            dt,
            time: self.time,
            contacts: report.impulses,
        });
        debug!(
            time = self.time,
            pairs = report.pairs_checked,
            impulses = report.impulses,
            "world stepped"
        );
        report
    }

    fn accumulate_forces(&mut self, external: Vec3) {
        let gravity = self.gravity;
        for body in self.bodies.iter_mut() {
            body.reset_forces();
            let weight = gravity * body.mass();
            body.apply_force(weight.x, weight.y, weight.z);
            body.apply_force(external.x, external.y, external.z);
        }
    }

    fn integrate_all(&mut self, dt: f64) {
        #[cfg(feature = "parallel")]
        {
            self.bodies.par_iter_mut().for_each(|b| integrate(b, dt));
        }
        #[cfg(not(feature = "parallel"))]
        {
            for body in self.bodies.iter_mut() {
                integrate(body, dt);
            }
        }
    }

    /// Brute-force O(n²) pass over unordered pairs `(i, j)`, `i < j`.
    fn resolve_contacts(&mut self, report: &mut StepReport) {
        let n = self.bodies.len();
        for i in 0..n {
            let (head, tail) = self.bodies.split_at_mut(i + 1);
            let a = &mut head[i];
            for (offset, b) in tail.iter_mut().enumerate() {
                let j = i + 1 + offset;
                report.pairs_checked += 1;
                match collide_pair(a, b, fallback_axis(i, j)) {
                    Contact::Apart => {}
                    Contact::Separating => report.contacts += 1,
                    Contact::Resolved { degenerate, .. } => {
                        report.contacts += 1;
                        report.impulses += 1;
                        if degenerate {
                            warn!(a = %a.id(), b = %b.id(), "coincident centers, used fallback normal");
                            report.degenerate_contacts += 1;
                        }
                    }
                }
            }
        }
    }

    /// Refresh derived quantities on the final post-damping state and run
    /// the enrichment hook once.
    fn settle(&mut self) {
        let gravity = self.gravity;
        let hook = self.enrichment.as_deref();
        for body in self.bodies.iter_mut() {
            body.refresh_derived(gravity);
            if let Some(hook) = hook {
                enrichment::apply(body, hook);
            }
        }
    }

    /// Drop every body and event and rewind the clock.
    pub fn reset(&mut self) {
        self.bodies.clear();
        self.events.clear();
        self.time = 0.0;
        self.pending_force = Vec3::ZERO;
        self.next_id = 1;
        self.events.push(WorldEvent::Reset);
    }

    // === Queries ===

    pub fn query_bodies<F>(&self, filter: F) -> Vec<BodyStatus>
    where
        F: Fn(&Body) -> bool,
    {
        self.bodies.iter().filter(|b| filter(*b)).map(Body::status).collect()
    }

    pub fn suggestions(&self) -> Vec<Suggestion> {
        let mut out = Vec::new();
        for b in self.bodies.iter() {
            if b.energy() > SUGGEST_ENERGY {
                out.push(Suggestion::HighEnergy { id: b.id().clone(), energy: b.energy() });
            }
            if b.mass() > SUGGEST_MASS {
                out.push(Suggestion::Heavy { id: b.id().clone(), mass: b.mass() });
            }
            if b.velocity.y.abs() > SUGGEST_VERTICAL_SPEED {
                out.push(Suggestion::HighVerticalSpeed { id: b.id().clone(), vy: b.velocity.y });
            }
        }
        out
    }

    pub fn total_momentum(&self) -> Vec3 {
        self.bodies.iter().fold(Vec3::ZERO, |acc, b| acc + b.velocity * b.mass())
    }

    pub fn total_kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    pub fn events(&self) -> &EventLog<WorldEvent> {
        &self.events
    }

    pub fn status(&self) -> WorldStatus {
        WorldStatus {
            time: self.time,
            body_count: self.bodies.len(),
            bodies: self.bodies.iter().map(Body::status).collect(),
            events: self.events.to_vec(),
        }
    }
}

fn unit_coefficient(name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        warn!(value, "{name} rejected: must be finite");
        return Err(SandboxError::invalid_config(format!("{name} must be finite (got {value})")));
    }
    Ok(value.clamp(0.0, 1.0))
}

impl Default for World {
    fn default() -> Self {
        Self::build(WorldConfig::default())
    }
}
