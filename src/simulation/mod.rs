//! Sandbox - drives the physics world frame by frame
//!
//! The core keeps the frame counter, a bounded collision log and the sample
//! sink, and hands out read-only snapshots. The wasm facade in `facade.rs`
//! wraps it for the browser.
//!
//! Bodies are only reachable through `&mut self` methods, so adds and
//! removes can never interleave with a running step.

use tracing::debug;

use crate::core::{EventLog, Result};
use crate::rigid_body::{BodyConfig, BodyId, BodyStatus, Vec3};
use crate::rigid_body_system::{Enrichment, Suggestion, World};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/config.rs"]
mod config;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "status/status.rs"]
mod status;
#[path = "sink/sink.rs"]
mod sink;
mod facade;

pub use config::SimulatorConfig;
pub use facade::Sandbox;
pub use perf_stats::PerfStats;
pub use sink::{BodySample, NullSink, SampleRecorder, SampleSink};
pub use status::{CollisionRecord, SimulationStatus, Summary};

use perf_timer::PerfTimer;

/// The simulation driver
pub struct SandboxCore {
    world: World,
    time_step: f64,

    // State
    frame: u64,
    collision_log: EventLog<CollisionRecord>,
    sink: Box<dyn SampleSink>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SandboxCore {
    pub fn new(config: SimulatorConfig) -> Result<Self> {
        Self::with_sink(config, Box::new(NullSink))
    }

    pub fn with_sink(config: SimulatorConfig, sink: Box<dyn SampleSink>) -> Result<Self> {
        config.validate()?;
        let world = World::new(config.world)?;
        debug!(time_step = config.time_step, "sandbox created");
        Ok(Self {
            world,
            time_step: config.time_step,
            frame: 0,
            collision_log: EventLog::with_capacity(config.collision_log_capacity),
            sink,
            perf_enabled: false,
            perf_stats: PerfStats::default(),
        })
    }

    /// Rebuild a sandbox from a snapshot: bodies, frame, clock and
    /// collision history. Fails without side effects if any body is invalid.
    pub fn from_status(config: SimulatorConfig, status: &SimulationStatus) -> Result<Self> {
        let mut core = Self::new(config)?;
        for body in status.bodies.iter() {
            core.world.add_body(body.to_config())?;
        }
        for record in status.collisions.iter() {
            core.collision_log.push(record.clone());
        }
        core.frame = status.frame;
        core.world.set_time(status.time);
        Ok(core)
    }

    pub fn from_json(config_json: &str) -> Result<Self> {
        Self::new(SimulatorConfig::from_json(config_json)?)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn time(&self) -> f64 {
        self.world.time()
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    pub fn body_count(&self) -> usize {
        self.world.body_count()
    }

    pub fn collision_log(&self) -> &EventLog<CollisionRecord> {
        &self.collision_log
    }

    pub fn set_enrichment(&mut self, enrichment: Option<Box<dyn Enrichment>>) {
        self.world.set_enrichment(enrichment);
    }

    // === Settings ===

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last frame's perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Rejects non-finite components; the previous gravity stays in force.
    pub fn set_gravity(&mut self, x: f64, y: f64, z: f64) -> Result<()> {
        settings::set_gravity(self, x, y, z)
    }

    pub fn set_air_resistance(&mut self, value: f64) -> Result<()> {
        settings::set_air_resistance(self, value)
    }

    pub fn set_friction_global(&mut self, value: f64) -> Result<()> {
        settings::set_friction_global(self, value)
    }

    pub fn set_time_step(&mut self, dt: f64) -> Result<()> {
        settings::set_time_step(self, dt)
    }

    // === Body API ===

    pub fn add_body(&mut self, config: BodyConfig) -> Result<BodyId> {
        commands::add_body(self, config)
    }

    /// Add a body from a JSON constructor record
    pub fn add_body_json(&mut self, json: &str) -> Result<BodyId> {
        commands::add_body_json(self, json)
    }

    /// Returns `false` for ids that are not (or no longer) present
    pub fn remove_body(&mut self, id: &BodyId) -> bool {
        commands::remove_body(self, id)
    }

    pub fn remove_body_strict(&mut self, id: &BodyId) -> Result<()> {
        commands::remove_body_strict(self, id)
    }

    /// One-shot force on every body, consumed by the next frame
    pub fn apply_global_force(&mut self, fx: f64, fy: f64, fz: f64) {
        commands::apply_global_force(self, fx, fy, fz);
    }

    pub fn reset(&mut self) {
        commands::reset(self);
    }

    // === Stepping ===

    /// Advance one frame by the configured time step
    pub fn step(&mut self) {
        let dt = self.time_step;
        step::step(self, dt);
    }

    /// Advance one frame by an explicit dt
    pub fn step_by(&mut self, dt: f64) {
        step::step(self, dt);
    }

    pub fn run(&mut self, steps: u32) {
        for _ in 0..steps {
            self.step();
        }
    }

    // === Snapshots ===

    pub fn status(&self) -> SimulationStatus {
        let bodies: Vec<BodyStatus> = self.world.bodies().iter().map(|b| b.status()).collect();
        let summary = status::summarize(&bodies);
        SimulationStatus {
            frame: self.frame,
            time: self.world.time(),
            bodies,
            collisions: self.collision_log.to_vec(),
            summary,
        }
    }

    pub fn status_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.status())?)
    }

    /// Snapshot export for file/report consumers
    pub fn export_json(&self, pretty: bool) -> Result<String> {
        let status = self.status();
        let json = if pretty {
            serde_json::to_string_pretty(&status)?
        } else {
            serde_json::to_string(&status)?
        };
        Ok(json)
    }

    pub fn suggestions(&self) -> Vec<Suggestion> {
        self.world.suggestions()
    }

    pub fn total_momentum(&self) -> Vec3 {
        self.world.total_momentum()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
