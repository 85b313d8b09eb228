use wasm_bindgen::prelude::*;

use crate::rigid_body::BodyId;

use super::perf_stats::PerfStats;
use super::{SandboxCore, SimulatorConfig};

fn js_err(e: crate::core::SandboxError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub struct Sandbox {
    core: SandboxCore,
}

#[wasm_bindgen]
impl Sandbox {
    /// Create a sandbox with the default environment
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<Sandbox, JsValue> {
        let core = SandboxCore::new(SimulatorConfig::default()).map_err(js_err)?;
        Ok(Self { core })
    }

    /// Create a sandbox from a JSON `SimulatorConfig`
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: String) -> Result<Sandbox, JsValue> {
        let core = SandboxCore::from_json(&json).map_err(js_err)?;
        Ok(Self { core })
    }

    /// Rebuild a sandbox from an exported snapshot
    #[wasm_bindgen(js_name = fromSnapshot)]
    pub fn from_snapshot(config_json: String, snapshot_json: String) -> Result<Sandbox, JsValue> {
        let config = SimulatorConfig::from_json(&config_json).map_err(js_err)?;
        let status = super::SimulationStatus::from_json(&snapshot_json).map_err(js_err)?;
        let core = SandboxCore::from_status(config, &status).map_err(js_err)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn time(&self) -> f64 { self.core.time() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize { self.core.body_count() }

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last frame perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn set_gravity(&mut self, x: f64, y: f64, z: f64) -> Result<(), JsValue> {
        self.core.set_gravity(x, y, z).map_err(js_err)
    }

    pub fn set_air_resistance(&mut self, value: f64) -> Result<(), JsValue> {
        self.core.set_air_resistance(value).map_err(js_err)
    }

    pub fn set_friction_global(&mut self, value: f64) -> Result<(), JsValue> {
        self.core.set_friction_global(value).map_err(js_err)
    }

    pub fn set_time_step(&mut self, dt: f64) -> Result<(), JsValue> {
        self.core.set_time_step(dt).map_err(js_err)
    }

    // === BODY API ===

    /// Add a body from a JSON constructor record
    /// Returns the body ID
    pub fn add_body(&mut self, json: String) -> Result<String, JsValue> {
        let id = self.core.add_body_json(&json).map_err(js_err)?;
        Ok(id.to_string())
    }

    /// Remove a body by ID; `false` when the id is unknown
    pub fn remove_body(&mut self, id: String) -> bool {
        self.core.remove_body(&BodyId::from(id))
    }

    pub fn apply_global_force(&mut self, fx: f64, fy: f64, fz: f64) {
        self.core.apply_global_force(fx, fy, fz);
    }

    pub fn reset(&mut self) {
        self.core.reset();
    }

    /// Advance one frame by the configured time step
    pub fn step(&mut self) {
        self.core.step();
    }

    pub fn step_by(&mut self, dt: f64) {
        self.core.step_by(dt);
    }

    pub fn run(&mut self, steps: u32) {
        self.core.run(steps);
    }

    // === SNAPSHOTS ===

    pub fn status_json(&self) -> Result<String, JsValue> {
        self.core.status_json().map_err(js_err)
    }

    pub fn export_json(&self, pretty: bool) -> Result<String, JsValue> {
        self.core.export_json(pretty).map_err(js_err)
    }

    pub fn suggestions_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.core.suggestions()).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
