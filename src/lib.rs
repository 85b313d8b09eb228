//! Reality Sandbox Engine - rigid-body sphere physics in WASM
//!
//! Architecture:
//! - core/        - Errors and bounded logs
//! - systems/     - Bodies, integrator, collisions and the world
//! - simulation/  - Frame driver, snapshots and the wasm facade

pub mod core;
pub mod systems;
pub mod simulation;

// Compatibility re-exports (keeps short internal/external paths working)
pub use systems::rigid_body;
pub use systems::rigid_body_system;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(feature = "parallel")]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"Reality sandbox engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::{EventLog, Result, SandboxError};
pub use rigid_body::{Body, BodyConfig, BodyEvent, BodyId, BodyStatus, Vec3};
pub use rigid_body_system::{
    Enrichment, LocalEnrichment, StepReport, Suggestion, World, WorldConfig, WorldEvent, WorldStatus,
};
pub use simulation::{
    BodySample, CollisionRecord, PerfStats, SampleRecorder, SampleSink, Sandbox, SandboxCore, SimulationStatus,
    SimulatorConfig,
};
