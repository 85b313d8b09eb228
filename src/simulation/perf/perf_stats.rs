use wasm_bindgen::prelude::*;

use crate::rigid_body_system::StepReport;

/// Timings and counters for the last frame (zeros while perf is disabled).
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) world_ms: f64,
    pub(super) bookkeeping_ms: f64,
    pub(super) substeps: u32,
    pub(super) pairs_checked: u32,
    pub(super) contacts: u32,
    pub(super) impulses: u32,
    pub(super) degenerate_contacts: u32,
    pub(super) body_count: u32,
    pub(super) collision_records: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }

    pub(crate) fn absorb(&mut self, report: &StepReport) {
        self.substeps = report.substeps;
        self.pairs_checked = report.pairs_checked;
        self.contacts = report.contacts;
        self.impulses = report.impulses;
        self.degenerate_contacts = report.degenerate_contacts;
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn world_ms(&self) -> f64 { self.world_ms }
    #[wasm_bindgen(getter)]
    pub fn bookkeeping_ms(&self) -> f64 { self.bookkeeping_ms }
    #[wasm_bindgen(getter)]
    pub fn substeps(&self) -> u32 { self.substeps }
    #[wasm_bindgen(getter)]
    pub fn pairs_checked(&self) -> u32 { self.pairs_checked }
    #[wasm_bindgen(getter)]
    pub fn contacts(&self) -> u32 { self.contacts }
    #[wasm_bindgen(getter)]
    pub fn impulses(&self) -> u32 { self.impulses }
    #[wasm_bindgen(getter)]
    pub fn degenerate_contacts(&self) -> u32 { self.degenerate_contacts }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn collision_records(&self) -> u32 { self.collision_records }
}
