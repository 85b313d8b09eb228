use tracing::debug;

use crate::core::Result;
use crate::rigid_body::{BodyConfig, BodyId};

use super::SandboxCore;

pub(super) fn add_body(core: &mut SandboxCore, config: BodyConfig) -> Result<BodyId> {
    core.world.add_body(config)
}

pub(super) fn add_body_json(core: &mut SandboxCore, json: &str) -> Result<BodyId> {
    let config = BodyConfig::from_json(json)?;
    add_body(core, config)
}

pub(super) fn remove_body(core: &mut SandboxCore, id: &BodyId) -> bool {
    core.world.remove_body(id)
}

pub(super) fn remove_body_strict(core: &mut SandboxCore, id: &BodyId) -> Result<()> {
    core.world.remove_body_strict(id)
}

pub(super) fn apply_global_force(core: &mut SandboxCore, fx: f64, fy: f64, fz: f64) {
    core.world.apply_global_force(fx, fy, fz);
}

pub(super) fn reset(core: &mut SandboxCore) {
    core.world.reset();
    core.collision_log.clear();
    core.sink.clear();
    core.perf_stats.reset();
    core.frame = 0;
    debug!("sandbox reset");
}
