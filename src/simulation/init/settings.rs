use crate::core::{Result, SandboxError};
use crate::rigid_body::Vec3;

use super::perf_stats::PerfStats;
use super::SandboxCore;

pub(super) fn enable_perf_metrics(core: &mut SandboxCore, enabled: bool) {
    core.perf_enabled = enabled;
    if !enabled {
        core.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(core: &SandboxCore) -> PerfStats {
    core.perf_stats.clone()
}

pub(super) fn set_gravity(core: &mut SandboxCore, x: f64, y: f64, z: f64) -> Result<()> {
    core.world.set_gravity(Vec3::new(x, y, z))
}

pub(super) fn set_air_resistance(core: &mut SandboxCore, value: f64) -> Result<()> {
    core.world.set_air_resistance(value)
}

pub(super) fn set_friction_global(core: &mut SandboxCore, value: f64) -> Result<()> {
    core.world.set_friction_global(value)
}

pub(super) fn set_time_step(core: &mut SandboxCore, dt: f64) -> Result<()> {
    if !(dt.is_finite() && dt > 0.0) {
        return Err(SandboxError::invalid_config(format!("timeStep must be finite and > 0 (got {dt})")));
    }
    core.time_step = dt;
    Ok(())
}
