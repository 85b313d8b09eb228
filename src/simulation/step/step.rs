use crate::rigid_body::BodyEvent;

use super::sink::BodySample;
use super::status::CollisionRecord;
use super::{PerfTimer, SandboxCore};

/// One frame: advance the world, then harvest collisions and samples.
pub(super) fn step(core: &mut SandboxCore, dt: f64) {
    let perf_on = core.perf_enabled;
    if perf_on {
        core.perf_stats.reset();
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    core.frame += 1;

    let report = if perf_on {
        let (report, ms) = PerfTimer::measure(|| core.world.step(dt));
        core.perf_stats.world_ms = ms;
        report
    } else {
        core.world.step(dt)
    };

    let t0 = if perf_on { Some(PerfTimer::start()) } else { None };
    // A rejected dt runs no substeps; body events still belong to the last real step.
    let recorded = if report.substeps > 0 { record_collisions(core) } else { 0 };
    feed_sink(core);

    if let (Some(start), Some(t0)) = (step_start, t0) {
        let stats = &mut core.perf_stats;
        stats.absorb(&report);
        stats.body_count = core.world.body_count() as u32;
        stats.collision_records = recorded;
        stats.bookkeeping_ms = t0.elapsed_ms();
        stats.step_ms = start.elapsed_ms();
    }
}

fn record_collisions(core: &mut SandboxCore) -> u32 {
    let frame = core.frame;
    let mut recorded = 0;
    for body in core.world.bodies() {
        if !body.events().iter().any(BodyEvent::is_collision) {
            continue;
        }
        core.collision_log.push(CollisionRecord {
            frame,
            id: body.id().clone(),
            events: body.events().to_vec(),
        });
        recorded += 1;
    }
    recorded
}

fn feed_sink(core: &mut SandboxCore) {
    let frame = core.frame;
    for body in core.world.bodies() {
        core.sink.record(&BodySample {
            frame,
            id: body.id().clone(),
            position: body.position,
            velocity: body.velocity,
            momentum: body.momentum(),
            energy: body.energy(),
        });
    }
}
