//! World - owns the bodies and runs the rigid body solver
//!
//! One `step(dt)` is split into `max_sub_steps` equal substeps so that the
//! distance a body travels between contact checks stays small relative to
//! its radius. Contact detection is brute-force over all unordered pairs,
//! which is fine for the tens of bodies a sandbox holds.
//!
//! Current behavior:
//! - Semi-implicit Euler integration, order-independent across bodies.
//! - Frictionless impulse response along the contact normal only.
//! - No rotational dynamics: torque is accumulated and reported, angular
//!   velocity only decays.

mod collision;
mod config;
mod enrichment;
mod events;
mod integrator;
mod system;

pub use collision::{collide_pair, Contact};
pub use config::WorldConfig;
pub use enrichment::{EnrichedQuantities, Enrichment, EnrichmentInput, LocalEnrichment};
pub use events::{Suggestion, WorldEvent};
pub use integrator::integrate;
pub use system::{StepReport, World, WorldStatus};
