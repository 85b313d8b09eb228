//! Optional post-integration hook that may override derived quantities
//! with values from an external calculator.

use tracing::debug;

use crate::rigid_body::{Body, BodyEvent};

/// Scalar inputs handed to the hook.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnrichmentInput {
    pub mass: f64,
    pub speed: f64,
    pub volume: f64,
}

/// Quantities an enrichment may supply.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnrichedQuantities {
    pub density: f64,
    pub kinetic_energy: f64,
    /// Momentum magnitude; direction is taken from the body's velocity.
    pub momentum: f64,
}

/// Injected physics calculator. Returning `None` keeps the local values.
pub trait Enrichment: Send + Sync {
    fn enrich(&self, input: &EnrichmentInput) -> Option<EnrichedQuantities>;
}

/// Closed-form density / kinetic energy / momentum calculator.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalEnrichment;

impl Enrichment for LocalEnrichment {
    fn enrich(&self, input: &EnrichmentInput) -> Option<EnrichedQuantities> {
        let density = if input.volume > 0.0 { input.mass / input.volume } else { 0.0 };
        Some(EnrichedQuantities {
            density,
            kinetic_energy: 0.5 * input.mass * input.speed * input.speed,
            momentum: input.mass * input.speed,
        })
    }
}

pub(super) fn apply(body: &mut Body, enrichment: &dyn Enrichment) {
    let input = EnrichmentInput {
        mass: body.mass(),
        speed: body.velocity.length(),
        volume: body.volume,
    };
    match enrichment.enrich(&input) {
        Some(q) if q.density.is_finite() && q.kinetic_energy.is_finite() && q.momentum.is_finite() => {
            body.density = q.density;
            body.energy = q.kinetic_energy + body.angular_energy();
            body.momentum = body.velocity.normalize() * q.momentum;
        }
        _ => {
            debug!(id = %body.id(), "enrichment unavailable, keeping local values");
            body.push_event(BodyEvent::EnrichmentUnavailable);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rigid_body::{BodyConfig, BodyId};

    struct Offline;

    impl Enrichment for Offline {
        fn enrich(&self, _: &EnrichmentInput) -> Option<EnrichedQuantities> {
            None
        }
    }

    fn body() -> Body {
        let cfg = BodyConfig { mass: 2.0, volume: 0.5, ..BodyConfig::default() }.moving(3.0, 4.0, 0.0);
        Body::new(cfg, || BodyId::from("e")).unwrap()
    }

    #[test]
    fn local_enrichment_matches_local_physics() {
        let mut b = body();
        apply(&mut b, &LocalEnrichment);
        assert_eq!(b.density(), 4.0);
        assert!((b.energy() - 25.0).abs() < 1e-12);
        let m = b.momentum();
        assert!((m.x - 6.0).abs() < 1e-12 && (m.y - 8.0).abs() < 1e-12);
        assert!(!b.events().contains(&BodyEvent::EnrichmentUnavailable));
    }

    #[test]
    fn unavailable_keeps_local_values() {
        let mut b = body();
        let before = (b.density(), b.energy(), b.momentum());
        apply(&mut b, &Offline);
        assert_eq!((b.density(), b.energy(), b.momentum()), before);
        assert!(b.events().contains(&BodyEvent::EnrichmentUnavailable));
    }
}
