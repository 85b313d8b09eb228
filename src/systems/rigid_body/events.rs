use serde::{Deserialize, Serialize};

use super::BodyId;

/// Advisory thresholds reported on a body after each update.
pub const HEAVY_MASS: f64 = 1000.0;
pub const HIGH_VERTICAL_SPEED: f64 = 50.0;
pub const EXTREME_ENERGY: f64 = 100_000.0;

/// Per-body diagnostics, regenerated every `World::step`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum BodyEvent {
    /// Impulse resolved against another body.
    Collision { with: BodyId },
    /// Centers coincided; a fallback normal was used for the pair.
    DegenerateContact { with: BodyId },
    Heavy { mass: f64 },
    HighVerticalSpeed { vy: f64 },
    ExtremeEnergy { energy: f64 },
    /// The enrichment hook declined; locally computed values were kept.
    EnrichmentUnavailable,
}

impl BodyEvent {
    /// Advisories are recomputed on every update instead of accumulating.
    pub fn is_advisory(&self) -> bool {
        matches!(
            self,
            BodyEvent::Heavy { .. }
                | BodyEvent::HighVerticalSpeed { .. }
                | BodyEvent::ExtremeEnergy { .. }
                | BodyEvent::EnrichmentUnavailable
        )
    }

    pub fn is_collision(&self) -> bool {
        matches!(self, BodyEvent::Collision { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_kind_tag() {
        let ev = BodyEvent::Collision { with: BodyId::from("b") };
        let json = serde_json::to_string(&ev).unwrap();
        assert_eq!(json, r#"{"kind":"collision","with":"b"}"#);
        let back: BodyEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ev);
    }

    #[test]
    fn advisory_classification() {
        assert!(BodyEvent::Heavy { mass: 2000.0 }.is_advisory());
        assert!(BodyEvent::EnrichmentUnavailable.is_advisory());
        assert!(!BodyEvent::Collision { with: BodyId::from("x") }.is_advisory());
        assert!(!BodyEvent::DegenerateContact { with: BodyId::from("x") }.is_advisory());
    }
}
