use serde::{Deserialize, Serialize};

use crate::rigid_body::{BodyEvent, BodyId, BodyStatus};

/// One body's diagnostics for a frame in which it collided.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollisionRecord {
    pub frame: u64,
    pub id: BodyId,
    pub events: Vec<BodyEvent>,
}

impl CollisionRecord {
    /// Ids this body collided with during the frame.
    pub fn partners(&self) -> impl Iterator<Item = &BodyId> {
        self.events.iter().filter_map(|e| match e {
            BodyEvent::Collision { with } => Some(with),
            _ => None,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub body_count: usize,
    pub total_energy: f64,
    /// Σ |momentum|² over bodies
    pub total_momentum_magnitude_squared: f64,
}

/// Immutable, JSON-shaped snapshot of the whole sandbox.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationStatus {
    pub frame: u64,
    pub time: f64,
    pub bodies: Vec<BodyStatus>,
    pub collisions: Vec<CollisionRecord>,
    pub summary: Summary,
}

impl SimulationStatus {
    pub fn from_json(json: &str) -> crate::core::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn body(&self, id: &BodyId) -> Option<&BodyStatus> {
        self.bodies.iter().find(|b| &b.id == id)
    }
}

pub(super) fn summarize(bodies: &[BodyStatus]) -> Summary {
    Summary {
        body_count: bodies.len(),
        total_energy: bodies.iter().map(|b| b.energy).sum(),
        total_momentum_magnitude_squared: bodies.iter().map(|b| b.momentum.length_squared()).sum(),
    }
}
