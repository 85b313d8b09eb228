//! Per-frame body samples handed to an observer owned by the sandbox.
//!
//! Replaces a process-wide learning singleton: the sink is created with the
//! sandbox and dropped with it.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::core::EventLog;
use crate::rigid_body::{BodyId, Vec3};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodySample {
    pub frame: u64,
    pub id: BodyId,
    pub position: Vec3,
    pub velocity: Vec3,
    pub momentum: Vec3,
    pub energy: f64,
}

pub trait SampleSink {
    fn record(&mut self, sample: &BodySample);

    /// Called when the sandbox is reset.
    fn clear(&mut self) {}
}

/// Discards every sample.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl SampleSink for NullSink {
    fn record(&mut self, _sample: &BodySample) {}
}

/// Keeps the most recent samples in a bounded buffer.
#[derive(Clone, Debug)]
pub struct SampleRecorder {
    samples: EventLog<BodySample>,
}

impl SampleRecorder {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { samples: EventLog::with_capacity(capacity) }
    }

    pub fn samples(&self) -> &EventLog<BodySample> {
        &self.samples
    }

    pub fn latest(&self, id: &BodyId) -> Option<&BodySample> {
        self.samples.iter().rev().find(|s| &s.id == id)
    }

    /// Oldest-first history of one body.
    pub fn history(&self, id: &BodyId) -> Vec<&BodySample> {
        self.samples.iter().filter(|s| &s.id == id).collect()
    }
}

impl SampleSink for SampleRecorder {
    fn record(&mut self, sample: &BodySample) {
        self.samples.push(sample.clone());
    }

    fn clear(&mut self) {
        self.samples.clear();
    }
}

/// Lets a caller keep a handle on a sink the sandbox owns.
impl<T: SampleSink + ?Sized> SampleSink for Rc<RefCell<T>> {
    fn record(&mut self, sample: &BodySample) {
        self.borrow_mut().record(sample);
    }

    fn clear(&mut self) {
        self.borrow_mut().clear();
    }
}
