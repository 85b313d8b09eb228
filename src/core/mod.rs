//! Shared building blocks: error type and bounded logs.

pub mod error;
pub mod event_log;

pub use error::{Result, SandboxError};
pub use event_log::EventLog;
