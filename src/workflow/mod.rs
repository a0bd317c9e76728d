//! Workflow module
//!
//! This module contains the bottom-up walk and the events it reports.

pub mod context;
pub mod engine;
pub mod events;

pub use context::{RunStats, WorkflowContext};
pub use engine::mass_replace;
pub use events::{LogReporter, RecordingReporter, RenameEvent, Reporter};
