//! # charfreq-orchestration
//!
//! Runs the frequency tally off the caller's thread as a request-scoped,
//! cancellable task. One worker per invocation; no pooling, no queuing.

pub mod report;
pub mod task;

pub use report::{TallyReport, TaskError};
pub use task::{tally_blocking, TallyTask};
