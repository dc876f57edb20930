//! Task results and errors.

use std::time::Duration;

use charfreq_core::{FrequencyRecord, TallyError};

/// Result of a completed tally run.
///
/// Carries the pass-through input text alongside the record collection so
/// the caller can display both from a single exchange.
#[derive(Debug, Clone)]
pub struct TallyReport {
    /// The input text, unmodified.
    pub text: String,
    /// Frequency records, sorted ascending by scalar value.
    pub records: Vec<FrequencyRecord>,
    /// Computation duration.
    pub duration: Duration,
}

/// Error type for background tally tasks.
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    /// The task was cancelled before completing.
    #[error("tally cancelled")]
    Cancelled,

    /// The worker failed outside the tally itself (panic or runtime
    /// shutdown).
    #[error("tally worker failed: {0}")]
    Worker(String),
}

impl From<TallyError> for TaskError {
    fn from(err: TallyError) -> Self {
        match err {
            TallyError::Cancelled => Self::Cancelled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_error_maps_to_cancelled() {
        assert!(matches!(
            TaskError::from(TallyError::Cancelled),
            TaskError::Cancelled
        ));
    }

    #[test]
    fn error_display() {
        assert_eq!(TaskError::Cancelled.to_string(), "tally cancelled");
        assert_eq!(
            TaskError::Worker("panic".into()).to_string(),
            "tally worker failed: panic"
        );
    }
}
