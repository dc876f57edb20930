//! # charfreq-core
//!
//! Core library for the CharFreq tutorial: computes character occurrence
//! counts over a bounded prefix of an input text and formats the resulting
//! records in the tutorial's report style.

pub mod cancel;
pub mod constants;
pub mod options;
pub mod record;
pub mod tally;

// Re-exports
pub use cancel::CancellationToken;
pub use constants::{CANCEL_CHECK_INTERVAL, DEFAULT_MAX_CHARS, DEFAULT_MAX_RECORDS};
pub use options::TallyOptions;
pub use record::{report, FrequencyRecord};
pub use tally::{tally, TallyError};

/// Tally character frequencies with default options.
///
/// This is a convenience function for simple use cases. For explicit bounds
/// or cooperative cancellation, use [`tally`] directly.
///
/// # Example
/// ```
/// let records = charfreq_core::frequencies("Hello.");
/// assert_eq!(records.len(), 5);
/// assert_eq!(records.iter().map(|r| r.count).sum::<u64>(), 6);
/// ```
#[must_use]
pub fn frequencies(text: &str) -> Vec<FrequencyRecord> {
    let cancel = CancellationToken::new();
    tally(text, &cancel, &TallyOptions::default())
        .expect("tally cannot fail without cancellation")
}
