//! The frequency tally: a single pass over a bounded prefix of the input.

use std::collections::BTreeMap;

use tracing::trace;

use crate::cancel::CancellationToken;
use crate::constants::CANCEL_CHECK_INTERVAL;
use crate::options::TallyOptions;
use crate::record::FrequencyRecord;

/// Error type for tally runs.
#[derive(Debug, thiserror::Error)]
pub enum TallyError {
    /// The tally was cancelled at a checkpoint.
    #[error("tally cancelled")]
    Cancelled,
}

/// Count character occurrences over the first `opts.max_chars` characters
/// of `text`.
///
/// Returns one record per distinct character observed, sorted ascending by
/// scalar value and capped at `opts.max_records` entries. The cancellation
/// token is checked every [`CANCEL_CHECK_INTERVAL`] characters; a tripped
/// token aborts the pass with [`TallyError::Cancelled`] and no partial
/// result.
///
/// The function is total for any well-formed string: empty input yields an
/// empty collection, input shorter than the bound is processed entirely,
/// and non-ASCII characters are counted like any other.
pub fn tally(
    text: &str,
    cancel: &CancellationToken,
    opts: &TallyOptions,
) -> Result<Vec<FrequencyRecord>, TallyError> {
    let opts = opts.clone().normalize();

    let mut counts: BTreeMap<char, u64> = BTreeMap::new();
    for (i, ch) in text.chars().take(opts.max_chars).enumerate() {
        if i % CANCEL_CHECK_INTERVAL == 0 {
            cancel.check_cancelled()?;
        }
        *counts.entry(ch).or_insert(0) += 1;
    }

    let distinct = counts.len();
    let mut records: Vec<FrequencyRecord> = counts
        .into_iter()
        .map(|(ch, count)| FrequencyRecord::new(ch, count))
        .collect();
    if records.len() > opts.max_records {
        trace!(
            distinct,
            max_records = opts.max_records,
            "capping record collection"
        );
        records.truncate(opts.max_records);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> Vec<FrequencyRecord> {
        tally(text, &CancellationToken::new(), &TallyOptions::default()).unwrap()
    }

    #[test]
    fn hello_without_newline() {
        let records = run("Hello.");
        assert_eq!(records.len(), 5);
        assert_eq!(records.iter().map(|r| r.count).sum::<u64>(), 6);

        let expected = [('.', 1), ('H', 1), ('e', 1), ('l', 2), ('o', 1)];
        for (record, (ch, count)) in records.iter().zip(expected) {
            assert_eq!(record.character, ch);
            assert_eq!(record.count, count);
        }
    }

    #[test]
    fn hello_as_saved_by_an_editor() {
        // Text editors append CRLF; both control characters get records.
        let records = run("Hello.\r\n");
        assert_eq!(records.len(), 7);
        assert_eq!(records.iter().map(|r| r.count).sum::<u64>(), 8);
        assert_eq!(records[0].code, 10);
        assert_eq!(records[1].code, 13);
    }

    #[test]
    fn empty_input_yields_empty_collection() {
        assert!(run("").is_empty());
    }

    #[test]
    fn sorted_ascending_by_code() {
        let records = run("zZaA!9");
        let codes: Vec<u32> = records.iter().map(|r| r.code).collect();
        assert_eq!(codes, vec![33, 57, 65, 90, 97, 122]);
    }

    #[test]
    fn bound_truncates_long_input() {
        let text = "a".repeat(200_000);
        let opts = TallyOptions {
            max_chars: 10_000,
            max_records: 500,
        };
        let records = tally(&text, &CancellationToken::new(), &opts).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].count, 10_000);
    }

    #[test]
    fn input_exactly_at_bound_is_fully_processed() {
        let text = "ab".repeat(5_000);
        let opts = TallyOptions {
            max_chars: 10_000,
            max_records: 500,
        };
        let records = tally(&text, &CancellationToken::new(), &opts).unwrap();
        assert_eq!(records.iter().map(|r| r.count).sum::<u64>(), 10_000);
        assert_eq!(records[0].count, 5_000);
        assert_eq!(records[1].count, 5_000);
    }

    #[test]
    fn record_cap_keeps_lowest_codes() {
        // 600 distinct characters starting at 'A'.
        let text: String = (0..600u32)
            .map(|i| char::from_u32('A' as u32 + i).unwrap())
            .collect();
        let opts = TallyOptions {
            max_chars: 50_000,
            max_records: 500,
        };
        let records = tally(&text, &CancellationToken::new(), &opts).unwrap();
        assert_eq!(records.len(), 500);
        assert_eq!(records[0].code, 'A' as u32);
        assert_eq!(records[499].code, 'A' as u32 + 499);
    }

    #[test]
    fn non_ascii_input_is_counted() {
        let records = run("héhé");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].character, 'h');
        assert_eq!(records[0].count, 2);
        assert_eq!(records[1].character, 'é');
        assert_eq!(records[1].code, 233);
        assert_eq!(records[1].count, 2);
    }

    #[test]
    fn zero_bounds_fall_back_to_defaults() {
        let opts = TallyOptions {
            max_chars: 0,
            max_records: 0,
        };
        let records = tally("Hello.", &CancellationToken::new(), &opts).unwrap();
        assert_eq!(records.len(), 5);
    }

    #[test]
    fn pre_cancelled_token_aborts() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let result = tally("Hello.", &cancel, &TallyOptions::default());
        assert!(matches!(result, Err(TallyError::Cancelled)));
    }

    #[test]
    fn idempotent_across_runs() {
        let text = "The quick brown fox jumps over the lazy dog.";
        assert_eq!(run(text), run(text));
    }
}
