//! Frequency records and the tutorial report format.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One distinct character and its occurrence count within the processed
/// prefix of an input text.
///
/// `code` is the character's Unicode scalar value; for ASCII input it
/// coincides with the ASCII code the tutorial talks about. The JSON field
/// names match the tutorial's wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyRecord {
    /// The character being counted.
    pub character: char,
    /// Numeric value of the character.
    #[serde(rename = "asciiCode")]
    pub code: u32,
    /// How many times it appears.
    #[serde(rename = "frequency")]
    pub count: u64,
}

impl FrequencyRecord {
    /// Create a record for `character` with the given count.
    #[must_use]
    pub fn new(character: char, count: u64) -> Self {
        Self {
            character,
            code: u32::from(character),
            count,
        }
    }
}

impl fmt::Display for FrequencyRecord {
    /// Report line format: `H(72)\t1` for printables, `(13)\t1` for
    /// control characters, which carry no label.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.character.is_control() {
            write!(f, "({})\t{}", self.code, self.count)
        } else {
            write!(f, "{}({})\t{}", self.character, self.code, self.count)
        }
    }
}

/// Render a record collection as the tutorial's delivery report: one line
/// per record, in the collection's order.
#[must_use]
pub fn report(records: &[FrequencyRecord]) -> String {
    records
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
