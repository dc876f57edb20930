//! On-page rendering of frequency records.
//!
//! Distinct from the report format in `charfreq-core`: page lines use a
//! space separator and escape the invisible characters so they stay
//! visible in the output panel.

use std::borrow::Cow;

use charfreq_core::FrequencyRecord;

/// The label shown for a character on the analysis panel.
///
/// Newline and carriage return render as their escape sequences, the
/// space character as the word `Space`; everything else is shown verbatim.
#[must_use]
pub fn display_label(ch: char) -> Cow<'static, str> {
    match ch {
        '\n' => Cow::Borrowed("\\n"),
        '\r' => Cow::Borrowed("\\r"),
        ' ' => Cow::Borrowed("Space"),
        other => Cow::Owned(other.to_string()),
    }
}

/// Render records as the analysis panel lines: `label(code) count`.
#[must_use]
pub fn format_lines(records: &[FrequencyRecord]) -> String {
    records
        .iter()
        .map(|r| format!("{}({}) {}", display_label(r.character), r.code, r.count))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_escape_invisibles() {
        assert_eq!(display_label('\n'), "\\n");
        assert_eq!(display_label('\r'), "\\r");
        assert_eq!(display_label(' '), "Space");
        assert_eq!(display_label('H'), "H");
    }

    #[test]
    fn panel_lines_for_hello() {
        let records = charfreq_core::frequencies("Hello.\r\n");
        assert_eq!(
            format_lines(&records),
            "\\n(10) 1\n\\r(13) 1\n.(46) 1\nH(72) 1\ne(101) 1\nl(108) 2\no(111) 1"
        );
    }

    #[test]
    fn space_is_named() {
        let records = charfreq_core::frequencies(" ");
        assert_eq!(format_lines(&records), "Space(32) 1");
    }
}
