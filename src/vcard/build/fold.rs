//! Value folding for multi-line property values.

use crate::vcard::core::VcardVersion;

/// Folds a free-text value for embedding in a single property line.
///
/// Strips one trailing line terminator (either form), normalizes embedded
/// CRLF to LF, then marks each remaining break with the version's
/// continuation convention: CRLF + space for 2.1, LF + space for 3.0.
/// Consumers reassemble the value by dropping the leading space of each
/// continuation line.
#[must_use]
pub fn fold_value(text: &str, version: VcardVersion) -> String {
    let stripped = text
        .strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text);
    let normalized = stripped.replace("\r\n", "\n");

    match version {
        VcardVersion::V21 => normalized.replace('\n', "\r\n "),
        VcardVersion::V30 => normalized.replace('\n', "\n "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line_unchanged() {
        assert_eq!(fold_value("hello", VcardVersion::V21), "hello");
        assert_eq!(fold_value("hello", VcardVersion::V30), "hello");
    }

    #[test]
    fn v21_folds_with_crlf_space() {
        assert_eq!(
            fold_value("line one\nline two", VcardVersion::V21),
            "line one\r\n line two"
        );
    }

    #[test]
    fn v30_folds_with_lf_space() {
        assert_eq!(
            fold_value("line one\nline two", VcardVersion::V30),
            "line one\n line two"
        );
    }

    #[test]
    fn embedded_crlf_is_normalized() {
        assert_eq!(
            fold_value("a\r\nb\nc", VcardVersion::V30),
            "a\n b\n c"
        );
    }

    #[test]
    fn one_trailing_terminator_is_stripped() {
        assert_eq!(fold_value("note\n", VcardVersion::V21), "note");
        assert_eq!(fold_value("note\r\n", VcardVersion::V21), "note");
        // Only one terminator is stripped; the rest fold.
        assert_eq!(fold_value("note\n\n", VcardVersion::V30), "note\n ");
    }

    #[test]
    fn empty_value_stays_empty() {
        assert_eq!(fold_value("", VcardVersion::V21), "");
    }
}
