//! Type-tag mapping and value merging for TEL and EMAIL properties.
//!
//! The vCard grammar allows one property instance per distinct value, with
//! every applicable type tag attached to that instance. Source entries that
//! repeat a value therefore merge into a single line whose tag is the join
//! of all contributed tags.

use indexmap::IndexMap;
use indexmap::map::Entry;

use super::is_blank;
use crate::vcard::core::{PhoneEntry, PhoneType, VcardVersion, email_code};

/// Standard phone type keywords a custom label may name directly.
const PHONE_TYPE_KEYWORDS: [&str; 13] = [
    "PREF", "WORK", "HOME", "VOICE", "FAX", "MSG", "CELL", "PAGER", "BBS", "MODEM", "CAR", "ISDN",
    "VIDEO",
];

/// Legacy email service tags a label may name directly.
const EMAIL_TYPE_KEYWORDS: [&str; 13] = [
    "CELL",
    "AOL",
    "APPLELINK",
    "ATTMAIL",
    "CIS",
    "EWORLD",
    "INTERNET",
    "IBMMAIL",
    "MCIMAIL",
    "POWERSHARE",
    "PRODIGY",
    "TLX",
    "X400",
];

/// Default tag for phone type codes outside the known set.
const DEFAULT_PHONE_TAG: &str = "VOICE";

/// Computes the type tag for one phone entry.
///
/// Custom entries without a usable label yield `None` and are dropped from
/// the output entirely. For 3.0 the 2.1-style `;` inside combination tags
/// (the FAX pairs) is rewritten to `,` so 3.0 tags are always comma-joined.
#[must_use]
pub fn phone_tag(entry: &PhoneEntry, version: VcardVersion) -> Option<String> {
    let tag = match entry.phone_type {
        PhoneType::Home => "HOME".to_string(),
        PhoneType::Mobile => "CELL".to_string(),
        PhoneType::Work => "WORK".to_string(),
        // No single keyword exists for a work/home fax; combine with FAX.
        PhoneType::FaxWork => "WORK;FAX".to_string(),
        PhoneType::FaxHome => "HOME;FAX".to_string(),
        PhoneType::Pager => "PAGER".to_string(),
        PhoneType::Other => "X-OTHER".to_string(),
        PhoneType::Unrecognized(_) => DEFAULT_PHONE_TAG.to_string(),
        PhoneType::Custom => {
            let label = entry.label.as_deref().filter(|l| !is_blank(l))?;
            let upper = label.to_uppercase();
            if PHONE_TYPE_KEYWORDS.contains(&upper.as_str()) || upper.starts_with("X-") {
                upper
            } else {
                format!("X-CUSTOM-{upper}")
            }
        }
    };

    if version == VcardVersion::V30 && tag.contains(';') {
        Some(tag.replace(';', ","))
    } else {
        Some(tag)
    }
}

/// Computes the type tag for one email entry.
///
/// Type codes without a dedicated tag fall back to a label matching one of
/// the legacy service tags; otherwise the tag is empty. An email with an
/// empty tag is still emitted.
#[must_use]
pub fn email_tag(type_code: i32, label: Option<&str>) -> String {
    match type_code {
        email_code::HOME => "HOME".to_string(),
        email_code::WORK => "WORK".to_string(),
        _ => label
            .map(str::to_uppercase)
            .filter(|upper| EMAIL_TYPE_KEYWORDS.contains(&upper.as_str()))
            .unwrap_or_default(),
    }
}

/// Accumulates `(value, tag)` pairs, merging repeated values into one entry
/// whose tag is the join of all contributed tags.
///
/// Backed by an insertion-ordered map, so emission order is first-seen
/// source order and output is deterministic.
#[derive(Debug)]
pub struct TagMerger {
    join: char,
    entries: IndexMap<String, String>,
}

impl TagMerger {
    #[must_use]
    pub fn new(version: VcardVersion) -> Self {
        Self {
            join: version.tag_join(),
            entries: IndexMap::new(),
        }
    }

    /// Adds one value with its tag.
    pub fn add(&mut self, value: &str, tag: &str) {
        match self.entries.entry(value.to_string()) {
            Entry::Occupied(mut slot) => {
                let tags = slot.get_mut();
                tags.push(self.join);
                tags.push_str(tag);
            }
            Entry::Vacant(slot) => {
                slot.insert(tag.to_string());
            }
        }
    }

    /// Consumes the merger, yielding `(value, joined tags)` in first-seen
    /// order.
    pub fn into_merged(self) -> impl Iterator<Item = (String, String)> {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(phone_type: PhoneType) -> PhoneEntry {
        PhoneEntry::new("555-1234", phone_type)
    }

    #[test]
    fn standard_phone_tags() {
        let cases = [
            (PhoneType::Home, "HOME"),
            (PhoneType::Mobile, "CELL"),
            (PhoneType::Work, "WORK"),
            (PhoneType::FaxWork, "WORK;FAX"),
            (PhoneType::FaxHome, "HOME;FAX"),
            (PhoneType::Pager, "PAGER"),
            (PhoneType::Other, "X-OTHER"),
        ];
        for (phone_type, expected) in cases {
            assert_eq!(
                phone_tag(&typed(phone_type), VcardVersion::V21).as_deref(),
                Some(expected)
            );
        }
    }

    #[test]
    fn unrecognized_code_defaults_to_voice() {
        assert_eq!(
            phone_tag(&typed(PhoneType::Unrecognized(99)), VcardVersion::V21).as_deref(),
            Some("VOICE")
        );
    }

    #[test]
    fn v30_rewrites_combination_tags_to_commas() {
        assert_eq!(
            phone_tag(&typed(PhoneType::FaxHome), VcardVersion::V30).as_deref(),
            Some("HOME,FAX")
        );
        // Single-keyword tags are unaffected.
        assert_eq!(
            phone_tag(&typed(PhoneType::Work), VcardVersion::V30).as_deref(),
            Some("WORK")
        );
    }

    #[test]
    fn custom_label_matching_keyword_is_used_directly() {
        assert_eq!(
            phone_tag(&PhoneEntry::custom("555-1234", "work"), VcardVersion::V21).as_deref(),
            Some("WORK")
        );
    }

    #[test]
    fn custom_x_prefixed_label_is_kept() {
        assert_eq!(
            phone_tag(&PhoneEntry::custom("555-1234", "x-assistant"), VcardVersion::V21).as_deref(),
            Some("X-ASSISTANT")
        );
    }

    #[test]
    fn custom_free_label_is_wrapped() {
        assert_eq!(
            phone_tag(&PhoneEntry::custom("555-1234", "skype"), VcardVersion::V21).as_deref(),
            Some("X-CUSTOM-SKYPE")
        );
    }

    #[test]
    fn custom_without_label_is_dropped() {
        let entry = typed(PhoneType::Custom);
        assert_eq!(phone_tag(&entry, VcardVersion::V21), None);

        let blank = PhoneEntry::custom("555-1234", "   ");
        assert_eq!(phone_tag(&blank, VcardVersion::V30), None);
    }

    #[test]
    fn email_tags_for_known_codes() {
        assert_eq!(email_tag(1, None), "HOME");
        assert_eq!(email_tag(2, None), "WORK");
    }

    #[test]
    fn email_legacy_service_label_is_used() {
        assert_eq!(email_tag(3, Some("aol")), "AOL");
        assert_eq!(email_tag(0, Some("X400")), "X400");
    }

    #[test]
    fn email_unknown_classification_yields_empty_tag() {
        assert_eq!(email_tag(3, None), "");
        assert_eq!(email_tag(3, Some("gmail")), "");
    }

    #[test]
    fn repeated_values_merge_tags() {
        let mut merger = TagMerger::new(VcardVersion::V30);
        merger.add("555-1234", "HOME");
        merger.add("555-1234", "HOME,FAX");
        merger.add("555-9876", "CELL");

        let merged: Vec<_> = merger.into_merged().collect();
        assert_eq!(
            merged,
            vec![
                ("555-1234".to_string(), "HOME,HOME,FAX".to_string()),
                ("555-9876".to_string(), "CELL".to_string()),
            ]
        );
    }

    #[test]
    fn v21_merge_joins_with_semicolons() {
        let mut merger = TagMerger::new(VcardVersion::V21);
        merger.add("555-1234", "HOME");
        merger.add("555-1234", "WORK;FAX");

        let merged: Vec<_> = merger.into_merged().collect();
        assert_eq!(merged[0].1, "HOME;WORK;FAX");
    }

    #[test]
    fn merge_order_is_first_seen() {
        let mut merger = TagMerger::new(VcardVersion::V30);
        merger.add("b", "HOME");
        merger.add("a", "WORK");
        merger.add("b", "CELL");

        let values: Vec<_> = merger.into_merged().map(|(value, _)| value).collect();
        assert_eq!(values, vec!["b".to_string(), "a".to_string()]);
    }
}
