//! Phone entry types.

use serde::{Deserialize, Serialize};

/// Raw phone type codes as stored by device contact stores.
mod code {
    pub const CUSTOM: i32 = 0;
    pub const HOME: i32 = 1;
    pub const MOBILE: i32 = 2;
    pub const WORK: i32 = 3;
    pub const FAX_WORK: i32 = 4;
    pub const FAX_HOME: i32 = 5;
    pub const PAGER: i32 = 6;
    pub const OTHER: i32 = 7;
}

/// Classification of a phone number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhoneType {
    Home,
    Mobile,
    Work,
    FaxWork,
    FaxHome,
    Pager,
    Other,
    /// User-defined type; the tag comes from the entry's label.
    Custom,
    /// A raw code outside the known set. Emitted with the default VOICE tag.
    Unrecognized(i32),
}

impl PhoneType {
    /// Maps a raw contact-store type code.
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            code::CUSTOM => Self::Custom,
            code::HOME => Self::Home,
            code::MOBILE => Self::Mobile,
            code::WORK => Self::Work,
            code::FAX_WORK => Self::FaxWork,
            code::FAX_HOME => Self::FaxHome,
            code::PAGER => Self::Pager,
            code::OTHER => Self::Other,
            other => Self::Unrecognized(other),
        }
    }
}

/// One phone number on a contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneEntry {
    /// The number as stored; emitted verbatim.
    pub data: String,
    pub phone_type: PhoneType,
    /// Free-text label, consulted only for [`PhoneType::Custom`].
    #[serde(default)]
    pub label: Option<String>,
}

impl PhoneEntry {
    /// Creates an entry with a standard type.
    #[must_use]
    pub fn new(data: impl Into<String>, phone_type: PhoneType) -> Self {
        Self {
            data: data.into(),
            phone_type,
            label: None,
        }
    }

    /// Creates a custom-typed entry with its free-text label.
    #[must_use]
    pub fn custom(data: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            phone_type: PhoneType::Custom,
            label: Some(label.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code_maps_known_codes() {
        assert_eq!(PhoneType::from_code(0), PhoneType::Custom);
        assert_eq!(PhoneType::from_code(1), PhoneType::Home);
        assert_eq!(PhoneType::from_code(2), PhoneType::Mobile);
        assert_eq!(PhoneType::from_code(3), PhoneType::Work);
        assert_eq!(PhoneType::from_code(4), PhoneType::FaxWork);
        assert_eq!(PhoneType::from_code(5), PhoneType::FaxHome);
        assert_eq!(PhoneType::from_code(6), PhoneType::Pager);
        assert_eq!(PhoneType::from_code(7), PhoneType::Other);
    }

    #[test]
    fn from_code_wraps_unknown_codes() {
        assert_eq!(PhoneType::from_code(42), PhoneType::Unrecognized(42));
        assert_eq!(PhoneType::from_code(-1), PhoneType::Unrecognized(-1));
    }
}
