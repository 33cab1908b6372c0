//! Contact method entries.
//!
//! A contact method is a generic multi-kind value slot: email, postal
//! address, nickname, IM handle, event, relation, or website. The kinds are
//! modeled together because the vCard grammar shares the same type-tag
//! structure across them.

use serde::{Deserialize, Serialize};

/// Email type codes with a dedicated tag.
pub(crate) mod email_code {
    pub const HOME: i32 = 1;
    pub const WORK: i32 = 2;
}

/// Discriminator for [`ContactMethodEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactMethodKind {
    Email,
    Postal,
    Nickname,
    Im,
    Event,
    Relation,
    Website,
}

/// One contact method on a contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMethodEntry {
    pub kind: ContactMethodKind,
    /// The value; emitted folded for multi-line-capable kinds.
    pub data: String,
    /// Kind-dependent type code. Emitted literally for the non-email kinds
    /// that carry a TYPE tag; for email it selects HOME/WORK.
    pub type_code: i32,
    /// Free-text label; for email, consulted when `type_code` has no
    /// dedicated tag.
    #[serde(default)]
    pub label: Option<String>,
}

impl ContactMethodEntry {
    /// Creates an entry without a label.
    #[must_use]
    pub fn new(kind: ContactMethodKind, data: impl Into<String>, type_code: i32) -> Self {
        Self {
            kind,
            data: data.into(),
            type_code,
            label: None,
        }
    }

    /// Attaches a free-text label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}
