//! The contact record consumed by the composer.

use serde::{Deserialize, Serialize};

use super::method::ContactMethodEntry;
use super::phone::PhoneEntry;

/// Photo bytes plus the MIME hint reported by the contact store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub bytes: Vec<u8>,
    /// Free-form hint such as `image/jpeg`; normalized to a vCard image
    /// subtype during composition.
    #[serde(default)]
    pub mime_hint: Option<String>,
}

/// An organization membership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationEntry {
    pub company: String,
    /// Contact-store type code, emitted literally as the TYPE tag.
    pub type_code: i32,
}

/// A fully populated contact.
///
/// Populated entirely by the caller before composition; the composer treats
/// it as read-only. Blank string fields (empty or whitespace only) are
/// skipped during emission, so `Default` gives a record that composes to the
/// minimal valid document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactRecord {
    /// Formatted display name (FN).
    pub display_name: String,
    pub family_name: String,
    pub given_name: String,
    pub middle_name: String,
    pub prefix: String,
    pub suffix: String,
    pub phonetic_given_name: String,
    pub phonetic_middle_name: String,
    pub phonetic_family_name: String,
    /// Only the first note is emitted.
    pub notes: Vec<String>,
    pub title: String,
    pub ringtone: String,
    pub photo: Option<Photo>,
    pub phones: Vec<PhoneEntry>,
    pub methods: Vec<ContactMethodEntry>,
    pub organizations: Vec<OrganizationEntry>,
    /// Group-membership labels, one extension line each.
    pub groups: Vec<String>,
    /// Favorite flag, emitted as `1` or `0` on every document.
    pub starred: bool,
    /// Linked high-resolution photo file name (application extension).
    pub photo_file_name: Option<String>,
}
