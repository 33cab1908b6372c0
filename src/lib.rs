//! Contact-record to vCard composition.
//!
//! `cardex` composes vCard 2.1 and 3.0 documents from in-memory contact
//! records: names, phone numbers, emails, postal/IM/event/relation/website
//! entries, organizations, an embedded photo, notes, and a handful of
//! `X-` extension properties used by contact backup tooling.
//!
//! ## Usage
//!
//! ```rust
//! use cardex::{ContactRecord, PhoneEntry, PhoneType, VcardVersion, compose};
//!
//! let record = ContactRecord {
//!     display_name: "Jane Doe".to_string(),
//!     family_name: "Doe".to_string(),
//!     given_name: "Jane".to_string(),
//!     phones: vec![PhoneEntry::new("+1-555-0100", PhoneType::Mobile)],
//!     ..ContactRecord::default()
//! };
//!
//! let composition = compose(&record, VcardVersion::V30);
//! assert!(composition.document.contains("TEL;TYPE=CELL:+1-555-0100\n"));
//! ```
//!
//! The fallible entry point [`compose_code`] resolves the legacy integer
//! version selector and fails with
//! [`ComposeError::UnsupportedVersion`](error::ComposeError) for anything
//! but the two recognized codes.

pub mod error;
pub mod vcard;

pub use error::{ComposeError, ComposeResult, PhotoEncodeError};
pub use vcard::build::{Composition, compose, compose_code};
pub use vcard::core::{
    ContactMethodEntry, ContactMethodKind, ContactRecord, OrganizationEntry, PhoneEntry, PhoneType,
    Photo, VcardVersion,
};
