//! vCard document composition.
//!
//! ## Usage
//!
//! ```rust
//! use cardex::{ContactRecord, VcardVersion, compose};
//!
//! let record = ContactRecord {
//!     display_name: "John Doe".to_string(),
//!     family_name: "Doe".to_string(),
//!     given_name: "John".to_string(),
//!     ..ContactRecord::default()
//! };
//!
//! let composition = compose(&record, VcardVersion::V30);
//! assert!(composition.document.contains("FN:John Doe\n"));
//! assert!(composition.document.contains("N:Doe;John;;;\n"));
//! ```
//!
//! Three pieces share one output buffer during a composition pass: the
//! record writer (`composer`) orchestrates property emission order and the
//! BEGIN/VERSION/END envelope, the type-merge engine (`merge`) groups
//! repeated phone/email values and accumulates their type tags into one
//! property line, and the value encoders (`fold`, `photo`) handle
//! version-aware line folding and base64 photo embedding.

mod composer;
mod fold;
mod merge;
mod photo;

pub use composer::{Composition, compose, compose_code};
pub use fold::fold_value;
pub use merge::{TagMerger, email_tag, phone_tag};
pub use photo::{image_subtype, photo_property};

/// Blank means empty or whitespace only; blank fields are never emitted.
pub(crate) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
