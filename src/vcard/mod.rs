//! vCard 2.1 / 3.0 composition for contact records.
//!
//! ## Overview
//!
//! This module turns a fully populated [`ContactRecord`] into a single
//! vCard document string targeting version 2.1 or 3.0. The two versions
//! differ in line terminator (CRLF vs LF), type-tag join mark (`;` vs `,`),
//! and photo encoding parameter (`BASE64` vs `B`); the composer handles all
//! three consistently.
//!
//! Composition is a pure transformation: no I/O, no retained state, and a
//! broken photo degrades to a document without the PHOTO property rather
//! than a failure.
//!
//! ## Submodules
//!
//! - [`core`] — the contact data model ([`ContactRecord`], [`PhoneEntry`],
//!   [`ContactMethodEntry`], [`VcardVersion`])
//! - [`build`] — composition ([`compose`], [`Composition`])

pub mod build;
pub mod core;

#[cfg(test)]
mod tests;

pub use build::{Composition, compose, compose_code};
pub use core::{
    ContactMethodEntry, ContactMethodKind, ContactRecord, OrganizationEntry, PhoneEntry, PhoneType,
    Photo, VcardVersion,
};
