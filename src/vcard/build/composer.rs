//! Record writer: drives property emission for one composition pass.

use tracing::warn;

use super::fold::fold_value;
use super::is_blank;
use super::merge::{TagMerger, email_tag, phone_tag};
use super::photo::photo_property;
use crate::error::ComposeError;
use crate::vcard::core::{ContactMethodEntry, ContactMethodKind, ContactRecord, VcardVersion};

/// Extension property carrying the linked high-resolution photo file name.
const PROP_PHOTO_FILE_NAME: &str = "X-PHOTO-FILE-NAME";
/// Extension property, one line per group-membership label.
const PROP_GROUP: &str = "X-GROUP";
/// Extension property carrying the starred flag as `1` or `0`.
const PROP_STARRED: &str = "X-STARRED";

/// Result of one composition pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    /// The complete vCard document.
    pub document: String,
    /// True when photo bytes were present but could not be embedded. The
    /// rest of the document is still complete.
    pub photo_omitted: bool,
}

/// Composes a vCard document for `record` targeting `version`.
///
/// Pure transformation: all scratch state lives in a per-call writer, so
/// composing the same record twice yields byte-identical output and
/// concurrent calls cannot interfere. A failure while embedding the photo
/// is recovered by omitting the PHOTO property and flagging it on the
/// returned [`Composition`].
#[must_use]
pub fn compose(record: &ContactRecord, version: VcardVersion) -> Composition {
    Writer::new(record, version).run()
}

/// Composes for a raw version selector code.
///
/// # Errors
///
/// Returns [`ComposeError::UnsupportedVersion`] for any code other than
/// [`VcardVersion::CODE_V21`] and [`VcardVersion::CODE_V30`]; no partial
/// output is produced.
pub fn compose_code(record: &ContactRecord, code: i32) -> Result<Composition, ComposeError> {
    Ok(compose(record, VcardVersion::from_code(code)?))
}

/// Per-call scratch state, discarded when composition returns.
struct Writer<'a> {
    record: &'a ContactRecord,
    version: VcardVersion,
    out: String,
    photo_omitted: bool,
}

impl<'a> Writer<'a> {
    fn new(record: &'a ContactRecord, version: VcardVersion) -> Self {
        Self {
            record,
            version,
            out: String::new(),
            photo_omitted: false,
        }
    }

    fn run(mut self) -> Composition {
        let record = self.record;

        self.line("BEGIN:VCARD");
        self.line(&format!("VERSION:{}", self.version.as_str()));

        self.text_property("FN", &record.display_name);
        self.structured_name();
        self.text_property("X-PHONETIC-FIRST-NAME", &record.phonetic_given_name);
        self.text_property("X-PHONETIC-MIDDLE-NAME", &record.phonetic_middle_name);
        self.text_property("X-PHONETIC-LAST-NAME", &record.phonetic_family_name);

        if let Some(note) = record.notes.first() {
            self.folded_property("NOTE", note);
        }
        self.folded_property("TITLE", &record.title);
        self.folded_property("RINGTONE", &record.ringtone);

        self.photo();
        self.phones();
        self.contact_methods();
        self.organizations();

        if let Some(name) = &record.photo_file_name {
            self.text_property(PROP_PHOTO_FILE_NAME, name);
        }
        for group in &record.groups {
            self.line(&format!("{PROP_GROUP}:{group}"));
        }
        let starred = if record.starred { '1' } else { '0' };
        self.line(&format!("{PROP_STARRED}:{starred}"));

        self.line("END:VCARD");

        Composition {
            document: self.out,
            photo_omitted: self.photo_omitted,
        }
    }

    /// Appends one physical line plus the version terminator.
    fn line(&mut self, text: &str) {
        self.out.push_str(text);
        self.out.push_str(self.version.line_terminator());
    }

    /// Emits `NAME:value` verbatim when the value is non-blank.
    fn text_property(&mut self, name: &str, value: &str) {
        if !is_blank(value) {
            self.line(&format!("{name}:{value}"));
        }
    }

    /// Emits `NAME:value` with the value folded, when non-blank.
    fn folded_property(&mut self, name: &str, value: &str) {
        if !is_blank(value) {
            let folded = fold_value(value, self.version);
            self.line(&format!("{name}:{folded}"));
        }
    }

    /// N is mandatory; blank components render empty between semicolons.
    fn structured_name(&mut self) {
        let record = self.record;
        let parts = [
            &record.family_name,
            &record.given_name,
            &record.middle_name,
            &record.prefix,
            &record.suffix,
        ];

        let mut line = String::from("N:");
        for (i, part) in parts.iter().enumerate() {
            if i > 0 {
                line.push(';');
            }
            if !is_blank(part) {
                line.push_str(part);
            }
        }
        self.line(&line);
    }

    fn photo(&mut self) {
        let record = self.record;
        let Some(photo) = &record.photo else {
            return;
        };

        match photo_property(&photo.bytes, photo.mime_hint.as_deref(), self.version) {
            Ok(property) => self.line(&property),
            Err(err) => {
                // A broken photo must never block export of the contact.
                warn!(error = %err, "omitting PHOTO property");
                self.photo_omitted = true;
            }
        }
    }

    fn phones(&mut self) {
        let record = self.record;
        let mut merger = TagMerger::new(self.version);

        for phone in &record.phones {
            if is_blank(&phone.data) {
                continue;
            }
            if let Some(tag) = phone_tag(phone, self.version) {
                merger.add(&phone.data, &tag);
            }
        }

        let prefix = match self.version {
            VcardVersion::V21 => "TEL;",
            VcardVersion::V30 => "TEL;TYPE=",
        };
        for (value, tags) in merger.into_merged() {
            self.line(&format!("{prefix}{tags}:{value}"));
        }
    }

    /// Non-email kinds emit inline in source order; emails accumulate and
    /// flush as merged lines after the loop.
    fn contact_methods(&mut self) {
        let record = self.record;
        let mut emails = TagMerger::new(self.version);

        for method in &record.methods {
            if is_blank(&method.data) {
                continue;
            }
            match method.kind {
                ContactMethodKind::Email => {
                    let tag = email_tag(method.type_code, method.label.as_deref());
                    emails.add(&method.data, &tag);
                }
                ContactMethodKind::Postal => {
                    self.folded_property("ADR;TYPE=POSTAL", &method.data);
                }
                ContactMethodKind::Nickname => self.typed_method("NICKNAME", method),
                ContactMethodKind::Im => self.typed_method("IM", method),
                ContactMethodKind::Event => self.typed_method("EVENT", method),
                ContactMethodKind::Relation => self.typed_method("RELATION", method),
                ContactMethodKind::Website => self.folded_property("WEBSITE", &method.data),
            }
        }

        let prefix = match self.version {
            VcardVersion::V21 => "EMAIL;",
            VcardVersion::V30 => "EMAIL;TYPE=",
        };
        for (value, tags) in emails.into_merged() {
            self.line(&format!("{prefix}{tags}:{value}"));
        }
    }

    /// Emits `NAME;TYPE=<code>:<folded data>` for the kinds that carry
    /// their numeric type code literally.
    fn typed_method(&mut self, name: &str, method: &ContactMethodEntry) {
        let folded = fold_value(&method.data, self.version);
        self.line(&format!("{name};TYPE={}:{folded}", method.type_code));
    }

    fn organizations(&mut self) {
        let record = self.record;
        for org in &record.organizations {
            if is_blank(&org.company) {
                continue;
            }
            let folded = fold_value(&org.company, self.version);
            self.line(&format!("ORG;TYPE={}:{folded}", org.type_code));
        }
    }
}
