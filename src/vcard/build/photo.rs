//! PHOTO property encoding.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use super::fold::fold_value;
use crate::error::PhotoEncodeError;
use crate::vcard::core::VcardVersion;

/// Known image subtypes matched inside the MIME hint, in priority order.
const KNOWN_SUBTYPES: [&str; 4] = ["JPEG", "GIF", "BMP", "PNG"];

/// Normalizes a MIME hint to the TYPE tag of the PHOTO property.
///
/// Matches case-insensitively against the known subtypes; a missing or
/// blank hint, or one naming none of them and carrying no `/`, defaults to
/// the upper-cased hint (JPEG when absent). Hints like `image/tiff` use the
/// upper-cased text after the slash.
#[must_use]
pub fn image_subtype(hint: Option<&str>) -> String {
    let Some(hint) = hint.filter(|h| !h.trim().is_empty()) else {
        return "JPEG".to_string();
    };

    let upper = hint.to_uppercase();
    for known in KNOWN_SUBTYPES {
        if upper.contains(known) {
            return known.to_string();
        }
    }

    match upper.find('/') {
        Some(slash) => upper[slash + 1..].to_string(),
        None => upper,
    }
}

/// Builds the complete PHOTO property text, without the final line
/// terminator. The 2.1 form carries its trailing blank continuation line.
///
/// The base64 encoder produces a single unbroken line, which is then folded
/// per the version rule.
///
/// # Errors
///
/// Fails when the base64 output length for the photo would overflow; the
/// record writer recovers by omitting the property.
pub fn photo_property(
    bytes: &[u8],
    mime_hint: Option<&str>,
    version: VcardVersion,
) -> Result<String, PhotoEncodeError> {
    if base64::encoded_len(bytes.len(), true).is_none() {
        return Err(PhotoEncodeError::Oversized { size: bytes.len() });
    }

    let encoded = fold_value(&STANDARD.encode(bytes), version);
    let subtype = image_subtype(mime_hint);

    Ok(match version {
        VcardVersion::V21 => {
            format!("PHOTO;TYPE={subtype};ENCODING=BASE64:{encoded}\r\n")
        }
        VcardVersion::V30 => format!("PHOTO;TYPE={subtype};ENCODING=B:{encoded}"),
    })
}
