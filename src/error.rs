use thiserror::Error;

/// Composition errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComposeError {
    /// The requested version selector is neither vCard 2.1 nor 3.0.
    #[error("unsupported vCard version code {code}; expected 1 (2.1) or 2 (3.0)")]
    UnsupportedVersion {
        /// The rejected selector code.
        code: i32,
    },
}

/// Photo embedding errors.
///
/// Recovered by the record writer: the PHOTO property is omitted and
/// composition continues.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhotoEncodeError {
    /// The base64 output length for the photo would overflow.
    #[error("photo of {size} bytes is too large to base64 encode")]
    Oversized {
        /// Size of the rejected photo in bytes.
        size: usize,
    },
}

pub type ComposeResult<T> = std::result::Result<T, ComposeError>;
