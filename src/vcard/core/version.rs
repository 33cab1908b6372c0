//! vCard version selector.

use crate::error::ComposeError;

/// Target vCard version.
///
/// The two versions differ in line terminator, type-tag join mark, and the
/// PHOTO encoding parameter; every version-dependent choice in the builder
/// hangs off this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VcardVersion {
    /// vCard 2.1 (versit).
    V21,
    /// vCard 3.0 (RFC 2426).
    V30,
}

impl VcardVersion {
    /// Legacy selector code for vCard 2.1.
    pub const CODE_V21: i32 = 1;
    /// Legacy selector code for vCard 3.0.
    pub const CODE_V30: i32 = 2;

    /// Resolves a raw selector code.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::UnsupportedVersion`] for any code other than
    /// [`Self::CODE_V21`] and [`Self::CODE_V30`].
    pub const fn from_code(code: i32) -> Result<Self, ComposeError> {
        match code {
            Self::CODE_V21 => Ok(Self::V21),
            Self::CODE_V30 => Ok(Self::V30),
            _ => Err(ComposeError::UnsupportedVersion { code }),
        }
    }

    /// Parses from version string.
    #[must_use]
    #[expect(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "2.1" => Some(Self::V21),
            "3.0" => Some(Self::V30),
            _ => None,
        }
    }

    /// Returns the version string emitted on the VERSION line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V21 => "2.1",
            Self::V30 => "3.0",
        }
    }

    /// Terminator used for every physical line of the document.
    #[must_use]
    pub const fn line_terminator(self) -> &'static str {
        match self {
            Self::V21 => "\r\n",
            Self::V30 => "\n",
        }
    }

    /// Join mark between accumulated type tags on one property line.
    #[must_use]
    pub const fn tag_join(self) -> char {
        match self {
            Self::V21 => ';',
            Self::V30 => ',',
        }
    }
}

impl core::str::FromStr for VcardVersion {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VcardVersion::from_str(s).ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_resolve() {
        assert_eq!(VcardVersion::from_code(1), Ok(VcardVersion::V21));
        assert_eq!(VcardVersion::from_code(2), Ok(VcardVersion::V30));
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert_eq!(
            VcardVersion::from_code(3),
            Err(ComposeError::UnsupportedVersion { code: 3 })
        );
    }

    #[test]
    fn version_strings() {
        assert_eq!(VcardVersion::V21.as_str(), "2.1");
        assert_eq!(VcardVersion::V30.as_str(), "3.0");
        assert_eq!("2.1".parse(), Ok(VcardVersion::V21));
        assert_eq!("3.0".parse(), Ok(VcardVersion::V30));
        assert_eq!("4.0".parse::<VcardVersion>(), Err(()));
    }

    #[test]
    fn terminators_differ_by_version() {
        assert_eq!(VcardVersion::V21.line_terminator(), "\r\n");
        assert_eq!(VcardVersion::V30.line_terminator(), "\n");
        assert_eq!(VcardVersion::V21.tag_join(), ';');
        assert_eq!(VcardVersion::V30.tag_join(), ',');
    }
}
