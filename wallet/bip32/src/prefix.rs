//! Extended key prefixes (a.k.a. "versions")

use crate::{Error, Result, Version};
use core::fmt::{self, Debug, Display};

/// Extended key prefix: the four ASCII characters a Base58Check-serialized
/// key starts with together with the version bytes that produce them.
#[derive(Copy, Clone, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Prefix {
    chars: &'static str,
    version: Version,
}

impl Prefix {
    /// `xprv`: mainnet extended private key.
    pub const XPRV: Self = Self::from_parts_unchecked("xprv", 0x0488_ade4);

    /// `xpub`: mainnet extended public key.
    pub const XPUB: Self = Self::from_parts_unchecked("xpub", 0x0488_b21e);

    /// `tprv`: testnet extended private key.
    pub const TPRV: Self = Self::from_parts_unchecked("tprv", 0x0435_8394);

    /// `tpub`: testnet extended public key.
    pub const TPUB: Self = Self::from_parts_unchecked("tpub", 0x0435_87cf);

    const KNOWN: [Prefix; 4] = [Self::XPRV, Self::XPUB, Self::TPRV, Self::TPUB];

    /// Length of a prefix in characters.
    pub const LENGTH: usize = 4;

    /// Create a prefix without checking that `chars` is what `version`
    /// encodes to.
    pub(crate) const fn from_parts_unchecked(chars: &'static str, version: Version) -> Self {
        Self { chars, version }
    }

    /// Look up a known prefix by its version bytes.
    pub fn from_version(version: Version) -> Result<Self> {
        Self::KNOWN.into_iter().find(|prefix| prefix.version == version).ok_or(Error::Prefix)
    }

    /// Get the four-character string form of this prefix.
    pub fn as_str(&self) -> &'static str {
        self.chars
    }

    /// Get the [`Version`] of this prefix.
    pub fn version(&self) -> Version {
        self.version
    }

    /// Is this a prefix for a private key?
    pub fn is_private(&self) -> bool {
        self.chars.ends_with("prv")
    }

    /// Is this a prefix for a public key?
    pub fn is_public(&self) -> bool {
        self.chars.ends_with("pub")
    }

    /// The public-key counterpart of a private prefix (identity for public prefixes).
    pub fn to_public(self) -> Self {
        match self {
            Self::XPRV => Self::XPUB,
            Self::TPRV => Self::TPUB,
            other => other,
        }
    }

    /// Serialize the [`Version`] as big endian bytes.
    pub fn to_bytes(&self) -> [u8; 4] {
        self.version.to_be_bytes()
    }
}

impl AsRef<str> for Prefix {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Debug for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prefix").field("chars", &self.chars).field("version", &format_args!("{:#010x}", self.version)).finish()
    }
}

impl Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Prefix {
    type Error = Error;

    fn try_from(chars: &str) -> Result<Prefix> {
        Self::KNOWN.into_iter().find(|prefix| prefix.chars == chars).ok_or(Error::Prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::Prefix;

    #[test]
    fn lookup_by_version_and_chars() {
        assert_eq!(Prefix::from_version(0x0488ade4).unwrap(), Prefix::XPRV);
        assert_eq!(Prefix::try_from("tpub").unwrap(), Prefix::TPUB);
        assert!(Prefix::from_version(0x049d7cb2).is_err());
        assert!(Prefix::try_from("kprv").is_err());
    }

    #[test]
    fn kind_and_counterpart() {
        assert!(Prefix::XPRV.is_private() && !Prefix::XPRV.is_public());
        assert!(Prefix::TPUB.is_public());
        assert_eq!(Prefix::XPRV.to_public(), Prefix::XPUB);
        assert_eq!(Prefix::TPRV.to_public(), Prefix::TPUB);
        assert_eq!(Prefix::XPUB.to_bytes(), [0x04, 0x88, 0xb2, 0x1e]);
    }
}
