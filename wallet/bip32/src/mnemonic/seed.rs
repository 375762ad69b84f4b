//! BIP39 seed values

use crate::{Error, Result};
use std::fmt::{self, Debug};
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

/// 64-byte output of the BIP39 mnemonic-to-seed step, input to
/// [`ExtendedPrivateKey::new`](crate::ExtendedPrivateKey::new).
///
/// Wiped on drop and never printed.
pub struct Seed(pub(crate) [u8; Seed::SIZE]);

impl Seed {
    /// Number of bytes of PBKDF2 output to extract.
    pub const SIZE: usize = 64;

    pub fn new(bytes: [u8; Seed::SIZE]) -> Self {
        Seed(bytes)
    }

    /// Copy a seed out of `bytes`, which must be exactly [`Seed::SIZE`] long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes = <[u8; Seed::SIZE]>::try_from(bytes).map_err(|_| Error::DecodeLength(bytes.len(), Seed::SIZE))?;
        Ok(Seed(bytes))
    }

    /// Get the inner secret byte slice
    pub fn as_bytes(&self) -> &[u8; Seed::SIZE] {
        &self.0
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl ConstantTimeEq for Seed {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

/// NOTE: uses [`ConstantTimeEq`] internally
impl PartialEq for Seed {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Seed {}

impl Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Seed").field(&"...").finish()
    }
}

impl Drop for Seed {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}
