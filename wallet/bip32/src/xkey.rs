//! Parser for extended key types (i.e. `xprv` and `xpub`)

use crate::{base58, ChildNumber, Error, ExtendedKeyAttrs, Prefix, Result, KEY_SIZE};
use core::{
    fmt::{self, Display},
    str::FromStr,
};
use zeroize::{Zeroize, Zeroizing};

/// Serialized extended key (e.g. `xprv` and `xpub`).
#[derive(Clone)]
pub struct ExtendedKey {
    /// [`Prefix`] (a.k.a. "version") of the key (e.g. `xprv`, `xpub`)
    pub prefix: Prefix,

    /// Extended key attributes.
    pub attrs: ExtendedKeyAttrs,

    /// Key material (may be public or private).
    ///
    /// Includes an extra byte for a public key's SEC1 tag, or the `0x00`
    /// padding byte in front of a private key.
    pub key_bytes: [u8; KEY_SIZE + 1],
}

impl ExtendedKey {
    /// Size of an extended key when deserialized into bytes from Base58.
    pub const BYTE_SIZE: usize = 78;

    /// Serialize into the fixed 78-byte layout:
    /// `version ++ depth ++ parent_fingerprint ++ child_number ++ chain_code ++ key_data`.
    pub fn to_bytes(&self) -> Zeroizing<[u8; Self::BYTE_SIZE]> {
        let mut bytes = Zeroizing::new([0u8; Self::BYTE_SIZE]);
        bytes[..4].copy_from_slice(&self.prefix.to_bytes());
        bytes[4] = self.attrs.depth;
        bytes[5..9].copy_from_slice(&self.attrs.parent_fingerprint);
        bytes[9..13].copy_from_slice(&self.attrs.child_number.to_bytes());
        bytes[13..45].copy_from_slice(&self.attrs.chain_code);
        bytes[45..78].copy_from_slice(&self.key_bytes);
        bytes
    }

    /// Hex rendering of [`ExtendedKey::to_bytes`].
    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(self.to_bytes().as_slice()))
    }

    /// Parse the fixed 78-byte layout.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::BYTE_SIZE {
            return Err(Error::DecodeLength(bytes.len(), Self::BYTE_SIZE));
        }

        let prefix = Prefix::from_version(u32::from_be_bytes(bytes[..4].try_into()?))?;
        let depth = bytes[4];
        let parent_fingerprint = bytes[5..9].try_into()?;
        let child_number = ChildNumber::from_bytes(bytes[9..13].try_into()?);
        let chain_code = bytes[13..45].try_into()?;
        let key_bytes = bytes[45..78].try_into()?;

        let attrs = ExtendedKeyAttrs { depth, parent_fingerprint, child_number, chain_code };

        Ok(ExtendedKey { prefix, attrs, key_bytes })
    }
}

impl Display for ExtendedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&base58::check_encode(self.to_bytes().as_slice()))
    }
}

impl FromStr for ExtendedKey {
    type Err = Error;

    fn from_str(base58: &str) -> Result<Self> {
        let mut bytes = base58::check_decode(base58)?;
        let key = Self::from_bytes(&bytes);
        bytes.zeroize();
        key
    }
}

impl Drop for ExtendedKey {
    fn drop(&mut self) {
        self.key_bytes.zeroize();
    }
}
