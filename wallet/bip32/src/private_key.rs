//! Trait for deriving child keys on a given type.

use crate::{Error, PrivateKeyBytes, PublicKey, Result, KEY_SIZE};
use secp256k1::{scalar::Scalar, SecretKey};

/// Trait for key types which can be derived using BIP32.
pub trait PrivateKey: Sized + Clone {
    /// Public key type which corresponds to this private key.
    type PublicKey: PublicKey;

    /// Initialize this key from bytes.
    fn from_bytes(bytes: &PrivateKeyBytes) -> Result<Self>;

    /// Serialize this key as bytes.
    fn to_bytes(&self) -> PrivateKeyBytes;

    /// Derive a child key from a parent key and the left half of the
    /// HMAC-SHA512 output, computing `(tweak + self) mod n`.
    ///
    /// Fails with [`Error::InvalidChild`] when `tweak >= n` or the sum is zero.
    fn derive_child(&self, tweak: PrivateKeyBytes) -> Result<Self>;

    /// Get the [`Self::PublicKey`] that corresponds to this private key.
    fn public_key(&self) -> Self::PublicKey;
}

impl PrivateKey for SecretKey {
    type PublicKey = secp256k1::PublicKey;

    fn from_bytes(bytes: &PrivateKeyBytes) -> Result<Self> {
        Ok(SecretKey::from_slice(bytes)?)
    }

    fn to_bytes(&self) -> PrivateKeyBytes {
        self.secret_bytes()
    }

    fn derive_child(&self, tweak: PrivateKeyBytes) -> Result<Self> {
        let tweak = Scalar::from_be_bytes(tweak).map_err(|_| Error::InvalidChild)?;
        (*self).add_tweak(&tweak).map_err(|_| Error::InvalidChild)
    }

    fn public_key(&self) -> Self::PublicKey {
        secp256k1::PublicKey::from_secret_key_global(self)
    }
}

/// Parse a 32-byte secret scalar from a slice, reporting the slice length on mismatch.
pub fn secret_key_from_slice(bytes: &[u8]) -> Result<SecretKey> {
    let bytes: &PrivateKeyBytes = bytes.try_into().map_err(|_| Error::InvalidKeyLength(bytes.len()))?;
    <SecretKey as PrivateKey>::from_bytes(bytes)
}

/// Parse a secret scalar from exactly 64 hex characters.
pub fn secret_key_from_hex(hex_str: &str) -> Result<SecretKey> {
    if hex_str.len() != KEY_SIZE * 2 {
        return Err(Error::InvalidKeyLength(hex_str.len() / 2));
    }
    let mut bytes = zeroize::Zeroizing::new([0u8; KEY_SIZE]);
    hex::decode_to_slice(hex_str, &mut bytes[..])?;
    <SecretKey as PrivateKey>::from_bytes(&bytes)
}
