//! Extended public keys
//!
use crate::{
    address, hash, types::*, ChildNumber, DerivationPath, Error, ExtendedKey, ExtendedKeyAttrs, ExtendedPrivateKey, KeyFingerprint,
    Prefix, PrivateKey, PublicKey, PublicKeyBytes, Result, KEY_SIZE,
};
use core::str::FromStr;

/// Extended public keys derived using BIP32.
///
/// Generic around a [`PublicKey`] type. A public-only node can derive
/// non-hardened children; the [`XPub`](crate::XPub) alias covers secp256k1.
#[derive(Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub struct ExtendedPublicKey<K: PublicKey> {
    /// Derived public key
    pub public_key: K,

    /// Extended key attributes.
    pub attrs: ExtendedKeyAttrs,
}

impl<K> ExtendedPublicKey<K>
where
    K: PublicKey,
{
    /// Obtain the non-extended public key value `K`.
    pub fn public_key(&self) -> &K {
        &self.public_key
    }

    /// Get attributes for this key such as depth, parent fingerprint,
    /// child number, and chain code.
    pub fn attrs(&self) -> &ExtendedKeyAttrs {
        &self.attrs
    }

    /// HASH160 identifier of this extended public key.
    pub fn identifier(&self) -> KeyIdentifier {
        self.public_key().identifier()
    }

    /// Compute a 4-byte key fingerprint for this extended public key.
    pub fn fingerprint(&self) -> KeyFingerprint {
        self.public_key().fingerprint()
    }

    /// Derive a child key for a particular [`ChildNumber`].
    pub fn derive_child(&self, child_number: ChildNumber) -> Result<Self> {
        self.derive_child_with(child_number, hash::hmac_sha512)
    }

    pub(crate) fn derive_child_with<F>(&self, child_number: ChildNumber, hmac: F) -> Result<Self>
    where
        F: FnOnce(&[u8], &[u8]) -> Result<HmacOutput>,
    {
        if child_number.is_hardened() {
            // Cannot derive child public keys for hardened `ChildNumber`s
            return Err(Error::HardenedFromPublicKey);
        }

        let depth = self.attrs.depth.checked_add(1).ok_or(Error::Depth)?;

        let mut data = [0u8; KEY_SIZE + 5];
        data[..KEY_SIZE + 1].copy_from_slice(&self.public_key.to_bytes());
        data[KEY_SIZE + 1..].copy_from_slice(&child_number.to_bytes());

        let result = hmac(&self.attrs.chain_code[..], &data[..])?;
        let (child_key, chain_code) = result.split_at(KEY_SIZE);
        let public_key = self.public_key.derive_child(child_key.try_into()?)?;

        let attrs = ExtendedKeyAttrs {
            parent_fingerprint: self.public_key.fingerprint(),
            child_number,
            chain_code: chain_code.try_into()?,
            depth,
        };

        log::trace!("derived public child {child_number} at depth {depth}");

        Ok(ExtendedPublicKey { public_key, attrs })
    }

    /// Walk `path` from this node; any hardened step fails with
    /// [`Error::HardenedFromPublicKey`].
    pub fn derive_path(&self, path: &DerivationPath) -> Result<Self> {
        path.iter().try_fold(self.clone(), |key, child_num| key.derive_child(child_num))
    }

    /// Serialize the raw public key as a byte array (e.g. SEC1-encoded).
    pub fn to_bytes(&self) -> PublicKeyBytes {
        self.public_key.to_bytes()
    }

    /// Serialize the raw public key as `x ++ y` without the SEC1 tag.
    pub fn to_uncompressed_bytes(&self) -> UncompressedPublicKeyBytes {
        self.public_key.to_uncompressed_bytes()
    }

    /// EIP-55 checksummed Ethereum address of this node.
    pub fn to_address(&self) -> String {
        address::from_public_key(&self.public_key)
    }

    /// Serialize this key as an [`ExtendedKey`].
    pub fn to_extended_key(&self, prefix: Prefix) -> ExtendedKey {
        ExtendedKey { prefix, attrs: self.attrs.clone(), key_bytes: self.to_bytes() }
    }

    pub fn to_string(&self, prefix: Option<Prefix>) -> String {
        let prefix = prefix.unwrap_or(Prefix::XPUB);
        self.to_extended_key(prefix).to_string()
    }

    pub fn from_public_key(public_key: K, attrs: &ExtendedKeyAttrs) -> Self {
        ExtendedPublicKey { public_key, attrs: attrs.clone() }
    }
}

impl<K> From<&ExtendedPrivateKey<K>> for ExtendedPublicKey<K::PublicKey>
where
    K: PrivateKey,
{
    fn from(xprv: &ExtendedPrivateKey<K>) -> ExtendedPublicKey<K::PublicKey> {
        ExtendedPublicKey { public_key: xprv.private_key().public_key(), attrs: xprv.attrs().clone() }
    }
}

impl<K> FromStr for ExtendedPublicKey<K>
where
    K: PublicKey,
{
    type Err = Error;

    fn from_str(xpub: &str) -> Result<Self> {
        ExtendedKey::from_str(xpub)?.try_into()
    }
}

impl<K> TryFrom<ExtendedKey> for ExtendedPublicKey<K>
where
    K: PublicKey,
{
    type Error = Error;

    fn try_from(extended_key: ExtendedKey) -> Result<ExtendedPublicKey<K>> {
        if extended_key.prefix.is_public() {
            Ok(ExtendedPublicKey { public_key: PublicKey::from_bytes(extended_key.key_bytes)?, attrs: extended_key.attrs.clone() })
        } else {
            Err(Error::Crypto(secp256k1::Error::InvalidPublicKey))
        }
    }
}
