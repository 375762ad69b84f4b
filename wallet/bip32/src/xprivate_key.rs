use std::fmt::{self, Debug};
use std::str::FromStr;
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, Zeroizing};

use crate::{
    address, hash, types::*, wif, ChildNumber, DerivationPath, ExtendedKey, ExtendedKeyAttrs, ExtendedPublicKey, Prefix,
    PrivateKey, PublicKey, Result,
};

/// Derivation domain separator for BIP39 keys.
const BIP39_DOMAIN_SEPARATOR: [u8; 12] = [0x42, 0x69, 0x74, 0x63, 0x6f, 0x69, 0x6e, 0x20, 0x73, 0x65, 0x65, 0x64];

/// Accepted seed lengths in bytes (128 to 512 bits).
const SEED_LENGTH: core::ops::RangeInclusive<usize> = 16..=64;

/// Extended private keys derived using BIP32.
///
/// Generic around a [`PrivateKey`] type. Nodes are immutable: deriving a
/// child returns a new node and leaves the parent untouched.
#[derive(Clone)]
pub struct ExtendedPrivateKey<K: PrivateKey> {
    /// Derived private key
    private_key: K,

    /// Extended key attributes.
    attrs: ExtendedKeyAttrs,
}

impl<K> ExtendedPrivateKey<K>
where
    K: PrivateKey,
{
    /// Maximum derivation depth.
    pub const MAX_DEPTH: Depth = u8::MAX;

    /// Create the root extended key for the given seed value.
    pub fn new<S>(seed: S) -> Result<Self>
    where
        S: AsRef<[u8]>,
    {
        Self::new_with(seed.as_ref(), hash::hmac_sha512)
    }

    /// [`Self::new`] with the HMAC-SHA512 step supplied by the caller.
    pub(crate) fn new_with<F>(seed: &[u8], hmac: F) -> Result<Self>
    where
        F: FnOnce(&[u8], &[u8]) -> Result<HmacOutput>,
    {
        if !SEED_LENGTH.contains(&seed.len()) {
            return Err(Error::SeedLength);
        }

        let mut result = hmac(&BIP39_DOMAIN_SEPARATOR[..], seed)?;
        let (secret_key, chain_code) = result.split_at(KEY_SIZE);

        // rejects both a zero scalar and one that is not below the curve order
        let private_key = K::from_bytes(secret_key.try_into()?).map_err(|_| Error::InvalidSeed);
        let attrs = ExtendedKeyAttrs::master(chain_code.try_into()?);
        result.zeroize();

        Ok(ExtendedPrivateKey { private_key: private_key?, attrs })
    }

    /// Build a node from an already-known private key and attributes.
    pub fn from_parts(private_key: K, attrs: ExtendedKeyAttrs) -> Self {
        ExtendedPrivateKey { private_key, attrs }
    }

    /// Derive a child key for a particular [`ChildNumber`].
    ///
    /// An unusable HMAC output yields [`Error::InvalidChild`]; the caller
    /// decides whether to move on to the next index.
    pub fn derive_child(&self, child_number: ChildNumber) -> Result<Self> {
        self.derive_child_with(child_number, hash::hmac_sha512)
    }

    /// [`Self::derive_child`] with the HMAC-SHA512 step supplied by the caller.
    pub(crate) fn derive_child_with<F>(&self, child_number: ChildNumber, hmac: F) -> Result<Self>
    where
        F: FnOnce(&[u8], &[u8]) -> Result<HmacOutput>,
    {
        let depth = self.attrs.depth.checked_add(1).ok_or(Error::Depth)?;
        let public_key = self.private_key.public_key();

        let mut data = Zeroizing::new(Vec::with_capacity(KEY_SIZE + 5));
        if child_number.is_hardened() {
            data.push(0);
            data.extend_from_slice(&self.private_key.to_bytes());
        } else {
            data.extend_from_slice(&public_key.to_bytes());
        }
        data.extend_from_slice(&child_number.to_bytes());

        let mut result = hmac(&self.attrs.chain_code[..], &data[..])?;
        let (child_key, chain_code) = result.split_at(KEY_SIZE);

        // No retry at `index + 1` here: an unusable `I_L` (>= n, or a zero
        // child scalar) is surfaced as `InvalidChild`.
        let private_key = self.private_key.derive_child(child_key.try_into()?);

        let attrs = ExtendedKeyAttrs {
            parent_fingerprint: public_key.fingerprint(),
            child_number,
            chain_code: chain_code.try_into()?,
            depth,
        };
        result.zeroize();

        log::trace!("derived child {child_number} at depth {depth}");

        Ok(ExtendedPrivateKey { private_key: private_key?, attrs })
    }

    /// Walk `path` from this node, failing on the first unusable step.
    pub fn derive_path(&self, path: &DerivationPath) -> Result<Self> {
        path.iter().try_fold(self.clone(), |key, child_num| key.derive_child(child_num))
    }

    /// Borrow the derived private key value.
    pub fn private_key(&self) -> &K {
        &self.private_key
    }

    /// Serialize the derived public key as bytes.
    pub fn public_key(&self) -> ExtendedPublicKey<K::PublicKey> {
        self.into()
    }

    /// Get attributes for this key such as depth, parent fingerprint,
    /// child number, and chain code.
    pub fn attrs(&self) -> &ExtendedKeyAttrs {
        &self.attrs
    }

    /// HASH160 identifier of this node's compressed public key.
    pub fn identifier(&self) -> KeyIdentifier {
        self.private_key.public_key().identifier()
    }

    /// Fingerprint of this node (first 4 bytes of its identifier).
    pub fn fingerprint(&self) -> KeyFingerprint {
        self.private_key.public_key().fingerprint()
    }

    /// Serialize the raw private key as a byte array.
    pub fn to_bytes(&self) -> PrivateKeyBytes {
        self.private_key.to_bytes()
    }

    /// Compressed-key WIF of this node's private key.
    pub fn to_wif(&self) -> Zeroizing<String> {
        wif::encode(&self.to_bytes(), true)
    }

    /// EIP-55 checksummed Ethereum address of this node.
    pub fn to_address(&self) -> String {
        address::from_public_key(&self.private_key.public_key())
    }

    /// Serialize this key as an [`ExtendedKey`].
    ///
    /// `prefix` must be a private prefix (`xprv`, `tprv`); a public one fails
    /// with [`Error::Prefix`] so private key data never carries a public version.
    pub fn to_extended_key(&self, prefix: Prefix) -> Result<ExtendedKey> {
        if !prefix.is_private() {
            return Err(Error::Prefix);
        }

        // Add leading `0` byte
        let mut key_bytes = [0u8; KEY_SIZE + 1];
        key_bytes[1..].copy_from_slice(&self.to_bytes());

        Ok(ExtendedKey { prefix, attrs: self.attrs.clone(), key_bytes })
    }

    pub fn to_string(&self, prefix: Prefix) -> Result<Zeroizing<String>> {
        Ok(Zeroizing::new(self.to_extended_key(prefix)?.to_string()))
    }
}

impl<K> ConstantTimeEq for ExtendedPrivateKey<K>
where
    K: PrivateKey,
{
    fn ct_eq(&self, other: &Self) -> Choice {
        let mut key_a = self.to_bytes();
        let mut key_b = other.to_bytes();

        let result = key_a.ct_eq(&key_b)
            & self.attrs.depth.ct_eq(&other.attrs.depth)
            & self.attrs.parent_fingerprint.ct_eq(&other.attrs.parent_fingerprint)
            & self.attrs.child_number.0.ct_eq(&other.attrs.child_number.0)
            & self.attrs.chain_code.ct_eq(&other.attrs.chain_code);

        key_a.zeroize();
        key_b.zeroize();

        result
    }
}

impl<K> Debug for ExtendedPrivateKey<K>
where
    K: PrivateKey,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtendedPrivateKey").field("private_key", &"...").field("attrs", &self.attrs).finish_non_exhaustive()
    }
}

/// NOTE: uses [`ConstantTimeEq`] internally
impl<K> Eq for ExtendedPrivateKey<K> where K: PrivateKey {}

/// NOTE: uses [`ConstantTimeEq`] internally
impl<K> PartialEq for ExtendedPrivateKey<K>
where
    K: PrivateKey,
{
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<K> FromStr for ExtendedPrivateKey<K>
where
    K: PrivateKey,
{
    type Err = Error;

    fn from_str(xprv: &str) -> Result<Self> {
        let key = ExtendedKey::from_str(xprv)?;
        key.try_into()
    }
}

impl<K> TryFrom<ExtendedKey> for ExtendedPrivateKey<K>
where
    K: PrivateKey,
{
    type Error = Error;

    fn try_from(extended_key: ExtendedKey) -> Result<ExtendedPrivateKey<K>> {
        if extended_key.prefix.is_private() && extended_key.key_bytes[0] == 0 {
            Ok(ExtendedPrivateKey {
                private_key: PrivateKey::from_bytes(extended_key.key_bytes[1..].try_into()?)?,
                attrs: extended_key.attrs.clone(),
            })
        } else {
            Err(Error::Crypto(secp256k1::Error::InvalidSecretKey))
        }
    }
}
