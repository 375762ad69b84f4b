//! Trait for deriving child keys on a given type.

use crate::hash::hash160;
use crate::{Error, KeyFingerprint, KeyIdentifier, PrivateKeyBytes, PublicKeyBytes, Result, UncompressedPublicKeyBytes};
use secp256k1::scalar::Scalar;

/// Trait for key types which can be derived using BIP32.
pub trait PublicKey: Sized + Clone {
    /// Initialize this key from its compressed SEC1 bytes.
    fn from_bytes(bytes: PublicKeyBytes) -> Result<Self>;

    /// Serialize this key as compressed SEC1 bytes.
    fn to_bytes(&self) -> PublicKeyBytes;

    /// Serialize this key as the 64-byte `x ++ y` concatenation.
    fn to_uncompressed_bytes(&self) -> UncompressedPublicKeyBytes;

    /// Derive a child key from a parent key and a provided tweak value,
    /// computing `self + tweak * G`.
    fn derive_child(&self, tweak: PrivateKeyBytes) -> Result<Self>;

    /// HASH160 of the compressed public key.
    fn identifier(&self) -> KeyIdentifier {
        hash160(&self.to_bytes())
    }

    /// Compute a 4-byte key fingerprint for this public key.
    ///
    /// Default implementation uses `RIPEMD160(SHA256(public_key))`.
    fn fingerprint(&self) -> KeyFingerprint {
        let mut fingerprint = KeyFingerprint::default();
        fingerprint.copy_from_slice(&self.identifier()[..4]);
        fingerprint
    }
}

impl PublicKey for secp256k1::PublicKey {
    fn from_bytes(bytes: PublicKeyBytes) -> Result<Self> {
        Ok(secp256k1::PublicKey::from_slice(&bytes)?)
    }

    fn to_bytes(&self) -> PublicKeyBytes {
        self.serialize()
    }

    fn to_uncompressed_bytes(&self) -> UncompressedPublicKeyBytes {
        let tagged = self.serialize_uncompressed();
        let mut bytes = [0u8; 64];
        bytes.copy_from_slice(&tagged[1..]);
        bytes
    }

    fn derive_child(&self, tweak: PrivateKeyBytes) -> Result<Self> {
        let tweak = Scalar::from_be_bytes(tweak).map_err(|_| Error::InvalidChild)?;
        let secp: &secp256k1::Secp256k1<secp256k1::All> = secp256k1::SECP256K1;
        self.add_exp_tweak(secp, &tweak).map_err(|_| Error::InvalidChild)
    }
}

#[cfg(test)]
mod tests {
    use super::PublicKey;
    use hex_literal::hex;

    #[test]
    fn compressed_and_uncompressed_forms() {
        // Hardhat account #0
        let secret = secp256k1::SecretKey::from_slice(&hex!("ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80")).unwrap();
        let public_key = secp256k1::PublicKey::from_secret_key_global(&secret);
        assert_eq!(public_key.to_bytes(), hex!("038318535b54105d4a7aae60c08fc45f9687181b4fdfc625bd1a753fa7397fed75"));
        assert_eq!(
            public_key.to_uncompressed_bytes(),
            hex!(
                "8318535b54105d4a7aae60c08fc45f9687181b4fdfc625bd1a753fa7397fed75"
                "3547f11ca8696646f2f3acb08e31016afac23e630c5d11f59f61fef57b0d2aa5"
            )
        );
        assert_eq!(public_key.fingerprint(), hex!("a5547601"));
    }
}
