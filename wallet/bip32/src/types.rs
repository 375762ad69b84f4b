use hmac::Hmac;
use sha2::Sha512;

/// Size of a private key in bytes.
pub const KEY_SIZE: usize = 32;

/// Chain code: extension for both private and public keys which provides an
/// additional 256-bits of entropy.
pub type ChainCode = [u8; KEY_SIZE];

/// Derivation depth.
pub type Depth = u8;

/// BIP32 key fingerprints.
pub type KeyFingerprint = [u8; 4];

/// HASH160 key identifier (RIPEMD160 of SHA256).
pub type KeyIdentifier = [u8; 20];

/// BIP32 "versions": integer representation of the key prefix.
pub type Version = u32;

/// Bytes which represent a private key.
pub type PrivateKeyBytes = [u8; KEY_SIZE];

/// Bytes which represent a compressed (SEC1) public key.
pub type PublicKeyBytes = [u8; KEY_SIZE + 1];

/// Bytes which represent an uncompressed public key without the `0x04` tag
/// (32-byte x coordinate followed by the 32-byte y coordinate).
pub type UncompressedPublicKeyBytes = [u8; KEY_SIZE * 2];

/// Raw output of HMAC-SHA512.
pub type HmacOutput = [u8; 64];

/// HMAC with SHA-512
pub type HmacSha512 = Hmac<Sha512>;

pub use crate::error::Error;
