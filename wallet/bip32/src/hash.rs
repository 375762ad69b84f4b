//! Hash and checksum helpers used across key derivation and serialization.
//!
//! All helpers are stateless and can be called concurrently.

use crate::types::{HmacOutput, HmacSha512, KeyIdentifier};
use crate::Result;
use hmac::Mac;
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};
use sha3::Keccak256;

/// Length of the Base58Check checksum in bytes.
pub const CHECKSUM_SIZE: usize = 4;

/// First four bytes of `SHA256(SHA256(bytes))`.
pub fn double_sha256_checksum(bytes: &[u8]) -> [u8; CHECKSUM_SIZE] {
    let digest = Sha256::digest(Sha256::digest(bytes));
    let mut checksum = [0u8; CHECKSUM_SIZE];
    checksum.copy_from_slice(&digest[..CHECKSUM_SIZE]);
    checksum
}

/// `RIPEMD160(SHA256(bytes))`, the BIP32 key identifier.
pub fn hash160(bytes: &[u8]) -> KeyIdentifier {
    Ripemd160::digest(Sha256::digest(bytes)).into()
}

/// Original (pre-FIPS-202) Keccak-256, as used by Ethereum.
pub fn keccak256(bytes: &[u8]) -> [u8; 32] {
    Keccak256::digest(bytes).into()
}

/// HMAC-SHA512 of `data` keyed with `key`.
pub fn hmac_sha512(key: &[u8], data: &[u8]) -> Result<HmacOutput> {
    let mut hmac = HmacSha512::new_from_slice(key)?;
    hmac.update(data);
    let mut output = [0u8; 64];
    output.copy_from_slice(&hmac.finalize().into_bytes());
    Ok(output)
}
