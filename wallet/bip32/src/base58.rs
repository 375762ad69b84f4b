//! Base58 and Base58Check codec (Bitcoin alphabet).
//!
//! The base conversion is delegated to `bs58`; checksum framing and
//! validation are handled here so that a corrupted payload is always
//! reported as [`Error::ChecksumMismatch`].

use crate::hash::{double_sha256_checksum, CHECKSUM_SIZE};
use crate::{Error, Result};
use zeroize::Zeroizing;

/// Encode `raw` as Base58, emitting one `1` per leading zero byte.
pub fn encode(raw: &[u8]) -> String {
    bs58::encode(raw).into_string()
}

/// Decode Base58 `text` into bytes. Inverse of [`encode`].
pub fn decode(text: &str) -> Result<Vec<u8>> {
    Ok(bs58::decode(text).into_vec()?)
}

/// Encode `raw ++ checksum(raw)` as Base58.
pub fn check_encode(raw: &[u8]) -> String {
    let mut framed = Zeroizing::new(Vec::with_capacity(raw.len() + CHECKSUM_SIZE));
    framed.extend_from_slice(raw);
    framed.extend_from_slice(&double_sha256_checksum(raw));
    encode(&framed)
}

/// Decode Base58Check `text`, verify the trailing checksum and return the payload.
pub fn check_decode(text: &str) -> Result<Vec<u8>> {
    let mut decoded = decode(text)?;
    if decoded.len() < CHECKSUM_SIZE {
        return Err(Error::ChecksumMismatch);
    }

    let payload_len = decoded.len() - CHECKSUM_SIZE;
    let (payload, checksum) = decoded.split_at(payload_len);
    if double_sha256_checksum(payload) != checksum {
        return Err(Error::ChecksumMismatch);
    }

    decoded.truncate(payload_len);
    Ok(decoded)
}
