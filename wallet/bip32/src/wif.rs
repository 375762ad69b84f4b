//! Wallet Import Format for secp256k1 private keys.

use crate::{base58, Error, PrivateKeyBytes, Result, KEY_SIZE};
use zeroize::{Zeroize, Zeroizing};

/// Mainnet private key version byte.
pub const VERSION: u8 = 0x80;

/// Trailing marker requesting the compressed public key.
const COMPRESSED_FLAG: u8 = 0x01;

/// Decoded WIF payload.
pub struct Wif {
    /// Raw private key scalar.
    pub private_key: PrivateKeyBytes,

    /// Whether the key is paired with its compressed public key.
    pub compressed: bool,
}

impl Drop for Wif {
    fn drop(&mut self) {
        self.private_key.zeroize();
    }
}

/// `CheckEncode(0x80 ++ private_key [++ 0x01])`.
pub fn encode(private_key: &PrivateKeyBytes, compressed: bool) -> Zeroizing<String> {
    let mut raw = Zeroizing::new(Vec::with_capacity(KEY_SIZE + 2));
    raw.push(VERSION);
    raw.extend_from_slice(private_key);
    if compressed {
        raw.push(COMPRESSED_FLAG);
    }
    Zeroizing::new(base58::check_encode(&raw))
}

/// Decode a compressed or uncompressed mainnet WIF string.
pub fn decode(text: &str) -> Result<Wif> {
    let raw = Zeroizing::new(base58::check_decode(text)?);

    let compressed = match raw.len() {
        len if len == KEY_SIZE + 2 && raw[KEY_SIZE + 1] == COMPRESSED_FLAG => true,
        len if len == KEY_SIZE + 1 => false,
        _ => return Err(Error::InvalidWif),
    };

    if raw[0] != VERSION {
        return Err(Error::InvalidWif);
    }

    let private_key = raw[1..KEY_SIZE + 1].try_into()?;
    Ok(Wif { private_key, compressed })
}
