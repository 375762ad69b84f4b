//! Ethereum addresses with the EIP-55 mixed-case checksum.

use crate::hash::keccak256;
use crate::{Error, PublicKey, Result};

/// Hex prefix carried by every rendered address.
pub const PREFIX: &str = "0x";

/// Number of bytes in an address.
pub const ADDRESS_SIZE: usize = 20;

/// Address bytes: the last 20 bytes of `Keccak256(x ++ y)`.
pub fn address_bytes<K: PublicKey>(public_key: &K) -> [u8; ADDRESS_SIZE] {
    let digest = keccak256(&public_key.to_uncompressed_bytes());
    let mut address = [0u8; ADDRESS_SIZE];
    address.copy_from_slice(&digest[32 - ADDRESS_SIZE..]);
    address
}

/// EIP-55 checksummed address of `public_key`.
pub fn from_public_key<K: PublicKey>(public_key: &K) -> String {
    checksum_encode(&hex::encode(address_bytes(public_key)))
}

/// Apply the EIP-55 checksum to a 40-character lowercase hex string.
fn checksum_encode(lower_hex: &str) -> String {
    let hash = keccak256(lower_hex.as_bytes());
    let mut out = String::with_capacity(PREFIX.len() + lower_hex.len());
    out.push_str(PREFIX);
    for (i, c) in lower_hex.chars().enumerate() {
        let nibble = (hash[i / 2] >> (4 * (1 - i % 2))) & 0x0f;
        out.push(if nibble >= 8 { c.to_ascii_uppercase() } else { c });
    }
    out
}

/// Strip an optional `0x`/`0X` prefix and check for 40 hex characters.
fn hex_body(address: &str) -> Result<&str> {
    let body = address.strip_prefix(PREFIX).or_else(|| address.strip_prefix("0X")).unwrap_or(address);
    if body.len() != ADDRESS_SIZE * 2 || !body.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidAddress(address.to_string()));
    }
    Ok(body)
}

/// Re-render any-case `address` (with or without `0x`) in EIP-55 form.
pub fn to_checksum_address(address: &str) -> Result<String> {
    Ok(checksum_encode(&hex_body(address)?.to_ascii_lowercase()))
}

/// Verify the EIP-55 checksum of `address`.
///
/// Single-case addresses carry no checksum and are accepted.
pub fn validate_checksum_address(address: &str) -> Result<()> {
    let body = hex_body(address)?;
    let has_lower = body.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = body.bytes().any(|b| b.is_ascii_uppercase());
    if !(has_lower && has_upper) {
        return Ok(());
    }

    if checksum_encode(&body.to_ascii_lowercase())[PREFIX.len()..] == *body {
        Ok(())
    } else {
        Err(Error::InvalidAddress(address.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn eip55_reference_vectors() {
        for expected in [
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
            "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
            "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
        ] {
            assert_eq!(to_checksum_address(&expected.to_lowercase()).unwrap(), expected);
            assert!(validate_checksum_address(expected).is_ok());
        }
    }

    #[test]
    fn checksum_is_stable_and_idempotent() {
        let lower = "0x036f5cf5ca56c6b5650c9de2a41d94a3fe1e2077";
        let checksummed = to_checksum_address(lower).unwrap();
        assert_eq!(checksummed, "0x036F5CF5CA56C6B5650C9de2A41D94A3fE1e2077");
        assert_eq!(to_checksum_address(&checksummed).unwrap(), checksummed);
        assert_eq!(to_checksum_address(&lower[2..]).unwrap(), checksummed);
        assert_eq!(to_checksum_address(&lower.to_uppercase()[2..]).unwrap(), checksummed);
    }

    #[test]
    fn address_from_public_key() {
        // Hardhat account #0
        let secret = secp256k1::SecretKey::from_slice(&hex!("ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80")).unwrap();
        let public_key = secp256k1::PublicKey::from_secret_key_global(&secret);
        assert_eq!(address_bytes(&public_key), hex!("f39fd6e51aad88f6f4ce6ab8827279cfffb92266"));
        assert_eq!(from_public_key(&public_key), "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
    }

    #[test]
    fn bad_checksum_is_rejected() {
        // flip the case of one letter
        let bad = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAeD";
        assert!(matches!(validate_checksum_address(bad), Err(Error::InvalidAddress(_))));
        assert!(validate_checksum_address("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").is_ok());
    }

    #[test]
    fn malformed_addresses() {
        for bad in ["", "0x", "0x1234", "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAedff", "0xZaAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"] {
            assert!(matches!(to_checksum_address(bad), Err(Error::InvalidAddress(_))), "{bad:?}");
            assert!(matches!(validate_checksum_address(bad), Err(Error::InvalidAddress(_))), "{bad:?}");
        }
    }
}
