//!
//! Fixed-shape records returned by [`HdWallet`](crate::wallet::HdWallet).
//!
//! Both records carry secret material and are zeroized on drop. Their
//! `Debug` output only shows public fields.
//!

use core::fmt;
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

/// A BIP44 account derived from a mnemonic.
///
/// `fingerprint` is the derived node's own fingerprint and
/// `parent_fingerprint` the one embedded in its extended keys.
#[derive(Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletRecord {
    pub path: String,
    pub address: String,
    pub mnemonic: String,
    pub wif: String,
    pub fingerprint: String,
    pub parent_fingerprint: String,
    pub chain_code: String,
    pub private_key_hex: String,
    pub public_key_hex: String,
    pub uncompressed_public_key_hex: String,
    pub serialized_private_extended_key_hex: String,
    pub serialized_public_extended_key_hex: String,
    pub serialized_private_extended_key_base58: String,
    pub serialized_public_extended_key_base58: String,
}

impl fmt::Debug for WalletRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletRecord")
            .field("path", &self.path)
            .field("address", &self.address)
            .field("fingerprint", &self.fingerprint)
            .field("public_key_hex", &self.public_key_hex)
            .field("serialized_public_extended_key_base58", &self.serialized_public_extended_key_base58)
            .finish_non_exhaustive()
    }
}

impl Drop for WalletRecord {
    fn drop(&mut self) {
        self.mnemonic.zeroize();
        self.wif.zeroize();
        self.chain_code.zeroize();
        self.private_key_hex.zeroize();
        self.serialized_private_extended_key_hex.zeroize();
        self.serialized_private_extended_key_base58.zeroize();
    }
}

/// Views of a standalone private key that is not part of a derivation tree.
#[derive(Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivateKeyWalletRecord {
    pub address: String,
    pub wif: String,
    pub fingerprint: String,
    pub private_key_hex: String,
    pub public_key_hex: String,
    pub uncompressed_public_key_hex: String,
}

impl fmt::Debug for PrivateKeyWalletRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKeyWalletRecord")
            .field("address", &self.address)
            .field("fingerprint", &self.fingerprint)
            .field("public_key_hex", &self.public_key_hex)
            .finish_non_exhaustive()
    }
}

impl Drop for PrivateKeyWalletRecord {
    fn drop(&mut self) {
        self.wif.zeroize();
        self.private_key_hex.zeroize();
    }
}
