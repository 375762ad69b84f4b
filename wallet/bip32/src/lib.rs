//! BIP32 hierarchical deterministic key derivation over secp256k1.
//!
//! Covers the master node from a seed, private and public child derivation,
//! `m/...` path resolution, `xprv`/`xpub` serialization, WIF encoding and
//! EIP-55 checksummed Ethereum addresses. BIP39 phrases are handled by the
//! [`Mnemonic`] type.

pub use secp256k1;
pub use secp256k1::SecretKey;

mod private_key;
mod public_key;
mod xkey;
mod xprivate_key;
mod xpublic_key;

pub mod address;
mod attrs;
pub mod base58;
mod child_number;
mod derivation_path;
mod error;
pub mod hash;
mod mnemonic;
mod prefix;
mod result;
pub mod types;
pub mod wif;

pub use attrs::ExtendedKeyAttrs;
pub use child_number::ChildNumber;
pub use derivation_path::DerivationPath;
pub use mnemonic::{Language, Mnemonic, Seed, WordCount};
pub use prefix::Prefix;
pub use private_key::{secret_key_from_hex, secret_key_from_slice, PrivateKey};
pub use public_key::PublicKey;
pub use result::Result;
pub use types::*;
pub use xkey::ExtendedKey;
pub use xprivate_key::ExtendedPrivateKey;
pub use xpublic_key::ExtendedPublicKey;

/// Extended private key over secp256k1.
pub type XPrv = ExtendedPrivateKey<SecretKey>;

/// Extended public key over secp256k1.
pub type XPub = ExtendedPublicKey<secp256k1::PublicKey>;
