//!
//! # Cobra HD Wallet
//!
//! Turns a BIP39 mnemonic (given or freshly generated) into a BIP44
//! Ethereum account record: checksummed address, WIF, raw keys and both
//! extended keys. Key derivation itself lives in [`cobra_bip32`].
//!

pub mod config;
pub mod error;
pub mod prelude;
pub mod record;
pub mod result;
pub mod wallet;
