//!
//! Re-exports of the most commonly used types in this crate.
//!

pub use crate::config::*;
pub use crate::error::Error;
pub use crate::record::*;
pub use crate::result::Result;
pub use crate::wallet::HdWallet;
pub use cobra_bip32::{DerivationPath, Language, Mnemonic, WordCount, XPrv, XPub};
