//!
//! Wallet configuration: BIP44 derivation parameters and mnemonic options.
//!

use crate::error::Error;
use crate::result::Result;
use cobra_bip32::{ChildNumber, DerivationPath, Language, WordCount};
use serde::{Deserialize, Serialize};

/// BIP44 `purpose` level.
pub const BIP44_PURPOSE: u32 = 44;

/// SLIP-44 coin type for Ethereum.
pub const ETHEREUM_COIN_TYPE: u32 = 60;

/// The hardened levels of `m / purpose' / coin_type' / account' / change / address_index`
/// plus the change level. The address index is supplied per derivation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Bip44Params {
    pub purpose: u32,
    pub coin_type: u32,
    pub account: u32,
    /// `0` for the external chain, `1` for the internal (change) chain.
    pub change: u32,
}

impl Default for Bip44Params {
    fn default() -> Self {
        Self { purpose: BIP44_PURPOSE, coin_type: ETHEREUM_COIN_TYPE, account: 0, change: 0 }
    }
}

impl Bip44Params {
    /// `m/purpose'/coin_type'/account'/change`
    pub fn account_path(&self) -> Result<DerivationPath> {
        if self.change > 1 {
            return Err(Error::custom(format!("BIP44 change level must be 0 or 1, got {}", self.change)));
        }

        let path = [
            ChildNumber::new(self.purpose, true)?,
            ChildNumber::new(self.coin_type, true)?,
            ChildNumber::new(self.account, true)?,
            ChildNumber::new(self.change, false)?,
        ];
        Ok(path.into_iter().collect())
    }

    /// `m/purpose'/coin_type'/account'/change/address_index`
    pub fn path(&self, address_index: u32) -> Result<DerivationPath> {
        let mut path = self.account_path()?;
        path.push(ChildNumber::new(address_index, false)?);
        Ok(path)
    }
}

/// Options used when the wallet has to generate a fresh mnemonic.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct MnemonicOptions {
    pub word_count: WordCount,
    pub language: Language,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct WalletConfig {
    pub bip44: Bip44Params,
    pub mnemonic: MnemonicOptions,
}

impl WalletConfig {
    /// Parse a JSON configuration; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: WalletConfig = serde_json::from_str(json)?;
        config.bip44.account_path()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ethereum_account_zero() {
        let params = Bip44Params::default();
        assert_eq!(params.path(0).unwrap().to_string(), "m/44'/60'/0'/0/0");
        assert_eq!(params.path(7).unwrap().to_string(), "m/44'/60'/0'/0/7");
        assert_eq!(params.account_path().unwrap().to_string(), "m/44'/60'/0'/0");
    }

    #[test]
    fn out_of_range_levels_are_rejected() {
        let params = Bip44Params { account: 0x8000_0000, ..Default::default() };
        assert!(matches!(params.path(0), Err(Error::Bip32(cobra_bip32::Error::ChildNumber))));
        assert!(matches!(Bip44Params::default().path(0x8000_0000), Err(Error::Bip32(cobra_bip32::Error::ChildNumber))));
        assert!(matches!(Bip44Params { change: 2, ..Default::default() }.path(0), Err(Error::Custom(_))));
    }

    #[test]
    fn config_from_json() {
        let config = WalletConfig::from_json(r#"{ "bip44": { "coin-type": 1, "account": 3, "change": 1 }, "mnemonic": { "word-count": "words24" } }"#)
            .unwrap();
        assert_eq!(config.bip44, Bip44Params { purpose: 44, coin_type: 1, account: 3, change: 1 });
        assert_eq!(config.mnemonic, MnemonicOptions { word_count: WordCount::Words24, language: Language::English });
        assert_eq!(config.bip44.path(2).unwrap().to_string(), "m/44'/1'/3'/1/2");

        assert_eq!(WalletConfig::from_json("{}").unwrap(), WalletConfig::default());
        assert!(matches!(WalletConfig::from_json("{ \"bip44\": 1 }"), Err(Error::Serde(_))));
        assert!(matches!(WalletConfig::from_json(r#"{ "bip44": { "change": 5 } }"#), Err(Error::Custom(_))));
    }

    #[test]
    fn config_serializes_kebab_case() {
        let json = serde_json::to_value(WalletConfig::default()).unwrap();
        assert_eq!(json["bip44"]["coin-type"], 60);
        assert_eq!(json["mnemonic"]["word-count"], "words12");
        assert_eq!(json["mnemonic"]["language"], "english");
    }
}
