//!
//! [`HdWallet`]: mnemonic to BIP44 account records.
//!

use crate::config::{MnemonicOptions, WalletConfig};
use crate::record::{PrivateKeyWalletRecord, WalletRecord};
use crate::result::Result;
use cobra_bip32::{secret_key_from_hex, ExtendedKeyAttrs, Language, Mnemonic, Prefix, XPrv};

/// Orchestrates seed, master key, BIP44 derivation and record rendering.
///
/// Holds only configuration; no key material outlives a call.
#[derive(Clone, Debug, Default)]
pub struct HdWallet {
    config: WalletConfig,
}

impl HdWallet {
    pub fn new(config: WalletConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WalletConfig {
        &self.config
    }

    /// Generate a fresh mnemonic from the operating system CSPRNG.
    pub fn generate_mnemonic(options: &MnemonicOptions) -> Result<Mnemonic> {
        Ok(Mnemonic::random(options.word_count, options.language)?)
    }

    /// Check word list membership, word count and checksum of `phrase`.
    pub fn check_mnemonic(phrase: &str, language: Language) -> bool {
        Mnemonic::validate(phrase, language)
    }

    /// Derive the account at `m/purpose'/coin_type'/account'/change/account_index`.
    ///
    /// Without a `mnemonic` a new one is generated using the configured
    /// [`MnemonicOptions`] and returned in the record.
    pub fn create_wallet(&self, mnemonic: Option<&str>, passphrase: &str, account_index: u32) -> Result<WalletRecord> {
        let mnemonic = match mnemonic {
            Some(phrase) => Mnemonic::new(phrase, self.config.mnemonic.language)?,
            None => {
                log::debug!("generating a {}-word mnemonic", self.config.mnemonic.word_count.words());
                Self::generate_mnemonic(&self.config.mnemonic)?
            }
        };

        let path = self.config.bip44.path(account_index)?;
        log::debug!("creating wallet at {path}");

        let seed = mnemonic.to_seed(passphrase)?;
        let xprv = XPrv::new(&seed)?.derive_path(&path)?;
        let xpub = xprv.public_key();

        let xprv_key = xprv.to_extended_key(Prefix::XPRV)?;
        let xpub_key = xpub.to_extended_key(Prefix::XPUB);

        Ok(WalletRecord {
            path: path.to_string(),
            address: xprv.to_address(),
            mnemonic: mnemonic.phrase().to_owned(),
            wif: xprv.to_wif().as_str().to_owned(),
            fingerprint: hex::encode(xprv.fingerprint()),
            parent_fingerprint: hex::encode(xprv.attrs().parent_fingerprint),
            chain_code: hex::encode(xprv.attrs().chain_code),
            private_key_hex: hex::encode(xprv.to_bytes()),
            public_key_hex: hex::encode(xpub.to_bytes()),
            uncompressed_public_key_hex: hex::encode(xpub.to_uncompressed_bytes()),
            serialized_private_extended_key_hex: xprv_key.to_hex().as_str().to_owned(),
            serialized_public_extended_key_hex: xpub_key.to_hex().as_str().to_owned(),
            serialized_private_extended_key_base58: xprv_key.to_string(),
            serialized_public_extended_key_base58: xpub_key.to_string(),
        })
    }

    /// Address, WIF and public key views of an arbitrary 32-byte private key
    /// given as 64 hex characters.
    pub fn wallet_from_private_key(private_key_hex: &str) -> Result<PrivateKeyWalletRecord> {
        let private_key = secret_key_from_hex(private_key_hex)?;
        // standalone node: the chain code carries no meaning here
        let xprv = XPrv::from_parts(private_key, ExtendedKeyAttrs::master([0u8; 32]));
        let xpub = xprv.public_key();

        let record = PrivateKeyWalletRecord {
            address: xprv.to_address(),
            wif: xprv.to_wif().as_str().to_owned(),
            fingerprint: hex::encode(xprv.fingerprint()),
            private_key_hex: hex::encode(xprv.to_bytes()),
            public_key_hex: hex::encode(xpub.to_bytes()),
            uncompressed_public_key_hex: hex::encode(xpub.to_uncompressed_bytes()),
        };
        log::debug!("loaded private key for {}", record.address);

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Bip44Params;
    use cobra_bip32::WordCount;

    const HARDHAT: &str = "test test test test test test test test test test test junk";

    #[test]
    fn generated_mnemonic_follows_options() {
        let options = MnemonicOptions { word_count: WordCount::Words18, language: Language::English };
        let mnemonic = HdWallet::generate_mnemonic(&options).unwrap();
        assert_eq!(mnemonic.phrase().split(' ').count(), 18);
        assert!(HdWallet::check_mnemonic(mnemonic.phrase(), Language::English));
    }

    #[test]
    fn create_wallet_without_mnemonic_returns_new_phrase() {
        let wallet = HdWallet::default();
        let record = wallet.create_wallet(None, "", 0).unwrap();
        assert_eq!(record.mnemonic.split(' ').count(), 12);
        assert_eq!(wallet.create_wallet(Some(&record.mnemonic), "", 0).unwrap(), record);
    }

    #[test]
    fn configured_coin_type_changes_the_path() {
        let config = WalletConfig { bip44: Bip44Params { coin_type: 1, ..Default::default() }, ..Default::default() };
        let testnet = HdWallet::new(config).create_wallet(Some(HARDHAT), "", 0).unwrap();
        let mainnet = HdWallet::default().create_wallet(Some(HARDHAT), "", 0).unwrap();
        assert_eq!(testnet.path, "m/44'/1'/0'/0/0");
        assert_ne!(testnet.address, mainnet.address);
    }

    #[test]
    fn invalid_mnemonic_is_an_error() {
        assert!(HdWallet::default().create_wallet(Some("test test test"), "", 0).is_err());
        assert!(!HdWallet::check_mnemonic("test test test test test test test test test test test notaword", Language::English));
    }

    #[test]
    fn debug_omits_secrets() {
        let record = HdWallet::default().create_wallet(Some(HARDHAT), "", 0).unwrap();
        let rendered = format!("{record:?}");
        assert!(rendered.contains(&record.address));
        assert!(!rendered.contains(&record.private_key_hex));
        assert!(!rendered.contains("junk"));
    }
}
