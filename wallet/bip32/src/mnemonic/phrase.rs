//! BIP39 mnemonic phrases

use super::{language::Language, seed::Seed};
use crate::{Error, Result};
use rand_core::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, Zeroizing};

/// Word count for a BIP39 mnemonic phrase: 128 to 256 bits of entropy in
/// steps of 32 bits.
#[derive(Default, Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WordCount {
    #[default]
    Words12,
    Words15,
    Words18,
    Words21,
    Words24,
}

impl WordCount {
    /// Number of entropy bits encoded by this many words.
    pub fn entropy_bits(&self) -> usize {
        match self {
            WordCount::Words12 => 128,
            WordCount::Words15 => 160,
            WordCount::Words18 => 192,
            WordCount::Words21 => 224,
            WordCount::Words24 => 256,
        }
    }

    /// Number of words in the phrase.
    pub fn words(&self) -> usize {
        self.entropy_bits() * 3 / 32
    }

    /// Word count for an entropy strength in bits.
    pub fn from_entropy_bits(bits: usize) -> Result<Self> {
        match bits {
            128 => Ok(WordCount::Words12),
            160 => Ok(WordCount::Words15),
            192 => Ok(WordCount::Words18),
            224 => Ok(WordCount::Words21),
            256 => Ok(WordCount::Words24),
            _ => Err(Error::EntropyLength(bits)),
        }
    }
}

impl TryFrom<usize> for WordCount {
    type Error = Error;
    fn try_from(word_count: usize) -> Result<Self> {
        match word_count {
            12 => Ok(WordCount::Words12),
            15 => Ok(WordCount::Words15),
            18 => Ok(WordCount::Words18),
            21 => Ok(WordCount::Words21),
            24 => Ok(WordCount::Words24),
            _ => Err(Error::WordCount(word_count)),
        }
    }
}

/// BIP39 mnemonic phrases: sequences of words representing cryptographic keys.
#[derive(Clone)]
pub struct Mnemonic {
    /// Language
    language: Language,

    /// Source entropy for this phrase
    entropy: Vec<u8>,

    /// Mnemonic phrase
    phrase: String,
}

impl Mnemonic {
    /// Create a random phrase from the operating system CSPRNG.
    pub fn random(word_count: WordCount, language: Language) -> Result<Mnemonic> {
        Mnemonic::random_impl(word_count, rand::rngs::OsRng, language)
    }

    /// Create a random BIP39 mnemonic phrase.
    pub fn random_impl(word_count: WordCount, mut rng: impl RngCore + CryptoRng, language: Language) -> Result<Self> {
        let mut entropy = Zeroizing::new(vec![0u8; word_count.entropy_bits() / 8]);
        rng.fill_bytes(&mut entropy);
        Self::from_entropy(entropy.to_vec(), language)
    }

    /// Create a new BIP39 mnemonic phrase from the given entropy
    pub fn from_entropy(entropy: Vec<u8>, language: Language) -> Result<Self> {
        let entropy = Zeroizing::new(entropy);
        WordCount::from_entropy_bits(entropy.len() * 8)?;

        let mnemonic = bip39::Mnemonic::from_entropy_in(language.to_bip39(), &entropy)?;
        Ok(Self { language, entropy: entropy.to_vec(), phrase: mnemonic.to_string() })
    }

    /// Create a new BIP39 mnemonic phrase from the given string.
    ///
    /// The phrase supplied will be checked for word count, word list
    /// membership and the BIP39 checksum.
    ///
    /// Words may be separated by any run of whitespace. The stored phrase
    /// is the canonical form, words joined by single spaces, and
    /// [`Self::phrase`] and [`Self::to_seed`] both use that form. Two inputs
    /// that differ only in spacing therefore yield the same seed.
    pub fn new<S>(phrase: S, language: Language) -> Result<Self>
    where
        S: AsRef<str>,
    {
        let mnemonic = bip39::Mnemonic::parse_in(language.to_bip39(), phrase.as_ref())?;
        let entropy = Zeroizing::new(mnemonic.to_entropy());
        Self::from_entropy(entropy.to_vec(), language)
    }

    /// Validate mnemonic phrase. Returns `true` if the phrase is valid, `false` otherwise.
    pub fn validate(phrase: &str, language: Language) -> bool {
        Mnemonic::new(phrase, language).is_ok()
    }

    /// Get source entropy for this phrase.
    pub fn entropy(&self) -> &[u8] {
        &self.entropy
    }

    /// Get the mnemonic phrase as a string reference.
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Language this phrase's wordlist is for
    pub fn language(&self) -> Language {
        self.language
    }

    /// Number of words in the phrase.
    pub fn word_count(&self) -> Result<WordCount> {
        WordCount::from_entropy_bits(self.entropy.len() * 8)
    }

    /// Convert this mnemonic phrase into the BIP39 seed value
    /// (PBKDF2-HMAC-SHA512, 2048 rounds, salt `"mnemonic" ++ passphrase`).
    pub fn to_seed(&self, passphrase: &str) -> Result<Seed> {
        let mnemonic = bip39::Mnemonic::from_entropy_in(self.language.to_bip39(), &self.entropy)?;
        Ok(Seed(mnemonic.to_seed(passphrase)))
    }
}

impl Drop for Mnemonic {
    fn drop(&mut self) {
        self.phrase.zeroize();
        self.entropy.zeroize();
    }
}
