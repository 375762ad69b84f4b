//! Wordlist support

use serde::{Deserialize, Serialize};

/// Languages supported by BIP39.
///
/// English is presently the only list this crate ships.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Language {
    /// English is presently the only supported language
    #[default]
    English,
}

impl Language {
    /// Get the word list for this language
    pub fn wordlist(&self) -> &'static [&'static str; 2048] {
        self.to_bip39().word_list()
    }

    /// Index of `word` in the word list, if present.
    pub fn find_word(&self, word: &str) -> Option<u16> {
        self.to_bip39().find_word(word)
    }

    pub(crate) fn to_bip39(self) -> bip39::Language {
        match self {
            Language::English => bip39::Language::English,
        }
    }
}
