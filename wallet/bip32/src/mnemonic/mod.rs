//! BIP39 mnemonic capability: phrase generation, validation and seed derivation.

mod language;
mod phrase;
mod seed;

pub use language::Language;
pub use phrase::{Mnemonic, WordCount};
pub use seed::Seed;
