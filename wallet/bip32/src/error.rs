//!
//! Error types emitted by the key-derivation engine.
//!

use thiserror::Error;

/// [`Error`](enum@Error) variants emitted by the key-derivation engine.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The master scalar produced from the seed is zero or not below the curve order.
    #[error("invalid seed: master key is zero or exceeds the curve order")]
    InvalidSeed,

    /// The HMAC output at a given child index is unusable.
    #[error("invalid child key for this index")]
    InvalidChild,

    #[error("hardened child derivation requires a private key")]
    HardenedFromPublicKey,

    #[error("malformed derivation path: {0}")]
    MalformedPath(String),

    #[error("base58check checksum mismatch")]
    ChecksumMismatch,

    #[error("invalid key length: {0} (expected 32 bytes / 64 hex characters)")]
    InvalidKeyLength(usize),

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("seed length invalid")]
    SeedLength,

    #[error("maximum derivation depth exceeded")]
    Depth,

    #[error("invalid child number")]
    ChildNumber,

    #[error("decoded length {0} does not match expected {1}")]
    DecodeLength(usize, usize),

    #[error("unknown extended key prefix")]
    Prefix,

    #[error("invalid WIF payload")]
    InvalidWif,

    #[error("base58 -> {0}")]
    Base58(#[from] bs58::decode::Error),

    #[error("hex -> {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("secp256k1 -> {0}")]
    Crypto(#[from] secp256k1::Error),

    #[error("bip39 -> {0}")]
    Bip39(#[from] bip39::Error),

    #[error("invalid entropy length: {0} bits (expected 128..=256, multiple of 32)")]
    EntropyLength(usize),

    #[error("invalid mnemonic word count: {0}")]
    WordCount(usize),

    #[error("HMAC -> {0}")]
    Hmac(hmac::digest::InvalidLength),

    #[error("decoding -> {0}")]
    Decode(#[from] core::array::TryFromSliceError),

    #[error("invalid UTF-8 sequence")]
    Utf8Error(#[from] core::str::Utf8Error),
}

impl From<hmac::digest::InvalidLength> for Error {
    fn from(err: hmac::digest::InvalidLength) -> Error {
        Error::Hmac(err)
    }
}
