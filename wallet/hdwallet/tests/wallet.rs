use cobra_bip32::Error as Bip32Error;
use cobra_hdwallet::prelude::*;

const HARDHAT: &str = "test test test test test test test test test test test junk";
const ABANDON: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

#[test]
fn hardhat_account_zero() {
    let record = HdWallet::default().create_wallet(Some(HARDHAT), "", 0).unwrap();

    assert_eq!(record.path, "m/44'/60'/0'/0/0");
    assert_eq!(record.mnemonic, HARDHAT);
    assert_eq!(record.address, "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
    assert_eq!(record.wif, "L2z8PYRmdwz6N8GvkdAJsVtFY7Rt4cQP2DgVppuM7inTuWM3DLVL");
    assert_eq!(record.fingerprint, "a5547601");
    assert_eq!(record.parent_fingerprint, "79bf22d3");
    assert_eq!(record.chain_code, "deccb14bd1482d4fe1aed800559b9534c6a2554bd0a32735abf93b24e2319e90");
    assert_eq!(record.private_key_hex, "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80");
    assert_eq!(record.public_key_hex, "038318535b54105d4a7aae60c08fc45f9687181b4fdfc625bd1a753fa7397fed75");
    assert_eq!(
        record.uncompressed_public_key_hex,
        "8318535b54105d4a7aae60c08fc45f9687181b4fdfc625bd1a753fa7397fed753547f11ca8696646f2f3acb08e31016afac23e630c5d11f59f61fef57b0d2aa5"
    );
    assert_eq!(
        record.serialized_private_extended_key_hex,
        "0488ade40579bf22d300000000deccb14bd1482d4fe1aed800559b9534c6a2554bd0a32735abf93b24e2319e9000ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"
    );
    assert_eq!(
        record.serialized_public_extended_key_hex,
        "0488b21e0579bf22d300000000deccb14bd1482d4fe1aed800559b9534c6a2554bd0a32735abf93b24e2319e90038318535b54105d4a7aae60c08fc45f9687181b4fdfc625bd1a753fa7397fed75"
    );
    assert_eq!(
        record.serialized_private_extended_key_base58,
        "xprvA3KbAeguosodJeRqpV3NF1VYREub6vBASfBEXa1LgZeqPAhCFkHQMBjXYPa8RZvP5tnWMSg2zYcox5vbsfz1pB7J2zU9LEzWxg7rrRpoeSh"
    );
    assert_eq!(
        record.serialized_public_extended_key_base58,
        "xpub6GJwaADoeFMvX8WJvWaNc9SGyGk5WNu1ot6qKxQxEuBpFy2LoHbetz41PgEcEg4n2bk3hWoHYJ69EqkjpoSv9KrinCnZV6y4Xo6VJZ6KHWT"
    );
}

#[test]
fn hardhat_account_one() {
    let record = HdWallet::default().create_wallet(Some(HARDHAT), "", 1).unwrap();
    assert_eq!(record.path, "m/44'/60'/0'/0/1");
    assert_eq!(record.address, "0x70997970C51812dc3A010C7d01b50e0d17dc79C8");
    // siblings share the parent
    assert_eq!(record.parent_fingerprint, "79bf22d3");
}

#[test]
fn passphrase_changes_the_seed() {
    let wallet = HdWallet::default();
    assert_eq!(wallet.create_wallet(Some(ABANDON), "", 0).unwrap().address, "0x9858EfFD232B4033E47d90003D41EC34EcaEda94");
    assert_eq!(wallet.create_wallet(Some(ABANDON), "TREZOR", 0).unwrap().address, "0x9c32F71D4DB8Fb9e1A58B0a80dF79935e7256FA6");
}

#[test]
fn extended_keys_parse_back() {
    let record = HdWallet::default().create_wallet(Some(HARDHAT), "", 0).unwrap();

    let xprv: XPrv = record.serialized_private_extended_key_base58.parse().unwrap();
    let xpub: XPub = record.serialized_public_extended_key_base58.parse().unwrap();
    assert_eq!(xprv.public_key(), xpub);
    assert_eq!(xpub.to_address(), record.address);
    assert_eq!(hex::encode(xprv.to_bytes()), record.private_key_hex);
}

#[test]
fn record_serializes_camel_case() {
    let record = HdWallet::default().create_wallet(Some(HARDHAT), "", 0).unwrap();
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["address"], record.address.as_str());
    assert_eq!(json["chainCode"], record.chain_code.as_str());
    assert_eq!(json["serializedPublicExtendedKeyBase58"], record.serialized_public_extended_key_base58.as_str());

    let decoded: WalletRecord = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn wallet_from_private_key_matches_derived_account() {
    let derived = HdWallet::default().create_wallet(Some(HARDHAT), "", 0).unwrap();
    let record = HdWallet::wallet_from_private_key(&derived.private_key_hex).unwrap();

    assert_eq!(record.address, "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
    assert_eq!(record.wif, derived.wif);
    assert_eq!(record.fingerprint, "a5547601");
    assert_eq!(record.private_key_hex, derived.private_key_hex);
    assert_eq!(record.public_key_hex, derived.public_key_hex);
    assert_eq!(record.uncompressed_public_key_hex, derived.uncompressed_public_key_hex);

    // upper-case hex is accepted
    let upper = HdWallet::wallet_from_private_key(&derived.private_key_hex.to_uppercase()).unwrap();
    assert_eq!(upper, record);
}

#[test]
fn wallet_from_private_key_rejects_bad_input() {
    assert!(matches!(HdWallet::wallet_from_private_key("abcd"), Err(Error::Bip32(Bip32Error::InvalidKeyLength(2)))));
    let too_long = "00".repeat(33);
    assert!(matches!(HdWallet::wallet_from_private_key(&too_long), Err(Error::Bip32(Bip32Error::InvalidKeyLength(33)))));
    let not_hex = "zz".repeat(32);
    assert!(matches!(HdWallet::wallet_from_private_key(&not_hex), Err(Error::Bip32(Bip32Error::Hex(_)))));
    let zero = "00".repeat(32);
    assert!(matches!(HdWallet::wallet_from_private_key(&zero), Err(Error::Bip32(Bip32Error::Crypto(_)))));
}

#[test]
fn account_index_must_be_non_hardened() {
    let result = HdWallet::default().create_wallet(Some(HARDHAT), "", 0x8000_0000);
    assert!(matches!(result, Err(Error::Bip32(Bip32Error::ChildNumber))));
}
