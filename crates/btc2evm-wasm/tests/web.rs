//! Browser-side tests of the JS-facing API.

#![cfg(target_arch = "wasm32")]

use btc2evm_wasm::{bitcoin_to_evm_address, is_valid_bitcoin_address, AddressConverter};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn converts_legacy_address() {
    let derived = bitcoin_to_evm_address("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa").unwrap();
    assert_eq!(derived.len(), 42);
    assert!(derived.starts_with("0x"));
}

#[wasm_bindgen_test]
fn rejects_with_generic_message() {
    let err = bitcoin_to_evm_address("xyz123").unwrap_err();
    assert_eq!(err, JsValue::from_str("Invalid Bitcoin address"));
    assert!(!is_valid_bitcoin_address("xyz123"));
}

#[wasm_bindgen_test]
fn converter_honours_checksum_option() {
    let standard = AddressConverter::new(None).unwrap();
    let keccak = AddressConverter::new(Some("keccak256d".to_string())).unwrap();

    assert_eq!(standard.checksum(), "sha256d");
    assert!(standard.is_valid("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa"));
    assert!(!keccak.is_valid("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa"));
    assert!(AddressConverter::new(Some("md5".to_string())).is_err());
}

#[wasm_bindgen_test]
fn inspect_returns_details() {
    let converter = AddressConverter::new(None).unwrap();
    let info = converter
        .inspect("bc1p5cyxnuxmeuwuvkwfem96lqzszd02n6xdcjrs20cac6yqjjwudpxqkedrcr")
        .unwrap();

    let info: btc2evm_wasm::ConversionInfo = serde_wasm_bindgen::from_value(info).unwrap();
    assert_eq!(info.address_type, "P2TR");
    assert_eq!(info.encoding, "Bech32m");
}
