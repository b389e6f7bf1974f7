//! Conversion details handed to JavaScript.

use btc2evm_core::Conversion;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Conversion information for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionInfo {
    /// The address as entered.
    pub address: String,
    /// Script type name (P2PKH, P2SH, P2WPKH, P2WSH, P2TR).
    pub address_type: String,
    /// Encoding family name.
    pub encoding: String,
    /// Network name.
    pub network: String,
    /// Output script, hex.
    pub script_pubkey: String,
    /// Derived checksummed address.
    pub evm_address: String,
}

impl ConversionInfo {
    /// Build the display information for a conversion of `address`.
    pub fn new(address: &str, conversion: &Conversion) -> Self {
        ConversionInfo {
            address: address.to_string(),
            address_type: conversion.address.payload.address_type().name().to_string(),
            encoding: conversion.address.encoding.name().to_string(),
            network: conversion.address.network.name().to_string(),
            script_pubkey: conversion.script.to_hex(),
            evm_address: conversion.derived.to_string(),
        }
    }

    /// Convert to JS value.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
    }
}
