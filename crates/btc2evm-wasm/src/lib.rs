//! WebAssembly bindings for the Bitcoin to EVM address converter.
//!
//! This crate provides JavaScript-accessible APIs for:
//! - Converting a Bitcoin address to a checksummed EVM address
//! - Validating address input as it is typed
//! - Inspecting the decoded address, script and result

use btc2evm_core::ConvertError;
use wasm_bindgen::prelude::*;

pub mod converter;
pub mod report;

// Re-export main types for JS access
pub use converter::AddressConverter;
pub use report::ConversionInfo;

/// Initialize the WASM module with better panic messages.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Convert a Bitcoin address to a checksummed EVM address.
///
/// Throws "Invalid Bitcoin address" on any failure; the reason is logged to
/// the console.
#[wasm_bindgen(js_name = bitcoinToEvmAddress)]
pub fn bitcoin_to_evm_address(address: &str) -> Result<String, JsValue> {
    btc2evm_core::convert(address)
        .map(|derived| derived.into_string())
        .map_err(|err| reject(address, &err))
}

/// Check whether a Bitcoin address is well formed.
#[wasm_bindgen(js_name = isValidBitcoinAddress)]
pub fn is_valid_bitcoin_address(address: &str) -> bool {
    btc2evm_core::is_valid(address)
}

/// Log the failure reason and build the error thrown to JS.
pub(crate) fn reject(address: &str, err: &ConvertError) -> JsValue {
    web_sys::console::warn_1(&JsValue::from_str(&rejection_log(address, err)));
    JsValue::from_str(&err.to_string())
}

fn rejection_log(address: &str, err: &ConvertError) -> String {
    format!("Error converting address {:?}: {}", address, err.kind())
}

#[cfg(test)]
mod tests {
    use super::*;
    use btc2evm_core::DecodeError;

    #[test]
    fn test_rejection_log_names_kind() {
        let err = ConvertError::from(DecodeError::Base58ChecksumMismatch);
        assert_eq!(
            rejection_log("1abc", &err),
            "Error converting address \"1abc\": Base58Check checksum mismatch"
        );
        assert_eq!(err.to_string(), btc2evm_core::INVALID_ADDRESS_MESSAGE);
    }
}
