//! Configurable converter exposed to JavaScript.

use btc2evm_core::{ChecksumAlgorithm, Converter};
use wasm_bindgen::prelude::*;
use crate::report::ConversionInfo;
use crate::reject;

/// Address converter with a configurable Base58Check checksum digest.
#[wasm_bindgen]
pub struct AddressConverter {
    inner: Converter,
}

#[wasm_bindgen]
impl AddressConverter {
    /// Create a new converter.
    ///
    /// # Arguments
    /// * `checksum` - Base58Check digest name ("sha256d" or "keccak256d"),
    ///   defaults to "sha256d"
    #[wasm_bindgen(constructor)]
    pub fn new(checksum: Option<String>) -> Result<AddressConverter, JsValue> {
        let algorithm = parse_checksum(checksum.as_deref()).map_err(|e| JsValue::from_str(&e))?;

        Ok(AddressConverter {
            inner: Converter::new().with_checksum(algorithm),
        })
    }

    /// Convert a Bitcoin address to a checksummed EVM address.
    #[wasm_bindgen]
    pub fn convert(&self, address: &str) -> Result<String, JsValue> {
        self.inner
            .convert(address)
            .map(|derived| derived.into_string())
            .map_err(|err| reject(address, &err))
    }

    /// Check whether an address can be converted.
    #[wasm_bindgen(js_name = isValid)]
    pub fn is_valid(&self, address: &str) -> bool {
        self.inner.is_valid(address)
    }

    /// Convert an address and return every intermediate for display.
    #[wasm_bindgen]
    pub fn inspect(&self, address: &str) -> Result<JsValue, JsValue> {
        let conversion = self
            .inner
            .inspect(address)
            .map_err(|err| reject(address, &err))?;

        ConversionInfo::new(address, &conversion).to_js()
    }

    /// Get the checksum digest name.
    #[wasm_bindgen(getter)]
    pub fn checksum(&self) -> String {
        self.inner.checksum().name().to_string()
    }
}

fn parse_checksum(name: Option<&str>) -> Result<ChecksumAlgorithm, String> {
    match name {
        None => Ok(ChecksumAlgorithm::default()),
        Some(name) => ChecksumAlgorithm::from_name(name)
            .ok_or_else(|| format!("Unknown checksum algorithm: {}", name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_checksum() {
        assert_eq!(parse_checksum(None), Ok(ChecksumAlgorithm::DoubleSha256));
        assert_eq!(parse_checksum(Some("keccak256d")), Ok(ChecksumAlgorithm::DoubleKeccak256));
        assert_eq!(
            parse_checksum(Some("crc32")),
            Err("Unknown checksum algorithm: crc32".to_string())
        );
    }
}
