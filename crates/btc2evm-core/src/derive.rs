//! EVM-style address derivation from an output script.
//!
//! The derived address is the last 20 bytes of `keccak256(script)`, rendered
//! as hex with EIP-55 checksum casing.

use alloc::string::String;
use crate::hash::keccak256;
use crate::script::OutputScript;

/// Length of a derived address string: `0x` plus 40 hex characters.
pub const DERIVED_ADDRESS_LEN: usize = 42;

/// A `0x`-prefixed, EIP-55 checksummed address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DerivedAddress(String);

impl DerivedAddress {
    /// The address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the address, returning the string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for DerivedAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for DerivedAddress {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<DerivedAddress> for String {
    fn from(address: DerivedAddress) -> Self {
        address.0
    }
}

/// Derive the checksummed address for a script.
pub fn derive(script: &OutputScript) -> DerivedAddress {
    let hash = keccak256(script.as_bytes());
    // Last 20 bytes of keccak256 hash
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);

    DerivedAddress(to_checksum_address(&address))
}

/// Render 20 bytes as an EIP-55 checksummed `0x` address.
pub fn to_checksum_address(address: &[u8; 20]) -> String {
    checksum_case(&hex::encode(address))
}

/// Apply EIP-55 casing to 40 lowercase hex characters.
///
/// Casing is decided by the hash of the lowercase string, not of the raw
/// bytes. A letter is upper-cased when its nibble of that hash is 8 or more.
fn checksum_case(lower: &str) -> String {
    let digest = keccak256(lower.as_bytes());

    let mut out = String::with_capacity(DERIVED_ADDRESS_LEN);
    out.push_str("0x");

    for (i, ch) in lower.chars().enumerate() {
        let byte = digest[i / 2];
        let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };

        if nibble >= 8 {
            out.push(ch.to_ascii_uppercase());
        } else {
            out.push(ch);
        }
    }

    out
}

/// Check that `address` is `0x` plus 40 hex characters with correct casing.
pub fn is_checksum_valid(address: &str) -> bool {
    let Some(body) = address.strip_prefix("0x") else {
        return false;
    };

    if body.len() != 40 || !body.chars().all(|c| c.is_ascii_hexdigit()) {
        return false;
    }

    checksum_case(&body.to_ascii_lowercase()) == address
}
