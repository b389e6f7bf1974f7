//! Bitcoin address to EVM address conversion.
//!
//! This crate provides pure Rust implementations of:
//! - Bitcoin address decoding (P2PKH, P2SH, P2WPKH, P2WSH, P2TR)
//! - Canonical output script (scriptPubKey) construction
//! - Keccak-256 address derivation with EIP-55 checksum casing
//! - Format validation for live input feedback
//!
//! ```
//! let derived = btc2evm_core::convert("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa").unwrap();
//! assert_eq!(derived.as_str().len(), 42);
//! assert!(btc2evm_core::is_valid("bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq"));
//! assert!(!btc2evm_core::is_valid("xyz123"));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod address;
pub mod base58;
pub mod bech32;
pub mod convert;
pub mod derive;
pub mod error;
pub mod hash;
pub mod network;
pub mod script;
pub mod validate;

pub use address::{
    decode, AddressDecoder, AddressEncoding, AddressType, DecodedAddress, DecodedPayload,
    SegwitProgram,
};
pub use convert::{convert, Conversion, Converter};
pub use derive::{derive, is_checksum_valid, to_checksum_address, DerivedAddress};
pub use error::{Bech32Error, ConvertError, DecodeError, INVALID_ADDRESS_MESSAGE};
pub use hash::{keccak256, ChecksumAlgorithm};
pub use network::Network;
pub use script::{build_script, OutputScript};
pub use validate::is_valid;
