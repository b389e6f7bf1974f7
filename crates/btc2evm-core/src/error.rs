//! Error types for decoding and conversion.

use alloc::string::String;
use thiserror::Error;

/// Message shown to users for any conversion failure.
pub const INVALID_ADDRESS_MESSAGE: &str = "Invalid Bitcoin address";

/// Why a string failed to decode as Bech32 or Bech32m.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Bech32Error {
    /// No `1` separates the human-readable part from the data
    #[error("missing separator")]
    MissingSeparator,
    /// Overall length or data-part length out of range
    #[error("invalid length: {0}")]
    InvalidLength(usize),
    /// Human-readable part is not `bc` or `tb`
    #[error("unknown human-readable part: {0:?}")]
    UnknownHrp(String),
    /// Character outside the Bech32 charset
    #[error("invalid character: {0:?}")]
    InvalidCharacter(char),
    /// Upper-case characters mixed into a lower-case string
    #[error("mixed case")]
    MixedCase,
    /// Nothing left after removing the checksum
    #[error("empty data section")]
    EmptyData,
    /// Checksum does not verify under the attempted constant
    #[error("checksum mismatch")]
    InvalidChecksum,
    /// Leftover bits after regrouping are non-zero or too many
    #[error("invalid padding")]
    InvalidPadding,
}

/// Address decoding errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Address does not start with `1`, `3`, `bc1` or `tb1`
    #[error("unsupported address format")]
    UnsupportedPrefix,
    /// Character outside the Base58 alphabet
    #[error("invalid Base58 character: {0:?}")]
    InvalidBase58Character(char),
    /// Base58 input that could not be decoded at all
    #[error("malformed Base58 string")]
    MalformedBase58,
    /// Too few bytes to hold a version byte and a checksum
    #[error("Base58Check data too short for a checksum")]
    MissingChecksum,
    /// Base58Check checksum verification failed
    #[error("Base58Check checksum mismatch")]
    Base58ChecksumMismatch,
    /// Version byte does not match the address prefix
    #[error("unsupported version byte: {0:#04x}")]
    UnsupportedVersionByte(u8),
    /// Hash or witness program has the wrong length for its variant
    #[error("invalid payload length: {0}")]
    InvalidPayloadLength(usize),
    /// Bech32 decoding failed
    #[error("malformed Bech32: {0}")]
    MalformedBech32(Bech32Error),
    /// Bech32m decoding failed
    #[error("malformed Bech32m: {0}")]
    MalformedBech32m(Bech32Error),
    /// Neither Bech32 nor Bech32m decoding succeeded
    #[error("malformed segwit address (bech32: {bech32}, bech32m: {bech32m})")]
    MalformedSegwit {
        bech32: Bech32Error,
        bech32m: Bech32Error,
    },
    /// Witness version not paired with its encoding
    #[error("unsupported witness version: {0}")]
    UnsupportedWitnessVersion(u8),
}

/// Public conversion failure.
///
/// Displays only the generic user-facing message; the decoding error that
/// caused it stays reachable through [`ConvertError::kind`] and as the error
/// source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", INVALID_ADDRESS_MESSAGE)]
pub struct ConvertError {
    #[from]
    kind: DecodeError,
}

impl ConvertError {
    /// The decoding error behind this failure.
    pub fn kind(&self) -> &DecodeError {
        &self.kind
    }

    /// Consume the error, returning the decoding error.
    pub fn into_kind(self) -> DecodeError {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_convert_error_hides_kind() {
        let err = ConvertError::from(DecodeError::Base58ChecksumMismatch);
        assert_eq!(err.to_string(), INVALID_ADDRESS_MESSAGE);
        assert_eq!(err.kind(), &DecodeError::Base58ChecksumMismatch);
    }

    #[test]
    fn test_decode_error_messages() {
        assert_eq!(
            DecodeError::UnsupportedVersionByte(0x6f).to_string(),
            "unsupported version byte: 0x6f"
        );
        let err = DecodeError::MalformedSegwit {
            bech32: Bech32Error::InvalidChecksum,
            bech32m: Bech32Error::InvalidCharacter('b'),
        };
        assert_eq!(
            err.to_string(),
            "malformed segwit address (bech32: checksum mismatch, bech32m: invalid character: 'b')"
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_convert_error_source() {
        use std::error::Error;

        let err = ConvertError::from(DecodeError::UnsupportedPrefix);
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("unsupported address format"));
    }
}
