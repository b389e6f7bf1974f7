//! Bitcoin address decoding.
//!
//! Supports:
//! - P2PKH (Pay to Public Key Hash) - Base58Check addresses starting with 1
//! - P2SH (Pay to Script Hash) - Base58Check addresses starting with 3
//! - P2WPKH (Pay to Witness Public Key Hash) - Native SegWit v0, bc1q.../tb1q...
//! - P2WSH (Pay to Witness Script Hash) - Native SegWit v0, bc1q... (32-byte program)
//! - P2TR (Pay to Taproot) - SegWit v1, bc1p.../tb1p...

use crate::base58;
use crate::bech32::{convert_bits, Bech32String, Variant};
use crate::error::{Bech32Error, DecodeError};
use crate::hash::ChecksumAlgorithm;
use crate::network::{Network, P2PKH_VERSION, P2SH_VERSION};

/// Text encoding family of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressEncoding {
    Base58Check,
    Bech32,
    Bech32m,
}

impl AddressEncoding {
    /// Get the display name for this encoding.
    pub fn name(&self) -> &'static str {
        match self {
            AddressEncoding::Base58Check => "Base58Check",
            AddressEncoding::Bech32 => "Bech32",
            AddressEncoding::Bech32m => "Bech32m",
        }
    }
}

/// Bitcoin address type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressType {
    /// Legacy P2PKH: OP_DUP OP_HASH160 <20-byte-hash> OP_EQUALVERIFY OP_CHECKSIG
    P2PKH,
    /// P2SH: OP_HASH160 <20-byte-hash> OP_EQUAL
    P2SH,
    /// Native SegWit v0 P2WPKH: OP_0 <20-byte-hash>
    P2WPKH,
    /// Native SegWit v0 P2WSH: OP_0 <32-byte-hash>
    P2WSH,
    /// Taproot P2TR: OP_1 <32-byte-x-only-pubkey>
    P2TR,
}

impl AddressType {
    /// Get the display name for this address type.
    pub fn name(&self) -> &'static str {
        match self {
            AddressType::P2PKH => "P2PKH",
            AddressType::P2SH => "P2SH",
            AddressType::P2WPKH => "P2WPKH",
            AddressType::P2WSH => "P2WSH",
            AddressType::P2TR => "P2TR",
        }
    }
}

/// Witness version 0 program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegwitProgram {
    /// 20-byte public key hash (P2WPKH)
    KeyHash([u8; 20]),
    /// 32-byte script hash (P2WSH)
    ScriptHash([u8; 32]),
}

impl SegwitProgram {
    /// Raw program bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            SegwitProgram::KeyHash(hash) => hash,
            SegwitProgram::ScriptHash(hash) => hash,
        }
    }
}

/// Hash or witness program recovered from an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodedPayload {
    LegacyP2PKH { hash160: [u8; 20] },
    LegacyP2SH { hash160: [u8; 20] },
    SegwitV0 { program: SegwitProgram },
    TaprootV1 { program: [u8; 32] },
}

impl DecodedPayload {
    /// The script type this payload pays to.
    pub fn address_type(&self) -> AddressType {
        match self {
            DecodedPayload::LegacyP2PKH { .. } => AddressType::P2PKH,
            DecodedPayload::LegacyP2SH { .. } => AddressType::P2SH,
            DecodedPayload::SegwitV0 {
                program: SegwitProgram::KeyHash(_),
            } => AddressType::P2WPKH,
            DecodedPayload::SegwitV0 {
                program: SegwitProgram::ScriptHash(_),
            } => AddressType::P2WSH,
            DecodedPayload::TaprootV1 { .. } => AddressType::P2TR,
        }
    }

    /// Base58Check version byte, for legacy payloads.
    pub fn version_byte(&self) -> Option<u8> {
        match self {
            DecodedPayload::LegacyP2PKH { .. } => Some(P2PKH_VERSION),
            DecodedPayload::LegacyP2SH { .. } => Some(P2SH_VERSION),
            _ => None,
        }
    }

    /// Witness version, for segwit payloads.
    pub fn witness_version(&self) -> Option<u8> {
        match self {
            DecodedPayload::SegwitV0 { .. } => Some(0),
            DecodedPayload::TaprootV1 { .. } => Some(1),
            _ => None,
        }
    }

    /// The hash or witness program bytes.
    pub fn hash_bytes(&self) -> &[u8] {
        match self {
            DecodedPayload::LegacyP2PKH { hash160 }
            | DecodedPayload::LegacyP2SH { hash160 } => hash160,
            DecodedPayload::SegwitV0 { program } => program.as_bytes(),
            DecodedPayload::TaprootV1 { program } => program,
        }
    }
}

/// A decoded address together with where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecodedAddress {
    /// The network implied by the prefix.
    pub network: Network,
    /// The encoding family that decoded successfully.
    pub encoding: AddressEncoding,
    /// The recovered hash or witness program.
    pub payload: DecodedPayload,
}

/// Address decoder.
///
/// Holds the digest used for Base58Check checksums; everything else about
/// decoding is fixed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddressDecoder {
    checksum: ChecksumAlgorithm,
}

impl AddressDecoder {
    /// Create a decoder with the standard double-SHA256 checksum.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Base58Check checksum digest.
    pub fn with_checksum(mut self, checksum: ChecksumAlgorithm) -> Self {
        self.checksum = checksum;
        self
    }

    /// The Base58Check checksum digest.
    pub fn checksum(&self) -> ChecksumAlgorithm {
        self.checksum
    }

    /// Decode an address into its payload.
    pub fn decode(&self, address: &str) -> Result<DecodedPayload, DecodeError> {
        self.decode_address(address).map(|decoded| decoded.payload)
    }

    /// Decode an address into its payload, network and encoding.
    ///
    /// The prefix picks the decoder: `1` and `3` are Base58Check, `bc1` and
    /// `tb1` are Bech32 then Bech32m. Anything else, including surrounding
    /// whitespace, is rejected before any decoding is attempted.
    pub fn decode_address(&self, address: &str) -> Result<DecodedAddress, DecodeError> {
        if address.starts_with('1') {
            let hash160 = self.decode_legacy(address, P2PKH_VERSION)?;
            Ok(legacy(DecodedPayload::LegacyP2PKH { hash160 }))
        } else if address.starts_with('3') {
            let hash160 = self.decode_legacy(address, P2SH_VERSION)?;
            Ok(legacy(DecodedPayload::LegacyP2SH { hash160 }))
        } else if address.starts_with("bc1") || address.starts_with("tb1") {
            decode_segwit(address)
        } else {
            Err(DecodeError::UnsupportedPrefix)
        }
    }

    /// Decode a Base58Check address and check its version byte.
    pub fn decode_legacy(
        &self,
        address: &str,
        expected_version: u8,
    ) -> Result<[u8; 20], DecodeError> {
        let decoded = base58::decode_check(address, self.checksum)?;

        if decoded.version != expected_version {
            return Err(DecodeError::UnsupportedVersionByte(decoded.version));
        }

        decoded
            .payload
            .as_slice()
            .try_into()
            .map_err(|_| DecodeError::InvalidPayloadLength(decoded.payload.len()))
    }
}

/// Decode an address with the default decoder.
pub fn decode(address: &str) -> Result<DecodedPayload, DecodeError> {
    AddressDecoder::default().decode(address)
}

fn legacy(payload: DecodedPayload) -> DecodedAddress {
    DecodedAddress {
        network: Network::Mainnet,
        encoding: AddressEncoding::Base58Check,
        payload,
    }
}

/// Try Bech32, then Bech32m; the first that verifies wins.
fn decode_segwit(address: &str) -> Result<DecodedAddress, DecodeError> {
    let parsed = Bech32String::parse(address).map_err(|err| DecodeError::MalformedSegwit {
        bech32: err.clone(),
        bech32m: err,
    })?;

    match decode_witness(&parsed, Variant::Bech32) {
        Err(DecodeError::MalformedBech32(bech32)) => {
            match decode_witness(&parsed, Variant::Bech32m) {
                Err(DecodeError::MalformedBech32m(bech32m)) => {
                    Err(DecodeError::MalformedSegwit { bech32, bech32m })
                }
                result => result,
            }
        }
        result => result,
    }
}

/// Decode the witness version and program under one checksum variant.
///
/// Malformed input comes back as this variant's malformed kind, so the
/// caller can tell "not this encoding" from "this encoding, bad content".
fn decode_witness(
    parsed: &Bech32String<'_>,
    variant: Variant,
) -> Result<DecodedAddress, DecodeError> {
    let data = parsed.verify(variant).map_err(|err| variant.malformed(err))?;

    let (&witness_version, groups) = data
        .split_first()
        .ok_or_else(|| variant.malformed(Bech32Error::EmptyData))?;

    let program = convert_bits(groups, 5, 8, false).map_err(|err| variant.malformed(err))?;

    // Validate witness version against variant, then program length
    let payload = match (variant, witness_version) {
        (Variant::Bech32, 0) => match program.len() {
            20 => DecodedPayload::SegwitV0 {
                program: SegwitProgram::KeyHash(to_array(&program)?),
            },
            32 => DecodedPayload::SegwitV0 {
                program: SegwitProgram::ScriptHash(to_array(&program)?),
            },
            len => return Err(DecodeError::InvalidPayloadLength(len)),
        },
        (Variant::Bech32m, 1) => DecodedPayload::TaprootV1 {
            program: to_array(&program)?,
        },
        (_, version) => return Err(DecodeError::UnsupportedWitnessVersion(version)),
    };

    Ok(DecodedAddress {
        network: parsed.network(),
        encoding: variant.encoding(),
        payload,
    })
}

fn to_array<const N: usize>(bytes: &[u8]) -> Result<[u8; N], DecodeError> {
    bytes
        .try_into()
        .map_err(|_| DecodeError::InvalidPayloadLength(bytes.len()))
}
