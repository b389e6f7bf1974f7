//! Bech32 (BIP-173) and Bech32m (BIP-350) decoding.
//!
//! Decoding happens in two steps. [`Bech32String::parse`] splits the input,
//! maps the human-readable part to a [`Network`] and checks every data
//! character against the charset. [`Bech32String::verify`] then checks the
//! checksum for one [`Variant`], so a caller can try both variants on the
//! same parsed string.

use alloc::string::ToString;
use alloc::vec::Vec;
use crate::address::AddressEncoding;
use crate::error::{Bech32Error, DecodeError};
use crate::network::Network;

const BECH32_CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Maximum length of a Bech32 string.
pub const MAX_LENGTH: usize = 90;

/// Number of 5-bit groups in the checksum.
pub const CHECKSUM_LENGTH: usize = 6;

const BECH32_CONST: u32 = 1;
const BECH32M_CONST: u32 = 0x2bc830a3;

/// Checksum variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// BIP-173, used by witness version 0
    Bech32,
    /// BIP-350, used by witness version 1 and above
    Bech32m,
}

impl Variant {
    fn constant(&self) -> u32 {
        match self {
            Variant::Bech32 => BECH32_CONST,
            Variant::Bech32m => BECH32M_CONST,
        }
    }

    /// The address encoding this variant decodes.
    pub fn encoding(&self) -> AddressEncoding {
        match self {
            Variant::Bech32 => AddressEncoding::Bech32,
            Variant::Bech32m => AddressEncoding::Bech32m,
        }
    }

    /// Wrap a failure of this variant into its decode error kind.
    pub fn malformed(&self, err: Bech32Error) -> DecodeError {
        match self {
            Variant::Bech32 => DecodeError::MalformedBech32(err),
            Variant::Bech32m => DecodeError::MalformedBech32m(err),
        }
    }
}

/// A Bech32-shaped string whose charset has been validated.
///
/// The checksum has not been verified yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bech32String<'a> {
    hrp: &'a str,
    network: Network,
    /// 5-bit values, checksum included.
    data: Vec<u8>,
}

impl<'a> Bech32String<'a> {
    /// Split and validate `input` without looking at the checksum.
    pub fn parse(input: &'a str) -> Result<Self, Bech32Error> {
        if input.len() > MAX_LENGTH {
            return Err(Bech32Error::InvalidLength(input.len()));
        }

        // Prefixes are dispatched in lower case, so any upper case is mixed
        if input.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(Bech32Error::MixedCase);
        }

        let sep_pos = input.rfind('1').ok_or(Bech32Error::MissingSeparator)?;
        let hrp = &input[..sep_pos];
        let data_part = &input[sep_pos + 1..];

        let network = Network::from_hrp(hrp)
            .ok_or_else(|| Bech32Error::UnknownHrp(hrp.to_string()))?;

        if data_part.len() < CHECKSUM_LENGTH {
            return Err(Bech32Error::InvalidLength(data_part.len()));
        }

        let data = data_part
            .chars()
            .map(|c| charset_index(c).ok_or(Bech32Error::InvalidCharacter(c)))
            .collect::<Result<Vec<u8>, _>>()?;

        Ok(Bech32String { hrp, network, data })
    }

    /// Human-readable part.
    pub fn hrp(&self) -> &'a str {
        self.hrp
    }

    /// Network named by the human-readable part.
    pub fn network(&self) -> Network {
        self.network
    }

    /// Verify the checksum for `variant` and return the data without it.
    pub fn verify(&self, variant: Variant) -> Result<&[u8], Bech32Error> {
        if bech32_polymod(&hrp_expand(self.hrp), &self.data) != variant.constant() {
            return Err(Bech32Error::InvalidChecksum);
        }

        Ok(&self.data[..self.data.len() - CHECKSUM_LENGTH])
    }
}

fn charset_index(c: char) -> Option<u8> {
    BECH32_CHARSET
        .iter()
        .position(|&x| x as char == c)
        .map(|idx| idx as u8)
}

fn hrp_expand(hrp: &str) -> Vec<u8> {
    let mut result = Vec::with_capacity(hrp.len() * 2 + 1);

    for c in hrp.bytes() {
        result.push(c >> 5);
    }
    result.push(0);
    for c in hrp.bytes() {
        result.push(c & 31);
    }

    result
}

fn bech32_polymod(hrp: &[u8], data: &[u8]) -> u32 {
    const GEN: [u32; 5] = [0x3b6a57b2, 0x26508e6d, 0x1ea119fa, 0x3d4233dd, 0x2a1462b3];

    let mut chk: u32 = 1;

    for &value in hrp.iter().chain(data.iter()) {
        let top = chk >> 25;
        chk = ((chk & 0x1ffffff) << 5) ^ (value as u32);
        for (i, &g) in GEN.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= g;
            }
        }
    }

    chk
}

/// Regroup `data` from `from_bits`-wide values to `to_bits`-wide values.
///
/// Without `pad`, at most `from_bits - 1` leftover bits are allowed and they
/// must all be zero.
pub fn convert_bits(
    data: &[u8],
    from_bits: u8,
    to_bits: u8,
    pad: bool,
) -> Result<Vec<u8>, Bech32Error> {
    let mut acc: u32 = 0;
    let mut bits: u8 = 0;
    let mut result = Vec::with_capacity(data.len() * from_bits as usize / to_bits as usize + 1);
    let max_value = (1u32 << to_bits) - 1;
    let max_acc = (1u32 << (from_bits + to_bits - 1)) - 1;

    for &value in data {
        if (value as u32) >> from_bits != 0 {
            return Err(Bech32Error::InvalidCharacter(value as char));
        }
        acc = ((acc << from_bits) | (value as u32)) & max_acc;
        bits += from_bits;

        while bits >= to_bits {
            bits -= to_bits;
            result.push(((acc >> bits) & max_value) as u8);
        }
    }

    if pad {
        if bits > 0 {
            result.push(((acc << (to_bits - bits)) & max_value) as u8);
        }
    } else if bits >= from_bits || ((acc << (to_bits - bits)) & max_value) != 0 {
        return Err(Bech32Error::InvalidPadding);
    }

    Ok(result)
}

/// Encode a witness program; only used to build test vectors.
#[cfg(test)]
pub(crate) fn encode(
    hrp: &str,
    witness_version: u8,
    program: &[u8],
    variant: Variant,
) -> alloc::string::String {
    let mut data = alloc::vec![witness_version];
    data.extend(convert_bits(program, 8, 5, true).unwrap());

    let mut values = data.clone();
    values.extend_from_slice(&[0u8; CHECKSUM_LENGTH]);
    let polymod = bech32_polymod(&hrp_expand(hrp), &values) ^ variant.constant();
    for i in 0..CHECKSUM_LENGTH {
        data.push(((polymod >> (5 * (5 - i))) & 31) as u8);
    }

    let mut out = alloc::string::String::from(hrp);
    out.push('1');
    for value in data {
        out.push(BECH32_CHARSET[value as usize] as char);
    }
    out
}
