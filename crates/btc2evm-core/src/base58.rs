//! Base58Check framing for legacy addresses.
//!
//! The alphabet decoding is done by `bs58`; the checksum is verified here so
//! the digest stays configurable (see [`ChecksumAlgorithm`]).

use alloc::vec::Vec;
use crate::error::DecodeError;
use crate::hash::ChecksumAlgorithm;

/// Length of the checksum suffix.
pub const CHECKSUM_LEN: usize = 4;

/// A verified Base58Check body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Base58Check {
    /// Leading version byte.
    pub version: u8,
    /// Bytes between the version byte and the checksum.
    pub payload: Vec<u8>,
}

/// Decode a Base58Check string and verify its checksum.
pub fn decode_check(input: &str, checksum: ChecksumAlgorithm) -> Result<Base58Check, DecodeError> {
    let decoded = bs58::decode(input)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_vec()
        .map_err(|err| match err {
            bs58::decode::Error::InvalidCharacter { character, .. } => {
                DecodeError::InvalidBase58Character(character)
            }
            _ => DecodeError::MalformedBase58,
        })?;

    // Version byte plus checksum at minimum
    if decoded.len() < 1 + CHECKSUM_LEN {
        return Err(DecodeError::MissingChecksum);
    }

    let (body, expected) = decoded.split_at(decoded.len() - CHECKSUM_LEN);
    if checksum.checksum(body)[..] != *expected {
        return Err(DecodeError::Base58ChecksumMismatch);
    }

    let (&version, payload) = body.split_first().ok_or(DecodeError::MissingChecksum)?;

    Ok(Base58Check {
        version,
        payload: payload.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec;

    fn encode_check(body: &[u8], checksum: ChecksumAlgorithm) -> String {
        let mut data = body.to_vec();
        data.extend_from_slice(&checksum.checksum(body));
        bs58::encode(data).into_string()
    }

    #[test]
    fn test_decode_genesis_address() {
        let decoded = decode_check(
            "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa",
            ChecksumAlgorithm::DoubleSha256,
        )
        .unwrap();

        assert_eq!(decoded.version, 0x00);
        assert_eq!(
            decoded.payload,
            hex::decode("62e907b15cbf27d5425399ebf6f0fb50ebb88f18").unwrap()
        );
    }

    #[test]
    fn test_invalid_character() {
        // '0', 'O', 'I' and 'l' are not in the Bitcoin alphabet
        let result = decode_check("1InvalidAddress000", ChecksumAlgorithm::DoubleSha256);
        assert_eq!(result, Err(DecodeError::InvalidBase58Character('I')));
    }

    #[test]
    fn test_non_ascii_input() {
        let result = decode_check(
            "1A1zP1eP5QGéfi2DMPTfTL5SLmv7DivfNa",
            ChecksumAlgorithm::DoubleSha256,
        );
        assert!(matches!(
            result,
            Err(DecodeError::MalformedBase58) | Err(DecodeError::InvalidBase58Character(_))
        ));
    }

    #[test]
    fn test_checksum_mismatch() {
        // Last character changed
        let result = decode_check(
            "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNb",
            ChecksumAlgorithm::DoubleSha256,
        );
        assert_eq!(result, Err(DecodeError::Base58ChecksumMismatch));
    }

    #[test]
    fn test_too_short() {
        assert_eq!(
            decode_check("1", ChecksumAlgorithm::DoubleSha256),
            Err(DecodeError::MissingChecksum)
        );
        assert_eq!(
            decode_check("", ChecksumAlgorithm::DoubleSha256),
            Err(DecodeError::MissingChecksum)
        );
    }

    #[test]
    fn test_checksum_algorithm_is_honoured() {
        let body = [vec![0x00], vec![0x42; 20]].concat();
        let keccak = encode_check(&body, ChecksumAlgorithm::DoubleKeccak256);

        let decoded = decode_check(&keccak, ChecksumAlgorithm::DoubleKeccak256).unwrap();
        assert_eq!(decoded.version, 0x00);
        assert_eq!(decoded.payload, vec![0x42; 20]);

        assert_eq!(
            decode_check(&keccak, ChecksumAlgorithm::DoubleSha256),
            Err(DecodeError::Base58ChecksumMismatch)
        );
    }
}
