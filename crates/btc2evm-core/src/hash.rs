//! Digest primitives used by the decoder and the deriver.

use sha2::Sha256;
use sha3::{Digest, Keccak256};

/// Bitcoin's double SHA256: SHA256(SHA256(data)).
///
/// This is the digest real Base58Check checksums are computed with.
#[inline]
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(&first);
    let mut result = [0u8; 32];
    result.copy_from_slice(&second);
    result
}

/// Keccak-256 as used by EVM chains (not NIST SHA3-256).
#[inline]
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let hash = hasher.finalize();
    let mut result = [0u8; 32];
    result.copy_from_slice(&hash);
    result
}

/// Keccak-256 applied twice.
#[inline]
pub fn double_keccak256(data: &[u8]) -> [u8; 32] {
    keccak256(&keccak256(data))
}

/// Digest used to verify the 4-byte Base58Check checksum.
///
/// Both variants apply their hash twice and compare the first four bytes of
/// the result against the checksum suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChecksumAlgorithm {
    /// SHA256(SHA256(data)), the Bitcoin standard.
    DoubleSha256,
    /// Keccak256(Keccak256(data)).
    DoubleKeccak256,
}

impl ChecksumAlgorithm {
    /// Hash `data` with this algorithm.
    pub fn digest(&self, data: &[u8]) -> [u8; 32] {
        match self {
            ChecksumAlgorithm::DoubleSha256 => double_sha256(data),
            ChecksumAlgorithm::DoubleKeccak256 => double_keccak256(data),
        }
    }

    /// The 4-byte checksum of `data`.
    pub fn checksum(&self, data: &[u8]) -> [u8; 4] {
        let digest = self.digest(data);
        [digest[0], digest[1], digest[2], digest[3]]
    }

    /// Parse an algorithm from its name.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sha256d" | "double-sha256" | "sha256" => Some(ChecksumAlgorithm::DoubleSha256),
            "keccak256d" | "double-keccak256" | "keccak256" => {
                Some(ChecksumAlgorithm::DoubleKeccak256)
            }
            _ => None,
        }
    }

    /// Get the algorithm name as string.
    pub fn name(&self) -> &'static str {
        match self {
            ChecksumAlgorithm::DoubleSha256 => "sha256d",
            ChecksumAlgorithm::DoubleKeccak256 => "keccak256d",
        }
    }
}

impl core::fmt::Display for ChecksumAlgorithm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Default for ChecksumAlgorithm {
    fn default() -> Self {
        ChecksumAlgorithm::DoubleSha256
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_sha256() {
        // Test vector: SHA256d("hello")
        let hash = double_sha256(b"hello");
        let expected = hex::decode(
            "9595c9df90075148eb06860365df33584b75bff782a510c6cd4883a419833d50"
        ).unwrap();

        assert_eq!(hash.as_slice(), expected.as_slice());
    }

    #[test]
    fn test_keccak256_empty() {
        // Keccak-256 of the empty string, distinct from SHA3-256("")
        let expected = hex::decode(
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        ).unwrap();

        assert_eq!(keccak256(b"").as_slice(), expected.as_slice());
    }

    #[test]
    fn test_double_keccak256() {
        assert_eq!(double_keccak256(b"abc"), keccak256(&keccak256(b"abc")));
        assert_ne!(double_keccak256(b"abc"), keccak256(b"abc"));
    }

    #[test]
    fn test_checksum_is_digest_prefix() {
        for algorithm in [ChecksumAlgorithm::DoubleSha256, ChecksumAlgorithm::DoubleKeccak256] {
            let digest = algorithm.digest(b"payload");
            assert_eq!(algorithm.checksum(b"payload"), digest[..4]);
        }
    }

    #[test]
    fn test_checksum_algorithm_from_name() {
        assert_eq!(ChecksumAlgorithm::from_name("sha256d"), Some(ChecksumAlgorithm::DoubleSha256));
        assert_eq!(ChecksumAlgorithm::from_name("SHA256D"), Some(ChecksumAlgorithm::DoubleSha256));
        assert_eq!(
            ChecksumAlgorithm::from_name("double-keccak256"),
            Some(ChecksumAlgorithm::DoubleKeccak256)
        );
        assert_eq!(ChecksumAlgorithm::from_name("md5"), None);
        assert_eq!(ChecksumAlgorithm::default(), ChecksumAlgorithm::DoubleSha256);
    }
}
