//! The decode → script → derive pipeline.

use crate::address::{AddressDecoder, DecodedAddress};
use crate::derive::{derive, DerivedAddress};
use crate::error::ConvertError;
use crate::hash::ChecksumAlgorithm;
use crate::script::{build_script, OutputScript};

/// Every intermediate of one conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// The decoded input address.
    pub address: DecodedAddress,
    /// The output script the address locks to.
    pub script: OutputScript,
    /// The derived checksummed address.
    pub derived: DerivedAddress,
}

/// Converts Bitcoin addresses to checksummed EVM-style addresses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Converter {
    decoder: AddressDecoder,
}

impl Converter {
    /// Create a converter with the standard double-SHA256 checksum.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the digest used to verify Base58Check checksums.
    pub fn with_checksum(mut self, checksum: ChecksumAlgorithm) -> Self {
        self.decoder = self.decoder.with_checksum(checksum);
        self
    }

    /// The Base58Check checksum digest.
    pub fn checksum(&self) -> ChecksumAlgorithm {
        self.decoder.checksum()
    }

    /// The underlying decoder.
    pub fn decoder(&self) -> &AddressDecoder {
        &self.decoder
    }

    /// Convert an address, keeping every intermediate.
    pub fn inspect(&self, address: &str) -> Result<Conversion, ConvertError> {
        let decoded = self.decoder.decode_address(address)?;
        let script = build_script(&decoded.payload);
        let derived = derive(&script);

        Ok(Conversion {
            address: decoded,
            script,
            derived,
        })
    }

    /// Convert an address to its derived address.
    pub fn convert(&self, address: &str) -> Result<DerivedAddress, ConvertError> {
        self.inspect(address).map(|conversion| conversion.derived)
    }

    /// Whether `address` would decode.
    pub fn is_valid(&self, address: &str) -> bool {
        self.decoder.is_valid(address)
    }
}

/// Convert an address with the default converter.
pub fn convert(address: &str) -> Result<DerivedAddress, ConvertError> {
    Converter::default().convert(address)
}
