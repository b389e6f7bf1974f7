//! Yes/no address validation for live input feedback.

use crate::address::AddressDecoder;
use crate::network::{P2PKH_VERSION, P2SH_VERSION};

impl AddressDecoder {
    /// Whether `address` decodes under any supported branch.
    ///
    /// Never fails; every decoding error becomes `false`.
    pub fn is_valid(&self, address: &str) -> bool {
        match self.decode(address) {
            Ok(payload) => match payload.version_byte() {
                Some(version) => version == P2PKH_VERSION || version == P2SH_VERSION,
                None => true,
            },
            Err(_) => false,
        }
    }
}

/// Check an address with the default decoder.
pub fn is_valid(address: &str) -> bool {
    AddressDecoder::default().is_valid(address)
}
