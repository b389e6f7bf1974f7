//! Bitcoin network definitions and address constants.

/// Bitcoin network type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    /// Bitcoin mainnet
    Mainnet,
    /// Any network sharing the `tb` human-readable part (testnet3, testnet4, signet)
    Testnet,
}

/// Base58Check version byte of mainnet P2PKH addresses.
pub const P2PKH_VERSION: u8 = 0x00;

/// Base58Check version byte of mainnet P2SH addresses.
pub const P2SH_VERSION: u8 = 0x05;

impl Network {
    /// Look up the network for a Bech32 human-readable part.
    pub fn from_hrp(hrp: &str) -> Option<Self> {
        match hrp {
            "bc" => Some(Network::Mainnet),
            "tb" => Some(Network::Testnet),
            _ => None,
        }
    }

    /// Get network name as string.
    pub fn name(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
        }
    }
}

impl core::fmt::Display for Network {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}
