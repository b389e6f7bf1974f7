//! Output script (scriptPubKey) construction.

use alloc::string::String;
use alloc::vec::Vec;
use crate::address::DecodedPayload;

/// Script opcodes used by standard output scripts.
pub mod opcodes {
    /// Push an empty array; witness version 0
    pub const OP_0: u8 = 0x00;
    /// Witness version 1
    pub const OP_1: u8 = 0x51;
    pub const OP_DUP: u8 = 0x76;
    pub const OP_EQUAL: u8 = 0x87;
    pub const OP_EQUALVERIFY: u8 = 0x88;
    pub const OP_HASH160: u8 = 0xa9;
    pub const OP_CHECKSIG: u8 = 0xac;
}

use opcodes::*;

/// Locking script bytes for a decoded address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OutputScript(Vec<u8>);

impl OutputScript {
    /// Raw script bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume the script, returning its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Script length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the script is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase hex encoding of the script.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl AsRef<[u8]> for OutputScript {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl core::fmt::Display for OutputScript {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Build the canonical output script for a payload.
pub fn build_script(payload: &DecodedPayload) -> OutputScript {
    let script = match payload {
        DecodedPayload::LegacyP2PKH { hash160 } => {
            // OP_DUP OP_HASH160 <20-byte-hash> OP_EQUALVERIFY OP_CHECKSIG
            let mut script = Vec::with_capacity(25);
            script.push(OP_DUP);
            script.push(OP_HASH160);
            push_slice(&mut script, hash160);
            script.push(OP_EQUALVERIFY);
            script.push(OP_CHECKSIG);
            script
        }
        DecodedPayload::LegacyP2SH { hash160 } => {
            // OP_HASH160 <20-byte-hash> OP_EQUAL
            let mut script = Vec::with_capacity(23);
            script.push(OP_HASH160);
            push_slice(&mut script, hash160);
            script.push(OP_EQUAL);
            script
        }
        DecodedPayload::SegwitV0 { program } => witness_script(OP_0, program.as_bytes()),
        DecodedPayload::TaprootV1 { program } => witness_script(OP_1, program),
    };

    OutputScript(script)
}

/// OP_n <program>
fn witness_script(version_opcode: u8, program: &[u8]) -> Vec<u8> {
    let mut script = Vec::with_capacity(2 + program.len());
    script.push(version_opcode);
    push_slice(&mut script, program);
    script
}

/// Direct push; payloads are at most 32 bytes, well under OP_PUSHDATA1.
fn push_slice(script: &mut Vec<u8>, data: &[u8]) {
    script.push(data.len() as u8);
    script.extend_from_slice(data);
}
