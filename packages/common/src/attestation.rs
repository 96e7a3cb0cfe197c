//! Canonical attestation encoding for redeem signatures.
//!
//! A validator signs the tuple `(recipient, symbol, amount, chain_from,
//! chain_to, tx_id)`. Every field is prefixed by a one-byte type tag, and
//! variable-length fields carry an explicit length, so no two distinct tuples
//! share an encoding.
//!
//! # Byte Layout
//! - `0x01` ‖ u32 BE length ‖ recipient (UTF-8)
//! - `0x02` ‖ u32 BE length ‖ symbol (UTF-8)
//! - `0x03` ‖ amount (uint256, big-endian, left-padded)
//! - `0x03` ‖ chain_from (uint256)
//! - `0x03` ‖ chain_to (uint256)
//! - `0x03` ‖ tx_id (uint256)
//!
//! The message hash is `keccak256(encoding)`. Validators sign the `eth_sign`
//! digest of that hash: `keccak256("\x19Ethereum Signed Message:\n32" ‖ hash)`.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;
use tiny_keccak::{Hasher, Keccak};

pub const TAG_ADDRESS: u8 = 0x01;
pub const TAG_STRING: u8 = 0x02;
pub const TAG_UINT256: u8 = 0x03;

/// EIP-191 prefix for a 32-byte message
pub const ETH_SIGNED_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Digest a validator actually signs for a given message hash
pub fn eth_signed_message_hash(message_hash: &[u8; 32]) -> [u8; 32] {
    let mut data = Vec::with_capacity(ETH_SIGNED_MESSAGE_PREFIX.len() + 32);
    data.extend_from_slice(ETH_SIGNED_MESSAGE_PREFIX);
    data.extend_from_slice(message_hash);
    keccak256(&data)
}

/// Convert 32 bytes to a 0x-prefixed hex string
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// The fields a validator attests to for one redeem
#[cw_serde]
pub struct Attestation {
    /// Recipient on the destination chain
    pub recipient: String,
    /// Registered token symbol
    pub symbol: String,
    /// Amount in the token's smallest unit
    pub amount: Uint128,
    /// Chain the tokens were burned on
    pub chain_from: u64,
    /// Chain the tokens are minted on
    pub chain_to: u64,
    /// Source transaction identifier (replay key)
    pub tx_id: u64,
}

impl Attestation {
    /// Canonical byte encoding (see module docs for the layout)
    pub fn encode(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(
            2 * 5 + self.recipient.len() + self.symbol.len() + 4 * 33,
        );
        push_bytes(&mut data, TAG_ADDRESS, self.recipient.as_bytes());
        push_bytes(&mut data, TAG_STRING, self.symbol.as_bytes());
        push_uint256(&mut data, self.amount.u128());
        push_uint256(&mut data, self.chain_from as u128);
        push_uint256(&mut data, self.chain_to as u128);
        push_uint256(&mut data, self.tx_id as u128);
        data
    }

    /// keccak256 of the canonical encoding
    pub fn message_hash(&self) -> [u8; 32] {
        keccak256(&self.encode())
    }

    /// The eth_sign digest validators sign over
    pub fn signing_digest(&self) -> [u8; 32] {
        eth_signed_message_hash(&self.message_hash())
    }
}

fn push_bytes(data: &mut Vec<u8>, tag: u8, bytes: &[u8]) {
    data.push(tag);
    data.extend_from_slice(&(bytes.len() as u32).to_be_bytes());
    data.extend_from_slice(bytes);
}

fn push_uint256(data: &mut Vec<u8>, value: u128) {
    data.push(TAG_UINT256);
    // u128 occupies the low 16 bytes of the 32-byte word
    data.extend_from_slice(&[0u8; 16]);
    data.extend_from_slice(&value.to_be_bytes());
}
