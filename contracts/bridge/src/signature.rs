//! Signer recovery for redeem attestations.
//!
//! Recovery is behind the [`SignerRecovery`] trait so the redeem handler does
//! not depend on a particular signature scheme. [`Secp256k1Recovery`] handles
//! 65-byte `r ‖ s ‖ v` secp256k1 signatures and yields the EVM-style account
//! (`0x` + last 20 bytes of keccak256 of the uncompressed public key).

use common::keccak256;
use cosmwasm_std::Api;

use crate::error::ContractError;

/// secp256k1 group order divided by two. Any `s` above this is the malleable
/// twin of a valid low-s signature.
const SECP256K1_HALF_ORDER: [u8; 32] = [
    0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0x5d, 0x57, 0x6e, 0x73, 0x57, 0xa4, 0x50, 0x1d, 0xdf, 0xe9, 0x2f, 0x46, 0x68, 0x1b, 0x20, 0xa0,
];

pub const SIGNATURE_LEN: usize = 65;

/// Recovers the signing account from a signature over a 32-byte digest.
pub trait SignerRecovery {
    fn recover(
        &self,
        api: &dyn Api,
        digest: &[u8; 32],
        signature: &[u8],
    ) -> Result<String, ContractError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Secp256k1Recovery;

impl SignerRecovery for Secp256k1Recovery {
    fn recover(
        &self,
        api: &dyn Api,
        digest: &[u8; 32],
        signature: &[u8],
    ) -> Result<String, ContractError> {
        if signature.len() != SIGNATURE_LEN {
            return Err(ContractError::InvalidSignature {
                reason: format!(
                    "expected {} bytes, got {}",
                    SIGNATURE_LEN,
                    signature.len()
                ),
            });
        }

        let (rs, v) = signature.split_at(64);
        let recovery_param = match v[0] {
            0 | 27 => 0,
            1 | 28 => 1,
            other => {
                return Err(ContractError::InvalidSignature {
                    reason: format!("invalid recovery id {}", other),
                })
            }
        };

        if rs[32..] > SECP256K1_HALF_ORDER[..] {
            return Err(ContractError::InvalidSignature {
                reason: "malleable signature (high s)".to_string(),
            });
        }

        let pubkey = api
            .secp256k1_recover_pubkey(digest, rs, recovery_param)
            .map_err(|e| ContractError::InvalidSignature {
                reason: e.to_string(),
            })?;

        pubkey_to_account(&pubkey)
    }
}

/// EVM-style account for an uncompressed secp256k1 public key.
pub fn pubkey_to_account(pubkey: &[u8]) -> Result<String, ContractError> {
    if pubkey.len() != 65 || pubkey[0] != 0x04 {
        return Err(ContractError::InvalidSignature {
            reason: "recovered key is not an uncompressed secp256k1 point".to_string(),
        });
    }
    let hash = keccak256(&pubkey[1..]);
    Ok(format!("0x{}", hex::encode(&hash[12..])))
}
