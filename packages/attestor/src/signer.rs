//! Validator signing key
//!
//! Wraps alloy's `PrivateKeySigner`. Signatures are produced over the
//! EIP-191 digest of the canonical attestation hash and serialized as
//! 65-byte `r ‖ s ‖ v` with `v` in {27, 28}.

use alloy::primitives::B256;
use alloy::signers::{local::PrivateKeySigner, SignerSync};
use common::Attestation;
use cosmwasm_std::Binary;
use eyre::{eyre, Result};
use tracing::debug;

pub struct ValidatorSigner {
    signer: PrivateKeySigner,
    /// Lowercase 0x-prefixed account, the form the bridge role table stores
    address: String,
}

impl ValidatorSigner {
    /// Create from a hex private key (with or without 0x prefix)
    pub fn from_private_key(private_key: &str) -> Result<Self> {
        let signer: PrivateKeySigner = private_key
            .parse()
            .map_err(|e| eyre!("Invalid private key: {}", e))?;
        let address = format!("0x{}", hex::encode(signer.address().as_slice()));
        Ok(Self { signer, address })
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Sign a prepared 32-byte digest.
    pub fn sign_digest(&self, digest: &[u8; 32]) -> Result<[u8; 65]> {
        let signature = self
            .signer
            .sign_hash_sync(&B256::from(*digest))
            .map_err(|e| eyre!("Signing failed: {}", e))?;
        Ok(signature.as_bytes())
    }

    /// Sign an attestation the way `redeem` expects.
    pub fn sign_attestation(&self, attestation: &Attestation) -> Result<Binary> {
        let digest = attestation.signing_digest();
        let signature = self.sign_digest(&digest)?;
        debug!(
            validator = %self.address,
            tx_id = attestation.tx_id,
            digest = %hex::encode(digest),
            "Attestation signed"
        );
        Ok(Binary::from(signature.to_vec()))
    }
}
