//! Signing interface.
//!
//! [`Signer`] produces recoverable secp256k1 signatures in the 65-byte
//! `r || s || v` layout used on Ethereum. [`LocalSigner`] holds the key in
//! memory, typically after [`Keystore::unlock`](crate::Keystore::unlock).

use alloy::primitives::{eip191_hash_message, Address};
use ethkit_core::RsvSignature;
use k256::ecdsa::SigningKey;
use thiserror::Error;

use crate::keystore::signing_key_address;

/// Errors from signing operations.
#[derive(Debug, Error)]
pub enum SignerError {
    #[error("invalid private key")]
    InvalidKey,
    #[error("signing failed: {0}")]
    Signing(String),
}

/// A signer that can sign 32-byte digests and personal messages.
pub trait Signer {
    /// Returns the signer's address.
    fn address(&self) -> Address;

    /// Signs a 32-byte digest as-is.
    fn sign_hash(&self, hash: &[u8; 32]) -> Result<RsvSignature, SignerError>;

    /// Signs `message` with the EIP-191 `personal_sign` prefix.
    fn sign_message(&self, message: &[u8]) -> Result<RsvSignature, SignerError> {
        let hash = eip191_hash_message(message);
        self.sign_hash(&hash.0)
    }
}

/// An in-memory secp256k1 key.
#[derive(Clone)]
pub struct LocalSigner {
    key: SigningKey,
    address: Address,
}

impl LocalSigner {
    pub fn new(key: SigningKey) -> Self {
        let address = signing_key_address(&key);
        Self { key, address }
    }

    /// Builds a signer from a raw 32-byte private key.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self, SignerError> {
        let key = SigningKey::from_slice(bytes).map_err(|_| SignerError::InvalidKey)?;
        Ok(Self::new(key))
    }

    pub fn signing_key(&self) -> &SigningKey {
        &self.key
    }
}

impl std::fmt::Debug for LocalSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalSigner")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

impl Signer for LocalSigner {
    fn address(&self) -> Address {
        self.address
    }

    fn sign_hash(&self, hash: &[u8; 32]) -> Result<RsvSignature, SignerError> {
        let (signature, recovery_id) = self
            .key
            .sign_prehash_recoverable(hash)
            .map_err(|e| SignerError::Signing(e.to_string()))?;

        let bytes = signature.to_bytes();
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..]);

        Ok(RsvSignature {
            r,
            s,
            v: recovery_id.to_byte() + 27,
        })
    }
}
