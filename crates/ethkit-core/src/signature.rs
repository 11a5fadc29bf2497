//! Splitting of 65-byte `r || s || v` ECDSA signatures.

use thiserror::Error;

/// Length of a recoverable secp256k1 signature in bytes.
pub const SIGNATURE_LENGTH: usize = 65;

/// Errors from signature parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignatureError {
    #[error("invalid hex: {0}")]
    Hex(String),
    #[error("invalid signature length: {0} (expected 65 bytes)")]
    InvalidLength(usize),
    #[error("invalid recovery id: {0}")]
    InvalidRecoveryId(u8),
}

/// A signature split into its R, S and V components.
///
/// `v` always uses the 27/28 convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RsvSignature {
    pub r: [u8; 32],
    pub s: [u8; 32],
    pub v: u8,
}

impl RsvSignature {
    /// Reassembles the 65-byte `r || s || v` form.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        let mut out = [0u8; SIGNATURE_LENGTH];
        out[..32].copy_from_slice(&self.r);
        out[32..64].copy_from_slice(&self.s);
        out[64] = self.v;
        out
    }

    /// The recovery id (0 or 1).
    ///
    /// A `v` below 27 is taken to already be a recovery id.
    pub fn recovery_id(&self) -> u8 {
        if self.v >= 27 {
            self.v - 27
        } else {
            self.v
        }
    }
}

/// Splits a raw 65-byte signature into R, S and V.
///
/// A trailing recovery byte of 0/1 is normalised to 27/28.
pub fn split_signature(sig: &[u8]) -> Result<RsvSignature, SignatureError> {
    if sig.len() != SIGNATURE_LENGTH {
        return Err(SignatureError::InvalidLength(sig.len()));
    }

    let v = match sig[64] {
        v @ (0 | 1) => v + 27,
        v @ (27 | 28) => v,
        other => return Err(SignatureError::InvalidRecoveryId(other)),
    };

    let mut r = [0u8; 32];
    let mut s = [0u8; 32];
    r.copy_from_slice(&sig[..32]);
    s.copy_from_slice(&sig[32..64]);
    Ok(RsvSignature { r, s, v })
}

/// Splits a hex-encoded signature (with or without `0x`) into R, S and V.
pub fn sig_rsv(sig: &str) -> Result<RsvSignature, SignatureError> {
    let trimmed = sig.trim();
    let stripped = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    let bytes = hex::decode(stripped).map_err(|e| SignatureError::Hex(e.to_string()))?;
    split_signature(&bytes)
}
