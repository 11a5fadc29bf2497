//! # ethkit-signer
//!
//! Key management: Web3 Secret Storage (V3) keystores and local signing.

pub mod keystore;
pub mod signer;

pub use keystore::{Keystore, KeystoreError};
pub use signer::{LocalSigner, Signer, SignerError};
