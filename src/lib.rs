//! # ethkit
//!
//! Umbrella package for **ethkit** — a small toolkit of Ethereum JSON-RPC
//! recipes: block and header queries, bytecode reads, ERC-20 balances,
//! receipt log decoding, raw RPC calls and V3 keystore management.
//!
//! The workspace crates are re-exported under short names:
//!
//! - [`util`] — `ethkit-core`: address, unit, gas and signature helpers plus config
//! - [`evm`] — `ethkit-evm`: the JSON-RPC chain adapter
//! - [`signer`] — `ethkit-signer`: keystore files and local signing
//!
//! The `ethkit` binary lives in `ethkit-cli`.

pub use ethkit_core as util;
pub use ethkit_evm as evm;
pub use ethkit_signer as signer;

/// The types most programs need.
pub mod prelude {
    pub use ethkit_core::config::Config;
    pub use ethkit_core::RsvSignature;
    pub use ethkit_evm::{Address, EvmAdapter, B256, U256};
    pub use ethkit_signer::{Keystore, LocalSigner, Signer};
}
