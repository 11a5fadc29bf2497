//! # ethkit-evm
//!
//! EVM chain adapter — block, bytecode and balance queries, ERC-20 reads,
//! receipt log decoding and raw JSON-RPC calls.
//!
//! ## Modules
//!
//! - [`abi`] — contract ABI definitions using alloy's `sol!` macro
//! - [`adapter`] — JSON-RPC adapter for querying chain state
//! - [`token`] — ERC-20 balance and metadata reads
//! - [`logs`] — receipt fetching and event log decoding
//! - [`rpc`] — hand-built JSON-RPC requests that bypass the ABI layer

pub mod abi;
pub mod adapter;
pub mod logs;
pub mod rpc;
pub mod token;

// Re-export key types for convenience.
pub use adapter::{BlockSummary, EvmAdapter, EvmAdapterError, HeaderSummary};
pub use logs::TransferEvent;
pub use token::{TokenHolding, TokenInfo};

// Re-export alloy primitives used in the public API.
pub use alloy::primitives::{Address, Bytes, B256, U256};
