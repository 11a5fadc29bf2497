//! Hand-built JSON-RPC requests.
//!
//! These bypass the typed provider API and the ABI layer: the caller picks
//! the method name and supplies raw params, and results come back as JSON
//! or raw bytes.

use std::borrow::Cow;

use alloy::primitives::{Address, Bytes};
use alloy::providers::Provider;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use ethkit_core::address::address_from_word;

use crate::adapter::{rpc_error, EvmAdapter, EvmAdapterError, Result};

/// Selector of `owner()`.
pub const OWNER_SELECTOR: [u8; 4] = [0x8d, 0xa5, 0xcb, 0x5b];

/// Call object for `eth_call`, built by hand.
#[derive(Debug, Clone, Serialize)]
struct CallObject {
    to: String,
    data: String,
}

/// Sends an arbitrary JSON-RPC request and returns the raw `result`.
pub async fn call_raw(adapter: &EvmAdapter, method: &str, params: Value) -> Result<Value> {
    debug!(method, %params, "raw rpc request");
    adapter
        .provider()
        .raw_request(Cow::Owned(method.to_string()), params)
        .await
        .map_err(rpc_error)
}

/// Executes `eth_call` against the latest block with a hand-built call object.
pub async fn eth_call_raw(adapter: &EvmAdapter, to: Address, data: &[u8]) -> Result<Bytes> {
    let call = CallObject {
        to: to.to_string(),
        data: format!("0x{}", hex::encode(data)),
    };
    adapter
        .provider()
        .raw_request("eth_call".into(), (call, "latest"))
        .await
        .map_err(rpc_error)
}

/// Reads `owner()` from an `Ownable` contract.
pub async fn contract_owner(adapter: &EvmAdapter, contract: Address) -> Result<Address> {
    let output = eth_call_raw(adapter, contract, &OWNER_SELECTOR).await?;
    if output.len() < 32 {
        return Err(EvmAdapterError::AbiDecode(format!(
            "owner() returned {} bytes, expected a 32-byte word",
            output.len()
        )));
    }
    Ok(address_from_word(&output[..32]))
}
