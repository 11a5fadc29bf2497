//! Read-only access to an Ethereum node over HTTP JSON-RPC.
//!
//! [`EvmAdapter`] wraps a type-erased alloy provider and exposes the
//! block, bytecode, balance and contract-call queries the CLI needs.

use alloy::eips::{BlockId, BlockNumberOrTag};
use alloy::network::Ethereum;
use alloy::primitives::{Address, Bytes, B256, U256, U64};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::types::{Block, TransactionRequest};
use alloy::sol_types::SolCall;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors from node queries.
#[derive(Debug, Error)]
pub enum EvmAdapterError {
    #[error("RPC error: {0}")]
    Rpc(String),
    #[error("URL parse error: {0}")]
    UrlParse(String),
    #[error("ABI decode error: {0}")]
    AbiDecode(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("unit conversion error: {0}")]
    Units(#[from] ethkit_core::units::UnitsError),
}

pub type Result<T> = std::result::Result<T, EvmAdapterError>;

pub(crate) fn rpc_error(e: impl std::fmt::Display) -> EvmAdapterError {
    EvmAdapterError::Rpc(e.to_string())
}

/// The identifying fields of a block header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderSummary {
    pub number: u64,
    pub hash: B256,
    pub timestamp: u64,
}

/// Selected fields of a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSummary {
    pub number: u64,
    pub hash: B256,
    pub timestamp: u64,
    pub difficulty: U256,
    /// Number of transactions included in the block.
    pub transaction_count: usize,
}

impl From<&Block> for HeaderSummary {
    fn from(block: &Block) -> Self {
        Self {
            number: block.header.number,
            hash: block.header.hash,
            timestamp: block.header.timestamp,
        }
    }
}

impl From<&Block> for BlockSummary {
    fn from(block: &Block) -> Self {
        Self {
            number: block.header.number,
            hash: block.header.hash,
            timestamp: block.header.timestamp,
            difficulty: block.header.difficulty,
            transaction_count: block.transactions.len(),
        }
    }
}

/// A connection to one JSON-RPC endpoint.
pub struct EvmAdapter {
    provider: DynProvider<Ethereum>,
    rpc_url: String,
}

impl std::fmt::Debug for EvmAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvmAdapter")
            .field("rpc_url", &self.rpc_url)
            .finish()
    }
}

impl EvmAdapter {
    /// Builds an HTTP provider for `rpc_url`. No request is sent.
    pub fn new(rpc_url: &str) -> Result<Self> {
        let url: alloy::transports::http::reqwest::Url = rpc_url
            .parse()
            .map_err(|e| EvmAdapterError::UrlParse(format!("{e}")))?;

        let provider = ProviderBuilder::new().connect_http(url).erased();
        debug!(rpc_url, "connected EVM adapter");

        Ok(Self {
            provider,
            rpc_url: rpc_url.to_string(),
        })
    }

    /// The provider, for requests the adapter has no method for.
    pub fn provider(&self) -> &DynProvider<Ethereum> {
        &self.provider
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    /// Gets the chain ID from the connected node.
    pub async fn get_chain_id(&self) -> Result<u64> {
        self.provider.get_chain_id().await.map_err(rpc_error)
    }

    /// Queries the native (ETH) balance for an address.
    pub async fn get_eth_balance(&self, address: Address) -> Result<U256> {
        self.provider.get_balance(address).await.map_err(rpc_error)
    }

    /// Returns the number of the most recent block.
    pub async fn latest_block_number(&self) -> Result<u64> {
        self.provider.get_block_number().await.map_err(rpc_error)
    }

    /// Returns the header of the most recent block.
    pub async fn latest_header(&self) -> Result<HeaderSummary> {
        let block = self.fetch_block(BlockNumberOrTag::Latest).await?;
        Ok(HeaderSummary::from(&block))
    }

    /// Returns a summary of the block at `number`.
    pub async fn block_by_number(&self, number: u64) -> Result<BlockSummary> {
        let block = self.fetch_block(BlockNumberOrTag::Number(number)).await?;
        Ok(BlockSummary::from(&block))
    }

    async fn fetch_block(&self, tag: BlockNumberOrTag) -> Result<Block> {
        debug!(%tag, "fetching block");
        self.provider
            .get_block_by_number(tag)
            .await
            .map_err(rpc_error)?
            .ok_or_else(|| EvmAdapterError::NotFound(format!("block {tag}")))
    }

    /// Returns the number of transactions in the block with the given hash.
    pub async fn transaction_count(&self, block_hash: B256) -> Result<u64> {
        let count: Option<U64> = self
            .provider
            .raw_request("eth_getBlockTransactionCountByHash".into(), (block_hash,))
            .await
            .map_err(rpc_error)?;

        count
            .map(|c| c.to::<u64>())
            .ok_or_else(|| EvmAdapterError::NotFound(format!("block {block_hash}")))
    }

    /// Reads the deployed bytecode at `address`.
    ///
    /// `block = None` reads from the latest block. Externally-owned
    /// accounts return empty bytes.
    pub async fn code_at(&self, address: Address, block: Option<u64>) -> Result<Bytes> {
        let block_id = block.map_or(BlockId::latest(), BlockId::number);
        debug!(%address, ?block_id, "reading contract code");
        self.provider
            .get_code_at(address)
            .block_id(block_id)
            .await
            .map_err(rpc_error)
    }

    /// Executes a read-only contract call at the latest block and decodes its return value.
    pub async fn call<C: SolCall>(&self, to: Address, call: &C) -> Result<C::Return> {
        let data = call.abi_encode();
        let result: Bytes = self
            .provider
            .call(TransactionRequest::default().to(to).input(data.into()))
            .await
            .map_err(rpc_error)?;

        C::abi_decode_returns(&result).map_err(|e| EvmAdapterError::AbiDecode(e.to_string()))
    }
}
