//! Transaction receipts and event log decoding.

use alloy::primitives::{keccak256, Address, B256, U256};
use alloy::providers::Provider;
use alloy::rpc::types::{Log, TransactionReceipt};
use alloy::sol_types::SolEvent;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::abi::IERC20;
use crate::adapter::{rpc_error, EvmAdapter, EvmAdapterError, Result};

/// A decoded ERC-20 `Transfer` event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferEvent {
    /// Emitting token contract.
    pub token: Address,
    pub from: Address,
    pub to: Address,
    pub value: U256,
    pub log_index: Option<u64>,
}

/// Fetches the receipt of a mined transaction.
pub async fn receipt(adapter: &EvmAdapter, tx_hash: B256) -> Result<TransactionReceipt> {
    adapter
        .provider()
        .get_transaction_receipt(tx_hash)
        .await
        .map_err(rpc_error)?
        .ok_or_else(|| EvmAdapterError::NotFound(format!("receipt for {tx_hash}")))
}

/// Fetches the logs emitted by a mined transaction.
pub async fn receipt_logs(adapter: &EvmAdapter, tx_hash: B256) -> Result<Vec<Log>> {
    let receipt = receipt(adapter, tx_hash).await?;
    let logs = receipt.inner.logs().to_vec();
    debug!(%tx_hash, count = logs.len(), "fetched receipt logs");
    Ok(logs)
}

/// Topic hash of an event signature, e.g. `Transfer(address,address,uint256)`.
pub fn event_signature(signature: &str) -> B256 {
    keccak256(signature.as_bytes())
}

/// Logs whose first topic equals `topic0`.
pub fn logs_with_topic0(logs: &[Log], topic0: B256) -> impl Iterator<Item = &Log> {
    logs.iter()
        .filter(move |log| log.topics().first() == Some(&topic0))
}

/// Reads the topic at `index` as a `uint256`.
///
/// Returns `None` if the log does not have that many topics.
pub fn indexed_uint(log: &Log, index: usize) -> Option<U256> {
    log.topics()
        .get(index)
        .map(|topic| U256::from_be_bytes(topic.0))
}

/// Decodes every ERC-20 `Transfer` event in `logs`.
///
/// Logs that share the topic but not the layout (ERC-721 transfers index
/// the token id as a fourth topic) are skipped.
pub fn decode_transfers(logs: &[Log]) -> Vec<TransferEvent> {
    logs_with_topic0(logs, IERC20::Transfer::SIGNATURE_HASH)
        .filter_map(|log| {
            let event = IERC20::Transfer::decode_log_data(log.data()).ok()?;
            Some(TransferEvent {
                token: log.address(),
                from: event.from,
                to: event.to,
                value: event.value,
                log_index: log.log_index,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{Bytes, LogData};

    fn make_log(address: Address, topics: Vec<B256>, data: Vec<u8>, index: u64) -> Log {
        Log {
            inner: alloy::primitives::Log {
                address,
                data: LogData::new_unchecked(topics, Bytes::from(data)),
            },
            log_index: Some(index),
            ..Default::default()
        }
    }

    fn address_topic(addr: Address) -> B256 {
        addr.into_word()
    }

    fn erc20_transfer(token: Address, from: Address, to: Address, value: u64, index: u64) -> Log {
        make_log(
            token,
            vec![
                IERC20::Transfer::SIGNATURE_HASH,
                address_topic(from),
                address_topic(to),
            ],
            U256::from(value).to_be_bytes::<32>().to_vec(),
            index,
        )
    }

    fn erc721_transfer(token: Address, from: Address, to: Address, id: u64, index: u64) -> Log {
        make_log(
            token,
            vec![
                IERC20::Transfer::SIGNATURE_HASH,
                address_topic(from),
                address_topic(to),
                B256::from(U256::from(id)),
            ],
            Vec::new(),
            index,
        )
    }

    #[test]
    fn event_signature_matches_sol_macro() {
        assert_eq!(
            event_signature("Transfer(address,address,uint256)"),
            IERC20::Transfer::SIGNATURE_HASH
        );
    }

    #[test]
    fn filters_by_first_topic() {
        let token = Address::with_last_byte(0xaa);
        let other = make_log(token, vec![B256::with_last_byte(1)], Vec::new(), 0);
        let empty = make_log(token, Vec::new(), Vec::new(), 1);
        let transfer = erc20_transfer(token, Address::ZERO, Address::with_last_byte(2), 5, 2);
        let logs = vec![other, empty, transfer];

        let matched: Vec<_> = logs_with_topic0(&logs, IERC20::Transfer::SIGNATURE_HASH).collect();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].log_index, Some(2));
    }

    #[test]
    fn indexed_uint_reads_token_id() {
        let log = erc721_transfer(
            Address::with_last_byte(0xbb),
            Address::ZERO,
            Address::with_last_byte(3),
            1133,
            0,
        );
        assert_eq!(indexed_uint(&log, 3), Some(U256::from(1133u64)));
    }

    #[test]
    fn indexed_uint_out_of_range() {
        let log = erc20_transfer(
            Address::with_last_byte(0xaa),
            Address::ZERO,
            Address::with_last_byte(2),
            5,
            0,
        );
        // three topics: index 3 does not exist
        assert_eq!(indexed_uint(&log, 3), None);
    }

    #[test]
    fn decodes_erc20_transfers_only() {
        let token = Address::with_last_byte(0xaa);
        let nft = Address::with_last_byte(0xbb);
        let alice = Address::with_last_byte(1);
        let bob = Address::with_last_byte(2);
        let logs = vec![
            erc20_transfer(token, alice, bob, 1_000, 0),
            erc721_transfer(nft, alice, bob, 1133, 1),
            erc20_transfer(token, bob, alice, 250, 2),
        ];

        let transfers = decode_transfers(&logs);
        assert_eq!(transfers.len(), 2);
        assert_eq!(
            transfers[0],
            TransferEvent {
                token,
                from: alice,
                to: bob,
                value: U256::from(1_000u64),
                log_index: Some(0),
            }
        );
        assert_eq!(transfers[1].from, bob);
        assert_eq!(transfers[1].value, U256::from(250u64));
        assert_eq!(transfers[1].log_index, Some(2));
    }
}
