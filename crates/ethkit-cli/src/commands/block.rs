//! `ethkit block` — show a block header and summary.

use ethkit_evm::{BlockSummary, HeaderSummary};
use serde::Serialize;

use super::{CmdResult, Context};

#[derive(Serialize)]
struct BlockReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    latest: Option<HeaderSummary>,
    block: BlockSummary,
    /// As reported by `eth_getBlockTransactionCountByHash`.
    transaction_count_by_hash: u64,
}

/// Run the `block` subcommand.
pub async fn run(ctx: &Context, number: Option<u64>) -> CmdResult {
    let adapter = ctx.adapter()?;

    let (latest, number) = match number {
        Some(n) => (None, n),
        None => {
            let header = adapter.latest_header().await?;
            let n = header.number;
            (Some(header), n)
        }
    };

    let block = adapter.block_by_number(number).await?;
    let transaction_count_by_hash = adapter.transaction_count(block.hash).await?;

    let report = BlockReport {
        latest,
        block,
        transaction_count_by_hash,
    };

    ctx.emit(&report, |r| {
        if let Some(header) = &r.latest {
            println!("Latest header: {}", header.number);
        }
        println!("Number:       {}", r.block.number);
        println!("Timestamp:    {}", r.block.timestamp);
        println!("Difficulty:   {}", r.block.difficulty);
        println!("Hash:         {}", r.block.hash);
        println!("Transactions: {}", r.block.transaction_count);
        println!("Tx count:     {} (by hash)", r.transaction_count_by_hash);
    })
}
