//! `ethkit logs` — inspect the events emitted by a transaction.

use alloy::primitives::{Address, B256, U256};
use ethkit_evm::logs;
use serde::Serialize;

use super::{CmdResult, Context};

#[derive(Serialize)]
struct MatchedLog {
    address: Address,
    log_index: Option<u64>,
    topics: Vec<B256>,
    #[serde(skip_serializing_if = "Option::is_none")]
    indexed: Option<U256>,
}

/// Run the `logs` subcommand.
pub async fn run(
    ctx: &Context,
    tx: B256,
    topic: Option<String>,
    index: Option<usize>,
) -> CmdResult {
    let adapter = ctx.adapter()?;
    let all = logs::receipt_logs(&adapter, tx).await?;

    let Some(topic) = topic else {
        let transfers = logs::decode_transfers(&all);
        return ctx.emit(&transfers, |transfers| {
            if transfers.is_empty() {
                println!("No ERC-20 transfers in {} log(s)", all.len());
            }
            for t in transfers {
                println!("Transfer {} -> {}: {} (token {})", t.from, t.to, t.value, t.token);
            }
        });
    };

    let topic0 = parse_topic(&topic)?;
    let mut matched = Vec::new();
    for log in logs::logs_with_topic0(&all, topic0) {
        let indexed = match index {
            Some(i) => Some(
                logs::indexed_uint(log, i)
                    .ok_or_else(|| format!("log has no indexed topic {i}"))?,
            ),
            None => None,
        };
        matched.push(MatchedLog {
            address: log.address(),
            log_index: log.log_index,
            topics: log.topics().to_vec(),
            indexed,
        });
    }

    ctx.emit(&matched, |matched| {
        println!("{} of {} log(s) match {topic0}", matched.len(), all.len());
        for m in matched {
            match m.log_index {
                Some(i) => println!("#{i} {}", m.address),
                None => println!("{}", m.address),
            }
            if let Some(value) = m.indexed {
                println!("  indexed: {value}");
            }
        }
    })
}

/// Accepts either a 32-byte topic hash or an event signature to hash.
fn parse_topic(topic: &str) -> Result<B256, Box<dyn std::error::Error>> {
    if topic.starts_with("0x") {
        return Ok(topic.parse::<B256>()?);
    }
    if !topic.contains('(') {
        return Err(format!("not an event signature or topic hash: {topic}").into());
    }
    Ok(logs::event_signature(topic))
}
