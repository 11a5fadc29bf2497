//! `ethkit code` — print deployed bytecode.

use alloy::primitives::{Address, Bytes};
use serde::Serialize;

use super::{CmdResult, Context};

#[derive(Serialize)]
struct CodeReport {
    address: Address,
    block: Option<u64>,
    code: Bytes,
}

/// Run the `code` subcommand.
pub async fn run(ctx: &Context, address: Address, block: Option<u64>) -> CmdResult {
    let code = ctx.adapter()?.code_at(address, block).await?;
    if code.is_empty() {
        tracing::warn!(%address, "no code at address (externally owned account?)");
    }

    let report = CodeReport {
        address,
        block,
        code,
    };
    ctx.emit(&report, |r| println!("{}", r.code))
}
