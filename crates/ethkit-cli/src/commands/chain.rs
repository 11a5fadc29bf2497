//! `ethkit chain-id` and `ethkit balance`.

use alloy::primitives::{Address, U256};
use rust_decimal::Decimal;
use serde::Serialize;

use super::{CmdResult, Context};

#[derive(Serialize)]
struct BalanceReport {
    address: Address,
    wei: U256,
    ether: Decimal,
}

/// Run the `chain-id` subcommand.
pub async fn chain_id(ctx: &Context) -> CmdResult {
    let id = ctx.adapter()?.get_chain_id().await?;
    ctx.emit(&id, |id| println!("{id}"))
}

/// Run the `balance` subcommand.
pub async fn balance(ctx: &Context, address: Address) -> CmdResult {
    let wei = ctx.adapter()?.get_eth_balance(address).await?;
    let report = BalanceReport {
        address,
        wei,
        ether: ethkit_core::to_decimal(wei, 18)?,
    };

    ctx.emit(&report, |r| {
        println!("Address: {}", r.address);
        println!("Balance: {} ETH ({} wei)", r.ether, r.wei);
    })
}
