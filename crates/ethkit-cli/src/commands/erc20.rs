//! `ethkit erc20` — token metadata and balance.

use alloy::primitives::{Address, U256};
use ethkit_evm::{token, TokenHolding};
use rust_decimal::Decimal;
use serde::Serialize;

use super::{CmdResult, Context};

#[derive(Serialize)]
struct Erc20Report {
    #[serde(flatten)]
    holding: TokenHolding,
    total_supply: U256,
    /// `None` when the supply does not fit a `Decimal`.
    total_supply_decimal: Option<Decimal>,
}

/// Run the `erc20` subcommand.
pub async fn run(ctx: &Context, token: Address, owner: Address) -> CmdResult {
    let adapter = ctx.adapter()?;
    let holding = token::token_holding(&adapter, token, owner).await?;
    let total_supply = token::total_supply(&adapter, token).await?;
    let total_supply_decimal = ethkit_core::to_decimal(total_supply, holding.info.decimals).ok();

    let report = Erc20Report {
        holding,
        total_supply,
        total_supply_decimal,
    };

    ctx.emit(&report, |r| {
        let h = &r.holding;
        println!("Name:         {}", h.info.name);
        println!("Symbol:       {}", h.info.symbol);
        println!("Decimals:     {}", h.info.decimals);
        match r.total_supply_decimal {
            Some(supply) => println!("Total supply: {supply} {}", h.info.symbol),
            None => println!("Total supply: {} (base units)", r.total_supply),
        }
        println!("Wei:          {}", h.raw_balance);
        println!("Balance:      {} {}", h.balance, h.info.symbol);
    })
}
