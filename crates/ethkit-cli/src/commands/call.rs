//! `ethkit call` and `ethkit owner` — raw JSON-RPC requests.

use alloy::primitives::Address;
use ethkit_evm::rpc;
use serde_json::Value;

use super::{CmdResult, Context};

/// Run the `call` subcommand.
pub async fn run(ctx: &Context, method: String, params: Option<String>) -> CmdResult {
    let params = parse_params(params.as_deref())?;
    let adapter = ctx.adapter()?;
    let result = rpc::call_raw(&adapter, &method, params).await?;

    // Raw results are JSON either way.
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// Run the `owner` subcommand.
pub async fn owner(ctx: &Context, contract: Address) -> CmdResult {
    let adapter = ctx.adapter()?;
    let owner = rpc::contract_owner(&adapter, contract).await?;
    ctx.emit(&owner, |o| println!("{o}"))
}

fn parse_params(params: Option<&str>) -> Result<Value, Box<dyn std::error::Error>> {
    let value = match params {
        Some(raw) => serde_json::from_str(raw)?,
        None => Value::Array(Vec::new()),
    };
    if !value.is_array() {
        return Err("--params must be a JSON array".into());
    }
    Ok(value)
}
