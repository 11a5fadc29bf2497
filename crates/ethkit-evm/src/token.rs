//! ERC-20 token reads: balances and metadata.

use alloy::primitives::{Address, U256};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::abi::IERC20;
use crate::adapter::{EvmAdapter, Result};

/// Information about an ERC-20 token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    /// Token name (e.g., "Golem Network").
    pub name: String,
    /// Token symbol (e.g., "GNT").
    pub symbol: String,
    /// Number of decimals.
    pub decimals: u8,
}

/// A token balance held by one owner, with the token's metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenHolding {
    pub token: Address,
    pub owner: Address,
    pub info: TokenInfo,
    /// Balance in base units.
    pub raw_balance: U256,
    /// Balance scaled by `10^decimals`.
    pub balance: Decimal,
}

/// Queries the ERC-20 token balance for an owner address.
pub async fn balance_of(adapter: &EvmAdapter, token: Address, owner: Address) -> Result<U256> {
    adapter.call(token, &IERC20::balanceOfCall { owner }).await
}

/// Queries the total supply of a token.
pub async fn total_supply(adapter: &EvmAdapter, token: Address) -> Result<U256> {
    adapter.call(token, &IERC20::totalSupplyCall {}).await
}

/// Gets ERC-20 token metadata (name, symbol, decimals).
pub async fn token_info(adapter: &EvmAdapter, token: Address) -> Result<TokenInfo> {
    let name = adapter.call(token, &IERC20::nameCall {}).await?;
    let symbol = adapter.call(token, &IERC20::symbolCall {}).await?;
    let decimals = adapter.call(token, &IERC20::decimalsCall {}).await?;

    Ok(TokenInfo {
        name,
        symbol,
        decimals,
    })
}

/// Reads an owner's balance together with the token metadata and
/// converts it to a human-readable amount.
pub async fn token_holding(
    adapter: &EvmAdapter,
    token: Address,
    owner: Address,
) -> Result<TokenHolding> {
    let info = token_info(adapter, token).await?;
    let raw_balance = balance_of(adapter, token, owner).await?;
    let balance = ethkit_core::units::to_decimal(raw_balance, info.decimals)?;
    debug!(%token, %owner, symbol = %info.symbol, %balance, "read token balance");

    Ok(TokenHolding {
        token,
        owner,
        info,
        raw_balance,
        balance,
    })
}
