//! Gas cost arithmetic.

use alloy::primitives::U256;

/// Gas used by a plain value transfer.
pub const TRANSFER_GAS: u64 = 21_000;

/// Total fee in wei for a transaction: `gas_price * gas_limit`.
///
/// Returns `None` if the product overflows 256 bits.
pub fn calc_gas_cost(gas_limit: u64, gas_price: U256) -> Option<U256> {
    gas_price.checked_mul(U256::from(gas_limit))
}
