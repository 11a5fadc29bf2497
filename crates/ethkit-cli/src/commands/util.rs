//! `ethkit util` — offline helpers. None of these touch the network.

use alloy::primitives::{Address, U256};
use clap::Subcommand;
use ethkit_core::address::to_checksum;
use ethkit_core::gas::TRANSFER_GAS;
use ethkit_core::{
    calc_gas_cost, is_valid_address, is_zero_address, public_key_to_address, sig_rsv,
    to_decimal, to_wei,
};
use rust_decimal::Decimal;
use serde::Serialize;

use super::{CmdResult, Context};

#[derive(Subcommand)]
pub enum UtilCommand {
    /// Check an address string (format, EIP-55 checksum, zero address).
    Validate { address: String },

    /// Convert a decimal amount to base units.
    ToWei {
        amount: Decimal,
        #[arg(long, default_value_t = 18)]
        decimals: u8,
    },

    /// Convert base units to a decimal amount.
    FromWei {
        wei: U256,
        #[arg(long, default_value_t = 18)]
        decimals: u8,
    },

    /// Total fee of a transaction: gas limit times gas price (wei).
    GasCost {
        #[arg(long, default_value_t = TRANSFER_GAS)]
        gas_limit: u64,
        #[arg(long)]
        gas_price: U256,
    },

    /// Split a 65-byte hex signature into R, S and V.
    SplitSig { signature: String },

    /// Derive the address of a hex-encoded secp256k1 public key.
    PubkeyAddress { public_key: String },
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct ValidateReport {
    input: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    checksum: Option<String>,
    zero: bool,
}

#[derive(Serialize)]
struct GasCostReport {
    gas_limit: u64,
    gas_price: U256,
    wei: U256,
    /// `None` when the cost does not fit a `Decimal`.
    ether: Option<Decimal>,
}

#[derive(Serialize)]
struct RsvReport {
    r: String,
    s: String,
    v: u8,
}

/// Run a `util` subcommand.
pub fn run(ctx: &Context, command: UtilCommand) -> CmdResult {
    match command {
        UtilCommand::Validate { address } => {
            let report = validate(&address);
            ctx.emit(&report, |r| {
                println!("valid:    {}", r.valid);
                if let Some(checksum) = &r.checksum {
                    println!("checksum: {checksum}");
                }
                println!("zero:     {}", r.zero);
            })
        }
        UtilCommand::ToWei { amount, decimals } => {
            let wei = to_wei(amount, decimals)?;
            ctx.emit(&wei, |w| println!("{w}"))
        }
        UtilCommand::FromWei { wei, decimals } => {
            let amount = to_decimal(wei, decimals)?;
            ctx.emit(&amount, |a| println!("{a}"))
        }
        UtilCommand::GasCost {
            gas_limit,
            gas_price,
        } => {
            let report = gas_cost(gas_limit, gas_price).ok_or("gas cost overflows uint256")?;
            ctx.emit(&report, |r| match r.ether {
                Some(ether) => println!("{} wei ({ether} ETH)", r.wei),
                None => println!("{} wei", r.wei),
            })
        }
        UtilCommand::SplitSig { signature } => {
            let sig = sig_rsv(&signature)?;
            let report = RsvReport {
                r: format!("0x{}", hex::encode(sig.r)),
                s: format!("0x{}", hex::encode(sig.s)),
                v: sig.v,
            };
            ctx.emit(&report, |r| {
                println!("r: {}", r.r);
                println!("s: {}", r.s);
                println!("v: {}", r.v);
            })
        }
        UtilCommand::PubkeyAddress { public_key } => {
            let trimmed = public_key.trim();
            let bytes = hex::decode(trimmed.strip_prefix("0x").unwrap_or(trimmed))?;
            let address: Address = public_key_to_address(&bytes)?;
            ctx.emit(&address, |a| println!("{a}"))
        }
    }
}

fn gas_cost(gas_limit: u64, gas_price: U256) -> Option<GasCostReport> {
    let wei = calc_gas_cost(gas_limit, gas_price)?;
    Some(GasCostReport {
        gas_limit,
        gas_price,
        wei,
        ether: to_decimal(wei, 18).ok(),
    })
}

fn validate(input: &str) -> ValidateReport {
    let valid = is_valid_address(input);
    let checksum = valid
        .then(|| input.parse::<Address>().ok())
        .flatten()
        .map(|a| to_checksum(&a));

    ValidateReport {
        input: input.to_string(),
        valid,
        checksum,
        zero: is_zero_address(input),
    }
}
