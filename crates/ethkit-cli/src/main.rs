//! # ethkit CLI
//!
//! Entry point for the `ethkit` binary.
//!
//! Subcommands:
//! - `ethkit block`    — latest header or a block by number
//! - `ethkit code`     — deployed bytecode of a contract
//! - `ethkit erc20`    — token metadata and an owner's balance
//! - `ethkit logs`     — events emitted by a transaction
//! - `ethkit keystore` — create, import and list encrypted keys
//! - `ethkit util`     — offline helpers (addresses, units, gas, signatures)

use std::path::PathBuf;

use alloy::primitives::{Address, B256};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

/// ethkit — read-only Ethereum JSON-RPC toolkit with a local keystore.
#[derive(Parser)]
#[command(name = "ethkit", version, about)]
struct Cli {
    /// Path to config.yaml (default: ~/.ethkit/config.yaml).
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// JSON-RPC endpoint, overrides the config file.
    #[arg(long, env = "ETHKIT_RPC_URL", global = true)]
    rpc_url: Option<String>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the latest block, or the block at `--number`.
    Block {
        #[arg(long)]
        number: Option<u64>,
    },

    /// Print the chain id reported by the node.
    ChainId,

    /// Show the ETH balance of an address.
    Balance {
        #[arg(long)]
        address: Address,
    },

    /// Print the bytecode deployed at an address.
    Code {
        #[arg(long)]
        address: Address,

        /// Block number (default: latest).
        #[arg(long)]
        block: Option<u64>,
    },

    /// Read ERC-20 metadata and the balance of `--owner`.
    Erc20 {
        #[arg(long)]
        token: Address,

        #[arg(long)]
        owner: Address,
    },

    /// Inspect the logs of a mined transaction.
    ///
    /// Without `--topic`, ERC-20 transfers are decoded.
    Logs {
        #[arg(long)]
        tx: B256,

        /// Event signature (e.g. "Transfer(address,address,uint256)") or topic hash.
        #[arg(long)]
        topic: Option<String>,

        /// Indexed topic to print as a uint256 (topic 0 is the signature).
        #[arg(long)]
        index: Option<usize>,
    },

    /// Read `owner()` from a contract with a hand-built eth_call.
    Owner {
        #[arg(long)]
        contract: Address,
    },

    /// Send an arbitrary JSON-RPC request.
    Call {
        #[arg(long)]
        method: String,

        /// JSON array of params (default: []).
        #[arg(long)]
        params: Option<String>,
    },

    /// Manage encrypted keystore files.
    Keystore {
        #[command(subcommand)]
        command: commands::keystore::KeystoreCommand,
    },

    /// Sign a message (EIP-191) with a keystore key.
    Sign {
        #[arg(long)]
        message: String,

        /// Account to sign with (default: first keystore file).
        #[arg(long)]
        address: Option<Address>,
    },

    /// Offline helpers.
    Util {
        #[command(subcommand)]
        command: commands::util::UtilCommand,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let ctx = commands::Context::new(cli.config, cli.rpc_url, cli.json);

    let result = match cli.command {
        Commands::Block { number } => commands::block::run(&ctx, number).await,
        Commands::ChainId => commands::chain::chain_id(&ctx).await,
        Commands::Balance { address } => commands::chain::balance(&ctx, address).await,
        Commands::Code { address, block } => commands::code::run(&ctx, address, block).await,
        Commands::Erc20 { token, owner } => commands::erc20::run(&ctx, token, owner).await,
        Commands::Logs { tx, topic, index } => commands::logs::run(&ctx, tx, topic, index).await,
        Commands::Owner { contract } => commands::call::owner(&ctx, contract).await,
        Commands::Call { method, params } => commands::call::run(&ctx, method, params).await,
        Commands::Keystore { command } => commands::keystore::run(&ctx, command),
        Commands::Sign { message, address } => commands::sign::run(&ctx, message, address),
        Commands::Util { command } => commands::util::run(&ctx, command),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
