//! `ethkit keystore` — create, import and list encrypted keys.

use std::path::PathBuf;

use alloy::primitives::Address;
use clap::Subcommand;
use ethkit_signer::Keystore;
use serde::Serialize;

use super::{read_new_password, read_password, CmdResult, Context};

#[derive(Subcommand)]
pub enum KeystoreCommand {
    /// Generate a new random key.
    New,

    /// Import an existing V3 keystore file.
    Import {
        /// Keystore JSON file to import.
        #[arg(long)]
        file: PathBuf,

        /// Remove the source file after a successful import.
        #[arg(long)]
        delete: bool,
    },

    /// List the accounts in the keystore directory.
    List,
}

#[derive(Serialize)]
struct AccountEntry {
    address: Address,
    path: PathBuf,
}

/// Run a `keystore` subcommand.
pub fn run(ctx: &Context, command: KeystoreCommand) -> CmdResult {
    let dir = ctx.config()?.keystore_dir;

    match command {
        KeystoreCommand::New => {
            let password = read_new_password("New keystore password: ")?;
            let (address, path) = Keystore::create(&dir, &password)?;
            ctx.emit(&AccountEntry { address, path }, |a| {
                println!("✅ Created account {}", a.address);
                println!("   Keystore: {}", a.path.display());
            })
        }
        KeystoreCommand::Import { file, delete } => {
            let password = read_password("Password of the file to import: ")?;
            let new_password = read_new_password("New keystore password: ")?;
            let (address, path) = Keystore::import(&dir, &file, &password, &new_password)?;
            if delete {
                std::fs::remove_file(&file)?;
                tracing::info!(file = %file.display(), "removed imported source file");
            }
            ctx.emit(&AccountEntry { address, path }, |a| {
                println!("✅ Imported account {}", a.address);
                println!("   Keystore: {}", a.path.display());
            })
        }
        KeystoreCommand::List => {
            let accounts: Vec<AccountEntry> = Keystore::list(&dir)?
                .into_iter()
                .map(|(address, path)| AccountEntry { address, path })
                .collect();
            ctx.emit(&accounts, |accounts| {
                if accounts.is_empty() {
                    println!("No accounts in {}", dir.display());
                }
                for (i, a) in accounts.iter().enumerate() {
                    println!("#{i} {} {}", a.address, a.path.display());
                }
            })
        }
    }
}
