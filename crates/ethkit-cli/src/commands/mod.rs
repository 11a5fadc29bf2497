//! CLI subcommand implementations.

use std::path::PathBuf;

use ethkit_core::config::Config;
use ethkit_evm::EvmAdapter;
use serde::Serialize;

pub mod block;
pub mod call;
pub mod chain;
pub mod code;
pub mod erc20;
pub mod keystore;
pub mod logs;
pub mod sign;
pub mod util;

/// Environment variable consulted before prompting for a password.
pub(crate) const PASSWORD_ENV: &str = "ETHKIT_PASSWORD";

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Global flags shared by every subcommand.
pub struct Context {
    config_path: Option<PathBuf>,
    rpc_url: Option<String>,
    pub json: bool,
}

impl Context {
    pub fn new(config_path: Option<PathBuf>, rpc_url: Option<String>, json: bool) -> Self {
        Self {
            config_path,
            rpc_url,
            json,
        }
    }

    /// Loads the config file and applies the `--rpc-url` override.
    pub fn config(&self) -> Result<Config, Box<dyn std::error::Error>> {
        let mut config = Config::load(self.config_path.as_deref())?;
        if let Some(url) = &self.rpc_url {
            config.rpc_url = url.clone();
        }
        Ok(config)
    }

    pub fn adapter(&self) -> Result<EvmAdapter, Box<dyn std::error::Error>> {
        let config = self.config()?;
        tracing::debug!(rpc_url = %config.rpc_url, "connecting");
        Ok(EvmAdapter::new(&config.rpc_url)?)
    }

    /// Prints `value` as pretty JSON when `--json` is set, otherwise runs `human`.
    pub fn emit<T: Serialize>(&self, value: &T, human: impl FnOnce(&T)) -> CmdResult {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            human(value);
        }
        Ok(())
    }
}

/// Reads a password from `ETHKIT_PASSWORD`, or prompts on the terminal.
pub(crate) fn read_password(prompt: &str) -> Result<String, Box<dyn std::error::Error>> {
    if let Ok(password) = std::env::var(PASSWORD_ENV) {
        return Ok(password);
    }
    eprint!("{prompt}");
    Ok(rpassword::read_password()?)
}

/// Prompts twice and checks that both entries match.
pub(crate) fn read_new_password(prompt: &str) -> Result<String, Box<dyn std::error::Error>> {
    if let Ok(password) = std::env::var(PASSWORD_ENV) {
        return Ok(password);
    }
    eprint!("{prompt}");
    let password = rpassword::read_password()?;
    eprint!("Repeat password: ");
    let confirm = rpassword::read_password()?;
    if password != confirm {
        return Err("passwords do not match".into());
    }
    if password.is_empty() {
        return Err("password must not be empty".into());
    }
    Ok(password)
}
