//! Encrypted keystore management.
//!
//! Creates, imports, unlocks, and lists Ethereum-compatible V3 keystore files
//! using the `eth-keystore` crate for scrypt/aes-128-ctr encryption.
//! Files are named the way geth names them: `UTC--<timestamp>--<address>`.

use std::path::{Path, PathBuf};

use alloy::primitives::Address;
use chrono::{DateTime, Utc};
use ethkit_core::address::raw_public_key_to_address;
use k256::ecdsa::SigningKey;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

/// Errors arising from keystore operations.
#[derive(Debug, Error)]
pub enum KeystoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("keystore crypto error: {0}")]
    Crypto(#[from] eth_keystore::KeystoreError),

    #[error("invalid private key")]
    InvalidKey,

    #[error("account already exists: {0}")]
    AlreadyExists(Address),
}

pub type Result<T> = std::result::Result<T, KeystoreError>;

/// The only field read from a key file without decrypting it.
#[derive(Deserialize)]
struct KeyFileHeader {
    address: String,
}

/// Encrypted key files in a directory.
///
/// All operations are stateless: the directory is passed in each call.
pub struct Keystore;

impl Keystore {
    /// Generates a random key and stores it encrypted under `password`.
    pub fn create(dir: &Path, password: &str) -> Result<(Address, PathBuf)> {
        let key = SigningKey::random(&mut rand::thread_rng());
        Self::create_from_key(dir, password, &key.to_bytes())
    }

    /// Stores `private_key` encrypted under `password`.
    ///
    /// Returns the account address and the path of the new file.
    pub fn create_from_key(
        dir: &Path,
        password: &str,
        private_key: &[u8],
    ) -> Result<(Address, PathBuf)> {
        let key = SigningKey::from_slice(private_key).map_err(|_| KeystoreError::InvalidKey)?;
        let address = signing_key_address(&key);

        std::fs::create_dir_all(dir)?;
        let name = key_file_name(&address, Utc::now());
        // encrypt_key returns the key's UUID, not the file name
        eth_keystore::encrypt_key(
            dir,
            &mut rand::thread_rng(),
            private_key,
            password,
            Some(&name),
        )?;

        let path = dir.join(&name);
        info!(%address, path = %path.display(), "created keystore");
        Ok((address, path))
    }

    /// Copies the account in `source` into `dir`, re-encrypted under `new_password`.
    ///
    /// `source` itself is not modified.
    pub fn import(
        dir: &Path,
        source: &Path,
        password: &str,
        new_password: &str,
    ) -> Result<(Address, PathBuf)> {
        let key = Self::unlock(source, password)?;
        let address = signing_key_address(&key);
        if Self::find(dir, address)?.is_some() {
            return Err(KeystoreError::AlreadyExists(address));
        }

        debug!(%address, source = %source.display(), "importing keystore");
        Self::create_from_key(dir, new_password, &key.to_bytes())
    }

    /// Decrypts the key file at `path`.
    pub fn unlock(path: &Path, password: &str) -> Result<SigningKey> {
        let secret = eth_keystore::decrypt_key(path, password)?;
        SigningKey::from_slice(&secret).map_err(|_| KeystoreError::InvalidKey)
    }

    /// Every key file in `dir` as `(address, path)`, oldest first.
    ///
    /// A missing directory is empty. Files without a readable `address`
    /// field are ignored.
    pub fn list(dir: &Path) -> Result<Vec<(Address, PathBuf)>> {
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut accounts = std::fs::read_dir(dir)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<Vec<_>>>()?
            .into_iter()
            .filter(|path| path.is_file())
            .filter_map(|path| read_address(&path).map(|address| (address, path)))
            .collect::<Vec<_>>();

        // file names start with a UTC timestamp
        accounts.sort_by(|a, b| a.1.cmp(&b.1));
        Ok(accounts)
    }

    /// The key file holding `address`, if any.
    pub fn find(dir: &Path, address: Address) -> Result<Option<PathBuf>> {
        let found = Self::list(dir)?
            .into_iter()
            .find_map(|(a, path)| (a == address).then_some(path));
        Ok(found)
    }
}

/// Address of the public key belonging to `key`.
pub fn signing_key_address(key: &SigningKey) -> Address {
    let point = key.verifying_key().to_encoded_point(false);
    let mut raw = [0u8; 64];
    // skip the 0x04 SEC1 tag
    raw.copy_from_slice(&point.as_bytes()[1..]);
    raw_public_key_to_address(&raw)
}

/// `UTC--2018-05-25T01-27-05.123456789Z--<address>`, as geth names key files.
fn key_file_name(address: &Address, now: DateTime<Utc>) -> String {
    format!(
        "UTC--{}--{}",
        now.format("%Y-%m-%dT%H-%M-%S%.9fZ"),
        hex::encode(address)
    )
}

fn read_address(path: &Path) -> Option<Address> {
    let raw = std::fs::read(path).ok()?;
    let header: KeyFileHeader = serde_json::from_slice(&raw).ok()?;
    let hex_part = header.address.trim_start_matches("0x");
    if hex_part.len() != 40 {
        return None;
    }
    hex_part.parse().ok()
}
