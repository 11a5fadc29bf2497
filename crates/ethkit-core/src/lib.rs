//! # ethkit-core
//!
//! Pure helpers shared by the ethkit crates and the YAML configuration.
//!
//! - [`address`] — address validation, checksums, zero-address checks, public key derivation
//! - [`units`] — wei <-> decimal conversion
//! - [`gas`] — gas cost arithmetic
//! - [`signature`] — splitting 65-byte signatures into R, S, V
//! - [`config`] — `config.yaml` loading

pub mod address;
pub mod config;
pub mod gas;
pub mod signature;
pub mod units;

pub use address::{is_valid_address, is_zero_address, public_key_to_address};
pub use gas::calc_gas_cost;
pub use signature::{sig_rsv, split_signature, RsvSignature};
pub use units::{format_units, parse_units, to_decimal, to_wei};
