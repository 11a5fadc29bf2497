//! Address helpers.
//!
//! Validation of hex addresses (including EIP-55 checksums), zero-address
//! detection, and address derivation from secp256k1 public keys.

use alloy::primitives::{keccak256, Address};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use thiserror::Error;

/// Errors from address derivation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("invalid public key length: {0} (expected 33, 64 or 65 bytes)")]
    InvalidPublicKeyLength(usize),
    #[error("invalid public key: not a point on secp256k1")]
    InvalidPublicKey,
}

/// Reports whether `s` is a well-formed `0x`-prefixed 20-byte hex address.
///
/// All-lowercase and all-uppercase bodies carry no checksum and are accepted
/// as long as they are 40 hex chars. Mixed-case bodies must match EIP-55.
pub fn is_valid_address(s: &str) -> bool {
    let Some(body) = s.strip_prefix("0x") else {
        return false;
    };
    if body.len() != 40 || !body.bytes().all(|b| b.is_ascii_hexdigit()) {
        return false;
    }

    let has_lower = body.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = body.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        Address::parse_checksummed(s, None).is_ok()
    } else {
        true
    }
}

/// Something that may be interpreted as an EVM address.
pub trait AddressLike {
    /// Returns the parsed address, or `None` if the value is not an address.
    fn as_address(&self) -> Option<Address>;
}

impl AddressLike for Address {
    fn as_address(&self) -> Option<Address> {
        Some(*self)
    }
}

impl AddressLike for str {
    fn as_address(&self) -> Option<Address> {
        self.trim().parse().ok()
    }
}

impl AddressLike for String {
    fn as_address(&self) -> Option<Address> {
        self.as_str().as_address()
    }
}

impl<T: AddressLike + ?Sized> AddressLike for &T {
    fn as_address(&self) -> Option<Address> {
        (**self).as_address()
    }
}

/// Returns true if `addr` is the all-zero address.
///
/// Strings that do not parse as an address are never the zero address.
pub fn is_zero_address<A: AddressLike + ?Sized>(addr: &A) -> bool {
    addr.as_address().is_some_and(|a| a == Address::ZERO)
}

/// Formats an address in EIP-55 mixed-case checksum form.
pub fn to_checksum(addr: &Address) -> String {
    addr.to_checksum(None)
}

/// Derives the Ethereum address for a secp256k1 public key.
///
/// Accepts SEC1 uncompressed (65 bytes, `0x04` prefix), raw uncompressed
/// (64 bytes, no prefix) or SEC1 compressed (33 bytes) encodings.
pub fn public_key_to_address(public_key: &[u8]) -> Result<Address, AddressError> {
    let mut raw = [0u8; 64];
    match public_key.len() {
        64 => raw.copy_from_slice(public_key),
        65 => {
            if public_key[0] != 0x04 {
                return Err(AddressError::InvalidPublicKey);
            }
            raw.copy_from_slice(&public_key[1..]);
        }
        33 => {
            let key = k256::PublicKey::from_sec1_bytes(public_key)
                .map_err(|_| AddressError::InvalidPublicKey)?;
            raw.copy_from_slice(&key.to_encoded_point(false).as_bytes()[1..]);
        }
        n => return Err(AddressError::InvalidPublicKeyLength(n)),
    }

    Ok(raw_public_key_to_address(&raw))
}

/// Address of a raw uncompressed public key (`x || y`, no `0x04` prefix).
pub fn raw_public_key_to_address(public_key: &[u8; 64]) -> Address {
    let hash = keccak256(public_key);
    Address::from_slice(&hash[12..])
}

/// Interprets the right-most 20 bytes of an ABI word as an address.
///
/// Inputs shorter than 20 bytes are left-padded with zeros.
pub fn address_from_word(word: &[u8]) -> Address {
    if word.len() >= 20 {
        Address::from_slice(&word[word.len() - 20..])
    } else {
        let mut buf = [0u8; 20];
        buf[20 - word.len()..].copy_from_slice(word);
        Address::from(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // secp256k1 generator point, i.e. the public key of private key 1.
    const G_UNCOMPRESSED: &str = "0479be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8";
    const G_COMPRESSED: &str = "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";
    const G_ADDRESS: &str = "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf";

    #[test]
    fn valid_checksummed_address() {
        assert!(is_valid_address("0x5b579DEbCD8f1cE2d5BA30Db13E72234Cb3D8664"));
        assert!(is_valid_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"));
    }

    #[test]
    fn valid_single_case_address() {
        assert!(is_valid_address("0x5b579debcd8f1ce2d5ba30db13e72234cb3d8664"));
        assert!(is_valid_address("0x5B579DEBCD8F1CE2D5BA30DB13E72234CB3D8664"));
        assert!(is_valid_address("0x0000000000000000000000000000000000000000"));
    }

    #[test]
    fn bad_checksum_rejected() {
        assert!(!is_valid_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAeD"));
        assert!(!is_valid_address("0x5B579DEbCD8f1cE2d5BA30Db13E72234Cb3D8664"));
    }

    #[test]
    fn malformed_rejected() {
        assert!(!is_valid_address("0xabc"));
        assert!(!is_valid_address(""));
        assert!(!is_valid_address("5b579DEbCD8f1cE2d5BA30Db13E72234Cb3D8664"));
        assert!(!is_valid_address("0x5b579DEbCD8f1cE2d5BA30Db13E72234Cb3D866400"));
        assert!(!is_valid_address("0xZZ579DEbCD8f1cE2d5BA30Db13E72234Cb3D8664"));
    }

    #[test]
    fn zero_address_detection() {
        let valid: Address = "0x5b579DEbCD8f1cE2d5BA30Db13E72234Cb3D8664".parse().unwrap();
        assert!(!is_zero_address(&valid));
        assert!(is_zero_address(&Address::ZERO));

        assert!(!is_zero_address("0x5b579DEbCD8f1cE2d5BA30Db13E72234Cb3D8664"));
        assert!(is_zero_address("0x0000000000000000000000000000000000000000"));
        assert!(is_zero_address(&Address::ZERO.to_string()));
        assert!(!is_zero_address("not an address"));
    }

    #[test]
    fn public_key_to_address_all_encodings() {
        let uncompressed = hex::decode(G_UNCOMPRESSED).unwrap();
        let compressed = hex::decode(G_COMPRESSED).unwrap();
        let expected: Address = G_ADDRESS.parse().unwrap();

        assert_eq!(public_key_to_address(&uncompressed).unwrap(), expected);
        assert_eq!(public_key_to_address(&uncompressed[1..]).unwrap(), expected);
        assert_eq!(public_key_to_address(&compressed).unwrap(), expected);
        assert_eq!(to_checksum(&expected), G_ADDRESS);
    }

    #[test]
    fn public_key_to_address_bad_input() {
        assert_eq!(
            public_key_to_address(&[0u8; 20]),
            Err(AddressError::InvalidPublicKeyLength(20))
        );
        let mut bad_prefix = hex::decode(G_UNCOMPRESSED).unwrap();
        bad_prefix[0] = 0x05;
        assert_eq!(
            public_key_to_address(&bad_prefix),
            Err(AddressError::InvalidPublicKey)
        );
        // x coordinate above the field prime
        let mut off_curve = [0xffu8; 33];
        off_curve[0] = 0x02;
        assert_eq!(
            public_key_to_address(&off_curve),
            Err(AddressError::InvalidPublicKey)
        );
    }

    #[test]
    fn address_from_abi_word() {
        let mut word = [0u8; 32];
        word[12..].copy_from_slice(&[0xab; 20]);
        assert_eq!(address_from_word(&word), Address::from([0xab; 20]));
        assert_eq!(address_from_word(&[0x01]), Address::with_last_byte(1));
    }
}
