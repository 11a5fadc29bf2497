//! `ethkit sign` — sign a message using EIP-191 personal sign.

use alloy::primitives::Address;
use ethkit_signer::{Keystore, LocalSigner, Signer};
use serde::Serialize;

use super::{read_password, CmdResult, Context};

#[derive(Serialize)]
struct SignatureReport {
    address: Address,
    signature: String,
    r: String,
    s: String,
    v: u8,
}

/// Run the `sign` subcommand.
pub fn run(ctx: &Context, message: String, address: Option<Address>) -> CmdResult {
    let dir = ctx.config()?.keystore_dir;

    let path = match address {
        Some(address) => Keystore::find(&dir, address)?
            .ok_or_else(|| format!("no keystore for {address} in {}", dir.display()))?,
        None => Keystore::list(&dir)?
            .into_iter()
            .next()
            .map(|(_, path)| path)
            .ok_or_else(|| format!("no keystore files in {}", dir.display()))?,
    };

    let password = read_password("Enter keystore password: ")?;
    let signer = LocalSigner::new(Keystore::unlock(&path, &password)?);
    let sig = signer.sign_message(message.as_bytes())?;

    let report = SignatureReport {
        address: signer.address(),
        signature: format!("0x{}", hex::encode(sig.to_bytes())),
        r: format!("0x{}", hex::encode(sig.r)),
        s: format!("0x{}", hex::encode(sig.s)),
        v: sig.v,
    };

    ctx.emit(&report, |r| {
        println!("✅ Message signed!");
        println!("   Signature: {}", r.signature);
        println!("   Address:   {}", r.address);
    })
}
