// Copyright 2023 Alexandru Vasile
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

use crate::utils::{parse_address_format, to_hex_prefixed};
use std::error::Error;
use subvote::util::{evm, ss58};

/// Print the SS58 address derived from the EVM address.
pub fn h160_to_ss58(address: String, address_format: String) -> Result<(), Box<dyn Error>> {
    let version = parse_address_format(&address_format)?;
    let h160 = evm::parse_h160(&address)?;
    let account = evm::derive(&h160);

    tracing::info!("EVM address {} with format {}", address, version);

    println!("SS58:   {}", ss58::to_ss58(&account, version));
    println!("Pub32:  {}", to_hex_prefixed(account));
    Ok(())
}

/// Print the 32-byte public key of the SS58 address.
pub fn ss58_to_pub32(address: String) -> Result<(), Box<dyn Error>> {
    println!("{}", ss58::ss58_to_pub32(&address)?);
    Ok(())
}

/// Print the EVM address left-padded to a `bytes32` key.
pub fn evm_key(address: String) -> Result<(), Box<dyn Error>> {
    println!("{}", to_hex_prefixed(evm::left_pad_bytes32(&address)?));
    Ok(())
}
