// Copyright 2023 Alexandru Vasile
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

//! Map EVM (H160) addresses onto substrate accounts.
//!
//! The substrate account of an EVM address is the Blake2b-256 hash of
//! `evm: || address`. The mapping is one-way: the EVM address cannot be
//! recovered from the account.

use blake2::{digest::consts::U32, Blake2b, Digest};

use super::{ss58, strip_hex_prefix, AddressError};

/// Length of an EVM address in bytes.
pub const H160_LEN: usize = 20;

/// Domain separation tag hashed in front of the EVM address.
const EVM_TAG: &[u8] = b"evm:";

type Blake2b256 = Blake2b<U32>;

/// Parse a hex EVM address, with or without the `0x` prefix.
pub fn parse_h160(address: &str) -> Result<[u8; H160_LEN], AddressError> {
    let address = strip_hex_prefix(address.trim());
    if address.len() != H160_LEN * 2 {
        return Err(AddressError::InvalidAddressLength {
            len: address.len(),
            expected: H160_LEN * 2,
        });
    }

    let mut bytes = [0u8; H160_LEN];
    hex::decode_to_slice(address, &mut bytes)?;
    Ok(bytes)
}

/// Derive the 32-byte substrate account of the EVM address.
pub fn derive(address: &[u8; H160_LEN]) -> [u8; ss58::PUBLIC_KEY_LEN] {
    let mut ctx = Blake2b256::new();
    ctx.update(EVM_TAG);
    ctx.update(address);

    let mut account = [0u8; ss58::PUBLIC_KEY_LEN];
    account.copy_from_slice(&ctx.finalize());
    account
}

/// Derive the substrate account of a hex EVM address and encode it as SS58.
///
/// This is the coldkey that mirrors a contract deployed at the EVM address.
pub fn h160_to_ss58(address: &str, version: u16) -> Result<String, AddressError> {
    let address = parse_h160(address)?;
    Ok(ss58::to_ss58(&derive(&address), version))
}

/// Interpret a hex string as a big-endian value left-padded to 32 bytes.
///
/// An EVM address used as a `bytes32` key is padded this way.
pub fn left_pad_bytes32(value: &str) -> Result<[u8; 32], AddressError> {
    let value = strip_hex_prefix(value.trim());
    if value.len() > 64 {
        return Err(AddressError::InvalidAddressLength {
            len: value.len(),
            expected: 64,
        });
    }

    let padded = format!("{:0>64}", value);
    let mut bytes = [0u8; 32];
    hex::decode_to_slice(padded, &mut bytes)?;
    Ok(bytes)
}
