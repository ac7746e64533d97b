// Copyright 2023 Alexandru Vasile
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

pub mod base58;
pub mod evm;
pub mod ss58;
pub mod units;

/// Errors produced while parsing or decoding an address.
#[derive(Debug, thiserror::Error)]
pub enum AddressError {
    /// The Base58 text could not be decoded.
    #[error(transparent)]
    Decode(#[from] base58::DecodeError),
    /// The checksum of the SS58 address does not match its payload.
    #[error("Invalid SS58 checksum")]
    ChecksumMismatch,
    /// The decoded SS58 payload does not have the expected layout.
    #[error("Malformed SS58 address: decoded {len} bytes, expected {expected}")]
    MalformedAddress {
        /// Number of decoded bytes.
        len: usize,
        /// Number of bytes required by the prefix layout.
        expected: usize,
    },
    /// The hex address does not have the expected number of characters.
    #[error("Address must be {expected} hex chars, got {len}")]
    InvalidAddressLength {
        /// Number of hex characters provided, without the `0x` prefix.
        len: usize,
        /// Number of hex characters expected.
        expected: usize,
    },
    /// The address contains characters that are not hex digits.
    #[error(transparent)]
    InvalidHex(#[from] hex::FromHexError),
}

/// Strip an optional `0x` / `0X` prefix from a hex string.
pub(crate) fn strip_hex_prefix(value: &str) -> &str {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value)
}
