// Copyright 2023 Alexandru Vasile
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

//! Base58 encoding with the Bitcoin alphabet.
//!
//! The bytes are interpreted as a big-endian unsigned integer. Every leading zero
//! byte is rendered as one leading `'1'`, such that the length of the input
//! survives the conversion.

/// The Base58 alphabet. Excludes `0`, `O`, `I` and `l`.
pub const ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Error returned when a string is not valid Base58.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The character is not part of the Base58 alphabet.
    #[error("Invalid Base58 character {character:?} at index {index}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the input.
        index: usize,
    },
    /// The input contains a non-ASCII character.
    #[error("Non-ASCII character at index {index}")]
    NonAsciiCharacter {
        /// Byte offset of the character in the input.
        index: usize,
    },
    /// Any other failure reported by the decoder.
    #[error("Invalid Base58 string: {0}")]
    Other(String),
}

impl From<bs58::decode::Error> for DecodeError {
    fn from(err: bs58::decode::Error) -> Self {
        match err {
            bs58::decode::Error::InvalidCharacter { character, index } => {
                Self::InvalidCharacter { character, index }
            }
            bs58::decode::Error::NonAsciiCharacter { index } => Self::NonAsciiCharacter { index },
            err => Self::Other(err.to_string()),
        }
    }
}

/// Encode the bytes as Base58. The empty input encodes to the empty string.
pub fn encode(data: &[u8]) -> String {
    bs58::encode(data).into_string()
}

/// Decode a Base58 string, restoring one zero byte for every leading `'1'`.
pub fn decode(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    Ok(bs58::decode(encoded).into_vec()?)
}
