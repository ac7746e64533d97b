// Copyright 2023 Alexandru Vasile
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

//! SS58 addresses: `base58(prefix || public key || checksum)`.
//!
//! The prefix encodes the address format of the network in one byte for
//! formats below 64, or two bytes otherwise. The checksum is made of the
//! first two bytes of the Blake2b-512 hash of `SS58PRE || prefix || public key`.

use super::{base58, AddressError};

/// Length of the public key carried by the address.
pub const PUBLIC_KEY_LEN: usize = 32;
/// Length of the checksum appended to the payload.
pub const CHECKSUM_LEN: usize = 2;

pub fn ss58hash(data: &[u8]) -> Vec<u8> {
    use blake2::{Blake2b512, Digest};
    const PREFIX: &[u8] = b"SS58PRE";

    let mut ctx = Blake2b512::new();
    ctx.update(PREFIX);
    ctx.update(data);
    ctx.finalize().to_vec()
}

/// Encode the address format as the SS58 prefix.
fn encode_prefix(version: u16) -> Vec<u8> {
    // We mask out the upper two bits of the ident - SS58 Prefix currently only supports 14-bits
    let ident: u16 = version & 0b0011_1111_1111_1111;
    match ident {
        0..=63 => vec![ident as u8],
        _ => {
            // Bit 6 marks the two-byte form, the value follows in little-endian order.
            let ident = ident | 0b0100_0000;
            vec![(ident & 0xFF) as u8, (ident >> 8) as u8]
        }
    }
}

pub fn to_ss58(key: &[u8; PUBLIC_KEY_LEN], version: u16) -> String {
    let mut v = encode_prefix(version);
    v.extend(key);
    let r = ss58hash(&v);
    v.extend(&r[0..CHECKSUM_LEN]);
    base58::encode(&v)
}

/// Decode the SS58 address into the raw 32-byte public key.
///
/// The checksum is verified. The address format is discarded and not checked
/// against any network.
pub fn from_ss58(address: &str) -> Result<[u8; PUBLIC_KEY_LEN], AddressError> {
    let data = base58::decode(address)?;

    let Some(&first) = data.first() else {
        return Err(AddressError::MalformedAddress {
            len: 0,
            expected: 1 + PUBLIC_KEY_LEN + CHECKSUM_LEN,
        });
    };
    let prefix_len = if first < 64 { 1 } else { 2 };

    let expected = prefix_len + PUBLIC_KEY_LEN + CHECKSUM_LEN;
    if data.len() != expected {
        return Err(AddressError::MalformedAddress {
            len: data.len(),
            expected,
        });
    }

    let (body, checksum) = data.split_at(prefix_len + PUBLIC_KEY_LEN);
    let hash = ss58hash(body);
    if checksum != &hash[0..CHECKSUM_LEN] {
        return Err(AddressError::ChecksumMismatch);
    }

    let mut key = [0u8; PUBLIC_KEY_LEN];
    key.copy_from_slice(&body[prefix_len..]);
    Ok(key)
}

/// Decode the SS58 address into the `0x`-prefixed hex form of its public key.
pub fn ss58_to_pub32(address: &str) -> Result<String, AddressError> {
    let key = from_ss58(address)?;
    Ok(format!("0x{}", hex::encode(key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: [u8; 32] = [
        0xd4, 0x35, 0x93, 0xc7, 0x15, 0xfd, 0xd3, 0x1c, 0x61, 0x14, 0x1a, 0xbd, 0x04, 0xa9, 0x9f,
        0xd6, 0x82, 0x2c, 0x85, 0x58, 0x85, 0x4c, 0xcd, 0xe3, 0x9a, 0x56, 0x84, 0xe7, 0xa5, 0x6d,
        0xa2, 0x7d,
    ];

    #[test]
    fn known_addresses() {
        assert_eq!(
            to_ss58(&ALICE, 42),
            "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY"
        );
        assert_eq!(
            to_ss58(&ALICE, 0),
            "15oF4uVJwmo4TdGW7VfQxNLavjCXviqxT9S1MgbjMNHr6Sp5"
        );
        assert_eq!(
            to_ss58(&ALICE, 2),
            "HNZata7iMYWmk5RvZRTiAsSDhV8366zq2YGb3tLH5Upf74F"
        );
    }

    #[test]
    fn decode_known_addresses() {
        for address in [
            "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY",
            "15oF4uVJwmo4TdGW7VfQxNLavjCXviqxT9S1MgbjMNHr6Sp5",
            "HNZata7iMYWmk5RvZRTiAsSDhV8366zq2YGb3tLH5Upf74F",
        ] {
            assert_eq!(from_ss58(address).unwrap(), ALICE);
        }
    }

    #[test]
    fn pub32_hex() {
        assert_eq!(
            ss58_to_pub32("5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY").unwrap(),
            "0xd43593c715fdd31c61141abd04a99fd6822c8558854ccde39a5684e7a56da27d"
        );
    }

    #[test]
    fn prefix_layout() {
        assert_eq!(encode_prefix(0), vec![0]);
        assert_eq!(encode_prefix(63), vec![63]);
        assert_eq!(encode_prefix(64), vec![64, 0]);
        assert_eq!(encode_prefix(0x1234), vec![0x74, 0x12]);
        // Upper two bits are not part of the format.
        assert_eq!(encode_prefix(0xC000 | 42), vec![42]);
    }

    #[test]
    fn two_byte_formats_decode() {
        for version in [64u16, 255, 1000, 16_383] {
            let address = to_ss58(&ALICE, version);
            assert_eq!(from_ss58(&address).unwrap(), ALICE);
        }
    }

    #[test]
    fn checksum_mismatch() {
        let mut raw = base58::decode("5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY").unwrap();
        let last = raw.len() - 1;
        raw[last] ^= 0x01;
        let tampered = base58::encode(&raw);
        assert!(matches!(
            from_ss58(&tampered),
            Err(AddressError::ChecksumMismatch)
        ));
    }

    #[test]
    fn tampered_key_fails_checksum() {
        let mut raw = base58::decode("5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY").unwrap();
        raw[5] ^= 0x80;
        assert!(matches!(
            from_ss58(&base58::encode(&raw)),
            Err(AddressError::ChecksumMismatch)
        ));
    }

    #[test]
    fn short_input_is_malformed() {
        assert!(matches!(
            from_ss58(""),
            Err(AddressError::MalformedAddress { len: 0, .. })
        ));
        assert!(matches!(
            from_ss58("5Grwva"),
            Err(AddressError::MalformedAddress { .. })
        ));
    }

    #[test]
    fn trailing_bytes_are_malformed() {
        let mut raw = base58::decode("5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY").unwrap();
        raw.push(0);
        assert!(matches!(
            from_ss58(&base58::encode(&raw)),
            Err(AddressError::MalformedAddress { len: 36, expected: 35 })
        ));
    }

    #[test]
    fn invalid_base58() {
        assert!(matches!(
            from_ss58("5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKut0Y"),
            Err(AddressError::Decode(_))
        ));
    }
}
