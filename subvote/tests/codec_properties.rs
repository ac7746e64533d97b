//! Property tests for the Base58 and SS58 codecs.

use proptest::prelude::*;
use subvote::util::{base58, evm, ss58, AddressError};

proptest! {
    /// Base58 round-trips any byte sequence, leading zeros included.
    #[test]
    fn prop_base58_roundtrip(
        zeros in 0usize..8,
        tail in proptest::collection::vec(any::<u8>(), 0..64)
    ) {
        let mut data = vec![0u8; zeros];
        data.extend(tail);

        let encoded = base58::encode(&data);
        prop_assert_eq!(base58::decode(&encoded).unwrap(), data);
    }

    /// One leading '1' per leading zero byte.
    #[test]
    fn prop_base58_leading_ones(zeros in 0usize..32) {
        let data = vec![0u8; zeros];
        let encoded = base58::encode(&data);

        prop_assert_eq!(encoded.len(), zeros);
        prop_assert!(encoded.chars().all(|c| c == '1'));
    }

    /// SS58 decode returns the encoded key for every 14-bit format.
    #[test]
    fn prop_ss58_roundtrip(
        key in any::<[u8; 32]>(),
        version in 0u16..16_384
    ) {
        let address = ss58::to_ss58(&key, version);
        prop_assert_eq!(ss58::from_ss58(&address).unwrap(), key);
    }

    /// Flipping any bit of the checksum is detected.
    #[test]
    fn prop_checksum_bit_flip(
        key in any::<[u8; 32]>(),
        version in 0u16..16_384,
        bit in 0usize..16
    ) {
        let address = ss58::to_ss58(&key, version);
        let mut raw = base58::decode(&address).unwrap();

        let checksum_start = raw.len() - ss58::CHECKSUM_LEN;
        raw[checksum_start + bit / 8] ^= 1u8 << (bit % 8);

        let tampered = base58::encode(&raw);
        let decoded = ss58::from_ss58(&tampered);
        prop_assert!(
            matches!(decoded, Err(AddressError::ChecksumMismatch)),
            "unexpected decode result {:?}",
            decoded
        );
    }

    /// Characters outside the alphabet are rejected wherever they appear.
    #[test]
    fn prop_excluded_characters(
        prefix in "[1-9A-HJ-NP-Za-km-z]{0,20}",
        bad in prop::sample::select(vec!['0', 'O', 'I', 'l']),
        suffix in "[1-9A-HJ-NP-Za-km-z]{0,20}"
    ) {
        let encoded = format!("{}{}{}", prefix, bad, suffix);
        let decoded = base58::decode(&encoded);
        prop_assert!(
            matches!(decoded, Err(base58::DecodeError::InvalidCharacter { .. })),
            "unexpected decode result {:?} for {}",
            decoded,
            encoded
        );
    }

    /// The derived account depends only on the EVM address.
    #[test]
    fn prop_derive_deterministic(address in any::<[u8; 20]>()) {
        prop_assert_eq!(evm::derive(&address), evm::derive(&address));

        let text = format!("0x{}", hex::encode(address));
        prop_assert_eq!(evm::parse_h160(&text).unwrap(), address);
    }
}

#[test]
fn derive_distinct_vectors() {
    let vectors = [
        "0x0000000000000000000000000000000000000000",
        "0x0000000000000000000000000000000000000001",
        "0x7a250d5630B4cF539739dF2C5dAcb4c659F2488D",
        "0xFFfFfFffFFfffFFfFFfFFFFFffFFFffffFfFFFfF",
    ];

    let derived: Vec<_> = vectors
        .iter()
        .map(|address| evm::derive(&evm::parse_h160(address).unwrap()))
        .collect();

    for (i, first) in derived.iter().enumerate() {
        for second in &derived[i + 1..] {
            assert_ne!(first, second);
        }
    }
}
