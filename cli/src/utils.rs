// Copyright 2023 Alexandru Vasile
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

use std::error::Error;

/// Resolve the SS58 address format from its numeric prefix or its network name.
///
/// For example, "42" and "substrate" resolve to the same format.
pub fn parse_address_format(address_format: &str) -> Result<u16, Box<dyn Error>> {
    if let Ok(version) = address_format.parse::<u16>() {
        if version > 0b0011_1111_1111_1111 {
            return Err(format!("Address format {} exceeds 14 bits", version).into());
        }
        return Ok(version);
    }

    let format_registry = ss58_registry::Ss58AddressFormatRegistry::try_from(address_format)
        .map_err(|err| format!("Cannot parse the provided address format: {:?}", err))?;
    let version: ss58_registry::Ss58AddressFormat = format_registry.into();
    let version = version.prefix();
    log::debug!(
        "Address format {:?} with version prefix {:?}",
        format_registry,
        version
    );

    Ok(version)
}

/// Hex encode the bytes with the `0x` prefix.
pub fn to_hex_prefixed(bytes: impl AsRef<[u8]>) -> String {
    format!("0x{}", hex::encode(bytes))
}
