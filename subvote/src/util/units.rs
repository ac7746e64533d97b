// Copyright 2023 Alexandru Vasile
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

//! TAO amounts and their on-chain representation in rao.

/// Number of rao in one TAO (9 decimals).
pub const RAO_PER_TAO: u128 = 1_000_000_000;

/// Convert a TAO amount to rao, truncating toward zero.
///
/// Negative and NaN amounts convert to zero.
pub fn tao_to_rao(amount: f64) -> u128 {
    // Float to int casts saturate, NaN maps to 0.
    (amount * RAO_PER_TAO as f64) as u128
}

/// Convert a rao amount to TAO.
pub fn rao_to_tao(amount: u128) -> f64 {
    amount as f64 / RAO_PER_TAO as f64
}
