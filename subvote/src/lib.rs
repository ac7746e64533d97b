// Copyright 2023 Alexandru Vasile
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

//! Address codecs and stake aggregation for subnet voting contracts.
//!
//! The [`util`] module converts between EVM (H160) addresses, SS58 addresses and the
//! raw 32-byte keys that contracts take as `bytes32`. The [`stake`] module lists the
//! stakes of a coldkey through `btcli` and sums them per subnet.

pub mod stake;
pub mod util;

/// The SS58 address format used by the Bittensor networks.
pub const DEFAULT_SS58_FORMAT: u16 = 42;
