// Copyright 2023 Alexandru Vasile
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

//! Aggregate the stakes of a coldkey per subnet.
//!
//! The stakes are listed by an external tool (see [`source::Btcli`]). The output
//! of the tool is parsed, the stakes of every hotkey on the requested subnet are
//! summed and the hotkeys are decoded into the 32-byte keys expected by the
//! voting contracts.
//!
//! The whole process is synchronous and blocks on the external tool.

pub mod payload;
pub mod source;

use crate::util::{ss58, units};
use payload::{extract_json, parse_stake_info};
use source::{StakeSource, ToolOutput};

/// Marker printed by the tool when the coldkey has no stake.
pub const NO_STAKE_MARKER: &str = "No stake found";

/// Errors produced while listing the stakes of a coldkey.
#[derive(Debug, thiserror::Error)]
pub enum StakeError {
    /// The stake listing program is not installed.
    #[error("`{program}` command not found. Please ensure Bittensor is installed.")]
    ToolMissing {
        /// The program that could not be found.
        program: String,
    },
    /// The stake listing program exited with an error.
    #[error("Error executing stake listing (status {status:?}): {stderr}")]
    ToolError {
        /// Exit code of the program, if any.
        status: Option<i32>,
        /// Standard error of the program.
        stderr: String,
    },
    /// The output of the program does not contain a valid stake listing.
    #[error("Failed to parse JSON from stake listing output: {0}")]
    MalformedOutput(String),
    /// I/O error while running the program.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The summed stake of a hotkey on one subnet.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedStake {
    /// Raw public key of the hotkey.
    pub hotkey: [u8; ss58::PUBLIC_KEY_LEN],
    /// SS58 address of the hotkey, as listed by the tool.
    pub hotkey_ss58: String,
    /// Summed stake in TAO.
    pub amount: f64,
}

impl AggregatedStake {
    /// The summed stake in rao.
    pub fn amount_rao(&self) -> u128 {
        units::tao_to_rao(self.amount)
    }
}

/// Split the stakes into the parallel `bytes32[]` / `uint256[]` arrays
/// taken by the contract calls.
pub fn split_stakes(stakes: &[AggregatedStake]) -> (Vec<[u8; 32]>, Vec<u128>) {
    stakes
        .iter()
        .map(|stake| (stake.hotkey, stake.amount_rao()))
        .unzip()
}

/// Returns true for sums strictly above zero. NaN is not positive.
fn is_positive(amount: f64) -> bool {
    !amount.is_nan() && amount > 0.0
}

/// List the stakes of the coldkey and sum them per hotkey on the subnet `netuid`.
///
/// Hotkeys are returned in the order they are listed by the tool. Hotkeys without
/// a strictly positive stake on the subnet are left out, as are hotkeys whose SS58
/// address cannot be decoded. An empty result means no stake was found.
pub fn aggregate<S: StakeSource + ?Sized>(
    source: &S,
    coldkey: &str,
    netuid: u16,
    network: &str,
) -> Result<Vec<AggregatedStake>, StakeError> {
    log::info!(
        "Fetching stakes coldkey={} network={} netuid={}",
        coldkey,
        network,
        netuid
    );

    let output = source.list_stakes(coldkey, network)?;
    aggregate_output(&output, netuid)
}

/// Interpret the captured output of a stake listing.
pub fn aggregate_output(
    output: &ToolOutput,
    netuid: u16,
) -> Result<Vec<AggregatedStake>, StakeError> {
    let raw = output.stdout.trim();

    if !output.success() {
        let stderr = output.stderr.trim();
        if raw.contains(NO_STAKE_MARKER) || stderr.contains(NO_STAKE_MARKER) {
            log::info!("No stake found (tool exited with {:?})", output.status);
            return Ok(Vec::new());
        }

        return Err(StakeError::ToolError {
            status: output.status,
            stderr: stderr.to_string(),
        });
    }

    if raw.is_empty() {
        log::info!("No stake data returned");
        return Ok(Vec::new());
    }

    let hotkeys = extract_json(raw)
        .and_then(parse_stake_info)
        .map_err(|err| {
            log::debug!("Raw stake listing output:\n{}", raw);
            err
        })?;

    let mut stakes = Vec::new();
    for stakes_of in hotkeys {
        let amount: f64 = stakes_of
            .records
            .iter()
            .filter(|record| record.netuid == netuid)
            .map(|record| record.amount)
            .sum();

        if !is_positive(amount) {
            continue;
        }

        let hotkey = match ss58::from_ss58(&stakes_of.hotkey) {
            Ok(hotkey) => hotkey,
            Err(err) => {
                log::warn!(
                    "Skipping hotkey {} due to conversion error: {}",
                    stakes_of.hotkey,
                    err
                );
                continue;
            }
        };

        log::debug!(
            "hotkey={} netuid={} stake={}",
            stakes_of.hotkey,
            netuid,
            amount
        );

        stakes.push(AggregatedStake {
            hotkey,
            hotkey_ss58: stakes_of.hotkey,
            amount,
        });
    }

    Ok(stakes)
}
