// Copyright 2023 Alexandru Vasile
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

use crate::utils::to_hex_prefixed;
use serde::Serialize;
use std::error::Error;
use subvote::{
    stake::{aggregate, source::BtcliBuilder, split_stakes, AggregatedStake},
    util::ss58,
};

/// A single row of the stake table.
#[derive(Debug, Serialize)]
struct StakeRow {
    /// The `bytes32` key of the hotkey.
    hotkey: String,
    /// SS58 address of the hotkey.
    hotkey_ss58: String,
    /// Summed stake in TAO.
    amount_tao: f64,
    /// Summed stake in rao, as a decimal string.
    amount_rao: String,
}

/// The JSON document printed with `--json`.
#[derive(Debug, Serialize)]
struct StakeReport<'a> {
    coldkey: &'a str,
    network: &'a str,
    netuid: u16,
    stakes: Vec<StakeRow>,
    /// Parallel arrays of the contract call.
    hotkeys: Vec<String>,
    amounts: Vec<String>,
}

fn report<'a>(
    coldkey: &'a str,
    network: &'a str,
    netuid: u16,
    stakes: &[AggregatedStake],
) -> StakeReport<'a> {
    let (hotkeys, amounts) = split_stakes(stakes);

    StakeReport {
        coldkey,
        network,
        netuid,
        stakes: stakes
            .iter()
            .map(|stake| StakeRow {
                hotkey: to_hex_prefixed(stake.hotkey),
                hotkey_ss58: stake.hotkey_ss58.clone(),
                amount_tao: stake.amount,
                amount_rao: stake.amount_rao().to_string(),
            })
            .collect(),
        hotkeys: hotkeys.iter().map(to_hex_prefixed).collect(),
        amounts: amounts.iter().map(|amount| amount.to_string()).collect(),
    }
}

/// Entry function called from the CLI.
pub fn list_stakes(
    coldkey: String,
    netuid: u16,
    network: String,
    btcli: String,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    // Fail before spawning the tool if the coldkey is not a valid address.
    ss58::from_ss58(&coldkey).map_err(|err| format!("Invalid coldkey {}: {}", coldkey, err))?;

    let source = BtcliBuilder::new().program(btcli).build();
    let stakes = aggregate(&source, &coldkey, netuid, &network)?;
    let report = report(&coldkey, &network, netuid, &stakes);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if report.stakes.is_empty() {
        println!("No stake found on netuid {}", netuid);
        return Ok(());
    }

    for row in &report.stakes {
        println!(
            "hotkey={} ss58={} tao={} rao={}",
            row.hotkey, row.hotkey_ss58, row.amount_tao, row.amount_rao
        );
    }
    println!(
        "\n  Found {} hotkeys with stake on netuid {}",
        report.stakes.len(),
        netuid
    );

    Ok(())
}
