// Copyright 2023 Alexandru Vasile
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

//! Parsing of the `btcli stake list --json-out` payload.
//!
//! The payload has the shape:
//!
//! ```json
//! {
//!   "stake_info": {
//!     "<hotkey ss58>": [{ "netuid": 1, "stake_value": 10.5 }, ...]
//!   }
//! }
//! ```
//!
//! `netuid` is printed either as a number or as a string depending on the
//! version of the tool.

use serde_json::{Map, Value};

use super::StakeError;

/// A single stake of a hotkey on a subnet.
#[derive(Debug, Clone, PartialEq)]
pub struct StakeRecord {
    /// SS58 address of the hotkey.
    pub hotkey: String,
    /// Subnet the stake belongs to.
    pub netuid: u16,
    /// Staked amount in TAO.
    pub amount: f64,
}

/// The stake records of one hotkey, in the order they were listed.
#[derive(Debug, Clone, PartialEq)]
pub struct HotkeyStakes {
    /// SS58 address of the hotkey.
    pub hotkey: String,
    /// Records that could be parsed.
    pub records: Vec<StakeRecord>,
}

/// Extract the JSON object from the tool output.
///
/// The tool may print log lines (ie "Update available") around the payload.
/// The object spans from the first `{` to the last `}`.
pub fn extract_json(raw: &str) -> Result<&str, StakeError> {
    let start = raw.find('{');
    let end = raw.rfind('}');

    match (start, end) {
        (Some(start), Some(end)) if start < end => Ok(&raw[start..=end]),
        _ => Err(StakeError::MalformedOutput(
            "No JSON object found in output".to_string(),
        )),
    }
}

/// Parse the subnet identifier, given either as an integer or as a string.
fn parse_netuid(value: &Value) -> Option<u16> {
    match value {
        Value::Number(number) => number.as_u64().and_then(|n| u16::try_from(n).ok()),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Parse a single stake entry of the hotkey.
fn parse_record(hotkey: &str, entry: &Value) -> Result<StakeRecord, String> {
    let Some(entry) = entry.as_object() else {
        return Err(format!("expected object, found {}", entry));
    };

    let netuid = match entry.get("netuid") {
        Some(value) => parse_netuid(value).ok_or_else(|| format!("invalid netuid {}", value))?,
        None => return Err("missing netuid".to_string()),
    };

    let amount = match entry.get("stake_value") {
        None => 0.0,
        Some(value) => value
            .as_f64()
            .ok_or_else(|| format!("invalid stake_value {}", value))?,
    };

    Ok(StakeRecord {
        hotkey: hotkey.to_string(),
        netuid,
        amount,
    })
}

/// Parse the stakes of every hotkey from the JSON payload.
///
/// Hotkeys are returned in the order of the payload. Entries that cannot be
/// parsed are skipped with a warning; only a payload that is not a JSON object
/// is an error. A missing, null or empty `stake_info` lists no stake.
///
/// Numbers outside the range of `f64` (ie `1e400`) are rejected by the JSON
/// parser, failing the whole listing with [`StakeError::MalformedOutput`].
pub fn parse_stake_info(json: &str) -> Result<Vec<HotkeyStakes>, StakeError> {
    let payload: Value = serde_json::from_str(json)
        .map_err(|err| StakeError::MalformedOutput(format!("Invalid JSON: {}", err)))?;

    let Value::Object(mut payload) = payload else {
        return Err(StakeError::MalformedOutput(
            "Expected a JSON object".to_string(),
        ));
    };

    let stake_map: Map<String, Value> = match payload.remove("stake_info") {
        None | Some(Value::Null) | Some(Value::Bool(false)) => return Ok(Vec::new()),
        Some(Value::Array(list)) if list.is_empty() => return Ok(Vec::new()),
        Some(Value::String(text)) if text.is_empty() => return Ok(Vec::new()),
        Some(Value::Object(map)) => map,
        Some(other) => {
            return Err(StakeError::MalformedOutput(format!(
                "Invalid `stake_info` format, expected object, found {}",
                other
            )))
        }
    };

    let mut hotkeys = Vec::with_capacity(stake_map.len());
    for (hotkey, entries) in stake_map {
        let entries = match entries {
            Value::Array(entries) => entries,
            other => {
                log::warn!(
                    "Skipping hotkey {}: expected a list of stakes, found {}",
                    hotkey,
                    other
                );
                continue;
            }
        };

        let records = entries
            .iter()
            .filter_map(|entry| match parse_record(&hotkey, entry) {
                Ok(record) => Some(record),
                Err(err) => {
                    log::warn!("Skipping stake entry of hotkey {}: {}", hotkey, err);
                    None
                }
            })
            .collect();

        hotkeys.push(HotkeyStakes { hotkey, records });
    }

    Ok(hotkeys)
}
