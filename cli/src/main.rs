// Copyright 2023 Alexandru Vasile
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

mod commands;
mod utils;

use clap::Parser as ClapParser;
use commands::{
    address::{evm_key, h160_to_ss58, ss58_to_pub32},
    stakes::list_stakes,
};
use std::error::Error;

/// Command for interacting with the CLI.
#[derive(Debug, ClapParser)]
enum Command {
    H160ToSs58(H160ToSs58Opts),
    Ss58ToPub32(Ss58ToPub32Opts),
    EvmKey(EvmKeyOpts),
    Stakes(StakesOpts),
}

/// Derive the SS58 address that mirrors an EVM address.
///
/// This is the coldkey of a contract deployed at the EVM address.
#[derive(Debug, ClapParser)]
pub struct H160ToSs58Opts {
    /// Hex-encoded EVM address, with or without the `0x` prefix.
    ///
    /// For example, "0x7a250d5630B4cF539739dF2C5dAcb4c659F2488D"
    #[clap(long, short)]
    address: String,
    /// The address format of the chain, either the numeric prefix or the network name.
    ///
    /// For example:
    /// - "42" or "substrate" for Bittensor
    /// - "polkadot" for Polkadot
    /// - "kusama" for Kusama
    #[clap(long, short = 'f', default_value = "42")]
    address_format: String,
}

/// Decode an SS58 address into its 32-byte public key.
#[derive(Debug, ClapParser)]
pub struct Ss58ToPub32Opts {
    /// The SS58 address.
    address: String,
}

/// Left-pad an EVM address (or any hex value) to a `bytes32` key.
#[derive(Debug, ClapParser)]
pub struct EvmKeyOpts {
    /// Hex-encoded value of at most 32 bytes.
    address: String,
}

/// Sum the stakes of a coldkey on a subnet.
#[derive(Debug, ClapParser)]
pub struct StakesOpts {
    /// SS58 address of the coldkey.
    #[clap(long, short)]
    coldkey: String,
    /// The subnet to sum the stakes on.
    #[clap(long, short = 'u')]
    netuid: u16,
    /// The bittensor network name (ie "test", "finney", "local").
    #[clap(long, short, default_value = "test")]
    network: String,
    /// The `btcli` executable used to list the stakes.
    #[clap(long, default_value = "btcli")]
    btcli: String,
    /// Print the stakes as JSON.
    #[clap(long, short)]
    json: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Command::parse();
    match args {
        Command::H160ToSs58(opts) => h160_to_ss58(opts.address, opts.address_format),
        Command::Ss58ToPub32(opts) => ss58_to_pub32(opts.address),
        Command::EvmKey(opts) => evm_key(opts.address),
        Command::Stakes(opts) => list_stakes(
            opts.coldkey,
            opts.netuid,
            opts.network,
            opts.btcli,
            opts.json,
        ),
    }
}
