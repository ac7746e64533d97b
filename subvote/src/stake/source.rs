// Copyright 2023 Alexandru Vasile
// This file is dual-licensed as Apache-2.0 or GPL-3.0.
// see LICENSE for license details.

//! Sources of the raw stake listing.

use std::process::Command;

use super::StakeError;

/// The captured result of a stake listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    /// Exit code of the tool, `None` if it was terminated by a signal.
    pub status: Option<i32>,
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
}

impl ToolOutput {
    /// Returns true if the tool exited with code zero.
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Lists the stakes of a coldkey.
///
/// Implementations return the text produced by the listing. Interpreting it is
/// left to [`super::aggregate`].
pub trait StakeSource {
    /// List the stakes delegated by the coldkey on the given network.
    fn list_stakes(&self, coldkey: &str, network: &str) -> Result<ToolOutput, StakeError>;
}

/// Builder for [`Btcli`].
pub struct BtcliBuilder {
    program: String,
}

impl BtcliBuilder {
    /// Create a new [`BtcliBuilder`].
    pub fn new() -> BtcliBuilder {
        BtcliBuilder {
            program: "btcli".to_string(),
        }
    }

    /// Set the program to execute. Resolved against `PATH` unless it contains a
    /// path separator.
    ///
    /// Default: `btcli`.
    pub fn program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Build the [`Btcli`] source.
    pub fn build(self) -> Btcli {
        Btcli {
            program: self.program,
        }
    }
}

impl Default for BtcliBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Lists stakes by running `btcli stake list --json-out`.
///
/// The call blocks until the tool exits. No timeout is applied.
#[derive(Debug, Clone)]
pub struct Btcli {
    program: String,
}

impl Btcli {
    /// The program executed by this source.
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for Btcli {
    fn default() -> Self {
        BtcliBuilder::new().build()
    }
}

impl StakeSource for Btcli {
    fn list_stakes(&self, coldkey: &str, network: &str) -> Result<ToolOutput, StakeError> {
        log::debug!(
            "Running {} stake list network={} coldkey={}",
            self.program,
            network,
            coldkey
        );

        let output = Command::new(&self.program)
            .args(["stake", "list", "--network", network, "--ss58", coldkey, "--json-out"])
            .output()
            .map_err(|err| match err.kind() {
                std::io::ErrorKind::NotFound => StakeError::ToolMissing {
                    program: self.program.clone(),
                },
                _ => StakeError::Io(err),
            })?;

        Ok(ToolOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Returns the same output for every query.
///
/// Stands in for the external tool where it is not installed.
#[derive(Debug, Clone)]
pub struct CannedSource {
    output: ToolOutput,
}

impl CannedSource {
    /// A successful listing that printed `stdout`.
    pub fn stdout(stdout: impl Into<String>) -> Self {
        CannedSource {
            output: ToolOutput {
                status: Some(0),
                stdout: stdout.into(),
                stderr: String::new(),
            },
        }
    }

    /// A listing that exited with `status`.
    pub fn failure(status: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        CannedSource {
            output: ToolOutput {
                status: Some(status),
                stdout: stdout.into(),
                stderr: stderr.into(),
            },
        }
    }

    /// A listing with the given captured output.
    pub fn new(output: ToolOutput) -> Self {
        CannedSource { output }
    }
}

impl StakeSource for CannedSource {
    fn list_stakes(&self, _coldkey: &str, _network: &str) -> Result<ToolOutput, StakeError> {
        Ok(self.output.clone())
    }
}
