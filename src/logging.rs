// SPDX-License-Identifier: MPL-2.0
//! `tracing` subscriber setup for the demo binary.

use crate::error::{Error, Result};
use tracing_subscriber::EnvFilter;

/// Builds the log filter.
///
/// `RUST_LOG` wins when it is set and valid; otherwise `level` is used as a
/// filter directive (e.g. `info` or `iced_notice=debug`).
pub fn filter(level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    Ok(EnvFilter::try_new(level)?)
}

/// Installs a global `fmt` subscriber.
///
/// Fails when `level` is not a valid directive or a subscriber is already
/// installed.
pub fn init(level: &str) -> Result<()> {
    let filter = filter(level)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| Error::Logging(err.to_string()))?;
    Ok(())
}
