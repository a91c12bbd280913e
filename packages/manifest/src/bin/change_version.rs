// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Standalone binary to set the integration manifest version from a release tag.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;
use manifest_version::{MANIFEST_PATH, update_manifest};

/// Set the `version` field of the integration manifest
#[derive(Debug, Parser)]
#[command(name = "change_version", version)]
struct Args {
    /// New version, written verbatim
    #[arg(value_name = "VERSION")]
    new_version: String,

    /// Manifest to update
    #[arg(short, long, default_value = MANIFEST_PATH)]
    manifest: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let args = Args::parse();
    let update = update_manifest(&args.manifest, &args.new_version).context(format!(
        "Failed to update version in {}",
        args.manifest.display()
    ))?;

    match update.previous {
        Some(previous) => info!(
            "{}: version {previous} -> {:?}",
            args.manifest.display(),
            update.current
        ),
        None => info!(
            "{}: version set to {:?}",
            args.manifest.display(),
            update.current
        ),
    }

    Ok(())
}
