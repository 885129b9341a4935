#![doc = include_str!("../README.md")]

mod config;
mod telemetry;
mod worker;

use clap::Parser;
use config::{CliArgs, UniqIdConfig};
use loadup_common_util::uniqueid::{DisabledHost, UniqueId};
use std::io::{BufWriter, Write};
use telemetry::init_telemetry;
use worker::generate_ids;

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = UniqIdConfig::try_from(args)?;

    init_telemetry()?;

    let builder = UniqueId::builder();
    let generator = if config.host_lookup {
        builder.build()
    } else {
        builder.host_resolver(DisabledHost).build()
    };
    log_startup_info(&generator, &config);

    let batches = generate_ids(&generator, config.count, config.threads, config.hash)?;

    let mut out = BufWriter::new(std::io::stdout().lock());
    for id in batches.iter().flatten() {
        writeln!(out, "{id}")?;
    }
    out.flush()?;
    Ok(())
}

fn log_startup_info(generator: &UniqueId, config: &UniqIdConfig) {
    if cfg!(debug_assertions) {
        tracing::info!(
            "Generating IDs with generator {:?} and full config: {:#?}",
            generator,
            config
        );
    } else {
        tracing::info!(
            host = generator.host_identifier(),
            count = config.count,
            threads = config.threads,
            "Generating IDs"
        );
    }
}
