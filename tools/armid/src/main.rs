//! armid - ARM resource ID tool
//!
//! Parses, re-cases and validates resource IDs using the typed ID crates.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;

use commands::Cli;
use config::{Config, LogFormat};

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Prefer RUST_LOG, fall back to ARMID_LOG_LEVEL. Logs go to stderr so
    // stdout stays machine-readable.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_level.clone().into());
    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }

    arm_resourceids::commonids::register();
    arm_network::register_resource_ids();

    Cli::parse().run()
}
