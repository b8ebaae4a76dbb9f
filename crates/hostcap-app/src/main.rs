// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Hostcap desktop host for the capability channel.
//
// Entry point. Initialises logging, reads host facts, registers the
// dispatcher on its channel, then answers one JSON request envelope per
// stdin line with one reply envelope per stdout line. Logs go to stderr.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use hostcap_bridge::{Dispatcher, Messenger, host_provider, register_with};
use hostcap_core::config::BridgeConfig;
use hostcap_core::error::Result;

/// Command-line options.
#[derive(Debug, Parser)]
#[command(name = "hostcap", version, about = "Answer capability queries on a named channel")]
struct Cli {
    /// JSON bridge config; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Channel to address (overrides the config's channel_name).
    #[arg(long)]
    channel: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("hostcap: {e}");
            return ExitCode::from(1);
        }
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter)),
        )
        .init();

    tracing::info!(channel = %config.channel_name, "Hostcap starting");

    match serve(&config, io::stdin().lock(), io::stdout().lock()) {
        Ok(served) => {
            tracing::info!(served, "input closed, shutting down");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "host failed");
            ExitCode::from(1)
        }
    }
}

fn load_config(cli: &Cli) -> Result<BridgeConfig> {
    let mut config = match &cli.config {
        Some(path) => BridgeConfig::load(path)?,
        None => BridgeConfig::default(),
    };
    if let Some(channel) = &cli.channel {
        config.channel_name = channel.clone();
    }
    config.validate()?;
    Ok(config)
}

/// Register the bridge and answer requests until EOF. Returns the number of
/// requests answered.
///
/// Lines are passed on as raw bytes; a line that is not UTF-8 or not JSON
/// gets a `MalformedRequest` reply and the loop carries on.
fn serve(config: &BridgeConfig, input: impl BufRead, mut output: impl Write) -> Result<usize> {
    let provider = host_provider()?;
    tracing::info!(platform = %provider.platform_version(), "host facts read");

    let mut messenger = Messenger::new();
    register_with(&mut messenger, Dispatcher::new(provider), config)?;

    let mut served = 0;
    for line in input.split(b'\n') {
        let line = line?;
        let line = line.strip_suffix(b"\r").unwrap_or(&line);
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }
        let reply = messenger.send(&config.channel_name, line)?;
        output.write_all(&reply)?;
        output.write_all(b"\n")?;
        output.flush()?;
        served += 1;
    }
    Ok(served)
}
