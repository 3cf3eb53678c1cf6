//! Valmark batch submission client.
//!
//! Reads newline-delimited JSON request bundles from a file, optionally
//! pre-validates them, streams each bundle to the valuation server as a
//! single-item batch, and writes the responses to stdout and an output
//! file.
//!
//! # Usage
//!
//! ```bash
//! valmark 127.0.0.1:50051 bundles.ndjson
//! valmark 127.0.0.1:50051 bundles.ndjson --no-validate --output out.ndjson
//! ```

use std::fs;
use std::io::Write;

use anyhow::{bail, Context, Result};
use clap::Parser;
use futures::{SinkExt, StreamExt};
use tokio_tungstenite::{connect_async, tungstenite::Message};
use tracing::{error, info};

mod cli;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let content = fs::read_to_string(&cli.input)
        .with_context(|| format!("cannot read {}", cli.input.display()))?;
    let bundles: Vec<String> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(ToString::to_string)
        .collect();
    info!("loaded {} bundles from {}", bundles.len(), cli.input.display());

    if !cli.no_validate && !validate(&bundles) {
        bail!("no submission will be made due to invalid bundles");
    }

    stream(&cli, &bundles).await
}

/// Decodes every bundle up front; reports each failure and returns false
/// if any bundle is invalid.
fn validate(bundles: &[String]) -> bool {
    let mut valid = true;
    for (line, bundle) in bundles.iter().enumerate() {
        match valmark_engine::RequestBundle::decode(bundle) {
            Ok(decoded) => {
                info!(
                    "bundle {}: trade[{}] curve[{}] as of {}",
                    line + 1,
                    decoded.trade.tradeid,
                    decoded.curve.curvename,
                    decoded.calc_date
                );
            }
            Err(err) => {
                error!("bundle {} is invalid: {err}", line + 1);
                valid = false;
            }
        }
    }
    if valid {
        info!("all bundles are valid - proceeding with submission");
    }
    valid
}

/// Streams each bundle as a single-item batch and records the responses.
async fn stream(cli: &Cli, bundles: &[String]) -> Result<()> {
    let url = format!("ws://{}/ws", cli.server);
    let (mut ws, _) = connect_async(url.as_str())
        .await
        .with_context(|| format!("cannot connect to {url}"))?;
    info!("connected to {url}");

    let mut output = fs::File::create(&cli.output)
        .with_context(|| format!("cannot create {}", cli.output.display()))?;

    for bundle in bundles {
        let frame = serde_json::to_string(&[bundle])?;
        ws.send(Message::Text(frame.into())).await?;

        let reply = ws
            .next()
            .await
            .context("stream closed before a response arrived")??;
        let text = reply.into_text()?;
        let items: Vec<String> = serde_json::from_str(&text)
            .context("response frame is not a batch array")?;

        for item in items {
            println!("{item}");
            writeln!(output, "{item}")?;
        }
    }

    ws.close(None).await?;
    info!("wrote responses to {}", cli.output.display());
    Ok(())
}
