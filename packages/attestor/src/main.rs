//! ACDM Bridge attestor CLI
//!
//! Reads `swap_initiated` events (a JSON array of cosmwasm `Event`s) from
//! stdin, attests every relevant swap and prints one `redeem` message per
//! line. Transaction ids are assigned sequentially from `first_tx_id`.

use std::io::Read;

use attestor::{Attestor, AttestorConfig, RedeemMsg};
use clap::Parser;
use cosmwasm_std::Event;
use eyre::{Result, WrapErr};

#[derive(Parser, Debug)]
#[command(name = "acdm-attestor")]
#[command(about = "Attests ACDM Bridge swaps read from stdin", long_about = None)]
struct Args {
    /// Transaction id assigned to the first attested swap
    first_tx_id: u64,

    /// Redeem to this address instead of the swap sender
    recipient: Option<String>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_logging();

    let args = Args::parse();

    let config = AttestorConfig::load()?;
    tracing::debug!(?config, "Configuration loaded");
    let attestor = Attestor::new(&config)?;

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .wrap_err("Failed to read events from stdin")?;

    for line in redeem_lines(&attestor, &input, args.first_tx_id, args.recipient.as_deref())? {
        println!("{}", line);
    }

    Ok(())
}

/// Attest every relevant swap in `input` and render one redeem message per swap
fn redeem_lines(
    attestor: &Attestor,
    input: &str,
    first_tx_id: u64,
    recipient: Option<&str>,
) -> Result<Vec<String>> {
    let events: Vec<Event> = serde_json::from_str(input).wrap_err("Invalid events JSON")?;

    let records = attestor.observe(&events);
    tracing::info!(count = records.len(), "Swap records observed");

    (first_tx_id..)
        .zip(records.iter())
        .map(|(tx_id, record)| {
            let request = match recipient {
                Some(recipient) => attestor.attest_to(record, recipient, tx_id)?,
                None => attestor.attest(record, tx_id)?,
            };
            serde_json::to_string(&RedeemMsg::Redeem(request))
                .wrap_err("Failed to serialize redeem message")
        })
        .collect()
}

/// Initialize tracing/logging with structured output on stderr
fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,attestor=debug"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
