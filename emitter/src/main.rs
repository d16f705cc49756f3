use anyhow::Context;
use clap::Parser;
use log::debug;
use sigcore::emit::{Emitter, SteadyClock};
use sigcore::signal::ChannelBank;
use std::io;

/// The stream contract is fixed, so the parser exposes no options; it only
/// supplies `--help`/`--version` and rejects stray arguments.
#[derive(Parser)]
#[command(version, about = "Synthetic sample feed for a stdin grapher")]
struct Args {}

fn emit_forever() -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut emitter = Emitter::new(ChannelBank::standard(), SteadyClock::new(), stdout.lock());
    emitter.run().context("emitting sample batches")?;
    Ok(())
}

fn main() {
    env_logger::init();
    let _args = Args::parse();

    // Best-effort producer: a closed stdout ends the feed with a quiet
    // zero-status exit instead of breaking the consumer's pipeline.
    if let Err(err) = emit_forever() {
        debug!("feed stopped: {:#}", err);
    }
}
