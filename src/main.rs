use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use log::debug;

mod animals;
mod bubble;

/// Get a yak to say things on your behalf.
#[derive(Parser, Debug)]
#[command(name = "yaksay", version, about)]
struct Cli {
    /// Flatten the animal first
    #[arg(long)]
    roadkill: bool,

    /// Startle the animal instead (loses to --roadkill)
    #[arg(long)]
    triggered: bool,

    /// Think the message rather than say it
    #[arg(long)]
    imagine: bool,

    /// Which animal does the talking
    #[arg(long, default_value = "yak")]
    costume: String,

    /// The message; omit it for an empty bubble
    message: Option<String>,
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    debug!(
        "costume={:?} roadkill={} triggered={} imagine={}",
        cli.costume, cli.roadkill, cli.triggered, cli.imagine
    );

    let animal = animals::lookup(&cli.costume, cli.roadkill, cli.triggered);
    let drawing = bubble::say(cli.message.as_deref().unwrap_or(""), animal, cli.imagine);

    let mut stdout = io::stdout().lock();
    stdout.write_all(drawing.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
