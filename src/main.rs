use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use resistor_combo::{build_catalog_and_candidates, find_nearest, parse_target, DEFAULT_MATCHES};

#[derive(Parser)]
#[command(name = "rcombo")]
#[command(version, about = "Find resistor pairs that approximate a target resistance")]
struct Cli {
    /// Desired resistance in ohms (e.g. 1000, 4.7k, 4k7). Prompted for when omitted.
    target: Option<String>,

    /// Number of matches to print
    #[arg(short = 'k', long = "count", default_value_t = DEFAULT_MATCHES)]
    count: usize,

    /// Print values in engineering notation
    #[arg(long)]
    si: bool,
}

fn prompt() -> Result<String> {
    print!("Enter the desired resistor (ohm): ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read target from stdin")?;
    Ok(line)
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    let input = match cli.target {
        Some(target) => target,
        None => prompt()?,
    };
    let target = parse_target(&input)?;

    let candidates = build_catalog_and_candidates().context("Failed to build candidate set")?;
    let matches = find_nearest(&candidates, target, cli.count)?;

    if cli.si {
        print!("{:#}", matches);
    } else {
        print!("{}", matches);
    }
    Ok(())
}
