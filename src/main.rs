use anyhow::Context;
use clap::Parser;
use custody_ledger::run::run;
use std::fs::File;
use std::path::PathBuf;

/// Replay a CSV of custody operations and report the final balances.
#[derive(Parser)]
#[command(name = "custody-ledger", version)]
struct Args {
    /// CSV file holding the operations to replay, oldest first.
    input: PathBuf,

    /// Where to write the final balances; stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let input =
        File::open(&args.input).with_context(|| format!("cannot open {}", args.input.display()))?;

    match args.output {
        Some(path) => {
            let output =
                File::create(&path).with_context(|| format!("cannot create {}", path.display()))?;
            run(input, output)
        }
        None => run(input, std::io::stdout().lock()),
    }
}
