use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use nespak::{Algorithm, Codec, Report};
use tracing_subscriber::EnvFilter;

/// Pack and unpack binary data (NES nametables and the like).
#[derive(Debug, Parser)]
#[command(name = "nespak", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compress INPUT into OUTPUT
    Pack(Job),
    /// Expand INPUT into OUTPUT
    Unpack(Job),
}

#[derive(Debug, Args)]
struct Job {
    /// Compression algorithm (rle, lz78, huff)
    #[arg(short, long, env = "NESPAK_ALGORITHM", default_value = "rle")]
    algorithm: Algorithm,

    /// Input file path
    #[arg(short, long)]
    input: PathBuf,

    /// Output file path
    #[arg(short, long)]
    output: PathBuf,
}

impl Command {
    fn job(&self) -> &Job {
        match self {
            Command::Pack(job) | Command::Unpack(job) => job,
        }
    }

    fn verb(&self) -> &'static str {
        match self {
            Command::Pack(_) => "pack",
            Command::Unpack(_) => "unpack",
        }
    }
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Reads the input file, runs the codec and writes the output file.
fn run(command: &Command) -> anyhow::Result<Report> {
    let job = command.job();
    tracing::info!(
        algorithm = %job.algorithm,
        input = %job.input.display(),
        output = %job.output.display(),
        "Running {}",
        command.verb()
    );

    let input = fs::read(&job.input)
        .with_context(|| format!("Invalid input file `{}`", job.input.display()))?;

    let mut output = Vec::new();
    match command {
        Command::Pack(_) => job.algorithm.pack(&input, &mut output)?,
        Command::Unpack(_) => job.algorithm.unpack(&input, &mut output)?,
    }

    fs::write(&job.output, &output)
        .with_context(|| format!("Invalid output file `{}`", job.output.display()))?;

    Ok(Report::new(input.len(), output.len()))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging();

    match run(&cli.command) {
        Ok(report) => {
            tracing::info!(
                before = report.before,
                after = report.after,
                compression = %format!("{:.2}%", report.savings_percent()),
                "Status report"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
