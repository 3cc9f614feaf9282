use ansi_term::Style;
use basic::lang::Error;
use basic::mach::{raise_interrupt, Runtime};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

/// Run a BASIC program.
#[derive(Parser, Debug)]
#[command(name = "basic", version)]
struct Args {
    /// Program file to load and run
    file: PathBuf,

    /// Seed for RND instead of the clock
    #[arg(long)]
    seed: Option<u64>,
}

pub fn main() {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("BASIC_LOG").unwrap_or_else(|_| EnvFilter::new("off")),
        )
        .with_writer(io::stderr)
        .init();

    let source = match File::open(&args.file) {
        Ok(file) => BufReader::new(file),
        Err(error) => {
            let msg = format!("?{}: {}", args.file.display(), error);
            eprintln!("{}", Style::new().bold().paint(msg));
            process::exit(2);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut runtime = Runtime::new(stdin.lock(), stdout.lock());
    if let Some(seed) = args.seed {
        runtime.set_seed(seed);
    }

    // A second CTRL-C while the first is still pending means the run is
    // blocked reading INPUT and will not reach a line boundary.
    let interrupted = runtime.interrupt_handle();
    if let Err(error) = ctrlc::set_handler(move || {
        if raise_interrupt(&interrupted) {
            eprintln!("{}", Style::new().bold().paint("?BREAK"));
            process::exit(1);
        }
    }) {
        tracing::warn!(%error, "no CTRL-C handler");
    }

    if let Err(error) = runtime.load(source) {
        report(&error);
        process::exit(1);
    }
    tracing::debug!(file = %args.file.display(), "loaded");
    if let Err(error) = runtime.run() {
        report(&error);
        process::exit(1);
    }
}

fn report(error: &Error) {
    eprintln!("{}", Style::new().bold().paint(format!("?{}", error)));
    if let Some(source) = error.source() {
        eprintln!("{}", source);
    }
}
