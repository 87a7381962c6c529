//! ksort CLI - sort Kubernetes manifest files in a proper order by Kind

use clap::Parser;
use ksort_core::{extract_all, sort_by_kind};
use std::io::{self, Write};
use std::path::PathBuf;

mod config;
mod error;
mod exit_codes;
mod logging;
mod output;
mod sources;

use config::Config;
use error::{CliError, Result};

const KSORT_LONG: &str = "\
When installing manifests, they should be sorted in a proper order by Kind.
For example, Namespace object must be in the first place when installing them.

ksort sorts manifest files in a proper order by Kind, following the install
order used by Helm.";

const KSORT_EXAMPLE: &str = "\
Examples:
  # Sort manifest files in the deploy directory, and output the result to the stdout.
  ksort ./deploy

  # To pass the result into the stdin of kubectl apply command is also convenient.
  ksort ./deploy | kubectl apply -f -

  # Sort a multi-document stream read from stdin.
  cat all.yaml | ksort -";

#[derive(Parser)]
#[command(name = "ksort")]
#[command(version)]
#[command(about = "Sort manifest files in a proper order by Kind", long_about = KSORT_LONG)]
#[command(after_help = KSORT_EXAMPLE)]
struct Cli {
    /// Manifest file or directory to sort (`-` reads stdin)
    filename: PathBuf,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Enable debug output
    #[arg(long, env = "KSORT_DEBUG")]
    debug: bool,
}

fn main() {
    miette::set_panic_hook();

    let cli = Cli::parse();

    if cli.debug {
        // SAFETY: We're the only thread at this point (start of main)
        unsafe { std::env::set_var("RUST_BACKTRACE", "1") };
    }

    let config = Config::new(&cli.filename, cli.verbose, cli.debug);
    logging::init(config.verbosity);

    if let Err(err) = run(&config) {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn run(config: &Config) -> Result<()> {
    let sources = sources::collect(&config.input)?;

    let records = extract_all(&sources);
    for record in &records {
        tracing::debug!("Found {} in {:?}", record.kind, record.source);
    }
    tracing::info!("Found {} objects in total", records.len());

    let sorted = sort_by_kind(records);
    write_stdout(&output::render(&sorted))?;

    if config.verbosity > 0 {
        eprintln!("{}", output::summary(&sorted, sources.len()));
    }

    Ok(())
}

/// Write to stdout; a closed pipe (e.g. `ksort dir | head`) is not an error
fn write_stdout(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    match stdout.write_all(text.as_bytes()).and_then(|()| stdout.flush()) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(e) => Err(CliError::Output {
            message: e.to_string(),
        }),
    }
}
