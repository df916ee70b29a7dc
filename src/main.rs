use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

mod commands;

/// Save the current clipboard to a file in the directory you are looking at.
///
/// Images are saved as PNG, Python-looking text as .py, rich text as .html,
/// and anything else as .md, each under the first free Clip-*-N name.
#[derive(Debug, Parser)]
#[command(name = "clipsave", version, about)]
struct Cli {
    /// Save into DIR instead of the front file manager window
    #[arg(long, value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Skip the desktop notification
    #[arg(long)]
    no_notify: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match commands::save::run(cli.dir.as_deref(), cli.no_notify) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
