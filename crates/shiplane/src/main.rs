mod error;
mod lane;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crate::error::CliError;
use crate::lane::LaneArg;

#[derive(Parser)]
#[command(name = "shiplane")]
#[command(version = env!("SHIPLANE_VERSION"))]
#[command(about = "Release lanes for iOS apps", long_about = None)]
struct Cli {
    /// Project root (default: current directory)
    #[arg(long = "path", short = 'C')]
    path: Option<PathBuf>,

    /// Configuration file (default: Shiplane.toml in the project root, if present)
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Log step internals
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Lane to run
    #[arg(value_enum)]
    lane: LaneArg,

    /// Lane options as key:value pairs
    #[arg(value_name = "KEY:VALUE")]
    options: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = resolve_project_root(cli.path).and_then(|root| {
        lane::run(&root, cli.config.as_deref(), cli.lane, &cli.options)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn resolve_project_root(path: Option<PathBuf>) -> Result<PathBuf, CliError> {
    match path {
        Some(p) => Ok(p),
        None => std::env::current_dir().map_err(CliError::CurrentDir),
    }
}

fn print_error(error: &CliError) {
    eprintln!("error: {error}");

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("caused by: {cause}");
        source = std::error::Error::source(cause);
    }
}
