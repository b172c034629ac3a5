use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use taskboard::commands::Command;
use taskboard::load_dataset;
use taskboard::output::OutputFormat;
use taskboard_query::QueryResult;

/// Environment variable name for the dataset path
const TBQ_DATA_PATH_ENV: &str = "TBQ_DATA_PATH";

/// tbq - Query taskboard tasks and projects
#[derive(Parser)]
#[command(name = "tbq")]
#[command(version = "0.1.0")]
#[command(about = "Filter, sort and group taskboard tasks and projects", long_about = None)]
struct Args {
    /// Path to a JSON dataset (can also be set via TBQ_DATA_PATH env var)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Option<Command>,
}

/// Get the dataset path from command line or environment variable.
///
/// Priority:
/// 1. Command line --data argument
/// 2. TBQ_DATA_PATH environment variable (if non-empty)
/// 3. None, meaning the built-in sample board
fn resolve_data_path(cli_data: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = cli_data {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(TBQ_DATA_PATH_ENV)
        && !env_path.is_empty()
    {
        return Some(PathBuf::from(env_path));
    }

    None
}

/// Initialize logging from the RUST_LOG environment variable
///
/// Examples:
/// - `RUST_LOG=trace` - show all trace logs
/// - `RUST_LOG=debug` - show debug and above
/// - `RUST_LOG=taskboard_query=debug` - debug logs from the engine only
///
/// Defaults to `warn` when unset or invalid.
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .init();
}

fn main() {
    init_logging();

    if let Err(e) = run_app() {
        eprintln!("error: {}", e.full_message());
        process::exit(1);
    }
}

/// Main application logic - separated for testability
fn run_app() -> QueryResult<()> {
    let args = Args::parse();
    run_with_args(&args)
}

/// Run the application with the given arguments
fn run_with_args(args: &Args) -> QueryResult<()> {
    let data_path = resolve_data_path(args.data.clone());
    let dataset = load_dataset(data_path.as_deref())?;

    match &args.command {
        Some(cmd) => {
            let result = cmd.execute(&dataset, args.format)?;
            println!("{}", result);
        }
        None => {
            println!("Welcome to tbq!");
            println!("Use 'tbq --help' for usage information.");
        }
    }

    Ok(())
}
