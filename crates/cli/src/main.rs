mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use xcschemes_core::LoadError;

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Decode scheme generator inputs.
#[derive(Parser)]
#[command(
    name = "xcschemes-decode",
    version,
    about = "Decode scheme generator inputs"
)]
struct Cli {
    /// Output format for errors (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a per-target launch arguments and environment file
    ArgsEnv {
        /// Path to the args/env file
        file: PathBuf,
    },

    /// Decode a transitive preview references file
    TransitiveRefs {
        /// Path to the references file; omit when the generator has none
        file: Option<PathBuf>,
        /// Path to the target registry JSON
        #[arg(long)]
        targets: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Commands::ArgsEnv { file } => {
            commands::cmd_args_env(&file, cli.output, cli.quiet);
        }
        Commands::TransitiveRefs { file, targets } => {
            commands::cmd_transitive_refs(file.as_deref(), &targets, cli.output, cli.quiet);
        }
    }
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

pub(crate) fn print_json(value: &impl Serialize) {
    let pretty = serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("serialization error: {}", e));
    println!("{}", pretty);
}

pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        }
    }
}

pub(crate) fn report_load_error(err: &LoadError, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match (err, output) {
        (LoadError::Decode(e), OutputFormat::Json) => {
            let err_json = serde_json::to_string_pretty(&e.to_json_value())
                .unwrap_or_else(|_| format!("{{\"error\": \"{:?}\"}}", e));
            eprintln!("{}", err_json);
        }
        _ => report_error(&err.to_string(), output, quiet),
    }
}
