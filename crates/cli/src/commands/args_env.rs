use std::path::Path;
use std::process;

use xcschemes_core::FileSystemSource;

use crate::{print_json, report_load_error, OutputFormat};

pub(crate) fn cmd_args_env(file: &Path, output: OutputFormat, quiet: bool) {
    match xcschemes_core::parse_args_and_env_file(&FileSystemSource, file) {
        Ok(decoded) => {
            tracing::info!(
                args_targets = decoded.command_line_arguments.len(),
                env_targets = decoded.environment_variables.len(),
                "decoded {}",
                file.display()
            );
            print_json(&decoded);
        }
        Err(e) => {
            report_load_error(&e, output, quiet);
            process::exit(1);
        }
    }
}
