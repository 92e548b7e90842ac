use std::path::Path;
use std::process;

use xcschemes_core::{FileSystemSource, TargetsById};

use crate::{print_json, report_error, report_load_error, OutputFormat};

pub(crate) fn cmd_transitive_refs(
    file: Option<&Path>,
    targets: &Path,
    output: OutputFormat,
    quiet: bool,
) {
    let targets_json = match std::fs::read_to_string(targets) {
        Ok(s) => s,
        Err(e) => {
            let msg = format!("error reading file '{}': {}", targets.display(), e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };

    let registry = match TargetsById::from_json(&targets_json) {
        Ok(r) => r,
        Err(e) => {
            let msg = format!("error loading targets from '{}': {}", targets.display(), e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };
    tracing::debug!(targets = registry.len(), "loaded target registry");

    match xcschemes_core::parse_transitive_preview_references_file(
        &FileSystemSource,
        file,
        &registry,
    ) {
        Ok(references) => {
            tracing::info!(owners = references.len(), "decoded transitive preview references");
            print_json(&references);
        }
        Err(e) => {
            report_load_error(&e, output, quiet);
            process::exit(1);
        }
    }
}
