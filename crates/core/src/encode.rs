//! Writers for the two line grammars, the inverse of the decoders.
//!
//! Mappings are written in ascending target id order. Values containing a
//! line break are rejected since the grammar has no escaping.

use std::collections::BTreeMap;

use crate::args_env::ArgsAndEnv;
use crate::error::EncodeError;
use crate::target::TargetId;

fn push_line(
    lines: &mut Vec<String>,
    value: &str,
    what: impl FnOnce() -> String,
) -> Result<(), EncodeError> {
    if value.contains(|c: char| c == '\n' || c == '\r') {
        return Err(EncodeError::EmbeddedNewline { what: what() });
    }
    lines.push(value.to_owned());
    Ok(())
}

fn push_id(lines: &mut Vec<String>, id: &TargetId) -> Result<(), EncodeError> {
    push_line(lines, id.as_str(), || format!("target id '{}'", id))
}

pub fn encode_args_and_env(args_and_env: &ArgsAndEnv) -> Result<Vec<String>, EncodeError> {
    let mut lines = Vec::new();

    lines.push(args_and_env.command_line_arguments.len().to_string());
    for (id, args) in &args_and_env.command_line_arguments {
        push_id(&mut lines, id)?;
        lines.push(args.len().to_string());
        for arg in args {
            push_line(&mut lines, &arg.value, || format!("argument of '{}'", id))?;
        }
    }

    lines.push(args_and_env.environment_variables.len().to_string());
    for (id, env) in &args_and_env.environment_variables {
        push_id(&mut lines, id)?;
        lines.push(env.len().to_string());
        for var in env {
            push_line(&mut lines, &var.key, || format!("environment key of '{}'", id))?;
            push_line(&mut lines, &var.value, || {
                format!("environment variable '{}' of '{}'", var.key, id)
            })?;
        }
    }

    Ok(lines)
}

/// Write owner -> referenced target ids. Resolution to buildable references
/// happens when decoding, so the encoded form only carries ids.
pub fn encode_transitive_preview_references(
    references: &BTreeMap<TargetId, Vec<TargetId>>,
) -> Result<Vec<String>, EncodeError> {
    let mut lines = Vec::new();
    for (owner, referenced) in references {
        push_id(&mut lines, owner)?;
        lines.push(referenced.len().to_string());
        for id in referenced {
            push_id(&mut lines, id)?;
        }
    }
    Ok(lines)
}
