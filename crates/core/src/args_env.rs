//! Decoder for the per-target launch arguments and environment file.
//!
//! Layout, one token per line:
//!
//! ```text
//! <argsCount>
//!   <targetID> <targetArgsCount> <arg>...
//! <envCount>
//!   <targetID> <targetEnvCount> (<key> <value>)...
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cursor::TokenCursor;
use crate::error::{DecodeError, Section};
use crate::mapping::collect_unique;
use crate::target::{CommandLineArgument, EnvironmentVariable, TargetId};

/// Decoded launch arguments and environment, keyed by target.
///
/// A target without an entry has no overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgsAndEnv {
    pub command_line_arguments: BTreeMap<TargetId, Vec<CommandLineArgument>>,
    pub environment_variables: BTreeMap<TargetId, Vec<EnvironmentVariable>>,
}

pub fn parse_args_and_env(cursor: &mut TokenCursor) -> Result<ArgsAndEnv, DecodeError> {
    let args_count = cursor.consume_int()?;
    let mut args_records = Vec::with_capacity(args_count.min(cursor.remaining()));
    for _ in 0..args_count {
        let id = TargetId::from(cursor.consume_raw()?);
        let args = cursor.consume_counted(|value| Ok(CommandLineArgument::new(value)))?;
        tracing::trace!(target_id = %id, count = args.len(), "decoded arguments");
        args_records.push((id, args));
    }

    let env_count = cursor.consume_int()?;
    let mut env_records = Vec::with_capacity(env_count.min(cursor.remaining()));
    for _ in 0..env_count {
        let id = TargetId::from(cursor.consume_raw()?);
        let target_env_count = cursor.consume_int()?;
        let mut env = Vec::with_capacity(target_env_count.min(cursor.remaining()));
        for _ in 0..target_env_count {
            let key = cursor.consume_raw()?;
            let value = cursor.consume_raw()?;
            env.push(EnvironmentVariable::new(key, value));
        }
        tracing::trace!(target_id = %id, count = env.len(), "decoded environment");
        env_records.push((id, env));
    }

    let command_line_arguments =
        collect_unique(cursor.input(), Section::CommandLineArguments, args_records)?;
    let environment_variables =
        collect_unique(cursor.input(), Section::EnvironmentVariables, env_records)?;

    if !cursor.is_exhausted() {
        tracing::warn!(
            input = cursor.input(),
            ignored_lines = cursor.remaining(),
            "ignoring trailing lines after environment section"
        );
    }
    tracing::debug!(
        input = cursor.input(),
        args_targets = command_line_arguments.len(),
        env_targets = environment_variables.len(),
        "decoded args and env"
    );

    Ok(ArgsAndEnv {
        command_line_arguments,
        environment_variables,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(lines: &[&str]) -> Result<ArgsAndEnv, DecodeError> {
        let mut cursor = TokenCursor::new("args_and_env", lines.iter().copied());
        parse_args_and_env(&mut cursor)
    }

    fn args(values: &[&str]) -> Vec<CommandLineArgument> {
        values.iter().map(|v| CommandLineArgument::new(*v)).collect()
    }

    #[test]
    fn single_target_with_arguments() {
        let decoded = decode(&["1", "T1", "2", "-foo", "-bar", "0"]).unwrap();
        assert_eq!(decoded.command_line_arguments.len(), 1);
        assert_eq!(
            decoded.command_line_arguments[&TargetId::from("T1")],
            args(&["-foo", "-bar"])
        );
        assert!(decoded.environment_variables.is_empty());
    }

    #[test]
    fn single_target_with_environment() {
        let decoded = decode(&["0", "1", "T1", "1", "KEY", "VALUE"]).unwrap();
        assert!(decoded.command_line_arguments.is_empty());
        assert_eq!(
            decoded.environment_variables[&TargetId::from("T1")],
            vec![EnvironmentVariable::new("KEY", "VALUE")]
        );
    }

    #[test]
    fn zero_counts_yield_empty_mappings() {
        assert_eq!(decode(&["0", "0"]).unwrap(), ArgsAndEnv::default());
    }

    #[test]
    fn target_with_zero_arguments_is_present() {
        let decoded = decode(&["1", "T1", "0", "1", "T2", "0"]).unwrap();
        assert_eq!(
            decoded.command_line_arguments.get(&TargetId::from("T1")),
            Some(&Vec::new())
        );
        assert_eq!(
            decoded.environment_variables.get(&TargetId::from("T2")),
            Some(&Vec::new())
        );
    }

    #[test]
    fn argument_order_and_empty_values_are_preserved() {
        let decoded = decode(&["1", "T1", "3", "z", "", "a", "0"]).unwrap();
        assert_eq!(
            decoded.command_line_arguments[&TargetId::from("T1")],
            args(&["z", "", "a"])
        );
    }

    #[test]
    fn duplicate_environment_keys_pass_through() {
        let decoded = decode(&["0", "1", "T1", "2", "K", "1", "K", "2"]).unwrap();
        assert_eq!(
            decoded.environment_variables[&TargetId::from("T1")],
            vec![
                EnvironmentVariable::new("K", "1"),
                EnvironmentVariable::new("K", "2"),
            ]
        );
    }

    #[test]
    fn same_target_in_both_sections_is_allowed() {
        let decoded = decode(&["1", "T1", "1", "-v", "1", "T1", "1", "K", "V"]).unwrap();
        assert!(decoded
            .command_line_arguments
            .contains_key(&TargetId::from("T1")));
        assert!(decoded
            .environment_variables
            .contains_key(&TargetId::from("T1")));
    }

    #[test]
    fn duplicate_target_in_args_section_fails() {
        let err = decode(&["2", "T1", "1", "-a", "T1", "1", "-b", "0"]).unwrap_err();
        assert_eq!(
            err,
            DecodeError::DuplicateTarget {
                input: "args_and_env".to_string(),
                id: TargetId::from("T1"),
                section: Section::CommandLineArguments,
            }
        );
    }

    #[test]
    fn duplicate_target_in_env_section_fails() {
        let err = decode(&["0", "2", "T1", "0", "T1", "0"]).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::DuplicateTarget {
                section: Section::EnvironmentVariables,
                ..
            }
        ));
    }

    #[test]
    fn missing_env_section_is_exhausted() {
        let err = decode(&["1", "T1", "1", "-v"]).unwrap_err();
        assert_eq!(
            err,
            DecodeError::Exhausted {
                input: "args_and_env".to_string(),
                after_line: 4,
            }
        );
    }

    #[test]
    fn env_entry_missing_value_is_exhausted() {
        let err = decode(&["0", "1", "T1", "1", "KEY"]).unwrap_err();
        assert!(matches!(err, DecodeError::Exhausted { after_line: 5, .. }));
    }

    #[test]
    fn malformed_target_count_reports_line() {
        let err = decode(&["1", "T1", "two", "-a", "-b", "0"]).unwrap_err();
        assert_eq!(
            err,
            DecodeError::MalformedInteger {
                input: "args_and_env".to_string(),
                line: 3,
                text: "two".to_string(),
            }
        );
    }

    #[test]
    fn trailing_lines_are_ignored() {
        let decoded = decode(&["0", "0", "leftover"]).unwrap();
        assert_eq!(decoded, ArgsAndEnv::default());
    }

    #[test]
    fn decoding_is_deterministic() {
        let lines = ["2", "B", "1", "-b", "A", "1", "-a", "1", "A", "1", "K", "V"];
        let first = serde_json::to_string(&decode(&lines).unwrap()).unwrap();
        let second = serde_json::to_string(&decode(&lines).unwrap()).unwrap();
        assert_eq!(first, second);
    }
}
