//! Path-based entry points: acquire an input's lines through a
//! [`LineSource`], then run one decoder over them.

use std::path::Path;

use crate::args_env::{parse_args_and_env, ArgsAndEnv};
use crate::cursor::TokenCursor;
use crate::error::LoadError;
use crate::registry::TargetRegistry;
use crate::source::{LineMode, LineSource};
use crate::transitive_refs::{parse_transitive_preview_references, TransitivePreviewReferences};

fn open(source: &dyn LineSource, path: &Path, mode: LineMode) -> Result<TokenCursor, LoadError> {
    let lines = source
        .read_lines(path, mode)
        .map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
    tracing::debug!(path = %path.display(), lines = lines.len(), "read input");
    Ok(TokenCursor::new(path.display().to_string(), lines))
}

/// Decode the args/env file at `path`. Empty lines are tokens here.
pub fn parse_args_and_env_file(
    source: &dyn LineSource,
    path: &Path,
) -> Result<ArgsAndEnv, LoadError> {
    let mut cursor = open(source, path, LineMode::All)?;
    Ok(parse_args_and_env(&mut cursor)?)
}

/// Decode the transitive preview references file at `path`, if any.
///
/// With `path == None` nothing is read and the result is empty.
pub fn parse_transitive_preview_references_file<R>(
    source: &dyn LineSource,
    path: Option<&Path>,
    registry: &R,
) -> Result<TransitivePreviewReferences, LoadError>
where
    R: TargetRegistry + ?Sized,
{
    let mut cursor = match path {
        Some(path) => Some(open(source, path, LineMode::NonEmpty)?),
        None => None,
    };
    Ok(parse_transitive_preview_references(
        cursor.as_mut(),
        registry,
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;
    use crate::registry::TargetsById;
    use crate::source::InMemorySource;
    use crate::target::{BuildableReference, CommandLineArgument, Target, TargetId};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn source(files: &[(&str, &str)]) -> InMemorySource {
        InMemorySource::new(
            files
                .iter()
                .map(|(path, text)| (PathBuf::from(path), text.to_string()))
                .collect::<HashMap<_, _>>(),
        )
    }

    #[test]
    fn args_and_env_keeps_empty_argument_lines() {
        let source = source(&[("/in/args_and_env", "1\nT1\n2\n\n-v\n0\n")]);
        let decoded = parse_args_and_env_file(&source, Path::new("/in/args_and_env")).unwrap();
        assert_eq!(
            decoded.command_line_arguments[&TargetId::from("T1")],
            vec![CommandLineArgument::new(""), CommandLineArgument::new("-v")]
        );
    }

    #[test]
    fn errors_name_the_input_path() {
        let source = source(&[("/in/args_and_env", "1\nT1\n")]);
        let err = parse_args_and_env_file(&source, Path::new("/in/args_and_env")).unwrap_err();
        match err {
            LoadError::Decode(DecodeError::Exhausted { input, after_line }) => {
                assert_eq!(input, "/in/args_and_env");
                assert_eq!(after_line, 2);
            }
            other => panic!("expected Exhausted, got {:?}", other),
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = parse_args_and_env_file(&source(&[]), Path::new("/nope")).unwrap_err();
        assert!(matches!(err, LoadError::Io { ref path, .. } if path == Path::new("/nope")));
    }

    #[test]
    fn transitive_references_skip_blank_lines() {
        let registry = TargetsById::new(vec![Target {
            id: TargetId::from("T2"),
            buildable_reference: BuildableReference {
                blueprint_identifier: "T2_ID".to_string(),
                buildable_name: "T2.framework".to_string(),
                blueprint_name: "T2".to_string(),
                referenced_container: "container:P.xcodeproj".to_string(),
            },
        }])
        .unwrap();
        let source = source(&[("/in/refs", "T1\n\n1\nT2\n\n")]);
        let decoded = parse_transitive_preview_references_file(
            &source,
            Some(Path::new("/in/refs")),
            &registry,
        )
        .unwrap();
        assert_eq!(decoded[&TargetId::from("T1")].len(), 1);
    }

    #[test]
    fn absent_transitive_references_read_nothing() {
        // A source with no files would fail any read.
        let decoded =
            parse_transitive_preview_references_file(&source(&[]), None, &TargetsById::default())
                .unwrap();
        assert!(decoded.is_empty());
    }
}
