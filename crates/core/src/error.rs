//! Error types for decoding, loading, encoding and registry construction.

use std::path::PathBuf;

use crate::target::TargetId;

/// The grammar section a record was declared in.
///
/// Target ids must be unique per section; the same id may appear once in
/// the arguments section and once in the environment section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    CommandLineArguments,
    EnvironmentVariables,
    TransitivePreviewReferences,
}

impl Section {
    pub fn name(self) -> &'static str {
        match self {
            Section::CommandLineArguments => "command-line arguments",
            Section::EnvironmentVariables => "environment variables",
            Section::TransitivePreviewReferences => "transitive preview references",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A failure to decode one of the line-oriented scheme inputs.
///
/// `input` is the display name of the line source (usually a file path).
/// `line` is the 1-based number of the offending line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// More tokens were expected than lines remain.
    #[error("{input}: unexpected end of input after line {after_line}")]
    Exhausted { input: String, after_line: usize },

    /// A count line is not a non-negative decimal integer.
    #[error("{input}:{line}: expected a non-negative integer, found '{text}'")]
    MalformedInteger {
        input: String,
        line: usize,
        text: String,
    },

    /// The same target was declared twice within one section.
    #[error("{input}: target '{id}' is declared more than once in {section}")]
    DuplicateTarget {
        input: String,
        id: TargetId,
        section: Section,
    },

    /// A referenced target has no entry in the registry.
    #[error("{input}:{line}: {context} '{id}' not found in the target registry")]
    UnknownTarget {
        input: String,
        line: usize,
        id: TargetId,
        context: String,
    },

    /// A typed parse function rejected a line.
    #[error("{input}:{line}: {message}")]
    InvalidValue {
        input: String,
        line: usize,
        message: String,
    },
}

impl DecodeError {
    /// Machine-readable rendering used by `--output json`.
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            DecodeError::Exhausted { input, after_line } => serde_json::json!({
                "kind": "exhausted",
                "input": input,
                "after_line": after_line,
                "message": self.to_string(),
            }),
            DecodeError::MalformedInteger { input, line, text } => serde_json::json!({
                "kind": "malformed_integer",
                "input": input,
                "line": line,
                "text": text,
                "message": self.to_string(),
            }),
            DecodeError::DuplicateTarget { input, id, section } => serde_json::json!({
                "kind": "duplicate_target",
                "input": input,
                "id": id.as_str(),
                "section": section.name(),
                "message": self.to_string(),
            }),
            DecodeError::UnknownTarget {
                input,
                line,
                id,
                context,
            } => serde_json::json!({
                "kind": "unknown_target",
                "input": input,
                "line": line,
                "id": id.as_str(),
                "context": context,
                "message": self.to_string(),
            }),
            DecodeError::InvalidValue { input, line, .. } => serde_json::json!({
                "kind": "invalid_value",
                "input": input,
                "line": line,
                "message": self.to_string(),
            }),
        }
    }
}

/// A failure produced by a per-line parse function, before the cursor has
/// attached the input name and line number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    #[error("{context} '{id}' not found in the target registry")]
    UnknownTarget { id: TargetId, context: String },

    #[error("{0}")]
    Invalid(String),
}

/// Errors from the path-based entry points: acquiring the lines, then
/// decoding them.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("error reading '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// A value the line grammar cannot represent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("{what} contains a line break and cannot be encoded")]
    EmbeddedNewline { what: String },
}

/// Errors building a target registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("target '{0}' appears more than once in the registry")]
    DuplicateTarget(TargetId),

    #[error("invalid target registry JSON: {0}")]
    Json(#[from] serde_json::Error),
}
