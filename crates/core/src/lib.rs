//! xcschemes-core: decoders for the line-oriented scheme inputs.
//!
//! The scheme generator receives two intermediate files written by the
//! build-graph side, one token per line:
//!
//! - per-target launch arguments and environment variables
//!   ([`parse_args_and_env`]);
//! - per-target transitive preview references, resolved against a
//!   [`TargetRegistry`] ([`parse_transitive_preview_references`]).
//!
//! Both decoders read from a [`TokenCursor`] and are all-or-nothing: on
//! failure no partial mapping is returned.

pub mod args_env;
pub mod cursor;
pub mod decode;
pub mod encode;
pub mod error;
mod mapping;
pub mod registry;
pub mod source;
pub mod target;
pub mod transitive_refs;

// ── Convenience re-exports ───────────────────────────────────────────

pub use args_env::{parse_args_and_env, ArgsAndEnv};
pub use cursor::TokenCursor;
pub use decode::{parse_args_and_env_file, parse_transitive_preview_references_file};
pub use encode::{encode_args_and_env, encode_transitive_preview_references};
pub use error::{DecodeError, EncodeError, LoadError, RegistryError, Section, ValueError};
pub use registry::{TargetRegistry, TargetsById};
pub use source::{split_lines, FileSystemSource, InMemorySource, LineMode, LineSource};
pub use target::{BuildableReference, CommandLineArgument, EnvironmentVariable, Target, TargetId};
pub use transitive_refs::{
    parse_transitive_preview_references, TransitivePreviewReferences, ADDITIONAL_TARGET_CONTEXT,
};
