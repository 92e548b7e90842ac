//! Decoder for transitive preview references.
//!
//! Records repeat until the input is exhausted:
//!
//! ```text
//! <ownerTargetID> <refCount> <referencedTargetID>...
//! ```
//!
//! Every referenced id is resolved through a [`TargetRegistry`] to its
//! [`BuildableReference`].

use std::collections::BTreeMap;

use crate::cursor::TokenCursor;
use crate::error::{DecodeError, Section};
use crate::mapping::collect_unique;
use crate::registry::TargetRegistry;
use crate::target::{BuildableReference, TargetId};

/// Context label for registry misses on referenced ids.
pub const ADDITIONAL_TARGET_CONTEXT: &str = "Additional target";

pub type TransitivePreviewReferences = BTreeMap<TargetId, Vec<BuildableReference>>;

/// Decode transitive preview references.
///
/// `None` means there is no input at all, which is a valid "no references"
/// and yields an empty mapping. An input that ends partway through a
/// record fails with [`DecodeError::Exhausted`].
pub fn parse_transitive_preview_references<R>(
    cursor: Option<&mut TokenCursor>,
    registry: &R,
) -> Result<TransitivePreviewReferences, DecodeError>
where
    R: TargetRegistry + ?Sized,
{
    let Some(cursor) = cursor else {
        tracing::debug!("no transitive preview references input");
        return Ok(BTreeMap::new());
    };

    let mut records = Vec::new();
    while !cursor.is_exhausted() {
        let owner = TargetId::from(cursor.consume_raw()?);
        let references = cursor.consume_counted(|id| {
            registry
                .value_for(&TargetId::from(id), ADDITIONAL_TARGET_CONTEXT)
                .map(|target| target.buildable_reference.clone())
        })?;
        tracing::trace!(target_id = %owner, count = references.len(), "decoded references");
        records.push((owner, references));
    }

    let references = collect_unique(
        cursor.input(),
        Section::TransitivePreviewReferences,
        records,
    )?;
    tracing::debug!(
        input = cursor.input(),
        targets = references.len(),
        "decoded transitive preview references"
    );
    Ok(references)
}
