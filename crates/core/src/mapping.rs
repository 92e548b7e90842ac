use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::error::{DecodeError, Section};
use crate::target::TargetId;

/// Build a mapping from decoded records, failing on the first repeated id.
pub(crate) fn collect_unique<V>(
    input: &str,
    section: Section,
    records: Vec<(TargetId, V)>,
) -> Result<BTreeMap<TargetId, V>, DecodeError> {
    let mut map = BTreeMap::new();
    for (id, value) in records {
        match map.entry(id) {
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
            Entry::Occupied(slot) => {
                return Err(DecodeError::DuplicateTarget {
                    input: input.to_owned(),
                    id: slot.key().clone(),
                    section,
                });
            }
        }
    }
    Ok(map)
}
