//! Target registry seam used to resolve referenced target ids.

use std::collections::HashMap;

use crate::error::{RegistryError, ValueError};
use crate::target::{Target, TargetId};

/// Lookup from a target id to its registry entry.
///
/// The registry is owned by the caller and passed to the decoders
/// explicitly; decoders only read from it.
pub trait TargetRegistry {
    fn target(&self, id: &TargetId) -> Option<&Target>;

    /// Look up `id`, naming what it was looked up as (`context`) on a miss.
    fn value_for(&self, id: &TargetId, context: &str) -> Result<&Target, ValueError> {
        self.target(id).ok_or_else(|| ValueError::UnknownTarget {
            id: id.clone(),
            context: context.to_owned(),
        })
    }
}

/// `HashMap`-backed registry.
#[derive(Debug, Clone, Default)]
pub struct TargetsById {
    targets: HashMap<TargetId, Target>,
}

impl TargetsById {
    pub fn new(targets: Vec<Target>) -> Result<Self, RegistryError> {
        let mut by_id = HashMap::with_capacity(targets.len());
        for target in targets {
            if by_id.contains_key(&target.id) {
                return Err(RegistryError::DuplicateTarget(target.id));
            }
            by_id.insert(target.id.clone(), target);
        }
        Ok(TargetsById { targets: by_id })
    }

    /// Load from a JSON array of [`Target`] objects.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let targets: Vec<Target> = serde_json::from_str(json)?;
        Self::new(targets)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl TargetRegistry for TargetsById {
    fn target(&self, id: &TargetId) -> Option<&Target> {
        self.targets.get(id)
    }
}

impl TargetRegistry for HashMap<TargetId, Target> {
    fn target(&self, id: &TargetId) -> Option<&Target> {
        self.get(id)
    }
}
