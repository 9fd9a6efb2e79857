//! Pattern cache keyed by archetype.
//!
//! Patterns depend only on the archetype, so each one is generated once per
//! match and shared by every unit of that class through an `Arc`.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::shape::AttackPattern;
use crate::core::{EngineError, Result};
use crate::units::{ArchetypeId, ArchetypeRegistry};

/// Generated attack patterns for every known archetype.
#[derive(Clone, Debug, Default)]
pub struct AttackPatternCatalog {
    patterns: FxHashMap<ArchetypeId, Arc<AttackPattern>>,
}

impl AttackPatternCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate the pattern of every archetype in the registry.
    #[must_use]
    pub fn from_registry(registry: &ArchetypeRegistry) -> Self {
        let patterns = registry
            .iter()
            .map(|def| {
                let pattern = AttackPattern::from_shape(def.name.clone(), &def.pattern);
                (def.id, Arc::new(pattern))
            })
            .collect();
        Self { patterns }
    }

    /// Add or replace the pattern for one archetype.
    pub fn insert(&mut self, archetype: ArchetypeId, pattern: AttackPattern) {
        self.patterns.insert(archetype, Arc::new(pattern));
    }

    /// The shared pattern for an archetype.
    pub fn pattern_for(&self, archetype: ArchetypeId) -> Result<Arc<AttackPattern>> {
        self.patterns
            .get(&archetype)
            .cloned()
            .ok_or(EngineError::UnknownArchetype(archetype))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
