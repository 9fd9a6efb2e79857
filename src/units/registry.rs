//! Archetype registry for definition lookup.

use rustc_hash::FxHashMap;

use super::archetype::{ArchetypeDefinition, ArchetypeId, Role, StatMultipliers};
use crate::core::{EngineError, Result};
use crate::patterns::{Axis, Offset, PatternShape};

/// Ids of the archetypes in `ArchetypeRegistry::standard()`.
pub mod jobs {
    use super::ArchetypeId;

    pub const WARRIOR: ArchetypeId = ArchetypeId(0);
    pub const KNIGHT: ArchetypeId = ArchetypeId(1);
    pub const WIZARD: ArchetypeId = ArchetypeId(2);
    pub const PRIEST: ArchetypeId = ArchetypeId(3);
    pub const ROGUE: ArchetypeId = ArchetypeId(4);
    pub const SAGE: ArchetypeId = ArchetypeId(5);
    pub const ARCHER: ArchetypeId = ArchetypeId(6);
    pub const GUNNER: ArchetypeId = ArchetypeId(7);
}

/// Registry of archetype definitions.
///
/// ## Example
///
/// ```
/// use tile_tactics::units::{jobs, ArchetypeRegistry, Role};
///
/// let registry = ArchetypeRegistry::standard();
/// let archer = registry.get(jobs::ARCHER).unwrap();
///
/// assert_eq!(archer.name, "Archer");
/// assert_eq!(archer.role, Role::Ranged);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ArchetypeRegistry {
    archetypes: FxHashMap<ArchetypeId, ArchetypeDefinition>,
}

impl ArchetypeRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a list of definitions (e.g. loaded from data).
    ///
    /// Fails with `DuplicateArchetype` on the first repeated id.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = ArchetypeDefinition>,
    ) -> Result<Self> {
        let mut registry = Self::new();
        for definition in definitions {
            registry.register(definition)?;
        }
        Ok(registry)
    }

    /// The eight standard job classes.
    #[must_use]
    pub fn standard() -> Self {
        let horizontal = |length| PatternShape::Line {
            length,
            axis: Axis::Horizontal,
        };

        let definitions = [
            ArchetypeDefinition::new(jobs::WARRIOR, "Warrior")
                .with_role(Role::Melee)
                .with_pattern(PatternShape::Square { range: 1 })
                .with_multipliers(StatMultipliers::new(1.2, 1.2, 1.0, 1.0, 0.05)),
            ArchetypeDefinition::new(jobs::KNIGHT, "Knight")
                .with_role(Role::Melee)
                .with_pattern(horizontal(2))
                .with_multipliers(StatMultipliers::new(1.3, 0.9, 1.5, 0.8, 0.02)),
            ArchetypeDefinition::new(jobs::WIZARD, "Wizard")
                .with_role(Role::Ranged)
                .with_pattern(PatternShape::Square { range: 1 })
                .with_multipliers(StatMultipliers::new(0.7, 0.5, 0.7, 1.1, 0.08)),
            ArchetypeDefinition::new(jobs::PRIEST, "Priest")
                .with_role(Role::Support)
                .with_pattern(PatternShape::Custom(vec![
                    Offset::new(1, 0),
                    Offset::new(0, 1),
                    Offset::new(1, 1),
                ]))
                .with_multipliers(StatMultipliers::new(0.85, 0.5, 0.8, 1.0, 0.03)),
            ArchetypeDefinition::new(jobs::ROGUE, "Rogue")
                .with_role(Role::Melee)
                .with_pattern(PatternShape::Diagonal { range: 1 })
                .with_multipliers(StatMultipliers::new(0.85, 1.4, 0.6, 1.5, 0.10)),
            ArchetypeDefinition::new(jobs::SAGE, "Sage")
                .with_role(Role::Support)
                .with_pattern(PatternShape::Cross { range: 2 })
                .with_multipliers(StatMultipliers::new(1.0, 1.0, 0.9, 1.2, 0.07)),
            ArchetypeDefinition::new(jobs::ARCHER, "Archer")
                .with_role(Role::Ranged)
                .with_pattern(horizontal(5))
                .with_multipliers(StatMultipliers::new(0.9, 1.0, 0.8, 1.3, 0.06)),
            ArchetypeDefinition::new(jobs::GUNNER, "Gunner")
                .with_role(Role::Ranged)
                .with_pattern(PatternShape::Custom(vec![
                    Offset::new(3, 0),
                    Offset::new(4, 0),
                    Offset::new(3, 1),
                    Offset::new(3, -1),
                ]))
                .with_multipliers(StatMultipliers::new(0.75, 1.5, 0.6, 1.0, 0.12)),
        ];
        Self {
            archetypes: definitions.into_iter().map(|def| (def.id, def)).collect(),
        }
    }

    /// Register an archetype definition.
    ///
    /// Fails with `DuplicateArchetype` if the id is taken; the existing
    /// definition is kept.
    pub fn register(&mut self, definition: ArchetypeDefinition) -> Result<()> {
        if self.archetypes.contains_key(&definition.id) {
            return Err(EngineError::DuplicateArchetype(definition.id));
        }
        self.archetypes.insert(definition.id, definition);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, id: ArchetypeId) -> Option<&ArchetypeDefinition> {
        self.archetypes.get(&id)
    }

    #[must_use]
    pub fn contains(&self, id: ArchetypeId) -> bool {
        self.archetypes.contains_key(&id)
    }

    /// All definitions, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &ArchetypeDefinition> {
        self.archetypes.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.archetypes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.archetypes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::AttackPattern;

    #[test]
    fn test_standard_registry() {
        let registry = ArchetypeRegistry::standard();
        assert_eq!(registry.len(), 8);

        let knight = registry.get(jobs::KNIGHT).unwrap();
        assert_eq!(knight.name, "Knight");
        assert_eq!(knight.role, Role::Melee);
        assert_eq!(knight.multipliers.defense, 1.5);
    }

    #[test]
    fn test_standard_patterns() {
        let registry = ArchetypeRegistry::standard();
        let size = |id| AttackPattern::from_shape("", &registry.get(id).unwrap().pattern).len();

        assert_eq!(size(jobs::WARRIOR), 8);
        assert_eq!(size(jobs::KNIGHT), 4);
        assert_eq!(size(jobs::PRIEST), 5);
        assert_eq!(size(jobs::ROGUE), 4);
        assert_eq!(size(jobs::SAGE), 8);
        assert_eq!(size(jobs::ARCHER), 10);
        assert_eq!(size(jobs::GUNNER), 8);
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = ArchetypeRegistry::new();
        assert!(registry.is_empty());

        registry
            .register(ArchetypeDefinition::new(ArchetypeId(40), "Golem"))
            .unwrap();
        assert!(registry.contains(ArchetypeId(40)));
        assert!(registry.get(ArchetypeId(41)).is_none());
        assert_eq!(registry.iter().count(), 1);
    }

    #[test]
    fn test_duplicate_registration_is_rejected() {
        let mut registry = ArchetypeRegistry::new();
        registry.register(ArchetypeDefinition::new(ArchetypeId(1), "A")).unwrap();

        let err = registry
            .register(ArchetypeDefinition::new(ArchetypeId(1), "B"))
            .unwrap_err();
        assert_eq!(err, EngineError::DuplicateArchetype(ArchetypeId(1)));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(ArchetypeId(1)).unwrap().name, "A");
    }

    #[test]
    fn test_from_definitions_rejects_duplicates() {
        let err = ArchetypeRegistry::from_definitions([
            ArchetypeDefinition::new(ArchetypeId(7), "A"),
            ArchetypeDefinition::new(ArchetypeId(8), "B"),
            ArchetypeDefinition::new(ArchetypeId(7), "C"),
        ])
        .unwrap_err();
        assert_eq!(err, EngineError::DuplicateArchetype(ArchetypeId(7)));
        assert_eq!(err.to_string(), "Archetype(7) is already registered");

        let registry = ArchetypeRegistry::from_definitions([
            ArchetypeDefinition::new(ArchetypeId(7), "A"),
            ArchetypeDefinition::new(ArchetypeId(8), "B"),
        ])
        .unwrap();
        assert_eq!(registry.len(), 2);
    }
}
