//! Archetype definitions - static unit class data.
//!
//! An archetype ("Warrior", "Archer") fixes a unit's battlefield role, its
//! attack pattern and the multipliers applied to roster base stats. Everything
//! that varies per unit lives in `UnitInstance`.

use serde::{Deserialize, Serialize};

use crate::patterns::PatternShape;

/// Identifier of an archetype.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArchetypeId(pub u16);

impl ArchetypeId {
    /// Create a new archetype ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for ArchetypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Archetype({})", self.0)
    }
}

/// Where an archetype prefers to stand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Front line, close to the opposing edge.
    Melee,
    /// Back line, far from the opposing edge.
    Ranged,
    /// No positional preference.
    Support,
}

/// Multipliers applied to roster base stats.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatMultipliers {
    pub hp: f64,
    pub attack: f64,
    pub defense: f64,
    pub speed: f64,
    /// Added to the base crit rate, not multiplied.
    pub crit_rate_bonus: f64,
}

impl Default for StatMultipliers {
    fn default() -> Self {
        Self {
            hp: 1.0,
            attack: 1.0,
            defense: 1.0,
            speed: 1.0,
            crit_rate_bonus: 0.0,
        }
    }
}

impl StatMultipliers {
    #[must_use]
    pub const fn new(hp: f64, attack: f64, defense: f64, speed: f64, crit_rate_bonus: f64) -> Self {
        Self {
            hp,
            attack,
            defense,
            speed,
            crit_rate_bonus,
        }
    }
}

/// Static definition of a unit class.
///
/// ## Example
///
/// ```
/// use tile_tactics::patterns::PatternShape;
/// use tile_tactics::units::{ArchetypeDefinition, ArchetypeId, Role};
///
/// let lancer = ArchetypeDefinition::new(ArchetypeId::new(20), "Lancer")
///     .with_role(Role::Melee)
///     .with_pattern(PatternShape::Cross { range: 2 });
///
/// assert_eq!(lancer.name, "Lancer");
/// assert_eq!(lancer.role, Role::Melee);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeDefinition {
    pub id: ArchetypeId,
    pub name: String,
    pub role: Role,
    pub pattern: PatternShape,
    #[serde(default)]
    pub multipliers: StatMultipliers,
}

impl ArchetypeDefinition {
    /// Create a support archetype with a single-cell pattern and neutral multipliers.
    #[must_use]
    pub fn new(id: ArchetypeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            role: Role::Support,
            pattern: PatternShape::Single,
            multipliers: StatMultipliers::default(),
        }
    }

    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    #[must_use]
    pub fn with_pattern(mut self, pattern: PatternShape) -> Self {
        self.pattern = pattern;
        self
    }

    #[must_use]
    pub fn with_multipliers(mut self, multipliers: StatMultipliers) -> Self {
        self.multipliers = multipliers;
        self
    }
}
