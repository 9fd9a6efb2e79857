//! Unit instances - the per-match state of one unit.
//!
//! Instances are created once from roster data when a match is built and are
//! mutated only by the combat resolver. A unit never moves between boards.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::archetype::{ArchetypeDefinition, ArchetypeId, Role};
use super::roster::BaseStats;
use crate::board::Location;
use crate::core::{Side, UnitId};
use crate::patterns::AttackPattern;

/// Combat statistics after archetype multipliers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CombatStats {
    pub max_hp: i32,
    pub current_hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
    /// Probability of a critical hit, in `[0, 1]`.
    pub crit_rate: f64,
    /// Damage multiplier on a critical hit.
    pub crit_damage: f64,
}

impl CombatStats {
    /// Full-health stats with no crit chance.
    #[must_use]
    pub const fn new(max_hp: i32, attack: i32, defense: i32) -> Self {
        Self {
            max_hp,
            current_hp: max_hp,
            attack,
            defense,
            speed: 10,
            crit_rate: 0.0,
            crit_damage: 1.5,
        }
    }

    /// Derive stats from roster base values and archetype multipliers.
    ///
    /// Scaled values are rounded; HP never drops below 1 and the crit rate is
    /// clamped to `[0, 1]`.
    #[must_use]
    pub fn derive(base: &BaseStats, archetype: &ArchetypeDefinition) -> Self {
        let m = &archetype.multipliers;
        let scale = |value: i32, factor: f64| (f64::from(value) * factor).round() as i32;

        let max_hp = scale(base.hp, m.hp).max(1);
        Self {
            max_hp,
            current_hp: max_hp,
            attack: scale(base.attack, m.attack).max(0),
            defense: scale(base.defense, m.defense).max(0),
            speed: scale(base.speed, m.speed).max(0),
            crit_rate: (base.crit_rate + m.crit_rate_bonus).clamp(0.0, 1.0),
            crit_damage: base.crit_damage.max(1.0),
        }
    }

    #[must_use]
    pub fn with_crit(mut self, crit_rate: f64, crit_damage: f64) -> Self {
        self.crit_rate = crit_rate;
        self.crit_damage = crit_damage;
        self
    }

    #[must_use]
    pub fn with_speed(mut self, speed: i32) -> Self {
        self.speed = speed;
        self
    }
}

/// One unit in a match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnitInstance {
    pub id: UnitId,
    pub side: Side,
    pub archetype: ArchetypeId,
    pub role: Role,
    pub stats: CombatStats,
    pub pattern: Arc<AttackPattern>,
    /// Absent until deployed. Kept after removal as the last known cell.
    pub location: Option<Location>,
    pub alive: bool,
}

impl UnitInstance {
    /// Create an undeployed, living unit.
    #[must_use]
    pub fn new(
        id: UnitId,
        side: Side,
        archetype: ArchetypeId,
        role: Role,
        stats: CombatStats,
        pattern: Arc<AttackPattern>,
    ) -> Self {
        Self {
            id,
            side,
            archetype,
            role,
            stats,
            pattern,
            location: None,
            alive: true,
        }
    }

    /// Create a unit from roster data.
    #[must_use]
    pub fn from_roster(
        id: UnitId,
        side: Side,
        archetype: &ArchetypeDefinition,
        base: &BaseStats,
        pattern: Arc<AttackPattern>,
    ) -> Self {
        Self::new(
            id,
            side,
            archetype.id,
            archetype.role,
            CombatStats::derive(base, archetype),
            pattern,
        )
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    #[must_use]
    pub fn is_deployed(&self) -> bool {
        self.location.is_some()
    }

    /// Fraction of HP remaining, in `[0, 1]`.
    #[must_use]
    pub fn hp_fraction(&self) -> f64 {
        if self.stats.max_hp <= 0 {
            return 0.0;
        }
        f64::from(self.stats.current_hp) / f64::from(self.stats.max_hp)
    }
}
