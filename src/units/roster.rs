//! Roster data supplied from outside the engine.
//!
//! A roster is an ordered list of `RosterEntry` values. The engine takes at
//! most `max_roster_size` of them, in order; the rest are dropped.

use serde::{Deserialize, Serialize};

use super::archetype::ArchetypeId;

/// Per-unit base statistics before archetype multipliers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseStats {
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
    pub crit_rate: f64,
    pub crit_damage: f64,
}

impl Default for BaseStats {
    fn default() -> Self {
        Self::new(100, 10, 5)
    }
}

impl BaseStats {
    /// Base stats with default speed and crit values.
    #[must_use]
    pub const fn new(hp: i32, attack: i32, defense: i32) -> Self {
        Self {
            hp,
            attack,
            defense,
            speed: 10,
            crit_rate: 0.05,
            crit_damage: 1.5,
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

/// One unit a side brings to the match.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub archetype: ArchetypeId,
    #[serde(default)]
    pub base: BaseStats,
}

impl RosterEntry {
    #[must_use]
    pub fn new(archetype: ArchetypeId) -> Self {
        Self {
            archetype,
            base: BaseStats::default(),
        }
    }

    #[must_use]
    pub fn with_base(mut self, base: BaseStats) -> Self {
        self.base = base;
        self
    }
}

/// Ordered roster for one side.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = RosterEntry>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// A roster of default-stat units of the given archetypes.
    #[must_use]
    pub fn of(archetypes: impl IntoIterator<Item = ArchetypeId>) -> Self {
        Self::from_entries(archetypes.into_iter().map(RosterEntry::new))
    }

    pub fn push(&mut self, entry: RosterEntry) {
        self.entries.push(entry);
    }

    /// Keep the first `max` entries. Returns how many were dropped.
    pub fn truncate(&mut self, max: usize) -> usize {
        let dropped = self.entries.len().saturating_sub(max);
        self.entries.truncate(max);
        dropped
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RosterEntry> {
        self.entries.iter()
    }
}
