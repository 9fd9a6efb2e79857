//! Unit classes, rosters and per-match unit state.
//!
//! - `ArchetypeDefinition`: static class data (role, pattern, multipliers)
//! - `ArchetypeRegistry`: lookup table, with the eight standard jobs
//! - `Roster` / `RosterEntry`: what a side brings to a match
//! - `UnitInstance`: one unit's state during a match

mod archetype;
mod instance;
mod registry;
mod roster;

pub use archetype::{ArchetypeDefinition, ArchetypeId, Role, StatMultipliers};
pub use instance::{CombatStats, UnitInstance};
pub use registry::{jobs, ArchetypeRegistry};
pub use roster::{BaseStats, Roster, RosterEntry};
