//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use tile_tactics::coordinator::MatchBuilder;
use tile_tactics::core::{MatchConfig, Side, UnitId};
use tile_tactics::patterns::{AttackPattern, PatternShape};
use tile_tactics::units::{
    ArchetypeDefinition, ArchetypeId, ArchetypeRegistry, BaseStats, CombatStats, Role, Roster,
    RosterEntry, UnitInstance,
};

/// Archetype with a range-1 cross and neutral multipliers.
pub const SOLDIER: ArchetypeId = ArchetypeId(0);

/// Registry holding only `SOLDIER`.
pub fn soldier_registry() -> ArchetypeRegistry {
    ArchetypeRegistry::from_definitions([ArchetypeDefinition::new(SOLDIER, "Soldier")
        .with_role(Role::Melee)
        .with_pattern(PatternShape::Cross { range: 1 })])
    .unwrap()
}

/// `count` soldiers with 100 HP, 15 attack, 5 defense and no crits.
pub fn soldiers(count: usize) -> Roster {
    Roster::from_entries((0..count).map(|_| {
        RosterEntry::new(SOLDIER).with_base(BaseStats::new(100, 15, 5).with_crit(0.0, 1.5))
    }))
}

/// A two-human match of soldiers.
pub fn soldier_match(config: MatchConfig, player: usize, ai: usize) -> MatchBuilder {
    MatchBuilder::new(config)
        .with_registry(soldier_registry())
        .with_roster(Side::Player, soldiers(player))
        .with_roster(Side::Ai, soldiers(ai))
}

/// A free-standing unit for board-level tests.
pub fn unit(id: u32, side: Side, shape: &PatternShape) -> UnitInstance {
    UnitInstance::new(
        UnitId(id),
        side,
        SOLDIER,
        Role::Melee,
        CombatStats::new(100, 15, 5),
        Arc::new(AttackPattern::from_shape("test", shape)),
    )
}

/// Install a `tracing` subscriber once, honoring `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
