//! Match configuration types.
//!
//! - `BoardId`: which of the two boards ("A" or "B")
//! - `Phase`: the forward-only phase sequence of a match
//! - `MatchConfig`: roster bounds, timers and turn limits
//!
//! Board dimensions are fixed at 6×3; everything else is configured per match.

use serde::{Deserialize, Serialize};

use super::Side;

/// Width of every board, in cells.
pub const BOARD_WIDTH: i32 = 6;

/// Height of every board, in cells.
pub const BOARD_HEIGHT: i32 = 3;

/// Board identifier. There are exactly two boards per match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardId {
    /// Board "A".
    A,
    /// Board "B".
    B,
}

impl BoardId {
    /// Both boards, in scan order.
    pub const ALL: [BoardId; 2] = [BoardId::A, BoardId::B];

    /// Storage index (A = 0, B = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            BoardId::A => 0,
            BoardId::B => 1,
        }
    }
}

impl std::fmt::Display for BoardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardId::A => write!(f, "Board A"),
            BoardId::B => write!(f, "Board B"),
        }
    }
}

/// Match phase. Phases only move forward: Deployment → Combat → Result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Sides alternately place units.
    Deployment,
    /// Sides alternately attack with placed units.
    Combat,
    /// Terminal; the match result is fixed.
    Result,
}

impl Phase {
    /// The phase that follows this one, or `None` for `Result`.
    #[must_use]
    pub const fn next(self) -> Option<Phase> {
        match self {
            Phase::Deployment => Some(Phase::Combat),
            Phase::Combat => Some(Phase::Result),
            Phase::Result => None,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Deployment => write!(f, "Deployment"),
            Phase::Combat => write!(f, "Combat"),
            Phase::Result => write!(f, "Result"),
        }
    }
}

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Maximum units per side roster. Longer rosters are truncated.
    pub max_roster_size: usize,

    /// Seconds available for each turn before it is forced to pass.
    pub turn_duration_secs: f64,

    /// Maximum number of turns (both sides combined) in the deployment phase.
    /// Units still queued when it is reached are forfeited.
    pub deployment_turn_limit: u32,

    /// Maximum number of placements (both sides, both boards combined).
    pub max_total_placements: usize,

    /// Maximum number of turns (both sides combined) in the combat phase.
    pub combat_turn_limit: u32,

    /// Side that takes the first turn of each phase.
    pub first_side: Side,

    /// Seed for crit rolls and randomized strategists.
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl MatchConfig {
    /// Standard mode: 10 units per side.
    #[must_use]
    pub fn standard() -> Self {
        Self::for_roster_size(10)
    }

    /// Extended mode: 18 units per side, enough to fill both boards.
    #[must_use]
    pub fn extended() -> Self {
        Self::for_roster_size(18)
    }

    /// Configuration sized for the given roster bound.
    ///
    /// The deployment turn limit leaves room for every unit to time out once
    /// and still be placed later in the phase.
    #[must_use]
    pub fn for_roster_size(max_roster_size: usize) -> Self {
        Self {
            max_roster_size,
            turn_duration_secs: 30.0,
            deployment_turn_limit: (max_roster_size as u32) * 4,
            max_total_placements: (2 * BOARD_WIDTH * BOARD_HEIGHT) as usize,
            combat_turn_limit: 20,
            first_side: Side::Player,
            seed: 42,
        }
    }

    /// Set the roster bound.
    #[must_use]
    pub fn with_max_roster_size(mut self, size: usize) -> Self {
        self.max_roster_size = size;
        self
    }

    /// Set the per-turn duration in seconds.
    #[must_use]
    pub fn with_turn_duration(mut self, secs: f64) -> Self {
        assert!(secs > 0.0, "Turn duration must be positive");
        self.turn_duration_secs = secs;
        self
    }

    /// Set the deployment turn limit.
    #[must_use]
    pub fn with_deployment_turn_limit(mut self, limit: u32) -> Self {
        self.deployment_turn_limit = limit;
        self
    }

    /// Set the total placement limit.
    #[must_use]
    pub fn with_max_total_placements(mut self, limit: usize) -> Self {
        self.max_total_placements = limit;
        self
    }

    /// Set the combat turn limit.
    #[must_use]
    pub fn with_combat_turn_limit(mut self, limit: u32) -> Self {
        self.combat_turn_limit = limit;
        self
    }

    /// Set which side opens each phase.
    #[must_use]
    pub fn with_first_side(mut self, side: Side) -> Self {
        self.first_side = side;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Turn limit for a phase (`Result` has none, reported as 0).
    #[must_use]
    pub fn turn_limit(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Deployment => self.deployment_turn_limit,
            Phase::Combat => self.combat_turn_limit,
            Phase::Result => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_id_display() {
        assert_eq!(format!("{}", BoardId::A), "Board A");
        assert_eq!(format!("{}", BoardId::B), "Board B");
        assert_eq!(BoardId::B.index(), 1);
    }

    #[test]
    fn test_phase_moves_forward() {
        assert_eq!(Phase::Deployment.next(), Some(Phase::Combat));
        assert_eq!(Phase::Combat.next(), Some(Phase::Result));
        assert_eq!(Phase::Result.next(), None);
        assert!(Phase::Deployment < Phase::Combat);
        assert!(Phase::Combat < Phase::Result);
    }

    #[test]
    fn test_presets() {
        let standard = MatchConfig::standard();
        assert_eq!(standard.max_roster_size, 10);
        assert_eq!(standard.deployment_turn_limit, 40);
        assert_eq!(standard.max_total_placements, 36);
        assert_eq!(standard.combat_turn_limit, 20);
        assert_eq!(standard.first_side, Side::Player);

        let extended = MatchConfig::extended();
        assert_eq!(extended.max_roster_size, 18);
        assert_eq!(extended.deployment_turn_limit, 72);
    }

    #[test]
    fn test_builder() {
        let config = MatchConfig::default()
            .with_max_roster_size(3)
            .with_turn_duration(5.0)
            .with_combat_turn_limit(8)
            .with_first_side(Side::Ai)
            .with_seed(7);

        assert_eq!(config.max_roster_size, 3);
        assert_eq!(config.turn_duration_secs, 5.0);
        assert_eq!(config.turn_limit(Phase::Combat), 8);
        assert_eq!(config.turn_limit(Phase::Result), 0);
        assert_eq!(config.first_side, Side::Ai);
        assert_eq!(config.seed, 7);
    }

    #[test]
    #[should_panic(expected = "Turn duration must be positive")]
    fn test_zero_turn_duration() {
        let _ = MatchConfig::default().with_turn_duration(0.0);
    }

    #[test]
    fn test_config_serialization() {
        let config = MatchConfig::extended().with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
