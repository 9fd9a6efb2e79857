//! Turn state and published match snapshots.
//!
//! ## TurnState
//!
//! Where the match is: phase, whose turn, how many turns have run, and how
//! much time the active turn has left.
//!
//! ## MatchSnapshot
//!
//! An immutable view of the whole match, published after every transition.
//! Boards and history are `im` structures, so building a snapshot is cheap
//! and it stays valid while the match moves on.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::config::Phase;
use super::entity::UnitId;
use super::rng::GameRngState;
use super::side::{Side, SideMap};
use crate::board::BoardSet;
use crate::rules::MatchScore;
use crate::units::UnitInstance;

/// Progress through the phase and turn sequence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnState {
    /// Current phase.
    pub phase: Phase,

    /// Side that owns the current turn.
    pub active_side: Side,

    /// Global turn number (starts at 1, never resets).
    pub turn: u32,

    /// Turns completed in the current phase.
    pub phase_turns: u32,

    /// Turn limit of the current phase.
    pub turn_limit: u32,

    /// Seconds left on the active turn.
    pub remaining_secs: f64,
}

impl TurnState {
    /// Turn 1 of the deployment phase.
    #[must_use]
    pub fn new(first_side: Side, turn_limit: u32, turn_secs: f64) -> Self {
        Self {
            phase: Phase::Deployment,
            active_side: first_side,
            turn: 1,
            phase_turns: 0,
            turn_limit,
            remaining_secs: turn_secs,
        }
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.phase == Phase::Result
    }

    /// Check whether the current phase has used up its turns.
    #[must_use]
    pub fn limit_reached(&self) -> bool {
        self.phase_turns >= self.turn_limit
    }

    /// Turns left in the current phase.
    #[must_use]
    pub fn turns_remaining(&self) -> u32 {
        self.turn_limit.saturating_sub(self.phase_turns)
    }
}

/// Immutable view of a match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub turn: TurnState,
    pub boards: BoardSet,
    /// Units still waiting to be deployed, front first.
    pub queues: SideMap<Vec<UnitId>>,
    /// Score if the match ended now.
    pub projected_score: MatchScore,
    pub history: Vector<ActionRecord>,
    /// Units removed by lethal hits, in order of defeat.
    pub defeated: Vector<UnitInstance>,
    /// Final score once the match has reached `Result`.
    pub result: Option<MatchScore>,
    /// Crit stream position, for reproducing the rest of the match.
    pub combat_rng: GameRngState,
}

impl MatchSnapshot {
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.turn.phase
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.result.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_state_limits() {
        let mut state = TurnState::new(Side::Player, 3, 30.0);
        assert_eq!(state.turn, 1);
        assert_eq!(state.turns_remaining(), 3);
        assert!(!state.limit_reached());

        state.phase_turns = 3;
        assert!(state.limit_reached());
        assert_eq!(state.turns_remaining(), 0);
        assert!(!state.is_terminal());

        state.phase = Phase::Result;
        assert!(state.is_terminal());
    }

    #[test]
    fn test_turn_state_serialization() {
        let state = TurnState::new(Side::Ai, 40, 12.5);
        let bytes = bincode::serialize(&state).unwrap();
        let decoded: TurnState = bincode::deserialize(&bytes).unwrap();
        assert_eq!(state, decoded);
    }
}
