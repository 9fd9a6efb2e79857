//! Actions a side can take on its turn.
//!
//! Every turn ends with exactly one recorded action. A turn that runs out of
//! time is recorded as a `Pass` flagged `timed_out`.

use serde::{Deserialize, Serialize};

use super::config::{BoardId, Phase};
use super::entity::UnitId;
use super::side::Side;
use crate::board::Position;

/// A turn action.
///
/// ## Example
///
/// ```
/// use tile_tactics::board::Position;
/// use tile_tactics::core::{Action, BoardId, UnitId};
///
/// let place = Action::place(BoardId::A, 2, 1);
/// let attack = Action::attack(UnitId(3), UnitId(7));
///
/// assert_eq!(place, Action::Place { board: BoardId::A, position: Position::new(2, 1) });
/// assert!(!attack.is_pass());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Deploy the side's next queued unit.
    Place { board: BoardId, position: Position },
    /// Strike `target` with `attacker`.
    Attack { attacker: UnitId, target: UnitId },
    /// End the turn without acting.
    Pass,
}

impl Action {
    #[must_use]
    pub const fn place(board: BoardId, x: i32, y: i32) -> Self {
        Action::Place {
            board,
            position: Position::new(x, y),
        }
    }

    #[must_use]
    pub const fn attack(attacker: UnitId, target: UnitId) -> Self {
        Action::Attack { attacker, target }
    }

    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Action::Pass)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Place { board, position } => write!(f, "place on {} {}", board, position),
            Action::Attack { attacker, target } => write!(f, "{} attacks {}", attacker, target),
            Action::Pass => write!(f, "pass"),
        }
    }
}

/// A completed turn, kept in the match history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The side that owned the turn.
    pub side: Side,

    /// The action taken.
    pub action: Action,

    /// Phase the turn belonged to.
    pub phase: Phase,

    /// Global turn number (starts at 1).
    pub turn: u32,

    /// The turn ended because its timer expired.
    pub timed_out: bool,
}

impl ActionRecord {
    #[must_use]
    pub fn new(side: Side, action: Action, phase: Phase, turn: u32) -> Self {
        Self {
            side,
            action,
            phase,
            turn,
            timed_out: false,
        }
    }

    /// A pass forced by the turn timer.
    #[must_use]
    pub fn timeout(side: Side, phase: Phase, turn: u32) -> Self {
        Self {
            timed_out: true,
            ..Self::new(side, Action::Pass, phase, turn)
        }
    }
}
