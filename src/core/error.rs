//! Engine errors.
//!
//! Every variant is a local, recoverable rejection of one proposed action or
//! setup step. The coordinator returns it to the caller and leaves match state
//! untouched. Turn timeouts are not errors.

use thiserror::Error;

use super::{BoardId, Phase, Side, UnitId};
use crate::board::Position;
use crate::units::ArchetypeId;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("position {0} is outside the board")]
    OutOfBounds(Position),

    #[error("cell {0} is already occupied")]
    CellOccupied(Position),

    #[error("cannot place a unit on {board} at {position}")]
    InvalidPlacement { board: BoardId, position: Position },

    #[error("it is {active}'s turn, not {side}'s")]
    NotYourTurn { side: Side, active: Side },

    #[error("action requires the {expected} phase, match is in {actual}")]
    WrongPhase { expected: Phase, actual: Phase },

    #[error("{attacker} cannot reach {target}")]
    UnreachableTarget { attacker: UnitId, target: UnitId },

    #[error("{0} has been defeated")]
    DeadUnitReference(UnitId),

    #[error("{0} is not part of this match")]
    UnknownUnit(UnitId),

    #[error("no archetype registered for {0}")]
    UnknownArchetype(ArchetypeId),

    #[error("{0} is already registered")]
    DuplicateArchetype(ArchetypeId),

    #[error("{0} has no units left to deploy")]
    NothingToDeploy(Side),
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EngineError::NotYourTurn {
            side: Side::Player,
            active: Side::Ai,
        };
        assert_eq!(err.to_string(), "it is AI's turn, not Player's");

        let err = EngineError::CellOccupied(Position::new(2, 1));
        assert_eq!(err.to_string(), "cell (2, 1) is already occupied");

        let err = EngineError::WrongPhase {
            expected: Phase::Combat,
            actual: Phase::Deployment,
        };
        assert_eq!(
            err.to_string(),
            "action requires the Combat phase, match is in Deployment"
        );
    }

    #[test]
    fn test_errors_compare() {
        assert_eq!(
            EngineError::DeadUnitReference(UnitId(3)),
            EngineError::DeadUnitReference(UnitId(3))
        );
        assert_ne!(
            EngineError::DeadUnitReference(UnitId(3)),
            EngineError::UnknownUnit(UnitId(3))
        );
    }
}
