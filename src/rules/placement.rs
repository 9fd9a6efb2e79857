//! Deployment rules.
//!
//! Placement is legal on any valid, empty cell of either board during the
//! deployment phase. Placing a unit deals no damage; the engine only reports
//! which opposing units now sit inside the new unit's pattern.

use crate::board::{Board, Position};
use crate::core::{EngineError, Phase, Result};
use crate::patterns::resolve_targets;
use crate::units::UnitInstance;

/// Validates and performs placements.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlacementEngine;

impl PlacementEngine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Check whether a unit may be placed on `(x, y)` of `board` in `phase`.
    #[must_use]
    pub fn validate(&self, board: &Board, x: i32, y: i32, phase: Phase) -> bool {
        self.check(board, x, y, phase).is_ok()
    }

    /// Like `validate`, but reports the reason for a rejection.
    pub fn check(&self, board: &Board, x: i32, y: i32, phase: Phase) -> Result<()> {
        if phase != Phase::Deployment {
            return Err(EngineError::WrongPhase {
                expected: Phase::Deployment,
                actual: phase,
            });
        }
        if !board.is_valid_position(x, y) {
            return Err(EngineError::OutOfBounds(Position::new(x, y)));
        }
        if board.is_occupied(x, y) {
            return Err(EngineError::CellOccupied(Position::new(x, y)));
        }
        Ok(())
    }

    /// Place `unit` on `(x, y)`.
    ///
    /// Returns the opposing units' cells now inside the unit's pattern, in
    /// scan order. Fails with `InvalidPlacement` if the cell is not available.
    pub fn execute(
        &self,
        board: &mut Board,
        x: i32,
        y: i32,
        unit: UnitInstance,
    ) -> Result<Vec<Position>> {
        if !self.validate(board, x, y, Phase::Deployment) {
            return Err(EngineError::InvalidPlacement {
                board: board.id(),
                position: Position::new(x, y),
            });
        }

        let side = unit.side;
        let pattern = unit.pattern.clone();
        board.place(unit, x, y)?;

        let threatened = resolve_targets(&pattern, x, y, board)
            .into_iter()
            .filter(|pos| board.get(*pos).is_some_and(|other| other.side != side))
            .collect();
        Ok(threatened)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BoardId, Side};
    use crate::units::test_support::unit;

    #[test]
    fn test_validate() {
        let engine = PlacementEngine::new();
        let mut board = Board::new(BoardId::A);
        board.place(unit(1, Side::Ai), 0, 0).unwrap();

        assert!(engine.validate(&board, 1, 0, Phase::Deployment));
        assert!(!engine.validate(&board, 0, 0, Phase::Deployment));
        assert!(!engine.validate(&board, 6, 0, Phase::Deployment));
        assert!(!engine.validate(&board, 1, 0, Phase::Combat));
    }

    #[test]
    fn test_check_reports_reason() {
        let engine = PlacementEngine::new();
        let mut board = Board::new(BoardId::A);
        board.place(unit(1, Side::Ai), 2, 2).unwrap();

        assert_eq!(
            engine.check(&board, 2, 2, Phase::Deployment),
            Err(EngineError::CellOccupied(Position::new(2, 2)))
        );
        assert_eq!(
            engine.check(&board, -1, 0, Phase::Deployment),
            Err(EngineError::OutOfBounds(Position::new(-1, 0)))
        );
        assert_eq!(
            engine.check(&board, 0, 0, Phase::Result),
            Err(EngineError::WrongPhase {
                expected: Phase::Deployment,
                actual: Phase::Result
            })
        );
    }

    #[test]
    fn test_execute_highlights_opponents_only() {
        let engine = PlacementEngine::new();
        let mut board = Board::new(BoardId::A);
        board.place(unit(1, Side::Ai), 1, 1).unwrap();
        board.place(unit(2, Side::Player), 3, 1).unwrap();
        board.place(unit(3, Side::Ai), 2, 2).unwrap();

        let threatened = engine.execute(&mut board, 2, 1, unit(4, Side::Player)).unwrap();

        assert_eq!(threatened, vec![Position::new(1, 1), Position::new(2, 2)]);
        assert_eq!(board.unit_at(2, 1).unwrap().id.raw(), 4);
        assert_eq!(board.unit_at(1, 1).unwrap().stats.current_hp, 100);
    }

    #[test]
    fn test_execute_rejects_occupied_cell() {
        let engine = PlacementEngine::new();
        let mut board = Board::new(BoardId::B);
        board.place(unit(1, Side::Ai), 4, 0).unwrap();

        let err = engine.execute(&mut board, 4, 0, unit(2, Side::Player)).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidPlacement {
                board: BoardId::B,
                position: Position::new(4, 0)
            }
        );
        assert_eq!(board.occupied_count(), 1);
    }
}
