//! The pair of boards used by one match.

use serde::{Deserialize, Serialize};

use super::grid::{Board, Location, Position};
use crate::core::{BoardId, Side, UnitId};
use crate::units::UnitInstance;

/// Boards A and B.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSet {
    boards: [Board; 2],
}

impl Default for BoardSet {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardSet {
    /// Two empty boards.
    #[must_use]
    pub fn new() -> Self {
        Self {
            boards: [Board::new(BoardId::A), Board::new(BoardId::B)],
        }
    }

    #[must_use]
    pub fn board(&self, id: BoardId) -> &Board {
        &self.boards[id.index()]
    }

    pub fn board_mut(&mut self, id: BoardId) -> &mut Board {
        &mut self.boards[id.index()]
    }

    /// Both boards, A first.
    pub fn iter(&self) -> impl Iterator<Item = &Board> {
        self.boards.iter()
    }

    /// Locate a unit on either board.
    #[must_use]
    pub fn locate(&self, id: UnitId) -> Option<Location> {
        self.iter()
            .find_map(|board| board.find(id).map(|pos| Location::new(board.id(), pos)))
    }

    /// Look a unit up on either board.
    #[must_use]
    pub fn unit(&self, id: UnitId) -> Option<&UnitInstance> {
        let location = self.locate(id)?;
        self.board(location.board).get(location.position)
    }

    /// A unit together with the board it stands on.
    #[must_use]
    pub fn find_unit(&self, id: UnitId) -> Option<(BoardId, &UnitInstance)> {
        self.iter().find_map(|board| {
            board
                .find(id)
                .and_then(|pos| board.get(pos))
                .map(|unit| (board.id(), unit))
        })
    }

    /// Living units of `side` across both boards.
    #[must_use]
    pub fn living_count(&self, side: Side) -> usize {
        self.iter().map(|board| board.count_by_side(side)).sum()
    }

    /// Occupied cells across both boards.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.iter().map(Board::occupied_count).sum()
    }

    /// Check whether any cell on either board is free.
    #[must_use]
    pub fn has_empty_cell(&self) -> bool {
        self.iter().any(|board| board.empty_cells().next().is_some())
    }

    /// Every empty cell, board A first, each board in scan order.
    pub fn empty_locations(&self) -> impl Iterator<Item = Location> + '_ {
        self.iter().flat_map(|board| {
            let id = board.id();
            board.empty_cells().map(move |pos| Location::new(id, pos))
        })
    }

    /// Every unit of `side`, board A first, each board in scan order.
    pub fn units_of(&self, side: Side) -> impl Iterator<Item = (BoardId, Position, &UnitInstance)> + '_ {
        self.iter().flat_map(move |board| {
            let id = board.id();
            board
                .units()
                .filter(move |(_, unit)| unit.side == side && unit.alive)
                .map(move |(pos, unit)| (id, pos, unit))
        })
    }
}
