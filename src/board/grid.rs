//! A single 6×3 placement grid.
//!
//! The board is a pure occupancy store: it knows which unit sits in which
//! cell and nothing about turns, rosters or phases. Cells are kept in an
//! `im::Vector` so cloning a board for a snapshot is O(1).
//!
//! ## Scan order
//!
//! Every iterator walks cells column by column: `x` ascending, then `y`
//! ascending within a column. Strategists rely on this order to break ties.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{BoardId, EngineError, Result, Side, UnitId, BOARD_HEIGHT, BOARD_WIDTH};
use crate::units::UnitInstance;

/// A cell coordinate. May be out of bounds; boards validate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// This position shifted by `(dx, dy)`.
    #[must_use]
    pub const fn translate(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Like `translate`, but `None` if either coordinate overflows.
    #[must_use]
    pub fn checked_translate(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A cell on a specific board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub board: BoardId,
    pub position: Position,
}

impl Location {
    #[must_use]
    pub const fn new(board: BoardId, position: Position) -> Self {
        Self { board, position }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.board, self.position)
    }
}

/// One board: a fixed grid of optional units.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    id: BoardId,
    cells: Vector<Option<UnitInstance>>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new(id: BoardId) -> Self {
        let cells: Vector<Option<UnitInstance>> =
            std::iter::repeat(None).take((BOARD_WIDTH * BOARD_HEIGHT) as usize).collect();
        Self { id, cells }
    }

    #[must_use]
    pub fn id(&self) -> BoardId {
        self.id
    }

    #[must_use]
    pub fn width(&self) -> i32 {
        BOARD_WIDTH
    }

    #[must_use]
    pub fn height(&self) -> i32 {
        BOARD_HEIGHT
    }

    /// Total number of cells.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Geometric center of the board (not necessarily a cell).
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (
            f64::from(BOARD_WIDTH - 1) / 2.0,
            f64::from(BOARD_HEIGHT - 1) / 2.0,
        )
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.is_valid(pos)
            .then(|| (pos.x * BOARD_HEIGHT + pos.y) as usize)
    }

    /// Check whether `(x, y)` lies on the board.
    #[must_use]
    pub fn is_valid_position(&self, x: i32, y: i32) -> bool {
        (0..BOARD_WIDTH).contains(&x) && (0..BOARD_HEIGHT).contains(&y)
    }

    /// Check whether a position lies on the board.
    #[must_use]
    pub fn is_valid(&self, pos: Position) -> bool {
        self.is_valid_position(pos.x, pos.y)
    }

    /// Check whether `(x, y)` holds a unit. Out-of-bounds cells are never occupied.
    #[must_use]
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.unit_at(x, y).is_some()
    }

    /// The unit at `(x, y)`, if any.
    #[must_use]
    pub fn unit_at(&self, x: i32, y: i32) -> Option<&UnitInstance> {
        self.get(Position::new(x, y))
    }

    /// The unit at a position, if any.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&UnitInstance> {
        self.index(pos)
            .and_then(|i| self.cells.get(i))
            .and_then(Option::as_ref)
    }

    /// Mutable access to the unit at a position.
    pub fn get_mut(&mut self, pos: Position) -> Option<&mut UnitInstance> {
        let i = self.index(pos)?;
        self.cells.get_mut(i).and_then(Option::as_mut)
    }

    /// Put a unit on `(x, y)` and record its location.
    ///
    /// Fails with `OutOfBounds` for invalid coordinates and `CellOccupied`
    /// if another unit is already there.
    pub fn place(&mut self, mut unit: UnitInstance, x: i32, y: i32) -> Result<()> {
        let pos = Position::new(x, y);
        let index = self.index(pos).ok_or(EngineError::OutOfBounds(pos))?;
        if self.cells[index].is_some() {
            return Err(EngineError::CellOccupied(pos));
        }

        unit.location = Some(Location::new(self.id, pos));
        self.cells.set(index, Some(unit));
        Ok(())
    }

    /// Take the unit off `(x, y)`. The unit keeps its last known location.
    pub fn remove(&mut self, x: i32, y: i32) -> Option<UnitInstance> {
        let index = self.index(Position::new(x, y))?;
        self.cells.set(index, None)
    }

    /// Count alive units belonging to `side`.
    #[must_use]
    pub fn count_by_side(&self, side: Side) -> usize {
        self.units()
            .filter(|(_, unit)| unit.side == side && unit.alive)
            .count()
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Where a unit sits on this board.
    #[must_use]
    pub fn find(&self, id: UnitId) -> Option<Position> {
        self.units()
            .find(|(_, unit)| unit.id == id)
            .map(|(pos, _)| pos)
    }

    /// Mutable access to a unit by id.
    pub fn unit_mut(&mut self, id: UnitId) -> Option<&mut UnitInstance> {
        let pos = self.find(id)?;
        self.get_mut(pos)
    }

    /// Every position in scan order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        (0..BOARD_WIDTH).flat_map(|x| (0..BOARD_HEIGHT).map(move |y| Position::new(x, y)))
    }

    /// Occupied cells with their units, in scan order.
    pub fn units(&self) -> impl Iterator<Item = (Position, &UnitInstance)> + '_ {
        self.positions()
            .filter_map(move |pos| self.get(pos).map(|unit| (pos, unit)))
    }

    /// Empty cells in scan order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions().filter(move |pos| self.get(*pos).is_none())
    }
}
