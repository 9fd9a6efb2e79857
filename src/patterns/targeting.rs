//! Resolving patterns against a board.

use super::shape::AttackPattern;
use crate::board::{Board, Position};

/// In-bounds cells covered by `pattern` from `origin`, occupied or not.
///
/// Cells come back in board scan order.
pub fn cells_in_range<'a>(
    pattern: &'a AttackPattern,
    origin: Position,
    board: &'a Board,
) -> impl Iterator<Item = Position> + 'a {
    pattern
        .offsets()
        .iter()
        .filter_map(move |offset| origin.checked_translate(offset.dx, offset.dy))
        .filter(move |pos| board.is_valid(*pos))
}

/// Occupied cells covered by `pattern` from `(origin_x, origin_y)`.
///
/// Out-of-bounds offsets are discarded, so the result is always a subset of
/// the board's occupied cells. Cells come back in board scan order.
///
/// ```
/// use tile_tactics::board::{Board, Position};
/// use tile_tactics::core::BoardId;
/// use tile_tactics::patterns::{resolve_targets, AttackPattern, PatternShape};
///
/// let board = Board::new(BoardId::A);
/// let cross = AttackPattern::from_shape("cross", &PatternShape::Cross { range: 1 });
///
/// assert!(resolve_targets(&cross, 2, 1, &board).is_empty());
/// ```
#[must_use]
pub fn resolve_targets(
    pattern: &AttackPattern,
    origin_x: i32,
    origin_y: i32,
    board: &Board,
) -> Vec<Position> {
    cells_in_range(pattern, Position::new(origin_x, origin_y), board)
        .filter(|pos| board.get(*pos).is_some())
        .collect()
}
