//! Match scoring.
//!
//! Each board is won by the side with strictly more living units on it.
//! The Player earns one point per board won:
//!
//! | Points | Outcome |
//! |---|---|
//! | 2 | Victory |
//! | 1 | Draw |
//! | 0 | Defeat |
//!
//! Scoring is pure and can be evaluated at any time for a live projection.

use serde::{Deserialize, Serialize};

use crate::board::{Board, BoardSet};
use crate::core::{BoardId, Side};

/// Winner of a single board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardWinner {
    Player,
    Ai,
    Tie,
}

impl BoardWinner {
    /// The winning side, or `None` on a tie.
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            BoardWinner::Player => Some(Side::Player),
            BoardWinner::Ai => Some(Side::Ai),
            BoardWinner::Tie => None,
        }
    }
}

/// Final classification from the Player's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    Victory,
    Draw,
    Defeat,
}

impl MatchOutcome {
    #[must_use]
    pub const fn from_points(points: u8) -> Self {
        match points {
            2.. => MatchOutcome::Victory,
            1 => MatchOutcome::Draw,
            0 => MatchOutcome::Defeat,
        }
    }
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchOutcome::Victory => write!(f, "Victory"),
            MatchOutcome::Draw => write!(f, "Draw"),
            MatchOutcome::Defeat => write!(f, "Defeat"),
        }
    }
}

/// Unit counts and winner of one board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardScore {
    pub board: BoardId,
    pub player_units: usize,
    pub ai_units: usize,
    pub winner: BoardWinner,
}

/// Aggregated score of both boards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScore {
    pub boards: [BoardScore; 2],
    pub player_points: u8,
    pub outcome: MatchOutcome,
}

impl MatchScore {
    #[must_use]
    pub fn board(&self, id: BoardId) -> &BoardScore {
        &self.boards[id.index()]
    }
}

/// Computes board winners and match results.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScoreEvaluator;

impl ScoreEvaluator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Living-unit counts and winner of one board.
    #[must_use]
    pub fn board_score(&self, board: &Board) -> BoardScore {
        let player_units = board.count_by_side(Side::Player);
        let ai_units = board.count_by_side(Side::Ai);
        let winner = match player_units.cmp(&ai_units) {
            std::cmp::Ordering::Greater => BoardWinner::Player,
            std::cmp::Ordering::Less => BoardWinner::Ai,
            std::cmp::Ordering::Equal => BoardWinner::Tie,
        };
        BoardScore {
            board: board.id(),
            player_units,
            ai_units,
            winner,
        }
    }

    #[must_use]
    pub fn board_winner(&self, board: &Board) -> BoardWinner {
        self.board_score(board).winner
    }

    /// Score both boards.
    #[must_use]
    pub fn match_result(&self, board_a: &Board, board_b: &Board) -> MatchScore {
        let boards = [self.board_score(board_a), self.board_score(board_b)];
        let player_points = boards
            .iter()
            .filter(|score| score.winner == BoardWinner::Player)
            .count() as u8;

        MatchScore {
            boards,
            player_points,
            outcome: MatchOutcome::from_points(player_points),
        }
    }

    /// Score a board pair.
    #[must_use]
    pub fn evaluate(&self, boards: &BoardSet) -> MatchScore {
        self.match_result(boards.board(BoardId::A), boards.board(BoardId::B))
    }
}
