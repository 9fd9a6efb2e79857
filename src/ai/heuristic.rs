//! Deterministic heuristic strategist.
//!
//! ## Deployment
//!
//! Every empty cell of board A, then board B, is scored in scan order:
//!
//! ```text
//! score = - center_weight  * distance(cell, board center)
//!         + density_weight * (own + 1)        if own + 1 >= opponent
//!         + rank_weight    * rank preference  (by role, see below)
//!         + threat_weight  * opposing units inside the pattern from cell
//! ```
//!
//! Rank preference is in `[0, 1]`: melee units score 1 on the column nearest
//! the opposing edge, ranged units score 1 on the column farthest from it,
//! support units always score 0. The Player faces the high-x edge and the AI
//! faces x = 0.
//!
//! `Hard` and `Expert` add:
//!
//! ```text
//!         + control_weight   * tile_control(own, opponent)
//!         - danger_weight    * opposing attack whose pattern covers cell
//!         + strategic_weight                  if cell is a corner or the center
//!         - crowding_weight                   if more than 2 allies adjoin cell (Expert)
//! ```
//!
//! `tile_control` rewards extending a lead and strongly rewards reinforcing a
//! board that is behind by three or more.
//!
//! ## Combat
//!
//! Every legal attack is scored by expected damage.
//!
//! In both cases the highest score wins and ties go to the first candidate.

use tracing::debug;

use super::config::{AiConfig, Difficulty};
use super::strategist::{legal_attacks, AttackChoice, Strategist};
use crate::board::{Board, BoardSet, Location, Position};
use crate::core::Side;
use crate::patterns::{cells_in_range, Offset};
use crate::units::{Role, UnitInstance};

/// Scores candidate moves with weighted positional terms.
#[derive(Clone, Debug, Default)]
pub struct HeuristicStrategist {
    config: AiConfig,
}

impl HeuristicStrategist {
    #[must_use]
    pub fn new(config: AiConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// Score placing `unit` on `pos` of `board`.
    #[must_use]
    pub fn deployment_score(
        &self,
        board: &Board,
        pos: Position,
        side: Side,
        unit: &UnitInstance,
    ) -> f64 {
        let own = board.count_by_side(side);
        let opponent = board.count_by_side(side.opponent());

        let (cx, cy) = board.center();
        let distance = (f64::from(pos.x) - cx).hypot(f64::from(pos.y) - cy);

        let density = if own + 1 >= opponent {
            (own + 1) as f64
        } else {
            0.0
        };

        let threats = cells_in_range(&unit.pattern, pos, board)
            .filter(|cell| {
                board
                    .get(*cell)
                    .is_some_and(|other| other.side != side && other.alive)
            })
            .count();

        let mut score = -self.config.center_weight * distance
            + self.config.density_weight * density
            + self.config.rank_weight * rank_preference(unit.role, side, pos.x, board.width())
            + self.config.threat_weight * threats as f64;

        if self.config.difficulty >= Difficulty::Hard {
            score += self.config.control_weight * tile_control(own, opponent)
                - self.config.danger_weight * danger(board, pos, side);
            if is_strategic(pos, board.width(), board.height()) {
                score += self.config.strategic_weight;
            }
        }
        if self.config.difficulty == Difficulty::Expert && allies_nearby(board, pos, side) > 2 {
            score -= self.config.crowding_weight;
        }
        score
    }
}

/// Board control value for a side with `own` units against `opponent`.
#[must_use]
pub fn tile_control(own: usize, opponent: usize) -> f64 {
    let diff = own as f64 - opponent as f64;
    if diff > 0.0 {
        diff * 2.0
    } else if diff < -2.0 {
        -diff * 3.0
    } else {
        0.0
    }
}

/// Corners and the center cell.
#[must_use]
pub fn is_strategic(pos: Position, width: i32, height: i32) -> bool {
    let corner = (pos.x == 0 || pos.x == width - 1) && (pos.y == 0 || pos.y == height - 1);
    corner || (pos.x == width / 2 && pos.y == height / 2)
}

/// Total attack of living opposing units whose pattern covers `pos`.
#[must_use]
pub fn danger(board: &Board, pos: Position, side: Side) -> f64 {
    board
        .units()
        .filter(|(at, enemy)| {
            enemy.side != side
                && enemy.alive
                && enemy.pattern.contains(Offset::new(pos.x - at.x, pos.y - at.y))
        })
        .map(|(_, enemy)| f64::from(enemy.stats.attack))
        .sum()
}

/// Living allies in the eight cells around `pos`.
#[must_use]
pub fn allies_nearby(board: &Board, pos: Position, side: Side) -> usize {
    board
        .units()
        .filter(|(at, ally)| {
            ally.side == side
                && ally.alive
                && *at != pos
                && (at.x - pos.x).abs() <= 1
                && (at.y - pos.y).abs() <= 1
        })
        .count()
}

/// Positional preference of a role for column `x`, in `[0, 1]`.
#[must_use]
pub fn rank_preference(role: Role, side: Side, x: i32, width: i32) -> f64 {
    if width <= 1 {
        return 0.0;
    }
    let opposing_edge = match side {
        Side::Player => width - 1,
        Side::Ai => 0,
    };
    let closeness = 1.0 - f64::from((x - opposing_edge).abs()) / f64::from(width - 1);

    match role {
        Role::Melee => closeness,
        Role::Ranged => 1.0 - closeness,
        Role::Support => 0.0,
    }
}

impl Strategist for HeuristicStrategist {
    fn name(&self) -> &str {
        "heuristic"
    }

    fn choose_deployment(
        &mut self,
        boards: &BoardSet,
        side: Side,
        unit: &UnitInstance,
    ) -> Option<Location> {
        let mut best: Option<(Location, f64)> = None;

        for board in boards.iter() {
            for pos in board.empty_cells() {
                let score = self.deployment_score(board, pos, side, unit);
                if best.map_or(true, |(_, top)| score > top) {
                    best = Some((Location::new(board.id(), pos), score));
                }
            }
        }

        if let Some((location, score)) = best {
            debug!(%side, unit = %unit.id, %location, score, "heuristic deployment");
        }
        best.map(|(location, _)| location)
    }

    fn choose_attack(&mut self, boards: &BoardSet, side: Side) -> Option<AttackChoice> {
        let mut best: Option<AttackChoice> = None;

        for option in legal_attacks(boards, side) {
            if best.map_or(true, |top| option.score > top.score) {
                best = Some(option);
            }
        }

        if let Some(choice) = &best {
            debug!(
                %side,
                attacker = %choice.attacker,
                target = %choice.target,
                expected = choice.score,
                "heuristic attack"
            );
        }
        best
    }
}
