//! AI configuration parameters.

use serde::{Deserialize, Serialize};

use super::heuristic::HeuristicStrategist;
use super::random::RandomStrategist;
use super::strategist::Strategist;
use crate::core::GameRng;

/// How strong the AI plays. Each level scores everything the one below does.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Difficulty {
    /// Uniformly random legal moves.
    Easy,
    /// Deterministic heuristic scoring.
    #[default]
    Normal,
    /// Adds board control, danger and strategic-cell terms.
    Hard,
    /// Also avoids crowding allies together.
    Expert,
}

/// Strategist configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub difficulty: Difficulty,

    /// Penalty per cell of Euclidean distance from the board center.
    pub center_weight: f64,

    /// Bonus per own unit (counting the new one) on a board the side
    /// leads or contests.
    pub density_weight: f64,

    /// Bonus for standing in the role's preferred column band.
    /// Melee favors the opposing edge, ranged the far edge.
    pub rank_weight: f64,

    /// Bonus per opposing unit inside the pattern from the candidate cell.
    pub threat_weight: f64,

    /// Hard and up: weight of the board control term.
    pub control_weight: f64,

    /// Hard and up: penalty per point of opposing attack covering the cell.
    pub danger_weight: f64,

    /// Hard and up: bonus for corners and the center cell.
    pub strategic_weight: f64,

    /// Expert: penalty when more than two allies already surround the cell.
    pub crowding_weight: f64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            center_weight: 1.0,
            density_weight: 0.5,
            rank_weight: 2.0,
            threat_weight: 2.0,
            control_weight: 3.0,
            danger_weight: 1.5,
            strategic_weight: 2.5,
            crowding_weight: 1.0,
        }
    }
}

impl AiConfig {
    /// Default weights at the given difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    #[must_use]
    pub fn with_center_weight(mut self, weight: f64) -> Self {
        self.center_weight = weight;
        self
    }

    #[must_use]
    pub fn with_density_weight(mut self, weight: f64) -> Self {
        self.density_weight = weight;
        self
    }

    #[must_use]
    pub fn with_rank_weight(mut self, weight: f64) -> Self {
        self.rank_weight = weight;
        self
    }

    #[must_use]
    pub fn with_threat_weight(mut self, weight: f64) -> Self {
        self.threat_weight = weight;
        self
    }

    #[must_use]
    pub fn with_control_weight(mut self, weight: f64) -> Self {
        self.control_weight = weight;
        self
    }

    #[must_use]
    pub fn with_danger_weight(mut self, weight: f64) -> Self {
        self.danger_weight = weight;
        self
    }

    #[must_use]
    pub fn with_strategic_weight(mut self, weight: f64) -> Self {
        self.strategic_weight = weight;
        self
    }

    #[must_use]
    pub fn with_crowding_weight(mut self, weight: f64) -> Self {
        self.crowding_weight = weight;
        self
    }
}

/// Build the strategist for a configuration.
///
/// `rng` is only consumed by randomized strategists.
#[must_use]
pub fn strategist_for(config: &AiConfig, rng: GameRng) -> Box<dyn Strategist> {
    match config.difficulty {
        Difficulty::Easy => Box::new(RandomStrategist::new(rng)),
        Difficulty::Normal | Difficulty::Hard | Difficulty::Expert => {
            Box::new(HeuristicStrategist::new(config.clone()))
        }
    }
}
