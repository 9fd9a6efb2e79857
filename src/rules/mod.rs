//! Match rules: placement legality, combat resolution and scoring.
//!
//! None of these types own turn order. The coordinator decides when they run;
//! they only decide what an action does to a board.

mod combat;
mod placement;
mod scoring;

pub use combat::{CombatResolver, DamageEvent};
pub use placement::PlacementEngine;
pub use scoring::{BoardScore, BoardWinner, MatchOutcome, MatchScore, ScoreEvaluator};
