//! AI decision making for deployment and combat.
//!
//! A side is AI-controlled when the coordinator holds a `Strategist` for it.
//! `AiConfig::difficulty` selects the implementation:
//!
//! - `Easy`: `RandomStrategist`
//! - `Normal`: `HeuristicStrategist`
//! - `Hard`, `Expert`: `HeuristicStrategist` with extra positional terms

mod config;
mod heuristic;
mod random;
mod strategist;

pub use config::{strategist_for, AiConfig, Difficulty};
pub use heuristic::{
    allies_nearby, danger, is_strategic, rank_preference, tile_control, HeuristicStrategist,
};
pub use random::RandomStrategist;
pub use strategist::{legal_attacks, AttackChoice, Strategist};
