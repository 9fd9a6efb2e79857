//! Core engine types: ids, sides, configuration, actions, state, RNG, errors.
//!
//! Everything here is independent of the placement and combat rules. Those
//! live in `rules` and consume these types.

pub mod action;
pub mod config;
pub mod entity;
pub mod error;
pub mod rng;
pub mod side;
pub mod state;

pub use action::{Action, ActionRecord};
pub use config::{BoardId, MatchConfig, Phase, BOARD_HEIGHT, BOARD_WIDTH};
pub use entity::{UnitId, UnitIdAllocator};
pub use error::{EngineError, Result};
pub use rng::{GameRng, GameRngState};
pub use side::{Side, SideMap};
pub use state::{MatchSnapshot, TurnState};
