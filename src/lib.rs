//! # tile-tactics
//!
//! A dual-board tactical placement-and-combat engine.
//!
//! Two sides, Player and AI, take turns deploying units onto two 6×3 boards
//! ("A" and "B"). Once deployment ends, placed units fight turn by turn using
//! their archetype's attack pattern. Each board is won by the side with more
//! surviving units; the Player scores one point per board won.
//!
//! ## Design Principles
//!
//! 1. **Data-Driven Classes**: Archetypes are a table of role, pattern shape
//!    and stat multipliers. The rules never branch on a specific class.
//!
//! 2. **Deterministic**: Crits and randomized AI draw from seeded ChaCha
//!    streams, so a seed and an action sequence replay exactly.
//!
//! 3. **Host-Driven Time**: The engine never sleeps. Hosts advance turn
//!    timers with `tick_timer` and pace AI turns however they like.
//!
//! ## Architecture
//!
//! - **One Owner Per Match**: a `TurnCoordinator` owns every piece of match
//!   state and exposes `&mut self` entry points, so only one action is ever
//!   in flight.
//!
//! - **Persistent Data Structures**: boards and history use `im`, so the
//!   snapshot published after each transition costs O(1) to build.
//!
//! ## Modules
//!
//! - `core`: ids, sides, configuration, actions, turn state, RNG, errors
//! - `board`: positions, single boards, the A/B board pair
//! - `units`: archetypes, rosters, unit instances
//! - `patterns`: attack pattern shapes, catalog, target resolution
//! - `rules`: placement, combat and scoring
//! - `ai`: strategists for AI-controlled sides
//! - `events`: observation events and listeners
//! - `coordinator`: the turn and phase state machine
//!
//! ## Example
//!
//! ```
//! use tile_tactics::ai::AiConfig;
//! use tile_tactics::coordinator::MatchBuilder;
//! use tile_tactics::core::{BoardId, MatchConfig, Phase, Side};
//! use tile_tactics::units::{jobs, Roster};
//!
//! let mut game = MatchBuilder::new(MatchConfig::standard())
//!     .with_roster(Side::Player, Roster::of([jobs::WARRIOR]))
//!     .with_roster(Side::Ai, Roster::of([jobs::ARCHER]))
//!     .with_ai(Side::Ai, &AiConfig::default())
//!     .build()?;
//!
//! game.submit_placement(BoardId::A, 2, 1)?;
//! game.run_until_human()?;
//!
//! assert_ne!(game.phase(), Phase::Deployment);
//! # Ok::<(), tile_tactics::core::EngineError>(())
//! ```

pub mod ai;
pub mod board;
pub mod coordinator;
pub mod core;
pub mod events;
pub mod patterns;
pub mod rules;
pub mod units;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, BoardId, EngineError, GameRng, GameRngState, MatchConfig,
    MatchSnapshot, Phase, Result, Side, SideMap, TurnState, UnitId,
};

pub use crate::board::{Board, BoardSet, Location, Position};

pub use crate::units::{
    ArchetypeDefinition, ArchetypeId, ArchetypeRegistry, BaseStats, CombatStats, Role, Roster,
    RosterEntry, UnitInstance,
};

pub use crate::patterns::{AttackPattern, AttackPatternCatalog, PatternShape};

pub use crate::rules::{
    BoardWinner, CombatResolver, DamageEvent, MatchOutcome, MatchScore, PlacementEngine,
    ScoreEvaluator,
};

pub use crate::ai::{AiConfig, AttackChoice, Difficulty, Strategist};

pub use crate::events::{EventListener, MatchEvent};

pub use crate::coordinator::{MatchBuilder, TurnCoordinator};
