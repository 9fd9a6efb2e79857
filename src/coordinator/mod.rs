//! Turn and phase orchestration.
//!
//! `MatchBuilder` assembles a match from a config, rosters and optional
//! injected components; `TurnCoordinator` then owns the match and advances
//! it one turn at a time.

mod builder;
#[allow(clippy::module_inception)]
mod coordinator;
mod queue;
mod timer;

pub use builder::MatchBuilder;
pub use coordinator::TurnCoordinator;
pub use queue::DeploymentQueue;
pub use timer::TurnTimer;
