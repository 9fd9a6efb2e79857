//! Board storage: positions, single boards, and the A/B board pair.

mod grid;
mod set;

pub use grid::{Board, Location, Position};
pub use set::BoardSet;
