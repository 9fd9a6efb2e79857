//! Attack patterns: shape generation, per-archetype cache, board resolution.

mod catalog;
mod shape;
mod targeting;

pub use catalog::AttackPatternCatalog;
pub use shape::{AttackPattern, Axis, DistanceMetric, Offset, PatternShape};
pub use targeting::{cells_in_range, resolve_targets};
