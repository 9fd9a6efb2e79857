//! Attack pattern geometry.
//!
//! A `PatternShape` is a data description ("cross, range 2"); generating it
//! yields an `AttackPattern`, the immutable set of relative offsets a unit can
//! strike from its own cell.
//!
//! Generated patterns are:
//! - **origin-free**: a unit never targets its own cell
//! - **symmetric**: every shape covers both facing directions, so the same
//!   pattern works for either side without flipping
//! - **canonically ordered**: offsets are sorted by `(dx, dy)`, which matches
//!   board scan order when resolved against an origin

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{BOARD_HEIGHT, BOARD_WIDTH};

/// A relative cell offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Offset {
    pub dx: i32,
    pub dy: i32,
}

impl Offset {
    #[must_use]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// This offset mirrored across the vertical axis.
    #[must_use]
    pub const fn mirrored(self) -> Self {
        Self {
            dx: self.dx.saturating_neg(),
            dy: self.dy,
        }
    }

    #[must_use]
    pub const fn is_origin(self) -> bool {
        self.dx == 0 && self.dy == 0
    }

    /// Check whether this offset can connect two cells of one board.
    #[must_use]
    pub const fn reaches_board(self) -> bool {
        self.dx.unsigned_abs() < BOARD_WIDTH as u32 && self.dy.unsigned_abs() < BOARD_HEIGHT as u32
    }
}

/// Distance measure for circular patterns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistanceMetric {
    /// `|dx| + |dy|` (diamond).
    Manhattan,
    /// `max(|dx|, |dy|)` (square).
    Chebyshev,
    /// `sqrt(dx² + dy²)` (disc).
    Euclidean,
}

impl DistanceMetric {
    /// Check whether `offset` lies within `radius` under this metric.
    #[must_use]
    pub fn within(self, offset: Offset, radius: i32) -> bool {
        let (ax, ay) = (i64::from(offset.dx).abs(), i64::from(offset.dy).abs());
        let radius = i64::from(radius);
        match self {
            DistanceMetric::Manhattan => ax + ay <= radius,
            DistanceMetric::Chebyshev => ax.max(ay) <= radius,
            DistanceMetric::Euclidean => {
                ax.saturating_mul(ax).saturating_add(ay.saturating_mul(ay)) <= radius * radius
            }
        }
    }
}

/// Axis for straight-line patterns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Along the board's width.
    Horizontal,
    /// Along the board's height.
    Vertical,
}

/// Data description of an attack pattern.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatternShape {
    /// The adjacent cell in each horizontal direction.
    Single,
    /// Orthogonal arms of the given length.
    Cross { range: u8 },
    /// Diagonal arms of the given length.
    Diagonal { range: u8 },
    /// Every cell within Chebyshev distance `range`.
    Square { range: u8 },
    /// Every cell within `radius` under `metric`.
    Circle { radius: u8, metric: DistanceMetric },
    /// A run of `length` cells along `axis`, in both directions.
    Line { length: u8, axis: Axis },
    /// Hand-authored offsets, mirrored horizontally on generation.
    Custom(Vec<Offset>),
}

impl PatternShape {
    /// Generate the offsets this shape describes (unsorted, may repeat).
    fn raw_offsets(&self) -> Vec<Offset> {
        match self {
            PatternShape::Single => vec![Offset::new(1, 0), Offset::new(-1, 0)],
            PatternShape::Cross { range } => (1..=i32::from(*range))
                .flat_map(|i| {
                    [
                        Offset::new(i, 0),
                        Offset::new(-i, 0),
                        Offset::new(0, i),
                        Offset::new(0, -i),
                    ]
                })
                .collect(),
            PatternShape::Diagonal { range } => (1..=i32::from(*range))
                .flat_map(|i| {
                    [
                        Offset::new(i, i),
                        Offset::new(i, -i),
                        Offset::new(-i, i),
                        Offset::new(-i, -i),
                    ]
                })
                .collect(),
            PatternShape::Square { range } => {
                disc(i32::from(*range), DistanceMetric::Chebyshev)
            }
            PatternShape::Circle { radius, metric } => disc(i32::from(*radius), *metric),
            PatternShape::Line { length, axis } => (1..=i32::from(*length))
                .flat_map(|i| match axis {
                    Axis::Horizontal => [Offset::new(i, 0), Offset::new(-i, 0)],
                    Axis::Vertical => [Offset::new(0, i), Offset::new(0, -i)],
                })
                .collect(),
            PatternShape::Custom(offsets) => offsets
                .iter()
                .filter(|offset| offset.reaches_board())
                .flat_map(|offset| [*offset, offset.mirrored()])
                .collect(),
        }
    }
}

fn disc(radius: i32, metric: DistanceMetric) -> Vec<Offset> {
    (-radius..=radius)
        .flat_map(|dx| (-radius..=radius).map(move |dy| Offset::new(dx, dy)))
        .filter(|offset| metric.within(*offset, radius))
        .collect()
}

/// Immutable, named set of strike offsets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackPattern {
    name: String,
    offsets: SmallVec<[Offset; 16]>,
}

impl AttackPattern {
    /// Build a pattern from arbitrary offsets.
    ///
    /// The origin and offsets longer than the board are dropped, duplicates
    /// are removed and the result is sorted. No mirroring is applied here; use
    /// `PatternShape::Custom` for that.
    #[must_use]
    pub fn new(name: impl Into<String>, offsets: impl IntoIterator<Item = Offset>) -> Self {
        let mut offsets: SmallVec<[Offset; 16]> = offsets
            .into_iter()
            .filter(|offset| !offset.is_origin() && offset.reaches_board())
            .collect();
        offsets.sort_unstable();
        offsets.dedup();

        Self {
            name: name.into(),
            offsets,
        }
    }

    /// Generate a pattern from its shape description.
    ///
    /// ```
    /// use tile_tactics::patterns::{AttackPattern, Offset, PatternShape};
    ///
    /// let cross = AttackPattern::from_shape("cross", &PatternShape::Cross { range: 1 });
    /// assert_eq!(cross.len(), 4);
    /// assert!(cross.contains(Offset::new(0, 1)));
    /// assert!(!cross.contains(Offset::new(1, 1)));
    /// ```
    #[must_use]
    pub fn from_shape(name: impl Into<String>, shape: &PatternShape) -> Self {
        Self::new(name, shape.raw_offsets())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Offsets in canonical `(dx, dy)` order.
    #[must_use]
    pub fn offsets(&self) -> &[Offset] {
        &self.offsets
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    #[must_use]
    pub fn contains(&self, offset: Offset) -> bool {
        self.offsets.binary_search(&offset).is_ok()
    }

    /// Check whether the pattern reaches the same cells facing either way.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        self.offsets.iter().all(|offset| self.contains(offset.mirrored()))
    }
}
