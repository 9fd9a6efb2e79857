//! Unit identification.
//!
//! Every unit that takes part in a match gets a `UnitId` when the match is
//! built. Ids are allocated sequentially, Player roster first, then AI roster,
//! so the same rosters always produce the same ids.
//!
//! ```
//! use tile_tactics::core::{UnitId, UnitIdAllocator};
//!
//! let mut ids = UnitIdAllocator::new();
//! let first = ids.next_id();
//! let second = ids.next_id();
//!
//! assert_eq!(first, UnitId(0));
//! assert_eq!(second, UnitId(1));
//! assert_eq!(ids.allocated(), 2);
//! ```

use serde::{Deserialize, Serialize};

/// Stable identifier for a unit within one match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UnitId(pub u32);

impl UnitId {
    /// Create a unit ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for UnitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unit({})", self.0)
    }
}

/// Sequential allocator for `UnitId`s.
#[derive(Clone, Debug, Default)]
pub struct UnitIdAllocator {
    next: u32,
}

impl UnitIdAllocator {
    /// Create an allocator starting at `UnitId(0)`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next ID.
    pub fn next_id(&mut self) -> UnitId {
        let id = UnitId(self.next);
        self.next += 1;
        id
    }

    /// Number of IDs handed out so far.
    #[must_use]
    pub fn allocated(&self) -> u32 {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_id_display() {
        assert_eq!(format!("{}", UnitId::new(7)), "Unit(7)");
        assert_eq!(UnitId::new(7).raw(), 7);
    }

    #[test]
    fn test_allocator_is_sequential() {
        let mut ids = UnitIdAllocator::new();
        let allocated: Vec<_> = (0..4).map(|_| ids.next_id()).collect();

        assert_eq!(allocated, vec![UnitId(0), UnitId(1), UnitId(2), UnitId(3)]);
        assert_eq!(ids.allocated(), 4);
    }

    #[test]
    fn test_unit_id_ordering() {
        assert!(UnitId(1) < UnitId(2));
    }

    #[test]
    fn test_unit_id_serialization() {
        let id = UnitId(42);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: UnitId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
