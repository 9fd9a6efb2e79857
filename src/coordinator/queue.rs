//! Per-side deployment queue.

use std::collections::VecDeque;

use crate::core::UnitId;
use crate::units::UnitInstance;

/// Units waiting to be deployed, in roster order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeploymentQueue {
    units: VecDeque<UnitInstance>,
}

impl DeploymentQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_back(&mut self, unit: UnitInstance) {
        self.units.push_back(unit);
    }

    /// The next unit to deploy.
    #[must_use]
    pub fn front(&self) -> Option<&UnitInstance> {
        self.units.front()
    }

    pub fn pop_front(&mut self) -> Option<UnitInstance> {
        self.units.pop_front()
    }

    /// Drop every queued unit, returning how many were removed.
    pub fn clear(&mut self) -> usize {
        let count = self.units.len();
        self.units.clear();
        count
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &UnitInstance> {
        self.units.iter()
    }

    /// Queued unit ids, front first.
    #[must_use]
    pub fn ids(&self) -> Vec<UnitId> {
        self.units.iter().map(|unit| unit.id).collect()
    }
}

impl FromIterator<UnitInstance> for DeploymentQueue {
    fn from_iter<I: IntoIterator<Item = UnitInstance>>(iter: I) -> Self {
        Self {
            units: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Side;
    use crate::units::test_support::unit;

    #[test]
    fn test_fifo_order() {
        let mut queue: DeploymentQueue = (1..=3).map(|n| unit(n, Side::Player)).collect();
        assert_eq!(queue.ids(), vec![UnitId(1), UnitId(2), UnitId(3)]);
        assert_eq!(queue.front().unwrap().id, UnitId(1));

        assert_eq!(queue.pop_front().unwrap().id, UnitId(1));
        queue.push_back(unit(4, Side::Player));
        assert_eq!(queue.ids(), vec![UnitId(2), UnitId(3), UnitId(4)]);
    }

    #[test]
    fn test_clear() {
        let mut queue: DeploymentQueue = (1..=2).map(|n| unit(n, Side::Ai)).collect();
        assert_eq!(queue.clear(), 2);
        assert!(queue.is_empty());
        assert!(queue.front().is_none());
    }
}
