//! Uniformly random strategist.

use tracing::debug;

use super::strategist::{legal_attacks, AttackChoice, Strategist};
use crate::board::{BoardSet, Location};
use crate::core::{GameRng, Side};
use crate::units::UnitInstance;

/// Picks uniformly among empty cells and legal attacks.
#[derive(Clone, Debug)]
pub struct RandomStrategist {
    rng: GameRng,
}

impl RandomStrategist {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Strategist for RandomStrategist {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_deployment(
        &mut self,
        boards: &BoardSet,
        side: Side,
        unit: &UnitInstance,
    ) -> Option<Location> {
        let cells: Vec<Location> = boards.empty_locations().collect();
        let choice = self.rng.choose(&cells).copied();
        debug!(%side, unit = %unit.id, ?choice, "random deployment");
        choice
    }

    fn choose_attack(&mut self, boards: &BoardSet, side: Side) -> Option<AttackChoice> {
        let options = legal_attacks(boards, side);
        self.rng.choose(&options).copied()
    }
}
