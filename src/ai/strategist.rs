//! Strategist trait and shared move enumeration.

use serde::{Deserialize, Serialize};

use crate::board::{BoardSet, Location};
use crate::core::{BoardId, Side, UnitId};
use crate::patterns::resolve_targets;
use crate::rules::CombatResolver;
use crate::units::UnitInstance;

/// An attack picked by a strategist.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttackChoice {
    pub board: BoardId,
    pub attacker: UnitId,
    pub target: UnitId,
    /// Strategist-specific score; expected damage for enumerated options.
    pub score: f64,
}

/// Decision maker for an AI-controlled side.
///
/// Strategists only read the boards. They never mutate match state; the
/// coordinator applies whatever they choose through the normal validation
/// path.
pub trait Strategist: Send {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Pick a cell for `unit`, or `None` if no cell is acceptable.
    fn choose_deployment(
        &mut self,
        boards: &BoardSet,
        side: Side,
        unit: &UnitInstance,
    ) -> Option<Location>;

    /// Pick an attack for `side`, or `None` to pass.
    fn choose_attack(&mut self, boards: &BoardSet, side: Side) -> Option<AttackChoice>;
}

/// Every legal attack for `side`, scored by expected damage.
///
/// Order: board A then B, attackers in scan order, targets in scan order.
#[must_use]
pub fn legal_attacks(boards: &BoardSet, side: Side) -> Vec<AttackChoice> {
    let mut options = Vec::new();

    for board in boards.iter() {
        for (pos, attacker) in board.units() {
            if attacker.side != side || !attacker.alive {
                continue;
            }
            for target_pos in resolve_targets(&attacker.pattern, pos.x, pos.y, board) {
                let Some(target) = board.get(target_pos) else {
                    continue;
                };
                if target.side == side || !target.alive {
                    continue;
                }
                options.push(AttackChoice {
                    board: board.id(),
                    attacker: attacker.id,
                    target: target.id,
                    score: CombatResolver::expected_damage(attacker, target),
                });
            }
        }
    }

    options
}
