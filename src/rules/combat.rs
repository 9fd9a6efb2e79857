//! Combat resolution.
//!
//! ## Damage
//!
//! - base damage is `max(1, attack - defense)`
//! - a crit multiplies it by `crit_damage`, rounded, never below 1
//! - HP is clamped at 0; a unit at 0 HP is marked dead and taken off its board
//!
//! Crits are rolled from the resolver's own seeded stream, so the same seed
//! and the same sequence of attacks always produce the same outcome.

use tracing::debug;

use crate::board::{Board, Position};
use crate::core::{BoardId, EngineError, GameRng, GameRngState, Result, UnitId};
use crate::units::UnitInstance;

/// Outcome of one resolved attack.
#[derive(Clone, Debug, PartialEq)]
pub struct DamageEvent {
    pub attacker: UnitId,
    pub defender: UnitId,
    pub board: BoardId,
    /// The defender's cell.
    pub position: Position,
    pub damage: i32,
    pub critical: bool,
    pub lethal: bool,
    pub remaining_hp: i32,
    /// The defender, detached from the board, when the hit was lethal.
    pub defeated: Option<UnitInstance>,
}

/// Applies attacks to a board.
#[derive(Clone, Debug)]
pub struct CombatResolver {
    rng: GameRng,
}

impl CombatResolver {
    /// Create a resolver that rolls crits from `rng`.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Create a resolver with a dedicated crit stream derived from `seed`.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(GameRng::new(seed).for_context("combat"))
    }

    /// Damage before crits: `max(1, attack - defense)`.
    #[must_use]
    pub fn base_damage(attacker: &UnitInstance, defender: &UnitInstance) -> i32 {
        (attacker.stats.attack - defender.stats.defense).max(1)
    }

    /// Damage after a successful crit.
    #[must_use]
    pub fn critical_damage(attacker: &UnitInstance, defender: &UnitInstance) -> i32 {
        let base = f64::from(Self::base_damage(attacker, defender));
        ((base * attacker.stats.crit_damage).round() as i32).max(1)
    }

    /// Mean damage over crit outcomes.
    #[must_use]
    pub fn expected_damage(attacker: &UnitInstance, defender: &UnitInstance) -> f64 {
        let base = f64::from(Self::base_damage(attacker, defender));
        let rate = attacker.stats.crit_rate.clamp(0.0, 1.0);
        base * (1.0 + rate * (attacker.stats.crit_damage - 1.0))
    }

    /// Check whether `attacker` can hit `defender` on `board` right now.
    ///
    /// Both must be alive, on this board, on opposing sides, and the defender's
    /// cell must be covered by the attacker's pattern.
    #[must_use]
    pub fn can_attack(attacker: &UnitInstance, defender: &UnitInstance, board: &Board) -> bool {
        Self::check_attack(attacker.id, defender.id, board).is_ok()
    }

    fn check_attack(attacker: UnitId, defender: UnitId, board: &Board) -> Result<(Position, Position)> {
        let from = board.find(attacker).ok_or(EngineError::UnknownUnit(attacker))?;
        let to = board.find(defender).ok_or(EngineError::UnknownUnit(defender))?;
        let (Some(a), Some(d)) = (board.get(from), board.get(to)) else {
            return Err(EngineError::UnknownUnit(attacker));
        };

        if !a.alive {
            return Err(EngineError::DeadUnitReference(attacker));
        }
        if !d.alive {
            return Err(EngineError::DeadUnitReference(defender));
        }
        let offset_hit = a
            .pattern
            .offsets()
            .iter()
            .any(|o| from.checked_translate(o.dx, o.dy) == Some(to));
        if a.side == d.side || !offset_hit {
            return Err(EngineError::UnreachableTarget { attacker, target: defender });
        }
        Ok((from, to))
    }

    /// Resolve an attack, rolling for a crit.
    ///
    /// The crit roll happens only after the attack is known to be valid, so
    /// rejected attacks never advance the RNG.
    pub fn resolve_attack(
        &mut self,
        board: &mut Board,
        attacker: UnitId,
        defender: UnitId,
    ) -> Result<DamageEvent> {
        let (from, _) = Self::check_attack(attacker, defender, board)?;
        let crit_rate = board.get(from).map_or(0.0, |a| a.stats.crit_rate);
        let critical = self.rng.gen_bool(crit_rate);
        self.resolve_attack_with_roll(board, attacker, defender, critical)
    }

    /// Resolve an attack with a fixed crit outcome.
    pub fn resolve_attack_with_roll(
        &self,
        board: &mut Board,
        attacker: UnitId,
        defender: UnitId,
        critical: bool,
    ) -> Result<DamageEvent> {
        let (from, to) = Self::check_attack(attacker, defender, board)?;
        let (Some(a), Some(d)) = (board.get(from), board.get(to)) else {
            return Err(EngineError::UnknownUnit(attacker));
        };

        let damage = if critical {
            Self::critical_damage(a, d)
        } else {
            Self::base_damage(a, d)
        };

        let target = board
            .get_mut(to)
            .ok_or(EngineError::UnknownUnit(defender))?;
        target.stats.current_hp = (target.stats.current_hp - damage).max(0);
        let remaining_hp = target.stats.current_hp;
        let lethal = remaining_hp == 0;
        if lethal {
            target.alive = false;
        }

        let defeated = if lethal { board.remove(to.x, to.y) } else { None };

        debug!(
            %attacker,
            %defender,
            damage,
            critical,
            lethal,
            remaining_hp,
            "attack resolved"
        );

        Ok(DamageEvent {
            attacker,
            defender,
            board: board.id(),
            position: to,
            damage,
            critical,
            lethal,
            remaining_hp,
            defeated,
        })
    }

    /// Current crit stream state.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}
