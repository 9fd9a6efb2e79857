//! The match state machine.
//!
//! ## Phases
//!
//! - **Deployment**: the active side places the front unit of its queue on any
//!   empty cell of either board. A side with an empty queue is skipped. The
//!   phase ends when both queues are empty, the placement limit or the
//!   deployment turn limit is reached, or no empty cell is left.
//! - **Combat**: the active side makes one attack or passes. The phase ends
//!   when a side has no living units or the combat turn limit is reached.
//! - **Result**: terminal. The final score is fixed.
//!
//! ## Turns
//!
//! Every completed turn (action, pass or timeout) is recorded, resets the
//! timer and hands the turn to the other side. A timeout during deployment
//! leaves the unit at the front of its queue.
//!
//! ## Errors
//!
//! A rejected action returns an `EngineError` and leaves the match untouched:
//! same turn, same timer, no history entry.

use std::sync::Arc;

use im::Vector;
use tracing::{debug, info, warn};

use super::queue::DeploymentQueue;
use super::timer::TurnTimer;
use crate::ai::Strategist;
use crate::board::{BoardSet, Location, Position};
use crate::core::{
    Action, ActionRecord, BoardId, EngineError, MatchConfig, MatchSnapshot, Phase, Result, Side,
    SideMap, TurnState, UnitId,
};
use crate::events::{EventBus, EventListener, MatchEvent};
use crate::rules::{CombatResolver, MatchScore, PlacementEngine, ScoreEvaluator};
use crate::units::UnitInstance;

/// Components a coordinator is assembled from.
pub(crate) struct CoordinatorParts {
    pub config: MatchConfig,
    pub queues: SideMap<DeploymentQueue>,
    pub placement: PlacementEngine,
    pub combat: CombatResolver,
    pub strategists: SideMap<Option<Box<dyn Strategist>>>,
    pub events: EventBus,
}

/// Owns one match and advances it turn by turn.
///
/// Built with `MatchBuilder`.
pub struct TurnCoordinator {
    config: MatchConfig,
    boards: BoardSet,
    queues: SideMap<DeploymentQueue>,
    placement: PlacementEngine,
    combat: CombatResolver,
    scorer: ScoreEvaluator,
    strategists: SideMap<Option<Box<dyn Strategist>>>,
    turn: TurnState,
    timer: TurnTimer,
    placements: usize,
    history: Vector<ActionRecord>,
    defeated: Vector<UnitInstance>,
    result: Option<MatchScore>,
    events: EventBus,
    snapshot: Arc<MatchSnapshot>,
}

impl std::fmt::Debug for TurnCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TurnCoordinator")
            .field("turn", &self.turn)
            .field("placements", &self.placements)
            .field("result", &self.result)
            .finish_non_exhaustive()
    }
}

impl TurnCoordinator {
    pub(crate) fn from_parts(parts: CoordinatorParts) -> Self {
        let CoordinatorParts {
            config,
            queues,
            placement,
            combat,
            strategists,
            events,
        } = parts;

        let timer = TurnTimer::new(config.turn_duration_secs);
        let turn = TurnState::new(
            config.first_side,
            config.deployment_turn_limit,
            timer.remaining(),
        );
        let boards = BoardSet::new();
        let scorer = ScoreEvaluator::new();
        let snapshot = Arc::new(MatchSnapshot {
            turn: turn.clone(),
            boards: boards.clone(),
            queues: queues.map(|_, queue| queue.ids()),
            projected_score: scorer.evaluate(&boards),
            history: Vector::new(),
            defeated: Vector::new(),
            result: None,
            combat_rng: combat.rng_state(),
        });

        let mut coordinator = Self {
            config,
            boards,
            queues,
            placement,
            combat,
            scorer,
            strategists,
            turn,
            timer,
            placements: 0,
            history: Vector::new(),
            defeated: Vector::new(),
            result: None,
            events,
            snapshot,
        };

        info!(
            player_units = coordinator.queues[Side::Player].len(),
            ai_units = coordinator.queues[Side::Ai].len(),
            first = %coordinator.config.first_side,
            "match started"
        );

        if coordinator.deployment_finished() {
            coordinator.enter_combat();
        } else {
            if coordinator.queues[coordinator.turn.active_side].is_empty() {
                coordinator.turn.active_side = coordinator.turn.active_side.opponent();
            }
            coordinator.announce_turn();
        }
        coordinator.publish();
        coordinator
    }

    // === Control ===

    /// Apply `action` for `side`.
    pub fn submit(&mut self, side: Side, action: Action) -> Result<()> {
        if self.turn.is_terminal() {
            let expected = match action {
                Action::Attack { .. } => Phase::Combat,
                Action::Place { .. } | Action::Pass => Phase::Deployment,
            };
            return Err(EngineError::WrongPhase {
                expected,
                actual: Phase::Result,
            });
        }
        if side != self.turn.active_side {
            return Err(EngineError::NotYourTurn {
                side,
                active: self.turn.active_side,
            });
        }

        match action {
            Action::Place { board, position } => self.place(side, board, position)?,
            Action::Attack { attacker, target } => self.attack(side, attacker, target)?,
            Action::Pass => debug!(%side, turn = self.turn.turn, "pass"),
        }

        let record = ActionRecord::new(side, action, self.turn.phase, self.turn.turn);
        self.end_turn(record);
        Ok(())
    }

    /// Place the Player's next queued unit.
    pub fn submit_placement(&mut self, board: BoardId, x: i32, y: i32) -> Result<()> {
        self.submit(Side::Player, Action::place(board, x, y))
    }

    /// Attack with one of the Player's units.
    pub fn submit_attack(&mut self, attacker: UnitId, target: UnitId) -> Result<()> {
        self.submit(Side::Player, Action::attack(attacker, target))
    }

    /// End the Player's turn without acting.
    pub fn submit_pass(&mut self) -> Result<()> {
        self.submit(Side::Player, Action::Pass)
    }

    /// Advance the turn timer by `delta` seconds.
    ///
    /// Returns `true` if the active turn ran out and was passed.
    pub fn tick_timer(&mut self, delta: f64) -> bool {
        if self.turn.is_terminal() {
            return false;
        }

        let expired = self.timer.tick(delta);
        self.turn.remaining_secs = self.timer.remaining();
        if !expired {
            return false;
        }

        let side = self.turn.active_side;
        let phase = self.turn.phase;
        let turn = self.turn.turn;
        info!(%side, %phase, turn, "turn timed out");
        self.events.emit(MatchEvent::TurnTimedOut { side, phase, turn });
        self.end_turn(ActionRecord::timeout(side, phase, turn));
        true
    }

    /// Let the active side's strategist take its turn.
    ///
    /// Returns the action taken, or `None` if the match is over or the active
    /// side is human-controlled. A strategist proposal that fails validation
    /// is logged and replaced by a pass.
    pub fn run_ai_turn(&mut self) -> Result<Option<Action>> {
        if self.turn.is_terminal() {
            return Ok(None);
        }
        let side = self.turn.active_side;
        let Some(mut strategist) = self.strategists[side].take() else {
            return Ok(None);
        };

        let proposal = match self.turn.phase {
            Phase::Deployment => self.queues[side]
                .front()
                .and_then(|unit| strategist.choose_deployment(&self.boards, side, unit))
                .map(|location| Action::Place {
                    board: location.board,
                    position: location.position,
                }),
            Phase::Combat => strategist
                .choose_attack(&self.boards, side)
                .map(|choice| Action::attack(choice.attacker, choice.target)),
            Phase::Result => None,
        };
        let name = strategist.name().to_owned();
        self.strategists[side] = Some(strategist);

        let action = proposal.unwrap_or(Action::Pass);
        debug!(%side, strategist = %name, %action, "ai turn");

        match self.submit(side, action) {
            Ok(()) => Ok(Some(action)),
            Err(err) if !action.is_pass() => {
                warn!(%side, strategist = %name, %action, %err, "ai proposal rejected, passing");
                self.submit(side, Action::Pass)?;
                Ok(Some(Action::Pass))
            }
            Err(err) => Err(err),
        }
    }

    /// Run AI turns until a human side is to act or the match is over.
    ///
    /// Returns the number of AI turns taken.
    pub fn run_until_human(&mut self) -> Result<usize> {
        let mut turns = 0;
        while !self.turn.is_terminal() && self.is_ai(self.turn.active_side) {
            self.run_ai_turn()?;
            turns += 1;
        }
        Ok(turns)
    }

    /// Discard the match.
    pub fn abandon(self) {
        info!(
            turn = self.turn.turn,
            phase = %self.turn.phase,
            "match abandoned"
        );
    }

    /// Register a listener for future events.
    pub fn subscribe(&mut self, listener: impl EventListener + 'static) {
        self.events.subscribe(listener);
    }

    // === Observation ===

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn turn_state(&self) -> &TurnState {
        &self.turn
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.turn.phase
    }

    #[must_use]
    pub fn active_side(&self) -> Side {
        self.turn.active_side
    }

    /// Check whether `side` is controlled by a strategist.
    #[must_use]
    pub fn is_ai(&self, side: Side) -> bool {
        self.strategists[side].is_some()
    }

    #[must_use]
    pub fn boards(&self) -> &BoardSet {
        &self.boards
    }

    #[must_use]
    pub fn queue(&self, side: Side) -> &DeploymentQueue {
        &self.queues[side]
    }

    /// Number of placements made so far.
    #[must_use]
    pub fn placements(&self) -> usize {
        self.placements
    }

    /// Score if the match ended now.
    #[must_use]
    pub fn projected_score(&self) -> MatchScore {
        self.scorer.evaluate(&self.boards)
    }

    /// Final score, once the match is in `Result`.
    #[must_use]
    pub fn result(&self) -> Option<&MatchScore> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Units removed by lethal hits, in order of defeat.
    #[must_use]
    pub fn defeated(&self) -> &Vector<UnitInstance> {
        &self.defeated
    }

    /// Find a unit wherever it is: on a board, in a queue, or defeated.
    #[must_use]
    pub fn unit(&self, id: UnitId) -> Option<&UnitInstance> {
        self.boards
            .unit(id)
            .or_else(|| {
                self.queues
                    .iter()
                    .find_map(|(_, queue)| queue.iter().find(|unit| unit.id == id))
            })
            .or_else(|| self.defeated.iter().find(|unit| unit.id == id))
    }

    /// The snapshot published after the last transition.
    #[must_use]
    pub fn snapshot(&self) -> Arc<MatchSnapshot> {
        Arc::clone(&self.snapshot)
    }

    /// Take every event emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<MatchEvent> {
        self.events.drain()
    }

    // === Actions ===

    fn place(&mut self, side: Side, board: BoardId, position: Position) -> Result<()> {
        if self.turn.phase != Phase::Deployment {
            return Err(EngineError::WrongPhase {
                expected: Phase::Deployment,
                actual: self.turn.phase,
            });
        }
        if self.queues[side].is_empty() {
            return Err(EngineError::NothingToDeploy(side));
        }
        self.placement
            .check(self.boards.board(board), position.x, position.y, self.turn.phase)?;

        let unit = self.queues[side]
            .pop_front()
            .ok_or(EngineError::NothingToDeploy(side))?;
        let unit_id = unit.id;
        let threatened = self.placement.execute(
            self.boards.board_mut(board),
            position.x,
            position.y,
            unit,
        )?;
        self.placements += 1;

        let location = Location::new(board, position);
        debug!(%side, unit = %unit_id, %location, threatened = threatened.len(), "unit placed");
        self.events.emit(MatchEvent::UnitPlaced {
            unit: unit_id,
            side,
            location,
            threatened,
        });
        self.emit_board_score(board);
        Ok(())
    }

    fn attack(&mut self, side: Side, attacker: UnitId, target: UnitId) -> Result<()> {
        if self.turn.phase != Phase::Combat {
            return Err(EngineError::WrongPhase {
                expected: Phase::Combat,
                actual: self.turn.phase,
            });
        }

        let (board, attacking) = self.lookup_living(attacker)?;
        if attacking.side != side {
            return Err(EngineError::NotYourTurn {
                side: attacking.side,
                active: side,
            });
        }
        let (target_board, _) = self.lookup_living(target)?;
        if board != target_board {
            return Err(EngineError::UnreachableTarget { attacker, target });
        }

        let event = self
            .combat
            .resolve_attack(self.boards.board_mut(board), attacker, target)?;

        self.events.emit(MatchEvent::UnitDamaged {
            attacker,
            defender: target,
            board,
            damage: event.damage,
            critical: event.critical,
            remaining_hp: event.remaining_hp,
        });

        if let Some(defeated) = event.defeated {
            info!(unit = %target, side = %defeated.side, by = %attacker, "unit defeated");
            self.events.emit(MatchEvent::UnitDefeated {
                unit: target,
                side: defeated.side,
                location: Location::new(board, event.position),
            });
            self.defeated.push_back(defeated);
            self.emit_board_score(board);
        }
        Ok(())
    }

    fn lookup_living(&self, id: UnitId) -> Result<(BoardId, &UnitInstance)> {
        if self.defeated.iter().any(|unit| unit.id == id) {
            return Err(EngineError::DeadUnitReference(id));
        }
        let (board, unit) = self.boards.find_unit(id).ok_or(EngineError::UnknownUnit(id))?;
        if !unit.alive {
            return Err(EngineError::DeadUnitReference(id));
        }
        Ok((board, unit))
    }

    // === Transitions ===

    fn end_turn(&mut self, record: ActionRecord) {
        self.history.push_back(record);
        self.turn.turn += 1;
        self.turn.phase_turns += 1;

        match self.turn.phase {
            Phase::Deployment => {
                if self.deployment_finished() {
                    self.enter_combat();
                } else {
                    let next = self.turn.active_side.opponent();
                    if !self.queues[next].is_empty() {
                        self.turn.active_side = next;
                    }
                    self.start_turn();
                }
            }
            Phase::Combat => {
                if self.combat_finished() {
                    self.finish();
                } else {
                    self.turn.active_side = self.turn.active_side.opponent();
                    self.start_turn();
                }
            }
            Phase::Result => {}
        }

        self.publish();
    }

    fn start_turn(&mut self) {
        self.timer.reset();
        self.turn.remaining_secs = self.timer.remaining();
        self.announce_turn();
    }

    fn announce_turn(&mut self) {
        self.events.emit(MatchEvent::TurnChanged {
            turn: self.turn.turn,
            side: self.turn.active_side,
            phase: self.turn.phase,
        });
    }

    fn deployment_finished(&self) -> bool {
        let queues_empty = self.queues.iter().all(|(_, queue)| queue.is_empty());
        queues_empty
            || self.placements >= self.config.max_total_placements
            || self.turn.limit_reached()
            || !self.boards.has_empty_cell()
    }

    fn combat_finished(&self) -> bool {
        Side::ALL
            .iter()
            .any(|side| self.boards.living_count(*side) == 0)
            || self.turn.limit_reached()
    }

    fn enter_combat(&mut self) {
        for (side, queue) in self.queues.iter_mut() {
            let forfeited = queue.clear();
            if forfeited > 0 {
                info!(%side, forfeited, "deployment ended with units still queued");
            }
        }

        self.change_phase(Phase::Combat);
        self.turn.turn_limit = self.config.combat_turn_limit;
        self.turn.active_side = self.config.first_side;

        if self.combat_finished() {
            self.finish();
        } else {
            self.start_turn();
        }
    }

    fn finish(&mut self) {
        self.change_phase(Phase::Result);
        self.turn.turn_limit = 0;
        self.turn.remaining_secs = 0.0;

        let score = self.scorer.evaluate(&self.boards);
        info!(
            outcome = %score.outcome,
            points = score.player_points,
            turns = self.history.len(),
            "match finished"
        );
        self.result = Some(score);
        self.events.emit(MatchEvent::MatchFinished { score });
    }

    fn change_phase(&mut self, to: Phase) {
        let from = self.turn.phase;
        debug_assert!(from < to, "phases only move forward");
        info!(%from, %to, turn = self.turn.turn, "phase changed");

        self.turn.phase = to;
        self.turn.phase_turns = 0;
        self.events.emit(MatchEvent::PhaseChanged { from, to });
    }

    fn emit_board_score(&mut self, board: BoardId) {
        let score = self.scorer.board_score(self.boards.board(board));
        self.events.emit(MatchEvent::BoardScoreChanged { score });
    }

    fn publish(&mut self) {
        self.snapshot = Arc::new(MatchSnapshot {
            turn: self.turn.clone(),
            boards: self.boards.clone(),
            queues: self.queues.map(|_, queue| queue.ids()),
            projected_score: self.projected_score(),
            history: self.history.clone(),
            defeated: self.defeated.clone(),
            result: self.result,
            combat_rng: self.combat.rng_state(),
        });
    }
}
