//! Coordinator integration tests.
//!
//! These tests cover rejection paths, AI-driven turns, events and snapshots.

mod common;

use std::sync::{Arc, Mutex};

use common::{init_tracing, soldier_match, soldiers, soldier_registry};
use tile_tactics::ai::{AiConfig, Difficulty, HeuristicStrategist};
use tile_tactics::board::Position;
use tile_tactics::coordinator::MatchBuilder;
use tile_tactics::core::{Action, BoardId, EngineError, MatchConfig, Phase, Side, UnitId};
use tile_tactics::events::MatchEvent;
use tile_tactics::rules::CombatResolver;
use tile_tactics::units::{jobs, Roster};

// =============================================================================
// Rejections
// =============================================================================

#[test]
fn test_out_of_turn_action_is_rejected() {
    let mut game = soldier_match(MatchConfig::standard(), 2, 2).build().unwrap();

    let err = game.submit(Side::Ai, Action::place(BoardId::A, 0, 0)).unwrap_err();
    assert_eq!(
        err,
        EngineError::NotYourTurn {
            side: Side::Ai,
            active: Side::Player
        }
    );
    assert!(game.history().is_empty());
    assert_eq!(game.active_side(), Side::Player);
}

#[test]
fn test_rejected_placement_leaves_state_unchanged() {
    let mut game = soldier_match(MatchConfig::standard(), 2, 2).build().unwrap();
    game.submit_placement(BoardId::A, 1, 1).unwrap();
    game.submit(Side::Ai, Action::place(BoardId::B, 0, 0)).unwrap();
    let before = game.snapshot();

    assert_eq!(
        game.submit_placement(BoardId::A, 1, 1).unwrap_err(),
        EngineError::CellOccupied(Position::new(1, 1))
    );
    assert_eq!(
        game.submit_placement(BoardId::B, 6, 0).unwrap_err(),
        EngineError::OutOfBounds(Position::new(6, 0))
    );

    assert_eq!(game.queue(Side::Player).len(), 1);
    assert_eq!(game.history().len(), 2);
    assert!(Arc::ptr_eq(&before, &game.snapshot()));
}

#[test]
fn test_attack_during_deployment_is_wrong_phase() {
    let mut game = soldier_match(MatchConfig::standard(), 2, 2).build().unwrap();
    assert_eq!(
        game.submit_attack(UnitId(0), UnitId(2)).unwrap_err(),
        EngineError::WrongPhase {
            expected: Phase::Combat,
            actual: Phase::Deployment
        }
    );
}

#[test]
fn test_combat_rejections() {
    let mut game = soldier_match(MatchConfig::standard(), 2, 2).build().unwrap();
    game.submit_placement(BoardId::A, 0, 0).unwrap();
    game.submit(Side::Ai, Action::place(BoardId::A, 1, 0)).unwrap();
    game.submit_placement(BoardId::B, 0, 0).unwrap();
    game.submit(Side::Ai, Action::place(BoardId::A, 5, 2)).unwrap();
    assert_eq!(game.phase(), Phase::Combat);

    // Player units: 0 on A(0,0), 1 on B(0,0). AI units: 2 on A(1,0), 3 on A(5,2).
    assert_eq!(
        game.submit_attack(UnitId(0), UnitId(3)).unwrap_err(),
        EngineError::UnreachableTarget {
            attacker: UnitId(0),
            target: UnitId(3)
        }
    );
    assert_eq!(
        game.submit_attack(UnitId(1), UnitId(2)).unwrap_err(),
        EngineError::UnreachableTarget {
            attacker: UnitId(1),
            target: UnitId(2)
        }
    );
    assert_eq!(
        game.submit_attack(UnitId(2), UnitId(0)).unwrap_err(),
        EngineError::NotYourTurn {
            side: Side::Ai,
            active: Side::Player
        }
    );
    assert_eq!(
        game.submit_attack(UnitId(0), UnitId(42)).unwrap_err(),
        EngineError::UnknownUnit(UnitId(42))
    );
    assert!(game.history().iter().all(|record| record.phase == Phase::Deployment));
}

#[test]
fn test_attacking_defeated_unit() {
    let config = MatchConfig::standard().with_combat_turn_limit(30);
    let mut game = soldier_match(config, 1, 2).build().unwrap();
    game.submit_placement(BoardId::A, 0, 0).unwrap();
    game.submit(Side::Ai, Action::place(BoardId::A, 1, 0)).unwrap();
    game.submit(Side::Ai, Action::place(BoardId::B, 5, 2)).unwrap();

    for _ in 0..9 {
        game.submit_attack(UnitId(0), UnitId(1)).unwrap();
        game.submit(Side::Ai, Action::Pass).unwrap();
    }
    game.submit_attack(UnitId(0), UnitId(1)).unwrap();
    assert_eq!(game.phase(), Phase::Combat);
    game.submit(Side::Ai, Action::Pass).unwrap();

    assert_eq!(
        game.submit_attack(UnitId(0), UnitId(1)).unwrap_err(),
        EngineError::DeadUnitReference(UnitId(1))
    );
    assert!(!game.unit(UnitId(1)).unwrap().alive);
}

#[test]
fn test_actions_after_result_are_rejected() {
    let mut game = soldier_match(MatchConfig::standard(), 0, 0).build().unwrap();
    assert_eq!(game.phase(), Phase::Result);

    assert_eq!(
        game.submit_pass().unwrap_err(),
        EngineError::WrongPhase {
            expected: Phase::Deployment,
            actual: Phase::Result
        }
    );
    assert!(!game.tick_timer(100.0));
    assert_eq!(game.run_ai_turn().unwrap(), None);
}

// =============================================================================
// Deployment limits
// =============================================================================

#[test]
fn test_deployment_turn_limit_forfeits_queued_units() {
    let config = MatchConfig::standard().with_deployment_turn_limit(3);
    let mut game = soldier_match(config, 3, 3).build().unwrap();

    game.submit_placement(BoardId::A, 0, 0).unwrap();
    game.submit(Side::Ai, Action::place(BoardId::A, 5, 0)).unwrap();
    game.submit_pass().unwrap();

    assert_eq!(game.phase(), Phase::Combat);
    assert!(game.queue(Side::Player).is_empty());
    assert!(game.queue(Side::Ai).is_empty());
    assert_eq!(game.boards().occupied_count(), 2);
}

#[test]
fn test_placement_limit_ends_deployment() {
    let config = MatchConfig::standard().with_max_total_placements(2);
    let mut game = soldier_match(config, 3, 3).build().unwrap();

    game.submit_placement(BoardId::A, 0, 0).unwrap();
    game.submit(Side::Ai, Action::place(BoardId::B, 5, 0)).unwrap();

    assert_eq!(game.phase(), Phase::Combat);
    assert_eq!(game.placements(), 2);
}

#[test]
fn test_side_with_empty_queue_is_skipped() {
    let mut game = soldier_match(MatchConfig::standard(), 3, 1).build().unwrap();
    game.submit_placement(BoardId::A, 0, 0).unwrap();
    game.submit(Side::Ai, Action::place(BoardId::A, 5, 0)).unwrap();

    assert_eq!(game.active_side(), Side::Player);
    game.submit_placement(BoardId::A, 0, 1).unwrap();
    assert_eq!(game.active_side(), Side::Player);
    game.submit_placement(BoardId::A, 0, 2).unwrap();
    assert_eq!(game.phase(), Phase::Combat);
}

#[test]
fn test_full_boards_end_deployment() {
    let config = MatchConfig::extended().with_max_roster_size(20);
    let mut game = soldier_match(config, 20, 20).build().unwrap();

    let cells: Vec<_> = BoardId::ALL
        .into_iter()
        .flat_map(|board| (0..6).flat_map(move |x| (0..3).map(move |y| (board, x, y))))
        .collect();
    for (board, x, y) in cells {
        let side = game.active_side();
        game.submit(side, Action::place(board, x, y)).unwrap();
    }

    assert_eq!(game.phase(), Phase::Combat);
    assert!(!game.boards().has_empty_cell());
}

// =============================================================================
// AI turns
// =============================================================================

#[test]
fn test_run_until_human_stops_on_player_turn() {
    init_tracing();
    let mut game = soldier_match(MatchConfig::standard(), 2, 2)
        .with_ai(Side::Ai, &AiConfig::default())
        .build()
        .unwrap();

    assert_eq!(game.run_until_human().unwrap(), 0);
    game.submit_placement(BoardId::A, 0, 0).unwrap();
    assert_eq!(game.run_until_human().unwrap(), 1);
    assert_eq!(game.active_side(), Side::Player);
    assert_eq!(game.queue(Side::Ai).len(), 1);
}

#[test]
fn test_ai_vs_ai_reaches_result() {
    init_tracing();
    for difficulty in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard, Difficulty::Expert] {
        let ai = AiConfig::default().with_difficulty(difficulty);
        let mut game = MatchBuilder::new(MatchConfig::standard().with_seed(7))
            .with_roster(
                Side::Player,
                Roster::of([jobs::WARRIOR, jobs::ARCHER, jobs::PRIEST, jobs::KNIGHT]),
            )
            .with_roster(
                Side::Ai,
                Roster::of([jobs::ROGUE, jobs::GUNNER, jobs::SAGE, jobs::WIZARD]),
            )
            .with_ai(Side::Player, &ai)
            .with_ai(Side::Ai, &ai)
            .build()
            .unwrap();

        let turns = game.run_until_human().unwrap();

        assert_eq!(game.phase(), Phase::Result);
        assert_eq!(turns, game.history().len());
        assert!(turns <= 8 + 20);
        assert!(game.result().is_some());
    }
}

#[test]
fn test_same_seed_replays_identically() {
    let play = || {
        let mut game = soldier_match(MatchConfig::standard().with_seed(99), 4, 4)
            .with_ai(Side::Player, &AiConfig::default().with_difficulty(Difficulty::Easy))
            .with_ai(Side::Ai, &AiConfig::default().with_difficulty(Difficulty::Easy))
            .build()
            .unwrap();
        game.run_until_human().unwrap();
        game.snapshot()
    };

    let first = play();
    let second = play();
    assert_eq!(first.history, second.history);
    assert_eq!(first.result, second.result);
}

#[test]
fn test_injected_components_are_used() {
    let mut game = MatchBuilder::new(MatchConfig::standard())
        .with_registry(soldier_registry())
        .with_roster(Side::Player, soldiers(1))
        .with_roster(Side::Ai, soldiers(1))
        .with_combat_resolver(CombatResolver::from_seed(5))
        .with_strategist(Side::Ai, Box::new(HeuristicStrategist::default()))
        .build()
        .unwrap();

    assert!(game.is_ai(Side::Ai));
    game.submit_placement(BoardId::A, 2, 1).unwrap();
    let action = game.run_ai_turn().unwrap().unwrap();
    assert!(matches!(action, Action::Place { .. }));
    assert_eq!(game.phase(), Phase::Combat);
}

// =============================================================================
// Observation
// =============================================================================

#[test]
fn test_listener_sees_phase_changes() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);

    let mut game = soldier_match(MatchConfig::standard(), 1, 1)
        .with_listener(move |event: &MatchEvent| {
            if let MatchEvent::PhaseChanged { to, .. } = event {
                sink.lock().unwrap().push(*to);
            }
        })
        .build()
        .unwrap();

    game.submit_placement(BoardId::A, 0, 0).unwrap();
    game.submit(Side::Ai, Action::place(BoardId::B, 0, 0)).unwrap();
    game.submit_pass().unwrap();
    for _ in 0..19 {
        let side = game.active_side();
        game.submit(side, Action::Pass).unwrap();
    }

    assert_eq!(game.phase(), Phase::Result);
    assert_eq!(*seen.lock().unwrap(), vec![Phase::Combat, Phase::Result]);
}

#[test]
fn test_event_sequence_for_a_hit() {
    let mut game = soldier_match(MatchConfig::standard(), 1, 1).build().unwrap();
    game.submit_placement(BoardId::A, 0, 0).unwrap();
    game.submit(Side::Ai, Action::place(BoardId::A, 0, 1)).unwrap();
    game.drain_events();

    game.submit_attack(UnitId(0), UnitId(1)).unwrap();

    let events = game.drain_events();
    assert!(matches!(
        events[0],
        MatchEvent::UnitDamaged { damage: 10, critical: false, remaining_hp: 90, .. }
    ));
    assert!(matches!(
        events[1],
        MatchEvent::TurnChanged { side: Side::Ai, phase: Phase::Combat, .. }
    ));
}

#[test]
fn test_snapshot_is_stable_while_match_moves() {
    let mut game = soldier_match(MatchConfig::standard(), 2, 2).build().unwrap();
    let start = game.snapshot();

    game.submit_placement(BoardId::A, 3, 1).unwrap();
    let after = game.snapshot();

    assert_eq!(start.boards.occupied_count(), 0);
    assert_eq!(start.queues[Side::Player].len(), 2);
    assert_eq!(after.boards.occupied_count(), 1);
    assert_eq!(after.queues[Side::Player].len(), 1);
    assert_eq!(after.history.len(), 1);
    assert_eq!(after.turn.active_side, Side::Ai);
    assert!(!after.is_finished());
}

#[test]
fn test_snapshot_serializes() {
    let mut game = soldier_match(MatchConfig::standard(), 1, 1).build().unwrap();
    game.submit_placement(BoardId::B, 1, 1).unwrap();

    let snapshot = game.snapshot();
    let bytes = bincode::serialize(snapshot.as_ref()).unwrap();
    let decoded: tile_tactics::core::MatchSnapshot = bincode::deserialize(&bytes).unwrap();
    assert_eq!(decoded, *snapshot);

    let json = serde_json::to_string(snapshot.as_ref()).unwrap();
    assert!(json.contains("Deployment"));
}

#[test]
fn test_abandon_consumes_match() {
    let game = soldier_match(MatchConfig::standard(), 1, 1).build().unwrap();
    game.abandon();
}
