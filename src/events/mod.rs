//! Match events for presentation layers.
//!
//! The coordinator emits a `MatchEvent` for every observable change. Events
//! are delivered synchronously to registered listeners and also buffered, so
//! a caller without listeners can poll them with `drain`.

use serde::{Deserialize, Serialize};

use crate::board::{Location, Position};
use crate::core::{BoardId, Phase, Side, UnitId};
use crate::rules::{BoardScore, MatchScore};

/// Something observable happened in the match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum MatchEvent {
    PhaseChanged {
        from: Phase,
        to: Phase,
    },
    TurnChanged {
        turn: u32,
        side: Side,
        phase: Phase,
    },
    UnitPlaced {
        unit: UnitId,
        side: Side,
        location: Location,
        /// Opposing units' cells inside the new unit's pattern.
        threatened: Vec<Position>,
    },
    UnitDamaged {
        attacker: UnitId,
        defender: UnitId,
        board: BoardId,
        damage: i32,
        critical: bool,
        remaining_hp: i32,
    },
    UnitDefeated {
        unit: UnitId,
        side: Side,
        location: Location,
    },
    BoardScoreChanged {
        score: BoardScore,
    },
    TurnTimedOut {
        side: Side,
        phase: Phase,
        turn: u32,
    },
    MatchFinished {
        score: MatchScore,
    },
}

/// Receives events as they are emitted.
pub trait EventListener: Send {
    fn on_event(&mut self, event: &MatchEvent);
}

impl<F> EventListener for F
where
    F: FnMut(&MatchEvent) + Send,
{
    fn on_event(&mut self, event: &MatchEvent) {
        self(event);
    }
}

/// Fan-out of events to listeners plus a pending buffer.
#[derive(Default)]
pub struct EventBus {
    listeners: Vec<Box<dyn EventListener>>,
    pending: Vec<MatchEvent>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.len())
            .field("pending", &self.pending)
            .finish()
    }
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl EventListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Notify listeners, then buffer the event.
    pub fn emit(&mut self, event: MatchEvent) {
        for listener in &mut self.listeners {
            listener.on_event(&event);
        }
        self.pending.push(event);
    }

    /// Take every buffered event, oldest first.
    pub fn drain(&mut self) -> Vec<MatchEvent> {
        std::mem::take(&mut self.pending)
    }

    #[must_use]
    pub fn pending(&self) -> &[MatchEvent] {
        &self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_listeners_and_buffer() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let mut bus = EventBus::new();
        bus.subscribe(move |event: &MatchEvent| sink.lock().unwrap().push(event.clone()));

        let event = MatchEvent::PhaseChanged {
            from: Phase::Deployment,
            to: Phase::Combat,
        };
        bus.emit(event.clone());

        assert_eq!(seen.lock().unwrap().as_slice(), &[event.clone()]);
        assert_eq!(bus.pending().len(), 1);
        assert_eq!(bus.drain(), vec![event]);
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_event_json() {
        let event = MatchEvent::TurnTimedOut {
            side: Side::Player,
            phase: Phase::Deployment,
            turn: 1,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("TurnTimedOut"));
        let decoded: MatchEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, decoded);
    }
}
