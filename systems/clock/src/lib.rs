#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! One-second game clock that converts elapsed time into tick commands.
//!
//! The clock starts when its map enters `Playing` and is cancelled for good
//! once the map reaches a terminal state. Every emitted tick is addressed to
//! the session that owns the clock, so the world can discard ticks from a
//! superseded map.

use std::time::Duration;

use tracing::debug;
use wordhex_core::{Command, Event, MapState, SessionId};

/// Interval between two ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Running,
    Cancelled,
}

/// Recurring timer owned by a single map session.
#[derive(Debug)]
pub struct Clock {
    session: SessionId,
    phase: Phase,
    accumulator: Duration,
}

impl Clock {
    /// Creates an idle clock for the provided session.
    #[must_use]
    pub const fn new(session: SessionId) -> Self {
        Self {
            session,
            phase: Phase::Idle,
            accumulator: Duration::ZERO,
        }
    }

    /// Session the clock schedules ticks for.
    #[must_use]
    pub const fn session(&self) -> SessionId {
        self.session
    }

    /// Reports whether ticks are currently being scheduled.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Starts an idle clock. Returns whether the clock started.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.phase = Phase::Running;
        true
    }

    /// Stops the clock permanently.
    ///
    /// Cancelling an already cancelled clock is a no-op; the return value
    /// reports whether this call performed the cancellation.
    pub fn cancel(&mut self) -> bool {
        if self.phase == Phase::Cancelled {
            return false;
        }
        self.phase = Phase::Cancelled;
        self.accumulator = Duration::ZERO;
        debug!(session = self.session.get(), "clock cancelled");
        true
    }

    /// Reacts to map state changes reported by the world.
    pub fn handle(&mut self, events: &[Event]) {
        for event in events {
            if let Event::MapStateChanged { to, .. } = event {
                match to {
                    MapState::Playing => {
                        let _ = self.start();
                    }
                    MapState::Won | MapState::Failed => {
                        let _ = self.cancel();
                    }
                    MapState::Loading | MapState::Created => {}
                }
            }
        }
    }

    /// Accumulates elapsed time and emits one tick per whole interval.
    pub fn advance(&mut self, dt: Duration, out: &mut Vec<Command>) {
        if !self.is_running() {
            return;
        }
        self.accumulator = self.accumulator.saturating_add(dt);
        while self.accumulator >= TICK_INTERVAL {
            self.accumulator -= TICK_INTERVAL;
            out.push(Command::Tick {
                session: self.session,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_change(to: MapState) -> Event {
        Event::MapStateChanged {
            from: MapState::Created,
            to,
        }
    }

    #[test]
    fn idle_clock_emits_nothing() {
        let mut clock = Clock::new(SessionId::new(1));
        let mut out = Vec::new();
        clock.advance(Duration::from_secs(5), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn running_clock_emits_one_tick_per_second() {
        let mut clock = Clock::new(SessionId::new(3));
        clock.handle(&[state_change(MapState::Playing)]);
        let mut out = Vec::new();
        clock.advance(Duration::from_millis(2_500), &mut out);
        assert_eq!(
            out,
            vec![
                Command::Tick {
                    session: SessionId::new(3),
                };
                2
            ]
        );
        out.clear();
        clock.advance(Duration::from_millis(500), &mut out);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn cancellation_is_idempotent() {
        let mut clock = Clock::new(SessionId::new(1));
        assert!(clock.start());
        assert!(clock.cancel());
        assert!(!clock.cancel());
        assert!(!clock.start());
        assert!(!clock.is_running());
    }

    #[test]
    fn terminal_state_stops_ticking() {
        let mut clock = Clock::new(SessionId::new(1));
        clock.handle(&[state_change(MapState::Playing)]);
        let mut out = Vec::new();
        clock.advance(Duration::from_millis(900), &mut out);
        clock.handle(&[state_change(MapState::Won)]);
        clock.advance(Duration::from_secs(3), &mut out);
        assert!(out.is_empty());
        clock.handle(&[state_change(MapState::Failed)]);
        assert!(!clock.is_running());
    }
}
