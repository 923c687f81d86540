//! Hooks for whoever drives a match loop (renderers, recorders, harnesses)

use crate::engine::events::MatchEvent;
use crate::engine::snapshot::MatchSnapshot;

/// Polled once per tick by [`super::Match::run_with`].
pub trait MatchObserver {
    /// Events produced by the tick that just ran
    fn on_events(&mut self, _events: &[MatchEvent]) {}

    /// "Render now". Only called when [`MatchObserver::wants_snapshots`]
    /// returns true, since building a snapshot allocates.
    fn on_tick(&mut self, _snapshot: &MatchSnapshot) {}

    fn wants_snapshots(&self) -> bool {
        false
    }

    /// Checked before each tick; stopping never interrupts a tick midway
    fn stop_requested(&self) -> bool {
        false
    }
}

/// Headless: observes nothing, never stops early
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl MatchObserver for NullObserver {}

/// Keeps every event, optionally stopping after a tick budget
#[derive(Debug, Default, Clone)]
pub struct EventRecorder {
    pub events: Vec<MatchEvent>,
    pub ticks_seen: u64,
    pub max_ticks: Option<u64>,
}

impl EventRecorder {
    pub fn with_tick_limit(max_ticks: u64) -> Self {
        Self { max_ticks: Some(max_ticks), ..Self::default() }
    }

    pub fn goals(&self) -> usize {
        self.events.iter().filter(|e| matches!(e, MatchEvent::Goal { .. })).count()
    }
}

impl MatchObserver for EventRecorder {
    fn on_events(&mut self, events: &[MatchEvent]) {
        self.ticks_seen += 1;
        self.events.extend_from_slice(events);
    }

    fn stop_requested(&self) -> bool {
        self.max_ticks.is_some_and(|max| self.ticks_seen >= max)
    }
}
