//! Event sinks: where the engines send their trace.

use super::GameEvent;

/// Append-only consumer of game events.
///
/// The engines call `record` for every observable occurrence; what happens
/// to the event after that - kept, exported, dropped - is the sink's
/// business.
pub trait EventSink {
    fn record(&mut self, event: GameEvent);
}

/// In-memory event log keeping the full trace.
///
/// Events are only ever appended; [`clear`](EventLog::clear) is the one
/// operation that removes anything, and it empties the whole log.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events, in emission order.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterate over the recorded events.
    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.events.iter()
    }

    /// Drop every recorded event.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Export the log as JSON lines, one event per line.
    pub fn to_json_lines(&self) -> serde_json::Result<String> {
        let mut out = String::new();
        for event in &self.events {
            out.push_str(&serde_json::to_string(event)?);
            out.push('\n');
        }
        Ok(out)
    }
}

impl EventSink for EventLog {
    fn record(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

/// Sink that discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&mut self, _event: GameEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{EventContext, EventKind};

    fn sample_event(game_id: u64) -> GameEvent {
        GameEvent::TurnEnd {
            context: EventContext::new(0, game_id),
            final_tiles: vec![1, 2],
            score: 3,
            shut: false,
        }
    }

    #[test]
    fn test_log_appends_in_order() {
        let mut log = EventLog::new();
        assert!(log.is_empty());

        log.record(sample_event(1));
        log.record(sample_event(2));

        assert_eq!(log.len(), 2);
        assert_eq!(log.events()[0].context().game_id, 1);
        assert_eq!(log.events()[1].context().game_id, 2);
    }

    #[test]
    fn test_log_clear() {
        let mut log = EventLog::new();
        log.record(sample_event(1));
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn test_json_lines_export() {
        let mut log = EventLog::new();
        log.record(sample_event(1));
        log.record(sample_event(2));

        let lines = log.to_json_lines().unwrap();
        assert_eq!(lines.lines().count(), 2);
        for line in lines.lines() {
            let event: GameEvent = serde_json::from_str(line).unwrap();
            assert_eq!(event.kind(), EventKind::TurnEnd);
        }
    }

    #[test]
    fn test_null_sink_discards() {
        let mut sink = NullSink;
        sink.record(sample_event(1));
        // Nothing to observe; the call simply must not panic.
    }
}
