/// Timestamped record of a viewer state transition.
///
/// Structured text for now: `kind` is a stable dotted tag such as
/// `flight.started`, `message` is free-form detail.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub time_ms: f64,
    pub kind: &'static str,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct EventBus {
    events: Vec<Event>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn emit(&mut self, time_ms: f64, kind: &'static str, message: impl Into<String>) {
        self.events.push(Event {
            time_ms,
            kind,
            message: message.into(),
        });
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn kinds(&self) -> Vec<&'static str> {
        self.events.iter().map(|e| e.kind).collect()
    }

    pub fn drain(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::EventBus;

    #[test]
    fn records_events_with_timestamp() {
        let mut bus = EventBus::new();
        bus.emit(16.0, "flight.started", "gen 1");
        assert_eq!(bus.events().len(), 1);
        assert_eq!(bus.events()[0].time_ms, 16.0);
        assert_eq!(bus.kinds(), vec!["flight.started"]);
    }

    #[test]
    fn drain_clears_events() {
        let mut bus = EventBus::new();
        bus.emit(0.0, "k", "m");
        let drained = bus.drain();
        assert_eq!(drained.len(), 1);
        assert!(bus.events().is_empty());
    }
}
