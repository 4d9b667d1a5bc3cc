use foundation::{Generation, StopHandle};

/// Coarse driver state, for hosts that only need to know whether to keep
/// requesting frames.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FlightState {
    Idle,
    Flying,
}

/// Outcome of a single [`FlightDriver::tick`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FlightTick {
    /// Nothing in flight.
    Idle,
    /// The flight advanced to `phase`. When `finished` is set this was the
    /// clamped final frame and the driver is Idle again.
    Frame { phase: f64, finished: bool },
    /// The flight was stopped or its route was replaced. The driver dropped
    /// to Idle without producing a frame.
    Abandoned,
}

#[derive(Debug, Clone)]
struct Flight {
    generation: Generation,
    duration_ms: f64,
    start_ms: Option<f64>,
    phase: f64,
    handle: StopHandle,
}

/// Time-driven flythrough progress.
///
/// The driver never schedules itself; the host calls [`tick`](Self::tick)
/// once per animation frame. Phase is `(now - start) / duration`, clamped to
/// `[0, 1]`, with the start timestamp taken from the first tick.
#[derive(Debug, Default)]
pub struct FlightDriver {
    active: Option<Flight>,
}

impl FlightDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a flight for the route `generation`, stopping any flight
    /// already running. Returns the handle of the new flight.
    pub fn start(&mut self, generation: Generation, duration_ms: f64) -> StopHandle {
        self.stop();
        let handle = StopHandle::new();
        self.active = Some(Flight {
            generation,
            duration_ms,
            start_ms: None,
            phase: 0.0,
            handle: handle.clone(),
        });
        handle
    }

    pub fn stop(&mut self) {
        if let Some(flight) = self.active.take() {
            flight.handle.stop();
        }
    }

    pub fn state(&self) -> FlightState {
        if self.active.is_some() {
            FlightState::Flying
        } else {
            FlightState::Idle
        }
    }

    pub fn is_flying(&self) -> bool {
        self.active.is_some()
    }

    pub fn phase(&self) -> Option<f64> {
        self.active.as_ref().map(|f| f.phase)
    }

    pub fn generation(&self) -> Option<Generation> {
        self.active.as_ref().map(|f| f.generation)
    }

    pub fn handle(&self) -> Option<&StopHandle> {
        self.active.as_ref().map(|f| &f.handle)
    }

    /// Advances the flight to `now_ms`.
    ///
    /// `current` is the generation of the route loaded right now; a flight
    /// started for any other generation is abandoned.
    pub fn tick(&mut self, now_ms: f64, current: Generation) -> FlightTick {
        let Some(flight) = self.active.as_mut() else {
            return FlightTick::Idle;
        };

        if flight.handle.is_stopped() || flight.generation != current {
            self.stop();
            return FlightTick::Abandoned;
        }

        let start_ms = *flight.start_ms.get_or_insert(now_ms);
        let raw = if flight.duration_ms > 0.0 && flight.duration_ms.is_finite() {
            (now_ms - start_ms) / flight.duration_ms
        } else {
            1.0
        };
        // Monotonic even if the host hands us an older timestamp.
        let phase = raw.clamp(0.0, 1.0).max(flight.phase);
        flight.phase = phase;

        let finished = phase >= 1.0;
        if finished {
            self.stop();
        }
        FlightTick::Frame { phase, finished }
    }
}

/// Camera bearing for a phase, sweeping linearly from 0 to `sweep_deg`.
pub fn sweep_bearing(phase: f64, sweep_deg: f64) -> f64 {
    phase * sweep_deg
}
