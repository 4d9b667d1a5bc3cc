use foundation::StopHandle;

/// Dash-array frames for the moving-dashes route effect.
///
/// Each entry is a line dash array (dash, gap, ...) in line-width units;
/// stepping through them makes the dashes crawl along the line.
pub const DASH_SEQUENCE: [&[f64]; 14] = [
    &[0.0, 4.0, 3.0],
    &[0.5, 4.0, 2.5],
    &[1.0, 4.0, 2.0],
    &[1.5, 4.0, 1.5],
    &[2.0, 4.0, 1.0],
    &[2.5, 4.0, 0.5],
    &[3.0, 4.0, 0.0],
    &[0.0, 0.5, 3.0, 3.5],
    &[0.0, 1.0, 3.0, 3.0],
    &[0.0, 1.5, 3.0, 2.5],
    &[0.0, 2.0, 3.0, 2.0],
    &[0.0, 2.5, 3.0, 1.5],
    &[0.0, 3.0, 3.0, 1.0],
    &[0.0, 3.5, 3.0, 0.5],
];

/// Time each dash frame stays on screen (ms); a full cycle is 1.4 s.
pub const DASH_FRAME_MS: f64 = 100.0;

/// Index into [`DASH_SEQUENCE`] for a wall-clock timestamp.
pub fn dash_index_at(now_ms: f64) -> usize {
    let step = (now_ms / DASH_FRAME_MS).floor() as i64;
    step.rem_euclid(DASH_SEQUENCE.len() as i64) as usize
}

pub fn dash_pattern_at(now_ms: f64) -> &'static [f64] {
    DASH_SEQUENCE[dash_index_at(now_ms)]
}

/// The dash loop. Keyed purely on wall-clock time; runs until stopped.
#[derive(Debug, Default)]
pub struct DashAnimator {
    handle: Option<StopHandle>,
    last_index: Option<usize>,
}

impl DashAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the loop, stopping a previous one. At most one loop runs.
    pub fn start(&mut self) -> StopHandle {
        self.stop();
        let handle = StopHandle::new();
        self.handle = Some(handle.clone());
        handle
    }

    pub fn stop(&mut self) {
        if let Some(h) = self.handle.take() {
            h.stop();
        }
        self.last_index = None;
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_stopped())
    }

    /// Pattern to show at `now_ms`, or `None` when the loop is not running
    /// or the frame has not changed since the previous tick.
    pub fn tick(&mut self, now_ms: f64) -> Option<&'static [f64]> {
        if !self.is_running() {
            self.handle = None;
            return None;
        }
        let index = dash_index_at(now_ms);
        if self.last_index == Some(index) {
            return None;
        }
        self.last_index = Some(index);
        Some(DASH_SEQUENCE[index])
    }
}
