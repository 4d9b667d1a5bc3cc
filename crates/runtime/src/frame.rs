/// Deterministic frame metadata.
///
/// Browser hosts pass real animation-frame timestamps; headless runs and
/// tests step this fixed-dt timebase instead so a flythrough can be replayed
/// exactly.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    /// 0-based frame index.
    pub index: u64,
    /// Fixed delta time (milliseconds).
    pub dt_ms: f64,
    /// Timestamp of the frame (milliseconds since the clock origin).
    pub time_ms: f64,
}

impl Frame {
    pub fn new(index: u64, dt_ms: f64) -> Self {
        Self {
            index,
            dt_ms,
            time_ms: index as f64 * dt_ms,
        }
    }

    /// First frame of a clock running at `fps` frames per second.
    pub fn at_fps(fps: f64) -> Self {
        Self::new(0, 1000.0 / fps.max(1.0))
    }

    pub fn next(self) -> Self {
        Self::new(self.index + 1, self.dt_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::Frame;

    #[test]
    fn frame_time_is_deterministic() {
        let a = Frame::new(10, 1000.0 / 60.0);
        let b = Frame::new(10, 1000.0 / 60.0);
        assert_eq!(a, b);
        assert_eq!(a.time_ms, 10.0 * (1000.0 / 60.0));
    }

    #[test]
    fn next_advances_index_and_time() {
        let f0 = Frame::new(0, 500.0);
        let f1 = f0.next();
        assert_eq!(f1.index, 1);
        assert_eq!(f1.time_ms, 500.0);
    }

    #[test]
    fn fps_is_clamped() {
        assert_eq!(Frame::at_fps(50.0).dt_ms, 20.0);
        assert_eq!(Frame::at_fps(0.0).dt_ms, 1000.0);
    }
}
