use foundation::StopHandle;

#[derive(Debug)]
struct Pending<T> {
    due_ms: f64,
    payload: T,
    handle: StopHandle,
}

/// A single cancellable one-shot timer.
///
/// Scheduling replaces (and stops) whatever was pending. The host polls it
/// from its frame loop; the payload comes out exactly once.
#[derive(Debug)]
pub struct DelayedAction<T> {
    pending: Option<Pending<T>>,
}

impl<T> Default for DelayedAction<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> DelayedAction<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now_ms: f64, delay_ms: f64, payload: T) -> StopHandle {
        self.cancel();
        let handle = StopHandle::new();
        self.pending = Some(Pending {
            due_ms: now_ms + delay_ms.max(0.0),
            payload,
            handle: handle.clone(),
        });
        handle
    }

    pub fn cancel(&mut self) {
        if let Some(p) = self.pending.take() {
            p.handle.stop();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|p| !p.handle.is_stopped())
    }

    pub fn due_ms(&self) -> Option<f64> {
        self.pending.as_ref().map(|p| p.due_ms)
    }

    /// Takes the payload once `now_ms` reaches the due time.
    pub fn poll(&mut self, now_ms: f64) -> Option<T> {
        let p = self.pending.as_ref()?;
        if p.handle.is_stopped() {
            self.pending = None;
            return None;
        }
        if now_ms < p.due_ms {
            return None;
        }
        self.pending.take().map(|p| p.payload)
    }
}
