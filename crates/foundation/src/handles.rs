use std::cell::Cell;
use std::rc::Rc;

/// Stop flag shared by the owner of a recurring loop and the loop itself.
///
/// Clones observe the same flag. Once stopped a handle never restarts; a new
/// loop gets a new handle.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Rc<Cell<bool>>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.get()
    }

    /// True when both handles control the same loop.
    pub fn same_loop(&self, other: &StopHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::StopHandle;

    #[test]
    fn clones_share_the_flag() {
        let owner = StopHandle::new();
        let looped = owner.clone();
        assert!(!looped.is_stopped());
        owner.stop();
        assert!(looped.is_stopped());
        assert!(owner.same_loop(&looped));
    }

    #[test]
    fn fresh_handles_are_independent() {
        let a = StopHandle::new();
        let b = StopHandle::new();
        a.stop();
        assert!(!b.is_stopped());
        assert!(!a.same_loop(&b));
    }
}
