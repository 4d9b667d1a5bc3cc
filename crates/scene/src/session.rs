use foundation::math::LonLat;

use crate::config::ViewerConfig;
use crate::coordinator::ViewCoordinator;
use crate::route::{EmptyRouteError, RouteSample};
use crate::view::{ViewPatch, ViewState};

/// A coordinator together with the view state it patches.
///
/// Hosts that do not keep the state themselves (the browser bindings, the
/// CLI simulator) go through this; every call applies the patch and hands
/// it back so camera commands can be forwarded to the map widget.
pub struct Session {
    coordinator: ViewCoordinator,
    view: ViewState,
}

impl Session {
    pub fn new(config: ViewerConfig) -> Self {
        let coordinator = ViewCoordinator::new(config);
        let view = coordinator.initial_view();
        Self { coordinator, view }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn coordinator(&self) -> &ViewCoordinator {
        &self.coordinator
    }

    pub fn coordinator_mut(&mut self) -> &mut ViewCoordinator {
        &mut self.coordinator
    }

    pub fn load_route(
        &mut self,
        now_ms: f64,
        samples: &[RouteSample],
        name: Option<String>,
    ) -> Result<ViewPatch, EmptyRouteError> {
        let patch = self.coordinator.load_route(now_ms, samples, name)?;
        Ok(self.commit(patch))
    }

    pub fn fly(&mut self, now_ms: f64) -> ViewPatch {
        let patch = self.coordinator.fly(&self.view, now_ms);
        self.commit(patch)
    }

    pub fn hover_position(&mut self, position: LonLat) -> ViewPatch {
        let patch = self.coordinator.hover_position(position);
        self.commit(patch)
    }

    pub fn hover_profile_row(&mut self, index: usize) -> ViewPatch {
        let patch = self.coordinator.hover_profile_row(&self.view, index);
        self.commit(patch)
    }

    pub fn hover_distance_km(&mut self, distance_km: f64) -> ViewPatch {
        let patch = self.coordinator.hover_distance_km(&self.view, distance_km);
        self.commit(patch)
    }

    pub fn toggle_style(&mut self, now_ms: f64) -> ViewPatch {
        let patch = self.coordinator.toggle_style(&self.view, now_ms);
        self.commit(patch)
    }

    pub fn tick(&mut self, now_ms: f64) -> ViewPatch {
        let patch = self.coordinator.tick(now_ms);
        self.commit(patch)
    }

    fn commit(&mut self, patch: ViewPatch) -> ViewPatch {
        self.view.apply(&patch);
        patch
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}
