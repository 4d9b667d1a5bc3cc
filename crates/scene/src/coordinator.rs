//! Turns discrete user actions and animation frames into [`ViewPatch`]es.
//!
//! The coordinator owns the loaded route and the animation loops; the
//! [`ViewState`] stays with the host, which passes it in by reference and
//! applies whatever patch comes back.

use foundation::Generation;
use foundation::math::LonLat;
use runtime::{
    DashAnimator, DelayedAction, EventBus, FlightDriver, FlightState, FlightTick, sweep_bearing,
};
use tracing::{debug, info, warn};

use crate::config::{FitConfig, ViewerConfig};
use crate::profile::{elevation_profile, nearest_row};
use crate::route::{EmptyRouteError, Route, RouteSample, build_from_points};
use crate::view::{CameraCommand, CameraPose, ViewPatch, ViewState};

pub struct ViewCoordinator {
    config: ViewerConfig,
    route: Option<Route>,
    generation: Generation,
    flight: FlightDriver,
    pending_flight: DelayedAction<Generation>,
    dash: DashAnimator,
    events: EventBus,
}

impl ViewCoordinator {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            route: None,
            generation: Generation::default(),
            flight: FlightDriver::new(),
            pending_flight: DelayedAction::new(),
            dash: DashAnimator::new(),
            events: EventBus::new(),
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn initial_view(&self) -> ViewState {
        ViewState::new(self.config.initial_view)
    }

    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn flight_state(&self) -> FlightState {
        self.flight.state()
    }

    /// True while a flight is scheduled or running.
    pub fn is_busy(&self) -> bool {
        self.flight.is_flying() || self.pending_flight.is_pending()
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut EventBus {
        &mut self.events
    }

    /// Replaces the loaded route.
    ///
    /// An empty sample list is rejected and leaves everything untouched. A
    /// flight running for the previous route is not stopped here; its next
    /// tick sees the new generation and drops out.
    pub fn load_route(
        &mut self,
        now_ms: f64,
        samples: &[RouteSample],
        name: Option<String>,
    ) -> Result<ViewPatch, EmptyRouteError> {
        let route = build_from_points(samples)?;
        self.generation = self.generation.next();
        let route = route.with_name(name).with_generation(self.generation);

        let mut patch = ViewPatch {
            current_position: Some(route.first_position()),
            camera_commands: vec![fit_command(&self.config.fit, &route)],
            ..ViewPatch::default()
        };
        patch.elevation_profile = Some(match elevation_profile(&route) {
            Ok(rows) => rows,
            Err(e) => {
                warn!(error = %e, "elevation chart disabled for this route");
                Vec::new()
            }
        });

        self.dash.start();
        if let Some(pattern) = self.dash.tick(now_ms) {
            patch.dash_pattern = Some(pattern.to_vec());
        }

        info!(
            generation = self.generation.get(),
            points = route.len(),
            total_m = route.total_distance_m(),
            "route loaded"
        );
        self.events.emit(
            now_ms,
            "route.loaded",
            format!("gen {} ({} points)", self.generation.get(), route.len()),
        );
        self.route = Some(route);
        Ok(patch)
    }

    /// Starts the approach flight to the current position and schedules the
    /// flythrough. A no-op without a route or a current position.
    pub fn fly(&mut self, view: &ViewState, now_ms: f64) -> ViewPatch {
        let (Some(route), Some(position)) = (self.route.as_ref(), view.current_position) else {
            debug!("fly ignored: nothing loaded");
            return ViewPatch::default();
        };
        if route.total_distance_m().is_none() {
            warn!("fly ignored: route has no cumulative distances");
            return ViewPatch::default();
        }

        let flight = &self.config.flight;
        self.flight.stop();
        let pose = CameraPose {
            center: position,
            pitch_deg: flight.pitch_deg,
            bearing_deg: 0.0,
            zoom: flight.zoom,
        };
        let delay_ms = flight.start_delay_ms();
        self.pending_flight
            .schedule(now_ms, delay_ms, self.generation);
        self.events.emit(
            now_ms,
            "flight.scheduled",
            format!("gen {} in {delay_ms} ms", self.generation.get()),
        );

        ViewPatch {
            camera_commands: vec![CameraCommand::FlyTo {
                pose,
                duration_ms: flight.approach_duration_ms,
            }],
            flying: Some(true),
            ..ViewPatch::default()
        }
    }

    /// Moves the marker to a position picked on the elevation chart. The
    /// camera stays where it is.
    pub fn hover_position(&mut self, position: LonLat) -> ViewPatch {
        if self.route.is_none() {
            return ViewPatch::default();
        }
        ViewPatch {
            current_position: Some(position),
            ..ViewPatch::default()
        }
    }

    /// Like [`hover_position`](Self::hover_position), addressed by dataset row.
    pub fn hover_profile_row(&mut self, view: &ViewState, index: usize) -> ViewPatch {
        match view.elevation_profile.get(index) {
            Some(row) => self.hover_position(LonLat::new(row.lon, row.lat)),
            None => ViewPatch::default(),
        }
    }

    /// For chart cursors that report an x value: snaps to the row nearest
    /// `distance_km`.
    pub fn hover_distance_km(&mut self, view: &ViewState, distance_km: f64) -> ViewPatch {
        match nearest_row(&view.elevation_profile, distance_km) {
            Some(row) => self.hover_position(LonLat::new(row.lon, row.lat)),
            None => ViewPatch::default(),
        }
    }

    pub fn toggle_style(&mut self, view: &ViewState, now_ms: f64) -> ViewPatch {
        let style = view.style.toggled();
        self.events
            .emit(now_ms, "style.toggled", format!("{style:?}"));
        ViewPatch {
            style: Some(style),
            ..ViewPatch::default()
        }
    }

    /// Advances every loop to `now_ms`: the deferred flight start, the
    /// flight itself and the dash pattern.
    pub fn tick(&mut self, now_ms: f64) -> ViewPatch {
        let mut patch = ViewPatch::default();

        if let Some(scheduled_for) = self.pending_flight.poll(now_ms) {
            let total_m = self.route.as_ref().and_then(Route::total_distance_m);
            match total_m {
                Some(total_m) if scheduled_for == self.generation => {
                    let duration_ms = self.config.flight.duration_ms(total_m);
                    self.flight.start(scheduled_for, duration_ms);
                    self.events.emit(
                        now_ms,
                        "flight.started",
                        format!("gen {} for {duration_ms} ms", scheduled_for.get()),
                    );
                }
                _ => {
                    debug!(scheduled_for = scheduled_for.get(), "scheduled flight is stale");
                    self.events
                        .emit(now_ms, "flight.stale", format!("gen {}", scheduled_for.get()));
                    patch.flying = Some(false);
                }
            }
        }

        match self.flight.tick(now_ms, self.generation) {
            FlightTick::Idle => {}
            FlightTick::Abandoned => {
                debug!("flight abandoned");
                self.events.emit(now_ms, "flight.stale", "route replaced or stopped");
                patch.flying = Some(false);
            }
            FlightTick::Frame { phase, finished } => {
                self.flight_frame(now_ms, phase, finished, &mut patch);
            }
        }

        if let Some(pattern) = self.dash.tick(now_ms) {
            patch.dash_pattern = Some(pattern.to_vec());
        }
        patch
    }

    fn flight_frame(&mut self, now_ms: f64, phase: f64, finished: bool, patch: &mut ViewPatch) {
        let Some(route) = self.route.as_ref() else {
            self.flight.stop();
            patch.flying = Some(false);
            return;
        };
        let flight = &self.config.flight;
        let sampled = route
            .total_distance_m()
            .ok_or(crate::route::RouteSamplingError::NoDistances)
            .and_then(|total_m| route.point_at_distance(total_m * phase));

        match sampled {
            Ok(position) => {
                patch.current_position = Some(position);
                patch.camera_commands.push(CameraCommand::EaseTo {
                    pose: CameraPose {
                        center: position,
                        pitch_deg: flight.pitch_deg,
                        bearing_deg: sweep_bearing(phase, flight.bearing_sweep_deg),
                        zoom: flight.zoom,
                    },
                    duration_ms: 0.0,
                });
            }
            Err(e) => {
                warn!(error = %e, phase, "flight sampling failed");
                self.flight.stop();
                self.events.emit(now_ms, "flight.failed", e.to_string());
                patch.flying = Some(false);
                return;
            }
        }

        if finished {
            patch
                .camera_commands
                .push(fit_command(&self.config.fit, route));
            patch.flying = Some(false);
            self.events.emit(
                now_ms,
                "flight.finished",
                format!("gen {}", route.generation().get()),
            );
        }
    }
}

fn fit_command(fit: &FitConfig, route: &Route) -> CameraCommand {
    CameraCommand::fit_bounds(route.bounds(), fit.padding_px, fit.duration_ms)
}

#[cfg(test)]
mod tests {
    use super::ViewCoordinator;
    use crate::config::ViewerConfig;
    use crate::route::RouteSample;
    use crate::view::{CameraCommand, MapStyleVariant, ViewState};
    use foundation::math::LonLat;
    use pretty_assertions::assert_eq;
    use runtime::FlightState;

    fn samples() -> Vec<RouteSample> {
        vec![
            RouteSample::new(114.00, 22.40).with_elevation(10.0).with_distance(0.0),
            RouteSample::new(114.01, 22.40).with_elevation(50.0).with_distance(500.0),
            RouteSample::new(114.01, 22.41).with_elevation(20.0).with_distance(1000.0),
        ]
    }

    fn loaded() -> (ViewCoordinator, ViewState) {
        let mut c = ViewCoordinator::new(ViewerConfig::default());
        let mut view = c.initial_view();
        let patch = c.load_route(0.0, &samples(), None).expect("load");
        view.apply(&patch);
        (c, view)
    }

    #[test]
    fn load_sets_marker_and_fits_camera() {
        let mut c = ViewCoordinator::new(ViewerConfig::default());
        let patch = c.load_route(0.0, &samples(), Some("loop".into())).expect("load");
        assert_eq!(patch.current_position, Some(LonLat::new(114.00, 22.40)));
        assert!(matches!(
            patch.camera_commands.as_slice(),
            [CameraCommand::FitBounds { padding_px, duration_ms, .. }]
                if *padding_px == 20.0 && *duration_ms == 2000.0
        ));
        assert_eq!(patch.elevation_profile.as_ref().map(Vec::len), Some(3));
        assert!(patch.dash_pattern.is_some());
        assert_eq!(c.route().and_then(|r| r.name()), Some("loop"));
        assert_eq!(c.generation().get(), 1);
    }

    #[test]
    fn empty_load_is_rejected_without_side_effects() {
        let (mut c, _view) = loaded();
        assert!(c.load_route(10.0, &[], None).is_err());
        assert_eq!(c.generation().get(), 1);
        assert_eq!(c.route().map(|r| r.len()), Some(3));
    }

    #[test]
    fn fly_without_route_is_a_no_op() {
        let mut c = ViewCoordinator::new(ViewerConfig::default());
        let view = c.initial_view();
        assert!(c.fly(&view, 0.0).is_empty());
        assert!(!c.is_busy());
    }

    #[test]
    fn fly_approaches_then_starts_after_delay() {
        let (mut c, mut view) = loaded();
        let patch = c.fly(&view, 1000.0);
        view.apply(&patch);
        assert!(matches!(
            patch.camera_commands.as_slice(),
            [CameraCommand::FlyTo { pose, duration_ms }]
                if pose.center == LonLat::new(114.00, 22.40)
                    && pose.pitch_deg == 50.0
                    && pose.zoom == 15.0
                    && *duration_ms == 2000.0
        ));
        assert!(view.flying);

        c.tick(3399.0);
        assert_eq!(c.flight_state(), FlightState::Idle);
        c.tick(3400.0);
        assert_eq!(c.flight_state(), FlightState::Flying);
    }

    #[test]
    fn hover_moves_marker_only() {
        let (mut c, mut view) = loaded();
        let camera = view.camera;
        let patch = c.hover_profile_row(&view, 1);
        view.apply(&patch);
        assert_eq!(view.current_position, Some(LonLat::new(114.01, 22.40)));
        assert_eq!(view.camera, camera);
        assert!(c.hover_profile_row(&view, 99).is_empty());
    }

    #[test]
    fn hover_by_distance_snaps_to_nearest_row() {
        let (mut c, mut view) = loaded();
        let patch = c.hover_distance_km(&view, 0.6);
        view.apply(&patch);
        assert_eq!(view.current_position, Some(LonLat::new(114.01, 22.40)));

        let patch = c.hover_distance_km(&view, 42.0);
        view.apply(&patch);
        assert_eq!(view.current_position, Some(LonLat::new(114.01, 22.41)));
    }

    #[test]
    fn hover_without_route_is_ignored() {
        let mut c = ViewCoordinator::new(ViewerConfig::default());
        assert!(c.hover_position(LonLat::new(1.0, 1.0)).is_empty());
    }

    #[test]
    fn style_toggle_flips_variant() {
        let (mut c, mut view) = loaded();
        let patch = c.toggle_style(&view, 0.0);
        view.apply(&patch);
        assert_eq!(view.style, MapStyleVariant::Satellite);
    }

    #[test]
    fn unmeasured_route_loads_but_cannot_fly() {
        let mut c = ViewCoordinator::new(ViewerConfig::default());
        let mut view = c.initial_view();
        let patch = c
            .load_route(0.0, &[RouteSample::new(1.0, 2.0), RouteSample::new(1.1, 2.0)], None)
            .expect("load");
        assert_eq!(patch.elevation_profile, Some(Vec::new()));
        view.apply(&patch);
        assert!(c.fly(&view, 0.0).is_empty());
    }
}
