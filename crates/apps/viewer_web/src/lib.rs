use console_error_panic_hook::set_once;
use gloo_net::http::Request;
use serde::Serialize;
use std::cell::RefCell;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use foundation::math::LonLat;
use formats::{GpxError, GpxPath, parse_gpx_named};
use layers::{ChartSpec, build_map_scene};
use runtime::Event;
use scene::{EmptyRouteError, Session, ViewPatch, ViewerConfig};

#[derive(Debug, Error)]
enum LoadError {
    #[error(transparent)]
    Gpx(#[from] GpxError),
    #[error(transparent)]
    Empty(#[from] EmptyRouteError),
}

thread_local! {
    static STATE: RefCell<Session> = RefCell::new(Session::default());
}

fn log(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Parses and loads a picked file. On error the session is left as it was.
fn load_named(
    session: &mut Session,
    name: &str,
    text: &str,
    now_ms: f64,
) -> Result<ViewPatch, LoadError> {
    let GpxPath { name: path_name, samples, .. } = parse_gpx_named(name, text)?;
    let label = path_name.or_else(|| Some(name.to_string()));
    Ok(session.load_route(now_ms, &samples, label)?)
}

/// Ticks the session and hands back the transitions recorded since the last
/// tick, leaving the log empty.
fn tick_and_drain(session: &mut Session, now_ms: f64) -> (ViewPatch, Vec<Event>) {
    let patch = session.tick(now_ms);
    let events = session.coordinator_mut().events_mut().drain();
    (patch, events)
}

/// Page clock in the same timebase as animation-frame timestamps.
fn clock_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    set_once();
    Ok(())
}

/// Replaces the session with one built from a JSON viewer config. Any loaded
/// route is dropped.
#[wasm_bindgen]
pub fn configure(config_json: &str) -> Result<(), JsValue> {
    let config =
        ViewerConfig::from_json_str(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    STATE.with(|state| {
        *state.borrow_mut() = Session::new(config);
    });
    Ok(())
}

/// Loads GPX text picked by the user. Returns false (and logs) when the
/// file is not usable; nothing on the map changes in that case.
#[wasm_bindgen]
pub fn load_gpx(name: &str, text: &str, now_ms: f64) -> bool {
    STATE.with(|state| match load_named(&mut state.borrow_mut(), name, text, now_ms) {
        Ok(_) => true,
        Err(err) => {
            log(&format!("gpx load error ({name}): {err}"));
            false
        }
    })
}

/// Fetches a GPX file (e.g. the bundled sample) and loads it. The load is
/// stamped with the page clock once the body has arrived.
#[wasm_bindgen]
pub fn load_gpx_url(url: String) {
    spawn_local(async move {
        let text = match fetch_text(&url).await {
            Ok(t) => t,
            Err(err) => {
                log(&format!("Failed to fetch gpx: {:?}", err));
                return;
            }
        };
        let name = url.rsplit('/').next().unwrap_or(&url).to_string();
        load_gpx(&name, &text, clock_ms());
    });
}

#[wasm_bindgen]
pub fn fly(now_ms: f64) -> Result<String, JsValue> {
    STATE.with(|state| to_json(&state.borrow_mut().fly(now_ms)))
}

/// Advances every loop. Call once per animation frame with its timestamp;
/// the returned patch holds the camera commands to forward to the map.
#[wasm_bindgen]
pub fn tick(now_ms: f64) -> Result<String, JsValue> {
    let (patch, events) = STATE.with(|state| tick_and_drain(&mut state.borrow_mut(), now_ms));
    for event in &events {
        log(&format!("[{:.0} ms] {}: {}", event.time_ms, event.kind, event.message));
    }
    to_json(&patch)
}

#[wasm_bindgen]
pub fn hover_profile(index: usize) -> Result<String, JsValue> {
    STATE.with(|state| to_json(&state.borrow_mut().hover_profile_row(index)))
}

/// Chart cursor reported as an x value (kilometers along the route).
#[wasm_bindgen]
pub fn hover_distance(distance_km: f64) -> Result<String, JsValue> {
    STATE.with(|state| to_json(&state.borrow_mut().hover_distance_km(distance_km)))
}

#[wasm_bindgen]
pub fn hover_position(lon: f64, lat: f64) -> Result<String, JsValue> {
    STATE.with(|state| to_json(&state.borrow_mut().hover_position(LonLat::new(lon, lat))))
}

#[wasm_bindgen]
pub fn toggle_style(now_ms: f64) -> Result<String, JsValue> {
    STATE.with(|state| to_json(&state.borrow_mut().toggle_style(now_ms)))
}

#[wasm_bindgen]
pub fn map_scene() -> Result<String, JsValue> {
    STATE.with(|state| {
        let s = state.borrow();
        let coordinator = s.coordinator();
        to_json(&build_map_scene(
            s.view(),
            coordinator.route(),
            coordinator.config(),
        ))
    })
}

#[wasm_bindgen]
pub fn view_state() -> Result<String, JsValue> {
    STATE.with(|state| to_json(state.borrow().view()))
}

#[wasm_bindgen]
pub fn elevation_profile() -> Result<String, JsValue> {
    STATE.with(|state| to_json(&state.borrow().view().elevation_profile))
}

#[wasm_bindgen]
pub fn chart_spec() -> Result<String, JsValue> {
    to_json(&ChartSpec::default())
}

#[wasm_bindgen]
pub fn is_flying() -> bool {
    STATE.with(|state| state.borrow().view().flying)
}

async fn fetch_text(url: &str) -> Result<String, JsValue> {
    let resp = Request::get(url)
        .send()
        .await
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    resp.text()
        .await
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
