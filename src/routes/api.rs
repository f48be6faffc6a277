use std::time::Instant;

use log::warn;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::State;
use serde_json::{json, Value};

use crate::background::scene::Scene;
use crate::interact::UiEvent;
use crate::routes::{Background, SiteState};
use crate::site::UiState;

type ApiError = (Status, Json<Value>);

fn api_error(status: Status, message: &str) -> ApiError {
    (status, Json(json!({ "error": message })))
}

// ── Events ─────────────────────────────────────────────

#[post("/events", format = "json", data = "<event>")]
pub fn dispatch(state: &State<SiteState>, event: Json<UiEvent>) -> Result<Json<UiState>, ApiError> {
    let mut site = state
        .lock()
        .map_err(|status| api_error(status, "Site unavailable"))?;
    if let Err(e) = site.dispatch(event.into_inner(), Instant::now()) {
        warn!("Rejected UI event: {}", e);
        return Err(api_error(Status::UnprocessableEntity, &e));
    }
    Ok(Json(site.ui_state()))
}

#[get("/state")]
pub fn ui_state(state: &State<SiteState>) -> Result<Json<UiState>, Status> {
    let mut site = state.lock()?;
    site.tick(Instant::now()).map_err(|_| Status::InternalServerError)?;
    Ok(Json(site.ui_state()))
}

// ── Background ─────────────────────────────────────────

#[get("/background")]
pub fn background(bg: &State<Background>) -> Result<Json<Scene>, Status> {
    let scene = bg.scene.lock().map_err(|_| Status::InternalServerError)?;
    Ok(Json(scene.clone()))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![dispatch, ui_state, background]
}
