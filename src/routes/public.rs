use std::time::Instant;

use log::error;
use rocket::http::Status;
use rocket::response::content::RawHtml;
use rocket::serde::json::Json;
use rocket::State;

use crate::models::portfolio::Portfolio;
use crate::routes::SiteState;

// ── Page ───────────────────────────────────────────────

#[get("/")]
pub fn homepage(state: &State<SiteState>) -> Result<RawHtml<String>, Status> {
    let mut site = state.lock()?;
    site.tick(Instant::now()).map_err(|e| {
        error!("Failed to apply timers: {}", e);
        Status::InternalServerError
    })?;
    site.html().map(RawHtml).map_err(|e| {
        error!("Failed to render page: {}", e);
        Status::InternalServerError
    })
}

// ── Data ───────────────────────────────────────────────

/// The loaded document; 404 when loading failed.
#[get("/mydata.json")]
pub fn data(state: &State<SiteState>) -> Result<Option<Json<Portfolio>>, Status> {
    let site = state.lock()?;
    Ok(site.portfolio().cloned().map(Json))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![homepage, data]
}
