use std::sync::{Mutex, MutexGuard};

use log::error;
use rocket::http::Status;

use crate::background::animator::{AnimationHandle, SharedScene};
use crate::site::Site;

pub mod api;
pub mod public;

/// Rocket-managed site context.
pub struct SiteState(pub Mutex<Site>);

impl SiteState {
    pub fn new(site: Site) -> Self {
        SiteState(Mutex::new(site))
    }

    pub fn lock(&self) -> Result<MutexGuard<'_, Site>, Status> {
        self.0.lock().map_err(|_| {
            error!("Site state lock poisoned");
            Status::InternalServerError
        })
    }
}

/// Rocket-managed background scene plus the running animation, if any.
pub struct Background {
    pub scene: SharedScene,
    pub handle: Mutex<Option<AnimationHandle>>,
}

impl Background {
    pub fn new(scene: SharedScene) -> Self {
        Background { scene, handle: Mutex::new(None) }
    }
}
