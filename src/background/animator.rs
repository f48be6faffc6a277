use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use log::{debug, error, info};
use rocket::tokio;
use rocket::tokio::task::JoinHandle;

use crate::background::scene::Scene;

pub type SharedScene = Arc<Mutex<Scene>>;

/// Cancels the frame loop started by [`start`].
#[derive(Debug)]
pub struct AnimationHandle {
    task: JoinHandle<()>,
}

impl AnimationHandle {
    pub fn stop(&self) {
        self.task.abort();
        info!("Background animation stopped");
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Seconds since the Unix epoch; drives the shape bob.
pub fn wall_clock_secs() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}

/// Advance the scene once per `interval` after an initial `delay`, until the
/// returned handle is stopped. Must be called from within the Tokio runtime.
pub fn start(scene: SharedScene, delay: Duration, interval: Duration) -> AnimationHandle {
    let task = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        debug!("Background animation running every {:?}", interval);
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            match scene.lock() {
                Ok(mut scene) => scene.step(wall_clock_secs()),
                Err(_) => {
                    error!("Background scene lock poisoned; animation halted");
                    break;
                }
            }
        }
    });
    AnimationHandle { task }
}
