#[macro_use]
extern crate rocket;

use std::fs;
use std::path::Path;
use std::process;

use log::{error, info};
use rocket::fairing::AdHoc;
use rocket::fs::FileServer;
use rocket::response::content::RawHtml;

mod background;
mod boot;
mod config;
mod interact;
mod loader;
mod markup;
mod models;
mod page;
mod render;
mod routes;
mod sections;
mod site;


use background::animator;
use config::FolioConfig;
use routes::{Background, SiteState};

#[catch(404)]
fn not_found() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>404</h1><p>Page not found.</p><a href='/'>← Home</a></body></html>".to_string())
}

#[catch(500)]
fn server_error() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>500</h1><p>Internal server error.</p><a href='/'>← Home</a></body></html>".to_string())
}

/// Assemble the preview server around an already-booted site.
pub fn build_rocket(config: &FolioConfig, site: site::Site) -> rocket::Rocket<rocket::Build> {
    let delay = config.animation_delay();
    let interval = config.frame_interval();

    rocket::build()
        .manage(Background::new(site.scene()))
        .manage(SiteState::new(site))
        .attach(AdHoc::on_liftoff("Background animation", move |rocket| {
            Box::pin(async move {
                if let Some(bg) = rocket.state::<Background>() {
                    let handle = animator::start(bg.scene.clone(), delay, interval);
                    if let Ok(mut slot) = bg.handle.lock() {
                        *slot = Some(handle);
                    }
                }
            })
        }))
        .attach(AdHoc::on_shutdown("Stop background animation", |rocket| {
            Box::pin(async move {
                if let Some(bg) = rocket.state::<Background>() {
                    if let Some(handle) = bg.handle.lock().ok().and_then(|mut slot| slot.take()) {
                        handle.stop();
                    }
                }
            })
        }))
        .mount("/static", FileServer::from(config.static_dir.as_str()))
        .mount("/", routes::public::routes())
        .mount("/api", routes::api::routes())
        .register("/", catchers![not_found, server_error])
}

/// `folio export <dir>`: write the rendered page as `<dir>/index.html`.
fn export(site: &site::Site, dir: &Path) -> Result<(), String> {
    fs::create_dir_all(dir).map_err(|e| format!("Failed to create {}: {}", dir.display(), e))?;
    let html = site.html()?;
    let out = dir.join("index.html");
    fs::write(&out, html).map_err(|e| format!("Failed to write {}: {}", out.display(), e))?;
    info!("Exported {}", out.display());
    Ok(())
}

#[rocket::main]
async fn main() {
    env_logger::init();

    let config = match FolioConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    // Boot check: verify/create directories, validate critical files
    boot::run(&config);

    let site = match site::boot(&config).await {
        Ok(site) => site,
        Err(e) => {
            error!("Failed to build site: {}", e);
            process::exit(1);
        }
    };

    let args: Vec<String> = std::env::args().collect();
    if args.get(1).map(String::as_str) == Some("export") {
        let dir = args.get(2).map(String::as_str).unwrap_or("dist");
        if let Err(e) = export(&site, Path::new(dir)) {
            error!("{}", e);
            process::exit(1);
        }
        return;
    }

    if let Err(e) = build_rocket(&config, site).launch().await {
        error!("Server error: {}", e);
        process::exit(1);
    }
}
