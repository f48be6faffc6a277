use log::{error, info, warn};
use std::fs;
use std::path::Path;
use std::process;

use crate::config::FolioConfig;
use crate::loader::DataSource;

/// Static assets the page links to
const CRITICAL_STATIC: &[&str] = &["css/site.css"];

/// Run all boot checks. Call this before Rocket launches.
/// Creates missing directories, warns about missing files, and
/// aborts if the workspace is unusable.
pub fn run(config: &FolioConfig) {
    info!("Folio boot check starting...");

    let (warnings, errors) = check(config);

    // ── Summary ─────────────────────────────────────────
    if errors > 0 {
        error!(
            "Boot check FAILED: {} error(s), {} warning(s). Aborting.",
            errors, warnings
        );
        process::exit(1);
    }

    if warnings > 0 {
        warn!(
            "Boot check passed with {} warning(s). Some features may not work correctly.",
            warnings
        );
    } else {
        info!("Boot check passed. All systems go.");
    }
}

/// Returns (warnings, errors).
pub fn check(config: &FolioConfig) -> (u32, u32) {
    let mut warnings = 0u32;
    let mut errors = 0u32;

    // ── 1. Directories ─────────────────────────────────
    let prefs_dir = Path::new(&config.prefs_path)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf);
    let mut dirs = vec![Path::new(&config.static_dir).to_path_buf()];
    dirs.extend(prefs_dir.clone());

    for dir in &dirs {
        if !dir.exists() {
            match fs::create_dir_all(dir) {
                Ok(_) => info!("  Created directory: {}", dir.display()),
                Err(e) => {
                    error!("  FAILED to create directory {}: {}", dir.display(), e);
                    errors += 1;
                }
            }
        }
    }

    // ── 2. Data source ─────────────────────────────────
    match DataSource::parse(&config.data_source) {
        DataSource::File(path) => {
            if !path.exists() {
                warn!(
                    "  Missing data file: {} (the page will show the load-failure message)",
                    path.display()
                );
                warnings += 1;
            }
        }
        DataSource::Remote(url) => info!("  Data will be fetched from {}", url),
    }

    // ── 3. Static assets ───────────────────────────────
    for file in CRITICAL_STATIC {
        let path = Path::new(&config.static_dir).join(file);
        if !path.exists() {
            warn!("  Missing static asset: {} (page will be unstyled)", path.display());
            warnings += 1;
        }
    }

    // ── 4. Preferences directory writable ──────────────
    if let Some(dir) = prefs_dir.filter(|d| d.exists()) {
        let test_file = dir.join(".write_test");
        match fs::write(&test_file, "test") {
            Ok(_) => {
                let _ = fs::remove_file(&test_file);
            }
            Err(e) => {
                warn!("  Preferences directory not writable: {} (theme will not persist)", e);
                warnings += 1;
            }
        }
    }

    // ── 5. Rocket.toml exists ───────────────────────────
    if !Path::new("Rocket.toml").exists() {
        warn!("  Rocket.toml not found, using default server config");
        warnings += 1;
    }

    (warnings, errors)
}
