//! Image load-state tracking.
//! Images start out pending; the client reports `load` or `error` back as
//! events. Keys are element ids, or `project-image-<n>` for card images.

use crate::page::{ImageState, Page};

const PROJECT_IMAGE_PREFIX: &str = "project-image-";

/// Background applied to images that failed to load.
pub const FALLBACK_BACKGROUND: &str = "var(--gradient-primary)";

pub fn project_image_key(index: usize) -> String {
    format!("{}{}", PROJECT_IMAGE_PREFIX, index)
}

/// Card images live inside the projects grid markup rather than as page
/// elements, so their state changes require the grid to be rebuilt.
pub fn is_project_image(key: &str) -> bool {
    key.starts_with(PROJECT_IMAGE_PREFIX)
}

/// Start tracking an image, clearing any previous visual state.
pub fn track(page: &mut Page, key: &str) {
    if let Ok(el) = page.element_mut(key) {
        el.remove_class("loaded");
        el.remove_class("error");
    }
    page.set_image_state(key, ImageState::Pending);
}

pub fn mark_loaded(page: &mut Page, key: &str) -> Result<(), String> {
    ensure_tracked(page, key)?;
    if let Ok(el) = page.element_mut(key) {
        el.add_class("loaded");
        el.remove_class("error");
    }
    page.set_image_state(key, ImageState::Loaded);
    Ok(())
}

/// Failed images fall back to the primary gradient.
pub fn mark_failed(page: &mut Page, key: &str) -> Result<(), String> {
    ensure_tracked(page, key)?;
    if let Ok(el) = page.element_mut(key) {
        el.add_class("error");
        el.remove_class("loaded");
        el.set_style("background", FALLBACK_BACKGROUND);
    }
    page.set_image_state(key, ImageState::Error);
    Ok(())
}

fn ensure_tracked(page: &Page, key: &str) -> Result<(), String> {
    match page.image_state(key) {
        Some(_) => Ok(()),
        None => Err(format!("Untracked image: {}", key)),
    }
}
