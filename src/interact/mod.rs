//! Page interactions, delivered as events from the client.

pub mod clipboard;
pub mod modal;
pub mod prefs;
pub mod theme;
pub mod toast;

use serde::{Deserialize, Serialize};

/// One user interaction with the rendered page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiEvent {
    CardClick { index: usize },
    CardKey { index: usize, key: String },
    ModalClose,
    OverlayClick,
    KeyDown { key: String },
    CopyEmail,
    ThemeToggle,
    ImageLoaded { image: String },
    ImageFailed { image: String },
    Scroll { scroll_y: f64, scroll_height: f64 },
    Resize { width: u32, height: u32 },
}

/// Keys that activate a focused project card (DOM `KeyboardEvent.key` values).
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

pub fn is_escape_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}
