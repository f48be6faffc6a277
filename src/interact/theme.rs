use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::interact::prefs::PreferenceStore;
use crate::page::{ids, Page};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Owns the root element's `data-theme` and its persisted preference.
#[derive(Debug, Clone)]
pub struct ThemeController {
    key: String,
    current: Theme,
}

impl ThemeController {
    /// Stored preference first, then the system preference.
    pub fn init(
        page: &mut Page,
        prefs: &dyn PreferenceStore,
        key: &str,
        prefers_dark: bool,
    ) -> Result<Self, String> {
        let stored = prefs.get(key);
        let current = match stored.as_deref().map(|raw| (raw, Theme::parse(raw))) {
            Some((_, Some(theme))) => theme,
            Some((raw, None)) => {
                warn!("Ignoring unknown stored theme {:?}", raw);
                system_theme(prefers_dark)
            }
            None => system_theme(prefers_dark),
        };
        page.element_mut(ids::ROOT)?.set_attr("data-theme", current.as_str());
        Ok(ThemeController { key: key.to_string(), current })
    }

    /// The page and controller always switch; persisting is best-effort.
    pub fn toggle(
        &mut self,
        page: &mut Page,
        prefs: &mut dyn PreferenceStore,
    ) -> Result<Theme, String> {
        let next = self.current.toggled();
        page.element_mut(ids::ROOT)?.set_attr("data-theme", next.as_str());
        self.current = next;
        if let Err(e) = prefs.set(&self.key, next.as_str()) {
            warn!("Failed to persist theme preference: {}", e);
        }
        debug!("Theme switched to {}", next.as_str());
        Ok(next)
    }

    pub fn current(&self) -> Theme {
        self.current
    }
}

fn system_theme(prefers_dark: bool) -> Theme {
    if prefers_dark {
        Theme::Dark
    } else {
        Theme::Light
    }
}
