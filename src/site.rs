//! The site context: everything the render pass, the interactions and the
//! background share, built once at startup and passed explicitly.

use std::sync::{Arc, Mutex};
use std::time::Instant;

use chrono::Datelike;
use log::{debug, error, info};
use rand::Rng;
use serde::Serialize;

use crate::background::animator::SharedScene;
use crate::background::scene::{Scene, Viewport};
use crate::config::FolioConfig;
use crate::interact::clipboard::{Clipboard, MemoryClipboard};
use crate::interact::modal::{ModalState, ProjectModal};
use crate::interact::prefs::{FilePreferences, PreferenceStore};
use crate::interact::theme::{Theme, ThemeController};
use crate::interact::toast::{Toast, EMAIL_COPIED};
use crate::interact::{is_activation_key, is_escape_key, UiEvent};
use crate::loader::{self, DataSource};
use crate::models::portfolio::Portfolio;
use crate::page::{ids, Page};
use crate::render::{self, Rendered};
use crate::sections::{self, images};

/// Default output size before the client reports its window.
const DEFAULT_VIEWPORT: (u32, u32) = (1280, 800);

/// Snapshot of the interactive state, returned by the events API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UiState {
    pub loaded: bool,
    pub theme: Theme,
    pub modal_project: Option<usize>,
    pub scroll_locked: bool,
    pub toast: Option<String>,
}

pub struct Site {
    portfolio: Option<Arc<Portfolio>>,
    page: Page,
    rendered: Rendered,
    modal: ProjectModal,
    toast: Toast,
    theme: ThemeController,
    prefs: Box<dyn PreferenceStore>,
    clipboard: Box<dyn Clipboard>,
    scene: SharedScene,
}

impl Site {
    /// Scaffold page with the theme applied; no document yet.
    pub fn new<R: Rng>(
        config: &FolioConfig,
        prefs: Box<dyn PreferenceStore>,
        clipboard: Box<dyn Clipboard>,
        rng: &mut R,
    ) -> Result<Self, String> {
        let mut page = Page::scaffold();
        let theme = ThemeController::init(&mut page, prefs.as_ref(), &config.theme_key, config.prefers_dark)?;
        let (width, height) = DEFAULT_VIEWPORT;
        let scene = Scene::new(
            config.particle_count,
            theme.current(),
            Viewport::new(width, height),
            rng,
        );
        Ok(Site {
            portfolio: None,
            page,
            rendered: Rendered::default(),
            modal: ProjectModal::new(),
            toast: Toast::new(config.toast_duration()),
            theme,
            prefs,
            clipboard,
            scene: Arc::new(Mutex::new(scene)),
        })
    }

    /// Accept the loader's result. Success stores the document and renders
    /// every section; failure shows the fallback hero message.
    pub fn load(&mut self, result: Result<Portfolio, String>, year: i32) -> Result<(), String> {
        match result {
            Ok(portfolio) => {
                self.portfolio = Some(Arc::new(portfolio));
                self.render_all(year)
            }
            Err(e) => {
                error!("Error loading portfolio data: {}", e);
                self.portfolio = None;
                render::render_load_failure(&mut self.page)
            }
        }
    }

    /// No-op until a document is loaded.
    pub fn render_all(&mut self, year: i32) -> Result<(), String> {
        let portfolio = match &self.portfolio {
            Some(p) => Arc::clone(p),
            None => return Ok(()),
        };
        self.rendered = render::render_all(&mut self.page, &portfolio, year)?;
        info!("Rendered portfolio with {} project(s)", self.rendered.project_count);
        Ok(())
    }

    pub fn dispatch(&mut self, event: UiEvent, now: Instant) -> Result<(), String> {
        debug!("UI event: {:?}", event);
        match event {
            UiEvent::CardClick { index } => self.open_project(index)?,
            UiEvent::CardKey { index, key } => {
                if is_activation_key(&key) {
                    self.open_project(index)?;
                }
            }
            UiEvent::ModalClose | UiEvent::OverlayClick => self.modal.close(&mut self.page)?,
            UiEvent::KeyDown { key } => {
                if is_escape_key(&key) {
                    self.modal.close(&mut self.page)?;
                }
            }
            UiEvent::CopyEmail => self.copy_email(now)?,
            UiEvent::ThemeToggle => {
                let theme = self.theme.toggle(&mut self.page, self.prefs.as_mut())?;
                self.with_scene(|scene| scene.set_theme(theme))?;
            }
            UiEvent::ImageLoaded { image } => {
                images::mark_loaded(&mut self.page, &image)?;
                self.refresh_card_image(&image)?;
            }
            UiEvent::ImageFailed { image } => {
                images::mark_failed(&mut self.page, &image)?;
                self.refresh_card_image(&image)?;
            }
            UiEvent::Scroll { scroll_y, scroll_height } => {
                self.with_scene(|scene| scene.scroll(scroll_y, scroll_height))?
            }
            UiEvent::Resize { width, height } => {
                self.with_scene(|scene| scene.resize(width, height))?
            }
        }
        self.tick(now)
    }

    /// Apply timers (toast dismissal).
    pub fn tick(&mut self, now: Instant) -> Result<(), String> {
        self.toast.tick(&mut self.page, now)
    }

    fn open_project(&mut self, index: usize) -> Result<(), String> {
        let portfolio = match &self.portfolio {
            Some(p) => Arc::clone(p),
            None => return Ok(()),
        };
        let project = match portfolio.project(index) {
            Some(project) => project,
            None => {
                debug!("No project at index {}", index);
                return Ok(());
            }
        };
        if !self.modal.open(&mut self.page, index, project)? {
            debug!("Project {} has no details to show", index);
        }
        Ok(())
    }

    fn refresh_card_image(&mut self, key: &str) -> Result<(), String> {
        if !images::is_project_image(key) {
            return Ok(());
        }
        match &self.portfolio {
            Some(portfolio) => sections::projects::refresh(&mut self.page, portfolio),
            None => Ok(()),
        }
    }

    /// Clipboard failures are logged, never shown.
    fn copy_email(&mut self, now: Instant) -> Result<(), String> {
        let email = match &self.rendered.copy_email {
            Some(email) => email.clone(),
            None => return Ok(()),
        };
        match self.clipboard.write_text(&email) {
            Ok(()) => self.toast.show(&mut self.page, EMAIL_COPIED, now),
            Err(e) => {
                error!("Failed to copy email: {}", e);
                Ok(())
            }
        }
    }

    fn with_scene<F: FnOnce(&mut Scene)>(&self, f: F) -> Result<(), String> {
        let mut scene = self
            .scene
            .lock()
            .map_err(|_| "Background scene lock poisoned".to_string())?;
        f(&mut scene);
        Ok(())
    }

    pub fn html(&self) -> Result<String, String> {
        render::render_html(&self.page)
    }

    pub fn ui_state(&self) -> UiState {
        let modal_project = match self.modal.state() {
            ModalState::Open(index) => Some(index),
            ModalState::Closed => None,
        };
        let scroll_locked = self
            .page
            .element(ids::BODY)
            .map(|body| body.style("overflow") == Some("hidden"))
            .unwrap_or(false);
        UiState {
            loaded: self.portfolio.is_some(),
            theme: self.theme.current(),
            modal_project,
            scroll_locked,
            toast: self.toast.visible_message().map(str::to_string),
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn portfolio(&self) -> Option<&Portfolio> {
        self.portfolio.as_deref()
    }

    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    pub fn scene(&self) -> SharedScene {
        Arc::clone(&self.scene)
    }
}

/// Build the site from config: preferences on disk, in-memory clipboard, one
/// load attempt from the configured source.
pub async fn boot(config: &FolioConfig) -> Result<Site, String> {
    let prefs = FilePreferences::open(std::path::Path::new(&config.prefs_path));
    let mut site = {
        let mut rng = rand::thread_rng();
        Site::new(config, Box::new(prefs), Box::new(MemoryClipboard::new()), &mut rng)?
    };
    let source = DataSource::parse(&config.data_source);
    let result = loader::fetch(&source).await;
    site.load(result, chrono::Local::now().year())?;
    info!("Site ready (theme: {})", site.theme().as_str());
    Ok(site)
}
