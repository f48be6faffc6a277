use std::time::{Duration, Instant};

use crate::page::{ids, Page};

pub const EMAIL_COPIED: &str = "Email copied to clipboard!";

/// Transient status message. Showing again re-arms the dismiss deadline.
#[derive(Debug, Clone)]
pub struct Toast {
    duration: Duration,
    message: Option<String>,
    hide_at: Option<Instant>,
}

impl Toast {
    pub fn new(duration: Duration) -> Self {
        Toast { duration, message: None, hide_at: None }
    }

    pub fn show(&mut self, page: &mut Page, message: &str, now: Instant) -> Result<(), String> {
        let el = page.element_mut(ids::TOAST)?;
        el.set_text(message);
        el.add_class("show");
        self.message = Some(message.to_string());
        self.hide_at = Some(now + self.duration);
        Ok(())
    }

    /// Dismiss once the deadline has passed.
    pub fn tick(&mut self, page: &mut Page, now: Instant) -> Result<(), String> {
        match self.hide_at {
            Some(deadline) if now >= deadline => {
                page.element_mut(ids::TOAST)?.remove_class("show");
                self.hide_at = None;
                self.message = None;
            }
            _ => {}
        }
        Ok(())
    }

    pub fn visible_message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
