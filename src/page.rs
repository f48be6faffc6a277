//! In-memory model of the page scaffold.
//! Renderers and interactions address elements by their stable ids; the
//! finished page is serialized through the index template.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::{json, Map, Value};

use crate::markup::{render_attrs, Markup};

/// Stable element ids of the scaffold.
pub mod ids {
    pub const ROOT: &str = "root";
    pub const BODY: &str = "body";
    pub const BRAND: &str = "brand";
    pub const THEME_TOGGLE: &str = "theme-toggle";
    pub const HERO_TITLE: &str = "hero-title";
    pub const HERO_TAGLINE: &str = "hero-tagline";
    pub const HERO_CTA: &str = "hero-cta";
    pub const ABOUT: &str = "about";
    pub const ABOUT_AVATAR: &str = "about-avatar";
    pub const ABOUT_BIO: &str = "about-bio";
    pub const SKILLS: &str = "skills";
    pub const SKILLS_GRID: &str = "skills-grid";
    pub const PROJECTS: &str = "projects";
    pub const PROJECTS_GRID: &str = "projects-grid";
    pub const EXPERIENCE: &str = "experience";
    pub const EXPERIENCE_TIMELINE: &str = "experience-timeline";
    pub const TESTIMONIALS: &str = "testimonials";
    pub const TESTIMONIALS_GRID: &str = "testimonials-grid";
    pub const CONTACT: &str = "contact";
    pub const CONTACT_ACTIONS: &str = "contact-actions";
    pub const MAILTO_LINK: &str = "mailto-link";
    pub const COPY_EMAIL: &str = "copy-email";
    pub const SOCIALS: &str = "socials";
    pub const PROJECT_MODAL: &str = "project-modal";
    pub const MODAL_OVERLAY: &str = "modal-overlay";
    pub const MODAL_CLOSE: &str = "modal-close";
    pub const MODAL_IMAGE: &str = "modal-image";
    pub const MODAL_TITLE: &str = "modal-title";
    pub const MODAL_TAGS: &str = "modal-tags";
    pub const MODAL_BODY: &str = "modal-body";
    pub const MODAL_LINKS: &str = "modal-links";
    pub const TOAST: &str = "toast";
    pub const CURRENT_YEAR: &str = "current-year";
    pub const FOOTER_BRAND: &str = "footer-brand";
    pub const BG_CANVAS: &str = "bg-canvas";

    pub const ALL: &[&str] = &[
        ROOT, BODY, BRAND, THEME_TOGGLE, HERO_TITLE, HERO_TAGLINE, HERO_CTA, ABOUT,
        ABOUT_AVATAR, ABOUT_BIO, SKILLS, SKILLS_GRID, PROJECTS, PROJECTS_GRID, EXPERIENCE,
        EXPERIENCE_TIMELINE, TESTIMONIALS, TESTIMONIALS_GRID, CONTACT, CONTACT_ACTIONS,
        MAILTO_LINK, COPY_EMAIL, SOCIALS, PROJECT_MODAL, MODAL_OVERLAY, MODAL_CLOSE,
        MODAL_IMAGE, MODAL_TITLE, MODAL_TAGS, MODAL_BODY, MODAL_LINKS, TOAST, CURRENT_YEAR,
        FOOTER_BRAND, BG_CANVAS,
    ];
}

/// Meta tags the SEO renderer writes.
pub const META_KEYS: &[&str] = &["description", "og:title", "og:description", "og:image"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageState {
    Pending,
    Loaded,
    Error,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    content: Markup,
    attrs: BTreeMap<String, String>,
    classes: BTreeSet<String>,
    style: BTreeMap<String, String>,
}

impl Element {
    pub fn set_text(&mut self, text: &str) {
        self.content = Markup::text(text);
    }

    pub fn set_content(&mut self, content: Markup) {
        self.content = content;
    }

    pub fn append(&mut self, content: Markup) {
        self.content.push(content);
    }

    pub fn content(&self) -> &Markup {
        &self.content
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attrs.insert(name.to_string(), value.to_string());
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn set_style(&mut self, prop: &str, value: &str) {
        self.style.insert(prop.to_string(), value.to_string());
    }

    pub fn style(&self, prop: &str) -> Option<&str> {
        self.style.get(prop).map(String::as_str)
    }

    pub fn hide(&mut self) {
        self.set_style("display", "none");
    }

    pub fn show(&mut self, display: &str) {
        self.set_style("display", display);
    }

    pub fn is_hidden(&self) -> bool {
        self.style("display") == Some("none")
    }

    /// Attribute string for the element's opening tag (leading space included).
    pub fn open_attrs(&self) -> String {
        let class = self.classes.iter().cloned().collect::<Vec<_>>().join(" ");
        let style = self
            .style
            .iter()
            .map(|(k, v)| format!("{}:{}", k, v))
            .collect::<Vec<_>>()
            .join(";");

        let mut pairs: Vec<(&str, &str)> = Vec::new();
        if !class.is_empty() {
            pairs.push(("class", &class));
        }
        if !style.is_empty() {
            pairs.push(("style", &style));
        }
        pairs.extend(self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        render_attrs(pairs)
    }
}

#[derive(Debug, Clone)]
pub struct Page {
    title: String,
    meta: BTreeMap<&'static str, String>,
    elements: BTreeMap<&'static str, Element>,
    images: BTreeMap<String, ImageState>,
}

impl Page {
    /// The scaffold as served before any data is rendered.
    pub fn scaffold() -> Self {
        let mut elements: BTreeMap<&'static str, Element> =
            ids::ALL.iter().map(|id| (*id, Element::default())).collect();

        for id in [ids::HERO_TITLE, ids::HERO_TAGLINE] {
            if let Some(el) = elements.get_mut(id) {
                el.add_class("skeleton");
            }
        }
        for id in [ids::ABOUT_AVATAR, ids::TESTIMONIALS, ids::PROJECT_MODAL] {
            if let Some(el) = elements.get_mut(id) {
                el.hide();
            }
        }
        if let Some(el) = elements.get_mut(ids::TOAST) {
            el.add_class("toast");
        }
        if let Some(el) = elements.get_mut(ids::BRAND) {
            el.set_text("Portfolio");
        }

        Page {
            title: "Portfolio".to_string(),
            meta: META_KEYS.iter().map(|k| (*k, String::new())).collect(),
            elements,
            images: BTreeMap::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub fn meta(&self, key: &str) -> Option<&str> {
        self.meta.get(key).map(String::as_str)
    }

    pub fn set_meta(&mut self, key: &str, content: &str) -> Result<(), String> {
        match self.meta.get_mut(key) {
            Some(slot) => {
                *slot = content.to_string();
                Ok(())
            }
            None => Err(format!("Missing meta tag: {}", key)),
        }
    }

    pub fn element(&self, id: &str) -> Result<&Element, String> {
        self.elements
            .get(id)
            .ok_or_else(|| format!("Missing page element: #{}", id))
    }

    pub fn element_mut(&mut self, id: &str) -> Result<&mut Element, String> {
        self.elements
            .get_mut(id)
            .ok_or_else(|| format!("Missing page element: #{}", id))
    }

    pub fn hide(&mut self, id: &str) -> Result<(), String> {
        self.element_mut(id)?.hide();
        Ok(())
    }

    pub fn is_hidden(&self, id: &str) -> bool {
        self.element(id).map(Element::is_hidden).unwrap_or(false)
    }

    /// Drop an element from the scaffold.
    #[cfg(test)]
    pub fn remove(&mut self, id: &str) -> Option<Element> {
        self.elements.remove(id)
    }

    pub fn image_state(&self, key: &str) -> Option<ImageState> {
        self.images.get(key).copied()
    }

    pub(crate) fn set_image_state(&mut self, key: &str, state: ImageState) {
        self.images.insert(key.to_string(), state);
    }

    /// Template context: `title`, `meta.<key>` and `el.<id>.{attrs,inner}`,
    /// with `-` and `:` in keys mapped to `_`.
    pub fn to_context(&self) -> Value {
        let mut el = Map::new();
        for (id, element) in &self.elements {
            el.insert(
                context_key(id),
                json!({
                    "attrs": element.open_attrs(),
                    "inner": element.content().as_str(),
                }),
            );
        }
        let meta: Map<String, Value> = self
            .meta
            .iter()
            .map(|(k, v)| (context_key(k), Value::String(v.clone())))
            .collect();

        json!({
            "title": self.title,
            "meta": meta,
            "el": el,
        })
    }
}

fn context_key(id: &str) -> String {
    id.replace(['-', ':'], "_")
}
