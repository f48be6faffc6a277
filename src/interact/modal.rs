use crate::models::portfolio::Project;
use crate::page::{ids, Page};
use crate::sections::projects::link_buttons;
use crate::sections::{images, tag_list};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open(usize),
}

/// Project detail overlay. Opening while open replaces the content.
#[derive(Debug, Clone, Default)]
pub struct ProjectModal {
    state: ModalState,
}

impl ProjectModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    /// Returns false (and changes nothing) for projects without extended text.
    pub fn open(&mut self, page: &mut Page, index: usize, project: &Project) -> Result<bool, String> {
        let long_text = match project.long_text.as_deref() {
            Some(text) if project.is_expandable() => text,
            _ => return Ok(false),
        };

        let image = page.element_mut(ids::MODAL_IMAGE)?;
        image.set_attr("src", &project.image);
        image.set_attr("alt", &project.title);
        images::track(page, ids::MODAL_IMAGE);

        page.element_mut(ids::MODAL_TITLE)?.set_text(&project.title);
        page.element_mut(ids::MODAL_TAGS)?.set_content(tag_list(&project.tags));
        page.element_mut(ids::MODAL_BODY)?.set_text(long_text);
        page.element_mut(ids::MODAL_LINKS)?.set_content(link_buttons(&project.links));

        page.element_mut(ids::PROJECT_MODAL)?.show("flex");
        page.element_mut(ids::BODY)?.set_style("overflow", "hidden");
        self.state = ModalState::Open(index);
        Ok(true)
    }

    /// Always restores page scroll, even when already closed.
    pub fn close(&mut self, page: &mut Page) -> Result<(), String> {
        page.element_mut(ids::PROJECT_MODAL)?.hide();
        page.element_mut(ids::BODY)?.set_style("overflow", "auto");
        self.state = ModalState::Closed;
        Ok(())
    }
}
