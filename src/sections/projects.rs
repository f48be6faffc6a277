use crate::markup::{Markup, Node};
use crate::models::portfolio::{Portfolio, Project, ProjectLinks};
use crate::page::{ids, ImageState, Page};
use crate::sections::{images, tag_list};

/// Project cards. Each card carries its index so click/keyboard activation can
/// be routed back to the detail overlay.
pub fn render(page: &mut Page, portfolio: &Portfolio) -> Result<(), String> {
    let projects = match portfolio.projects.as_deref() {
        Some(projects) if !projects.is_empty() => projects,
        _ => return page.hide(ids::PROJECTS),
    };

    for index in 0..projects.len() {
        images::track(page, &images::project_image_key(index));
    }
    build_grid(page, projects)
}

/// Rebuild the cards so they reflect the current image load states.
pub fn refresh(page: &mut Page, portfolio: &Portfolio) -> Result<(), String> {
    match portfolio.projects.as_deref() {
        Some(projects) if !projects.is_empty() => build_grid(page, projects),
        _ => Ok(()),
    }
}

fn build_grid(page: &mut Page, projects: &[Project]) -> Result<(), String> {
    let html = Markup::concat(projects.iter().enumerate().map(|(i, p)| {
        card(i, p, page.image_state(&images::project_image_key(i)))
    }));
    page.element_mut(ids::PROJECTS_GRID)?.set_content(html);
    Ok(())
}

fn card_image(index: usize, project: &Project, state: Option<ImageState>) -> Node {
    let class = match state {
        Some(ImageState::Loaded) => "project-image loaded",
        Some(ImageState::Error) => "project-image error",
        _ => "project-image",
    };
    let image = Node::void("img")
        .attr("id", images::project_image_key(index))
        .attr("src", &project.image)
        .attr("alt", &project.title)
        .class(class)
        .attr("loading", "lazy");
    match state {
        Some(ImageState::Error) => {
            image.attr("style", format!("background:{}", images::FALLBACK_BACKGROUND))
        }
        _ => image,
    }
}

fn card(index: usize, project: &Project, image_state: Option<ImageState>) -> Markup {
    let mut card = Node::new("article")
        .class("project-card")
        .attr("tabindex", "0")
        .attr("data-project-index", index.to_string());
    if project.is_expandable() {
        card = card.attr("data-expandable", "true");
    }

    card.child(card_image(index, project, image_state))
        .child(
            Node::new("div")
                .class("project-content")
                .child(Node::new("h3").class("project-title").text(&project.title))
                .child(Node::new("p").class("project-description").text(&project.short))
                .child(Node::new("div").class("project-tags").child(tag_list(&project.tags)))
                .child(Node::new("div").class("project-links").child(link_buttons(&project.links))),
        )
        .build()
}

/// Demo / repository buttons, shared with the detail overlay.
pub(crate) fn link_buttons(links: &ProjectLinks) -> Markup {
    let mut html = Markup::empty();
    if let Some(demo) = &links.demo {
        html.push(Node::new("a").external(demo).class("btn btn-primary").text("View Demo").build());
    }
    if let Some(repo) = &links.repo {
        html.push(Node::new("a").external(repo).class("btn btn-secondary").text("GitHub").build());
    }
    html
}
