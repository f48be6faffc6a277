use crate::markup::{Markup, Node};
use crate::models::portfolio::Portfolio;
use crate::page::{ids, Page};

const DOWNLOAD_ICON: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" style="margin-right: 8px; vertical-align: middle;"><path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"></path><polyline points="7 10 12 15 17 10"></polyline><line x1="12" y1="15" x2="12" y2="3"></line></svg>"#;

pub fn render(page: &mut Page, portfolio: &Portfolio) -> Result<(), String> {
    let brand = portfolio.brand.as_deref();

    page.element_mut(ids::BRAND)?.set_text(brand.unwrap_or("Portfolio"));

    let title = page.element_mut(ids::HERO_TITLE)?;
    title.remove_class("skeleton");
    title.set_text(brand.unwrap_or("Your Name"));

    let tagline = page.element_mut(ids::HERO_TAGLINE)?;
    tagline.remove_class("skeleton");
    tagline.set_text(portfolio.tagline.as_deref().unwrap_or(""));

    let resume = portfolio.contact.as_ref().and_then(|c| c.resume_url.as_deref());
    if let Some(url) = resume {
        page.element_mut(ids::HERO_CTA)?.append(resume_button(url));
    }
    Ok(())
}

fn resume_button(url: &str) -> Markup {
    Node::new("a")
        .external(url)
        .class("btn btn-secondary btn-lg")
        .glyph(DOWNLOAD_ICON)
        .text("Download Resume")
        .build()
}
