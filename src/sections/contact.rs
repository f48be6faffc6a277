use crate::markup::{Markup, Node};
use crate::models::portfolio::{Portfolio, Social};
use crate::page::{ids, Page};

/// (platform name, inline glyph). Matched by exact name.
const SOCIAL_ICONS: &[(&str, &str)] = &[
    ("GitHub",
     r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="currentColor"><path d="M12 0c-6.626 0-12 5.373-12 12 0 5.302 3.438 9.8 8.207 11.387.599.111.793-.261.793-.577v-2.234c-3.338.726-4.033-1.416-4.033-1.416-.546-1.387-1.333-1.756-1.333-1.756-1.089-.745.083-.729.083-.729 1.205.084 1.839 1.237 1.839 1.237 1.07 1.834 2.807 1.304 3.492.997.107-.775.418-1.305.762-1.604-2.665-.305-5.467-1.334-5.467-5.931 0-1.311.469-2.381 1.236-3.221-.124-.303-.535-1.524.117-3.176 0 0 1.008-.322 3.301 1.23.957-.266 1.983-.399 3.003-.404 1.02.005 2.047.138 3.006.404 2.291-1.552 3.297-1.23 3.297-1.23.653 1.653.242 2.874.118 3.176.77.84 1.235 1.911 1.235 3.221 0 4.609-2.807 5.624-5.479 5.921.43.372.823 1.102.823 2.222v3.293c0 .319.192.694.801.576 4.765-1.589 8.199-6.086 8.199-11.386 0-6.627-5.373-12-12-12z"/></svg>"#),
    ("LinkedIn",
     r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="currentColor"><path d="M19 0h-14c-2.761 0-5 2.239-5 5v14c0 2.761 2.239 5 5 5h14c2.762 0 5-2.239 5-5v-14c0-2.761-2.238-5-5-5zm-11 19h-3v-11h3v11zm-1.5-12.268c-.966 0-1.75-.79-1.75-1.764s.784-1.764 1.75-1.764 1.75.79 1.75 1.764-.783 1.764-1.75 1.764zm13.5 12.268h-3v-5.604c0-3.368-4-3.113-4 0v5.604h-3v-11h3v1.765c1.396-2.586 7-2.777 7 2.476v6.759z"/></svg>"#),
    ("X",
     r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="currentColor"><path d="M18.244 2.25h3.308l-7.227 8.26 8.502 11.24H16.17l-5.214-6.817L4.99 21.75H1.68l7.73-8.835L1.254 2.25H8.08l4.713 6.231zm-1.161 17.52h1.833L7.084 4.126H5.117z"/></svg>"#),
    ("Twitter",
     r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="currentColor"><path d="M18.244 2.25h3.308l-7.227 8.26 8.502 11.24H16.17l-5.214-6.817L4.99 21.75H1.68l7.73-8.835L1.254 2.25H8.08l4.713 6.231zm-1.161 17.52h1.833L7.084 4.126H5.117z"/></svg>"#),
    ("Email",
     r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z"></path><polyline points="22,6 12,13 2,6"></polyline></svg>"#),
];

pub fn social_icon(name: &str) -> Option<&'static str> {
    SOCIAL_ICONS
        .iter()
        .find(|(platform, _)| *platform == name)
        .map(|(_, svg)| *svg)
}

/// Renders the contact block and returns the e-mail the copy action should
/// use, if any.
pub fn render(page: &mut Page, portfolio: &Portfolio) -> Result<Option<String>, String> {
    let contact = match &portfolio.contact {
        Some(contact) => contact,
        None => {
            page.hide(ids::CONTACT)?;
            return Ok(None);
        }
    };

    match &contact.email {
        Some(email) => {
            page.element_mut(ids::MAILTO_LINK)?
                .set_attr("href", &format!("mailto:{}", email));
        }
        None => page.hide(ids::CONTACT_ACTIONS)?,
    }

    if let Some(socials) = contact.socials.as_deref().filter(|s| !s.is_empty()) {
        let html = Markup::concat(socials.iter().map(social_link));
        page.element_mut(ids::SOCIALS)?.set_content(html);
    }

    Ok(contact.email.clone())
}

fn social_link(social: &Social) -> Markup {
    let mut link = Node::new("a").external(&social.url).class("social-link");
    if let Some(icon) = social_icon(&social.name) {
        link = link.glyph(icon);
    }
    link.text(&social.name).build()
}
