//! Section renderers. Each maps one field of the portfolio document onto the
//! page; an absent or empty field hides its section.

pub mod about;
pub mod contact;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod images;
pub mod projects;
pub mod seo;
pub mod skills;
pub mod testimonials;

use crate::markup::{Markup, Node};

/// `<span class="tag">` list shared by project cards and the detail overlay.
pub(crate) fn tag_list(tags: &[String]) -> Markup {
    Markup::concat(tags.iter().map(|t| Node::new("span").class("tag").text(t).build()))
}
