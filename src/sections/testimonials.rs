use crate::markup::{Markup, Node};
use crate::models::portfolio::{Portfolio, Testimonial};
use crate::page::{ids, Page};

/// The scaffold ships this section hidden; it is only shown with content.
pub fn render(page: &mut Page, portfolio: &Portfolio) -> Result<(), String> {
    let testimonials = match portfolio.testimonials.as_deref() {
        Some(items) if !items.is_empty() => items,
        _ => return page.hide(ids::TESTIMONIALS),
    };

    page.element_mut(ids::TESTIMONIALS)?.show("block");
    let html = Markup::concat(testimonials.iter().map(card));
    page.element_mut(ids::TESTIMONIALS_GRID)?.set_content(html);
    Ok(())
}

fn card(t: &Testimonial) -> Markup {
    Node::new("article")
        .class("testimonial-card")
        .child(Node::new("p").class("testimonial-quote").text(&format!("\"{}\"", t.quote)))
        .child(Node::new("div").class("testimonial-author").text(&t.name))
        .child(Node::new("div").class("testimonial-title").text(&t.title))
        .build()
}
