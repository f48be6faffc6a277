use chrono::NaiveDate;

use crate::markup::{Markup, Node};
use crate::models::portfolio::{Experience, Portfolio};
use crate::page::{ids, Page};

const PRESENT: &str = "Present";

pub fn render(page: &mut Page, portfolio: &Portfolio) -> Result<(), String> {
    let entries = match portfolio.experience.as_deref() {
        Some(entries) if !entries.is_empty() => entries,
        _ => return page.hide(ids::EXPERIENCE),
    };

    let html = Markup::concat(entries.iter().map(entry));
    page.element_mut(ids::EXPERIENCE_TIMELINE)?.set_content(html);
    Ok(())
}

fn entry(exp: &Experience) -> Markup {
    let mut item = Node::new("article").class("experience-item").child(
        Node::new("div")
            .class("experience-header")
            .child(Node::new("div").class("experience-company").text(&exp.company))
            .child(Node::new("div").class("experience-role").text(&exp.role))
            .child(Node::new("div").class("experience-date").text(&date_range(exp))),
    );
    if let Some(highlights) = &exp.highlights {
        item = item.child(
            Node::new("ul")
                .class("experience-highlights")
                .children(highlights.iter().map(|h| Node::new("li").text(h))),
        );
    }
    item.build()
}

/// `Jan 2020 – Present`. A missing end date reads as ongoing.
pub fn date_range(exp: &Experience) -> String {
    let end = exp.end.as_deref().unwrap_or(PRESENT);
    format!("{} – {}", format_month_year(&exp.start), format_month_year(end))
}

/// Short month + year (`Jun 2019`) for `YYYY-MM-DD` or `YYYY-MM`.
/// `Present` passes through; anything unparsable is returned as-is.
pub fn format_month_year(raw: &str) -> String {
    if raw == PRESENT {
        return PRESENT.to_string();
    }
    let trimmed = raw.trim();
    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{}-01", trimmed), "%Y-%m-%d"));
    match date {
        Ok(d) => d.format("%b %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}
