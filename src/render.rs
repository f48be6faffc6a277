use log::{debug, error};
use rocket_dyn_templates::tera::{Context, Tera};

use crate::models::portfolio::Portfolio;
use crate::page::{ids, Page};
use crate::sections;

/// The page scaffold, compiled in so export and tests don't depend on the
/// working directory.
const INDEX_TEMPLATE: &str = include_str!("../website/templates/index.html.tera");

pub const LOAD_FAILED_TITLE: &str = "Unable to load portfolio";
pub const LOAD_FAILED_TAGLINE: &str = "Please check your data file.";

/// What the render pass armed for later interactions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rendered {
    /// E-mail the copy action writes to the clipboard.
    pub copy_email: Option<String>,
    pub project_count: usize,
}

/// Run every section renderer once, in page order. The first missing
/// container aborts the pass.
pub fn render_all(page: &mut Page, portfolio: &Portfolio, year: i32) -> Result<Rendered, String> {
    sections::seo::render(page, portfolio)?;
    sections::hero::render(page, portfolio)?;
    sections::about::render(page, portfolio)?;
    sections::skills::render(page, portfolio)?;
    sections::projects::render(page, portfolio)?;
    sections::experience::render(page, portfolio)?;
    sections::testimonials::render(page, portfolio)?;
    let copy_email = sections::contact::render(page, portfolio)?;
    sections::footer::render(page, portfolio, year)?;

    let rendered = Rendered {
        copy_email,
        project_count: portfolio.projects.as_ref().map(Vec::len).unwrap_or(0),
    };
    debug!("Rendered portfolio: {:?}", rendered);
    Ok(rendered)
}

/// Fallback hero message shown when the document could not be loaded.
pub fn render_load_failure(page: &mut Page) -> Result<(), String> {
    page.element_mut(ids::HERO_TITLE)?.set_text(LOAD_FAILED_TITLE);
    page.element_mut(ids::HERO_TAGLINE)?.set_text(LOAD_FAILED_TAGLINE);
    Ok(())
}

/// Serialize the page through the index template.
pub fn render_html(page: &Page) -> Result<String, String> {
    let mut tera = Tera::default();
    tera.add_raw_template("index.html", INDEX_TEMPLATE)
        .map_err(|e| format!("Template error: {}", e))?;
    let context = Context::from_value(page.to_context())
        .map_err(|e| format!("Template context error: {}", e))?;
    tera.render("index.html", &context).map_err(|e| {
        error!("Failed to render index.html: {:?}", e);
        format!("Render error: {}", e)
    })
}
