use crate::models::portfolio::Portfolio;
use crate::page::Page;

/// Document title plus description / Open Graph meta tags.
/// An absent `seo` block leaves the scaffold defaults untouched.
pub fn render(page: &mut Page, portfolio: &Portfolio) -> Result<(), String> {
    let seo = match &portfolio.seo {
        Some(seo) => seo,
        None => return Ok(()),
    };

    if let Some(title) = &seo.title {
        page.set_title(title);
        page.set_meta("og:title", title)?;
    }
    if let Some(description) = &seo.description {
        page.set_meta("description", description)?;
        page.set_meta("og:description", description)?;
    }
    if let Some(image) = &seo.og_image {
        page.set_meta("og:image", image)?;
    }
    Ok(())
}
