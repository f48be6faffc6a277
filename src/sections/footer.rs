use crate::models::portfolio::Portfolio;
use crate::page::{ids, Page};

pub fn render(page: &mut Page, portfolio: &Portfolio, year: i32) -> Result<(), String> {
    page.element_mut(ids::CURRENT_YEAR)?.set_text(&year.to_string());
    page.element_mut(ids::FOOTER_BRAND)?
        .set_text(portfolio.brand.as_deref().unwrap_or(""));
    Ok(())
}
