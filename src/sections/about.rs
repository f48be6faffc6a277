use crate::models::portfolio::Portfolio;
use crate::page::{ids, Page};
use crate::sections::images;

pub fn render(page: &mut Page, portfolio: &Portfolio) -> Result<(), String> {
    let about = match &portfolio.about {
        Some(about) => about,
        None => return page.hide(ids::ABOUT),
    };

    if let Some(avatar) = &about.avatar {
        let alt = match portfolio.brand.as_deref() {
            Some(brand) => format!("{} avatar", brand),
            None => "avatar".to_string(),
        };
        let el = page.element_mut(ids::ABOUT_AVATAR)?;
        el.set_attr("src", avatar);
        el.set_attr("alt", &alt);
        el.show("block");
        images::track(page, ids::ABOUT_AVATAR);
    }

    page.element_mut(ids::ABOUT_BIO)?
        .set_text(about.bio.as_deref().unwrap_or(""));
    Ok(())
}
