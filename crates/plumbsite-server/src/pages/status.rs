//! Pages rendered without business data.

use askama::Template;
use plumbsite_core::SiteContext;

use super::document;

#[derive(Template)]
#[template(path = "pages/error.html")]
struct ErrorTemplate<'a> {
    message: &'a str,
}

#[derive(Template)]
#[template(path = "pages/not_found.html")]
struct NotFoundTemplate {
    home_href: String,
}

/// Full-page view for a data pipeline failure; no business sections are
/// rendered.
pub fn error_page(site: &SiteContext, message: &str) -> askama::Result<String> {
    let body = ErrorTemplate { message }.render()?;
    document(site, "Error Loading Data", &body, None)
}

pub fn not_found(site: &SiteContext) -> askama::Result<String> {
    let body = NotFoundTemplate {
        home_href: site.link("/"),
    }
    .render()?;
    document(site, "Page Not Found", &body, None)
}
