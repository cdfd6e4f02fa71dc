//! Full pages: sections composed inside the shared document layout.

pub mod commercial;
pub mod home;
pub mod residential;
pub mod status;

use askama::Template;
use plumbsite_core::SiteContext;

/// A one-shot notification shown after a form post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toast {
    pub title: &'static str,
    pub description: &'static str,
}

pub const REQUEST_SENT: Toast = Toast {
    title: "Request Sent",
    description: "We'll contact you shortly to schedule service.",
};

#[derive(Template)]
#[template(path = "layout.html")]
struct LayoutTemplate<'a> {
    title: &'a str,
    body: &'a str,
    toast: Option<Toast>,
    chat_endpoint: String,
}

/// Wraps rendered page content in the HTML document shell, including the
/// chat widget.
pub fn document(
    site: &SiteContext,
    title: &str,
    body: &str,
    toast: Option<Toast>,
) -> askama::Result<String> {
    LayoutTemplate {
        title,
        body,
        toast,
        chat_endpoint: format!("{}/api/chat", site.base_path()),
    }
    .render()
}

fn page_title(business_name: &str, page: &str) -> String {
    format!("{page} | {business_name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_endpoint_follows_base_path() {
        let site = SiteContext::new(None).with_base_path("/plumbing");
        let html = document(&site, "Home", "<main></main>", None).unwrap();
        assert!(html.contains(r#"data-endpoint="/plumbing/api/chat""#), "{html}");
        assert!(html.contains("<main></main>"));
        assert!(!html.contains("Request Sent"));
    }

    #[test]
    fn toast_renders_when_given() {
        let site = SiteContext::new(None);
        let html = document(&site, "Home", "", Some(REQUEST_SENT)).unwrap();
        assert!(html.contains("Request Sent"));
        assert!(html.contains("schedule service"));
    }
}
