use askama::Template;

use super::{NavItem, PhoneLink, RenderContext};

const NAVIGATION: [(&str, &str); 4] = [
    ("Home", "/"),
    ("Residential", "/residential"),
    ("Commercial", "/commercial"),
    ("Contact", "/#contact"),
];

#[derive(Template)]
#[template(path = "sections/header.html")]
struct HeaderTemplate<'a> {
    name: &'a str,
    home_href: String,
    nav: Vec<NavItem>,
    call: Option<PhoneLink>,
}

pub fn render(ctx: &RenderContext<'_>) -> askama::Result<String> {
    let nav = NAVIGATION
        .iter()
        .map(|&(label, path)| NavItem {
            label,
            href: ctx.site.link(path),
            active: path == ctx.current_path,
        })
        .collect();

    HeaderTemplate {
        name: &ctx.data.basic_info.name,
        home_href: ctx.site.link("/"),
        nav,
        call: ctx.phone_link(),
    }
    .render()
}

#[cfg(test)]
mod tests {
    use plumbsite_core::SiteContext;

    use super::*;
    use crate::sections::test_support::{context, sample};

    #[test]
    fn navigation_links_keep_site_id() {
        let data = sample();
        let site = SiteContext::new(Some("acme"));
        let html = render(&context(&data, &site)).unwrap();
        assert!(html.contains("/residential?site_id=acme"), "{html}");
        assert!(html.contains("/commercial?site_id=acme"), "{html}");
        assert!(html.contains("?site_id=acme#contact"), "{html}");
    }

    #[test]
    fn phone_button_renders_when_phone_present() {
        let mut data = sample();
        let site = SiteContext::new(None);
        assert!(render(&context(&data, &site)).unwrap().contains("tel:5015550123"));

        data.basic_info.phone = None;
        assert!(!render(&context(&data, &site)).unwrap().contains("tel:"));
    }
}
