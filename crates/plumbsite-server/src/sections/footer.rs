use askama::Template;
use plumbsite_core::BasicInfo;

use super::{NavItem, PhoneLink, RenderContext};

const QUICK_LINKS: [(&str, &str); 4] = [
    ("Home", "/"),
    ("Services", "/#services"),
    ("About", "/#about"),
    ("Contact", "/#contact"),
];

#[derive(Template)]
#[template(path = "sections/footer.html")]
struct FooterTemplate<'a> {
    name: &'a str,
    call: Option<PhoneLink>,
    hours_summary: String,
    service_area: String,
    quick_links: Vec<NavItem>,
    year: i32,
}

pub fn render(ctx: &RenderContext<'_>) -> askama::Result<String> {
    let info = &ctx.data.basic_info;
    let service_area = match info.city.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        Some(city) => format!("Serving {city} and surrounding areas"),
        None => "Serving your local community".to_string(),
    };
    let quick_links = QUICK_LINKS
        .iter()
        .map(|&(label, path)| NavItem {
            label,
            href: ctx.site.link(path),
            active: false,
        })
        .collect();

    FooterTemplate {
        name: &info.name,
        call: ctx.phone_link(),
        hours_summary: hours_summary(info),
        service_area,
        quick_links,
        year: ctx.clock.year,
    }
    .render()
}

/// Monday's hours stand in for the whole working week.
fn hours_summary(info: &BasicInfo) -> String {
    match info
        .hours()
        .and_then(|h| h.get("Monday"))
        .map(str::trim)
        .filter(|h| !h.is_empty())
    {
        Some(monday) => format!("Open Mon-Fri {monday}"),
        None => "Contact us for business hours".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use plumbsite_core::{SiteContext, WorkingHours};

    use super::*;
    use crate::sections::test_support::{context, sample};

    #[test]
    fn summary_uses_monday_hours() {
        let data = sample();
        assert_eq!(hours_summary(&data.basic_info), "Open Mon-Fri 8:00 AM - 5:00 PM");
    }

    #[test]
    fn summary_without_monday_asks_to_call() {
        let mut data = sample();
        data.basic_info.working_hours =
            Some([("Saturday".to_string(), "9-1".to_string())].into_iter().collect::<WorkingHours>());
        assert_eq!(hours_summary(&data.basic_info), "Contact us for business hours");

        data.basic_info.working_hours = None;
        assert_eq!(hours_summary(&data.basic_info), "Contact us for business hours");
    }

    #[test]
    fn blank_monday_hours_ask_to_call() {
        let mut data = sample();
        data.basic_info.working_hours = Some(
            [("Monday".to_string(), "  ".to_string())]
                .into_iter()
                .collect::<WorkingHours>(),
        );
        assert_eq!(hours_summary(&data.basic_info), "Contact us for business hours");
    }

    #[test]
    fn copyright_uses_clock_year() {
        let data = sample();
        let site = SiteContext::new(Some("acme"));
        let html = render(&context(&data, &site)).unwrap();
        assert!(html.contains("2025 Arkansas Professional Plumbing. All Rights Reserved."), "{html}");
        assert!(html.contains("Serving Little Rock and surrounding areas"));
        assert!(html.contains("/?site_id=acme#services"));
    }
}
