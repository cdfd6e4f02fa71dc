use askama::Template;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::{weekday_name, PhoneLink, RenderContext};

const MAPS_EMBED_API: &str = "https://www.google.com/maps/embed/v1/place";
const MAPS_KEYLESS_EMBED: &str = "https://maps.google.com/maps";

/// Characters `encodeURIComponent` leaves alone.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

struct HoursRow<'a> {
    day: &'a str,
    hours: &'a str,
    class: &'static str,
}

#[derive(Template)]
#[template(path = "sections/map.html")]
struct MapTemplate<'a> {
    name: &'a str,
    map_url: String,
    service_area: String,
    hours: Vec<HoursRow<'a>>,
    call: Option<PhoneLink>,
}

pub fn render(ctx: &RenderContext<'_>) -> askama::Result<String> {
    let info = &ctx.data.basic_info;
    let city = info.city.as_deref().map(str::trim).filter(|c| !c.is_empty());
    let today = weekday_name(ctx.clock.today);

    let hours: Vec<HoursRow<'_>> = info
        .hours()
        .map(|table| {
            table
                .iter()
                .map(|(day, hours)| HoursRow {
                    day,
                    hours,
                    class: if day == today { "hours-row today" } else { "hours-row" },
                })
                .collect()
        })
        .unwrap_or_default();

    MapTemplate {
        name: &info.name,
        map_url: embed_url(ctx),
        service_area: format!(
            "Serving {} and surrounding communities with professional services.",
            city.unwrap_or("the local area")
        ),
        hours,
        call: ctx.phone_link(),
    }
    .render()
}

/// Pins coordinates when both are known, otherwise searches for the business
/// by name and city.
fn embed_url(ctx: &RenderContext<'_>) -> String {
    let info = &ctx.data.basic_info;
    let query = match info.coordinates() {
        Some((lat, lng)) => format!("{lat},{lng}"),
        None => format!("{} {}", info.name, info.city.as_deref().unwrap_or_default())
            .trim()
            .to_owned(),
    };
    let q = utf8_percent_encode(&query, QUERY_VALUE);

    match ctx.maps_api_key {
        Some(key) => {
            let key = utf8_percent_encode(key, QUERY_VALUE);
            if info.coordinates().is_some() {
                format!("{MAPS_EMBED_API}?key={key}&q={q}&zoom=15")
            } else {
                format!("{MAPS_EMBED_API}?key={key}&q={q}")
            }
        }
        None => format!("{MAPS_KEYLESS_EMBED}?q={q}&z=15&output=embed"),
    }
}

#[cfg(test)]
mod tests {
    use plumbsite_core::{SiteContext, WorkingHours};

    use super::*;
    use crate::sections::test_support::{context, sample};

    #[test]
    fn coordinates_are_pinned_when_both_present() {
        let data = sample();
        let site = SiteContext::new(None);
        let url = embed_url(&context(&data, &site));
        assert_eq!(
            url,
            "https://maps.google.com/maps?q=34.7465%2C-92.2896&z=15&output=embed"
        );
    }

    #[test]
    fn missing_coordinate_falls_back_to_name_search() {
        let mut data = sample();
        data.basic_info.longitude = None;
        let site = SiteContext::new(None);
        let url = embed_url(&context(&data, &site));
        assert!(
            url.contains("q=Arkansas%20Professional%20Plumbing%20Little%20Rock"),
            "{url}"
        );
    }

    #[test]
    fn api_key_selects_embed_api() {
        let data = sample();
        let site = SiteContext::new(None);
        let mut ctx = context(&data, &site);
        ctx.maps_api_key = Some("k123");
        let url = embed_url(&ctx);
        assert!(url.starts_with("https://www.google.com/maps/embed/v1/place?key=k123&q="));
        assert!(url.ends_with("&zoom=15"));
    }

    #[test]
    fn todays_hours_are_highlighted() {
        let data = sample();
        let site = SiteContext::new(None);
        let html = render(&context(&data, &site)).unwrap();
        assert_eq!(html.matches("hours-row today").count(), 1, "{html}");
        assert!(html.contains("Monday"));
    }

    #[test]
    fn empty_hours_table_hides_hours() {
        let mut data = sample();
        data.basic_info.working_hours = Some(WorkingHours::default());
        data.basic_info.city = None;
        let site = SiteContext::new(None);
        let html = render(&context(&data, &site)).unwrap();
        assert!(!html.contains("Business Hours"));
        assert!(html.contains("Serving the local area"));
    }
}
