use askama::Template;

use super::{PhoneLink, RenderContext};

#[derive(Template)]
#[template(path = "sections/hero.html")]
struct HeroTemplate<'a> {
    name: &'a str,
    tagline: String,
    /// CSS class per star; empty when there is no rating.
    stars: Vec<&'static str>,
    call: Option<PhoneLink>,
}

/// Title banner used at the top of the residential and commercial pages.
#[derive(Template)]
#[template(path = "sections/banner.html")]
struct BannerTemplate<'a> {
    title: &'a str,
    subtitle: String,
}

pub fn render(ctx: &RenderContext<'_>) -> askama::Result<String> {
    let info = &ctx.data.basic_info;
    let tagline = match info.city.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        Some(city) => format!("Professional Plumbing Services in {city}"),
        None => "Professional Plumbing Services".to_string(),
    };

    HeroTemplate {
        name: &info.name,
        tagline,
        stars: info.rating.map(filled_stars).unwrap_or_default(),
        call: ctx.phone_link(),
    }
    .render()
}

pub fn render_banner(title: &str, subtitle: String) -> askama::Result<String> {
    BannerTemplate { title, subtitle }.render()
}

/// Five star classes, the first `floor(rating)` of them filled.
fn filled_stars(rating: f64) -> Vec<&'static str> {
    let full = rating.floor();
    (0..5u8)
        .map(|i| if f64::from(i) < full { "star filled" } else { "star" })
        .collect()
}

#[cfg(test)]
mod tests {
    use plumbsite_core::SiteContext;

    use super::*;
    use crate::sections::test_support::{context, sample};

    #[test]
    fn stars_fill_up_to_whole_rating() {
        let filled = |stars: Vec<&str>| stars.iter().filter(|s| **s == "star filled").count();
        assert_eq!(filled(filled_stars(4.8)), 4);
        assert_eq!(filled(filled_stars(5.0)), 5);
        assert_eq!(filled(filled_stars(0.5)), 0);
        assert_eq!(filled_stars(3.2).len(), 5);
    }

    #[test]
    fn tagline_mentions_city_when_known() {
        let mut data = sample();
        let site = SiteContext::new(None);
        let html = render(&context(&data, &site)).unwrap();
        assert!(html.contains("Professional Plumbing Services in Little Rock"));

        data.basic_info.city = None;
        let html = render(&context(&data, &site)).unwrap();
        assert!(!html.contains(" in Little Rock"));
    }

    #[test]
    fn rating_row_is_omitted_without_rating() {
        let mut data = sample();
        data.basic_info.rating = None;
        let site = SiteContext::new(None);
        let html = render(&context(&data, &site)).unwrap();
        assert!(!html.contains("class=\"stars\""));
    }
}
