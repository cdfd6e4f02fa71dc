use askama::Template;

use super::RenderContext;

struct ServiceCard {
    title: &'static str,
    description: &'static str,
    image: &'static str,
    color: &'static str,
    href: String,
}

#[derive(Template)]
#[template(path = "sections/services.html")]
struct ServicesTemplate {
    cards: Vec<ServiceCard>,
}

pub fn render(ctx: &RenderContext<'_>) -> askama::Result<String> {
    let cards = vec![
        ServiceCard {
            title: "Residential Services",
            description: "Complete plumbing solutions for your home including repairs, installations, and maintenance",
            image: "https://assets.cdn.filesafe.space/jcEKoOF2TKiEyPXqmAdw/media/64fc0ee7c42c8139caa59f04.jpeg",
            color: "#0B3D91",
            href: ctx.site.link("/residential"),
        },
        ServiceCard {
            title: "Commercial Services",
            description: "Professional plumbing services for businesses, restaurants, and commercial properties",
            image: "https://images.unsplash.com/photo-1585704032915-c3400ca199e7?w=800&auto=format&fit=crop&q=80",
            color: "#051C45",
            href: ctx.site.link("/commercial"),
        },
        ServiceCard {
            title: "Emergency Services",
            description: "24/7 emergency plumbing response when you need help fast",
            image: "https://images.unsplash.com/photo-1621905252507-b35492cc74b4?w=800&auto=format&fit=crop&q=80",
            color: "#FF7A00",
            href: "#chat-widget".to_string(),
        },
    ];

    ServicesTemplate { cards }.render()
}

#[cfg(test)]
mod tests {
    use plumbsite_core::SiteContext;

    use super::*;
    use crate::sections::test_support::{context, sample};

    #[test]
    fn page_cards_link_with_site_id_and_emergency_opens_chat() {
        let data = sample();
        let site = SiteContext::new(Some("acme"));
        let html = render(&context(&data, &site)).unwrap();
        assert!(html.contains("/residential?site_id=acme"));
        assert!(html.contains("/commercial?site_id=acme"));
        assert!(html.contains("#chat-widget"));
    }
}
