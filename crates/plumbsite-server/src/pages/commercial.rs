use askama::Template;

use crate::sections::contact::ContactFormState;
use crate::sections::{contact, footer, header, hero, RenderContext};

use super::{document, page_title};

struct Feature {
    title: &'static str,
    description: &'static str,
}

struct CoreService {
    title: &'static str,
    description: &'static str,
    services: [&'static str; 6],
}

struct FaqItem {
    question: &'static str,
    answer: &'static str,
}

static BUSINESS_TYPES: [Feature; 6] = [
    Feature {
        title: "Restaurants",
        description: "Specialized plumbing solutions for food service establishments",
    },
    Feature {
        title: "Office Buildings",
        description: "Comprehensive systems for multi-story commercial properties",
    },
    Feature {
        title: "Retail",
        description: "Reliable plumbing services for retail locations",
    },
    Feature {
        title: "Medical Facilities",
        description: "Code-compliant solutions for healthcare environments",
    },
    Feature {
        title: "Industrial",
        description: "Heavy-duty plumbing systems for industrial applications",
    },
    Feature {
        title: "Multi-family",
        description: "Efficient solutions for apartment complexes and condominiums",
    },
];

static CORE_SERVICES: [CoreService; 3] = [
    CoreService {
        title: "Commercial Plumbing Systems",
        description: "Complete installation and maintenance of commercial-grade systems",
        services: [
            "System installation",
            "Code compliance",
            "Large-scale repairs",
            "Water supply systems",
            "Sewage systems",
            "Backflow prevention",
        ],
    },
    CoreService {
        title: "Preventative Maintenance Programs",
        description: "Proactive maintenance to prevent costly disruptions",
        services: [
            "Scheduled inspections",
            "System efficiency audits",
            "Preventative repairs",
            "Record keeping",
            "Emergency prevention",
            "Cost-saving maintenance",
        ],
    },
    CoreService {
        title: "Emergency Response",
        description: "24/7 emergency services for commercial properties",
        services: [
            "24/7 availability",
            "Rapid response protocols",
            "Minimal business disruption",
            "Temporary solutions",
            "Full repairs",
            "Emergency team deployment",
        ],
    },
];

static STANDARDS: [Feature; 3] = [
    Feature {
        title: "Licensed & Insured",
        description: "Fully licensed and insured for commercial plumbing work",
    },
    Feature {
        title: "Safety Certified",
        description: "Strict adherence to safety protocols and regulations",
    },
    Feature {
        title: "Code Compliant",
        description: "All work meets or exceeds local building codes",
    },
];

static FAQ: [FaqItem; 4] = [
    FaqItem {
        question: "How do you minimize business disruption during repairs?",
        answer: "We schedule work during off-hours and use efficient repair methods to minimize downtime. Our team coordinates closely with your staff to ensure minimal impact on operations.",
    },
    FaqItem {
        question: "What are your commercial service areas?",
        answer: "We service all types of commercial properties including restaurants, office buildings, retail spaces, medical facilities, and industrial complexes throughout the region.",
    },
    FaqItem {
        question: "Do you provide preventive maintenance programs?",
        answer: "Yes, we offer customized preventive maintenance programs that include regular inspections, system optimization, and scheduled maintenance to prevent costly emergencies.",
    },
    FaqItem {
        question: "Are you licensed for commercial plumbing work?",
        answer: "Yes, we maintain all required commercial licenses and certifications. Our team is fully insured and trained in commercial plumbing systems.",
    },
];

#[derive(Template)]
#[template(path = "pages/commercial.html")]
struct CommercialTemplate<'a> {
    business_types: &'a [Feature],
    core_services: &'a [CoreService],
    standards: &'a [Feature],
    faq: &'a [FaqItem],
    contact_href: String,
}

pub fn render(ctx: &RenderContext<'_>, form: &ContactFormState) -> askama::Result<String> {
    let name = &ctx.data.basic_info.name;
    let content = CommercialTemplate {
        business_types: &BUSINESS_TYPES,
        core_services: &CORE_SERVICES,
        standards: &STANDARDS,
        faq: &FAQ,
        contact_href: ctx.site.link("/commercial#contact"),
    }
    .render()?;

    let body = [
        header::render(ctx)?,
        "<main>".to_owned(),
        hero::render_banner(
            "Commercial & Industrial Plumbing Solutions",
            format!("Professional grade plumbing services for businesses by {name}"),
        )?,
        content,
        contact::render(ctx, form)?,
        "</main>".to_owned(),
        footer::render(ctx)?,
    ]
    .concat();

    document(ctx.site, &page_title(name, "Commercial Services"), &body, None)
}

#[cfg(test)]
mod tests {
    use plumbsite_core::SiteContext;

    use super::*;
    use crate::sections::test_support::{context, sample};

    #[test]
    fn commercial_page_lists_industries_services_and_faq() {
        let data = sample();
        let site = SiteContext::new(Some("acme"));
        let mut ctx = context(&data, &site);
        ctx.current_path = "/commercial";
        let html = render(&ctx, &ContactFormState::default()).unwrap();

        assert!(html.contains("Industries We Serve"));
        assert!(html.contains("Medical Facilities"));
        assert!(html.contains("Backflow prevention"));
        assert!(html.contains("Are you licensed for commercial plumbing work?"));
        assert!(html.contains("by Arkansas Professional Plumbing"));
        assert!(html.contains("/commercial?site_id=acme#contact"));
        assert!(html.contains(r#"class="active""#));
    }
}
