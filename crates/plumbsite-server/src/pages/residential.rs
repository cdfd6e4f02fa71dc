use askama::Template;

use crate::sections::contact::ContactFormState;
use crate::sections::{contact, footer, header, hero, RenderContext};

use super::{document, page_title};

/// Service categories the residential page can be narrowed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceFilter {
    All,
    Repairs,
    Installation,
    Maintenance,
    Emergency,
}

impl ServiceFilter {
    pub const ALL: [ServiceFilter; 5] = [
        ServiceFilter::All,
        ServiceFilter::Repairs,
        ServiceFilter::Installation,
        ServiceFilter::Maintenance,
        ServiceFilter::Emergency,
    ];

    /// Reads the `filter` query value; unknown or missing values select
    /// every category.
    #[must_use]
    pub fn from_query(raw: Option<&str>) -> Self {
        raw.map(str::trim)
            .and_then(|raw| Self::ALL.into_iter().find(|f| f.label() == raw))
            .unwrap_or(ServiceFilter::All)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ServiceFilter::All => "All Services",
            ServiceFilter::Repairs => "Repairs",
            ServiceFilter::Installation => "Installation",
            ServiceFilter::Maintenance => "Maintenance",
            ServiceFilter::Emergency => "Emergency",
        }
    }

    fn shows(self, category: ServiceFilter) -> bool {
        self == ServiceFilter::All || self == category
    }
}

struct ServiceCategory {
    filter: ServiceFilter,
    title: &'static str,
    description: &'static str,
    services: [&'static str; 6],
}

static CATEGORIES: [ServiceCategory; 4] = [
    ServiceCategory {
        filter: ServiceFilter::Repairs,
        title: "Repairs & Fixes",
        description: "Professional repair services for all your plumbing needs",
        services: [
            "Leak repairs",
            "Pipe repairs",
            "Fixture repairs",
            "Drain unclogging",
            "Water pressure issues",
            "Toilet repairs",
        ],
    },
    ServiceCategory {
        filter: ServiceFilter::Installation,
        title: "Installation Services",
        description: "Expert installation of plumbing fixtures and systems",
        services: [
            "Fixture installation",
            "Water heater installation",
            "Pipe installation",
            "Bathroom remodels",
            "Kitchen plumbing",
            "Garbage disposal installation",
        ],
    },
    ServiceCategory {
        filter: ServiceFilter::Maintenance,
        title: "Maintenance & Inspections",
        description: "Preventive maintenance to keep your plumbing system running smoothly",
        services: [
            "Annual plumbing inspection",
            "Drain cleaning",
            "Water heater maintenance",
            "Pipe insulation",
            "Winterization",
            "Water quality testing",
        ],
    },
    ServiceCategory {
        filter: ServiceFilter::Emergency,
        title: "Emergency Services",
        description: "24/7 emergency plumbing services when you need them most",
        services: [
            "Burst pipe repair",
            "Major leaks",
            "Sewer backups",
            "Water heater failures",
            "Frozen pipe thawing",
            "Flooding issues",
        ],
    },
];

static TRUST_FEATURES: [(&str, &str); 3] = [
    (
        "Fast Response Times",
        "Quick response to all service calls with 24/7 emergency availability",
    ),
    (
        "Quality Guarantee",
        "All our work is backed by our satisfaction guarantee",
    ),
    (
        "Experienced Technicians",
        "Licensed, insured, and extensively trained professionals",
    ),
];

struct FilterLink {
    label: &'static str,
    href: String,
    class: &'static str,
}

#[derive(Template)]
#[template(path = "pages/residential.html")]
struct ResidentialTemplate<'a> {
    filters: Vec<FilterLink>,
    categories: Vec<&'a ServiceCategory>,
    features: &'a [(&'static str, &'static str)],
    contact_href: String,
}

pub fn render(
    ctx: &RenderContext<'_>,
    filter: ServiceFilter,
    form: &ContactFormState,
) -> askama::Result<String> {
    let name = &ctx.data.basic_info.name;
    let filters = ServiceFilter::ALL
        .into_iter()
        .map(|f| FilterLink {
            label: f.label(),
            href: ctx
                .site
                .link_with("/residential", &[("filter", f.label())]),
            class: if f == filter { "button active" } else { "button" },
        })
        .collect();

    let content = ResidentialTemplate {
        filters,
        categories: CATEGORIES.iter().filter(|c| filter.shows(c.filter)).collect(),
        features: &TRUST_FEATURES,
        contact_href: ctx.site.link("/residential#contact"),
    }
    .render()?;

    let body = [
        header::render(ctx)?,
        "<main>".to_owned(),
        hero::render_banner(
            "Residential Plumbing Services",
            format!("Professional plumbing solutions for your home by {name}"),
        )?,
        content,
        contact::render(ctx, form)?,
        "</main>".to_owned(),
        footer::render(ctx)?,
    ]
    .concat();

    document(ctx.site, &page_title(name, "Residential Services"), &body, None)
}
