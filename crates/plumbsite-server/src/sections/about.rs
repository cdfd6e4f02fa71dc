use askama::Template;

use super::RenderContext;

#[derive(Template)]
#[template(path = "sections/about.html")]
struct AboutTemplate<'a> {
    name: &'a str,
    city_name: &'a str,
    description: Option<&'a str>,
    years_in_business: Option<u32>,
}

pub fn render(ctx: &RenderContext<'_>) -> askama::Result<String> {
    let info = &ctx.data.basic_info;
    AboutTemplate {
        name: &info.name,
        city_name: info
            .city
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or("your area"),
        description: info
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty()),
        years_in_business: info.years_in_business.filter(|&y| y > 0),
    }
    .render()
}
