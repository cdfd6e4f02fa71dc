use crate::sections::contact::ContactFormState;
use crate::sections::{about, contact, footer, header, hero, map, reviews, services, RenderContext};

use super::{document, page_title, Toast};

/// The landing page: every section in order.
pub fn render(
    ctx: &RenderContext<'_>,
    review_index: Option<usize>,
    form: &ContactFormState,
    toast: Option<Toast>,
) -> askama::Result<String> {
    let body = [
        header::render(ctx)?,
        "<main>".to_owned(),
        hero::render(ctx)?,
        about::render(ctx)?,
        services::render(ctx)?,
        reviews::render(ctx, review_index)?,
        map::render(ctx)?,
        contact::render(ctx, form)?,
        "</main>".to_owned(),
        footer::render(ctx)?,
    ]
    .concat();

    document(
        ctx.site,
        &page_title(&ctx.data.basic_info.name, "Professional Plumbing Services"),
        &body,
        toast,
    )
}
