use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use plumbsite_core::SiteContext;
use plumbsite_data::{ResolvedSite, SiteDataError};
use serde::Deserialize;

use super::AppState;
use crate::contact_form::ContactSubmission;
use crate::pages::{self, residential::ServiceFilter, REQUEST_SENT};
use crate::sections::{contact::ContactFormState, Clock, RenderContext};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct PageQuery {
    site_id: Option<String>,
    /// Carousel position; unparseable values are ignored.
    review: Option<String>,
    filter: Option<String>,
}

impl PageQuery {
    fn site(&self, state: &AppState) -> SiteContext {
        SiteContext::new(self.site_id.as_deref()).with_base_path(&state.config.base_path)
    }

    fn review_index(&self) -> Option<usize> {
        self.review.as_deref().and_then(|r| r.trim().parse().ok())
    }
}

#[derive(Debug, thiserror::Error)]
pub(super) enum PageError {
    #[error("{source}")]
    SiteData {
        site: SiteContext,
        #[source]
        source: SiteDataError,
    },
    #[error("failed to render page: {0}")]
    Render(#[from] askama::Error),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::SiteData { site, source } => {
                let status = match source {
                    SiteDataError::MissingSiteId => StatusCode::BAD_REQUEST,
                    SiteDataError::FetchFailed(_) | SiteDataError::Validation(_) => {
                        StatusCode::BAD_GATEWAY
                    }
                };
                match pages::status::error_page(&site, &source.to_string()) {
                    Ok(body) => (status, Html(body)).into_response(),
                    Err(e) => render_failure(&e),
                }
            }
            PageError::Render(e) => render_failure(&e),
        }
    }
}

fn render_failure(error: &askama::Error) -> Response {
    tracing::error!(error = %error, "page rendering failed");
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
}

async fn load(state: &AppState, site: &SiteContext) -> Result<ResolvedSite, PageError> {
    state
        .resolver
        .load(site)
        .await
        .map_err(|source| PageError::SiteData {
            site: site.clone(),
            source,
        })
}

fn render_context<'a>(
    state: &'a AppState,
    resolved: &'a ResolvedSite,
    site: &'a SiteContext,
    current_path: &'a str,
) -> RenderContext<'a> {
    RenderContext {
        data: &resolved.data,
        site,
        current_path,
        clock: Clock::now(),
        maps_api_key: state.config.maps_api_key.as_deref(),
    }
}

pub(super) async fn home(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, PageError> {
    let site = query.site(&state);
    let resolved = load(&state, &site).await?;
    let ctx = render_context(&state, &resolved, &site, "/");
    let html = pages::home::render(
        &ctx,
        query.review_index(),
        &ContactFormState::default(),
        None,
    )?;
    Ok(Html(html))
}

pub(super) async fn residential(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, PageError> {
    let site = query.site(&state);
    let resolved = load(&state, &site).await?;
    let ctx = render_context(&state, &resolved, &site, "/residential");
    let filter = ServiceFilter::from_query(query.filter.as_deref());
    let html = pages::residential::render(&ctx, filter, &ContactFormState::default())?;
    Ok(Html(html))
}

pub(super) async fn commercial(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, PageError> {
    let site = query.site(&state);
    let resolved = load(&state, &site).await?;
    let ctx = render_context(&state, &resolved, &site, "/commercial");
    let html = pages::commercial::render(&ctx, &ContactFormState::default())?;
    Ok(Html(html))
}

/// Validates a contact form post and re-renders the home page, either with
/// a confirmation toast or with the field errors.
pub(super) async fn submit_contact(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
    Form(submission): Form<ContactSubmission>,
) -> Result<Response, PageError> {
    let site = query.site(&state);
    let resolved = load(&state, &site).await?;
    let ctx = render_context(&state, &resolved, &site, "/");

    match submission.validate() {
        Ok(request) => {
            tracing::info!(
                site_id = site.site_id(),
                name = %request.name,
                phone = %request.phone,
                email = request.email.as_deref(),
                service = %request.service,
                message = %request.message,
                "contact request received"
            );
            let html = pages::home::render(
                &ctx,
                None,
                &ContactFormState::default(),
                Some(REQUEST_SENT),
            )?;
            Ok(Html(html).into_response())
        }
        Err(errors) => {
            tracing::debug!(site_id = site.site_id(), ?errors, "contact request rejected");
            let form = ContactFormState::rejected(submission, errors);
            let html = pages::home::render(&ctx, None, &form, None)?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response())
        }
    }
}

pub(super) async fn not_found(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Response, PageError> {
    let site = query.site(&state);
    let html = pages::status::not_found(&site)?;
    Ok((StatusCode::NOT_FOUND, Html(html)).into_response())
}
