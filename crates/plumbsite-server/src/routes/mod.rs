mod api;
mod pages;

use std::sync::Arc;

use axum::{
    http::{header, HeaderName, HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use plumbsite_core::AppConfig;
use plumbsite_data::SiteDataResolver;
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::middleware::{request_id, REQUEST_ID_HEADER};

#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<SiteDataResolver>,
    pub config: Arc<AppConfig>,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
}

/// Joins the configured base path with a route path. The home route under
/// a base path is reachable with and without the trailing slash.
fn mounted(base_path: &str, path: &str) -> Vec<String> {
    match (base_path.is_empty(), path) {
        (true, _) => vec![path.to_owned()],
        (false, "/") => vec![base_path.to_owned(), format!("{base_path}/")],
        (false, _) => vec![format!("{base_path}{path}")],
    }
}

pub fn build_app(state: AppState) -> Router {
    let base = state.config.base_path.clone();

    let mut page_routes = Router::new();
    for path in mounted(&base, "/") {
        page_routes = page_routes.route(&path, get(pages::home));
    }
    for path in mounted(&base, "/residential") {
        page_routes = page_routes.route(&path, get(pages::residential));
    }
    for path in mounted(&base, "/commercial") {
        page_routes = page_routes.route(&path, get(pages::commercial));
    }
    for path in mounted(&base, "/contact") {
        page_routes = page_routes.route(&path, post(pages::submit_contact));
    }

    let mut api_routes = Router::new();
    for path in mounted(&base, "/api/health") {
        api_routes = api_routes.route(&path, get(api::health));
    }
    for path in mounted(&base, "/api/chat") {
        api_routes = api_routes.route(&path, post(api::chat));
    }

    Router::new()
        .merge(page_routes)
        .merge(api_routes.layer(build_cors()))
        .fallback(pages::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(request_id))
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(SetResponseHeaderLayer::overriding(
                    header::X_CONTENT_TYPE_OPTIONS,
                    HeaderValue::from_static("nosniff"),
                )),
        )
        .with_state(state)
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
