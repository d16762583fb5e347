use std::sync::Arc;

use crate::application::http::health::health_routes;
use crate::application::http::recipe::router::recipe_routes;
use crate::application::http::server::app_state::AppState;
use crate::application::http::server::openapi::api_doc;
use crate::args::Args;

use anyhow::Context;
use axum::Router;
use axum::http::header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use recipe_studio_core::{application::create_service, domain::common::RecipeStudioConfig};
use tower_http::cors::CorsLayer;
use tracing::{debug, info_span};
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

pub fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = RecipeStudioConfig::from(args.as_ref().clone());
    let service = create_service(config);

    Ok(AppState::new(args, service))
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = state
        .args
        .server
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin.trim())
                .with_context(|| format!("invalid allowed origin {origin:?}"))
        })
        .collect::<Result<Vec<HeaderValue>, _>>()?;

    debug!("Allowed origins: {:?}", allowed_origins);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(allowed_origins)
        .allow_headers([CONTENT_TYPE, CONTENT_LENGTH, ACCEPT])
        .allow_credentials(true);

    let root_path = state.args.server.root_path.clone();

    let mut openapi = api_doc();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", root_path), item))
        .collect();
    openapi.paths = paths;

    let api_docs_url = format!("{}/api-docs/openapi.json", root_path);

    let router = axum::Router::new()
        .merge(Scalar::with_url(
            format!("{}/scalar", root_path),
            openapi.clone(),
        ))
        .merge(SwaggerUi::new(format!("{}/swagger-ui", root_path)).url(api_docs_url, openapi))
        .merge(recipe_routes(state.clone()))
        .merge(health_routes(&root_path))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state);
    Ok(router)
}

/// Mounts `/metrics` and records request metrics for everything routed so far.
///
/// Installs the global Prometheus recorder, so it may only run once per process.
pub fn with_metrics(router: Router, root_path: &str) -> Router {
    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    router
        .route(
            &format!("{}/metrics", root_path),
            get(|| async move { metric_handle.render() }),
        )
        .layer(prometheus_layer)
}
