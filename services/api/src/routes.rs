use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse};
use axum::Extension;
use axum::Json;
use loan_risk::scoring::{prediction_router, RiskScoringService};
use serde_json::json;
use std::sync::Arc;

const DASHBOARD_PAGE: &str = include_str!("../assets/index.html");

pub(crate) fn with_risk_routes(service: Arc<RiskScoringService>) -> axum::Router {
    prediction_router(service)
        .route("/", axum::routing::get(dashboard_page))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

/// The single-page prediction form with the verdict panel and gauge.
pub(crate) async fn dashboard_page() -> Html<&'static str> {
    Html(DASHBOARD_PAGE)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn dashboard_page_contains_the_seven_form_fields() {
        let Html(page) = dashboard_page().await;

        for field in [
            "income",
            "employment_experience_years",
            "home_ownership",
            "loan_amount",
            "loan_interest_rate",
            "loan_percent_of_income",
            "previous_default_on_file",
        ] {
            assert!(page.contains(field), "form is missing field '{field}'");
        }
        assert!(page.contains("/api/v1/risk/predictions"));
    }
}
