use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::{ApplicantRecord, RiskBand, RiskLabel};
use super::service::RiskScoringService;

/// Router builder exposing the prediction endpoint.
pub fn prediction_router(service: Arc<RiskScoringService>) -> Router {
    Router::new()
        .route("/api/v1/risk/predictions", post(predict_handler))
        .with_state(service)
}

/// Wire shape of one scored submission.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionResponse {
    pub label: RiskLabel,
    pub verdict: &'static str,
    pub probability_of_default: f64,
    pub band: RiskBand,
    pub gauge_color: &'static str,
    pub evaluated_at: DateTime<Utc>,
}

pub(crate) async fn predict_handler(
    State(service): State<Arc<RiskScoringService>>,
    axum::Json(record): axum::Json<ApplicantRecord>,
) -> impl IntoResponse {
    let result = service.predict(&record);
    let band = result.band();

    let response = PredictionResponse {
        label: result.label,
        verdict: result.label.verdict(),
        probability_of_default: result.probability_of_default,
        band,
        gauge_color: band.gauge_color(),
        evaluated_at: Utc::now(),
    };

    (StatusCode::OK, axum::Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::artifacts::{
        ArtifactBundle, ClassifierArtifact, ScalerArtifact, SchemaColumns,
    };
    use crate::scoring::domain::{HomeOwnership, PreviousDefault};
    use axum::body::Body;
    use axum::http::{header, Request};
    use tower::ServiceExt;

    fn service() -> Arc<RiskScoringService> {
        let columns = SchemaColumns::new(vec![
            "income".to_string(),
            "loan_interest_rate".to_string(),
            "previous_default_on_file_NO".to_string(),
            "previous_default_on_file_YES".to_string(),
        ]);
        let scaler = ScalerArtifact {
            mean: vec![65_000.0, 11.0, 0.55, 0.45],
            scale: vec![40_000.0, 3.0, 0.5, 0.5],
        };
        let classifier = ClassifierArtifact {
            weights: vec![-0.5, 0.8, -0.9, 0.9],
            intercept: -0.3,
        };
        let bundle = ArtifactBundle::from_parts(columns, scaler, classifier)
            .expect("test bundle is consistent");
        Arc::new(RiskScoringService::new(bundle))
    }

    fn record() -> ApplicantRecord {
        ApplicantRecord {
            income: 60_000,
            employment_experience_years: 5,
            home_ownership: HomeOwnership::Rent,
            loan_amount: 10_000,
            loan_interest_rate: 12.5,
            loan_percent_of_income: 0.17,
            previous_default_on_file: PreviousDefault::No,
        }
    }

    #[tokio::test]
    async fn predict_handler_reports_label_band_and_probability() {
        let response = predict_handler(State(service()), axum::Json(record()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");

        let probability = body["probability_of_default"]
            .as_f64()
            .expect("probability present");
        assert!((0.0..=100.0).contains(&probability));
        assert!(body["label"].is_string());
        assert!(body["band"].is_string());
        assert!(body["evaluated_at"].is_string());
    }

    #[tokio::test]
    async fn router_rejects_malformed_submissions() {
        let app = prediction_router(service());

        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/risk/predictions")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"income": -5}"#))
            .expect("request builds");

        let response = app.oneshot(request).await.expect("router responds");
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn router_scores_valid_submissions() {
        let app = prediction_router(service());

        let payload = serde_json::to_string(&record()).expect("record serializes");
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/risk/predictions")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload))
            .expect("request builds");

        let response = app.oneshot(request).await.expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);
    }
}
