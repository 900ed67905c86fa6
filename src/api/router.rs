//! HTTP router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/`. CORS is permissive so the browser
//! front end can be served from another origin.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::types::AppContext;

/// Build the API router.
pub fn api_router(ctx: AppContext) -> Router {
    let routes = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/metrics", get(endpoints::metrics::model))
        .route("/predict-ml", post(endpoints::predict::ml))
        .route("/predict-ai", post(endpoints::analysis::ai))
        .route("/calculators/bmi", post(endpoints::calculators::bmi))
        .route("/calculators/bmr", post(endpoints::calculators::bmr))
        .route(
            "/calculators/blood-pressure",
            post(endpoints::calculators::blood_pressure),
        )
        .route(
            "/calculators/cholesterol",
            post(endpoints::calculators::cholesterol),
        )
        .with_state(ctx);

    Router::new()
        .nest("/api", routes)
        .layer(CorsLayer::permissive())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;
    use crate::adapters::Unconfigured;
    use crate::application::MEDICAL_DISCLAIMER;
    use crate::ports::{ExplainError, RiskExplainer};

    const SAMPLE_BODY: &str = r#"{
        "age": 58, "sex": 1, "chestPainType": 1, "restingBloodPressure": 130,
        "cholesterol": 210, "fastingBloodSugarHigh": 0, "restingECG": 0,
        "maxHeartRate": 130, "exerciseInducedAngina": 0, "stDepression": 1.5,
        "stSlope": 1, "majorVesselsColored": 0, "thalassemiaStatus": 1
    }"#;

    struct CannedExplainer;

    impl RiskExplainer for CannedExplainer {
        fn name(&self) -> &str {
            "gemini-1.5-flash"
        }

        fn explain(&self, _prompt: &str) -> Result<String, ExplainError> {
            Ok("**Risk Assessment**: Elevated.".to_string())
        }
    }

    fn unconfigured_app() -> Router {
        api_router(AppContext::new(
            Arc::new(Unconfigured),
            Arc::new(Unconfigured),
        ))
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("Should build request")
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Should read body")
            .to_bytes();
        serde_json::from_slice(&bytes).expect("Should be JSON")
    }

    #[tokio::test]
    async fn test_health_reports_models() {
        let req = Request::builder()
            .uri("/api/health")
            .body(Body::empty())
            .expect("Should build request");
        let response = unconfigured_app().oneshot(req).await.expect("Should respond");
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["primary_model"], "unconfigured");
        assert_eq!(json["explainer"], "unconfigured");
    }

    #[tokio::test]
    async fn test_metrics_served() {
        let req = Request::builder()
            .uri("/api/metrics")
            .body(Body::empty())
            .expect("Should build request");
        let response = unconfigured_app().oneshot(req).await.expect("Should respond");
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        assert_eq!(json["auc_score"], 0.91);
        assert_eq!(json["confusion_matrix"][1][1], 42);
        assert_eq!(json["feature_importance"]["chest_pain_type"], 0.23);
    }

    #[tokio::test]
    async fn test_predict_ml_falls_back() {
        let response = unconfigured_app()
            .oneshot(post_json("/api/predict-ml", SAMPLE_BODY))
            .await
            .expect("Should respond");
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        assert_eq!(json["Prediction_Probability_Percentage"], 81.0);
        assert_eq!(json["risk_level"], "Very High");
        assert_eq!(json["risk_color"], "red");
        assert_eq!(json["model_source"], "Fallback ML Model");
        assert!(json["accuracy_note"].is_string());
        assert_eq!(
            json["message"],
            "Heart attack risk assessment completed. Risk probability: 81.0%"
        );
    }

    #[tokio::test]
    async fn test_predict_ml_accepts_dataset_names() {
        let body = r#"{
            "age": 45, "sex": 0, "cp": 3, "trestbps": 120, "chol": 190,
            "fbs": 0, "restecg": 0, "thalach": 170, "exang": 0,
            "oldpeak": 0.0, "slope": 2, "ca": 0, "thal": 2
        }"#;
        let response = unconfigured_app()
            .oneshot(post_json("/api/predict-ml", body))
            .await
            .expect("Should respond");
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        assert_eq!(json["risk_level"], "Low");
        assert_eq!(json["risk_factors"].as_array().map(Vec::len), Some(0));
    }

    #[tokio::test]
    async fn test_predict_ml_rejects_out_of_range() {
        let body = SAMPLE_BODY.replace("\"age\": 58", "\"age\": 0");
        let response = unconfigured_app()
            .oneshot(post_json("/api/predict-ml", &body))
            .await
            .expect("Should respond");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = json_body(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION_FAILED");
        assert_eq!(json["error"]["message"], "Age 0 out of range [1, 120]");
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let response = unconfigured_app()
            .oneshot(post_json("/api/predict-ml", "{\"age\": "))
            .await
            .expect("Should respond");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = json_body(response).await;
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_predict_ai_not_configured() {
        let response = unconfigured_app()
            .oneshot(post_json("/api/predict-ai", SAMPLE_BODY))
            .await
            .expect("Should respond");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let json = json_body(response).await;
        assert_eq!(json["error"]["code"], "AI_NOT_CONFIGURED");
    }

    #[tokio::test]
    async fn test_predict_ai_with_explainer() {
        let app = api_router(AppContext::new(
            Arc::new(Unconfigured),
            Arc::new(CannedExplainer),
        ));
        let response = app
            .oneshot(post_json("/api/predict-ai", SAMPLE_BODY))
            .await
            .expect("Should respond");
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        let prediction = json["prediction"].as_str().expect("prediction is text");
        assert!(prediction.starts_with("**Risk Assessment**: Elevated."));
        assert!(prediction.ends_with(MEDICAL_DISCLAIMER));
        assert_eq!(json["analysis_type"], "AI-Powered Medical Analysis");
        assert_eq!(json["model_used"], "gemini-1.5-flash");
    }

    #[tokio::test]
    async fn test_calculators() {
        let app = unconfigured_app();

        let json = json_body(
            app.clone()
                .oneshot(post_json(
                    "/api/calculators/bmi",
                    r#"{"weight": 70, "height": 1.75}"#,
                ))
                .await
                .expect("Should respond"),
        )
        .await;
        assert_eq!(json["bmi"], 22.9);
        assert_eq!(json["category"], "Normal weight");

        let json = json_body(
            app.clone()
                .oneshot(post_json(
                    "/api/calculators/bmr",
                    r#"{"weight": 70, "height": 175, "age": 30, "gender": "male"}"#,
                ))
                .await
                .expect("Should respond"),
        )
        .await;
        assert_eq!(json["bmr"], 1696.0);

        let json = json_body(
            app.clone()
                .oneshot(post_json(
                    "/api/calculators/blood-pressure",
                    r#"{"age": 30, "heartRate": 70}"#,
                ))
                .await
                .expect("Should respond"),
        )
        .await;
        assert_eq!(json["systolic"], 120);
        assert_eq!(json["diastolic"], 80);
        assert_eq!(json["category"], "High Blood Pressure Stage 1");

        let json = json_body(
            app.oneshot(post_json(
                "/api/calculators/cholesterol",
                r#"{"age": 30, "gender": "male"}"#,
            ))
            .await
            .expect("Should respond"),
        )
        .await;
        assert_eq!(json["total"], 204);
        assert_eq!(json["category"], "Borderline High");
    }

    #[tokio::test]
    async fn test_bmi_rejects_zero_height() {
        let response = unconfigured_app()
            .oneshot(post_json(
                "/api/calculators/bmi",
                r#"{"weight": 70, "height": 0}"#,
            ))
            .await
            .expect("Should respond");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let req = Request::builder()
            .uri("/api/nope")
            .body(Body::empty())
            .expect("Should build request");
        let response = unconfigured_app().oneshot(req).await.expect("Should respond");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
