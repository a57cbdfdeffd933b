use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::ConsultationRequest;
use super::service::ConsultationService;
use crate::error::AppError;
use crate::workflows::phototype::{PhototypeCategory, RawObservations};
use crate::workflows::pigments::MatchRequestInput;

/// Router exposing classification, recommendation and reference endpoints.
pub fn consultation_router(service: Arc<ConsultationService>) -> Router {
    Router::new()
        .route("/api/v1/phototype/classify", post(classify_handler))
        .route("/api/v1/pigments/recommend", post(recommend_handler))
        .route("/api/v1/consultations", post(consultation_handler))
        .route("/api/v1/phototypes", get(phototypes_handler))
        .route("/api/v1/pigments", get(pigments_handler))
        .with_state(service)
}

pub(crate) async fn classify_handler(
    State(service): State<Arc<ConsultationService>>,
    axum::Json(observations): axum::Json<RawObservations>,
) -> Response {
    match service.classify(&observations) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => AppError::from(error).into_response(),
    }
}

pub(crate) async fn recommend_handler(
    State(service): State<Arc<ConsultationService>>,
    axum::Json(input): axum::Json<MatchRequestInput>,
) -> Response {
    match service.recommend(&input) {
        Ok(recommendation) => (StatusCode::OK, axum::Json(recommendation)).into_response(),
        Err(error) => AppError::from(error).into_response(),
    }
}

pub(crate) async fn consultation_handler(
    State(service): State<Arc<ConsultationService>>,
    axum::Json(request): axum::Json<ConsultationRequest>,
) -> Response {
    match service.consult(&request) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(error) => AppError::from(error).into_response(),
    }
}

async fn phototypes_handler() -> Response {
    (StatusCode::OK, axum::Json(PhototypeCategory::all())).into_response()
}

async fn pigments_handler(State(service): State<Arc<ConsultationService>>) -> Response {
    let catalog = service.catalog();
    let payload = json!({
        "count": catalog.len(),
        "entries": catalog.entries(),
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}
