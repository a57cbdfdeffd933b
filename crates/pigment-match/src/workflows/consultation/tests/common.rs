use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::workflows::consultation::{ConsultationRequest, ConsultationService};
use crate::workflows::phototype::RawObservations;
use crate::workflows::pigments::{MatchRequestInput, PigmentCatalog};

pub(super) fn standard_service() -> Arc<ConsultationService> {
    Arc::new(ConsultationService::with_catalog(Arc::new(
        PigmentCatalog::standard(),
    )))
}

pub(super) fn empty_service() -> Arc<ConsultationService> {
    let catalog = PigmentCatalog::new(Vec::new()).expect("empty catalog");
    Arc::new(ConsultationService::with_catalog(Arc::new(catalog)))
}

/// Intake that classifies as Type IV with a neutral undertone.
pub(super) fn medium_neutral_observations() -> RawObservations {
    RawObservations {
        skin_tone: 60.0,
        undertone: "Neutral".to_string(),
        sun_reaction: "Rarely Burns".to_string(),
        tanning_ability: "good".to_string(),
        freckling: "rare".to_string(),
        eye_color: "Brown".to_string(),
        hair_color: "Dark Brown".to_string(),
        ethnicity: Some("Hispanic".to_string()),
        photo_quality: Some("excellent".to_string()),
    }
}

pub(super) fn brow_consultation() -> ConsultationRequest {
    ConsultationRequest {
        observations: medium_neutral_observations(),
        desired_outcome: "Soft Natural Brown".to_string(),
        category: Some("brows".to_string()),
    }
}

pub(super) fn brow_match_input() -> MatchRequestInput {
    MatchRequestInput {
        skin_tone_bucket: "Medium".to_string(),
        undertone: "neutral".to_string(),
        desired_outcome: "Soft Natural Brown".to_string(),
        category: Some("Brows".to_string()),
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
