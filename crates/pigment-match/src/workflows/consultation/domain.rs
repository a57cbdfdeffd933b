use serde::{Deserialize, Serialize};

use crate::workflows::phototype::{ClassificationResult, PhototypeCategory, RawObservations};
use crate::workflows::pigments::{MatchRequest, Recommendation};

/// Intake plus the practitioner's goal for the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsultationRequest {
    pub observations: RawObservations,
    pub desired_outcome: String,
    #[serde(default)]
    pub category: Option<String>,
}

/// Classification, the match request derived from it, and the resulting recommendation.
#[derive(Debug, Clone, Serialize)]
pub struct ConsultationOutcome<'a> {
    pub classification: ClassificationResult,
    pub reference: &'static PhototypeCategory,
    pub match_request: MatchRequest,
    pub recommendation: Recommendation<'a>,
}
