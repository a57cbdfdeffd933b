use std::sync::Arc;

use tracing::debug;

use super::domain::{ConsultationOutcome, ConsultationRequest};
use crate::workflows::phototype::{
    normalize, ClassificationResult, PhototypeCategory, PhototypeClassifier, RawObservations,
    ValidationError,
};
use crate::workflows::pigments::{
    recommend, MatchRequest, MatchRequestInput, PigmentCatalog, PigmentCategory, Recommendation,
};

/// Service composing the factor normalizer, the classifier and a shared pigment catalog.
pub struct ConsultationService {
    catalog: Arc<PigmentCatalog>,
    classifier: PhototypeClassifier,
}

impl ConsultationService {
    pub fn new(catalog: Arc<PigmentCatalog>, classifier: PhototypeClassifier) -> Self {
        Self {
            catalog,
            classifier,
        }
    }

    pub fn with_catalog(catalog: Arc<PigmentCatalog>) -> Self {
        Self::new(catalog, PhototypeClassifier::default())
    }

    pub fn catalog(&self) -> &PigmentCatalog {
        &self.catalog
    }

    /// Normalize raw intake and classify it.
    pub fn classify(&self, raw: &RawObservations) -> Result<ClassificationResult, ValidationError> {
        let factors = normalize(raw)?;
        let result = self.classifier.classify(&factors);
        debug!(
            phototype = %result.phototype,
            confidence = result.confidence,
            "observations classified"
        );
        Ok(result)
    }

    /// Validate a wire request and recommend from the shared catalog.
    pub fn recommend(
        &self,
        input: &MatchRequestInput,
    ) -> Result<Recommendation<'_>, ValidationError> {
        let request = MatchRequest::try_from(input)?;
        Ok(self.recommend_for(&request))
    }

    pub fn recommend_for(&self, request: &MatchRequest) -> Recommendation<'_> {
        let recommendation = recommend(self.catalog.entries(), request);
        debug!(
            bucket = %request.skin_tone_bucket,
            undertone = request.undertone.key(),
            candidates = recommendation.ranked.len(),
            "pigments ranked"
        );
        recommendation
    }

    /// Classify, then recommend for the classified phototype's tone bucket and observed undertone.
    pub fn consult(
        &self,
        request: &ConsultationRequest,
    ) -> Result<ConsultationOutcome<'_>, ValidationError> {
        let factors = normalize(&request.observations)?;
        let category = parse_category(request.category.as_deref())?;

        let classification = self.classifier.classify(&factors);
        let reference = PhototypeCategory::lookup(classification.phototype);
        let match_request = MatchRequest::new(
            reference.tone_bucket,
            factors.undertone,
            request.desired_outcome.as_str(),
            category,
        )?;
        let recommendation = self.recommend_for(&match_request);

        debug!(
            phototype = %classification.phototype,
            summary = %recommendation.summary(),
            "consultation composed"
        );

        Ok(ConsultationOutcome {
            classification,
            reference,
            match_request,
            recommendation,
        })
    }
}

fn parse_category(raw: Option<&str>) -> Result<Option<PigmentCategory>, ValidationError> {
    match raw {
        Some(value) if !value.trim().is_empty() => PigmentCategory::parse(value)
            .map(Some)
            .ok_or_else(|| ValidationError::UnrecognizedValue {
                field: "category",
                value: value.to_string(),
            }),
        _ => Ok(None),
    }
}
