mod config;
mod rules;

pub use config::{ClassifierConfig, FactorWeight, PhotoQualityMultipliers};

use super::domain::{ClassificationResult, ObservedFactors, Phototype};

/// Stateless rubric that turns a factor set into a phototype call.
#[derive(Debug, Clone, Default)]
pub struct PhototypeClassifier {
    config: ClassifierConfig,
}

impl PhototypeClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn classify(&self, factors: &ObservedFactors) -> ClassificationResult {
        let (factors, scores_by_type) = rules::score_factors(factors, &self.config);

        // Strict comparison keeps the lowest id among tied scores.
        let mut phototype = Phototype::I;
        let mut best = f64::NEG_INFINITY;
        for candidate in Phototype::ordered() {
            let score = scores_by_type.get(&candidate).copied().unwrap_or(0.0);
            if score > best {
                best = score;
                phototype = candidate;
            }
        }

        let confidence = (best / 100.0)
            .min(self.config.max_confidence)
            .max(self.config.min_confidence);
        let reasoning = factors.iter().map(|factor| factor.notes.clone()).collect();

        ClassificationResult {
            phototype,
            confidence,
            reasoning,
            scores_by_type,
            factors,
        }
    }
}

#[cfg(test)]
pub(crate) use rules::{skin_tone_types, sun_reaction_types, tanning_types};
