//! Phototype intake: factor normalization, reference categories and the weighted classifier.

mod categories;
pub mod classifier;
pub mod domain;
mod mapping;
pub mod normalizer;

#[cfg(test)]
mod tests;

pub use categories::{BurnTime, ColorSwatch, PhototypeCategory};
pub use classifier::{ClassifierConfig, PhototypeClassifier};
pub use domain::{
    ClassificationFactor, ClassificationResult, FactorContribution, Freckling, ObservedFactors,
    PhotoQuality, Phototype, RawObservations, SkinTone, SunReaction, TanningAbility, Undertone,
    ValidationError,
};
pub use normalizer::normalize;

/// Classifies a validated factor set with the default rubric.
pub fn classify(factors: &ObservedFactors) -> ClassificationResult {
    PhototypeClassifier::default().classify(factors)
}

/// Normalizes raw intake, then classifies it with the default rubric.
pub fn classify_observations(raw: &RawObservations) -> Result<ClassificationResult, ValidationError> {
    let factors = normalize(raw)?;
    Ok(classify(&factors))
}
