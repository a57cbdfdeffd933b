use serde::{Deserialize, Serialize};

use super::super::domain::Phototype;

/// Points awarded to the primary and secondary phototype of a factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorWeight {
    pub primary: f64,
    pub secondary: f64,
}

/// Multipliers applied to every score once all additive factors have run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhotoQualityMultipliers {
    pub excellent: f64,
    pub good: f64,
    pub fair: f64,
    pub poor: f64,
    pub unassessed: f64,
}

/// Hand-tuned weights for the phototype rubric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    pub skin_tone: FactorWeight,
    pub sun_reaction: FactorWeight,
    pub tanning_ability: FactorWeight,
    pub ethnicity: f64,
    pub ethnicity_fallback: Phototype,
    pub photo_quality: PhotoQualityMultipliers,
    pub min_confidence: f64,
    pub max_confidence: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            skin_tone: FactorWeight {
                primary: 40.0,
                secondary: 20.0,
            },
            sun_reaction: FactorWeight {
                primary: 25.0,
                secondary: 15.0,
            },
            tanning_ability: FactorWeight {
                primary: 20.0,
                secondary: 10.0,
            },
            ethnicity: 15.0,
            ethnicity_fallback: Phototype::III,
            photo_quality: PhotoQualityMultipliers {
                excellent: 1.0,
                good: 0.95,
                fair: 0.85,
                poor: 0.70,
                unassessed: 0.80,
            },
            min_confidence: 0.70,
            max_confidence: 0.95,
        }
    }
}
