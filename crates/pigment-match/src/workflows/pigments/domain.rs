use std::fmt;

use serde::{Deserialize, Serialize};

use crate::workflows::phototype::normalizer::{normalize_key, parse_undertone};
use crate::workflows::phototype::{Undertone, ValidationError};

/// Treatment area a formulation is sold for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PigmentCategory {
    Brows,
    Lips,
    Eyeliner,
    Correction,
    Areola,
    Scalp,
}

impl PigmentCategory {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Brows,
            Self::Lips,
            Self::Eyeliner,
            Self::Correction,
            Self::Areola,
            Self::Scalp,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Brows => "brows",
            Self::Lips => "lips",
            Self::Eyeliner => "eyeliner",
            Self::Correction => "correction",
            Self::Areola => "areola",
            Self::Scalp => "scalp",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Brows => "Brows",
            Self::Lips => "Lips",
            Self::Eyeliner => "Eyeliner",
            Self::Correction => "Correction",
            Self::Areola => "Areola",
            Self::Scalp => "Scalp",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let key = normalize_key(value);
        Self::ordered()
            .into_iter()
            .find(|category| category.key() == key)
    }
}

impl fmt::Display for PigmentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Categorical tags the matcher filters and ranks on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchTags {
    pub skin_tone_matches: Vec<String>,
    pub undertone_matches: Vec<String>,
    pub desired_healed_results: Vec<String>,
}

/// Trimmed, Unicode lower-cased form used for every tag and identity comparison.
pub(crate) fn fold_case(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Sentinel in `skin_tone_matches` that admits every tone bucket during filtering.
pub const ALL_SKIN_TONES: &str = "All";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixingGuidance {
    pub suggested_modifiers: Vec<String>,
    pub mixing_notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyProfile {
    pub shelf_life: String,
    pub storage_conditions: String,
    pub patch_test_notes: String,
}

/// Catalog record for one pigment formulation. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorantEntry {
    pub name: String,
    pub brand: String,
    pub category: PigmentCategory,
    pub base_tone: String,
    pub undertone_description: String,
    pub opacity_level: String,
    pub temperature_shift_note: String,
    pub match_tags: MatchTags,
    pub mixing: MixingGuidance,
    #[serde(default)]
    pub incompatible_with: Vec<String>,
    pub safety: SafetyProfile,
}

impl ColorantEntry {
    /// Identity used for de-duplication: brand, name and category. Brand and name
    /// compare case-insensitively, so one formulation may be sold for several areas.
    pub fn identity(&self) -> (String, String, PigmentCategory) {
        (
            fold_case(&self.brand),
            fold_case(&self.name),
            self.category,
        )
    }

    pub fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.brand)
    }
}

/// Wire form of a match request before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRequestInput {
    pub skin_tone_bucket: String,
    pub undertone: String,
    pub desired_outcome: String,
    #[serde(default)]
    pub category: Option<String>,
}

/// Validated match request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRequest {
    pub skin_tone_bucket: String,
    pub undertone: Undertone,
    pub desired_outcome: String,
    pub category: Option<PigmentCategory>,
}

impl MatchRequest {
    pub fn new(
        skin_tone_bucket: impl Into<String>,
        undertone: Undertone,
        desired_outcome: impl Into<String>,
        category: Option<PigmentCategory>,
    ) -> Result<Self, ValidationError> {
        let skin_tone_bucket: String = skin_tone_bucket.into();
        let skin_tone_bucket = skin_tone_bucket.trim().to_string();
        if skin_tone_bucket.is_empty() {
            return Err(ValidationError::MissingField {
                field: "skin_tone_bucket",
            });
        }

        let desired_outcome: String = desired_outcome.into();
        let desired_outcome = desired_outcome.trim().to_string();
        if desired_outcome.is_empty() {
            return Err(ValidationError::MissingField {
                field: "desired_outcome",
            });
        }

        Ok(Self {
            skin_tone_bucket,
            undertone,
            desired_outcome,
            category,
        })
    }
}

impl TryFrom<&MatchRequestInput> for MatchRequest {
    type Error = ValidationError;

    fn try_from(input: &MatchRequestInput) -> Result<Self, Self::Error> {
        let undertone = parse_undertone(&input.undertone)?;
        let category = match input.category.as_deref() {
            Some(raw) if !raw.trim().is_empty() => Some(PigmentCategory::parse(raw).ok_or_else(
                || ValidationError::UnrecognizedValue {
                    field: "category",
                    value: raw.to_string(),
                },
            )?),
            _ => None,
        };

        MatchRequest::new(
            input.skin_tone_bucket.as_str(),
            undertone,
            input.desired_outcome.as_str(),
            category,
        )
    }
}

/// A ranked catalog entry. Borrows the entry from the catalog it was ranked from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchCandidate<'a> {
    pub entry: &'a ColorantEntry,
    pub score: u8,
    pub catalog_position: usize,
}

/// Colour temperature a formulation leans towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureLean {
    Warm,
    Neutral,
    Cool,
}

impl TemperatureLean {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Warm => "warm",
            Self::Neutral => "neutral",
            Self::Cool => "cool",
        }
    }
}

/// One populated slot of a recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendedPigment<'a> {
    pub candidate: MatchCandidate<'a>,
    pub lean: TemperatureLean,
    pub rationale: String,
    pub heal_shift: String,
    pub suggested_modifiers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation<'a> {
    pub ranked: Vec<MatchCandidate<'a>>,
    pub best: Option<RecommendedPigment<'a>>,
    pub warm_alternative: Option<RecommendedPigment<'a>>,
    pub cool_alternative: Option<RecommendedPigment<'a>>,
}

impl Recommendation<'_> {
    pub fn is_empty(&self) -> bool {
        self.best.is_none()
    }

    pub fn summary(&self) -> String {
        match &self.best {
            Some(best) => format!(
                "best match {} scored {}/100",
                best.candidate.entry.display_name(),
                best.candidate.score
            ),
            None => "no compatible colorant found".to_string(),
        }
    }
}
