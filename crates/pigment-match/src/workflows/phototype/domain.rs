use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Six ordinal skin-reactivity categories. Serialized as the ordinal id `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Phototype {
    I,
    II,
    III,
    IV,
    V,
    VI,
}

impl Phototype {
    /// Ascending by id. Classification tie-breaks follow this order.
    pub const fn ordered() -> [Self; 6] {
        [Self::I, Self::II, Self::III, Self::IV, Self::V, Self::VI]
    }

    pub const fn id(self) -> u8 {
        match self {
            Self::I => 1,
            Self::II => 2,
            Self::III => 3,
            Self::IV => 4,
            Self::V => 5,
            Self::VI => 6,
        }
    }

    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Self::I),
            2 => Some(Self::II),
            3 => Some(Self::III),
            4 => Some(Self::IV),
            5 => Some(Self::V),
            6 => Some(Self::VI),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::I => "Type I",
            Self::II => "Type II",
            Self::III => "Type III",
            Self::IV => "Type IV",
            Self::V => "Type V",
            Self::VI => "Type VI",
        }
    }
}

impl fmt::Display for Phototype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<Phototype> for u8 {
    fn from(value: Phototype) -> Self {
        value.id()
    }
}

impl TryFrom<u8> for Phototype {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Phototype::from_id(value).ok_or_else(|| ValidationError::UnrecognizedValue {
            field: "phototype",
            value: value.to_string(),
        })
    }
}

/// Observed skin depth on a 0 (lightest) to 100 (deepest) scale.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(into = "f64", try_from = "f64")]
pub struct SkinTone(f64);

impl SkinTone {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 100.0;

    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if value.is_finite() && (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::SkinToneOutOfRange { value })
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<SkinTone> for f64 {
    fn from(value: SkinTone) -> Self {
        value.0
    }
}

impl TryFrom<f64> for SkinTone {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        SkinTone::new(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Undertone {
    Cool,
    Neutral,
    Warm,
}

impl Undertone {
    pub const fn ordered() -> [Self; 3] {
        [Self::Cool, Self::Neutral, Self::Warm]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Cool => "cool",
            Self::Neutral => "neutral",
            Self::Warm => "warm",
        }
    }

    /// Title-cased form used by catalog match tags.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cool => "Cool",
            Self::Neutral => "Neutral",
            Self::Warm => "Warm",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SunReaction {
    AlwaysBurns,
    UsuallyBurns,
    SometimesBurns,
    RarelyBurns,
    NeverBurns,
}

impl SunReaction {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::AlwaysBurns,
            Self::UsuallyBurns,
            Self::SometimesBurns,
            Self::RarelyBurns,
            Self::NeverBurns,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::AlwaysBurns => "always_burns",
            Self::UsuallyBurns => "usually_burns",
            Self::SometimesBurns => "sometimes_burns",
            Self::RarelyBurns => "rarely_burns",
            Self::NeverBurns => "never_burns",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::AlwaysBurns => "always burns",
            Self::UsuallyBurns => "usually burns",
            Self::SometimesBurns => "sometimes burns",
            Self::RarelyBurns => "rarely burns",
            Self::NeverBurns => "never burns",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TanningAbility {
    Never,
    Minimal,
    Moderate,
    Good,
    Excellent,
    Maximum,
}

impl TanningAbility {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Never,
            Self::Minimal,
            Self::Moderate,
            Self::Good,
            Self::Excellent,
            Self::Maximum,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Never => "never",
            Self::Minimal => "minimal",
            Self::Moderate => "moderate",
            Self::Good => "good",
            Self::Excellent => "excellent",
            Self::Maximum => "maximum",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Freckling {
    Heavy,
    Moderate,
    Light,
    Rare,
    None,
}

impl Freckling {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Heavy,
            Self::Moderate,
            Self::Light,
            Self::Rare,
            Self::None,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Heavy => "heavy",
            Self::Moderate => "moderate",
            Self::Light => "light",
            Self::Rare => "rare",
            Self::None => "none",
        }
    }
}

/// Rating handed over by the external vision component. `Unassessed` covers
/// photos that arrived without a usable rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhotoQuality {
    Excellent,
    Good,
    Fair,
    Poor,
    Unassessed,
}

impl PhotoQuality {
    pub const fn ordered() -> [Self; 4] {
        [Self::Excellent, Self::Good, Self::Fair, Self::Poor]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
            Self::Unassessed => "unassessed",
        }
    }
}

/// Normalized factor set consumed by the classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservedFactors {
    pub skin_tone: SkinTone,
    pub undertone: Undertone,
    pub sun_reaction: SunReaction,
    pub tanning_ability: TanningAbility,
    pub freckling: Freckling,
    pub eye_color: String,
    pub hair_color: String,
    #[serde(default)]
    pub ethnicity: Option<String>,
    pub photo_quality: PhotoQuality,
}

/// Raw intake as submitted by a practitioner or the photo pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawObservations {
    pub skin_tone: f64,
    pub undertone: String,
    pub sun_reaction: String,
    pub tanning_ability: String,
    pub freckling: String,
    pub eye_color: String,
    pub hair_color: String,
    #[serde(default)]
    pub ethnicity: Option<String>,
    #[serde(default)]
    pub photo_quality: Option<String>,
}

/// Factors that can contribute points during classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationFactor {
    SkinTone,
    SunReaction,
    TanningAbility,
    Ethnicity,
    PhotoQuality,
}

/// Points a single factor assigned, kept for audits next to the reasoning trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorContribution {
    pub factor: ClassificationFactor,
    pub awarded: Vec<(Phototype, f64)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<f64>,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    #[serde(rename = "type")]
    pub phototype: Phototype,
    pub confidence: f64,
    pub reasoning: Vec<String>,
    pub scores_by_type: BTreeMap<Phototype, f64>,
    pub factors: Vec<FactorContribution>,
}

impl ClassificationResult {
    pub fn score_for(&self, phototype: Phototype) -> f64 {
        self.scores_by_type.get(&phototype).copied().unwrap_or(0.0)
    }
}

/// Rejection raised for malformed observations or match requests.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("skin tone {value} is outside the 0-100 scale")]
    SkinToneOutOfRange { value: f64 },
    #[error("unrecognized {field} value '{value}'")]
    UnrecognizedValue { field: &'static str, value: String },
    #[error("{field} is required")]
    MissingField { field: &'static str },
}
