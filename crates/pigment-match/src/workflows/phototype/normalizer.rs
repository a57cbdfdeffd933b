use super::domain::{
    Freckling, ObservedFactors, PhotoQuality, RawObservations, SkinTone, SunReaction,
    TanningAbility, Undertone, ValidationError,
};

/// Lower-cases and maps whitespace, hyphens and underscores onto single `_` separators.
pub(crate) fn normalize_key(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
}

/// Collapses internal whitespace and lower-cases free-text descriptors.
pub(crate) fn normalize_text(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_lowercase()
}

/// Converts raw intake into a validated factor set.
pub fn normalize(raw: &RawObservations) -> Result<ObservedFactors, ValidationError> {
    let skin_tone = SkinTone::new(raw.skin_tone)?;
    let undertone = parse_undertone(&raw.undertone)?;
    let sun_reaction = parse_sun_reaction(&raw.sun_reaction)?;
    let tanning_ability = parse_tanning_ability(&raw.tanning_ability)?;
    let freckling = parse_freckling(&raw.freckling)?;
    let eye_color = required_text("eye_color", &raw.eye_color)?;
    let hair_color = required_text("hair_color", &raw.hair_color)?;

    let ethnicity = raw
        .ethnicity
        .as_deref()
        .map(normalize_key)
        .filter(|key| !key.is_empty());

    let photo_quality = match raw.photo_quality.as_deref() {
        Some(value) if !value.trim().is_empty() => parse_photo_quality(value)?,
        _ => PhotoQuality::Unassessed,
    };

    Ok(ObservedFactors {
        skin_tone,
        undertone,
        sun_reaction,
        tanning_ability,
        freckling,
        eye_color,
        hair_color,
        ethnicity,
        photo_quality,
    })
}

pub fn parse_undertone(value: &str) -> Result<Undertone, ValidationError> {
    let key = normalize_key(value);
    Undertone::ordered()
        .into_iter()
        .find(|candidate| candidate.key() == key)
        .ok_or_else(|| unrecognized("undertone", value))
}

pub fn parse_sun_reaction(value: &str) -> Result<SunReaction, ValidationError> {
    let key = normalize_key(value);
    SunReaction::ordered()
        .into_iter()
        .find(|candidate| candidate.key() == key)
        .ok_or_else(|| unrecognized("sun_reaction", value))
}

pub fn parse_tanning_ability(value: &str) -> Result<TanningAbility, ValidationError> {
    let key = normalize_key(value);
    TanningAbility::ordered()
        .into_iter()
        .find(|candidate| candidate.key() == key)
        .ok_or_else(|| unrecognized("tanning_ability", value))
}

pub fn parse_freckling(value: &str) -> Result<Freckling, ValidationError> {
    let key = normalize_key(value);
    Freckling::ordered()
        .into_iter()
        .find(|candidate| candidate.key() == key)
        .ok_or_else(|| unrecognized("freckling", value))
}

pub fn parse_photo_quality(value: &str) -> Result<PhotoQuality, ValidationError> {
    let key = normalize_key(value);
    PhotoQuality::ordered()
        .into_iter()
        .find(|candidate| candidate.key() == key)
        .ok_or_else(|| unrecognized("photo_quality", value))
}

fn required_text(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let normalized = normalize_text(value);
    if normalized.is_empty() {
        Err(ValidationError::MissingField { field })
    } else {
        Ok(normalized)
    }
}

fn unrecognized(field: &'static str, value: &str) -> ValidationError {
    ValidationError::UnrecognizedValue {
        field,
        value: value.to_string(),
    }
}
