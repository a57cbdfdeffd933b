use super::common::*;
use crate::workflows::phototype::domain::{
    PhotoQuality, SkinTone, SunReaction, TanningAbility, Undertone, ValidationError,
};
use crate::workflows::phototype::normalizer::{normalize, normalize_key, normalize_text};
use crate::workflows::phototype::{classify_observations, Phototype};

#[test]
fn normalizes_phrases_into_enum_factors() {
    let factors = normalize(&raw_observations()).expect("valid observations");

    assert_eq!(factors.skin_tone, SkinTone::new(42.0).expect("valid"));
    assert_eq!(factors.undertone, Undertone::Neutral);
    assert_eq!(factors.sun_reaction, SunReaction::SometimesBurns);
    assert_eq!(factors.tanning_ability, TanningAbility::Moderate);
    assert_eq!(factors.eye_color, "hazel green");
    assert_eq!(factors.hair_color, "light brown");
    assert_eq!(factors.ethnicity.as_deref(), Some("southern_european"));
    assert_eq!(factors.photo_quality, PhotoQuality::Good);
}

#[test]
fn accepts_hyphenated_and_snake_case_phrases() {
    let mut raw = raw_observations();
    raw.sun_reaction = "always-burns".to_string();
    raw.tanning_ability = " MAXIMUM ".to_string();

    let factors = normalize(&raw).expect("valid observations");

    assert_eq!(factors.sun_reaction, SunReaction::AlwaysBurns);
    assert_eq!(factors.tanning_ability, TanningAbility::Maximum);
}

#[test]
fn rejects_skin_tone_outside_scale() {
    for value in [-0.5, 100.01, f64::NAN, f64::INFINITY] {
        let mut raw = raw_observations();
        raw.skin_tone = value;

        match normalize(&raw) {
            Err(ValidationError::SkinToneOutOfRange { .. }) => {}
            other => panic!("expected out-of-range rejection for {value}, got {other:?}"),
        }
    }

    let mut raw = raw_observations();
    raw.skin_tone = 100.0;
    assert!(normalize(&raw).is_ok());
    raw.skin_tone = 0.0;
    assert!(normalize(&raw).is_ok());
}

#[test]
fn rejects_unknown_enum_literals() {
    let mut raw = raw_observations();
    raw.undertone = "olive".to_string();

    match normalize(&raw) {
        Err(ValidationError::UnrecognizedValue { field, value }) => {
            assert_eq!(field, "undertone");
            assert_eq!(value, "olive");
        }
        other => panic!("expected unrecognized undertone, got {other:?}"),
    }

    let mut raw = raw_observations();
    raw.photo_quality = Some("blurry".to_string());
    assert!(matches!(
        normalize(&raw),
        Err(ValidationError::UnrecognizedValue {
            field: "photo_quality",
            ..
        })
    ));
}

#[test]
fn missing_optional_fields_are_tolerated() {
    let mut raw = raw_observations();
    raw.ethnicity = Some("   ".to_string());
    raw.photo_quality = None;

    let factors = normalize(&raw).expect("optional fields may be absent");

    assert!(factors.ethnicity.is_none());
    assert_eq!(factors.photo_quality, PhotoQuality::Unassessed);
}

#[test]
fn blank_descriptors_are_rejected() {
    let mut raw = raw_observations();
    raw.hair_color = "  ".to_string();

    assert_eq!(
        normalize(&raw),
        Err(ValidationError::MissingField {
            field: "hair_color"
        })
    );
}

#[test]
fn classify_observations_normalizes_before_scoring() {
    let result = classify_observations(&raw_observations()).expect("classifies");

    assert_eq!(result.phototype, Phototype::III);
    assert!(result
        .reasoning
        .iter()
        .any(|line| line.contains("southern_european")));
}

#[test]
fn normalize_key_and_text_strip_noise() {
    assert_eq!(normalize_key("\u{feff}Always  Burns"), "always_burns");
    assert_eq!(normalize_key("never__burns"), "never_burns");
    assert_eq!(normalize_text("  Dark   Brown "), "dark brown");
}
