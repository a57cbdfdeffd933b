use crate::workflows::phototype::domain::{
    Freckling, ObservedFactors, PhotoQuality, RawObservations, SkinTone, SunReaction,
    TanningAbility, Undertone,
};

pub(super) fn fair_burner_factors() -> ObservedFactors {
    ObservedFactors {
        skin_tone: SkinTone::new(15.0).expect("valid tone"),
        undertone: Undertone::Cool,
        sun_reaction: SunReaction::AlwaysBurns,
        tanning_ability: TanningAbility::Never,
        freckling: Freckling::Heavy,
        eye_color: "blue".to_string(),
        hair_color: "red".to_string(),
        ethnicity: None,
        photo_quality: PhotoQuality::Excellent,
    }
}

pub(super) fn deep_tanner_factors() -> ObservedFactors {
    ObservedFactors {
        skin_tone: SkinTone::new(90.0).expect("valid tone"),
        undertone: Undertone::Warm,
        sun_reaction: SunReaction::NeverBurns,
        tanning_ability: TanningAbility::Maximum,
        freckling: Freckling::None,
        eye_color: "dark brown".to_string(),
        hair_color: "black".to_string(),
        ethnicity: Some("african".to_string()),
        photo_quality: PhotoQuality::Good,
    }
}

/// Mid-range factors whose only strong signal comes from the skin tone.
pub(super) fn mid_range_factors(tone: f64) -> ObservedFactors {
    ObservedFactors {
        skin_tone: SkinTone::new(tone).expect("valid tone"),
        undertone: Undertone::Neutral,
        sun_reaction: SunReaction::SometimesBurns,
        tanning_ability: TanningAbility::Moderate,
        freckling: Freckling::Light,
        eye_color: "hazel".to_string(),
        hair_color: "light brown".to_string(),
        ethnicity: None,
        photo_quality: PhotoQuality::Excellent,
    }
}

pub(super) fn raw_observations() -> RawObservations {
    RawObservations {
        skin_tone: 42.0,
        undertone: "Neutral".to_string(),
        sun_reaction: "Sometimes Burns".to_string(),
        tanning_ability: "moderate".to_string(),
        freckling: "light".to_string(),
        eye_color: "  Hazel   Green ".to_string(),
        hair_color: "Light Brown".to_string(),
        ethnicity: Some("Southern European".to_string()),
        photo_quality: Some("good".to_string()),
    }
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
