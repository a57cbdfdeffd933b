use super::common::*;
use crate::workflows::phototype::{Undertone, ValidationError};
use crate::workflows::pigments::composer::{compose, temperature_lean};
use crate::workflows::pigments::domain::{
    ColorantEntry, MatchRequest, MatchRequestInput, PigmentCategory, TemperatureLean,
};
use crate::workflows::pigments::matcher::compatible_entries;
use crate::workflows::pigments::ranking::rank;
use crate::workflows::pigments::recommend;

fn brow_catalog() -> Vec<ColorantEntry> {
    vec![
        medium_brown_entry(),
        with_tone(
            entry("Ash Brown", PigmentCategory::Brows, &["Medium"], &["Neutral"], &["Soft Natural Brown Brow"]),
            "Ash brown",
            "Cool grey base",
        ),
        with_tone(
            entry("Warm Walnut", PigmentCategory::Brows, &["Medium"], &["Neutral"], &["Soft Natural Brown"]),
            "Warm brown",
            "Golden base",
        ),
        with_tone(
            entry("Copper Brown", PigmentCategory::Brows, &["Medium"], &["Neutral"], &["Natural Brown"]),
            "Reddish brown",
            "Copper base",
        ),
    ]
}

#[test]
fn lean_follows_keyword_vote() {
    let base = medium_brown_entry();

    assert_eq!(temperature_lean(&base), TemperatureLean::Neutral);
    assert_eq!(
        temperature_lean(&with_tone(base.clone(), "Warm reddish brown", "Copper")),
        TemperatureLean::Warm
    );
    assert_eq!(
        temperature_lean(&with_tone(base.clone(), "Ash brown", "Cool taupe")),
        TemperatureLean::Cool
    );
    assert_eq!(
        temperature_lean(&with_tone(base, "Warm brown", "Cool base")),
        TemperatureLean::Neutral
    );
}

#[test]
fn empty_catalog_yields_empty_recommendation() {
    let request = brow_request("Soft Natural Brown");

    let recommendation = recommend(&[], &request);

    assert!(recommendation.ranked.is_empty());
    assert!(recommendation.best.is_none());
    assert!(recommendation.warm_alternative.is_none());
    assert!(recommendation.cool_alternative.is_none());
    assert!(recommendation.is_empty());
    assert_eq!(recommendation.summary(), "no compatible colorant found");
}

#[test]
fn best_match_carries_rationale_and_heal_shift() {
    let catalog = brow_catalog();
    let recommendation = recommend(&catalog, &brow_request("Soft Natural Brown Brow"));

    let best = recommendation.best.as_ref().expect("best match present");
    assert_eq!(best.candidate.entry.name, "Medium Brown");
    assert_eq!(best.candidate.score, 100);
    assert_eq!(best.lean, TemperatureLean::Neutral);
    assert!(best.rationale.starts_with("Best match: Medium Brown (Test Pigments) scored 100/100"));
    assert!(best.rationale.ends_with("Use straight from the bottle."));
    assert_eq!(best.heal_shift, "Expected heal shift: Stable when healed.");
    assert_eq!(best.suggested_modifiers, vec!["Warm Modifier".to_string()]);
    assert_eq!(
        recommendation.summary(),
        "best match Medium Brown (Test Pigments) scored 100/100"
    );
}

#[test]
fn alternatives_are_highest_ranked_of_each_lean() {
    let catalog = brow_catalog();
    let recommendation = recommend(&catalog, &brow_request("Soft Natural Brown Brow"));

    let names: Vec<&str> = recommendation
        .ranked
        .iter()
        .map(|candidate| candidate.entry.name.as_str())
        .collect();
    assert_eq!(names, vec!["Medium Brown", "Ash Brown", "Warm Walnut", "Copper Brown"]);

    let warm = recommendation.warm_alternative.as_ref().expect("warm alternative");
    assert_eq!(warm.candidate.entry.name, "Warm Walnut");
    assert!(warm.rationale.starts_with("Warm-leaning alternative:"));

    let cool = recommendation.cool_alternative.as_ref().expect("cool alternative");
    assert_eq!(cool.candidate.entry.name, "Ash Brown");
    assert_eq!(cool.candidate.score, 100);
}

#[test]
fn best_match_is_never_repeated_as_an_alternative() {
    let catalog = vec![with_tone(
        entry("Ash Brown", PigmentCategory::Brows, &["Medium"], &["Neutral"], &["Soft Natural Brown Brow"]),
        "Ash brown",
        "Cool grey base",
    )];

    let recommendation = recommend(&catalog, &brow_request("Soft Natural Brown Brow"));

    assert!(recommendation.best.is_some());
    assert!(recommendation.cool_alternative.is_none());
    assert!(recommendation.warm_alternative.is_none());
}

#[test]
fn missing_heal_note_falls_back_to_default_sentence() {
    let mut bare = medium_brown_entry();
    bare.temperature_shift_note = "   ".to_string();
    bare.mixing.mixing_notes = String::new();
    let catalog = vec![bare];

    let recommendation = recommend(&catalog, &brow_request("Soft Natural Brown"));
    let best = recommendation.best.expect("best match present");

    assert!(best.heal_shift.starts_with("No heal shift documented for Medium Brown"));
    assert!(best.rationale.ends_with("leans neutral."));
}

#[test]
fn compose_keeps_the_ranked_list() {
    let catalog = brow_catalog();
    let request = brow_request("Soft Natural Brown");
    let ranked = rank(&compatible_entries(&catalog, &request), &request);
    let expected = ranked.clone();

    let recommendation = compose(ranked);

    assert_eq!(recommendation.ranked, expected);
}

#[test]
fn match_request_rejects_blank_fields() {
    assert_eq!(
        MatchRequest::new("  ", Undertone::Cool, "Soft Brow", None),
        Err(ValidationError::MissingField {
            field: "skin_tone_bucket"
        })
    );
    assert_eq!(
        MatchRequest::new("Medium", Undertone::Cool, "", None),
        Err(ValidationError::MissingField {
            field: "desired_outcome"
        })
    );
}

#[test]
fn match_request_input_parses_undertone_and_category() {
    let input = MatchRequestInput {
        skin_tone_bucket: "Medium".to_string(),
        undertone: "neutral".to_string(),
        desired_outcome: "Soft Natural Brown".to_string(),
        category: Some("Brows".to_string()),
    };

    let request = MatchRequest::try_from(&input).expect("valid input");
    assert_eq!(request.undertone, Undertone::Neutral);
    assert_eq!(request.category, Some(PigmentCategory::Brows));

    let unknown = MatchRequestInput {
        category: Some("tattoo sleeve".to_string()),
        ..input
    };
    assert!(matches!(
        MatchRequest::try_from(&unknown),
        Err(ValidationError::UnrecognizedValue {
            field: "category",
            ..
        })
    ));
}
