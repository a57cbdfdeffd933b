use super::common::*;
use crate::workflows::phototype::Undertone;
use crate::workflows::pigments::domain::{MatchRequest, PigmentCategory};
use crate::workflows::pigments::matcher::{compatible_entries, is_compatible};
use crate::workflows::pigments::recommend;

#[test]
fn tag_containing_the_query_passes_the_filter() {
    let entry = medium_brown_entry();

    assert!(is_compatible(&entry, &brow_request("Soft Natural Brown")));
    assert!(is_compatible(&entry, &brow_request("soft natural brown brow")));
}

#[test]
fn query_containing_the_tag_passes_the_filter() {
    let entry = medium_brown_entry();

    assert!(is_compatible(
        &entry,
        &brow_request("A natural brown brow with soft feathering")
    ));
    assert!(!is_compatible(&entry, &brow_request("Bold Black Brow")));
}

#[test]
fn all_sentinel_admits_any_tone_bucket() {
    let entry = entry(
        "Universal",
        PigmentCategory::Brows,
        &["All"],
        &["Neutral"],
        &["Soft Natural Brown Brow"],
    );
    let request = MatchRequest::new(
        "Deep",
        Undertone::Neutral,
        "Soft Natural Brown",
        Some(PigmentCategory::Brows),
    )
    .expect("valid request");

    assert!(is_compatible(&entry, &request));
}

#[test]
fn category_filter_applies_only_when_present() {
    let entry = medium_brown_entry();
    let mut request = brow_request("Soft Natural Brown");

    request.category = Some(PigmentCategory::Lips);
    assert!(!is_compatible(&entry, &request));

    request.category = None;
    assert!(is_compatible(&entry, &request));
}

#[test]
fn undertone_mismatch_filters_everything_out() {
    let catalog = vec![
        medium_brown_entry(),
        entry(
            "Ash Brown",
            PigmentCategory::Brows,
            &["Medium"],
            &["Cool"],
            &["Soft Natural Brown Brow"],
        ),
    ];
    let request = MatchRequest::new(
        "Medium",
        Undertone::Warm,
        "Soft Natural Brown",
        Some(PigmentCategory::Brows),
    )
    .expect("valid request");

    assert!(compatible_entries(&catalog, &request).is_empty());
}

#[test]
fn repeated_identities_are_kept_once() {
    let mut duplicate = medium_brown_entry();
    duplicate.name = "  medium brown ".to_string();
    duplicate.brand = "TEST PIGMENTS".to_string();
    let catalog = vec![medium_brown_entry(), duplicate];

    let compatible = compatible_entries(&catalog, &brow_request("Soft Natural Brown"));

    assert_eq!(compatible.len(), 1);
    assert_eq!(compatible[0].catalog_position, 0);
}

#[test]
fn same_formulation_in_two_categories_is_kept_twice() {
    let brows = entry("Cocoa", PigmentCategory::Brows, &["Medium"], &["Neutral"], &["Soft Natural Brown Brow"]);
    let lips = entry("Cocoa", PigmentCategory::Lips, &["Medium"], &["Neutral"], &["Soft Natural Brown Lip"]);
    let catalog = vec![brows, lips];
    let mut request = brow_request("Soft Natural Brown");
    request.category = None;

    let compatible = compatible_entries(&catalog, &request);

    let categories: Vec<PigmentCategory> = compatible
        .iter()
        .map(|candidate| candidate.entry.category)
        .collect();
    assert_eq!(categories, vec![PigmentCategory::Brows, PigmentCategory::Lips]);

    let recommendation = recommend(&catalog, &request);
    assert_eq!(recommendation.ranked.len(), 2);
}

#[test]
fn tags_fold_case_beyond_ascii() {
    let entry = entry(
        "Crème Brûlée",
        PigmentCategory::Brows,
        &["Médium"],
        &["Neutral"],
        &["Brun Naturel Doux"],
    );
    let request = MatchRequest::new(
        "MÉDIUM",
        Undertone::Neutral,
        "BRUN NATUREL",
        Some(PigmentCategory::Brows),
    )
    .expect("valid request");

    assert!(is_compatible(&entry, &request));
}
