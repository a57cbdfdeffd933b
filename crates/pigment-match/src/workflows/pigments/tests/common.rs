use crate::workflows::phototype::Undertone;
use crate::workflows::pigments::domain::{
    ColorantEntry, MatchRequest, MatchTags, MixingGuidance, PigmentCategory, SafetyProfile,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

pub(super) fn entry(
    name: &str,
    category: PigmentCategory,
    skin_tones: &[&str],
    undertones: &[&str],
    healed_results: &[&str],
) -> ColorantEntry {
    ColorantEntry {
        name: name.to_string(),
        brand: "Test Pigments".to_string(),
        category,
        base_tone: "Brown".to_string(),
        undertone_description: "Balanced".to_string(),
        opacity_level: "Medium".to_string(),
        temperature_shift_note: String::new(),
        match_tags: MatchTags {
            skin_tone_matches: strings(skin_tones),
            undertone_matches: strings(undertones),
            desired_healed_results: strings(healed_results),
        },
        mixing: MixingGuidance::default(),
        incompatible_with: Vec::new(),
        safety: SafetyProfile::default(),
    }
}

pub(super) fn with_tone(mut entry: ColorantEntry, base_tone: &str, undertone: &str) -> ColorantEntry {
    entry.base_tone = base_tone.to_string();
    entry.undertone_description = undertone.to_string();
    entry
}

/// Catalog entry described for the medium/neutral brow consultation.
pub(super) fn medium_brown_entry() -> ColorantEntry {
    let mut entry = entry(
        "Medium Brown",
        PigmentCategory::Brows,
        &["Light-Medium", "Medium", "Tan"],
        &["Cool", "Neutral", "Slightly Warm"],
        &["Soft Natural Brown Brow", "Natural Brown Brow"],
    );
    entry.mixing.mixing_notes = "Use straight from the bottle.".to_string();
    entry.mixing.suggested_modifiers = strings(&["Warm Modifier"]);
    entry.temperature_shift_note = "Stable when healed.".to_string();
    entry
}

pub(super) fn brow_request(desired: &str) -> MatchRequest {
    MatchRequest::new("Medium", Undertone::Neutral, desired, Some(PigmentCategory::Brows))
        .expect("valid request")
}
