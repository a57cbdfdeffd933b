use super::super::domain::{
    ColorantEntry, MatchTags, MixingGuidance, PigmentCategory, SafetyProfile,
};

fn list(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn safety(shelf_life: &str, patch_test_notes: &str) -> SafetyProfile {
    SafetyProfile {
        shelf_life: shelf_life.to_string(),
        storage_conditions: "Store upright at 15-25°C away from direct light; shake before use."
            .to_string(),
        patch_test_notes: patch_test_notes.to_string(),
    }
}

const STANDARD_PATCH_TEST: &str =
    "Patch test behind the ear 48 hours before the first session for clients with known sensitivities.";

pub(super) fn standard_entries() -> Vec<ColorantEntry> {
    vec![
        ColorantEntry {
            name: "Soft Taupe".to_string(),
            brand: "Northline Pigments".to_string(),
            category: PigmentCategory::Brows,
            base_tone: "Light ash brown".to_string(),
            undertone_description: "Cool taupe with a grey base".to_string(),
            opacity_level: "Medium".to_string(),
            temperature_shift_note: "May heal slightly cooler on fair skin over 12 months.".to_string(),
            match_tags: MatchTags {
                skin_tone_matches: list(&["Fair", "Light", "Light-Medium"]),
                undertone_matches: list(&["Cool", "Neutral"]),
                desired_healed_results: list(&["Soft Taupe Brow", "Natural Ash Brown Brow"]),
            },
            mixing: MixingGuidance {
                suggested_modifiers: list(&["Warm Modifier"]),
                mixing_notes: "Add one drop of warm modifier per five drops on clients with pink undertones.".to_string(),
            },
            incompatible_with: Vec::new(),
            safety: safety("24 months sealed, 12 months after opening", STANDARD_PATCH_TEST),
        },
        ColorantEntry {
            name: "Honey Blonde".to_string(),
            brand: "Northline Pigments".to_string(),
            category: PigmentCategory::Brows,
            base_tone: "Golden light brown".to_string(),
            undertone_description: "Warm honey base".to_string(),
            opacity_level: "Low".to_string(),
            temperature_shift_note: "Heals softer and may pull slightly golden.".to_string(),
            match_tags: MatchTags {
                skin_tone_matches: list(&["Fair", "Light"]),
                undertone_matches: list(&["Warm", "Neutral"]),
                desired_healed_results: list(&["Soft Blonde Brow", "Natural Light Brow"]),
            },
            mixing: MixingGuidance {
                suggested_modifiers: list(&["Cool Modifier"]),
                mixing_notes: "Temper with a touch of cool modifier if the client flushes easily.".to_string(),
            },
            incompatible_with: list(&["Orange Corrector"]),
            safety: safety("24 months sealed, 12 months after opening", STANDARD_PATCH_TEST),
        },
        ColorantEntry {
            name: "Medium Brown".to_string(),
            brand: "Atelier Ink".to_string(),
            category: PigmentCategory::Brows,
            base_tone: "Medium brown".to_string(),
            undertone_description: "Balanced neutral".to_string(),
            opacity_level: "Medium".to_string(),
            temperature_shift_note: "Stable; minimal temperature shift when healed.".to_string(),
            match_tags: MatchTags {
                skin_tone_matches: list(&["Light-Medium", "Medium", "Tan"]),
                undertone_matches: list(&["Cool", "Neutral", "Slightly Warm"]),
                desired_healed_results: list(&["Soft Natural Brown Brow", "Natural Brown Brow"]),
            },
            mixing: MixingGuidance {
                suggested_modifiers: list(&["Warm Modifier", "Cool Modifier"]),
                mixing_notes: "Use straight from the bottle for most neutral clients.".to_string(),
            },
            incompatible_with: Vec::new(),
            safety: safety("30 months sealed, 12 months after opening", STANDARD_PATCH_TEST),
        },
        ColorantEntry {
            name: "Chestnut".to_string(),
            brand: "Atelier Ink".to_string(),
            category: PigmentCategory::Brows,
            base_tone: "Warm reddish brown".to_string(),
            undertone_description: "Copper undertone".to_string(),
            opacity_level: "Medium-High".to_string(),
            temperature_shift_note: "Can heal warmer on olive skin; monitor at touch-up.".to_string(),
            match_tags: MatchTags {
                skin_tone_matches: list(&["Medium", "Tan"]),
                undertone_matches: list(&["Warm", "Neutral"]),
                desired_healed_results: list(&["Warm Natural Brown Brow", "Soft Natural Brown"]),
            },
            mixing: MixingGuidance {
                suggested_modifiers: list(&["Olive Modifier"]),
                mixing_notes: "Blend 4:1 with olive modifier to keep red from blooming on warm skin.".to_string(),
            },
            incompatible_with: Vec::new(),
            safety: safety("24 months sealed, 12 months after opening", STANDARD_PATCH_TEST),
        },
        ColorantEntry {
            name: "Ash Espresso".to_string(),
            brand: "Atelier Ink".to_string(),
            category: PigmentCategory::Brows,
            base_tone: "Dark ash brown".to_string(),
            undertone_description: "Cool espresso with a violet hint".to_string(),
            opacity_level: "High".to_string(),
            temperature_shift_note: "Tends to heal ashy-grey on deeper skin without a warm base.".to_string(),
            match_tags: MatchTags {
                skin_tone_matches: list(&["Medium", "Tan", "Deep"]),
                undertone_matches: list(&["Cool", "Neutral"]),
                desired_healed_results: list(&["Defined Dark Brow", "Soft Natural Brown Brow"]),
            },
            mixing: MixingGuidance {
                suggested_modifiers: list(&["Warm Modifier", "Orange Corrector"]),
                mixing_notes: "Pre-mix with warm modifier at 5:1 for deep skin to prevent grey healing.".to_string(),
            },
            incompatible_with: Vec::new(),
            safety: safety("24 months sealed, 9 months after opening", STANDARD_PATCH_TEST),
        },
        ColorantEntry {
            name: "Dark Chocolate".to_string(),
            brand: "Northline Pigments".to_string(),
            category: PigmentCategory::Brows,
            base_tone: "Deep warm brown".to_string(),
            undertone_description: "Rich golden base".to_string(),
            opacity_level: "High".to_string(),
            temperature_shift_note: "Retains warmth; slight lightening after the first heal.".to_string(),
            match_tags: MatchTags {
                skin_tone_matches: list(&["Tan", "Deep"]),
                undertone_matches: list(&["Warm", "Neutral"]),
                desired_healed_results: list(&["Defined Dark Brow", "Rich Dark Brown Brow"]),
            },
            mixing: MixingGuidance {
                suggested_modifiers: Vec::new(),
                mixing_notes: "Use undiluted on deep skin for full saturation.".to_string(),
            },
            incompatible_with: Vec::new(),
            safety: safety("24 months sealed, 12 months after opening", STANDARD_PATCH_TEST),
        },
        ColorantEntry {
            name: "Rose Nude".to_string(),
            brand: "Velvet Line".to_string(),
            category: PigmentCategory::Lips,
            base_tone: "Muted pink".to_string(),
            undertone_description: "Cool mauve base".to_string(),
            opacity_level: "Medium".to_string(),
            temperature_shift_note: "Heals about 30% lighter; can cool further on dark lips.".to_string(),
            match_tags: MatchTags {
                skin_tone_matches: list(&["Fair", "Light", "Light-Medium"]),
                undertone_matches: list(&["Cool", "Neutral"]),
                desired_healed_results: list(&["Natural Lip Blush", "Soft Rose Lip"]),
            },
            mixing: MixingGuidance {
                suggested_modifiers: list(&["Lip Neutralizer"]),
                mixing_notes: "Neutralize dark lip borders first when lips show blue undertones.".to_string(),
            },
            incompatible_with: Vec::new(),
            safety: safety("18 months sealed, 6 months after opening", STANDARD_PATCH_TEST),
        },
        ColorantEntry {
            name: "Coral Kiss".to_string(),
            brand: "Velvet Line".to_string(),
            category: PigmentCategory::Lips,
            base_tone: "Warm coral".to_string(),
            undertone_description: "Peach undertone".to_string(),
            opacity_level: "Medium".to_string(),
            temperature_shift_note: "Heals softer peach; brightness settles by week six.".to_string(),
            match_tags: MatchTags {
                skin_tone_matches: list(&["All"]),
                undertone_matches: list(&["Warm", "Neutral"]),
                desired_healed_results: list(&["Natural Lip Blush", "Bright Coral Lip"]),
            },
            mixing: MixingGuidance {
                suggested_modifiers: Vec::new(),
                mixing_notes: "Apply over a neutralized base on cool-toned lips.".to_string(),
            },
            incompatible_with: Vec::new(),
            safety: safety("18 months sealed, 6 months after opening", STANDARD_PATCH_TEST),
        },
        ColorantEntry {
            name: "Soft Black".to_string(),
            brand: "Velvet Line".to_string(),
            category: PigmentCategory::Eyeliner,
            base_tone: "Black".to_string(),
            undertone_description: "Neutral carbon black".to_string(),
            opacity_level: "High".to_string(),
            temperature_shift_note: "Very stable; may soften at the edges over years.".to_string(),
            match_tags: MatchTags {
                skin_tone_matches: list(&["All"]),
                undertone_matches: list(&["Cool", "Neutral", "Warm"]),
                desired_healed_results: list(&["Lash Enhancement", "Classic Liner"]),
            },
            mixing: MixingGuidance {
                suggested_modifiers: Vec::new(),
                mixing_notes: "Do not dilute for lash line work.".to_string(),
            },
            incompatible_with: Vec::new(),
            safety: safety("36 months sealed, 12 months after opening", STANDARD_PATCH_TEST),
        },
        ColorantEntry {
            name: "Orange Corrector".to_string(),
            brand: "Northline Pigments".to_string(),
            category: PigmentCategory::Correction,
            base_tone: "Orange".to_string(),
            undertone_description: "Warm neutralizer for grey or blue healed work".to_string(),
            opacity_level: "High".to_string(),
            temperature_shift_note: "Neutralizes cool residue; heals to a muted warm tone.".to_string(),
            match_tags: MatchTags {
                skin_tone_matches: list(&["All"]),
                undertone_matches: list(&["Cool", "Neutral", "Warm"]),
                desired_healed_results: list(&["Neutralize Grey Brow", "Neutralize Blue Brow"]),
            },
            mixing: MixingGuidance {
                suggested_modifiers: Vec::new(),
                mixing_notes: "Implant lightly and allow a full heal before re-colouring.".to_string(),
            },
            incompatible_with: list(&["Honey Blonde"]),
            safety: safety("24 months sealed, 12 months after opening", STANDARD_PATCH_TEST),
        },
        ColorantEntry {
            name: "Olive Corrector".to_string(),
            brand: "Atelier Ink".to_string(),
            category: PigmentCategory::Correction,
            base_tone: "Olive green".to_string(),
            undertone_description: "Cool neutralizer for red or salmon healed work".to_string(),
            opacity_level: "Medium".to_string(),
            temperature_shift_note: "Cancels red; can read greenish if over-applied.".to_string(),
            match_tags: MatchTags {
                skin_tone_matches: list(&["All"]),
                undertone_matches: list(&["Cool", "Neutral", "Warm"]),
                desired_healed_results: list(&["Neutralize Red Brow", "Neutralize Salmon Brow"]),
            },
            mixing: MixingGuidance {
                suggested_modifiers: Vec::new(),
                mixing_notes: "Use sparingly; one pass is usually enough.".to_string(),
            },
            incompatible_with: Vec::new(),
            safety: safety("24 months sealed, 12 months after opening", STANDARD_PATCH_TEST),
        },
    ]
}
