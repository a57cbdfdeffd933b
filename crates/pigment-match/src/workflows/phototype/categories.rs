use std::sync::OnceLock;

use serde::Serialize;

use super::domain::Phototype;

/// Reference swatch shown next to a phototype in consultation material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorSwatch {
    pub hex: &'static str,
    pub rgb: [u8; 3],
    pub description: &'static str,
}

/// Minutes of unprotected midday sun before first reddening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BurnTime {
    pub min_minutes: u16,
    pub max_minutes: Option<u16>,
}

/// Static description of one phototype. Loaded once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhototypeCategory {
    pub id: Phototype,
    pub name: &'static str,
    pub skin_color: &'static str,
    pub sun_reaction: &'static str,
    pub tanning_ability: &'static str,
    pub freckling: &'static str,
    pub typical_eye_colors: Vec<&'static str>,
    pub typical_hair_colors: Vec<&'static str>,
    pub burn_time: BurnTime,
    pub ethnic_backgrounds: Vec<&'static str>,
    pub risk_notes: Vec<&'static str>,
    pub swatches: Vec<ColorSwatch>,
    /// Skin-tone bucket label used by catalog match tags.
    pub tone_bucket: &'static str,
}

impl PhototypeCategory {
    pub fn all() -> &'static [PhototypeCategory] {
        static CATEGORIES: OnceLock<Vec<PhototypeCategory>> = OnceLock::new();
        CATEGORIES.get_or_init(standard_categories)
    }

    pub fn lookup(id: Phototype) -> &'static PhototypeCategory {
        // The table is built in `Phototype::ordered()` order.
        &Self::all()[usize::from(id.id() - 1)]
    }
}

fn standard_categories() -> Vec<PhototypeCategory> {
    vec![
        PhototypeCategory {
            id: Phototype::I,
            name: "Very fair",
            skin_color: "Pale white, often with pink undertones",
            sun_reaction: "Always burns, never tans",
            tanning_ability: "Does not tan",
            freckling: "Heavy freckling",
            typical_eye_colors: vec!["blue", "light green", "grey"],
            typical_hair_colors: vec!["red", "light blonde", "strawberry blonde"],
            burn_time: BurnTime {
                min_minutes: 5,
                max_minutes: Some(10),
            },
            ethnic_backgrounds: vec!["Celtic", "Irish", "Scottish", "Scandinavian"],
            risk_notes: vec![
                "Highest sensitivity; expect visible redness and swelling after work.",
                "Warm pigments may heal brighter than expected on translucent skin.",
            ],
            swatches: vec![
                ColorSwatch {
                    hex: "#F7E1D7",
                    rgb: [247, 225, 215],
                    description: "Porcelain",
                },
                ColorSwatch {
                    hex: "#F3D5C8",
                    rgb: [243, 213, 200],
                    description: "Rosy ivory",
                },
            ],
            tone_bucket: "Fair",
        },
        PhototypeCategory {
            id: Phototype::II,
            name: "Fair",
            skin_color: "White to fair beige",
            sun_reaction: "Usually burns, tans minimally",
            tanning_ability: "Tans with difficulty",
            freckling: "Moderate freckling",
            typical_eye_colors: vec!["blue", "green", "hazel"],
            typical_hair_colors: vec!["blonde", "light brown", "red"],
            burn_time: BurnTime {
                min_minutes: 10,
                max_minutes: Some(20),
            },
            ethnic_backgrounds: vec!["Northern European", "Central European", "Slavic"],
            risk_notes: vec![
                "Sensitive skin; favour lighter hands and conservative passes.",
                "Ash-based pigments can heal greyish; check for warm modifiers.",
            ],
            swatches: vec![
                ColorSwatch {
                    hex: "#EBCFBF",
                    rgb: [235, 207, 191],
                    description: "Fair beige",
                },
                ColorSwatch {
                    hex: "#E6C3AE",
                    rgb: [230, 195, 174],
                    description: "Light sand",
                },
            ],
            tone_bucket: "Light",
        },
        PhototypeCategory {
            id: Phototype::III,
            name: "Medium light",
            skin_color: "Cream white to light olive",
            sun_reaction: "Sometimes burns, tans gradually",
            tanning_ability: "Tans moderately",
            freckling: "Light freckling",
            typical_eye_colors: vec!["hazel", "light brown", "green"],
            typical_hair_colors: vec!["dark blonde", "light brown", "chestnut"],
            burn_time: BurnTime {
                min_minutes: 15,
                max_minutes: Some(25),
            },
            ethnic_backgrounds: vec!["Southern European", "Mediterranean", "Mixed European"],
            risk_notes: vec![
                "Generally predictable healing; the most forgiving range for colour choice.",
            ],
            swatches: vec![
                ColorSwatch {
                    hex: "#DDB597",
                    rgb: [221, 181, 151],
                    description: "Warm beige",
                },
                ColorSwatch {
                    hex: "#D4A886",
                    rgb: [212, 168, 134],
                    description: "Light olive",
                },
            ],
            tone_bucket: "Light-Medium",
        },
        PhototypeCategory {
            id: Phototype::IV,
            name: "Medium",
            skin_color: "Light brown to olive",
            sun_reaction: "Rarely burns, tans easily",
            tanning_ability: "Tans well",
            freckling: "Rare freckling",
            typical_eye_colors: vec!["brown", "dark hazel"],
            typical_hair_colors: vec!["brown", "dark brown"],
            burn_time: BurnTime {
                min_minutes: 25,
                max_minutes: Some(40),
            },
            ethnic_backgrounds: vec!["Middle Eastern", "Latin American", "East Asian"],
            risk_notes: vec![
                "Watch for post-inflammatory hyperpigmentation on aggressive work.",
                "Cool pigments may heal ashy; pre-balance with warm modifiers.",
            ],
            swatches: vec![
                ColorSwatch {
                    hex: "#C68E64",
                    rgb: [198, 142, 100],
                    description: "Golden tan",
                },
                ColorSwatch {
                    hex: "#B97F57",
                    rgb: [185, 127, 87],
                    description: "Olive brown",
                },
            ],
            tone_bucket: "Medium",
        },
        PhototypeCategory {
            id: Phototype::V,
            name: "Dark",
            skin_color: "Brown",
            sun_reaction: "Very rarely burns, tans very easily",
            tanning_ability: "Tans very easily",
            freckling: "No freckling",
            typical_eye_colors: vec!["dark brown"],
            typical_hair_colors: vec!["dark brown", "black"],
            burn_time: BurnTime {
                min_minutes: 40,
                max_minutes: Some(60),
            },
            ethnic_backgrounds: vec!["South Asian", "North African", "Pacific Islander"],
            risk_notes: vec![
                "Elevated risk of hyperpigmentation and keloid formation; patch test first.",
                "Light or pastel pigments may heal chalky; choose richer bases.",
            ],
            swatches: vec![
                ColorSwatch {
                    hex: "#8D5A3B",
                    rgb: [141, 90, 59],
                    description: "Warm brown",
                },
                ColorSwatch {
                    hex: "#7A4B31",
                    rgb: [122, 75, 49],
                    description: "Chestnut",
                },
            ],
            tone_bucket: "Tan",
        },
        PhototypeCategory {
            id: Phototype::VI,
            name: "Very dark",
            skin_color: "Deeply pigmented dark brown to black",
            sun_reaction: "Never burns",
            tanning_ability: "Deeply pigmented",
            freckling: "No freckling",
            typical_eye_colors: vec!["dark brown", "black"],
            typical_hair_colors: vec!["black"],
            burn_time: BurnTime {
                min_minutes: 60,
                max_minutes: None,
            },
            ethnic_backgrounds: vec!["Sub-Saharan African", "African American", "Afro-Caribbean"],
            risk_notes: vec![
                "Highest keloid and hyperpigmentation risk; conservative depth and spacing.",
                "Pigments need strong saturation to show through melanin.",
            ],
            swatches: vec![
                ColorSwatch {
                    hex: "#5C3A26",
                    rgb: [92, 58, 38],
                    description: "Deep espresso",
                },
                ColorSwatch {
                    hex: "#3F2A1D",
                    rgb: [63, 42, 29],
                    description: "Ebony",
                },
            ],
            tone_bucket: "Deep",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_ordered_by_phototype_id() {
        let ids: Vec<Phototype> = PhototypeCategory::all().iter().map(|c| c.id).collect();
        assert_eq!(ids, Phototype::ordered().to_vec());
    }

    #[test]
    fn lookup_returns_matching_category() {
        for phototype in Phototype::ordered() {
            let category = PhototypeCategory::lookup(phototype);
            assert_eq!(category.id, phototype);
            assert!(!category.swatches.is_empty());
            assert!(category
                .swatches
                .iter()
                .all(|swatch| swatch.hex.starts_with('#') && swatch.hex.len() == 7));
        }
        assert_eq!(PhototypeCategory::lookup(Phototype::IV).tone_bucket, "Medium");
    }
}
