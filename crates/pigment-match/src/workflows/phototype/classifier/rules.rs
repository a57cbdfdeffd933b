use std::collections::BTreeMap;

use super::super::domain::{
    ClassificationFactor, FactorContribution, ObservedFactors, PhotoQuality, Phototype,
    SunReaction, TanningAbility,
};
use super::super::mapping::phototype_for_ethnicity;
use super::config::{ClassifierConfig, FactorWeight};

/// Upper bound of each skin-tone range with its primary and secondary phototype.
/// Tones above the last bound fall into the final bucket.
const SKIN_TONE_BUCKETS: [(f64, Phototype, Phototype); 5] = [
    (20.0, Phototype::I, Phototype::I),
    (35.0, Phototype::II, Phototype::I),
    (50.0, Phototype::III, Phototype::II),
    (65.0, Phototype::IV, Phototype::III),
    (80.0, Phototype::V, Phototype::IV),
];
const DEEPEST_BUCKET: (Phototype, Phototype) = (Phototype::VI, Phototype::V);

pub(crate) fn skin_tone_types(tone: f64) -> (Phototype, Phototype) {
    SKIN_TONE_BUCKETS
        .iter()
        .find(|(upper, _, _)| tone <= *upper)
        .map(|(_, primary, secondary)| (*primary, *secondary))
        .unwrap_or(DEEPEST_BUCKET)
}

/// Bucket bounds as written in the rubric, e.g. `>20 to ≤35`.
fn skin_tone_range(tone: f64) -> String {
    let mut lower: Option<f64> = None;
    for (upper, _, _) in SKIN_TONE_BUCKETS {
        if tone <= upper {
            return match lower {
                Some(lower) => format!(">{lower} to ≤{upper}"),
                None => format!("≤{upper}"),
            };
        }
        lower = Some(upper);
    }
    format!(">{}", lower.unwrap_or(0.0))
}

// never_burns skips Type V as a primary.
pub(crate) fn sun_reaction_types(reaction: SunReaction) -> (Phototype, Phototype) {
    match reaction {
        SunReaction::AlwaysBurns => (Phototype::I, Phototype::II),
        SunReaction::UsuallyBurns => (Phototype::II, Phototype::I),
        SunReaction::SometimesBurns => (Phototype::III, Phototype::II),
        SunReaction::RarelyBurns => (Phototype::IV, Phototype::III),
        SunReaction::NeverBurns => (Phototype::VI, Phototype::V),
    }
}

pub(crate) fn tanning_types(ability: TanningAbility) -> (Phototype, Phototype) {
    match ability {
        TanningAbility::Never => (Phototype::I, Phototype::II),
        TanningAbility::Minimal => (Phototype::II, Phototype::I),
        TanningAbility::Moderate => (Phototype::III, Phototype::II),
        TanningAbility::Good => (Phototype::IV, Phototype::III),
        TanningAbility::Excellent => (Phototype::V, Phototype::IV),
        TanningAbility::Maximum => (Phototype::VI, Phototype::V),
    }
}

pub(crate) fn photo_quality_multiplier(quality: PhotoQuality, config: &ClassifierConfig) -> f64 {
    let multipliers = &config.photo_quality;
    match quality {
        PhotoQuality::Excellent => multipliers.excellent,
        PhotoQuality::Good => multipliers.good,
        PhotoQuality::Fair => multipliers.fair,
        PhotoQuality::Poor => multipliers.poor,
        PhotoQuality::Unassessed => multipliers.unassessed,
    }
}

/// Runs every factor in trace order and returns the contributions with the final scores.
pub(crate) fn score_factors(
    factors: &ObservedFactors,
    config: &ClassifierConfig,
) -> (Vec<FactorContribution>, BTreeMap<Phototype, f64>) {
    let mut scores: BTreeMap<Phototype, f64> = Phototype::ordered()
        .into_iter()
        .map(|phototype| (phototype, 0.0))
        .collect();
    let mut contributions = Vec::with_capacity(5);

    let tone = factors.skin_tone.value();
    let (primary, secondary) = skin_tone_types(tone);
    contributions.push(paired_contribution(
        ClassificationFactor::SkinTone,
        (primary, secondary),
        config.skin_tone,
        format!(
            "Skin tone {tone} falls in the {} range",
            skin_tone_range(tone)
        ),
    ));

    contributions.push(paired_contribution(
        ClassificationFactor::SunReaction,
        sun_reaction_types(factors.sun_reaction),
        config.sun_reaction,
        format!("Sun reaction '{}'", factors.sun_reaction.label()),
    ));

    contributions.push(paired_contribution(
        ClassificationFactor::TanningAbility,
        tanning_types(factors.tanning_ability),
        config.tanning_ability,
        format!("Tanning ability '{}'", factors.tanning_ability.key()),
    ));

    if let Some(label) = factors.ethnicity.as_deref() {
        let (phototype, notes) = match phototype_for_ethnicity(label) {
            Some(phototype) => (
                phototype,
                format!(
                    "Ethnicity '{label}' suggests {phototype}: +{:.0} {phototype}",
                    config.ethnicity
                ),
            ),
            None => {
                let fallback = config.ethnicity_fallback;
                (
                    fallback,
                    format!(
                        "Ethnicity '{label}' is not mapped; defaulting to {fallback}: +{:.0} {fallback}",
                        config.ethnicity
                    ),
                )
            }
        };
        contributions.push(FactorContribution {
            factor: ClassificationFactor::Ethnicity,
            awarded: vec![(phototype, config.ethnicity)],
            multiplier: None,
            notes,
        });
    }

    for contribution in &contributions {
        for (phototype, points) in &contribution.awarded {
            if let Some(score) = scores.get_mut(phototype) {
                *score += points;
            }
        }
    }

    let multiplier = photo_quality_multiplier(factors.photo_quality, config);
    for score in scores.values_mut() {
        *score *= multiplier;
    }
    contributions.push(FactorContribution {
        factor: ClassificationFactor::PhotoQuality,
        awarded: Vec::new(),
        multiplier: Some(multiplier),
        notes: format!(
            "Photo quality '{}': all scores scaled by {multiplier:.2}",
            factors.photo_quality.key()
        ),
    });

    (contributions, scores)
}

fn paired_contribution(
    factor: ClassificationFactor,
    (primary, secondary): (Phototype, Phototype),
    weight: FactorWeight,
    lead: String,
) -> FactorContribution {
    FactorContribution {
        factor,
        awarded: vec![(primary, weight.primary), (secondary, weight.secondary)],
        multiplier: None,
        notes: format!(
            "{lead}: +{:.0} {primary}, +{:.0} {secondary}",
            weight.primary, weight.secondary
        ),
    }
}
