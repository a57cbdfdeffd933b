use crate::infra::load_catalog;
use clap::Args;
use pigment_match::error::AppError;
use pigment_match::workflows::consultation::{ConsultationRequest, ConsultationService};
use pigment_match::workflows::phototype::{
    ClassificationResult, PhototypeCategory, RawObservations,
};
use pigment_match::workflows::pigments::{
    MatchRequestInput, PigmentCatalog, Recommendation, RecommendedPigment,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ClassifyArgs {
    /// Skin tone on the 0 (lightest) to 100 (darkest) scale
    #[arg(long)]
    pub(crate) skin_tone: f64,
    /// cool, neutral or warm
    #[arg(long)]
    pub(crate) undertone: String,
    /// always_burns, usually_burns, sometimes_burns, rarely_burns or never_burns
    #[arg(long)]
    pub(crate) sun_reaction: String,
    /// never, minimal, moderate, good, excellent or maximum
    #[arg(long = "tanning")]
    pub(crate) tanning_ability: String,
    /// heavy, moderate, light, rare or none
    #[arg(long)]
    pub(crate) freckling: String,
    #[arg(long)]
    pub(crate) eye_color: String,
    #[arg(long)]
    pub(crate) hair_color: String,
    /// Self-reported ethnic background
    #[arg(long)]
    pub(crate) ethnicity: Option<String>,
    /// excellent, good, fair or poor
    #[arg(long)]
    pub(crate) photo_quality: Option<String>,
}

impl ClassifyArgs {
    fn observations(&self) -> RawObservations {
        RawObservations {
            skin_tone: self.skin_tone,
            undertone: self.undertone.clone(),
            sun_reaction: self.sun_reaction.clone(),
            tanning_ability: self.tanning_ability.clone(),
            freckling: self.freckling.clone(),
            eye_color: self.eye_color.clone(),
            hair_color: self.hair_color.clone(),
            ethnicity: self.ethnicity.clone(),
            photo_quality: self.photo_quality.clone(),
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Skin-tone bucket such as Fair, Light, Medium or Deep
    #[arg(long)]
    pub(crate) tone_bucket: String,
    /// cool, neutral or warm
    #[arg(long)]
    pub(crate) undertone: String,
    /// Desired healed result, e.g. "Soft Natural Brown"
    #[arg(long)]
    pub(crate) desired: String,
    /// Restrict to one category (brows, lips, eyeliner, correction, areola, scalp)
    #[arg(long)]
    pub(crate) category: Option<String>,
    /// Pigment catalog CSV (defaults to the standard catalog)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Print every ranked candidate, not just the recommendation slots
    #[arg(long)]
    pub(crate) list_ranked: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Pigment catalog CSV to run the demo against
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) fn run_classify(args: ClassifyArgs) -> Result<(), AppError> {
    let service = ConsultationService::with_catalog(Arc::new(PigmentCatalog::standard()));
    let result = service.classify(&args.observations())?;
    render_classification(&result);
    Ok(())
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let service = ConsultationService::with_catalog(Arc::new(catalog));
    let input = MatchRequestInput {
        skin_tone_bucket: args.tone_bucket,
        undertone: args.undertone,
        desired_outcome: args.desired,
        category: args.category,
    };

    let recommendation = service.recommend(&input)?;
    render_recommendation(&recommendation, args.list_ranked);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let service = ConsultationService::with_catalog(Arc::new(catalog));

    println!("Pigment match demo");
    println!("Catalog: {} colorants", service.catalog().len());

    for (title, request) in demo_consultations() {
        println!("\n== {title}");
        match service.consult(&request) {
            Ok(outcome) => {
                render_classification(&outcome.classification);
                render_reference(outcome.reference);
                println!(
                    "Match request: {} skin, {} undertone, desired '{}'",
                    outcome.match_request.skin_tone_bucket,
                    outcome.match_request.undertone.key(),
                    outcome.match_request.desired_outcome
                );
                render_recommendation(&outcome.recommendation, true);
            }
            Err(err) => println!("  Consultation rejected: {err}"),
        }
    }

    Ok(())
}

fn demo_consultations() -> Vec<(&'static str, ConsultationRequest)> {
    vec![
        (
            "Fair, cool-toned client asking for soft taupe brows",
            ConsultationRequest {
                observations: RawObservations {
                    skin_tone: 15.0,
                    undertone: "cool".to_string(),
                    sun_reaction: "always_burns".to_string(),
                    tanning_ability: "never".to_string(),
                    freckling: "heavy".to_string(),
                    eye_color: "blue".to_string(),
                    hair_color: "red".to_string(),
                    ethnicity: None,
                    photo_quality: Some("excellent".to_string()),
                },
                desired_outcome: "Soft Taupe Brow".to_string(),
                category: Some("brows".to_string()),
            },
        ),
        (
            "Medium, neutral-toned client asking for natural brown brows",
            ConsultationRequest {
                observations: RawObservations {
                    skin_tone: 60.0,
                    undertone: "neutral".to_string(),
                    sun_reaction: "rarely_burns".to_string(),
                    tanning_ability: "good".to_string(),
                    freckling: "rare".to_string(),
                    eye_color: "brown".to_string(),
                    hair_color: "dark brown".to_string(),
                    ethnicity: Some("Hispanic".to_string()),
                    photo_quality: Some("good".to_string()),
                },
                desired_outcome: "Soft Natural Brown".to_string(),
                category: Some("brows".to_string()),
            },
        ),
        (
            "Deep, warm-toned client asking for defined dark brows",
            ConsultationRequest {
                observations: RawObservations {
                    skin_tone: 90.0,
                    undertone: "warm".to_string(),
                    sun_reaction: "never_burns".to_string(),
                    tanning_ability: "maximum".to_string(),
                    freckling: "none".to_string(),
                    eye_color: "dark brown".to_string(),
                    hair_color: "black".to_string(),
                    ethnicity: Some("african".to_string()),
                    photo_quality: None,
                },
                desired_outcome: "Defined Dark Brow".to_string(),
                category: Some("brows".to_string()),
            },
        ),
    ]
}

fn render_classification(result: &ClassificationResult) {
    println!(
        "Phototype: {} (confidence {:.0}%)",
        result.phototype,
        result.confidence * 100.0
    );
    println!("Reasoning:");
    for line in &result.reasoning {
        println!("  - {line}");
    }
    let scores: Vec<String> = result
        .scores_by_type
        .iter()
        .map(|(phototype, score)| format!("{}={score:.2}", phototype.id()))
        .collect();
    println!("Scores: {}", scores.join(" "));
}

fn render_reference(reference: &PhototypeCategory) {
    println!(
        "Reference: {} ({}); tone bucket {}",
        reference.name, reference.skin_color, reference.tone_bucket
    );
    for note in &reference.risk_notes {
        println!("  ! {note}");
    }
}

fn render_recommendation(recommendation: &Recommendation<'_>, list_ranked: bool) {
    println!("Recommendation: {}", recommendation.summary());

    for slot in [
        &recommendation.best,
        &recommendation.warm_alternative,
        &recommendation.cool_alternative,
    ]
    .into_iter()
    .flatten()
    {
        render_slot(slot);
    }

    if list_ranked && !recommendation.ranked.is_empty() {
        println!("Ranked candidates:");
        for (rank, candidate) in recommendation.ranked.iter().enumerate() {
            println!(
                "  {}. {} [{}] {}/100",
                rank + 1,
                candidate.entry.display_name(),
                candidate.entry.category,
                candidate.score
            );
        }
    }
}

fn render_slot(slot: &RecommendedPigment<'_>) {
    println!("- {}", slot.rationale);
    println!("  {}", slot.heal_shift);
    if !slot.suggested_modifiers.is_empty() {
        println!("  Modifiers: {}", slot.suggested_modifiers.join(", "));
    }
    let safety = &slot.candidate.entry.safety;
    if !safety.patch_test_notes.is_empty() {
        println!("  Patch test: {}", safety.patch_test_notes);
    }
}
