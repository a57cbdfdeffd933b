use super::domain::{
    ColorantEntry, MatchCandidate, Recommendation, RecommendedPigment, TemperatureLean,
};

const WARM_WORDS: &[&str] = &[
    "warm", "warmer", "golden", "gold", "orange", "red", "reddish", "copper", "peach", "peachy",
    "yellow", "honey", "caramel", "auburn", "coral", "terracotta", "rust",
];

const COOL_WORDS: &[&str] = &[
    "cool", "cooler", "ash", "ashy", "blue", "bluish", "violet", "purple", "grey", "gray",
    "green", "greenish", "taupe", "plum", "mauve",
];

/// Reads the lean from the base tone and undertone description by keyword vote.
pub fn temperature_lean(entry: &ColorantEntry) -> TemperatureLean {
    let text = format!("{} {}", entry.base_tone, entry.undertone_description).to_lowercase();
    let (mut warm, mut cool) = (0usize, 0usize);

    for word in text.split(|c: char| !c.is_alphabetic()) {
        if WARM_WORDS.contains(&word) {
            warm += 1;
        } else if COOL_WORDS.contains(&word) {
            cool += 1;
        }
    }

    match warm.cmp(&cool) {
        std::cmp::Ordering::Greater => TemperatureLean::Warm,
        std::cmp::Ordering::Less => TemperatureLean::Cool,
        std::cmp::Ordering::Equal => TemperatureLean::Neutral,
    }
}

/// Picks the best candidate plus warm- and cool-leaning alternatives from a ranked list.
pub fn compose(ranked: Vec<MatchCandidate<'_>>) -> Recommendation<'_> {
    if ranked.is_empty() {
        return Recommendation {
            ranked,
            best: None,
            warm_alternative: None,
            cool_alternative: None,
        };
    }

    let (first, rest) = (ranked[0], &ranked[1..]);
    let best = Some(slot("Best match", first));
    let warm_alternative = alternative(rest, TemperatureLean::Warm, "Warm-leaning alternative");
    let cool_alternative = alternative(rest, TemperatureLean::Cool, "Cool-leaning alternative");

    Recommendation {
        ranked,
        best,
        warm_alternative,
        cool_alternative,
    }
}

fn alternative<'a>(
    remaining: &[MatchCandidate<'a>],
    lean: TemperatureLean,
    role: &str,
) -> Option<RecommendedPigment<'a>> {
    remaining
        .iter()
        .find(|candidate| temperature_lean(candidate.entry) == lean)
        .map(|candidate| slot(role, *candidate))
}

fn slot<'a>(role: &str, candidate: MatchCandidate<'a>) -> RecommendedPigment<'a> {
    let entry = candidate.entry;
    let lean = temperature_lean(entry);

    let mut rationale = format!(
        "{role}: {} scored {}/100 and leans {}.",
        entry.display_name(),
        candidate.score,
        lean.label()
    );
    let notes = entry.mixing.mixing_notes.trim();
    if !notes.is_empty() {
        rationale.push(' ');
        rationale.push_str(notes);
    }

    RecommendedPigment {
        candidate,
        lean,
        rationale,
        heal_shift: heal_shift(entry),
        suggested_modifiers: entry.mixing.suggested_modifiers.clone(),
    }
}

fn heal_shift(entry: &ColorantEntry) -> String {
    let note = entry.temperature_shift_note.trim();
    if note.is_empty() {
        format!(
            "No heal shift documented for {}; expect the healed tone to stay close to the fresh tone.",
            entry.name
        )
    } else {
        format!("Expected heal shift: {note}")
    }
}
