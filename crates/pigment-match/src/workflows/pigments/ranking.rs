use super::domain::{ColorantEntry, MatchCandidate, MatchRequest, ALL_SKIN_TONES};
use super::matcher::{contains_tag, tag_equals, CompatibleEntry};

pub const SKIN_TONE_POINTS: u8 = 40;
pub const UNDERTONE_POINTS: u8 = 30;
pub const DESIRED_RESULT_POINTS: u8 = 30;

/// Scores every compatible entry and orders them by descending score.
/// Equal scores keep their catalog order.
pub fn rank<'a>(
    candidates: &[CompatibleEntry<'a>],
    request: &MatchRequest,
) -> Vec<MatchCandidate<'a>> {
    let mut ranked: Vec<MatchCandidate<'a>> = candidates
        .iter()
        .map(|candidate| MatchCandidate {
            entry: candidate.entry,
            score: score_entry(candidate.entry, request),
            catalog_position: candidate.catalog_position,
        })
        .collect();

    ranked.sort_by(|left, right| right.score.cmp(&left.score));
    ranked
}

pub fn score_entry(entry: &ColorantEntry, request: &MatchRequest) -> u8 {
    let tags = &entry.match_tags;
    let mut score = 0;

    // The "All" sentinel admits an entry but earns no tone points.
    let exact_tone = tags
        .skin_tone_matches
        .iter()
        .filter(|tag| !tag_equals(tag, ALL_SKIN_TONES))
        .any(|tag| tag_equals(tag, &request.skin_tone_bucket));
    if exact_tone {
        score += SKIN_TONE_POINTS;
    }

    if contains_tag(&tags.undertone_matches, request.undertone.label()) {
        score += UNDERTONE_POINTS;
    }

    if contains_tag(&tags.desired_healed_results, &request.desired_outcome) {
        score += DESIRED_RESULT_POINTS;
    }

    score
}
