use std::collections::HashSet;

use super::domain::{fold_case, ColorantEntry, MatchRequest, ALL_SKIN_TONES};

/// Catalog entry that survived filtering, with its position in the source catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompatibleEntry<'a> {
    pub entry: &'a ColorantEntry,
    pub catalog_position: usize,
}

/// Filters the catalog down to entries compatible with the request, in catalog order.
/// A repeated brand/name/category identity is skipped after its first occurrence.
pub fn compatible_entries<'a>(
    catalog: &'a [ColorantEntry],
    request: &MatchRequest,
) -> Vec<CompatibleEntry<'a>> {
    let mut seen = HashSet::new();

    catalog
        .iter()
        .enumerate()
        .filter(|(_, entry)| is_compatible(entry, request))
        .filter(|(_, entry)| seen.insert(entry.identity()))
        .map(|(catalog_position, entry)| CompatibleEntry {
            entry,
            catalog_position,
        })
        .collect()
}

pub fn is_compatible(entry: &ColorantEntry, request: &MatchRequest) -> bool {
    if let Some(category) = request.category {
        if entry.category != category {
            return false;
        }
    }

    let tags = &entry.match_tags;

    let tone_matches = tags.skin_tone_matches.iter().any(|tag| {
        tag_equals(tag, &request.skin_tone_bucket) || tag_equals(tag, ALL_SKIN_TONES)
    });
    if !tone_matches {
        return false;
    }

    if !contains_tag(&tags.undertone_matches, request.undertone.label()) {
        return false;
    }

    let desired = fold_case(&request.desired_outcome);
    tags.desired_healed_results
        .iter()
        .map(|tag| fold_case(tag))
        .filter(|tag| !tag.is_empty())
        .any(|tag| tag.contains(&desired) || desired.contains(&tag))
}

pub(crate) fn tag_equals(tag: &str, value: &str) -> bool {
    fold_case(tag) == fold_case(value)
}

pub(crate) fn contains_tag(tags: &[String], value: &str) -> bool {
    tags.iter().any(|tag| tag_equals(tag, value))
}
