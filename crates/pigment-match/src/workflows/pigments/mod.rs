//! Pigment catalog, compatibility filtering, ranking and recommendation composition.

pub mod catalog;
pub mod composer;
pub mod domain;
pub mod matcher;
pub mod ranking;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogImportError, CatalogImporter, PigmentCatalog};
pub use domain::{
    ColorantEntry, MatchCandidate, MatchRequest, MatchRequestInput, MatchTags, MixingGuidance,
    PigmentCategory, Recommendation, RecommendedPigment, SafetyProfile, TemperatureLean,
    ALL_SKIN_TONES,
};

/// Filters, ranks and composes a recommendation from a read-only catalog.
pub fn recommend<'a>(catalog: &'a [ColorantEntry], request: &MatchRequest) -> Recommendation<'a> {
    let compatible = matcher::compatible_entries(catalog, request);
    let ranked = ranking::rank(&compatible, request);
    composer::compose(ranked)
}
