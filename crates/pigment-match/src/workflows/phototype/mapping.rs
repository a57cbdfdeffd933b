use super::domain::Phototype;
use super::normalizer::normalize_key;
use std::collections::HashMap;
use std::sync::OnceLock;

static ETHNICITY_MAP: OnceLock<HashMap<String, Phototype>> = OnceLock::new();

/// Phototype hint for an ethnicity label, or `None` when the label is unmapped.
pub(crate) fn phototype_for_ethnicity(label: &str) -> Option<Phototype> {
    ethnicity_map().get(&normalize_key(label)).copied()
}

fn ethnicity_map() -> &'static HashMap<String, Phototype> {
    ETHNICITY_MAP.get_or_init(|| {
        const ETHNICITY_TO_TYPE: &[(&str, Phototype)] = &[
            ("celtic", Phototype::I),
            ("irish", Phototype::I),
            ("scottish", Phototype::I),
            ("northern european", Phototype::II),
            ("scandinavian", Phototype::II),
            ("nordic", Phototype::II),
            ("caucasian", Phototype::II),
            ("central european", Phototype::III),
            ("european", Phototype::III),
            ("southern european", Phototype::III),
            ("mediterranean", Phototype::III),
            ("middle eastern", Phototype::IV),
            ("hispanic", Phototype::IV),
            ("latino", Phototype::IV),
            ("latina", Phototype::IV),
            ("latin american", Phototype::IV),
            ("east asian", Phototype::IV),
            ("asian", Phototype::IV),
            ("native american", Phototype::IV),
            ("south asian", Phototype::V),
            ("indian", Phototype::V),
            ("north african", Phototype::V),
            ("pacific islander", Phototype::V),
            ("polynesian", Phototype::V),
            ("african", Phototype::VI),
            ("african american", Phototype::VI),
            ("afro caribbean", Phototype::VI),
            ("black", Phototype::VI),
            ("sub saharan african", Phototype::VI),
        ];

        let mut map = HashMap::with_capacity(ETHNICITY_TO_TYPE.len());
        for (label, phototype) in ETHNICITY_TO_TYPE {
            map.insert(normalize_key(label), *phototype);
        }
        map
    })
}
