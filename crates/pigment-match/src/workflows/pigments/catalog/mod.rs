mod parser;
mod seed;

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use super::domain::{
    ColorantEntry, MatchTags, MixingGuidance, PigmentCategory, SafetyProfile,
};

#[derive(Debug)]
pub enum CatalogImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    UnknownCategory { row: usize, value: String },
    DuplicateEntry {
        brand: String,
        name: String,
        category: PigmentCategory,
    },
}

impl std::fmt::Display for CatalogImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogImportError::Io(err) => write!(f, "failed to read pigment catalog: {}", err),
            CatalogImportError::Csv(err) => write!(f, "invalid pigment catalog CSV data: {}", err),
            CatalogImportError::UnknownCategory { row, value } => {
                write!(f, "row {row}: unknown pigment category '{value}'")
            }
            CatalogImportError::DuplicateEntry {
                brand,
                name,
                category,
            } => {
                write!(
                    f,
                    "catalog lists '{name}' by '{brand}' for {category} more than once"
                )
            }
        }
    }
}

impl std::error::Error for CatalogImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogImportError::Io(err) => Some(err),
            CatalogImportError::Csv(err) => Some(err),
            CatalogImportError::UnknownCategory { .. } | CatalogImportError::DuplicateEntry { .. } => {
                None
            }
        }
    }
}

impl From<std::io::Error> for CatalogImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CatalogImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Read-only pigment catalog. Entry order is the ranking tie-break order.
#[derive(Debug, Clone)]
pub struct PigmentCatalog {
    entries: Vec<ColorantEntry>,
}

impl PigmentCatalog {
    pub fn new(entries: Vec<ColorantEntry>) -> Result<Self, CatalogImportError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.identity()) {
                return Err(CatalogImportError::DuplicateEntry {
                    brand: entry.brand.clone(),
                    name: entry.name.clone(),
                    category: entry.category,
                });
            }
        }

        Ok(Self { entries })
    }

    pub fn standard() -> Self {
        Self {
            entries: seed::standard_entries(),
        }
    }

    pub fn entries(&self) -> &[ColorantEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn in_category(&self, category: PigmentCategory) -> Vec<&ColorantEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.category == category)
            .collect()
    }
}

pub struct CatalogImporter;

impl CatalogImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<PigmentCatalog, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<PigmentCatalog, CatalogImportError> {
        let rows = parser::parse_rows(reader)?;
        let mut entries = Vec::with_capacity(rows.len());

        for (index, row) in rows.into_iter().enumerate() {
            let category = PigmentCategory::parse(&row.category).ok_or_else(|| {
                CatalogImportError::UnknownCategory {
                    row: index + 1,
                    value: row.category.clone(),
                }
            })?;

            entries.push(ColorantEntry {
                name: row.name,
                brand: row.brand,
                category,
                base_tone: row.base_tone,
                undertone_description: row.undertone_description,
                opacity_level: row.opacity_level,
                temperature_shift_note: row.temperature_shift_note,
                match_tags: MatchTags {
                    skin_tone_matches: row.skin_tone_matches,
                    undertone_matches: row.undertone_matches,
                    desired_healed_results: row.desired_healed_results,
                },
                mixing: MixingGuidance {
                    suggested_modifiers: row.suggested_modifiers,
                    mixing_notes: row.mixing_notes,
                },
                incompatible_with: row.incompatible_with,
                safety: SafetyProfile {
                    shelf_life: row.shelf_life,
                    storage_conditions: row.storage_conditions,
                    patch_test_notes: row.patch_test_notes,
                },
            });
        }

        debug!(entries = entries.len(), "pigment catalog parsed");
        PigmentCatalog::new(entries)
    }
}
