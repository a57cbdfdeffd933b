use serde::{Deserialize, Deserializer};
use std::io::Read;

/// One row of a pigment catalog export. List columns are `;`-separated.
#[derive(Debug, Deserialize)]
pub(crate) struct CatalogRow {
    #[serde(rename = "Name")]
    pub(crate) name: String,
    #[serde(rename = "Brand")]
    pub(crate) brand: String,
    #[serde(rename = "Category")]
    pub(crate) category: String,
    #[serde(rename = "Base Tone", default)]
    pub(crate) base_tone: String,
    #[serde(rename = "Undertone Description", default)]
    pub(crate) undertone_description: String,
    #[serde(rename = "Opacity", default)]
    pub(crate) opacity_level: String,
    #[serde(rename = "Temperature Shift", default)]
    pub(crate) temperature_shift_note: String,
    #[serde(rename = "Skin Tones", default, deserialize_with = "semicolon_list")]
    pub(crate) skin_tone_matches: Vec<String>,
    #[serde(rename = "Undertones", default, deserialize_with = "semicolon_list")]
    pub(crate) undertone_matches: Vec<String>,
    #[serde(rename = "Healed Results", default, deserialize_with = "semicolon_list")]
    pub(crate) desired_healed_results: Vec<String>,
    #[serde(rename = "Modifiers", default, deserialize_with = "semicolon_list")]
    pub(crate) suggested_modifiers: Vec<String>,
    #[serde(rename = "Mixing Notes", default)]
    pub(crate) mixing_notes: String,
    #[serde(rename = "Incompatible With", default, deserialize_with = "semicolon_list")]
    pub(crate) incompatible_with: Vec<String>,
    #[serde(rename = "Shelf Life", default)]
    pub(crate) shelf_life: String,
    #[serde(rename = "Storage", default)]
    pub(crate) storage_conditions: String,
    #[serde(rename = "Patch Test", default)]
    pub(crate) patch_test_notes: String,
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<CatalogRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader.deserialize::<CatalogRow>().collect()
}

fn semicolon_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().map(split_list).unwrap_or_default())
}

pub(crate) fn split_list(value: &str) -> Vec<String> {
    value
        .split(';')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
