use serde::Deserialize;

use crate::error::DatasetError;
use crate::models::{SpellDataset, SpellRecord};

const BUNDLED_SPELLS: &str = include_str!("../../assets/5e-spells.json");

#[derive(Deserialize)]
struct RawDataset {
    #[serde(default)]
    spells: Vec<serde_json::Value>,
}

/// Decodes a `{ "spells": [...] }` document. Records missing a required
/// field are skipped with a warning.
pub fn parse_spell_dataset(json: &str) -> Result<SpellDataset, DatasetError> {
    let raw: RawDataset = serde_json::from_str(json)?;
    let total = raw.spells.len();

    let spells: Vec<SpellRecord> = raw
        .spells
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(spell) => Some(spell),
            Err(e) => {
                tracing::warn!(index, "skipping malformed spell record: {}", e);
                None
            }
        })
        .collect();

    if spells.len() != total {
        tracing::warn!(skipped = total - spells.len(), "some spell records were skipped");
    }

    Ok(SpellDataset { spells })
}

/// The dataset shipped with the binary. An undecodable document yields no spells.
pub fn load_bundled_spells() -> Vec<SpellRecord> {
    match parse_spell_dataset(BUNDLED_SPELLS) {
        Ok(dataset) => {
            tracing::info!(count = dataset.spells.len(), "loaded bundled spells");
            dataset.spells
        }
        Err(e) => {
            tracing::error!("error parsing bundled spells: {}. Starting with an empty table.", e);
            Vec::new()
        }
    }
}
