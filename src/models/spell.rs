use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// A field that is stored either as a table code or as free text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CodeOrText {
    Code(i64),
    Text(String),
}

impl CodeOrText {
    pub fn code(&self) -> Option<i64> {
        match self {
            CodeOrText::Code(code) => Some(*code),
            CodeOrText::Text(_) => None,
        }
    }

    /// Codes go through `lookup`; text is shown as is.
    pub fn display_with(&self, lookup: fn(i64) -> &'static str) -> String {
        match self {
            CodeOrText::Code(code) => lookup(*code).to_string(),
            CodeOrText::Text(text) => text.clone(),
        }
    }
}

/// One spell as stored in the bundled JSON document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellRecord {
    pub name: String,
    pub level: i64,
    pub school: i64,
    pub casting_time: i64,
    #[serde(default, deserialize_with = "lenient")]
    pub duration: Option<CodeOrText>,
    #[serde(default, deserialize_with = "lenient")]
    pub range: Option<CodeOrText>,
    #[serde(default, deserialize_with = "lenient")]
    pub area: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub attack: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub save: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub damage_and_effect: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub ritual: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub concentration: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub verbal: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub somatic: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub material: Option<String>,
    pub source: i64,
    #[serde(default, deserialize_with = "lenient")]
    pub details: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub link: Option<String>,
}

/// Records that survived parsing of a `{ "spells": [ ... ] }` document.
#[derive(Debug, Clone, Default)]
pub struct SpellDataset {
    pub spells: Vec<SpellRecord>,
}

/// Optional fields with the wrong JSON type are dropped instead of failing
/// the whole record.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}
