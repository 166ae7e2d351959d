use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// Technology stack of a service. Order follows the dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Technologies {
    #[serde(deserialize_with = "null_as_empty")]
    pub languages: Vec<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub framework: Vec<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub db: Vec<String>,
}

/// One entry of the service inventory.
///
/// Absent fields decode to empty values; only the overall shape is checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Service {
    pub id: i64,
    pub title_en: String,
    pub title_fr: String,
    pub description_en: String,
    pub description_fr: String,
    pub owner: String,
    pub email_contact: String,
    pub git: String,
    #[serde(deserialize_with = "null_as_default")]
    pub technologies: Technologies,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_default<'de, D>(deserializer: D) -> Result<Technologies, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Technologies>::deserialize(deserializer)?.unwrap_or_default())
}
