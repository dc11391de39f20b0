use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A portfolio project as stored in the `projects` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub title: String,
    #[serde(rename = "des", default)]
    pub description: Option<String>,
    /// Background reference kept on the row; the card draws its own placeholder.
    #[serde(default)]
    pub img: Option<String>,
    #[serde(rename = "projectLink")]
    pub link: String,
    #[serde(default, deserialize_with = "icons_or_empty")]
    pub icons: Vec<String>,
    /// The embedded `projectImages` row. One per project.
    #[serde(rename = "projectImages", default, deserialize_with = "single_cover")]
    pub cover: Option<ProjectImage>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectImage {
    pub url: String,
    #[serde(rename = "project_Id")]
    pub project_id: i64,
}

/// Anything that is not a JSON array reads as no icons. Non-string
/// entries inside an array are dropped.
fn icons_or_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// PostgREST embeds a relation as an object when it can prove it is
/// one-to-one and as an array otherwise; take the first row either way.
fn single_cover<'de, D>(deserializer: D) -> Result<Option<ProjectImage>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let first = match value {
        Value::Array(items) => items.into_iter().next(),
        Value::Null => None,
        other => Some(other),
    };

    first
        .map(serde_json::from_value)
        .transpose()
        .map_err(serde::de::Error::custom)
}
