//! Taxonomy document model and decoder.
//!
//! Only the fields the table needs are modelled; everything else in the
//! release document (head, version, repo, namespace, intro, links) is ignored.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use crate::error::Result;

/// Parsed taxonomy document: categories in document order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TaxonomyDocument {
    #[serde(default, deserialize_with = "null_items_as_default")]
    pub data: Vec<TaxonomyCategory>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TaxonomyCategory {
    #[serde(rename = "frontMatters", default, deserialize_with = "null_as_default")]
    pub front_matters: FrontMatters,
    /// Entry code -> entry, in document order.
    #[serde(default, deserialize_with = "null_values_as_default")]
    pub data: IndexMap<String, TaxonomyEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FrontMatters {
    #[serde(default, deserialize_with = "null_as_default")]
    pub key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TaxonomyEntry {
    #[serde(default)]
    pub name: Option<String>,
}

impl TaxonomyCategory {
    pub fn key(&self) -> &str {
        &self.front_matters.key
    }
}

impl TaxonomyEntry {
    /// Display label, or `code` when the entry carries no name.
    pub fn label<'a>(&'a self, code: &'a str) -> &'a str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => code,
        }
    }
}

impl TaxonomyDocument {
    /// Decode the raw document.
    ///
    /// Accepts the published release shape (`{"data": [...]}`) as well as a
    /// bare array of categories. Missing or `null` values (fields, entries,
    /// categories, the whole document) become empty values; syntax errors and
    /// type mismatches are `MalformedData`.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let first = bytes.iter().find(|b| !b.is_ascii_whitespace());

        let document = if first == Some(&b'[') {
            let items: Vec<Option<TaxonomyCategory>> = serde_json::from_slice(bytes)?;
            Self {
                data: items.into_iter().map(Option::unwrap_or_default).collect(),
            }
        } else {
            serde_json::from_slice::<Option<Self>>(bytes)?.unwrap_or_default()
        };

        tracing::info!(categories = document.data.len(), "parsed taxonomy document");
        Ok(document)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_items_as_default<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let items = Option::<Vec<Option<T>>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(items.into_iter().map(Option::unwrap_or_default).collect())
}

fn null_values_as_default<'de, D, T>(
    deserializer: D,
) -> std::result::Result<IndexMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let values =
        Option::<IndexMap<String, Option<T>>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(values
        .into_iter()
        .map(|(code, value)| (code, value.unwrap_or_default()))
        .collect())
}
