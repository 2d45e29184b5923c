//! Category deduplication and label resolution.

use indexmap::map::Entry;
use indexmap::IndexMap;

use crate::model::TaxonomyDocument;

/// Category key -> (entry code -> effective label), in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedTable {
    categories: IndexMap<String, IndexMap<String, String>>,
}

impl NormalizedTable {
    /// Build the table from a decoded document.
    ///
    /// The first category seen for a key wins; later categories with the same
    /// key are skipped without visiting their entries.
    pub fn from_document(document: &TaxonomyDocument) -> Self {
        let mut categories: IndexMap<String, IndexMap<String, String>> = IndexMap::new();

        for category in &document.data {
            let slot = match categories.entry(category.key().to_string()) {
                Entry::Occupied(_) => {
                    tracing::debug!(category = category.key(), "skipping duplicate category");
                    continue;
                }
                Entry::Vacant(slot) => slot,
            };

            let labels: IndexMap<String, String> = category
                .data
                .iter()
                .map(|(code, entry)| (code.clone(), entry.label(code).to_string()))
                .collect();

            tracing::info!(category = category.key(), tags = labels.len(), "normalized category");
            slot.insert(labels);
        }

        let table = Self { categories };
        tracing::info!(
            categories = table.category_count(),
            tags = table.tag_count(),
            "normalized taxonomy"
        );
        table
    }

    pub fn get(&self, category: &str) -> Option<&IndexMap<String, String>> {
        self.categories.get(category)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexMap<String, String>)> {
        self.categories.iter().map(|(key, labels)| (key.as_str(), labels))
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn tag_count(&self) -> usize {
        self.categories.values().map(IndexMap::len).sum()
    }
}

impl<K, C, L> FromIterator<(K, C)> for NormalizedTable
where
    K: Into<String>,
    C: IntoIterator<Item = (L, L)>,
    L: Into<String>,
{
    /// Assemble a table directly; later duplicates of a key are dropped, as in
    /// [`NormalizedTable::from_document`].
    fn from_iter<I: IntoIterator<Item = (K, C)>>(iter: I) -> Self {
        let mut categories: IndexMap<String, IndexMap<String, String>> = IndexMap::new();
        for (key, labels) in iter {
            if let Entry::Vacant(slot) = categories.entry(key.into()) {
                slot.insert(
                    labels
                        .into_iter()
                        .map(|(code, label)| (code.into(), label.into()))
                        .collect(),
                );
            }
        }
        Self { categories }
    }
}
