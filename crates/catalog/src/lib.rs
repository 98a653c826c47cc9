mod id;
mod item;

pub use id::ItemId;
pub use item::{CatalogItem, Category};

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid catalog item {name:?}: {source}")]
    InvalidItem {
        name: String,
        source: validator::ValidationErrors,
    },

    #[error("malformed catalog document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The pool of selectable items for one planning session, keyed by category.
///
/// The catalog is injected by the host (backend response or static list);
/// nothing here fetches it. Each list is deduplicated by id at ingestion,
/// first occurrence wins.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub attractions: Vec<CatalogItem>,
    #[serde(default)]
    pub restaurants: Vec<CatalogItem>,
    #[serde(default)]
    pub experiences: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new(
        attractions: Vec<CatalogItem>,
        restaurants: Vec<CatalogItem>,
        experiences: Vec<CatalogItem>,
    ) -> Result<Self, CatalogError> {
        Ok(Catalog {
            attractions: ingest(Category::Attractions, attractions)?,
            restaurants: ingest(Category::Restaurants, restaurants)?,
            experiences: ingest(Category::Experiences, experiences)?,
        })
    }

    /// Parse and ingest the JSON shape the backend supplies:
    /// `{"attractions": [...], "restaurants": [...], "experiences": [...]}`.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: Catalog = serde_json::from_str(json)?;
        Self::new(raw.attractions, raw.restaurants, raw.experiences)
    }

    pub fn items(&self, category: Category) -> &[CatalogItem] {
        match category {
            Category::Attractions => &self.attractions,
            Category::Restaurants => &self.restaurants,
            Category::Experiences => &self.experiences,
        }
    }

    pub fn len(&self) -> usize {
        self.attractions.len() + self.restaurants.len() + self.experiences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn ingest(category: Category, items: Vec<CatalogItem>) -> Result<Vec<CatalogItem>, CatalogError> {
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(items.len());

    for mut item in items {
        item.canonicalize();
        item.validate().map_err(|source| CatalogError::InvalidItem {
            name: item.name.clone(),
            source,
        })?;

        if seen.insert(item.id.clone()) {
            out.push(item);
        } else {
            tracing::warn!(%category, id = %item.id, name = %item.name, "dropping duplicate catalog item");
        }
    }

    Ok(out)
}
