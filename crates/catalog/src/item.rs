use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::Validate;

use crate::ItemId;

/// The three selection categories a day of the itinerary is built from.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
pub enum Category {
    #[default]
    Attractions,
    Restaurants,
    Experiences,
}

/// One selectable entry from the destination catalog.
///
/// Catalog items are reference data: they are copied into a day's selection
/// and never mutated in place. Optional feed fields canonicalize to empty
/// strings (or zero cost) when they deserialize, so later comparison and
/// rendering sites never deal with absent values.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CatalogItem {
    #[serde(default)]
    pub id: ItemId,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub latitude: String,
    #[serde(default)]
    pub longitude: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "estimated cost must not be negative"))]
    pub estimated_cost: f64,
    /// Only meaningful for restaurants; empty elsewhere.
    #[serde(default)]
    pub cuisine: String,
}

impl CatalogItem {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        CatalogItem {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// A freshly minted blank item, as created by the day builder's inline
    /// "add attraction/restaurant/experience" path.
    pub fn blank() -> Self {
        CatalogItem {
            id: ItemId::generate(),
            ..Default::default()
        }
    }

    /// Fill the fields a partial feed entry may lack: a missing id gets a
    /// generated one, a non-finite or negative cost collapses to zero.
    pub fn canonicalize(&mut self) {
        if self.id.is_empty() {
            self.id = ItemId::generate();
        }
        if !self.estimated_cost.is_finite() || self.estimated_cost < 0.0 {
            self.estimated_cost = 0.0;
        }
    }
}
