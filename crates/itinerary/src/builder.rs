use serde::Serialize;
use wayfare_catalog::{CatalogItem, Category};

use crate::draft::{DaySelection, ItineraryDraft};
use crate::error::DraftError;

/// A single-field update on a selected item. Replaces the source system's
/// string-keyed field merge with a typed variant per field.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemField {
    Name(String),
    Image(String),
    Address(String),
    Latitude(String),
    Longitude(String),
    Description(String),
    EstimatedCost(f64),
    Cuisine(String),
}

impl ItemField {
    fn apply(self, item: &mut CatalogItem) {
        match self {
            ItemField::Name(value) => item.name = value,
            ItemField::Image(value) => item.image = value,
            ItemField::Address(value) => item.address = value,
            ItemField::Latitude(value) => item.latitude = value,
            ItemField::Longitude(value) => item.longitude = value,
            ItemField::Description(value) => item.description = value,
            ItemField::EstimatedCost(value) => item.estimated_cost = value,
            ItemField::Cuisine(value) => item.cuisine = value,
        }
    }
}

/// Render-ready rollup of the committed itinerary. Recomputed on every
/// read, never cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItinerarySummary {
    pub total_days: usize,
    pub total_attractions: usize,
    pub total_restaurants: usize,
    pub total_experiences: usize,
    /// Sum of the manually tracked per-day budgets, not of item costs.
    pub total_estimated_cost: f64,
    pub average_daily_spend: f64,
}

/// The day-by-day blueprint section: owns the committed draft after apply
/// and offers the secondary, non-modal edit path plus the display rollups.
#[derive(Debug, Clone)]
pub struct DayBuilder {
    draft: ItineraryDraft,
}

impl DayBuilder {
    pub fn new(days: Vec<DaySelection>) -> Self {
        DayBuilder {
            draft: ItineraryDraft::seeded(days),
        }
    }

    pub fn days(&self) -> &[DaySelection] {
        self.draft.days()
    }

    pub fn into_days(self) -> Vec<DaySelection> {
        self.draft.into_days()
    }

    pub fn active_day(&self) -> usize {
        self.draft.active_day()
    }

    /// Append a blank day (the gesture that re-opens the selection modal on
    /// the new day).
    pub fn add_day(&mut self) -> u32 {
        self.draft.add_day()
    }

    pub fn remove_day(&mut self, index: usize) -> Result<(), DraftError> {
        self.draft.remove_day(index)
    }

    /// Replace the day at `index` wholesale. The stored day keeps the
    /// number matching its position.
    pub fn update_day(&mut self, index: usize, day: DaySelection) -> Result<(), DraftError> {
        *self.draft.day_mut(index)? = day;
        self.draft.renumber();
        Ok(())
    }

    pub fn set_budget(&mut self, day_index: usize, amount: f64) -> Result<(), DraftError> {
        self.draft.day_mut(day_index)?.budget.estimated_cost = amount;
        Ok(())
    }

    /// Append a freshly generated blank item to the day's category set and
    /// return a copy of it.
    pub fn add_item(
        &mut self,
        day_index: usize,
        category: Category,
    ) -> Result<CatalogItem, DraftError> {
        let day = self.draft.day_mut(day_index)?;
        let set = day.selections_mut(category);

        let created = CatalogItem::blank();
        let mut next = set.clone();
        next.push(created.clone());
        *set = next;

        Ok(created)
    }

    /// Merge a single field update into the item at `item_index`, leaving
    /// the other fields untouched.
    pub fn update_item(
        &mut self,
        day_index: usize,
        category: Category,
        item_index: usize,
        change: ItemField,
    ) -> Result<(), DraftError> {
        let day = self.draft.day_mut(day_index)?;
        let set = day.selections_mut(category);
        if item_index >= set.len() {
            return Err(DraftError::ItemOutOfRange {
                day: day_index,
                index: item_index,
            });
        }

        let mut next = set.clone();
        change.apply(&mut next[item_index]);
        *set = next;
        Ok(())
    }

    /// Remove the item at `item_index`. Positions after it shift down;
    /// nothing else is renumbered.
    pub fn remove_item(
        &mut self,
        day_index: usize,
        category: Category,
        item_index: usize,
    ) -> Result<(), DraftError> {
        let day = self.draft.day_mut(day_index)?;
        let set = day.selections_mut(category);
        if item_index >= set.len() {
            return Err(DraftError::ItemOutOfRange {
                day: day_index,
                index: item_index,
            });
        }

        let mut next = set.clone();
        next.remove(item_index);
        *set = next;
        Ok(())
    }

    pub fn total_in_category(&self, category: Category) -> usize {
        self.days()
            .iter()
            .map(|day| day.selections(category).len())
            .sum()
    }

    /// Sum of nested item costs across the whole itinerary. Kept separate
    /// from the stored-budget total in `summary`; the two are allowed to
    /// disagree.
    pub fn derived_cost_total(&self) -> f64 {
        self.days().iter().map(|day| day.estimated_cost()).sum()
    }

    pub fn summary(&self) -> ItinerarySummary {
        let total_days = self.days().len();
        let total_estimated_cost: f64 = self
            .days()
            .iter()
            .map(|day| day.budget.estimated_cost)
            .sum();
        let average_daily_spend = if total_days == 0 {
            0.0
        } else {
            total_estimated_cost / total_days as f64
        };

        ItinerarySummary {
            total_days,
            total_attractions: self.total_in_category(Category::Attractions),
            total_restaurants: self.total_in_category(Category::Restaurants),
            total_experiences: self.total_in_category(Category::Experiences),
            total_estimated_cost,
            average_daily_spend,
        }
    }
}
