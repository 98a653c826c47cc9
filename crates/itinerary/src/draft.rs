use serde::{Deserialize, Serialize};
use wayfare_catalog::{CatalogItem, Category, ItemId};

use crate::error::DraftError;

/// Manually tracked spending target for one day.
///
/// Not recomputed when selections change; the live sum of item costs is a
/// separate path (`DaySelection::estimated_cost`).
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayBudget {
    #[serde(default)]
    pub estimated_cost: f64,
}

/// One day of the itinerary: a 1-based position plus the user's selections
/// across the three catalog categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySelection {
    pub day_number: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub locations: String,
    #[serde(default)]
    pub budget: DayBudget,
    #[serde(default)]
    pub attractions: Vec<CatalogItem>,
    #[serde(default)]
    pub restaurants: Vec<CatalogItem>,
    #[serde(default)]
    pub experiences: Vec<CatalogItem>,
}

impl DaySelection {
    pub fn blank(day_number: u32) -> Self {
        DaySelection {
            day_number,
            title: String::new(),
            locations: String::new(),
            budget: DayBudget::default(),
            attractions: Vec::new(),
            restaurants: Vec::new(),
            experiences: Vec::new(),
        }
    }

    pub fn selections(&self, category: Category) -> &[CatalogItem] {
        match category {
            Category::Attractions => &self.attractions,
            Category::Restaurants => &self.restaurants,
            Category::Experiences => &self.experiences,
        }
    }

    pub(crate) fn selections_mut(&mut self, category: Category) -> &mut Vec<CatalogItem> {
        match category {
            Category::Attractions => &mut self.attractions,
            Category::Restaurants => &mut self.restaurants,
            Category::Experiences => &mut self.experiences,
        }
    }

    /// True when no item is selected in any of the three categories.
    pub fn is_empty(&self) -> bool {
        self.attractions.is_empty() && self.restaurants.is_empty() && self.experiences.is_empty()
    }

    pub fn selection_count(&self) -> usize {
        self.attractions.len() + self.restaurants.len() + self.experiences.len()
    }

    pub fn contains(&self, category: Category, id: &ItemId) -> bool {
        self.selections(category).iter().any(|item| &item.id == id)
    }

    pub fn category_cost(&self, category: Category) -> f64 {
        self.selections(category)
            .iter()
            .map(|item| item.estimated_cost)
            .sum()
    }

    /// Live cost of the day, derived from the selected items. This is what
    /// the selection view displays; it is independent of `budget`.
    pub fn estimated_cost(&self) -> f64 {
        self.attractions
            .iter()
            .chain(&self.restaurants)
            .chain(&self.experiences)
            .map(|item| item.estimated_cost)
            .sum()
    }
}

/// Ordered list of days plus the pointer to the day currently displayed.
///
/// Owns the numbering invariant: after every operation the day at position
/// `i` carries `day_number == i + 1`, and the list never becomes empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryDraft {
    days: Vec<DaySelection>,
    active_day: usize,
}

impl Default for ItineraryDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl ItineraryDraft {
    /// A fresh draft: one blank day, displayed.
    pub fn new() -> Self {
        ItineraryDraft {
            days: vec![DaySelection::blank(1)],
            active_day: 0,
        }
    }

    /// Re-seed from previously committed days. Selections are taken
    /// verbatim, nothing is renumbered or recomputed; an empty list falls
    /// back to a fresh draft.
    pub fn seeded(days: Vec<DaySelection>) -> Self {
        if days.is_empty() {
            return Self::new();
        }
        ItineraryDraft {
            days,
            active_day: 0,
        }
    }

    pub fn days(&self) -> &[DaySelection] {
        &self.days
    }

    pub fn into_days(self) -> Vec<DaySelection> {
        self.days
    }

    pub fn day(&self, index: usize) -> Option<&DaySelection> {
        self.days.get(index)
    }

    pub(crate) fn day_mut(&mut self, index: usize) -> Result<&mut DaySelection, DraftError> {
        self.days
            .get_mut(index)
            .ok_or(DraftError::DayOutOfRange(index))
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn active_day(&self) -> usize {
        self.active_day
    }

    pub fn active(&self) -> &DaySelection {
        &self.days[self.active_day]
    }

    pub fn set_active_day(&mut self, index: usize) -> Result<(), DraftError> {
        if index >= self.days.len() {
            return Err(DraftError::DayOutOfRange(index));
        }
        self.active_day = index;
        Ok(())
    }

    /// Append a blank day and display it. Returns the new day number.
    pub fn add_day(&mut self) -> u32 {
        let day_number = self.days.len() as u32 + 1;
        self.days.push(DaySelection::blank(day_number));
        self.active_day = self.days.len() - 1;
        day_number
    }

    /// Remove the day at `index` and renumber the rest.
    ///
    /// Refused when the draft holds a single day; the caller gets an error
    /// to surface, not a silent no-op. The active pointer follows the
    /// removal: the removed day's predecessor becomes active if the removed
    /// day was displayed, later pointers shift down by one.
    pub fn remove_day(&mut self, index: usize) -> Result<(), DraftError> {
        if self.days.len() == 1 {
            tracing::warn!("refusing to remove the only day of the itinerary");
            return Err(DraftError::LastDay);
        }
        if index >= self.days.len() {
            return Err(DraftError::DayOutOfRange(index));
        }

        self.days.remove(index);
        self.renumber();

        if self.active_day == index {
            self.active_day = index.saturating_sub(1);
        } else if self.active_day > index {
            self.active_day -= 1;
        }

        Ok(())
    }

    /// Select `item` for the day's category set, or deselect it when an item
    /// with the same id is already there. The set is rebuilt and swapped in
    /// whole, so a reader never observes a half-applied toggle.
    ///
    /// Returns true when the item ended up selected.
    pub fn toggle_item(
        &mut self,
        day_index: usize,
        category: Category,
        item: CatalogItem,
    ) -> Result<bool, DraftError> {
        let day = self.day_mut(day_index)?;
        let set = day.selections_mut(category);

        let (next, selected) = if set.iter().any(|existing| existing.id == item.id) {
            let next: Vec<CatalogItem> = set
                .iter()
                .filter(|existing| existing.id != item.id)
                .cloned()
                .collect();
            (next, false)
        } else {
            let mut next = set.clone();
            next.push(item);
            (next, true)
        };

        *set = next;
        Ok(selected)
    }

    /// Pure query: is an item with this id currently selected there?
    pub fn is_selected(&self, day_index: usize, category: Category, id: &ItemId) -> bool {
        self.days
            .get(day_index)
            .map(|day| day.contains(category, id))
            .unwrap_or(false)
    }

    pub fn set_title(
        &mut self,
        day_index: usize,
        title: impl Into<String>,
    ) -> Result<(), DraftError> {
        self.day_mut(day_index)?.title = title.into();
        Ok(())
    }

    pub fn set_locations(
        &mut self,
        day_index: usize,
        locations: impl Into<String>,
    ) -> Result<(), DraftError> {
        self.day_mut(day_index)?.locations = locations.into();
        Ok(())
    }

    pub(crate) fn renumber(&mut self) {
        for (position, day) in self.days.iter_mut().enumerate() {
            day.day_number = position as u32 + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, name: &str, cost: f64) -> CatalogItem {
        let mut item = CatalogItem::new(id, name);
        item.estimated_cost = cost;
        item
    }

    fn assert_contiguous(draft: &ItineraryDraft) {
        for (i, day) in draft.days().iter().enumerate() {
            assert_eq!(day.day_number, i as u32 + 1);
        }
    }

    #[test]
    fn new_draft_has_one_blank_day() {
        let draft = ItineraryDraft::new();
        assert_eq!(draft.len(), 1);
        assert_eq!(draft.days()[0].day_number, 1);
        assert!(draft.days()[0].is_empty());
        assert_eq!(draft.active_day(), 0);
    }

    #[test]
    fn add_day_appends_and_moves_pointer() {
        let mut draft = ItineraryDraft::new();
        assert_eq!(draft.add_day(), 2);
        assert_eq!(draft.add_day(), 3);
        assert_eq!(draft.len(), 3);
        assert_eq!(draft.active_day(), 2);
        assert_contiguous(&draft);
    }

    #[test]
    fn numbering_stays_contiguous_under_mixed_operations() {
        let mut draft = ItineraryDraft::new();
        draft.add_day();
        draft.add_day();
        draft.add_day();
        assert_contiguous(&draft);

        draft.remove_day(1).unwrap();
        assert_contiguous(&draft);

        draft.add_day();
        draft.remove_day(0).unwrap();
        assert_contiguous(&draft);

        draft.remove_day(draft.len() - 1).unwrap();
        assert_contiguous(&draft);
    }

    #[test]
    fn remove_last_remaining_day_is_refused() {
        let mut draft = ItineraryDraft::new();
        draft
            .toggle_item(0, Category::Attractions, item(1, "A", 0.0))
            .unwrap();
        let before = draft.clone();

        assert_eq!(draft.remove_day(0), Err(DraftError::LastDay));
        assert_eq!(draft, before);
    }

    #[test]
    fn remove_out_of_range_is_refused() {
        let mut draft = ItineraryDraft::new();
        draft.add_day();
        assert_eq!(draft.remove_day(5), Err(DraftError::DayOutOfRange(5)));
        assert_eq!(draft.len(), 2);
        assert!(draft.day(5).is_none());
    }

    #[test]
    fn removing_active_day_moves_pointer_to_predecessor() {
        let mut draft = ItineraryDraft::new();
        draft.add_day();
        draft.add_day();
        draft.set_active_day(1).unwrap();

        draft.remove_day(1).unwrap();
        assert_eq!(draft.active_day(), 0);
        assert_eq!(draft.active().day_number, 1);
    }

    #[test]
    fn removing_first_active_day_keeps_pointer_at_zero() {
        let mut draft = ItineraryDraft::new();
        draft.add_day();
        draft.set_active_day(0).unwrap();

        draft.remove_day(0).unwrap();
        assert_eq!(draft.active_day(), 0);
    }

    #[test]
    fn removing_earlier_day_shifts_pointer_down() {
        let mut draft = ItineraryDraft::new();
        draft.add_day();
        draft.add_day();
        assert_eq!(draft.active_day(), 2);

        draft.remove_day(0).unwrap();
        assert_eq!(draft.active_day(), 1);
    }

    #[test]
    fn removing_later_day_leaves_pointer_alone() {
        let mut draft = ItineraryDraft::new();
        draft.add_day();
        draft.add_day();
        draft.set_active_day(0).unwrap();

        draft.remove_day(2).unwrap();
        assert_eq!(draft.active_day(), 0);
    }

    #[test]
    fn toggle_selects_then_deselects() {
        let mut draft = ItineraryDraft::new();
        let museum = item(1, "Museum", 12.0);

        let selected = draft
            .toggle_item(0, Category::Attractions, museum.clone())
            .unwrap();
        assert!(selected);
        assert!(draft.is_selected(0, Category::Attractions, &museum.id));

        let selected = draft
            .toggle_item(0, Category::Attractions, museum.clone())
            .unwrap();
        assert!(!selected);
        assert!(!draft.is_selected(0, Category::Attractions, &museum.id));
        assert!(draft.days()[0].attractions.is_empty());
    }

    #[test]
    fn toggle_twice_restores_original_set() {
        let mut draft = ItineraryDraft::new();
        for i in 0..3 {
            draft
                .toggle_item(0, Category::Restaurants, item(i, "R", 5.0))
                .unwrap();
        }
        let before = draft.days()[0].restaurants.clone();

        let extra = item(99, "Extra", 8.0);
        draft
            .toggle_item(0, Category::Restaurants, extra.clone())
            .unwrap();
        draft.toggle_item(0, Category::Restaurants, extra).unwrap();

        assert_eq!(draft.days()[0].restaurants, before);
    }

    #[test]
    fn toggle_keeps_categories_independent() {
        let mut draft = ItineraryDraft::new();
        let shared = item(1, "Same id", 0.0);

        draft
            .toggle_item(0, Category::Attractions, shared.clone())
            .unwrap();
        draft
            .toggle_item(0, Category::Experiences, shared.clone())
            .unwrap();

        assert!(draft.is_selected(0, Category::Attractions, &shared.id));
        assert!(draft.is_selected(0, Category::Experiences, &shared.id));
        assert!(!draft.is_selected(0, Category::Restaurants, &shared.id));
    }

    #[test]
    fn derived_costs_sum_per_category_and_per_day() {
        let mut draft = ItineraryDraft::new();
        draft
            .toggle_item(0, Category::Attractions, item(1, "A", 10.0))
            .unwrap();
        draft
            .toggle_item(0, Category::Attractions, item(2, "B", 2.5))
            .unwrap();
        draft
            .toggle_item(0, Category::Restaurants, item(3, "C", 30.0))
            .unwrap();

        let day = &draft.days()[0];
        assert_eq!(day.selection_count(), 3);
        assert_eq!(day.category_cost(Category::Attractions), 12.5);
        assert_eq!(day.category_cost(Category::Experiences), 0.0);
        assert_eq!(day.estimated_cost(), 42.5);
        assert_eq!(day.budget.estimated_cost, 0.0);
    }

    #[test]
    fn seeded_preserves_days_verbatim() {
        let mut source = DaySelection::blank(1);
        source.attractions.push(item(1, "A", 1.0));
        source.attractions.push(item(2, "B", 2.0));
        source.title = "Old town".to_owned();

        let draft = ItineraryDraft::seeded(vec![source.clone()]);
        assert_eq!(draft.days(), &[source]);
    }

    #[test]
    fn seeded_from_empty_list_falls_back_to_blank_draft() {
        let draft = ItineraryDraft::seeded(Vec::new());
        assert_eq!(draft.len(), 1);
        assert!(draft.days()[0].is_empty());
    }
}
