use wayfare_catalog::{CatalogItem, Category, ItemId};

use crate::draft::{DaySelection, ItineraryDraft};
use crate::error::DraftError;
use crate::normalize::normalize_days;

/// The host side of a planning session.
///
/// Exactly one of these callbacks fires per close gesture. A host that does
/// not wire the navigate-back escape hatch gets the cancel fallback.
pub trait PlanningHost {
    /// A successful apply: the fully normalized day list, owned by the host
    /// from here on.
    fn on_apply(&mut self, days: Vec<DaySelection>);

    /// Close requested while the first day already has selections.
    fn on_cancel(&mut self);

    /// Close requested while the first day is still empty. The user is
    /// being redirected away from a mandatory first-day plan rather than
    /// merely dismissing it.
    fn on_navigate_back(&mut self) {
        self.on_cancel();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Editing,
    Closed,
}

/// Stages edits to an itinerary draft behind an explicit Apply/Cancel
/// gesture.
///
/// All mutations act on the staged copy only; the committed draft the host
/// holds is untouched until `apply` hands over a normalized replacement.
/// Once closed, a session is spent: every operation returns
/// `DraftError::SessionClosed`.
#[derive(Debug)]
pub struct PlanningSession {
    draft: ItineraryDraft,
    state: SessionState,
}

impl PlanningSession {
    /// Open a session seeded from previously committed days (preserved
    /// verbatim), or from a single blank day when there are none.
    pub fn open(initial_days: Vec<DaySelection>) -> Self {
        PlanningSession {
            draft: ItineraryDraft::seeded(initial_days),
            state: SessionState::Editing,
        }
    }

    pub fn is_open(&self) -> bool {
        self.state == SessionState::Editing
    }

    pub fn days(&self) -> &[DaySelection] {
        self.draft.days()
    }

    pub fn active_day(&self) -> usize {
        self.draft.active_day()
    }

    /// True while the first staged day has no selection in any category.
    pub fn first_day_empty(&self) -> bool {
        self.draft.days()[0].is_empty()
    }

    /// Footer affordance rule: the explicit Cancel button is shown only
    /// while day 1 is still empty. Once day 1 has data the affordance
    /// disappears and the only ways out are Apply or the header Close.
    pub fn cancel_visible(&self) -> bool {
        self.is_open() && self.first_day_empty()
    }

    pub fn add_day(&mut self) -> Result<u32, DraftError> {
        self.ensure_open()?;
        Ok(self.draft.add_day())
    }

    pub fn remove_day(&mut self, index: usize) -> Result<(), DraftError> {
        self.ensure_open()?;
        self.draft.remove_day(index)
    }

    pub fn set_active_day(&mut self, index: usize) -> Result<(), DraftError> {
        self.ensure_open()?;
        self.draft.set_active_day(index)
    }

    pub fn toggle_item(
        &mut self,
        day_index: usize,
        category: Category,
        item: CatalogItem,
    ) -> Result<bool, DraftError> {
        self.ensure_open()?;
        self.draft.toggle_item(day_index, category, item)
    }

    pub fn is_selected(&self, day_index: usize, category: Category, id: &ItemId) -> bool {
        self.draft.is_selected(day_index, category, id)
    }

    pub fn set_title(
        &mut self,
        day_index: usize,
        title: impl Into<String>,
    ) -> Result<(), DraftError> {
        self.ensure_open()?;
        self.draft.set_title(day_index, title)
    }

    pub fn set_locations(
        &mut self,
        day_index: usize,
        locations: impl Into<String>,
    ) -> Result<(), DraftError> {
        self.ensure_open()?;
        self.draft.set_locations(day_index, locations)
    }

    /// Commit the staged days.
    ///
    /// Refused while day 1 is empty: the session stays open, nothing
    /// changes, and the error doubles as the user-facing message. On
    /// success the staged list is normalized and handed to the host, and
    /// the session closes; the staged copy is abandoned rather than
    /// aliased.
    pub fn apply<H: PlanningHost>(&mut self, host: &mut H) -> Result<(), DraftError> {
        self.ensure_open()?;
        if self.first_day_empty() {
            tracing::warn!("apply refused: day 1 has no selections");
            return Err(DraftError::EmptyFirstDay);
        }

        let staged = std::mem::take(&mut self.draft);
        self.state = SessionState::Closed;
        host.on_apply(normalize_days(staged.into_days()));
        Ok(())
    }

    /// Cancel or header-Close. The routing is a deliberate, explicit
    /// branch: with data on day 1 the host's cancel path fires; with day 1
    /// still empty the navigate-back escape hatch fires instead.
    pub fn close<H: PlanningHost>(&mut self, host: &mut H) -> Result<(), DraftError> {
        self.ensure_open()?;
        let navigate_back = self.first_day_empty();

        self.draft = ItineraryDraft::new();
        self.state = SessionState::Closed;

        if navigate_back {
            host.on_navigate_back();
        } else {
            host.on_cancel();
        }
        Ok(())
    }

    fn ensure_open(&self) -> Result<(), DraftError> {
        if self.is_open() {
            Ok(())
        } else {
            Err(DraftError::SessionClosed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingHost {
        applied: Vec<Vec<DaySelection>>,
        cancelled: usize,
        navigated_back: usize,
    }

    impl PlanningHost for RecordingHost {
        fn on_apply(&mut self, days: Vec<DaySelection>) {
            self.applied.push(days);
        }

        fn on_cancel(&mut self) {
            self.cancelled += 1;
        }

        fn on_navigate_back(&mut self) {
            self.navigated_back += 1;
        }
    }

    /// A host that leaves the navigate-back hatch unwired.
    #[derive(Default)]
    struct MinimalHost {
        cancelled: usize,
    }

    impl PlanningHost for MinimalHost {
        fn on_apply(&mut self, _days: Vec<DaySelection>) {}

        fn on_cancel(&mut self) {
            self.cancelled += 1;
        }
    }

    fn museum() -> CatalogItem {
        CatalogItem::new(7, "Museum")
    }

    #[test]
    fn apply_is_refused_while_first_day_is_empty() {
        let mut session = PlanningSession::open(Vec::new());
        let mut host = RecordingHost::default();

        assert_eq!(session.apply(&mut host), Err(DraftError::EmptyFirstDay));
        assert!(session.is_open());
        assert!(host.applied.is_empty());
    }

    #[test]
    fn apply_commits_once_day_one_has_a_selection() {
        let mut session = PlanningSession::open(Vec::new());
        let mut host = RecordingHost::default();

        session
            .toggle_item(0, Category::Attractions, museum())
            .unwrap();
        session.apply(&mut host).unwrap();

        assert!(!session.is_open());
        assert_eq!(host.applied.len(), 1);
        assert_eq!(host.applied[0][0].attractions[0].name, "Museum");
        assert_eq!(host.cancelled, 0);
        assert_eq!(host.navigated_back, 0);
    }

    #[test]
    fn selections_on_later_days_do_not_satisfy_the_gate() {
        let mut session = PlanningSession::open(Vec::new());
        let mut host = RecordingHost::default();

        session.add_day().unwrap();
        session
            .toggle_item(1, Category::Experiences, museum())
            .unwrap();

        assert_eq!(session.apply(&mut host), Err(DraftError::EmptyFirstDay));
        assert!(host.applied.is_empty());
    }

    #[test]
    fn close_with_empty_first_day_navigates_back() {
        let mut session = PlanningSession::open(Vec::new());
        let mut host = RecordingHost::default();

        session.close(&mut host).unwrap();

        assert_eq!(host.navigated_back, 1);
        assert_eq!(host.cancelled, 0);
        assert!(!session.is_open());
    }

    #[test]
    fn close_with_populated_first_day_cancels() {
        let mut session = PlanningSession::open(Vec::new());
        let mut host = RecordingHost::default();

        session
            .toggle_item(0, Category::Restaurants, museum())
            .unwrap();
        session.close(&mut host).unwrap();

        assert_eq!(host.cancelled, 1);
        assert_eq!(host.navigated_back, 0);
    }

    #[test]
    fn navigate_back_falls_back_to_cancel_when_unwired() {
        let mut session = PlanningSession::open(Vec::new());
        let mut host = MinimalHost::default();

        session.close(&mut host).unwrap();
        assert_eq!(host.cancelled, 1);
    }

    #[test]
    fn cancel_affordance_hides_once_day_one_has_data() {
        let mut session = PlanningSession::open(Vec::new());
        assert!(session.cancel_visible());

        session
            .toggle_item(0, Category::Attractions, museum())
            .unwrap();
        assert!(!session.cancel_visible());

        session
            .toggle_item(0, Category::Attractions, museum())
            .unwrap();
        assert!(session.cancel_visible());
    }

    #[test]
    fn closed_session_refuses_every_operation() {
        let mut session = PlanningSession::open(Vec::new());
        let mut host = RecordingHost::default();
        session.close(&mut host).unwrap();

        assert_eq!(session.add_day(), Err(DraftError::SessionClosed));
        assert_eq!(session.remove_day(0), Err(DraftError::SessionClosed));
        assert_eq!(
            session.toggle_item(0, Category::Attractions, museum()),
            Err(DraftError::SessionClosed)
        );
        assert_eq!(session.apply(&mut host), Err(DraftError::SessionClosed));
        assert_eq!(session.close(&mut host), Err(DraftError::SessionClosed));
        assert!(!session.cancel_visible());
    }

    #[test]
    fn reopening_preserves_committed_days_verbatim() {
        let mut first = DaySelection::blank(1);
        first.attractions.push(CatalogItem::new(1, "A"));
        first.attractions.push(CatalogItem::new(2, "B"));
        let committed = vec![first.clone()];

        let session = PlanningSession::open(committed);
        assert_eq!(session.days(), &[first]);
    }
}
