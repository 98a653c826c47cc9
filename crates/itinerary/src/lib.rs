pub mod builder;
pub mod draft;
pub mod error;
pub mod normalize;
pub mod session;

pub use wayfare_catalog::{CatalogItem, Category, ItemId};

pub use builder::{DayBuilder, ItemField, ItinerarySummary};
pub use draft::{DayBudget, DaySelection, ItineraryDraft};
pub use error::DraftError;
pub use normalize::{normalize_days, verify_days};
pub use session::{PlanningHost, PlanningSession};
