use thiserror::Error;

/// Validation conditions raised by draft mutations.
///
/// All of these surface synchronously at the point of the attempted
/// mutation and leave state untouched; none of them panic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("an itinerary must keep at least one day")]
    LastDay,

    #[error("plan at least one attraction, restaurant, or experience for day 1")]
    EmptyFirstDay,

    #[error("day index {0} is out of range")]
    DayOutOfRange(usize),

    #[error("item index {index} is out of range for day {day}")]
    ItemOutOfRange { day: usize, index: usize },

    #[error("day {found} is out of sequence at position {position}")]
    OutOfSequence { position: usize, found: u32 },

    #[error("the planning session is already closed")]
    SessionClosed,
}
