use strum::VariantArray;
use wayfare_catalog::Category;

use crate::draft::DaySelection;
use crate::error::DraftError;

/// Canonical form of a staged day list, produced at commit time.
///
/// Day numbers are re-sequenced to 1..N in list order and every item is
/// canonicalized (missing id generated, absent optional fields already hold
/// their empty defaults, bad costs collapse to zero). The result is an
/// owned, independent list; the staged state it came from is gone.
pub fn normalize_days(days: Vec<DaySelection>) -> Vec<DaySelection> {
    days.into_iter()
        .enumerate()
        .map(|(position, mut day)| {
            day.day_number = position as u32 + 1;
            for category in Category::VARIANTS {
                for item in day.selections_mut(*category) {
                    item.canonicalize();
                }
            }
            day
        })
        .collect()
}

/// Re-run the commit gate over an already committed day list: at least one
/// day, contiguous numbering, and a non-empty first day.
pub fn verify_days(days: &[DaySelection]) -> Result<(), DraftError> {
    if days.is_empty() {
        return Err(DraftError::LastDay);
    }
    for (position, day) in days.iter().enumerate() {
        if day.day_number != position as u32 + 1 {
            return Err(DraftError::OutOfSequence {
                position,
                found: day.day_number,
            });
        }
    }
    if days[0].is_empty() {
        return Err(DraftError::EmptyFirstDay);
    }
    Ok(())
}
