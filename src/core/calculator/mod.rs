//! Duration/validity calculator for listing drafts.
//!
//! Pure functions only: no I/O, no state. Every call with the same draft
//! yields the same advisories.

pub mod advisory;
pub mod date_range;
pub mod shift;

pub use advisory::{Advisory, Level};
pub use date_range::evaluate_date_range;
pub use shift::evaluate_shift_duration;

use crate::models::draft::ListingDraft;
use serde::Serialize;

/// Both derived summaries for a draft. Each is absent until its pair of
/// fields is filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DraftFeedback {
    pub date_range: Option<Advisory>,
    pub shift: Option<Advisory>,
}

impl DraftFeedback {
    pub fn has_warnings(&self) -> bool {
        self.iter().any(Advisory::is_warning)
    }

    pub fn is_empty(&self) -> bool {
        self.date_range.is_none() && self.shift.is_none()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Advisory> {
        self.date_range.iter().chain(self.shift.iter())
    }
}

pub fn evaluate_draft(draft: &ListingDraft) -> DraftFeedback {
    DraftFeedback {
        date_range: evaluate_date_range(draft.start_date, draft.end_date),
        shift: evaluate_shift_duration(draft.shift_start, draft.shift_end, draft.break_hours),
    }
}
