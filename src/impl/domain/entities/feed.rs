use chrono::NaiveDate;

use super::activity::{ActivityEntry, ActivityKind};

/// Composable ledger filter; all set conditions must hold.
#[derive(Debug, Clone, Default)]
pub struct ActivityFilter {
    /// Pre-filters every collection read server-side.
    pub project_id: Option<String>,
    pub kind: Option<ActivityKind>,
    /// When set, photo entries are excluded (photos carry no staff).
    pub staff_id: Option<String>,
    /// Matched against expense/income status labels; assignments and photos
    /// always pass.
    pub status: Option<String>,
    /// Case-insensitive free-text search.
    pub search: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Date,
    Amount,
    StaffName,
    ProjectName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// User-selected sort. Selecting the active field flips direction; selecting
/// a different field resets to descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(field: SortField) -> Self {
        SortState {
            field,
            direction: SortDirection::Descending,
        }
    }

    pub fn select(&mut self, field: SortField) {
        if self.field == field {
            self.direction = match self.direction {
                SortDirection::Ascending => SortDirection::Descending,
                SortDirection::Descending => SortDirection::Ascending,
            };
        } else {
            self.field = field;
            self.direction = SortDirection::Descending;
        }
    }
}

/// One calendar-month bucket of the grouped ledger. Bucket contents preserve
/// the sort order that was already applied to the flat feed.
#[derive(Debug, Clone)]
pub struct ActivityMonthGroup {
    /// First day of the bucket's month.
    pub month: NaiveDate,
    /// Display label, e.g. "Mar 2026".
    pub label: String,
    /// Whether the bucket starts expanded (true for the current month).
    pub expanded: bool,
    pub entries: Vec<ActivityEntry>,
}
