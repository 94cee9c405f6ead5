use std::cmp::Ordering;

use chrono::{Datelike, NaiveDate};

use crate::{
    entities::{
        ActivityEntry, ActivityFilter, ActivityMonthGroup, Expense, Income, ProjectPhoto,
        SortDirection, SortField, SortState, TaskAssignment,
    },
    presentation::activity_fmt,
};

/// Merges the four record kinds into one feed, baseline-sorted by write time
/// (`created_at`) descending. This is the order before any user-selected
/// filter or sort is applied.
pub(crate) fn merge_entries(
    assignments: Vec<TaskAssignment>,
    expenses: Vec<Expense>,
    incomes: Vec<Income>,
    photos: Vec<ProjectPhoto>,
) -> Vec<ActivityEntry> {
    let mut entries: Vec<ActivityEntry> = assignments
        .into_iter()
        .map(ActivityEntry::from)
        .chain(expenses.into_iter().map(ActivityEntry::from))
        .chain(incomes.into_iter().map(ActivityEntry::from))
        .chain(photos.into_iter().map(ActivityEntry::from))
        .collect();
    entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    entries
}

/// Applies the composable filter conditions; every set condition must hold.
pub(crate) fn apply_filter(
    entries: Vec<ActivityEntry>,
    filter: &ActivityFilter,
) -> Vec<ActivityEntry> {
    let needle = filter
        .search
        .as_ref()
        .map(|s| s.to_lowercase())
        .filter(|s| !s.is_empty());
    entries
        .into_iter()
        .filter(|entry| {
            if let Some(kind) = filter.kind {
                if entry.kind() != kind {
                    return false;
                }
            }
            if let Some(staff_id) = filter.staff_id.as_deref() {
                // Photos carry no staff and drop out here.
                if entry.staff_id() != Some(staff_id) {
                    return false;
                }
            }
            if let Some(status) = filter.status.as_deref() {
                // Only expense/income entries have a status; the rest always
                // pass.
                if let Some(label) = entry.status_label() {
                    if !label.eq_ignore_ascii_case(status) {
                        return false;
                    }
                }
            }
            if let Some(needle) = needle.as_deref() {
                if !activity_fmt::search_terms(entry)
                    .iter()
                    .any(|term| term.to_lowercase().contains(needle))
                {
                    return false;
                }
            }
            true
        })
        .collect()
}

/// User-selected sort on top of the baseline order. Numeric for amount,
/// ISO-lexicographic for date (equivalent to chronological since dates are
/// "YYYY-MM-DD"), case-sensitive string comparison otherwise.
pub(crate) fn apply_sort(entries: &mut [ActivityEntry], sort: &SortState) {
    entries.sort_by(|a, b| {
        let ordering = match sort.field {
            SortField::Date => a.date.cmp(&b.date),
            SortField::Amount => a
                .amount()
                .unwrap_or(0.0)
                .partial_cmp(&b.amount().unwrap_or(0.0))
                .unwrap_or(Ordering::Equal),
            SortField::StaffName => a.staff_name().unwrap_or("").cmp(b.staff_name().unwrap_or("")),
            SortField::ProjectName => a
                .project_name
                .as_deref()
                .unwrap_or("")
                .cmp(b.project_name.as_deref().unwrap_or("")),
        };
        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

fn month_of(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
        .expect("copying a NaiveDate with overridden day=1 should never fail")
}

/// Buckets an already filtered+sorted feed by calendar month of the business
/// date. Buckets are ordered by month descending; bucket contents keep the
/// incoming order. The bucket for `today`'s month starts expanded.
pub(crate) fn group_by_month(
    entries: Vec<ActivityEntry>,
    today: NaiveDate,
) -> Vec<ActivityMonthGroup> {
    let mut groups: Vec<ActivityMonthGroup> = Vec::new();
    for entry in entries {
        let month = month_of(entry.date);
        match groups.iter_mut().find(|g| g.month == month) {
            Some(group) => group.entries.push(entry),
            None => groups.push(ActivityMonthGroup {
                month,
                label: activity_fmt::month_label(month),
                expanded: month == month_of(today),
                entries: vec![entry],
            }),
        }
    }
    groups.sort_by(|a, b| b.month.cmp(&a.month));
    groups
}
