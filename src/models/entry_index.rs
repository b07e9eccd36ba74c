//! Date-ordered index over time-off entries.
//!
//! The balance walk consumes entries strictly in date order; this module
//! provides that ordering plus the range and overlap queries the planning
//! tool needs.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::entry::TimeOffEntry;

/// A date-ordered collection of time-off entries.
///
/// Every calendar date an entry touches gets a bucket, so a multi-day entry
/// appears under each of its days and the balance walk charges one standard
/// workday per touched workday.
///
/// # Example
///
/// ```
/// use pto_engine::models::{EntryIndex, TimeOffEntry};
/// use chrono::NaiveDateTime;
///
/// let entry = TimeOffEntry::new(
///     "Vacation",
///     NaiveDateTime::parse_from_str("2025-03-10 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     NaiveDateTime::parse_from_str("2025-03-12 23:59:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     true,
/// )
/// .unwrap();
///
/// let index = EntryIndex::from_entries(vec![entry]);
/// assert_eq!(index.len(), 1);
/// assert_eq!(index.iter_days().count(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EntryIndex {
    entries: Vec<TimeOffEntry>,
    by_date: BTreeMap<NaiveDate, Vec<usize>>,
}

impl EntryIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an index from a snapshot of entries.
    pub fn from_entries(entries: Vec<TimeOffEntry>) -> Self {
        let mut index = Self::new();
        for entry in entries {
            index.insert(entry);
        }
        index
    }

    /// Adds an entry to the index under every calendar date it touches.
    pub fn insert(&mut self, entry: TimeOffEntry) {
        let position = self.entries.len();
        let mut date = entry.start_date();
        let end_date = entry.end_date();
        while date <= end_date {
            self.by_date.entry(date).or_default().push(position);
            match date.succ_opt() {
                Some(next) => date = next,
                None => break,
            }
        }
        self.entries.push(entry);
    }

    /// Returns the number of entries in the index.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the index holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns every entry regardless of date.
    pub fn all_entries(&self) -> &[TimeOffEntry] {
        &self.entries
    }

    /// Returns the entries whose span intersects `[today, +inf)`.
    pub fn future_entries(&self, today: NaiveDate) -> Vec<&TimeOffEntry> {
        self.entries_in_range(today, None)
    }

    /// Returns the entries whose span intersects `[start, end)`.
    ///
    /// `end` of `None` leaves the range unbounded on the right.
    pub fn entries_in_range(&self, start: NaiveDate, end: Option<NaiveDate>) -> Vec<&TimeOffEntry> {
        self.entries
            .iter()
            .filter(|entry| {
                entry.end_date() >= start && end.is_none_or(|end| entry.start_date() < end)
            })
            .collect()
    }

    /// Returns true if the candidate's span overlaps any entry with a
    /// different id.
    ///
    /// Used to block double-booking when adding a new entry; an entry never
    /// conflicts with itself, so edits of an existing entry pass.
    pub fn intersects(&self, candidate: &TimeOffEntry) -> bool {
        self.entries
            .iter()
            .any(|existing| existing.id != candidate.id && existing.overlaps(candidate))
    }

    /// Iterates over `(date, entries touching that date)` in ascending date
    /// order.
    pub fn iter_days(&self) -> impl Iterator<Item = (NaiveDate, Vec<&TimeOffEntry>)> + '_ {
        self.by_date
            .iter()
            .map(|(&date, positions)| (date, positions.iter().map(|&p| &self.entries[p]).collect()))
    }
}

impl FromIterator<TimeOffEntry> for EntryIndex {
    fn from_iter<I: IntoIterator<Item = TimeOffEntry>>(iter: I) -> Self {
        Self::from_entries(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn full_day_entry(date_str: &str) -> TimeOffEntry {
        TimeOffEntry::new(
            "Day off",
            make_datetime(date_str, "00:00:00"),
            make_datetime(date_str, "23:59:00"),
            true,
        )
        .unwrap()
    }

    fn multi_day_entry(start_str: &str, end_str: &str) -> TimeOffEntry {
        TimeOffEntry::new(
            "Trip",
            make_datetime(start_str, "00:00:00"),
            make_datetime(end_str, "23:59:00"),
            true,
        )
        .unwrap()
    }

    /// EI-001: all entries regardless of date
    #[test]
    fn test_all_entries() {
        let index = EntryIndex::from_entries(vec![
            full_day_entry("2025-03-10"),
            full_day_entry("2025-06-20"),
        ]);
        assert_eq!(index.all_entries().len(), 2);
    }

    /// EI-002: future entries intersect [today, +inf)
    #[test]
    fn test_future_entries() {
        let index = EntryIndex::from_entries(vec![
            full_day_entry("2025-03-10"),
            full_day_entry("2025-06-20"),
            multi_day_entry("2025-04-28", "2025-05-02"),
        ]);

        let future = index.future_entries(make_date("2025-05-01"));
        assert_eq!(future.len(), 2);
        assert!(future.iter().all(|e| e.end_date() >= make_date("2025-05-01")));
    }

    /// EI-003: half-open range query
    #[test]
    fn test_entries_in_range() {
        let index = EntryIndex::from_entries(vec![
            full_day_entry("2025-03-10"),
            full_day_entry("2025-03-20"),
            full_day_entry("2025-04-01"),
        ]);

        // End date is exclusive.
        let in_march = index.entries_in_range(make_date("2025-03-01"), Some(make_date("2025-04-01")));
        assert_eq!(in_march.len(), 2);

        let unbounded = index.entries_in_range(make_date("2025-03-15"), None);
        assert_eq!(unbounded.len(), 2);
    }

    #[test]
    fn test_entries_in_range_includes_spanning_entry() {
        let index = EntryIndex::from_entries(vec![multi_day_entry("2025-03-28", "2025-04-03")]);

        // The entry starts before the range but still intersects it.
        let april = index.entries_in_range(make_date("2025-04-01"), Some(make_date("2025-05-01")));
        assert_eq!(april.len(), 1);
    }

    /// EI-004: overlap detection excludes identity
    #[test]
    fn test_intersects() {
        let existing = multi_day_entry("2025-03-10", "2025-03-12");
        let index = EntryIndex::from_entries(vec![existing.clone()]);

        let overlapping = multi_day_entry("2025-03-12", "2025-03-14");
        assert!(index.intersects(&overlapping));

        let disjoint = multi_day_entry("2025-03-20", "2025-03-22");
        assert!(!index.intersects(&disjoint));

        // An entry never conflicts with itself.
        assert!(!index.intersects(&existing));
    }

    /// EI-005: multi-day entries appear under every touched date
    #[test]
    fn test_iter_days_expands_multi_day_entries() {
        let index = EntryIndex::from_entries(vec![
            multi_day_entry("2025-03-10", "2025-03-12"),
            full_day_entry("2025-03-11"),
        ]);

        let days: Vec<(NaiveDate, usize)> = index
            .iter_days()
            .map(|(date, entries)| (date, entries.len()))
            .collect();
        assert_eq!(
            days,
            vec![
                (make_date("2025-03-10"), 1),
                (make_date("2025-03-11"), 2),
                (make_date("2025-03-12"), 1),
            ]
        );
    }

    #[test]
    fn test_iter_days_is_date_ordered() {
        let index = EntryIndex::from_entries(vec![
            full_day_entry("2025-06-20"),
            full_day_entry("2025-01-05"),
            full_day_entry("2025-03-11"),
        ]);

        let dates: Vec<NaiveDate> = index.iter_days().map(|(date, _)| date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
    }

    #[test]
    fn test_empty_index() {
        let index = EntryIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert_eq!(index.iter_days().count(), 0);
        assert!(index.future_entries(make_date("2025-01-01")).is_empty());
    }
}
