//! Daily page-view counters.

use chrono::NaiveDate;

/// Aggregate view counter for one calendar date.
///
/// There is exactly one row per date; the date doubles as the primary key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day {
    pub id: NaiveDate,
    pub views: i64,
}

impl Day {
    pub fn new(id: NaiveDate, views: i64) -> Self {
        Self { id, views }
    }

    /// Date label used on chart axes (`YYYY-MM-DD`).
    pub fn label(&self) -> String {
        self.id.format("%Y-%m-%d").to_string()
    }
}

/// Result of recording a single visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisitOutcome {
    /// Views for the day after this visit was counted.
    pub views: i64,
    /// True when this was the first visit from the IP on that day.
    pub first_visit: bool,
}

/// Per-day summary combining the view counter with distinct visitors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySummary {
    pub day: NaiveDate,
    pub views: i64,
    pub unique_visitors: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_label() {
        let day = Day::new(NaiveDate::from_ymd_opt(2024, 1, 9).unwrap(), 3);

        assert_eq!(day.label(), "2024-01-09");
        assert_eq!(day.views, 3);
    }
}
