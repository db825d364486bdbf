//! Currency and date-range record filtering.

use super::record::TournamentRecord;
use chrono::{NaiveDate, NaiveDateTime};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordFilter {
    pub currency: Option<String>,
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
}

impl RecordFilter {
    pub fn is_empty(&self) -> bool {
        self.currency().is_none() && self.min_date.is_none() && self.max_date.is_none()
    }

    fn currency(&self) -> Option<&str> {
        self.currency.as_deref().filter(|c| !c.is_empty())
    }

    pub fn matches(&self, record: &TournamentRecord) -> bool {
        if self.currency().is_some_and(|c| record.currency != c) {
            return false;
        }
        // Both bounds sit at midnight: a record late on the max-date day is
        // past the boundary and excluded.
        if self.min_date.is_some_and(|min| record.date < midnight(min)) {
            return false;
        }
        if self.max_date.is_some_and(|max| record.date > midnight(max)) {
            return false;
        }
        true
    }
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(chrono::NaiveTime::MIN)
}

/// Stable filter; the input order is preserved.
pub fn filter_records(records: &[TournamentRecord], filter: &RecordFilter) -> Vec<TournamentRecord> {
    records
        .iter()
        .filter(|r| filter.matches(r))
        .cloned()
        .collect()
}
