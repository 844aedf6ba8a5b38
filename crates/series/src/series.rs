use crate::filter::filter_range;
use core_types::{PeriodRecord, RangeToken, YearMonth};
use rust_decimal::Decimal;

/// The canonical, in-memory period series.
///
/// This is the only owner of the `PeriodRecord`s for the lifetime of a
/// dashboard. Records are only mutated through [`Series::apply_override`],
/// which keeps `label`, `month` and `year` stable.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    anchor: YearMonth,
    records: Vec<PeriodRecord>,
}

impl Series {
    /// Wraps records that are already in chronological order and end at `anchor`.
    pub fn from_records(anchor: YearMonth, records: Vec<PeriodRecord>) -> Self {
        Self { anchor, records }
    }

    /// The month the series ends at. Its year is the "current year" for `ytd`.
    pub fn anchor(&self) -> YearMonth {
        self.anchor
    }

    pub fn records(&self) -> &[PeriodRecord] {
        &self.records
    }

    /// The most recent record, regardless of any range selection.
    pub fn latest(&self) -> Option<&PeriodRecord> {
        self.records.last()
    }

    /// The sub-sequence selected by `range`.
    pub fn window(&self, range: RangeToken) -> &[PeriodRecord] {
        filter_range(&self.records, range, self.anchor.year)
    }

    pub fn find(&self, label: &str) -> Option<&PeriodRecord> {
        self.records.iter().find(|r| r.label == label)
    }

    /// Overwrites the financial fields of the first record whose label matches.
    ///
    /// Returns `false`, changing nothing, when no record carries `label`.
    pub fn apply_override(&mut self, label: &str, revenue: Decimal, expenses: Decimal) -> bool {
        match self.records.iter_mut().find(|r| r.label == label) {
            Some(record) => {
                record.apply_financials(revenue, expenses);
                tracing::debug!(label = %label, %revenue, %expenses, "Applied override to period.");
                true
            }
            None => {
                tracing::debug!(label = %label, "No period matches override label.");
                false
            }
        }
    }
}
