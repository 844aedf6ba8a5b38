use core_types::{PeriodRecord, RangeToken};

/// Selects the window of `series` named by `range`.
///
/// `series` must be in chronological order. Short ranges select a suffix of
/// fixed length (`7d` and `30d` the last month, `90d` the last three); `ytd`
/// selects the months of `current_year`, which in a chronological series are
/// also a suffix, falling back to the last month when none match; `all`
/// selects everything.
pub fn filter_range(
    series: &[PeriodRecord],
    range: RangeToken,
    current_year: i32,
) -> &[PeriodRecord] {
    match range {
        RangeToken::Last7Days | RangeToken::Last30Days => last(series, 1),
        RangeToken::Last90Days => last(series, 3),
        RangeToken::Ytd => match series.iter().position(|r| r.year == current_year) {
            Some(start) => &series[start..],
            None => last(series, 1),
        },
        RangeToken::All => series,
    }
}

fn last(series: &[PeriodRecord], count: usize) -> &[PeriodRecord] {
    &series[series.len().saturating_sub(count)..]
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{Month, YearMonth};
    use rust_decimal_macros::dec;

    fn months(anchor: YearMonth, count: u32) -> Vec<PeriodRecord> {
        (0..count)
            .rev()
            .map(|back| PeriodRecord::new(anchor.months_back(back), dec!(100), dec!(50)))
            .collect()
    }

    #[test]
    fn short_ranges_take_fixed_suffixes() {
        let series = months(YearMonth::new(2026, Month::Oct), 12);
        assert_eq!(filter_range(&series, RangeToken::Last7Days, 2026).len(), 1);
        assert_eq!(filter_range(&series, RangeToken::Last30Days, 2026).len(), 1);
        let quarter = filter_range(&series, RangeToken::Last90Days, 2026);
        assert_eq!(quarter.len(), 3);
        assert_eq!(quarter[0].label, "Aug 2026");
        assert_eq!(filter_range(&series, RangeToken::All, 2026).len(), 12);
    }

    #[test]
    fn ytd_keeps_current_year_months() {
        let series = months(YearMonth::new(2026, Month::Oct), 12);
        let ytd = filter_range(&series, RangeToken::Ytd, 2026);
        assert_eq!(ytd.len(), 10);
        assert_eq!(ytd[0].label, "Jan 2026");
    }

    #[test]
    fn ytd_without_matches_falls_back_to_latest() {
        let series = months(YearMonth::new(2025, Month::Dec), 12);
        let ytd = filter_range(&series, RangeToken::Ytd, 2026);
        assert_eq!(ytd.len(), 1);
        assert_eq!(ytd[0].label, "Dec 2025");
    }

    #[test]
    fn short_series_is_not_overrun() {
        let series = months(YearMonth::new(2026, Month::Oct), 2);
        assert_eq!(filter_range(&series, RangeToken::Last90Days, 2026).len(), 2);
        assert!(filter_range(&[], RangeToken::Last7Days, 2026).is_empty());
    }
}
