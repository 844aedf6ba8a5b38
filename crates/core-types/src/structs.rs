use crate::enums::{Month, Productivity};
use crate::error::CoreError;
use crate::money::{margin_pct, one_decimal, parse_amount, parse_year};
use chrono::{DateTime, Datelike, Local, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A calendar month of a specific year. Orders chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: Month,
}

impl YearMonth {
    pub fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }

    /// The month containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        let month = Month::from_index0(date.month0() as usize);
        Self::new(date.year(), month)
    }

    /// The current month in the host's local time zone.
    pub fn current() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    /// Steps `count` months back in time, crossing year boundaries as needed.
    pub fn months_back(self, count: u32) -> Self {
        let total = self.year as i64 * 12 + self.month.index0() as i64 - count as i64;
        let year = total.div_euclid(12) as i32;
        let month = Month::from_index0(total.rem_euclid(12) as usize);
        Self::new(year, month)
    }

    /// The `"<month> <year>"` key used to match records and entries.
    pub fn label(&self) -> String {
        format!("{} {}", self.month, self.year)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month.index0() + 1)
    }
}

impl FromStr for YearMonth {
    type Err = CoreError;

    /// Parses `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            CoreError::Validation(
                "anchor".to_string(),
                format!("`{s}` is not in YYYY-MM form"),
            )
        };
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year = parse_year(year).map_err(|_| invalid())?;
        let month = month
            .parse::<u32>()
            .ok()
            .and_then(Month::from_number)
            .ok_or_else(invalid)?;
        Ok(Self::new(year, month))
    }
}

/// One synthetic or user-overridden month of business metrics.
///
/// `burn_rate` mirrors `expenses` and `actual` mirrors `revenue`; both pairs are
/// only ever written together through [`PeriodRecord::apply_financials`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodRecord {
    pub month: Month,
    pub year: i32,
    pub label: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub revenue: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub expenses: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub profit: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub margin: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub cash_balance: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub burn_rate: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub pipeline: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub forecast: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub actual: Decimal,
    pub team_velocity: u8,
    pub new_deals: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub churn_rate: Decimal,
}

impl PeriodRecord {
    /// A record for `period` carrying only revenue and expenses; every other
    /// metric starts at zero.
    pub fn new(period: YearMonth, revenue: Decimal, expenses: Decimal) -> Self {
        let mut record = Self {
            month: period.month,
            year: period.year,
            label: period.label(),
            revenue: Decimal::ZERO,
            expenses: Decimal::ZERO,
            profit: Decimal::ZERO,
            margin: one_decimal(Decimal::ZERO),
            cash_balance: Decimal::ZERO,
            burn_rate: Decimal::ZERO,
            pipeline: Decimal::ZERO,
            forecast: Decimal::ZERO,
            actual: Decimal::ZERO,
            team_velocity: 0,
            new_deals: 0,
            churn_rate: one_decimal(Decimal::ZERO),
        };
        record.apply_financials(revenue, expenses);
        record
    }

    pub fn period(&self) -> YearMonth {
        YearMonth::new(self.year, self.month)
    }

    /// Overwrites revenue and expenses together with every field derived from them.
    ///
    /// `month`, `year` and `label` are left untouched.
    pub fn apply_financials(&mut self, revenue: Decimal, expenses: Decimal) {
        self.revenue = revenue;
        self.actual = revenue;
        self.expenses = expenses;
        self.burn_rate = expenses;
        self.profit = revenue - expenses;
        self.margin = margin_pct(revenue, expenses);
    }
}

/// Opaque identifier of a custom entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// A fresh time-ordered id.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated contents of a submitted entry form, before it is given an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    pub month: Month,
    pub year: i32,
    pub revenue: Decimal,
    pub expenditure: Decimal,
}

impl NewEntry {
    /// Parses raw form fields. Every field is validated; the first failure is returned.
    pub fn parse(
        month: &str,
        year: &str,
        revenue: &str,
        expenditure: &str,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            month: month.parse()?,
            year: parse_year(year)?,
            revenue: parse_amount("revenue", revenue)?,
            expenditure: parse_amount("expenditure", expenditure)?,
        })
    }

    pub fn period(&self) -> YearMonth {
        YearMonth::new(self.year, self.month)
    }

    pub fn label(&self) -> String {
        self.period().label()
    }
}

/// A user-submitted monthly record, persisted durably.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomEntry {
    pub id: EntryId,
    pub month: Month,
    pub year: i32,
    #[serde(with = "crate::money::json_number")]
    pub revenue: Decimal,
    #[serde(with = "crate::money::json_number")]
    pub expenditure: Decimal,
    #[serde(with = "crate::money::json_number")]
    pub profit: Decimal,
    pub added_at: DateTime<Utc>,
}

impl CustomEntry {
    pub fn from_new(id: EntryId, entry: NewEntry, added_at: DateTime<Utc>) -> Self {
        Self {
            id,
            month: entry.month,
            year: entry.year,
            revenue: entry.revenue,
            expenditure: entry.expenditure,
            profit: entry.revenue - entry.expenditure,
            added_at,
        }
    }

    pub fn label(&self) -> String {
        YearMonth::new(self.year, self.month).label()
    }
}

/// A static roster row describing one team member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamMember {
    pub member: &'static str,
    pub role: &'static str,
    pub velocity: u8,
    pub tasks: u32,
    pub status: Productivity,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn months_back_crosses_year_boundary() {
        let anchor = YearMonth::new(2026, Month::Feb);
        assert_eq!(anchor.months_back(0), anchor);
        assert_eq!(anchor.months_back(2), YearMonth::new(2025, Month::Dec));
        assert_eq!(anchor.months_back(11), YearMonth::new(2025, Month::Mar));
        assert_eq!(anchor.months_back(14), YearMonth::new(2024, Month::Dec));
    }

    #[test]
    fn year_month_parses_and_labels() {
        let ym: YearMonth = "2026-10".parse().unwrap();
        assert_eq!(ym, YearMonth::new(2026, Month::Oct));
        assert_eq!(ym.label(), "Oct 2026");
        assert_eq!(ym.to_string(), "2026-10");
        assert!("2026-13".parse::<YearMonth>().is_err());
        assert!("October".parse::<YearMonth>().is_err());
    }

    #[test]
    fn apply_financials_keeps_aliases_in_step() {
        let mut record =
            PeriodRecord::new(YearMonth::new(2026, Month::Dec), dec!(100000), dec!(70000));
        record.apply_financials(dec!(120000), dec!(75000));
        assert_eq!(record.actual, dec!(120000));
        assert_eq!(record.burn_rate, dec!(75000));
        assert_eq!(record.profit, dec!(45000));
        assert_eq!(record.margin.to_string(), "37.5");
        assert_eq!(record.label, "Dec 2026");
    }

    #[test]
    fn period_record_json_shape() {
        let record = PeriodRecord::new(YearMonth::new(2026, Month::Jan), dec!(1000), dec!(750));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["label"], "Jan 2026");
        assert_eq!(json["month"], "Jan");
        assert_eq!(json["burnRate"], 750.0);
        assert_eq!(json["margin"], "25.0");
        assert_eq!(json["teamVelocity"], 0);
    }

    #[test]
    fn new_entry_rejects_bad_fields() {
        assert!(NewEntry::parse("Dec", "2026", "120000", "75000").is_ok());
        assert!(NewEntry::parse("Dek", "2026", "1", "1").is_err());
        assert!(NewEntry::parse("Dec", "20x6", "1", "1").is_err());
        assert!(NewEntry::parse("Dec", "2026", "1", "-5").is_err());
    }

    #[test]
    fn custom_entry_json_round_trip() {
        let entry = CustomEntry::from_new(
            EntryId::from("1712345678901"),
            NewEntry::parse("Mar", "2026", "1250.5", "900").unwrap(),
            "2026-03-14T09:30:00.123Z".parse().unwrap(),
        );
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"addedAt\":\"2026-03-14T09:30:00.123Z\""));
        assert!(json.contains("\"revenue\":1250.5"));
        let back: CustomEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn generated_ids_are_unique() {
        let a = EntryId::generate();
        let b = EntryId::generate();
        assert_ne!(a, b);
    }
}
