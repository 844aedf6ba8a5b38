use crate::rng::ParkMiller;
use crate::series::Series;
use configuration::GeneratorSettings;
use core_types::money::{from_f64, one_decimal};
use core_types::{PeriodRecord, YearMonth};
use rust_decimal::prelude::*;

/// Number of months in a generated series.
pub const SERIES_MONTHS: u32 = 12;

/// Produces the reproducible 12-month synthetic series.
///
/// Each month draws eight values from the generator in a fixed order
/// (revenue growth, expense growth, pipeline multiplier, forecast factor,
/// velocity, cash noise, new deals, churn), so changing that order changes
/// every month after it.
#[derive(Debug, Clone)]
pub struct SequenceGenerator {
    settings: GeneratorSettings,
}

impl SequenceGenerator {
    pub fn new(settings: GeneratorSettings) -> Self {
        Self { settings }
    }

    /// Generates 12 consecutive months ending at `anchor`, oldest first.
    pub fn generate(&self, anchor: YearMonth) -> Series {
        let mut rng = ParkMiller::new(self.settings.seed);
        let mut revenue = self.settings.base_revenue.to_f64().unwrap_or_default();
        let mut expenses = self.settings.base_expenses.to_f64().unwrap_or_default();
        let mut pipeline = self.settings.base_pipeline.to_f64().unwrap_or_default();

        let records = (0..SERIES_MONTHS)
            .map(|i| {
                let period = anchor.months_back(SERIES_MONTHS - 1 - i);

                revenue = (revenue * rng.next_in(1.04, 0.06)).round();
                expenses = (expenses * rng.next_in(1.01, 0.04)).round();
                pipeline = (pipeline * rng.next_in(0.95, 0.15)).round();

                let forecast = (revenue * rng.next_in(0.9, 0.2)).round();
                let team_velocity = rng.next_in(60.0, 40.0).round() as u8;
                let cash_balance = (revenue * 3.5 + rng.next_f64() * 100_000.0).round();
                let new_deals = rng.next_in(5.0, 15.0).round() as u32;
                let churn_rate = one_decimal(from_f64(rng.next_in(1.0, 3.0)));

                PeriodRecord {
                    cash_balance: from_f64(cash_balance),
                    pipeline: from_f64(pipeline),
                    forecast: from_f64(forecast),
                    team_velocity,
                    new_deals,
                    churn_rate,
                    ..PeriodRecord::new(period, from_f64(revenue), from_f64(expenses))
                }
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            anchor = %anchor,
            seed = self.settings.seed,
            "Generated synthetic series."
        );
        Series::from_records(anchor, records)
    }
}
