use crate::error::AnalyticsError;
use crate::report::{KpiDatum, KpiSet, KpiUnit};
use configuration::ForecastAccuracyStub;
use core_types::money::{one_decimal, percent_change, round_whole};
use core_types::{format_currency, Direction, PeriodRecord};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// A stateless calculator deriving the headline KPIs from a window of periods.
#[derive(Debug, Clone, Default)]
pub struct KpiEngine {
    forecast_stub: ForecastAccuracyStub,
}

impl KpiEngine {
    pub fn new(forecast_stub: ForecastAccuracyStub) -> Self {
        Self { forecast_stub }
    }

    /// The main entry point for calculating the six KPIs.
    ///
    /// `latest` is the last record of `window` and `previous` the one before it,
    /// or `latest` again when the window holds a single record.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::NotEnoughData` for an empty window.
    pub fn compute(&self, window: &[PeriodRecord]) -> Result<KpiSet, AnalyticsError> {
        let (latest, previous) = match window {
            [] => {
                return Err(AnalyticsError::NotEnoughData(
                    "KPIs need at least one period".to_string(),
                ));
            }
            [only] => (only, only),
            [.., previous, latest] => (latest, previous),
        };

        tracing::debug!(
            periods = window.len(),
            latest = %latest.label,
            "Computing KPIs."
        );

        Ok(KpiSet {
            cash_runway: self.cash_runway(latest, previous),
            mrr: self.mrr(window, latest, previous),
            burn_rate: self.burn_rate(window, latest, previous),
            pipeline: self.pipeline(latest, previous),
            forecast_accuracy: self.forecast_accuracy(window),
            team_velocity: self.team_velocity(latest, previous),
        })
    }

    /// Months of cash left at the current burn.
    fn cash_runway(&self, latest: &PeriodRecord, previous: &PeriodRecord) -> KpiDatum {
        let current = runway_months(latest);
        // The change is taken between the one-decimal runway figures.
        let change = match (current, runway_months(previous)) {
            (Some(now), Some(before)) => percent_change(now, before),
            _ => None,
        };
        KpiDatum {
            value: current.unwrap_or_else(|| one_decimal(Decimal::ZERO)),
            unit: KpiUnit::Months,
            change,
            direction: rising_is_good(change),
            subtitle: format!("{} balance", format_currency(latest.cash_balance)),
        }
    }

    fn mrr(
        &self,
        window: &[PeriodRecord],
        latest: &PeriodRecord,
        previous: &PeriodRecord,
    ) -> KpiDatum {
        let total = saturating_sum(window.iter().map(|r| r.revenue));
        let change = percent_change(latest.revenue, previous.revenue);
        KpiDatum {
            value: latest.revenue,
            unit: KpiUnit::Dollars,
            change,
            direction: rising_is_good(change),
            subtitle: format!("{} total", format_currency(total)),
        }
    }

    /// Average burn over the window; the trend compares the last two months and
    /// counts a falling burn as the favourable direction.
    fn burn_rate(
        &self,
        window: &[PeriodRecord],
        latest: &PeriodRecord,
        previous: &PeriodRecord,
    ) -> KpiDatum {
        let total = saturating_sum(window.iter().map(|r| r.burn_rate));
        let average = total
            .checked_div(Decimal::from(window.len()))
            .map(round_whole)
            .unwrap_or(Decimal::ZERO);
        let change = percent_change(latest.burn_rate, previous.burn_rate);
        KpiDatum {
            value: average,
            unit: KpiUnit::Dollars,
            change,
            direction: falling_is_good(change),
            subtitle: format!("{} net profit", format_currency(latest.profit)),
        }
    }

    fn pipeline(&self, latest: &PeriodRecord, previous: &PeriodRecord) -> KpiDatum {
        let change = percent_change(latest.pipeline, previous.pipeline);
        KpiDatum {
            value: latest.pipeline,
            unit: KpiUnit::Dollars,
            change,
            direction: rising_is_good(change),
            subtitle: format!("{} new deals", latest.new_deals),
        }
    }

    /// Mean of `1 - |forecast - actual| / actual` as a percentage.
    ///
    /// Periods with zero actual revenue carry no accuracy signal and are left
    /// out of the mean, as are periods whose error ratio overflows. Change and
    /// direction come from the configured stub.
    fn forecast_accuracy(&self, window: &[PeriodRecord]) -> KpiDatum {
        let scores: Vec<Decimal> = window
            .iter()
            .filter(|r| !r.actual.is_zero())
            .filter_map(|r| {
                let error = r.forecast.checked_sub(r.actual)?.abs().checked_div(r.actual)?;
                Decimal::ONE.checked_sub(error)
            })
            .collect();

        let value = saturating_sum(scores.iter().copied())
            .checked_div(Decimal::from(scores.len().max(1)))
            .and_then(|mean| mean.checked_mul(dec!(100)))
            .map(one_decimal)
            .unwrap_or_else(|| one_decimal(Decimal::ZERO));

        KpiDatum {
            value,
            unit: KpiUnit::Percent,
            change: Some(self.forecast_stub.change),
            direction: self.forecast_stub.direction,
            subtitle: self.forecast_stub.subtitle.clone(),
        }
    }

    fn team_velocity(&self, latest: &PeriodRecord, previous: &PeriodRecord) -> KpiDatum {
        let change = percent_change(
            Decimal::from(latest.team_velocity),
            Decimal::from(previous.team_velocity),
        );
        KpiDatum {
            value: Decimal::from(latest.team_velocity),
            unit: KpiUnit::Points,
            change,
            direction: rising_is_good(change),
            subtitle: "sprint velocity".to_string(),
        }
    }
}

/// Cash balance over burn rate, one decimal; `None` when nothing is burned
/// or the ratio overflows.
fn runway_months(record: &PeriodRecord) -> Option<Decimal> {
    if record.burn_rate.is_zero() {
        return None;
    }
    record.cash_balance.checked_div(record.burn_rate).map(one_decimal)
}

fn saturating_sum(values: impl Iterator<Item = Decimal>) -> Decimal {
    values.fold(Decimal::ZERO, |acc, v| acc.saturating_add(v))
}

fn rising_is_good(change: Option<Decimal>) -> Direction {
    match change {
        Some(c) if c >= Decimal::ZERO => Direction::Up,
        Some(_) => Direction::Down,
        None => Direction::Flat,
    }
}

fn falling_is_good(change: Option<Decimal>) -> Direction {
    match change {
        Some(c) if c <= Decimal::ZERO => Direction::Up,
        Some(_) => Direction::Down,
        None => Direction::Flat,
    }
}
