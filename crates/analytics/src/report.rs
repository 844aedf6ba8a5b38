use core_types::Direction;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// What a KPI value is measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum KpiUnit {
    #[serde(rename = "months")]
    Months,
    #[serde(rename = "$")]
    Dollars,
    #[serde(rename = "%")]
    Percent,
    #[serde(rename = "pts")]
    Points,
}

/// One computed headline metric. Recomputed on every query, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiDatum {
    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,
    pub unit: KpiUnit,
    /// Percentage change against the previous period, one decimal.
    /// `None` when the previous value is zero and the change is undefined.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub change: Option<Decimal>,
    pub direction: Direction,
    pub subtitle: String,
}

impl KpiDatum {
    /// The change as one-decimal text, or `n/a` when it is undefined.
    pub fn change_text(&self) -> String {
        match self.change {
            Some(change) => format!("{change:.1}"),
            None => "n/a".to_string(),
        }
    }
}

/// Identifies one of the six headline metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KpiKind {
    CashRunway,
    Mrr,
    BurnRate,
    Pipeline,
    ForecastAccuracy,
    TeamVelocity,
}

impl KpiKind {
    pub fn title(self) -> &'static str {
        match self {
            KpiKind::CashRunway => "Cash Runway",
            KpiKind::Mrr => "Monthly Recurring Revenue",
            KpiKind::BurnRate => "Burn Rate",
            KpiKind::Pipeline => "Pipeline",
            KpiKind::ForecastAccuracy => "Forecast Accuracy",
            KpiKind::TeamVelocity => "Team Velocity",
        }
    }
}

impl fmt::Display for KpiKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// The six headline metrics over one filtered window.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSet {
    pub cash_runway: KpiDatum,
    pub mrr: KpiDatum,
    pub burn_rate: KpiDatum,
    pub pipeline: KpiDatum,
    pub forecast_accuracy: KpiDatum,
    pub team_velocity: KpiDatum,
}

impl KpiSet {
    /// The metrics in display order.
    pub fn entries(&self) -> [(KpiKind, &KpiDatum); 6] {
        [
            (KpiKind::CashRunway, &self.cash_runway),
            (KpiKind::Mrr, &self.mrr),
            (KpiKind::BurnRate, &self.burn_rate),
            (KpiKind::Pipeline, &self.pipeline),
            (KpiKind::ForecastAccuracy, &self.forecast_accuracy),
            (KpiKind::TeamVelocity, &self.team_velocity),
        ]
    }
}
