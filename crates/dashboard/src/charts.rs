use analytics::StageBucket;
use core_types::PeriodRecord;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Serialize, Serializer};

/// One named series of a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub name: &'static str,
    #[serde(serialize_with = "as_floats")]
    pub values: Vec<Decimal>,
}

fn as_floats<S: Serializer>(values: &[Decimal], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(values.iter().map(|v| v.to_f64().unwrap_or_default()))
}

/// Renderer-neutral chart input: x-axis labels plus aligned datasets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

fn labels(window: &[PeriodRecord]) -> Vec<String> {
    window.iter().map(|r| r.label.clone()).collect()
}

fn dataset(
    window: &[PeriodRecord],
    name: &'static str,
    field: impl Fn(&PeriodRecord) -> Decimal,
) -> Dataset {
    Dataset {
        name,
        values: window.iter().map(field).collect(),
    }
}

pub fn revenue_vs_expenses(window: &[PeriodRecord]) -> ChartData {
    ChartData {
        labels: labels(window),
        datasets: vec![
            dataset(window, "Revenue", |r| r.revenue),
            dataset(window, "Expenses", |r| r.expenses),
        ],
    }
}

pub fn actual_vs_forecast(window: &[PeriodRecord]) -> ChartData {
    ChartData {
        labels: labels(window),
        datasets: vec![
            dataset(window, "Actual", |r| r.actual),
            dataset(window, "Forecast", |r| r.forecast),
        ],
    }
}

pub fn burn_vs_revenue(window: &[PeriodRecord]) -> ChartData {
    ChartData {
        labels: labels(window),
        datasets: vec![
            dataset(window, "Burn Rate", |r| r.burn_rate),
            dataset(window, "Revenue", |r| r.revenue),
        ],
    }
}

pub fn pipeline_chart(buckets: &[StageBucket]) -> ChartData {
    ChartData {
        labels: buckets.iter().map(|b| b.stage.to_string()).collect(),
        datasets: vec![Dataset {
            name: "Pipeline Value",
            values: buckets.iter().map(|b| b.value).collect(),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{Month, YearMonth};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn window() -> Vec<PeriodRecord> {
        let anchor = YearMonth::new(2026, Month::Feb);
        vec![
            PeriodRecord::new(anchor.months_back(1), dec!(100), dec!(60)),
            PeriodRecord::new(anchor, dec!(120), dec!(70)),
        ]
    }

    #[test]
    fn labels_follow_the_window() {
        let chart = revenue_vs_expenses(&window());
        assert_eq!(chart.labels, vec!["Jan 2026", "Feb 2026"]);
        assert_eq!(chart.datasets[0].name, "Revenue");
        assert_eq!(chart.datasets[0].values, vec![dec!(100), dec!(120)]);
        assert_eq!(chart.datasets[1].values, vec![dec!(60), dec!(70)]);
    }

    #[test]
    fn burn_chart_pairs_burn_with_revenue() {
        let chart = burn_vs_revenue(&window());
        let names: Vec<&str> = chart.datasets.iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["Burn Rate", "Revenue"]);
        assert_eq!(chart.datasets[0].values, vec![dec!(60), dec!(70)]);
    }

    #[test]
    fn empty_window_gives_empty_chart() {
        let chart = actual_vs_forecast(&[]);
        assert!(chart.labels.is_empty());
        assert!(chart.datasets.iter().all(|d| d.values.is_empty()));
    }

    #[test]
    fn serializes_values_as_numbers() {
        let json = serde_json::to_value(revenue_vs_expenses(&window())).unwrap();
        assert_eq!(json["datasets"][0]["values"][1], 120.0);
    }
}
