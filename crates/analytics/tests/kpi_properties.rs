use analytics::KpiEngine;
use core_types::money::one_decimal;
use core_types::{Direction, Month, PeriodRecord, YearMonth};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn pair(previous: (u32, u32, u32), latest: (u32, u32, u32)) -> [PeriodRecord; 2] {
    let anchor = YearMonth::new(2026, Month::Jun);
    let build = |back: u32, (revenue, expenses, pipeline): (u32, u32, u32)| PeriodRecord {
        pipeline: Decimal::from(pipeline),
        cash_balance: Decimal::from(revenue) * Decimal::from(3),
        forecast: Decimal::from(revenue),
        ..PeriodRecord::new(
            anchor.months_back(back),
            Decimal::from(revenue),
            Decimal::from(expenses),
        )
    };
    [build(1, previous), build(0, latest)]
}

fn expected_change(new: u32, old: u32) -> Decimal {
    let (new, old) = (Decimal::from(new), Decimal::from(old));
    one_decimal((new - old) / old * Decimal::ONE_HUNDRED)
}

proptest! {
    #[test]
    fn deltas_follow_relative_change(
        previous in (1u32..10_000_000, 1u32..10_000_000, 1u32..10_000_000),
        latest in (1u32..10_000_000, 1u32..10_000_000, 1u32..10_000_000),
    ) {
        let kpis = KpiEngine::default().compute(&pair(previous, latest)).unwrap();

        prop_assert_eq!(kpis.mrr.change, Some(expected_change(latest.0, previous.0)));
        prop_assert_eq!(kpis.burn_rate.change, Some(expected_change(latest.1, previous.1)));
        prop_assert_eq!(kpis.pipeline.change, Some(expected_change(latest.2, previous.2)));
    }

    #[test]
    fn burn_direction_opposes_revenue_convention(
        previous in (1u32..10_000_000, 1u32..10_000_000, 1u32..10_000_000),
        latest in (1u32..10_000_000, 1u32..10_000_000, 1u32..10_000_000),
    ) {
        let kpis = KpiEngine::default().compute(&pair(previous, latest)).unwrap();
        let change = kpis.burn_rate.change.unwrap();
        let expected = if change <= Decimal::ZERO { Direction::Up } else { Direction::Down };
        prop_assert_eq!(kpis.burn_rate.direction, expected);
    }
}
