use configuration::GeneratorSettings;
use core_types::{Month, RangeToken, YearMonth};
use proptest::prelude::*;
use series::{filter_range, SequenceGenerator};

fn arb_anchor() -> impl Strategy<Value = YearMonth> {
    (2000i32..2100, 0usize..12)
        .prop_map(|(year, month)| YearMonth::new(year, Month::from_index0(month)))
}

fn arb_range() -> impl Strategy<Value = RangeToken> {
    prop_oneof![
        Just(RangeToken::Last7Days),
        Just(RangeToken::Last30Days),
        Just(RangeToken::Last90Days),
        Just(RangeToken::Ytd),
        Just(RangeToken::All),
    ]
}

proptest! {
    #[test]
    fn window_is_a_non_empty_suffix(
        anchor in arb_anchor(),
        range in arb_range(),
        seed in 1u64..100_000,
    ) {
        let settings = GeneratorSettings { seed, ..GeneratorSettings::default() };
        let series = SequenceGenerator::new(settings).generate(anchor);
        let records = series.records();
        let window = series.window(range);

        prop_assert!(!window.is_empty());
        prop_assert!(window.len() <= 12);
        prop_assert_eq!(window, &records[records.len() - window.len()..]);
        if range == RangeToken::Ytd && window.len() > 1 {
            prop_assert!(window.iter().all(|r| r.year == anchor.year));
        }
    }

    #[test]
    fn unknown_tokens_select_everything(token in "[a-z0-9]{0,6}") {
        prop_assume!(!["7d", "30d", "90d", "ytd"].contains(&token.as_str()));
        let anchor = YearMonth::new(2026, Month::Oct);
        let series = SequenceGenerator::new(GeneratorSettings::default()).generate(anchor);
        let window = filter_range(series.records(), RangeToken::parse_lenient(&token), anchor.year);
        prop_assert_eq!(window.len(), 12);
    }

    #[test]
    fn generation_is_deterministic(anchor in arb_anchor(), seed in 1u64..100_000) {
        let settings = GeneratorSettings { seed, ..GeneratorSettings::default() };
        let a = SequenceGenerator::new(settings.clone()).generate(anchor);
        let b = SequenceGenerator::new(settings).generate(anchor);
        prop_assert_eq!(a, b);
    }
}
