use afcfta_core::ReferenceYear;
use afcfta_tariff::{phase_out_rate, DismantlingCategory, PhaseOutSchedule};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn any_category() -> impl Strategy<Value = DismantlingCategory> {
    prop_oneof![
        Just(DismantlingCategory::A),
        Just(DismantlingCategory::B),
        Just(DismantlingCategory::C),
        Just(DismantlingCategory::D),
    ]
}

fn base_rate() -> impl Strategy<Value = Decimal> {
    (1i64..10_000).prop_map(|bp| Decimal::new(bp, 2))
}

proptest! {
    #[test]
    fn rate_never_increases_and_never_goes_negative(
        base in base_rate(),
        category in any_category(),
        is_ldc in any::<bool>(),
        years in 0u32..40,
    ) {
        let now = phase_out_rate(base, category, is_ldc, years).rate;
        let later = phase_out_rate(base, category, is_ldc, years + 1).rate;
        prop_assert!(now >= Decimal::ZERO);
        prop_assert!(later <= now);
        prop_assert!(now <= base);
    }

    #[test]
    fn windowed_categories_reach_zero(
        base in base_rate(),
        extra in 0u32..20,
    ) {
        prop_assert_eq!(phase_out_rate(base, DismantlingCategory::A, false, extra).rate, Decimal::ZERO);
        prop_assert_eq!(phase_out_rate(base, DismantlingCategory::B, false, 5 + extra).rate, Decimal::ZERO);
        prop_assert_eq!(phase_out_rate(base, DismantlingCategory::C, false, 10 + extra).rate, Decimal::ZERO);
        prop_assert_eq!(phase_out_rate(base, DismantlingCategory::D, true, 13 + extra).rate, Decimal::ZERO);
    }

    #[test]
    fn projection_is_non_increasing(
        base in base_rate(),
        category in any_category(),
        is_ldc in any::<bool>(),
        from in 2015i32..2040,
        span in 0i32..20,
    ) {
        let schedule = PhaseOutSchedule::for_category(category, is_ldc);
        let points = schedule
            .project(base, ReferenceYear::new(from), ReferenceYear::new(from + span))
            .unwrap();
        prop_assert_eq!(points.len(), usize::try_from(span + 1).unwrap());
        for pair in points.windows(2) {
            prop_assert!(pair[1].rate <= pair[0].rate);
        }
    }
}
