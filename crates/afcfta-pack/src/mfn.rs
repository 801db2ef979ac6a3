//! MFN base-rate and destination-adjustment tables.
//!
//! Base rates are indicative applied MFN averages per HS chapter, in
//! percent. Chapters without a row resolve to the resolver's default.
//! Adjustment factors scale the base rate for destinations whose national
//! schedule departs from the regional common external tariff.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Applied MFN average by chapter, in percent.
pub fn mfn_base_rates() -> Vec<(u8, Decimal)> {
    vec![
        (1, dec!(15)),
        (2, dec!(20)),
        (3, dec!(15)),
        (4, dec!(20)),
        (6, dec!(10)),
        (7, dec!(20)),
        (8, dec!(20)),
        (9, dec!(15)),
        (10, dec!(10)),
        (11, dec!(15)),
        (12, dec!(5)),
        (15, dec!(15)),
        (16, dec!(20)),
        (17, dec!(20)),
        (18, dec!(15)),
        (19, dec!(20)),
        (20, dec!(20)),
        (21, dec!(20)),
        (22, dec!(25)),
        (23, dec!(5)),
        (24, dec!(30)),
        (25, dec!(5)),
        (26, dec!(5)),
        (27, dec!(5)),
        (28, dec!(5)),
        (29, dec!(5)),
        (30, dec!(5)),
        (31, dec!(5)),
        (32, dec!(10)),
        (33, dec!(20)),
        (34, dec!(15)),
        (38, dec!(10)),
        (39, dec!(10)),
        (40, dec!(10)),
        (41, dec!(5)),
        (42, dec!(20)),
        (44, dec!(10)),
        (48, dec!(10)),
        (52, dec!(20)),
        (61, dec!(35)),
        (62, dec!(35)),
        (63, dec!(35)),
        (64, dec!(30)),
        (69, dec!(20)),
        (70, dec!(15)),
        (72, dec!(5)),
        (73, dec!(10)),
        (76, dec!(5)),
        (84, dec!(5)),
        (85, dec!(10)),
        (87, dec!(25)),
        (90, dec!(5)),
        (94, dec!(20)),
        (95, dec!(20)),
        (96, dec!(20)),
    ]
}

/// Destination adjustment factors, keyed by ISO 3166-1 alpha-3 code.
pub fn mfn_adjustments() -> Vec<(&'static str, Decimal)> {
    vec![
        ("DZA", dec!(1.10)),
        ("EGY", dec!(1.10)),
        ("ETH", dec!(1.15)),
        ("NGA", dec!(1.05)),
        ("MAR", dec!(0.95)),
        ("ZAF", dec!(0.90)),
        ("MUS", dec!(0.50)),
        ("RWA", dec!(0.95)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_rates_are_non_negative_and_unique() {
        let rates = mfn_base_rates();
        let mut seen = std::collections::HashSet::new();
        for (chapter, rate) in &rates {
            assert!(*rate >= Decimal::ZERO, "chapter {chapter}");
            assert!(seen.insert(*chapter), "duplicate chapter {chapter}");
        }
    }

    #[test]
    fn live_animals_base_rate_is_fifteen() {
        let rates = mfn_base_rates();
        assert_eq!(rates.iter().find(|(c, _)| *c == 1).map(|(_, r)| *r), Some(dec!(15)));
    }

    #[test]
    fn adjustments_are_positive() {
        for (code, factor) in mfn_adjustments() {
            assert!(factor > Decimal::ZERO, "{code}");
        }
    }
}
