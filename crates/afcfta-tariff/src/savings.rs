//! Savings between the MFN and AfCFTA landed costs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::{round_money, round_rate, HUNDRED};

/// Difference between two cascade totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsEstimate {
    /// `mfn_total − afcfta_total`. Negative when the preference costs more.
    pub amount: Decimal,
    /// `amount / mfn_total × 100`, or 0 when the MFN total is not positive.
    pub pct: Decimal,
    pub is_beneficial: bool,
}

/// Compare the two landed costs of one consignment.
pub fn estimate_savings(mfn_total: Decimal, afcfta_total: Decimal) -> SavingsEstimate {
    let amount = round_money(mfn_total - afcfta_total);
    let pct = if mfn_total > Decimal::ZERO {
        round_rate(amount / mfn_total * HUNDRED)
    } else {
        Decimal::ZERO
    };
    SavingsEstimate {
        amount,
        pct,
        is_beneficial: amount > Decimal::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn worked_example() {
        let s = estimate_savings(dec!(131570), dec!(120950));
        assert_eq!(s.amount, dec!(10620));
        assert_eq!(s.pct, dec!(8.07));
        assert!(s.is_beneficial);
    }

    #[test]
    fn equal_totals_save_nothing() {
        let s = estimate_savings(dec!(5000), dec!(5000));
        assert_eq!(s.amount, Decimal::ZERO);
        assert_eq!(s.pct, Decimal::ZERO);
        assert!(!s.is_beneficial);
    }

    #[test]
    fn free_preferential_total_saves_everything() {
        assert_eq!(estimate_savings(dec!(5000), Decimal::ZERO).pct, dec!(100));
    }

    #[test]
    fn zero_mfn_total_has_zero_pct() {
        let s = estimate_savings(Decimal::ZERO, dec!(10));
        assert_eq!(s.amount, dec!(-10));
        assert_eq!(s.pct, Decimal::ZERO);
        assert!(!s.is_beneficial);
    }
}
