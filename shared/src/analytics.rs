//! Sales dashboard formulas
//!
//! Single-pass percentage calculations used by the analytics views. Both
//! guard the zero/negative-denominator case by returning zero, matching the
//! lenient posture of the rest of the engine.

use rust_decimal::Decimal;

/// Period-over-period growth: ((current - previous) / previous) * 100.
pub fn growth_percent(current: Decimal, previous: Decimal) -> Decimal {
    if previous <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (current - previous) / previous * Decimal::ONE_HUNDRED
}

/// Target achievement: (actual / target) * 100.
pub fn achievement_percent(actual: Decimal, target: Decimal) -> Decimal {
    if target <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    actual / target * Decimal::ONE_HUNDRED
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growth_percent() {
        assert_eq!(
            growth_percent(Decimal::from(150), Decimal::from(100)),
            Decimal::from(50)
        );
        assert_eq!(
            growth_percent(Decimal::from(75), Decimal::from(100)),
            Decimal::from(-25)
        );
    }

    #[test]
    fn test_growth_percent_zero_previous() {
        assert_eq!(
            growth_percent(Decimal::from(150), Decimal::ZERO),
            Decimal::ZERO
        );
        assert_eq!(
            growth_percent(Decimal::from(150), Decimal::from(-10)),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_achievement_percent() {
        assert_eq!(
            achievement_percent(Decimal::from(80), Decimal::from(100)),
            Decimal::from(80)
        );
        assert_eq!(
            achievement_percent(Decimal::from(120), Decimal::from(100)),
            Decimal::from(120)
        );
    }

    #[test]
    fn test_achievement_percent_zero_target() {
        assert_eq!(
            achievement_percent(Decimal::from(80), Decimal::ZERO),
            Decimal::ZERO
        );
    }
}
