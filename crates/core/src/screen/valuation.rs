use crate::num::round2;

// Fixed 20% margin-of-safety discount on the theoretical fair value. The
// divisor is part of the public output contract and must not change.
const SAFETY_DISCOUNT: f64 = 1.2;

/// Theoretical maximum "safe" purchase price: fair value scaled down by the
/// margin-of-safety discount. Callers guarantee a positive price.
pub fn price_ceiling(price: f64, efficiency_score: f64) -> f64 {
    let multiplier = 1.0 + efficiency_score / 20.0;
    round2(price * multiplier / SAFETY_DISCOUNT)
}

/// Percentage gap between the ceiling and the current price. Negative when
/// the market already trades above the ceiling.
pub fn upside_percent(price: f64, ceiling: f64) -> f64 {
    round2((ceiling / price - 1.0) * 100.0)
}
