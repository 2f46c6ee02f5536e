use crate::domain::equity::{EquityRecord, RankedEquity};
use crate::num::round2;

/// Composite cheapness/quality metric: (ROE + CAGR) / P/L, rounded to two
/// decimals. A non-positive P/L scores 0; the eligibility filter keeps such
/// records out of ranked sets.
pub fn efficiency_score(record: &EquityRecord) -> f64 {
    if record.price_to_earnings <= 0.0 {
        return 0.0;
    }
    round2((record.return_on_equity + record.five_year_cagr) / record.price_to_earnings)
}

/// Score every record and assign dense 1-based ranks in descending score
/// order. Ties fall back to the original index so equal scores keep their
/// input order.
pub fn rank_equities(records: &[EquityRecord]) -> Vec<RankedEquity> {
    let mut scored: Vec<(usize, f64, &EquityRecord)> = records
        .iter()
        .enumerate()
        .map(|(idx, r)| (idx, efficiency_score(r), r))
        .collect();

    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });

    scored
        .into_iter()
        .enumerate()
        .map(|(pos, (_, score, record))| RankedEquity {
            record: record.clone(),
            efficiency_score: score,
            rank: (pos + 1) as i32,
        })
        .collect()
}
