pub mod filter;
pub mod rank;
pub mod recommend;
pub mod valuation;

use crate::domain::equity::EquityRecord;
use crate::domain::pick::{PriceAlert, TopPick};
use crate::market;
use crate::sentiment::{self, RandomSource};
use filter::FilterThresholds;
use std::fmt;

// Fixed holding-period estimate attached to every pick.
const ESTIMATED_HOLD_DAYS: u32 = 90;

// The alerts view only looks at the best-ranked names.
const ALERTS_LIMIT: usize = 10;

/// Pipeline failure surfaced to callers. The filter yielding nothing is a
/// user-facing condition, distinct from a server fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenError {
    NoEligibleAssets,
}

impl fmt::Display for ScreenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoEligibleAssets => write!(f, "Nenhum ativo passou pelos filtros"),
        }
    }
}

impl std::error::Error for ScreenError {}

/// Run the full screen: filter, rank, truncate to `limit`, then annotate each
/// survivor with valuation, sentiment, macro weight, catalysts, and the final
/// recommendation. Errors with `ScreenError::NoEligibleAssets` when the
/// filter removes everything.
pub fn build_top_picks(
    records: &[EquityRecord],
    thresholds: &FilterThresholds,
    limit: usize,
    rng: &mut dyn RandomSource,
) -> anyhow::Result<Vec<TopPick>> {
    let eligible = filter::filter_eligible(records, thresholds);
    if eligible.is_empty() {
        return Err(ScreenError::NoEligibleAssets.into());
    }

    tracing::debug!(
        catalog = records.len(),
        eligible = eligible.len(),
        limit,
        "building top picks"
    );

    let ranked = rank::rank_equities(&eligible);
    let ctx = market::macro_context();

    let mut out = Vec::with_capacity(limit.min(ranked.len()));
    for equity in ranked.into_iter().take(limit) {
        let snapshot = sentiment::analyze(&equity.record.ticker, rng);
        let ceiling = valuation::price_ceiling(equity.record.price, equity.efficiency_score);
        let upside = valuation::upside_percent(equity.record.price, ceiling);

        let sentiment_status = if snapshot.herd_risk { "Alerta" } else { "Normal" };

        out.push(TopPick {
            ticker: equity.record.ticker.clone(),
            efficiency_score: equity.efficiency_score,
            macro_weight: market::macro_weight(&ctx, &equity.record.sector),
            catalysts: market::catalysts(&equity.record.sector),
            price_ceiling: ceiling,
            current_price: equity.record.price,
            upside_percent: upside,
            sentiment_status: sentiment_status.to_string(),
            final_recommendation: recommend::final_recommendation(snapshot.herd_risk, upside)
                .to_string(),
            sector: equity.record.sector.clone(),
            roe: equity.record.return_on_equity,
            cagr: equity.record.five_year_cagr,
            pl: equity.record.price_to_earnings,
            estimated_hold_days: ESTIMATED_HOLD_DAYS,
            rank: equity.rank,
            debt_ratio: equity.record.debt_ratio,
            sentiment_ratio: snapshot.ratio,
        });
    }

    Ok(out)
}

/// Price-to-ceiling alerts for the top-ranked names. An empty filtered set
/// yields an empty list here, not an error.
pub fn build_alerts(records: &[EquityRecord], thresholds: &FilterThresholds) -> Vec<PriceAlert> {
    let eligible = filter::filter_eligible(records, thresholds);
    let ranked = rank::rank_equities(&eligible);

    ranked
        .into_iter()
        .take(ALERTS_LIMIT)
        .map(|equity| {
            let ceiling = valuation::price_ceiling(equity.record.price, equity.efficiency_score);
            let margin = valuation::upside_percent(equity.record.price, ceiling);
            let action = recommend::ceiling_action(equity.record.price, ceiling);

            PriceAlert {
                ticker: equity.record.ticker,
                current_price: equity.record.price,
                price_ceiling: ceiling,
                safety_margin: margin,
                recommended_action: action.to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    /// Always draws the same value; enough to make the pipeline deterministic.
    struct FixedSource(i32);

    impl RandomSource for FixedSource {
        fn next_int(&mut self, _min: i32, _max: i32) -> i32 {
            self.0
        }
    }

    fn record(ticker: &str, pe: f64, roe: f64, cagr: f64, sector: &str) -> EquityRecord {
        EquityRecord {
            ticker: ticker.to_string(),
            price_to_earnings: pe,
            return_on_equity: roe,
            five_year_cagr: cagr,
            debt_ratio: 0.5,
            sector: sector.to_string(),
            price: 30.0,
        }
    }

    #[test]
    fn default_catalog_yields_ten_picks() {
        let records = catalog::default_equities();
        let mut rng = FixedSource(0);

        let picks =
            build_top_picks(&records, &FilterThresholds::default(), 15, &mut rng).unwrap();

        // 10 of the 17 records pass the default thresholds.
        assert_eq!(picks.len(), 10);
        assert_eq!(picks[0].ticker, "PETR4");
        assert_eq!(picks[0].rank, 1);

        let mut ranks: Vec<i32> = picks.iter().map(|p| p.rank).collect();
        ranks.sort_unstable();
        assert_eq!(ranks, (1..=10).collect::<Vec<_>>());

        for pick in &picks {
            assert_eq!(pick.estimated_hold_days, 90);
            assert_eq!(pick.sentiment_status, "Normal");
        }
    }

    #[test]
    fn limit_truncates_after_ranking() {
        let records = catalog::default_equities();
        let mut rng = FixedSource(0);

        let picks = build_top_picks(&records, &FilterThresholds::default(), 3, &mut rng).unwrap();
        assert_eq!(picks.len(), 3);
        assert_eq!(picks[0].ticker, "PETR4");
        assert_eq!(picks[1].ticker, "PRIO3");
        assert_eq!(picks[2].ticker, "ITUB4");
    }

    #[test]
    fn empty_filter_is_a_typed_error() {
        let records = vec![record("A", 30.0, 10.0, 5.0, "Varejo")];
        let mut rng = FixedSource(0);

        let err =
            build_top_picks(&records, &FilterThresholds::default(), 15, &mut rng).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ScreenError>(),
            Some(&ScreenError::NoEligibleAssets)
        );
        assert_eq!(err.to_string(), "Nenhum ativo passou pelos filtros");
    }

    #[test]
    fn herd_risk_draw_overrides_recommendation() {
        // Draw 200 -> volume 230 -> ratio 4.6 -> herd risk on every pick.
        let records = catalog::default_equities();
        let mut rng = FixedSource(200);

        let picks = build_top_picks(&records, &FilterThresholds::default(), 5, &mut rng).unwrap();
        for pick in &picks {
            assert_eq!(pick.sentiment_status, "Alerta");
            assert_eq!(pick.final_recommendation, "AGUARDAR - Risco de Manada");
            assert_eq!(pick.sentiment_ratio, 4.6);
        }
    }

    #[test]
    fn unmapped_sector_gets_default_weight_and_catalyst() {
        let records = vec![record("MINE3", 8.0, 20.0, 14.0, "Mineração")];
        let mut rng = FixedSource(0);

        let picks = build_top_picks(&records, &FilterThresholds::default(), 5, &mut rng).unwrap();
        assert_eq!(picks[0].macro_weight, 1.0);
        assert_eq!(picks[0].catalysts, vec!["Crescimento orgânico"]);
    }

    #[test]
    fn alerts_cover_at_most_ten_ranked_names() {
        let records = catalog::default_equities();
        let alerts = build_alerts(&records, &FilterThresholds::default());

        assert_eq!(alerts.len(), 10);
        assert_eq!(alerts[0].ticker, "PETR4");
        for alert in &alerts {
            assert!(["COMPRAR", "AGUARDAR", "VENDER"]
                .contains(&alert.recommended_action.as_str()));
        }
    }

    #[test]
    fn alerts_on_empty_filter_are_an_empty_list() {
        let records = vec![record("A", 30.0, 10.0, 5.0, "Varejo")];
        assert!(build_alerts(&records, &FilterThresholds::default()).is_empty());
    }
}
