use crate::domain::equity::EquityRecord;

/// Minimum quality bar for the screen. All three conditions are strict and
/// AND-ed; boundary values are excluded.
#[derive(Debug, Clone)]
pub struct FilterThresholds {
    pub min_roe: f64,
    pub min_cagr: f64,
    pub max_pe: f64,
}

impl Default for FilterThresholds {
    fn default() -> Self {
        Self {
            min_roe: 15.0,
            min_cagr: 12.0,
            max_pe: 15.0,
        }
    }
}

impl FilterThresholds {
    pub fn from_env() -> Self {
        let mut out = Self::default();

        if let Ok(s) = std::env::var("SCREEN_MIN_ROE") {
            if let Ok(n) = s.parse::<f64>() {
                out.min_roe = n;
            }
        }

        if let Ok(s) = std::env::var("SCREEN_MIN_CAGR") {
            if let Ok(n) = s.parse::<f64>() {
                out.min_cagr = n;
            }
        }

        if let Ok(s) = std::env::var("SCREEN_MAX_PE") {
            if let Ok(n) = s.parse::<f64>() {
                out.max_pe = n;
            }
        }

        out
    }
}

/// Keep records with ROE above `min_roe`, CAGR above `min_cagr`, and a P/L
/// strictly between zero and `max_pe`. Output is a stable subsequence of the
/// input; an empty result is valid.
pub fn filter_eligible(records: &[EquityRecord], t: &FilterThresholds) -> Vec<EquityRecord> {
    records
        .iter()
        .filter(|r| {
            r.return_on_equity > t.min_roe
                && r.five_year_cagr > t.min_cagr
                && r.price_to_earnings < t.max_pe
                && r.price_to_earnings > 0.0
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(ticker: &str, pe: f64, roe: f64, cagr: f64) -> EquityRecord {
        EquityRecord {
            ticker: ticker.to_string(),
            price_to_earnings: pe,
            return_on_equity: roe,
            five_year_cagr: cagr,
            debt_ratio: 0.4,
            sector: "Industrial".to_string(),
            price: 10.0,
        }
    }

    #[test]
    fn passes_only_when_all_conditions_hold() {
        let t = FilterThresholds::default();
        let records = vec![
            record("OK", 10.0, 20.0, 15.0),
            record("LOW_ROE", 10.0, 14.0, 15.0),
            record("LOW_CAGR", 10.0, 20.0, 11.0),
            record("HIGH_PE", 20.0, 20.0, 15.0),
            record("NEG_PE", -1.0, 20.0, 15.0),
        ];

        let kept = filter_eligible(&records, &t);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].ticker, "OK");
    }

    #[test]
    fn boundary_values_are_excluded() {
        let t = FilterThresholds::default();
        let records = vec![
            record("ROE_AT_MIN", 10.0, 15.0, 15.0),
            record("CAGR_AT_MIN", 10.0, 20.0, 12.0),
            record("PE_AT_MAX", 15.0, 20.0, 15.0),
            record("PE_ZERO", 0.0, 20.0, 15.0),
        ];

        assert!(filter_eligible(&records, &t).is_empty());
    }

    #[test]
    fn keeps_input_order() {
        let t = FilterThresholds::default();
        let records = vec![
            record("A", 10.0, 20.0, 15.0),
            record("SKIP", 20.0, 20.0, 15.0),
            record("B", 9.0, 21.0, 16.0),
            record("C", 8.0, 22.0, 17.0),
        ];

        let kept = filter_eligible(&records, &t);
        let tickers: Vec<&str> = kept.iter().map(|r| r.ticker.as_str()).collect();
        assert_eq!(tickers, vec!["A", "B", "C"]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let t = FilterThresholds::default();
        assert!(filter_eligible(&[], &t).is_empty());
    }
}
