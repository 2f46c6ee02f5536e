use crate::domain::equity::EquityRecord;

/// The built-in screening universe: a fixed snapshot of Brazilian large caps
/// with their fundamental metrics. Deterministic and side-effect-free; a
/// dynamic catalog source only has to produce the same record shape.
pub fn default_equities() -> Vec<EquityRecord> {
    fn record(
        ticker: &str,
        pe: f64,
        roe: f64,
        cagr: f64,
        debt: f64,
        sector: &str,
        price: f64,
    ) -> EquityRecord {
        EquityRecord {
            ticker: ticker.to_string(),
            price_to_earnings: pe,
            return_on_equity: roe,
            five_year_cagr: cagr,
            debt_ratio: debt,
            sector: sector.to_string(),
            price,
        }
    }

    vec![
        record("WEGE3", 28.5, 22.3, 18.5, 0.35, "Industrial", 45.8),
        record("ITUB4", 6.8, 18.9, 12.8, 0.45, "Financeiro", 28.9),
        record("PETR4", 4.2, 25.6, 15.2, 0.68, "Energia", 38.5),
        record("VALE3", 3.8, 28.4, 10.5, 0.52, "Industrial", 65.2),
        record("BBDC4", 5.9, 17.2, 11.9, 0.48, "Financeiro", 24.3),
        record("RENT3", 12.5, 19.8, 22.4, 0.28, "Varejo", 58.7),
        record("RADL3", 18.3, 20.5, 16.8, 0.15, "Saúde", 42.1),
        record("LREN3", 14.2, 21.7, 19.3, 0.22, "Varejo", 18.9),
        record("EGIE3", 16.8, 18.2, 13.5, 0.58, "Energia", 44.6),
        record("TAEE11", 12.4, 16.8, 11.2, 0.62, "Energia", 38.2),
        record("CPLE6", 11.9, 17.5, 12.8, 0.55, "Energia", 42.8),
        record("VIVT3", 8.5, 22.8, 14.6, 0.72, "Tecnologia", 52.3),
        record("TOTS3", 9.2, 19.4, 13.9, 0.48, "Tecnologia", 28.7),
        record("PRIO3", 6.8, 24.5, 28.3, 0.42, "Energia", 48.9),
        record("EMBR3", 18.7, 16.2, 15.8, 0.68, "Industrial", 22.5),
        record("SUZB3", 11.3, 19.6, 17.2, 0.38, "Industrial", 54.8),
        record("KLBN11", 8.9, 18.7, 13.4, 0.72, "Industrial", 24.6),
    ]
}
