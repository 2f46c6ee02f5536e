use serde::{Deserialize, Serialize};

/// One instrument's fundamental snapshot. Serde names follow the tabular
/// headers of the upstream universe files, so a refreshed catalog can be
/// deserialized from the same shape the screen was built against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquityRecord {
    #[serde(rename = "Ticker")]
    pub ticker: String,

    /// Price-to-earnings (P/L). A non-positive value marks the record as
    /// unusable for ranking.
    #[serde(rename = "PL")]
    pub price_to_earnings: f64,

    /// Return on equity, percent.
    #[serde(rename = "ROE")]
    pub return_on_equity: f64,

    /// Five-year compound annual growth rate, percent.
    #[serde(rename = "CAGR")]
    pub five_year_cagr: f64,

    #[serde(rename = "Divida")]
    pub debt_ratio: f64,

    #[serde(rename = "Setor")]
    pub sector: String,

    #[serde(rename = "Preco")]
    pub price: f64,
}

/// An equity after scoring: the record plus its efficiency score and its
/// 1-based position in the descending score order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedEquity {
    #[serde(flatten)]
    pub record: EquityRecord,
    pub efficiency_score: f64,
    pub rank: i32,
}
