use serde::{Deserialize, Serialize};

/// Externally served screening result: one ranked equity with its valuation,
/// sentiment, and recommendation annotations. Built fresh on every request
/// and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopPick {
    pub ticker: String,
    pub efficiency_score: f64,
    pub macro_weight: f64,

    #[serde(rename = "catalisadores")]
    pub catalysts: Vec<String>,

    #[serde(rename = "preco_teto")]
    pub price_ceiling: f64,

    #[serde(rename = "preco_atual")]
    pub current_price: f64,

    #[serde(rename = "upside_potencial")]
    pub upside_percent: f64,

    /// "Alerta" when the sentiment mock flags herd risk, else "Normal".
    pub sentiment_status: String,

    #[serde(rename = "recomendacao_final")]
    pub final_recommendation: String,

    #[serde(rename = "setor")]
    pub sector: String,

    pub roe: f64,
    pub cagr: f64,
    pub pl: f64,

    #[serde(rename = "tempo_estimado_dias")]
    pub estimated_hold_days: u32,

    pub rank: i32,

    #[serde(rename = "divida")]
    pub debt_ratio: f64,

    pub sentiment_ratio: f64,
}

/// One row of the alerts view: current price against the fair-value ceiling,
/// classified by margin alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceAlert {
    pub ticker: String,

    #[serde(rename = "preco_atual")]
    pub current_price: f64,

    #[serde(rename = "preco_teto")]
    pub price_ceiling: f64,

    #[serde(rename = "margem_seguranca")]
    pub safety_margin: f64,

    #[serde(rename = "acao_recomendada")]
    pub recommended_action: String,
}
