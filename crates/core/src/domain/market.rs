use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Static macro backdrop served under /api/v1/macro-context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroContext {
    #[serde(rename = "juros_selic")]
    pub selic_rate: f64,

    #[serde(rename = "inflacao_ipca")]
    pub ipca_inflation: f64,

    #[serde(rename = "setor_favorecido")]
    pub favored_sectors: Vec<String>,

    #[serde(rename = "setor_desfavorecido")]
    pub unfavored_sectors: Vec<String>,

    /// Sector name to macro weight multiplier. Sectors missing from the map
    /// weigh 1.0.
    #[serde(rename = "peso_ajuste")]
    pub sector_weights: BTreeMap<String, f64>,
}
