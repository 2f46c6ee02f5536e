use crate::domain::market::MacroContext;
use std::collections::BTreeMap;

/// Static macro backdrop: Selic, IPCA, and the sector weight table used to
/// annotate picks. Values are a fixed snapshot, not a live feed.
pub fn macro_context() -> MacroContext {
    let sector_weights = BTreeMap::from(
        [
            ("Financeiro", 1.15),
            ("Energia", 1.08),
            ("Industrial", 1.05),
            ("Saúde", 1.02),
            ("Tecnologia", 0.95),
            ("Consumo", 0.88),
            ("Varejo", 0.85),
            ("Construção", 0.75),
        ]
        .map(|(sector, weight)| (sector.to_string(), weight)),
    );

    MacroContext {
        selic_rate: 10.75,
        ipca_inflation: 4.5,
        favored_sectors: to_strings(&["Financeiro", "Energia", "Industrial"]),
        unfavored_sectors: to_strings(&["Construção", "Consumo", "Varejo"]),
        sector_weights,
    }
}

/// Weight for a sector; unmapped sectors weigh 1.0.
pub fn macro_weight(ctx: &MacroContext, sector: &str) -> f64 {
    ctx.sector_weights.get(sector).copied().unwrap_or(1.0)
}

/// Per-sector catalyst blurbs attached to each pick.
pub fn catalysts(sector: &str) -> Vec<String> {
    let lines: &[&str] = match sector {
        "Industrial" => &[
            "Expansão internacional em andamento",
            "Novos contratos com grandes clientes",
        ],
        "Financeiro" => &[
            "Melhoria na eficiência operacional",
            "Expansão da base de clientes",
        ],
        "Energia" => &[
            "Novos projetos de exploração",
            "Investimento em energias renováveis",
        ],
        "Tecnologia" => &[
            "Lançamento de novos produtos",
            "Expansão para novos mercados",
        ],
        "Varejo" => &["Abertura de novas lojas", "Otimização da cadeia logística"],
        "Saúde" => &[
            "Expansão da rede de atendimento",
            "Novos tratamentos e tecnologias",
        ],
        _ => &["Crescimento orgânico"],
    };
    to_strings(lines)
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
