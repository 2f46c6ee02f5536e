/// Momentum recommendation for a pick. Rules are evaluated top to bottom and
/// the first match wins, so a herd-risk flag dominates any upside.
pub fn final_recommendation(herd_risk: bool, upside_percent: f64) -> &'static str {
    if herd_risk {
        return "AGUARDAR - Risco de Manada";
    }
    if upside_percent > 15.0 {
        return "COMPRA FORTE";
    }
    if upside_percent > 5.0 {
        return "COMPRA";
    }
    "NEUTRO"
}

/// Price-to-ceiling classifier used by the alerts view. Answers a different
/// question than `final_recommendation` (pure margin, no sentiment); the two
/// are intentionally not reconciled.
pub fn ceiling_action(price: f64, ceiling: f64) -> &'static str {
    if price <= ceiling * 0.95 {
        return "COMPRAR";
    }
    if price <= ceiling * 1.05 {
        return "AGUARDAR";
    }
    "VENDER"
}
