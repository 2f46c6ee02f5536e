/// Round to two decimal places. Every derived metric on the wire (scores,
/// ceilings, upside, sentiment ratio) carries this precision.
pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
