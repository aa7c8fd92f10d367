#[cfg(test)]
#[path = "../../tests/unit/ails/dialect_test.rs"]
mod dialect_test;

/// Section keywords of heterogeneous fleet instances (Pessoa et al. 2018) paired with keywords
/// which AILS solver expects instead.
pub const DIALECT_KEYWORDS: &[(&str, &str)] =
    &[("VARIABLE_COSTS", "COST_COEFFICIENTS"), ("NUMBER_OF_VEHICLES", "VEHICLES_AVAILABLE")];

/// Renames instance section keywords to ones supported by AILS solver. Everything else is kept as is.
pub fn convert_instance_dialect(instance: &str) -> String {
    DIALECT_KEYWORDS.iter().fold(instance.to_string(), |acc, (from, to)| acc.replace(from, to))
}
