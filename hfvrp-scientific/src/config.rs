//! Conversion configuration.

#[cfg(test)]
#[path = "../tests/unit/config_test.rs"]
mod config_test;

use crate::utils::GenericError;
use serde::Deserialize;
use std::io::{BufReader, Read};

/// Specifies keywords and formatting used by conversion. Missing fields take default values.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ConvertConfig {
    /// Instance section marker followed by a line with vehicle capacities.
    pub capacities_marker: String,
    /// Instance section marker followed by a line with amount of available vehicles.
    pub vehicles_marker: String,
    /// A token which starts every route line in solver output.
    pub route_token: String,
    /// A keyword which separates vehicle descriptor and visits.
    pub route_keyword: String,
    /// A token which starts cost line in solver output.
    pub cost_label: String,
    /// Amount of decimal places kept in cost.
    pub cost_precision: usize,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            capacities_marker: "CAPACITIES".to_string(),
            vehicles_marker: "VEHICLES_AVAILABLE".to_string(),
            route_token: "Veiculo".to_string(),
            route_keyword: "Route".to_string(),
            cost_label: "Cost".to_string(),
            cost_precision: 2,
        }
    }
}

/// Max amount of decimal places in cost, more is beyond `f64` precision.
pub const MAX_COST_PRECISION: usize = 15;

/// Reads config from json.
pub fn read_convert_config<R: Read>(reader: BufReader<R>) -> Result<ConvertConfig, GenericError> {
    let config: ConvertConfig =
        serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'"))?;

    if config.cost_precision > MAX_COST_PRECISION {
        return Err(format!(
            "cost precision {} is greater than max supported {MAX_COST_PRECISION}",
            config.cost_precision
        )
        .into());
    }

    Ok(config)
}
