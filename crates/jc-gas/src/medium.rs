//! Working media.

use jc_core::{GasConstants, SpecHeatCapacity};
use serde::{Deserialize, Serialize};

use crate::error::GasError;

/// Working medium of a gas stream.
///
/// Air flows from the intake to the combustor; the fuel/air mixture
/// (`"gas"`) flows from the combustor to the core nozzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Medium {
    #[serde(rename = "air")]
    Air,
    #[serde(rename = "gas")]
    CombustionGas,
}

impl Medium {
    pub fn as_str(self) -> &'static str {
        match self {
            Medium::Air => "air",
            Medium::CombustionGas => "gas",
        }
    }

    /// Ratio of specific heats κ.
    pub fn kappa(self, constants: &GasConstants) -> f64 {
        match self {
            Medium::Air => constants.kappa_air,
            Medium::CombustionGas => constants.kappa_gas,
        }
    }

    /// Specific heat at constant pressure.
    pub fn specific_heat(self, constants: &GasConstants) -> SpecHeatCapacity {
        match self {
            Medium::Air => constants.specific_heat_air,
            Medium::CombustionGas => constants.specific_heat_gas,
        }
    }
}

impl std::fmt::Display for Medium {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Medium {
    type Err = GasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "air" => Ok(Medium::Air),
            "gas" | "combustion-gas" | "combustion_gas" => Ok(Medium::CombustionGas),
            _ => Err(GasError::UnsupportedMedium {
                medium: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Medium {
    type Error = GasError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
