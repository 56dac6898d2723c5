//! Physical constants for the cycle model.
//!
//! There is no process-wide constants object: a [`GasConstants`] value is
//! created by the caller and handed to every flow state it builds.

/// Immutable set of physical constants (SI).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GasConstants {
    /// Gravitational acceleration [m/s²]
    pub g: f64,
    /// ISA sea-level density [kg/m³]
    pub rho_sl: f64,
    /// ISA sea-level temperature [K]
    pub temperature_sl: f64,
    /// ISA sea-level pressure [Pa]
    pub pressure_sl: f64,
    /// cp of air [J/(kg·K)]
    pub specific_heat_air: f64,
    /// cp of the fuel/air mixture [J/(kg·K)]
    pub specific_heat_gas: f64,
    /// Ratio of specific heats of air
    pub kappa_air: f64,
    /// Ratio of specific heats of the fuel/air mixture
    pub kappa_gas: f64,
    /// Lower heating value of kerosene [J/kg]
    pub lower_heating_value: f64,
    /// Specific gas constant of air [J/(kg·K)]
    pub gas_constant: f64,
}

impl Default for GasConstants {
    fn default() -> Self {
        Self {
            g: 9.81,
            rho_sl: 1.225,
            temperature_sl: 288.15,
            pressure_sl: 101_325.0,
            specific_heat_air: 1000.0,
            specific_heat_gas: 1150.0,
            kappa_air: 1.4,
            kappa_gas: 1.33,
            lower_heating_value: 43.0e6,
            gas_constant: 287.05,
        }
    }
}
