//! Engine parameter schema.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::validate::validate_spec;
use crate::{ProjectError, ProjectResult};

/// A raw parameter value: numeric, or text (geometry names, or numbers
/// written as strings by INI-style sources).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpecValue {
    Number(f64),
    Text(String),
}

/// Flat parameter-name → value mapping.
pub type SpecMap = BTreeMap<String, SpecValue>;

impl From<f64> for SpecValue {
    fn from(v: f64) -> Self {
        SpecValue::Number(v)
    }
}

impl From<&str> for SpecValue {
    fn from(v: &str) -> Self {
        SpecValue::Text(v.to_string())
    }
}

impl fmt::Display for SpecValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecValue::Number(v) => write!(f, "{v}"),
            SpecValue::Text(s) => f.write_str(s),
        }
    }
}

/// Numeric engine parameters that can be swept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DesignVariable {
    CorrectedMassFlow,
    BypassRatio,
    CombustionTemperature,
    PrCc,
    PrFan,
    PrLpc,
    PrHpc,
    EtaInlet,
    EtaFan,
    EtaLpc,
    EtaHpc,
    EtaCc,
    EtaHpt,
    EtaLpt,
    EtaMech,
    EtaNozzle,
}

impl DesignVariable {
    pub const ALL: [DesignVariable; 16] = [
        DesignVariable::CorrectedMassFlow,
        DesignVariable::BypassRatio,
        DesignVariable::CombustionTemperature,
        DesignVariable::PrCc,
        DesignVariable::PrFan,
        DesignVariable::PrLpc,
        DesignVariable::PrHpc,
        DesignVariable::EtaInlet,
        DesignVariable::EtaFan,
        DesignVariable::EtaLpc,
        DesignVariable::EtaHpc,
        DesignVariable::EtaCc,
        DesignVariable::EtaHpt,
        DesignVariable::EtaLpt,
        DesignVariable::EtaMech,
        DesignVariable::EtaNozzle,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DesignVariable::CorrectedMassFlow => "corrected_mass_flow",
            DesignVariable::BypassRatio => "bypass_ratio",
            DesignVariable::CombustionTemperature => "combustion_temperature",
            DesignVariable::PrCc => "pr_cc",
            DesignVariable::PrFan => "pr_fan",
            DesignVariable::PrLpc => "pr_lpc",
            DesignVariable::PrHpc => "pr_hpc",
            DesignVariable::EtaInlet => "eta_inlet",
            DesignVariable::EtaFan => "eta_fan",
            DesignVariable::EtaLpc => "eta_lpc",
            DesignVariable::EtaHpc => "eta_hpc",
            DesignVariable::EtaCc => "eta_cc",
            DesignVariable::EtaHpt => "eta_hpt",
            DesignVariable::EtaLpt => "eta_lpt",
            DesignVariable::EtaMech => "eta_mech",
            DesignVariable::EtaNozzle => "eta_nozzle",
        }
    }

    /// Component efficiencies; these are forced to 1 in the ideal cycle.
    pub fn is_efficiency(self) -> bool {
        self.as_str().starts_with("eta_")
    }

    pub fn efficiencies() -> impl Iterator<Item = DesignVariable> {
        Self::ALL.into_iter().filter(|v| v.is_efficiency())
    }
}

impl fmt::Display for DesignVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DesignVariable {
    type Err = ProjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ProjectError::UnknownParameter {
                name: s.to_string(),
            })
    }
}

fn default_name() -> String {
    "engine".to_string()
}

fn default_nozzle_type() -> String {
    "convergent".to_string()
}

/// Complete design parameter set of a two-spool turbofan.
///
/// Temperatures in K, mass flow in kg/s; ratios and efficiencies are
/// dimensionless. The nozzle geometry is kept as text and interpreted by the
/// engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineSpec {
    #[serde(default = "default_name")]
    pub name: String,
    pub corrected_mass_flow: f64,
    pub bypass_ratio: f64,
    pub combustion_temperature: f64,
    #[serde(default = "default_nozzle_type")]
    pub nozzle_type: String,
    pub pr_cc: f64,
    pub pr_fan: f64,
    pub pr_lpc: f64,
    pub pr_hpc: f64,
    pub eta_inlet: f64,
    pub eta_fan: f64,
    pub eta_lpc: f64,
    pub eta_hpc: f64,
    pub eta_cc: f64,
    pub eta_hpt: f64,
    pub eta_lpt: f64,
    pub eta_mech: f64,
    pub eta_nozzle: f64,
}

impl EngineSpec {
    /// Build a spec from a flat mapping.
    ///
    /// `name` and `nozzle_type` are optional (defaults: `"engine"`,
    /// `"convergent"`); every numeric parameter is required. Keys outside
    /// the schema are rejected.
    pub fn from_map(map: &SpecMap) -> ProjectResult<Self> {
        for key in map.keys() {
            if key != "name" && key != "nozzle_type" {
                key.parse::<DesignVariable>()?;
            }
        }

        let text = |key: &'static str, default: fn() -> String| match map.get(key) {
            None => Ok(default()),
            Some(SpecValue::Text(s)) => Ok(s.clone()),
            Some(other) => Err(crate::ValidationError::InvalidValue {
                field: key.to_string(),
                value: other.to_string(),
                reason: "expected text".to_string(),
            }),
        };

        let mut spec = EngineSpec {
            name: text("name", default_name)?,
            nozzle_type: text("nozzle_type", default_nozzle_type)?,
            corrected_mass_flow: 0.0,
            bypass_ratio: 0.0,
            combustion_temperature: 0.0,
            pr_cc: 0.0,
            pr_fan: 0.0,
            pr_lpc: 0.0,
            pr_hpc: 0.0,
            eta_inlet: 0.0,
            eta_fan: 0.0,
            eta_lpc: 0.0,
            eta_hpc: 0.0,
            eta_cc: 0.0,
            eta_hpt: 0.0,
            eta_lpt: 0.0,
            eta_mech: 0.0,
            eta_nozzle: 0.0,
        };
        for var in DesignVariable::ALL {
            let raw = map.get(var.as_str()).ok_or(ProjectError::MissingParameter {
                name: var.as_str(),
            })?;
            spec.set(var, numeric(var, raw)?);
        }

        validate_spec(&spec)?;
        Ok(spec)
    }

    /// Flatten back into a mapping accepted by [`EngineSpec::from_map`].
    pub fn to_map(&self) -> SpecMap {
        let mut map = SpecMap::new();
        map.insert("name".into(), SpecValue::Text(self.name.clone()));
        map.insert("nozzle_type".into(), SpecValue::Text(self.nozzle_type.clone()));
        for var in DesignVariable::ALL {
            map.insert(var.as_str().into(), SpecValue::Number(self.get(var)));
        }
        map
    }

    pub fn get(&self, var: DesignVariable) -> f64 {
        match var {
            DesignVariable::CorrectedMassFlow => self.corrected_mass_flow,
            DesignVariable::BypassRatio => self.bypass_ratio,
            DesignVariable::CombustionTemperature => self.combustion_temperature,
            DesignVariable::PrCc => self.pr_cc,
            DesignVariable::PrFan => self.pr_fan,
            DesignVariable::PrLpc => self.pr_lpc,
            DesignVariable::PrHpc => self.pr_hpc,
            DesignVariable::EtaInlet => self.eta_inlet,
            DesignVariable::EtaFan => self.eta_fan,
            DesignVariable::EtaLpc => self.eta_lpc,
            DesignVariable::EtaHpc => self.eta_hpc,
            DesignVariable::EtaCc => self.eta_cc,
            DesignVariable::EtaHpt => self.eta_hpt,
            DesignVariable::EtaLpt => self.eta_lpt,
            DesignVariable::EtaMech => self.eta_mech,
            DesignVariable::EtaNozzle => self.eta_nozzle,
        }
    }

    pub fn set(&mut self, var: DesignVariable, value: f64) {
        let slot = match var {
            DesignVariable::CorrectedMassFlow => &mut self.corrected_mass_flow,
            DesignVariable::BypassRatio => &mut self.bypass_ratio,
            DesignVariable::CombustionTemperature => &mut self.combustion_temperature,
            DesignVariable::PrCc => &mut self.pr_cc,
            DesignVariable::PrFan => &mut self.pr_fan,
            DesignVariable::PrLpc => &mut self.pr_lpc,
            DesignVariable::PrHpc => &mut self.pr_hpc,
            DesignVariable::EtaInlet => &mut self.eta_inlet,
            DesignVariable::EtaFan => &mut self.eta_fan,
            DesignVariable::EtaLpc => &mut self.eta_lpc,
            DesignVariable::EtaHpc => &mut self.eta_hpc,
            DesignVariable::EtaCc => &mut self.eta_cc,
            DesignVariable::EtaHpt => &mut self.eta_hpt,
            DesignVariable::EtaLpt => &mut self.eta_lpt,
            DesignVariable::EtaMech => &mut self.eta_mech,
            DesignVariable::EtaNozzle => &mut self.eta_nozzle,
        };
        *slot = value;
    }

    /// Force every efficiency and the combustor pressure ratio to 1.
    pub fn apply_ideal_cycle(&mut self) {
        for var in DesignVariable::efficiencies() {
            self.set(var, 1.0);
        }
        self.pr_cc = 1.0;
    }

    /// Product of the fan and compressor pressure ratios.
    pub fn overall_pressure_ratio(&self) -> f64 {
        self.pr_fan * self.pr_lpc * self.pr_hpc
    }
}

fn numeric(var: DesignVariable, raw: &SpecValue) -> ProjectResult<f64> {
    match raw {
        SpecValue::Number(v) => Ok(*v),
        SpecValue::Text(s) => s.trim().parse::<f64>().map_err(|_| {
            crate::ValidationError::InvalidValue {
                field: var.as_str().to_string(),
                value: s.clone(),
                reason: "expected a number".to_string(),
            }
            .into()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_map() -> SpecMap {
        let mut map = SpecMap::new();
        for (key, value) in [
            ("corrected_mass_flow", 1400.0),
            ("bypass_ratio", 8.0),
            ("combustion_temperature", 1450.0),
            ("pr_cc", 0.96),
            ("pr_fan", 1.6),
            ("pr_lpc", 1.4),
            ("pr_hpc", 19.0),
            ("eta_inlet", 0.98),
            ("eta_fan", 0.92),
            ("eta_lpc", 0.9),
            ("eta_hpc", 0.9),
            ("eta_cc", 0.99),
            ("eta_hpt", 0.92),
            ("eta_lpt", 0.92),
            ("eta_mech", 0.99),
            ("eta_nozzle", 0.98),
        ] {
            map.insert(key.to_string(), value.into());
        }
        map
    }

    #[test]
    fn from_flat_map() {
        let spec = EngineSpec::from_map(&reference_map()).unwrap();
        assert_eq!(spec.name, "engine");
        assert_eq!(spec.nozzle_type, "convergent");
        assert_eq!(spec.pr_hpc, 19.0);
        assert!((spec.overall_pressure_ratio() - 1.6 * 1.4 * 19.0).abs() < 1e-12);
    }

    #[test]
    fn numbers_as_text_accepted() {
        let mut map = reference_map();
        map.insert("eta_fan".into(), " 0.91 ".into());
        let spec = EngineSpec::from_map(&map).unwrap();
        assert_eq!(spec.eta_fan, 0.91);
    }

    #[test]
    fn unknown_key_rejected() {
        let mut map = reference_map();
        map.insert("eta_afterburner".into(), 0.9.into());
        assert!(matches!(
            EngineSpec::from_map(&map),
            Err(ProjectError::UnknownParameter { name }) if name == "eta_afterburner"
        ));
    }

    #[test]
    fn missing_key_rejected() {
        let mut map = reference_map();
        map.remove("pr_lpc");
        assert!(matches!(
            EngineSpec::from_map(&map),
            Err(ProjectError::MissingParameter { name: "pr_lpc" })
        ));
    }

    #[test]
    fn garbage_number_rejected() {
        let mut map = reference_map();
        map.insert("bypass_ratio".into(), "eight".into());
        assert!(matches!(
            EngineSpec::from_map(&map),
            Err(ProjectError::Validation(_))
        ));
    }

    #[test]
    fn map_round_trip() {
        let spec = EngineSpec::from_map(&reference_map()).unwrap();
        assert_eq!(EngineSpec::from_map(&spec.to_map()).unwrap(), spec);
    }

    #[test]
    fn ideal_cycle_overrides() {
        let mut spec = EngineSpec::from_map(&reference_map()).unwrap();
        spec.apply_ideal_cycle();
        for var in DesignVariable::efficiencies() {
            assert_eq!(spec.get(var), 1.0, "{var}");
        }
        assert_eq!(spec.pr_cc, 1.0);
        assert_eq!(spec.pr_hpc, 19.0);
    }

    #[test]
    fn variable_names_round_trip() {
        for var in DesignVariable::ALL {
            assert_eq!(var.as_str().parse::<DesignVariable>().unwrap(), var);
        }
        assert_eq!(DesignVariable::efficiencies().count(), 9);
        assert!(!DesignVariable::PrCc.is_efficiency());
    }
}
