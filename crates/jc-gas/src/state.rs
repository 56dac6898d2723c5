//! Station flow states.
//!
//! A [`FlowState`] is built once from a [`FlowStateInput`] and never mutated.
//! Derived quantities (totals from statics and Mach, mass flow from corrected
//! flow, ...) are computed on first request and cached.

use jc_core::{
    ensure_finite, ensure_positive, k, kg_m3, kgps, mps, pa, Density, GasConstants, JcError,
    MassRate, Memo, Pressure, SpecHeatCapacity, Temperature, Velocity,
};
use serde::{Deserialize, Serialize};

use crate::error::{GasError, GasResult};
use crate::medium::Medium;

/// What is known about the gas at one station.
///
/// Every quantity is optional. For each axis (temperature, pressure, mass
/// flow) at most one of the two representations may be given; the other is
/// derived on demand.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowStateInput {
    pub station: String,
    pub mass_flow: Option<MassRate>,
    pub corrected_mass_flow: Option<MassRate>,
    pub mach: Option<f64>,
    pub t_static: Option<Temperature>,
    pub t_total: Option<Temperature>,
    pub p_static: Option<Pressure>,
    pub p_total: Option<Pressure>,
    pub medium: Option<Medium>,
}

impl FlowStateInput {
    pub fn new(station: impl Into<String>) -> Self {
        Self {
            station: station.into(),
            ..Self::default()
        }
    }

    pub fn mass_flow(mut self, v: MassRate) -> Self {
        self.mass_flow = Some(v);
        self
    }

    pub fn corrected_mass_flow(mut self, v: MassRate) -> Self {
        self.corrected_mass_flow = Some(v);
        self
    }

    pub fn mach(mut self, v: f64) -> Self {
        self.mach = Some(v);
        self
    }

    pub fn t_static(mut self, v: Temperature) -> Self {
        self.t_static = Some(v);
        self
    }

    pub fn t_total(mut self, v: Temperature) -> Self {
        self.t_total = Some(v);
        self
    }

    pub fn p_static(mut self, v: Pressure) -> Self {
        self.p_static = Some(v);
        self
    }

    pub fn p_total(mut self, v: Pressure) -> Self {
        self.p_total = Some(v);
        self
    }

    pub fn medium(mut self, v: Medium) -> Self {
        self.medium = Some(v);
        self
    }
}

/// Immutable thermodynamic state at one station.
///
/// Not `Sync`: the derived-value caches use single-threaded cells. States
/// are `Send` and `Clone`, so each worker thread owns its own copies.
#[derive(Debug, Clone)]
pub struct FlowState {
    input: FlowStateInput,
    constants: GasConstants,
    t_total: Memo<f64>,
    t_static: Memo<f64>,
    p_total: Memo<f64>,
    p_static: Memo<f64>,
    mass_flow: Memo<f64>,
    corrected_mass_flow: Memo<f64>,
}

impl FlowState {
    /// Build a state, rejecting conflicting or non-physical inputs.
    ///
    /// Missing values are *not* an error here; they surface as
    /// [`GasError::MissingStateVariable`] when a quantity that needs them is
    /// requested.
    pub fn new(input: FlowStateInput, constants: GasConstants) -> GasResult<Self> {
        check_exclusive(&input, input.t_static.is_some(), input.t_total.is_some(), "t_static", "t_total")?;
        check_exclusive(&input, input.p_static.is_some(), input.p_total.is_some(), "p_static", "p_total")?;
        check_exclusive(
            &input,
            input.mass_flow.is_some(),
            input.corrected_mass_flow.is_some(),
            "mass_flow",
            "corrected_mass_flow",
        )?;

        let non_physical = |source: JcError| GasError::NonPhysical {
            station: input.station.clone(),
            source,
        };
        for (value, what) in [
            (input.t_static.map(|t| t.value), "t_static"),
            (input.t_total.map(|t| t.value), "t_total"),
            (input.p_static.map(|p| p.value), "p_static"),
            (input.p_total.map(|p| p.value), "p_total"),
        ] {
            if let Some(v) = value {
                ensure_positive(v, what).map_err(non_physical)?;
            }
        }
        for (value, what) in [
            (input.mach, "mach"),
            (input.mass_flow.map(|m| m.value), "mass_flow"),
            (input.corrected_mass_flow.map(|m| m.value), "corrected_mass_flow"),
        ] {
            if let Some(v) = value {
                non_negative(v, what).map_err(non_physical)?;
            }
        }

        Ok(Self {
            input,
            constants,
            t_total: Memo::new(),
            t_static: Memo::new(),
            p_total: Memo::new(),
            p_static: Memo::new(),
            mass_flow: Memo::new(),
            corrected_mass_flow: Memo::new(),
        })
    }

    pub fn station(&self) -> &str {
        &self.input.station
    }

    pub fn input(&self) -> &FlowStateInput {
        &self.input
    }

    pub fn constants(&self) -> &GasConstants {
        &self.constants
    }

    pub fn medium(&self) -> GasResult<Medium> {
        self.input.medium.ok_or_else(|| self.missing("medium"))
    }

    /// Ratio of specific heats κ of the medium.
    pub fn kappa(&self) -> GasResult<f64> {
        Ok(self.medium()?.kappa(&self.constants))
    }

    /// Specific heat at constant pressure of the medium.
    pub fn specific_heat(&self) -> GasResult<SpecHeatCapacity> {
        Ok(self.medium()?.specific_heat(&self.constants))
    }

    pub fn mach(&self) -> GasResult<f64> {
        self.input.mach.ok_or_else(|| self.missing("mach"))
    }

    /// `Tt/Ts = 1 + (κ-1)/2 · M²`
    pub fn t_ratio(&self) -> GasResult<f64> {
        let kappa = self.kappa()?;
        let mach = self.mach()?;
        Ok(1.0 + 0.5 * (kappa - 1.0) * mach * mach)
    }

    /// `pt/ps = (Tt/Ts)^(κ/(κ-1))`
    pub fn p_ratio(&self) -> GasResult<f64> {
        let kappa = self.kappa()?;
        Ok(self.t_ratio()?.powf(kappa / (kappa - 1.0)))
    }

    pub fn t_total(&self) -> GasResult<Temperature> {
        self.t_total
            .value_or_try_init(|| match (self.input.t_total, self.input.t_static) {
                (Some(t), _) => Ok(t.value),
                (None, Some(ts)) => self.finite(ts.value * self.t_ratio()?, "t_total"),
                (None, None) => Err(self.missing("t_total")),
            })
            .map(k)
    }

    pub fn t_static(&self) -> GasResult<Temperature> {
        self.t_static
            .value_or_try_init(|| match (self.input.t_static, self.input.t_total) {
                (Some(t), _) => Ok(t.value),
                (None, Some(tt)) => self.finite(tt.value / self.t_ratio()?, "t_static"),
                (None, None) => Err(self.missing("t_static")),
            })
            .map(k)
    }

    pub fn p_total(&self) -> GasResult<Pressure> {
        self.p_total
            .value_or_try_init(|| match (self.input.p_total, self.input.p_static) {
                (Some(p), _) => Ok(p.value),
                (None, Some(ps)) => self.finite(ps.value * self.p_ratio()?, "p_total"),
                (None, None) => Err(self.missing("p_total")),
            })
            .map(pa)
    }

    pub fn p_static(&self) -> GasResult<Pressure> {
        self.p_static
            .value_or_try_init(|| match (self.input.p_static, self.input.p_total) {
                (Some(p), _) => Ok(p.value),
                (None, Some(pt)) => self.finite(pt.value / self.p_ratio()?, "p_static"),
                (None, None) => Err(self.missing("p_static")),
            })
            .map(pa)
    }

    /// Flow correction factor `sqrt(Tt/T_sl) / (pt/p_sl)`.
    pub fn correction_ratio(&self) -> GasResult<f64> {
        let theta = self.t_total()?.value / self.constants.temperature_sl;
        let delta = self.p_total()?.value / self.constants.pressure_sl;
        Ok(theta.sqrt() / delta)
    }

    pub fn mass_flow(&self) -> GasResult<MassRate> {
        self.mass_flow
            .value_or_try_init(|| {
                match (self.input.mass_flow, self.input.corrected_mass_flow) {
                    (Some(m), _) => Ok(m.value),
                    (None, Some(mc)) => {
                        self.finite(mc.value / self.correction_ratio()?, "mass_flow")
                    }
                    (None, None) => Err(self.missing("mass_flow")),
                }
            })
            .map(kgps)
    }

    pub fn corrected_mass_flow(&self) -> GasResult<MassRate> {
        self.corrected_mass_flow
            .value_or_try_init(|| {
                match (self.input.corrected_mass_flow, self.input.mass_flow) {
                    (Some(mc), _) => Ok(mc.value),
                    (None, Some(m)) => {
                        self.finite(m.value * self.correction_ratio()?, "corrected_mass_flow")
                    }
                    (None, None) => Err(self.missing("corrected_mass_flow")),
                }
            })
            .map(kgps)
    }

    /// Local speed of sound `sqrt(κ · R · Ts)`.
    pub fn speed_of_sound(&self) -> GasResult<Velocity> {
        let a = (self.kappa()? * self.constants.gas_constant * self.t_static()?.value).sqrt();
        Ok(mps(a))
    }

    /// Flow velocity `M · a`.
    pub fn velocity(&self) -> GasResult<Velocity> {
        Ok(mps(self.mach()? * self.speed_of_sound()?.value))
    }

    /// Static density from the ideal gas law.
    pub fn density(&self) -> GasResult<Density> {
        let rho = self.p_static()?.value / (self.constants.gas_constant * self.t_static()?.value);
        Ok(kg_m3(rho))
    }

    fn missing(&self, field: &'static str) -> GasError {
        GasError::MissingStateVariable {
            field,
            station: self.input.station.clone(),
        }
    }

    fn finite(&self, v: f64, what: &'static str) -> GasResult<f64> {
        ensure_finite(v, what).map_err(|source| GasError::NonPhysical {
            station: self.input.station.clone(),
            source,
        })
    }
}

fn check_exclusive(
    input: &FlowStateInput,
    a: bool,
    b: bool,
    first: &'static str,
    second: &'static str,
) -> GasResult<()> {
    if a && b {
        Err(GasError::ConflictingInput {
            station: input.station.clone(),
            first,
            second,
        })
    } else {
        Ok(())
    }
}

fn non_negative(v: f64, what: &'static str) -> Result<f64, JcError> {
    let v = ensure_finite(v, what)?;
    if v >= 0.0 {
        Ok(v)
    } else {
        Err(JcError::OutOfRange {
            what,
            value: v,
            expected: "non-negative",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ambient() -> FlowState {
        FlowState::new(
            FlowStateInput::new("0")
                .mach(0.8)
                .t_static(k(216.0))
                .p_static(pa(22_632.0))
                .corrected_mass_flow(kgps(1400.0))
                .medium(Medium::Air),
            GasConstants::default(),
        )
        .unwrap()
    }

    #[test]
    fn totals_from_statics() {
        let s = ambient();
        assert!((s.t_ratio().unwrap() - 1.128).abs() < 1e-12);
        assert!((s.t_total().unwrap().value - 243.648).abs() < 1e-9);
        let expected_pt = 22_632.0 * 1.128_f64.powf(3.5);
        assert!((s.p_total().unwrap().value - expected_pt).abs() < 1e-6);
    }

    #[test]
    fn mass_flow_from_corrected() {
        let s = ambient();
        let m = s.mass_flow().unwrap().value;
        assert!((m - 518.375).abs() < 0.05, "m = {m}");
        let back = s.corrected_mass_flow().unwrap().value;
        assert_eq!(back, 1400.0);
    }

    #[test]
    fn supplied_values_returned_verbatim() {
        let s = FlowState::new(
            FlowStateInput::new("3")
                .t_total(k(772.5))
                .p_total(pa(1.0e6))
                .mass_flow(kgps(84.0))
                .medium(Medium::Air),
            GasConstants::default(),
        )
        .unwrap();
        assert_eq!(s.t_total().unwrap().value, 772.5);
        assert_eq!(s.p_total().unwrap().value, 1.0e6);
        assert_eq!(s.mass_flow().unwrap().value, 84.0);
    }

    #[test]
    fn missing_mach_reported() {
        let s = FlowState::new(
            FlowStateInput::new("2")
                .t_total(k(243.6))
                .medium(Medium::Air),
            GasConstants::default(),
        )
        .unwrap();
        assert_eq!(
            s.t_static().unwrap_err(),
            GasError::MissingStateVariable {
                field: "mach",
                station: "2".into()
            }
        );
    }

    #[test]
    fn missing_pressure_reported() {
        let s = FlowState::new(
            FlowStateInput::new("2").medium(Medium::Air),
            GasConstants::default(),
        )
        .unwrap();
        assert!(matches!(
            s.p_total(),
            Err(GasError::MissingStateVariable { field: "p_total", .. })
        ));
        assert!(matches!(
            s.mass_flow(),
            Err(GasError::MissingStateVariable { field: "mass_flow", .. })
        ));
    }

    #[test]
    fn missing_medium_reported() {
        let s = FlowState::new(FlowStateInput::new("x").mach(0.5), GasConstants::default())
            .unwrap();
        assert!(matches!(
            s.kappa(),
            Err(GasError::MissingStateVariable { field: "medium", .. })
        ));
    }

    #[test]
    fn conflicting_temperatures_rejected() {
        let err = FlowState::new(
            FlowStateInput::new("0").t_static(k(216.0)).t_total(k(240.0)),
            GasConstants::default(),
        )
        .unwrap_err();
        assert!(matches!(err, GasError::ConflictingInput { .. }));
    }

    #[test]
    fn negative_pressure_rejected() {
        let err = FlowState::new(
            FlowStateInput::new("0").p_static(pa(-1.0)),
            GasConstants::default(),
        )
        .unwrap_err();
        assert!(matches!(err, GasError::NonPhysical { .. }));
    }

    #[test]
    fn combustion_gas_uses_gas_properties() {
        let s = FlowState::new(
            FlowStateInput::new("4")
                .mach(0.0)
                .t_total(k(1450.0))
                .medium(Medium::CombustionGas),
            GasConstants::default(),
        )
        .unwrap();
        assert_eq!(s.kappa().unwrap(), 1.33);
        assert_eq!(s.specific_heat().unwrap(), 1150.0);
        assert_eq!(s.t_static().unwrap().value, 1450.0);
    }

    #[test]
    fn velocity_and_density() {
        let s = ambient();
        let a = (1.4 * 287.05 * 216.0_f64).sqrt();
        assert!((s.velocity().unwrap().value - 0.8 * a).abs() < 1e-9);
        let rho = 22_632.0 / (287.05 * 216.0);
        assert!((s.density().unwrap().value - rho).abs() < 1e-12);
    }

    #[test]
    fn input_deserializes_from_json() {
        let json = r#"{ "station": "0", "mach": 0.8, "t_static": 216.0, "medium": "air" }"#;
        let input: FlowStateInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.station, "0");
        assert_eq!(input.t_static.unwrap().value, 216.0);
        assert_eq!(input.medium, Some(Medium::Air));

        let bad = r#"{ "station": "0", "medium": "steam" }"#;
        assert!(serde_json::from_str::<FlowStateInput>(bad).is_err());
    }
}
