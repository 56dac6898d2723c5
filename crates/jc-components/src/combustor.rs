//! Combustion chamber.

use crate::common::{check_efficiency, check_positive, downstream};
use crate::error::{ComponentError, ComponentResult};
use crate::traits::Stage;
use jc_core::{MassRate, Memo, Temperature, kgps, pa};
use jc_gas::{FlowState, FlowStateInput, Medium};

/// Burner raising the core stream to a prescribed exit temperature.
///
/// ```text
/// ṁ_f   = ṁ · cp_gas · (Tt_exit - Tt_in) / (η · LHV)
/// pt_out = pt_in · PR
/// ṁ_out = ṁ + ṁ_f
/// ```
///
/// The outflow medium is combustion gas.
#[derive(Debug, Clone)]
pub struct CombustionChamber {
    name: String,
    station: String,
    inflow: FlowState,
    pub eta: f64,
    /// Total pressure ratio, at most 1
    pub pressure_ratio: f64,
    pub t_total_exit: Temperature,
    fuel_flow: Memo<MassRate>,
    outflow: Memo<FlowState>,
}

impl CombustionChamber {
    pub fn new(
        name: impl Into<String>,
        station: impl Into<String>,
        inflow: FlowState,
        eta: f64,
        pressure_ratio: f64,
        t_total_exit: Temperature,
    ) -> Self {
        Self {
            name: name.into(),
            station: station.into(),
            inflow,
            eta,
            pressure_ratio,
            t_total_exit,
            fuel_flow: Memo::new(),
            outflow: Memo::new(),
        }
    }

    fn exit_temperature(&self) -> ComponentResult<f64> {
        let t_exit = check_positive(&self.name, "exit temperature", self.t_total_exit.value)?;
        if t_exit <= self.inflow.t_total()?.value {
            return Err(ComponentError::OutOfRange {
                component: self.name.clone(),
                parameter: "t_total_exit",
                value: t_exit,
                expected: "above the inflow total temperature",
            });
        }
        Ok(t_exit)
    }

    /// Fuel mass flow needed to reach the exit temperature.
    pub fn fuel_flow(&self) -> ComponentResult<MassRate> {
        self.fuel_flow.value_or_try_init(|| {
            let eta = check_efficiency(&self.name, "eta_cc", self.eta)?;
            let t_exit = self.exit_temperature()?;
            let constants = self.inflow.constants();
            let heat = self.inflow.mass_flow()?.value
                * constants.specific_heat_gas
                * (t_exit - self.inflow.t_total()?.value);
            Ok(kgps(heat / (eta * constants.lower_heating_value)))
        })
    }

    fn compute(&self) -> ComponentResult<FlowState> {
        let pr = self.pressure_ratio;
        if !(pr.is_finite() && pr > 0.0 && pr <= 1.0) {
            return Err(ComponentError::OutOfRange {
                component: self.name.clone(),
                parameter: "pr_cc",
                value: pr,
                expected: "0 < pr_cc <= 1",
            });
        }
        let fuel = self.fuel_flow()?;
        let input = FlowStateInput::new(self.station.clone())
            .t_total(self.t_total_exit)
            .p_total(pa(self.inflow.p_total()?.value * pr))
            .mass_flow(self.inflow.mass_flow()? + fuel)
            .medium(Medium::CombustionGas);
        downstream(input, self.inflow.constants())
    }
}

impl Stage for CombustionChamber {
    fn name(&self) -> &str {
        &self.name
    }

    fn inflow(&self) -> &FlowState {
        &self.inflow
    }

    fn outflow(&self) -> ComponentResult<&FlowState> {
        self.outflow.get_or_try_init(|| self.compute())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jc_core::{GasConstants, k};

    fn burner(eta: f64, pr: f64, t_exit: f64) -> CombustionChamber {
        let inflow = FlowState::new(
            FlowStateInput::new("3")
                .t_total(k(772.554))
                .p_total(pa(1.7e6))
                .mass_flow(kgps(57.597))
                .medium(Medium::Air),
            GasConstants::default(),
        )
        .unwrap();
        CombustionChamber::new("combustor", "4", inflow, eta, pr, k(t_exit))
    }

    #[test]
    fn reference_fuel_flow() {
        let cc = burner(0.99, 0.96, 1450.0);
        let fuel = cc.fuel_flow().unwrap().value;
        assert!((fuel - 1.05407).abs() < 1e-4, "fuel = {fuel}");
        let out = cc.outflow().unwrap();
        assert_eq!(out.station(), "4");
        assert_eq!(out.medium().unwrap(), Medium::CombustionGas);
        assert_eq!(out.t_total().unwrap().value, 1450.0);
        assert!((out.p_total().unwrap().value - 1.7e6 * 0.96).abs() < 1e-6);
        assert!((out.mass_flow().unwrap().value - (57.597 + fuel)).abs() < 1e-9);
    }

    #[test]
    fn fuel_flow_computed_once() {
        let mut cc = burner(0.99, 0.96, 1450.0);
        let first = cc.fuel_flow().unwrap();
        assert!(cc.fuel_flow.is_filled());
        cc.eta = 0.5;
        let second = cc.fuel_flow().unwrap();
        assert_eq!(first.value.to_bits(), second.value.to_bits());
        let out = cc.outflow().unwrap();
        assert!((out.mass_flow().unwrap().value - (57.597 + first.value)).abs() < 1e-12);
    }

    #[test]
    fn failed_fuel_flow_not_cached() {
        let cc = burner(0.99, 0.96, 700.0);
        assert!(cc.fuel_flow().is_err());
        assert!(!cc.fuel_flow.is_filled());
    }

    #[test]
    fn pressure_gain_rejected() {
        let cc = burner(0.99, 1.05, 1450.0);
        assert!(matches!(
            cc.outflow(),
            Err(ComponentError::OutOfRange { parameter: "pr_cc", .. })
        ));
    }

    #[test]
    fn exit_below_inlet_rejected() {
        let cc = burner(0.99, 0.96, 700.0);
        assert!(matches!(
            cc.fuel_flow(),
            Err(ComponentError::OutOfRange { parameter: "t_total_exit", .. })
        ));
    }
}
