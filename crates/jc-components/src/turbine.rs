//! Turbine component model.

use crate::common::{check_efficiency, check_positive, downstream, isentropic_exponent};
use crate::error::ComponentResult;
use crate::spool::Spool;
use crate::traits::Stage;
use jc_core::{Memo, Power, k, pa};
use jc_gas::{FlowState, FlowStateInput};

/// Gas turbine driving one spool.
///
/// ## Model
///
/// The turbine delivers exactly the work its spool requires (mechanical
/// losses are already in the spool figure):
///
/// ```text
/// Tt_out = Tt_in - W / (ṁ · cp)
/// pt_out = pt_in · (1 + (Tt_out/Tt_in - 1) / η)^(κ/(κ-1))
/// ```
///
/// A lower efficiency yields a lower recovered pressure for the same
/// temperature drop.
#[derive(Debug, Clone)]
pub struct Turbine {
    name: String,
    station: String,
    inflow: FlowState,
    /// Isentropic efficiency (0 < eta <= 1)
    pub eta: f64,
    work_output: Power,
    outflow: Memo<FlowState>,
}

impl Turbine {
    pub fn new(
        name: impl Into<String>,
        station: impl Into<String>,
        inflow: FlowState,
        eta: f64,
        spool: &Spool,
    ) -> Self {
        Self {
            name: name.into(),
            station: station.into(),
            inflow,
            eta,
            work_output: spool.work_required(),
            outflow: Memo::new(),
        }
    }

    /// Shaft work delivered to the spool.
    pub fn work_output(&self) -> Power {
        self.work_output
    }

    fn compute(&self) -> ComponentResult<FlowState> {
        let eta = check_efficiency(&self.name, "eta", self.eta)?;
        let inflow = &self.inflow;
        let t_in = inflow.t_total()?.value;
        let drop = self.work_output.value / (inflow.mass_flow()?.value * inflow.specific_heat()?);
        let t_out = check_positive(&self.name, "outflow total temperature", t_in - drop)?;

        let kappa = inflow.kappa()?;
        let base = check_positive(
            &self.name,
            "expansion ratio",
            1.0 + (t_out / t_in - 1.0) / eta,
        )?;
        let p_out = inflow.p_total()?.value * base.powf(isentropic_exponent(kappa));

        let input = FlowStateInput::new(self.station.clone())
            .t_total(k(t_out))
            .p_total(pa(p_out))
            .mass_flow(inflow.mass_flow()?)
            .medium(inflow.medium()?);
        downstream(input, inflow.constants())
    }
}

impl Stage for Turbine {
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
    use crate::Compressor;
    use crate::error::ComponentError;
    use jc_core::{GasConstants, kgps};
    use jc_gas::Medium;

    fn gas(m: f64) -> FlowState {
        FlowState::new(
            FlowStateInput::new("4")
                .t_total(k(1450.0))
                .p_total(pa(1.6e6))
                .mass_flow(kgps(m))
                .medium(Medium::CombustionGas),
            GasConstants::default(),
        )
        .unwrap()
    }

    fn air() -> FlowState {
        FlowState::new(
            FlowStateInput::new("25")
                .t_total(k(313.3))
                .p_total(pa(90_000.0))
                .mass_flow(kgps(57.6))
                .medium(Medium::Air),
            GasConstants::default(),
        )
        .unwrap()
    }

    fn spool() -> Spool {
        let hpc = Compressor::new("hpc", "3", air(), 0.9, 19.0);
        Spool::new("hp_spool", 0.99, &[&hpc]).unwrap()
    }

    #[test]
    fn temperature_drop_matches_work() {
        let spool = spool();
        let hpt = Turbine::new("hpt", "45", gas(58.65), 0.92, &spool);
        let out = hpt.outflow().unwrap();
        let expected = 1450.0 - spool.work_required().value / (58.65 * 1150.0);
        assert!((out.t_total().unwrap().value - expected).abs() < 1e-9);
        assert_eq!(hpt.work_output(), spool.work_required());
        assert!(out.p_total().unwrap().value < 1.6e6);
    }

    #[test]
    fn lower_efficiency_recovers_less_pressure() {
        let spool = spool();
        let ideal = Turbine::new("hpt", "45", gas(58.65), 1.0, &spool);
        let real = Turbine::new("hpt", "45", gas(58.65), 0.85, &spool);
        let p_ideal = ideal.outflow().unwrap().p_total().unwrap().value;
        let p_real = real.outflow().unwrap().p_total().unwrap().value;
        assert!(p_real < p_ideal);
    }

    #[test]
    fn excessive_work_is_non_physical() {
        let spool = spool();
        let starved = Turbine::new("hpt", "45", gas(0.5), 0.92, &spool);
        assert!(matches!(
            starved.outflow(),
            Err(ComponentError::NonPhysical { .. })
        ));
    }
}
