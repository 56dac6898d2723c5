//! Free stream to engine face.

use crate::common::{check_efficiency, downstream, isentropic_exponent};
use crate::error::ComponentResult;
use crate::traits::Stage;
use jc_core::{Memo, pa};
use jc_gas::{FlowState, FlowStateInput};

/// Zero-loss pass-through that renumbers the ambient condition.
///
/// The outflow carries the free-stream Mach number, static conditions and
/// resolved mass flow under the interface station label, so the [`Inlet`]
/// downstream sees a fully specified state.
#[derive(Debug, Clone)]
pub struct AmbientInterface {
    name: String,
    station: String,
    inflow: FlowState,
    outflow: Memo<FlowState>,
}

impl AmbientInterface {
    pub fn new(name: impl Into<String>, station: impl Into<String>, ambient: FlowState) -> Self {
        Self {
            name: name.into(),
            station: station.into(),
            inflow: ambient,
            outflow: Memo::new(),
        }
    }

    fn compute(&self) -> ComponentResult<FlowState> {
        let ambient = &self.inflow;
        let input = FlowStateInput::new(self.station.clone())
            .mach(ambient.mach()?)
            .t_static(ambient.t_static()?)
            .p_static(ambient.p_static()?)
            .mass_flow(ambient.mass_flow()?)
            .medium(ambient.medium()?);
        downstream(input, ambient.constants())
    }
}

impl Stage for AmbientInterface {
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

/// Engine intake with ram pressure recovery.
///
/// ```text
/// Tt_out = Tt_in
/// pt_out = ps_in · (1 + η · (κ-1)/2 · M²)^(κ/(κ-1))
/// ```
///
/// With `η = 1` the outflow total pressure equals the free-stream total
/// pressure.
#[derive(Debug, Clone)]
pub struct Inlet {
    name: String,
    station: String,
    inflow: FlowState,
    /// Pressure recovery efficiency (0 < eta <= 1)
    pub eta: f64,
    outflow: Memo<FlowState>,
}

impl Inlet {
    pub fn new(
        name: impl Into<String>,
        station: impl Into<String>,
        inflow: FlowState,
        eta: f64,
    ) -> Self {
        Self {
            name: name.into(),
            station: station.into(),
            inflow,
            eta,
            outflow: Memo::new(),
        }
    }

    fn compute(&self) -> ComponentResult<FlowState> {
        let eta = check_efficiency(&self.name, "eta_inlet", self.eta)?;
        let inflow = &self.inflow;
        let kappa = inflow.kappa()?;
        let mach = inflow.mach()?;
        let ram = 1.0 + eta * 0.5 * (kappa - 1.0) * mach * mach;
        let p_total = inflow.p_static()?.value * ram.powf(isentropic_exponent(kappa));

        let input = FlowStateInput::new(self.station.clone())
            .t_total(inflow.t_total()?)
            .p_total(pa(p_total))
            .mass_flow(inflow.mass_flow()?)
            .medium(inflow.medium()?);
        downstream(input, inflow.constants())
    }
}

impl Stage for Inlet {
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
