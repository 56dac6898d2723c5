//! Compressor and fan.

use crate::common::{check_efficiency, check_pressure_ratio, downstream};
use crate::error::ComponentResult;
use crate::traits::Stage;
use jc_core::{Memo, Power, k, pa, watt};
use jc_gas::{FlowState, FlowStateInput};

/// Axial compressor stage group.
///
/// ## Model
///
/// ```text
/// pt_out = pt_in · PR
/// Tt_out = Tt_in · (1 + (PR^((κ-1)/κ) - 1) / η)      (real)
/// Tt_out = Tt_in · exp((R / cp) · ln PR)             (isentropic)
/// W      = ṁ · cp · (Tt_out - Tt_in)
/// ```
///
/// Parameters are checked when the outflow is first requested, not at
/// construction.
#[derive(Debug, Clone)]
pub struct Compressor {
    name: String,
    station: String,
    inflow: FlowState,
    /// Isentropic efficiency (0 < eta <= 1)
    pub eta: f64,
    /// Total pressure ratio (> 0)
    pub pressure_ratio: f64,
    /// Use the isentropic temperature relation instead of the efficiency form.
    pub isentropic: bool,
    outflow: Memo<FlowState>,
}

impl Compressor {
    pub fn new(
        name: impl Into<String>,
        station: impl Into<String>,
        inflow: FlowState,
        eta: f64,
        pressure_ratio: f64,
    ) -> Self {
        Self {
            name: name.into(),
            station: station.into(),
            inflow,
            eta,
            pressure_ratio,
            isentropic: false,
            outflow: Memo::new(),
        }
    }

    pub fn with_isentropic(mut self, isentropic: bool) -> Self {
        self.isentropic = isentropic;
        self
    }

    fn compute(&self) -> ComponentResult<FlowState> {
        let eta = check_efficiency(&self.name, "eta", self.eta)?;
        let pr = check_pressure_ratio(&self.name, self.pressure_ratio)?;
        let inflow = &self.inflow;
        let t_in = inflow.t_total()?.value;

        let t_out = if self.isentropic {
            let r_over_cp = inflow.constants().gas_constant / inflow.specific_heat()?;
            t_in * (r_over_cp * pr.ln()).exp()
        } else {
            let kappa = inflow.kappa()?;
            t_in * (1.0 + (pr.powf((kappa - 1.0) / kappa) - 1.0) / eta)
        };

        let input = FlowStateInput::new(self.station.clone())
            .t_total(k(t_out))
            .p_total(pa(inflow.p_total()?.value * pr))
            .mass_flow(inflow.mass_flow()?)
            .medium(inflow.medium()?);
        downstream(input, inflow.constants())
    }
}

impl Stage for Compressor {
    fn name(&self) -> &str {
        &self.name
    }

    fn inflow(&self) -> &FlowState {
        &self.inflow
    }

    fn outflow(&self) -> ComponentResult<&FlowState> {
        self.outflow.get_or_try_init(|| self.compute())
    }

    fn work_done(&self) -> ComponentResult<Power> {
        let out = self.outflow()?;
        let delta_t = out.t_total()?.value - self.inflow.t_total()?.value;
        let work = self.inflow.mass_flow()?.value * self.inflow.specific_heat()? * delta_t;
        Ok(watt(work))
    }
}

/// Fan: a compressor acting on the full engine mass flow.
///
/// Shares the compressor transfer function; it differs only in its place in
/// the topology (upstream of the bypass split).
#[derive(Debug, Clone)]
pub struct Fan {
    stage: Compressor,
}

impl Fan {
    pub fn new(
        name: impl Into<String>,
        station: impl Into<String>,
        inflow: FlowState,
        eta: f64,
        pressure_ratio: f64,
    ) -> Self {
        Self {
            stage: Compressor::new(name, station, inflow, eta, pressure_ratio),
        }
    }

    pub fn with_isentropic(mut self, isentropic: bool) -> Self {
        self.stage.isentropic = isentropic;
        self
    }

    pub fn eta(&self) -> f64 {
        self.stage.eta
    }

    pub fn pressure_ratio(&self) -> f64 {
        self.stage.pressure_ratio
    }
}

impl Stage for Fan {
    fn name(&self) -> &str {
        self.stage.name()
    }

    fn inflow(&self) -> &FlowState {
        self.stage.inflow()
    }

    fn outflow(&self) -> ComponentResult<&FlowState> {
        self.stage.outflow()
    }

    fn work_done(&self) -> ComponentResult<Power> {
        self.stage.work_done()
    }
}
