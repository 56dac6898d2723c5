//! Core/bypass flow splitter.

use crate::common::downstream;
use crate::error::{ComponentError, ComponentResult};
use crate::traits::Stage;
use jc_core::{MassRate, Memo, kgps};
use jc_gas::{FlowState, FlowStateInput};

/// Splits the fan outflow into a core stream and a bypass stream.
///
/// Both streams keep the inflow total temperature and pressure; only the
/// mass flow is redistributed:
///
/// ```text
/// ṁ_core   = ṁ / (1 + BPR)
/// ṁ_bypass = ṁ_core · BPR
/// ```
///
/// [`Stage::outflow`] is the core stream; the bypass stream is available
/// from [`Bypass::bypass_outflow`].
#[derive(Debug, Clone)]
pub struct Bypass {
    name: String,
    core_station: String,
    bypass_station: String,
    inflow: FlowState,
    pub bypass_ratio: f64,
    core: Memo<FlowState>,
    duct: Memo<FlowState>,
}

impl Bypass {
    pub fn new(
        name: impl Into<String>,
        core_station: impl Into<String>,
        bypass_station: impl Into<String>,
        inflow: FlowState,
        bypass_ratio: f64,
    ) -> Self {
        Self {
            name: name.into(),
            core_station: core_station.into(),
            bypass_station: bypass_station.into(),
            inflow,
            bypass_ratio,
            core: Memo::new(),
            duct: Memo::new(),
        }
    }

    fn ratio(&self) -> ComponentResult<f64> {
        if self.bypass_ratio.is_finite() && self.bypass_ratio >= 0.0 {
            Ok(self.bypass_ratio)
        } else {
            Err(ComponentError::OutOfRange {
                component: self.name.clone(),
                parameter: "bypass_ratio",
                value: self.bypass_ratio,
                expected: "bypass_ratio >= 0",
            })
        }
    }

    pub fn mass_flow_core(&self) -> ComponentResult<MassRate> {
        let bpr = self.ratio()?;
        Ok(kgps(self.inflow.mass_flow()?.value / (bpr + 1.0)))
    }

    pub fn mass_flow_bypass(&self) -> ComponentResult<MassRate> {
        Ok(self.mass_flow_core()? * self.ratio()?)
    }

    /// Flow state entering the bypass duct.
    pub fn bypass_outflow(&self) -> ComponentResult<&FlowState> {
        self.duct
            .get_or_try_init(|| self.split(&self.bypass_station, self.mass_flow_bypass()?))
    }

    fn split(&self, station: &str, mass_flow: MassRate) -> ComponentResult<FlowState> {
        let input = FlowStateInput::new(station)
            .t_total(self.inflow.t_total()?)
            .p_total(self.inflow.p_total()?)
            .mass_flow(mass_flow)
            .medium(self.inflow.medium()?);
        downstream(input, self.inflow.constants())
    }
}

impl Stage for Bypass {
    fn name(&self) -> &str {
        &self.name
    }

    fn inflow(&self) -> &FlowState {
        &self.inflow
    }

    fn outflow(&self) -> ComponentResult<&FlowState> {
        self.core
            .get_or_try_init(|| self.split(&self.core_station, self.mass_flow_core()?))
    }
}
