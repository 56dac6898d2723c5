//! Convergent exhaust nozzle.

use crate::common::{check_efficiency, downstream, isentropic_exponent};
use crate::error::{ComponentError, ComponentResult};
use crate::traits::Stage;
use jc_core::{Area, Force, Memo, Pressure, Temperature, Velocity, k, m2, newton, pa};
use jc_gas::{FlowState, FlowStateInput};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// Nozzle geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NozzleType {
    #[default]
    Convergent,
}

impl NozzleType {
    pub fn as_str(self) -> &'static str {
        match self {
            NozzleType::Convergent => "convergent",
        }
    }
}

impl FromStr for NozzleType {
    type Err = ComponentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "convergent" => Ok(NozzleType::Convergent),
            other => Err(ComponentError::NotSupported {
                what: format!("nozzle type '{other}', only convergent nozzles are supported"),
            }),
        }
    }
}

/// Choked convergent nozzle.
///
/// Only the choked state is modelled. The nozzle is choked when
///
/// ```text
/// p_crit = pt · (1 - (1/η) · (κ-1)/(κ+1))^(κ/(κ-1))
/// pt > p_crit
/// ```
///
/// Any other outcome fails with [`ComponentError::NotChoked`], since the exit
/// Mach number is then unknown. At the throat (Mach 1):
///
/// ```text
/// Ts_exit = Tt · 2/(κ+1)
/// ps_exit = p_crit
/// A       = ṁ / (ρ · v)
/// F       = ṁ · (v - v0) + A · (ps_exit - ps0)
/// ```
#[derive(Debug, Clone)]
pub struct Nozzle {
    name: String,
    /// Station before the throat
    throat_station: String,
    /// Station at the throat exit
    exit_station: String,
    inflow: FlowState,
    ambient: FlowState,
    pub eta: f64,
    nozzle_type: NozzleType,
    nozzle_flow: Memo<FlowState>,
    outflow: Memo<FlowState>,
}

impl Nozzle {
    pub fn new(
        name: impl Into<String>,
        stations: (&str, &str),
        inflow: FlowState,
        ambient: FlowState,
        eta: f64,
        nozzle_type: NozzleType,
    ) -> Self {
        Self {
            name: name.into(),
            throat_station: stations.0.to_string(),
            exit_station: stations.1.to_string(),
            inflow,
            ambient,
            eta,
            nozzle_type,
            nozzle_flow: Memo::new(),
            outflow: Memo::new(),
        }
    }

    pub fn nozzle_type(&self) -> NozzleType {
        self.nozzle_type
    }

    pub fn ambient(&self) -> &FlowState {
        &self.ambient
    }

    pub fn t_total(&self) -> ComponentResult<Temperature> {
        Ok(self.inflow.t_total()?)
    }

    pub fn p_total(&self) -> ComponentResult<Pressure> {
        Ok(self.inflow.p_total()?)
    }

    /// Critical pressure. Not finite when η is below `(κ-1)/(κ+1)`.
    pub fn p_critical(&self) -> ComponentResult<Pressure> {
        let eta = check_efficiency(&self.name, "eta_nozzle", self.eta)?;
        let kappa = self.inflow.kappa()?;
        let base = 1.0 - (1.0 / eta) * (kappa - 1.0) / (kappa + 1.0);
        Ok(pa(base.powf(isentropic_exponent(kappa)) * self.p_total()?.value))
    }

    /// `pt / p_crit`
    pub fn critical_ratio(&self) -> ComponentResult<f64> {
        Ok(self.p_total()?.value / self.p_critical()?.value)
    }

    /// Whether `pt > p_crit`.
    pub fn is_choked(&self) -> ComponentResult<bool> {
        Ok(self.p_total()?.value > self.p_critical()?.value)
    }

    fn ensure_choked(&self) -> ComponentResult<()> {
        let p_total = self.p_total()?.value;
        let p_critical = self.p_critical()?.value;
        let choked = p_total > p_critical;
        debug!(nozzle = %self.name, p_total_pa = p_total, p_critical_pa = p_critical, choked, "nozzle choke check");
        if choked {
            Ok(())
        } else {
            Err(ComponentError::NotChoked {
                component: self.name.clone(),
                p_total_pa: p_total,
                p_critical_pa: p_critical,
            })
        }
    }

    /// Static temperature at the throat.
    pub fn t_exit(&self) -> ComponentResult<Temperature> {
        let kappa = self.inflow.kappa()?;
        Ok(k(self.t_total()?.value * 2.0 / (kappa + 1.0)))
    }

    /// Static pressure at the throat.
    pub fn p_exit(&self) -> ComponentResult<Pressure> {
        Ok(pa(self.p_total()?.value / self.critical_ratio()?))
    }

    /// Total conditions ahead of the throat.
    pub fn nozzle_flow(&self) -> ComponentResult<&FlowState> {
        self.nozzle_flow.get_or_try_init(|| {
            let input = FlowStateInput::new(self.throat_station.clone())
                .t_total(self.t_total()?)
                .p_total(self.p_total()?)
                .mass_flow(self.inflow.mass_flow()?)
                .medium(self.inflow.medium()?);
            downstream(input, self.inflow.constants())
        })
    }

    fn compute(&self) -> ComponentResult<FlowState> {
        self.ensure_choked()?;
        let input = FlowStateInput::new(self.exit_station.clone())
            .mach(1.0)
            .t_static(self.t_exit()?)
            .p_static(self.p_exit()?)
            .mass_flow(self.inflow.mass_flow()?)
            .medium(self.inflow.medium()?);
        downstream(input, self.inflow.constants())
    }

    pub fn exit_velocity(&self) -> ComponentResult<Velocity> {
        Ok(self.outflow()?.velocity()?)
    }

    pub fn throat_area(&self) -> ComponentResult<Area> {
        let out = self.outflow()?;
        let flux = out.density()?.value * out.velocity()?.value;
        Ok(m2(out.mass_flow()?.value / flux))
    }

    /// `ṁ · (v_exit - v0)`
    pub fn momentum_thrust(&self) -> ComponentResult<Force> {
        let out = self.outflow()?;
        let dv = out.velocity()?.value - self.ambient.velocity()?.value;
        Ok(newton(out.mass_flow()?.value * dv))
    }

    /// `A · (ps_exit - ps0)`
    pub fn pressure_thrust(&self) -> ComponentResult<Force> {
        let out = self.outflow()?;
        let dp = out.p_static()?.value - self.ambient.p_static()?.value;
        Ok(newton(self.throat_area()?.value * dp))
    }

    pub fn thrust(&self) -> ComponentResult<Force> {
        Ok(self.momentum_thrust()? + self.pressure_thrust()?)
    }
}

impl Stage for Nozzle {
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
