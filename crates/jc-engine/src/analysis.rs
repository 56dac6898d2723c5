//! Energy flow through the engine and the efficiencies derived from it.

use jc_components::{Nozzle, Stage};
use jc_graph::StageKind;
use serde::Serialize;

use crate::engine::Engine;
use crate::error::EngineResult;

/// Power balance of an evaluated engine, in W, plus efficiencies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergyBreakdown {
    /// Fuel flow × lower heating value.
    pub chemical_power: f64,
    /// Heat added in the combustor.
    pub heat_power: f64,
    /// Shaft work of every turbine.
    pub turbine_power: f64,
    /// Enthalpy drop from core nozzle inlet total to throat static.
    pub core_power: f64,
    /// Same, for the bypass nozzle.
    pub bypass_power: f64,
    /// Gas-generator exit total temperature, in K: combustor exit less the
    /// turbine work not spent on the bypass stream.
    pub t_gas: f64,
    /// Gas-generator exit total pressure, in Pa, after an expansion from
    /// combustor exit to `t_gas` at the LP turbine efficiency.
    pub p_gas: f64,
    /// Power available from expanding the gas-generator flow to ambient total
    /// pressure, less the intake's kinetic energy.
    pub gas_power: f64,
    /// Kinetic energy gained by the jets, `½ Σ ṁ (v² - v0²)`.
    pub momentum_power: f64,
    /// Pressure-thrust work, `Σ A (pe - p0) v`.
    pub pressure_power: f64,
    pub jet_power: f64,
    /// Thrust × flight speed.
    pub thrust_power: f64,
    /// Fully expanded jet speed giving the core nozzle's thrust, `F/ṁ + v0`.
    pub equivalent_velocity_core: f64,
    pub equivalent_velocity_bypass: f64,
    pub eta_propulsive: f64,
    /// Ideal Brayton efficiency at the overall pressure ratio.
    pub eta_ideal: f64,
    pub eta_carnot: f64,
    pub eta_thermal: f64,
    pub eta_overall: f64,
}

impl EnergyBreakdown {
    pub fn from_engine(engine: &Engine) -> EngineResult<Self> {
        let constants = engine.constants();
        let ambient = engine.ambient();
        let v0 = ambient.velocity()?.value;
        let p0 = ambient.p_static()?.value;

        let cc = engine.combustor()?;
        let chemical_power = cc.fuel_flow()?.value * constants.lower_heating_value;
        let cc_out = cc.outflow()?;
        let t4 = cc_out.t_total()?.value;
        let heat_power =
            cc.inflow().mass_flow()?.value * cc_out.specific_heat()? * (t4 - cc.inflow().t_total()?.value);

        let topology = engine.topology();
        let mut turbine_power = 0.0;
        for node in topology.stages_of_kind(StageKind::Turbine) {
            turbine_power += engine.turbine(&node.name)?.work_output().value;
        }

        let nozzle_core = engine.nozzle_core()?;
        let nozzle_bypass = engine.nozzle_bypass()?;
        let core_power = nozzle_power(nozzle_core)?;
        let bypass_power = nozzle_power(nozzle_bypass)?;

        let fan = engine.fan()?;
        let bypass_in = nozzle_bypass.inflow();
        let fan_bypass_work = bypass_in.mass_flow()?.value
            * bypass_in.specific_heat()?
            * (fan.outflow()?.t_total()?.value - fan.inflow().t_total()?.value);
        let m_gas = cc_out.mass_flow()?.value;
        let cp_gas = cc_out.specific_heat()?;
        let kappa_gas = cc_out.kappa()?;
        let t_gas = t4 - (turbine_power - fan_bypass_work) / (m_gas * cp_gas);
        let expansion = 1.0 - (1.0 - t_gas / t4) / engine.lpt()?.eta;
        let p_gas = cc_out.p_total()?.value * expansion.powf(kappa_gas / (kappa_gas - 1.0));
        let p0_total = ambient.p_total()?.value;
        let m_core = engine.bypass()?.mass_flow_core()?.value;
        let gas_power = m_gas
            * cp_gas
            * t_gas
            * (1.0 - (p0_total / p_gas).powf((kappa_gas - 1.0) / kappa_gas))
            - 0.5 * m_core * v0 * v0;

        let mut momentum_power = 0.0;
        let mut pressure_power = 0.0;
        for node in topology.stages_of_kind(StageKind::Nozzle) {
            let nozzle = engine.nozzle_by_name(&node.name)?;
            let out = nozzle.outflow()?;
            let v = out.velocity()?.value;
            momentum_power += 0.5 * out.mass_flow()?.value * (v * v - v0 * v0);
            pressure_power += nozzle.throat_area()?.value * (out.p_static()?.value - p0) * v;
        }
        let jet_power = momentum_power + pressure_power;
        let thrust_power = engine.thrust()?.value * v0;
        let equivalent_velocity = |nozzle: &Nozzle| -> EngineResult<f64> {
            Ok(nozzle.thrust()?.value / nozzle.outflow()?.mass_flow()?.value + v0)
        };
        let equivalent_velocity_core = equivalent_velocity(nozzle_core)?;
        let equivalent_velocity_bypass = equivalent_velocity(nozzle_bypass)?;

        let kappa = constants.kappa_air;
        let eta_ideal = 1.0 - engine.overall_pressure_ratio().powf(-(kappa - 1.0) / kappa);
        let eta_carnot = 1.0 - engine.inlet()?.outflow()?.t_total()?.value / t4;

        Ok(Self {
            chemical_power,
            heat_power,
            turbine_power,
            core_power,
            bypass_power,
            t_gas,
            p_gas,
            gas_power,
            momentum_power,
            pressure_power,
            jet_power,
            thrust_power,
            equivalent_velocity_core,
            equivalent_velocity_bypass,
            eta_propulsive: thrust_power / jet_power,
            eta_ideal,
            eta_carnot,
            eta_thermal: jet_power / chemical_power,
            eta_overall: thrust_power / chemical_power,
        })
    }
}

fn nozzle_power(nozzle: &dyn Stage) -> EngineResult<f64> {
    let inflow = nozzle.inflow();
    let drop = inflow.t_total()?.value - nozzle.outflow()?.t_static()?.value;
    Ok(inflow.mass_flow()?.value * inflow.specific_heat()? * drop)
}
