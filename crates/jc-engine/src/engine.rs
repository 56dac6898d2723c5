//! The engine: one parameter set, one ambient condition, one cached
//! evaluation of every component.

use jc_components::{
    AmbientInterface, Bypass, CombustionChamber, Compressor, Fan, Inlet, Nozzle, NozzleType, Spool,
    Stage, Turbine,
};
use jc_core::{Force, GasConstants, MassRate, Memo, k, kgps, newton};
use jc_gas::{FlowState, FlowStateInput};
use jc_graph::{Graph, GraphError, StageKind};
use jc_project::{DesignVariable, EngineSpec, validate_spec};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};
use crate::stations::StationTable;
use crate::topology::{self, stage, station};

/// Evaluation switches that are not part of the parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    /// Force every efficiency and the combustor pressure ratio to 1.
    pub ideal_cycle: bool,
    /// Use the isentropic compressor exit temperature instead of the
    /// polytropic one.
    pub isentropic_compression: bool,
    pub constants: GasConstants,
}

/// Two-spool separate-flow turbofan evaluated on demand.
///
/// Each component is built the first time it is asked for, together with
/// everything upstream of it, and the result is kept for the lifetime of the
/// engine. Construction itself evaluates nothing.
///
/// Caches are never invalidated: [`Engine::set_parameter`] changes the
/// parameter set, but components evaluated before the call keep the values
/// they were built with. Build a new engine to see the effect of a change.
#[derive(Debug)]
pub struct Engine {
    spec: EngineSpec,
    options: EngineOptions,
    nozzle_type: NozzleType,
    ambient: FlowState,
    topology: Graph,

    interface: Memo<AmbientInterface>,
    inlet: Memo<Inlet>,
    fan: Memo<Fan>,
    bypass: Memo<Bypass>,
    lpc: Memo<Compressor>,
    hpc: Memo<Compressor>,
    combustor: Memo<CombustionChamber>,
    lp_spool: Memo<Spool>,
    hp_spool: Memo<Spool>,
    hpt: Memo<Turbine>,
    lpt: Memo<Turbine>,
    nozzle_core: Memo<Nozzle>,
    nozzle_bypass: Memo<Nozzle>,

    thrust: Memo<Force>,
    sfc: Memo<f64>,
}

impl Engine {
    /// Build an engine from a parameter set and the ambient condition.
    ///
    /// The ambient input is relabelled as station "0". When it carries
    /// neither a mass flow nor a corrected mass flow, the corrected mass
    /// flow of the parameter set is used; a flow given with the ambient
    /// takes precedence.
    ///
    /// # Errors
    /// Fails on an invalid parameter set, an unsupported nozzle type, or an
    /// ambient input that is conflicting or non-physical.
    pub fn new(spec: EngineSpec, ambient: FlowStateInput, options: EngineOptions) -> EngineResult<Self> {
        Self::build(spec, ambient, options, None)
    }

    /// Like [`Engine::new`], with one parameter overridden after the
    /// ideal-cycle overrides are applied.
    pub fn with_design_value(
        spec: EngineSpec,
        ambient: FlowStateInput,
        options: EngineOptions,
        variable: DesignVariable,
        value: f64,
    ) -> EngineResult<Self> {
        Self::build(spec, ambient, options, Some((variable, value)))
    }

    fn build(
        mut spec: EngineSpec,
        mut ambient: FlowStateInput,
        options: EngineOptions,
        design_value: Option<(DesignVariable, f64)>,
    ) -> EngineResult<Self> {
        if options.ideal_cycle {
            spec.apply_ideal_cycle();
        }
        if let Some((variable, value)) = design_value {
            spec.set(variable, value);
        }
        validate_spec(&spec)?;
        let nozzle_type: NozzleType = spec.nozzle_type.parse()?;

        ambient.station = station::AMBIENT.to_string();
        if ambient.mass_flow.is_none() && ambient.corrected_mass_flow.is_none() {
            ambient.corrected_mass_flow = Some(kgps(spec.corrected_mass_flow));
        }
        let ambient = FlowState::new(ambient, options.constants)?;
        let topology = topology::reference()?;

        Ok(Self {
            spec,
            options,
            nozzle_type,
            ambient,
            topology,
            interface: Memo::new(),
            inlet: Memo::new(),
            fan: Memo::new(),
            bypass: Memo::new(),
            lpc: Memo::new(),
            hpc: Memo::new(),
            combustor: Memo::new(),
            lp_spool: Memo::new(),
            hp_spool: Memo::new(),
            hpt: Memo::new(),
            lpt: Memo::new(),
            nozzle_core: Memo::new(),
            nozzle_bypass: Memo::new(),
            thrust: Memo::new(),
            sfc: Memo::new(),
        })
    }

    pub fn spec(&self) -> &EngineSpec {
        &self.spec
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn constants(&self) -> &GasConstants {
        &self.options.constants
    }

    pub fn ambient(&self) -> &FlowState {
        &self.ambient
    }

    pub fn topology(&self) -> &Graph {
        &self.topology
    }

    pub fn nozzle_type(&self) -> NozzleType {
        self.nozzle_type
    }

    pub fn parameter(&self, variable: DesignVariable) -> f64 {
        self.spec.get(variable)
    }

    /// Change one design parameter.
    ///
    /// Components and aggregates already evaluated are not recomputed.
    pub fn set_parameter(&mut self, variable: DesignVariable, value: f64) {
        self.spec.set(variable, value);
    }

    // ---- components ----

    pub fn interface(&self) -> EngineResult<&AmbientInterface> {
        self.interface.get_or_try_init(|| {
            settle(AmbientInterface::new(
                stage::INTERFACE,
                station::INTERFACE,
                self.ambient.clone(),
            ))
        })
    }

    pub fn inlet(&self) -> EngineResult<&Inlet> {
        self.inlet.get_or_try_init(|| {
            let inflow = self.interface()?.outflow()?.clone();
            settle(Inlet::new(stage::INLET, station::INLET, inflow, self.spec.eta_inlet))
        })
    }

    pub fn fan(&self) -> EngineResult<&Fan> {
        self.fan.get_or_try_init(|| {
            let inflow = self.inlet()?.outflow()?.clone();
            let fan = Fan::new(stage::FAN, station::FAN, inflow, self.spec.eta_fan, self.spec.pr_fan)
                .with_isentropic(self.options.isentropic_compression);
            settle(fan)
        })
    }

    pub fn bypass(&self) -> EngineResult<&Bypass> {
        self.bypass.get_or_try_init(|| {
            let inflow = self.fan()?.outflow()?.clone();
            let bypass = Bypass::new(
                stage::BYPASS,
                station::BYPASS_CORE,
                station::BYPASS_DUCT,
                inflow,
                self.spec.bypass_ratio,
            );
            bypass.bypass_outflow()?;
            settle(bypass)
        })
    }

    pub fn lpc(&self) -> EngineResult<&Compressor> {
        self.lpc.get_or_try_init(|| {
            let inflow = self.bypass()?.outflow()?.clone();
            self.compressor(stage::LPC, station::LPC, inflow, self.spec.eta_lpc, self.spec.pr_lpc)
        })
    }

    pub fn hpc(&self) -> EngineResult<&Compressor> {
        self.hpc.get_or_try_init(|| {
            let inflow = self.lpc()?.outflow()?.clone();
            self.compressor(stage::HPC, station::HPC, inflow, self.spec.eta_hpc, self.spec.pr_hpc)
        })
    }

    fn compressor(
        &self,
        name: &str,
        station: &str,
        inflow: FlowState,
        eta: f64,
        pressure_ratio: f64,
    ) -> EngineResult<Compressor> {
        let compressor = Compressor::new(name, station, inflow, eta, pressure_ratio)
            .with_isentropic(self.options.isentropic_compression);
        settle(compressor)
    }

    pub fn combustor(&self) -> EngineResult<&CombustionChamber> {
        self.combustor.get_or_try_init(|| {
            let inflow = self.hpc()?.outflow()?.clone();
            let combustor = CombustionChamber::new(
                stage::COMBUSTOR,
                station::COMBUSTOR,
                inflow,
                self.spec.eta_cc,
                self.spec.pr_cc,
                k(self.spec.combustion_temperature),
            );
            settle(combustor)
        })
    }

    /// Low-pressure spool: fan and LPC.
    pub fn lp_spool(&self) -> EngineResult<&Spool> {
        self.lp_spool.get_or_try_init(|| {
            let loads: [&dyn Stage; 2] = [self.fan()?, self.lpc()?];
            Ok(Spool::new(stage::LP_SPOOL, self.spec.eta_mech, &loads)?)
        })
    }

    /// High-pressure spool: HPC.
    pub fn hp_spool(&self) -> EngineResult<&Spool> {
        self.hp_spool.get_or_try_init(|| {
            let loads: [&dyn Stage; 1] = [self.hpc()?];
            Ok(Spool::new(stage::HP_SPOOL, self.spec.eta_mech, &loads)?)
        })
    }

    pub fn hpt(&self) -> EngineResult<&Turbine> {
        self.hpt.get_or_try_init(|| {
            let inflow = self.combustor()?.outflow()?.clone();
            let spool = self.hp_spool()?;
            settle(Turbine::new(stage::HPT, station::HPT, inflow, self.spec.eta_hpt, spool))
        })
    }

    pub fn lpt(&self) -> EngineResult<&Turbine> {
        self.lpt.get_or_try_init(|| {
            let inflow = self.hpt()?.outflow()?.clone();
            let spool = self.lp_spool()?;
            settle(Turbine::new(stage::LPT, station::LPT, inflow, self.spec.eta_lpt, spool))
        })
    }

    pub fn nozzle_core(&self) -> EngineResult<&Nozzle> {
        self.nozzle_core.get_or_try_init(|| {
            let inflow = self.lpt()?.outflow()?.clone();
            self.nozzle(stage::NOZZLE_CORE, (station::CORE_THROAT, station::CORE_EXIT), inflow)
        })
    }

    pub fn nozzle_bypass(&self) -> EngineResult<&Nozzle> {
        self.nozzle_bypass.get_or_try_init(|| {
            let inflow = self.bypass()?.bypass_outflow()?.clone();
            self.nozzle(stage::NOZZLE_BYPASS, (station::BYPASS_THROAT, station::BYPASS_EXIT), inflow)
        })
    }

    fn nozzle(&self, name: &str, stations: (&str, &str), inflow: FlowState) -> EngineResult<Nozzle> {
        let nozzle = Nozzle::new(
            name,
            stations,
            inflow,
            self.ambient.clone(),
            self.spec.eta_nozzle,
            self.nozzle_type,
        );
        nozzle.nozzle_flow()?;
        settle(nozzle)
    }

    // ---- lookup by name ----

    /// Any flow-path stage by name. Spools are not flow-path stages.
    pub fn stage(&self, name: &str) -> EngineResult<&dyn Stage> {
        let found: &dyn Stage = match name {
            stage::INTERFACE => self.interface()?,
            stage::INLET => self.inlet()?,
            stage::FAN => self.fan()?,
            stage::BYPASS => self.bypass()?,
            stage::LPC => self.lpc()?,
            stage::HPC => self.hpc()?,
            stage::COMBUSTOR => self.combustor()?,
            stage::HPT => self.hpt()?,
            stage::LPT => self.lpt()?,
            stage::NOZZLE_CORE => self.nozzle_core()?,
            stage::NOZZLE_BYPASS => self.nozzle_bypass()?,
            other => return Err(unknown_stage(other)),
        };
        Ok(found)
    }

    pub fn spool(&self, name: &str) -> EngineResult<&Spool> {
        match name {
            stage::LP_SPOOL => self.lp_spool(),
            stage::HP_SPOOL => self.hp_spool(),
            other => Err(unknown_stage(other)),
        }
    }

    pub fn turbine(&self, name: &str) -> EngineResult<&Turbine> {
        match name {
            stage::HPT => self.hpt(),
            stage::LPT => self.lpt(),
            other => Err(unknown_stage(other)),
        }
    }

    pub fn nozzle_by_name(&self, name: &str) -> EngineResult<&Nozzle> {
        match name {
            stage::NOZZLE_CORE => self.nozzle_core(),
            stage::NOZZLE_BYPASS => self.nozzle_bypass(),
            other => Err(unknown_stage(other)),
        }
    }

    /// Evaluate every stage in topological order.
    pub fn evaluate_all(&self) -> EngineResult<()> {
        let order = self.topology.evaluation_order();
        for node in order.iter().filter_map(|&id| self.topology.stage(id)) {
            match node.kind {
                StageKind::Spool => {
                    self.spool(&node.name)?;
                }
                _ => {
                    self.stage(&node.name)?;
                }
            }
        }
        Ok(())
    }

    /// Flow state at a station label.
    ///
    /// "7" and "16" are the total conditions ahead of each nozzle throat,
    /// "8" and "18" the static conditions at the throat.
    pub fn station(&self, label: &str) -> EngineResult<&FlowState> {
        let state = match label {
            station::AMBIENT => &self.ambient,
            station::INTERFACE => self.interface()?.outflow()?,
            station::INLET => self.inlet()?.outflow()?,
            station::FAN => self.fan()?.outflow()?,
            station::BYPASS_CORE => self.bypass()?.outflow()?,
            station::BYPASS_DUCT => self.bypass()?.bypass_outflow()?,
            station::LPC => self.lpc()?.outflow()?,
            station::HPC => self.hpc()?.outflow()?,
            station::COMBUSTOR => self.combustor()?.outflow()?,
            station::HPT => self.hpt()?.outflow()?,
            station::LPT => self.lpt()?.outflow()?,
            station::CORE_THROAT => self.nozzle_core()?.nozzle_flow()?,
            station::CORE_EXIT => self.nozzle_core()?.outflow()?,
            station::BYPASS_THROAT => self.nozzle_bypass()?.nozzle_flow()?,
            station::BYPASS_EXIT => self.nozzle_bypass()?.outflow()?,
            other => {
                return Err(GraphError::UnknownStation {
                    label: other.to_string(),
                }
                .into());
            }
        };
        Ok(state)
    }

    pub fn station_table(&self) -> EngineResult<StationTable> {
        StationTable::from_engine(self)
    }

    // ---- aggregates ----

    /// Net thrust, summed over every nozzle in the topology.
    pub fn thrust(&self) -> EngineResult<Force> {
        self.thrust.value_or_try_init(|| {
            let mut total = 0.0;
            for node in self.topology.stages_of_kind(StageKind::Nozzle) {
                total += self.nozzle_by_name(&node.name)?.thrust()?.value;
            }
            info!(engine = %self.spec.name, thrust_n = total, "net thrust");
            Ok(newton(total))
        })
    }

    pub fn fuel_flow(&self) -> EngineResult<MassRate> {
        Ok(self.combustor()?.fuel_flow()?)
    }

    /// Specific fuel consumption in g/(kN·s).
    pub fn sfc(&self) -> EngineResult<f64> {
        self.sfc.value_or_try_init(|| {
            let thrust = self.thrust()?.value;
            if thrust.is_nan() || thrust <= 0.0 {
                return Err(EngineError::NonPositiveThrust { thrust_n: thrust });
            }
            let sfc = self.fuel_flow()?.value / thrust * 1.0e6;
            info!(engine = %self.spec.name, sfc_g_per_kn_s = sfc, "specific fuel consumption");
            Ok(sfc)
        })
    }

    /// Fan × LPC × HPC pressure ratio.
    pub fn overall_pressure_ratio(&self) -> f64 {
        self.spec.overall_pressure_ratio()
    }
}

/// Evaluate a freshly built stage so it is cached complete.
fn settle<S: Stage>(stage: S) -> EngineResult<S> {
    let out = stage.outflow()?;
    debug!(stage = stage.name(), station = out.station(), "stage evaluated");
    Ok(stage)
}

fn unknown_stage(name: &str) -> EngineError {
    EngineError::UnknownStage {
        name: name.to_string(),
    }
}
