//! Shaft power balance.

use crate::common::check_efficiency;
use crate::error::ComponentResult;
use crate::traits::Stage;
use jc_core::{Power, watt};
use tracing::debug;

/// Mechanical shaft coupling compressor stages to one turbine.
///
/// The work the turbine must deliver is the sum of the work absorbed by the
/// attached stages divided by the mechanical efficiency. A spool is built
/// from already evaluated loads, so it holds no reference to them.
#[derive(Debug, Clone, PartialEq)]
pub struct Spool {
    name: String,
    eta_mech: f64,
    loads: Vec<String>,
    work_absorbed: Power,
    work_required: Power,
}

impl Spool {
    /// Aggregate the work of `loads`.
    ///
    /// # Errors
    /// Propagates [`crate::ComponentError::MissingWork`] when a load has no
    /// work-done value, and any error raised evaluating a load.
    pub fn new(
        name: impl Into<String>,
        eta_mech: f64,
        loads: &[&dyn Stage],
    ) -> ComponentResult<Self> {
        let name = name.into();
        let eta_mech = check_efficiency(&name, "eta_mech", eta_mech)?;

        let mut absorbed = 0.0;
        for load in loads {
            absorbed += load.work_done()?.value;
        }
        let required = absorbed / eta_mech;
        let loads: Vec<String> = loads.iter().map(|l| l.name().to_string()).collect();
        debug!(spool = %name, ?loads, work_absorbed_w = absorbed, work_required_w = required, "spool work balance");

        Ok(Self {
            name,
            eta_mech,
            loads,
            work_absorbed: watt(absorbed),
            work_required: watt(required),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn eta_mech(&self) -> f64 {
        self.eta_mech
    }

    /// Names of the attached compression stages.
    pub fn loads(&self) -> &[String] {
        &self.loads
    }

    /// Work absorbed by the attached stages.
    pub fn work_absorbed(&self) -> Power {
        self.work_absorbed
    }

    /// Work the driving turbine must deliver.
    pub fn work_required(&self) -> Power {
        self.work_required
    }
}
