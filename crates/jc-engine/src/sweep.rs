//! One-dimensional parametric sweeps.
//!
//! Every member of a sweep is an independent [`Engine`] built from the same
//! parameter set with one design variable replaced, so members can run in
//! any order or in parallel.

use jc_core::linspace;
use jc_gas::FlowStateInput;
use jc_project::{DesignVariable, EngineSpec};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, info_span, warn};

use crate::engine::{Engine, EngineOptions};
use crate::error::{EngineResult, SweepError};

/// Candidate values for the swept variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignRange {
    values: Vec<f64>,
    /// Position of the unmodified design value, when it is in the range.
    original_index: Option<usize>,
}

impl DesignRange {
    /// Default range around the current design value.
    ///
    /// Efficiencies sweep `[0.9, 1.0]`. Any other variable sweeps
    /// `[0.9·current, 1.1·current]`, built from a lower half ending exactly
    /// at `current` and an upper half starting just after it, so the design
    /// point appears bit-for-bit in the range. Each half needs at least two
    /// points.
    pub fn auto(variable: DesignVariable, current: f64, points: usize) -> Result<Self, SweepError> {
        let min = if variable.is_efficiency() { 2 } else { 4 };
        if points < min {
            return Err(SweepError::TooFewPoints { points, min });
        }
        if variable.is_efficiency() {
            let values = linspace(0.9, 1.0, points);
            let original_index = values.iter().position(|&v| v == current);
            return Ok(Self {
                values,
                original_index,
            });
        }

        let below = points / 2;
        let mut values = linspace(0.9 * current, current, below);
        values.extend(linspace(current, 1.1 * current, points - below + 1).into_iter().skip(1));
        Ok(Self {
            values,
            original_index: Some(below - 1),
        })
    }

    /// Explicit values, swept in the given order.
    pub fn explicit(values: Vec<f64>) -> Result<Self, SweepError> {
        if values.is_empty() {
            return Err(SweepError::TooFewPoints { points: 0, min: 1 });
        }
        Ok(Self {
            values,
            original_index: None,
        })
    }

    /// Values given as a table. Only a single row is accepted.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, SweepError> {
        match rows {
            [row] => Self::explicit(row.clone()),
            _ => Err(SweepError::MultiDimensional {
                rows: rows.len(),
                cols: rows.iter().map(Vec::len).max().unwrap_or(0),
            }),
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn original_index(&self) -> Option<usize> {
        self.original_index
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Thrust and SFC for every value of the swept variable, aligned with
/// `values`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepResult {
    pub variable: DesignVariable,
    pub values: Vec<f64>,
    pub thrust_n: Vec<f64>,
    /// g/(kN·s)
    pub sfc: Vec<f64>,
    /// Design value of the variable before the sweep.
    pub design_value: f64,
    pub original_index: Option<usize>,
}

impl SweepResult {
    /// Change of each swept value relative to the design value, in percent.
    pub fn relative_change_pct(&self) -> Vec<f64> {
        self.values
            .iter()
            .map(|v| (v / self.design_value - 1.0) * 100.0)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A design variable swept over a range, all other parameters fixed.
#[derive(Debug, Clone)]
pub struct Sweep {
    spec: EngineSpec,
    ambient: FlowStateInput,
    options: EngineOptions,
    variable: DesignVariable,
    range: DesignRange,
}

impl Sweep {
    pub fn new(
        spec: EngineSpec,
        ambient: FlowStateInput,
        options: EngineOptions,
        variable: DesignVariable,
        range: DesignRange,
    ) -> Self {
        Self {
            spec,
            ambient,
            options,
            variable,
            range,
        }
    }

    /// Sweep over [`DesignRange::auto`] around the current design value.
    pub fn auto(
        spec: EngineSpec,
        ambient: FlowStateInput,
        options: EngineOptions,
        variable: DesignVariable,
        points: usize,
    ) -> Result<Self, SweepError> {
        let range = DesignRange::auto(variable, spec.get(variable), points)?;
        Ok(Self::new(spec, ambient, options, variable, range))
    }

    /// Sweep around the parameter set and ambient condition of `engine`.
    pub fn around(engine: &Engine, variable: DesignVariable, range: DesignRange) -> Self {
        Self::new(
            engine.spec().clone(),
            engine.ambient().input().clone(),
            *engine.options(),
            variable,
            range,
        )
    }

    pub fn variable(&self) -> DesignVariable {
        self.variable
    }

    pub fn range(&self) -> &DesignRange {
        &self.range
    }

    /// Evaluate every member in range order, stopping at the first failure.
    pub fn run(&self) -> Result<SweepResult, SweepError> {
        let _span = info_span!("sweep", variable = %self.variable, points = self.range.len()).entered();
        info!("sweep started");
        let members = self
            .range
            .values()
            .iter()
            .enumerate()
            .map(|(index, &value)| self.member(index, value))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.finish(members))
    }

    /// Evaluate members on the rayon thread pool.
    ///
    /// Results keep the range order. If several members fail, which failure
    /// is reported is unspecified.
    pub fn run_parallel(&self) -> Result<SweepResult, SweepError> {
        let _span = info_span!("sweep", variable = %self.variable, points = self.range.len()).entered();
        info!("parallel sweep started");
        let members = self
            .range
            .values()
            .par_iter()
            .enumerate()
            .map(|(index, &value)| self.member(index, value))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.finish(members))
    }

    fn member(&self, index: usize, value: f64) -> Result<(f64, f64), SweepError> {
        self.evaluate(value).map_err(|source| {
            warn!(index, value, error = %source, "sweep member failed");
            SweepError::MemberFailed {
                index,
                variable: self.variable,
                value,
                source,
            }
        })
    }

    fn evaluate(&self, value: f64) -> EngineResult<(f64, f64)> {
        let engine = Engine::with_design_value(
            self.spec.clone(),
            self.ambient.clone(),
            self.options,
            self.variable,
            value,
        )?;
        Ok((engine.thrust()?.value, engine.sfc()?))
    }

    fn finish(&self, members: Vec<(f64, f64)>) -> SweepResult {
        let (thrust_n, sfc): (Vec<f64>, Vec<f64>) = members.into_iter().unzip();
        info!(members = thrust_n.len(), "sweep finished");
        SweepResult {
            variable: self.variable,
            values: self.range.values().to_vec(),
            thrust_n,
            sfc,
            design_value: self.spec.get(self.variable),
            original_index: self.range.original_index(),
        }
    }
}
