//! Temperature-entropy points of the cycle.
//!
//! Entropy is only known relative to a reference value supplied by the
//! caller. Each stage then adds
//!
//! ```text
//! Δs = cp · ln(T2/T1) - R · ln(p2/p1)
//! ```
//!
//! with cp taken at the stage inflow. The ambient interface runs from
//! static to total conditions, the nozzles from total to static, every other
//! stage from total to total.

use jc_components::Stage;
use jc_core::{SpecEntropy, linspace};
use jc_graph::StageKind;
use serde::Serialize;

use crate::engine::Engine;
use crate::error::{EngineError, EngineResult};

/// Entropy changes smaller than this are drawn as straight lines.
const FLAT_SEGMENT: f64 = 1e-5;

/// Specific entropy change between two states [J/(kg·K)].
pub fn entropy_change(t1: f64, t2: f64, p1: f64, p2: f64, cp: f64, gas_constant: f64) -> f64 {
    cp * (t2 / t1).ln() - gas_constant * (p2 / p1).ln()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CyclePoint {
    pub station: String,
    pub specific_entropy: SpecEntropy,
    pub temperature_k: f64,
}

/// One stage drawn on the T-s plane.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CycleSegment {
    pub stage: String,
    pub start: CyclePoint,
    pub end: CyclePoint,
}

impl CycleSegment {
    pub fn delta_s(&self) -> f64 {
        self.end.specific_entropy - self.start.specific_entropy
    }

    /// `n` points along the segment, `(s, T)`.
    ///
    /// Temperature follows `T1 · (T2/T1)^((s - s1)/(s2 - s1))` between the
    /// end points; near-isentropic segments fall back to a straight line.
    pub fn curve(&self, n: usize) -> Vec<(f64, f64)> {
        let (s1, s2) = (self.start.specific_entropy, self.end.specific_entropy);
        let (t1, t2) = (self.start.temperature_k, self.end.temperature_k);
        let s = linspace(s1, s2, n);
        if self.delta_s().abs() < FLAT_SEGMENT {
            return s.into_iter().zip(linspace(t1, t2, n)).collect();
        }
        let ln_ratio = (t2 / t1).ln();
        s.into_iter()
            .map(|si| (si, t1 * (ln_ratio * (si - s1) / (s2 - s1)).exp()))
            .collect()
    }
}

/// Walk every flow-path stage and place it on the T-s plane.
///
/// A stage starts where the producer of its first inlet ended, so the
/// bypass nozzle branches off after the fan. `s_ref` is the entropy of the
/// ambient static state.
pub fn cycle_segments(engine: &Engine, s_ref: SpecEntropy) -> EngineResult<Vec<CycleSegment>> {
    let topology = engine.topology();
    let gas_constant = engine.constants().gas_constant;
    let mut end_entropy: Vec<Option<f64>> = vec![None; topology.stages().len()];
    let mut segments = Vec::new();

    for &id in topology.evaluation_order() {
        let Some(node) = topology.stage(id) else {
            continue;
        };
        if node.kind == StageKind::Spool {
            continue;
        }
        let stage = engine.stage(&node.name)?;
        let s_in = node
            .inlets
            .first()
            .and_then(|&station| topology.producer(station))
            .and_then(|producer| end_entropy[producer.slot()])
            .unwrap_or(s_ref);

        let (start, end) = end_states(node.kind, stage)?;
        let inflow = stage.inflow();
        let delta = entropy_change(start.0, end.0, start.1, end.1, inflow.specific_heat()?, gas_constant);
        let s_out = s_in + delta;
        if !s_out.is_finite() {
            return Err(EngineError::SingularEntropy {
                stage: node.name.clone(),
            });
        }
        end_entropy[id.slot()] = Some(s_out);

        segments.push(CycleSegment {
            stage: node.name.clone(),
            start: CyclePoint {
                station: inflow.station().to_string(),
                specific_entropy: s_in,
                temperature_k: start.0,
            },
            end: CyclePoint {
                station: stage.outflow()?.station().to_string(),
                specific_entropy: s_out,
                temperature_k: end.0,
            },
        });
    }
    Ok(segments)
}

/// Ambient point followed by the end point of every stage.
pub fn cycle_points(engine: &Engine, s_ref: SpecEntropy) -> EngineResult<Vec<CyclePoint>> {
    let segments = cycle_segments(engine, s_ref)?;
    let mut points = Vec::with_capacity(segments.len() + 1);
    if let Some(first) = segments.first() {
        points.push(first.start.clone());
    }
    points.extend(segments.into_iter().map(|seg| seg.end));
    Ok(points)
}

/// `((T_in, p_in), (T_out, p_out))` in the convention of the stage kind.
fn end_states(kind: StageKind, stage: &dyn Stage) -> EngineResult<((f64, f64), (f64, f64))> {
    let inflow = stage.inflow();
    let outflow = stage.outflow()?;
    let states = match kind {
        StageKind::AmbientInterface => (
            (inflow.t_static()?.value, inflow.p_static()?.value),
            (outflow.t_total()?.value, outflow.p_total()?.value),
        ),
        StageKind::Nozzle => (
            (inflow.t_total()?.value, inflow.p_total()?.value),
            (outflow.t_static()?.value, outflow.p_static()?.value),
        ),
        _ => (
            (inflow.t_total()?.value, inflow.p_total()?.value),
            (outflow.t_total()?.value, outflow.p_total()?.value),
        ),
    };
    Ok(states)
}
