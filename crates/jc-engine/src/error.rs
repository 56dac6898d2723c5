//! Engine and sweep errors.

use jc_components::ComponentError;
use jc_gas::GasError;
use jc_graph::GraphError;
use jc_project::{DesignVariable, ValidationError};
use thiserror::Error;

pub type EngineResult<T> = Result<T, EngineError>;

/// Errors raised while building or evaluating an [`crate::Engine`].
///
/// Component and flow-state errors pass through unchanged, so the caller
/// sees the failure where it originated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error(transparent)]
    Component(#[from] ComponentError),

    #[error(transparent)]
    Gas(#[from] GasError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("Invalid engine spec: {0}")]
    Spec(#[from] ValidationError),

    #[error("Unknown stage '{name}' in engine topology")]
    UnknownStage { name: String },

    #[error("Thrust is not positive ({thrust_n} N), SFC is undefined")]
    NonPositiveThrust { thrust_n: f64 },

    #[error("Singular entropy change across {stage}")]
    SingularEntropy { stage: String },
}

/// Errors raised by the parametric sweep driver.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SweepError {
    #[error("Only one-dimensional design ranges are supported (got {rows} x {cols})")]
    MultiDimensional { rows: usize, cols: usize },

    #[error("Design range needs at least {min} points, got {points}")]
    TooFewPoints { points: usize, min: usize },

    #[error("Sweep member {index} ({variable} = {value}) failed: {source}")]
    MemberFailed {
        index: usize,
        variable: DesignVariable,
        value: f64,
        #[source]
        source: EngineError,
    },
}
