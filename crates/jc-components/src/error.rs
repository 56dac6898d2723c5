//! Error types for component evaluation.

use jc_gas::GasError;
use thiserror::Error;

/// Errors that can occur while evaluating a component.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComponentError {
    #[error("{component}: {parameter} = {value} is out of range (expected {expected})")]
    OutOfRange {
        component: String,
        parameter: &'static str,
        value: f64,
        expected: &'static str,
    },

    #[error("Not supported: {what}")]
    NotSupported { what: String },

    #[error(
        "{component}: nozzle is not choked (p_total = {p_total_pa} Pa, p_critical = {p_critical_pa} Pa), exit Mach number is unknown"
    )]
    NotChoked {
        component: String,
        p_total_pa: f64,
        p_critical_pa: f64,
    },

    #[error("{component} has no computed work-done value")]
    MissingWork { component: String },

    #[error("{component}: non-physical {what}")]
    NonPhysical {
        component: String,
        what: &'static str,
    },

    #[error(transparent)]
    Gas(#[from] GasError),
}

pub type ComponentResult<T> = Result<T, ComponentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ComponentError::NotChoked {
            component: "nozzle_core".into(),
            p_total_pa: 30_000.0,
            p_critical_pa: 35_000.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("nozzle_core"));
        assert!(msg.contains("not choked"));
    }

    #[test]
    fn gas_errors_pass_through() {
        let gas = GasError::MissingStateVariable {
            field: "mach",
            station: "2".into(),
        };
        let err: ComponentError = gas.clone().into();
        assert_eq!(err.to_string(), gas.to_string());
    }
}
