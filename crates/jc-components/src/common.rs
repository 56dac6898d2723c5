//! Common helpers for component calculations.

use crate::error::{ComponentError, ComponentResult};
use jc_core::{GasConstants, ensure_lower_open};
use jc_gas::{FlowState, FlowStateInput};

/// Check an efficiency lies in `(0, 1]`.
pub fn check_efficiency(component: &str, parameter: &'static str, eta: f64) -> ComponentResult<f64> {
    ensure_lower_open(eta, 0.0, 1.0, parameter).map_err(|_| ComponentError::OutOfRange {
        component: component.to_string(),
        parameter,
        value: eta,
        expected: "0 < eta <= 1",
    })
}

/// Check a pressure ratio is strictly positive.
pub fn check_pressure_ratio(component: &str, pr: f64) -> ComponentResult<f64> {
    if pr.is_finite() && pr > 0.0 {
        Ok(pr)
    } else {
        Err(ComponentError::OutOfRange {
            component: component.to_string(),
            parameter: "pressure_ratio",
            value: pr,
            expected: "pressure_ratio > 0",
        })
    }
}

/// Ensure a computed value is finite and strictly positive.
pub fn check_positive(component: &str, what: &'static str, value: f64) -> ComponentResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ComponentError::NonPhysical {
            component: component.to_string(),
            what,
        })
    }
}

/// Isentropic exponent `κ / (κ - 1)`.
#[inline]
pub fn isentropic_exponent(kappa: f64) -> f64 {
    kappa / (kappa - 1.0)
}

/// Build a downstream state sharing the upstream constants.
pub fn downstream(input: FlowStateInput, constants: &GasConstants) -> ComponentResult<FlowState> {
    Ok(FlowState::new(input, *constants)?)
}
