//! Engine spec validation.
//!
//! Only load-time checks live here: every value finite, and the quantities
//! that set the operating point physically positive. Efficiency and
//! pressure-ratio ranges are checked by the components when evaluated.

use crate::schema::{DesignVariable, EngineSpec};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Empty engine name")]
    EmptyName,
}

pub fn validate_spec(spec: &EngineSpec) -> Result<(), ValidationError> {
    if spec.name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }

    for var in DesignVariable::ALL {
        let value = spec.get(var);
        if !value.is_finite() {
            return Err(invalid(var, value, "must be finite"));
        }
    }

    for var in [
        DesignVariable::CorrectedMassFlow,
        DesignVariable::CombustionTemperature,
    ] {
        let value = spec.get(var);
        if value <= 0.0 {
            return Err(invalid(var, value, "must be positive"));
        }
    }

    Ok(())
}

fn invalid(var: DesignVariable, value: f64, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: var.as_str().to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
