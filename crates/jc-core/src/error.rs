use thiserror::Error;

pub type JcResult<T> = Result<T, JcError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum JcError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Value out of range for {what}: {value} (expected {expected})")]
    OutOfRange {
        what: &'static str,
        value: f64,
        expected: &'static str,
    },
}
