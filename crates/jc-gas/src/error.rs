//! Flow state errors.

use jc_core::JcError;
use thiserror::Error;

/// Result type for flow state operations.
pub type GasResult<T> = Result<T, GasError>;

/// Errors raised while building or querying a [`crate::FlowState`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GasError {
    /// A derived quantity was requested without the inputs it needs.
    #[error(
        "A state variable '{field}' required to compute the requested flow parameters was not provided (station {station})"
    )]
    MissingStateVariable { field: &'static str, station: String },

    /// The medium is not one of the modelled gases.
    #[error("Medium not supported: '{medium}' (expected 'air' or 'gas')")]
    UnsupportedMedium { medium: String },

    /// Both directions of one axis were supplied (e.g. static and total temperature).
    #[error("Conflicting inputs at station {station}: {first} and {second} cannot both be given")]
    ConflictingInput {
        station: String,
        first: &'static str,
        second: &'static str,
    },

    /// A supplied or derived value is not physical.
    #[error("Non-physical value at station {station}: {source}")]
    NonPhysical {
        station: String,
        #[source]
        source: JcError,
    },

    /// The standard atmosphere is only modelled up to its ceiling.
    #[error("Altitude {altitude_m} m is outside the standard atmosphere (0 to {max_m} m)")]
    AltitudeOutOfRange { altitude_m: f64, max_m: f64 },
}
