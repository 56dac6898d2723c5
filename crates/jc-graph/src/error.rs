//! Graph-specific error types.

use jc_core::{StageId, StationId};

pub type GraphResult<T> = Result<T, GraphError>;

/// Graph construction and validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A stage refers to a station that doesn't exist.
    InvalidStationRef { stage: StageId, station: StationId },

    /// A shaft link refers to a stage that doesn't exist.
    InvalidStageRef { stage: StageId },

    /// Two stages produce the same station.
    DuplicateProducer {
        station: String,
        first: String,
        second: String,
    },

    /// Two stations share a label.
    DuplicateLabel { label: String },

    /// Two stages share a name.
    DuplicateStageName { name: String },

    /// The flow and shaft dependencies contain a cycle.
    Cycle { stages: Vec<String> },

    /// No station carries the requested label.
    UnknownStation { label: String },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::InvalidStationRef { stage, station } => {
                write!(f, "Stage {} refers to non-existent station {}", stage, station)
            }
            GraphError::InvalidStageRef { stage } => {
                write!(f, "Shaft link refers to non-existent stage {}", stage)
            }
            GraphError::DuplicateProducer {
                station,
                first,
                second,
            } => {
                write!(
                    f,
                    "Station '{}' is produced by both '{}' and '{}'",
                    station, first, second
                )
            }
            GraphError::DuplicateLabel { label } => {
                write!(f, "Station label '{}' is used more than once", label)
            }
            GraphError::DuplicateStageName { name } => {
                write!(f, "Stage name '{}' is used more than once", name)
            }
            GraphError::Cycle { stages } => {
                write!(f, "Dependency cycle through stages: {}", stages.join(", "))
            }
            GraphError::UnknownStation { label } => {
                write!(f, "No station labelled '{}'", label)
            }
        }
    }
}

impl std::error::Error for GraphError {}
