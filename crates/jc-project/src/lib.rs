//! jc-project: engine parameter sets and their file formats.
//!
//! An [`EngineSpec`] is the full set of named design parameters for one
//! engine. It can be built from a flat name → value mapping, or loaded from
//! YAML or JSON; every path validates the result.

pub mod schema;
pub mod validate;

pub use schema::{DesignVariable, EngineSpec, SpecMap, SpecValue};
pub use validate::{ValidationError, validate_spec};

use std::path::Path;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Unknown engine parameter: '{name}'")]
    UnknownParameter { name: String },

    #[error("Missing engine parameter: '{name}'")]
    MissingParameter { name: &'static str },

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn from_yaml_str(content: &str) -> ProjectResult<EngineSpec> {
    let map: SpecMap = serde_yaml::from_str(content)?;
    EngineSpec::from_map(&map)
}

pub fn from_json_str(content: &str) -> ProjectResult<EngineSpec> {
    let map: SpecMap = serde_json::from_str(content)?;
    EngineSpec::from_map(&map)
}

pub fn load_yaml(path: &Path) -> ProjectResult<EngineSpec> {
    let content = std::fs::read_to_string(path)?;
    from_yaml_str(&content)
}

pub fn save_yaml(path: &Path, spec: &EngineSpec) -> ProjectResult<()> {
    validate_spec(spec)?;
    let content = serde_yaml::to_string(spec)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<EngineSpec> {
    let content = std::fs::read_to_string(path)?;
    from_json_str(&content)
}

pub fn save_json(path: &Path, spec: &EngineSpec) -> ProjectResult<()> {
    validate_spec(spec)?;
    let content = serde_json::to_string_pretty(spec)?;
    std::fs::write(path, content)?;
    Ok(())
}
