//! jc-engine: steady-state design-point model of a two-spool turbofan.
//!
//! An [`Engine`] ties the components of `jc-components` into the reference
//! topology, evaluates each of them once on demand, and reports thrust and
//! specific fuel consumption. On top of that sit a station table, an energy
//! breakdown, T-s cycle points and a parametric [`Sweep`].
//!
//! ```no_run
//! use jc_core::{k, pa};
//! use jc_engine::{Engine, EngineOptions};
//! use jc_gas::{FlowStateInput, Medium};
//!
//! let spec = jc_project::load_yaml("reference_turbofan.yaml".as_ref())?;
//! let ambient = FlowStateInput::new("0")
//!     .mach(0.8)
//!     .t_static(k(216.0))
//!     .p_static(pa(22_632.0))
//!     .medium(Medium::Air);
//! let engine = Engine::new(spec, ambient, EngineOptions::default())?;
//! println!("F = {:.0} N, SFC = {:.2} g/(kN s)", engine.thrust()?.value, engine.sfc()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod analysis;
pub mod cycle;
pub mod engine;
pub mod error;
pub mod stations;
pub mod sweep;
pub mod topology;

#[cfg(test)]
mod test_support;

pub use analysis::EnergyBreakdown;
pub use cycle::{CyclePoint, CycleSegment, cycle_points, cycle_segments, entropy_change};
pub use engine::{Engine, EngineOptions};
pub use error::{EngineError, EngineResult, SweepError};
pub use stations::{StationRecord, StationTable};
pub use sweep::{DesignRange, Sweep, SweepResult};
