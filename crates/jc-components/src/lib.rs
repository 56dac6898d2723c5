//! jc-components: turbofan component library.
//!
//! Every gas-path component implements [`Stage`]: it owns its inflow
//! [`FlowState`](jc_gas::FlowState) and produces an outflow on first request,
//! caching it for its own lifetime. Components are pure functions of their
//! inflow and parameters:
//! - [`AmbientInterface`] and [`Inlet`]: free stream to engine face
//! - [`Compressor`] and [`Fan`]: compression with work absorption
//! - [`Bypass`]: core/bypass flow split
//! - [`CombustionChamber`]: heat addition and fuel flow
//! - [`Spool`]: shaft power balance between compressors and a turbine
//! - [`Turbine`]: expansion delivering spool work
//! - [`Nozzle`]: choked convergent nozzle and its thrust
//!
//! # Example
//!
//! ```
//! use jc_components::{Compressor, Stage};
//! use jc_core::{k, kgps, pa, GasConstants};
//! use jc_gas::{FlowState, FlowStateInput, Medium};
//!
//! let inflow = FlowState::new(
//!     FlowStateInput::new("25")
//!         .t_total(k(313.3))
//!         .p_total(pa(90_000.0))
//!         .mass_flow(kgps(57.6))
//!         .medium(Medium::Air),
//!     GasConstants::default(),
//! )
//! .unwrap();
//!
//! let hpc = Compressor::new("hpc", "3", inflow, 0.9, 19.0);
//! let out = hpc.outflow().unwrap();
//! assert!(out.t_total().unwrap() > hpc.inflow().t_total().unwrap());
//! assert!(hpc.work_done().unwrap().value > 0.0);
//! ```

pub mod bypass;
pub mod combustor;
pub mod common;
pub mod compressor;
pub mod error;
pub mod inlet;
pub mod nozzle;
pub mod spool;
pub mod traits;
pub mod turbine;

// Re-exports
pub use bypass::Bypass;
pub use combustor::CombustionChamber;
pub use compressor::{Compressor, Fan};
pub use error::{ComponentError, ComponentResult};
pub use inlet::{AmbientInterface, Inlet};
pub use nozzle::{Nozzle, NozzleType};
pub use spool::Spool;
pub use traits::Stage;
pub use turbine::Turbine;
