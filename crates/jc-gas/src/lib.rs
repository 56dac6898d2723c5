//! jc-gas: gas-path flow states for jetcycle.
//!
//! Provides:
//! - [`Medium`]: the two working media of a turbofan (air, combustion gas)
//! - [`FlowStateInput`]: explicit description of what is known at a station
//! - [`FlowState`]: immutable station state with lazily derived quantities
//! - [`isa`]: standard-atmosphere statics for free-stream inputs
//!
//! # Example
//!
//! ```
//! use jc_core::{GasConstants, k, pa, kgps};
//! use jc_gas::{FlowState, FlowStateInput, Medium};
//!
//! let ambient = FlowState::new(
//!     FlowStateInput::new("0")
//!         .mach(0.8)
//!         .t_static(k(216.0))
//!         .p_static(pa(22_632.0))
//!         .corrected_mass_flow(kgps(1400.0))
//!         .medium(Medium::Air),
//!     GasConstants::default(),
//! )
//! .unwrap();
//!
//! let t_total = ambient.t_total().unwrap();
//! assert!((t_total.value - 243.648).abs() < 1e-9);
//! ```

pub mod atmosphere;
pub mod error;
pub mod medium;
pub mod state;

pub use atmosphere::{IsaState, isa};
pub use error::{GasError, GasResult};
pub use medium::Medium;
pub use state::{FlowState, FlowStateInput};
