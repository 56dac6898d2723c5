//! jc-core: shared foundation for jetcycle.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real, tolerances, range helpers)
//! - constants (injected physical constants)
//! - memo (compute-once slots used for lazy evaluation)
//! - ids (compact IDs for graph objects)
//! - error (shared error types)

pub mod constants;
pub mod error;
pub mod ids;
pub mod memo;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use constants::GasConstants;
pub use error::{JcError, JcResult};
pub use ids::*;
pub use memo::Memo;
pub use numeric::*;
pub use units::*;
