//! jc-graph: station/stage dependency graph for jetcycle.
//!
//! Provides:
//! - Graph data structures (Station, StageNode, ShaftLink, Graph)
//! - Incremental builder with validation (references, single producer per
//!   station, unique labels, acyclicity)
//! - Deterministic evaluation order
//!
//! Stations are the points of the gas path; stages consume inlet stations and
//! produce outlet stations. Shaft links add mechanical dependencies
//! (compressor → spool → turbine) on top of the gas-path edges.
//!
//! # Example
//!
//! ```
//! use jc_graph::{GraphBuilder, StageKind};
//!
//! let mut builder = GraphBuilder::new();
//! let s2 = builder.add_station("2");
//! let s21 = builder.add_station("21");
//! let s25 = builder.add_station("25");
//! let fan = builder.add_stage("fan", StageKind::Fan, &[s2], &[s21]);
//! let lpc = builder.add_stage("lpc", StageKind::Compressor, &[s21], &[s25]);
//! let graph = builder.build().unwrap();
//!
//! assert_eq!(graph.evaluation_order(), &[fan, lpc]);
//! assert_eq!(graph.producer(s21), Some(fan));
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::GraphBuilder;
pub use error::{GraphError, GraphResult};
pub use graph::{Graph, ShaftLink, StageKind, StageNode, Station};
