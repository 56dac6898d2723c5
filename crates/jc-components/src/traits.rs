//! The contract every gas-path component satisfies.

use crate::error::{ComponentError, ComponentResult};
use jc_core::Power;
use jc_gas::FlowState;

/// A gas-path component: consumes one inflow, produces one outflow.
///
/// The outflow is a deterministic function of the inflow and the component's
/// parameters. Implementations compute it on first request and return the
/// cached state afterwards.
pub trait Stage: Send {
    /// Component name for logging and error messages.
    fn name(&self) -> &str;

    /// Flow state entering the component.
    fn inflow(&self) -> &FlowState;

    /// Flow state leaving the component.
    fn outflow(&self) -> ComponentResult<&FlowState>;

    /// Shaft work absorbed by the component.
    ///
    /// Only compression stages absorb work. The default reports the work as
    /// missing so that a spool wired to a non-compressor fails loudly.
    fn work_done(&self) -> ComponentResult<Power> {
        Err(ComponentError::MissingWork {
            component: self.name().to_string(),
        })
    }
}
