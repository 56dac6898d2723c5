//! Reference operating point shared by the unit tests.

use jc_core::{k, pa};
use jc_gas::{FlowStateInput, Medium};
use jc_project::EngineSpec;

/// Cruise at Mach 0.8, 11 km.
pub fn ambient() -> FlowStateInput {
    FlowStateInput::new("ambient")
        .mach(0.8)
        .t_static(k(216.0))
        .p_static(pa(22_632.0))
        .medium(Medium::Air)
}

pub fn spec() -> EngineSpec {
    EngineSpec {
        name: "reference".into(),
        corrected_mass_flow: 1400.0,
        bypass_ratio: 8.0,
        combustion_temperature: 1450.0,
        nozzle_type: "convergent".into(),
        pr_cc: 0.96,
        pr_fan: 1.6,
        pr_lpc: 1.4,
        pr_hpc: 19.0,
        eta_inlet: 0.98,
        eta_fan: 0.92,
        eta_lpc: 0.9,
        eta_hpc: 0.9,
        eta_cc: 0.99,
        eta_hpt: 0.92,
        eta_lpt: 0.92,
        eta_mech: 0.99,
        eta_nozzle: 0.98,
    }
}
