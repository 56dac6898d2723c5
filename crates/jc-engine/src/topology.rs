//! Reference two-spool separate-flow turbofan.
//!
//! Station labels follow the usual numbering: 0 ambient, 2 fan face,
//! 13 bypass duct, 3 combustor entry, 4 turbine entry, 5 core exhaust,
//! 7/8 and 16/18 nozzle throat and exit.

use jc_graph::{Graph, GraphBuilder, GraphResult, StageKind};

pub mod station {
    pub const AMBIENT: &str = "0";
    pub const INTERFACE: &str = "1";
    pub const INLET: &str = "2";
    pub const FAN: &str = "21";
    pub const BYPASS_CORE: &str = "22";
    pub const BYPASS_DUCT: &str = "13";
    pub const LPC: &str = "25";
    pub const HPC: &str = "3";
    pub const COMBUSTOR: &str = "4";
    pub const HPT: &str = "45";
    pub const LPT: &str = "5";
    pub const CORE_THROAT: &str = "7";
    pub const CORE_EXIT: &str = "8";
    pub const BYPASS_THROAT: &str = "16";
    pub const BYPASS_EXIT: &str = "18";

    /// Every station, upstream first.
    pub const ALL: [&str; 15] = [
        AMBIENT,
        INTERFACE,
        INLET,
        FAN,
        BYPASS_CORE,
        BYPASS_DUCT,
        LPC,
        HPC,
        COMBUSTOR,
        HPT,
        LPT,
        CORE_THROAT,
        CORE_EXIT,
        BYPASS_THROAT,
        BYPASS_EXIT,
    ];

    /// Stations reported with static rather than total values.
    pub const STATIC: [&str; 2] = [CORE_EXIT, BYPASS_EXIT];
}

pub mod stage {
    pub const INTERFACE: &str = "interface";
    pub const INLET: &str = "inlet";
    pub const FAN: &str = "fan";
    pub const BYPASS: &str = "bypass";
    pub const LPC: &str = "lpc";
    pub const HPC: &str = "hpc";
    pub const COMBUSTOR: &str = "combustor";
    pub const LP_SPOOL: &str = "lp_spool";
    pub const HP_SPOOL: &str = "hp_spool";
    pub const HPT: &str = "hpt";
    pub const LPT: &str = "lpt";
    pub const NOZZLE_CORE: &str = "nozzle_core";
    pub const NOZZLE_BYPASS: &str = "nozzle_bypass";
}

/// Build the stage graph of the reference turbofan.
///
/// The fan and LPC drive the low-pressure spool, the HPC the high-pressure
/// spool; each spool feeds exactly one turbine.
pub fn reference() -> GraphResult<Graph> {
    let mut b = GraphBuilder::new();
    let [s0, s1, s2, s21, s22, s13, s25, s3, s4, s45, s5, s7, s8, s16, s18] =
        station::ALL.map(|label| b.add_station(label));

    b.add_stage(stage::INTERFACE, StageKind::AmbientInterface, &[s0], &[s1]);
    b.add_stage(stage::INLET, StageKind::Inlet, &[s1], &[s2]);
    let fan = b.add_stage(stage::FAN, StageKind::Fan, &[s2], &[s21]);
    b.add_stage(stage::BYPASS, StageKind::Bypass, &[s21], &[s22, s13]);
    let lpc = b.add_stage(stage::LPC, StageKind::Compressor, &[s22], &[s25]);
    let hpc = b.add_stage(stage::HPC, StageKind::Compressor, &[s25], &[s3]);
    b.add_stage(stage::COMBUSTOR, StageKind::Combustor, &[s3], &[s4]);
    let lp = b.add_stage(stage::LP_SPOOL, StageKind::Spool, &[], &[]);
    let hp = b.add_stage(stage::HP_SPOOL, StageKind::Spool, &[], &[]);
    let hpt = b.add_stage(stage::HPT, StageKind::Turbine, &[s4], &[s45]);
    let lpt = b.add_stage(stage::LPT, StageKind::Turbine, &[s45], &[s5]);
    b.add_stage(stage::NOZZLE_CORE, StageKind::Nozzle, &[s5, s0], &[s7, s8]);
    b.add_stage(stage::NOZZLE_BYPASS, StageKind::Nozzle, &[s13, s0], &[s16, s18]);

    b.add_shaft_link(fan, lp);
    b.add_shaft_link(lpc, lp);
    b.add_shaft_link(lp, lpt);
    b.add_shaft_link(hpc, hp);
    b.add_shaft_link(hp, hpt);
    b.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_topology_builds() {
        let graph = reference().unwrap();
        assert_eq!(graph.stations().len(), station::ALL.len());
        assert_eq!(graph.stages().len(), 13);
        assert_eq!(graph.stages_of_kind(StageKind::Nozzle).count(), 2);
        assert_eq!(graph.stages_of_kind(StageKind::Turbine).count(), 2);
    }

    #[test]
    fn nozzles_come_last() {
        let graph = reference().unwrap();
        let order: Vec<&str> = graph
            .evaluation_order()
            .iter()
            .filter_map(|&id| graph.stage(id))
            .map(|s| s.name.as_str())
            .collect();
        let lpt = order.iter().position(|&n| n == stage::LPT).unwrap();
        let core = order.iter().position(|&n| n == stage::NOZZLE_CORE).unwrap();
        assert!(lpt < core);
        assert_eq!(order.first(), Some(&stage::INTERFACE));
    }
}
