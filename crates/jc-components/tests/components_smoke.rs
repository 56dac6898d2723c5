//! Chains every component through the reference two-spool cycle.

use jc_components::{
    AmbientInterface, Bypass, CombustionChamber, Compressor, ComponentError, Fan, Inlet, Nozzle,
    NozzleType, Spool, Stage, Turbine,
};
use jc_core::{GasConstants, k, kgps, pa};
use jc_gas::{FlowState, FlowStateInput, Medium};

fn ambient() -> FlowState {
    FlowState::new(
        FlowStateInput::new("0")
            .mach(0.8)
            .t_static(k(216.0))
            .p_static(pa(22_632.0))
            .corrected_mass_flow(kgps(1400.0))
            .medium(Medium::Air),
        GasConstants::default(),
    )
    .unwrap()
}

fn t_out(stage: &dyn Stage) -> f64 {
    stage.outflow().unwrap().t_total().unwrap().value
}

fn close(actual: f64, expected: f64, rel: f64) -> bool {
    (actual - expected).abs() <= rel * expected.abs()
}

#[test]
fn reference_cycle_by_hand() {
    let amb = ambient();
    let iface = AmbientInterface::new("interface", "1", amb.clone());
    let inlet = Inlet::new("inlet", "2", iface.outflow().unwrap().clone(), 0.98);
    let fan = Fan::new("fan", "21", inlet.outflow().unwrap().clone(), 0.92, 1.6);
    let bypass = Bypass::new("bypass", "22", "13", fan.outflow().unwrap().clone(), 8.0);
    let lpc = Compressor::new("lpc", "25", bypass.outflow().unwrap().clone(), 0.9, 1.4);
    let hpc = Compressor::new("hpc", "3", lpc.outflow().unwrap().clone(), 0.9, 19.0);
    let combustor = CombustionChamber::new(
        "combustor",
        "4",
        hpc.outflow().unwrap().clone(),
        0.99,
        0.96,
        k(1450.0),
    );
    let lp_spool = Spool::new("lp_spool", 0.99, &[&fan, &lpc]).unwrap();
    let hp_spool = Spool::new("hp_spool", 0.99, &[&hpc]).unwrap();
    let hpt = Turbine::new("hpt", "45", combustor.outflow().unwrap().clone(), 0.92, &hp_spool);
    let lpt = Turbine::new("lpt", "5", hpt.outflow().unwrap().clone(), 0.92, &lp_spool);
    let nozzle_core = Nozzle::new(
        "nozzle_core",
        ("7", "8"),
        lpt.outflow().unwrap().clone(),
        amb.clone(),
        0.98,
        NozzleType::Convergent,
    );
    let nozzle_bypass = Nozzle::new(
        "nozzle_bypass",
        ("16", "18"),
        bypass.bypass_outflow().unwrap().clone(),
        amb,
        0.98,
        NozzleType::Convergent,
    );

    assert!(close(t_out(&inlet), 243.648, 1e-9));
    assert!(close(t_out(&fan), 281.7102, 1e-6));
    assert!(close(t_out(&lpc), 313.2955, 1e-6));
    assert!(close(t_out(&hpc), 772.5541, 1e-6));
    assert!(close(t_out(&hpt), 1053.8604, 1e-6));
    assert!(close(t_out(&lpt), 731.1363, 1e-6));

    assert!(close(combustor.fuel_flow().unwrap().value, 1.054072, 1e-5));
    assert!(nozzle_core.is_choked().unwrap());
    assert!(nozzle_bypass.is_choked().unwrap());
    assert!(close(nozzle_core.thrust().unwrap().value, 22_614.34, 1e-5));
    assert!(close(nozzle_bypass.thrust().unwrap().value, 53_788.67, 1e-5));
}

#[test]
fn turbines_close_the_spool_balance() {
    let amb = ambient();
    let inlet = Inlet::new("inlet", "2", amb, 1.0);
    let hpc = Compressor::new("hpc", "3", inlet.outflow().unwrap().clone(), 1.0, 10.0);
    let hp_spool = Spool::new("hp_spool", 1.0, &[&hpc]).unwrap();
    let combustor = CombustionChamber::new(
        "combustor",
        "4",
        hpc.outflow().unwrap().clone(),
        1.0,
        1.0,
        k(1400.0),
    );
    let hpt = Turbine::new("hpt", "45", combustor.outflow().unwrap().clone(), 1.0, &hp_spool);

    let gas = hpt.inflow();
    let extracted = gas.mass_flow().unwrap().value
        * gas.specific_heat().unwrap()
        * (gas.t_total().unwrap().value - hpt.outflow().unwrap().t_total().unwrap().value);
    assert!(close(extracted, hpc.work_done().unwrap().value, 1e-9));
}

#[test]
fn outflows_are_cached() {
    let fan = Fan::new("fan", "21", ambient_total(), 0.92, 1.6);
    let first = fan.outflow().unwrap() as *const FlowState;
    let second = fan.outflow().unwrap() as *const FlowState;
    assert_eq!(first, second);
}

#[test]
fn upstream_errors_reach_downstream_callers() {
    let missing_medium = FlowState::new(
        FlowStateInput::new("2")
            .t_total(k(243.6))
            .p_total(pa(38_000.0))
            .mass_flow(kgps(500.0)),
        GasConstants::default(),
    )
    .unwrap();
    let fan = Fan::new("fan", "21", missing_medium, 0.92, 1.6);
    assert!(matches!(fan.outflow(), Err(ComponentError::Gas(_))));
    assert!(matches!(
        Spool::new("lp_spool", 0.99, &[&fan]),
        Err(ComponentError::Gas(_))
    ));
}

fn ambient_total() -> FlowState {
    FlowState::new(
        FlowStateInput::new("2")
            .t_total(k(243.648))
            .p_total(pa(38_000.0))
            .mass_flow(kgps(518.375))
            .medium(Medium::Air),
        GasConstants::default(),
    )
    .unwrap()
}
