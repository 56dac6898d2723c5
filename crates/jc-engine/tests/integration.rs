//! End-to-end checks of the reference turbofan.

use jc_components::{ComponentError, Stage};
use jc_core::{GasConstants, Tolerances, k, kgps, nearly_equal, pa};
use jc_engine::{
    DesignRange, EnergyBreakdown, Engine, EngineError, EngineOptions, Sweep, SweepError,
};
use jc_gas::{FlowStateInput, Medium};
use jc_project::{DesignVariable, EngineSpec};

fn ambient() -> FlowStateInput {
    FlowStateInput::new("ambient")
        .mach(0.8)
        .t_static(k(216.0))
        .p_static(pa(22_632.0))
        .medium(Medium::Air)
}

fn spec() -> EngineSpec {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../jc-project/data/reference_turbofan.yaml");
    jc_project::load_yaml(&path).unwrap()
}

fn engine(options: EngineOptions) -> Engine {
    Engine::new(spec(), ambient(), options).unwrap()
}

fn close(actual: f64, expected: f64, rel: f64) -> bool {
    nearly_equal(actual, expected, Tolerances { abs: 0.0, rel })
}

fn t_total(stage: &dyn Stage) -> f64 {
    stage.outflow().unwrap().t_total().unwrap().value
}

#[test]
fn reference_design_point() {
    let engine = engine(EngineOptions::default());
    let thrust = engine.thrust().unwrap().value;
    let sfc = engine.sfc().unwrap();
    assert!(thrust.is_finite() && thrust > 0.0);
    assert!(sfc.is_finite() && sfc > 0.0);
    assert!(close(thrust, 76_403.0, 1e-3), "thrust = {thrust}");
    assert!(close(sfc, 13.796, 1e-3), "sfc = {sfc}");
    assert!(close(engine.fuel_flow().unwrap().value, 1.054_07, 1e-4));
    assert!(close(engine.ambient().mass_flow().unwrap().value, 518.375, 1e-4));
}

#[test]
fn compression_raises_temperature_stage_by_stage() {
    let engine = engine(EngineOptions::default());
    let inlet = t_total(engine.inlet().unwrap());
    let fan = t_total(engine.fan().unwrap());
    let lpc = t_total(engine.lpc().unwrap());
    let hpc = t_total(engine.hpc().unwrap());
    assert!(hpc > lpc && lpc > fan && fan > inlet);
    assert!(close(hpc, 772.554, 1e-4), "T3 = {hpc}");
}

#[test]
fn turbines_balance_their_spools() {
    let engine = engine(EngineOptions::default());
    let hp = engine.hp_spool().unwrap();
    let lp = engine.lp_spool().unwrap();
    assert_eq!(engine.hpt().unwrap().work_output(), hp.work_required());
    assert_eq!(engine.lpt().unwrap().work_output(), lp.work_required());
    assert_eq!(lp.loads(), ["fan", "lpc"]);
    assert!(close(t_total(engine.lpt().unwrap()), 731.136, 1e-4));
}

#[test]
fn ideal_cycle_overrides_before_any_access() {
    let engine = engine(EngineOptions {
        ideal_cycle: true,
        ..EngineOptions::default()
    });
    for var in DesignVariable::efficiencies() {
        assert_eq!(engine.parameter(var), 1.0, "{var}");
    }
    assert_eq!(engine.spec().pr_cc, 1.0);
    let thrust = engine.thrust().unwrap().value;
    assert!(close(thrust, 87_184.9, 1e-3), "ideal thrust = {thrust}");
    assert!(close(engine.sfc().unwrap(), 13.047, 1e-3));
}

#[test]
fn ideal_cycle_outperforms_real_cycle() {
    let real = engine(EngineOptions::default());
    let ideal = engine(EngineOptions {
        ideal_cycle: true,
        ..EngineOptions::default()
    });
    assert!(ideal.thrust().unwrap() > real.thrust().unwrap());
    assert!(ideal.sfc().unwrap() < real.sfc().unwrap());
}

#[test]
fn repeated_reads_are_cached() {
    let mut engine = engine(EngineOptions::default());
    let first = engine.nozzle_core().unwrap().outflow().unwrap() as *const _;
    let second = engine.nozzle_core().unwrap().outflow().unwrap() as *const _;
    assert_eq!(first, second);

    let thrust = engine.thrust().unwrap().value;
    let t3 = t_total(engine.hpc().unwrap());

    engine.set_parameter(DesignVariable::EtaHpc, 0.5);
    engine.set_parameter(DesignVariable::EtaNozzle, 0.7);
    assert_eq!(engine.parameter(DesignVariable::EtaHpc), 0.5);
    assert_eq!(engine.thrust().unwrap().value.to_bits(), thrust.to_bits());
    assert_eq!(t_total(engine.hpc().unwrap()).to_bits(), t3.to_bits());
}

#[test]
fn stations_expose_every_component() {
    let engine = engine(EngineOptions::default());
    assert_eq!(engine.station("3").unwrap().station(), "3");
    assert_eq!(engine.station("13").unwrap().station(), "13");
    assert_eq!(engine.station("18").unwrap().mach().unwrap(), 1.0);
    let table = engine.station_table().unwrap();
    let p5 = table.get("5").unwrap().pressure_pa;
    assert!(close(p5, 66_139.36, 1e-4), "p5 = {p5}");
    assert!(close(table.get("8").unwrap().pressure_pa, 35_256.76, 1e-4));
    assert!(close(table.get("18").unwrap().pressure_pa, 28_518.05, 1e-4));
}

#[test]
fn energy_breakdown_is_consistent() {
    let engine = engine(EngineOptions::default());
    let e = EnergyBreakdown::from_engine(&engine).unwrap();
    let v0 = engine.ambient().velocity().unwrap().value;
    assert!(close(e.thrust_power, engine.thrust().unwrap().value * v0, 1e-12));
    assert!(e.jet_power > e.thrust_power);
    assert!(e.turbine_power > 0.0);
}

#[test]
fn unsupported_nozzle_fails_at_construction() {
    let mut spec = spec();
    spec.nozzle_type = "convergent-divergent".into();
    let err = Engine::new(spec, ambient(), EngineOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        EngineError::Component(ComponentError::NotSupported { .. })
    ));
}

#[test]
fn invalid_ambient_fails_at_construction() {
    let input = ambient().mass_flow(kgps(100.0)).corrected_mass_flow(kgps(100.0));
    let err = Engine::new(spec(), input, EngineOptions::default()).unwrap_err();
    assert!(matches!(err, EngineError::Gas(_)));
}

#[test]
fn out_of_range_efficiency_surfaces_on_access() {
    let mut spec = spec();
    spec.eta_lpc = 1.2;
    let engine = Engine::new(spec, ambient(), EngineOptions::default()).unwrap();
    assert!(engine.fan().is_ok());
    assert!(matches!(
        engine.thrust(),
        Err(EngineError::Component(ComponentError::OutOfRange { component, .. })) if component == "lpc"
    ));
}

#[test]
fn fan_efficiency_sweep_is_monotonic() {
    let sweep = Sweep::new(
        spec(),
        ambient(),
        EngineOptions::default(),
        DesignVariable::EtaFan,
        DesignRange::auto(DesignVariable::EtaFan, 0.92, 50).unwrap(),
    );
    let result = sweep.run().unwrap();
    assert_eq!(result.len(), 50);
    assert_eq!(result.thrust_n.len(), 50);
    assert_eq!(result.sfc.len(), 50);
    assert!(result.thrust_n.windows(2).all(|w| w[0] <= w[1]));
    assert!(close(result.thrust_n[0], 75_750.8, 1e-3));
    assert!(close(result.thrust_n[49], 78_471.9, 1e-3));
}

#[test]
fn parallel_sweep_matches_sequential() {
    let sweep = Sweep::auto(
        spec(),
        ambient(),
        EngineOptions::default(),
        DesignVariable::BypassRatio,
        12,
    )
    .unwrap();
    let sequential = sweep.run().unwrap();
    let parallel = sweep.run_parallel().unwrap();
    assert_eq!(sequential, parallel);

    let i = sequential.original_index.unwrap();
    assert_eq!(sequential.values[i], 8.0);
    assert_eq!(sequential.relative_change_pct()[i], 0.0);
    let reference = engine(EngineOptions::default()).thrust().unwrap().value;
    assert_eq!(sequential.thrust_n[i].to_bits(), reference.to_bits());
}

#[test]
fn ideal_sweep_keeps_swept_efficiency() {
    let options = EngineOptions {
        ideal_cycle: true,
        ..EngineOptions::default()
    };
    let range = DesignRange::explicit(vec![0.9, 1.0]).unwrap();
    let result = Sweep::new(spec(), ambient(), options, DesignVariable::EtaFan, range)
        .run()
        .unwrap();
    assert!(result.thrust_n[0] < result.thrust_n[1]);
}

#[test]
fn failing_member_aborts_the_sweep() {
    let range = DesignRange::explicit(vec![0.98, 0.9, 0.1]).unwrap();
    let sweep = Sweep::new(
        spec(),
        ambient(),
        EngineOptions::default(),
        DesignVariable::EtaNozzle,
        range,
    );
    match sweep.run() {
        Err(SweepError::MemberFailed {
            index,
            value,
            source: EngineError::Component(ComponentError::NotChoked { .. }),
            ..
        }) => {
            assert_eq!(index, 2);
            assert_eq!(value, 0.1);
        }
        other => panic!("expected a not-choked member, got {other:?}"),
    }
}

#[test]
fn sweep_around_an_engine() {
    let engine = engine(EngineOptions::default());
    let range = DesignRange::from_rows(&[vec![1.5, 1.6, 1.7]]).unwrap();
    let result = Sweep::around(&engine, DesignVariable::PrFan, range).run().unwrap();
    assert_eq!(result.values, vec![1.5, 1.6, 1.7]);
    assert_eq!(result.thrust_n[1].to_bits(), engine.thrust().unwrap().value.to_bits());
}

#[test]
fn cruise_from_standard_atmosphere() {
    let constants = GasConstants::default();
    let ambient = FlowStateInput::at_altitude("ambient", 11_000.0, 0.8, &constants).unwrap();
    let isa = Engine::new(spec(), ambient, EngineOptions::default()).unwrap();
    let reference = engine(EngineOptions::default());
    let thrust = isa.thrust().unwrap().value;
    assert!(close(isa.ambient().t_static().unwrap().value, 216.65, 1e-9));
    assert!(close(thrust, reference.thrust().unwrap().value, 1e-2), "thrust = {thrust}");
    assert!(FlowStateInput::at_altitude("ambient", -10.0, 0.8, &constants).is_err());
}
