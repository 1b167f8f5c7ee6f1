//! Antoine correlation integration tests.
//!
//! These check the built-in hexane/heptane pair against textbook behaviour at one
//! atmosphere. The constants are a fit, so tolerances are loose.

use vle_core::units::{celsius, to_celsius, to_mmhg};
use vle_fluids::{AntoineModel, BinarySystem, FluidError, VaporPressureModel, find_component};

#[test]
fn hexane_is_more_volatile_than_heptane() {
    let system = BinarySystem::hexane_heptane();
    for t in [20.0, 60.0, 69.0, 80.0, 98.0] {
        let p_light = AntoineModel.saturation_pressure(system.light(), t).unwrap();
        let p_heavy = AntoineModel.saturation_pressure(system.heavy(), t).unwrap();
        assert!(
            p_light > p_heavy,
            "at {t} C: hexane {p_light} mmHg <= heptane {p_heavy} mmHg"
        );
    }
}

#[test]
fn relative_volatility_is_plausible() {
    let system = BinarySystem::hexane_heptane();
    let t = 80.0;
    let alpha = AntoineModel.saturation_pressure(system.light(), t).unwrap()
        / AntoineModel.saturation_pressure(system.heavy(), t).unwrap();
    // Textbook value for this pair is about 2.4-2.5
    assert!(alpha > 2.0 && alpha < 3.0, "alpha = {alpha}");
}

#[test]
fn uom_pressure_at_boiling_point_is_one_atm() {
    let system = BinarySystem::hexane_heptane();
    let (t_light, _) = system.pure_boiling_points(&AntoineModel).unwrap();
    let p = AntoineModel
        .saturation_pressure_at(system.light(), celsius(t_light))
        .unwrap();
    assert!((to_mmhg(p) - 760.0).abs() < 1e-6);

    let t = AntoineModel
        .boiling_temperature_at(system.light(), system.pressure())
        .unwrap();
    assert!((to_celsius(t) - t_light).abs() < 1e-9);
}

#[test]
fn catalog_components_build_a_system() {
    let light = find_component("hexane").unwrap();
    let heavy = find_component("heptane").unwrap();
    let system = BinarySystem::new(light, heavy, 760.0).unwrap();
    assert_eq!(system, BinarySystem::hexane_heptane());
}

#[test]
fn domain_error_is_not_nan() {
    let system = BinarySystem::hexane_heptane();
    let c = system.heavy().antoine().c;
    let result = AntoineModel.saturation_pressure(system.heavy(), -c);
    assert!(matches!(result, Err(FluidError::NumericDomain { .. })));
}
