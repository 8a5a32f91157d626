mod error;
mod hydraulics;
mod side;

pub use error::{NonPhysical, SolveError};

use tracing::{debug, trace};
use uom::si::{
    f64::{Power, Ratio, ThermodynamicTemperature},
    power::watt,
    ratio::ratio,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    hx::HeatFlowDirection,
    teg::operating_point,
    thermo::FluidProperties,
    units::{TemperatureDifference, thermal_resistance_k_per_w},
};

use super::{
    Convergence, ModelResult, ParasiticLoads, ResistanceChain, SystemConfig, TemperatureProfile,
};

use hydraulics::hydraulics;
use side::{Cell, Convection, Side};

/// Solves one array operating point.
///
/// Properties are fixed at each side's bulk temperature. The per-module heat
/// flow and the flow-dependent convective resistances are found together by
/// successive substitution, starting from a guess of one and a half times
/// the module resistance.
///
/// # Errors
///
/// Returns [`SolveError::NonPhysicalConfiguration`] if the configuration
/// fails validation. No iteration is attempted in that case.
pub(crate) fn solve(
    config: &SystemConfig,
    properties: &FluidProperties,
) -> Result<ModelResult, SolveError> {
    config.validate()?;

    let n = f64::from(config.module_count);
    let rise = config.fluid_delta_t.get::<delta_kelvin>();
    let hot_bulk = config.hot_bulk().get::<kelvin>();
    let cold_bulk = config.cold_bulk().get::<kelvin>();
    let driving = hot_bulk - cold_bulk;

    let hot = Side::resolve(
        config.hot_fluid,
        config.hot_bulk(),
        HeatFlowDirection::Cooling,
        properties,
    );
    let cold = Side::resolve(
        config.cold_fluid,
        config.cold_bulk(),
        HeatFlowDirection::Heating,
        properties,
    );

    let cell = Cell::from(&config.geometry);
    let contact = config.geometry.contact_area();
    let fixed = FixedResistances {
        hot_interface: config.geometry.hot_tim.resistance(contact).value,
        module: config.module.thermal_resistance.value,
        cold_interface: config.geometry.cold_tim.resistance(contact).value,
    };

    // The seed uses the hot-side flow on both sides.
    let mut q = driving / (1.5 * fixed.module);
    let mut hot_flow = hot.volume_flow(q * n, rise);
    let mut cold_flow = hot_flow;
    let mut hot_convection = hot.convection(hot_flow / n, &cell);
    let mut cold_convection = cold.convection(hot_flow / n, &cell);
    let mut r_total = fixed.total(&hot_convection, &cold_convection);

    let (max_iterations, tolerance) = match config.convergence {
        Convergence::FixedIterations(iterations) => (iterations, None),
        Convergence::Tolerance {
            relative,
            max_iterations,
        } => (max_iterations, Some(relative)),
    };

    let mut iterations = 0;
    while iterations < max_iterations {
        iterations += 1;

        q = driving / r_total;
        let heat = q * n;
        hot_flow = hot.volume_flow(heat, rise);
        cold_flow = cold.volume_flow(heat, rise);
        hot_convection = hot.convection(hot_flow / n, &cell);
        cold_convection = cold.convection(cold_flow / n, &cell);

        let previous = r_total;
        r_total = fixed.total(&hot_convection, &cold_convection);
        trace!(iteration = iterations, q, r_total, "heat flow iteration");

        if tolerance.is_some_and(|relative| (r_total - previous).abs() <= relative * previous) {
            break;
        }
    }

    let hot_surface = hot_bulk - q * hot_convection.resistance;
    let module_hot_face = hot_surface - q * fixed.hot_interface;
    let module_cold_face = module_hot_face - q * fixed.module;
    let cold_surface = module_cold_face - q * fixed.cold_interface;
    let temperatures = TemperatureProfile {
        hot_bulk: ThermodynamicTemperature::new::<kelvin>(hot_bulk),
        hot_surface: ThermodynamicTemperature::new::<kelvin>(hot_surface),
        module_hot_face: ThermodynamicTemperature::new::<kelvin>(module_hot_face),
        module_cold_face: ThermodynamicTemperature::new::<kelvin>(module_cold_face),
        cold_surface: ThermodynamicTemperature::new::<kelvin>(cold_surface),
        cold_bulk: ThermodynamicTemperature::new::<kelvin>(cold_bulk),
    };

    let module_delta_t = temperatures
        .module_hot_face
        .minus(temperatures.module_cold_face);
    let module = operating_point(&config.module, module_delta_t);

    let gross = module.power.get::<watt>() * n;
    let heat_input = q * n;
    let heat_rejected = heat_input - gross;

    let hydraulics = hydraulics(config, &hot, &cell, &hot_convection, hot_flow, cold_flow);

    let boards = config.layout.boards(config.module_count);
    let nodes = config.layout.nodes(boards);
    let allowances = &config.parasitics;
    let parasitics = ParasiticLoads {
        hot_pump: Power::new::<watt>(hydraulics.hot_pump),
        cold_pump: Power::new::<watt>(hydraulics.cold_pump),
        fan: allowances.fan_fraction * Power::new::<watt>(heat_rejected),
        electronics: f64::from(boards) * allowances.per_board
            + f64::from(nodes) * allowances.per_node,
    };

    let parasitic_total = parasitics.total().get::<watt>();
    let net = gross - parasitic_total;
    let parasitic_fraction = if gross > 0.0 {
        parasitic_total / gross
    } else {
        0.0
    };

    debug!(
        module_count = config.module_count,
        r_total,
        iterations,
        net_w = net,
        "solved array operating point"
    );

    Ok(ModelResult {
        module_count: config.module_count,
        module_delta_t,
        module_heat_flow: Power::new::<watt>(q),
        module,
        resistances: ResistanceChain {
            hot_convection: thermal_resistance_k_per_w(hot_convection.resistance),
            hot_interface: thermal_resistance_k_per_w(fixed.hot_interface),
            module: config.module.thermal_resistance,
            cold_interface: thermal_resistance_k_per_w(fixed.cold_interface),
            cold_convection: thermal_resistance_k_per_w(cold_convection.resistance),
        },
        temperatures,
        gross_power: Power::new::<watt>(gross),
        heat_input: Power::new::<watt>(heat_input),
        heat_rejected: Power::new::<watt>(heat_rejected),
        hot: hot.flow(hot_flow, &hot_convection),
        cold: cold.flow(cold_flow, &cold_convection),
        pressure_drops: hydraulics.drops,
        parasitics,
        net_power: Power::new::<watt>(net),
        parasitic_fraction: Ratio::new::<ratio>(parasitic_fraction),
        iterations,
    })
}

/// Flow-independent stages of the resistance chain, K/W.
struct FixedResistances {
    hot_interface: f64,
    module: f64,
    cold_interface: f64,
}

impl FixedResistances {
    fn total(&self, hot: &Convection, cold: &Convection) -> f64 {
        hot.resistance + self.hot_interface + self.module + self.cold_interface + cold.resistance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use uom::si::thermodynamic_temperature::degree_celsius;

    use crate::{
        models::thermal::teg_array::core::test_support::{baseline_config, catalog_module},
        support::{
            constraint::ConstraintError,
            hx::FlowRegime,
            teg::ModuleSpecError,
            thermo::FluidKind,
        },
    };

    fn run(config: &SystemConfig) -> ModelResult {
        solve(config, &FluidProperties::new()).expect("configuration should solve")
    }

    #[test]
    fn baseline_bismuth_telluride_array() {
        let result = run(&baseline_config());

        assert!(result.net_power.get::<watt>() > 0.0);
        assert!(result.parasitic_fraction.get::<ratio>() < 0.5);

        assert_relative_eq!(result.net_power.get::<watt>(), 2351.87, max_relative = 1e-4);
        assert_relative_eq!(result.gross_power.get::<watt>(), 4347.04, max_relative = 1e-4);
        assert_relative_eq!(result.resistances.total().value, 1.87514, max_relative = 1e-4);
        assert_relative_eq!(
            result.module_delta_t.get::<delta_kelvin>(),
            121.591,
            max_relative = 1e-4
        );
        assert_eq!(result.iterations, 10);
        assert_eq!(result.hot.regime, FlowRegime::Laminar);
    }

    #[test]
    fn first_law_closes() {
        let result = run(&baseline_config());

        let input = result.heat_input.get::<watt>();
        let out = result.gross_power.get::<watt>() + result.heat_rejected.get::<watt>();
        assert_relative_eq!(input, out, max_relative = 1e-6);
    }

    #[test]
    fn net_is_gross_less_parasitics() {
        let result = run(&baseline_config());
        let p = &result.parasitics;

        let expected = result.gross_power - (p.hot_pump + p.cold_pump + p.fan + p.electronics);
        assert_relative_eq!(
            result.net_power.get::<watt>(),
            expected.get::<watt>(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn chain_heat_flow_matches_module_heat_flow() {
        let result = run(&baseline_config());

        assert_relative_eq!(
            result.module_heat_flow.get::<watt>(),
            result.module.heat_flow.get::<watt>(),
            max_relative = 1e-9
        );
    }

    #[test]
    fn profile_falls_from_hot_to_cold() {
        let t = run(&baseline_config()).temperatures;
        let walk = [
            t.hot_bulk,
            t.hot_surface,
            t.module_hot_face,
            t.module_cold_face,
            t.cold_surface,
            t.cold_bulk,
        ];

        assert!(walk.windows(2).all(|pair| pair[0] > pair[1]));
        assert_relative_eq!(t.hot_bulk.get::<degree_celsius>(), 195.0, epsilon = 1e-9);
        assert_relative_eq!(t.cold_bulk.get::<degree_celsius>(), 45.0, epsilon = 1e-9);
    }

    #[test]
    fn electronics_allowance() {
        // 1620 modules: 45 boards and 15 nodes.
        let result = run(&baseline_config());
        assert_relative_eq!(
            result.parasitics.electronics.get::<watt>(),
            45.0 * 1.5 + 15.0 * 3.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn reference_properties_are_flagged() {
        let result = run(&baseline_config());
        assert!(result.hot.fallback);
        assert!(result.cold.fallback);
        assert!(result.used_fallback_properties());
    }

    #[test]
    fn thermal_oil_array_produces_power() {
        let config = SystemConfig::new(catalog_module("thermonamic"), 1620)
            .with_inlets(
                ThermodynamicTemperature::new::<degree_celsius>(300.0),
                ThermodynamicTemperature::new::<degree_celsius>(40.0),
            )
            .with_fluids(FluidKind::ThermalOil, FluidKind::AqueousGlycol);

        let result = run(&config);

        assert!(!result.hot.fallback);
        assert!(result.cold.fallback);
        assert!(result.net_power.get::<watt>() > 0.0);
    }

    #[test]
    fn tolerance_matches_fixed_iterations() {
        let fixed = run(&baseline_config());
        let tolerant = run(&baseline_config().with_convergence(Convergence::Tolerance {
            relative: 1e-12,
            max_iterations: 100,
        }));

        assert!(tolerant.iterations <= 100);
        assert_relative_eq!(
            fixed.net_power.get::<watt>(),
            tolerant.net_power.get::<watt>(),
            max_relative = 1e-6
        );
    }

    #[test]
    fn zero_modules_is_non_physical() {
        let config = baseline_config().with_module_count(0);
        assert_eq!(
            solve(&config, &FluidProperties::new()),
            Err(SolveError::NonPhysicalConfiguration {
                reason: NonPhysical::NoModules,
            })
        );
    }

    #[test]
    fn zero_module_resistance_is_non_physical() {
        let mut module = catalog_module("marlow");
        module.thermal_resistance = thermal_resistance_k_per_w(0.0);
        let config = baseline_config().with_module(module);

        assert_eq!(
            solve(&config, &FluidProperties::new()),
            Err(SolveError::NonPhysicalConfiguration {
                reason: NonPhysical::Module(ModuleSpecError::ThermalResistance(
                    ConstraintError::Zero
                )),
            })
        );
    }

    #[test]
    fn cold_inlet_above_hot_is_non_physical() {
        let config = baseline_config().with_inlets(
            ThermodynamicTemperature::new::<degree_celsius>(40.0),
            ThermodynamicTemperature::new::<degree_celsius>(200.0),
        );

        assert!(matches!(
            solve(&config, &FluidProperties::new()),
            Err(SolveError::NonPhysicalConfiguration {
                reason: NonPhysical::NoDrivingDifference { .. }
            })
        ));
    }

    proptest! {
        #[test]
        fn outputs_grow_with_module_count(count in 1u32..20_000, extra in 1u32..2_000) {
            let smaller = run(&baseline_config().with_module_count(count));
            let larger = run(&baseline_config().with_module_count(count + extra));

            prop_assert!(larger.gross_power >= smaller.gross_power);
            prop_assert!(larger.heat_input >= smaller.heat_input);
        }

        #[test]
        fn net_grows_across_board_multiples(boards in 1u32..1_389) {
            let smaller = run(&baseline_config().with_module_count(36 * boards));
            let larger = run(&baseline_config().with_module_count(36 * (boards + 1)));

            prop_assert!(larger.net_power >= smaller.net_power);
        }

        #[test]
        fn quantities_are_non_negative(
            count in 1u32..10_000,
            hot_c in 80.0f64..350.0,
            cold_c in 5.0f64..60.0,
        ) {
            let config = baseline_config()
                .with_module_count(count)
                .with_inlets(
                    ThermodynamicTemperature::new::<degree_celsius>(hot_c),
                    ThermodynamicTemperature::new::<degree_celsius>(cold_c),
                )
                .with_auto_fluids();
            let result = run(&config);
            let r = &result.resistances;

            prop_assert!(result.module.efficiency.get::<ratio>() >= 0.0);
            prop_assert!(result.module_heat_flow.get::<watt>() >= 0.0);
            prop_assert!(result.hot.reynolds >= 0.0);
            prop_assert!(result.cold.reynolds >= 0.0);
            for stage in [r.hot_convection, r.hot_interface, r.module, r.cold_interface, r.cold_convection] {
                prop_assert!(stage.value >= 0.0);
            }
        }
    }
}
