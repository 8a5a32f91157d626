//! Parametric sweeps over module count.
//!
//! A sweep solves one scenario (technology and inlet temperatures) at a list
//! of module counts and tabulates output, fuel, ground-loop size and fuel
//! cost per row. Sweeps of several scenarios can then be compared at a net
//! output target by picking each scenario's closest row.

use std::fmt;

use thiserror::Error;
use tracing::debug;
use uom::si::{
    f64::{Power, Ratio, ThermodynamicTemperature, VolumeRate},
    power::kilowatt,
    ratio::percent,
    thermodynamic_temperature::degree_celsius,
    volume_rate::gallon_per_minute,
};

use crate::support::teg::{Catalog, CatalogError};

use super::{
    SolveError, SystemConfig, TegArray,
    cost::GroundLoop,
    fuel::{BurnerSpec, GasCost, fuel_demand},
};

/// Module counts swept when none are given, before board rounding.
pub const REFERENCE_MODULE_COUNTS: [u32; 10] =
    [500, 750, 1000, 1500, 2000, 3000, 4000, 5000, 6000, 8000];

/// A module technology run between fixed inlet temperatures.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub label: String,
    /// Catalog key of the module technology.
    pub technology: String,
    pub hot_inlet: ThermodynamicTemperature,
    pub cold_inlet: ThermodynamicTemperature,
}

impl Scenario {
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        technology: impl Into<String>,
        hot_inlet: ThermodynamicTemperature,
        cold_inlet: ThermodynamicTemperature,
    ) -> Self {
        Self {
            label: label.into(),
            technology: technology.into(),
            hot_inlet,
            cold_inlet,
        }
    }

    /// One scenario per technology in [`Catalog::standard`], each near its
    /// rated hot-side temperature.
    #[must_use]
    pub fn reference() -> Vec<Self> {
        let celsius = |c: f64| ThermodynamicTemperature::new::<degree_celsius>(c);
        vec![
            Self::new("Marlow BiTe 200C", "marlow", celsius(200.0), celsius(40.0)),
            Self::new(
                "Thermonamic PbTe 320C",
                "thermonamic",
                celsius(320.0),
                celsius(100.0),
            ),
            Self::new("Alphabet Pb 400C", "alphabet", celsius(400.0), celsius(100.0)),
        ]
    }

    /// The reference design for this scenario at `module_count` modules.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the technology is not in `catalog`.
    pub fn config(&self, catalog: &Catalog, module_count: u32) -> Result<SystemConfig, CatalogError> {
        SystemConfig::from_catalog(
            catalog,
            &self.technology,
            module_count,
            self.hot_inlet,
            self.cold_inlet,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SweepError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("solve failed at {module_count} modules")]
    Solve {
        module_count: u32,
        source: SolveError,
    },
}

/// One solved point of a sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepRow {
    /// Module count after rounding to whole boards.
    pub module_count: u32,
    pub net_power: Power,
    pub gross_power: Power,
    pub parasitics: Power,
    pub heat_rejected: Power,
    pub module_efficiency: Ratio,
    /// Net output over fuel power.
    pub system_efficiency: Ratio,
    pub hot_flow: VolumeRate,
    pub mcf_per_day: f64,
    pub ground_loop: GroundLoop,
    pub gas_costs: Vec<GasCost>,
}

impl SweepRow {
    /// Fuel cost per net kWh at `price_per_mcf`, if that price was swept.
    #[must_use]
    pub fn cost_per_kwh_at(&self, price_per_mcf: f64) -> Option<f64> {
        self.gas_costs
            .iter()
            .find(|cost| (cost.price_per_mcf - price_per_mcf).abs() < 1e-9)
            .map(|cost| cost.cost_per_kwh)
    }
}

/// The rows of one scenario's sweep, in the order the counts were given.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioSweep {
    pub scenario: Scenario,
    pub rows: Vec<SweepRow>,
}

impl ScenarioSweep {
    /// The row whose net output is closest to `target`.
    ///
    /// Ties go to the earlier row. Returns `None` for an empty sweep.
    #[must_use]
    pub fn closest_to(&self, target: Power) -> Option<&SweepRow> {
        self.rows.iter().min_by(|a, b| {
            let a = (a.net_power - target).abs().value;
            let b = (b.net_power - target).abs().value;
            a.total_cmp(&b)
        })
    }
}

/// Solves `base` at each of `counts`, rounded to whole boards.
///
/// Every setting other than the module count comes from `base`.
///
/// # Errors
///
/// Returns [`SweepError::Solve`] for the first count that fails to solve.
pub fn sweep(
    array: &TegArray,
    base: &SystemConfig,
    counts: &[u32],
    burner: &BurnerSpec,
    prices: &[f64],
) -> Result<Vec<SweepRow>, SweepError> {
    counts
        .iter()
        .map(|&count| {
            let module_count = base.layout.round_to_board(count);
            let result = array
                .solve(&base.clone().with_module_count(module_count))
                .map_err(|source| SweepError::Solve {
                    module_count,
                    source,
                })?;
            let fuel = fuel_demand(&result, burner, prices);
            debug!(
                module_count,
                net_kw = result.net_power.get::<kilowatt>(),
                mcf_per_day = fuel.mcf_per_day,
                "sweep point"
            );

            Ok(SweepRow {
                module_count,
                net_power: result.net_power,
                gross_power: result.gross_power,
                parasitics: result.parasitics.total(),
                heat_rejected: result.heat_rejected,
                module_efficiency: result.module.efficiency,
                system_efficiency: fuel.system_efficiency,
                hot_flow: result.hot.volume_flow,
                mcf_per_day: fuel.mcf_per_day,
                ground_loop: GroundLoop::for_heat_rejected(result.heat_rejected),
                gas_costs: fuel.costs,
            })
        })
        .collect()
}

/// Sweeps each scenario over the same counts.
///
/// # Errors
///
/// Returns a [`SweepError`] if a technology is missing from `catalog` or a
/// point fails to solve.
pub fn sweep_scenarios(
    array: &TegArray,
    catalog: &Catalog,
    scenarios: &[Scenario],
    counts: &[u32],
    burner: &BurnerSpec,
    prices: &[f64],
) -> Result<Vec<ScenarioSweep>, SweepError> {
    scenarios
        .iter()
        .map(|scenario| {
            let base = scenario.config(catalog, 1)?;
            Ok(ScenarioSweep {
                scenario: scenario.clone(),
                rows: sweep(array, &base, counts, burner, prices)?,
            })
        })
        .collect()
}

impl fmt::Display for ScenarioSweep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n  {:>6}  {:>8}  {:>8}  {:>7}  {:>6}  {:>7}  {:>6}  {:>8}  {:>5}",
            self.scenario.label,
            "TEGs",
            "Net kW",
            "Gross kW",
            "TEG %",
            "Sys %",
            "McF/d",
            "gpm",
            "Reject",
            "Holes",
        )?;
        for row in &self.rows {
            write!(
                f,
                "\n  {:>6}  {:>8.2}  {:>8.2}  {:>7.2}  {:>6.2}  {:>7.1}  {:>6.1}  {:>8.1}  {:>5}",
                row.module_count,
                row.net_power.get::<kilowatt>(),
                row.gross_power.get::<kilowatt>(),
                row.module_efficiency.get::<percent>(),
                row.system_efficiency.get::<percent>(),
                row.mcf_per_day,
                row.hot_flow.get::<gallon_per_minute>(),
                row.heat_rejected.get::<kilowatt>(),
                row.ground_loop.boreholes,
            )?;
            for cost in &row.gas_costs {
                write!(f, "  ${:.4}", cost.cost_per_kwh)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;

    use crate::{
        models::thermal::teg_array::{
            core::test_support::baseline_config,
            fuel::REFERENCE_GAS_PRICES,
        },
        support::thermo::{FluidKind, FluidProperties},
    };

    fn array() -> TegArray {
        TegArray::new(FluidProperties::new())
    }

    #[test]
    fn rows_match_direct_solves() {
        let base = baseline_config();
        let rows = sweep(
            &array(),
            &base,
            &[1620],
            &BurnerSpec::default(),
            &REFERENCE_GAS_PRICES,
        )
        .unwrap();

        let direct = array().solve(&base).unwrap();
        let row = &rows[0];

        assert_eq!(row.module_count, 1620);
        assert_relative_eq!(
            row.net_power.get::<kilowatt>(),
            direct.net_power.get::<kilowatt>()
        );
        assert_relative_eq!(
            row.parasitics.get::<kilowatt>(),
            direct.parasitics.total().get::<kilowatt>()
        );
        // 125.2 kW rejected.
        assert_eq!(row.ground_loop.boreholes, 21);
        assert_eq!(row.gas_costs.len(), 3);
        assert_relative_eq!(
            row.cost_per_kwh_at(4.0).unwrap(),
            row.mcf_per_day * 4.0 / (row.net_power.get::<kilowatt>() * 24.0),
            max_relative = 1e-12
        );
        assert_eq!(row.cost_per_kwh_at(3.0), None);
    }

    #[test]
    fn counts_round_to_whole_boards() {
        let rows = sweep(
            &array(),
            &baseline_config(),
            &[500, 750, 10],
            &BurnerSpec::default(),
            &[],
        )
        .unwrap();

        let counts: Vec<u32> = rows.iter().map(|row| row.module_count).collect();
        assert_eq!(counts, vec![504, 756, 36]);
    }

    #[test]
    fn closest_row_is_picked_for_target() {
        let rows = sweep(
            &array(),
            &baseline_config(),
            &REFERENCE_MODULE_COUNTS,
            &BurnerSpec::default(),
            &REFERENCE_GAS_PRICES,
        )
        .unwrap();
        let sweep = ScenarioSweep {
            scenario: Scenario::reference().remove(0),
            rows,
        };

        let target = Power::new::<kilowatt>(10.0);
        let closest = sweep.closest_to(target).unwrap();

        for row in &sweep.rows {
            assert!((closest.net_power - target).abs() <= (row.net_power - target).abs());
        }

        let empty = ScenarioSweep {
            scenario: sweep.scenario.clone(),
            rows: Vec::new(),
        };
        assert!(empty.closest_to(target).is_none());
    }

    #[test]
    fn reference_scenarios_pick_fluid_by_hot_inlet() {
        let catalog = Catalog::standard();
        let scenarios = Scenario::reference();

        let fluids: Vec<FluidKind> = scenarios
            .iter()
            .map(|scenario| scenario.config(&catalog, 36).unwrap().hot_fluid)
            .collect();
        assert_eq!(
            fluids,
            vec![
                FluidKind::AqueousGlycol,
                FluidKind::ThermalOil,
                FluidKind::ThermalOil
            ]
        );

        let sweeps = sweep_scenarios(
            &array(),
            &catalog,
            &scenarios,
            &[1000, 4000],
            &BurnerSpec::default(),
            &REFERENCE_GAS_PRICES,
        )
        .unwrap();

        assert_eq!(sweeps.len(), 3);
        for sweep in &sweeps {
            assert_eq!(sweep.rows.len(), 2);
            assert!(sweep.to_string().starts_with(&sweep.scenario.label));
        }
    }

    #[test]
    fn unknown_technology_is_reported() {
        let scenario = Scenario::new(
            "Skutterudite 500C",
            "skutterudite",
            ThermodynamicTemperature::new::<degree_celsius>(500.0),
            ThermodynamicTemperature::new::<degree_celsius>(40.0),
        );

        assert!(matches!(
            sweep_scenarios(
                &array(),
                &Catalog::standard(),
                &[scenario],
                &REFERENCE_MODULE_COUNTS,
                &BurnerSpec::default(),
                &[],
            ),
            Err(SweepError::Catalog(_))
        ));
    }

    proptest! {
        #[test]
        fn net_power_grows_down_the_rows(
            mut counts in prop::collection::vec(36u32..20_000, 2..8),
        ) {
            counts.sort_unstable();
            let rows = sweep(
                &array(),
                &baseline_config(),
                &counts,
                &BurnerSpec::default(),
                &[],
            )
            .unwrap();

            for pair in rows.windows(2) {
                prop_assert!(pair[1].net_power >= pair[0].net_power);
            }
        }
    }
}
