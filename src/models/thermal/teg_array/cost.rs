//! Installed and lifecycle cost of a solved array.
//!
//! Prices are USD at volume and follow the hardware class implied by the hot
//! loop: aqueous glycol runs on copper cold plates and 12 V boards, thermal
//! oil on stainless plates and 20 V boards. Counts of boards, nodes and
//! towers round partial groups up, since hardware is bought whole.

use std::fmt;

use thiserror::Error;
use uom::si::{
    f64::{Power, Ratio},
    power::kilowatt,
    ratio::{percent, ratio},
};

use crate::support::{
    constraint::{Constrained, Constraint, ConstraintError, StrictlyPositive, UnitInterval},
    teg::ModuleSpec,
    thermo::FluidKind,
};

use super::{ArrayLayout, HardwareCounts, ModelResult};

/// Hours in a year.
const HOURS_PER_YEAR: f64 = 8760.0;

/// Rated power of the reference system the fluid-system prices describe, kW.
const FLUID_SYSTEM_BASE_KW: f64 = 10.0;

/// Scale factor above which heater and pump prices grow.
const FLUID_SYSTEM_SCALE_THRESHOLD: f64 = 1.5;

const INTERCONNECT_PER_BOARD: f64 = 21.80;
const NODE_UNIT: f64 = 88.59;

const DRY_COOLER_PER_KW: f64 = 45.0;
const BOREHOLE_KW: f64 = 6.0;
const BOREHOLE_DEPTH_M: f64 = 150.0;
const BOREHOLE_COST_PER_M: f64 = 82.0;

const CONTAINER: f64 = 4500.0;
const ELECTRICAL_PANEL: f64 = 1800.0;
const INVERTER_PER_KW: f64 = 250.0;
const HMI: f64 = 800.0;
const CONTAINER_SAFETY: f64 = 500.0;
const CABLE_TRAYS: f64 = 1000.0;

const SLIDE_RAIL_PER_TOWER: f64 = 45.0;
const CLAMPS_PER_TOWER: f64 = 5.0 * 25.0;
const UNIONS_PER_TOWER: f64 = 4.0;
const GRATING_FT2_PER_TOWER: f64 = 6.0;
const GRATING_PER_FT2: f64 = 12.0;
const WALL_INSULATION_FT2: f64 = 400.0;
const NETWORK_CABLE_PER_BOARD: f64 = 5.0;
const POWER_CABLE_PER_BOARD: f64 = 8.0;
const BUS_BAR_BASE: f64 = 800.0;
const BUS_BAR_PER_NODE: f64 = 25.0;

/// Manifold insulation area per foot of manifold, ft².
const INSULATION_FT2_PER_FT: f64 = 2.0;

/// How heat is rejected from the cold loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoolingStrategy {
    /// Air-cooled dry cooler, priced per kW rejected.
    #[default]
    DryCooler,
    /// Vertical ground-loop boreholes of 6 kW each.
    GroundLoop,
}

impl fmt::Display for CoolingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::DryCooler => "dry cooler",
            Self::GroundLoop => "ground loop",
        })
    }
}

/// Cold-plate and loop hardware family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardwareClass {
    /// Copper plates, glycol loop, 12 V boards.
    Copper,
    /// Stainless plates, thermal-oil loop, 20 V boards.
    Stainless,
}

impl HardwareClass {
    #[must_use]
    pub fn for_hot_fluid(fluid: FluidKind) -> Self {
        match fluid {
            FluidKind::AqueousGlycol => Self::Copper,
            FluidKind::ThermalOil => Self::Stainless,
        }
    }

    fn board_unit(self) -> f64 {
        match self {
            Self::Copper => 131.02,
            Self::Stainless => 137.05,
        }
    }

    fn hx(self) -> HxPrices {
        match self {
            Self::Copper => HxPrices {
                hot_cell: 12.00,
                cold_cell: 4.00,
                hot_tim: 0.80,
                cold_tim: 0.50,
                hot_manifold_per_ft: 8.00,
                cold_manifold_per_ft: 4.00,
                insulation_per_ft2: 2.50,
                manifold_ft_per_module: 0.08,
            },
            Self::Stainless => HxPrices {
                hot_cell: 18.00,
                cold_cell: 5.00,
                hot_tim: 2.50,
                cold_tim: 0.50,
                hot_manifold_per_ft: 12.00,
                cold_manifold_per_ft: 6.00,
                insulation_per_ft2: 8.00,
                manifold_ft_per_module: 0.10,
            },
        }
    }

    fn fluid_system(self) -> FluidSystemPrices {
        match self {
            Self::Copper => FluidSystemPrices {
                heater: 3500.0,
                hot_pump: 1200.0,
                // skid, primary HX, cold pump, expansion, fluid, piping, controls
                other: 2500.0 + 4000.0 + 800.0 + 600.0 + 400.0 + 1500.0 + 1200.0,
            },
            Self::Stainless => FluidSystemPrices {
                heater: 9500.0,
                hot_pump: 6500.0,
                // skid, cold pump, expansion, fluid, piping, controls, safety
                other: 3000.0 + 1000.0 + 1000.0 + 4125.0 + 4000.0 + 1800.0 + 700.0,
            },
        }
    }

    fn tower_unit(self) -> f64 {
        match self {
            Self::Copper => 120.0,
            Self::Stainless => 180.0,
        }
    }

    fn union_unit(self) -> f64 {
        match self {
            Self::Copper => 18.0,
            Self::Stainless => 35.0,
        }
    }

    fn wall_insulation_per_ft2(self) -> f64 {
        match self {
            Self::Copper => 3.0,
            Self::Stainless => 3.5,
        }
    }
}

impl fmt::Display for HardwareClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Copper => "copper",
            Self::Stainless => "stainless",
        })
    }
}

struct HxPrices {
    hot_cell: f64,
    cold_cell: f64,
    hot_tim: f64,
    cold_tim: f64,
    hot_manifold_per_ft: f64,
    cold_manifold_per_ft: f64,
    insulation_per_ft2: f64,
    manifold_ft_per_module: f64,
}

struct FluidSystemPrices {
    heater: f64,
    hot_pump: f64,
    other: f64,
}

/// A vertical ground loop sized to reject an array's heat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundLoop {
    /// Boreholes of 150 m, each rejecting 6 kW.
    pub boreholes: u32,
    /// Drilling cost, USD.
    pub cost: f64,
}

impl GroundLoop {
    #[must_use]
    pub fn for_heat_rejected(heat_rejected: Power) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let boreholes = (heat_rejected.get::<kilowatt>().max(0.0) / BOREHOLE_KW).ceil() as u32;
        Self {
            boreholes,
            cost: f64::from(boreholes) * BOREHOLE_DEPTH_M * BOREHOLE_COST_PER_M,
        }
    }
}

/// Commercial assumptions for a cost estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostConfig {
    pub cooling: CoolingStrategy,
    /// Discount applied to the subtotal.
    pub volume_discount: Constrained<Ratio, UnitInterval>,
    /// Service life over which lifecycle cost is spread, years.
    pub system_life_years: Constrained<f64, StrictlyPositive>,
    /// Fraction of the year the array runs.
    pub uptime: Constrained<Ratio, UnitInterval>,
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            cooling: CoolingStrategy::default(),
            volume_discount: Constrained::new_unchecked(Ratio::new::<percent>(15.0)),
            system_life_years: Constrained::new_unchecked(20.0),
            uptime: Constrained::new_unchecked(Ratio::new::<percent>(90.0)),
        }
    }
}

impl CostConfig {
    /// Creates a cost configuration from raw values.
    ///
    /// # Errors
    ///
    /// Returns a [`CostError`] if the discount or uptime lies outside
    /// `[0, 1]` or the system life is not positive.
    pub fn new(
        cooling: CoolingStrategy,
        volume_discount: Ratio,
        system_life_years: f64,
        uptime: Ratio,
    ) -> Result<Self, CostError> {
        Ok(Self {
            cooling,
            volume_discount: UnitInterval::new(volume_discount)
                .map_err(CostError::tag("volume_discount"))?,
            system_life_years: StrictlyPositive::new(system_life_years)
                .map_err(CostError::tag("system_life_years"))?,
            uptime: UnitInterval::new(uptime).map_err(CostError::tag("uptime"))?,
        })
    }
}

/// An invalid cost input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{quantity}: {source}")]
pub struct CostError {
    pub quantity: &'static str,
    pub source: ConstraintError,
}

impl CostError {
    fn tag(quantity: &'static str) -> impl Fn(ConstraintError) -> Self {
        move |source| Self { quantity, source }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElectronicsCost {
    pub interconnects: f64,
    pub boards: f64,
    pub nodes: f64,
}

impl ElectronicsCost {
    #[must_use]
    pub fn total(&self) -> f64 {
        self.interconnects + self.boards + self.nodes
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatExchangerCost {
    /// Hot and cold plates plus interface material, per module.
    pub cells: f64,
    pub manifolds: f64,
    pub insulation: f64,
}

impl HeatExchangerCost {
    #[must_use]
    pub fn total(&self) -> f64 {
        self.cells + self.manifolds + self.insulation
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lifecycle {
    /// Full module replacements needed within the system life.
    pub replacements: u32,
    /// Initial modules plus replacements.
    pub module_cost: f64,
    pub total: f64,
    /// Lifecycle total over lifetime net energy, USD/kWh.
    pub cost_per_kwh: f64,
}

/// Itemized installed cost of an array, USD.
#[derive(Debug, Clone, PartialEq)]
pub struct CostBreakdown {
    pub module_name: String,
    pub module_count: u32,
    pub counts: HardwareCounts,
    pub hardware: HardwareClass,
    pub cooling_strategy: CoolingStrategy,
    /// Net electrical output the estimate is normalized by, kW.
    pub net_kw: f64,
    /// Heat rejected by the cooling system, kW.
    pub heat_rejected_kw: f64,
    pub modules: f64,
    pub electronics: ElectronicsCost,
    pub heat_exchangers: HeatExchangerCost,
    pub fluid_system: f64,
    /// Boreholes drilled, for a ground loop.
    pub boreholes: Option<u32>,
    pub cooling: f64,
    pub container: f64,
    pub discount: f64,
    pub lifecycle: Lifecycle,
}

impl CostBreakdown {
    #[must_use]
    pub fn subtotal(&self) -> f64 {
        self.modules
            + self.electronics.total()
            + self.heat_exchangers.total()
            + self.fluid_system
            + self.cooling
            + self.container
    }

    /// Subtotal less the volume discount.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.subtotal() - self.discount
    }

    /// Installed cost per net kW; infinite when there is no net output.
    #[must_use]
    pub fn cost_per_kw(&self) -> f64 {
        if self.net_kw > 0.0 {
            self.total() / self.net_kw
        } else {
            f64::INFINITY
        }
    }
}

/// Estimates the installed and lifecycle cost of a solved array.
///
/// `module` and `layout` must be the ones `result` was solved with.
///
/// # Errors
///
/// Returns a [`CostError`] if the module's rated life is not positive.
pub fn estimate(
    result: &ModelResult,
    module: &ModuleSpec,
    layout: &ArrayLayout,
    config: &CostConfig,
) -> Result<CostBreakdown, CostError> {
    StrictlyPositive::check(&module.rated_life_years)
        .map_err(CostError::tag("rated_life_years"))?;

    let n = f64::from(result.module_count);
    let counts = layout.hardware(result.module_count);
    let boards = f64::from(counts.boards);
    let nodes = f64::from(counts.nodes);
    let towers = f64::from(counts.towers);

    let hardware = HardwareClass::for_hot_fluid(result.hot.fluid);
    let net_kw = result.net_power.get::<kilowatt>();
    let heat_rejected_kw = result.heat_rejected.get::<kilowatt>();

    let modules = n * module.unit_price;

    let electronics = ElectronicsCost {
        interconnects: boards * INTERCONNECT_PER_BOARD,
        boards: boards * hardware.board_unit(),
        nodes: nodes * NODE_UNIT,
    };

    let hx = hardware.hx();
    let manifold_ft = n * hx.manifold_ft_per_module;
    let heat_exchangers = HeatExchangerCost {
        cells: n * (hx.hot_cell + hx.cold_cell + hx.hot_tim + hx.cold_tim),
        manifolds: manifold_ft * (hx.hot_manifold_per_ft + hx.cold_manifold_per_ft),
        insulation: manifold_ft * INSULATION_FT2_PER_FT * hx.insulation_per_ft2,
    };

    let fluid = hardware.fluid_system();
    let scale = (net_kw / FLUID_SYSTEM_BASE_KW).max(1.0);
    let mut fluid_system = fluid.heater + fluid.hot_pump + fluid.other;
    if scale > FLUID_SYSTEM_SCALE_THRESHOLD {
        fluid_system += (scale - 1.0) * (0.3 * fluid.heater + 0.2 * fluid.hot_pump);
    }

    let (cooling, boreholes) = match config.cooling {
        CoolingStrategy::DryCooler => (heat_rejected_kw.max(0.0) * DRY_COOLER_PER_KW, None),
        CoolingStrategy::GroundLoop => {
            let ground = GroundLoop::for_heat_rejected(result.heat_rejected);
            (ground.cost, Some(ground.boreholes))
        }
    };

    let container_fixed = CONTAINER
        + ELECTRICAL_PANEL
        + net_kw.max(0.0) * INVERTER_PER_KW
        + HMI
        + CONTAINER_SAFETY
        + CABLE_TRAYS;
    let container_variable = towers
        * (hardware.tower_unit() + SLIDE_RAIL_PER_TOWER + CLAMPS_PER_TOWER)
        + towers * UNIONS_PER_TOWER * hardware.union_unit()
        + towers * GRATING_FT2_PER_TOWER * GRATING_PER_FT2
        + WALL_INSULATION_FT2 * hardware.wall_insulation_per_ft2()
        + boards * (NETWORK_CABLE_PER_BOARD + POWER_CABLE_PER_BOARD)
        + BUS_BAR_BASE
        + nodes * BUS_BAR_PER_NODE;

    let mut breakdown = CostBreakdown {
        module_name: module.name.clone(),
        module_count: result.module_count,
        counts,
        hardware,
        cooling_strategy: config.cooling,
        net_kw,
        heat_rejected_kw,
        modules,
        electronics,
        heat_exchangers,
        fluid_system,
        boreholes,
        cooling,
        container: container_fixed + container_variable,
        discount: 0.0,
        lifecycle: Lifecycle {
            replacements: 0,
            module_cost: modules,
            total: 0.0,
            cost_per_kwh: 0.0,
        },
    };
    breakdown.discount = breakdown.subtotal() * config.volume_discount.into_inner().get::<ratio>();

    let life = config.system_life_years.into_inner();
    let replacements = if module.rated_life_years >= life {
        0
    } else {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let lives = (life / module.rated_life_years).ceil() as u32;
        lives - 1
    };
    let lifecycle_total = breakdown.total() + f64::from(replacements) * modules;
    let lifetime_kwh = net_kw * HOURS_PER_YEAR * config.uptime.into_inner().get::<ratio>() * life;

    breakdown.lifecycle = Lifecycle {
        replacements,
        module_cost: modules * f64::from(1 + replacements),
        total: lifecycle_total,
        cost_per_kwh: if lifetime_kwh > 0.0 {
            lifecycle_total / lifetime_kwh
        } else {
            f64::INFINITY
        },
    };

    Ok(breakdown)
}

impl fmt::Display for CostBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} × {} ({} hardware, {})",
            self.module_count, self.module_name, self.hardware, self.cooling_strategy
        )?;
        writeln!(
            f,
            "  {} boards, {} nodes, {} towers",
            self.counts.boards, self.counts.nodes, self.counts.towers
        )?;

        let rows = [
            ("Modules", self.modules),
            ("Electronics", self.electronics.total()),
            ("Heat exchangers", self.heat_exchangers.total()),
            ("Fluid system", self.fluid_system),
            ("Cooling", self.cooling),
            ("Container", self.container),
        ];
        for (label, cost) in rows {
            writeln!(f, "  {label:<22} ${cost:>12.0}")?;
        }
        if let Some(boreholes) = self.boreholes {
            writeln!(f, "  {:<22} {boreholes:>13}", "Boreholes")?;
        }
        writeln!(f, "  {:<22} ${:>12.0}", "Subtotal", self.subtotal())?;
        writeln!(f, "  {:<22} ${:>12.0}", "Volume discount", -self.discount)?;
        writeln!(f, "  {:<22} ${:>12.0}", "Total", self.total())?;
        writeln!(f, "  {:<22} ${:>12.0}", "Per net kW", self.cost_per_kw())?;
        writeln!(f, "  {:<22} {:>13}", "Module replacements", self.lifecycle.replacements)?;
        writeln!(f, "  {:<22} ${:>12.0}", "Lifecycle total", self.lifecycle.total)?;
        write!(f, "  {:<22} ${:>12.4}", "Levelized per kWh", self.lifecycle.cost_per_kwh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_celsius};

    use crate::{
        models::thermal::teg_array::{
            SystemConfig, TegArray,
            core::test_support::{baseline_config, catalog_module},
        },
        support::thermo::FluidProperties,
    };

    fn solve(config: &SystemConfig) -> ModelResult {
        TegArray::new(FluidProperties::new()).solve(config).unwrap()
    }

    fn baseline_estimate(config: &CostConfig) -> CostBreakdown {
        let system = baseline_config();
        estimate(&solve(&system), &system.module, &system.layout, config).unwrap()
    }

    #[test]
    fn baseline_line_items() {
        let cost = baseline_estimate(&CostConfig::default());

        assert_eq!(cost.hardware, HardwareClass::Copper);
        assert_eq!(
            cost.counts,
            HardwareCounts {
                boards: 45,
                nodes: 15,
                towers: 21,
            }
        );
        assert_relative_eq!(cost.modules, 40_500.0);
        assert_relative_eq!(cost.electronics.total(), 8_205.75, max_relative = 1e-12);
        assert_relative_eq!(cost.heat_exchangers.total(), 30_229.2, max_relative = 1e-12);
        assert_relative_eq!(cost.fluid_system, 15_700.0);
        assert_relative_eq!(cost.cooling, 5_635.95, max_relative = 1e-4);
        assert_relative_eq!(cost.container, 21_261.97, max_relative = 1e-4);
        assert_relative_eq!(cost.total(), 103_302.9, max_relative = 1e-4);
        assert_relative_eq!(cost.cost_per_kw(), 43_923.7, max_relative = 1e-4);
        assert_relative_eq!(cost.lifecycle.cost_per_kwh, 0.278_56, max_relative = 1e-4);
    }

    #[test]
    fn discount_is_fraction_of_subtotal() {
        let cost = baseline_estimate(&CostConfig::default());
        assert_relative_eq!(cost.discount, 0.15 * cost.subtotal(), max_relative = 1e-12);
    }

    #[test]
    fn long_lived_modules_are_never_replaced() {
        let cost = baseline_estimate(&CostConfig::default());

        assert_eq!(cost.lifecycle.replacements, 0);
        assert_relative_eq!(cost.lifecycle.total, cost.total(), max_relative = 1e-12);
    }

    #[test]
    fn ground_loop_drills_six_kilowatt_boreholes() {
        let cost = baseline_estimate(&CostConfig {
            cooling: CoolingStrategy::GroundLoop,
            ..CostConfig::default()
        });

        // 125.2 kW rejected.
        assert_eq!(cost.boreholes, Some(21));
        assert_relative_eq!(cost.cooling, 21.0 * 150.0 * 82.0);
    }

    #[test]
    fn ground_loop_rounds_boreholes_up() {
        let ground = GroundLoop::for_heat_rejected(Power::new::<kilowatt>(6.01));
        assert_eq!(ground.boreholes, 2);
        assert_relative_eq!(ground.cost, 2.0 * 12_300.0);

        assert_eq!(GroundLoop::for_heat_rejected(Power::new::<kilowatt>(0.0)).boreholes, 0);
    }

    #[test]
    fn thermal_oil_uses_stainless_and_replaces_short_lived_modules() {
        let system = SystemConfig::new(catalog_module("thermonamic"), 1620)
            .with_inlets(
                ThermodynamicTemperature::new::<degree_celsius>(300.0),
                ThermodynamicTemperature::new::<degree_celsius>(40.0),
            )
            .with_fluids(FluidKind::ThermalOil, FluidKind::AqueousGlycol);
        let result = solve(&system);

        let cost = estimate(&result, &system.module, &system.layout, &CostConfig::default())
            .unwrap();

        assert_eq!(cost.hardware, HardwareClass::Stainless);
        // 8-year modules over 20 years: ceil(2.5) − 1 replacements.
        assert_eq!(cost.lifecycle.replacements, 2);
        assert_relative_eq!(
            cost.lifecycle.total,
            cost.total() + 2.0 * cost.modules,
            max_relative = 1e-12
        );
        assert_relative_eq!(cost.electronics.boards, 45.0 * 137.05, max_relative = 1e-12);
    }

    #[test]
    fn large_arrays_scale_the_fluid_system() {
        let system = baseline_config().with_module_count(6_912);
        let result = solve(&system);
        let cost =
            estimate(&result, &system.module, &system.layout, &CostConfig::default()).unwrap();

        let scale = result.net_power.get::<kilowatt>() / 10.0;
        assert!(scale < 1.5);
        assert_relative_eq!(cost.fluid_system, 15_700.0);

        let system = baseline_config().with_module_count(36_000);
        let result = solve(&system);
        let cost =
            estimate(&result, &system.module, &system.layout, &CostConfig::default()).unwrap();

        let scale = result.net_power.get::<kilowatt>() / 10.0;
        assert!(scale > 1.5);
        assert_relative_eq!(
            cost.fluid_system,
            15_700.0 + (scale - 1.0) * (0.3 * 3500.0 + 0.2 * 1200.0),
            max_relative = 1e-12
        );
    }

    #[test]
    fn discount_outside_unit_interval_is_rejected() {
        assert_eq!(
            CostConfig::new(
                CoolingStrategy::DryCooler,
                Ratio::new::<percent>(120.0),
                20.0,
                Ratio::new::<percent>(90.0),
            ),
            Err(CostError {
                quantity: "volume_discount",
                source: ConstraintError::AboveMaximum,
            })
        );
        assert!(matches!(
            CostConfig::new(
                CoolingStrategy::GroundLoop,
                Ratio::new::<percent>(15.0),
                0.0,
                Ratio::new::<percent>(90.0),
            ),
            Err(CostError {
                quantity: "system_life_years",
                ..
            })
        ));
    }

    #[test]
    fn shorter_system_life_spreads_cost_over_less_energy() {
        let ten_years = CostConfig::new(
            CoolingStrategy::DryCooler,
            Ratio::new::<percent>(15.0),
            10.0,
            Ratio::new::<percent>(90.0),
        )
        .unwrap();

        let short = baseline_estimate(&ten_years);
        let long = baseline_estimate(&CostConfig::default());

        assert_relative_eq!(short.total(), long.total(), max_relative = 1e-12);
        assert_relative_eq!(
            short.lifecycle.cost_per_kwh,
            2.0 * long.lifecycle.cost_per_kwh,
            max_relative = 1e-12
        );
    }

    #[test]
    fn module_without_rated_life_is_rejected() {
        let system = baseline_config();
        let mut module = system.module.clone();
        module.rated_life_years = 0.0;

        assert_eq!(
            estimate(&solve(&system), &module, &system.layout, &CostConfig::default()),
            Err(CostError {
                quantity: "rated_life_years",
                source: ConstraintError::Zero,
            })
        );
    }

    #[test]
    fn breakdown_table_lists_totals() {
        let text = baseline_estimate(&CostConfig::default()).to_string();
        assert!(text.contains("45 boards, 15 nodes, 21 towers"));
        assert!(text.contains("Levelized per kWh"));
    }
}
