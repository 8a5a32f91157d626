use uom::si::{
    f64::{Length, Power, Ratio, TemperatureInterval, ThermodynamicTemperature},
    length::{meter, micrometer, millimeter},
    power::watt,
    ratio::{percent, ratio},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::{
    constraint::{Constrained, Constraint, NonNegative, StrictlyPositive, UnitIntervalLowerOpen},
    hx::HxGeometry,
    teg::{Catalog, CatalogError, ModuleSpec},
    thermo::FluidKind,
};

use super::solve::NonPhysical;

/// Everything needed to solve one array operating point.
///
/// Start from [`SystemConfig::new`], which fills in the reference design
/// around a module technology and count, then adjust with the `with_*`
/// methods. Each `with_*` call returns a modified copy.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemConfig {
    pub module_count: u32,
    pub module: ModuleSpec,
    pub geometry: HxGeometry,
    pub hot_fluid: FluidKind,
    pub cold_fluid: FluidKind,
    pub hot_inlet: ThermodynamicTemperature,
    pub cold_inlet: ThermodynamicTemperature,
    /// Target temperature change of each fluid across the array.
    pub fluid_delta_t: TemperatureInterval,
    /// Pump efficiency, applied to both loops.
    pub pump_efficiency: Constrained<Ratio, UnitIntervalLowerOpen>,
    pub piping: PipeGeometry,
    pub layout: ArrayLayout,
    pub parasitics: ParasiticAllowances,
    pub convergence: Convergence,
}

impl SystemConfig {
    /// Creates the reference design for `module_count` modules of `module`.
    ///
    /// 200 °C hot inlet, 40 °C cold inlet, 10 K fluid rise, aqueous glycol on
    /// both sides and a 65 % pump.
    #[must_use]
    pub fn new(module: ModuleSpec, module_count: u32) -> Self {
        Self {
            module_count,
            module,
            geometry: HxGeometry::default(),
            hot_fluid: FluidKind::AqueousGlycol,
            cold_fluid: FluidKind::AqueousGlycol,
            hot_inlet: ThermodynamicTemperature::new::<degree_celsius>(200.0),
            cold_inlet: ThermodynamicTemperature::new::<degree_celsius>(40.0),
            fluid_delta_t: TemperatureInterval::new::<delta_kelvin>(10.0),
            pump_efficiency: Constrained::new_unchecked(Ratio::new::<percent>(65.0)),
            piping: PipeGeometry::default(),
            layout: ArrayLayout::default(),
            parasitics: ParasiticAllowances::default(),
            convergence: Convergence::default(),
        }
    }

    /// Creates the reference design for a catalog technology and inlets.
    ///
    /// Both loops use the fluid suited to `hot_inlet`.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if `technology` is not in `catalog`.
    pub fn from_catalog(
        catalog: &Catalog,
        technology: &str,
        module_count: u32,
        hot_inlet: ThermodynamicTemperature,
        cold_inlet: ThermodynamicTemperature,
    ) -> Result<Self, CatalogError> {
        let module = catalog.get(technology)?.clone();
        Ok(Self::new(module, module_count)
            .with_inlets(hot_inlet, cold_inlet)
            .with_auto_fluids())
    }

    #[must_use]
    pub fn with_module_count(self, module_count: u32) -> Self {
        Self {
            module_count,
            ..self
        }
    }

    #[must_use]
    pub fn with_module(self, module: ModuleSpec) -> Self {
        Self { module, ..self }
    }

    #[must_use]
    pub fn with_geometry(self, geometry: HxGeometry) -> Self {
        Self { geometry, ..self }
    }

    /// Sets both inlet temperatures.
    #[must_use]
    pub fn with_inlets(
        self,
        hot_inlet: ThermodynamicTemperature,
        cold_inlet: ThermodynamicTemperature,
    ) -> Self {
        Self {
            hot_inlet,
            cold_inlet,
            ..self
        }
    }

    /// Sets the hot-side and cold-side fluids.
    #[must_use]
    pub fn with_fluids(self, hot_fluid: FluidKind, cold_fluid: FluidKind) -> Self {
        Self {
            hot_fluid,
            cold_fluid,
            ..self
        }
    }

    /// Uses the fluid suited to the current hot inlet on both sides.
    ///
    /// See [`FluidKind::for_hot_inlet`].
    #[must_use]
    pub fn with_auto_fluids(self) -> Self {
        let fluid = FluidKind::for_hot_inlet(self.hot_inlet);
        self.with_fluids(fluid, fluid)
    }

    #[must_use]
    pub fn with_fluid_delta_t(self, fluid_delta_t: TemperatureInterval) -> Self {
        Self {
            fluid_delta_t,
            ..self
        }
    }

    #[must_use]
    pub fn with_pump_efficiency(
        self,
        pump_efficiency: Constrained<Ratio, UnitIntervalLowerOpen>,
    ) -> Self {
        Self {
            pump_efficiency,
            ..self
        }
    }

    #[must_use]
    pub fn with_piping(self, piping: PipeGeometry) -> Self {
        Self { piping, ..self }
    }

    #[must_use]
    pub fn with_layout(self, layout: ArrayLayout) -> Self {
        Self { layout, ..self }
    }

    #[must_use]
    pub fn with_parasitics(self, parasitics: ParasiticAllowances) -> Self {
        Self { parasitics, ..self }
    }

    #[must_use]
    pub fn with_convergence(self, convergence: Convergence) -> Self {
        Self {
            convergence,
            ..self
        }
    }

    /// Hot-side bulk temperature, half the fluid rise below the inlet.
    #[must_use]
    pub fn hot_bulk(&self) -> ThermodynamicTemperature {
        self.hot_inlet - 0.5 * self.fluid_delta_t
    }

    /// Cold-side bulk temperature, half the fluid rise above the inlet.
    #[must_use]
    pub fn cold_bulk(&self) -> ThermodynamicTemperature {
        self.cold_inlet + 0.5 * self.fluid_delta_t
    }

    /// Checks every input the solver divides by or iterates on.
    ///
    /// # Errors
    ///
    /// Returns the first [`NonPhysical`] reason found.
    pub fn validate(&self) -> Result<(), NonPhysical> {
        if self.module_count == 0 {
            return Err(NonPhysical::NoModules);
        }
        self.module.validate()?;
        self.geometry.validate()?;

        StrictlyPositive::check(&self.fluid_delta_t).map_err(NonPhysical::invalid("fluid_delta_t"))?;

        self.piping.validate()?;
        self.layout.validate()?;
        self.parasitics.validate()?;
        self.convergence.validate()?;

        let hot_bulk = self.hot_bulk();
        let cold_bulk = self.cold_bulk();
        if !hot_bulk.value.is_finite() || !cold_bulk.value.is_finite() || hot_bulk <= cold_bulk {
            return Err(NonPhysical::NoDrivingDifference {
                hot_bulk_c: hot_bulk.get::<degree_celsius>(),
                cold_bulk_c: cold_bulk.get::<degree_celsius>(),
            });
        }

        Ok(())
    }
}

/// Supply piping for one tower loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeGeometry {
    pub length: Length,
    pub inner_diameter: Length,
    /// Absolute wall roughness, shared by channels, manifolds and pipe.
    pub roughness: Length,
}

impl PipeGeometry {
    fn validate(&self) -> Result<(), NonPhysical> {
        StrictlyPositive::check(&self.length).map_err(NonPhysical::invalid("piping.length"))?;
        StrictlyPositive::check(&self.inner_diameter)
            .map_err(NonPhysical::invalid("piping.inner_diameter"))?;
        NonNegative::check(&self.roughness).map_err(NonPhysical::invalid("piping.roughness"))
    }
}

impl Default for PipeGeometry {
    /// 30 m of 1.5 in (38 mm) drawn tubing.
    fn default() -> Self {
        Self {
            length: Length::new::<meter>(30.0),
            inner_diameter: Length::new::<millimeter>(38.0),
            roughness: Length::new::<micrometer>(1.0),
        }
    }
}

/// How modules are grouped into panels, towers, boards and nodes.
///
/// Towers are independent hydraulic loops. Boards are power-conditioning
/// boards and nodes are the controllers that serve them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrayLayout {
    pub modules_per_panel: u32,
    pub panels_per_tower: u32,
    pub modules_per_board: u32,
    pub boards_per_node: u32,
    /// Manifold run serving one tower.
    pub manifold_length_per_tower: Length,
}

impl ArrayLayout {
    #[must_use]
    pub fn modules_per_tower(&self) -> u32 {
        self.modules_per_panel * self.panels_per_tower
    }

    /// Tower loops sharing the hot flow, as used by the hydraulic model.
    #[must_use]
    pub fn towers(&self, module_count: u32) -> u32 {
        (module_count / self.modules_per_tower()).max(1)
    }

    /// Boards whose standby load the electronics allowance covers.
    #[must_use]
    pub fn boards(&self, module_count: u32) -> u32 {
        (module_count / self.modules_per_board).max(1)
    }

    /// Nodes serving `boards` boards.
    #[must_use]
    pub fn nodes(&self, boards: u32) -> u32 {
        (boards / self.boards_per_node).max(1)
    }

    /// Hardware to procure for `module_count` modules.
    ///
    /// Unlike [`ArrayLayout::boards`] and friends, partial groups round up.
    #[must_use]
    pub fn hardware(&self, module_count: u32) -> HardwareCounts {
        let boards = module_count.div_ceil(self.modules_per_board);
        HardwareCounts {
            boards,
            nodes: boards.div_ceil(self.boards_per_node),
            towers: module_count.div_ceil(self.modules_per_tower()),
        }
    }

    /// Rounds `count` to the nearest whole board, never below one board.
    ///
    /// Ties round up.
    #[must_use]
    pub fn round_to_board(&self, count: u32) -> u32 {
        let board = self.modules_per_board;
        let boards = (u64::from(count) + u64::from(board / 2)) / u64::from(board);
        let rounded = boards.saturating_mul(u64::from(board));
        u32::try_from(rounded).unwrap_or(u32::MAX).max(board)
    }

    fn validate(&self) -> Result<(), NonPhysical> {
        let checks = [
            ("layout.modules_per_panel", StrictlyPositive::check(&self.modules_per_panel)),
            ("layout.panels_per_tower", StrictlyPositive::check(&self.panels_per_tower)),
            ("layout.modules_per_board", StrictlyPositive::check(&self.modules_per_board)),
            ("layout.boards_per_node", StrictlyPositive::check(&self.boards_per_node)),
            (
                "layout.manifold_length_per_tower",
                StrictlyPositive::check(&self.manifold_length_per_tower),
            ),
        ];

        checks
            .into_iter()
            .try_for_each(|(quantity, check)| check.map_err(NonPhysical::invalid(quantity)))
    }
}

impl Default for ArrayLayout {
    fn default() -> Self {
        Self {
            modules_per_panel: 16,
            panels_per_tower: 5,
            modules_per_board: 36,
            boards_per_node: 3,
            manifold_length_per_tower: Length::new::<meter>(2.0),
        }
    }
}

/// Procurement counts derived from a module count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HardwareCounts {
    pub boards: u32,
    pub nodes: u32,
    pub towers: u32,
}

/// Parasitic loads not covered by the pump model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParasiticAllowances {
    /// Dry-cooler fan power as a fraction of heat rejected.
    pub fan_fraction: Ratio,
    pub per_board: Power,
    pub per_node: Power,
}

impl ParasiticAllowances {
    fn validate(&self) -> Result<(), NonPhysical> {
        NonNegative::check(&self.fan_fraction).map_err(NonPhysical::invalid("parasitics.fan_fraction"))?;
        NonNegative::check(&self.per_board).map_err(NonPhysical::invalid("parasitics.per_board"))?;
        NonNegative::check(&self.per_node).map_err(NonPhysical::invalid("parasitics.per_node"))
    }
}

impl Default for ParasiticAllowances {
    /// 15 W of fan per kW rejected, 1.5 W per board, 3 W per node.
    fn default() -> Self {
        Self {
            fan_fraction: Ratio::new::<ratio>(0.015),
            per_board: Power::new::<watt>(1.5),
            per_node: Power::new::<watt>(3.0),
        }
    }
}

/// When the heat-flow iteration stops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Convergence {
    /// Run exactly this many iterations.
    FixedIterations(u32),
    /// Stop once the relative change in total resistance is at most
    /// `relative`, or after `max_iterations`.
    Tolerance { relative: f64, max_iterations: u32 },
}

impl Convergence {
    fn validate(&self) -> Result<(), NonPhysical> {
        match *self {
            Self::FixedIterations(iterations) => StrictlyPositive::check(&iterations)
                .map_err(NonPhysical::invalid("convergence.iterations")),
            Self::Tolerance {
                relative,
                max_iterations,
            } => {
                NonNegative::check(&relative).map_err(NonPhysical::invalid("convergence.relative"))?;
                StrictlyPositive::check(&max_iterations)
                    .map_err(NonPhysical::invalid("convergence.max_iterations"))
            }
        }
    }
}

impl Default for Convergence {
    fn default() -> Self {
        Self::FixedIterations(10)
    }
}
