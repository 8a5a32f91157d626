//! Liquid-coupled thermoelectric generator arrays.
//!
//! [`TegArray`] is the [`twine_core::Model`] for one steady operating point:
//! it maps a [`SystemConfig`] to a [`ModelResult`]. The same type also sizes
//! an array for a net output target. The computational core is in the
//! internal `core` module.
//!
//! The [`fuel`] and [`cost`] modules build on solved results to estimate
//! natural gas demand and installed and lifecycle cost. [`sweep`] tabulates
//! output, fuel and ground-loop size across module counts and scenarios.
//!
//! # Example
//!
//! ```
//! use teg_models::{
//!     models::thermal::teg_array::{SystemConfig, TegArray},
//!     support::{teg::Catalog, thermo::FluidProperties},
//! };
//! use uom::si::power::watt;
//!
//! let catalog = Catalog::standard();
//! let config = SystemConfig::new(catalog.get("marlow").unwrap().clone(), 1620);
//!
//! let array = TegArray::new(FluidProperties::new());
//! let result = array.solve(&config).unwrap();
//!
//! assert!(result.net_power.get::<watt>() > 0.0);
//! ```

pub(crate) mod core;
pub mod cost;
pub mod fuel;
pub mod sweep;

pub use self::core::{
    ArrayLayout, Convergence, HardwareCounts, ModelResult, NonPhysical, ParasiticAllowances,
    ParasiticLoads, PipeGeometry, PressureDrops, ResistanceChain, SideFlow, Sizing, SizingConfig,
    SizingError, SolveError, SystemConfig, TemperatureProfile,
};

use twine_core::Model;
use uom::si::f64::Power;

use crate::support::thermo::FluidProperties;

/// A TEG array model bound to a fluid property provider.
#[derive(Debug, Default)]
pub struct TegArray {
    properties: FluidProperties,
}

impl TegArray {
    #[must_use]
    pub fn new(properties: FluidProperties) -> Self {
        Self { properties }
    }

    /// The property provider used for both loops.
    #[must_use]
    pub fn properties(&self) -> &FluidProperties {
        &self.properties
    }

    /// Solves one operating point.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::NonPhysicalConfiguration`] if `config` cannot
    /// describe a working array.
    pub fn solve(&self, config: &SystemConfig) -> Result<ModelResult, SolveError> {
        self::core::solve(config, &self.properties)
    }

    /// Finds the module count that meets a net output target.
    ///
    /// Every setting other than the module count comes from `base`. Net
    /// output is assumed not to decrease as modules are added; see
    /// [`Sizing::met_target`] for whether the target was reached.
    ///
    /// # Errors
    ///
    /// Returns a [`SizingError`] if the search bounds are inverted or a trial
    /// solve fails.
    pub fn size_for_target(
        &self,
        base: &SystemConfig,
        target: Power,
        config: SizingConfig,
    ) -> Result<Sizing, SizingError> {
        self::core::size_for_target(self, base, target, config)
    }
}

impl Model for TegArray {
    type Input = SystemConfig;
    type Output = ModelResult;
    type Error = SolveError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.solve(input)
    }
}
