//! Steady-state thermal, hydraulic and electrical solution of a TEG array.
//!
//! Each module sits between a hot-side and a cold-side liquid cold plate.
//! Heat crosses a five-stage series resistance chain: hot convection, hot
//! interface material, module, cold interface material, cold convection.
//! The convective stages depend on the loop flows, which in turn depend on
//! the heat carried, so the chain and the heat flow are iterated together.
//! Pumping, heat rejection and electronics loads are then charged against
//! the gross electrical output.

mod config;
mod report;
mod results;
mod sizing;
mod solve;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{
    ArrayLayout, Convergence, HardwareCounts, ParasiticAllowances, PipeGeometry, SystemConfig,
};
pub use results::{
    ModelResult, ParasiticLoads, PressureDrops, ResistanceChain, SideFlow, TemperatureProfile,
};
pub use sizing::{Sizing, SizingConfig, SizingError};
pub use solve::{NonPhysical, SolveError};

pub(crate) use sizing::size_for_target;
pub(crate) use solve::solve;
