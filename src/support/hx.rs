//! Liquid-channel heat exchanger support.
//!
//! Each module is clamped between two finned cold plates. Liquid flows through
//! a bank of parallel rectangular channels in each plate, and a thin thermal
//! interface material (TIM) layer bridges each plate to the module face.
//!
//! - [`HxGeometry`]: Channel, fin, manifold, and TIM dimensions with derived areas.
//! - [`convection`]: Nusselt number correlations across flow regimes.
//! - [`friction`]: Darcy friction factor and Darcy-Weisbach pressure drop.

pub mod convection;
pub mod friction;
mod geometry;

pub use convection::{FlowRegime, HeatFlowDirection, nusselt};
pub use friction::friction_factor;
pub use geometry::{GeometryError, HxGeometry, InterfaceMaterial};
