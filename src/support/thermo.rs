//! Working fluids and their transport properties.
//!
//! The array models need four properties of each loop fluid at its bulk
//! temperature: density, specific heat, dynamic viscosity, and thermal
//! conductivity. [`FluidProperties`] resolves them for a [`FluidKind`],
//! consulting an optional high-fidelity [`PropertyBackend`] and reporting
//! through [`Lookup`] whether the answer came from the backend or from the
//! built-in reference values.

mod error;
mod properties;
mod provider;

pub mod fluid;

#[cfg(feature = "coolprop")]
pub mod coolprop;

pub use error::PropertyError;
pub use fluid::FluidKind;
pub use properties::TransportProperties;
pub use provider::{FluidProperties, Lookup, PropertyBackend};
