//! Supporting utilities used by models.
//!
//! - [`constraint`]: Type-level numeric invariants.
//! - [`hx`]: Channel geometry, convection and friction correlations.
//! - [`teg`]: Thermoelectric module data and electrical behavior.
//! - [`thermo`]: Working fluids and their transport properties.
//! - [`units`]: Extensions to [`uom`].

pub mod constraint;
pub mod hx;
pub mod teg;
pub mod thermo;
pub mod units;
