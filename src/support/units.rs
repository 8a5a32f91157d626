//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., temperature, pressure, power).
//! This module provides extensions that are useful for modeling but aren't included in [`uom`].
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait provides a [`minus`](TemperatureDifference::minus) method
//! for subtracting one absolute temperature from another to get a temperature interval:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::degree_celsius;
//! use teg_models::support::units::TemperatureDifference;
//!
//! let hot_face = ThermodynamicTemperature::new::<degree_celsius>(170.0);
//! let cold_face = ThermodynamicTemperature::new::<degree_celsius>(55.0);
//! let delta_t = hot_face.minus(cold_face);
//! // delta_t is a TemperatureInterval, not a ThermodynamicTemperature
//! ```
//!
//! ## Thermoelectric quantities
//!
//! Thermal resistance (K/W) and the Seebeck coefficient (V/K) have no named
//! quantity in [`uom`], so they are defined here along with constructors.

mod quantities;
mod temperature_difference;

pub use quantities::{
    SeebeckCoefficient, ThermalResistance, seebeck_volts_per_kelvin, thermal_resistance_k_per_w,
};
pub use temperature_difference::TemperatureDifference;
