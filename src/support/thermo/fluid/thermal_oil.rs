//! Closed-form property fits for a Therminol VP-1 class thermal oil.
//!
//! The fits follow the manufacturer's bulletin and are valid from 12 °C to
//! 400 °C. Outside that range they are still evaluated, with a warning; the
//! density fit turns negative near 1270 °C. No external backend is consulted
//! for this fluid.

use tracing::warn;
use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_celsius};

use crate::support::thermo::TransportProperties;

/// Lower bound applied to the viscosity fit, Pa·s.
const MIN_VISCOSITY: f64 = 0.0002;

/// Lower bound applied to the conductivity fit, W/m·K.
const MIN_CONDUCTIVITY: f64 = 0.08;

/// Viscosity used at or below 20 °C, where the exponential fit is not valid.
const COLD_VISCOSITY: f64 = 0.004;

/// Lowest temperature the fits were made for, °C.
pub const MIN_FIT_C: f64 = 12.0;

/// Highest temperature the fits were made for, °C.
pub const MAX_FIT_C: f64 = 400.0;

/// Whether `temperature` lies within the range the fits were made for.
#[must_use]
pub fn in_fit_range(temperature: ThermodynamicTemperature) -> bool {
    (MIN_FIT_C..=MAX_FIT_C).contains(&temperature.get::<degree_celsius>())
}

/// Returns the oil's transport properties at `temperature`.
#[must_use]
pub fn properties(temperature: ThermodynamicTemperature) -> TransportProperties {
    let t = temperature.get::<degree_celsius>();
    if !in_fit_range(temperature) {
        warn!(
            temperature_c = t,
            min_c = MIN_FIT_C,
            max_c = MAX_FIT_C,
            "thermal oil fit used outside its range"
        );
    }

    let density = 1078.0 - 0.85 * t;
    let specific_heat = 1510.0 + 2.5 * t;
    let viscosity = if t > 20.0 {
        0.001 * (5.25 - 0.02 * t).exp()
    } else {
        COLD_VISCOSITY
    }
    .max(MIN_VISCOSITY);
    let conductivity = (0.137 - 0.000_05 * t).max(MIN_CONDUCTIVITY);

    TransportProperties::from_si(density, specific_heat, viscosity, conductivity)
}
