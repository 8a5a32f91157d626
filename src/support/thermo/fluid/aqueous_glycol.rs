//! 50/50 water and mono-ethylene glycol.

use crate::support::thermo::TransportProperties;

/// Reference density, kg/m³.
pub const REFERENCE_DENSITY: f64 = 1040.0;

/// Reference specific heat, J/kg·K.
pub const REFERENCE_SPECIFIC_HEAT: f64 = 3400.0;

/// Reference dynamic viscosity, Pa·s.
pub const REFERENCE_VISCOSITY: f64 = 0.0008;

/// Reference thermal conductivity, W/m·K.
pub const REFERENCE_CONDUCTIVITY: f64 = 0.40;

/// Returns the reference property set, representative of an ~80 °C bulk.
///
/// Used whenever a high-fidelity backend is not configured or cannot answer.
#[must_use]
pub fn reference_properties() -> TransportProperties {
    TransportProperties::from_si(
        REFERENCE_DENSITY,
        REFERENCE_SPECIFIC_HEAT,
        REFERENCE_VISCOSITY,
        REFERENCE_CONDUCTIVITY,
    )
}
