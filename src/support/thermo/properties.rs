use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{DynamicViscosity, MassDensity, SpecificHeatCapacity, ThermalConductivity},
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::constraint::{Constraint, StrictlyPositive};

use super::PropertyError;

/// Transport properties of a liquid at a single bulk temperature.
///
/// The Prandtl number is always derived from the stored properties rather
/// than stored alongside them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransportProperties {
    pub density: MassDensity,
    pub specific_heat: SpecificHeatCapacity,
    pub viscosity: DynamicViscosity,
    pub conductivity: ThermalConductivity,
}

impl TransportProperties {
    /// Creates properties from SI values (kg/m³, J/kg·K, Pa·s, W/m·K).
    #[must_use]
    pub fn from_si(density: f64, specific_heat: f64, viscosity: f64, conductivity: f64) -> Self {
        Self {
            density: MassDensity::new::<kilogram_per_cubic_meter>(density),
            specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(specific_heat),
            viscosity: DynamicViscosity::new::<pascal_second>(viscosity),
            conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(conductivity),
        }
    }

    /// Returns the Prandtl number, `cp·μ/k`.
    #[must_use]
    pub fn prandtl(&self) -> f64 {
        self.specific_heat.get::<joule_per_kilogram_kelvin>() * self.viscosity.get::<pascal_second>()
            / self.conductivity.get::<watt_per_meter_kelvin>()
    }

    /// Checks that every property is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidState`] naming the first offending property.
    pub fn validate(&self) -> Result<(), PropertyError> {
        let checks = [
            ("density", StrictlyPositive::check(&self.density)),
            ("specific heat", StrictlyPositive::check(&self.specific_heat)),
            ("viscosity", StrictlyPositive::check(&self.viscosity)),
            ("conductivity", StrictlyPositive::check(&self.conductivity)),
        ];

        for (name, check) in checks {
            if let Err(error) = check {
                return Err(PropertyError::InvalidState {
                    context: format!("{name}: {error}"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn prandtl_from_properties() {
        let props = TransportProperties::from_si(1040.0, 3400.0, 0.0008, 0.40);
        assert_relative_eq!(props.prandtl(), 6.8, epsilon = 1e-12);
    }

    #[test]
    fn validate_rejects_non_positive_values() {
        let props = TransportProperties::from_si(1040.0, 3400.0, 0.0, 0.40);
        let error = props.validate().unwrap_err();
        assert!(
            matches!(&error, PropertyError::InvalidState { context } if context.starts_with("viscosity"))
        );

        assert!(
            TransportProperties::from_si(1040.0, 3400.0, 0.0008, 0.40)
                .validate()
                .is_ok()
        );
    }
}
