use thiserror::Error;
use uom::si::f64::{ElectricalResistance, Length, ThermodynamicTemperature};

use crate::support::{
    constraint::{Constraint, ConstraintError, StrictlyPositive},
    units::{SeebeckCoefficient, ThermalResistance},
};

/// Datasheet values for one thermoelectric module technology.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleSpec {
    pub name: String,
    pub width: Length,
    pub height: Length,
    /// Face-to-face thermal resistance.
    pub thermal_resistance: ThermalResistance,
    /// Maximum continuous hot-face temperature.
    pub max_hot_side: ThermodynamicTemperature,
    /// Open-circuit voltage per kelvin of face temperature difference.
    pub seebeck: SeebeckCoefficient,
    pub internal_resistance: ElectricalResistance,
    /// Unit price at volume, USD.
    pub unit_price: f64,
    /// Rated life at the maximum hot-face temperature, years.
    pub rated_life_years: f64,
}

/// An invalid [`ModuleSpec`] field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ModuleSpecError {
    #[error("thermal resistance: {0}")]
    ThermalResistance(ConstraintError),
    #[error("internal resistance: {0}")]
    InternalResistance(ConstraintError),
    #[error("face dimensions: {0}")]
    Dimensions(ConstraintError),
}

impl ModuleSpec {
    /// Checks the invariants the electrical and thermal models rely on.
    ///
    /// # Errors
    ///
    /// Returns a [`ModuleSpecError`] if either resistance or a face dimension
    /// is not strictly positive.
    pub fn validate(&self) -> Result<(), ModuleSpecError> {
        StrictlyPositive::check(&self.thermal_resistance)
            .map_err(ModuleSpecError::ThermalResistance)?;
        StrictlyPositive::check(&self.internal_resistance)
            .map_err(ModuleSpecError::InternalResistance)?;
        StrictlyPositive::check(&self.width)
            .and(StrictlyPositive::check(&self.height))
            .map_err(ModuleSpecError::Dimensions)
    }
}
