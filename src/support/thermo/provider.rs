use std::fmt;

use tracing::warn;
use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::kilopascal,
    thermodynamic_temperature::degree_celsius,
};

use super::{
    FluidKind, PropertyError, TransportProperties,
    fluid::{aqueous_glycol, thermal_oil},
};

/// Loop pressure at which backend properties are evaluated, kPa.
const REFERENCE_PRESSURE_KPA: f64 = 200.0;

/// A high-fidelity source of liquid transport properties.
///
/// Backends are optional. When none is configured, or when a backend call
/// fails, [`FluidProperties`] falls back to reference values instead of
/// surfacing the error.
pub trait PropertyBackend: Send + Sync {
    /// Returns the properties of `fluid` at the given temperature and pressure.
    ///
    /// # Errors
    ///
    /// Returns a [`PropertyError`] if the backend cannot evaluate the state.
    fn properties(
        &self,
        fluid: FluidKind,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> Result<TransportProperties, PropertyError>;
}

/// The outcome of a property lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    /// Properties evaluated at the requested state.
    Available(TransportProperties),

    /// Reference properties used in place of a failed or missing backend.
    Fallback {
        properties: TransportProperties,
        reason: PropertyError,
    },
}

impl Lookup {
    /// Returns the resolved properties, whichever path produced them.
    #[must_use]
    pub fn properties(&self) -> &TransportProperties {
        match self {
            Self::Available(properties) | Self::Fallback { properties, .. } => properties,
        }
    }

    /// Returns `true` if reference properties were substituted.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// Resolves transport properties for the supported loop fluids.
///
/// Thermal oil always uses its closed-form fits. Aqueous glycol is evaluated
/// by the configured backend when one is present.
///
/// # Example
///
/// ```
/// use teg_models::support::thermo::{FluidKind, FluidProperties};
/// use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_celsius};
///
/// let provider = FluidProperties::new();
/// let lookup = provider.lookup(
///     FluidKind::AqueousGlycol,
///     ThermodynamicTemperature::new::<degree_celsius>(45.0),
/// );
/// assert!(lookup.is_fallback());
/// ```
pub struct FluidProperties {
    backend: Option<Box<dyn PropertyBackend>>,
    pressure: Pressure,
}

impl FluidProperties {
    /// Creates a provider without a backend.
    #[must_use]
    pub fn new() -> Self {
        Self {
            backend: None,
            pressure: Pressure::new::<kilopascal>(REFERENCE_PRESSURE_KPA),
        }
    }

    /// Creates a provider that consults `backend` for aqueous glycol.
    #[must_use]
    pub fn with_backend(backend: impl PropertyBackend + 'static) -> Self {
        Self {
            backend: Some(Box::new(backend)),
            ..Self::new()
        }
    }

    /// Creates a provider backed by CoolProp's incompressible glycol mixture.
    ///
    /// # Errors
    ///
    /// Returns a [`CoolPropError`](super::coolprop::CoolPropError) if the
    /// CoolProp state cannot be created.
    #[cfg(feature = "coolprop")]
    pub fn with_coolprop() -> Result<Self, super::coolprop::CoolPropError> {
        Ok(Self::with_backend(super::coolprop::CoolPropBackend::new()?))
    }

    /// Returns `true` if a backend is configured.
    #[must_use]
    pub fn has_backend(&self) -> bool {
        self.backend.is_some()
    }

    /// Resolves the properties of `fluid` at `temperature`.
    pub fn lookup(&self, fluid: FluidKind, temperature: ThermodynamicTemperature) -> Lookup {
        match fluid {
            FluidKind::ThermalOil => Lookup::Available(thermal_oil::properties(temperature)),
            FluidKind::AqueousGlycol => {
                let Some(backend) = self.backend.as_deref() else {
                    return fallback(
                        fluid,
                        temperature,
                        PropertyError::BackendUnavailable {
                            context: "no property backend configured".to_string(),
                        },
                    );
                };

                let evaluated = backend
                    .properties(fluid, temperature, self.pressure)
                    .and_then(|properties| properties.validate().map(|()| properties));

                match evaluated {
                    Ok(properties) => Lookup::Available(properties),
                    Err(reason) => fallback(fluid, temperature, reason),
                }
            }
        }
    }
}

impl Default for FluidProperties {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FluidProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FluidProperties")
            .field("has_backend", &self.has_backend())
            .field("pressure", &self.pressure)
            .finish()
    }
}

fn fallback(fluid: FluidKind, temperature: ThermodynamicTemperature, reason: PropertyError) -> Lookup {
    warn!(
        fluid = fluid.id(),
        temperature_c = temperature.get::<degree_celsius>(),
        %reason,
        "using reference fluid properties"
    );
    Lookup::Fallback {
        properties: aqueous_glycol::reference_properties(),
        reason,
    }
}
