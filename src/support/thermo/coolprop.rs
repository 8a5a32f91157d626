//! CoolProp-backed glycol properties.

mod error;

use std::sync::Mutex;

use rfluids::{
    io::{FluidInputPair, FluidParam},
    native::AbstractState,
};
use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

use super::{FluidKind, PropertyBackend, PropertyError, TransportProperties};

pub use error::CoolPropError;

/// CoolProp backend name for incompressible liquids.
const BACKEND: &str = "INCOMP";

/// CoolProp name for a 50 % by mass mono-ethylene glycol solution.
const GLYCOL_MIXTURE: &str = "MEG-50%";

/// A [`PropertyBackend`] that evaluates aqueous glycol with CoolProp.
pub struct CoolPropBackend {
    state: Mutex<AbstractState>,
}

impl CoolPropBackend {
    /// Creates the CoolProp state for the glycol mixture.
    ///
    /// # Errors
    ///
    /// Returns [`CoolPropError`] if CoolProp rejects the backend or fluid name.
    pub fn new() -> Result<Self, CoolPropError> {
        let state = AbstractState::new(BACKEND, GLYCOL_MIXTURE)?;
        Ok(Self {
            state: Mutex::new(state),
        })
    }

    fn evaluate(
        &self,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> Result<TransportProperties, CoolPropError> {
        let mut state = self.state.lock()?;
        state.update(
            FluidInputPair::PT,
            pressure.get::<pascal>(),
            temperature.get::<kelvin>(),
        )?;

        Ok(TransportProperties::from_si(
            state.keyed_output(FluidParam::DMass)?,
            state.keyed_output(FluidParam::CpMass)?,
            state.keyed_output(FluidParam::DynamicViscosity)?,
            state.keyed_output(FluidParam::Conductivity)?,
        ))
    }
}

impl PropertyBackend for CoolPropBackend {
    fn properties(
        &self,
        fluid: FluidKind,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> Result<TransportProperties, PropertyError> {
        match fluid {
            FluidKind::AqueousGlycol => Ok(self.evaluate(temperature, pressure)?),
            FluidKind::ThermalOil => Err(PropertyError::Undefined {
                context: format!("{fluid} is not available from CoolProp"),
            }),
        }
    }
}
