//! Supported loop fluids.
//!
//! Two families are modeled: a 50/50 water and mono-ethylene glycol mixture
//! for low-temperature loops, and a synthetic thermal oil for hot loops that
//! would boil an aqueous mixture.

pub mod aqueous_glycol;
pub mod thermal_oil;

use std::{fmt, str::FromStr};

use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_celsius};

use super::PropertyError;

/// Hot inlet temperature above which a hot loop switches to thermal oil, °C.
const THERMAL_OIL_ABOVE_C: f64 = 220.0;

/// Identifies a loop fluid.
///
/// Parse from the names accepted on the command line:
///
/// ```
/// use teg_models::support::thermo::FluidKind;
///
/// assert_eq!("glycol".parse::<FluidKind>().unwrap(), FluidKind::AqueousGlycol);
/// assert_eq!("vp1".parse::<FluidKind>().unwrap(), FluidKind::ThermalOil);
/// assert!("mercury".parse::<FluidKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FluidKind {
    /// 50/50 water and mono-ethylene glycol.
    #[default]
    AqueousGlycol,
    /// Synthetic heat-transfer oil (Therminol VP-1 class).
    ThermalOil,
}

impl FluidKind {
    /// Picks the hot-loop fluid suited to a hot inlet temperature.
    ///
    /// Aqueous glycol is used up to 220 °C and thermal oil above it.
    #[must_use]
    pub fn for_hot_inlet(hot_inlet: ThermodynamicTemperature) -> Self {
        if hot_inlet.get::<degree_celsius>() > THERMAL_OIL_ABOVE_C {
            Self::ThermalOil
        } else {
            Self::AqueousGlycol
        }
    }

    /// Returns the canonical identifier for this fluid.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::AqueousGlycol => "water_glycol",
            Self::ThermalOil => "therminol",
        }
    }
}

impl fmt::Display for FluidKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AqueousGlycol => f.write_str("Water/Glycol 50/50"),
            Self::ThermalOil => f.write_str("Therminol VP-1"),
        }
    }
}

impl FromStr for FluidKind {
    type Err = PropertyError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "water_glycol" | "glycol" | "water" => Ok(Self::AqueousGlycol),
            "therminol" | "thermal_oil" | "vp1" => Ok(Self::ThermalOil),
            _ => Err(PropertyError::UnknownFluidKind {
                name: name.to_string(),
            }),
        }
    }
}
