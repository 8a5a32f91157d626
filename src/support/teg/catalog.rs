use thiserror::Error;
use uom::si::{
    electrical_resistance::ohm,
    f64::{ElectricalResistance, Length, ThermodynamicTemperature},
    length::millimeter,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::units::{seebeck_volts_per_kelvin, thermal_resistance_k_per_w};

use super::ModuleSpec;

/// Error returned when a catalog key is not registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown module technology `{key}` (available: {available})")]
pub struct CatalogError {
    pub key: String,
    pub available: String,
}

/// A registry of module technologies keyed by short name.
///
/// The registry is an ordinary value: build one with [`Catalog::standard`] or
/// [`Catalog::new`] plus [`Catalog::insert`], and pass it to whatever needs to
/// resolve technology names.
///
/// ```
/// use teg_models::support::teg::Catalog;
///
/// let catalog = Catalog::standard();
/// let module = catalog.get("marlow").unwrap();
/// assert!(module.name.contains("TG1-1008"));
/// assert!(catalog.get("unobtainium").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<(String, ModuleSpec)>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog of the three reference technologies.
    ///
    /// - `marlow`: Bi₂Te₃ module rated to 200 °C.
    /// - `thermonamic`: PbTe module rated to 360 °C.
    /// - `alphabet`: Pb-enhanced module rated to 400 °C (estimated values).
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        catalog.insert("marlow", marlow_tg1_1008());
        catalog.insert("thermonamic", thermonamic_pb12611());
        catalog.insert("alphabet", alphabet_pb_enhanced());
        catalog
    }

    /// Registers `spec` under `key`, replacing any existing entry.
    pub fn insert(&mut self, key: impl Into<String>, spec: ModuleSpec) {
        let key = key.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = spec,
            None => self.entries.push((key, spec)),
        }
    }

    /// Returns the technology registered under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] listing the registered keys if `key` is unknown.
    pub fn get(&self, key: &str) -> Result<&ModuleSpec, CatalogError> {
        self.entries
            .iter()
            .find_map(|(existing, spec)| (existing == key).then_some(spec))
            .ok_or_else(|| CatalogError {
                key: key.to_string(),
                available: self.keys().collect::<Vec<_>>().join(", "),
            })
    }

    /// Returns the registered keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Returns the registered technologies in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ModuleSpec> {
        self.entries.iter().map(|(_, spec)| spec)
    }
}

fn square_module(side_mm: f64) -> (Length, Length) {
    (
        Length::new::<millimeter>(side_mm),
        Length::new::<millimeter>(side_mm),
    )
}

fn marlow_tg1_1008() -> ModuleSpec {
    let (width, height) = square_module(40.0);
    ModuleSpec {
        name: "Marlow TG1-1008 (BiTe)".to_string(),
        width,
        height,
        thermal_resistance: thermal_resistance_k_per_w(1.52),
        max_hot_side: ThermodynamicTemperature::new::<degree_celsius>(200.0),
        seebeck: seebeck_volts_per_kelvin(0.033),
        internal_resistance: ElectricalResistance::new::<ohm>(1.5),
        unit_price: 25.0,
        rated_life_years: 20.0,
    }
}

fn thermonamic_pb12611() -> ModuleSpec {
    let (width, height) = square_module(56.0);
    ModuleSpec {
        name: "Thermonamic TEG1-PB-12611 (PbTe)".to_string(),
        width,
        height,
        thermal_resistance: thermal_resistance_k_per_w(0.95),
        max_hot_side: ThermodynamicTemperature::new::<degree_celsius>(360.0),
        seebeck: seebeck_volts_per_kelvin(0.029),
        internal_resistance: ElectricalResistance::new::<ohm>(0.97),
        unit_price: 50.0,
        rated_life_years: 8.0,
    }
}

fn alphabet_pb_enhanced() -> ModuleSpec {
    let (width, height) = square_module(40.0);
    ModuleSpec {
        name: "Alphabet PowerCard Pb-enhanced (est.)".to_string(),
        width,
        height,
        thermal_resistance: thermal_resistance_k_per_w(1.10),
        max_hot_side: ThermodynamicTemperature::new::<degree_celsius>(400.0),
        seebeck: seebeck_volts_per_kelvin(0.035),
        internal_resistance: ElectricalResistance::new::<ohm>(1.2),
        unit_price: 65.0,
        rated_life_years: 10.0,
    }
}
