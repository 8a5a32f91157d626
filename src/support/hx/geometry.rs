use thiserror::Error;
use uom::si::{
    area::square_meter,
    f64::{Area, Length, ThermalConductivity},
    length::{meter, millimeter},
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::{
    constraint::{Constraint, ConstraintError, NonNegative, StrictlyPositive},
    units::{ThermalResistance, thermal_resistance_k_per_w},
};

/// A thermal interface layer between a module face and a cold plate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterfaceMaterial {
    pub conductivity: ThermalConductivity,
    pub thickness: Length,
}

impl InterfaceMaterial {
    /// Returns the conduction resistance of the layer across `contact_area`.
    #[must_use]
    pub fn resistance(&self, contact_area: Area) -> ThermalResistance {
        thermal_resistance_k_per_w(
            self.thickness.get::<meter>()
                / (self.conductivity.get::<watt_per_meter_kelvin>()
                    * contact_area.get::<square_meter>()),
        )
    }
}

/// Heat exchanger geometry for a single module cell.
///
/// The same geometry is used for the hot and cold plates. Only the stored
/// dimensions are fields; areas and the hydraulic diameter are derived on
/// each call so they can never disagree with the dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HxGeometry {
    /// Parallel channels per plate.
    pub channels: u32,
    pub channel_width: Length,
    pub channel_height: Length,
    /// Flow path length through the plate.
    pub channel_length: Length,
    pub fin_count: u32,
    pub fin_thickness: Length,
    pub fin_conductivity: ThermalConductivity,
    /// Inner diameter of the supply and return manifolds.
    pub manifold_diameter: Length,
    pub hot_tim: InterfaceMaterial,
    pub cold_tim: InterfaceMaterial,
}

/// An invalid [`HxGeometry`] field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field}: {source}")]
pub struct GeometryError {
    pub field: &'static str,
    pub source: ConstraintError,
}

impl HxGeometry {
    /// Returns the hydraulic diameter of one channel, `4·A / P`.
    #[must_use]
    pub fn hydraulic_diameter(&self) -> Length {
        let perimeter = 2.0 * (self.channel_width + self.channel_height);
        4.0 * self.channel_area() / perimeter
    }

    /// Returns the flow area of one channel.
    #[must_use]
    pub fn channel_area(&self) -> Area {
        self.channel_width * self.channel_height
    }

    /// Returns the combined flow area of all channels in one plate.
    #[must_use]
    pub fn flow_area(&self) -> Area {
        f64::from(self.channels) * self.channel_area()
    }

    /// Returns the module contact area: channels plus fins across the flow length.
    #[must_use]
    pub fn contact_area(&self) -> Area {
        self.channel_length
            * (f64::from(self.channels) * self.channel_width
                + f64::from(self.fin_count) * self.fin_thickness)
    }

    /// Returns the wetted area of one channel.
    #[must_use]
    pub fn wetted_area_per_channel(&self) -> Area {
        2.0 * (self.channel_width + self.channel_height) * self.channel_length
    }

    /// Returns the wetted area of all channels in one plate.
    #[must_use]
    pub fn wetted_area(&self) -> Area {
        f64::from(self.channels) * self.wetted_area_per_channel()
    }

    /// Checks that every dimension describes a buildable plate.
    ///
    /// Fins are optional, so a zero fin count or thickness is accepted.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] naming the first invalid field.
    pub fn validate(&self) -> Result<(), GeometryError> {
        let checks = [
            ("channels", StrictlyPositive::check(&self.channels)),
            ("channel_width", StrictlyPositive::check(&self.channel_width)),
            ("channel_height", StrictlyPositive::check(&self.channel_height)),
            ("channel_length", StrictlyPositive::check(&self.channel_length)),
            ("fin_thickness", NonNegative::check(&self.fin_thickness)),
            ("fin_conductivity", StrictlyPositive::check(&self.fin_conductivity)),
            ("manifold_diameter", StrictlyPositive::check(&self.manifold_diameter)),
            ("hot_tim.conductivity", StrictlyPositive::check(&self.hot_tim.conductivity)),
            ("hot_tim.thickness", StrictlyPositive::check(&self.hot_tim.thickness)),
            ("cold_tim.conductivity", StrictlyPositive::check(&self.cold_tim.conductivity)),
            ("cold_tim.thickness", StrictlyPositive::check(&self.cold_tim.thickness)),
        ];

        checks
            .into_iter()
            .try_for_each(|(field, check)| check.map_err(|source| GeometryError { field, source }))
    }
}

impl Default for HxGeometry {
    /// Nine 3 mm × 40 mm copper channels on a 40 mm module.
    fn default() -> Self {
        let mm = |value| Length::new::<millimeter>(value);
        let k = |value| ThermalConductivity::new::<watt_per_meter_kelvin>(value);

        Self {
            channels: 9,
            channel_width: mm(3.0),
            channel_height: mm(40.0),
            channel_length: mm(40.0),
            fin_count: 10,
            fin_thickness: mm(1.0),
            fin_conductivity: k(385.0),
            manifold_diameter: mm(38.0),
            hot_tim: InterfaceMaterial {
                conductivity: k(7.5),
                thickness: mm(0.375),
            },
            cold_tim: InterfaceMaterial {
                conductivity: k(4.5),
                thickness: mm(0.5),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn derived_areas() {
        let geometry = HxGeometry::default();

        assert_relative_eq!(
            geometry.hydraulic_diameter().get::<meter>(),
            4.0 * 0.003 * 0.040 / (2.0 * 0.043),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            geometry.channel_area().get::<square_meter>(),
            1.2e-4,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            geometry.flow_area().get::<square_meter>(),
            1.08e-3,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            geometry.contact_area().get::<square_meter>(),
            0.040 * (9.0 * 0.003 + 10.0 * 0.001),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            geometry.wetted_area().get::<square_meter>(),
            9.0 * 2.0 * 0.043 * 0.040,
            max_relative = 1e-12
        );
    }

    #[test]
    fn derived_values_follow_edits() {
        let mut geometry = HxGeometry::default();
        geometry.channels = 12;

        assert_relative_eq!(
            geometry.flow_area().get::<square_meter>(),
            12.0 * 1.2e-4,
            max_relative = 1e-12
        );
    }

    #[test]
    fn tim_resistance() {
        let geometry = HxGeometry::default();
        let area = geometry.contact_area();

        assert_relative_eq!(
            geometry.hot_tim.resistance(area).value,
            0.000_375 / (7.5 * 0.040 * 0.037),
            max_relative = 1e-12
        );
    }

    #[test]
    fn validation_names_the_field() {
        let mut geometry = HxGeometry::default();
        assert!(geometry.validate().is_ok());

        geometry.cold_tim.thickness = Length::new::<meter>(0.0);
        assert_eq!(
            geometry.validate(),
            Err(GeometryError {
                field: "cold_tim.thickness",
                source: ConstraintError::Zero,
            })
        );

        geometry = HxGeometry::default();
        geometry.channels = 0;
        assert_eq!(
            geometry.validate().map_err(|error| error.field),
            Err("channels")
        );
    }
}
