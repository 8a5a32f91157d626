use uom::si::{
    area::square_meter,
    dynamic_viscosity::pascal_second,
    f64::{HeatTransfer, ThermodynamicTemperature, Velocity, VolumeRate},
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    velocity::meter_per_second,
    volume_rate::cubic_meter_per_second,
};

use crate::{
    models::thermal::teg_array::core::SideFlow,
    support::{
        hx::{FlowRegime, HeatFlowDirection, HxGeometry, nusselt},
        thermo::{FluidKind, FluidProperties, Lookup},
    },
};

/// Resistance used when a convective coefficient is not positive, K/W.
const DEGENERATE_RESISTANCE: f64 = 999.0;

/// Channel dimensions of one module cell, in SI units.
#[derive(Debug, Clone, Copy)]
pub(super) struct Cell {
    pub(super) flow_area: f64,
    pub(super) hydraulic_diameter: f64,
    pub(super) wetted_area: f64,
}

impl From<&HxGeometry> for Cell {
    fn from(geometry: &HxGeometry) -> Self {
        Self {
            flow_area: geometry.flow_area().get::<square_meter>(),
            hydraulic_diameter: geometry.hydraulic_diameter().get::<meter>(),
            wetted_area: geometry.wetted_area().get::<square_meter>(),
        }
    }
}

/// Channel convection on one side at a given flow.
#[derive(Debug, Clone, Copy)]
pub(super) struct Convection {
    pub(super) velocity: f64,
    pub(super) reynolds: f64,
    pub(super) nusselt: f64,
    pub(super) coefficient: f64,
    /// Convective resistance of one module's plate, K/W.
    pub(super) resistance: f64,
}

/// One fluid loop with its properties fixed at the bulk temperature.
#[derive(Debug, Clone)]
pub(super) struct Side {
    kind: FluidKind,
    lookup: Lookup,
    direction: HeatFlowDirection,
    pub(super) density: f64,
    pub(super) viscosity: f64,
    specific_heat: f64,
    conductivity: f64,
    prandtl: f64,
}

impl Side {
    pub(super) fn resolve(
        kind: FluidKind,
        bulk: ThermodynamicTemperature,
        direction: HeatFlowDirection,
        properties: &FluidProperties,
    ) -> Self {
        let lookup = properties.lookup(kind, bulk);
        let props = *lookup.properties();

        Self {
            kind,
            direction,
            density: props.density.get::<kilogram_per_cubic_meter>(),
            viscosity: props.viscosity.get::<pascal_second>(),
            specific_heat: props.specific_heat.get::<joule_per_kilogram_kelvin>(),
            conductivity: props.conductivity.get::<watt_per_meter_kelvin>(),
            prandtl: props.prandtl(),
            lookup,
        }
    }

    /// Volume flow that carries `heat` watts with a `rise` kelvin change.
    pub(super) fn volume_flow(&self, heat: f64, rise: f64) -> f64 {
        heat / (self.density * self.specific_heat * rise)
    }

    /// Convection in one module's channels carrying `flow` m³/s.
    pub(super) fn convection(&self, flow: f64, cell: &Cell) -> Convection {
        let velocity = flow / cell.flow_area;
        let reynolds = self.density * velocity * cell.hydraulic_diameter / self.viscosity;
        let nusselt = nusselt(reynolds, self.prandtl, self.direction);
        let coefficient = nusselt * self.conductivity / cell.hydraulic_diameter;
        let resistance = if coefficient > 0.0 {
            1.0 / (coefficient * cell.wetted_area)
        } else {
            DEGENERATE_RESISTANCE
        };

        Convection {
            velocity,
            reynolds,
            nusselt,
            coefficient,
            resistance,
        }
    }

    /// Packages the side for the result given its final flow and convection.
    pub(super) fn flow(&self, volume_flow: f64, convection: &Convection) -> SideFlow {
        SideFlow {
            fluid: self.kind,
            properties: *self.lookup.properties(),
            fallback: self.lookup.is_fallback(),
            volume_flow: VolumeRate::new::<cubic_meter_per_second>(volume_flow),
            channel_velocity: Velocity::new::<meter_per_second>(convection.velocity),
            reynolds: convection.reynolds,
            regime: FlowRegime::from_reynolds(convection.reynolds),
            nusselt: convection.nusselt,
            heat_transfer_coefficient: HeatTransfer::new::<watt_per_square_meter_kelvin>(
                convection.coefficient,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::degree_celsius;

    fn glycol_side(direction: HeatFlowDirection) -> Side {
        Side::resolve(
            FluidKind::AqueousGlycol,
            ThermodynamicTemperature::new::<degree_celsius>(45.0),
            direction,
            &FluidProperties::new(),
        )
    }

    #[test]
    fn volume_flow_carries_heat() {
        let side = glycol_side(HeatFlowDirection::Heating);
        let flow = side.volume_flow(35_360.0, 10.0);
        assert_relative_eq!(flow, 35_360.0 / (1040.0 * 3400.0 * 10.0), max_relative = 1e-12);
    }

    #[test]
    fn laminar_cell_convection() {
        let side = glycol_side(HeatFlowDirection::Cooling);
        let cell = Cell::from(&HxGeometry::default());

        let convection = side.convection(1e-6, &cell);

        let dh = 4.0 * 0.003 * 0.040 / (2.0 * 0.043);
        let velocity = 1e-6 / 1.08e-3;
        assert_relative_eq!(convection.velocity, velocity, max_relative = 1e-12);
        assert_relative_eq!(
            convection.reynolds,
            1040.0 * velocity * dh / 0.0008,
            max_relative = 1e-12
        );
        assert_relative_eq!(convection.nusselt, 3.66);
        assert_relative_eq!(
            convection.resistance,
            1.0 / (3.66 * 0.40 / dh * cell.wetted_area),
            max_relative = 1e-12
        );
    }

    #[test]
    fn flow_reports_fallback() {
        let side = glycol_side(HeatFlowDirection::Heating);
        let cell = Cell::from(&HxGeometry::default());
        let convection = side.convection(1e-5, &cell);

        let flow = side.flow(1e-5, &convection);

        assert!(flow.fallback);
        assert_eq!(flow.fluid, FluidKind::AqueousGlycol);
        assert_eq!(flow.regime, FlowRegime::Laminar);
    }
}
