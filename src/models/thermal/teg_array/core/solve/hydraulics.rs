use std::f64::consts::PI;

use uom::si::{
    f64::{Length, MassDensity, Pressure, Velocity},
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    ratio::ratio,
    velocity::meter_per_second,
};

use crate::{
    models::thermal::teg_array::core::{PressureDrops, SystemConfig},
    support::hx::friction::{friction_factor, pressure_drop},
};

use super::side::{Cell, Convection, Side};

/// Cold-loop pressure drop as a fraction of the hot loop's.
const COLD_SIDE_FRACTION: f64 = 0.9;

/// Loop pressure drops and the pump power needed to overcome them.
#[derive(Debug, Clone, Copy)]
pub(super) struct Hydraulics {
    pub(super) drops: PressureDrops,
    pub(super) hot_pump: f64,
    pub(super) cold_pump: f64,
}

/// Computes hot-loop pressure drops and both pump powers.
///
/// Each tower is its own loop: its manifold and supply pipe carry an equal
/// share of the hot flow, and the pump delivers the whole flow at one loop's
/// pressure drop.
pub(super) fn hydraulics(
    config: &SystemConfig,
    hot: &Side,
    cell: &Cell,
    hot_convection: &Convection,
    hot_flow: f64,
    cold_flow: f64,
) -> Hydraulics {
    let roughness = config.piping.roughness;
    let density = MassDensity::new::<kilogram_per_cubic_meter>(hot.density);

    let channel_dh = Length::new::<meter>(cell.hydraulic_diameter);
    let channel = pressure_drop(
        friction_factor(hot_convection.reynolds, roughness, channel_dh),
        config.geometry.channel_length,
        channel_dh,
        density,
        Velocity::new::<meter_per_second>(hot_convection.velocity),
    );

    let tower_flow = hot_flow / f64::from(config.layout.towers(config.module_count));

    let duct_drop = |diameter: Length, length: Length| -> Pressure {
        let d = diameter.get::<meter>();
        let area = PI * d * d / 4.0;
        let velocity = if area > 0.0 { tower_flow / area } else { 0.0 };
        let reynolds = hot.density * velocity * d / hot.viscosity;
        pressure_drop(
            friction_factor(reynolds, roughness, diameter),
            length,
            diameter,
            density,
            Velocity::new::<meter_per_second>(velocity),
        )
    };

    let manifold = duct_drop(
        config.geometry.manifold_diameter,
        config.layout.manifold_length_per_tower,
    );
    let pipe = duct_drop(config.piping.inner_diameter, config.piping.length);

    let drops = PressureDrops {
        hot_channel: channel,
        hot_manifold: manifold,
        hot_pipe: pipe,
        cold: COLD_SIDE_FRACTION * (channel + manifold + pipe),
    };

    let efficiency = config.pump_efficiency.into_inner().get::<ratio>();
    Hydraulics {
        hot_pump: drops.hot().get::<pascal>() * hot_flow / efficiency,
        cold_pump: drops.cold.get::<pascal>() * cold_flow / efficiency,
        drops,
    }
}
