//! Darcy friction factor and Darcy-Weisbach pressure drop.

use uom::si::{
    f64::{Length, MassDensity, Pressure, Velocity},
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    velocity::meter_per_second,
};

use super::convection::LAMINAR_LIMIT;

/// Starting guess for the Colebrook-White iteration.
const INITIAL_GUESS: f64 = 0.02;

/// Iteration cap for the Colebrook-White iteration.
const MAX_ITERATIONS: usize = 20;

/// Absolute change in `f` below which the iteration stops.
const TOLERANCE: f64 = 1e-8;

/// Returns the Darcy friction factor for flow in a duct.
///
/// Laminar flow uses `64 / Re`, with `Re` floored at 1 so stagnant flow stays
/// finite. Otherwise the Colebrook-White equation is solved by fixed-point
/// iteration from `f = 0.02`. The iteration always terminates: if it has not
/// settled within 20 steps, the latest estimate is returned.
#[must_use]
pub fn friction_factor(reynolds: f64, roughness: Length, hydraulic_diameter: Length) -> f64 {
    if reynolds < LAMINAR_LIMIT {
        return 64.0 / reynolds.max(1.0);
    }

    let relative_roughness = roughness.get::<meter>() / hydraulic_diameter.get::<meter>();

    let mut f = INITIAL_GUESS;
    for _ in 0..MAX_ITERATIONS {
        let rhs = -2.0 * (relative_roughness / 3.7 + 2.51 / (reynolds * f.sqrt())).log10();
        let next = rhs.powi(-2);
        if (next - f).abs() < TOLERANCE {
            return next;
        }
        f = next;
    }
    f
}

/// Returns the Darcy-Weisbach pressure drop `f·(L/D)·½ρv²`.
#[must_use]
pub fn pressure_drop(
    friction_factor: f64,
    length: Length,
    hydraulic_diameter: Length,
    density: MassDensity,
    velocity: Velocity,
) -> Pressure {
    let v = velocity.get::<meter_per_second>();
    Pressure::new::<pascal>(
        friction_factor * (length.get::<meter>() / hydraulic_diameter.get::<meter>())
            * 0.5
            * density.get::<kilogram_per_cubic_meter>()
            * v
            * v,
    )
}
