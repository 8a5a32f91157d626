use uom::{
    si::{
        ISQ, Quantity, SI,
        electric_potential::volt,
        f64::{ElectricPotential, Power, TemperatureInterval},
        power::watt,
        temperature_interval::kelvin,
    },
    typenum::{N1, N2, N3, P1, P2, P3, Z0},
};

/// Thermal resistance, K/W in SI.
pub type ThermalResistance = Quantity<ISQ<N2, N1, P3, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Seebeck coefficient (open-circuit voltage per kelvin), V/K in SI.
pub type SeebeckCoefficient = Quantity<ISQ<P2, P1, N3, N1, N1, Z0, Z0>, SI<f64>, f64>;

/// Creates a [`ThermalResistance`] from a value in kelvin per watt.
#[must_use]
pub fn thermal_resistance_k_per_w(value: f64) -> ThermalResistance {
    TemperatureInterval::new::<kelvin>(value) / Power::new::<watt>(1.0)
}

/// Creates a [`SeebeckCoefficient`] from a value in volts per kelvin.
#[must_use]
pub fn seebeck_volts_per_kelvin(value: f64) -> SeebeckCoefficient {
    ElectricPotential::new::<volt>(value) / TemperatureInterval::new::<kelvin>(1.0)
}
