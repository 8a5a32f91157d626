use uom::si::{
    electric_current::ampere,
    electric_potential::volt,
    electrical_resistance::ohm,
    f64::{ElectricCurrent, ElectricPotential, Power, Ratio, TemperatureInterval},
    power::watt,
    ratio::ratio,
    temperature_interval::kelvin,
};

use super::ModuleSpec;

/// Module output when loaded at its maximum power point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    pub open_circuit_voltage: ElectricPotential,
    pub voltage: ElectricPotential,
    pub current: ElectricCurrent,
    pub power: Power,
    /// Heat conducted through the module, hot face to cold face.
    pub heat_flow: Power,
    /// Electrical power over heat flow; zero when no heat flows.
    pub efficiency: Ratio,
}

/// Returns the maximum-power-point output of `module` for a face difference `delta_t`.
///
/// The load is matched to the internal resistance, so the terminal voltage is
/// half the open-circuit voltage `S·ΔT`. Heat flow is `ΔT / R_th`.
#[must_use]
pub fn operating_point(module: &ModuleSpec, delta_t: TemperatureInterval) -> OperatingPoint {
    let dt = delta_t.get::<kelvin>();
    let open_circuit = module.seebeck.value * dt;
    let voltage = open_circuit / 2.0;
    let current = open_circuit / (2.0 * module.internal_resistance.get::<ohm>());
    let power = voltage * current;
    let heat_flow = dt / module.thermal_resistance.value;
    let efficiency = if heat_flow == 0.0 {
        0.0
    } else {
        power / heat_flow
    };

    OperatingPoint {
        open_circuit_voltage: ElectricPotential::new::<volt>(open_circuit),
        voltage: ElectricPotential::new::<volt>(voltage),
        current: ElectricCurrent::new::<ampere>(current),
        power: Power::new::<watt>(power),
        heat_flow: Power::new::<watt>(heat_flow),
        efficiency: Ratio::new::<ratio>(efficiency),
    }
}
