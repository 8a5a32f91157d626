use uom::si::{
    f64::{
        HeatTransfer, Power, Pressure, Ratio, TemperatureInterval, ThermodynamicTemperature,
        Velocity, VolumeRate,
    },
    ratio::ratio,
};

use crate::support::{
    hx::FlowRegime,
    teg::OperatingPoint,
    thermo::{FluidKind, TransportProperties},
    units::ThermalResistance,
};

/// A solved array operating point.
///
/// Per-module values describe one representative module; array totals scale
/// them by the module count.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelResult {
    pub module_count: u32,
    /// Temperature difference across the module faces.
    pub module_delta_t: TemperatureInterval,
    /// Heat flow through one module's resistance chain.
    pub module_heat_flow: Power,
    /// Electrical output of one module at its maximum power point.
    pub module: OperatingPoint,
    pub resistances: ResistanceChain,
    pub temperatures: TemperatureProfile,
    pub gross_power: Power,
    pub heat_input: Power,
    pub heat_rejected: Power,
    pub hot: SideFlow,
    pub cold: SideFlow,
    pub pressure_drops: PressureDrops,
    pub parasitics: ParasiticLoads,
    pub net_power: Power,
    /// Parasitic loads over gross output, zero when there is no output.
    pub parasitic_fraction: Ratio,
    /// Heat-flow iterations actually run.
    pub iterations: u32,
}

impl ModelResult {
    /// Whether either fluid used reference properties instead of a backend.
    #[must_use]
    pub fn used_fallback_properties(&self) -> bool {
        self.hot.fallback || self.cold.fallback
    }

    /// Array conversion efficiency, gross electrical over heat input.
    #[must_use]
    pub fn gross_efficiency(&self) -> Ratio {
        if self.heat_input.value > 0.0 {
            self.gross_power / self.heat_input
        } else {
            Ratio::new::<ratio>(0.0)
        }
    }
}

/// Series thermal resistances from hot fluid to cold fluid, per module.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResistanceChain {
    pub hot_convection: ThermalResistance,
    pub hot_interface: ThermalResistance,
    pub module: ThermalResistance,
    pub cold_interface: ThermalResistance,
    pub cold_convection: ThermalResistance,
}

impl ResistanceChain {
    #[must_use]
    pub fn total(&self) -> ThermalResistance {
        self.hot_convection
            + self.hot_interface
            + self.module
            + self.cold_interface
            + self.cold_convection
    }
}

/// Temperatures along the resistance chain, hot to cold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureProfile {
    pub hot_bulk: ThermodynamicTemperature,
    pub hot_surface: ThermodynamicTemperature,
    pub module_hot_face: ThermodynamicTemperature,
    pub module_cold_face: ThermodynamicTemperature,
    pub cold_surface: ThermodynamicTemperature,
    pub cold_bulk: ThermodynamicTemperature,
}

/// Flow conditions on one side of the array.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SideFlow {
    pub fluid: FluidKind,
    /// Properties evaluated at the side's bulk temperature.
    pub properties: TransportProperties,
    /// Whether `properties` is the fallback reference set.
    pub fallback: bool,
    /// Total flow through the array.
    pub volume_flow: VolumeRate,
    pub channel_velocity: Velocity,
    pub reynolds: f64,
    pub regime: FlowRegime,
    pub nusselt: f64,
    pub heat_transfer_coefficient: HeatTransfer,
}

/// Pressure drops along one tower loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureDrops {
    pub hot_channel: Pressure,
    pub hot_manifold: Pressure,
    pub hot_pipe: Pressure,
    pub cold: Pressure,
}

impl PressureDrops {
    #[must_use]
    pub fn hot(&self) -> Pressure {
        self.hot_channel + self.hot_manifold + self.hot_pipe
    }
}

/// Electrical loads that the array must supply itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParasiticLoads {
    pub hot_pump: Power,
    pub cold_pump: Power,
    pub fan: Power,
    pub electronics: Power,
}

impl ParasiticLoads {
    #[must_use]
    pub fn pumps(&self) -> Power {
        self.hot_pump + self.cold_pump
    }

    #[must_use]
    pub fn total(&self) -> Power {
        self.pumps() + self.fan + self.electronics
    }
}
