//! Plain-text summary of a solved array.

use std::fmt;

use uom::si::{
    heat_transfer::watt_per_square_meter_kelvin,
    power::{kilowatt, watt},
    pressure::pascal,
    ratio::percent,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
    velocity::meter_per_second,
    volume_rate::gallon_per_minute,
};

use super::{ModelResult, SideFlow};

impl fmt::Display for ModelResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let module = &self.module;
        writeln!(f, "Module performance ({} modules)", self.module_count)?;
        writeln!(f, "  ΔT across module     {:>10.2} K", self.module_delta_t.get::<delta_kelvin>())?;
        writeln!(f, "  Heat flow            {:>10.2} W", self.module_heat_flow.get::<watt>())?;
        writeln!(f, "  Power                {:>10.3} W", module.power.get::<watt>())?;
        writeln!(f, "  Voltage              {:>10.3} V", module.voltage.value)?;
        writeln!(f, "  Current              {:>10.3} A", module.current.value)?;
        writeln!(f, "  Efficiency           {:>10.2} %", module.efficiency.get::<percent>())?;

        let t = &self.temperatures;
        writeln!(f, "Temperature profile")?;
        for (label, temperature) in [
            ("Hot bulk", t.hot_bulk),
            ("Hot surface", t.hot_surface),
            ("Module hot face", t.module_hot_face),
            ("Module cold face", t.module_cold_face),
            ("Cold surface", t.cold_surface),
            ("Cold bulk", t.cold_bulk),
        ] {
            writeln!(f, "  {label:<20} {:>10.2} °C", temperature.get::<degree_celsius>())?;
        }

        let r = &self.resistances;
        writeln!(f, "Resistance chain")?;
        for (label, resistance) in [
            ("Hot convection", r.hot_convection),
            ("Hot TIM", r.hot_interface),
            ("Module", r.module),
            ("Cold TIM", r.cold_interface),
            ("Cold convection", r.cold_convection),
            ("Total", r.total()),
        ] {
            writeln!(f, "  {label:<20} {:>10.4} K/W", resistance.value)?;
        }

        write_side(f, "Hot loop", &self.hot)?;
        write_side(f, "Cold loop", &self.cold)?;

        let dp = &self.pressure_drops;
        writeln!(f, "Pressure drops (per tower loop)")?;
        writeln!(f, "  Hot channel          {:>10.1} Pa", dp.hot_channel.get::<pascal>())?;
        writeln!(f, "  Hot manifold         {:>10.1} Pa", dp.hot_manifold.get::<pascal>())?;
        writeln!(f, "  Hot pipe             {:>10.1} Pa", dp.hot_pipe.get::<pascal>())?;
        writeln!(f, "  Hot total            {:>10.1} Pa", dp.hot().get::<pascal>())?;
        writeln!(f, "  Cold total           {:>10.1} Pa", dp.cold.get::<pascal>())?;

        let p = &self.parasitics;
        writeln!(f, "Totals")?;
        writeln!(f, "  Heat input           {:>10.2} kW", self.heat_input.get::<kilowatt>())?;
        writeln!(f, "  Heat rejected        {:>10.2} kW", self.heat_rejected.get::<kilowatt>())?;
        writeln!(f, "  Gross electrical     {:>10.3} kW", self.gross_power.get::<kilowatt>())?;
        writeln!(f, "  Pumps                {:>10.3} kW", p.pumps().get::<kilowatt>())?;
        writeln!(f, "  Fans                 {:>10.3} kW", p.fan.get::<kilowatt>())?;
        writeln!(f, "  Electronics          {:>10.3} kW", p.electronics.get::<kilowatt>())?;
        writeln!(f, "  Net electrical       {:>10.3} kW", self.net_power.get::<kilowatt>())?;
        write!(
            f,
            "  Parasitic fraction   {:>10.1} %",
            self.parasitic_fraction.get::<percent>()
        )?;

        if self.used_fallback_properties() {
            write!(f, "\n  (reference glycol properties used)")?;
        }
        Ok(())
    }
}

fn write_side(f: &mut fmt::Formatter<'_>, title: &str, side: &SideFlow) -> fmt::Result {
    writeln!(f, "{title}: {}", side.fluid)?;
    writeln!(f, "  Flow                 {:>10.2} gpm", side.volume_flow.get::<gallon_per_minute>())?;
    writeln!(
        f,
        "  Channel velocity     {:>10.4} m/s",
        side.channel_velocity.get::<meter_per_second>()
    )?;
    writeln!(f, "  Reynolds             {:>10.1} ({:?})", side.reynolds, side.regime)?;
    writeln!(f, "  Nusselt              {:>10.2}", side.nusselt)?;
    writeln!(
        f,
        "  h                    {:>10.1} W/m²·K",
        side.heat_transfer_coefficient.get::<watt_per_square_meter_kelvin>()
    )
}

#[cfg(test)]
mod tests {
    use crate::{
        models::thermal::teg_array::{TegArray, core::test_support::baseline_config},
        support::thermo::FluidProperties,
    };

    #[test]
    fn summary_lists_every_section() {
        let result = TegArray::new(FluidProperties::new())
            .solve(&baseline_config())
            .unwrap();

        let text = result.to_string();

        for heading in [
            "Module performance (1620 modules)",
            "Temperature profile",
            "Resistance chain",
            "Hot loop: Water/Glycol 50/50",
            "Cold loop",
            "Pressure drops",
            "Net electrical",
            "reference glycol properties",
        ] {
            assert!(text.contains(heading), "missing {heading:?}");
        }
    }
}
