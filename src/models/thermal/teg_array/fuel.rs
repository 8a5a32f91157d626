//! Natural gas demand of a gas-fired array.
//!
//! A burner heats the hot loop. Its delivery efficiency covers combustion and
//! hot-pipe losses, so the fuel burned is the array's heat input divided by
//! that efficiency. Gas is metered in McF (one thousand cubic feet).

use std::fmt;

use thiserror::Error;
use uom::si::{
    f64::{Power, Ratio},
    power::kilowatt,
    ratio::{percent, ratio},
};

use crate::support::constraint::{
    Constrained, ConstraintError, UnitIntervalLowerOpen, UnitIntervalUpperOpen,
};

use super::{ModelResult, Sizing, SizingConfig, SizingError, SystemConfig, TegArray};

/// Heating value of one McF of natural gas, BTU.
pub const BTU_PER_MCF: f64 = 1_020_000.0;

/// Energy of one BTU, kWh (the reciprocal of 3412.14 BTU/kWh).
pub const KWH_PER_BTU: f64 = 0.000_293_071;

/// Thermal energy in one McF of natural gas, kWh.
pub const KWH_PER_MCF: f64 = BTU_PER_MCF * KWH_PER_BTU;

const HOURS_PER_DAY: f64 = 24.0;

/// Gas prices, USD per McF, used when none are given.
pub const REFERENCE_GAS_PRICES: [f64; 3] = [2.50, 4.00, 6.00];

/// A burner and the hot piping between it and the array.
///
/// Both fields are range-checked on construction, so every burner delivers
/// a nonzero share of its fuel energy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurnerSpec {
    /// Combustion efficiency.
    pub efficiency: Constrained<Ratio, UnitIntervalLowerOpen>,
    /// Fraction of burner output lost in hot piping.
    pub pipe_loss: Constrained<Ratio, UnitIntervalUpperOpen>,
}

impl Default for BurnerSpec {
    fn default() -> Self {
        Self {
            efficiency: Constrained::new_unchecked(Ratio::new::<percent>(88.0)),
            pipe_loss: Constrained::new_unchecked(Ratio::new::<percent>(5.0)),
        }
    }
}

impl BurnerSpec {
    /// Creates a burner from raw ratios.
    ///
    /// # Errors
    ///
    /// Returns a [`FuelError::Burner`] if `efficiency` is outside `(0, 1]` or
    /// `pipe_loss` is outside `[0, 1)`.
    pub fn new(efficiency: Ratio, pipe_loss: Ratio) -> Result<Self, FuelError> {
        Ok(Self {
            efficiency: UnitIntervalLowerOpen::new(efficiency)
                .map_err(FuelError::burner("efficiency"))?,
            pipe_loss: UnitIntervalUpperOpen::new(pipe_loss)
                .map_err(FuelError::burner("pipe_loss"))?,
        })
    }

    /// Fraction of fuel energy that reaches the hot loop.
    #[must_use]
    pub fn delivery_efficiency(&self) -> Ratio {
        self.efficiency.into_inner()
            * (Ratio::new::<ratio>(1.0) - self.pipe_loss.into_inner())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FuelError {
    #[error("invalid burner {quantity}")]
    Burner {
        quantity: &'static str,
        source: ConstraintError,
    },

    #[error("sizing failed")]
    Sizing(#[from] SizingError),
}

impl FuelError {
    fn burner(quantity: &'static str) -> impl Fn(ConstraintError) -> Self {
        move |source| Self::Burner { quantity, source }
    }
}

/// Fuel cost at one gas price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasCost {
    /// USD per McF.
    pub price_per_mcf: f64,
    /// USD per day of continuous operation.
    pub daily_cost: f64,
    /// USD per net kWh; infinite when the array has no net output.
    pub cost_per_kwh: f64,
}

/// Fuel burned to hold an array at its operating point.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelDemand {
    /// Chemical energy rate of the gas burned.
    pub fuel_power: Power,
    /// Heat delivered into the hot loop.
    pub heat_delivered: Power,
    pub mcf_per_day: f64,
    pub delivery_efficiency: Ratio,
    /// Net electrical output over fuel power.
    pub system_efficiency: Ratio,
    pub net_power: Power,
    pub costs: Vec<GasCost>,
}

/// Computes the fuel demand of a solved array.
#[must_use]
pub fn fuel_demand(result: &ModelResult, burner: &BurnerSpec, prices: &[f64]) -> FuelDemand {
    let delivery_efficiency = burner.delivery_efficiency();
    let heat_delivered = result.heat_input;
    let fuel_power = heat_delivered / delivery_efficiency;
    let mcf_per_day = fuel_power.get::<kilowatt>() * HOURS_PER_DAY / KWH_PER_MCF;

    let system_efficiency = if fuel_power.get::<kilowatt>() > 0.0 {
        result.net_power / fuel_power
    } else {
        Ratio::new::<ratio>(0.0)
    };

    let daily_kwh = result.net_power.get::<kilowatt>() * HOURS_PER_DAY;
    let costs = prices
        .iter()
        .map(|&price_per_mcf| {
            let daily_cost = mcf_per_day * price_per_mcf;
            GasCost {
                price_per_mcf,
                daily_cost,
                cost_per_kwh: if daily_kwh > 0.0 {
                    daily_cost / daily_kwh
                } else {
                    f64::INFINITY
                },
            }
        })
        .collect();

    FuelDemand {
        fuel_power,
        heat_delivered,
        mcf_per_day,
        delivery_efficiency,
        system_efficiency,
        net_power: result.net_power,
        costs,
    }
}

/// A sized array and the fuel it burns.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelPlan {
    pub sizing: Sizing,
    pub demand: FuelDemand,
}

/// Sizes an array for a net output target and computes its fuel demand.
///
/// # Errors
///
/// Returns a [`FuelError::Sizing`] if the sizing search fails.
pub fn fuel_for_target(
    array: &TegArray,
    base: &SystemConfig,
    target: Power,
    burner: &BurnerSpec,
    prices: &[f64],
) -> Result<FuelPlan, FuelError> {
    let sizing = array.size_for_target(base, target, SizingConfig::default())?;
    let demand = fuel_demand(&sizing.result, burner, prices);
    Ok(FuelPlan { sizing, demand })
}

impl fmt::Display for FuelDemand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Fuel")?;
        writeln!(f, "  Gas                  {:>10.2} McF/day", self.mcf_per_day)?;
        writeln!(f, "  Fuel power           {:>10.2} kW", self.fuel_power.get::<kilowatt>())?;
        writeln!(
            f,
            "  Delivered to loop    {:>10.2} kW ({:.1} %)",
            self.heat_delivered.get::<kilowatt>(),
            self.delivery_efficiency.get::<percent>()
        )?;
        write!(
            f,
            "  Fuel to net          {:>10.2} %",
            self.system_efficiency.get::<percent>()
        )?;
        for cost in &self.costs {
            write!(
                f,
                "\n  @ ${:.2}/McF         ${:>9.2}/day  ${:.4}/kWh",
                cost.price_per_mcf, cost.daily_cost, cost.cost_per_kwh
            )?;
        }
        Ok(())
    }
}
