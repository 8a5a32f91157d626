//! Internal-flow convection correlations.
//!
//! Laminar channels use the fully developed constant-wall-temperature value.
//! Turbulent channels use Dittus-Boelter. Between the two, the Nusselt number
//! is blended linearly in Reynolds number so the correlation has no jumps.

/// Reynolds number below which flow is treated as laminar.
pub const LAMINAR_LIMIT: f64 = 2300.0;

/// Reynolds number at and above which flow is treated as fully turbulent.
pub const TURBULENT_ONSET: f64 = 6000.0;

/// Fully developed laminar Nusselt number at constant wall temperature.
pub const LAMINAR_NUSSELT: f64 = 3.66;

/// Flow regime of an internal flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowRegime {
    Laminar,
    Transitional,
    Turbulent,
}

impl FlowRegime {
    /// Classifies a flow by its Reynolds number.
    #[must_use]
    pub fn from_reynolds(reynolds: f64) -> Self {
        if reynolds < LAMINAR_LIMIT {
            Self::Laminar
        } else if reynolds < TURBULENT_ONSET {
            Self::Transitional
        } else {
            Self::Turbulent
        }
    }
}

/// Direction of heat flow relative to the fluid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatFlowDirection {
    /// The wall heats the fluid (cold-side plate).
    Heating,
    /// The fluid heats the wall (hot-side plate).
    Cooling,
}

impl HeatFlowDirection {
    /// Dittus-Boelter Prandtl exponent.
    fn prandtl_exponent(self) -> f64 {
        match self {
            Self::Heating => 0.4,
            Self::Cooling => 0.3,
        }
    }
}

/// Returns the Nusselt number for channel flow.
///
/// - Laminar (`Re < 2300`): 3.66.
/// - Transitional: `3.66 + φ·(Nu_t(Re) − 3.66)` with `φ = (Re − 2300) / 3700`.
/// - Turbulent (`Re ≥ 6000`): `Nu_t = 0.023·Re^0.8·Pr^n`.
#[must_use]
pub fn nusselt(reynolds: f64, prandtl: f64, direction: HeatFlowDirection) -> f64 {
    match FlowRegime::from_reynolds(reynolds) {
        FlowRegime::Laminar => LAMINAR_NUSSELT,
        FlowRegime::Transitional => {
            let blend = (reynolds - LAMINAR_LIMIT) / (TURBULENT_ONSET - LAMINAR_LIMIT);
            LAMINAR_NUSSELT + blend * (dittus_boelter(reynolds, prandtl, direction) - LAMINAR_NUSSELT)
        }
        FlowRegime::Turbulent => dittus_boelter(reynolds, prandtl, direction),
    }
}

fn dittus_boelter(reynolds: f64, prandtl: f64, direction: HeatFlowDirection) -> f64 {
    0.023 * reynolds.powf(0.8) * prandtl.powf(direction.prandtl_exponent())
}
