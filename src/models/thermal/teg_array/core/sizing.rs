//! Module-count search for a net electrical output target.
//!
//! The search bisects on an integer module count, rounding every trial to a
//! whole number of boards. It assumes net output never decreases as modules
//! are added. When that holds, the result is the smallest board multiple in
//! range that meets the target. When it does not, the search still ends
//! after a fixed number of trials and reports the count it lands on.

mod error;
mod problem;

pub use error::SizingError;

use tracing::debug;
use twine_core::{EquationProblem, Model};
use uom::si::{f64::Power, power::watt};

use super::{ModelResult, SolveError, SystemConfig};

use problem::SizingProblem;

/// Search bounds and trial budget for [`size_for_target`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizingConfig {
    pub min_modules: u32,
    pub max_modules: u32,
    /// Bisection steps, each of which runs one solve.
    pub iterations: u32,
}

impl Default for SizingConfig {
    fn default() -> Self {
        Self {
            min_modules: 10,
            max_modules: 50_000,
            iterations: 30,
        }
    }
}

/// The outcome of a sizing search.
#[derive(Debug, Clone, PartialEq)]
pub struct Sizing {
    pub target: Power,
    pub module_count: u32,
    /// Whether the chosen count meets the target.
    pub met_target: bool,
    pub result: ModelResult,
}

/// Finds the module count whose net output meets `target`.
///
/// Every setting other than the module count comes from `base`.
///
/// # Errors
///
/// Returns a [`SizingError`] if the bounds are inverted or a trial solve
/// fails, which happens when `base` is non-physical for reasons other than
/// its module count.
pub(crate) fn size_for_target<M>(
    model: &M,
    base: &SystemConfig,
    target: Power,
    config: SizingConfig,
) -> Result<Sizing, SizingError>
where
    M: Model<Input = SystemConfig, Output = ModelResult, Error = SolveError>,
{
    if config.min_modules > config.max_modules {
        return Err(SizingError::InvalidBounds {
            min_modules: config.min_modules,
            max_modules: config.max_modules,
        });
    }

    let problem = SizingProblem::new(base, target);

    let mut lo = u64::from(config.min_modules);
    let mut hi = u64::from(config.max_modules);
    let mut best = None;

    for _ in 0..config.iterations {
        let mid = (lo + hi) / 2;
        #[allow(clippy::cast_precision_loss)]
        let input = problem.input(&[mid as f64])?;
        let output = model.call(&input)?;
        let [residual] = problem.residuals(&input, &output)?;

        debug!(
            trial = input.module_count,
            net_w = output.net_power.get::<watt>(),
            "sizing trial"
        );

        if residual < 0.0 {
            lo = mid + 1;
        } else {
            hi = mid;
            best = Some(output);
        }
    }

    let result = match best {
        Some(result) => result,
        #[allow(clippy::cast_precision_loss)]
        None => model.call(&problem.input(&[hi as f64])?)?,
    };

    Ok(Sizing {
        target,
        module_count: result.module_count,
        met_target: result.net_power >= target,
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;

    use uom::si::{f64::TemperatureInterval, temperature_interval::kelvin};

    use crate::{
        models::thermal::teg_array::{TegArray, core::test_support::baseline_config},
        support::thermo::FluidProperties,
    };

    fn kilowatts(value: f64) -> Power {
        Power::new::<watt>(value * 1000.0)
    }

    /// Counts the solves a search performs.
    struct Counting {
        inner: TegArray,
        calls: Cell<u32>,
    }

    impl Model for Counting {
        type Input = SystemConfig;
        type Output = ModelResult;
        type Error = SolveError;

        fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
            self.calls.set(self.calls.get() + 1);
            self.inner.call(input)
        }
    }

    #[test]
    fn ten_kilowatts_of_bismuth_telluride() {
        let model = TegArray::new(FluidProperties::new());
        let base = baseline_config();

        let sizing =
            size_for_target(&model, &base, kilowatts(10.0), SizingConfig::default()).unwrap();

        assert_eq!(sizing.module_count, 6_912);
        assert_eq!(sizing.module_count % 36, 0);
        assert!(sizing.met_target);
        assert!(sizing.result.net_power >= kilowatts(10.0));

        let fewer = model
            .call(&base.with_module_count(sizing.module_count - 36))
            .unwrap();
        assert!(fewer.net_power < kilowatts(10.0));
    }

    #[test]
    fn tiny_target_is_one_board() {
        let model = TegArray::new(FluidProperties::new());

        let sizing = size_for_target(
            &model,
            &baseline_config(),
            Power::new::<watt>(1.0),
            SizingConfig::default(),
        )
        .unwrap();

        assert_eq!(sizing.module_count, 36);
        assert!(sizing.met_target);
    }

    #[test]
    fn unreachable_target_reports_upper_bound() {
        let model = Counting {
            inner: TegArray::new(FluidProperties::new()),
            calls: Cell::new(0),
        };

        let sizing = size_for_target(
            &model,
            &baseline_config(),
            kilowatts(1.0e6),
            SizingConfig::default(),
        )
        .unwrap();

        assert!(!sizing.met_target);
        assert_eq!(sizing.module_count, 50_004);
        assert_eq!(model.calls.get(), 31);
    }

    #[test]
    fn met_target_runs_fixed_trials() {
        let model = Counting {
            inner: TegArray::new(FluidProperties::new()),
            calls: Cell::new(0),
        };

        size_for_target(
            &model,
            &baseline_config(),
            kilowatts(10.0),
            SizingConfig::default(),
        )
        .unwrap();

        assert_eq!(model.calls.get(), 30);
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let model = TegArray::new(FluidProperties::new());
        let config = SizingConfig {
            min_modules: 100,
            max_modules: 10,
            iterations: 30,
        };

        assert_eq!(
            size_for_target(&model, &baseline_config(), kilowatts(10.0), config),
            Err(SizingError::InvalidBounds {
                min_modules: 100,
                max_modules: 10,
            })
        );
    }

    #[test]
    fn non_physical_base_fails() {
        let model = TegArray::new(FluidProperties::new());
        let base =
            baseline_config().with_fluid_delta_t(TemperatureInterval::new::<kelvin>(-1.0));

        assert!(matches!(
            size_for_target(&model, &base, kilowatts(10.0), SizingConfig::default()),
            Err(SizingError::Solve(SolveError::NonPhysicalConfiguration { .. }))
        ));
    }
}
