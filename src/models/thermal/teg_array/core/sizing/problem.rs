//! Equation problem mapping a trial module count to a net output residual.

use std::convert::Infallible;

use twine_core::EquationProblem;
use uom::si::{f64::Power, power::watt};

use crate::models::thermal::teg_array::core::{ModelResult, SystemConfig};

/// Net output target for a fixed base configuration.
///
/// The single unknown is the module count. Trial counts are rounded to a
/// whole number of boards, and the residual is `net − target` in watts.
pub(super) struct SizingProblem<'a> {
    base: &'a SystemConfig,
    target: Power,
}

impl<'a> SizingProblem<'a> {
    pub(super) fn new(base: &'a SystemConfig, target: Power) -> Self {
        Self { base, target }
    }

    /// Rounds a trial count to the nearest whole board.
    pub(super) fn module_count(&self, x: f64) -> u32 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let count = x.round().clamp(0.0, f64::from(u32::MAX)) as u32;
        self.base.layout.round_to_board(count)
    }
}

impl EquationProblem<1> for SizingProblem<'_> {
    type Input = SystemConfig;
    type Output = ModelResult;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(self.base.clone().with_module_count(self.module_count(x[0])))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([(output.net_power - self.target).get::<watt>()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::thermal::teg_array::core::test_support::baseline_config;

    #[test]
    fn trial_counts_land_on_boards() {
        let base = baseline_config();
        let problem = SizingProblem::new(&base, Power::new::<watt>(10_000.0));

        assert_eq!(problem.module_count(10.0), 36);
        assert_eq!(problem.module_count(25_005.0), 25_020);
        assert_eq!(problem.module_count(-4.0), 36);

        let input = problem.input(&[6_900.0]).unwrap();
        assert_eq!(input.module_count, 6_912);
        assert_eq!(input.module, base.module);
    }
}
