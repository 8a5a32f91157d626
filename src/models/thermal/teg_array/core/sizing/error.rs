use std::convert::Infallible;

use thiserror::Error;

use crate::models::thermal::teg_array::core::SolveError;

/// Errors that can occur while sizing an array for a net output target.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SizingError {
    /// A trial solve failed.
    #[error("trial solve failed")]
    Solve(#[from] SolveError),

    /// The lower search bound exceeds the upper bound.
    #[error("invalid search bounds: {min_modules} > {max_modules}")]
    InvalidBounds { min_modules: u32, max_modules: u32 },
}

impl From<Infallible> for SizingError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
