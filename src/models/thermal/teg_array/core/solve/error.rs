use thiserror::Error;

use crate::support::{constraint::ConstraintError, hx::GeometryError, teg::ModuleSpecError};

/// Errors that can occur while solving an array operating point.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// The configuration cannot describe a working array.
    ///
    /// Raised before any iteration, so no partial result exists.
    #[error("non-physical configuration: {reason}")]
    NonPhysicalConfiguration {
        #[from]
        reason: NonPhysical,
    },
}

/// Why a configuration was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NonPhysical {
    #[error("module count must be at least one")]
    NoModules,

    #[error("module specification: {0}")]
    Module(#[from] ModuleSpecError),

    #[error("heat exchanger geometry: {0}")]
    Geometry(#[from] GeometryError),

    #[error("{quantity}: {source}")]
    Invalid {
        quantity: &'static str,
        source: ConstraintError,
    },

    /// The hot bulk temperature does not exceed the cold bulk temperature.
    #[error("hot bulk {hot_bulk_c:.1} °C does not exceed cold bulk {cold_bulk_c:.1} °C")]
    NoDrivingDifference { hot_bulk_c: f64, cold_bulk_c: f64 },
}

impl NonPhysical {
    /// Returns a closure tagging a [`ConstraintError`] with the offending quantity.
    pub(crate) fn invalid(quantity: &'static str) -> impl Fn(ConstraintError) -> Self {
        move |source| Self::Invalid { quantity, source }
    }
}
