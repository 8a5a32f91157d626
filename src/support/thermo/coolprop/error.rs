use std::sync::PoisonError;

use thiserror::Error;

use crate::support::thermo::PropertyError;

/// Errors returned by the [`CoolPropBackend`](super::CoolPropBackend).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CoolPropError {
    #[error(transparent)]
    Rfluids(#[from] rfluids::native::CoolPropError),
    #[error("CoolProp abstract state mutex poisoned")]
    Poisoned,
}

impl<T> From<PoisonError<T>> for CoolPropError {
    fn from(_: PoisonError<T>) -> Self {
        CoolPropError::Poisoned
    }
}

impl From<CoolPropError> for PropertyError {
    fn from(error: CoolPropError) -> Self {
        match error {
            CoolPropError::Rfluids(message) => classify(&message.to_string()),
            CoolPropError::Poisoned => PropertyError::Calculation {
                context: "CoolProp abstract state mutex poisoned".to_string(),
            },
        }
    }
}

/// Classifies an incompressible-backend message into a [`PropertyError`].
///
/// CoolProp reports failures as free text, so classification is by
/// substring. Mixture range violations are the common case for glycol.
fn classify(message: &str) -> PropertyError {
    const OUT_OF_DOMAIN: &[&str] = &[
        "out of range",
        "outside the range",
        "not in range",
        "must be between",
        "freezing",
    ];
    const UNDEFINED: &[&str] = &["not defined", "not implemented"];

    let lowered = message.to_lowercase();
    let context = message.to_string();

    if OUT_OF_DOMAIN.iter().any(|marker| lowered.contains(marker)) {
        PropertyError::OutOfDomain { context }
    } else if UNDEFINED.iter().any(|marker| lowered.contains(marker)) {
        PropertyError::Undefined { context }
    } else {
        PropertyError::Calculation { context }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_violation_is_out_of_domain() {
        let error = classify("Temperature to QT_flash [470 K] must be between 250 K and 375 K");
        assert!(matches!(error, PropertyError::OutOfDomain { .. }));
    }

    #[test]
    fn missing_output_is_undefined() {
        let error = classify("Output parameter is not implemented for this backend");
        assert!(matches!(error, PropertyError::Undefined { .. }));
    }

    #[test]
    fn anything_else_is_a_calculation_error() {
        let error = classify("unexpected failure");
        assert!(matches!(error, PropertyError::Calculation { .. }));
    }
}
