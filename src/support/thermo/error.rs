use thiserror::Error;

/// Errors that may occur when resolving fluid properties.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The fluid name does not match any supported fluid.
    #[error("unknown fluid kind: {name}")]
    UnknownFluidKind { name: String },

    /// No property backend could answer the request.
    ///
    /// This is recovered internally by falling back to reference properties.
    #[error("property backend unavailable: {context}")]
    BackendUnavailable { context: String },

    /// The property is undefined at the given state.
    #[error("undefined property: {context}")]
    Undefined { context: String },

    /// The input state is outside the model's valid domain.
    #[error("out of domain: {context}")]
    OutOfDomain { context: String },

    /// The provided state is invalid or inconsistent.
    #[error("invalid state: {context}")]
    InvalidState { context: String },

    /// The calculation failed due to a numerical or internal error.
    #[error("calculation error: {context}")]
    Calculation { context: String },
}
