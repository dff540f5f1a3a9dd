use std::collections::BTreeSet;

/// Error returned from [crate::RadProfBias] construction, mutation and evaluation
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ProfileBiasError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("profile parameter {parameter:?} is not one of the halo profile parameters {known:?}")]
    UnknownParameter {
        parameter: String,
        known: BTreeSet<String>,
    },

    #[error("interpolation method must be 'spline' or 'polynomial', got {0:?}")]
    InvalidOption(String),

    #[error("profile parameters may be passed as arrays or as a galaxy collection, but not both")]
    AmbiguousInput,

    #[error("neither profile parameter arrays nor a galaxy collection were passed")]
    MissingInput,

    #[error("parameter {parameter:?} has {anchors} anchors but {ordinates} ordinates")]
    ShapeMismatch {
        parameter: String,
        anchors: usize,
        ordinates: usize,
    },

    #[error("anchors of parameter {parameter:?} are invalid: {source}")]
    Anchors {
        parameter: String,
        source: AnchorsError,
    },

    #[error("ordinate {index} of parameter {parameter:?} is not a finite number")]
    NonFiniteOrdinate { parameter: String, index: usize },

    #[error("profile parameter {0:?} is requested more than once")]
    DuplicateParameter(String),

    #[error("{actual} input arrays were passed for {expected} profile parameters")]
    InputCountMismatch { expected: usize, actual: usize },

    #[error("profile parameter {0:?} is not modulated by this model")]
    UnmodulatedParameter(String),

    #[error("galaxy collection has no {0:?} property")]
    MissingGalaxyProperty(String),

    #[error(
        "galaxy collection has length {expected}, but property {property:?} has length {actual}"
    )]
    PropertyLengthMismatch {
        property: String,
        expected: usize,
        actual: usize,
    },

    #[error("model is applied to {expected:?} galaxies, got {actual:?} galaxies")]
    GalaxyTypeMismatch { expected: String, actual: String },

    #[error("{0:?} is not a valid bias function parameter key for this model")]
    InvalidParamKey(String),

    #[error("ordinates of parameter {0:?} changed since its interpolator was built")]
    StaleInterpolator(String),

    #[error("spline collocation system of parameter {0:?} is singular")]
    SingularSystem(String),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AnchorsError {
    #[error("at least one anchor is required")]
    Empty,

    #[error("anchors must be finite numbers")]
    NonFinite,

    #[error("anchors must be strictly increasing")]
    NotStrictlyIncreasing,
}
